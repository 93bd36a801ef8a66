use leptos::{html, prelude::*};

use super::{hooks::use_in_view_once, use_settings};
use crate::motion::RevealKind;

#[component]
pub fn SectionTitle(
    #[prop(into)] title: Signal<&'static str>,
    #[prop(into)] subtitle: Signal<&'static str>,
) -> impl IntoView {
    let settings = use_settings();
    view! {
        <div class="text-center mb-10">
            <h2 class="text-3xl md:text-4xl font-semibold tracking-tight">{move || title.get()}</h2>
            <p class=move || {
                format!("mt-3 text-sm md:text-base max-w-2xl mx-auto {}", settings.muted())
            }>{move || subtitle.get()}</p>
        </div>
    }
}

#[component]
pub fn Pill(#[prop(into)] text: String) -> impl IntoView {
    let settings = use_settings();
    let class = move || {
        let tone = settings.theme.get().pick(
            "border-white/10 bg-white/5 text-white/80 hover:bg-white hover:text-black hover:border-white/30",
            "border-black/10 bg-black/5 text-black/70 hover:bg-black hover:text-white hover:border-black/30",
        );
        format!("inline-flex items-center rounded-full border px-3 py-1 text-xs transition {tone}")
    };
    view! { <span class=class>{text}</span> }
}

#[component]
pub fn Card(
    children: Children,
    #[prop(optional, into)] class: String,
    #[prop(optional)] hover_lift: bool,
) -> impl IntoView {
    let settings = use_settings();
    let class = move || {
        let tone = settings.theme.get().pick(
            "bg-white/5 hover:shadow-[0_18px_60px_rgba(255,255,255,0.10)]",
            "bg-black/[0.04] hover:shadow-[0_18px_60px_rgba(0,0,0,0.10)]",
        );
        let lift = if hover_lift && settings.motion.get().is_full() {
            "hover:-translate-y-[3px]"
        } else {
            ""
        };
        format!(
            "rounded-2xl backdrop-blur-md transition duration-300 shadow-[0_10px_40px_rgba(0,0,0,.35)] max-md:backdrop-blur-0 max-md:shadow-[0_8px_24px_rgba(0,0,0,.12)] {tone} {lift} {class}"
        )
    };
    view! { <div class=class>{children()}</div> }
}

/// Classes of a primary or outline action.
pub fn button_class(dark: bool, primary: bool, lift: bool) -> String {
    let style = match (primary, dark) {
        (true, true) => "bg-white text-black hover:bg-white/90",
        (true, false) => "bg-black text-white hover:bg-black/90",
        (false, true) => "border border-white/15 bg-white/5 text-white hover:bg-white/10",
        (false, false) => "border border-black/15 bg-black/5 text-black hover:bg-black/10",
    };
    let lift = if lift { "hover:-translate-y-[3px]" } else { "" };
    format!(
        "inline-flex items-center justify-center gap-2 rounded-xl px-4 py-2 text-sm font-medium transition active:scale-[0.98] {style} {lift}"
    )
}

/// An outline link that opens in a new tab when it leaves the page.
#[component]
pub fn LinkButton(href: String, children: Children) -> impl IntoView {
    let settings = use_settings();
    let external = href.starts_with("http://") || href.starts_with("https://");
    let class = move || {
        button_class(
            settings.theme.get().is_dark(),
            false,
            settings.motion.get().is_full(),
        )
    };
    view! {
        <a
            href=href
            class=class
            target=external.then_some("_blank")
            rel=external.then_some("noreferrer")
        >
            {children()}
        </a>
    }
}

/// Wraps content that animates in the first time it scrolls into view.
#[component]
pub fn RevealOnView(
    children: Children,
    #[prop(optional)] kind: RevealKind,
    #[prop(optional)] delay_ms: u32,
    #[prop(default = 0.25)] amount: f64,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let settings = use_settings();
    let node_ref = NodeRef::<html::Div>::new();
    let seen = use_in_view_once(node_ref, amount);
    let style = move || kind.reveal(settings.motion.get(), delay_ms).style(seen.get());
    view! {
        <div node_ref=node_ref class=class style=style>
            {children()}
        </div>
    }
}
