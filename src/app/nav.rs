use leptos::prelude::*;

use super::{
    hooks::{scroll_to, use_active_section},
    use_settings,
};
use crate::site::section_ids;

#[component]
pub fn NavBar() -> impl IntoView {
    let settings = use_settings();
    let sections = section_ids();
    let active = use_active_section(sections.clone());

    let bar_class = move || {
        let tone = settings
            .theme
            .get()
            .pick("bg-black/50 border-white/10", "bg-white/70 border-black/10");
        format!("fixed top-0 left-0 right-0 z-50 border-b backdrop-blur-md max-md:backdrop-blur-0 {tone}")
    };
    let toggle_class = move || {
        let tone = settings.theme.get().pick(
            "border-white/10 bg-white/5 hover:bg-white/10",
            "border-black/10 bg-black/5 hover:bg-black/10",
        );
        format!("h-9 w-9 grid place-items-center rounded-xl border transition text-xs {tone}")
    };

    let links = sections
        .into_iter()
        .map(|id| {
            let is_active = {
                let id = id.clone();
                move || active.with(|a| *a == id)
            };
            let label = {
                let id = id.clone();
                move || settings.texts().nav_label(&id)
            };
            let link_class = {
                let is_active = is_active.clone();
                move || {
                    let theme = settings.theme.get();
                    if is_active() {
                        theme.pick("text-white", "text-black")
                    } else {
                        theme.pick("text-white/60 hover:text-white", "text-black/55 hover:text-black")
                    }
                }
            };
            let chip_class = move || {
                let chip = if is_active() {
                    settings.theme.get().pick("bg-white/10", "bg-black/5")
                } else {
                    ""
                };
                format!("px-2 py-1 rounded-lg {chip}")
            };
            view! {
                <button class=link_class on:click=move |_| scroll_to(id.as_str())>
                    <span class=chip_class>{label}</span>
                </button>
            }
        })
        .collect_view();

    view! {
        <div class=bar_class>
            <div class="mx-auto max-w-6xl px-5 py-3 flex items-center justify-between">
                <button on:click=move |_| scroll_to("home") class="text-sm font-semibold tracking-wide">
                    "AndroidDev"
                </button>
                <nav class="hidden md:flex items-center gap-5 text-sm">{links}</nav>
                <div class="flex items-center gap-2">
                    <button
                        on:click=move |_| settings.toggle_lang()
                        class=toggle_class
                        aria-label="Toggle language"
                    >
                        {move || settings.lang.get().toggle().code().to_uppercase()}
                    </button>
                    <button
                        on:click=move |_| settings.toggle_theme()
                        class=toggle_class
                        aria-label="Toggle theme"
                    >
                        {move || if settings.theme.get().is_dark() { "☀" } else { "☾" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
