use leptos::prelude::*;

use super::{
    hooks::scroll_to,
    ui::{button_class, LinkButton, RevealOnView},
    use_settings,
};
use crate::{motion::stagger_delay, site::PROFILE};

const HERO_STAGGER_MS: u32 = 140;

#[component]
pub fn Hero() -> impl IntoView {
    let settings = use_settings();
    let delay = move |i: usize| stagger_delay(settings.motion.get_untracked(), i, HERO_STAGGER_MS);
    let primary = move || {
        button_class(
            settings.theme.get().is_dark(),
            true,
            settings.motion.get().is_full(),
        )
    };
    let bounce = move || {
        if settings.motion.get().is_full() {
            "inline-flex animate-bounce"
        } else {
            "inline-flex"
        }
    };
    let mailto = format!("mailto:{}", PROFILE.email);

    view! {
        <section id="home" class="min-h-[78vh] grid place-items-center">
            <div class="text-center max-w-3xl">
                <RevealOnView delay_ms=delay(0) amount=0.0>
                    <p class=move || {
                        format!("text-xs uppercase tracking-[0.25em] {}", settings.muted())
                    }>{move || settings.texts().hero.title}</p>
                </RevealOnView>
                <RevealOnView delay_ms=delay(1) amount=0.0>
                    <h1 class="mt-3 text-4xl md:text-6xl font-semibold tracking-tight">
                        {PROFILE.name}
                    </h1>
                </RevealOnView>
                <RevealOnView delay_ms=delay(2) amount=0.0>
                    <p class=move || {
                        format!("mt-5 text-sm md:text-base leading-relaxed {}", settings.muted())
                    }>{move || settings.texts().hero.headline}</p>
                </RevealOnView>
                <RevealOnView
                    delay_ms=delay(3)
                    amount=0.0
                    class="mt-8 flex flex-wrap items-center justify-center gap-3"
                >
                    <button class=move || format!("{} min-w-[160px]", primary()) on:click=move |_| scroll_to("projects")>
                        {move || settings.texts().hero.view_work}
                        <span aria-hidden="true" class=bounce>"↓"</span>
                    </button>
                    <LinkButton href=PROFILE.github.to_string()>"GitHub"</LinkButton>
                    <LinkButton href=PROFILE.linkedin.to_string()>"LinkedIn"</LinkButton>
                    <LinkButton href=mailto>
                        "✉ " {move || settings.texts().hero.contact}
                    </LinkButton>
                </RevealOnView>
            </div>
        </section>
    }
}
