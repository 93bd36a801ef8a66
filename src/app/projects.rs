use leptos::prelude::*;

use super::{
    hooks::scroll_to,
    ui::{button_class, Card, LinkButton, Pill, RevealOnView, SectionTitle},
    use_settings,
};
use crate::{
    motion::RevealKind,
    site::{projects, Lang, Project},
};

const CARD_STAGGER_MS: u32 = 120;

#[component]
fn ProjectCard(index: usize) -> impl IntoView {
    let settings = use_settings();
    // Layout and links are the same in every language, only the copy changes.
    let base = projects(Lang::En).swap_remove(index);
    let localized = move || -> Project { projects(settings.lang.get()).swap_remove(index) };

    let features = (0..base.features.len())
        .map(|i| {
            view! {
                <li class="flex items-start gap-2">
                    <span class=move || settings.theme.get().pick("text-white/60", "text-black/50")>"•"</span>
                    <span>{move || localized().features[i]}</span>
                </li>
            }
        })
        .collect_view();
    let tech = base.tech.iter().map(|t| view! { <Pill text=*t /> }).collect_view();
    let action = match base.link {
        Some(link) => view! {
            <LinkButton href=link.to_string()>
                {move || settings.texts().projects.view_github}
            </LinkButton>
        }
        .into_any(),
        None => view! {
            <button
                class=move || {
                    button_class(settings.theme.get().is_dark(), false, settings.motion.get().is_full())
                }
                on:click=move |_| scroll_to("contact")
            >
                "✉ "
                {move || settings.texts().projects.ask_details}
            </button>
        }
        .into_any(),
    };
    let delay = u32::try_from(index).unwrap_or(0).saturating_mul(CARD_STAGGER_MS);

    view! {
        <RevealOnView kind=RevealKind::FlipY delay_ms=delay class="[transform-style:preserve-3d]">
            <Card class="p-6 h-full" hover_lift=true>
                <div class="flex items-center justify-between gap-3">
                    <h3 class="text-lg font-semibold tracking-tight">{base.title}</h3>
                    <span class=move || {
                        format!(
                            "text-[11px] rounded-full px-2.5 py-1 border {}",
                            settings.theme.get().pick(
                                "border-white/10 bg-white/5 text-white/80",
                                "border-black/10 bg-black/5 text-black/70",
                            ),
                        )
                    }>{base.status.label()}</span>
                </div>
                <p class=move || {
                    format!("mt-2 text-sm leading-relaxed {}", settings.muted())
                }>{move || localized().description}</p>
                <div class="mt-4">
                    <div class=move || {
                        format!("text-[11px] uppercase tracking-[0.18em] {}", settings.muted())
                    }>{move || settings.texts().projects.features}</div>
                    <ul class=move || format!("mt-2 text-sm {}", settings.muted())>{features}</ul>
                </div>
                <div class="mt-4 flex flex-wrap gap-2">{tech}</div>
                <div class="mt-6">{action}</div>
            </Card>
        </RevealOnView>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    let settings = use_settings();
    let texts = move || &settings.texts().projects;
    let cards = (0..projects(Lang::En).len())
        .map(|index| view! { <ProjectCard index /> })
        .collect_view();

    view! {
        <section id="projects" class="py-20 scroll-mt-24">
            <RevealOnView>
                <SectionTitle
                    title=Signal::derive(move || texts().title)
                    subtitle=Signal::derive(move || texts().subtitle)
                />
            </RevealOnView>
            <div class="grid md:grid-cols-2 gap-6 [perspective:1400px]">{cards}</div>
        </section>
    }
}
