use leptos::prelude::*;

use super::{
    ui::{Card, Pill, RevealOnView, SectionTitle},
    use_settings,
};
use crate::{motion::RevealKind, site::PROFILE};

#[component]
pub fn About() -> impl IntoView {
    let settings = use_settings();
    let texts = move || &settings.texts().about;

    let focus = move || {
        texts()
            .focus
            .iter()
            .map(|f| view! { <Pill text=*f /> })
            .collect_view()
    };
    let cards = move || {
        texts()
            .cards
            .iter()
            .map(|(title, body)| {
                view! {
                    <div class=move || {
                        format!(
                            "rounded-xl border p-4 {}",
                            settings.theme.get().pick("border-white/10", "border-black/10"),
                        )
                    }>
                        <p class="text-sm font-semibold">{*title}</p>
                        <p class=move || format!("mt-1 text-xs {}", settings.muted())>{*body}</p>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <section id="about" class="py-20 scroll-mt-24">
            <RevealOnView>
                <SectionTitle
                    title=Signal::derive(move || texts().title)
                    subtitle=Signal::derive(move || texts().subtitle)
                />
            </RevealOnView>
            <div class="flex flex-wrap justify-center gap-2 mb-8">{focus}</div>
            <div class="grid gap-6 md:grid-cols-2">
                <RevealOnView kind=RevealKind::FlipX>
                    <Card class="p-6 h-full" hover_lift=true>
                        <p class=move || {
                            format!("text-sm leading-relaxed {}", settings.muted())
                        }>{move || texts().summary}</p>
                        <div class="mt-6 grid grid-cols-2 gap-3">{cards}</div>
                    </Card>
                </RevealOnView>
                <RevealOnView kind=RevealKind::FlipY delay_ms=120>
                    <Card class="p-6 h-full" hover_lift=true>
                        <h3 class="text-lg font-semibold">{move || texts().journey_title}</h3>
                        <p class=move || {
                            format!("mt-3 text-sm leading-relaxed {}", settings.muted())
                        }>{move || texts().journey_text}</p>
                        <ul class=move || format!("mt-6 space-y-2 text-sm {}", settings.muted())>
                            <li>"📍 " {PROFILE.location}</li>
                            <li>"✉ " {PROFILE.email}</li>
                            <li>"☎ " {PROFILE.phone}</li>
                        </ul>
                    </Card>
                </RevealOnView>
            </div>
        </section>
    }
}
