use leptos::{either::Either, ev::SubmitEvent, prelude::*};

use super::{
    ui::{button_class, Card, RevealOnView, SectionTitle},
    use_settings,
};
use crate::{
    contact::{ContactForm, Field},
    motion::{RevealKind, Side},
    site::PROFILE,
};

#[component]
pub fn Contact() -> impl IntoView {
    let settings = use_settings();
    let texts = move || &settings.texts().contact;

    view! {
        <section id="contact" class="py-20 scroll-mt-24">
            <RevealOnView>
                <SectionTitle
                    title=Signal::derive(move || texts().title)
                    subtitle=Signal::derive(move || texts().subtitle)
                />
            </RevealOnView>
            <div class="grid lg:grid-cols-2 gap-6 [perspective:1200px]">
                <RevealOnView kind=RevealKind::Slide(Side::Left)>
                    <ContactLinks />
                </RevealOnView>
                <RevealOnView kind=RevealKind::FlipX delay_ms=120>
                    <ContactFormCard />
                </RevealOnView>
            </div>
        </section>
    }
}

#[component]
fn ContactLinks() -> impl IntoView {
    let settings = use_settings();
    let links = [
        (PROFILE.email, format!("mailto:{}", PROFILE.email), false),
        ("GitHub", PROFILE.github.to_string(), true),
        ("LinkedIn", PROFILE.linkedin.to_string(), true),
    ];
    let row_class = move || {
        format!(
            "flex items-center justify-between rounded-xl border p-4 transition {}",
            settings.theme.get().pick(
                "border-white/10 bg-black/30 hover:bg-white/5",
                "border-black/10 bg-white hover:bg-black/5",
            ),
        )
    };
    let rows = links
        .into_iter()
        .enumerate()
        .map(|(i, (label, href, external))| {
            let arrow_style = move || {
                if settings.motion.get().is_full() {
                    format!("animation: nudge 0.9s ease-in-out {}ms infinite;", i * 120)
                } else {
                    String::new()
                }
            };
            view! {
                <a
                    href=href
                    class=row_class
                    target=external.then_some("_blank")
                    rel=external.then_some("noreferrer")
                >
                    <span class=move || format!("text-sm {}", settings.muted())>{label}</span>
                    <span class=move || format!("inline-block {}", settings.muted()) style=arrow_style>
                        "→"
                    </span>
                </a>
            }
        })
        .collect_view();

    view! {
        <Card class="p-6" hover_lift=true>
            <div class="text-sm font-medium">{move || settings.texts().contact.get_in_touch}</div>
            <div class="mt-5 grid gap-3">{rows}</div>
            <div class=move || format!("mt-6 text-xs {}", settings.muted())>
                {move || settings.texts().contact.phone_label} ": " {PROFILE.phone}
            </div>
        </Card>
    }
}

#[component]
fn ContactFormCard() -> impl IntoView {
    let settings = use_settings();
    let form = RwSignal::new(ContactForm::new());
    let texts = move || &settings.texts().contact;

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let lang = settings.lang.get_untracked();
        let Some(message) = form.try_update(|f| f.begin_submit(lang)).flatten() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::contact::send_contact(&message).await;
            form.update(|f| f.settle(outcome, lang));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = message;
    };

    let input_class = move |field: Field| {
        let invalid = form.with(|f| f.error(field).is_some());
        let tone = match (settings.theme.get().is_dark(), invalid) {
            (true, false) => "border-white/10 bg-black/30 placeholder:text-white/40 focus:border-white/30",
            (false, false) => "border-black/10 bg-white placeholder:text-black/40 focus:border-black/30",
            (_, true) => "border-red-500/60 bg-transparent",
        };
        format!("w-full rounded-xl border px-4 py-3 text-sm outline-none transition {tone}")
    };
    let error_text = move |field: Field| {
        form.with(|f| f.error(field).map(str::to_string)).map(|e| {
            view! { <p class="mt-1 text-xs text-red-500">{e}</p> }
        })
    };
    let banner = move || {
        form.with(|f| {
            f.banner(settings.lang.get()).map(|b| match b {
                Ok(sent) => Either::Left(view! {
                    <p class="text-sm text-emerald-500" role="status">{sent}</p>
                }),
                Err(detail) => Either::Right(view! {
                    <p class="text-sm text-red-500" role="alert">{detail.to_string()}</p>
                }),
            })
        })
    };
    let sending = move || form.with(ContactForm::is_sending);

    view! {
        <Card class="p-6" hover_lift=true>
            <div class="text-sm font-medium">{move || texts().send_message}</div>
            <form class="mt-5 grid gap-3" on:submit=on_submit novalidate>
                <div>
                    <input
                        type="text"
                        class=move || input_class(Field::Name)
                        placeholder=move || texts().name_placeholder
                        prop:value=move || form.with(|f| f.value(Field::Name).to_string())
                        on:input=move |ev| form.update(|f| f.edit(Field::Name, event_target_value(&ev)))
                    />
                    {move || error_text(Field::Name)}
                </div>
                <div>
                    <input
                        type="email"
                        class=move || input_class(Field::Email)
                        placeholder=move || texts().email_placeholder
                        prop:value=move || form.with(|f| f.value(Field::Email).to_string())
                        on:input=move |ev| form.update(|f| f.edit(Field::Email, event_target_value(&ev)))
                    />
                    {move || error_text(Field::Email)}
                </div>
                <div>
                    <textarea
                        rows="5"
                        class=move || format!("{} resize-none", input_class(Field::Message))
                        placeholder=move || texts().message_placeholder
                        prop:value=move || form.with(|f| f.value(Field::Message).to_string())
                        on:input=move |ev| form.update(|f| f.edit(Field::Message, event_target_value(&ev)))
                    ></textarea>
                    {move || error_text(Field::Message)}
                </div>
                {banner}
                <button
                    type="submit"
                    disabled=sending
                    class=move || {
                        format!(
                            "{} disabled:opacity-60 disabled:cursor-not-allowed",
                            button_class(
                                settings.theme.get().is_dark(),
                                true,
                                settings.motion.get().is_full(),
                            ),
                        )
                    }
                >
                    {move || if sending() { texts().sending } else { texts().send }}
                </button>
                <p class=move || format!("text-xs {}", settings.muted())>{move || texts().note}</p>
            </form>
        </Card>
    }
}
