use leptos::{html, prelude::*};

use super::{
    hooks::use_in_view_once,
    ui::{Card, Pill, RevealOnView, SectionTitle},
    use_settings,
};
use crate::{
    motion::{count_up_value, skill_fill, RevealKind, Side, EASE_COUNT},
    site::{SKILLS, TECH_TAGS, TOOLS},
};

const BAR_FILL_MS: u32 = 1250;

/// Counts from zero up to `value` the first time it scrolls into view.
#[component]
fn AnimatedNumber(
    value: u32,
    #[prop(optional)] suffix: &'static str,
    #[prop(default = 1050)] duration_ms: u32,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let seen = use_in_view_once(node_ref, 0.5);
    let (progress, set_progress) = signal(0.0_f64);

    #[cfg(feature = "hydrate")]
    {
        use leptos::leptos_dom::helpers::{set_interval_with_handle, IntervalHandle};
        use std::time::Duration;

        let settings = use_settings();
        let timer = StoredValue::new_local(None::<IntervalHandle>);
        let stop = move || {
            timer.try_update_value(|t| {
                if let Some(handle) = t.take() {
                    handle.clear();
                }
            });
        };
        Effect::new(move |_| {
            if !seen.get() {
                return;
            }
            if !settings.motion.get_untracked().is_full() {
                set_progress.set(1.0);
                return;
            }
            let start = js_sys::Date::now();
            let tick = move || {
                let p = (js_sys::Date::now() - start) / f64::from(duration_ms.max(1));
                set_progress.set(p.min(1.0));
                if p >= 1.0 {
                    stop();
                }
            };
            match set_interval_with_handle(tick, Duration::from_millis(16)) {
                Ok(handle) => timer.set_value(Some(handle)),
                Err(e) => {
                    log::warn!("count-up timer unavailable: {e:?}");
                    set_progress.set(1.0);
                }
            }
        });
        on_cleanup(stop);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (seen, set_progress, duration_ms);
    }

    view! {
        <div node_ref=node_ref class="inline-block">
            {move || count_up_value(value, progress.get())}
            {suffix}
        </div>
    }
}

#[component]
fn SkillRow(name: &'static str, level: u8) -> impl IntoView {
    let settings = use_settings();
    let node_ref = NodeRef::<html::Div>::new();
    let seen = use_in_view_once(node_ref, 0.35);

    let bar_style = move || {
        let scale = if seen.get() { skill_fill(level) } else { 0.0 };
        let duration = if settings.motion.get().is_full() {
            BAR_FILL_MS
        } else {
            10
        };
        format!(
            "transform-origin: left center; transform: scaleX({scale}); transition: transform {duration}ms {};",
            EASE_COUNT.css()
        )
    };

    view! {
        <div node_ref=node_ref>
            <div class="flex items-center justify-between text-sm">
                <span>{name}</span>
                <span class=move || settings.muted()>
                    <Show when=move || seen.get() fallback=|| "0%">
                        <AnimatedNumber value=u32::from(level) suffix="%" duration_ms=1100 />
                    </Show>
                </span>
            </div>
            <div class=move || {
                format!(
                    "mt-2 h-2 rounded-full overflow-hidden {}",
                    settings.theme.get().pick("bg-white/10", "bg-black/10"),
                )
            }>
                <div
                    class=move || {
                        format!("h-full rounded-full {}", settings.theme.get().pick("bg-white", "bg-black"))
                    }
                    style=bar_style
                ></div>
            </div>
        </div>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    let settings = use_settings();
    let texts = move || &settings.texts().skills;

    let rows = SKILLS
        .iter()
        .map(|s| view! { <SkillRow name=s.name level=s.level /> })
        .collect_view();
    let tags = TECH_TAGS.iter().map(|t| view! { <Pill text=*t /> }).collect_view();
    let tools = TOOLS.iter().map(|t| view! { <Pill text=*t /> }).collect_view();
    let stat_class = move || {
        format!(
            "rounded-2xl p-4 transition duration-300 {} {}",
            settings.theme.get().pick("bg-white/5", "bg-black/[0.04]"),
            if settings.motion.get().is_full() { "hover:scale-105" } else { "" },
        )
    };

    view! {
        <section id="skills" class="py-20 scroll-mt-24">
            <RevealOnView>
                <SectionTitle
                    title=Signal::derive(move || texts().title)
                    subtitle=Signal::derive(move || texts().subtitle)
                />
            </RevealOnView>
            <div class="grid lg:grid-cols-3 gap-6">
                <RevealOnView kind=RevealKind::Slide(Side::Left) class="lg:col-span-2">
                    <Card class="p-6" hover_lift=true>
                        <div class="text-sm font-medium mb-4">{move || texts().core}</div>
                        <div class="grid gap-4">{rows}</div>
                    </Card>
                </RevealOnView>
                <RevealOnView kind=RevealKind::Slide(Side::Right) delay_ms=120>
                    <Card class="p-6" hover_lift=true>
                        <div class="text-sm font-medium mb-4">{move || texts().stack}</div>
                        <div class="flex flex-wrap gap-2">{tags}</div>
                        <div class="text-sm font-medium mt-6">{move || texts().tools}</div>
                        <div class="flex flex-wrap gap-2 mt-2">{tools}</div>
                    </Card>
                </RevealOnView>
            </div>
            <RevealOnView class="mt-6">
                <Card class="p-5">
                    <div class="grid grid-cols-3 gap-3 text-center">
                        <div class=stat_class>
                            <div class="text-2xl font-semibold">"Junior"</div>
                            <div class=move || format!("text-xs mt-1 {}", settings.muted())>
                                {move || texts().stat_level}
                            </div>
                        </div>
                        <div class=stat_class>
                            <div class="text-2xl font-semibold">
                                <AnimatedNumber value=4 suffix="+" duration_ms=1150 />
                            </div>
                            <div class=move || format!("text-xs mt-1 {}", settings.muted())>
                                {move || texts().stat_projects}
                            </div>
                        </div>
                        <div class=stat_class>
                            <div class="text-2xl font-semibold">
                                <AnimatedNumber value=100 suffix="%" duration_ms=1200 />
                            </div>
                            <div class=move || format!("text-xs mt-1 {}", settings.muted())>
                                {move || texts().stat_learning}
                            </div>
                        </div>
                    </div>
                </Card>
            </RevealOnView>
        </section>
    }
}
