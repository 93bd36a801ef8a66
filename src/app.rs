mod about;
mod contact;
mod hooks;
mod hero;
mod nav;
mod projects;
mod skills;
mod ui;

use chrono::{DateTime, Datelike};
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::{use_local_storage_with_options, UseStorageOptions};

use crate::site::{Lang, MotionPreset, Texts, Theme, PROFILE};

use about::About;
use contact::Contact;
use hero::Hero;
use nav::NavBar;
use projects::Projects;
use skills::Skills;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

/// Theme, language and motion settings shared by every section.
#[derive(Clone, Copy)]
pub struct SiteSettings {
    pub theme: Signal<Theme>,
    pub lang: Signal<Lang>,
    pub motion: RwSignal<MotionPreset>,
    set_theme: WriteSignal<Theme>,
    set_lang: WriteSignal<Lang>,
}

impl SiteSettings {
    fn new() -> Self {
        // stored values are applied after hydration so the first client render
        // matches the server's defaults
        #[cfg(feature = "hydrate")]
        let (theme, set_theme, _) = use_local_storage_with_options::<Theme, JsonSerdeWasmCodec>(
            "theme",
            UseStorageOptions::default().delay_during_hydration(true),
        );
        #[cfg(feature = "hydrate")]
        let (lang, set_lang, _) = use_local_storage_with_options::<Lang, JsonSerdeWasmCodec>(
            "lang",
            UseStorageOptions::default().delay_during_hydration(true),
        );

        #[cfg(not(feature = "hydrate"))]
        let (theme, set_theme) = {
            let (theme, set_theme) = signal(Theme::default());
            (Signal::from(theme), set_theme)
        };
        #[cfg(not(feature = "hydrate"))]
        let (lang, set_lang) = {
            let (lang, set_lang) = signal(Lang::default());
            (Signal::from(lang), set_lang)
        };

        Self {
            theme,
            lang,
            motion: RwSignal::new(MotionPreset::default()),
            set_theme,
            set_lang,
        }
    }

    pub fn toggle_theme(&self) {
        self.set_theme.update(|t| *t = t.toggle());
    }

    pub fn toggle_lang(&self) {
        self.set_lang.update(|l| *l = l.toggle());
    }

    pub fn texts(&self) -> &'static Texts {
        self.lang.get().texts()
    }

    pub fn muted(&self) -> &'static str {
        self.theme.get().muted()
    }
}

pub fn use_settings() -> SiteSettings {
    expect_context::<SiteSettings>()
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(SiteSettings::new());

    view! {
        <Title formatter=|title| format!("{} - {title}", PROFILE.name) />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    let settings = use_settings();

    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        settings.motion.set(MotionPreset::detect());
        hooks::reset_scroll();
    });

    let page_class = move || {
        format!(
            "min-h-screen {}",
            settings
                .theme
                .get()
                .pick("bg-[#07080a] text-white", "bg-white text-[#0b0d12]")
        )
    };
    let glow = move || settings.theme.get().pick("bg-white", "bg-black");

    view! {
        <Title text="Portfolio" />
        <div class=page_class>
            <div class="pointer-events-none fixed inset-0 overflow-hidden max-md:hidden">
                <div class=move || {
                    format!(
                        "absolute -top-40 left-1/2 h-[520px] w-[520px] -translate-x-1/2 rounded-full blur-3xl opacity-30 {}",
                        glow(),
                    )
                }></div>
                <div class=move || {
                    format!(
                        "absolute -bottom-48 right-[-120px] h-[560px] w-[560px] rounded-full blur-3xl opacity-20 {}",
                        glow(),
                    )
                }></div>
            </div>
            <NavBar />
            <main class="relative mx-auto max-w-6xl px-5 pt-28 pb-16">
                <Hero />
                <About />
                <Skills />
                <Projects />
                <Contact />
                <Footer />
            </main>
        </div>
    }
}

fn build_year() -> i32 {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|d| d.year())
        .unwrap_or(2025)
}

#[component]
fn Footer() -> impl IntoView {
    let settings = use_settings();
    view! {
        <footer class=move || format!("pt-10 text-center text-xs {}", settings.muted())>
            {move || settings.texts().footer(PROFILE.name, build_year())}
        </footer>
    }
}
