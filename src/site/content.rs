use super::Lang;
use crate::section::SectionId;

pub struct NavTexts {
    pub home: &'static str,
    pub about: &'static str,
    pub skills: &'static str,
    pub projects: &'static str,
    pub contact: &'static str,
}

pub struct HeroTexts {
    pub title: &'static str,
    pub headline: &'static str,
    pub view_work: &'static str,
    pub projects: &'static str,
    pub contact: &'static str,
}

pub struct AboutTexts {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub summary: &'static str,
    pub journey_title: &'static str,
    pub journey_text: &'static str,
    pub focus: [&'static str; 4],
    pub cards: [(&'static str, &'static str); 4],
}

pub struct SkillsTexts {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub core: &'static str,
    pub stack: &'static str,
    pub tools: &'static str,
    pub stat_level: &'static str,
    pub stat_projects: &'static str,
    pub stat_learning: &'static str,
}

pub struct ProjectsTexts {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub view_github: &'static str,
    pub ask_details: &'static str,
    pub features: &'static str,
}

pub struct ContactTexts {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub get_in_touch: &'static str,
    pub send_message: &'static str,
    pub phone_label: &'static str,
    pub name_placeholder: &'static str,
    pub email_placeholder: &'static str,
    pub message_placeholder: &'static str,
    pub send: &'static str,
    pub sending: &'static str,
    pub note: &'static str,
}

/// User-facing messages of the contact flow.
pub struct FormTexts {
    pub name_required: &'static str,
    pub email_required: &'static str,
    pub email_invalid: &'static str,
    pub message_required: &'static str,
    pub send_failed: &'static str,
    pub network_error: &'static str,
    pub sent: &'static str,
}

pub struct Texts {
    pub nav: NavTexts,
    pub hero: HeroTexts,
    pub about: AboutTexts,
    pub skills: SkillsTexts,
    pub projects: ProjectsTexts,
    pub contact: ContactTexts,
    pub form: FormTexts,
    pub built_with: &'static str,
}

impl Texts {
    pub fn nav_label(&self, id: &SectionId) -> &'static str {
        match id.as_str() {
            "home" => self.nav.home,
            "about" => self.nav.about,
            "skills" => self.nav.skills,
            "projects" => self.nav.projects,
            "contact" => self.nav.contact,
            _ => "",
        }
    }

    pub fn footer(&self, name: &str, year: i32) -> String {
        format!("© {year} {name}. {}", self.built_with)
    }
}

pub static EN: Texts = Texts {
    nav: NavTexts {
        home: "Home",
        about: "About",
        skills: "Skills",
        projects: "Projects",
        contact: "Contact",
    },
    hero: HeroTexts {
        title: "Junior Android Developer",
        headline: "I build user-friendly, performant, and reliable Android apps using modern Android technologies.",
        view_work: "View My Work",
        projects: "Projects",
        contact: "Contact",
    },
    about: AboutTexts {
        title: "About Me",
        subtitle: "I focus on clean code, solid architecture, and a great UX.",
        summary: "I’m a junior Android developer who’s curious, eager to learn, and effective in teamwork. I keep improving by applying my skills in real projects.",
        journey_title: "My Journey",
        journey_text: "I strengthen my skills by building real projects and continuously learning new technologies in Android development.",
        focus: [
            "MVVM & Clean Architecture",
            "Async programming (Coroutines, Flow)",
            "REST API integration",
            "Working with new technologies",
        ],
        cards: [
            ("Clean Code", "Readable, maintainable code structure."),
            ("Modern UI/UX", "Clean layouts and smooth UI animations with a modern approach."),
            ("User-Centered", "Simple, clear, user-friendly experiences."),
            ("Performance", "Optimized behavior and fast screens."),
        ],
    },
    skills: SkillsTexts {
        title: "Skills & Technologies",
        subtitle: "Main technologies I use to build Android applications.",
        core: "Core Expertise",
        stack: "Technology Stack",
        tools: "Tools I use",
        stat_level: "Level",
        stat_projects: "Projects",
        stat_learning: "Learning",
    },
    projects: ProjectsTexts {
        title: "Featured Projects",
        subtitle: "Selected projects where I applied what I learned in practice.",
        view_github: "View on GitHub",
        ask_details: "Ask for details",
        features: "Key features",
    },
    contact: ContactTexts {
        title: "Let's Work Together",
        subtitle: "Have a project idea? Let's talk and create value together.",
        get_in_touch: "Get in Touch",
        send_message: "Send a Message",
        phone_label: "Phone",
        name_placeholder: "Your Name",
        email_placeholder: "Your Email",
        message_placeholder: "Your Message",
        send: "Send Message",
        sending: "Sending...",
        note: "* Messages are delivered straight to my inbox.",
    },
    form: FormTexts {
        name_required: "Name is required.",
        email_required: "Email is required.",
        email_invalid: "Enter a valid email.",
        message_required: "Message is required.",
        send_failed: "Failed to send. Try again.",
        network_error: "Network error. Try again.",
        sent: "Message sent successfully.",
    },
    built_with: "Built with Rust, Leptos & Tailwind CSS.",
};

pub static AZ: Texts = Texts {
    nav: NavTexts {
        home: "Home",
        about: "Haqqımda",
        skills: "Bacarıqlar",
        projects: "Layihələr",
        contact: "Əlaqə",
    },
    hero: HeroTexts {
        title: "Junior Android Developer",
        headline: "Müasir Android texnologiyalarından istifadə edərək istifadəçi dostu, performanslı və etibarlı mobil tətbiqlər hazırlayıram.",
        view_work: "İşlərimə bax",
        projects: "Layihələr",
        contact: "Əlaqə",
    },
    about: AboutTexts {
        title: "Haqqımda",
        subtitle: "Səliqəli kod, stabil arxitektura və yaxşı UX üzərində fokuslanıram.",
        summary: "Yeni texnologiyalara açıq, öyrənməyə maraqlı və komandada effektiv işləyən Junior Android Developerəm. Bilik və bacarıqlarımı real layihələrdə tətbiq edərək daim inkişaf etməyə çalışıram.",
        journey_title: "Yolum",
        journey_text: "Android sahəsində real layihələr üzərində işləyərək biliklərimi praktikada möhkəmləndirirəm və daim yeni texnologiyalar öyrənməyə davam edirəm.",
        focus: [
            "MVVM & Clean Architecture",
            "Asinxron proqramlaşdırma (Coroutines, Flow)",
            "REST API inteqrasiyası",
            "Yeni texnologiyalarla işləmək",
        ],
        cards: [
            ("Clean Code", "Oxunaqlı və maintainable kod strukturu."),
            ("Modern UI/UX", "Material yanaşma, səliqəli layout və animasiyalar."),
            ("User-Centered", "İstifadəçiyə rahat, sadə və aydın təcrübə."),
            ("Performance", "Optimallaşdırılmış iş prinsipi və sürətli ekranlar."),
        ],
    },
    skills: SkillsTexts {
        title: "Bacarıqlar və Texnologiyalar",
        subtitle: "Android tətbiqləri hazırlamaq üçün istifadə etdiyim əsas texnologiyalar.",
        core: "Əsas Bacarıqlar",
        stack: "Texnologiya Stack",
        tools: "İstifadə etdiyim alətlər",
        stat_level: "Səviyyə",
        stat_projects: "Layihə",
        stat_learning: "Öyrənmə",
    },
    projects: ProjectsTexts {
        title: "Layihələr",
        subtitle: "Öyrəndiklərimi praktikada tətbiq etdiyim seçilmiş layihələr.",
        view_github: "GitHub-da bax",
        ask_details: "Detallar üçün yaz",
        features: "Əsas xüsusiyyətlər",
    },
    contact: ContactTexts {
        title: "Birlikdə işləyək",
        subtitle: "Layihə ideyan var? Gəlin danışaq və birlikdə dəyər yaradaq.",
        get_in_touch: "Əlaqə",
        send_message: "Mesaj göndər",
        phone_label: "Telefon",
        name_placeholder: "Adınız",
        email_placeholder: "Email",
        message_placeholder: "Mesajınız",
        send: "Göndər",
        sending: "Göndərilir...",
        note: "* Mesajlar birbaşa poçt qutuma çatdırılır.",
    },
    form: FormTexts {
        name_required: "Ad vacibdir.",
        email_required: "Email vacibdir.",
        email_invalid: "Düzgün email daxil et.",
        message_required: "Mesaj vacibdir.",
        send_failed: "Göndərilmədi. Yenidən yoxla.",
        network_error: "Şəbəkə xətası. Yenidən yoxla.",
        sent: "Mesaj uğurla göndərildi.",
    },
    built_with: "Rust, Leptos & Tailwind CSS ilə hazırlanıb.",
};

pub struct Profile {
    pub name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
    pub location: &'static str,
}

pub static PROFILE: Profile = Profile {
    name: "Baxtiyar Alizada",
    email: "baxtiyaralizada1@gmail.com",
    phone: "077 333 98 31",
    github: "https://github.com/Baxtiyar09",
    linkedin: "https://www.linkedin.com/in/baxtiyaralizada1/",
    location: "Azerbaijan",
};

pub struct Skill {
    pub name: &'static str,
    pub level: u8,
}

pub static SKILLS: [Skill; 8] = [
    Skill { name: "Kotlin", level: 82 },
    Skill { name: "MVVM & Clean Architecture", level: 80 },
    Skill { name: "Room / SQLite", level: 75 },
    Skill { name: "Firebase", level: 72 },
    Skill { name: "Hilt (DI)", level: 70 },
    Skill { name: "Coroutines & Flow", level: 78 },
    Skill { name: "REST API", level: 80 },
    Skill { name: "Material Design", level: 76 },
];

pub static TECH_TAGS: [&str; 14] = [
    "Kotlin",
    "MVVM",
    "Clean Architecture",
    "Compose",
    "XML",
    "Room",
    "SQLite",
    "Retrofit",
    "OkHttp",
    "Coroutines",
    "Flow",
    "Firebase",
    "Hilt",
    "Material Design",
];

pub static TOOLS: [&str; 7] = [
    "Android Studio",
    "Git & GitHub",
    "Figma",
    "Postman",
    "Firebase Console",
    "Gradle",
    "Jira / Trello",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Live,
    InProgress,
    ComingSoon,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Live => "Live",
            ProjectStatus::InProgress => "In progress",
            ProjectStatus::ComingSoon => "Coming soon",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Project {
    pub title: &'static str,
    pub status: ProjectStatus,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub link: Option<&'static str>,
    pub features: [&'static str; 3],
}

fn pick(lang: Lang, en: &'static str, az: &'static str) -> &'static str {
    match lang {
        Lang::En => en,
        Lang::Az => az,
    }
}

pub fn projects(lang: Lang) -> Vec<Project> {
    vec![
        Project {
            title: "Mova",
            status: ProjectStatus::Live,
            description: pick(
                lang,
                "ATL Academy final project — an Android app for movie enthusiasts. Browse trending/top-rated titles, explore details, and deliver a smooth experience.",
                "ATL Academy final layihəsi — film həvəskarları üçün Android tətbiqi. Trend/Top Rated siyahılarını izləmək və film detallarına baxmaq üçün hazırlanıb.",
            ),
            tech: &["Kotlin", "MVVM", "Retrofit", "Coroutines", "Flow"],
            link: Some("https://github.com/Baxtiyar09/moviesApp"),
            features: [
                pick(lang, "Search + quick filtering", "Axtarış + sürətli filter"),
                pick(lang, "Favorites / watchlist flow", "Seçilmişlər / izləmə siyahısı"),
                pick(lang, "Detail screen with cast info", "Detallar + aktyorlar bölməsi"),
            ],
        },
        Project {
            title: "HeyatYolu",
            status: ProjectStatus::InProgress,
            description: pick(
                lang,
                "A digital memory platform for preserving stories and memories of loved ones. Built with real backend integration and stable UI states.",
                "Yaxınlarını itirmiş insanlar üçün xatirələrin rəqəmsal formada saxlanması üçün hazırlanmış platforma. Real backend inteqrasiyası və stabil UI state-lər mövcuddur.",
            ),
            tech: &["Kotlin", "MVVM", "Backend API", "Authentication"],
            link: None,
            features: [
                pick(lang, "Secure sign-in & sessions", "Giriş (auth) + sessiya idarəsi"),
                pick(lang, "Media upload + preview", "Media əlavə etmə + preview"),
                pick(lang, "Role-based content access", "İcazələrə görə kontent erişimi"),
            ],
        },
        Project {
            title: "Herrac",
            status: ProjectStatus::ComingSoon,
            description: pick(
                lang,
                "An upcoming e-commerce style project planned for Google Play after the next phase.",
                "Növbəti mərhələdən sonra Google Play üçün planlaşdırılan e-commerce tipli layihə.",
            ),
            tech: &["Clean Architecture", "Performance", "Modern UI"],
            link: None,
            features: [
                pick(lang, "Product listing + categories", "Məhsul siyahısı + kateqoriyalar"),
                pick(lang, "Cart & checkout concept", "Səbət + checkout konsepti"),
                pick(lang, "Offline-friendly caching plan", "Offline cache planı"),
            ],
        },
        Project {
            title: "Astrology App",
            status: ProjectStatus::ComingSoon,
            description: pick(
                lang,
                "A zodiac-focused app with daily/weekly insights and clean content presentation.",
                "Bürclər üçün gündəlik/həftəlik proqnozlar və səliqəli kontent təqdimatı edən tətbiq.",
            ),
            tech: &["REST API", "Kotlin", "Modern UI"],
            link: None,
            features: [
                pick(lang, "Daily / weekly cards", "Gündəlik / həftəlik kartlar"),
                pick(lang, "Shareable insight snippets", "Paylaşılabilən qısa mətnlər"),
                pick(lang, "Saved sign preferences", "Seçilmiş bürclər yadda saxlanır"),
            ],
        },
    ]
}
