mod content;

pub use content::*;

use serde::{Deserialize, Serialize};

use crate::section::SectionId;

pub const SECTION_IDS: [&str; 5] = ["home", "about", "skills", "projects", "contact"];

pub fn section_ids() -> Vec<SectionId> {
    SECTION_IDS.into_iter().map(SectionId::from).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Picks between the dark and light variant of a class list.
    pub fn pick(self, dark: &'static str, light: &'static str) -> &'static str {
        if self.is_dark() {
            dark
        } else {
            light
        }
    }

    pub fn muted(self) -> &'static str {
        self.pick("text-white/60", "text-black/55")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Lang {
    #[default]
    En,
    Az,
}

impl Lang {
    pub fn toggle(self) -> Self {
        match self {
            Lang::En => Lang::Az,
            Lang::Az => Lang::En,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Az => "az",
        }
    }

    pub fn texts(self) -> &'static Texts {
        match self {
            Lang::En => &EN,
            Lang::Az => &AZ,
        }
    }
}

/// How much decorative motion the page plays. Chosen once at mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionPreset {
    Disabled,
    Minimal,
    #[default]
    Full,
}

impl MotionPreset {
    pub fn from_reduced_motion(reduce: bool) -> Self {
        if reduce {
            MotionPreset::Minimal
        } else {
            MotionPreset::Full
        }
    }

    pub fn is_full(self) -> bool {
        matches!(self, MotionPreset::Full)
    }

    /// Reads `prefers-reduced-motion` from the browser.
    #[cfg(feature = "hydrate")]
    pub fn detect() -> Self {
        let reduce = web_sys::window()
            .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
            .map(|m| m.matches())
            .unwrap_or(false);
        Self::from_reduced_motion(reduce)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggles_round_trip() {
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert_eq!(Theme::Light.toggle().toggle(), Theme::Light);
        assert_eq!(Lang::En.toggle(), Lang::Az);
        assert_eq!(Lang::Az.toggle(), Lang::En);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert_eq!(Lang::default(), Lang::En);
        assert_eq!(MotionPreset::default(), MotionPreset::Full);
    }

    #[test]
    fn test_reduced_motion_maps_to_minimal() {
        assert_eq!(MotionPreset::from_reduced_motion(true), MotionPreset::Minimal);
        assert_eq!(MotionPreset::from_reduced_motion(false), MotionPreset::Full);
    }

    #[test]
    fn test_nav_labels_cover_every_section() {
        for lang in [Lang::En, Lang::Az] {
            for id in section_ids() {
                assert!(!lang.texts().nav_label(&id).is_empty(), "{id} in {lang:?}");
            }
        }
    }

    #[test]
    fn test_theme_serde_for_storage() {
        let json = serde_json::to_string(&Theme::Light).unwrap();
        assert_eq!(serde_json::from_str::<Theme>(&json).unwrap(), Theme::Light);
    }
}
