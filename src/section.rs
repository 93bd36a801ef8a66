#[cfg(feature = "hydrate")]
mod observer;

#[cfg(feature = "hydrate")]
pub use observer::SectionObserver;

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Visibility thresholds the viewport observer reports at.
pub const SECTION_THRESHOLDS: [f64; 3] = [0.2, 0.35, 0.5];
/// Biases detection toward the upper two-fifths of the viewport.
pub const SECTION_ROOT_MARGIN: &str = "-20% 0px -60% 0px";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SectionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One entry of an observation batch, as delivered by the viewport observer.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionObservation {
    pub id: SectionId,
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl SectionObservation {
    pub fn new(id: impl Into<String>, is_intersecting: bool, ratio: f64) -> Self {
        Self {
            id: SectionId::new(id),
            is_intersecting,
            ratio,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrackerOptions {
    pub thresholds: Vec<f64>,
    pub root_margin: String,
    /// Entries below this ratio are not admitted even when intersecting.
    pub min_ratio: f64,
}

impl Default for TrackerOptions {
    fn default() -> Self {
        Self {
            thresholds: SECTION_THRESHOLDS.to_vec(),
            root_margin: SECTION_ROOT_MARGIN.to_string(),
            min_ratio: 0.0,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrackerError {
    #[error("at least one section must be configured")]
    NoSections,
}

/// Tracks which configured section currently has the reader's attention.
///
/// The published section is always one of the configured ids. It starts at the
/// first configured id and only moves when an observation batch contains an
/// admitted, intersecting section; an empty batch leaves it where it was.
#[derive(Debug, Clone)]
pub struct SectionTracker {
    sections: Vec<SectionId>,
    registered: Vec<bool>,
    active: usize,
    options: TrackerOptions,
}

impl SectionTracker {
    pub fn new(ids: Vec<SectionId>) -> Result<Self, TrackerError> {
        Self::with_options(ids, TrackerOptions::default())
    }

    pub fn with_options(ids: Vec<SectionId>, options: TrackerOptions) -> Result<Self, TrackerError> {
        if ids.is_empty() {
            return Err(TrackerError::NoSections);
        }
        let registered = vec![true; ids.len()];
        Ok(Self {
            sections: ids,
            registered,
            active: 0,
            options,
        })
    }

    pub fn options(&self) -> &TrackerOptions {
        &self.options
    }

    pub fn sections(&self) -> &[SectionId] {
        &self.sections
    }

    pub fn active(&self) -> &SectionId {
        &self.sections[self.active]
    }

    /// Marks which sections have a rendered element. Sections without one are
    /// skipped and can never become active.
    pub fn register<F>(&mut self, is_rendered: F) -> Vec<SectionId>
    where
        F: Fn(&SectionId) -> bool,
    {
        self.registered = self.sections.iter().map(&is_rendered).collect();
        self.sections
            .iter()
            .zip(&self.registered)
            .filter_map(|(id, present)| present.then(|| id.clone()))
            .collect()
    }

    fn position(&self, id: &SectionId) -> Option<usize> {
        self.sections
            .iter()
            .position(|s| s == id)
            .filter(|&i| self.registered[i])
    }

    /// Applies one observation batch. Returns the new active section when it
    /// changed.
    pub fn observe(&mut self, batch: &[SectionObservation]) -> Option<&SectionId> {
        let mut visible = batch
            .iter()
            .filter(|o| o.is_intersecting && o.ratio >= self.options.min_ratio)
            .filter_map(|o| self.position(&o.id).map(|i| (i, o.ratio)))
            .collect::<Vec<_>>();
        // stable: equal ratios keep configuration order, then batch order
        visible.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));

        let (next, _) = *visible.first()?;
        if next == self.active {
            return None;
        }
        self.active = next;
        Some(&self.sections[next])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids() -> Vec<SectionId> {
        ["home", "about", "skills", "projects", "contact"]
            .into_iter()
            .map(SectionId::from)
            .collect()
    }

    fn tracker() -> SectionTracker {
        SectionTracker::new(ids()).expect("sections are configured")
    }

    #[test]
    fn test_starts_on_first_section() {
        let tracker = tracker();
        assert_eq!(tracker.active().as_str(), "home");
    }

    #[test]
    fn test_empty_configuration_is_rejected() {
        assert_eq!(
            SectionTracker::new(Vec::new()).unwrap_err(),
            TrackerError::NoSections
        );
    }

    #[test]
    fn test_highest_ratio_wins() {
        let mut tracker = tracker();
        let changed = tracker.observe(&[
            SectionObservation::new("about", true, 0.35),
            SectionObservation::new("skills", true, 0.5),
            SectionObservation::new("projects", true, 0.2),
        ]);
        assert_eq!(changed.map(SectionId::as_str), Some("skills"));
        assert_eq!(tracker.active().as_str(), "skills");
    }

    #[test]
    fn test_ties_resolve_to_configuration_order() {
        let mut tracker = tracker();
        tracker.observe(&[
            SectionObservation::new("projects", true, 0.5),
            SectionObservation::new("about", true, 0.5),
        ]);
        assert_eq!(tracker.active().as_str(), "about");
    }

    #[test]
    fn test_non_intersecting_entries_are_ignored() {
        let mut tracker = tracker();
        tracker.observe(&[
            SectionObservation::new("about", false, 0.9),
            SectionObservation::new("contact", true, 0.2),
        ]);
        assert_eq!(tracker.active().as_str(), "contact");
    }

    #[test]
    fn test_sticky_when_nothing_intersects() {
        let mut tracker = tracker();
        tracker.observe(&[SectionObservation::new("projects", true, 0.35)]);
        let changed = tracker.observe(&[
            SectionObservation::new("projects", false, 0.0),
            SectionObservation::new("contact", false, 0.0),
        ]);
        assert!(changed.is_none());
        assert_eq!(tracker.active().as_str(), "projects");

        assert!(tracker.observe(&[]).is_none());
        assert_eq!(tracker.active().as_str(), "projects");
    }

    #[test]
    fn test_unknown_ids_never_become_active() {
        let mut tracker = tracker();
        tracker.observe(&[SectionObservation::new("footer", true, 1.0)]);
        assert_eq!(tracker.active().as_str(), "home");
    }

    #[test]
    fn test_unrendered_sections_are_skipped() {
        let mut tracker = tracker();
        let registered = tracker.register(|id| id.as_str() != "skills");
        assert_eq!(registered.len(), 4);
        assert!(!registered.contains(&SectionId::from("skills")));

        tracker.observe(&[
            SectionObservation::new("skills", true, 0.5),
            SectionObservation::new("about", true, 0.2),
        ]);
        assert_eq!(tracker.active().as_str(), "about");
    }

    #[test]
    fn test_same_section_reports_no_change() {
        let mut tracker = tracker();
        assert!(tracker
            .observe(&[SectionObservation::new("home", true, 0.5)])
            .is_none());
    }

    #[test]
    fn test_min_ratio_admission() {
        let options = TrackerOptions {
            min_ratio: 0.3,
            ..TrackerOptions::default()
        };
        let mut tracker = SectionTracker::with_options(ids(), options).unwrap();
        tracker.observe(&[SectionObservation::new("about", true, 0.2)]);
        assert_eq!(tracker.active().as_str(), "home");
        tracker.observe(&[SectionObservation::new("about", true, 0.35)]);
        assert_eq!(tracker.active().as_str(), "about");
    }

    #[test]
    fn test_active_always_configured() {
        let mut tracker = tracker();
        let batches = [
            vec![SectionObservation::new("nav", true, 0.9)],
            vec![SectionObservation::new("contact", true, 0.1)],
            vec![],
            vec![
                SectionObservation::new("about", true, f64::NAN),
                SectionObservation::new("skills", true, 0.4),
            ],
        ];
        for batch in &batches {
            tracker.observe(batch);
            assert!(ids().contains(tracker.active()));
        }
    }

    #[test]
    fn test_default_options() {
        let options = TrackerOptions::default();
        assert_eq!(options.thresholds, vec![0.2, 0.35, 0.5]);
        assert_eq!(options.root_margin, "-20% 0px -60% 0px");
    }
}
