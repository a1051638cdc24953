//! Most-visible-section theme selection.
//!
//! Candidate sections are watched at several thresholds so intermediate
//! ratios are reported while scrolling. Each notification batch elects
//! the intersecting entry with the highest ratio; when nothing intersects
//! the previous selection is retained (no reset to the top theme). Exact
//! ratio ties go to the section earliest in document order, which keeps
//! the winner independent of batch iteration order.

use crate::engine::viewport::Viewport;
use crate::engine::visibility::{RectWatcher, VisibilityEntry};
use crate::models::SectionId;

/// Reported ratios while scrolling through a section.
pub const THEME_THRESHOLDS: [f32; 3] = [0.22, 0.38, 0.55];

#[derive(Debug)]
pub struct ThemeSwitcher {
    watcher: RectWatcher,
    /// Candidate section ids in document order.
    sections: Vec<String>,
    active: SectionId,
}

impl ThemeSwitcher {
    /// `sections` must be listed in document order; it doubles as the
    /// tie-break ranking.
    pub fn new(sections: &[&str]) -> Self {
        let mut watcher = RectWatcher::new();
        for id in sections {
            watcher.observe(*id, &THEME_THRESHOLDS);
        }
        Self {
            watcher,
            sections: sections.iter().map(|s| s.to_string()).collect(),
            active: SectionId::Top,
        }
    }

    /// Poll visibility and apply this frame's batch.
    pub fn sample(&mut self, view: &impl Viewport) {
        let batch = self.watcher.poll(view);
        self.process(&batch);
    }

    /// Pure selection logic over one notification batch.
    pub fn process(&mut self, batch: &[VisibilityEntry]) {
        let mut best: Option<(&VisibilityEntry, usize)> = None;

        for entry in batch {
            if !entry.intersecting {
                continue;
            }
            let order = self.document_order(&entry.id);
            let wins = match best {
                None => true,
                Some((b, b_order)) => {
                    entry.ratio > b.ratio || (entry.ratio == b.ratio && order < b_order)
                }
            };
            if wins {
                best = Some((entry, order));
            }
        }

        if let Some((entry, _)) = best {
            // Unknown identifiers fall back to the top theme.
            self.active = SectionId::from_anchor(&entry.id).unwrap_or(SectionId::Top);
        }
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    /// Teardown: drop all section subscriptions.
    pub fn disconnect(&mut self) {
        self.watcher.disconnect();
    }

    fn document_order(&self, id: &str) -> usize {
        self.sections
            .iter()
            .position(|s| s == id)
            .unwrap_or(usize::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::viewport::testing::FakeViewport;

    fn entry(id: &str, ratio: f32) -> VisibilityEntry {
        VisibilityEntry {
            id: id.to_string(),
            ratio,
            intersecting: ratio > 0.0,
        }
    }

    fn switcher() -> ThemeSwitcher {
        ThemeSwitcher::new(&[
            "highlights",
            "experience",
            "projects",
            "skills",
            "education",
            "contact",
        ])
    }

    #[test]
    fn test_highest_ratio_wins() {
        let mut sw = switcher();
        sw.process(&[entry("experience", 0.40), entry("projects", 0.60)]);
        assert_eq!(sw.active(), SectionId::Projects);
    }

    #[test]
    fn test_empty_batch_retains_previous() {
        let mut sw = switcher();
        sw.process(&[entry("skills", 0.55)]);
        assert_eq!(sw.active(), SectionId::Skills);

        sw.process(&[]);
        assert_eq!(sw.active(), SectionId::Skills);
    }

    #[test]
    fn test_none_intersecting_retains_previous() {
        let mut sw = switcher();
        sw.process(&[entry("education", 0.50)]);
        assert_eq!(sw.active(), SectionId::Education);

        // Entries present but none intersecting: explicit no-change, not
        // a reset to the top theme.
        sw.process(&[
            VisibilityEntry {
                id: "contact".to_string(),
                ratio: 0.0,
                intersecting: false,
            },
        ]);
        assert_eq!(sw.active(), SectionId::Education);
    }

    #[test]
    fn test_tie_goes_to_earliest_in_document_order() {
        let mut sw = switcher();
        // Same ratio, batch listed in reverse document order.
        sw.process(&[entry("projects", 0.38), entry("experience", 0.38)]);
        assert_eq!(sw.active(), SectionId::Experience);
    }

    #[test]
    fn test_unknown_identifier_falls_back_to_top() {
        let mut sw = ThemeSwitcher::new(&["mystery"]);
        sw.process(&[entry("mystery", 0.9)]);
        assert_eq!(sw.active(), SectionId::Top);
    }

    #[test]
    fn test_provider_driven_selection() {
        // Two adjacent sections; scroll so the second occupies more of
        // the viewport.
        let mut view = FakeViewport::new(100.0, 400.0)
            .with_element("experience", 0.0, 120.0)
            .with_element("projects", 120.0, 120.0);
        let mut sw = ThemeSwitcher::new(&["experience", "projects"]);

        sw.sample(&view);
        assert_eq!(sw.active(), SectionId::Experience);

        view.scroll = 110.0; // experience: 10 rows left; projects: 100 rows
        sw.sample(&view);
        assert_eq!(sw.active(), SectionId::Projects);
    }

    #[test]
    fn test_starts_on_top_theme() {
        assert_eq!(switcher().active(), SectionId::Top);
    }
}
