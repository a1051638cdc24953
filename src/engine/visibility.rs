//! Threshold-based visibility watching.
//!
//! A watcher holds a set of observed elements, each with its own sorted
//! threshold list, and computes intersection ratios from the layout
//! provider once per sampled frame. It reports a batch of entries only
//! for elements whose threshold bucket or intersecting flag changed since
//! the last report, so consumers see the same cadence an intersection
//! callback would: one notification per crossing, plus one initial report
//! when observation starts.
//!
//! The selection logic built on top (reveal, theme switching) consumes
//! batches through pure `process` functions and never reads layout
//! itself.

use crate::engine::viewport::{ElemRect, Viewport};
use crate::utils::clamp01;

/// One visibility notification for one element.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityEntry {
    pub id: String,
    pub ratio: f32,
    pub intersecting: bool,
}

#[derive(Debug)]
struct Watched {
    id: String,
    thresholds: Vec<f32>,
    /// Last reported (bucket, intersecting); None forces an initial
    /// report on the next poll.
    last: Option<(usize, bool)>,
}

/// Provider-driven visibility watcher.
#[derive(Debug, Default)]
pub struct RectWatcher {
    watched: Vec<Watched>,
}

impl RectWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start watching an element. Observing an already-watched id resets
    /// its thresholds and forces a fresh initial report.
    pub fn observe(&mut self, id: impl Into<String>, thresholds: &[f32]) {
        let id = id.into();
        let mut thresholds: Vec<f32> = thresholds.to_vec();
        thresholds.sort_by(|a, b| a.total_cmp(b));

        if let Some(existing) = self.watched.iter_mut().find(|w| w.id == id) {
            existing.thresholds = thresholds;
            existing.last = None;
        } else {
            self.watched.push(Watched {
                id,
                thresholds,
                last: None,
            });
        }
    }

    /// Stop watching a single element.
    pub fn unobserve(&mut self, id: &str) {
        self.watched.retain(|w| w.id != id);
    }

    /// Drop every subscription (teardown).
    pub fn disconnect(&mut self) {
        self.watched.clear();
    }

    pub fn is_observing(&self, id: &str) -> bool {
        self.watched.iter().any(|w| w.id == id)
    }

    /// Compute ratios for every watched element and return the entries
    /// whose state changed. Elements without a layout rect are skipped
    /// and will report once they appear.
    pub fn poll(&mut self, view: &impl Viewport) -> Vec<VisibilityEntry> {
        let viewport_h = view.viewport_height();
        let mut batch = Vec::new();

        for watched in &mut self.watched {
            let Some(rect) = view.element_rect(&watched.id) else {
                continue;
            };

            let ratio = intersection_ratio(rect, viewport_h);
            let intersecting = ratio > 0.0;
            let bucket = watched.thresholds.iter().filter(|t| ratio >= **t).count();

            if watched.last != Some((bucket, intersecting)) {
                watched.last = Some((bucket, intersecting));
                batch.push(VisibilityEntry {
                    id: watched.id.clone(),
                    ratio,
                    intersecting,
                });
            }
        }

        batch
    }
}

/// Fraction of the element's area inside the viewport, in [0,1].
pub fn intersection_ratio(rect: ElemRect, viewport_h: f32) -> f32 {
    if rect.height <= 0.0 {
        return 0.0;
    }
    let visible_top = rect.top.max(0.0);
    let visible_bottom = (rect.top + rect.height).min(viewport_h);
    clamp01((visible_bottom - visible_top).max(0.0) / rect.height)
}
