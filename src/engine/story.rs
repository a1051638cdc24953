//! Sticky story active-index mapping.
//!
//! The highlight section is a tall scroll-linked container wrapping N
//! items next to a pinned detail panel. As the container scrolls through
//! the viewport its height is divided into N equal bands; entering band k
//! makes item k current. The pinned panel and the item card list both
//! read the single active index from here.

use crate::engine::viewport::Viewport;
use crate::utils::clamp01;

#[derive(Debug)]
pub struct StoryEngine {
    container: String,
    count: usize,
    active: usize,
}

impl StoryEngine {
    /// `container` is the element id of the scroll-linked wrapper.
    /// A zero-item list is treated as one band so the math stays defined.
    pub fn new(container: impl Into<String>, count: usize) -> Self {
        Self {
            container: container.into(),
            count: count.max(1),
            active: 0,
        }
    }

    /// Replace the item count (profile reload). Keeps the active index in
    /// range.
    pub fn set_count(&mut self, count: usize) {
        self.count = count.max(1);
        self.active = self.active.min(self.count - 1);
    }

    /// Recompute the active index from the container's position. A
    /// container that has not been laid out yet is a no-op sample, not an
    /// error. A container shorter than the viewport pins the index to 0.
    pub fn sample(&mut self, view: &impl Viewport) {
        let Some(rect) = view.element_rect(&self.container) else {
            return;
        };

        let scrollable_range = rect.height - view.viewport_height();
        if scrollable_range <= 0.0 {
            self.active = 0;
            return;
        }

        let scrolled = clamp01(-rect.top / scrollable_range);
        self.active = ((scrolled * self.count as f32).floor() as usize).min(self.count - 1);
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn count(&self) -> usize {
        self.count
    }
}
