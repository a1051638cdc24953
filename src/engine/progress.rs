//! Normalized page-scroll progress.

use crate::engine::viewport::{ElemRect, Viewport};
use crate::utils::clamp01;

/// Derives a [0,1] fraction of how far the page has been scrolled.
/// Rendered as the progress bar width.
#[derive(Debug, Default)]
pub struct ScrollProgress {
    value: f32,
}

impl ScrollProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute from the current layout. The denominator is floored at 1
    /// so a page with no overflow yields 0 instead of dividing by zero,
    /// and the clamp absorbs overscroll on either end.
    pub fn sample(&mut self, view: &impl Viewport) {
        let total = (view.document_height() - view.viewport_height()).max(1.0);
        self.value = clamp01(view.scroll_y() / total);
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Progress as a whole percentage for gauge widgets.
    pub fn percent(&self) -> u16 {
        (self.value * 100.0).round() as u16
    }
}

/// Fraction of an element's traversal through the viewport: 0.0 when its
/// top edge enters at the bottom, 1.0 when its bottom edge leaves at the
/// top. Drives the hero parallax offset.
pub fn traversal_progress(rect: ElemRect, viewport_h: f32) -> f32 {
    let span = viewport_h + rect.height;
    if span <= 0.0 {
        return 0.0;
    }
    clamp01((viewport_h - rect.top) / span)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::viewport::testing::FakeViewport;

    #[test]
    fn test_progress_monotonic_and_bounded() {
        let mut view = FakeViewport::new(24.0, 200.0);
        let mut progress = ScrollProgress::new();
        let mut last = -1.0f32;

        for s in 0..=176 {
            view.scroll = s as f32;
            progress.sample(&view);
            assert!(progress.value() >= last, "regressed at scroll {}", s);
            assert!((0.0..=1.0).contains(&progress.value()));
            last = progress.value();
        }
        assert_eq!(last, 1.0);
    }

    #[test]
    fn test_progress_zero_at_top_one_at_bottom() {
        let mut view = FakeViewport::new(24.0, 100.0);
        let mut progress = ScrollProgress::new();

        progress.sample(&view);
        assert_eq!(progress.value(), 0.0);

        view.scroll = 76.0;
        progress.sample(&view);
        assert_eq!(progress.value(), 1.0);
    }

    #[test]
    fn test_no_overflow_page_returns_zero() {
        // document == viewport: denominator would be 0 without the floor
        let view = FakeViewport::new(40.0, 40.0);
        let mut progress = ScrollProgress::new();
        progress.sample(&view);
        assert_eq!(progress.value(), 0.0);
    }

    #[test]
    fn test_overscroll_clamps() {
        let mut view = FakeViewport::new(24.0, 100.0);
        let mut progress = ScrollProgress::new();

        view.scroll = -10.0;
        progress.sample(&view);
        assert_eq!(progress.value(), 0.0);

        view.scroll = 500.0;
        progress.sample(&view);
        assert_eq!(progress.value(), 1.0);
    }

    #[test]
    fn test_traversal_progress_endpoints() {
        let vh = 24.0;
        // Top edge just entering at the viewport bottom.
        let entering = ElemRect { top: 24.0, height: 6.0 };
        assert_eq!(traversal_progress(entering, vh), 0.0);

        // Bottom edge just leaving at the viewport top.
        let leaving = ElemRect { top: -6.0, height: 6.0 };
        assert_eq!(traversal_progress(leaving, vh), 1.0);

        // Centered element sits at the midpoint.
        let centered = ElemRect { top: 9.0, height: 6.0 };
        assert_eq!(traversal_progress(centered, vh), 0.5);
    }
}
