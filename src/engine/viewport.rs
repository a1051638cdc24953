//! Layout provider abstraction.
//!
//! Engines read scroll and element geometry through this trait instead of
//! the live page layout, so they can run against a fake provider in tests.

/// Viewport-relative rectangle of a laid-out element, in rows.
/// `top` is the distance from the top of the viewport to the element's
/// first row; negative once the element has scrolled past it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElemRect {
    pub top: f32,
    pub height: f32,
}

/// Read-only view of the scrollable document.
pub trait Viewport {
    /// Current scroll offset from the top of the document, in rows.
    fn scroll_y(&self) -> f32;
    /// Height of the visible pane, in rows.
    fn viewport_height(&self) -> f32;
    /// Total height of the laid-out document, in rows.
    fn document_height(&self) -> f32;
    /// Viewport-relative rect for a laid-out element, or None when the
    /// element has not been laid out (engines treat that as a no-op).
    fn element_rect(&self, id: &str) -> Option<ElemRect>;
}

#[cfg(test)]
pub mod testing {
    use super::{ElemRect, Viewport};
    use std::collections::HashMap;

    /// In-memory provider for engine tests. Element rects are stored in
    /// document coordinates and translated by the current scroll offset.
    pub struct FakeViewport {
        pub scroll: f32,
        pub viewport_h: f32,
        pub document_h: f32,
        pub elements: HashMap<String, (f32, f32)>, // id -> (doc_top, height)
    }

    impl FakeViewport {
        pub fn new(viewport_h: f32, document_h: f32) -> Self {
            Self {
                scroll: 0.0,
                viewport_h,
                document_h,
                elements: HashMap::new(),
            }
        }

        pub fn with_element(mut self, id: &str, doc_top: f32, height: f32) -> Self {
            self.elements.insert(id.to_string(), (doc_top, height));
            self
        }
    }

    impl Viewport for FakeViewport {
        fn scroll_y(&self) -> f32 {
            self.scroll
        }

        fn viewport_height(&self) -> f32 {
            self.viewport_h
        }

        fn document_height(&self) -> f32 {
            self.document_h
        }

        fn element_rect(&self, id: &str) -> Option<ElemRect> {
            self.elements.get(id).map(|&(doc_top, height)| ElemRect {
                top: doc_top - self.scroll,
                height,
            })
        }
    }
}
