//! Page document building and geometry.
//!
//! The whole portfolio renders as one tall column of styled lines. While
//! building, every section and reveal target records its line span, and
//! the resulting geometry backs the engines' layout provider. Geometry
//! depends only on the profile, the column width, and the viewport
//! height (the story spacer) — never on reveal or active-index state, so
//! element rects stay stable while styling changes frame to frame.

use std::collections::HashSet;
use std::path::Path;

use ratatui::prelude::*;

use crate::engine::viewport::{ElemRect, Viewport};
use crate::models::Profile;
use crate::theme::Theme;
use crate::ui::sections;

/// Line span of one laid-out element, in document rows.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSpan {
    pub id: String,
    pub top: usize,
    pub height: usize,
    /// Whether the element is a reveal target.
    pub reveal: bool,
}

/// The built document: styled lines plus element geometry.
#[derive(Debug, Default)]
pub struct PageLayout {
    pub lines: Vec<Line<'static>>,
    pub elements: Vec<SectionSpan>,
}

impl PageLayout {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn total_height(&self) -> usize {
        self.lines.len()
    }

    pub fn span(&self, id: &str) -> Option<&SectionSpan> {
        self.elements.iter().find(|s| s.id == id)
    }

    /// Ids of every reveal target in the layout.
    pub fn reveal_ids(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().filter(|s| s.reveal).map(|s| s.id.as_str())
    }

    /// Layout provider over this geometry at a given scroll position.
    pub fn view(&self, scroll: f32, viewport_h: f32) -> LayoutView<'_> {
        LayoutView {
            layout: self,
            scroll,
            viewport_h,
        }
    }
}

/// Viewport implementation backed by the built page.
pub struct LayoutView<'a> {
    layout: &'a PageLayout,
    scroll: f32,
    viewport_h: f32,
}

impl Viewport for LayoutView<'_> {
    fn scroll_y(&self) -> f32 {
        self.scroll
    }

    fn viewport_height(&self) -> f32 {
        self.viewport_h
    }

    fn document_height(&self) -> f32 {
        self.layout.total_height() as f32
    }

    fn element_rect(&self, id: &str) -> Option<ElemRect> {
        self.layout.span(id).map(|span| ElemRect {
            top: span.top as f32 - self.scroll,
            height: span.height as f32,
        })
    }
}

/// Per-frame inputs to the page build. Only `width` and `viewport_h`
/// affect geometry; the rest drives styling.
pub struct PageState<'a> {
    pub width: u16,
    pub viewport_h: u16,
    pub active_story: usize,
    pub revealed: &'a HashSet<String>,
    pub theme: Theme,
    pub tick: u64,
    pub parallax: i16,
    pub assets: &'a Path,
}

impl PageState<'_> {
    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }
}

/// Accumulates lines and element spans during a build.
pub struct PageBuilder {
    width: usize,
    lines: Vec<Line<'static>>,
    elements: Vec<SectionSpan>,
}

impl PageBuilder {
    fn new(width: u16) -> Self {
        Self {
            width: width.max(20) as usize,
            lines: Vec::new(),
            elements: Vec::new(),
        }
    }

    /// Usable text width of the column.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Current document height; used as a span start marker.
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    pub fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    pub fn line(&mut self, line: Line<'static>) {
        self.lines.push(line);
    }

    pub fn styled(&mut self, text: impl Into<String>, style: Style) {
        self.lines.push(Line::from(Span::styled(text.into(), style)));
    }

    /// Push word-wrapped text, one styled line per row.
    pub fn wrapped(&mut self, text: &str, style: Style) {
        for row in crate::ui::helpers::wrap_text(text, self.width) {
            self.styled(row, style);
        }
    }

    /// Record an element spanning from `start` to the current height.
    pub fn mark(&mut self, id: &str, start: usize, reveal: bool) {
        self.elements.push(SectionSpan {
            id: id.to_string(),
            top: start,
            height: self.lines.len().saturating_sub(start),
            reveal,
        });
    }

    fn finish(self) -> PageLayout {
        PageLayout {
            lines: self.lines,
            elements: self.elements,
        }
    }
}

/// Build the full document for one frame.
pub fn build_page(profile: &Profile, state: &PageState) -> PageLayout {
    let mut b = PageBuilder::new(state.width);

    sections::hero(&mut b, profile, state);
    b.blank();
    sections::marquee(&mut b, profile, state);
    b.blank();
    sections::highlights(&mut b, profile, state);
    b.blank();
    sections::experience(&mut b, profile, state);
    b.blank();
    sections::projects(&mut b, profile, state);
    b.blank();
    sections::skills(&mut b, profile, state);
    b.blank();
    sections::education(&mut b, profile, state);
    b.blank();
    sections::contact(&mut b, profile, state);
    b.blank();
    sections::footer(&mut b, profile);

    b.finish()
}
