//! Pinned highlight panel rendering
//!
//! The left pane stays fixed while the page scrolls: it shows the story
//! item at the active index, a scroll progress gauge, and the key hints.

use std::path::Path;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Paragraph},
};

use crate::models::Profile;
use crate::theme::{
    get_pulse_color, BG_SECONDARY, BORDER_SUBTLE, LIME_DIM, LIME_PRIMARY, ROUNDED_BORDERS,
    TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY,
};
use crate::ui::helpers::{chip_rows, truncate_end, wrap_text};
use crate::utils::{initials, resolve_logo};

/// Render the pinned story panel plus the scroll gauge underneath.
pub fn render_highlight_panel(
    area: Rect,
    profile: &Profile,
    assets: &Path,
    active: usize,
    count: usize,
    tick: u64,
    progress_percent: u16,
    show_top_hint: bool,
    frame: &mut Frame,
) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Highlight detail
            Constraint::Length(3), // Scroll gauge
        ])
        .split(area);

    render_detail(layout[0], profile, assets, active, count, tick, frame);
    render_gauge(layout[1], progress_percent, show_top_hint, frame);
}

fn render_detail(
    area: Rect,
    profile: &Profile,
    assets: &Path,
    active: usize,
    count: usize,
    tick: u64,
    frame: &mut Frame,
) {
    let block = Block::default()
        .title(" Highlight ")
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .style(Style::default().bg(BG_SECONDARY));

    let inner_width = area.width.saturating_sub(4) as usize;
    let count = count.max(1);
    let current = profile.highlights.get(active);
    let pulse = get_pulse_color(tick, LIME_PRIMARY, LIME_DIM);

    let mut lines = Vec::new();

    // Header row: pulsing indicator, badge, position counter. The badge
    // brightens when the item's image resolves on disk; otherwise the
    // initials stand in for it.
    let badge = current
        .map(|item| initials(&item.heading))
        .unwrap_or_else(|| "HL".to_string());
    let badge_color = match current {
        Some(item) if resolve_logo(assets, std::slice::from_ref(&item.image)).is_some() => {
            LIME_PRIMARY
        }
        _ => TEXT_MUTED,
    };
    lines.push(Line::from(vec![
        Span::styled("● ", Style::default().fg(pulse)),
        Span::styled(format!("⟦{}⟧ ", badge), Style::default().fg(badge_color)),
        Span::styled(
            format!("{:02} / {:02}", active + 1, count),
            Style::default().fg(TEXT_MUTED),
        ),
    ]));
    lines.push(Line::default());

    match current {
        Some(item) => {
            lines.push(Line::from(Span::styled(
                truncate_end(&item.heading, inner_width),
                Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
            )));
            if !item.subheading.is_empty() {
                for row in wrap_text(&item.subheading, inner_width) {
                    lines.push(Line::from(Span::styled(
                        row,
                        Style::default().fg(TEXT_SECONDARY),
                    )));
                }
            }
            if !item.when.is_empty() {
                lines.push(Line::from(Span::styled(
                    item.when.clone(),
                    Style::default().fg(TEXT_MUTED),
                )));
            }
            lines.push(Line::default());
            for row in wrap_text(&item.body, inner_width) {
                lines.push(Line::from(Span::styled(
                    row,
                    Style::default().fg(TEXT_SECONDARY),
                )));
            }
            if !item.tags.is_empty() {
                lines.push(Line::default());
                for row in chip_rows(&item.tags, inner_width) {
                    lines.push(Line::from(Span::styled(row, Style::default().fg(TEXT_MUTED))));
                }
            }
        }
        None => {
            // Neutral placeholder: no item configured for this index.
            lines.push(Line::from(Span::styled(
                "Section",
                Style::default().fg(TEXT_SECONDARY),
            )));
        }
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

fn render_gauge(area: Rect, progress_percent: u16, show_top_hint: bool, frame: &mut Frame) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(BORDER_SUBTLE));

    let label = if show_top_hint {
        format!("{}% · g: top", progress_percent)
    } else {
        format!("{}%", progress_percent)
    };

    let gauge = Gauge::default()
        .block(block)
        .gauge_style(Style::default().fg(LIME_PRIMARY).bg(BG_SECONDARY))
        .percent(progress_percent.min(100))
        .label(label);

    frame.render_widget(gauge, area);
}
