//! UI rendering for the portfolio TUI
//!
//! Top-level frame composition: scroll progress bar, pinned highlight
//! panel, the scrolling page, the bottom key bar, and the contact
//! composer overlay.

pub mod helpers;
pub mod page;
pub mod panel;
pub mod sections;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Gauge, Paragraph},
};

use crate::app::App;
use crate::models::{ComposeField, Mode};
use crate::theme::{
    theme_for, BG_SECONDARY, BORDER_SUBTLE, LIME_PRIMARY, ROUNDED_BORDERS, TEXT_MUTED,
    TEXT_PRIMARY,
};
use crate::ui::helpers::truncate_end;

/// Render one frame. Also rebuilds the page layout at the current pane
/// size and stores it as the engines' geometry source.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Main layout: progress bar + content area + bottom bar
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Scroll progress bar
            Constraint::Min(3),    // Main content area
            Constraint::Length(1), // Bottom bar (single line)
        ])
        .split(area);

    render_progress_bar(main_layout[0], app, frame);

    // Horizontal split: pinned highlight panel, scrolling page
    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(34), Constraint::Percentage(66)])
        .split(main_layout[1]);

    render_page(panels[1], app, frame);

    panel::render_highlight_panel(
        panels[0],
        &app.profile,
        &app.assets_dir,
        app.story.active(),
        app.story.count(),
        app.animation_tick,
        app.progress.percent(),
        app.show_top_hint,
        frame,
    );

    render_bottom_bar(main_layout[2], app, frame);

    if app.mode == Mode::Compose {
        render_compose(area, app, frame);
    }
}

fn render_progress_bar(area: Rect, app: &App, frame: &mut Frame) {
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(LIME_PRIMARY).bg(BG_SECONDARY))
        .ratio(f64::from(app.progress.value()).clamp(0.0, 1.0))
        .label("");
    frame.render_widget(gauge, area);
}

fn render_page(area: Rect, app: &mut App, frame: &mut Frame) {
    let theme = theme_for(app.switcher.active());
    let block = Block::default()
        .title(format!(" {} ", app.profile.name))
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .style(Style::default().bg(theme.bg));

    let inner = block.inner(area);
    let layout = app.build_layout(inner.width, inner.height);
    app.set_layout(layout, inner.width, inner.height);

    let paragraph = Paragraph::new(app.layout.lines.clone())
        .block(block)
        .scroll((app.scroll.round().max(0.0) as u16, 0));
    frame.render_widget(paragraph, area);
}

fn render_bottom_bar(area: Rect, app: &App, frame: &mut Frame) {
    let text = match app.mode {
        Mode::Compose => " Esc: Cancel | Tab: Next field | Enter: Send ".to_string(),
        Mode::Browse => match &app.mailto_notice {
            Some(url) => format!(
                " q: Quit | composed: {} ",
                truncate_end(url, area.width.saturating_sub(22) as usize)
            ),
            None => format!(
                " {} | q: Quit | j/k ↑/↓: Scroll | PgUp/PgDn: Page | g/G: Top/Bottom | c: Compose ",
                app.switcher.active().label()
            ),
        },
    };

    let bar = Paragraph::new(text).style(Style::default().fg(Color::Black).bg(LIME_PRIMARY));
    frame.render_widget(bar, area);
}

/// Contact composer overlay: three fields, focused one highlighted.
fn render_compose(area: Rect, app: &App, frame: &mut Frame) {
    let popup = centered_rect(area, 56, 15);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(" Send me a message ")
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(LIME_PRIMARY))
        .style(Style::default().bg(BG_SECONDARY));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let fields = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Name
            Constraint::Length(3), // Email
            Constraint::Min(4),    // Message
            Constraint::Length(1), // Hint
        ])
        .split(inner);

    let entries: [(ComposeField, &str); 3] = [
        (ComposeField::Name, &app.compose.name),
        (ComposeField::Email, &app.compose.email),
        (ComposeField::Message, &app.compose.message),
    ];

    for (i, (field, value)) in entries.iter().enumerate() {
        let focused = app.compose.focus == *field;
        let border = if focused { LIME_PRIMARY } else { BORDER_SUBTLE };
        let field_block = Block::default()
            .title(format!(" {} ", field.label()))
            .borders(Borders::ALL)
            .border_set(ROUNDED_BORDERS)
            .border_style(Style::default().fg(border));

        // Show the tail of long input so the caret end stays visible.
        let inner_width = fields[i].width.saturating_sub(2) as usize;
        let shown: String = if value.chars().count() > inner_width {
            value
                .chars()
                .skip(value.chars().count() - inner_width)
                .collect()
        } else {
            (*value).to_string()
        };

        let paragraph = Paragraph::new(shown)
            .block(field_block)
            .style(Style::default().fg(TEXT_PRIMARY));
        frame.render_widget(paragraph, fields[i]);
    }

    let hint = Paragraph::new("Enter: send · Tab: next field · Esc: cancel")
        .style(Style::default().fg(TEXT_MUTED))
        .alignment(Alignment::Center);
    frame.render_widget(hint, fields[3]);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
