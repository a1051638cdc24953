//! Section line builders for the page document.
//!
//! Each builder appends its lines to the [`PageBuilder`] and records its
//! element span. Styling may depend on reveal/active state; line counts
//! may not (geometry must stay stable across frames).

use ratatui::prelude::*;

use crate::models::Profile;
use crate::theme::{
    BG_TERTIARY, LIME_PRIMARY, TEXT_HIDDEN, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY,
};
use crate::ui::helpers::chip_rows;
use crate::ui::page::{PageBuilder, PageState};
use crate::utils::{asset_path, initials, resolve_logo};

/// Number of rows in the hero art band.
const HERO_ART_ROWS: i16 = 5;

struct RevealStyles {
    title: Style,
    text: Style,
    muted: Style,
    accent: Style,
}

/// Unrevealed elements render every span barely above the background;
/// the reveal transition is the jump to full styling.
fn reveal_styles(revealed: bool) -> RevealStyles {
    if revealed {
        RevealStyles {
            title: Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
            text: Style::default().fg(TEXT_SECONDARY),
            muted: Style::default().fg(TEXT_MUTED),
            accent: Style::default().fg(LIME_PRIMARY),
        }
    } else {
        let hidden = Style::default().fg(TEXT_HIDDEN);
        RevealStyles {
            title: hidden,
            text: hidden,
            muted: hidden,
            accent: hidden,
        }
    }
}

/// Wrapped text with a bullet on the first row.
fn bullet(b: &mut PageBuilder, text: &str, style: Style) {
    let rows = crate::ui::helpers::wrap_text(text, b.width().saturating_sub(2));
    for (i, row) in rows.iter().enumerate() {
        let prefix = if i == 0 { "• " } else { "  " };
        b.styled(format!("{}{}", prefix, row), style);
    }
}

pub fn hero(b: &mut PageBuilder, profile: &Profile, state: &PageState) {
    let start = b.height();
    let s = reveal_styles(state.is_revealed("hero"));

    b.styled(profile.objective.to_uppercase(), s.muted);
    b.blank();
    hero_art(b, state);
    b.blank();
    // Photo badge: bright when the photo resolves on disk, initials
    // otherwise (same fallback the contact card logos use).
    let photo_color = if resolve_logo(state.assets, std::slice::from_ref(&profile.photo)).is_some()
    {
        LIME_PRIMARY
    } else {
        TEXT_MUTED
    };
    b.line(Line::from(vec![
        Span::styled(
            format!("⟦{}⟧ ", initials(&profile.name)),
            if state.is_revealed("hero") {
                Style::default().fg(photo_color)
            } else {
                Style::default().fg(TEXT_HIDDEN)
            },
        ),
        Span::styled(profile.name.clone(), s.title),
    ]));
    b.wrapped(&profile.headline, s.title);
    b.blank();
    b.wrapped(&profile.summary, s.text);
    b.blank();
    for row in chip_rows(&profile.chips, b.width()) {
        b.styled(row, s.accent);
    }

    b.mark("hero", start, true);
}

/// Decorative glow band under the objective line. The bright band shifts
/// a couple of rows against scroll direction (parallax), driven by the
/// art block's own traversal progress.
fn hero_art(b: &mut PageBuilder, state: &PageState) {
    let start = b.height();
    let width = b.width().min(48);
    let center = HERO_ART_ROWS / 2 + state.parallax;

    for row in 0..HERO_ART_ROWS {
        let ch = match (row - center).abs() {
            0 => '█',
            1 => '▓',
            2 => '▒',
            _ => '░',
        };
        let color = if row % 2 == 0 {
            state.theme.glow_a
        } else {
            state.theme.glow_b
        };
        b.styled(
            std::iter::repeat(ch).take(width).collect::<String>(),
            Style::default().fg(color),
        );
    }

    b.mark("hero-art", start, false);
}

pub fn marquee(b: &mut PageBuilder, profile: &Profile, state: &PageState) {
    if profile.marquee.is_empty() {
        return;
    }
    let start = b.height();
    let s = reveal_styles(state.is_revealed("marquee"));
    let rule: String = "─".repeat(b.width());

    b.styled(rule.clone(), s.muted);
    b.styled(marquee_window(&profile.marquee, state.tick, b.width()), s.title);
    b.styled(rule, s.muted);

    b.mark("marquee", start, true);
}

/// A width-sized window into the endlessly repeating marquee strip,
/// rotated one character per tick step.
pub fn marquee_window(items: &[String], tick: u64, width: usize) -> String {
    if items.is_empty() || width == 0 {
        return String::new();
    }
    let base: String = items
        .iter()
        .map(|s| format!("{}   ·   ", s.to_uppercase()))
        .collect();
    let chars: Vec<char> = base.chars().collect();
    let offset = (tick as usize) % chars.len();
    (0..width).map(|i| chars[(offset + i) % chars.len()]).collect()
}

pub fn highlights(b: &mut PageBuilder, profile: &Profile, state: &PageState) {
    let start = b.height();
    let s = reveal_styles(state.is_revealed("highlights"));

    b.styled("Highlights that shift as you scroll", s.title);
    b.wrapped(
        "Pinned visual on the left, story-driven movement on the right.",
        s.text,
    );
    b.blank();

    for (idx, item) in profile.highlights.iter().enumerate() {
        let id = format!("highlight-{}", idx);
        let card_start = b.height();
        let revealed = state.is_revealed(&id);
        let cs = reveal_styles(revealed);
        let is_active = idx == state.active_story;

        // Active card styling only once the card has revealed.
        let (num_style, head_style) = if !revealed {
            (cs.muted, cs.title)
        } else if is_active {
            (
                Style::default()
                    .fg(LIME_PRIMARY)
                    .bg(BG_TERTIARY)
                    .add_modifier(Modifier::BOLD),
                Style::default()
                    .fg(TEXT_PRIMARY)
                    .bg(BG_TERTIARY)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (cs.muted, Style::default().fg(TEXT_SECONDARY).add_modifier(Modifier::BOLD))
        };

        let mut header = vec![
            Span::styled(format!("{:02} ", idx + 1), num_style),
            Span::styled(item.heading.clone(), head_style),
        ];
        if !item.when.is_empty() {
            header.push(Span::styled(format!("  {}", item.when), cs.muted));
        }
        b.line(Line::from(header));

        b.wrapped(&item.body, cs.text);
        for row in chip_rows(&item.tags, b.width()) {
            b.styled(row, cs.muted);
        }
        b.blank();

        b.mark(&id, card_start, true);
    }

    // Band travel: keep the container taller than the viewport so every
    // story band is reachable before the next section arrives.
    for _ in 0..(state.viewport_h / 2) {
        b.blank();
    }

    b.mark("highlights", start, true);
}

pub fn experience(b: &mut PageBuilder, profile: &Profile, state: &PageState) {
    let start = b.height();

    b.styled(
        "Experience",
        Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
    );
    b.styled(
        "Impact across roles, teams, and tools.",
        Style::default().fg(TEXT_MUTED),
    );
    b.blank();

    for entry in &profile.experience {
        // Resolved logo gets the accent badge; missing files fall back
        // to a dim initials badge.
        let badge_color = if resolve_logo(state.assets, std::slice::from_ref(&entry.logo)).is_some()
        {
            LIME_PRIMARY
        } else {
            TEXT_MUTED
        };
        b.line(Line::from(vec![
            Span::styled(
                format!("⟦{}⟧ ", initials(&entry.company)),
                Style::default().fg(badge_color),
            ),
            Span::styled(
                entry.role.clone(),
                Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  ·  {}", entry.company), Style::default().fg(TEXT_SECONDARY)),
        ]));
        b.styled(entry.dates.clone(), Style::default().fg(TEXT_MUTED));
        for line in &entry.bullets {
            bullet(b, line, Style::default().fg(TEXT_SECONDARY));
        }
        b.blank();
    }

    b.mark("experience", start, false);
}

pub fn projects(b: &mut PageBuilder, profile: &Profile, _state: &PageState) {
    let start = b.height();

    b.styled(
        "Selected work",
        Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
    );
    b.styled(
        "Short case-study cards that scan fast.",
        Style::default().fg(TEXT_MUTED),
    );
    b.blank();

    for project in &profile.projects {
        b.styled(
            project.name.clone(),
            Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
        );
        b.wrapped(&project.desc, Style::default().fg(TEXT_SECONDARY));
        for row in chip_rows(&project.tags, b.width()) {
            b.styled(row, Style::default().fg(TEXT_MUTED));
        }
        b.blank();
    }

    b.mark("projects", start, false);
}

pub fn skills(b: &mut PageBuilder, profile: &Profile, _state: &PageState) {
    let start = b.height();

    b.styled(
        "Skills",
        Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
    );
    b.styled(
        "Skills and tools used day to day.",
        Style::default().fg(TEXT_MUTED),
    );
    b.blank();

    for skill in &profile.skills.core {
        bullet(b, skill, Style::default().fg(TEXT_SECONDARY));
    }
    b.blank();
    b.styled("Tools", Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD));
    for row in chip_rows(&profile.skills.tools, b.width()) {
        b.styled(row, Style::default().fg(TEXT_SECONDARY));
    }

    b.mark("skills", start, false);
}

pub fn education(b: &mut PageBuilder, profile: &Profile, state: &PageState) {
    let start = b.height();

    b.styled(
        "Education",
        Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
    );
    b.blank();

    for entry in &profile.education {
        let sources = entry.logo_sources();
        let badge_color = if resolve_logo(state.assets, &sources).is_some() {
            LIME_PRIMARY
        } else {
            TEXT_MUTED
        };
        b.line(Line::from(vec![
            Span::styled(
                format!("⟦{}⟧ ", initials(&entry.school)),
                Style::default().fg(badge_color),
            ),
            Span::styled(
                entry.school.clone(),
                Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", entry.dates), Style::default().fg(TEXT_MUTED)),
        ]));
        b.styled(entry.degree.clone(), Style::default().fg(TEXT_SECONDARY));
        if !entry.location.is_empty() {
            b.styled(entry.location.clone(), Style::default().fg(TEXT_MUTED));
        }
        b.blank();
    }

    b.mark("education", start, false);
}

pub fn contact(b: &mut PageBuilder, profile: &Profile, state: &PageState) {
    let start = b.height();

    b.styled("CONTACT ME", Style::default().fg(LIME_PRIMARY));
    b.styled(
        "Let's connect",
        Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
    );
    b.blank();

    let resume = if profile.resume.is_empty() {
        String::new()
    } else {
        asset_path(state.assets, &profile.resume).display().to_string()
    };
    contact_tile(b, "Resume", &resume);
    if let Some(location) = &profile.location {
        contact_tile(b, "Location", location);
    }
    contact_tile(b, "Phone", &profile.phone);
    contact_tile(b, "Email", &profile.email);
    contact_tile(b, "LinkedIn", &profile.linkedin);

    b.blank();
    b.wrapped(
        "Press c to compose a message. This opens your email client with the message prefilled.",
        Style::default().fg(TEXT_MUTED),
    );

    b.mark("contact", start, false);
}

fn contact_tile(b: &mut PageBuilder, label: &str, value: &str) {
    let value = if value.is_empty() { "—" } else { value };
    b.line(Line::from(vec![
        Span::styled(format!("{:<10}", label), Style::default().fg(TEXT_MUTED)),
        Span::styled(value.to_string(), Style::default().fg(TEXT_PRIMARY)),
    ]));
}

pub fn footer(b: &mut PageBuilder, profile: &Profile) {
    b.styled(format!("© {}", profile.name), Style::default().fg(TEXT_HIDDEN));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marquee_window_width_and_rotation() {
        let items = vec!["alpha".to_string(), "beta".to_string()];
        let w0 = marquee_window(&items, 0, 20);
        assert_eq!(w0.chars().count(), 20);

        // One full cycle returns to the start.
        let base_len = "ALPHA   ·   BETA   ·   ".chars().count();
        assert_eq!(marquee_window(&items, base_len as u64, 20), w0);

        // A single step rotates by one character.
        let w1 = marquee_window(&items, 1, 20);
        assert_ne!(w0, w1);
        assert_eq!(w0.chars().nth(1), w1.chars().next());
    }

    #[test]
    fn test_marquee_window_degenerate_inputs() {
        assert_eq!(marquee_window(&[], 5, 20), "");
        assert_eq!(marquee_window(&["x".to_string()], 5, 0), "");
    }
}
