//! Application state and core logic for the portfolio TUI.
//!
//! This module contains the `App` struct which holds all state for the
//! interactive terminal UI: the loaded profile, scroll/tween state, the
//! scroll-synchronization engines, and the contact composer.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Instant;

use crate::cli::CliConfig;
use crate::engine::{
    traversal_progress, RevealEngine, ScrollProgress, ScrollSampler, StoryEngine, ThemeSwitcher,
    Viewport,
};
use crate::models::{ComposeField, Mode, Profile, SectionId};
use crate::scroll::{ScrollTween, SCROLL_TWEEN_MS};
use crate::theme::theme_for;
use crate::ui::page::{build_page, PageLayout, PageState};
use crate::utils::build_mailto;

/// Scroll offset past which the back-to-top affordance appears, in rows.
pub const BACK_TO_TOP_AFTER: f32 = 48.0;

/// Rows the hero art shifts against scroll direction at the extremes.
const PARALLAX_STRENGTH: f32 = 2.0;

/// Milliseconds between animation ticks (marquee step, pulse).
const ANIMATION_TICK_MS: u128 = 100;

/// Contact composer fields and focus
#[derive(Debug, Default)]
pub struct ComposeState {
    pub name: String,
    pub email: String,
    pub message: String,
    pub focus: ComposeField,
}

impl ComposeState {
    pub fn field_mut(&mut self) -> &mut String {
        match self.focus {
            ComposeField::Name => &mut self.name,
            ComposeField::Email => &mut self.email,
            ComposeField::Message => &mut self.message,
        }
    }
}

/// Application state
pub struct App {
    pub profile: Profile,
    pub profile_path: Option<PathBuf>,
    pub profile_needs_reload: Arc<Mutex<bool>>,
    pub assets_dir: PathBuf,
    pub reduced_motion: bool,
    pub mode: Mode,
    pub compose: ComposeState,
    // Scroll state
    pub scroll: f32,
    pub tween: ScrollTween,
    // Engines
    pub sampler: ScrollSampler,
    pub progress: ScrollProgress,
    pub story: StoryEngine,
    pub reveal: RevealEngine,
    pub switcher: ThemeSwitcher,
    // Geometry from the last draw
    pub layout: PageLayout,
    pub page_width: u16,
    pub page_height: u16,
    // Derived per sampled frame
    pub hero_parallax: i16,
    pub show_top_hint: bool,
    // Animation state
    pub animation_tick: u64,
    pub last_animation_update: Instant,
    pub session_start: Instant,
    // Last composed mailto link (shown in the bottom bar)
    pub mailto_notice: Option<String>,
}

impl App {
    pub fn new(config: CliConfig, profile: Profile, profile_path: Option<PathBuf>) -> Self {
        let now = Instant::now();
        let anchors: Vec<&str> = SectionId::CANDIDATES.iter().map(|s| s.anchor()).collect();
        let mut sampler = ScrollSampler::new();
        sampler.activate();

        Self {
            story: StoryEngine::new(SectionId::Highlights.anchor(), profile.highlights.len()),
            switcher: ThemeSwitcher::new(&anchors),
            profile,
            profile_path,
            profile_needs_reload: Arc::new(Mutex::new(false)),
            assets_dir: config.assets_dir,
            reduced_motion: config.reduced_motion,
            mode: Mode::Browse,
            compose: ComposeState::default(),
            scroll: 0.0,
            tween: ScrollTween::idle(0.0),
            sampler,
            progress: ScrollProgress::new(),
            reveal: RevealEngine::new(),
            layout: PageLayout::empty(),
            page_width: 0,
            page_height: 0,
            hero_parallax: 0,
            show_top_hint: false,
            animation_tick: 0,
            last_animation_update: now,
            session_start: now,
            mailto_notice: None,
        }
    }

    /// Milliseconds since startup; the tween clock.
    pub fn now_ms(&self) -> u64 {
        self.session_start.elapsed().as_millis() as u64
    }

    /// Largest valid scroll offset for the current layout.
    pub fn max_scroll(&self) -> f32 {
        (self.layout.total_height() as f32 - self.page_height as f32).max(0.0)
    }

    /// Move the scroll target by a delta (keyboard/wheel input).
    pub fn scroll_by(&mut self, delta: f32) {
        self.scroll_to(self.tween.target() + delta);
    }

    /// Ease toward an absolute offset; jump when reduced motion is set.
    pub fn scroll_to(&mut self, to: f32) {
        let to = to.clamp(0.0, self.max_scroll());
        if self.reduced_motion {
            self.tween.snap(to);
            if to != self.scroll {
                self.scroll = to;
                self.sampler.request();
            }
        } else {
            self.tween.retarget(self.now_ms(), to, SCROLL_TWEEN_MS);
        }
    }

    /// Advance time-based state once per loop iteration: the animation
    /// tick and the scroll tween. Tween movement counts as a scroll
    /// event for the sampler.
    pub fn tick(&mut self) {
        if self.last_animation_update.elapsed().as_millis() >= ANIMATION_TICK_MS {
            self.animation_tick = self.animation_tick.wrapping_add(1);
            self.last_animation_update = Instant::now();
        }

        let now = self.now_ms();
        if !self.tween.is_done(now) {
            self.scroll = self.tween.sample(now);
            self.sampler.request();
        } else if self.tween.target() != self.scroll {
            // Apply the final position of a tween that settled between
            // loop ticks.
            self.scroll = self.tween.target();
            self.sampler.request();
        }
    }

    /// Build the page document for the current state at the given pane
    /// size.
    pub fn build_layout(&self, width: u16, height: u16) -> PageLayout {
        let state = PageState {
            width,
            viewport_h: height,
            active_story: self.story.active(),
            revealed: self.reveal.revealed(),
            theme: theme_for(self.switcher.active()),
            tick: self.animation_tick,
            parallax: self.hero_parallax,
            assets: &self.assets_dir,
        };
        build_page(&self.profile, &state)
    }

    /// Store the freshly built layout as the engines' geometry source.
    /// A geometry change (resize, profile reload, first build) requests a
    /// sample so the engines observe the new layout.
    pub fn set_layout(&mut self, layout: PageLayout, width: u16, height: u16) {
        let geometry_changed = width != self.page_width
            || height != self.page_height
            || layout.total_height() != self.layout.total_height();

        self.layout = layout;
        self.page_width = width;
        self.page_height = height;

        let reveal_ids: Vec<String> = self.layout.reveal_ids().map(str::to_string).collect();
        for id in &reveal_ids {
            self.reveal.track(id);
        }

        let max = self.max_scroll();
        if self.scroll > max {
            self.scroll = max;
            self.tween.snap(max);
        }

        if geometry_changed {
            self.sampler.request();
        }
    }

    /// One coalesced engine pass: every scroll-derived piece of state is
    /// recomputed from the same layout snapshot.
    pub fn run_engines(&mut self) {
        let view = self.layout.view(self.scroll, self.page_height as f32);

        self.progress.sample(&view);
        self.story.sample(&view);
        self.reveal.sample(&view);
        self.switcher.sample(&view);

        self.hero_parallax = match view.element_rect("hero-art") {
            Some(rect) => {
                let t = traversal_progress(rect, view.viewport_height());
                (PARALLAX_STRENGTH - t * 2.0 * PARALLAX_STRENGTH).round() as i16
            }
            None => 0,
        };
        self.show_top_hint = self.scroll > BACK_TO_TOP_AFTER;
    }

    /// Reload the profile from disk if the watcher flagged a change.
    pub fn reload_profile_if_needed(&mut self) {
        let needs_reload = {
            let Ok(mut flag) = self.profile_needs_reload.lock() else {
                return;
            };
            if *flag {
                *flag = false;
                true
            } else {
                false
            }
        };

        if needs_reload {
            if let Some(path) = self.profile_path.clone() {
                if let Ok(profile) = Profile::load(&path) {
                    self.story.set_count(profile.highlights.len());
                    self.profile = profile;
                    // Force a rebuild + fresh sample on the next draw.
                    self.page_width = 0;
                    self.sampler.request();
                }
            }
        }
    }

    pub fn open_compose(&mut self) {
        self.mode = Mode::Compose;
    }

    pub fn close_compose(&mut self) {
        self.mode = Mode::Browse;
    }

    /// Assemble the mailto link from the composer fields and hand it to
    /// the platform opener. The link is kept around for the bottom bar.
    pub fn submit_compose(&mut self) {
        let url = build_mailto(
            &self.profile.email,
            &self.compose.name,
            &self.compose.email,
            &self.compose.message,
        );
        crate::utils::open_link(&url);
        self.mailto_notice = Some(url);
        self.mode = Mode::Browse;
    }

    /// Teardown: stop sampling and drop every visibility subscription.
    /// Nothing fires after this returns.
    pub fn teardown(&mut self) {
        self.sampler.deactivate();
        self.reveal.disconnect();
        self.switcher.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        let config = CliConfig {
            profile_path: None,
            assets_dir: PathBuf::from("."),
            fps: 30,
            reduced_motion: true,
        };
        App::new(config, Profile::embedded().unwrap(), None)
    }

    /// Lay the page out so the viewport ends exactly where the highlight
    /// section starts, mirroring a full-height hero.
    fn lay_out(app: &mut App, width: u16) -> u16 {
        let probe = app.build_layout(width, 24);
        let viewport_h = probe.span("highlights").unwrap().top as u16;
        let layout = app.build_layout(width, viewport_h);
        app.set_layout(layout, width, viewport_h);
        viewport_h
    }

    #[test]
    fn test_initial_load_state() {
        let mut app = test_app();
        lay_out(&mut app, 72);

        // Activation plus the first layout coalesce into one sample.
        assert!(app.sampler.take_frame());
        app.run_engines();
        assert!(!app.sampler.take_frame());

        assert_eq!(app.progress.value(), 0.0);
        assert_eq!(app.story.active(), 0);
        assert_eq!(app.switcher.active(), SectionId::Top);
        assert!(!app.show_top_hint);

        // Only elements inside the initial viewport have revealed.
        assert!(app.reveal.is_revealed("hero"));
        assert!(!app.reveal.is_revealed("highlight-0"));
        let last = format!("highlight-{}", app.profile.highlights.len() - 1);
        assert!(!app.reveal.is_revealed(&last));
    }

    #[test]
    fn test_scrolled_to_bottom_state() {
        let mut app = test_app();
        lay_out(&mut app, 72);
        app.sampler.take_frame();
        app.run_engines();

        app.scroll_to(f32::MAX);
        assert!(app.sampler.take_frame());
        app.run_engines();

        assert_eq!(app.scroll, app.max_scroll());
        assert_eq!(app.progress.value(), 1.0);
        assert!(app.show_top_hint);
        assert_eq!(app.switcher.active(), SectionId::Contact);
    }

    #[test]
    fn test_story_walks_bands_while_scrolling() {
        let mut app = test_app();
        lay_out(&mut app, 72);
        app.sampler.take_frame();
        app.run_engines();

        let count = app.profile.highlights.len();
        let span_top = app.layout.span("highlights").unwrap().top as f32;
        let span_height = app.layout.span("highlights").unwrap().height as f32;
        let travel = span_height - app.page_height as f32;
        assert!(travel > 0.0);

        // End of the first band maps to index 0, deep travel to the last.
        app.scroll_to(span_top + travel * 0.05);
        app.sampler.take_frame();
        app.run_engines();
        assert_eq!(app.story.active(), 0);

        app.scroll_to(span_top + travel * 0.99);
        app.sampler.take_frame();
        app.run_engines();
        assert_eq!(app.story.active(), count - 1);
    }

    #[test]
    fn test_scroll_to_clamps_and_snaps_in_reduced_motion() {
        let mut app = test_app();
        lay_out(&mut app, 72);

        app.scroll_to(-50.0);
        assert_eq!(app.scroll, 0.0);

        app.scroll_to(1e9);
        assert_eq!(app.scroll, app.max_scroll());
        assert!(app.tween.is_done(app.now_ms()));
    }

    #[test]
    fn test_teardown_stops_sampling() {
        let mut app = test_app();
        lay_out(&mut app, 72);
        app.teardown();

        app.scroll_by(10.0);
        assert!(!app.sampler.take_frame());
    }

    #[test]
    fn test_compose_submit_builds_notice_and_returns_to_browse() {
        let mut app = test_app();
        app.open_compose();
        assert_eq!(app.mode, Mode::Compose);

        app.compose.name.push_str("Ada");
        app.compose.focus = app.compose.focus.next();
        app.compose.field_mut().push_str("ada@example.com");

        // Build the link directly rather than spawning an opener here.
        let url = build_mailto(
            &app.profile.email,
            &app.compose.name,
            &app.compose.email,
            &app.compose.message,
        );
        app.mailto_notice = Some(url.clone());
        app.close_compose();

        assert_eq!(app.mode, Mode::Browse);
        assert!(url.starts_with("mailto:"));
        assert!(url.contains("Ada"));
    }
}
