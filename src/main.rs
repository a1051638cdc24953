use std::io::{self, stdout};
use std::time::Duration;

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind,
        MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;

mod app;
mod cli;
mod engine;
mod models;
mod scroll;
mod theme;
mod ui;
mod utils;
mod watcher;

use app::App;
use models::{Mode, Profile};

fn main() -> io::Result<()> {
    let config = cli::parse_args()?;
    let frame_budget = Duration::from_millis((1000 / config.fps.max(1)) as u64);

    // Resolve and load the profile before touching the terminal
    let profile_path = Profile::find_source(config.profile_path.clone());
    let profile = match &profile_path {
        Some(path) => Profile::load(path)?,
        None => Profile::embedded()?,
    };

    let mut app = App::new(config, profile, profile_path.clone());

    // Watch the profile file for live edits; dropped on exit
    let _watcher = profile_path
        .and_then(|path| watcher::setup_profile_watcher(path, app.profile_needs_reload.clone()));

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    // Run the app
    let result = run(&mut terminal, &mut app, frame_budget);

    // Restore terminal
    app.teardown();
    stdout().execute(DisableMouseCapture)?;
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    frame_budget: Duration,
) -> io::Result<()> {
    loop {
        // Input: scroll and resize events only mark the sampler; the
        // engines run at most once per frame below.
        if event::poll(frame_budget)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if !handle_key(app, key.code) {
                        break;
                    }
                }
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::ScrollUp => app.scroll_by(-3.0),
                    MouseEventKind::ScrollDown => app.scroll_by(3.0),
                    _ => {}
                },
                Event::Resize(_, _) => app.sampler.request(),
                _ => {}
            }
        }

        app.reload_profile_if_needed();
        app.tick();
        if app.sampler.take_frame() {
            app.run_engines();
        }

        terminal.draw(|frame| ui::draw(frame, app))?;
    }

    Ok(())
}

/// Handle one key press. Returns false to quit.
fn handle_key(app: &mut App, code: KeyCode) -> bool {
    match app.mode {
        Mode::Compose => match code {
            KeyCode::Esc => app.close_compose(),
            KeyCode::Enter => app.submit_compose(),
            KeyCode::Tab | KeyCode::Down => app.compose.focus = app.compose.focus.next(),
            KeyCode::Backspace => {
                app.compose.field_mut().pop();
            }
            KeyCode::Char(c) => app.compose.field_mut().push(c),
            _ => {}
        },
        Mode::Browse => match code {
            KeyCode::Char('q') | KeyCode::Esc => return false,
            KeyCode::Char('j') | KeyCode::Down => app.scroll_by(2.0),
            KeyCode::Char('k') | KeyCode::Up => app.scroll_by(-2.0),
            KeyCode::PageDown | KeyCode::Char(' ') => app.scroll_by(app.page_height as f32),
            KeyCode::PageUp => app.scroll_by(-(app.page_height as f32)),
            KeyCode::Char('g') | KeyCode::Home => app.scroll_to(0.0),
            KeyCode::Char('G') | KeyCode::End => app.scroll_to(f32::MAX),
            KeyCode::Char('c') => app.open_compose(),
            _ => {}
        },
    }
    true
}
