use std::io;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use tracing::info;

use snapdeck_core::AppConfig;
use snapdeck_tui::{
    app::{App, Mode},
    event::EventHandler,
    keymap::Keymap,
    load_theme,
    widgets::{HelpWidget, NavDotsWidget, StageWidget, StatusBarWidget},
};

use super::load_content;

pub async fn run(config: Arc<AppConfig>) -> Result<()> {
    let keymap = Keymap::from_config(&config.keymap);
    let theme = load_theme(&config.ui.theme);

    // Load content before touching the terminal so errors print normally
    let site = load_content(config.content_path().as_deref()).await?;
    let mut app = App::new(config.clone(), site, theme)?;
    info!(
        sections = app.site.len(),
        reduced_motion = config.ui.reduced_motion,
        "starting snapdeck"
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    let title = app.site.title.clone();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle(title))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app, &keymap);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    keymap: &Keymap,
) -> Result<()> {
    let event_handler =
        EventHandler::with_animation_fps(app.config.ui.tick_rate_ms, app.config.ui.transition.animation_fps);

    loop {
        // Fold this frame's input into at most one section change
        app.advance_frame(Instant::now());

        let now = Instant::now();
        let mut hitboxes = Vec::new();
        let view: &App = app;
        terminal.draw(|frame| {
            let size = frame.area();

            // Main layout: stage + status bar
            let main_layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(size);

            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Min(1),
                    Constraint::Length(NavDotsWidget::preferred_width(view)),
                ])
                .split(main_layout[0]);

            StageWidget::render(frame, columns[0], view);
            hitboxes = NavDotsWidget::render(frame, columns[1], view);
            StatusBarWidget::render(frame, main_layout[1], view, now);

            if view.mode == Mode::Help {
                HelpWidget::render(frame, view);
            }
        })?;
        app.nav_hitboxes = hitboxes;

        // Wait at animation rate while a slide or lock is in flight, then take
        // the whole burst so the next flush sees it at once
        let events = if app.needs_fast_update(Instant::now()) {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        app.handle_events(events, keymap, Instant::now());

        if app.should_quit {
            info!("quitting");
            return Ok(());
        }
    }
}
