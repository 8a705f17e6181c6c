use crate::app::{App, AppEvent, AppMode, PROGRESS_STEP, PROGRESS_STEP_COARSE, PROGRESS_STEP_FINE};
use crate::layout::ViewportEstimate;
use crate::ui::terminal_guard::TerminalGuard;
use crate::ui::view::{render_narrative, render_slider, render_status};
use crossterm::event::{self, Event, KeyCode};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    widgets::Paragraph,
    Terminal,
};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(33);

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    _guard: TerminalGuard,
}

impl TuiManager {
    pub fn new() -> Result<Self, io::Error> {
        let guard = TerminalGuard::new()?;
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager {
            terminal,
            _guard: guard,
        })
    }

    pub fn run_event_loop(&mut self, app: &mut App) -> io::Result<()> {
        let mut last_tick = Instant::now();
        let render_tick = Duration::from_millis(1000 / 60);

        self.render_frame(app)?;

        loop {
            if app.mode == AppMode::Quit {
                return Ok(());
            }

            match event::poll(POLL_INTERVAL) {
                Ok(true) => {
                    if let Event::Key(key) = event::read()? {
                        handle_key(app, key.code);
                    }
                }
                Ok(false) => {}
                Err(e) => return Err(e),
            }

            if last_tick.elapsed() >= render_tick {
                self.render_frame(app)?;
                last_tick = Instant::now();
            }
        }
    }

    pub fn render_frame(&mut self, app: &App) -> io::Result<()> {
        self.terminal.draw(|frame| {
            let area = frame.area();
            let viewport = ViewportEstimate::from_columns(area.width);
            let state = app.render_state(viewport.pixel_width);

            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(1),
                    Constraint::Length(1),
                    Constraint::Length(1),
                ])
                .split(area);

            // Narrow side margins so the flowed text breathes like the page.
            let content = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Length(2),
                    Constraint::Min(1),
                    Constraint::Length(2),
                ])
                .split(chunks[0])[1];

            frame.render_widget(render_narrative(&state, content.width), content);
            frame.render_widget(
                Paragraph::new(render_slider(state.progress, chunks[1].width)),
                chunks[1],
            );
            frame.render_widget(Paragraph::new(render_status(&state)), chunks[2]);
        })?;

        Ok(())
    }
}

/// Translate a key press into app mutations for the current mode.
fn handle_key(app: &mut App, code: KeyCode) {
    match app.mode {
        AppMode::Command => match code {
            KeyCode::Enter => app.submit_command(),
            KeyCode::Esc => app.cancel_command(),
            KeyCode::Backspace => app.pop_command_char(),
            KeyCode::Char(c) => app.push_command_char(c),
            _ => {}
        },
        AppMode::Reveal => match code {
            KeyCode::Char('q') => app.apply_event(AppEvent::Quit),
            KeyCode::Char(':') | KeyCode::Char('@') => {
                app.begin_command();
                if code == KeyCode::Char('@') {
                    app.push_command_char('@');
                }
            }
            KeyCode::Char('?') => app.apply_event(AppEvent::Help),
            KeyCode::Left => app.adjust_progress(-PROGRESS_STEP),
            KeyCode::Right => app.adjust_progress(PROGRESS_STEP),
            KeyCode::Char('h') => app.adjust_progress(-PROGRESS_STEP_FINE),
            KeyCode::Char('l') => app.adjust_progress(PROGRESS_STEP_FINE),
            KeyCode::PageUp => app.adjust_progress(-PROGRESS_STEP_COARSE),
            KeyCode::PageDown => app.adjust_progress(PROGRESS_STEP_COARSE),
            KeyCode::Home => app.set_progress(0.0),
            KeyCode::End => app.set_progress(100.0),
            _ => {}
        },
        AppMode::Quit => {}
    }
}
