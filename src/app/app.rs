use super::event::AppEvent;
use super::mode::AppMode;
use super::render_state::RenderState;
use crate::frame::compose;
use crate::input::{load_clipboard, load_file};
use crate::layout::LayoutConfig;
use crate::narrative::visibility::MAX_PROGRESS;
use crate::ui::command::{command_to_app_event, parse_command};

/// Fine step matching the reference slider resolution.
pub const PROGRESS_STEP_FINE: f64 = 0.1;
pub const PROGRESS_STEP: f64 = 1.0;
pub const PROGRESS_STEP_COARSE: f64 = 10.0;

const HELP_TEXT: &str =
    "←/→ reveal ±1  h/l ±0.1  PgUp/PgDn ±10  Home/End jump  : command  q quit";

pub struct App {
    pub mode: AppMode,
    text: String,
    source: String,
    progress: f64,
    command_input: String,
    status: Option<String>,
    layout: LayoutConfig,
}

impl App {
    pub fn new(text: String, source: String) -> Self {
        Self {
            mode: AppMode::Reveal,
            text,
            source,
            progress: 0.0,
            command_input: String::new(),
            status: None,
            layout: LayoutConfig::default(),
        }
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn set_progress(&mut self, value: f64) {
        self.progress = value.clamp(0.0, MAX_PROGRESS);
    }

    pub fn adjust_progress(&mut self, delta: f64) {
        self.set_progress(self.progress + delta);
    }

    pub fn set_text(&mut self, text: String, source: String) {
        self.text = text;
        self.source = source;
        self.progress = 0.0;
        self.status = Some(format!("Loaded {}", self.source));
    }

    // Command deck

    pub fn begin_command(&mut self) {
        self.mode = AppMode::Command;
        self.command_input.clear();
        self.status = None;
    }

    pub fn cancel_command(&mut self) {
        self.mode = AppMode::Reveal;
        self.command_input.clear();
    }

    pub fn push_command_char(&mut self, c: char) {
        self.command_input.push(c);
    }

    pub fn pop_command_char(&mut self) {
        self.command_input.pop();
    }

    /// Parse and apply the command deck buffer, returning to Reveal mode
    /// unless the command quits.
    pub fn submit_command(&mut self) {
        let command = parse_command(&self.command_input);
        let event = command_to_app_event(&command);
        self.command_input.clear();
        self.mode = AppMode::Reveal;
        self.apply_event(event);
    }

    pub fn apply_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::LoadFile(path) => match load_file(&path) {
                Ok(loaded) => self.set_text(loaded.text, loaded.source),
                Err(e) => self.status = Some(format!("Load failed: {}", e)),
            },
            AppEvent::LoadClipboard => match load_clipboard() {
                Ok(loaded) => self.set_text(loaded.text, loaded.source),
                Err(e) => self.status = Some(format!("Clipboard failed: {}", e)),
            },
            AppEvent::Quit => self.mode = AppMode::Quit,
            AppEvent::Help => self.status = Some(HELP_TEXT.to_string()),
            AppEvent::Warning(msg) => self.status = Some(msg),
            AppEvent::InvalidCommand(input) => {
                self.status = Some(format!("Unknown command: {}", input));
            }
            AppEvent::None => {}
        }
    }

    /// Snapshot everything the renderer needs for one frame.
    pub fn render_state(&self, viewport_px: f64) -> RenderState {
        RenderState {
            frame: compose(&self.text, self.progress, viewport_px, &self.layout),
            progress: self.progress,
            mode: self.mode,
            source: self.source.clone(),
            status: self.status.clone(),
            command_input: if self.mode == AppMode::Command {
                Some(self.command_input.clone())
            } else {
                None
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new("HELLO\n==red:WORLD==".to_string(), "sample".to_string())
    }

    #[test]
    fn test_new_starts_at_zero_in_reveal_mode() {
        let app = app();
        assert_eq!(app.mode, AppMode::Reveal);
        assert_eq!(app.progress(), 0.0);
    }

    #[test]
    fn test_adjust_progress_clamps_low() {
        let mut app = app();
        app.adjust_progress(-5.0);
        assert_eq!(app.progress(), 0.0);
    }

    #[test]
    fn test_adjust_progress_clamps_high() {
        let mut app = app();
        app.adjust_progress(150.0);
        assert_eq!(app.progress(), 100.0);
    }

    #[test]
    fn test_fine_step_accumulates() {
        let mut app = app();
        for _ in 0..10 {
            app.adjust_progress(PROGRESS_STEP_FINE);
        }
        assert!((app.progress() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_quit_event() {
        let mut app = app();
        app.apply_event(AppEvent::Quit);
        assert_eq!(app.mode, AppMode::Quit);
    }

    #[test]
    fn test_command_deck_round_trip() {
        let mut app = app();
        app.begin_command();
        assert_eq!(app.mode, AppMode::Command);
        for c in ":q".chars() {
            app.push_command_char(c);
        }
        app.submit_command();
        assert_eq!(app.mode, AppMode::Quit);
    }

    #[test]
    fn test_cancel_command_returns_to_reveal() {
        let mut app = app();
        app.begin_command();
        app.push_command_char(':');
        app.cancel_command();
        assert_eq!(app.mode, AppMode::Reveal);
        let state = app.render_state(1200.0);
        assert_eq!(state.command_input, None);
    }

    #[test]
    fn test_invalid_command_sets_status() {
        let mut app = app();
        app.begin_command();
        for c in ":wat".chars() {
            app.push_command_char(c);
        }
        app.submit_command();
        assert_eq!(app.mode, AppMode::Reveal);
        let state = app.render_state(1200.0);
        assert!(state.status.unwrap().contains("Unknown command"));
    }

    #[test]
    fn test_load_missing_file_warns_instead_of_failing() {
        let mut app = app();
        app.apply_event(AppEvent::LoadFile("missing_99.txt".to_string()));
        let state = app.render_state(1200.0);
        assert!(state.status.unwrap().contains("Load failed"));
        assert_eq!(app.mode, AppMode::Reveal);
    }

    #[test]
    fn test_set_text_resets_progress() {
        let mut app = app();
        app.set_progress(80.0);
        app.set_text("NEW TEXT".to_string(), "other".to_string());
        assert_eq!(app.progress(), 0.0);
    }

    #[test]
    fn test_render_state_reflects_progress() {
        let mut app = app();
        let at_zero = app.render_state(1200.0);
        assert_eq!(at_zero.frame.visible_count, 1);
        app.set_progress(100.0);
        let at_full = app.render_state(1200.0);
        assert_eq!(at_full.frame.visible_count, 2);
    }
}
