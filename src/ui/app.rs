//! Main TUI application state and logic

use crate::feedback::Feedback;
use crate::game::{ScoreButton, Scoreboard, Team};
use crate::prefs::{PreferenceChange, Preferences};
use crate::ui::theme::{Scheme, Theme};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame, Terminal,
};
use std::io;
use std::sync::mpsc::Receiver;
use std::time::Duration;

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Scoreboard,
    Settings,
}

/// The main application state
pub struct App {
    /// Scores, history, and team selection for this session
    pub scoreboard: Scoreboard,

    pub prefs: Preferences,

    pub feedback: Feedback,

    /// Scheme used when no theme is forced
    pub system_scheme: Scheme,

    pub screen: Screen,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    changes: Receiver<PreferenceChange>,
}

impl App {
    pub fn new(
        scoreboard: Scoreboard,
        mut prefs: Preferences,
        feedback: Feedback,
        system_scheme: Scheme,
    ) -> Self {
        let changes = prefs.subscribe();
        App {
            scoreboard,
            prefs,
            feedback,
            system_scheme,
            screen: Screen::Scoreboard,
            should_quit: false,
            status_message: String::from("Ready!"),
            changes,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            self.draw(terminal)?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    pub fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        self.drain_changes();
        terminal.draw(|f| self.render(f))?;
        Ok(())
    }

    pub fn scheme(&self) -> Scheme {
        self.prefs.scheme(self.system_scheme)
    }

    pub fn open_settings(&mut self) {
        self.screen = Screen::Settings;
        self.status_message = "Settings".to_string();
    }

    pub fn back(&mut self) {
        self.screen = Screen::Scoreboard;
        self.status_message = "Ready!".to_string();
    }

    fn render(&mut self, frame: &mut Frame) {
        let theme = Theme::for_scheme(self.scheme());
        let size = frame.area();

        frame.render_widget(
            Block::default().style(Style::default().bg(theme.bg).fg(theme.fg)),
            size,
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        match self.screen {
            Screen::Scoreboard => {
                super::panes::render_scoreboard(frame, chunks[0], &self.scoreboard, theme)
            }
            Screen::Settings => super::panes::render_settings(
                frame,
                chunks[0],
                &self.prefs,
                self.feedback.is_supported(),
                theme,
            ),
        }

        super::panes::render_status_bar(
            frame,
            chunks[1],
            theme,
            super::panes::StatusRenderData {
                message: &self.status_message,
                screen: self.screen,
                history: self.scoreboard.history(),
                show_five_button: self.scoreboard.buttons().contains(&ScoreButton::Five),
            },
        );
    }

    /// Turn preference changes into status messages
    fn drain_changes(&mut self) {
        while let Ok(change) = self.changes.try_recv() {
            self.status_message = match change {
                PreferenceChange::HapticsEnabled(true) => "Haptic feedback on".to_string(),
                PreferenceChange::HapticsEnabled(false) => "Haptic feedback off".to_string(),
                PreferenceChange::ForcedTheme(scheme) => format!("Theme: {}", scheme.name()),
            };
        }
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('z') if self.screen == Screen::Scoreboard => self.undo(),
                KeyCode::Char('y') if self.screen == Screen::Scoreboard => self.redo(),
                _ => {}
            }
            return;
        }

        if let KeyCode::Char('q') | KeyCode::Char('Q') = key.code {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Scoreboard => self.handle_scoreboard_key(key.code),
            Screen::Settings => self.handle_settings_key(key.code),
        }
    }

    fn handle_scoreboard_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Tab | KeyCode::BackTab => {
                self.feedback.press(&self.prefs);
                self.scoreboard.toggle_team();
                self.status_message = format!("{} selected", self.scoreboard.selected());
            }
            KeyCode::Up => self.select_team(Team::Team1),
            KeyCode::Down => self.select_team(Team::Team2),
            KeyCode::Left | KeyCode::Char('u') => self.undo(),
            KeyCode::Right | KeyCode::Char('r') => self.redo(),
            KeyCode::Char('c') | KeyCode::Char('C') => {
                self.feedback.press(&self.prefs);
                self.scoreboard.clear();
                self.status_message = "Scores cleared".to_string();
            }
            KeyCode::Char('s') | KeyCode::Char('S') => self.open_settings(),
            KeyCode::Char(c) => {
                if let Some(button) = ScoreButton::from_key(self.scoreboard.buttons(), c) {
                    self.feedback.press(&self.prefs);
                    let team = self.scoreboard.selected();
                    self.scoreboard.press(button);
                    self.status_message = format!("{} {}", team, button.label());
                }
            }
            _ => {}
        }
    }

    fn handle_settings_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Left => self.back(),
            KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char(' ') => {
                let enabled = !self.prefs.haptics_enabled();
                self.prefs.set_haptics_enabled(enabled);
            }
            KeyCode::Char('l') | KeyCode::Char('L') => self.force_theme(Scheme::Light),
            KeyCode::Char('d') | KeyCode::Char('D') => self.force_theme(Scheme::Dark),
            _ => {}
        }
    }

    fn select_team(&mut self, team: Team) {
        self.feedback.press(&self.prefs);
        self.scoreboard.select(team);
        self.status_message = format!("{} selected", team);
    }

    fn force_theme(&mut self, scheme: Scheme) {
        self.feedback.press(&self.prefs);
        self.prefs.set_forced_theme(scheme);
    }

    fn undo(&mut self) {
        if !self.scoreboard.history().can_undo() {
            self.status_message = "Nothing to undo".to_string();
            return;
        }
        self.feedback.press(&self.prefs);
        let state = self.scoreboard.undo();
        self.status_message = format!("Undo: {}", state);
    }

    fn redo(&mut self) {
        if !self.scoreboard.history().can_redo() {
            self.status_message = "Nothing to redo".to_string();
            return;
        }
        self.feedback.press(&self.prefs);
        let state = self.scoreboard.redo();
        self.status_message = format!("Redo: {}", state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::RecordingHaptics;
    use crate::game::GameState;
    use crate::prefs::MemoryStore;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::style::Color;

    fn app_with(store: &MemoryStore) -> (App, RecordingHaptics) {
        let prefs = Preferences::load(Box::new(store.clone())).expect("Failed to load preferences");
        let recorder = RecordingHaptics::new();
        let feedback = Feedback::new(Box::new(recorder.clone()), true);
        let app = App::new(Scoreboard::default(), prefs, feedback, Scheme::Light);
        (app, recorder)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn rendered(app: &mut App) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).expect("terminal");
        app.draw(&mut terminal).expect("draw");
        terminal.backend().buffer().clone()
    }

    fn screen_text(app: &mut App) -> String {
        rendered(app)
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    /// Foreground of the first cell where `needle` starts
    fn fg_of(buffer: &Buffer, needle: &str) -> Option<Color> {
        let chars: Vec<String> = needle.chars().map(String::from).collect();
        buffer
            .content
            .windows(chars.len())
            .find(|cells| cells.iter().zip(&chars).all(|(cell, c)| cell.symbol() == c.as_str()))
            .map(|cells| cells[0].fg)
    }

    #[test]
    fn test_scoring_keys() {
        let (mut app, recorder) = app_with(&MemoryStore::new());
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('b'));
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Char('4'));

        assert_eq!(app.scoreboard.current(), GameState::new(12, 21));
        assert_eq!(recorder.impacts(), 5);
    }

    #[test]
    fn test_hidden_five_button_does_nothing() {
        let (mut app, recorder) = app_with(&MemoryStore::new());
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.scoreboard.history().len(), 1);
        assert_eq!(recorder.impacts(), 0);
    }

    #[test]
    fn test_undo_redo_clear_keys() {
        let (mut app, _) = app_with(&MemoryStore::new());
        press(&mut app, KeyCode::Char('b'));
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.scoreboard.current(), GameState::ZERO);

        press(&mut app, KeyCode::Left);
        assert_eq!(app.scoreboard.current(), GameState::new(21, 0));
        press(&mut app, KeyCode::Right);
        assert_eq!(app.scoreboard.current(), GameState::ZERO);

        press(&mut app, KeyCode::Right);
        assert_eq!(app.status_message, "Nothing to redo");
    }

    #[test]
    fn test_settings_navigation_and_toggles() {
        let store = MemoryStore::new();
        let (mut app, recorder) = app_with(&store);

        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.screen, Screen::Settings);
        // scoring keys are inert on the settings screen
        press(&mut app, KeyCode::Char('b'));
        assert_eq!(app.scoreboard.current(), GameState::ZERO);

        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.scheme(), Scheme::Dark);
        assert_eq!(recorder.impacts(), 1);

        press(&mut app, KeyCode::Char('h'));
        assert!(!app.prefs.haptics_enabled());
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(recorder.impacts(), 1);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.screen, Screen::Scoreboard);

        app.prefs.flush();
        assert_eq!(store.raw("haptics_enabled").as_deref(), Some("false"));
        assert_eq!(store.raw("forced_theme").as_deref(), Some("\"light\""));
    }

    #[test]
    fn test_preference_change_reaches_status_bar() {
        let (mut app, _) = app_with(&MemoryStore::new());
        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Char('d'));
        let text = screen_text(&mut app);
        assert_eq!(app.status_message, "Theme: dark");
        assert!(text.contains("Theme: dark"));
    }

    #[test]
    fn test_render_screens() {
        let (mut app, _) = app_with(&MemoryStore::new());
        let text = screen_text(&mut app);
        assert!(text.contains("Team 1"));
        assert!(text.contains("BUNCO"));
        assert!(text.contains("CLEAR SCORES"));

        app.open_settings();
        let text = screen_text(&mut app);
        assert!(text.contains("How to Play"));
        assert!(text.contains("Haptic Feedback"));
        assert!(text.contains("Appearance"));
    }

    #[test]
    fn test_undo_redo_hints_follow_history() {
        let (mut app, _) = app_with(&MemoryStore::new());
        let theme = Theme::for_scheme(app.scheme());

        let buffer = rendered(&mut app);
        assert_eq!(fg_of(&buffer, "undo"), Some(theme.disabled));
        assert_eq!(fg_of(&buffer, "redo"), Some(theme.disabled));

        press(&mut app, KeyCode::Char('1'));
        let buffer = rendered(&mut app);
        assert_eq!(fg_of(&buffer, "undo"), Some(theme.tint));
        assert_eq!(fg_of(&buffer, "redo"), Some(theme.disabled));

        press(&mut app, KeyCode::Left);
        let buffer = rendered(&mut app);
        assert_eq!(fg_of(&buffer, "undo"), Some(theme.disabled));
        assert_eq!(fg_of(&buffer, "redo"), Some(theme.tint));
    }

    #[test]
    fn test_forced_theme_is_marked() {
        let (mut app, _) = app_with(&MemoryStore::new());
        app.open_settings();

        let theme = Theme::for_scheme(app.scheme());
        let buffer = rendered(&mut app);
        assert_eq!(fg_of(&buffer, "☾"), Some(theme.tint));
        assert_eq!(fg_of(&buffer, "☀"), Some(theme.tint));

        press(&mut app, KeyCode::Char('d'));
        let theme = Theme::for_scheme(app.scheme());
        let buffer = rendered(&mut app);
        assert_eq!(fg_of(&buffer, "☾"), Some(theme.highlight));
        assert_eq!(fg_of(&buffer, "☀"), Some(theme.tint));
    }

    #[test]
    fn test_quit() {
        let (mut app, _) = app_with(&MemoryStore::new());
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
