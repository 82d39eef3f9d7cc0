//! Keyboard and paste handling for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::{App, QuickAction, Route};

impl App {
    /// Handle a key press. Releases and repeats are ignored.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if let KeyCode::Char('c') = key.code {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                self.quit();
                return;
            }
        }

        match self.route {
            Route::Login => self.handle_login_key(key),
            Route::Dashboard => self.handle_dashboard_key(key),
            _ => self.handle_placeholder_key(key),
        }
    }

    /// Pasted text goes into the login field; ignored elsewhere.
    pub fn handle_paste(&mut self, text: &str) {
        if self.route == Route::Login {
            self.login_input
                .extend(text.chars().filter(|c| !c.is_control()));
            self.mark_dirty();
        }
    }

    fn handle_login_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_login(),
            KeyCode::Backspace => {
                self.login_input.pop();
                self.mark_dirty();
            }
            KeyCode::Esc => {
                if self.login_input.is_empty() {
                    self.quit();
                } else {
                    self.login_input.clear();
                    self.mark_dirty();
                }
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.login_input.push(c);
                self.mark_dirty();
            }
            _ => {}
        }
    }

    fn handle_dashboard_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.sidebar_up(),
            KeyCode::Down | KeyCode::Char('j') => self.sidebar_down(),
            KeyCode::Enter => self.activate_sidebar(),
            KeyCode::Char('m') => self.toggle_sidebar(),
            KeyCode::Char('L') => self.logout(),
            KeyCode::Char('q') => self.quit(),
            KeyCode::Esc if self.dashboard.sidebar_open() => {
                self.dashboard.close_sidebar();
                self.mark_dirty();
            }
            KeyCode::Char(c) => {
                if let Some(action) = QuickAction::from_key(c) {
                    self.quick_action(action);
                }
            }
            _ => {}
        }
    }

    fn handle_placeholder_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('d') => self.navigate(Route::Dashboard),
            KeyCode::Char('L') => self.logout(),
            KeyCode::Char('q') => self.quit(),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{InMemorySession, MockHttpClient};
    use crate::config::DashboardConfig;
    use std::sync::Arc;

    fn app() -> App {
        App::new(
            &DashboardConfig::default(),
            Arc::new(MockHttpClient::new()),
            Arc::new(InMemorySession::new()),
        )
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_ctrl_c_quits_from_any_route() {
        let mut app = app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn test_typing_on_login_screen() {
        let mut app = app();
        for c in "ab".chars() {
            app.handle_key(press(KeyCode::Char(c)));
        }
        app.handle_key(press(KeyCode::Backspace));
        app.handle_paste("xyz\n");
        assert_eq!(app.login_input, "axyz");
        assert!(!app.should_quit, "q must be typeable on login");
    }

    #[test]
    fn test_dashboard_keys() {
        let mut app = app();
        app.route = Route::Dashboard;

        app.handle_key(press(KeyCode::Char('j')));
        assert_eq!(app.sidebar_index, 1);
        app.handle_key(press(KeyCode::Char('k')));
        assert_eq!(app.sidebar_index, 0);

        app.handle_key(press(KeyCode::Char('m')));
        assert!(app.dashboard.sidebar_open());
        app.handle_key(press(KeyCode::Esc));
        assert!(!app.dashboard.sidebar_open());

        app.handle_key(press(KeyCode::Char('e')));
        assert_eq!(app.route, Route::EditProfile);
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut app = app();
        app.route = Route::Dashboard;
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        app.handle_key(key);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_logout_key_on_placeholder_route() {
        let mut app = app();
        app.route = Route::Students;
        app.handle_key(press(KeyCode::Char('L')));
        assert_eq!(app.route, Route::Login);
    }
}
