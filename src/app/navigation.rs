//! Navigation methods for the App.

use super::{App, NavItem, QuickAction, Route};
use crate::notifications::ToastKind;

pub const LOGOUT_MESSAGE: &str = "Logged out successfully";
pub const LOGOUT_FAILED_MESSAGE: &str = "Failed to clear session";

impl App {
    /// Go to `route`. Entering the dashboard from another screen remounts it;
    /// selecting it while it is shown only closes the panel.
    pub fn navigate(&mut self, route: Route) {
        tracing::debug!(from = self.route.path(), to = route.path(), "navigate");
        match route {
            Route::Dashboard if self.route == Route::Dashboard => {
                self.dashboard.close_sidebar();
                self.mark_dirty();
            }
            Route::Dashboard => self.mount_dashboard(),
            Route::Login => self.show_login(),
            other => {
                self.route = other;
                self.dashboard.close_sidebar();
                self.mark_dirty();
            }
        }
    }

    pub(super) fn show_login(&mut self) {
        self.route = Route::Login;
        self.login_input.clear();
        self.dashboard.close_sidebar();
        self.mark_dirty();
    }

    /// Clear the session token and go to the login screen.
    ///
    /// Exactly one notification is shown before navigating: success normally,
    /// an error if the token could not be removed.
    pub fn logout(&mut self) {
        match self.session.clear() {
            Ok(()) => {
                tracing::info!("Logged out");
                self.toasts.push(ToastKind::Success, LOGOUT_MESSAGE);
            }
            Err(e) => {
                tracing::error!("Logout failed to clear session: {}", e);
                self.toasts.push(ToastKind::Error, LOGOUT_FAILED_MESSAGE);
            }
        }
        self.show_login();
    }

    /// Save the token typed on the login screen and mount the dashboard.
    pub fn submit_login(&mut self) {
        let token = self.login_input.trim().to_string();
        if token.is_empty() {
            return;
        }

        match self.session.save(&token) {
            Ok(()) => {
                self.login_input.clear();
                self.mount_dashboard();
            }
            Err(e) => {
                tracing::error!("Could not save session token: {}", e);
                self.toasts.push(ToastKind::Error, "Failed to save session");
                self.mark_dirty();
            }
        }
    }

    pub fn sidebar_up(&mut self) {
        if self.sidebar_index > 0 {
            self.sidebar_index -= 1;
            self.mark_dirty();
        }
    }

    pub fn sidebar_down(&mut self) {
        if self.sidebar_index + 1 < NavItem::ALL.len() {
            self.sidebar_index += 1;
            self.mark_dirty();
        }
    }

    pub fn selected_nav_item(&self) -> NavItem {
        NavItem::ALL[self.sidebar_index.min(NavItem::ALL.len() - 1)]
    }

    /// Activate the highlighted panel entry.
    pub fn activate_sidebar(&mut self) {
        match self.selected_nav_item() {
            NavItem::Go(route) => self.navigate(route),
            NavItem::Logout => self.logout(),
        }
    }

    pub fn quick_action(&mut self, action: QuickAction) {
        self.navigate(action.route());
    }

    /// Local only; never issues a request.
    pub fn toggle_sidebar(&mut self) {
        self.dashboard.toggle_sidebar();
        self.mark_dirty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{InMemorySession, MockHttpClient, MockResponse};
    use crate::config::DashboardConfig;
    use crate::traits::SessionStore;
    use std::sync::Arc;

    fn app_with(session: InMemorySession, http: MockHttpClient) -> App {
        App::new(&DashboardConfig::default(), Arc::new(http), Arc::new(session))
    }

    #[test]
    fn test_logout_clears_token_and_notifies_once() {
        let session = InMemorySession::with_token("tok");
        let mut app = app_with(session.clone(), MockHttpClient::new());
        app.route = Route::Profile;

        app.logout();

        assert_eq!(session.token(), None);
        assert_eq!(app.route, Route::Login);
        assert_eq!(app.toasts.len(), 1);
        assert_eq!(app.toasts.count(ToastKind::Success), 1);
        assert_eq!(app.toasts.iter().next().map(|t| t.message.as_str()), Some(LOGOUT_MESSAGE));
    }

    #[test]
    fn test_logout_failure_shows_error_and_still_leaves() {
        let session = InMemorySession::with_token("tok");
        session.set_clear_should_fail(true);
        let mut app = app_with(session, MockHttpClient::new());

        app.logout();

        assert_eq!(app.route, Route::Login);
        assert_eq!(app.toasts.count(ToastKind::Success), 0);
        assert_eq!(app.toasts.count(ToastKind::Error), 1);
    }

    #[test]
    fn test_toggle_sidebar_issues_no_request() {
        let http = MockHttpClient::new();
        let mut app = app_with(InMemorySession::new(), http.clone());
        let before = app.dashboard.clone();

        app.toggle_sidebar();
        app.toggle_sidebar();

        assert_eq!(app.dashboard, before);
        assert_eq!(http.request_count(), 0);
    }

    #[test]
    fn test_sidebar_selection_is_clamped() {
        let mut app = app_with(InMemorySession::new(), MockHttpClient::new());
        app.sidebar_up();
        assert_eq!(app.sidebar_index, 0);
        for _ in 0..10 {
            app.sidebar_down();
        }
        assert_eq!(app.selected_nav_item(), NavItem::Logout);
    }

    #[test]
    fn test_quick_action_navigates_to_literal_path() {
        let mut app = app_with(InMemorySession::new(), MockHttpClient::new());
        app.quick_action(QuickAction::ManageExams);
        assert_eq!(app.route.path(), "/university/exams/manage");
    }

    #[tokio::test]
    async fn test_submit_login_saves_token_and_mounts() {
        let session = InMemorySession::new();
        let mut app = app_with(session.clone(), MockHttpClient::new());
        app.login_input = "  abc123 ".to_string();

        app.submit_login();

        assert_eq!(session.current_token().unwrap(), Some("abc123".to_string()));
        assert_eq!(app.route, Route::Dashboard);
        assert_eq!(app.mount_id(), 1);
    }

    #[tokio::test]
    async fn test_reselecting_dashboard_keeps_loaded_state() {
        let http = MockHttpClient::new();
        http.set_default_response(MockResponse::json(serde_json::json!({
            "universityName": "Alpha U",
            "universityEmail": "a@x.edu",
            "totalExams": 5
        })));
        let mut app = app_with(InMemorySession::with_token("tok"), http.clone());
        app.start();
        for _ in 0..50 {
            tokio::task::yield_now().await;
            app.drain_messages();
            if !app.dashboard.is_loading() {
                break;
            }
        }
        assert!(!app.dashboard.is_loading());
        assert_eq!(http.request_count(), 2);
        let loaded = app.dashboard.clone();

        app.sidebar_index = 0;
        app.activate_sidebar();
        tokio::task::yield_now().await;
        app.drain_messages();

        assert_eq!(app.route, Route::Dashboard);
        assert_eq!(app.mount_id(), 1);
        assert_eq!(app.dashboard, loaded);
        assert_eq!(http.request_count(), 2);
    }

    #[tokio::test]
    async fn test_returning_to_dashboard_remounts() {
        let http = MockHttpClient::new();
        let mut app = app_with(InMemorySession::with_token("tok"), http);
        app.start();
        app.navigate(Route::Exams);
        app.navigate(Route::Dashboard);
        assert_eq!(app.mount_id(), 2);
        assert!(app.dashboard.is_loading());
    }

    #[test]
    fn test_submit_empty_login_is_ignored() {
        let session = InMemorySession::new();
        let mut app = app_with(session.clone(), MockHttpClient::new());
        app.login_input = "   ".to_string();

        app.submit_login();

        assert_eq!(app.route, Route::Login);
        assert_eq!(session.token(), None);
    }
}
