//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`Route`] - Which screen is currently displayed
//! - [`NavItem`] / [`QuickAction`] - Navigation entries
//! - [`AppMessage`] - Messages from background fetch tasks

mod handlers;
mod messages;
mod navigation;
mod types;

pub use messages::AppMessage;
pub use types::{NavItem, QuickAction, Route};

use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

use crate::adapters::ChannelNotifier;
use crate::api::DashboardApi;
use crate::config::DashboardConfig;
use crate::fetch::{fetch_exam_stats, fetch_profile, Fetcher};
use crate::notifications::{ToastKind, ToastQueue};
use crate::state::DashboardState;
use crate::traits::{HttpClient, SessionStore};

/// Main application state.
pub struct App {
    /// Current screen
    pub route: Route,
    /// Dashboard data for the current mount
    pub dashboard: DashboardState,
    /// Visible toasts
    pub toasts: ToastQueue,
    /// Highlighted entry of the navigation panel
    pub sidebar_index: usize,
    /// Token being typed on the login screen
    pub login_input: String,
    /// Set when the user asked to quit
    pub should_quit: bool,
    /// Set when state changed since the last draw
    pub needs_redraw: bool,
    /// Terminal width in columns
    pub terminal_width: u16,
    /// Terminal height in rows
    pub terminal_height: u16,
    /// Below this width the navigation panel collapses
    narrow_width: u16,
    /// Incremented on every dashboard mount
    mount_id: u64,
    api: DashboardApi,
    session: Arc<dyn SessionStore>,
    message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver for background results; taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("route", &self.route)
            .field("dashboard", &self.dashboard)
            .field("mount_id", &self.mount_id)
            .finish_non_exhaustive()
    }
}

impl App {
    /// Create the app. No request is made until the dashboard is mounted.
    pub fn new(
        config: &DashboardConfig,
        http: Arc<dyn HttpClient>,
        session: Arc<dyn SessionStore>,
    ) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let api = DashboardApi::new(config.api_base_url.clone(), http, session.clone());

        Self {
            route: Route::Login,
            dashboard: DashboardState::new(),
            toasts: ToastQueue::new(config.toast_ttl),
            sidebar_index: 0,
            login_input: String::new(),
            should_quit: false,
            needs_redraw: true,
            terminal_width: 120,
            terminal_height: 40,
            narrow_width: config.narrow_width,
            mount_id: 0,
            api,
            session,
            message_tx,
            message_rx: Some(message_rx),
        }
    }

    /// Enter the first screen: the dashboard if a token is stored, login otherwise.
    pub fn start(&mut self) {
        match self.session.current_token() {
            Ok(Some(_)) => self.mount_dashboard(),
            Ok(None) => self.show_login(),
            Err(e) => {
                tracing::warn!("Could not read session, showing login: {}", e);
                self.show_login();
            }
        }
    }

    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    pub fn mount_id(&self) -> u64 {
        self.mount_id
    }

    /// Mount the dashboard: fresh state and one fetch per data source.
    ///
    /// Must be called from within a tokio runtime.
    pub fn mount_dashboard(&mut self) {
        self.route = Route::Dashboard;
        self.sidebar_index = 0;
        self.mount_id += 1;
        self.dashboard = DashboardState::new();
        self.dashboard.begin(Fetcher::Profile);
        self.dashboard.begin(Fetcher::Stats);
        self.mark_dirty();

        tracing::info!(mount = self.mount_id, "dashboard mounted");

        let mount = self.mount_id;

        let api = self.api.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let notifier = ChannelNotifier::new(tx.clone(), mount);
            let result = fetch_profile(&api, &notifier).await;
            let _ = tx.send(AppMessage::ProfileFetched { mount, result });
        });

        let api = self.api.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let notifier = ChannelNotifier::new(tx.clone(), mount);
            let result = fetch_exam_stats(&api, &notifier).await;
            let _ = tx.send(AppMessage::StatsFetched { mount, result });
        });
    }

    /// Apply a message from a background task.
    pub fn handle_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::Notification { mount, event } => {
                if mount == self.mount_id {
                    self.toasts.apply(event);
                } else {
                    tracing::debug!(mount, "dropping notification from a replaced mount");
                }
            }
            AppMessage::ProfileFetched { mount, result } => {
                if self.is_current_mount(mount) {
                    self.dashboard.apply_profile(result);
                } else {
                    tracing::debug!(mount, "dropping profile result for unmounted dashboard");
                }
            }
            AppMessage::StatsFetched { mount, result } => {
                if self.is_current_mount(mount) {
                    self.dashboard.apply_stats(result);
                } else {
                    tracing::debug!(mount, "dropping stats result for unmounted dashboard");
                }
            }
        }
        self.mark_dirty();
    }

    /// Drain every pending background message without blocking.
    pub fn drain_messages(&mut self) -> usize {
        let Some(mut rx) = self.message_rx.take() else {
            return 0;
        };
        let mut count = 0;
        while let Ok(msg) = rx.try_recv() {
            self.handle_message(msg);
            count += 1;
        }
        self.message_rx = Some(rx);
        count
    }

    fn is_current_mount(&self, mount: u64) -> bool {
        self.route == Route::Dashboard && mount == self.mount_id
    }

    /// Periodic housekeeping: expire toasts and keep spinners moving.
    pub fn tick(&mut self, now: Instant) {
        if self.toasts.expire(now) {
            self.mark_dirty();
        }
        if self.toasts.count(ToastKind::Loading) > 0 {
            self.mark_dirty();
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn update_terminal_dimensions(&mut self, width: u16, height: u16) {
        self.terminal_width = width;
        self.terminal_height = height;
        self.mark_dirty();
    }

    /// Whether the terminal is too narrow to show the panel permanently.
    pub fn is_narrow(&self) -> bool {
        self.terminal_width < self.narrow_width
    }

    /// Whether the navigation panel is drawn.
    pub fn sidebar_visible(&self) -> bool {
        !self.is_narrow() || self.dashboard.sidebar_open()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{InMemorySession, MockHttpClient};
    use crate::notifications::NotificationEvent;

    fn app(session: InMemorySession) -> App {
        App::new(
            &DashboardConfig::default().with_narrow_width(100),
            Arc::new(MockHttpClient::new()),
            Arc::new(session),
        )
    }

    #[test]
    fn test_start_without_token_shows_login() {
        let mut app = app(InMemorySession::new());
        app.start();
        assert_eq!(app.route, Route::Login);
        assert_eq!(app.mount_id(), 0);
    }

    #[tokio::test]
    async fn test_start_with_token_mounts_dashboard() {
        let mut app = app(InMemorySession::with_token("tok"));
        app.start();
        assert_eq!(app.route, Route::Dashboard);
        assert_eq!(app.mount_id(), 1);
        assert!(app.dashboard.is_loading());
    }

    #[tokio::test]
    async fn test_notifications_from_replaced_mount_are_ignored() {
        let mut app = app(InMemorySession::with_token("tok"));
        app.start();
        app.navigate(Route::Exams);
        app.navigate(Route::Dashboard);
        assert_eq!(app.mount_id(), 2);
        app.toasts.push(ToastKind::Loading, "Loading university data...");

        app.handle_message(AppMessage::Notification {
            mount: 1,
            event: NotificationEvent::DismissAll,
        });
        app.handle_message(AppMessage::Notification {
            mount: 1,
            event: NotificationEvent::success("University data loaded!"),
        });
        assert_eq!(app.toasts.len(), 1);
        assert_eq!(app.toasts.count(ToastKind::Loading), 1);

        app.handle_message(AppMessage::Notification {
            mount: 2,
            event: NotificationEvent::DismissAll,
        });
        assert!(app.toasts.is_empty());
    }

    #[tokio::test]
    async fn test_notifications_still_shown_after_leaving_dashboard() {
        let mut app = app(InMemorySession::with_token("tok"));
        app.start();
        app.navigate(Route::Students);

        app.handle_message(AppMessage::Notification {
            mount: 1,
            event: NotificationEvent::error("Failed to load exam stats"),
        });
        assert_eq!(app.toasts.count(ToastKind::Error), 1);
    }

    #[test]
    fn test_sidebar_visibility_depends_on_width() {
        let mut app = app(InMemorySession::new());
        app.update_terminal_dimensions(140, 40);
        assert!(app.sidebar_visible());

        app.update_terminal_dimensions(60, 40);
        assert!(!app.sidebar_visible());
        app.dashboard.toggle_sidebar();
        assert!(app.sidebar_visible());
    }

    #[test]
    fn test_tick_marks_dirty_only_when_toasts_expire() {
        let mut app = app(InMemorySession::new());
        app.toasts.push(ToastKind::Success, "hi");
        app.needs_redraw = false;

        app.tick(Instant::now());
        assert!(!app.needs_redraw);

        app.tick(Instant::now() + std::time::Duration::from_secs(60));
        assert!(app.needs_redraw);
        assert!(app.toasts.is_empty());
    }
}
