//! Route and navigation item definitions.
//!
//! - [`Route`] - Which screen is displayed, with its literal path
//! - [`NavItem`] - Entries of the navigation panel
//! - [`QuickAction`] - Shortcut buttons on the dashboard

/// A destination in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Dashboard,
    Exams,
    Students,
    Profile,
    EditProfile,
    ManageExams,
    ViewStudents,
    Login,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Dashboard => "/university/dashboard",
            Route::Exams => "/university/exams",
            Route::Students => "/university/students",
            Route::Profile => "/university/profile",
            Route::EditProfile => "/university/profile/edit",
            Route::ManageExams => "/university/exams/manage",
            Route::ViewStudents => "/university/students/view",
            Route::Login => "/login",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Exams => "Exams",
            Route::Students => "Students",
            Route::Profile => "Profile",
            Route::EditProfile => "Edit Profile",
            Route::ManageExams => "Manage Exams",
            Route::ViewStudents => "View Students",
            Route::Login => "Login",
        }
    }
}

/// An entry of the navigation panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Go(Route),
    Logout,
}

impl NavItem {
    /// Panel entries, top to bottom.
    pub const ALL: [NavItem; 5] = [
        NavItem::Go(Route::Dashboard),
        NavItem::Go(Route::Exams),
        NavItem::Go(Route::Students),
        NavItem::Go(Route::Profile),
        NavItem::Logout,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            NavItem::Go(route) => route.title(),
            NavItem::Logout => "Logout",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            NavItem::Go(Route::Dashboard) => "▦",
            NavItem::Go(Route::Exams) => "✎",
            NavItem::Go(Route::Students) => "☺",
            NavItem::Go(_) => "◉",
            NavItem::Logout => "⏻",
        }
    }
}

/// Shortcut buttons rendered on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    EditProfile,
    ManageExams,
    ViewStudents,
}

impl QuickAction {
    pub const ALL: [QuickAction; 3] = [
        QuickAction::EditProfile,
        QuickAction::ManageExams,
        QuickAction::ViewStudents,
    ];

    pub fn route(&self) -> Route {
        match self {
            QuickAction::EditProfile => Route::EditProfile,
            QuickAction::ManageExams => Route::ManageExams,
            QuickAction::ViewStudents => Route::ViewStudents,
        }
    }

    pub fn key(&self) -> char {
        match self {
            QuickAction::EditProfile => 'e',
            QuickAction::ManageExams => 'x',
            QuickAction::ViewStudents => 's',
        }
    }

    pub fn from_key(c: char) -> Option<QuickAction> {
        Self::ALL.into_iter().find(|action| action.key() == c)
    }
}
