//! Local UI chrome state (theme, sidebar, active view, open menus).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the session and list state
//! so the shell can evolve independently of backend data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Anything but `dark` is light.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw == "dark" { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Views reachable from the sidebar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Menu {
    #[default]
    Users,
    Roles,
    UserSecurity,
    ActiveUsers,
    Configs,
    ActivityReport,
    SummaryReport,
    Workspaces,
    Transactions,
    ChangeLog,
    Profile,
    Documentation,
}

impl Menu {
    pub const ALL: [Self; 12] = [
        Self::Users,
        Self::Roles,
        Self::UserSecurity,
        Self::ActiveUsers,
        Self::Configs,
        Self::ActivityReport,
        Self::SummaryReport,
        Self::Workspaces,
        Self::Transactions,
        Self::ChangeLog,
        Self::Profile,
        Self::Documentation,
    ];

    /// Stable id persisted under `activeMenu`.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Roles => "roles",
            Self::UserSecurity => "user-security",
            Self::ActiveUsers => "active-users",
            Self::Configs => "config",
            Self::ActivityReport => "activity-report",
            Self::SummaryReport => "summary-report",
            Self::Workspaces => "workspaces",
            Self::Transactions => "transactions",
            Self::ChangeLog => "changelog",
            Self::Profile => "profile",
            Self::Documentation => "docs",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Users => "Users",
            Self::Roles => "Roles",
            Self::UserSecurity => "User Security",
            Self::ActiveUsers => "Active Sessions",
            Self::Configs => "System Config",
            Self::ActivityReport => "Activity Report",
            Self::SummaryReport => "Summary Report",
            Self::Workspaces => "Workspaces",
            Self::Transactions => "Transactions",
            Self::ChangeLog => "Change Log",
            Self::Profile => "My Profile",
            Self::Documentation => "Documentation",
        }
    }

    /// Sidebar group heading.
    #[must_use]
    pub fn section(self) -> &'static str {
        match self {
            Self::Users | Self::Roles => "Management",
            Self::UserSecurity | Self::ActiveUsers => "Security",
            Self::Workspaces | Self::Transactions => "Business",
            Self::ActivityReport | Self::SummaryReport | Self::ChangeLog => "Reports",
            Self::Configs | Self::Profile | Self::Documentation => "System",
        }
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.id() == id)
    }
}

/// UI state for theme, navigation, and header menus.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub theme: Theme,
    pub active_menu: Menu,
    pub sidebar_collapsed: bool,
    pub mobile_sidebar_open: bool,
    pub user_menu_open: bool,
    pub show_change_password: bool,
}

impl UiState {
    /// Switch views and close transient menus.
    pub fn navigate(&mut self, menu: Menu) {
        self.active_menu = menu;
        self.mobile_sidebar_open = false;
        self.user_menu_open = false;
    }
}
