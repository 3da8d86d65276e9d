//! Dashboard navigation and panel state.
//!
//! DESIGN
//! ======
//! What the dashboard exposes is a pure function of `Role`: `nav_entries`
//! lists the sidebar, `default_panel` picks the landing panel. UI state only
//! tracks which collapsible menus are open and which panel is active, and
//! refuses to activate a panel the role cannot see.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::net::api::{ApiError, AuthApi};
use crate::net::types::{Role, UserRecord};
use crate::state::session::Session;

/// A content panel of the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Panel {
    Overview,
    Referral,
    DirectReferrals,
    LevelWise,
    TreeView,
    Deposit,
    Topup,
    Transfer,
    Withdraw,
    Incomes,
    Transactions,
    Users,
}

impl Panel {
    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Home",
            Self::Referral => "Refer Now",
            Self::DirectReferrals => "Direct Referrals",
            Self::LevelWise => "Level Wise",
            Self::TreeView => "Tree View",
            Self::Deposit => "Deposit",
            Self::Topup => "Topup",
            Self::Transfer => "Transfer",
            Self::Withdraw => "Withdraw",
            Self::Incomes => "Incomes",
            Self::Transactions => "Transactions",
            Self::Users => "Users",
        }
    }

    /// Panels without a backing endpoint render placeholder content.
    pub fn is_placeholder(self) -> bool {
        !matches!(self, Self::Overview | Self::Users)
    }
}

/// Collapsible sidebar group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Menu {
    Team,
    Wallet,
}

impl Menu {
    pub fn label(self) -> &'static str {
        match self {
            Self::Team => "Team",
            Self::Wallet => "Wallet",
        }
    }

    pub fn items(self) -> &'static [Panel] {
        match self {
            Self::Team => &[Panel::DirectReferrals, Panel::LevelWise, Panel::TreeView],
            Self::Wallet => &[Panel::Deposit, Panel::Topup, Panel::Transfer, Panel::Withdraw],
        }
    }
}

/// One sidebar row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavEntry {
    Link(Panel),
    Group(Menu),
}

/// Sidebar entries for `role`, in display order.
pub fn nav_entries(role: Role) -> Vec<NavEntry> {
    match role {
        Role::User => vec![
            NavEntry::Link(Panel::Overview),
            NavEntry::Link(Panel::Referral),
            NavEntry::Group(Menu::Team),
            NavEntry::Group(Menu::Wallet),
            NavEntry::Link(Panel::Incomes),
            NavEntry::Link(Panel::Transactions),
        ],
        Role::Admin => vec![NavEntry::Link(Panel::Overview), NavEntry::Link(Panel::Users)],
    }
}

/// Every panel reachable from the sidebar for `role`.
pub fn visible_panels(role: Role) -> Vec<Panel> {
    nav_entries(role)
        .into_iter()
        .flat_map(|entry| match entry {
            NavEntry::Link(panel) => vec![panel],
            NavEntry::Group(menu) => menu.items().to_vec(),
        })
        .collect()
}

/// Panel shown when the dashboard opens.
pub fn default_panel(role: Role) -> Panel {
    match role {
        Role::User => Panel::Overview,
        Role::Admin => Panel::Users,
    }
}

/// Sidebar and panel selection state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardUi {
    pub role: Role,
    pub active: Panel,
    pub team_open: bool,
    pub wallet_open: bool,
}

impl DashboardUi {
    pub fn new(role: Role) -> Self {
        Self { role, active: default_panel(role), team_open: false, wallet_open: false }
    }

    pub fn is_open(&self, menu: Menu) -> bool {
        match menu {
            Menu::Team => self.team_open,
            Menu::Wallet => self.wallet_open,
        }
    }

    pub fn toggle(&mut self, menu: Menu) {
        match menu {
            Menu::Team => self.team_open = !self.team_open,
            Menu::Wallet => self.wallet_open = !self.wallet_open,
        }
    }

    /// Activate `panel` if the role can see it.
    pub fn select(&mut self, panel: Panel) -> bool {
        if !visible_panels(self.role).contains(&panel) {
            return false;
        }
        self.active = panel;
        true
    }
}

/// Admin user listing state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserListState {
    pub users: Vec<UserRecord>,
    pub loading: bool,
    pub error: Option<String>,
}

impl UserListState {
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Settle a finished load. Returns the notification to show, if any.
    pub fn finish(&mut self, load: UserListLoad) -> Option<String> {
        self.loading = false;
        self.users = load.users;
        self.error.clone_from(&load.notice);
        load.notice
    }
}

/// Outcome of one user-list fetch; failures degrade to an empty list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserListLoad {
    pub users: Vec<UserRecord>,
    pub notice: Option<String>,
}

pub const USERS_SIGNED_OUT_MESSAGE: &str = "Your session has expired. Please sign in again.";
pub const USERS_SHAPE_MESSAGE: &str = "Received an unexpected user list from the server.";
pub const USERS_FAILED_MESSAGE: &str = "Failed to load users.";

/// Fetch the user list with the session's bearer token.
///
/// Issues no request when the session has no token.
pub async fn fetch_user_list<A: AuthApi>(api: &A, session: &Session) -> UserListLoad {
    let Some(token) = session.bearer_token() else {
        return UserListLoad { users: Vec::new(), notice: Some(USERS_SIGNED_OUT_MESSAGE.to_owned()) };
    };
    match api.list_users(token).await {
        Ok(users) => {
            log::info!("loaded {} user(s)", users.len());
            UserListLoad { users, notice: None }
        }
        Err(err) => {
            log::warn!("user list fetch failed: {err}");
            UserListLoad { users: Vec::new(), notice: Some(user_list_notice(&err)) }
        }
    }
}

fn user_list_notice(err: &ApiError) -> String {
    match err {
        ApiError::DataShape(_) => USERS_SHAPE_MESSAGE.to_owned(),
        ApiError::Status { .. } => {
            err.server_message().map_or_else(|| USERS_FAILED_MESSAGE.to_owned(), |m| format!("{USERS_FAILED_MESSAGE} {m}"))
        }
        ApiError::Transport(_) => USERS_FAILED_MESSAGE.to_owned(),
    }
}
