//! Sidebar navigation entries and active-route matching.

use api::UserInfo;

pub const HOME_PATH: &str = "/";
pub const USERS_PATH: &str = "/users";
pub const SETTINGS_PATH: &str = "/settings";
pub const SIGN_IN_PATH: &str = "/signin";

const LINK_BASE_CLASS: &str =
    "group flex items-center px-2 py-2 text-sm leading-6 font-medium rounded-md text-white";
const LINK_ACTIVE_CLASS: &str = "bg-cyan-800";
const LINK_IDLE_CLASS: &str = "hover:bg-cyan-600";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIcon {
    Home,
    Users,
    Settings,
}

/// How a nav entry decides it matches the current path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteMatch {
    Exact,
    /// Any path starting with the entry's href, so `/users/42` keeps `Users` lit.
    Prefix,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: NavIcon,
    pub matcher: RouteMatch,
}

pub const PRIMARY_NAV: &[NavItem] = &[
    NavItem {
        label: "Home",
        href: HOME_PATH,
        icon: NavIcon::Home,
        matcher: RouteMatch::Exact,
    },
    NavItem {
        label: "Users",
        href: USERS_PATH,
        icon: NavIcon::Users,
        matcher: RouteMatch::Prefix,
    },
];

pub const SECONDARY_NAV: &[NavItem] = &[NavItem {
    label: "Settings",
    href: SETTINGS_PATH,
    icon: NavIcon::Settings,
    matcher: RouteMatch::Prefix,
}];

impl NavItem {
    pub fn is_active(&self, current_path: &str) -> bool {
        let path = strip_query(current_path);
        match self.matcher {
            RouteMatch::Exact => path == self.href,
            RouteMatch::Prefix => path.starts_with(self.href),
        }
    }
}

fn strip_query(path: &str) -> &str {
    path.split(['?', '#']).next().unwrap_or(path)
}

/// CSS classes for a sidebar link.
pub fn link_class(active: bool) -> String {
    let state = if active { LINK_ACTIVE_CLASS } else { LINK_IDLE_CLASS };
    format!("{LINK_BASE_CLASS} {state}")
}

/// Profile page of `user`, or `None` while the user is still loading.
pub fn profile_href(user: Option<&UserInfo>) -> Option<String> {
    user.map(|u| format!("{USERS_PATH}/{}", u.id))
}
