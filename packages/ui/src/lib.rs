//! This crate contains the shared dashboard shell for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

mod auth;
pub use auth::{sign_out, use_auth, AuthProvider, AuthState};

pub mod config;
pub use config::{use_shell_config, ShellConfig};

pub mod cookies;
pub use cookies::{
    platform_cookies, use_cookie_jar, CookieError, CookieJar, MemoryCookies, SharedCookies,
};

pub mod session;
pub use session::{check_session, use_session_gate, SessionStatus, SessionToken};

pub mod menu;
pub use menu::{MenuEvent, MenuState};

mod dismiss;
pub use dismiss::use_dismiss;

pub mod nav;

mod sidebar;
pub use sidebar::{DesktopSidebar, MobileSidebar};

mod profile_menu;
pub use profile_menu::ProfileMenu;

mod top_bar;
pub use top_bar::TopBar;
