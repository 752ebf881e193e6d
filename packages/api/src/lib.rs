//! # API crate — session server functions for the admin dashboard
//!
//! The dashboard shell never talks to the network directly. Everything it needs from
//! the session service goes through the two Dioxus server functions defined here.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | — | Session keys and the access-token cookie name shared by client and server |
//! | [`error`] | `server` | Typed session-store failures |
//! | [`models`] | — | The client-safe [`UserInfo`] projection |
//!
//! ## Server functions exposed here
//!
//! Every public `async fn` in this file is a Dioxus server function, annotated with
//! `#[get(...)]` or `#[post(...)]` and compiled twice: once with full server logic
//! (behind `#[cfg(feature = "server")]`) and once as a thin client stub.
//!
//! - `get_current_user` — the user stored in the current session, if any
//! - `logout` — flush the current session
//!
//! ## Who signs users in
//!
//! Nothing in this workspace writes [`auth::SESSION_USER_KEY`]. The session
//! service that issues the `accessToken` cookie also stores the signed-in
//! [`UserInfo`] under that key in the shared session store. Until it has done
//! so, `get_current_user` returns `None` and the shell shows no email and no
//! "My Profile" entry.

use dioxus::prelude::*;

pub mod auth;
#[cfg(feature = "server")]
pub mod error;
pub mod models;

pub use models::UserInfo;

/// Get the current authenticated user from the session.
#[cfg(feature = "server")]
#[get("/api/auth/me", session: tower_sessions::Session)]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    auth::session_user(&session)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/me")]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    Ok(None)
}

/// Log out the current user by clearing the session.
#[cfg(feature = "server")]
#[post("/api/auth/logout", session: tower_sessions::Session)]
pub async fn logout() -> Result<(), ServerFnError> {
    auth::end_session(&session)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/logout")]
pub async fn logout() -> Result<(), ServerFnError> {
    Ok(())
}
