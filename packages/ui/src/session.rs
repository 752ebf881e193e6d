//! Client-side session gate.
//!
//! The dashboard only checks that an access token is present. It does not
//! validate it, refresh it, or re-check it later; the session service rejects
//! bad tokens on its own.

use dioxus::prelude::*;

use crate::config::use_shell_config;
use crate::cookies::{use_cookie_jar, CookieJar};

/// Placeholder some clients write instead of deleting the cookie.
const NULL_TOKEN: &str = "null";

/// An access token that passed the presence check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Authenticated(SessionToken),
    Anonymous,
}

impl SessionStatus {
    pub fn requires_sign_in(&self) -> bool {
        matches!(self, SessionStatus::Anonymous)
    }
}

/// Inspect the token cookie in `jar`.
pub fn check_session(jar: &(impl CookieJar + ?Sized), cookie_name: &str) -> SessionStatus {
    match jar.get(cookie_name) {
        Some(token) if !token.is_empty() && token != NULL_TOKEN => {
            SessionStatus::Authenticated(SessionToken(token))
        }
        _ => SessionStatus::Anonymous,
    }
}

/// Check the session once, after the first client render.
///
/// Fires `on_sign_in_required` when no usable token is stored. Effects never
/// run during server rendering, so the cookie is only read in the browser.
pub fn use_session_gate(on_sign_in_required: EventHandler<()>) {
    let config = use_shell_config();
    let jar = use_cookie_jar();
    use_effect(move || {
        let cookie_name = &config.session.cookie_name;
        if check_session(jar.as_ref(), cookie_name).requires_sign_in() {
            tracing::info!(cookie = %cookie_name, "no session token, redirecting to sign-in");
            on_sign_in_required.call(());
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cookies::MemoryCookies;

    const COOKIE: &str = "accessToken";

    #[test]
    fn test_missing_token_requires_sign_in() {
        let jar = MemoryCookies::new();
        assert_eq!(check_session(&jar, COOKIE), SessionStatus::Anonymous);
        assert!(check_session(&jar, COOKIE).requires_sign_in());
    }

    #[test]
    fn test_null_literal_requires_sign_in() {
        let jar = MemoryCookies::new().with(COOKIE, "null");
        assert!(check_session(&jar, COOKIE).requires_sign_in());
    }

    #[test]
    fn test_empty_token_requires_sign_in() {
        let jar = MemoryCookies::new().with(COOKIE, "");
        assert!(check_session(&jar, COOKIE).requires_sign_in());
    }

    #[test]
    fn test_valid_token_passes() {
        let jar = MemoryCookies::new().with(COOKIE, "eyJhbGciOi.payload.sig");
        let status = check_session(&jar, COOKIE);
        assert!(!status.requires_sign_in());
        match status {
            SessionStatus::Authenticated(token) => {
                assert_eq!(token.as_str(), "eyJhbGciOi.payload.sig")
            }
            SessionStatus::Anonymous => panic!("expected an authenticated session"),
        }
    }

    #[test]
    fn test_other_cookie_names_are_ignored() {
        let jar = MemoryCookies::new().with("refreshToken", "abc");
        assert!(check_session(&jar, COOKIE).requires_sign_in());
    }
}
