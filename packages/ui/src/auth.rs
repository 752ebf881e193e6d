//! Authentication context and hooks for the UI.

use api::UserInfo;
use dioxus::prelude::*;

use crate::cookies::CookieJar;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user loads or signs out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);

    // Fetch the current user on mount
    let _ = use_resource(move || async move {
        match api::get_current_user().await {
            Ok(user) => {
                auth_state.set(AuthState {
                    user,
                    loading: false,
                });
            }
            Err(e) => {
                tracing::warn!("Failed to load current user: {}", e);
                auth_state.set(AuthState {
                    user: None,
                    loading: false,
                });
            }
        }
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// End the session: tell the server, drop the token cookie and forget the user.
///
/// Local state is cleared even when the server call fails, so the caller can
/// always proceed to the sign-in page.
pub async fn sign_out(
    mut auth_state: Signal<AuthState>,
    jar: &dyn CookieJar,
    cookie_name: &str,
) {
    if let Err(e) = api::logout().await {
        tracing::error!("Logout request failed: {}", e);
    }
    if let Err(e) = jar.remove(cookie_name) {
        tracing::warn!("Failed to clear {} cookie: {}", cookie_name, e);
    }
    auth_state.set(AuthState {
        user: None,
        loading: false,
    });
    tracing::info!("signed out");
}
