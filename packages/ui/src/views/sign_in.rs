//! Landing page for visitors without a session.

use dioxus::prelude::*;

use crate::config::use_shell_config;
use crate::cookies::use_cookie_jar;
use crate::session::check_session;

/// Sign-in card.
///
/// Tokens are issued by the session service, not by this page. The
/// "Continue to dashboard" button only appears once the token cookie is
/// present, so following it never bounces straight back here.
#[component]
pub fn SignInView(on_continue: EventHandler<()>) -> Element {
    let config = use_shell_config();
    let jar = use_cookie_jar();
    let mut has_session = use_signal(|| false);

    let cookie_name = config.session.cookie_name.clone();
    use_effect(move || {
        has_session.set(!check_session(jar.as_ref(), &cookie_name).requires_sign_in());
    });

    rsx! {
        div {
            class: "min-h-screen flex flex-col items-center justify-center bg-gray-100 px-4",
            div {
                class: "w-full max-w-sm bg-white shadow rounded-md p-6 text-center",
                if !config.brand.logo.is_empty() {
                    img {
                        class: "mx-auto mb-4 h-12",
                        src: "{config.brand.logo}",
                        alt: "{config.brand.name} logo",
                    }
                }
                h1 { class: "text-xl font-semibold text-gray-900", "Sign in to {config.brand.name}" }
                if has_session() {
                    p {
                        class: "mt-2 text-sm text-gray-500",
                        "You are signed in."
                    }
                    button {
                        class: "mt-6 w-full rounded-md bg-cyan-600 px-4 py-2 text-sm font-medium text-white hover:bg-cyan-700",
                        onclick: move |_| on_continue.call(()),
                        "Continue to dashboard"
                    }
                } else {
                    p {
                        class: "mt-2 text-sm text-gray-500",
                        "You need to be signed in to view the dashboard. Sign in through your organization's session service, then reload this page."
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;
    use std::time::Duration;

    use super::*;
    use crate::cookies::{MemoryCookies, SharedCookies};

    #[derive(Clone)]
    struct Mounted {
        jar: SharedCookies,
    }

    fn mounted(props: Mounted) -> Element {
        use_context_provider(|| props.jar.clone());
        rsx! {
            SignInView { on_continue: move |_: ()| {} }
        }
    }

    async fn render_after_effects(jar: MemoryCookies) -> String {
        let mut dom = VirtualDom::new_with_props(mounted, Mounted { jar: Rc::new(jar) });
        dom.rebuild_in_place();
        for _ in 0..3 {
            tokio::select! {
                _ = dom.wait_for_work() => {}
                _ = tokio::time::sleep(Duration::from_millis(20)) => {}
            }
            let _ = dom.render_immediate_to_vec();
        }
        dioxus_ssr::render(&dom)
    }

    #[tokio::test]
    async fn test_no_continue_button_without_token() {
        let html = render_after_effects(MemoryCookies::new()).await;
        assert!(!html.contains("Continue to dashboard"), "{html}");
        assert!(html.contains("session service"));
    }

    #[tokio::test]
    async fn test_no_continue_button_for_null_token() {
        let jar = MemoryCookies::new().with("accessToken", "null");
        let html = render_after_effects(jar).await;
        assert!(!html.contains("Continue to dashboard"), "{html}");
    }

    #[tokio::test]
    async fn test_continue_button_with_token() {
        let jar = MemoryCookies::new().with("accessToken", "eyJhbGciOi.payload.sig");
        let html = render_after_effects(jar).await;
        assert!(html.contains("Continue to dashboard"), "{html}");
    }
}
