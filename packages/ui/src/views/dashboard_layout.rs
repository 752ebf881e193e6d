use dioxus::prelude::*;

use crate::dismiss::use_dismiss;
use crate::menu::MenuState;
use crate::session::use_session_gate;
use crate::sidebar::{DesktopSidebar, MobileSidebar, MOBILE_SIDEBAR_ID};
use crate::top_bar::TopBar;

/// Shared dashboard shell.
///
/// Platform packages pass the current route path, a navigation callback and the
/// page content as children. On first render in the browser the session cookie
/// is checked and `on_sign_in_required` fires when it is missing; the same
/// callback runs after the user logs out.
#[component]
pub fn DashboardLayoutView(
    /// Path of the page being shown, used to highlight the matching nav link.
    current_path: String,
    /// The page content.
    children: Element,
    /// Called with the href of any internal link the user follows.
    on_navigate: EventHandler<String>,
    /// Called when there is no session, or the session was just ended.
    on_sign_in_required: EventHandler<()>,
    /// Called with a trimmed, non-empty search term.
    #[props(default)]
    on_search: EventHandler<String>,
) -> Element {
    use_session_gate(on_sign_in_required);

    let sidebar = use_signal(MenuState::default);
    use_dismiss(sidebar, MOBILE_SIDEBAR_ID);

    rsx! {
        div {
            class: "h-screen flex overflow-hidden bg-gray-100",

            // Off-canvas menu for small screens
            div {
                class: "lg:hidden",
                MobileSidebar {
                    open: sidebar,
                    current_path: current_path.clone(),
                    on_navigate: on_navigate,
                }
            }

            // Static sidebar for desktop
            div {
                class: "hidden lg:flex lg:flex-shrink-0",
                DesktopSidebar {
                    current_path: current_path,
                    on_navigate: on_navigate,
                }
            }

            div {
                class: "flex-1 overflow-auto focus:outline-none",
                tabindex: "0",
                TopBar {
                    sidebar: sidebar,
                    on_navigate: on_navigate,
                    on_search: on_search,
                    on_signed_out: on_sign_in_required,
                }

                {children}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;
    use std::time::Duration;

    use super::*;
    use crate::auth::AuthState;
    use crate::cookies::{MemoryCookies, SharedCookies};

    const COOKIE: &str = "accessToken";

    #[derive(Clone)]
    struct Mounted {
        jar: SharedCookies,
        path: &'static str,
        redirects: Rc<Cell<u32>>,
    }

    fn mounted(props: Mounted) -> Element {
        use_context_provider(|| props.jar.clone());
        use_context_provider(|| {
            Signal::new(AuthState {
                user: None,
                loading: false,
            })
        });
        let redirects = props.redirects.clone();

        rsx! {
            DashboardLayoutView {
                current_path: props.path.to_string(),
                on_navigate: move |_: String| {},
                on_sign_in_required: move |_: ()| redirects.set(redirects.get() + 1),
                p { "content" }
            }
        }
    }

    fn build(jar: MemoryCookies, path: &'static str) -> (VirtualDom, Rc<Cell<u32>>) {
        let redirects = Rc::new(Cell::new(0));
        let mut dom = VirtualDom::new_with_props(
            mounted,
            Mounted {
                jar: Rc::new(jar),
                path,
                redirects: redirects.clone(),
            },
        );
        dom.rebuild_in_place();
        (dom, redirects)
    }

    /// Mount the layout and let queued effects run.
    async fn redirects_after_mount(jar: MemoryCookies) -> u32 {
        let (mut dom, redirects) = build(jar, "/");
        for _ in 0..3 {
            tokio::select! {
                _ = dom.wait_for_work() => {}
                _ = tokio::time::sleep(Duration::from_millis(20)) => {}
            }
            let _ = dom.render_immediate_to_vec();
        }
        redirects.get()
    }

    /// Opening `<a` tags of every link marked as the current page.
    fn current_page_links(html: &str) -> Vec<&str> {
        html.split("<a ")
            .skip(1)
            .map(|tag| tag.split('>').next().unwrap_or_default())
            .filter(|tag| tag.contains("aria-current=\"page\""))
            .collect()
    }

    #[tokio::test]
    async fn test_missing_token_redirects_on_mount() {
        assert_eq!(redirects_after_mount(MemoryCookies::new()).await, 1);
    }

    #[tokio::test]
    async fn test_null_token_redirects_on_mount() {
        let jar = MemoryCookies::new().with(COOKIE, "null");
        assert_eq!(redirects_after_mount(jar).await, 1);
    }

    #[tokio::test]
    async fn test_empty_token_redirects_on_mount() {
        let jar = MemoryCookies::new().with(COOKIE, "");
        assert_eq!(redirects_after_mount(jar).await, 1);
    }

    #[tokio::test]
    async fn test_valid_token_stays_on_dashboard() {
        let jar = MemoryCookies::new().with(COOKIE, "eyJhbGciOi.payload.sig");
        assert_eq!(redirects_after_mount(jar).await, 0);
    }

    #[test]
    fn test_only_matching_link_is_highlighted() {
        let jar = MemoryCookies::new().with(COOKIE, "token");
        let (dom, _) = build(jar, "/users/42");
        let html = dioxus_ssr::render(&dom);

        let current = current_page_links(&html);
        assert_eq!(current.len(), 1, "{html}");
        assert!(current[0].contains("href=\"/users\""));
        assert_eq!(html.matches("bg-cyan-800").count(), 1);
        assert!(current[0].contains("bg-cyan-800"));
    }

    #[test]
    fn test_home_link_highlighted_on_root() {
        let (dom, _) = build(MemoryCookies::new().with(COOKIE, "token"), "/");
        let html = dioxus_ssr::render(&dom);

        let current = current_page_links(&html);
        assert_eq!(current.len(), 1, "{html}");
        assert!(current[0].contains("href=\"/\""));
        assert!(html.contains("content"));
    }
}
