//! Profile dropdown in the top bar.

use dioxus::prelude::*;

use crate::auth::{sign_out, use_auth};
use crate::config::use_shell_config;
use crate::cookies::use_cookie_jar;
use crate::dismiss::use_dismiss;
use crate::icons::FaChevronDown;
use crate::menu::{dispatch, MenuEvent, MenuState};
use crate::nav::{profile_href, SETTINGS_PATH};
use crate::Icon;

/// Id of the element wrapping the trigger and the dropdown.
pub const PROFILE_MENU_ID: &str = "profile-menu";

/// Trigger button showing the user's email, plus the dropdown it opens.
///
/// The dropdown closes when the trigger is clicked again, on a click anywhere
/// outside [`PROFILE_MENU_ID`], on escape, and when one of its items is chosen.
#[component]
pub fn ProfileMenu(on_navigate: EventHandler<String>, on_signed_out: EventHandler<()>) -> Element {
    let auth = use_auth();
    let config = use_shell_config();
    let jar = use_cookie_jar();
    let mut menu = use_signal(MenuState::default);
    use_dismiss(menu, PROFILE_MENU_ID);

    let user = auth().user;
    let email = user.as_ref().map(|u| u.email.clone()).unwrap_or_default();
    let profile = profile_href(user.as_ref());

    let follow = move |href: String| {
        dispatch(&mut menu, MenuEvent::Navigate);
        on_navigate.call(href);
    };

    let logout = move |_: ()| {
        dispatch(&mut menu, MenuEvent::Navigate);
        let cookie_name = config.session.cookie_name.clone();
        let jar = jar.clone();
        spawn(async move {
            sign_out(auth, jar.as_ref(), &cookie_name).await;
            on_signed_out.call(());
        });
    };

    rsx! {
        div {
            id: PROFILE_MENU_ID,
            class: "ml-3 relative",
            div {
                button {
                    id: "user-menu",
                    class: "max-w-xs bg-white rounded-full flex items-center text-sm focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-cyan-500 lg:p-2 lg:rounded-md lg:hover:bg-gray-50",
                    "aria-haspopup": "true",
                    "aria-expanded": if menu().is_open() { "true" } else { "false" },
                    onclick: move |_| dispatch(&mut menu, MenuEvent::Toggle),
                    span {
                        class: "hidden ml-3 text-gray-700 text-sm font-medium lg:block",
                        span { class: "sr-only", "Open user menu for " }
                        "{email}"
                    }
                    Icon {
                        class: "hidden flex-shrink-0 ml-1 text-gray-400 lg:block",
                        icon: FaChevronDown,
                        width: 12,
                        height: 12,
                    }
                }
            }

            if menu().is_open() {
                div {
                    class: "origin-top-right absolute right-0 mt-2 w-48 rounded-md shadow-lg py-1 bg-white ring-1 ring-black/5 z-10",
                    role: "menu",
                    "aria-orientation": "vertical",
                    "aria-labelledby": "user-menu",
                    if let Some(href) = profile {
                        MenuLink { href: href, label: "My Profile", on_select: follow }
                    }
                    MenuLink { href: "{SETTINGS_PATH}", label: "Settings", on_select: follow }
                    MenuAction { label: "Logout", on_select: logout }
                }
            }
        }
    }
}

const ITEM_CLASS: &str = "block px-4 py-2 text-sm text-gray-700 hover:bg-gray-100";

#[component]
fn MenuLink(href: String, label: String, on_select: EventHandler<String>) -> Element {
    rsx! {
        a {
            href: "{href}",
            class: ITEM_CLASS,
            role: "menuitem",
            onclick: {
                let href = href.clone();
                move |evt: Event<MouseData>| {
                    evt.prevent_default();
                    on_select.call(href.clone());
                }
            },
            "{label}"
        }
    }
}

#[component]
fn MenuAction(label: String, on_select: EventHandler<()>) -> Element {
    rsx! {
        a {
            href: "#",
            class: ITEM_CLASS,
            role: "menuitem",
            onclick: move |evt: Event<MouseData>| {
                evt.prevent_default();
                on_select.call(());
            },
            "{label}"
        }
    }
}
