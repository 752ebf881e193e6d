//! Static desktop sidebar and the off-canvas sidebar used on small screens.

use dioxus::prelude::*;

use crate::config::use_shell_config;
use crate::icons::{FaGear, FaHouse, FaUsers, FaXmark};
use crate::menu::{dispatch, MenuEvent, MenuState};
use crate::nav::{link_class, NavIcon, NavItem, HOME_PATH, PRIMARY_NAV, SECONDARY_NAV};
use crate::Icon;

/// Id of the sliding panel, used to tell clicks on it from clicks on the backdrop.
pub const MOBILE_SIDEBAR_ID: &str = "mobile-sidebar";

#[component]
pub fn DesktopSidebar(current_path: String, on_navigate: EventHandler<String>) -> Element {
    rsx! {
        div {
            class: "flex flex-col w-64",
            div {
                class: "flex flex-col flex-grow bg-cyan-700 pt-5 pb-4 overflow-y-auto",
                Brand { on_navigate: on_navigate }
                SidebarNav {
                    current_path: current_path,
                    on_navigate: on_navigate,
                }
            }
        }
    }
}

#[component]
pub fn MobileSidebar(
    open: Signal<MenuState>,
    current_path: String,
    on_navigate: EventHandler<String>,
) -> Element {
    let mut open = open;

    if !open().is_open() {
        return rsx! {};
    }

    let follow = move |href: String| {
        dispatch(&mut open, MenuEvent::Navigate);
        on_navigate.call(href);
    };

    rsx! {
        div {
            class: "fixed inset-0 flex z-10",
            div {
                class: "fixed inset-0",
                onclick: move |_| dispatch(&mut open, MenuEvent::Pointer { inside: false }),
                div {
                    class: "absolute inset-0 bg-gray-600 opacity-75",
                    "aria-hidden": "true",
                }
            }
            div {
                id: MOBILE_SIDEBAR_ID,
                class: "relative flex-1 flex flex-col max-w-xs w-full pt-5 pb-4 bg-cyan-700",
                div {
                    class: "absolute top-0 right-0 -mr-12 pt-2",
                    button {
                        class: "ml-1 flex items-center justify-center h-10 w-10 rounded-full focus:outline-none focus:ring-2 focus:ring-inset focus:ring-white",
                        onclick: move |_| dispatch(&mut open, MenuEvent::Toggle),
                        span { class: "sr-only", "Close sidebar" }
                        Icon { class: "text-white", icon: FaXmark, width: 20, height: 20 }
                    }
                }
                Brand { on_navigate: follow }
                SidebarNav {
                    current_path: current_path,
                    on_navigate: follow,
                }
            }
            // Keeps the panel narrow enough to show the close button.
            div { class: "flex-shrink-0 w-14", "aria-hidden": "true" }
        }
    }
}

#[component]
fn Brand(on_navigate: EventHandler<String>) -> Element {
    let config = use_shell_config();
    let brand = config.brand;

    rsx! {
        div {
            class: "flex items-center flex-shrink-0 px-4 mt-4 mb-8",
            a {
                href: HOME_PATH,
                class: "cursor-pointer text-white text-xl",
                onclick: move |evt: Event<MouseData>| {
                    evt.prevent_default();
                    on_navigate.call(HOME_PATH.to_string());
                },
                if !brand.logo.is_empty() {
                    img {
                        class: "m-auto mb-4 h-16",
                        src: "{brand.logo}",
                        alt: "{brand.name} logo",
                    }
                }
                h3 { "{brand.name}" }
            }
        }
    }
}

#[component]
fn SidebarNav(current_path: String, on_navigate: EventHandler<String>) -> Element {
    rsx! {
        nav {
            class: "mt-5 flex-1 flex flex-col divide-y divide-cyan-800 overflow-y-auto",
            "aria-label": "Sidebar",
            div {
                class: "px-2 space-y-1",
                for item in PRIMARY_NAV {
                    SidebarLink {
                        key: "{item.href}",
                        item: *item,
                        active: item.is_active(&current_path),
                        on_navigate: on_navigate,
                    }
                }
            }
            div {
                class: "mt-6 pt-6",
                div {
                    class: "px-2 space-y-1",
                    for item in SECONDARY_NAV {
                        SidebarLink {
                            key: "{item.href}",
                            item: *item,
                            active: item.is_active(&current_path),
                            on_navigate: on_navigate,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SidebarLink(item: NavItem, active: bool, on_navigate: EventHandler<String>) -> Element {
    rsx! {
        a {
            href: item.href,
            class: link_class(active),
            "aria-current": if active { "page" } else { "false" },
            onclick: move |evt: Event<MouseData>| {
                evt.prevent_default();
                tracing::debug!(href = item.href, "sidebar navigation");
                on_navigate.call(item.href.to_string());
            },
            NavGlyph { icon: item.icon }
            "{item.label}"
        }
    }
}

#[component]
fn NavGlyph(icon: NavIcon) -> Element {
    let class = "mr-4 text-cyan-200";
    match icon {
        NavIcon::Home => rsx! {
            Icon { class: "{class}", icon: FaHouse, width: 20, height: 20 }
        },
        NavIcon::Users => rsx! {
            Icon { class: "{class}", icon: FaUsers, width: 20, height: 20 }
        },
        NavIcon::Settings => rsx! {
            Icon { class: "{class}", icon: FaGear, width: 20, height: 20 }
        },
    }
}
