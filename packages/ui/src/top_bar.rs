use dioxus::prelude::*;

use crate::config::use_shell_config;
use crate::icons::{FaBars, FaBell, FaMagnifyingGlass};
use crate::menu::{dispatch, MenuEvent, MenuState};
use crate::profile_menu::ProfileMenu;
use crate::Icon;

/// Header above the page content: sidebar opener, search, notifications and profile menu.
#[component]
pub fn TopBar(
    sidebar: Signal<MenuState>,
    on_navigate: EventHandler<String>,
    on_search: EventHandler<String>,
    on_signed_out: EventHandler<()>,
) -> Element {
    let mut sidebar = sidebar;

    rsx! {
        div {
            class: "relative z-10 flex-shrink-0 flex h-16 bg-white border-b border-gray-200 lg:border-none",
            button {
                class: "px-4 border-r border-gray-200 text-gray-400 focus:outline-none focus:ring-2 focus:ring-inset focus:ring-cyan-500 lg:hidden",
                onclick: move |_| dispatch(&mut sidebar, MenuEvent::Toggle),
                span { class: "sr-only", "Open sidebar" }
                Icon { icon: FaBars, width: 20, height: 20 }
            }

            div {
                class: "flex-1 px-4 flex justify-between sm:px-6 lg:max-w-6xl lg:mx-auto lg:px-8",
                div {
                    class: "flex-1 flex",
                    SearchForm { on_search: on_search }
                }
                div {
                    class: "ml-4 flex items-center md:ml-6",
                    button {
                        class: "bg-white p-1 rounded-full text-gray-400 hover:text-gray-500 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-cyan-500",
                        span { class: "sr-only", "View notifications" }
                        Icon { icon: FaBell, width: 20, height: 20 }
                    }
                    ProfileMenu {
                        on_navigate: on_navigate,
                        on_signed_out: on_signed_out,
                    }
                }
            }
        }
    }
}

#[component]
fn SearchForm(on_search: EventHandler<String>) -> Element {
    let config = use_shell_config();
    let mut query = use_signal(String::new);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let term = query().trim().to_string();
        if term.is_empty() {
            return;
        }
        tracing::debug!(%term, "search submitted");
        on_search.call(term);
    };

    rsx! {
        form {
            class: "w-full flex md:ml-0",
            onsubmit: submit,
            label { r#for: "search_field", class: "sr-only", "Search" }
            div {
                class: "relative w-full text-gray-400 focus-within:text-gray-600",
                div {
                    class: "absolute inset-y-0 left-0 flex items-center pointer-events-none",
                    "aria-hidden": "true",
                    Icon { icon: FaMagnifyingGlass, width: 16, height: 16 }
                }
                input {
                    id: "search_field",
                    name: "search_field",
                    class: "block w-full h-full pl-8 pr-3 py-2 border-transparent text-gray-900 placeholder-gray-500 focus:outline-none focus:ring-0 focus:border-transparent sm:text-sm",
                    placeholder: "{config.search.placeholder}",
                    r#type: "search",
                    value: query(),
                    oninput: move |evt: FormEvent| query.set(evt.value()),
                }
            }
        }
    }
}
