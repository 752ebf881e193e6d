use dioxus::prelude::*;
use ui::use_auth;

use super::SearchQuery;

#[component]
pub fn Users() -> Element {
    let search = use_context::<Signal<SearchQuery>>();

    rsx! {
        main {
            class: "px-4 py-6 sm:px-6 lg:max-w-6xl lg:mx-auto lg:px-8",
            h1 { class: "text-2xl font-semibold text-gray-900", "Users" }
            if let SearchQuery(Some(term)) = search() {
                p {
                    class: "mt-2 text-sm text-gray-500",
                    "Results for \"{term}\""
                }
            }
        }
    }
}

#[component]
pub fn UserDetail(id: String) -> Element {
    let auth = use_auth();
    let is_self = auth().user.as_ref().is_some_and(|u| u.id == id);

    rsx! {
        main {
            class: "px-4 py-6 sm:px-6 lg:max-w-6xl lg:mx-auto lg:px-8",
            h1 {
                class: "text-2xl font-semibold text-gray-900",
                if is_self { "My Profile" } else { "User {id}" }
            }
            if is_self {
                if let Some(user) = auth().user {
                    dl {
                        class: "mt-4 text-sm text-gray-700",
                        dt { class: "font-medium", "Email" }
                        dd { "{user.email}" }
                        dt { class: "font-medium mt-2", "Name" }
                        dd { "{user.display_name()}" }
                    }
                }
            }
        }
    }
}
