use dioxus::prelude::*;
use ui::{use_auth, use_shell_config};

#[component]
pub fn Settings() -> Element {
    let auth = use_auth();
    let config = use_shell_config();
    let email = auth().user.map(|u| u.email).unwrap_or_default();

    rsx! {
        main {
            class: "px-4 py-6 sm:px-6 lg:max-w-6xl lg:mx-auto lg:px-8",
            h1 { class: "text-2xl font-semibold text-gray-900", "Settings" }
            section {
                class: "mt-6 bg-white shadow rounded-md p-4 text-sm text-gray-700",
                h2 { class: "font-medium text-gray-900", "Account" }
                p { class: "mt-1", "Signed in as {email}" }
            }
            section {
                class: "mt-4 bg-white shadow rounded-md p-4 text-sm text-gray-700",
                h2 { class: "font-medium text-gray-900", "Workspace" }
                p { class: "mt-1", "Organization: {config.brand.name}" }
            }
        }
    }
}
