use dioxus::prelude::*;
use ui::use_auth;

#[component]
pub fn Home() -> Element {
    let auth = use_auth();
    let greeting = match auth().user {
        Some(user) => format!("Welcome back, {}", user.display_name()),
        None => "Welcome".to_string(),
    };

    rsx! {
        main {
            class: "px-4 py-6 sm:px-6 lg:max-w-6xl lg:mx-auto lg:px-8",
            h1 { class: "text-2xl font-semibold text-gray-900", "{greeting}" }
            p {
                class: "mt-2 text-sm text-gray-500",
                "Pick a section from the sidebar to get started."
            }
        }
    }
}
