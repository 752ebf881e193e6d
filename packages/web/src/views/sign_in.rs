use dioxus::prelude::*;
use ui::views::SignInView;

use crate::Route;

#[component]
pub fn SignIn() -> Element {
    let nav = use_navigator();

    rsx! {
        SignInView {
            on_continue: move |_: ()| {
                nav.push(Route::Home {});
            },
        }
    }
}
