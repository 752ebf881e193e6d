use dioxus::prelude::*;

use ui::views::DashboardLayoutView;

use crate::Route;

/// Last search submitted from the top bar, shared with the users page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchQuery(pub Option<String>);

/// Route layout wrapping every signed-in page in the dashboard shell.
#[component]
pub fn Dashboard() -> Element {
    let nav = use_navigator();
    let route = use_route::<Route>();
    let mut search: Signal<SearchQuery> =
        use_context_provider(|| Signal::new(SearchQuery::default()));

    let on_navigate = move |href: String| match href.parse::<Route>() {
        Ok(target) => {
            nav.push(target);
        }
        Err(_) => tracing::warn!("No route for {}", href),
    };

    let on_sign_in_required = move |_: ()| {
        nav.replace(Route::SignIn {});
    };

    let on_search = move |term: String| {
        search.set(SearchQuery(Some(term)));
        nav.push(Route::Users {});
    };

    rsx! {
        DashboardLayoutView {
            current_path: route.to_string(),
            on_navigate: on_navigate,
            on_sign_in_required: on_sign_in_required,
            on_search: on_search,
            Outlet::<Route> {}
        }
    }
}
