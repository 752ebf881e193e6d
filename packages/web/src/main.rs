use dioxus::prelude::*;

use ui::{AuthProvider, ShellConfig};
use views::{Dashboard, Home, Settings, SignIn, UserDetail, Users};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/signin")]
    SignIn {},
    #[layout(Dashboard)]
        #[route("/")]
        Home {},
        #[route("/users")]
        Users {},
        #[route("/users/:id")]
        UserDetail { id: String },
        #[route("/settings")]
        Settings {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const SHELL_TOML: &str = include_str!("../shell.toml");

fn main() {
    #[cfg(feature = "server")]
    {
        init_tracing();
        let result = tokio::runtime::Runtime::new().and_then(|rt| rt.block_on(launch_server()));
        if let Err(e) = result {
            tracing::error!("Server stopped: {}", e);
            std::process::exit(1);
        }
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[cfg(feature = "server")]
async fn launch_server() -> std::io::Result<()> {
    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use tower_sessions::cookie::SameSite;
    use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

    dotenvy::dotenv().ok();

    // Set SESSION_SECURE=true when served over HTTPS
    let secure = std::env::var("SESSION_SECURE")
        .map(|v| v == "true")
        .unwrap_or(false);

    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(secure)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::days(7)));

    let router = axum::Router::new()
        .serve_dioxus_application(ServeConfig::new(), App)
        .layer(session_layer);

    // Use the address from dx serve or default to localhost:8080
    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service()).await
}

/// Parse the bundled `shell.toml`, falling back to defaults.
fn load_shell_config() -> ShellConfig {
    ShellConfig::from_toml(SHELL_TOML).unwrap_or_else(|e| {
        tracing::warn!("Invalid {}, using defaults: {}", ShellConfig::filename(), e);
        ShellConfig::default()
    })
}

#[component]
fn App() -> Element {
    use_context_provider(load_shell_config);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::TAILWIND_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}
