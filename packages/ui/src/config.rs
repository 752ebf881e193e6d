//! # Shell configuration — `shell.toml`
//!
//! Branding and session settings for the dashboard shell. The web package embeds a
//! `shell.toml`, parses it at startup and provides the result as Dioxus context;
//! components read it back with [`use_shell_config`].
//!
//! ```toml
//! [brand]
//! name = "Company"
//! logo = "/images/unicorn.svg"
//!
//! [session]
//! cookie_name = "accessToken"
//!
//! [search]
//! placeholder = "Search user (name, email)"
//! ```
//!
//! Every field has a default, so a missing or empty file is equivalent to the
//! default configuration.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ShellConfig {
    #[serde(default)]
    pub brand: BrandConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BrandConfig {
    /// Name shown under the logo in the sidebar.
    #[serde(default = "default_brand_name")]
    pub name: String,
    /// Logo image URL. Empty hides the image.
    #[serde(default = "default_brand_logo")]
    pub logo: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Cookie holding the access token.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_search_placeholder")]
    pub placeholder: String,
}

fn default_brand_name() -> String {
    "Company".to_string()
}

fn default_brand_logo() -> String {
    "/images/unicorn.svg".to_string()
}

fn default_cookie_name() -> String {
    api::auth::ACCESS_TOKEN_COOKIE.to_string()
}

fn default_search_placeholder() -> String {
    "Search user (name, email)".to_string()
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            name: default_brand_name(),
            logo: default_brand_logo(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            placeholder: default_search_placeholder(),
        }
    }
}

impl ShellConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "shell.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// The shell config provided by the app, or the defaults.
pub fn use_shell_config() -> ShellConfig {
    try_use_context::<ShellConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = ShellConfig::from_toml("").unwrap();
        assert_eq!(config, ShellConfig::default());
        assert_eq!(config.session.cookie_name, "accessToken");
        assert_eq!(config.brand.name, "Company");
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let config = ShellConfig::from_toml(
            r#"
            [brand]
            name = "Acme Admin"
            "#,
        )
        .unwrap();
        assert_eq!(config.brand.name, "Acme Admin");
        assert_eq!(config.brand.logo, "/images/unicorn.svg");
        assert_eq!(config.search.placeholder, "Search user (name, email)");
    }

    #[test]
    fn test_custom_cookie_name() {
        let config = ShellConfig::from_toml(
            r#"
            [session]
            cookie_name = "adminToken"
            "#,
        )
        .unwrap();
        assert_eq!(config.session.cookie_name, "adminToken");
    }

    #[test]
    fn test_rejects_wrong_types() {
        assert!(ShellConfig::from_toml("[brand]\nname = 3\n").is_err());
    }

    #[test]
    fn test_written_config_reads_back() {
        let mut config = ShellConfig::default();
        config.brand.logo = String::new();
        let text = config.to_toml().unwrap();
        assert_eq!(ShellConfig::from_toml(&text).unwrap(), config);
    }
}
