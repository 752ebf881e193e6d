//! # Cookie jars — where the session token is read from
//!
//! [`CookieJar`] is the seam between the session gate and the platform's cookie
//! storage. Two implementations exist:
//!
//! | Jar | Target | Backing store |
//! |-----|--------|---------------|
//! | [`MemoryCookies`] | non-wasm builds, tests | `RefCell<HashMap>` |
//! | [`BrowserCookies`] | `wasm32` | `document.cookie` |
//!
//! [`platform_cookies`] picks the right one for the current target. Components
//! read the jar through [`use_cookie_jar`], so a parent can provide its own
//! [`SharedCookies`] as context.
//!
//! Values are returned exactly as stored; no percent-decoding is applied.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use dioxus::prelude::{try_consume_context, use_hook};
use thiserror::Error;

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserCookies;

#[derive(Debug, Error)]
pub enum CookieError {
    #[error("no document is available")]
    NoDocument,
    #[error("cookie store rejected the write: {0}")]
    Rejected(String),
}

/// Read/remove access to named cookies.
pub trait CookieJar {
    fn get(&self, name: &str) -> Option<String>;
    fn remove(&self, name: &str) -> Result<(), CookieError>;
}

/// Jar handle shared through context.
pub type SharedCookies = Rc<dyn CookieJar>;

/// In-memory jar used off the browser and in tests.
#[derive(Debug, Default)]
pub struct MemoryCookies {
    cookies: RefCell<HashMap<String, String>>,
}

impl MemoryCookies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(self, name: &str, value: &str) -> Self {
        self.cookies
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
        self
    }
}

impl CookieJar for MemoryCookies {
    fn get(&self, name: &str) -> Option<String> {
        self.cookies.borrow().get(name).cloned()
    }

    fn remove(&self, name: &str) -> Result<(), CookieError> {
        self.cookies.borrow_mut().remove(name);
        Ok(())
    }
}

/// Extract one cookie value from a `document.cookie`-style header.
///
/// The first pair named `name` wins.
pub fn parse_cookie(header: &str, name: &str) -> Option<String> {
    header
        .split(';')
        .map(str::trim)
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| value.trim().to_string())
}

/// Assignment string that deletes `name` when written to `document.cookie`.
pub fn expired_cookie(name: &str) -> String {
    format!("{name}=; Max-Age=0; path=/")
}

/// Cookie jar for the current platform.
pub fn platform_cookies() -> impl CookieJar {
    #[cfg(target_arch = "wasm32")]
    {
        BrowserCookies
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        MemoryCookies::new()
    }
}

/// The jar provided by a parent component, or [`platform_cookies`].
pub fn use_cookie_jar() -> SharedCookies {
    use_hook(|| {
        try_consume_context::<SharedCookies>()
            .unwrap_or_else(|| Rc::new(platform_cookies()) as SharedCookies)
    })
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use wasm_bindgen::JsCast;
    use web_sys::HtmlDocument;

    use super::{expired_cookie, parse_cookie, CookieError, CookieJar};

    /// Jar backed by `document.cookie`.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct BrowserCookies;

    fn html_document() -> Result<HtmlDocument, CookieError> {
        web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.dyn_into::<HtmlDocument>().ok())
            .ok_or(CookieError::NoDocument)
    }

    impl CookieJar for BrowserCookies {
        fn get(&self, name: &str) -> Option<String> {
            let header = html_document().ok()?.cookie().ok()?;
            parse_cookie(&header, name)
        }

        fn remove(&self, name: &str) -> Result<(), CookieError> {
            html_document()?
                .set_cookie(&expired_cookie(name))
                .map_err(|e| CookieError::Rejected(format!("{e:?}")))
        }
    }
}
