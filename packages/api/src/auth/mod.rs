//! Session keys and helpers shared by the server functions.

mod session;

pub use session::{ACCESS_TOKEN_COOKIE, SESSION_USER_KEY};
#[cfg(feature = "server")]
pub use session::{end_session, session_user};
