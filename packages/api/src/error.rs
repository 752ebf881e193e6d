//! Server-side session errors.
//!
//! Server functions turn these into `ServerFnError` with their display text.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to read session: {0}")]
    Read(tower_sessions::session::Error),
    #[error("failed to flush session: {0}")]
    Flush(tower_sessions::session::Error),
}
