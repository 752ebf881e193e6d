//! Session data access.

#[cfg(feature = "server")]
use crate::error::SessionError;
#[cfg(feature = "server")]
use crate::models::UserInfo;

/// Key under which the signed-in user is stored in the server session.
///
/// Written by the session service at sign-in; this crate only reads and clears it.
pub const SESSION_USER_KEY: &str = "user";

/// Name of the browser cookie holding the access token.
pub const ACCESS_TOKEN_COOKIE: &str = "accessToken";

/// Load the user attached to a session, if any.
#[cfg(feature = "server")]
pub async fn session_user(
    session: &tower_sessions::Session,
) -> Result<Option<UserInfo>, SessionError> {
    let user = session
        .get::<UserInfo>(SESSION_USER_KEY)
        .await
        .map_err(SessionError::Read)?;
    Ok(user)
}

/// Drop every value held by the session and invalidate its id.
#[cfg(feature = "server")]
pub async fn end_session(session: &tower_sessions::Session) -> Result<(), SessionError> {
    session.flush().await.map_err(SessionError::Flush)
}

#[cfg(all(test, feature = "server"))]
mod tests {
    use std::sync::Arc;

    use tower_sessions::{MemoryStore, Session};

    use super::*;

    fn session() -> Session {
        Session::new(None, Arc::new(MemoryStore::default()), None)
    }

    fn ada() -> UserInfo {
        UserInfo {
            id: "42".to_string(),
            email: "ada@example.com".to_string(),
            name: Some("Ada".to_string()),
        }
    }

    #[tokio::test]
    async fn test_no_user_before_sign_in() {
        let session = session();
        assert_eq!(session_user(&session).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_reads_user_written_at_sign_in() {
        let session = session();
        session.insert(SESSION_USER_KEY, ada()).await.unwrap();
        assert_eq!(session_user(&session).await.unwrap(), Some(ada()));
    }

    #[tokio::test]
    async fn test_end_session_forgets_user() {
        let session = session();
        session.insert(SESSION_USER_KEY, ada()).await.unwrap();
        end_session(&session).await.unwrap();
        assert_eq!(session_user(&session).await.unwrap(), None);
    }
}
