//! Data models shared with the client.

mod user;

pub use user::UserInfo;
