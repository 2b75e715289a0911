//! Transport-agnostic update model and conversion traits.

mod chat;
mod update;
mod user;

pub use chat::Chat;
pub use update::{Update, UpdateKind};
pub use user::User;

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific event to core [`Update`].
pub trait ToCoreUpdate: Send + Sync {
    fn to_core(&self) -> Update;
}
