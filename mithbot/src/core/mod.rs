//! Core model: transport-agnostic types, errors, the send seam, and tracing
//! initialization. The telegram layer converts into these types; the
//! dispatcher never sees teloxide.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{MithbotError, Result};
pub use logger::init_tracing;
pub use types::{Chat, ToCoreUpdate, ToCoreUser, Update, UpdateKind, User};
