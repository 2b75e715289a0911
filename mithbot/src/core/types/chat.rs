//! Chat target type.

use serde::{Deserialize, Serialize};

/// A chat the bot can send to (id plus chat type string).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}
