//! The fixed chat command set: triggers, annotations, and parsing.
//!
//! Commands are defined at compile time; nothing registers or removes them
//! at runtime. Text that parses to no command is free text for the default
//! handler.

/// A chat command the bot understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Greet,
    Name,
    Start,
    Help,
    /// Legacy alias for free-text questions; kept for old chats.
    Ask,
    Status,
}

impl Command {
    /// Registration order; /help enumerates commands in this order.
    pub const ALL: [Command; 6] = [
        Command::Greet,
        Command::Name,
        Command::Start,
        Command::Help,
        Command::Ask,
        Command::Status,
    ];

    /// Canonical text trigger, without the leading slash.
    pub fn trigger(&self) -> &'static str {
        match self {
            Command::Greet => "greet",
            Command::Name => "name",
            Command::Start => "start",
            Command::Help => "help",
            Command::Ask => "chatGPT",
            Command::Status => "status",
        }
    }

    /// Human-readable annotation shown by /help; empty for all but the
    /// deprecated alias.
    pub fn annotation(&self) -> &'static str {
        match self {
            Command::Ask => "deprecated",
            _ => "",
        }
    }

    /// Parses `text` as a command invocation.
    ///
    /// Accepts "/trigger", optionally suffixed with "@botusername" (a suffix
    /// naming a different bot rejects the match), followed by a free-text
    /// remainder. Trigger matching is exact and case-sensitive. Returns
    /// `None` for anything else; the caller treats that as free text.
    pub fn parse(text: &str, bot_username: Option<&str>) -> Option<(Command, String)> {
        let rest = text.trim().strip_prefix('/')?;
        let (token, remainder) = match rest.split_once(char::is_whitespace) {
            Some((token, remainder)) => (token, remainder),
            None => (rest, ""),
        };
        let (name, mention) = match token.split_once('@') {
            Some((name, mention)) => (name, Some(mention)),
            None => (token, None),
        };
        if let (Some(mention), Some(username)) = (mention, bot_username) {
            if !mention.eq_ignore_ascii_case(username) {
                return None;
            }
        }
        let command = Command::ALL.into_iter().find(|c| c.trigger() == name)?;
        Some((command, remainder.trim().to_string()))
    }
}
