//! Holds data structures for use in the bot.

use displaydoc::Display;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Display, Error)]
/// Different things that can go wrong when initializing the bot.
pub enum InitError {
    #[displaydoc("serenity error: {0}")]
    /// Serenity error
    Serenity(#[from] serenity::Error),
    #[displaydoc("failed to read credential file: {0}")]
    /// Failed to read the credential file
    KeysOpenFailed(#[from] std::io::Error),
    #[displaydoc("failed to deserialize credential file: {0}")]
    /// Failed to deserialize the credential file
    KeysDeserializeFailed(#[from] serde_json::Error),
}

/// The credential store, read exactly once at startup.
///
/// Field names match the JSON file layout:
/// `{"discord_bot": "...", "steam_web_api": "..."}`.
#[derive(Deserialize, Clone, Debug)]
pub struct Keys {
    /// The Discord bot token.
    pub discord_bot: String,
    /// The Steam Web API key.
    pub steam_web_api: String,
}
