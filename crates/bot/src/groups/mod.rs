//! Command groups and the embed styling they share.

use serenity::all::{Colour, CreateEmbed};

pub mod general;
pub mod steam;

/// The accent colour used on every embed (Discord's blurple).
pub const ACCENT: Colour = Colour::from_rgb(114, 137, 218);

/// Wraps a description in the bot's standard embed.
pub fn embed(description: impl Into<String>) -> CreateEmbed {
    CreateEmbed::new().description(description).colour(ACCENT)
}
