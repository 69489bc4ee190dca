//! Holds event hooks for the bot.

use std::collections::HashSet;

use serenity::all::{Message, UserId};
use serenity::framework::standard::macros::hook;
use serenity::framework::standard::{CommandError, Configuration, StandardFramework};
use serenity::prelude::*;
use tracing::{error, info};

use crate::groups;

/// The prefix every command is dispatched under.
const PREFIX: &str = "s.";

#[hook]
async fn after(
    _ctx: &Context,
    _message: &Message,
    cmd_name: &str,
    error: Result<(), CommandError>
) {
    if let Err(why) = error {
        error!("command '{cmd_name}' returned an error: {why}");
    }
}

#[hook]
async fn before(_ctx: &Context, msg: &Message, command_name: &str) -> bool {
    info!("Got command '{}' by user '{}'", command_name, msg.author.name);

    true // if `before` returns false, command processing doesn't happen.
}

/// Sets up the given framework for the bot.
pub fn setup_framework(owners: HashSet<UserId>) -> StandardFramework {
    let framework = StandardFramework::new()
        .after(after)
        .before(before)
        .group(&groups::general::GENERAL_GROUP)
        .group(&groups::steam::STEAM_GROUP);
    framework.configure(
        Configuration::new()
            .with_whitespace(true)
            .prefix(PREFIX)
            .owners(owners)
    );
    framework
}
