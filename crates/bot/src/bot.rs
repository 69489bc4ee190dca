//! This module handles nearly everything with the discord bot.

use std::{
    collections::{HashMap, HashSet},
    fs::File,
    io::Read,
    path::Path,
    sync::Arc,
};

use serenity::all::{GatewayIntents, Http};
use serenity::Client;

use steamcord::api::SteamClient;

use crate::handler;
use crate::hooks;
use crate::structures::{InitError, Keys};
use crate::type_map::{Pagers, ShardManagerKey, SteamApi};

/// Initializes the bot, without starting it.
///
/// The credential store is read exactly once here; a missing or malformed
/// file is a startup failure, never something to limp past.
///
/// # Errors
/// Will return an error if initialization fails. See [`InitError`].
pub async fn init(keys_path: impl AsRef<Path>) -> Result<Client, InitError> {
    // Read the credential store
    let mut keys_file = File::open(keys_path)?;
    let mut raw_keys = String::new();
    keys_file.read_to_string(&mut raw_keys)?;
    let keys: Keys = serde_json::from_str(&raw_keys)?;

    let http = Http::new(&keys.discord_bot);

    // Get the owners
    let owners = {
        let info = http.get_current_application_info().await?;
        let mut owners = HashSet::new();
        if let Some(team) = info.team {
            owners.insert(team.owner_user_id);
        } else if let Some(owner) = &info.owner {
            owners.insert(owner.id);
        }
        owners
    };

    let framework = hooks::setup_framework(owners);
    // Only ask for what we need
    let intents =
        GatewayIntents::MESSAGE_CONTENT |
        GatewayIntents::GUILD_MESSAGE_REACTIONS |
        GatewayIntents::DIRECT_MESSAGE_REACTIONS |
        GatewayIntents::GUILD_MESSAGES |
        GatewayIntents::DIRECT_MESSAGES;

    // Build the client
    let client = Client::builder(&keys.discord_bot, intents)
        .event_handler(handler::Handler)
        .framework(framework)
        // Set up extra data
        .type_map_insert::<SteamApi>(SteamClient::new(keys.steam_web_api))
        .type_map_insert::<Pagers>(HashMap::new())
        // Finish
        .await?;

    // The shard manager only exists once the client does
    {
        let mut data = client.data.write().await;
        data.insert::<ShardManagerKey>(Arc::clone(&client.shard_manager));
    }

    Ok(client)
}
