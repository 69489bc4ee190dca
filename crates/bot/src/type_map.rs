use std::collections::HashMap;
use std::sync::Arc;

use serenity::all::MessageId;
use serenity::gateway::ShardManager;
use serenity::prelude::TypeMapKey;
use tokio::sync::Mutex;

use steamcord::api::SteamClient;
use steamcord::pager::FriendPager;

pub struct SteamApi;

impl TypeMapKey for SteamApi {
    type Value = SteamClient;
}

/// Live friend-list sessions, keyed by the message displaying them.
///
/// Each session sits behind its own mutex so concurrent navigation events
/// for one message are serialized without blocking the whole table.
pub struct Pagers;

impl TypeMapKey for Pagers {
    type Value = HashMap<MessageId, Arc<Mutex<FriendPager>>>;
}

pub struct ShardManagerKey;

impl TypeMapKey for ShardManagerKey {
    type Value = Arc<ShardManager>;
}
