use serenity::all::{CreateMessage, Mentionable, Message};
use serenity::framework::standard::macros::{command, group};
use serenity::framework::standard::CommandResult;
use serenity::prelude::*;

use crate::groups::embed;
use crate::type_map::ShardManagerKey;

#[group]
#[commands(ping)]
pub struct General;

#[command]
async fn ping(ctx: &Context, msg: &Message) -> CommandResult {
    let latency = {
        let data = ctx.data.read().await;
        match data.get::<ShardManagerKey>() {
            Some(shard_manager) => {
                let runners = shard_manager.runners.lock().await;
                runners.get(&ctx.shard_id).and_then(|runner| runner.latency)
            }
            None => None,
        }
    };

    let description = match latency {
        Some(latency) => format!(
            "{} :ping_pong: Pong! with `{}ms`!",
            msg.author.mention(),
            latency.as_millis()
        ),
        // No heartbeat has been acknowledged yet on this shard
        None => format!("{} :ping_pong: Pong!", msg.author.mention()),
    };
    msg.channel_id
        .send_message(&ctx.http, CreateMessage::new().embed(embed(description)))
        .await?;

    Ok(())
}
