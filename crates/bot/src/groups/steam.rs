//! Commands proxying the Steam Web API.

use std::sync::Arc;
use std::time::Duration;

use serenity::all::{CreateMessage, Mentionable, Message, ReactionType};
use serenity::framework::standard::macros::{command, group};
use serenity::framework::standard::{Args, CommandResult};
use serenity::prelude::*;
use tokio::sync::Mutex;
use tracing::debug;

use steamcord::api::SteamClient;
use steamcord::avatar::AvatarSize;
use steamcord::pager::{FriendPager, PagerError};
use steamcord::presence::PresenceState;

use crate::groups::embed;
use crate::type_map::{Pagers, SteamApi};

/// Reaction glyph that retreats one page.
pub const PREVIOUS_PAGE_EMOJI: &str = "◀️";
/// Reaction glyph that advances one page.
pub const NEXT_PAGE_EMOJI: &str = "▶️";

/// How long a friend-list view keeps its navigation affordances.
const NAVIGATION_WINDOW: Duration = Duration::from_secs(60);

#[group]
#[commands(state, avatar, friends)]
pub struct Steam;

/// Pulls the shared Steam client out of the context data.
async fn steam_api(ctx: &Context) -> SteamClient {
    let data = ctx.data.read().await;
    data.get::<SteamApi>()
        .cloned()
        .expect("Steam client is inserted at startup")
}

/// Tells the author their Steam ID did not match any profile.
async fn reject_invalid_id(ctx: &Context, msg: &Message, steam_id: &str) -> CommandResult {
    let description = format!("{}, the Steam ID `{steam_id}` is invalid.", msg.author.mention());
    msg.channel_id
        .send_message(&ctx.http, CreateMessage::new().embed(embed(description)))
        .await?;
    Ok(())
}

#[command]
#[aliases(profile_state, user_state, visibility, profile_visibility, user_visibility)]
async fn state(ctx: &Context, msg: &Message, mut args: Args) -> CommandResult {
    let steam_id = args.single::<String>()?;
    let api = steam_api(ctx).await;

    let Some(summary) = api.player_summary(&steam_id).await? else {
        return reject_invalid_id(ctx, msg, &steam_id).await;
    };

    let state = PresenceState::from_code(summary.personastate);
    let description = format!("The state of SteamID `{steam_id}` is:\n{state}");
    msg.channel_id
        .send_message(&ctx.http, CreateMessage::new().embed(embed(description)))
        .await?;

    Ok(())
}

#[command]
#[aliases(get_avatar, profile_picture)]
async fn avatar(ctx: &Context, msg: &Message, mut args: Args) -> CommandResult {
    let steam_id = args.single::<String>()?;
    // Reject a bad size argument before anything touches the network
    let size = match args.single::<String>() {
        Ok(raw) => match raw.parse::<AvatarSize>() {
            Ok(size) => size,
            Err(why) => {
                let description = format!("{}, {why}", msg.author.mention());
                msg.channel_id
                    .send_message(&ctx.http, CreateMessage::new().embed(embed(description)))
                    .await?;
                return Ok(());
            }
        },
        Err(_) => AvatarSize::Full,
    };

    let api = steam_api(ctx).await;
    let Some(summary) = api.player_summary(&steam_id).await? else {
        return reject_invalid_id(ctx, msg, &steam_id).await;
    };

    let (width, height) = size.dimensions();
    let avatar_embed = embed(format!(
        "The avatar of SteamID `{steam_id}` is ({width}x{height}):"
    ))
    .image(size.url(&summary));
    msg.channel_id
        .send_message(&ctx.http, CreateMessage::new().embed(avatar_embed))
        .await?;

    Ok(())
}

#[command]
#[aliases("friends-list", "friend-list", "user-friends", "steam-friends")]
async fn friends(ctx: &Context, msg: &Message, mut args: Args) -> CommandResult {
    let steam_id = args.single::<String>()?;
    let api = steam_api(ctx).await;

    let loading = msg
        .channel_id
        .send_message(
            &ctx.http,
            CreateMessage::new().embed(embed(format!("Loading `{steam_id}`'s friends list"))),
        )
        .await?;

    let opened = FriendPager::open(&api, &steam_id).await;
    loading.delete(&ctx.http).await?;

    let (pager, page) = match opened {
        Ok(opened) => opened,
        Err(PagerError::InvalidPrincipal(_)) => {
            return reject_invalid_id(ctx, msg, &steam_id).await;
        }
        Err(why) => return Err(why.into()),
    };

    let message = msg
        .channel_id
        .send_message(
            &ctx.http,
            CreateMessage::new().embed(embed(page.description())),
        )
        .await?;
    message
        .react(&ctx.http, ReactionType::Unicode(PREVIOUS_PAGE_EMOJI.to_string()))
        .await?;
    message
        .react(&ctx.http, ReactionType::Unicode(NEXT_PAGE_EMOJI.to_string()))
        .await?;

    {
        let mut data = ctx.data.write().await;
        let pagers = data
            .get_mut::<Pagers>()
            .expect("pager table is inserted at startup");
        pagers.insert(message.id, Arc::new(Mutex::new(pager)));
    }

    // One-shot navigation window; activity does not renew it
    tokio::time::sleep(NAVIGATION_WINDOW).await;

    if let Err(why) = message.delete_reactions(&ctx.http).await {
        // The message may already be gone; navigation is dead either way
        debug!("failed to clear navigation reactions: {why}");
    }
    let mut data = ctx.data.write().await;
    if let Some(pagers) = data.get_mut::<Pagers>() {
        pagers.remove(&message.id);
    }

    Ok(())
}
