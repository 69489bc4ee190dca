use async_trait::async_trait;
use serenity::all::{EditMessage, Reaction, ReactionType, Ready};
use serenity::prelude::*;
use tracing::{debug, info, warn};

use crate::groups::embed;
use crate::groups::steam::{NEXT_PAGE_EMOJI, PREVIOUS_PAGE_EMOJI};
use crate::type_map::{Pagers, SteamApi};

pub struct Handler;

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, _: Context, ready: Ready) {
        info!("{} is connected!", ready.user.name);
    }

    async fn reaction_add(&self, ctx: Context, reaction: Reaction) {
        // Only the two navigation glyphs mean anything
        let forward = match &reaction.emoji {
            ReactionType::Unicode(emoji) if emoji == NEXT_PAGE_EMOJI => true,
            ReactionType::Unicode(emoji) if emoji == PREVIOUS_PAGE_EMOJI => false,
            _ => return,
        };

        // The bot's own seed reactions come through here too
        if reaction.user_id == Some(ctx.cache.current_user().id) {
            return;
        }
        // Navigation is reserved for humans
        match reaction.user(&ctx.http).await {
            Ok(user) if !user.bot => {}
            _ => return,
        }

        let (api, pager) = {
            let data = ctx.data.read().await;
            let Some(pager) = data
                .get::<Pagers>()
                .and_then(|pagers| pagers.get(&reaction.message_id))
                .cloned()
            else {
                return;
            };
            let Some(api) = data.get::<SteamApi>().cloned() else {
                return;
            };
            (api, pager)
        };

        let rendered = {
            let mut pager = pager.lock().await;
            if forward {
                pager.advance(&api).await
            } else {
                pager.retreat(&api).await
            }
        };

        match rendered {
            Ok(Some(page)) => {
                let edit = EditMessage::new().embed(embed(page.description()));
                if let Err(why) = reaction
                    .channel_id
                    .edit_message(&ctx.http, reaction.message_id, edit)
                    .await
                {
                    warn!("failed to edit friend-list message: {why}");
                }
            }
            // Already at the edge; the page stays as it is
            Ok(None) => {}
            // The cursor did not move, so the same navigation can be retried
            Err(why) => warn!("failed to render friend page: {why}"),
        }

        // Put the glyph back to a single bot reaction so it stays clickable
        if let Err(why) = reaction.delete(&ctx.http).await {
            debug!("failed to remove navigation reaction: {why}");
        }
    }
}
