use std::sync::Arc;

use poise::serenity_prelude::{self as serenity, Message};
use tracing::error;

use crate::bot::data::Data;
use crate::bot::error::Error;
use crate::services::faq::responder;
use crate::services::history::guard;
use crate::services::moderation::{enforcer, scanner};

/// Live-path processing for one inbound message.
///
/// A message that mentions the bot gets a policy answer, at most once per
/// message via the duplicate-response check, and is exempt from the denylist
/// scan. Everything else in a guild goes through the denylist pipeline.
pub async fn handle_message(
    ctx: &serenity::Context,
    data: &Arc<Data>,
    msg: &Message,
) -> Result<(), Error> {
    let bot_id = ctx.cache.current_user().id;
    if msg.author.id == bot_id {
        return Ok(());
    }

    if msg.mentions_user_id(bot_id) {
        if !guard::already_responded(ctx, bot_id, msg, None).await {
            let answer = responder::respond(&msg.content);
            if let Err(e) = msg.reply(ctx, answer).await {
                error!("Failed to reply to mention {}: {:?}", msg.id, e);
            }
        }
        return Ok(());
    }

    // Moderation needs a guild to ban in; direct messages are not scanned
    let Some(guild_id) = msg.guild_id else {
        return Ok(());
    };

    if scanner::contains_denylisted(&msg.content, &data.denylist) {
        enforcer::punish(ctx, data, guild_id, msg).await;
    }

    Ok(())
}
