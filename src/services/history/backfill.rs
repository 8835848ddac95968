use std::collections::HashSet;
use std::sync::Arc;

use poise::serenity_prelude::{
    self as serenity, ChannelId, ChannelType, GetMessages, GuildId, Message, MessageId, UserId,
};
use tracing::{debug, info, warn};

use crate::bot::data::Data;
use crate::bot::error::Error;
use crate::commands::dispatch;
use crate::constants::policy::{COMMAND_PREFIX, HISTORY_PAGE_LIMIT};
use crate::services::faq::responder;
use crate::services::history::guard;
use crate::services::moderation::{enforcer, scanner};

/// Walk a guild's text channels and re-apply moderation over recent history.
///
/// Channels are scanned sequentially in no particular order; a channel the
/// bot cannot read is logged and skipped without aborting the rest of the
/// walk. The sweep is best-effort and non-transactional: there is no
/// checkpoint, and a shutdown mid-walk simply leaves the remainder unscanned.
/// Returns the number of messages evaluated.
pub async fn scan_guild(
    ctx: &serenity::Context,
    data: &Arc<Data>,
    guild_id: GuildId,
    per_channel_limit: usize,
) -> Result<usize, Error> {
    let bot_id = ctx.cache.current_user().id;
    let channels = guild_id.channels(&ctx.http).await?;

    // Message ids already evaluated during this pass; dropped when it ends
    let mut processed: HashSet<MessageId> = HashSet::new();
    let mut scanned = 0usize;

    for (channel_id, channel) in channels {
        if channel.kind != ChannelType::Text {
            continue;
        }

        match scan_channel(
            ctx,
            data,
            guild_id,
            channel_id,
            per_channel_limit,
            bot_id,
            &mut processed,
        )
        .await
        {
            Ok(count) => {
                debug!("Scanned {} messages in channel #{}", count, channel.name);
                scanned += count;
            }
            Err(e) => {
                warn!(
                    "No access to channel #{} ({}) in guild {}: {:?}",
                    channel.name, channel_id, guild_id, e
                );
            }
        }
    }

    info!(
        "Finished history scan for guild {} ({} messages)",
        guild_id, scanned
    );
    Ok(scanned)
}

/// Fetch up to `per_channel_limit` recent messages, paging past the
/// platform's fetch cap with a `before` cursor, and run each through the
/// moderation pipeline.
async fn scan_channel(
    ctx: &serenity::Context,
    data: &Arc<Data>,
    guild_id: GuildId,
    channel_id: ChannelId,
    per_channel_limit: usize,
    bot_id: UserId,
    processed: &mut HashSet<MessageId>,
) -> Result<usize, Error> {
    let mut scanned = 0usize;
    let mut remaining = per_channel_limit;
    let mut cursor: Option<MessageId> = None;

    while remaining > 0 {
        let batch = remaining.min(HISTORY_PAGE_LIMIT) as u8;
        let mut request = GetMessages::new().limit(batch);
        if let Some(before) = cursor {
            request = request.before(before);
        }

        let messages = channel_id.messages(ctx, request).await?;
        if messages.is_empty() {
            break;
        }
        // Newest first; the last entry is the page cursor
        cursor = messages.last().map(|m| m.id);
        let fetched = messages.len();

        for message in &messages {
            if !should_process(processed, bot_id, message.author.id, message.id) {
                continue;
            }
            scan_message(ctx, data, guild_id, message, bot_id).await;
            scanned += 1;
        }

        if fetched < batch as usize {
            break;
        }
        remaining -= fetched;
    }

    Ok(scanned)
}

/// A message is evaluated at most once per pass, and the bot's own messages
/// are never evaluated.
fn should_process(
    processed: &mut HashSet<MessageId>,
    bot_id: UserId,
    author: UserId,
    message_id: MessageId,
) -> bool {
    author != bot_id && processed.insert(message_id)
}

/// Apply the full pipeline to one historical message: command re-dispatch and
/// mention handling behind the duplicate-response check, then the denylist
/// scan. Unlike the live path, mentions do not exempt a message from the
/// denylist scan here.
async fn scan_message(
    ctx: &serenity::Context,
    data: &Arc<Data>,
    guild_id: GuildId,
    message: &Message,
    bot_id: UserId,
) {
    if message.content.starts_with(COMMAND_PREFIX) {
        if !guard::already_responded(ctx, bot_id, message, Some(message.id)).await {
            match dispatch::dispatch_historical(ctx, data, guild_id, message).await {
                Ok(true) => debug!("Re-ran command from message {}", message.id),
                Ok(false) => {}
                Err(e) => {
                    warn!("Error re-running command from message {}: {:?}", message.id, e);
                }
            }
        }
    } else if message.mentions_user_id(bot_id) {
        if !guard::already_responded(ctx, bot_id, message, Some(message.id)).await {
            let answer = responder::respond(&message.content);
            if let Err(e) = message.reply(ctx, answer).await {
                warn!("Error responding to mention {}: {:?}", message.id, e);
            }
        }
    }

    if scanner::contains_denylisted(&message.content, &data.denylist) {
        enforcer::punish(ctx, data, guild_id, message).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_message_id_is_processed_once_per_pass() {
        let mut processed = HashSet::new();
        let bot = UserId::new(1);
        let author = UserId::new(2);
        let id = MessageId::new(1234);

        assert!(should_process(&mut processed, bot, author, id));
        assert!(!should_process(&mut processed, bot, author, id));
    }

    #[test]
    fn bot_authored_messages_are_skipped() {
        let mut processed = HashSet::new();
        let bot = UserId::new(1);

        assert!(!should_process(&mut processed, bot, bot, MessageId::new(9)));
        // And the skip does not claim the id
        assert!(processed.is_empty());
    }
}
