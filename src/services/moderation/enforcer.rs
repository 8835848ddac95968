use std::sync::Arc;

use poise::serenity_prelude::{self as serenity, GuildId, Message};
use tracing::{debug, info, warn};

use crate::bot::data::Data;
use crate::constants::policy::{BAN_REASON, WARNING_THRESHOLD};
use crate::services::moderation::escalation::{self, Verdict};
use crate::utils::formatting::{mention_user, truncate};

/// Execute the moderation pipeline for a message that matched the denylist:
/// delete it, bump the author's count, then warn or ban per the verdict.
///
/// Every platform failure is logged and processing moves on; nothing here may
/// take down the event loop. A failed delete aborts before the count is
/// incremented so a message the bot could not act on is not held against the
/// author.
pub async fn punish(ctx: &serenity::Context, data: &Arc<Data>, guild_id: GuildId, msg: &Message) {
    if let Err(e) = msg.delete(ctx).await {
        warn!(
            "Could not delete message {} in channel {}: {:?}",
            msg.id, msg.channel_id, e
        );
        return;
    }
    debug!(
        "Deleted denylisted message {} ({})",
        msg.id,
        truncate(&msg.content, 64)
    );

    let count = data.warnings.increment(msg.author.id);

    match escalation::evaluate(count) {
        Verdict::Warn(n) => {
            let notice = format!(
                "{}, please watch your language! Warning {}/{}",
                mention_user(msg.author.id),
                n,
                WARNING_THRESHOLD
            );
            if let Err(e) = msg.channel_id.say(ctx, notice).await {
                warn!(
                    "Failed to send warning notice in channel {}: {:?}",
                    msg.channel_id, e
                );
            }
        }
        Verdict::Ban => {
            match guild_id
                .ban_with_reason(ctx, msg.author.id, 0, BAN_REASON)
                .await
            {
                Ok(()) => {
                    info!(
                        "Banned user {} after {} warnings in guild {}",
                        msg.author.id, count, guild_id
                    );
                    let notice = format!(
                        "{} has been banned for exceeding {} warnings!",
                        mention_user(msg.author.id),
                        WARNING_THRESHOLD
                    );
                    if let Err(e) = msg.channel_id.say(ctx, notice).await {
                        warn!(
                            "Failed to send ban notice in channel {}: {:?}",
                            msg.channel_id, e
                        );
                    }
                }
                Err(e) => {
                    warn!(
                        "Cannot ban user {} in guild {}: {:?}",
                        msg.author.id, guild_id, e
                    );
                }
            }
        }
    }
}
