use std::sync::Arc;

use poise::serenity_prelude::{self as serenity, ChannelId, GuildId, UserId};

use crate::bot::data::{Context, Data};
use crate::bot::error::Error;
use crate::utils::formatting::mention_user;
use crate::utils::permissions;

/// Check a user's warning count (defaults to yourself)
#[poise::command(prefix_command, guild_only)]
pub async fn warnings(
    ctx: Context<'_>,
    #[description = "User to look up"] user: Option<serenity::User>,
) -> Result<(), Error> {
    let target = user.map(|u| u.id).unwrap_or_else(|| ctx.author().id);
    report_warnings(ctx.serenity_context(), ctx.data(), ctx.channel_id(), target).await
}

/// Reset a user's warnings to zero (admin only)
#[poise::command(prefix_command, guild_only)]
pub async fn clearwarnings(
    ctx: Context<'_>,
    #[description = "User to clear"] user: serenity::User,
) -> Result<(), Error> {
    let guild_id = ctx.guild_id().ok_or_else(|| Error::custom("Not in a guild"))?;
    clear_warnings(
        ctx.serenity_context(),
        ctx.data(),
        guild_id,
        ctx.channel_id(),
        ctx.author().id,
        user.id,
    )
    .await
}

/// Report a user's current count to the channel. Shared by the live command
/// and the backfill re-dispatch; no permission requirement.
pub async fn report_warnings(
    ctx: &serenity::Context,
    data: &Arc<Data>,
    channel_id: ChannelId,
    target: UserId,
) -> Result<(), Error> {
    let count = data.warnings.get(target);
    channel_id
        .say(ctx, format!("{} has {} warning(s).", mention_user(target), count))
        .await?;
    Ok(())
}

/// Zero a user's count and report whether there was anything to clear.
/// Requires administrator permissions.
pub async fn clear_warnings(
    ctx: &serenity::Context,
    data: &Arc<Data>,
    guild_id: GuildId,
    channel_id: ChannelId,
    invoker: UserId,
    target: UserId,
) -> Result<(), Error> {
    if !permissions::is_admin(ctx, guild_id, invoker).await {
        return Err(Error::PermissionDenied(
            "Administrator permission is required to clear warnings".into(),
        ));
    }

    let reply = if data.warnings.reset(target) {
        format!("Warnings cleared for {}", mention_user(target))
    } else {
        format!("{} has no warnings to clear.", mention_user(target))
    };
    channel_id.say(ctx, reply).await?;
    Ok(())
}
