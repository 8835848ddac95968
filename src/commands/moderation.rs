use poise::serenity_prelude::{self as serenity, ChannelId, GuildId, UserId};
use tracing::info;

use crate::bot::data::Context;
use crate::bot::error::Error;
use crate::utils::formatting::mention_user;
use crate::utils::permissions;

/// Post a manual warning notice (moderators only). Does not touch the
/// automatic warning count.
#[poise::command(prefix_command, guild_only)]
pub async fn warn(
    ctx: Context<'_>,
    #[description = "User to warn"] user: serenity::User,
    #[description = "Reason"]
    #[rest]
    reason: Option<String>,
) -> Result<(), Error> {
    let guild_id = ctx.guild_id().ok_or_else(|| Error::custom("Not in a guild"))?;
    warn_user(
        ctx.serenity_context(),
        guild_id,
        ctx.channel_id(),
        ctx.author().id,
        user.id,
        reason.as_deref(),
    )
    .await
}

/// Immediately ban a user (requires ban permissions). Does not consult the
/// warning count.
#[poise::command(prefix_command, guild_only)]
pub async fn ban(
    ctx: Context<'_>,
    #[description = "User to ban"] user: serenity::User,
    #[description = "Reason"]
    #[rest]
    reason: Option<String>,
) -> Result<(), Error> {
    let guild_id = ctx.guild_id().ok_or_else(|| Error::custom("Not in a guild"))?;
    ban_user(
        ctx.serenity_context(),
        guild_id,
        ctx.channel_id(),
        ctx.author().id,
        user.id,
        reason.as_deref(),
    )
    .await
}

pub async fn warn_user(
    ctx: &serenity::Context,
    guild_id: GuildId,
    channel_id: ChannelId,
    invoker: UserId,
    target: UserId,
    reason: Option<&str>,
) -> Result<(), Error> {
    if !permissions::can_moderate(ctx, guild_id, invoker).await {
        return Err(Error::PermissionDenied(
            "Moderation permissions are required to warn users".into(),
        ));
    }

    channel_id
        .say(
            ctx,
            format!(
                "{} has been warned by {}!\nReason: {}",
                mention_user(target),
                mention_user(invoker),
                reason.unwrap_or("No reason provided")
            ),
        )
        .await?;
    Ok(())
}

pub async fn ban_user(
    ctx: &serenity::Context,
    guild_id: GuildId,
    channel_id: ChannelId,
    invoker: UserId,
    target: UserId,
    reason: Option<&str>,
) -> Result<(), Error> {
    if !permissions::can_ban(ctx, guild_id, invoker).await {
        return Err(Error::PermissionDenied(
            "Ban permissions are required to ban users".into(),
        ));
    }

    guild_id
        .ban_with_reason(ctx, target, 0, reason.unwrap_or("No reason provided"))
        .await?;

    info!(
        "User {} banned user {} in guild {} (reason: {:?})",
        invoker, target, guild_id, reason
    );

    channel_id
        .say(
            ctx,
            format!(
                "{} has been banned by {}!",
                mention_user(target),
                mention_user(invoker)
            ),
        )
        .await?;
    Ok(())
}
