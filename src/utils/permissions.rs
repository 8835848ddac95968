use serenity::all::{Context, GuildId, Permissions, UserId};

/// Check if a member has administrator permissions
pub async fn is_admin(ctx: &Context, guild_id: GuildId, user_id: UserId) -> bool {
    has_any(ctx, guild_id, user_id, |p| p.administrator()).await
}

/// Check if a member can moderate (kick/ban or administrator)
pub async fn can_moderate(ctx: &Context, guild_id: GuildId, user_id: UserId) -> bool {
    has_any(ctx, guild_id, user_id, |p| {
        p.administrator() || p.kick_members() || p.ban_members()
    })
    .await
}

/// Check if a member can ban
pub async fn can_ban(ctx: &Context, guild_id: GuildId, user_id: UserId) -> bool {
    has_any(ctx, guild_id, user_id, |p| {
        p.administrator() || p.ban_members()
    })
    .await
}

async fn has_any(
    ctx: &Context,
    guild_id: GuildId,
    user_id: UserId,
    check: impl Fn(Permissions) -> bool,
) -> bool {
    if let Ok(member) = guild_id.member(ctx, user_id).await {
        return member.permissions(ctx).map(check).unwrap_or(false);
    }
    false
}
