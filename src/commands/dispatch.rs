use std::sync::Arc;

use poise::serenity_prelude::{self as serenity, GuildId, Message, UserId};

use crate::bot::data::Data;
use crate::bot::error::Error;
use crate::commands::{moderation, warnings};
use crate::constants::policy::COMMAND_PREFIX;

/// One parsed prefix invocation: command name, optional user token, optional
/// free-form remainder.
struct Invocation<'a> {
    name: &'a str,
    user_arg: Option<&'a str>,
    remainder: Option<&'a str>,
}

/// Re-run a command found in channel history against the shared command
/// cores. Historical messages carry no framework context, so arguments are
/// resolved from the raw text; permission checks apply exactly as on the
/// live path.
///
/// Returns Ok(true) when the message was a recognized command, Ok(false)
/// when it was not one.
pub async fn dispatch_historical(
    ctx: &serenity::Context,
    data: &Arc<Data>,
    guild_id: GuildId,
    msg: &Message,
) -> Result<bool, Error> {
    let Some(invocation) = parse_invocation(&msg.content) else {
        return Ok(false);
    };

    let author = msg.author.id;
    let channel_id = msg.channel_id;

    match invocation.name {
        "warnings" => {
            let target = match invocation.user_arg {
                Some(token) => resolve_user(token)?,
                None => author,
            };
            warnings::report_warnings(ctx, data, channel_id, target).await?;
        }
        "clearwarnings" => {
            let target = resolve_required_user(invocation.user_arg)?;
            warnings::clear_warnings(ctx, data, guild_id, channel_id, author, target).await?;
        }
        "warn" => {
            let target = resolve_required_user(invocation.user_arg)?;
            moderation::warn_user(
                ctx,
                guild_id,
                channel_id,
                author,
                target,
                invocation.remainder,
            )
            .await?;
        }
        "ban" => {
            let target = resolve_required_user(invocation.user_arg)?;
            moderation::ban_user(
                ctx,
                guild_id,
                channel_id,
                author,
                target,
                invocation.remainder,
            )
            .await?;
        }
        _ => return Ok(false),
    }

    Ok(true)
}

fn parse_invocation(content: &str) -> Option<Invocation<'_>> {
    let rest = content.strip_prefix(COMMAND_PREFIX)?.trim_start();
    let (name, tail) = split_token(rest);
    if name.is_empty() {
        return None;
    }

    let (user_arg, remainder) = split_token(tail);
    Some(Invocation {
        name,
        user_arg: (!user_arg.is_empty()).then_some(user_arg),
        remainder: (!remainder.is_empty()).then_some(remainder),
    })
}

fn split_token(input: &str) -> (&str, &str) {
    match input.split_once(char::is_whitespace) {
        Some((head, tail)) => (head, tail.trim_start()),
        None => (input, ""),
    }
}

/// Accepts `<@123>`, `<@!123>`, or a bare id
fn parse_user_token(token: &str) -> Option<UserId> {
    let raw = token
        .strip_prefix("<@")
        .and_then(|s| s.strip_suffix('>'))
        .map(|s| s.strip_prefix('!').unwrap_or(s))
        .unwrap_or(token);
    raw.parse::<u64>()
        .ok()
        .filter(|id| *id != 0)
        .map(UserId::new)
}

fn resolve_user(token: &str) -> Result<UserId, Error> {
    parse_user_token(token)
        .ok_or_else(|| Error::custom(format!("Could not resolve user from '{}'", token)))
}

fn resolve_required_user(arg: Option<&str>) -> Result<UserId, Error> {
    let token = arg.ok_or_else(|| Error::custom("Missing required user argument"))?;
    resolve_user(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_bare_command() {
        let inv = parse_invocation("!warnings").unwrap();
        assert_eq!(inv.name, "warnings");
        assert!(inv.user_arg.is_none());
        assert!(inv.remainder.is_none());
    }

    #[test]
    fn parses_user_and_remainder() {
        let inv = parse_invocation("!warn <@123> spamming the channel").unwrap();
        assert_eq!(inv.name, "warn");
        assert_eq!(inv.user_arg, Some("<@123>"));
        assert_eq!(inv.remainder, Some("spamming the channel"));
    }

    #[test]
    fn collapses_extra_whitespace_between_tokens() {
        let inv = parse_invocation("!ban   <@123>   being rude").unwrap();
        assert_eq!(inv.user_arg, Some("<@123>"));
        assert_eq!(inv.remainder, Some("being rude"));
    }

    #[test]
    fn non_commands_do_not_parse() {
        assert!(parse_invocation("hello there").is_none());
        assert!(parse_invocation("!").is_none());
    }

    #[test]
    fn resolves_mention_and_raw_id_forms() {
        assert_eq!(parse_user_token("<@123>"), Some(UserId::new(123)));
        assert_eq!(parse_user_token("<@!123>"), Some(UserId::new(123)));
        assert_eq!(parse_user_token("123"), Some(UserId::new(123)));
    }

    #[test]
    fn rejects_unresolvable_tokens() {
        assert_eq!(parse_user_token("someone"), None);
        assert_eq!(parse_user_token("<@abc>"), None);
        assert_eq!(parse_user_token("<@0>"), None);
    }

    #[test]
    fn missing_required_user_is_an_error() {
        assert!(resolve_required_user(None).is_err());
        assert!(resolve_required_user(Some("<@123>")).is_ok());
    }
}
