use poise::serenity_prelude::{self as serenity, GetMessages, Message, MessageId, UserId};
use tracing::warn;

use crate::constants::policy::RESPONSE_SCAN_WINDOW;
use crate::utils::formatting::mention_user;

/// The fields of one history entry that matter for response detection
struct HistoryEntry<'a> {
    author: u64,
    content: &'a str,
    replies_to: Option<u64>,
    sent_at: i64,
}

impl<'a> HistoryEntry<'a> {
    fn from_message(message: &'a Message) -> Self {
        Self {
            author: message.author.id.get(),
            content: &message.content,
            replies_to: message
                .message_reference
                .as_ref()
                .and_then(|r| r.message_id)
                .map(|id| id.get()),
            sent_at: message.timestamp.unix_timestamp(),
        }
    }
}

/// Whether the window already holds a response from the bot to the target
/// message: either a direct reply referencing its id, or a later bot message
/// that contains the target author's mention.
fn window_contains_response(
    bot_id: u64,
    target_id: u64,
    author_mention: &str,
    target_sent_at: i64,
    window: &[HistoryEntry<'_>],
) -> bool {
    window.iter().any(|entry| {
        entry.author == bot_id
            && (entry.replies_to == Some(target_id)
                || (entry.content.contains(author_mention) && entry.sent_at > target_sent_at))
    })
}

/// Check recent channel history for an existing bot response to `message`.
///
/// The platform offers no idempotency key for "already handled", so this
/// walks a bounded window instead: the most recent entries on the live path,
/// or the entries following the target when `after` is set (backfill path).
/// A failed history fetch is logged and counts as "not yet responded", which
/// risks a duplicate response rather than silence.
pub async fn already_responded(
    ctx: &serenity::Context,
    bot_id: UserId,
    message: &Message,
    after: Option<MessageId>,
) -> bool {
    let mut request = GetMessages::new().limit(RESPONSE_SCAN_WINDOW);
    if let Some(after_id) = after {
        request = request.after(after_id);
    }

    let history = match message.channel_id.messages(ctx, request).await {
        Ok(history) => history,
        Err(e) => {
            warn!(
                "History lookup failed for channel {}: {:?}",
                message.channel_id, e
            );
            return false;
        }
    };

    let author_mention = mention_user(message.author.id);
    let window: Vec<HistoryEntry<'_>> = history.iter().map(HistoryEntry::from_message).collect();

    window_contains_response(
        bot_id.get(),
        message.id.get(),
        &author_mention,
        message.timestamp.unix_timestamp(),
        &window,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOT: u64 = 10;
    const TARGET_ID: u64 = 500;
    const TARGET_SENT_AT: i64 = 1_000;
    const MENTION: &str = "<@77>";

    fn entry(
        author: u64,
        content: &'static str,
        replies_to: Option<u64>,
        sent_at: i64,
    ) -> HistoryEntry<'static> {
        HistoryEntry {
            author,
            content,
            replies_to,
            sent_at,
        }
    }

    fn check(window: &[HistoryEntry<'_>]) -> bool {
        window_contains_response(BOT, TARGET_ID, MENTION, TARGET_SENT_AT, window)
    }

    #[test]
    fn empty_window_means_not_responded() {
        assert!(!check(&[]));
    }

    #[test]
    fn direct_reply_reference_is_a_response() {
        let window = [entry(BOT, "here you go", Some(TARGET_ID), 900)];
        assert!(check(&window));
    }

    #[test]
    fn later_bot_message_mentioning_the_author_is_a_response() {
        let window = [entry(BOT, "<@77> has 2 warning(s).", None, 1_100)];
        assert!(check(&window));
    }

    #[test]
    fn earlier_mention_is_not_a_response() {
        // A bot message that mentions the author but predates the target must
        // have been about something else
        let window = [entry(BOT, "<@77> has 2 warning(s).", None, 900)];
        assert!(!check(&window));
    }

    #[test]
    fn non_bot_entries_are_ignored() {
        let window = [
            entry(55, "<@77> stop it", None, 1_200),
            entry(55, "whatever", Some(TARGET_ID), 1_300),
        ];
        assert!(!check(&window));
    }

    #[test]
    fn reply_to_a_different_message_is_ignored() {
        let window = [entry(BOT, "answering someone else", Some(501), 1_200)];
        assert!(!check(&window));
    }
}
