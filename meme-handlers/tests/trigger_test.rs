//! Unit tests for the `trigger` module (is_bot_mentioned, triggered_photo).
//! BDD style: each test documents scenario and expected outcome.

use chrono::Utc;
use meme_handlers::{is_bot_mentioned, triggered_photo};
use memebot_core::{Chat, Message, MessageDirection, User};

fn make_message(
    content: &str,
    reply_to_message_id: Option<String>,
    reply_to_photo_file_id: Option<String>,
) -> Message {
    Message {
        id: "msg_1".to_string(),
        user: User {
            id: 123,
            username: Some("user".to_string()),
            first_name: Some("User".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: 456,
            chat_type: "group".to_string(),
        },
        content: content.to_string(),
        message_type: "text".to_string(),
        direction: MessageDirection::Incoming,
        created_at: Utc::now(),
        photo_file_id: None,
        reply_to_message_id,
        reply_to_photo_file_id,
    }
}

// --- is_bot_mentioned ---

/// **Test: is_bot_mentioned returns true when text contains @bot (any position).**
#[test]
fn is_bot_mentioned_contains_mention() {
    assert!(is_bot_mentioned("Hey @meme_bot what's this?", "meme_bot"));
    assert!(is_bot_mentioned("@meme_bot", "meme_bot"));
    assert!(is_bot_mentioned("prefix @meme_bot suffix", "meme_bot"));
}

/// **Test: is_bot_mentioned returns false for no @, @other_bot, or plain username without @.**
#[test]
fn is_bot_mentioned_no_mention() {
    assert!(!is_bot_mentioned("Hello world", "meme_bot"));
    assert!(!is_bot_mentioned("@other_bot", "meme_bot"));
    assert!(!is_bot_mentioned("meme_bot", "meme_bot"));
}

// --- triggered_photo ---

/// **Test: Mention + reply + parent photo returns the (parent id, file id) pair.**
#[test]
fn triggered_photo_all_conditions_met() {
    let msg = make_message(
        "@meme_bot explain",
        Some("parent_42".to_string()),
        Some("photo_file_9".to_string()),
    );
    assert_eq!(
        triggered_photo(&msg, Some("meme_bot")),
        Some(("parent_42", "photo_file_9"))
    );
}

/// **Test: A mention with no parent reply returns None regardless of the text.**
#[test]
fn triggered_photo_mention_without_reply_is_none() {
    let msg = make_message("@meme_bot explain", None, None);
    assert_eq!(triggered_photo(&msg, Some("meme_bot")), None);
}

/// **Test: A mention replying to a message without a photo returns None.**
#[test]
fn triggered_photo_parent_without_photo_is_none() {
    let msg = make_message("@meme_bot explain", Some("parent_42".to_string()), None);
    assert_eq!(triggered_photo(&msg, Some("meme_bot")), None);
}

/// **Test: A reply to a photo without a mention returns None.**
#[test]
fn triggered_photo_reply_without_mention_is_none() {
    let msg = make_message(
        "lol nice one",
        Some("parent_42".to_string()),
        Some("photo_file_9".to_string()),
    );
    assert_eq!(triggered_photo(&msg, Some("meme_bot")), None);
}

/// **Test: A mention of a different bot returns None.**
#[test]
fn triggered_photo_other_bot_mention_is_none() {
    let msg = make_message(
        "@other_bot explain",
        Some("parent_42".to_string()),
        Some("photo_file_9".to_string()),
    );
    assert_eq!(triggered_photo(&msg, Some("meme_bot")), None);
}

/// **Test: When the bot username is not known yet, nothing triggers.**
#[test]
fn triggered_photo_unknown_username_is_none() {
    let msg = make_message(
        "@meme_bot explain",
        Some("parent_42".to_string()),
        Some("photo_file_9".to_string()),
    );
    assert_eq!(triggered_photo(&msg, None), None);
}
