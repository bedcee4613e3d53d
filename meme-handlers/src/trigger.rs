//! Pure functions deciding when a message triggers a meme explanation.
//!
//! Used by [`crate::MemeExplainHandler`] to resolve the photo to forward. No state is kept
//! between messages; everything is a function of the current message snapshot.

use memebot_core::Message;

/// Returns true if `text` contains a @mention of the given bot username.
#[inline]
pub fn is_bot_mentioned(text: &str, bot_username: &str) -> bool {
    text.contains(&format!("@{}", bot_username))
}

/// Resolves the (parent message id, photo file id) pair if the message triggers an explanation.
///
/// Returns `Some` iff all of:
/// - the text @mentions `bot_username`,
/// - the message is a reply to another message,
/// - the replied-to message carries a photo.
///
/// A mention without a reply, or a reply to a photo-less message, yields `None` — deliberately a
/// no-op, not an error. When the bot's own username is not known yet, nothing triggers.
pub fn triggered_photo<'a>(
    message: &'a Message,
    bot_username: Option<&str>,
) -> Option<(&'a str, &'a str)> {
    let username = bot_username?;
    if !is_bot_mentioned(&message.content, username) {
        return None;
    }
    let parent_id = message.reply_to_message_id.as_deref()?;
    let file_id = message.reply_to_photo_file_id.as_deref()?;
    Some((parent_id, file_id))
}
