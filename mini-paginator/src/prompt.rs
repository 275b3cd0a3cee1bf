//! Numeric page-number prompt used by the jump control.

use std::time::Duration;

use twilight_model::id::{Id, marker::ChannelMarker};

use crate::{config::AuthorizedUsers, event::MessageFilter, host::ChatHost};

/// Wait for a page number typed into `channel_id` and convert it to a 0-based index.
///
/// Returns `Ok(None)` on timeout or when the reply is not a plain page number.
/// The index is not range-checked.
pub(crate) async fn read_page_index<H>(
    host: &H,
    channel_id: Id<ChannelMarker>,
    users: &AuthorizedUsers,
    timeout: Duration,
) -> anyhow::Result<Option<usize>>
where
    H: ChatHost + ?Sized,
{
    let filter = MessageFilter {
        channel_id,
        users: users.clone(),
        ignored_user: host.self_user_id(),
    };

    match tokio::time::timeout(timeout, host.next_message(filter)).await {
        Ok(reply) => Ok(parse_page_index(&reply?.content)),
        Err(_elapsed) => Ok(None),
    }
}

/// Parse a 1-based page number made only of ASCII digits into a 0-based index.
pub fn parse_page_index(content: &str) -> Option<usize> {
    if content.is_empty() || !content.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }

    content.parse::<usize>().ok()?.checked_sub(1)
}
