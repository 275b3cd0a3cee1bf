//! The seam between sessions and the chat platform.

mod twilight;

use std::future::Future;

use async_trait::async_trait;
use tracing::warn;
use twilight_model::{
    channel::message::embed::Embed,
    id::{
        Id,
        marker::{ChannelMarker, MessageMarker, UserMarker},
    },
};

use crate::{
    controls::ControlEmoji,
    event::{MessageFilter, ReactionEvent, ReactionFilter, TextEvent},
};

pub use twilight::TwilightHost;

/// Handle to a message a session has sent and now drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentMessage {
    pub channel_id: Id<ChannelMarker>,
    pub message_id: Id<MessageMarker>,
}

/// Operations a session needs from the chat platform.
///
/// `next_reaction` and `next_message` resolve with the first event the filter
/// accepts and never time out on their own; callers race them against a timer.
#[async_trait]
pub trait ChatHost: Send + Sync {
    /// The bot's own user, whose reactions and messages are never treated as input.
    fn self_user_id(&self) -> Option<Id<UserMarker>>;

    async fn send_embed(
        &self,
        channel_id: Id<ChannelMarker>,
        embed: &Embed,
    ) -> anyhow::Result<SentMessage>;

    async fn send_text(
        &self,
        channel_id: Id<ChannelMarker>,
        content: &str,
    ) -> anyhow::Result<SentMessage>;

    async fn edit_embed(&self, message: SentMessage, embed: &Embed) -> anyhow::Result<()>;

    /// Replace the message content and drop its embeds.
    async fn edit_text(&self, message: SentMessage, content: &str) -> anyhow::Result<()>;

    async fn delete_message(&self, message: SentMessage) -> anyhow::Result<()>;

    async fn add_reaction(
        &self,
        message: SentMessage,
        emoji: &ControlEmoji,
    ) -> anyhow::Result<()>;

    async fn remove_reaction(
        &self,
        message: SentMessage,
        emoji: &ControlEmoji,
        user_id: Id<UserMarker>,
    ) -> anyhow::Result<()>;

    async fn clear_reactions(&self, message: SentMessage) -> anyhow::Result<()>;

    async fn next_reaction(&self, filter: ReactionFilter) -> anyhow::Result<ReactionEvent>;

    async fn next_message(&self, filter: MessageFilter) -> anyhow::Result<TextEvent>;
}

/// Run a cosmetic cleanup call, logging instead of returning its failure.
pub async fn best_effort<F>(action: &'static str, call: F)
where
    F: Future<Output = anyhow::Result<()>>,
{
    if let Err(source) = call.await {
        warn!(?source, action, "best-effort cleanup failed");
    }
}
