//! [`ChatHost`] backed by the twilight HTTP client and standby.

use std::sync::Arc;

use async_trait::async_trait;
use twilight_http::Client;
use twilight_model::{
    channel::message::embed::Embed,
    gateway::payload::incoming::{MessageCreate, ReactionAdd},
    id::{
        Id,
        marker::{ChannelMarker, UserMarker},
    },
};
use twilight_standby::Standby;

use super::{ChatHost, SentMessage};
use crate::{
    controls::ControlEmoji,
    event::{MessageFilter, ReactionEvent, ReactionFilter, TextEvent},
};

/// Talks to Discord over REST and receives events through a shared [`Standby`].
///
/// The gateway loop must pass every event to [`Standby::process`], otherwise
/// the waiters never resolve.
#[derive(Clone, Debug)]
pub struct TwilightHost {
    http: Arc<Client>,
    standby: Arc<Standby>,
    bot_user_id: Option<Id<UserMarker>>,
}

impl TwilightHost {
    pub fn new(
        http: Arc<Client>,
        standby: Arc<Standby>,
        bot_user_id: Option<Id<UserMarker>>,
    ) -> Self {
        Self {
            http,
            standby,
            bot_user_id,
        }
    }
}

#[async_trait]
impl ChatHost for TwilightHost {
    fn self_user_id(&self) -> Option<Id<UserMarker>> {
        self.bot_user_id
    }

    async fn send_embed(
        &self,
        channel_id: Id<ChannelMarker>,
        embed: &Embed,
    ) -> anyhow::Result<SentMessage> {
        let message = self
            .http
            .create_message(channel_id)
            .embeds(std::slice::from_ref(embed))
            .await?
            .model()
            .await?;

        Ok(SentMessage {
            channel_id: message.channel_id,
            message_id: message.id,
        })
    }

    async fn send_text(
        &self,
        channel_id: Id<ChannelMarker>,
        content: &str,
    ) -> anyhow::Result<SentMessage> {
        let message = self
            .http
            .create_message(channel_id)
            .content(content)
            .await?
            .model()
            .await?;

        Ok(SentMessage {
            channel_id: message.channel_id,
            message_id: message.id,
        })
    }

    async fn edit_embed(&self, message: SentMessage, embed: &Embed) -> anyhow::Result<()> {
        self.http
            .update_message(message.channel_id, message.message_id)
            .embeds(Some(std::slice::from_ref(embed)))
            .await?;

        Ok(())
    }

    async fn edit_text(&self, message: SentMessage, content: &str) -> anyhow::Result<()> {
        let no_embeds: [Embed; 0] = [];
        self.http
            .update_message(message.channel_id, message.message_id)
            .content(Some(content))
            .embeds(Some(&no_embeds))
            .await?;

        Ok(())
    }

    async fn delete_message(&self, message: SentMessage) -> anyhow::Result<()> {
        self.http
            .delete_message(message.channel_id, message.message_id)
            .await?;

        Ok(())
    }

    async fn add_reaction(
        &self,
        message: SentMessage,
        emoji: &ControlEmoji,
    ) -> anyhow::Result<()> {
        self.http
            .create_reaction(message.channel_id, message.message_id, &emoji.as_request())
            .await?;

        Ok(())
    }

    async fn remove_reaction(
        &self,
        message: SentMessage,
        emoji: &ControlEmoji,
        user_id: Id<UserMarker>,
    ) -> anyhow::Result<()> {
        self.http
            .delete_reaction(
                message.channel_id,
                message.message_id,
                &emoji.as_request(),
                user_id,
            )
            .await?;

        Ok(())
    }

    async fn clear_reactions(&self, message: SentMessage) -> anyhow::Result<()> {
        self.http
            .delete_all_reactions(message.channel_id, message.message_id)
            .await?;

        Ok(())
    }

    async fn next_reaction(&self, filter: ReactionFilter) -> anyhow::Result<ReactionEvent> {
        let message_id = filter.message_id;
        let event = self
            .standby
            .wait_for_reaction(message_id, move |event: &ReactionAdd| {
                filter.matches(&ReactionEvent::from(event))
            })
            .await
            .map_err(|_| anyhow::anyhow!("reaction waiter for message {message_id} was dropped"))?;

        Ok(ReactionEvent::from(&event))
    }

    async fn next_message(&self, filter: MessageFilter) -> anyhow::Result<TextEvent> {
        let channel_id = filter.channel_id;
        let event = self
            .standby
            .wait_for_message(channel_id, move |event: &MessageCreate| {
                filter.matches(&TextEvent::from(event))
            })
            .await
            .map_err(|_| anyhow::anyhow!("message waiter for channel {channel_id} was dropped"))?;

        Ok(TextEvent::from(&event))
    }
}
