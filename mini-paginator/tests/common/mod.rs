//! Scripted in-memory chat host for session tests.

#![allow(dead_code)]

use std::{
    collections::{HashSet, VecDeque},
    sync::{
        Mutex,
        atomic::{AtomicU64, Ordering},
    },
    time::Duration,
};

use async_trait::async_trait;
use mini_paginator::{
    ChatHost, ControlEmoji, Invocation, SentMessage,
    event::{MessageFilter, ReactionEvent, ReactionFilter, TextEvent},
};
use twilight_model::{
    channel::message::{EmojiReactionType, embed::Embed},
    id::{
        Id,
        marker::{ChannelMarker, UserMarker},
    },
};
use twilight_util::builder::embed::EmbedBuilder;

pub const BOT: u64 = 900;
pub const AUTHOR: u64 = 7;
pub const CHANNEL: u64 = 100;
pub const GUILD: u64 = 1;

/// Every platform call a session made, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    SendEmbed { channel: u64, footer: Option<String> },
    SendText { channel: u64, content: String },
    EditEmbed { message: u64, footer: Option<String> },
    EditText { message: u64, content: String },
    Delete { message: u64 },
    AddReaction { message: u64, emoji: String },
    RemoveReaction { message: u64, emoji: String, user: u64 },
    ClearReactions { message: u64 },
}

/// A reaction the host will deliver; `message: None` targets whichever message is awaited.
#[derive(Debug, Clone)]
pub struct ScriptedReaction {
    pub message: Option<u64>,
    pub user: u64,
    pub emoji: String,
}

#[derive(Debug)]
pub struct MockHost {
    calls: Mutex<Vec<Call>>,
    reactions: Mutex<VecDeque<ScriptedReaction>>,
    messages: Mutex<VecDeque<TextEvent>>,
    failing: Mutex<HashSet<&'static str>>,
    reaction_delay: Mutex<Option<Duration>>,
    next_id: AtomicU64,
}

impl Default for MockHost {
    fn default() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            reactions: Mutex::new(VecDeque::new()),
            messages: Mutex::new(VecDeque::new()),
            failing: Mutex::new(HashSet::new()),
            reaction_delay: Mutex::new(None),
            next_id: AtomicU64::new(1),
        }
    }
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a reaction from `user` on the awaited message.
    pub fn react(&self, user: u64, emoji: &str) -> &Self {
        self.react_on(None, user, emoji)
    }

    pub fn react_on(&self, message: Option<u64>, user: u64, emoji: &str) -> &Self {
        self.reactions.lock().unwrap().push_back(ScriptedReaction {
            message,
            user,
            emoji: emoji.to_owned(),
        });
        self
    }

    /// Queue a text message from `author` in `channel`.
    pub fn say(&self, channel: u64, author: u64, content: &str) -> &Self {
        let mut messages = self.messages.lock().unwrap();
        let id = 10_000 + messages.len() as u64;
        messages.push_back(TextEvent {
            channel_id: Id::new(channel),
            message_id: Id::new(id),
            author_id: Id::new(author),
            content: content.to_owned(),
        });
        drop(messages);
        self
    }

    /// Make every call of the named operation fail.
    pub fn fail(&self, operation: &'static str) -> &Self {
        self.failing.lock().unwrap().insert(operation);
        self
    }

    /// Make each `add_reaction` take `delay`, like a rate-limited client.
    pub fn slow_reactions(&self, delay: Duration) -> &Self {
        *self.reaction_delay.lock().unwrap() = Some(delay);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Footers of every rendered page, first send included.
    pub fn rendered_footers(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::SendEmbed { footer, .. } | Call::EditEmbed { footer, .. } => {
                    Some(footer.unwrap_or_default())
                }
                _ => None,
            })
            .collect()
    }

    fn record(&self, operation: &'static str, call: Call) -> anyhow::Result<()> {
        self.calls.lock().unwrap().push(call);
        if self.failing.lock().unwrap().contains(operation) {
            anyhow::bail!("{operation} rejected: Missing Permissions");
        }
        Ok(())
    }

    fn sent(&self, channel_id: Id<ChannelMarker>) -> SentMessage {
        SentMessage {
            channel_id,
            message_id: Id::new(self.next_id.fetch_add(1, Ordering::SeqCst)),
        }
    }
}

fn footer_of(embed: &Embed) -> Option<String> {
    embed.footer.as_ref().map(|footer| footer.text.clone())
}

fn emoji_name(emoji: &ControlEmoji) -> String {
    emoji.to_string()
}

#[async_trait]
impl ChatHost for MockHost {
    fn self_user_id(&self) -> Option<Id<UserMarker>> {
        Some(Id::new(BOT))
    }

    async fn send_embed(
        &self,
        channel_id: Id<ChannelMarker>,
        embed: &Embed,
    ) -> anyhow::Result<SentMessage> {
        self.record(
            "send_embed",
            Call::SendEmbed {
                channel: channel_id.get(),
                footer: footer_of(embed),
            },
        )?;
        Ok(self.sent(channel_id))
    }

    async fn send_text(
        &self,
        channel_id: Id<ChannelMarker>,
        content: &str,
    ) -> anyhow::Result<SentMessage> {
        self.record(
            "send_text",
            Call::SendText {
                channel: channel_id.get(),
                content: content.to_owned(),
            },
        )?;
        Ok(self.sent(channel_id))
    }

    async fn edit_embed(&self, message: SentMessage, embed: &Embed) -> anyhow::Result<()> {
        self.record(
            "edit_embed",
            Call::EditEmbed {
                message: message.message_id.get(),
                footer: footer_of(embed),
            },
        )
    }

    async fn edit_text(&self, message: SentMessage, content: &str) -> anyhow::Result<()> {
        self.record(
            "edit_text",
            Call::EditText {
                message: message.message_id.get(),
                content: content.to_owned(),
            },
        )
    }

    async fn delete_message(&self, message: SentMessage) -> anyhow::Result<()> {
        self.record(
            "delete_message",
            Call::Delete {
                message: message.message_id.get(),
            },
        )
    }

    async fn add_reaction(
        &self,
        message: SentMessage,
        emoji: &ControlEmoji,
    ) -> anyhow::Result<()> {
        let delay = *self.reaction_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        self.record(
            "add_reaction",
            Call::AddReaction {
                message: message.message_id.get(),
                emoji: emoji_name(emoji),
            },
        )
    }

    async fn remove_reaction(
        &self,
        message: SentMessage,
        emoji: &ControlEmoji,
        user_id: Id<UserMarker>,
    ) -> anyhow::Result<()> {
        self.record(
            "remove_reaction",
            Call::RemoveReaction {
                message: message.message_id.get(),
                emoji: emoji_name(emoji),
                user: user_id.get(),
            },
        )
    }

    async fn clear_reactions(&self, message: SentMessage) -> anyhow::Result<()> {
        self.record(
            "clear_reactions",
            Call::ClearReactions {
                message: message.message_id.get(),
            },
        )
    }

    async fn next_reaction(&self, filter: ReactionFilter) -> anyhow::Result<ReactionEvent> {
        loop {
            let next = self.reactions.lock().unwrap().pop_front();
            let Some(scripted) = next else {
                return std::future::pending().await;
            };

            let event = ReactionEvent {
                channel_id: Id::new(CHANNEL),
                message_id: scripted
                    .message
                    .map_or(filter.message_id, Id::new),
                user_id: Id::new(scripted.user),
                emoji: EmojiReactionType::Unicode {
                    name: scripted.emoji,
                },
            };

            if filter.matches(&event) {
                return Ok(event);
            }
        }
    }

    async fn next_message(&self, filter: MessageFilter) -> anyhow::Result<TextEvent> {
        loop {
            let next = self.messages.lock().unwrap().pop_front();
            let Some(event) = next else {
                return std::future::pending().await;
            };

            if filter.matches(&event) {
                return Ok(event);
            }
        }
    }
}

pub fn invocation() -> Invocation {
    Invocation {
        author_id: Id::new(AUTHOR),
        channel_id: Id::new(CHANNEL),
        guild_id: Some(Id::new(GUILD)),
    }
}

/// An invocation from a direct message channel.
pub fn private_invocation() -> Invocation {
    Invocation {
        guild_id: None,
        ..invocation()
    }
}

pub fn pages(count: usize) -> Vec<Embed> {
    (1..=count)
        .map(|n| EmbedBuilder::new().title(format!("Page {n}")).build())
        .collect()
}
