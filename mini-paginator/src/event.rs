//! Host events a session listens for, and the filters that select them.

use twilight_model::{
    channel::message::EmojiReactionType,
    gateway::payload::incoming::{MessageCreate, ReactionAdd},
    id::{
        Id,
        marker::{ChannelMarker, MessageMarker, UserMarker},
    },
};

use crate::{config::AuthorizedUsers, controls::ControlEmoji};

/// A reaction added to some message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionEvent {
    pub channel_id: Id<ChannelMarker>,
    pub message_id: Id<MessageMarker>,
    pub user_id: Id<UserMarker>,
    pub emoji: EmojiReactionType,
}

impl From<&ReactionAdd> for ReactionEvent {
    fn from(event: &ReactionAdd) -> Self {
        Self {
            channel_id: event.channel_id,
            message_id: event.message_id,
            user_id: event.user_id,
            emoji: event.emoji.clone(),
        }
    }
}

/// A plain message sent to a channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEvent {
    pub channel_id: Id<ChannelMarker>,
    pub message_id: Id<MessageMarker>,
    pub author_id: Id<UserMarker>,
    pub content: String,
}

impl From<&MessageCreate> for TextEvent {
    fn from(event: &MessageCreate) -> Self {
        Self {
            channel_id: event.channel_id,
            message_id: event.id,
            author_id: event.author.id,
            content: event.content.clone(),
        }
    }
}

/// Accepts reactions with a control emoji, on one message, from permitted users.
#[derive(Debug, Clone)]
pub struct ReactionFilter {
    pub message_id: Id<MessageMarker>,
    pub accepted: Vec<ControlEmoji>,
    pub users: AuthorizedUsers,
    /// Usually the bot itself, so its own control reactions never count.
    pub ignored_user: Option<Id<UserMarker>>,
}

impl ReactionFilter {
    pub fn matches(&self, event: &ReactionEvent) -> bool {
        event.message_id == self.message_id
            && self.ignored_user != Some(event.user_id)
            && self.users.permits(event.user_id)
            && self.accepted.iter().any(|emoji| emoji.matches(&event.emoji))
    }
}

/// Accepts messages in one channel from permitted users.
#[derive(Debug, Clone)]
pub struct MessageFilter {
    pub channel_id: Id<ChannelMarker>,
    pub users: AuthorizedUsers,
    pub ignored_user: Option<Id<UserMarker>>,
}

impl MessageFilter {
    pub fn matches(&self, event: &TextEvent) -> bool {
        event.channel_id == self.channel_id
            && self.ignored_user != Some(event.author_id)
            && self.users.permits(event.author_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reaction(message: u64, user: u64, emoji: &str) -> ReactionEvent {
        ReactionEvent {
            channel_id: Id::new(1),
            message_id: Id::new(message),
            user_id: Id::new(user),
            emoji: EmojiReactionType::Unicode {
                name: emoji.to_owned(),
            },
        }
    }

    fn reaction_filter(users: AuthorizedUsers) -> ReactionFilter {
        ReactionFilter {
            message_id: Id::new(50),
            accepted: vec!["◀".into(), "▶".into()],
            users,
            ignored_user: Some(Id::new(999)),
        }
    }

    #[test]
    fn reaction_filter_requires_all_conditions() {
        let filter = reaction_filter(AuthorizedUsers::from_list([Id::new(7)]));

        assert!(filter.matches(&reaction(50, 7, "▶")));
        assert!(!filter.matches(&reaction(51, 7, "▶")), "other message");
        assert!(!filter.matches(&reaction(50, 8, "▶")), "other user");
        assert!(!filter.matches(&reaction(50, 7, "👍")), "not a control");
    }

    #[test]
    fn unrestricted_filter_still_ignores_the_bot() {
        let filter = reaction_filter(AuthorizedUsers::Anyone);

        assert!(filter.matches(&reaction(50, 12345, "◀")));
        assert!(!filter.matches(&reaction(50, 999, "◀")));
    }

    #[test]
    fn message_filter_checks_channel_and_author() {
        let filter = MessageFilter {
            channel_id: Id::new(1),
            users: AuthorizedUsers::from_list([Id::new(7)]),
            ignored_user: None,
        };
        let text = |channel: u64, author: u64| TextEvent {
            channel_id: Id::new(channel),
            message_id: Id::new(3),
            author_id: Id::new(author),
            content: "2".to_owned(),
        };

        assert!(filter.matches(&text(1, 7)));
        assert!(!filter.matches(&text(2, 7)));
        assert!(!filter.matches(&text(1, 8)));
    }
}
