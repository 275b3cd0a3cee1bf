//! Reaction controls and the signals they map to.

use std::fmt;

use twilight_http::request::channel::reaction::RequestReactionType;
use twilight_model::{
    channel::message::EmojiReactionType,
    id::{Id, marker::EmojiMarker},
};

use crate::error::PaginatorError;

const VARIATION_SELECTOR: char = '\u{fe0f}';

/// An emoji a session attaches to its message as a clickable control.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ControlEmoji {
    Unicode(String),
    Custom {
        id: Id<EmojiMarker>,
        name: Option<String>,
    },
}

impl ControlEmoji {
    pub fn unicode(name: impl Into<String>) -> Self {
        Self::Unicode(name.into())
    }

    /// Whether a reaction carries this emoji.
    ///
    /// Unicode names compare without the U+FE0F variation selector, which
    /// clients append inconsistently.
    pub fn matches(&self, emoji: &EmojiReactionType) -> bool {
        match (self, emoji) {
            (Self::Unicode(expected), EmojiReactionType::Unicode { name }) => {
                strip_variation(expected) == strip_variation(name)
            }
            (Self::Custom { id: expected, .. }, EmojiReactionType::Custom { id, .. }) => {
                expected == id
            }
            _ => false,
        }
    }

    /// Borrow as a twilight reaction request.
    pub fn as_request(&self) -> RequestReactionType<'_> {
        match self {
            Self::Unicode(name) => RequestReactionType::Unicode {
                name: name.as_str(),
            },
            Self::Custom { id, name } => RequestReactionType::Custom {
                id: *id,
                name: name.as_deref(),
            },
        }
    }

    fn key(&self) -> String {
        match self {
            Self::Unicode(name) => strip_variation(name),
            Self::Custom { id, .. } => format!("custom:{id}"),
        }
    }
}

impl From<&EmojiReactionType> for ControlEmoji {
    fn from(emoji: &EmojiReactionType) -> Self {
        match emoji {
            EmojiReactionType::Unicode { name } => Self::Unicode(name.clone()),
            EmojiReactionType::Custom { id, name, .. } => Self::Custom {
                id: *id,
                name: name.clone(),
            },
        }
    }
}

impl From<&str> for ControlEmoji {
    fn from(name: &str) -> Self {
        Self::unicode(name)
    }
}

impl fmt::Display for ControlEmoji {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unicode(name) => f.write_str(name),
            Self::Custom { id, name } => write!(f, "<:{}:{id}>", name.as_deref().unwrap_or("_")),
        }
    }
}

fn strip_variation(name: &str) -> String {
    name.chars().filter(|c| *c != VARIATION_SELECTOR).collect()
}

fn ensure_distinct<'a>(
    emojis: impl IntoIterator<Item = &'a ControlEmoji>,
) -> Result<(), PaginatorError> {
    let mut seen = Vec::new();
    for emoji in emojis {
        let key = emoji.key();
        if seen.contains(&key) {
            return Err(PaginatorError::DuplicateControl(emoji.to_string()));
        }
        seen.push(key);
    }

    Ok(())
}

/// Navigation signals understood by [`EmbedPaginator`](crate::EmbedPaginator).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlSignal {
    First,
    Previous,
    Next,
    Last,
    Jump,
    Quit,
}

/// Emoji bindings for the six paginator controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginatorControls {
    pub first: ControlEmoji,
    pub previous: ControlEmoji,
    pub next: ControlEmoji,
    pub last: ControlEmoji,
    pub jump: ControlEmoji,
    pub quit: ControlEmoji,
}

impl Default for PaginatorControls {
    fn default() -> Self {
        Self {
            first: "⏮".into(),
            previous: "◀".into(),
            next: "▶".into(),
            last: "⏭".into(),
            jump: "🔢".into(),
            quit: "📛".into(),
        }
    }
}

impl PaginatorControls {
    /// Controls in the order they are attached to the message.
    pub fn bindings(&self) -> [(ControlSignal, &ControlEmoji); 6] {
        [
            (ControlSignal::First, &self.first),
            (ControlSignal::Previous, &self.previous),
            (ControlSignal::Next, &self.next),
            (ControlSignal::Last, &self.last),
            (ControlSignal::Jump, &self.jump),
            (ControlSignal::Quit, &self.quit),
        ]
    }

    pub fn emojis(&self) -> Vec<ControlEmoji> {
        self.bindings()
            .into_iter()
            .map(|(_, emoji)| emoji.clone())
            .collect()
    }

    pub fn signal_for(&self, emoji: &EmojiReactionType) -> Option<ControlSignal> {
        self.bindings()
            .into_iter()
            .find_map(|(signal, control)| control.matches(emoji).then_some(signal))
    }

    pub(crate) fn validate(&self) -> Result<(), PaginatorError> {
        ensure_distinct(self.bindings().into_iter().map(|(_, emoji)| emoji))
    }
}

/// Answers understood by [`CheckPaginator`](crate::CheckPaginator).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmSignal {
    Confirm,
    Deny,
}

/// Emoji bindings for the confirmation dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmControls {
    pub confirm: ControlEmoji,
    pub deny: ControlEmoji,
}

impl Default for ConfirmControls {
    fn default() -> Self {
        Self {
            confirm: "✅".into(),
            deny: "📛".into(),
        }
    }
}

impl ConfirmControls {
    pub fn bindings(&self) -> [(ConfirmSignal, &ControlEmoji); 2] {
        [
            (ConfirmSignal::Confirm, &self.confirm),
            (ConfirmSignal::Deny, &self.deny),
        ]
    }

    pub fn emojis(&self) -> Vec<ControlEmoji> {
        vec![self.confirm.clone(), self.deny.clone()]
    }

    pub fn signal_for(&self, emoji: &EmojiReactionType) -> Option<ConfirmSignal> {
        self.bindings()
            .into_iter()
            .find_map(|(signal, control)| control.matches(emoji).then_some(signal))
    }

    pub(crate) fn validate(&self) -> Result<(), PaginatorError> {
        ensure_distinct([&self.confirm, &self.deny])
    }
}
