//! Per-session configuration and its resolution against the invoking context.

use std::{collections::HashSet, time::Duration};

use twilight_model::id::{
    Id,
    marker::{ChannelMarker, GuildMarker, UserMarker},
};

use crate::format::PageFormat;

/// Idle timeout for a session when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(100);
/// How long the jump prompt waits for a page number.
pub const DEFAULT_PROMPT_TIMEOUT: Duration = Duration::from_secs(30);
/// Prompt sent when the jump control is pressed.
pub const DEFAULT_ENTER_PAGE_TEXT: &str = "`Enter the page number you want to jump to:`";

/// Who may drive a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorizedUsers {
    Anyone,
    Only(HashSet<Id<UserMarker>>),
}

impl AuthorizedUsers {
    /// Build from an explicit list; an empty list means anyone.
    pub fn from_list(users: impl IntoIterator<Item = Id<UserMarker>>) -> Self {
        let users: HashSet<_> = users.into_iter().collect();
        if users.is_empty() {
            Self::Anyone
        } else {
            Self::Only(users)
        }
    }

    pub fn permits(&self, user_id: Id<UserMarker>) -> bool {
        match self {
            Self::Anyone => true,
            Self::Only(users) => users.contains(&user_id),
        }
    }
}

/// The message that started a session: its author, channel and guild.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Invocation {
    pub author_id: Id<UserMarker>,
    pub channel_id: Id<ChannelMarker>,
    /// `None` for direct and group messages.
    pub guild_id: Option<Id<GuildMarker>>,
}

/// Resolved configuration for one session run.
///
/// Built once by the session builders:
/// - users: the explicit list when given (empty means anyone), else the invoking author;
/// - channel: the explicit channel when given, else the invoking channel.
///
/// An explicit channel is assumed to be a guild channel.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub users: AuthorizedUsers,
    pub channel_id: Id<ChannelMarker>,
    /// Discord refuses to remove other users' reactions in private channels,
    /// so reaction cleanup is skipped there.
    pub direct_message: bool,
    pub timeout: Duration,
    pub prompt_timeout: Duration,
    pub format: PageFormat,
    pub enter_page_text: String,
    pub quit_text: Option<String>,
}

/// Unresolved settings collected by the builders.
#[derive(Debug, Clone)]
pub(crate) struct SessionOptions {
    pub users: Option<Vec<Id<UserMarker>>>,
    pub channel_id: Option<Id<ChannelMarker>>,
    pub timeout: Duration,
    pub prompt_timeout: Duration,
    pub format: PageFormat,
    pub enter_page_text: String,
    pub quit_text: Option<String>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            users: None,
            channel_id: None,
            timeout: DEFAULT_TIMEOUT,
            prompt_timeout: DEFAULT_PROMPT_TIMEOUT,
            format: PageFormat::default(),
            enter_page_text: DEFAULT_ENTER_PAGE_TEXT.to_owned(),
            quit_text: None,
        }
    }
}

impl SessionOptions {
    pub fn resolve(self, invocation: Invocation) -> SessionConfig {
        let users = match self.users {
            Some(users) => AuthorizedUsers::from_list(users),
            None => AuthorizedUsers::from_list([invocation.author_id]),
        };

        SessionConfig {
            users,
            direct_message: self.channel_id.is_none() && invocation.guild_id.is_none(),
            channel_id: self.channel_id.unwrap_or(invocation.channel_id),
            timeout: self.timeout,
            prompt_timeout: self.prompt_timeout,
            format: self.format,
            enter_page_text: self.enter_page_text,
            quit_text: self.quit_text,
        }
    }
}
