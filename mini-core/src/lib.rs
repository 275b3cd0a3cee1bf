use std::sync::Arc;

use twilight_http::Client;
use twilight_model::id::{Id, marker::UserMarker};
use twilight_standby::Standby;

use mini_paginator::TwilightHost;

/// Environment-driven bot settings.
pub mod settings;

pub use settings::Settings;

/// Single source of truth for the message-command prefix.
pub const COMMAND_PREFIX: char = '!';

/// Shared application context passed into command handlers.
///
/// Cheap to clone because it only stores reference-counted shared state.
#[derive(Clone, Debug)]
pub struct Context {
    pub http: Arc<Client>,
    pub standby: Arc<Standby>,
    pub settings: Arc<Settings>,
    bot_user_id: Id<UserMarker>,
}

impl Context {
    /// Create a new application context.
    pub fn new(
        http: Arc<Client>,
        standby: Arc<Standby>,
        settings: Settings,
        bot_user_id: Id<UserMarker>,
    ) -> Self {
        Self {
            http,
            standby,
            settings: Arc::new(settings),
            bot_user_id,
        }
    }

    /// Chat host used by paginator sessions started from commands.
    pub fn host(&self) -> TwilightHost {
        TwilightHost::new(
            Arc::clone(&self.http),
            Arc::clone(&self.standby),
            Some(self.bot_user_id),
        )
    }
}
