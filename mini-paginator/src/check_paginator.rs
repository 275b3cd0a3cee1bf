//! Yes/no confirmation dialog.

use std::time::Duration;

use tracing::debug;
use twilight_model::{
    channel::message::embed::Embed,
    id::{
        Id,
        marker::{ChannelMarker, UserMarker},
    },
};

use crate::{
    config::{Invocation, SessionConfig, SessionOptions},
    controls::{ConfirmControls, ConfirmSignal},
    dialog::{clear_controls, while_registering},
    error::PaginatorError,
    event::ReactionFilter,
    host::ChatHost,
};

/// Sends one embed and waits for a permitted user to confirm or deny.
#[derive(Debug, Clone)]
pub struct CheckPaginator {
    page: Embed,
    controls: ConfirmControls,
    config: SessionConfig,
}

impl CheckPaginator {
    pub fn builder(invocation: Invocation, page: Embed) -> CheckPaginatorBuilder {
        CheckPaginatorBuilder {
            invocation,
            page,
            controls: ConfirmControls::default(),
            options: SessionOptions::default(),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Resolve to `true` when the confirm control is pressed, `false` for deny.
    ///
    /// The controls are cleared from the message either way.
    ///
    /// # Errors
    ///
    /// Returns [`PaginatorError::Timeout`] when nobody answers in time, leaving
    /// the fallback to the caller, and [`PaginatorError::Host`] when the
    /// dialog cannot be sent.
    pub async fn run<H>(self, host: &H) -> Result<bool, PaginatorError>
    where
        H: ChatHost + ?Sized,
    {
        let message = host.send_embed(self.config.channel_id, &self.page).await?;

        let emojis = self.controls.emojis();
        let filter = ReactionFilter {
            message_id: message.message_id,
            accepted: emojis.clone(),
            users: self.config.users.clone(),
            ignored_user: host.self_user_id(),
        };

        let answer = while_registering(
            host,
            message,
            &emojis,
            tokio::time::timeout(self.config.timeout, host.next_reaction(filter)),
        )
        .await;
        clear_controls(host, message, &self.config, "clear confirmation reactions").await;

        let Ok(event) = answer else {
            debug!(message_id = message.message_id.get(), "confirmation timed out");
            return Err(PaginatorError::Timeout);
        };
        let signal = self.controls.signal_for(&event?.emoji);
        debug!(?signal, message_id = message.message_id.get(), "confirmation answered");

        Ok(signal == Some(ConfirmSignal::Confirm))
    }
}

/// Collects options for a [`CheckPaginator`].
#[derive(Debug, Clone)]
pub struct CheckPaginatorBuilder {
    invocation: Invocation,
    page: Embed,
    controls: ConfirmControls,
    options: SessionOptions,
}

impl CheckPaginatorBuilder {
    /// Restrict answers to these users; an empty list lets anyone answer.
    #[must_use]
    pub fn users(mut self, users: impl IntoIterator<Item = Id<UserMarker>>) -> Self {
        self.options.users = Some(users.into_iter().collect());
        self
    }

    #[must_use]
    pub fn channel(mut self, channel_id: Id<ChannelMarker>) -> Self {
        self.options.channel_id = Some(channel_id);
        self
    }

    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.options.timeout = timeout;
        self
    }

    #[must_use]
    pub fn controls(mut self, controls: ConfirmControls) -> Self {
        self.controls = controls;
        self
    }

    /// # Errors
    ///
    /// Fails with [`PaginatorError::DuplicateControl`] when confirm and deny share an emoji.
    pub fn build(self) -> Result<CheckPaginator, PaginatorError> {
        self.controls.validate()?;

        Ok(CheckPaginator {
            page: self.page,
            controls: self.controls,
            config: self.options.resolve(self.invocation),
        })
    }
}
