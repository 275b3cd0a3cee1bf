//! Multi-page embed browsing driven by reaction controls.

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
    controls::{ControlEmoji, ControlSignal, PaginatorControls},
    cursor::Cursor,
    dialog::{clear_controls, quit, while_registering},
    error::PaginatorError,
    event::ReactionFilter,
    format::format_pages,
    host::{ChatHost, SentMessage, best_effort},
    prompt::read_page_index,
};

/// How a menu run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Ending {
    Quit,
    Idle,
}

/// An interactive menu that pages through several embeds.
///
/// A run ends when a permitted user presses quit or when no control is pressed
/// for the configured timeout. Neither counts as an error.
#[derive(Debug, Clone)]
pub struct EmbedPaginator {
    pages: Vec<Embed>,
    controls: PaginatorControls,
    config: SessionConfig,
}

impl EmbedPaginator {
    pub fn builder(invocation: Invocation, pages: Vec<Embed>) -> EmbedPaginatorBuilder {
        EmbedPaginatorBuilder {
            invocation,
            pages,
            controls: PaginatorControls::default(),
            options: SessionOptions::default(),
        }
    }

    /// The pages as supplied, without page markers.
    pub fn pages(&self) -> &[Embed] {
        &self.pages
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn controls(&self) -> &PaginatorControls {
        &self.controls
    }

    /// Send the first page and serve control presses until quit or timeout.
    ///
    /// A single page is sent as-is, with no controls and no waiting.
    ///
    /// # Errors
    ///
    /// Returns [`PaginatorError::Host`] when sending the menu, editing it to a
    /// new page, or sending the jump prompt fails. Cleanup failures are only logged.
    pub async fn run<H>(self, host: &H) -> Result<(), PaginatorError>
    where
        H: ChatHost + ?Sized,
    {
        let channel_id = self.config.channel_id;

        if let [page] = self.pages.as_slice() {
            host.send_embed(channel_id, page).await?;
            debug!(channel_id = channel_id.get(), "single page sent without controls");
            return Ok(());
        }

        let mut cursor = Cursor::new(format_pages(&self.pages, &self.config.format))?;
        let message = host.send_embed(channel_id, cursor.current()).await?;
        debug!(
            message_id = message.message_id.get(),
            pages = cursor.len(),
            "paginator started"
        );

        let emojis = self.controls.emojis();
        let filter = ReactionFilter {
            message_id: message.message_id,
            accepted: emojis.clone(),
            users: self.config.users.clone(),
            ignored_user: host.self_user_id(),
        };

        let ending = while_registering(
            host,
            message,
            &emojis,
            self.serve(host, message, &mut cursor, filter),
        )
        .await?;

        match ending {
            Ending::Quit => quit(host, message, &self.config).await,
            Ending::Idle => {
                debug!(message_id = message.message_id.get(), "paginator idle, closing");
                clear_controls(host, message, &self.config, "clear reactions on timeout").await;
            }
        }

        Ok(())
    }

    /// Serve control presses until quit or timeout; teardown is left to the caller.
    async fn serve<H>(
        &self,
        host: &H,
        message: SentMessage,
        cursor: &mut Cursor<Embed>,
        filter: ReactionFilter,
    ) -> Result<Ending, PaginatorError>
    where
        H: ChatHost + ?Sized,
    {
        loop {
            let event =
                match tokio::time::timeout(self.config.timeout, host.next_reaction(filter.clone()))
                    .await
                {
                    Ok(event) => event?,
                    Err(_elapsed) => return Ok(Ending::Idle),
                };

            let Some(signal) = self.controls.signal_for(&event.emoji) else {
                continue;
            };
            debug!(
                ?signal,
                page = cursor.index(),
                user_id = event.user_id.get(),
                "control pressed"
            );

            match signal {
                ControlSignal::First => cursor.set(0)?,
                ControlSignal::Previous => cursor.back(),
                ControlSignal::Next => cursor.forward(),
                ControlSignal::Last => cursor.set(cursor.max_index())?,
                ControlSignal::Jump => self.jump(host, cursor).await?,
                ControlSignal::Quit => return Ok(Ending::Quit),
            }

            host.edit_embed(message, cursor.current()).await?;
            if !self.config.direct_message {
                let pressed = ControlEmoji::from(&event.emoji);
                best_effort(
                    "remove pressed control",
                    host.remove_reaction(message, &pressed, event.user_id),
                )
                .await;
            }
        }
    }

    /// Ask for a page number and move there if it names an existing page.
    async fn jump<H>(&self, host: &H, cursor: &mut Cursor<Embed>) -> Result<(), PaginatorError>
    where
        H: ChatHost + ?Sized,
    {
        let channel_id = self.config.channel_id;
        let prompt = host
            .send_text(channel_id, &self.config.enter_page_text)
            .await?;

        let selection = read_page_index(
            host,
            channel_id,
            &self.config.users,
            self.config.prompt_timeout,
        )
        .await;
        best_effort("delete jump prompt", host.delete_message(prompt)).await;

        if let Some(index) = selection?
            && let Err(source) = cursor.set(index)
        {
            debug!(%source, "ignoring jump outside the page range");
        }

        Ok(())
    }
}

/// Collects options for an [`EmbedPaginator`].
#[derive(Debug, Clone)]
pub struct EmbedPaginatorBuilder {
    invocation: Invocation,
    pages: Vec<Embed>,
    controls: PaginatorControls,
    options: SessionOptions,
}

impl EmbedPaginatorBuilder {
    /// Restrict controls to these users; an empty list lets anyone use them.
    #[must_use]
    pub fn users(mut self, users: impl IntoIterator<Item = Id<UserMarker>>) -> Self {
        self.options.users = Some(users.into_iter().collect());
        self
    }

    /// Send the menu here instead of the invoking channel.
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
    pub fn prompt_timeout(mut self, timeout: Duration) -> Self {
        self.options.prompt_timeout = timeout;
        self
    }

    #[must_use]
    pub fn controls(mut self, controls: PaginatorControls) -> Self {
        self.controls = controls;
        self
    }

    /// Marker template with `{page}` and `{total}` placeholders.
    #[must_use]
    pub fn page_format(mut self, template: impl Into<String>) -> Self {
        self.options.format.template = template.into();
        self
    }

    #[must_use]
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.options.format.separator = separator.into();
        self
    }

    #[must_use]
    pub fn enter_page_text(mut self, text: impl Into<String>) -> Self {
        self.options.enter_page_text = text.into();
        self
    }

    /// Text left in place of the menu after quit; without it the menu is deleted.
    #[must_use]
    pub fn quit_text(mut self, text: impl Into<String>) -> Self {
        self.options.quit_text = Some(text.into());
        self
    }

    /// # Errors
    ///
    /// Fails with [`PaginatorError::EmptyPages`] for an empty page list and
    /// [`PaginatorError::DuplicateControl`] when two controls share an emoji.
    pub fn build(self) -> Result<EmbedPaginator, PaginatorError> {
        if self.pages.is_empty() {
            return Err(PaginatorError::EmptyPages);
        }
        self.controls.validate()?;

        Ok(EmbedPaginator {
            pages: self.pages,
            controls: self.controls,
            config: self.options.resolve(self.invocation),
        })
    }
}
