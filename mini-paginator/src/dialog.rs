//! Message housekeeping shared by both sessions.

use std::{future::Future, pin::pin};

use crate::{
    config::SessionConfig,
    controls::ControlEmoji,
    host::{ChatHost, SentMessage, best_effort},
};

/// Attach every control to the message in order.
pub(crate) async fn register_controls<H>(host: &H, message: SentMessage, emojis: &[ControlEmoji])
where
    H: ChatHost + ?Sized,
{
    for emoji in emojis {
        best_effort("add control reaction", host.add_reaction(message, emoji)).await;
    }
}

/// Drive `session` while the controls are being attached.
///
/// Presses arriving before registration finishes are served. Registration is
/// dropped as soon as `session` resolves, so no control is added after it.
pub(crate) async fn while_registering<H, F>(
    host: &H,
    message: SentMessage,
    emojis: &[ControlEmoji],
    session: F,
) -> F::Output
where
    H: ChatHost + ?Sized,
    F: Future,
{
    let mut registration = pin!(register_controls(host, message, emojis));
    let mut session = pin!(session);
    let mut registered = false;

    loop {
        tokio::select! {
            biased;
            () = &mut registration, if !registered => registered = true,
            output = &mut session => return output,
        }
    }
}

/// Remove all reactions, except in private channels where Discord refuses to.
pub(crate) async fn clear_controls<H>(
    host: &H,
    message: SentMessage,
    config: &SessionConfig,
    action: &'static str,
) where
    H: ChatHost + ?Sized,
{
    if !config.direct_message {
        best_effort(action, host.clear_reactions(message)).await;
    }
}

/// Close a session: swap the message for the quit text and drop the controls,
/// or delete the message when there is no quit text.
pub(crate) async fn quit<H>(host: &H, message: SentMessage, config: &SessionConfig)
where
    H: ChatHost + ?Sized,
{
    match config.quit_text.as_deref() {
        Some(text) => {
            best_effort("replace message on quit", host.edit_text(message, text)).await;
            clear_controls(host, message, config, "clear reactions on quit").await;
        }
        None => best_effort("delete message on quit", host.delete_message(message)).await,
    }
}
