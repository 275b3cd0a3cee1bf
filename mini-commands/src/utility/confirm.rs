use twilight_model::gateway::payload::incoming::MessageCreate;

use crate::utility::embeds::confirm_embed;
use crate::{CommandMeta, invocation_of};
use mini_core::Context;
use mini_paginator::{CheckPaginator, PaginatorError};

pub const META: CommandMeta = CommandMeta {
    name: "confirm",
    desc: "Ask a yes/no question answered with reactions.",
    usage: "!confirm [question]",
};

const DEFAULT_QUESTION: &str = "Do you want to continue?";

/// Ask the invoking user a question and report their answer.
///
/// Error behavior:
/// - no answer before the session timeout is reported in the channel, not raised.
pub async fn run(
    ctx: Context,
    msg: Box<MessageCreate>,
    question: Option<&str>,
) -> anyhow::Result<()> {
    let embed = confirm_embed(question.unwrap_or(DEFAULT_QUESTION))?;

    let outcome = CheckPaginator::builder(invocation_of(&msg), embed)
        .timeout(ctx.settings.session_timeout)
        .build()?
        .run(&ctx.host())
        .await;

    let reply = match outcome {
        Ok(true) => "Confirmed.",
        Ok(false) => "Declined.",
        Err(PaginatorError::Timeout) => "No answer received; nothing was changed.",
        Err(source) => return Err(source.into()),
    };
    ctx.http.create_message(msg.channel_id).content(reply).await?;

    Ok(())
}
