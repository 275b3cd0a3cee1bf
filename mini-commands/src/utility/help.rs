use twilight_model::gateway::payload::incoming::MessageCreate;

use crate::utility::embeds::help_page_embed;
use crate::{COMMANDS, CommandMeta, invocation_of};
use mini_core::Context;
use mini_paginator::{DEFAULT_SUB_LIST_LEN, EmbedPaginator, generate_sub_lists};

pub const META: CommandMeta = CommandMeta {
    name: "help",
    desc: "Lists out all available commands.",
    usage: "!help",
};

/// Render the command catalog, one embed field per command.
pub async fn run(ctx: Context, msg: Box<MessageCreate>) -> anyhow::Result<()> {
    let mut commands: Vec<&CommandMeta> = COMMANDS.iter().collect();
    commands.sort_unstable_by_key(|command| command.name);

    let pages = generate_sub_lists(&commands, DEFAULT_SUB_LIST_LEN)
        .iter()
        .map(|group| help_page_embed(group))
        .collect::<anyhow::Result<Vec<_>>>()?;

    EmbedPaginator::builder(invocation_of(&msg), pages)
        .timeout(ctx.settings.session_timeout)
        .build()?
        .run(&ctx.host())
        .await?;

    Ok(())
}
