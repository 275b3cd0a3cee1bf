use twilight_model::gateway::payload::incoming::MessageCreate;

use crate::utility::embeds::sample_page_embed;
use crate::{CommandMeta, invocation_of};
use mini_core::Context;
use mini_paginator::{EmbedPaginator, generate_sub_lists};

pub const META: CommandMeta = CommandMeta {
    name: "pages",
    desc: "Browse generated sample items with reaction controls.",
    usage: "!pages [count]",
};

const DEFAULT_ITEM_COUNT: usize = 24;
const MAX_ITEM_COUNT: usize = 500;
const ITEMS_PER_PAGE: usize = 5;

/// Paginate a list of sample items.
///
/// Inputs:
/// - optional item count: `!pages [count]`, 1 to 500.
///
/// Error behavior:
/// - returns usage text on an invalid count.
pub async fn run(ctx: Context, msg: Box<MessageCreate>, arg1: Option<&str>) -> anyhow::Result<()> {
    let Some(count) = parse_item_count(arg1) else {
        let usage = format!("Usage: `{}` (count from 1 to {MAX_ITEM_COUNT})", META.usage);
        ctx.http.create_message(msg.channel_id).content(&usage).await?;
        return Ok(());
    };

    let items = build_sample_items(count);
    let pages = generate_sub_lists(&items, ITEMS_PER_PAGE)
        .iter()
        .map(|group| sample_page_embed(group))
        .collect::<anyhow::Result<Vec<_>>>()?;

    EmbedPaginator::builder(invocation_of(&msg), pages)
        .timeout(ctx.settings.session_timeout)
        .quit_text("Pagination closed.")
        .build()?
        .run(&ctx.host())
        .await?;

    Ok(())
}

fn parse_item_count(raw: Option<&str>) -> Option<usize> {
    match raw {
        Some(value) => value
            .parse::<usize>()
            .ok()
            .filter(|count| (1..=MAX_ITEM_COUNT).contains(count)),
        None => Some(DEFAULT_ITEM_COUNT),
    }
}

fn build_sample_items(count: usize) -> Vec<String> {
    (1..=count)
        .map(|index| format!("Sample pagination item #{index}"))
        .collect()
}
