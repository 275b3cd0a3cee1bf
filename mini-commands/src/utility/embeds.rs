use twilight_model::channel::message::embed::Embed;
use twilight_util::builder::embed::{EmbedBuilder, EmbedFieldBuilder, EmbedFooterBuilder};

use crate::CommandMeta;

/// Default embed color used across the bot UI.
pub const DEFAULT_EMBED_COLOR: u32 = 0x90_54_30;

/// One help page listing a group of commands as fields.
pub fn help_page_embed(commands: &[&CommandMeta]) -> anyhow::Result<Embed> {
    let mut builder = EmbedBuilder::new()
        .title("Commands")
        .color(DEFAULT_EMBED_COLOR);

    for command in commands {
        let value = format!("{}\nUsage: `{}`", command.desc, command.usage);
        let field = EmbedFieldBuilder::new(format!("!{}", command.name), value).build();
        builder = builder.field(field);
    }

    Ok(builder.validate()?.build())
}

/// One page of sample items rendered as a bullet list.
pub fn sample_page_embed(items: &[String]) -> anyhow::Result<Embed> {
    let embed = EmbedBuilder::new()
        .title("Pagination Test")
        .color(DEFAULT_EMBED_COLOR)
        .description(bulleted(items))
        .footer(EmbedFooterBuilder::new("Sample items").build())
        .validate()?
        .build();

    Ok(embed)
}

/// The question shown by `!confirm`.
pub fn confirm_embed(question: &str) -> anyhow::Result<Embed> {
    let embed = EmbedBuilder::new()
        .title("Please confirm")
        .color(DEFAULT_EMBED_COLOR)
        .description(question)
        .validate()?
        .build();

    Ok(embed)
}

pub fn bulleted(items: &[String]) -> String {
    format!("- {}", items.join("\n- "))
}
