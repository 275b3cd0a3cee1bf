pub mod utility;

use tracing::debug;
use twilight_model::gateway::payload::incoming::MessageCreate;

use mini_core::{COMMAND_PREFIX, Context};
use mini_paginator::Invocation;

// Global command meta data
pub struct CommandMeta {
    pub name: &'static str,
    pub desc: &'static str,
    pub usage: &'static str,
}

pub const COMMANDS: &[CommandMeta] = &[
    utility::ping::META,
    utility::help::META,
    utility::pages::META,
    utility::confirm::META,
    // Add new commands here
];

/// The invoking author and channel of a message command.
pub fn invocation_of(msg: &MessageCreate) -> Invocation {
    Invocation {
        author_id: msg.author.id,
        channel_id: msg.channel_id,
        guild_id: msg.guild_id,
    }
}

/// Split `!command first rest...` into a lowercase command, first argument and the remainder.
fn split_command(content: &str) -> Option<(String, Option<&str>, Option<&str>)> {
    let content = content.trim().strip_prefix(COMMAND_PREFIX)?.trim();
    let mut command_and_rest = content.splitn(2, char::is_whitespace);
    let cmd = command_and_rest.next().unwrap_or("").to_ascii_lowercase();
    let rest = command_and_rest
        .next()
        .map(str::trim)
        .filter(|value| !value.is_empty());
    let arg1 = rest.and_then(|value| value.split_whitespace().next());

    Some((cmd, arg1, rest))
}

/// Route a message command.
///
/// Sessions wait on gateway events, so callers must run this off the event loop.
pub async fn handle_message(ctx: Context, msg: Box<MessageCreate>) -> anyhow::Result<()> {
    if msg.author.bot {
        return Ok(());
    }

    let content = msg.content.clone();
    let Some((cmd, arg1, rest)) = split_command(&content) else {
        return Ok(());
    };

    debug!(command = %cmd, user_id = msg.author.id.get(), "routing command");

    match cmd.as_str() {
        "ping" => utility::ping::run(ctx, msg).await?,
        "help" => utility::help::run(ctx, msg).await?,
        "pages" => utility::pages::run(ctx, msg, arg1).await?,
        "confirm" => utility::confirm::run(ctx, msg, rest).await?,
        // Add new commands here
        _ => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn splits_command_and_arguments() {
        assert_eq!(
            split_command("  !Confirm  Delete the archive? "),
            Some((
                "confirm".to_owned(),
                Some("Delete"),
                Some("Delete the archive?")
            ))
        );
        assert_eq!(split_command("!pages"), Some(("pages".to_owned(), None, None)));
    }

    #[test]
    fn ignores_messages_without_prefix() {
        assert_eq!(split_command("pages 3"), None);
    }

    #[test]
    fn command_names_are_unique() {
        let mut names: Vec<_> = COMMANDS.iter().map(|command| command.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), COMMANDS.len());
    }
}
