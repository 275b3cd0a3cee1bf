use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use twilight_gateway::{EventTypeFlags, Intents, Shard, ShardId, StreamExt as _};
use twilight_http::Client;
use twilight_model::gateway::event::Event;
use twilight_standby::Standby;

use rustls::crypto::ring::default_provider;

use mini_commands::handle_message;
use mini_core::{Context, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("failed to install rustls ring provider"))?;

    let settings = Settings::from_env()?;
    let token = settings.discord_token.clone();

    // Create a single shared HTTP Client
    let http = Arc::new(Client::new(token.clone()));
    let standby = Arc::new(Standby::new());

    // Sessions ignore the bot's own reactions, so resolve who we are up front
    let bot_user = http.current_user().await?.model().await?;
    info!(user_id = bot_user.id.get(), "authenticated as {}", bot_user.name);

    let ctx = Context::new(Arc::clone(&http), Arc::clone(&standby), settings, bot_user.id);

    let intents = Intents::GUILDS
        | Intents::GUILD_MESSAGES
        | Intents::GUILD_MESSAGE_REACTIONS
        | Intents::DIRECT_MESSAGES
        | Intents::DIRECT_MESSAGE_REACTIONS
        | Intents::MESSAGE_CONTENT;

    // A shard is one Gateway WebSocket connection to Discord
    let mut shard = Shard::new(ShardId::new(0, 1), token, intents);

    info!("paginator bot is connecting...");

    while let Some(item) = shard.next_event(EventTypeFlags::all()).await {
        let event = match item {
            Ok(event) => event,
            Err(source) => {
                error!(?source, "gateway event stream error");
                continue;
            }
        };

        // Wake any session waiting on this event before routing commands
        standby.process(&event);

        match event {
            Event::Ready(_) => {
                info!("paginator bot is ready");
            }
            Event::MessageCreate(msg) => {
                let ctx = ctx.clone();
                tokio::spawn(async move {
                    if let Err(source) = handle_message(ctx, msg).await {
                        error!(?source, "command failed");
                    }
                });
            }
            _ => {} // Ignore unused events
        }
    }

    Ok(())
}
