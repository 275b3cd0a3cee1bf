use std::{env, time::Duration};

use anyhow::Context as _;

use mini_paginator::config::DEFAULT_TIMEOUT;

/// Settings read from the process environment (and `.env`, when present).
#[derive(Clone)]
pub struct Settings {
    pub discord_token: String,
    /// Idle timeout for paginator sessions started by commands.
    pub session_timeout: Duration,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("discord_token", &"<redacted>")
            .field("session_timeout", &self.session_timeout)
            .finish()
    }
}

impl Settings {
    /// Load `.env` if it exists, then read the environment.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let discord_token = lookup("DISCORD_TOKEN")
            .filter(|token| !token.trim().is_empty())
            .context("DISCORD_TOKEN is not set")?;

        let session_timeout = match lookup("PAGINATOR_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw
                    .trim()
                    .parse::<u64>()
                    .ok()
                    .filter(|secs| *secs > 0)
                    .with_context(|| {
                        format!("PAGINATOR_TIMEOUT_SECS must be a positive integer, got `{raw}`")
                    })?;
                Duration::from_secs(secs)
            }
            None => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            discord_token,
            session_timeout,
        })
    }
}
