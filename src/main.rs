use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use clap::{ArgGroup, Parser};
use serenity::{
    client::{Client, EventHandler},
    model::{channel::Reaction, gateway::Ready},
    prelude::GatewayIntents,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use shiori::{
    context::Context,
    model::emoji::{EmojiSet, DEFAULT_ADD_EMOJI, DEFAULT_REMOVE_EMOJI},
    use_case::HandleReaction,
};

struct Handler {
    emojis: Arc<EmojiSet>,
}

#[async_trait::async_trait]
impl EventHandler for Handler {
    async fn reaction_add(&self, ctx: serenity::client::Context, reaction: Reaction) {
        let ctx = match Context::new(
            Arc::clone(&ctx.http),
            Arc::clone(&ctx.cache),
            Arc::clone(&self.emojis),
            &reaction,
        ) {
            Some(x) => x,
            None => return,
        };

        if let Err(e) = ctx.handle_reaction().await {
            error!("error: {}", &e);
        }
    }

    async fn ready(&self, _ctx: serenity::client::Context, ready: Ready) {
        info!("connected as {}", ready.user.name);
    }
}

#[derive(Parser)]
#[command(group(ArgGroup::new("tokens").required(true).multiple(false)))]
struct Opt {
    #[arg(
        long,
        env = "SHIORI_DISCORD_TOKEN",
        hide_env_values = true,
        group = "tokens"
    )]
    token: Option<String>,
    #[arg(long, env = "SHIORI_DISCORD_TOKEN_FILE", group = "tokens")]
    token_file: Option<PathBuf>,
    /// Emoji that bookmark a message, comma separated
    #[arg(
        long = "add-emoji",
        env = "SHIORI_ADD_EMOJIS",
        value_delimiter = ',',
        default_value = DEFAULT_ADD_EMOJI
    )]
    add_emojis: Vec<String>,
    /// Emoji that dismiss a bookmark, comma separated
    #[arg(
        long = "remove-emoji",
        env = "SHIORI_REMOVE_EMOJIS",
        value_delimiter = ',',
        default_value = DEFAULT_REMOVE_EMOJI
    )]
    remove_emojis: Vec<String>,
}

async fn read_token(opt: &Opt) -> Result<String> {
    let token = match (&opt.token, &opt.token_file) {
        (Some(token), _) => token.clone(),
        (None, Some(path)) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read token from {}", path.display()))?,
        (None, None) => anyhow::bail!("either --token or --token-file is required"),
    };
    Ok(token.trim().to_owned())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let opt = Opt::parse();
    let token = read_token(&opt).await?;
    let emojis = EmojiSet::new(&opt.add_emojis, &opt.remove_emojis)
        .context("Invalid emoji configuration")?;

    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGE_REACTIONS
        | GatewayIntents::DIRECT_MESSAGE_REACTIONS;

    let mut client = Client::builder(&token, intents)
        .event_handler(Handler {
            emojis: Arc::new(emojis),
        })
        .await
        .context("Failed to create client")?;

    client.start().await.context("Client error")
}
