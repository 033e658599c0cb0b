use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};

mod application;
mod domain;
mod infrastructure;

use application::commands;
use application::messaging::MessageDispatcher;
use domain::entities::IncomingMessage;
use domain::traits::Bot;
use infrastructure::adapters::{ConsoleAdapter, TelegramAdapter};
use infrastructure::config::Config;
use infrastructure::quotes::AlphaVantageClient;

/// Long-poll timeout for Telegram getUpdates
const POLL_TIMEOUT_SECONDS: i64 = 30;

#[derive(Parser)]
#[command(name = "ticker-bot")]
#[command(about = "A chat bot that answers stock and crypto price commands", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Bot token (overrides config)
    #[arg(short, long)]
    token: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the bot
    Run,
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run => {
            run_bot(cli.config, cli.token);
        }
        Commands::Version => {
            println!("ticker-bot v{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::InitConfig => {
            init_config();
        }
    }
}

fn run_bot(config_path: String, token_override: Option<String>) {
    // Load config
    let config = if std::path::Path::new(&config_path).exists() {
        Config::load(&config_path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load config: {}, using environment", e);
            Config::load_env()
        })
    } else {
        Config::load_env()
    };

    tracing::info!("Starting {}", config.bot.name);

    let Some(api_key) = config.provider.api_key.clone() else {
        tracing::error!("No quote provider API key (set provider.api-key or ALPHA_VANTAGE_API_KEY)");
        return;
    };

    let provider = match AlphaVantageClient::new(
        api_key,
        Duration::from_secs(config.provider.timeout_seconds),
    ) {
        Ok(provider) => Arc::new(provider),
        Err(e) => {
            tracing::error!("Failed to build quote client: {}", e);
            return;
        }
    };

    let registry = match commands::default_registry(&config.bot.marker, provider) {
        Ok(registry) => registry,
        Err(e) => {
            tracing::error!("Failed to build command registry: {}", e);
            return;
        }
    };
    let dispatcher = MessageDispatcher::new(config.bot.marker.clone(), registry);

    // Select adapter
    let rt = tokio::runtime::Runtime::new().unwrap();

    if let Some(token) = token_override.or_else(|| config.telegram_token()) {
        rt.block_on(async {
            let bot = TelegramAdapter::new(token);
            run_telegram_bot(bot, dispatcher).await;
        });
    } else if config.console_enabled() {
        // Run console bot (dev mode)
        rt.block_on(async {
            let bot = ConsoleAdapter::new();
            run_console_bot(bot, dispatcher).await;
        });
    } else {
        tracing::error!("No adapter available: telegram has no enabled token and console is disabled");
    }
}

async fn run_telegram_bot(mut bot: TelegramAdapter, dispatcher: MessageDispatcher) {
    if let Err(e) = bot.start().await {
        tracing::error!("Failed to start Telegram bot: {}", e);
        return;
    }
    if let Err(e) = bot.fetch_bot_info().await {
        tracing::error!("Failed to fetch bot info: {}", e);
        return;
    }

    let info = bot.bot_info();
    tracing::info!("Bot started: @{}", info.username);

    let bot = Arc::new(bot);
    let dispatcher = Arc::new(dispatcher);
    let mut offset: i64 = 0;

    tracing::info!("Starting message loop...");

    loop {
        match bot.get_updates(offset, POLL_TIMEOUT_SECONDS).await {
            Ok(updates) => {
                if !updates.is_empty() {
                    offset = TelegramAdapter::get_next_offset(&updates).max(offset);
                    tracing::info!("Received {} updates", updates.len());
                }
                for update in updates {
                    let Some(msg) = update.message else { continue };
                    let Some(text) = msg.text else { continue };

                    let message = IncomingMessage::new(msg.chat.id.to_string(), text);
                    if !dispatcher.accepts(&message.text) {
                        continue;
                    }

                    // One independent task per command, replies can complete
                    // out of order.
                    let bot = bot.clone();
                    let dispatcher = dispatcher.clone();
                    tokio::spawn(async move {
                        handle_command(bot.as_ref(), &dispatcher, &message).await;
                    });
                }
            }
            Err(e) => {
                tracing::error!("Failed to fetch updates: {}", e);
                tokio::time::sleep(Duration::from_secs(5)).await;
            }
        }
    }
}

/// Bracket the dispatch with a typing indicator and deliver the reply.
async fn handle_command(bot: &dyn Bot, dispatcher: &MessageDispatcher, message: &IncomingMessage) {
    tracing::debug!(
        "Handling message {} from {} received at {}",
        message.id,
        message.chat_id,
        message.timestamp
    );

    if let Err(e) = bot.send_typing(&message.chat_id).await {
        tracing::debug!("Typing indicator failed: {}", e);
    }

    match dispatcher.handle(&message.text).await {
        Some(reply) => {
            if let Err(e) = bot.send_message(&message.chat_id, &reply).await {
                tracing::error!("Failed to send reply for {}: {}", message.id, e);
            }
        }
        None => {
            tracing::debug!("Message {} matched no command, ignoring", message.id);
        }
    }
}

async fn run_console_bot(bot: ConsoleAdapter, dispatcher: MessageDispatcher) {
    if let Err(e) = bot.start().await {
        tracing::error!("Failed to start console bot: {}", e);
        return;
    }
    tracing::info!(
        "Console mode - prefix commands with '{}', Ctrl-D to exit",
        dispatcher.marker()
    );

    loop {
        let Some(line) = bot.read_line("> ").await else {
            break;
        };
        if line.is_empty() {
            continue;
        }

        let message = IncomingMessage::new("console", line);
        if !dispatcher.accepts(&message.text) {
            continue;
        }

        handle_command(&bot, &dispatcher, &message).await;
    }
}

fn init_config() {
    let path = "config.yaml";
    if std::path::Path::new(path).exists() {
        tracing::warn!("{} already exists, not overwriting", path);
        return;
    }

    let config = Config::default();
    match serde_yaml::to_string(&config) {
        Ok(yaml) => {
            if let Err(e) = std::fs::write(path, yaml) {
                tracing::error!("Failed to write {}: {}", path, e);
            } else {
                tracing::info!("Wrote default config to {}", path);
            }
        }
        Err(e) => {
            tracing::error!("Failed to serialize default config: {}", e);
        }
    }
}
