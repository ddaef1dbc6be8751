//! # Main Entry Point
//!
//! Initializes the bot:
//! - Domain: Configuration and Types
//! - Infrastructure: Matrix, Google Sheets, Health endpoint
//! - Application: Router, Search, Recipe cards, Session state
//! - Interface: Command Handlers
//!

mod application;
mod domain;
mod infrastructure;
mod interface;
mod strings;

use anyhow::{Context, Result};
use clap::Parser;
use matrix_sdk::{
    Client,
    config::SyncSettings,
    room::Room,
    ruma::events::room::{
        member::{MembershipState, StrippedRoomMemberEvent},
        message::{MessageType, SyncRoomMessageEvent},
    },
};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing_appender::non_blocking::WorkerGuard;

use crate::application::router::CommandRouter;
use crate::application::state::SessionStore;
use crate::domain::config::{AppConfig, DEFAULT_CONFIG_PATH};
use crate::infrastructure::health;
use crate::infrastructure::matrix::MatrixService;
use crate::infrastructure::sheets::SheetsClient;
use crate::strings::logs;

const DATA_DIR: &str = "data";
const SESSION_LOG: &str = "session.log";

#[derive(Debug, Parser)]
#[command(name = "coffee-bot", about = "Chat bot that answers with recipe cards from a spreadsheet")]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(long, short, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. Logging Setup
    let guard = init_logging()?;
    tracing::info!("{}", logs::STARTING);

    // 2. Load Configuration
    let mut config = AppConfig::load(&cli.config)?;
    config.apply_env(|key| std::env::var(key).ok())?;

    let missing = config.missing_credentials();
    if !missing.is_empty() {
        tracing::error!("{}", logs::missing_credentials(&missing));
        // flush the file log; exit skips destructors
        drop(guard);
        std::process::exit(1);
    }

    // 3. Spreadsheet
    let catalog = SheetsClient::connect(&config.services.sheets)
        .await
        .context("Failed to open the recipe spreadsheet")?;

    // 4. Health Endpoint
    let health_addr = format!("{}:{}", config.health.host, config.health.port);
    tokio::spawn(async move {
        if let Err(e) = health::serve(&health_addr).await {
            tracing::error!("Health endpoint stopped: {:#}", e);
        }
    });

    // 5. Matrix Setup
    let matrix = &config.services.matrix;
    let client = Client::builder()
        .homeserver_url(&matrix.homeserver)
        .build()
        .await?;

    client
        .matrix_auth()
        .login_username(&matrix.username, &matrix.password)
        .initial_device_display_name("coffee-bot")
        .send()
        .await
        .context("Matrix login failed")?;
    tracing::info!("{}", logs::logged_in(&matrix.username));

    if let Some(name) = &matrix.display_name
        && let Err(e) = client.account().set_display_name(Some(name.as_str())).await
    {
        tracing::warn!("{}", logs::set_display_name_fail(&e.to_string()));
    }

    // 6. Event Handlers
    let router = Arc::new(CommandRouter::new(
        config.reply.clone(),
        Arc::new(catalog),
        Arc::new(Mutex::new(SessionStore::new())),
    ));
    let start_time = std::time::SystemTime::now();

    client.add_event_handler(move |ev: SyncRoomMessageEvent, room: Room| {
        let router = router.clone();
        async move {
            let Some(original_msg) = ev.as_original() else {
                return;
            };

            // Ignore history replayed by the first sync
            let event_time = std::time::UNIX_EPOCH
                + std::time::Duration::from_millis(ev.origin_server_ts().get().into());
            if event_time < start_time {
                return;
            }
            if original_msg.sender == room.own_user_id() {
                return;
            }

            if let MessageType::Text(text_content) = &original_msg.content.msgtype {
                let body = &text_content.body;
                tracing::info!("Received message from {}: {}", original_msg.sender, body);

                let chat = MatrixService::new(room);
                if let Err(e) = router
                    .route(&chat, body, original_msg.sender.as_str())
                    .await
                {
                    tracing::error!("Failed to route message: {:#}", e);
                }
            }
        }
    });

    client.add_event_handler(|ev: StrippedRoomMemberEvent, room: Room| async move {
        if ev.content.membership == MembershipState::Invite {
            tracing::info!("{}", logs::invite_received(room.room_id().as_str()));
            if let Err(e) = room.join().await {
                tracing::warn!(
                    "{}",
                    logs::invite_join_fail(room.room_id().as_str(), &e.to_string())
                );
            }
        }
    });

    // 7. Sync Loop
    tracing::info!("{}", logs::SYNC_LOOP_START);
    if let Err(e) = client.sync(SyncSettings::default()).await {
        tracing::error!("{}", logs::sync_loop_fail(&e.to_string()));
        return Err(e.into());
    }

    drop(guard);
    Ok(())
}

/// Console output plus a fresh `data/session.log` for every run.
fn init_logging() -> Result<WorkerGuard> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let data_dir = Path::new(DATA_DIR);
    if !data_dir.exists() {
        fs::create_dir_all(data_dir).context("Failed to create data directory")?;
    }

    // Clear previous session log
    let log_path = data_dir.join(SESSION_LOG);
    if log_path.exists() {
        let _ = fs::remove_file(&log_path);
    }

    let file_appender = tracing_appender::rolling::never(DATA_DIR, SESSION_LOG);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(
            "info,matrix_sdk=warn,matrix_sdk_base=warn,matrix_sdk_crypto=error,ruma=warn,hyper=warn,reqwest=warn",
        )
    });

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false);
    let console_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stdout);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    Ok(guard)
}
