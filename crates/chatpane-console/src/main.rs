//! chatpane: terminal chat client for a model server.
//!
//! Reads lines from stdin, sends them through a `SessionController`, and
//! prints the transcript and syslog as they change.

mod commands;
mod printer;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use chatpane_common::{ChatpaneError, ConfigError, EventBus, SessionEvent};
use chatpane_config::ChatpaneConfig;
use chatpane_session::{ControllerConfig, EventSink, HttpTransport, ModelChoice, SessionController};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, error, info, warn};

use crate::commands::{Command, HELP};

#[derive(Parser)]
#[command(name = "chatpane", about = "Terminal chat client for a model server")]
struct Args {
    /// Config file (defaults to the platform config directory).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Model to start with.
    #[arg(short, long)]
    model: Option<String>,

    /// Response deadline in milliseconds.
    #[arg(long)]
    timeout_ms: Option<u32>,

    /// Server base URL, e.g. http://127.0.0.1:5000
    #[arg(long)]
    base_url: Option<String>,
}

fn load(args: &Args) -> Result<ChatpaneConfig, ConfigError> {
    let mut config = match &args.config {
        Some(path) => chatpane_config::load_from_path(path)?,
        None => chatpane_config::load_default()?,
    };

    if let Some(model) = &args.model {
        config.models.default = model.clone();
        if !config.models.available.contains(model) {
            config.models.available.push(model.clone());
        }
    }
    if let Some(timeout_ms) = args.timeout_ms {
        config.endpoint.timeout_ms = timeout_ms;
    }
    if let Some(base_url) = &args.base_url {
        config.endpoint.base_url = base_url.clone();
    }

    chatpane_config::validation::validate(&config)?;
    Ok(config)
}

fn init_tracing(config: Option<&ChatpaneConfig>) {
    let level = config
        .map(|c| c.logging.level)
        .unwrap_or_default()
        .as_filter();

    let default_filter =
        format!("chatpane_console={level},chatpane_session={level},chatpane_config={level}");

    // Logs go to stderr so they do not interleave with the transcript.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    let config = load(&args);
    init_tracing(config.as_ref().ok());

    let result = match config {
        Ok(config) => run(config).await,
        Err(e) => Err(e.into()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("chatpane: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: ChatpaneConfig) -> Result<(), ChatpaneError> {
    let transport = HttpTransport::from_config(&config.endpoint)
        .map_err(|e| ChatpaneError::Other(e.to_string()))?;
    info!(url = %transport.exchange_url(), model = %config.models.default, "chatpane starting");

    let bus = Arc::new(EventBus::new(256));
    let printer = tokio::spawn(printer::run(bus.subscribe()));

    let models = ModelChoice::new(config.models.default.clone());
    let session = Arc::new(SessionController::new(
        ControllerConfig::from(&config),
        Arc::new(transport),
        Arc::new(models.clone()),
        Arc::new(EventSink::new(bus.clone())),
    ));
    session.render_all();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => None,
        };
        let Some(line) = line else { break };

        match commands::parse(&line) {
            Command::Submit(text) => match session.submit(text) {
                Ok(handle) => {
                    tokio::spawn(async move {
                        let id = handle.id();
                        let settlement = handle.settled().await;
                        debug!(request_id = %id, ?settlement, "exchange settled");
                    });
                }
                Err(e) => debug!(error = %e, "submission ignored"),
            },
            Command::Model(name) => {
                if config.models.available.contains(&name) {
                    models.select(name.clone());
                    println!("  model: {name}");
                } else {
                    println!(
                        "  unknown model {name}; available: {}",
                        config.models.available.join(", ")
                    );
                }
            }
            Command::Models => {
                for name in &config.models.available {
                    println!("  {name}");
                }
            }
            Command::Knowledge(text) => {
                let session = session.clone();
                tokio::spawn(async move {
                    if let Err(e) = session.submit_knowledge(&text).await {
                        warn!(error = %e, "knowledge submission failed");
                    }
                });
            }
            Command::Help => println!("{HELP}"),
            Command::Quit => break,
            Command::Invalid(reason) => println!("  {reason}"),
        }
    }

    info!(session = %session.id(), "chatpane shutting down");
    bus.publish(SessionEvent::Shutdown);
    printer
        .await
        .map_err(|e| ChatpaneError::Other(e.to_string()))?;
    Ok(())
}
