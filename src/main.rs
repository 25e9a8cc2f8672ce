// src/main.rs
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use clap::Parser;
use tokio::io::BufReader;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use pdf_chat::config::Config;
use pdf_chat::services::backend::HttpBackend;
use pdf_chat::services::chat_page::ChatPage;
use pdf_chat::services::notifications::Notifier;
use pdf_chat::ui::render::ColorMode;
use pdf_chat::ui::session;

/// Chat with a PDF - upload a document and ask questions about it
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// PDF to upload right away
    pdf: Option<PathBuf>,

    /// Backend base URL (overrides PDF_CHAT_SERVER_URL)
    #[arg(long)]
    server_url: Option<String>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Log filter, e.g. "debug" or "pdf_chat=info" (overrides RUST_LOG)
    #[arg(long)]
    log_level: Option<String>,
}

fn init_tracing(log_level: Option<&str>) {
    let filter = match log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    let config = Config::resolve(cli.server_url)?;
    debug!(server_url = %config.server_url, "starting");

    let backend = Arc::new(HttpBackend::new(config)?);
    let (notifier, events) = Notifier::channel();
    let page = ChatPage::new(backend, notifier);

    session::run(
        page,
        events,
        BufReader::new(tokio::io::stdin()),
        Arc::new(Mutex::new(std::io::stdout())),
        ColorMode(!cli.no_color),
        cli.pdf,
    )
    .await?;
    Ok(())
}
