use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use bank_messages::config::Config;
use bank_messages::logging::init_tracing;
use bank_messages::model::{MessageId, SortOrder};
use bank_messages::render::{render_json, render_text};
use bank_messages::repository::InMemoryRepository;
use bank_messages::view::MessageStore;

#[derive(Parser)]
#[command(name = "bank-messages")]
#[command(about = "Load, filter and sort bank messages")]
struct Cli {
    /// Config file (defaults to ~/.config/bank-messages/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Simulated fetch latency in milliseconds
    #[arg(long)]
    latency_ms: Option<u64>,

    /// Sort order: read-first or unread-first
    #[arg(long)]
    sort: Option<SortOrder>,

    /// Case-insensitive title filter
    #[arg(long)]
    filter: Option<String>,

    /// Mark a message as read (repeatable)
    #[arg(long = "mark-read", value_name = "ID")]
    mark_read: Vec<MessageId>,

    /// Delete a message (repeatable)
    #[arg(long, value_name = "ID")]
    delete: Vec<MessageId>,

    /// Print the view as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading configuration")?;
    if let Some(latency_ms) = cli.latency_ms {
        config.repository.latency_ms = latency_ms;
    }
    config.validate().context("validating configuration")?;

    let repository =
        InMemoryRepository::from_config(&config.repository).context("loading messages")?;
    let mut store = MessageStore::with_sort_order(repository, config.view.default_sort);
    store.subscribe(|state| {
        tracing::debug!(
            phase = ?state.phase,
            visible = state.visible_messages.len(),
            unread = state.unread_count,
            "View updated"
        );
    });

    store.load();
    let interrupted = tokio::select! {
        _ = store.settle() => false,
        _ = tokio::signal::ctrl_c() => true,
    };
    if interrupted {
        tracing::info!("Interrupted while loading");
        store.shutdown();
        return Ok(());
    }

    for id in cli.mark_read {
        store.mark_as_read(id);
    }
    for id in cli.delete {
        store.delete(id);
    }
    if let Some(sort) = cli.sort {
        store.sort(sort);
    }
    if let Some(filter) = cli.filter {
        store.filter(filter);
    }

    let mut stdout = io::stdout().lock();
    if cli.json {
        render_json(store.state(), &mut stdout)?;
    } else {
        render_text(store.state(), &mut stdout)?;
    }
    Ok(())
}
