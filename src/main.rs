//! Chat transcript viewer - Entry Point

use chatv::model::error::AppError;
use chatv::model::{Message, MessageId};
use chatv::state::{filter_messages, filter_starred, SearchQuery, StarredIds};
use chatv::store::StarStore;
use chatv::view::OutputFormat;
use clap::Parser;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing::{info, warn};

/// Chat transcript viewer - parse, search, and star exported chat messages
#[derive(Parser, Debug)]
#[command(name = "chatv")]
#[command(version)]
#[command(about = "Parse, search, and star messages from an exported chat transcript")]
pub struct Args {
    /// Path to transcript file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Show only messages whose sender or text contains QUERY (case-insensitive)
    #[arg(short, long, value_name = "QUERY")]
    pub search: Option<String>,

    /// Star a message by id (repeatable)
    #[arg(long, value_name = "ID", value_parser = clap::value_parser!(u64).range(1..))]
    pub star: Vec<u64>,

    /// Remove the star from a message by id (repeatable)
    #[arg(long, value_name = "ID", value_parser = clap::value_parser!(u64).range(1..))]
    pub unstar: Vec<u64>,

    /// Show only starred messages
    #[arg(long)]
    pub starred: bool,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    run(args)?;
    Ok(())
}

fn run(args: Args) -> Result<(), AppError> {
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = chatv::config::load_config_with_precedence(args.config.clone())?;
        let merged = chatv::config::merge_config(config_file);
        let with_env = chatv::config::apply_env_overrides(merged);
        let starred_override = if args.starred { Some(true) } else { None };
        chatv::config::apply_cli_overrides(with_env, args.format, starred_override)
    };

    chatv::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let source = chatv::source::detect_input_source(args.file.clone())?;
    let text = source.read_text()?;

    let (messages, stats) = chatv::parse_with_stats(&text);
    info!(
        messages = messages.len(),
        lines = stats.lines,
        discarded = stats.discarded,
        "Transcript parsed"
    );

    let store = StarStore::new(&config.star_store_path);
    let starred = if args.star.is_empty() && args.unstar.is_empty() {
        store.load()
    } else {
        let mut ids = store.load();
        apply_star_changes(&mut ids, &messages, &args.star, &args.unstar);
        store.save(&ids)?;
        ids
    };

    let query = args.search.and_then(SearchQuery::new);
    let mut visible = filter_messages(&messages, query.as_ref());
    if config.starred_only {
        visible = filter_starred(visible, &starred);
    }

    info!(
        shown = visible.len(),
        format = %config.format,
        "Rendering messages"
    );

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    chatv::view::render(&mut out, &visible, &starred, config.format)?;
    out.flush()?;

    Ok(())
}

/// Apply `--star`/`--unstar` ids that exist in this transcript.
///
/// Ids beyond the last message are skipped with a warning.
fn apply_star_changes(ids: &mut StarredIds, messages: &[Message], star: &[u64], unstar: &[u64]) {
    let known = |raw: u64| -> Option<MessageId> {
        let id = MessageId::new(raw).ok()?;
        if raw <= messages.len() as u64 {
            Some(id)
        } else {
            warn!(id = raw, messages = messages.len(), "No message with this id; skipping");
            None
        }
    };

    for id in star.iter().copied().filter_map(&known) {
        ids.star(id);
    }
    for id in unstar.iter().copied().filter_map(&known) {
        ids.unstar(id);
    }
}
