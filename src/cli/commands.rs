use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use tracing::warn;

use super::render::{
    render_history, render_prospects, render_segments, render_sources, render_stage_board,
};
use crate::export::{copy_prospects, write_csv};
use crate::filters::{apply_filters, fuzzy_rank, parse_filter};
use crate::geo::{DEFAULT_GEOLOCATION_WAIT, FixedLocator, acquire_coordinates};
use crate::history::{FileStore, HistoryStore};
use crate::models::{Coordinates, MARKET_SEGMENTS, SearchRequest, find_segment};
use crate::pipeline::{StageBoard, search_prospects};
use crate::retrieval::GeminiClient;
use crate::utils::{ServiceSettings, coordinates_from_env, get_data_dir, init_logging};

#[derive(Parser)]
#[command(name = "prospect-finder")]
#[command(version)]
#[command(about = "Find verified B2B prospects with grounded maps and web search", long_about = None)]
pub struct Cli {
    /// Log pipeline details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a territory for prospects
    Search(SearchArgs),
    /// List market segments and their sub-segments
    Segments,
    /// Browse or edit saved searches
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
}

#[derive(Args)]
pub struct SearchArgs {
    /// City, state, zip code or region ("Current Location" uses coordinates)
    pub location: String,

    /// Market segment name or id
    #[arg(short, long)]
    pub segment: Option<String>,

    /// Sub-segment within the market segment
    #[arg(long)]
    pub sub_segment: Option<String>,

    /// Latitude for location bias
    #[arg(long, requires = "lng", allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Longitude for location bias
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub lng: Option<f64>,

    /// Write results to a CSV file
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,

    /// Copy results to the clipboard as tab-separated rows
    #[arg(long)]
    pub copy: bool,
}

#[derive(Subcommand)]
pub enum HistoryAction {
    /// List saved searches, newest first
    List {
        /// Field filter, e.g. `location:baltimore segment:healthcare since:2025-01-01`
        #[arg(long)]
        filter: Option<String>,
        /// Fuzzy match against location and segment
        #[arg(long)]
        fuzzy: Option<String>,
    },
    /// Show the prospects of one saved search
    Show { id: String },
    /// Delete one saved search
    Delete { id: String },
    /// Delete all saved searches
    Clear,
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Search(args)) => run_search(args).await?,
        Some(Commands::Segments) => println!("{}", render_segments(MARKET_SEGMENTS)),
        Some(Commands::History { action }) => run_history(action)?,
        None => println!("Use --help for usage information"),
    }

    Ok(())
}

fn history_store() -> Result<HistoryStore<FileStore>> {
    Ok(HistoryStore::new(FileStore::new(get_data_dir()?)))
}

/// Canonical segment name for a known id or name; unknown values pass through
fn resolve_segment(segment: Option<&str>, sub_segment: Option<&str>) -> Option<String> {
    let segment = segment?.trim();
    let Some(known) = find_segment(segment) else {
        warn!(segment, "Unknown market segment, searching with it as given");
        return Some(segment.to_string());
    };
    if let Some(sub) = sub_segment.filter(|s| !known.has_sub_segment(s)) {
        warn!(segment = known.name, sub_segment = sub, "Sub-segment is not part of this segment");
    }
    Some(known.name.to_string())
}

async fn run_search(args: SearchArgs) -> Result<()> {
    // Reject bad input before touching configuration or the network
    let segment = resolve_segment(args.segment.as_deref(), args.sub_segment.as_deref());
    let request = SearchRequest::new(
        &args.location,
        segment.as_deref(),
        args.sub_segment.as_deref(),
        None,
    )?;
    let explicit = match (args.lat, args.lng) {
        (Some(lat), Some(lng)) => Some(Coordinates::new(lat, lng)?),
        _ => None,
    };

    let configured = match explicit {
        Some(coordinates) => Some(coordinates),
        None => coordinates_from_env()?,
    };
    let coordinates =
        acquire_coordinates(&FixedLocator::new(configured), DEFAULT_GEOLOCATION_WAIT).await;
    if request.uses_current_location() && coordinates.is_none() {
        warn!("No coordinates available for \"Current Location\"; searching without a location bias");
    }
    let request = request.with_coordinates(coordinates);

    let settings = ServiceSettings::from_env()?;
    let client = GeminiClient::new(&settings.api_base, &settings.model, &settings.api_key)
        .context("Failed to create retrieval client")?;

    let mut board = StageBoard::new();
    board.begin();
    eprintln!("Searching {}...", request.label());

    let result = match search_prospects(&client, &request).await {
        Ok(result) => result,
        Err(e) => {
            board.fail(e.implicated_stage());
            eprintln!("{}", render_stage_board(&board));
            bail!("{} (failed at: {})", e, e.implicated_stage());
        }
    };
    board.succeed();

    println!("{}", render_stage_board(&board));
    println!();
    println!("Found {} prospect(s) for {}", result.len(), request.label());
    println!("{}", render_prospects(&result.prospects));
    println!();
    println!("{}", render_sources(&result));

    match history_store() {
        Ok(store) => {
            store.record(&request, &result);
        }
        Err(e) => warn!(error = %format!("{:#}", e), "History unavailable, search not saved"),
    }

    if let Some(path) = &args.csv {
        write_csv(path, &result.prospects)?;
        println!("Wrote {} row(s) to {}", result.len(), path.display());
    }
    if args.copy {
        let copied = copy_prospects(&result.prospects)?;
        println!("Copied {} row(s) to clipboard", copied);
    }

    Ok(())
}

fn run_history(action: HistoryAction) -> Result<()> {
    let store = history_store()?;

    match action {
        HistoryAction::List { filter, fuzzy } => {
            let mut entries = store.load();
            if let Some(expr) = filter.as_deref() {
                let parsed = parse_filter(expr).context("Invalid history filter")?;
                entries = apply_filters(entries, &parsed);
            }
            if let Some(query) = fuzzy.as_deref() {
                entries = fuzzy_rank(entries, query);
            }

            if entries.is_empty() {
                println!("No saved searches");
            } else {
                println!("{}", render_history(&entries, &Utc::now()));
            }
        }
        HistoryAction::Show { id } => {
            let Some(saved) = store.find(&id) else {
                bail!("No saved search with id {}", id);
            };
            println!("{} ({} result(s))", saved.params.label(), saved.result_count);
            println!("{}", render_prospects(&saved.results.prospects));
            println!();
            println!("{}", render_sources(&saved.results));
        }
        HistoryAction::Delete { id } => {
            let before = store.load().len();
            let after = store.remove(&id).len();
            if after == before {
                println!("No saved search with id {}", id);
            } else {
                println!("Deleted {}", id);
            }
        }
        HistoryAction::Clear => {
            store.clear();
            println!("History cleared");
        }
    }

    Ok(())
}
