//! scrivi - a terminal writing pad backed by a text analysis service
//!
//! This is the binary entry point: argument parsing, configuration, and the
//! choice between the TUI and headless mode.

mod headless;

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Parser;
use scrivi_app::config::{self, Settings};
use scrivi_app::AppState;
use scrivi_client::HttpAnalysisClient;
use scrivi_core::prelude::*;

/// scrivi - write a draft, then ask the analysis service what it sounds like
#[derive(Parser, Debug)]
#[command(name = "scrivi")]
#[command(about = "A terminal writing pad that sends drafts to a text analysis service", long_about = None)]
struct Args {
    /// Analysis service base URL (overrides config and environment)
    #[arg(short, long, value_name = "URL")]
    url: Option<String>,

    /// Config file path
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Initial draft (TUI) or input text (headless)
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Run one analysis and print NDJSON events (no TUI)
    #[arg(long)]
    headless: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    let args = Args::parse();

    color_eyre::install()?;
    scrivi_core::logging::init()?;

    let settings = match args.config.as_deref() {
        Some(path) => config::load_settings(path),
        None => config::default_config_path()
            .map(|path| config::load_settings(&path))
            .unwrap_or_default(),
    };

    let url = config::resolve_service_url(args.url.as_deref(), &settings)?;
    info!("Using analysis service at {}", url);

    let client = HttpAnalysisClient::new(&url, settings.service.timeout())?;
    let draft = initial_draft(args.file.as_deref(), args.headless)?;
    let state = new_state(settings, url.as_str(), draft);

    if args.headless {
        if !headless::runner::run_headless(state, client).await? {
            std::process::exit(1);
        }
        Ok(())
    } else {
        Ok(scrivi_tui::run(state, client).await?)
    }
}

fn new_state(settings: Settings, service_url: &str, draft: Option<String>) -> AppState {
    let state = AppState::with_settings(settings, service_url);
    match draft {
        Some(text) => state.with_draft(text),
        None => state,
    }
}

/// Draft text from `--file`, or stdin in headless mode
fn initial_draft(file: Option<&Path>, headless: bool) -> Result<Option<String>> {
    match file {
        Some(path) => std::fs::read_to_string(path).map(Some).map_err(|e| {
            warn!("Failed to read {}: {}", path.display(), e);
            Error::draft_unreadable(path)
        }),
        None if headless => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read draft from stdin")?;
            Ok(Some(text))
        }
        None => Ok(None),
    }
}
