//! Command-line argument definition and processing.

use clap::Parser;
use localnews::state::SelectedCity;
use localnews::theme::Settings;

/// localnews - browse and submit local news from the terminal
#[derive(Parser, Debug, Default)]
#[command(name = "localnews")]
#[command(version)]
#[command(about = "Browse and submit local news from the terminal", long_about = None)]
pub struct Args {
    /// Override the API base URL (e.g. <http://localhost:8080>)
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// City to open on startup (requires --state)
    #[arg(long, value_name = "NAME", requires = "state")]
    pub city: Option<String>,

    /// State code of the startup city; GL selects the Global feed (requires --city)
    #[arg(long, value_name = "CODE", requires = "city")]
    pub state: Option<String>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Print one page of news for the startup scope and exit
    #[arg(long)]
    pub news: bool,

    /// Zero-based page printed by --news
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub page: u32,

    /// Print the city list for QUERY and exit (empty string lists all cities)
    #[arg(short, long, value_name = "QUERY")]
    pub search: Option<String>,
}

/// What: Handle the print-and-exit modes before the TUI starts.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
/// - `settings`: Settings with CLI overrides already applied.
/// - `initial_city`: Startup scope from `--city`/`--state`.
///
/// Output:
/// - Returns only when no early-exit flag was given.
///
/// Details:
/// - `--search` wins over `--news` when both are present.
/// - `--page` without `--news` is ignored with a warning.
pub fn process_args(args: &Args, settings: &Settings, initial_city: Option<&SelectedCity>) {
    use crate::args::{news, search};

    // Handle command-line search mode
    if let Some(query) = &args.search {
        search::handle_search(settings, query);
    }

    // Handle news print mode
    if args.news {
        news::handle_news(settings, initial_city, args.page);
    }

    if args.page != 0 {
        tracing::warn!(page = args.page, "--page has no effect without --news");
    }
}
