//! Command-line city search.

use localnews::sources::ApiClient;
use localnews::theme::Settings;

use crate::args::utils::block_on_fresh_runtime;

/// What: Print the normalized city list for `query` and exit.
///
/// Inputs:
/// - `settings`: Resolved settings (base URL, timeouts, Global row policy).
/// - `query`: Search text; empty lists every city through the count endpoint.
///
/// Output:
/// - Exits 0 after printing, 1 when the client cannot be built or the request fails.
///
/// Details:
/// - Rows are printed as `Name, CODE (N news)` in the same order as the dropdown.
pub fn handle_search(settings: &Settings, query: &str) -> ! {
    tracing::info!(query = %query, "Search mode requested from CLI");

    let api = match ApiClient::from_settings(settings) {
        Ok(api) => api,
        Err(e) => {
            eprintln!("localnews: {e}");
            std::process::exit(1);
        }
    };
    let owned = query.to_string();
    let res = block_on_fresh_runtime(async move {
        api.search_cities(&owned).await.map_err(|e| e.to_string())
    });
    let cities = match res {
        Ok(Ok(cities)) => cities,
        Ok(Err(e)) | Err(e) => {
            eprintln!("localnews: city search failed: {e}");
            tracing::error!(error = %e, "CLI city search failed");
            std::process::exit(1);
        }
    };

    if cities.is_empty() {
        println!("No results found.");
    }
    for c in &cities {
        println!("{}, {} ({} news)", c.name, c.state_code, c.news_count);
    }
    tracing::info!(count = cities.len(), "Displayed city search results");
    std::process::exit(0);
}
