//! Command-line news printing.

use localnews::sources::ApiClient;
use localnews::state::{Scope, SelectedCity};
use localnews::theme::Settings;

use crate::args::utils::block_on_fresh_runtime;

/// What: Print one page of news for the startup scope and exit.
///
/// Inputs:
/// - `settings`: Resolved settings (base URL, page size, sort).
/// - `city`: Startup scope; `None` or a `GL` state prints the Global feed.
/// - `page`: Zero-based page index.
///
/// Output:
/// - Exits 0 after printing, 1 when the request fails.
///
/// Details:
/// - Prints the section heading, each item's title and indented body, then the
///   `page X of Y` footer.
pub fn handle_news(settings: &Settings, city: Option<&SelectedCity>, page: u32) -> ! {
    let scope = Scope::from_selection(city);
    tracing::info!(scope = ?scope, page, "News mode requested from CLI");

    let api = match ApiClient::from_settings(settings) {
        Ok(api) => api,
        Err(e) => {
            eprintln!("localnews: {e}");
            std::process::exit(1);
        }
    };
    let req_scope = scope.clone();
    let res = block_on_fresh_runtime(async move {
        api.fetch_news_page(&req_scope, page)
            .await
            .map_err(|e| e.to_string())
    });
    let news = match res {
        Ok(Ok(news)) => news,
        Ok(Err(e)) | Err(e) => {
            eprintln!("localnews: failed to fetch news: {e}");
            tracing::error!(error = %e, "CLI news fetch failed");
            std::process::exit(1);
        }
    };

    println!("{}", scope.heading());
    println!();
    if news.items.is_empty() {
        println!("No news available for this location.");
    }
    for item in &news.items {
        println!("{}", item.title);
        for line in item.content.lines() {
            println!("    {line}");
        }
        println!();
    }
    println!("{}", page_footer(page, news.total_pages));

    tracing::info!(count = news.items.len(), "Displayed news items");
    std::process::exit(0);
}

/// One-based `page X of Y` line; a zero total reads as one page.
fn page_footer(page: u32, total_pages: u32) -> String {
    format!(
        "page {} of {}",
        page.saturating_add(1),
        total_pages.max(1)
    )
}
