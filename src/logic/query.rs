use tokio::sync::mpsc;

use crate::state::{AppState, CityQuery, NewsRequest};

/// What: Send the current search text to the city worker with a fresh id.
///
/// Inputs:
/// - `app`: Mutable application state; updates `next_query_id` and `latest_query_id`
/// - `query_tx`: Channel to send the `CityQuery`
///
/// Output:
/// - Sends a `CityQuery` carrying the current input; marks the dropdown as loading.
///
/// Details:
/// - The id allows correlating responses so stale results can be discarded.
pub fn send_city_query(app: &mut AppState, query_tx: &mpsc::UnboundedSender<CityQuery>) {
    let id = app.next_query_id;
    app.next_query_id += 1;
    app.latest_query_id = id;
    app.cities_loading = true;
    let _ = query_tx.send(CityQuery {
        id,
        text: app.input.clone(),
    });
}

/// What: Request the current page of the current scope from the news worker.
///
/// Inputs:
/// - `app`: Mutable application state; updates `next_news_id` and `latest_news_id`
/// - `news_tx`: Channel to send the `NewsRequest`
///
/// Output:
/// - Sends a `NewsRequest` for `app.pages.page()`; marks the feed as loading.
///
/// Details:
/// - Responses whose id differs from `latest_news_id` are dropped on arrival, so only
///   the most recent request for the current scope is ever displayed.
pub fn request_news_page(app: &mut AppState, news_tx: &mpsc::UnboundedSender<NewsRequest>) {
    let id = app.next_news_id;
    app.next_news_id += 1;
    app.latest_news_id = id;
    app.news_loading = true;
    let scope = app.scope();
    tracing::debug!(id, page = app.pages.page(), ?scope, "requesting news page");
    let _ = news_tx.send(NewsRequest {
        id,
        scope,
        page: app.pages.page(),
    });
}
