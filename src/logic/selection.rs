use tokio::sync::mpsc;

use super::query::{request_news_page, send_city_query};
use crate::state::{AppState, CityQuery, Focus, NewsRequest, SelectedCity};

/// Pagination action requested by a key or a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNav {
    /// One page back.
    Prev,
    /// One page forward.
    Next,
    /// First page.
    First,
    /// Last page.
    Last,
    /// Specific zero-based page.
    Index(u32),
}

/// What: Start a fresh feed for the current scope, as if the list were remounted.
///
/// Inputs:
/// - `app`: Application state
/// - `news_tx`: Channel to the news worker
///
/// Output:
/// - Bumps `refresh_key`, resets paging to page 0, clears the shown items, and issues
///   the request for page 0.
pub fn refresh_news(app: &mut AppState, news_tx: &mpsc::UnboundedSender<NewsRequest>) {
    app.refresh_key = app.refresh_key.wrapping_add(1);
    app.pages.reset();
    app.news.clear();
    app.news_scroll = 0;
    request_news_page(app, news_tx);
}

/// What: Apply a city picked from the dropdown.
///
/// Inputs:
/// - `app`: Application state
/// - `city`: Picked `(name, state_code)` pair
/// - `query_tx`: Channel to the city worker
/// - `news_tx`: Channel to the news worker
///
/// Output:
/// - Selection stored, query cleared, dropdown closed, feed refreshed for the new scope.
///
/// Details:
/// - Clearing the query is itself a query change, so the empty-query list is refetched.
pub fn select_city(
    app: &mut AppState,
    city: SelectedCity,
    query_tx: &mpsc::UnboundedSender<CityQuery>,
    news_tx: &mpsc::UnboundedSender<NewsRequest>,
) {
    tracing::info!(city = %city.name, state = %city.state_code, "city selected");
    app.selected_city = Some(city);
    app.input.clear();
    app.dropdown_open = false;
    app.city_list_state.select(None);
    send_city_query(app, query_tx);
    refresh_news(app, news_tx);
}

/// What: Pick the highlighted dropdown row, if there is one.
///
/// Output:
/// - `true` when a city was selected.
pub fn select_highlighted_city(
    app: &mut AppState,
    query_tx: &mpsc::UnboundedSender<CityQuery>,
    news_tx: &mpsc::UnboundedSender<NewsRequest>,
) -> bool {
    let Some(city) = app.highlighted_city().map(crate::state::City::to_selection) else {
        return false;
    };
    select_city(app, city, query_tx, news_tx);
    true
}

/// What: Focus the search box and show the dropdown.
///
/// Details:
/// - With an empty query the full count list is refetched, mirroring focus on an empty box.
pub fn open_dropdown(app: &mut AppState, query_tx: &mpsc::UnboundedSender<CityQuery>) {
    app.focus = Focus::Search;
    app.dropdown_open = true;
    if app.input.trim().is_empty() {
        send_city_query(app, query_tx);
    }
}

/// Hide the dropdown without changing the query.
pub const fn close_dropdown(app: &mut AppState) {
    app.dropdown_open = false;
}

/// What: Record an edit to the search text and query for it.
///
/// Details:
/// - Every change is sent, including a change to the empty string; stale replies are
///   dropped by id when they arrive.
pub fn search_input_changed(app: &mut AppState, query_tx: &mpsc::UnboundedSender<CityQuery>) {
    app.dropdown_open = true;
    app.city_list_state.select(None);
    send_city_query(app, query_tx);
}

/// What: Move the dropdown highlight by `delta`, clamped to the list.
pub fn move_city_highlight(app: &mut AppState, delta: isize) {
    if app.cities.is_empty() {
        app.city_list_state.select(None);
        return;
    }
    let last = app.cities.len() - 1;
    let next = match app.city_list_state.selected() {
        None if delta > 0 => 0,
        None => last,
        Some(cur) => cur.saturating_add_signed(delta).min(last),
    };
    app.city_list_state.select(Some(next));
}

/// What: Navigate the feed's pagination and fetch the new page.
///
/// Output:
/// - `true` when the page changed; the view is scrolled back to the top.
///
/// Details:
/// - Requests outside `0..total_pages` or for the current page are ignored.
pub fn navigate_page(
    app: &mut AppState,
    nav: PageNav,
    news_tx: &mpsc::UnboundedSender<NewsRequest>,
) -> bool {
    let changed = match nav {
        PageNav::Prev => app.pages.prev(),
        PageNav::Next => app.pages.next(),
        PageNav::First => app.pages.first(),
        PageNav::Last => app.pages.last(),
        PageNav::Index(i) => app.pages.go_to(i),
    };
    if changed {
        app.news_scroll = 0;
        request_news_page(app, news_tx);
    }
    changed
}
