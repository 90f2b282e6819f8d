//! Application of worker results to [`AppState`].

use tokio::sync::mpsc;

use crate::logic::{refresh_news, request_news_page};
use crate::state::{AppState, CityResults, Modal, NewsRequest, NewsResults, SubmitResult};

/// What: Apply a city search result.
///
/// Inputs:
/// - `app`: Application state.
/// - `results`: Tagged result from the city worker.
///
/// Details:
/// - Results whose id is not the latest issued query are dropped.
/// - The highlight is reset to the first row when the list is non-empty.
pub fn handle_city_results(app: &mut AppState, results: CityResults) {
    if results.id != app.latest_query_id {
        tracing::debug!(
            id = results.id,
            latest = app.latest_query_id,
            "[Runtime] dropping stale city results"
        );
        return;
    }
    app.cities_loading = false;
    app.cities = results.items;
    app.city_list_state
        .select(if app.cities.is_empty() { None } else { Some(0) });
}

/// What: Apply a news page result.
///
/// Inputs:
/// - `app`: Application state.
/// - `results`: Tagged page, `None` when the fetch failed.
/// - `news_tx`: Used to refetch when the current page no longer exists.
///
/// Details:
/// - Stale ids are dropped.
/// - A failed fetch clears the list so the placeholder is shown.
/// - When the reported total no longer covers the current page, the page is moved to
///   the last one and fetched; the out-of-range items are discarded.
pub fn handle_news_results(
    app: &mut AppState,
    results: NewsResults,
    news_tx: &mpsc::UnboundedSender<NewsRequest>,
) {
    if results.id != app.latest_news_id {
        tracing::debug!(
            id = results.id,
            latest = app.latest_news_id,
            "[Runtime] dropping stale news page"
        );
        return;
    }
    app.news_loading = false;
    match results.page {
        Some(page) => {
            if app.pages.set_total_pages(page.total_pages) {
                tracing::debug!(
                    page = app.pages.page(),
                    total = app.pages.total_pages(),
                    "[Runtime] page out of range; refetching last page"
                );
                app.news.clear();
                app.news_scroll = 0;
                request_news_page(app, news_tx);
                return;
            }
            app.news = page.items;
        }
        None => app.news.clear(),
    }
}

/// What: Apply the outcome of a news submission.
///
/// Inputs:
/// - `app`: Application state.
/// - `result`: Outcome tagged with the submission id.
/// - `news_tx`: Used to refresh the feed after a successful post.
///
/// Details:
/// - Success: the form is cleared, the modal closes and the feed refreshes once. The
///   refresh also happens when the form was already dismissed, since the item exists.
/// - Failure: the form keeps its text and shows the fixed message for the failure kind.
/// - Outcomes for a form that is no longer the one that sent them leave the modal alone.
pub fn handle_submit_result(
    app: &mut AppState,
    result: SubmitResult,
    news_tx: &mpsc::UnboundedSender<NewsRequest>,
) {
    let owns_form =
        matches!(&app.modal, Modal::SubmitNews(form) if form.request_id == Some(result.id));
    match result.outcome {
        Ok(()) => {
            tracing::info!(id = result.id, "[Runtime] news submission accepted");
            if owns_form {
                if let Modal::SubmitNews(form) = &mut app.modal {
                    form.clear();
                }
                app.modal = Modal::None;
            }
            refresh_news(app, news_tx);
        }
        Err(e) => {
            tracing::warn!(id = result.id, error = %e, "[Runtime] news submission failed");
            if owns_form && let Modal::SubmitNews(form) = &mut app.modal {
                form.submitting = false;
                form.request_id = None;
                form.error = Some(e.user_message().to_string());
            }
        }
    }
}

/// Advance the spinner.
pub const fn handle_tick(app: &mut AppState) {
    app.spinner_frame = app.spinner_frame.wrapping_add(1);
}
