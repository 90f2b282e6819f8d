use tokio::sync::mpsc;

use crate::sources::ApiClient;
use crate::state::{NewsRequest, NewsResults};

/// What: Spawn the news page worker.
///
/// Inputs:
/// - `api`: Shared API client.
/// - `req_rx`: Incoming tagged page requests.
/// - `result_tx`: Outgoing tagged pages (`None` on failure).
pub fn spawn_news_worker(
    api: ApiClient,
    mut req_rx: mpsc::UnboundedReceiver<NewsRequest>,
    result_tx: mpsc::UnboundedSender<NewsResults>,
) {
    tokio::spawn(async move {
        while let Some(req) = req_rx.recv().await {
            let api = api.clone();
            let tx = result_tx.clone();
            tokio::spawn(async move {
                let page = match api.fetch_news_page(&req.scope, req.page).await {
                    Ok(page) => Some(page),
                    Err(e) => {
                        tracing::warn!(
                            id = req.id,
                            scope = ?req.scope,
                            page = req.page,
                            error = %e,
                            "[Worker] news fetch failed"
                        );
                        None
                    }
                };
                let _ = tx.send(NewsResults { id: req.id, page });
            });
        }
        tracing::debug!("[Worker] news request channel closed");
    });
}
