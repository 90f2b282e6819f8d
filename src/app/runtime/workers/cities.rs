use tokio::sync::mpsc;

use crate::sources::ApiClient;
use crate::state::{CityQuery, CityResults};

/// What: Spawn the city search worker.
///
/// Inputs:
/// - `api`: Shared API client.
/// - `query_rx`: Incoming tagged queries.
/// - `result_tx`: Outgoing tagged results.
///
/// Details:
/// - Each query runs in its own task, so a slow response never blocks newer ones;
///   the event loop drops results that are no longer the latest.
/// - A failure is logged and reported as an empty list.
pub fn spawn_city_worker(
    api: ApiClient,
    mut query_rx: mpsc::UnboundedReceiver<CityQuery>,
    result_tx: mpsc::UnboundedSender<CityResults>,
) {
    tokio::spawn(async move {
        while let Some(query) = query_rx.recv().await {
            let api = api.clone();
            let tx = result_tx.clone();
            tokio::spawn(async move {
                let items = match api.search_cities(&query.text).await {
                    Ok(items) => items,
                    Err(e) => {
                        tracing::warn!(
                            id = query.id,
                            query = %query.text,
                            error = %e,
                            "[Worker] city search failed"
                        );
                        Vec::new()
                    }
                };
                let _ = tx.send(CityResults {
                    id: query.id,
                    items,
                });
            });
        }
        tracing::debug!("[Worker] city query channel closed");
    });
}
