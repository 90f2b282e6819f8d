use tokio::sync::mpsc;

use crate::sources::ApiClient;
use crate::state::{SubmitRequest, SubmitResult};

/// Spawn the submission worker; one task per request, outcome echoed with its id.
pub fn spawn_submit_worker(
    api: ApiClient,
    mut req_rx: mpsc::UnboundedReceiver<SubmitRequest>,
    result_tx: mpsc::UnboundedSender<SubmitResult>,
) {
    tokio::spawn(async move {
        while let Some(req) = req_rx.recv().await {
            let api = api.clone();
            let tx = result_tx.clone();
            tokio::spawn(async move {
                let outcome = api.submit_news(&req.body).await;
                let _ = tx.send(SubmitResult {
                    id: req.id,
                    outcome,
                });
            });
        }
    });
}
