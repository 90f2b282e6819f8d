use tracing::{info, warn};

use super::ApiClient;
use crate::state::{NewsSubmission, SubmitError, SubmitOutcome};

impl ApiClient {
    /// What: Post a news item.
    ///
    /// Inputs:
    /// - `body`: Title and content, sent as JSON.
    ///
    /// Output:
    /// - `Ok(())` on any 2xx status; the response body is not read.
    /// - `Err(SubmitError::Status)` for other statuses, `Err(SubmitError::Transport)` when
    ///   the request did not complete.
    pub async fn submit_news(&self, body: &NewsSubmission) -> SubmitOutcome {
        let url = self.endpoint("/api/news", &[]);
        let resp = self
            .http
            .post(url.clone())
            .json(body)
            .send()
            .await
            .map_err(|e| {
                warn!(url = %url, error = %e, "[API] news submission failed to send");
                SubmitError::Transport(e.to_string())
            })?;
        let status = resp.status();
        if status.is_success() {
            info!(url = %url, status = status.as_u16(), "[API] news submitted");
            Ok(())
        } else {
            warn!(url = %url, status = status.as_u16(), "[API] news submission rejected");
            Err(SubmitError::Status(status.as_u16()))
        }
    }
}
