use serde::Deserialize;
use tracing::{debug, warn};

use super::{ApiClient, Result};
use crate::logic::normalize_cities;
use crate::state::City;

/// City search payload: the paged envelope or a bare array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CityEnvelope {
    /// `{ "content": [...] }`
    Paged {
        /// Rows on this page.
        content: Vec<City>,
    },
    /// `[...]`
    Bare(Vec<City>),
}

impl CityEnvelope {
    fn into_rows(self) -> Vec<City> {
        match self {
            Self::Paged { content } | Self::Bare(content) => content,
        }
    }
}

impl ApiClient {
    /// What: Fetch the raw city rows for a query.
    ///
    /// Inputs:
    /// - `query`: Free text; blank (after trimming) selects the count endpoint.
    ///
    /// Output:
    /// - Rows in server order, before deduplication.
    ///
    /// # Errors
    /// - Transport failures, non-success statuses and malformed JSON.
    pub async fn fetch_city_rows(&self, query: &str) -> Result<Vec<City>> {
        let q = query.trim();
        let url = if q.is_empty() {
            self.endpoint("/api/city/search/count", &[])
        } else {
            self.endpoint("/api/city/search", &[("query", q)])
        };
        let resp = self
            .http
            .get(url.clone())
            .send()
            .await?
            .error_for_status()?;
        let envelope: CityEnvelope = resp.json().await.map_err(|e| {
            warn!(url = %url, error = %e, "[API] malformed city search payload");
            e
        })?;
        let rows = envelope.into_rows();
        debug!(url = %url, rows = rows.len(), "[API] city search returned");
        Ok(rows)
    }

    /// What: Fetch and normalize the city candidate list for a query.
    ///
    /// Inputs:
    /// - `query`: Free text, possibly empty.
    ///
    /// Output:
    /// - Deduplicated list sorted by news count, with the Global row handled per the
    ///   configured policy.
    ///
    /// # Errors
    /// - Propagates [`ApiClient::fetch_city_rows`] failures.
    pub async fn search_cities(&self, query: &str) -> Result<Vec<City>> {
        let rows = self.fetch_city_rows(query).await?;
        Ok(normalize_cities(rows, self.global_row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Both payload shapes decode to the same rows.
    ///
    /// Inputs:
    /// - An envelope with `content` and the equivalent bare array.
    ///
    /// Output:
    /// - Identical row lists.
    fn city_envelope_accepts_both_shapes() {
        let paged: CityEnvelope = serde_json::from_str(
            r#"{"content":[{"id":1,"name":"Paris","stateCode":"FR","newsCount":3}],"totalPages":1}"#,
        )
        .expect("paged");
        let bare: CityEnvelope =
            serde_json::from_str(r#"[{"id":"1","name":"Paris","stateCode":"FR","newsCount":3}]"#)
                .expect("bare");
        assert_eq!(paged.into_rows(), bare.into_rows());
    }
}
