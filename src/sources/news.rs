use serde::Deserialize;
use tracing::{debug, warn};

use super::{ApiClient, Result};
use crate::state::{NewsItem, NewsPage, Scope};

const fn one() -> u32 {
    1
}

/// News payload as served: a Spring-style page or a bare array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum NewsEnvelope {
    /// `{ "content": [...], "totalPages": n, ... }`; other page fields are ignored.
    #[serde(rename_all = "camelCase")]
    Paged {
        /// Items on this page.
        content: Vec<NewsItem>,
        /// Page count; missing means one page.
        #[serde(default = "one")]
        total_pages: u32,
    },
    /// `[...]`, treated as the only page.
    Bare(Vec<NewsItem>),
}

impl From<NewsEnvelope> for NewsPage {
    fn from(env: NewsEnvelope) -> Self {
        match env {
            NewsEnvelope::Paged {
                content,
                total_pages,
            } => Self {
                items: content,
                total_pages: total_pages.max(1),
            },
            NewsEnvelope::Bare(items) => Self {
                items,
                total_pages: 1,
            },
        }
    }
}

impl ApiClient {
    /// What: Fetch one page of news for a scope.
    ///
    /// Inputs:
    /// - `scope`: Global feed or a single city.
    /// - `page`: Zero-based page index.
    ///
    /// Output:
    /// - The decoded page; ordering is whatever the server applied for `sort`.
    ///
    /// # Errors
    /// - Transport failures, non-success statuses and malformed JSON.
    ///
    /// Details:
    /// - Global: `GET /api/news/global?page&size&sort`.
    /// - City: `GET /api/news?cityName&stateName&page&size&sort`.
    pub async fn fetch_news_page(&self, scope: &Scope, page: u32) -> Result<NewsPage> {
        let page_s = page.to_string();
        let size_s = self.page_size.to_string();
        let url = match scope {
            Scope::Global => self.endpoint(
                "/api/news/global",
                &[
                    ("page", page_s.as_str()),
                    ("size", size_s.as_str()),
                    ("sort", self.sort.as_str()),
                ],
            ),
            Scope::City { name, state_code } => self.endpoint(
                "/api/news",
                &[
                    ("cityName", name.as_str()),
                    ("stateName", state_code.as_str()),
                    ("page", page_s.as_str()),
                    ("size", size_s.as_str()),
                    ("sort", self.sort.as_str()),
                ],
            ),
        };
        let resp = self
            .http
            .get(url.clone())
            .send()
            .await?
            .error_for_status()?;
        let envelope: NewsEnvelope = resp.json().await.map_err(|e| {
            warn!(url = %url, error = %e, "[API] malformed news payload");
            e
        })?;
        let out = NewsPage::from(envelope);
        debug!(
            url = %url,
            items = out.items.len(),
            total_pages = out.total_pages,
            "[API] news page returned"
        );
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: A bare array becomes a single page.
    ///
    /// Inputs:
    /// - `[{id:"1",title:"A",content:"B"}]`
    ///
    /// Output:
    /// - One item, `total_pages == 1`.
    fn bare_array_is_single_page() {
        let env: NewsEnvelope =
            serde_json::from_str(r#"[{"id":"1","title":"A","content":"B"}]"#).expect("decode");
        let page = NewsPage::from(env);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].title, "A");
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    /// What: Paged envelopes carry their page count; missing or zero totals become one.
    ///
    /// Details:
    /// - Extra Spring page fields such as `number` and `size` are accepted and ignored.
    fn paged_envelope_counters() {
        let env: NewsEnvelope = serde_json::from_str(
            r#"{"content":[{"id":7,"title":"T","content":"C"}],"totalPages":4,"number":2,"size":5}"#,
        )
        .expect("decode");
        let page = NewsPage::from(env);
        assert_eq!(page.total_pages, 4);
        assert_eq!(page.items[0].id.as_deref(), Some("7"));

        let env: NewsEnvelope = serde_json::from_str(r#"{"content":[]}"#).expect("decode");
        assert_eq!(NewsPage::from(env).total_pages, 1);

        let env: NewsEnvelope =
            serde_json::from_str(r#"{"content":[],"totalPages":0}"#).expect("decode");
        assert_eq!(NewsPage::from(env).total_pages, 1);
    }

    #[test]
    /// What: Objects without `content` are rejected rather than read as empty.
    fn unrelated_object_is_an_error() {
        assert!(serde_json::from_str::<NewsEnvelope>(r#"{"error":"boom"}"#).is_err());
    }
}
