//! HTTP access to the local-news API.
//!
//! One [`ApiClient`] is built at startup from [`Settings`] and cloned into every
//! worker; the inner `reqwest::Client` shares its connection pool across clones.

use std::time::Duration;

use reqwest::Url;

use crate::state::GlobalRowPolicy;
use crate::theme::Settings;

mod cities;
mod news;
mod submit;

pub use news::NewsEnvelope;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Handle to the news API with the per-session request parameters baked in.
#[derive(Clone, Debug)]
pub struct ApiClient {
    /// Pooled HTTP client.
    http: reqwest::Client,
    /// Parsed API origin, e.g. `http://localhost:8080`.
    base: Url,
    /// News items per page.
    page_size: u32,
    /// `sort` parameter for news pages.
    sort: String,
    /// Global row handling applied to city search results.
    global_row: GlobalRowPolicy,
}

impl ApiClient {
    /// What: Build the client from settings.
    ///
    /// Inputs:
    /// - `settings`: Resolved settings (file merged with CLI overrides).
    ///
    /// Output:
    /// - Ready client, or an error when the base URL does not parse or TLS setup fails.
    ///
    /// # Errors
    /// - Returns `Err` for an unparsable `api_base_url`.
    /// - Returns `Err` when `reqwest` cannot build its client.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let base = Url::parse(&settings.api_base_url)
            .map_err(|e| format!("invalid api_base_url {:?}: {e}", settings.api_base_url))?;
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(settings.connect_timeout_secs))
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .user_agent(format!("localnews/{}", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base,
            page_size: settings.page_size,
            sort: settings.news_sort.clone(),
            global_row: settings.global_row,
        })
    }

    /// Base URL requests are resolved against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base
    }

    /// What: Resolve an API path and append query parameters.
    ///
    /// Inputs:
    /// - `path`: Absolute API path such as `/api/news`.
    /// - `params`: Query pairs, URL-encoded on output.
    ///
    /// Output:
    /// - Full request URL.
    ///
    /// Details:
    /// - Any path prefix on the base URL is kept (`http://host/prefix` + `/api/x`
    ///   becomes `http://host/prefix/api/x`).
    fn endpoint(&self, path: &str, params: &[(&str, &str)]) -> Url {
        let prefix = self.base.path().trim_end_matches('/');
        let mut url = self.base.clone();
        url.set_path(&format!("{prefix}{path}"));
        url.set_query(None);
        if !params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
        }
        url
    }
}
