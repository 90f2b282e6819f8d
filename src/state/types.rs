//! Core value types used by localnews state.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// State code the API uses for the cross-city "Global" aggregate row.
pub const GLOBAL_STATE_CODE: &str = "GL";
/// Display name of the cross-city aggregate row.
pub const GLOBAL_CITY_NAME: &str = "Global";

/// What: Accept an identifier encoded either as a JSON number or a JSON string.
///
/// Inputs:
/// - `d`: Serde deserializer positioned on an optional `id` field.
///
/// Output:
/// - `Some(String)` for numeric or string ids; `None` for null or other JSON types.
///
/// Details:
/// - The API serializes ids as numbers; older payloads used strings.
fn de_opt_id<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(d)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// One city row as returned by the city search endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    /// Server-side identifier; absent on client-synthesized rows.
    #[serde(
        default,
        deserialize_with = "de_opt_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    /// City display name.
    #[serde(default)]
    pub name: String,
    /// State (or country) code; `GL` marks the Global aggregate.
    #[serde(default)]
    pub state_code: String,
    /// Number of news items attached to this city.
    #[serde(default)]
    pub news_count: u64,
}

impl City {
    /// Build the synthetic Global aggregate row carrying `news_count`.
    #[must_use]
    pub fn global(news_count: u64) -> Self {
        Self {
            id: None,
            name: GLOBAL_CITY_NAME.to_string(),
            state_code: GLOBAL_STATE_CODE.to_string(),
            news_count,
        }
    }

    /// Whether this row is the Global aggregate.
    #[must_use]
    pub fn is_global(&self) -> bool {
        self.state_code == GLOBAL_STATE_CODE
    }

    /// Reduce the row to the (name, state code) pair reported upward on selection.
    #[must_use]
    pub fn to_selection(&self) -> SelectedCity {
        SelectedCity {
            name: self.name.clone(),
            state_code: self.state_code.clone(),
        }
    }
}

/// Single news entry shown in the feed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    /// Server-side identifier when present.
    #[serde(
        default,
        deserialize_with = "de_opt_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    /// Headline.
    #[serde(default)]
    pub title: String,
    /// Body text; may contain newlines.
    #[serde(default)]
    pub content: String,
}

/// One page of news as understood by the client.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewsPage {
    /// Items on this page, in server order.
    pub items: Vec<NewsItem>,
    /// Total number of pages reported by the server (1 for bare arrays).
    pub total_pages: u32,
}

/// City chosen by the user, as reported by the search dropdown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedCity {
    /// City name.
    pub name: String,
    /// State code; `GL` selects the Global aggregate.
    pub state_code: String,
}

/// Which slice of the news feed is being browsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Scope {
    /// Aggregate of all cities.
    Global,
    /// A single city identified by name and state code.
    City {
        /// City name.
        name: String,
        /// State code.
        state_code: String,
    },
}

impl Scope {
    /// What: Derive the feed scope from the current selection.
    ///
    /// Inputs:
    /// - `selected`: Selected city, if any.
    ///
    /// Output:
    /// - `Scope::Global` when nothing is selected or the selection is the `GL` row;
    ///   otherwise `Scope::City` for the selected pair.
    #[must_use]
    pub fn from_selection(selected: Option<&SelectedCity>) -> Self {
        match selected {
            Some(c) if c.state_code != GLOBAL_STATE_CODE => Self::City {
                name: c.name.clone(),
                state_code: c.state_code.clone(),
            },
            _ => Self::Global,
        }
    }

    /// Whether this is the Global aggregate scope.
    #[must_use]
    pub const fn is_global(&self) -> bool {
        matches!(self, Self::Global)
    }

    /// Section heading for this scope: "Global News" or "Local News in {name}, {state}".
    #[must_use]
    pub fn heading(&self) -> String {
        match self {
            Self::Global => "Global News".to_string(),
            Self::City { name, state_code } => format!("Local News in {name}, {state_code}"),
        }
    }
}

/// How the client treats the Global aggregate row in city search results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GlobalRowPolicy {
    /// Insert a client-computed Global row only when the server omits it.
    #[default]
    Synthesize,
    /// Never synthesize; show whatever the server returns.
    Server,
    /// Drop any server `GL` row and always compute the aggregate locally.
    AlwaysSynthesize,
}

impl GlobalRowPolicy {
    /// Parse a `global_row` value from settings.conf.
    #[must_use]
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "synthesize" | "client" | "auto" => Some(Self::Synthesize),
            "server" | "server_only" => Some(Self::Server),
            "always_synthesize" | "always" => Some(Self::AlwaysSynthesize),
            _ => None,
        }
    }

    /// Canonical settings.conf spelling.
    #[must_use]
    pub const fn as_config_key(self) -> &'static str {
        match self {
            Self::Synthesize => "synthesize",
            Self::Server => "server",
            Self::AlwaysSynthesize => "always_synthesize",
        }
    }
}

/// City query sent to the background search worker.
#[derive(Clone, Debug)]
pub struct CityQuery {
    /// Monotonic identifier used to correlate responses.
    pub id: u64,
    /// Raw query text; empty means "all cities by count".
    pub text: String,
}

/// Results corresponding to a prior [`CityQuery`].
#[derive(Clone, Debug)]
pub struct CityResults {
    /// Echoed identifier from the originating query.
    pub id: u64,
    /// Normalized rows (deduplicated, Global ensured, sorted); empty on failure.
    pub items: Vec<City>,
}

/// News page request sent to the background news worker.
#[derive(Clone, Debug)]
pub struct NewsRequest {
    /// Monotonic identifier used to correlate responses.
    pub id: u64,
    /// Feed scope at the time the request was issued.
    pub scope: Scope,
    /// Zero-based page index.
    pub page: u32,
}

/// Response corresponding to a prior [`NewsRequest`].
#[derive(Clone, Debug)]
pub struct NewsResults {
    /// Echoed identifier from the originating request.
    pub id: u64,
    /// Fetched page; `None` when the fetch failed.
    pub page: Option<NewsPage>,
}

/// Body of a news submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewsSubmission {
    /// Headline.
    pub title: String,
    /// Body text.
    pub content: String,
}

/// Why a news submission failed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitError {
    /// The server answered with a non-success HTTP status.
    Status(u16),
    /// The request never completed (connection, TLS, timeout, ...).
    Transport(String),
}

impl SubmitError {
    /// Fixed message shown under the form for this failure category.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::Status(_) => "Failed to submit news",
            Self::Transport(_) => "Error submitting news",
        }
    }
}

impl std::fmt::Display for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Status(code) => write!(f, "server rejected submission with HTTP {code}"),
            Self::Transport(msg) => write!(f, "submission request failed: {msg}"),
        }
    }
}

impl std::error::Error for SubmitError {}

/// Outcome of a submission.
pub type SubmitOutcome = Result<(), SubmitError>;

/// Submission sent to the background submit worker.
#[derive(Clone, Debug)]
pub struct SubmitRequest {
    /// Monotonic identifier used to correlate the outcome with the form that sent it.
    pub id: u64,
    /// JSON body to post.
    pub body: NewsSubmission,
}

/// Outcome corresponding to a prior [`SubmitRequest`].
#[derive(Clone, Debug)]
pub struct SubmitResult {
    /// Echoed identifier from the originating request.
    pub id: u64,
    /// Whether the server accepted the item.
    pub outcome: SubmitOutcome,
}

/// Which main pane currently receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// City search box and its dropdown.
    Search,
    /// News feed and pagination.
    #[default]
    News,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: City rows accept numeric or string ids and default missing counts.
    ///
    /// Inputs:
    /// - JSON array mixing numeric id, string id, and a row without `newsCount`.
    ///
    /// Output:
    /// - Ids normalized to strings, missing count read as zero.
    fn city_deserializes_tolerantly() {
        let rows: Vec<City> = serde_json::from_str(
            r#"[{"id":7,"name":"Paris","stateCode":"FR","newsCount":3},
                {"id":"x1","name":"Lyon","stateCode":"FR"}]"#,
        )
        .expect("valid city json");
        assert_eq!(rows[0].id.as_deref(), Some("7"));
        assert_eq!(rows[0].news_count, 3);
        assert_eq!(rows[1].id.as_deref(), Some("x1"));
        assert_eq!(rows[1].news_count, 0);
    }

    #[test]
    /// What: Scope derivation treats no selection and the `GL` row as Global.
    fn scope_from_selection_handles_global() {
        assert_eq!(Scope::from_selection(None), Scope::Global);
        let gl = City::global(4).to_selection();
        assert_eq!(Scope::from_selection(Some(&gl)), Scope::Global);
        let paris = SelectedCity {
            name: "Paris".into(),
            state_code: "FR".into(),
        };
        assert_eq!(
            Scope::from_selection(Some(&paris)),
            Scope::City {
                name: "Paris".into(),
                state_code: "FR".into()
            }
        );
    }

    #[test]
    /// What: `global_row` parsing accepts canonical keys and aliases, rejects junk.
    fn global_row_policy_parses_config_keys() {
        assert_eq!(
            GlobalRowPolicy::from_config_key("Server"),
            Some(GlobalRowPolicy::Server)
        );
        assert_eq!(
            GlobalRowPolicy::from_config_key("always-synthesize"),
            Some(GlobalRowPolicy::AlwaysSynthesize)
        );
        assert_eq!(GlobalRowPolicy::from_config_key("maybe"), None);
        for p in [
            GlobalRowPolicy::Synthesize,
            GlobalRowPolicy::Server,
            GlobalRowPolicy::AlwaysSynthesize,
        ] {
            assert_eq!(GlobalRowPolicy::from_config_key(p.as_config_key()), Some(p));
        }
    }

    #[test]
    /// What: Submission errors map to the two fixed form messages.
    fn submit_error_messages_are_fixed() {
        assert_eq!(SubmitError::Status(500).user_message(), "Failed to submit news");
        assert_eq!(
            SubmitError::Transport("refused".into()).user_message(),
            "Error submitting news"
        );
    }
}
