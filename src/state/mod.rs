//! Application state: the central `AppState`, modal dialogs, and value types.

pub mod app_state;
pub mod modal;
pub mod types;

pub use app_state::{AppState, HitRect};
pub use modal::{FormField, Modal, NewsForm};
pub use types::{
    City, CityQuery, CityResults, Focus, GlobalRowPolicy, NewsItem, NewsPage, NewsRequest,
    NewsResults, NewsSubmission, Scope, SelectedCity, SubmitError, SubmitOutcome, SubmitRequest,
    SubmitResult,
};
