//! Core non-UI logic: city list normalization, paging, request dispatch, and the
//! state transitions triggered by selections and submissions.

pub mod cities;
pub mod paging;
pub mod query;
pub mod selection;
pub mod submit;

pub use cities::normalize_cities;
pub use paging::{DEFAULT_PAGE_SIZE, PageButton, PageState};
pub use query::{request_news_page, send_city_query};
pub use selection::{
    PageNav, close_dropdown, move_city_highlight, navigate_page, open_dropdown, refresh_news,
    search_input_changed, select_city, select_highlighted_city,
};
pub use submit::{open_submit_form, submit_form};
