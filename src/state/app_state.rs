//! Central `AppState` container.

use ratatui::widgets::ListState;

use crate::logic::paging::PageState;
use crate::state::modal::Modal;
use crate::state::types::{City, Focus, NewsItem, Scope, SelectedCity};

/// Screen rectangle recorded during rendering as `(x, y, width, height)`.
pub type HitRect = (u16, u16, u16, u16);

/// Global application state shared by the event, networking, and UI layers.
///
/// Owned by the event loop task; background workers only ever see cloned request
/// values and report back over channels.
#[derive(Debug)]
pub struct AppState {
    // Composition root
    /// City picked in the search dropdown; `None` means Global.
    pub selected_city: Option<SelectedCity>,
    /// Bumped on every selection or successful submission; forces a fresh feed.
    pub refresh_key: u64,
    /// Active modal dialog, if any.
    pub modal: Modal,
    /// Which pane is currently focused.
    pub focus: Focus,
    /// Whether the key hint footer is drawn.
    pub show_keybinds_footer: bool,

    // City search
    /// Current search input text.
    pub input: String,
    /// Whether the results dropdown is visible.
    pub dropdown_open: bool,
    /// Normalized rows from the latest city query.
    pub cities: Vec<City>,
    /// Highlighted dropdown row.
    pub city_list_state: ListState,
    /// Whether the latest city query is still outstanding.
    pub cities_loading: bool,
    /// Identifier of the latest query whose results are accepted.
    pub latest_query_id: u64,
    /// Next query identifier to allocate.
    pub next_query_id: u64,

    // News list
    /// Items of the page being shown.
    pub news: Vec<NewsItem>,
    /// Page index and count for the current scope.
    pub pages: PageState,
    /// Whether the latest news request is still outstanding.
    pub news_loading: bool,
    /// First visible line of the rendered feed.
    pub news_scroll: u16,
    /// Identifier of the latest news request whose response is accepted.
    pub latest_news_id: u64,
    /// Next news request identifier to allocate.
    pub next_news_id: u64,

    // Submission
    /// Next submission identifier to allocate.
    pub next_submit_id: u64,

    /// Spinner animation frame, advanced by ticks.
    pub spinner_frame: usize,

    // Mouse hit-test rectangles, refreshed every frame
    /// Search input box.
    pub search_rect: Option<HitRect>,
    /// Dropdown box including its border.
    pub dropdown_rect: Option<HitRect>,
    /// Inner area of the dropdown where rows are drawn.
    pub dropdown_rows_rect: Option<HitRect>,
    /// "+ Submit News" button.
    pub submit_button_rect: Option<HitRect>,
    /// News feed area.
    pub news_rect: Option<HitRect>,
    /// Pagination buttons in draw order: `(target page or None if disabled, rect)`.
    pub page_button_rects: Vec<(Option<u32>, HitRect)>,
    /// Modal box.
    pub modal_rect: Option<HitRect>,
    /// `[x]` close control of the modal.
    pub modal_close_rect: Option<HitRect>,
    /// Form title input.
    pub form_title_rect: Option<HitRect>,
    /// Form content input.
    pub form_content_rect: Option<HitRect>,
    /// Form submit button.
    pub form_submit_rect: Option<HitRect>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            selected_city: None,
            refresh_key: 0,
            modal: Modal::None,
            focus: Focus::News,
            show_keybinds_footer: true,
            input: String::new(),
            dropdown_open: false,
            cities: Vec::new(),
            city_list_state: ListState::default(),
            cities_loading: false,
            latest_query_id: 0,
            next_query_id: 1,
            news: Vec::new(),
            pages: PageState::default(),
            news_loading: false,
            news_scroll: 0,
            latest_news_id: 0,
            next_news_id: 1,
            next_submit_id: 1,
            spinner_frame: 0,
            search_rect: None,
            dropdown_rect: None,
            dropdown_rows_rect: None,
            submit_button_rect: None,
            news_rect: None,
            page_button_rects: Vec::new(),
            modal_rect: None,
            modal_close_rect: None,
            form_title_rect: None,
            form_content_rect: None,
            form_submit_rect: None,
        }
    }
}

impl AppState {
    /// Feed scope derived from the current selection.
    #[must_use]
    pub fn scope(&self) -> Scope {
        Scope::from_selection(self.selected_city.as_ref())
    }

    /// What: Heading text for the news section.
    ///
    /// Output:
    /// - "Global News" when nothing is selected or the Global row is selected;
    ///   otherwise "Local News in {name}, {state}".
    #[must_use]
    pub fn section_title(&self) -> String {
        self.scope().heading()
    }

    /// Row currently highlighted in the dropdown, if any.
    #[must_use]
    pub fn highlighted_city(&self) -> Option<&City> {
        self.city_list_state
            .selected()
            .and_then(|i| self.cities.get(i))
    }
}
