//! Keys for the news list and its pagination.

use crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::mpsc;

use crate::logic::{PageNav, navigate_page, open_dropdown, open_submit_form};
use crate::state::{AppState, CityQuery, Modal, NewsRequest};

/// Lines moved by PageUp/PageDown.
const SCROLL_PAGE: u16 = 10;

/// What: Handle a key while the news list has focus.
///
/// Inputs:
/// - `ke`: Key press.
/// - `app`: Application state.
/// - `query_tx`: City search requests (for `/`).
/// - `news_tx`: News page requests.
///
/// Output:
/// - `true` when the user asked to quit.
pub fn handle_news_key(
    ke: KeyEvent,
    app: &mut AppState,
    query_tx: &mpsc::UnboundedSender<CityQuery>,
    news_tx: &mpsc::UnboundedSender<NewsRequest>,
) -> bool {
    match ke.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('/') => open_dropdown(app, query_tx),
        KeyCode::Char('n') => open_submit_form(app),
        KeyCode::Char('?') => app.modal = Modal::Help,
        KeyCode::Left | KeyCode::Char('h') => {
            navigate_page(app, PageNav::Prev, news_tx);
        }
        KeyCode::Right | KeyCode::Char('l') => {
            navigate_page(app, PageNav::Next, news_tx);
        }
        KeyCode::Home => {
            navigate_page(app, PageNav::First, news_tx);
        }
        KeyCode::End => {
            navigate_page(app, PageNav::Last, news_tx);
        }
        KeyCode::Up | KeyCode::Char('k') => app.news_scroll = app.news_scroll.saturating_sub(1),
        KeyCode::Down | KeyCode::Char('j') => app.news_scroll = app.news_scroll.saturating_add(1),
        KeyCode::PageUp => app.news_scroll = app.news_scroll.saturating_sub(SCROLL_PAGE),
        KeyCode::PageDown => app.news_scroll = app.news_scroll.saturating_add(SCROLL_PAGE),
        _ => {}
    }
    false
}
