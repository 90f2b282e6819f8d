//! Keys for the city search box and its dropdown.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use crate::logic::{
    close_dropdown, move_city_highlight, search_input_changed, select_highlighted_city,
};
use crate::state::{AppState, CityQuery, Focus, NewsRequest};

/// What: Handle a key while the search box has focus.
///
/// Inputs:
/// - `ke`: Key press.
/// - `app`: Application state.
/// - `query_tx`: City search requests.
/// - `news_tx`: News requests, used when a city is picked.
///
/// Details:
/// - Typing and Backspace edit the query; each actual change issues a fetch.
/// - Up/Down move the highlight (opening the dropdown if it was closed).
/// - Enter picks the highlighted row and hands focus to the news list.
/// - Esc closes the dropdown, or leaves the box when it is already closed.
pub fn handle_search_key(
    ke: KeyEvent,
    app: &mut AppState,
    query_tx: &mpsc::UnboundedSender<CityQuery>,
    news_tx: &mpsc::UnboundedSender<NewsRequest>,
) {
    match ke.code {
        KeyCode::Char('u') if ke.modifiers.contains(KeyModifiers::CONTROL) => {
            if !app.input.is_empty() {
                app.input.clear();
                search_input_changed(app, query_tx);
            }
        }
        KeyCode::Char(ch)
            if !ke
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.input.push(ch);
            search_input_changed(app, query_tx);
        }
        KeyCode::Backspace => {
            if app.input.pop().is_some() {
                search_input_changed(app, query_tx);
            }
        }
        KeyCode::Down | KeyCode::Up => {
            if !app.dropdown_open {
                app.dropdown_open = true;
            }
            move_city_highlight(app, if ke.code == KeyCode::Down { 1 } else { -1 });
        }
        KeyCode::Enter => {
            if app.dropdown_open && select_highlighted_city(app, query_tx, news_tx) {
                app.focus = Focus::News;
            }
        }
        KeyCode::Esc => {
            if app.dropdown_open {
                close_dropdown(app);
            } else {
                app.focus = Focus::News;
            }
        }
        _ => {}
    }
}
