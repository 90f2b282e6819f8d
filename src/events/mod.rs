//! Event handling layer for the localnews TUI.
//!
//! `handle_event` routes keys to the open modal or the focused pane and mouse events
//! to the hit-testing in `mouse`.

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::logic::{close_dropdown, open_dropdown};
use crate::state::{AppState, CityQuery, Focus, Modal, NewsRequest, SubmitRequest};

mod modals;
mod mouse;
mod news;
mod search;

/// What: Dispatch a single terminal event and mutate the [`AppState`].
///
/// Inputs:
/// - `ev`: Terminal event.
/// - `app`: Application state.
/// - `query_tx`: City search requests.
/// - `news_tx`: News page requests.
/// - `submit_tx`: Submission requests.
///
/// Output:
/// - `true` to signal the application should exit; otherwise `false`.
///
/// Details:
/// - Ctrl+C quits from anywhere.
/// - An open modal consumes every other key.
/// - Only key presses are handled; repeats and releases are ignored.
pub fn handle_event(
    ev: &CEvent,
    app: &mut AppState,
    query_tx: &mpsc::UnboundedSender<CityQuery>,
    news_tx: &mpsc::UnboundedSender<NewsRequest>,
    submit_tx: &mpsc::UnboundedSender<SubmitRequest>,
) -> bool {
    match ev {
        CEvent::Key(ke) => handle_key(*ke, app, query_tx, news_tx, submit_tx),
        CEvent::Mouse(m) => mouse::handle_mouse_event(*m, app, query_tx, news_tx, submit_tx),
        _ => false,
    }
}

fn handle_key(
    ke: KeyEvent,
    app: &mut AppState,
    query_tx: &mpsc::UnboundedSender<CityQuery>,
    news_tx: &mpsc::UnboundedSender<NewsRequest>,
    submit_tx: &mpsc::UnboundedSender<SubmitRequest>,
) -> bool {
    if ke.kind != KeyEventKind::Press {
        return false;
    }
    if ke.code == KeyCode::Char('c') && ke.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }
    if app.modal.is_open() {
        modals::handle_modal_key(ke, app, submit_tx);
        return false;
    }
    match ke.code {
        KeyCode::F(1) => {
            app.modal = Modal::Help;
            return false;
        }
        KeyCode::Tab | KeyCode::BackTab => {
            toggle_focus(app, query_tx);
            return false;
        }
        _ => {}
    }
    match app.focus {
        Focus::Search => {
            search::handle_search_key(ke, app, query_tx, news_tx);
            false
        }
        Focus::News => news::handle_news_key(ke, app, query_tx, news_tx),
    }
}

/// Switch between the search box and the news list.
fn toggle_focus(app: &mut AppState, query_tx: &mpsc::UnboundedSender<CityQuery>) {
    match app.focus {
        Focus::Search => {
            close_dropdown(app);
            app.focus = Focus::News;
        }
        Focus::News => open_dropdown(app, query_tx),
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::{channels, ctrl, drain, key, send};
    use super::*;

    #[test]
    /// What: Ctrl+C quits even with a modal open; `q` quits only from the news list.
    fn quit_keys() {
        let (tx, _rx) = channels();
        let mut app = AppState {
            modal: Modal::Help,
            ..AppState::default()
        };
        assert!(send(&ctrl('c'), &mut app, &tx));

        let mut app = AppState::default();
        assert!(send(&key(KeyCode::Char('q')), &mut app, &tx));

        let mut app = AppState {
            focus: Focus::Search,
            ..AppState::default()
        };
        assert!(!send(&key(KeyCode::Char('q')), &mut app, &tx));
        assert_eq!(app.input, "q");
    }

    #[test]
    /// What: Tab moves focus to search (opening the dropdown and fetching) and back.
    fn tab_toggles_focus_and_dropdown() {
        let (tx, mut rx) = channels();
        let mut app = AppState::default();
        send(&key(KeyCode::Tab), &mut app, &tx);
        assert_eq!(app.focus, Focus::Search);
        assert!(app.dropdown_open);
        assert_eq!(drain(&mut rx.query).len(), 1);

        send(&key(KeyCode::Tab), &mut app, &tx);
        assert_eq!(app.focus, Focus::News);
        assert!(!app.dropdown_open);
        assert!(drain(&mut rx.query).is_empty());
    }

    #[test]
    /// What: F1 opens help from either pane.
    fn f1_opens_help() {
        let (tx, _rx) = channels();
        let mut app = AppState {
            focus: Focus::Search,
            ..AppState::default()
        };
        send(&key(KeyCode::F(1)), &mut app, &tx);
        assert_eq!(app.modal, Modal::Help);
    }
}
