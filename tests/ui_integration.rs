//! Integration tests for UI rendering using ratatui's `TestBackend`.
//!
//! These tests render full frames from hand-built `AppState`s and inspect the buffer
//! text and the recorded hit rectangles. They do not touch the network.

use ratatui::{Terminal, backend::TestBackend};

use localnews::state::{AppState, City, Focus, Modal, NewsForm, NewsItem, SelectedCity};
use localnews::ui;

/// Render one frame and return the buffer as newline-separated rows.
fn render(app: &mut AppState, w: u16, h: u16) -> String {
    let mut term = Terminal::new(TestBackend::new(w, h)).expect("terminal");
    term.draw(|f| ui::ui(f, app)).expect("draw");
    let buf = term.backend().buffer();
    let mut out = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            out.push_str(buf[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

fn item(id: u32, title: &str, content: &str) -> NewsItem {
    NewsItem {
        id: Some(id.to_string()),
        title: title.to_string(),
        content: content.to_string(),
    }
}

#[test]
/// What: An empty Global feed shows the header, heading, placeholder and pagination.
///
/// Inputs:
/// - Default state in an 80x24 viewport.
///
/// Output:
/// - All fixed labels are visible and both pagination arrows are recorded as disabled.
fn empty_global_feed_renders_placeholder_and_pagination() {
    let mut app = AppState::default();
    let text = render(&mut app, 80, 24);
    assert!(text.contains(ui::APP_TITLE), "{text}");
    assert!(text.contains("Global News"));
    assert!(text.contains("+ Submit News"));
    assert!(text.contains("No news available for this location."));
    assert!(text.contains("< Prev"));
    assert!(text.contains("[1]"));
    assert!(text.contains("Next >"));

    let targets: Vec<Option<u32>> = app.page_button_rects.iter().map(|(t, _)| *t).collect();
    assert_eq!(targets, vec![None, Some(0), None]);
    assert!(app.submit_button_rect.is_some());
    assert!(app.search_rect.is_some());
    assert!(app.news_rect.is_some());
}

#[test]
/// What: A city feed shows its heading and items, and Next targets the following page.
fn city_feed_renders_items_and_enabled_next() {
    let mut app = AppState {
        selected_city: Some(SelectedCity {
            name: "Austin".into(),
            state_code: "TX".into(),
        }),
        news: vec![
            item(9, "Bridge reopens", "Traffic resumes on 5th St."),
            item(8, "Library hours", "Open late on Fridays."),
        ],
        ..AppState::default()
    };
    app.pages.set_total_pages(2);
    let text = render(&mut app, 80, 24);
    assert!(text.contains("Local News in Austin, TX"), "{text}");
    assert!(text.contains("Bridge reopens"));
    assert!(text.contains("Open late on Fridays."));
    assert!(!text.contains("No news available"));
    assert_eq!(app.page_button_rects.last().map(|(t, _)| *t), Some(Some(1)));
}

#[test]
/// What: The open dropdown lists rows and records the row area for clicks.
fn dropdown_lists_cities() {
    let mut app = AppState {
        focus: Focus::Search,
        dropdown_open: true,
        cities: vec![
            City::global(4),
            City {
                id: Some("1".into()),
                name: "Paris".into(),
                state_code: "FR".into(),
                news_count: 3,
            },
        ],
        ..AppState::default()
    };
    app.city_list_state.select(Some(1));
    let text = render(&mut app, 80, 24);
    assert!(text.contains("Global, GL"), "{text}");
    assert!(text.contains("Paris, FR"));
    assert!(text.contains("3 news"));
    assert!(app.dropdown_rows_rect.is_some());
}

#[test]
/// What: While a city query is outstanding the dropdown shows "Loading..." with no rows.
fn dropdown_shows_loading() {
    let mut app = AppState {
        dropdown_open: true,
        cities_loading: true,
        ..AppState::default()
    };
    let text = render(&mut app, 80, 24);
    assert!(text.contains("Loading..."));
    assert!(app.dropdown_rect.is_some());
    assert!(app.dropdown_rows_rect.is_none());
}

#[test]
/// What: The submission modal overlays the page when there is room.
fn submit_modal_renders_over_page() {
    let mut app = AppState {
        modal: Modal::SubmitNews(NewsForm::default()),
        ..AppState::default()
    };
    let text = render(&mut app, 100, 30);
    assert!(text.contains("Submit News"));
    assert!(text.contains("[x]"));
    assert!(text.contains("Title"));
    assert!(text.contains("Content"));
    assert!(app.modal_rect.is_some());
}

#[test]
/// What: On a viewport too small for the overlay the modal draws nothing.
///
/// Inputs:
/// - Open submission form in a 28x9 viewport.
///
/// Output:
/// - No modal rects are recorded and the close control is absent.
fn modal_renders_nothing_on_small_viewport() {
    let mut app = AppState {
        modal: Modal::SubmitNews(NewsForm::default()),
        ..AppState::default()
    };
    let text = render(&mut app, 28, 9);
    assert!(app.modal_rect.is_none());
    assert!(app.modal_close_rect.is_none());
    assert!(!text.contains("[x]"));
}

#[test]
/// What: The key hint footer follows the setting.
fn footer_follows_setting() {
    let mut app = AppState::default();
    assert!(render(&mut app, 100, 24).contains("quit"));
    app.show_keybinds_footer = false;
    assert!(!render(&mut app, 100, 24).contains("quit"));
}
