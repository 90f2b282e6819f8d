//! Rendering for the localnews TUI.
//!
//! `ui` draws one frame from [`AppState`] and records the hit rectangles that mouse
//! handling reads back on the next event.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::state::{AppState, Focus, HitRect};
use crate::theme::theme;

/// Submission and help overlays.
pub mod modals;
/// News heading, feed and pagination.
mod news;
/// City search box and dropdown.
mod search;

/// Text of the application header.
pub const APP_TITLE: &str = "Local News App";

/// Convert a layout rectangle into the tuple stored for hit-testing.
pub(crate) const fn hit(r: Rect) -> HitRect {
    (r.x, r.y, r.width, r.height)
}

/// What: Draw one full frame.
///
/// Inputs:
/// - `f`: Frame to draw into.
/// - `app`: Application state; hit rectangles are rewritten.
///
/// Details:
/// - Rows top to bottom: header, search box, heading with the submit button, news
///   feed, pagination bar and (optionally) the key hint footer.
/// - The city dropdown and any modal are drawn last so they overlay the page.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();
    clear_hit_rects(app);

    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let footer_h = u16::from(app.show_keybinds_footer);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(footer_h),
        ])
        .split(area);

    render_header(f, rows[0]);
    search::render_search_box(f, app, rows[1]);
    news::render_heading(f, app, rows[2]);
    news::render_feed(f, app, rows[3]);
    news::render_pagination(f, app, rows[4]);
    if app.show_keybinds_footer {
        render_footer(f, app, rows[5]);
    }

    if app.dropdown_open {
        search::render_dropdown(f, app, rows[1], area);
    }
    modals::render_modal(f, app, area);
}

fn clear_hit_rects(app: &mut AppState) {
    app.search_rect = None;
    app.dropdown_rect = None;
    app.dropdown_rows_rect = None;
    app.submit_button_rect = None;
    app.news_rect = None;
    app.page_button_rects.clear();
    app.modal_rect = None;
    app.modal_close_rect = None;
    app.form_title_rect = None;
    app.form_content_rect = None;
    app.form_submit_rect = None;
}

fn render_header(f: &mut Frame, area: Rect) {
    let th = theme();
    let title = Paragraph::new(Line::from(Span::styled(
        APP_TITLE,
        Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .style(Style::default().bg(th.mantle));
    f.render_widget(title, area);
}

fn render_footer(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let hints: &[(&str, &str)] = if app.focus == Focus::Search {
        &[
            ("↑↓", "highlight"),
            ("Enter", "select"),
            ("Esc", "close"),
            ("Tab", "news"),
            ("F1", "help"),
        ]
    } else {
        &[
            ("←→", "page"),
            ("↑↓", "scroll"),
            ("/", "search"),
            ("n", "submit"),
            ("?", "help"),
            ("q", "quit"),
        ]
    };
    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (k, label) in hints {
        spans.push(Span::styled(
            format!(" {k} "),
            Style::default().fg(th.crust).bg(th.overlay1),
        ));
        spans.push(Span::styled(
            format!(" {label}"),
            Style::default().fg(th.subtext0),
        ));
        spans.push(Span::raw("  "));
    }
    f.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(th.mantle)),
        area,
    );
}
