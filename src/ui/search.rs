use ratatui::{
    Frame,
    layout::Rect,
    prelude::Position,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::hit;
use crate::state::{AppState, City, Focus};
use crate::theme::theme;
use crate::util::truncate_to_width;

/// Most dropdown rows shown at once.
const MAX_DROPDOWN_ROWS: u16 = 10;

/// What: Render the city search input.
///
/// Inputs:
/// - `f`: Frame.
/// - `app`: Application state (input text, focus, selection).
/// - `area`: Three-row slot below the header.
///
/// Details:
/// - The border title shows the current scope so the selection stays visible after the
///   query is cleared.
/// - The cursor is placed after the typed text while the box is focused.
pub fn render_search_box(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let focused = app.focus == Focus::Search;
    let title = match &app.selected_city {
        Some(c) if !app.scope().is_global() => format!(" City: {}, {} ", c.name, c.state_code),
        _ => " City: Global ".to_string(),
    };
    let input_line = if app.input.is_empty() && !focused {
        Line::from(Span::styled(
            "Search for a city...",
            Style::default().fg(th.overlay1),
        ))
    } else {
        Line::from(vec![
            Span::styled("> ", Style::default().fg(th.sapphire)),
            Span::styled(app.input.clone(), Style::default().fg(th.text)),
        ])
    };
    let border = if focused { th.mauve } else { th.surface1 };
    let input = Paragraph::new(input_line)
        .style(Style::default().bg(th.base))
        .block(
            Block::default()
                .title(Span::styled(title, Style::default().fg(border)))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border)),
        );
    f.render_widget(input, area);
    app.search_rect = Some(hit(area));

    if focused && !app.modal.is_open() {
        let right = area.x + area.width.saturating_sub(2);
        let typed = u16::try_from(app.input.width()).unwrap_or(u16::MAX);
        let x = (area.x + 3).saturating_add(typed).min(right);
        f.set_cursor_position(Position::new(x, area.y + 1));
    }
}

/// One dropdown row: `Name, CODE` on the left and `N news` on the right.
fn city_row(c: &City, width: usize) -> Line<'static> {
    let th = theme();
    let count = format!("{} news", c.news_count);
    let label_w = width.saturating_sub(count.width() + 1);
    let label = truncate_to_width(&format!("{}, {}", c.name, c.state_code), label_w);
    let pad = width.saturating_sub(label.width() + count.width());
    let name_style = if c.is_global() {
        Style::default().fg(th.lavender).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(th.text)
    };
    Line::from(vec![
        Span::styled(label, name_style),
        Span::raw(" ".repeat(pad)),
        Span::styled(count, Style::default().fg(th.subtext0)),
    ])
}

/// What: Render the city dropdown below the search box.
///
/// Inputs:
/// - `f`: Frame.
/// - `app`: Application state.
/// - `anchor`: Search box rectangle.
/// - `screen`: Whole frame, bounds the dropdown height.
///
/// Details:
/// - Shows "Loading..." while a query is outstanding and "No results found." for an
///   empty list; row hit-testing is only recorded when real rows are shown.
pub fn render_dropdown(f: &mut Frame, app: &mut AppState, anchor: Rect, screen: Rect) {
    let th = theme();
    let top = anchor.y + anchor.height;
    let room = screen.y + screen.height;
    if top + 3 > room {
        return;
    }
    let wanted = if app.cities_loading || app.cities.is_empty() {
        1
    } else {
        u16::try_from(app.cities.len())
            .unwrap_or(u16::MAX)
            .min(MAX_DROPDOWN_ROWS)
    };
    let height = (wanted + 2).min(room - top);
    let rect = Rect {
        x: anchor.x,
        y: top,
        width: anchor.width,
        height,
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.mauve))
        .style(Style::default().bg(th.mantle));
    let inner = block.inner(rect);
    f.render_widget(Clear, rect);
    app.dropdown_rect = Some(hit(rect));

    let message = if app.cities_loading {
        Some("Loading...")
    } else if app.cities.is_empty() {
        Some("No results found.")
    } else {
        None
    };
    if let Some(msg) = message {
        f.render_widget(
            Paragraph::new(Span::styled(msg, Style::default().fg(th.overlay2))).block(block),
            rect,
        );
        return;
    }

    let width = usize::from(inner.width.saturating_sub(2));
    let items: Vec<ListItem> = app
        .cities
        .iter()
        .map(|c| ListItem::new(city_row(c, width)))
        .collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().fg(th.crust).bg(th.lavender))
        .highlight_symbol("> ");
    f.render_stateful_widget(list, rect, &mut app.city_list_state);
    app.dropdown_rows_rect = Some(hit(inner));
}
