use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use super::hit;
use crate::logic::paging::{PageButton, visible_page_window};
use crate::state::{AppState, Focus, NewsItem};
use crate::theme::theme;
use crate::util::spinner_glyph;

/// Placeholder shown when the current page has no items.
pub const EMPTY_FEED_TEXT: &str = "No news available for this location.";
/// Label of the button that opens the submission form.
pub const SUBMIT_BUTTON_LABEL: &str = "+ Submit News";

/// What: Render the section heading with the submit button on the same row.
///
/// Inputs:
/// - `f`: Frame.
/// - `app`: Application state; `submit_button_rect` is recorded.
/// - `area`: One-row slot above the feed.
pub fn render_heading(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let label = format!(" {SUBMIT_BUTTON_LABEL} ");
    let btn_w = u16::try_from(label.width())
        .unwrap_or(u16::MAX)
        .min(area.width);
    let title_w = area.width.saturating_sub(btn_w + 1);

    let title = Paragraph::new(Line::from(Span::styled(
        format!(" {}", app.section_title()),
        Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD),
    )));
    f.render_widget(
        title,
        Rect {
            width: title_w,
            ..area
        },
    );

    let btn_rect = Rect {
        x: area.x + area.width - btn_w,
        y: area.y,
        width: btn_w,
        height: 1,
    };
    let button = Paragraph::new(Span::styled(
        label,
        Style::default()
            .fg(th.crust)
            .bg(th.green)
            .add_modifier(Modifier::BOLD),
    ));
    f.render_widget(button, btn_rect);
    app.submit_button_rect = Some(hit(btn_rect));
}

/// Lines for one feed entry: bold title, the body lines, then a spacer.
fn item_lines(item: &NewsItem) -> Vec<Line<'static>> {
    let th = theme();
    let mut lines = vec![Line::from(Span::styled(
        item.title.clone(),
        Style::default().fg(th.text).add_modifier(Modifier::BOLD),
    ))];
    lines.extend(item.content.lines().map(|l| {
        Line::from(Span::styled(
            l.to_string(),
            Style::default().fg(th.subtext1),
        ))
    }));
    lines.push(Line::default());
    lines
}

/// Rows `lines` occupy once wrapped to `width` cells.
fn wrapped_height(lines: &[Line], width: u16) -> usize {
    let width = usize::from(width.max(1));
    lines.iter().map(|l| l.width().div_ceil(width).max(1)).sum()
}

/// What: Render the current page of news, or the spinner/placeholder.
///
/// Inputs:
/// - `f`: Frame.
/// - `app`: Application state; `news_rect` is recorded and `news_scroll` clamped.
/// - `area`: Remaining space between heading and pagination.
///
/// Details:
/// - A fetch in flight shows the spinner even when old items are still present.
pub fn render_feed(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let border = if app.focus == Focus::News {
        th.mauve
    } else {
        th.surface1
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    app.news_rect = Some(hit(area));

    if app.news_loading {
        let spin = Paragraph::new(Span::styled(
            format!("{} Loading news...", spinner_glyph(app.spinner_frame)),
            Style::default().fg(th.yellow),
        ))
        .alignment(Alignment::Center)
        .block(block);
        f.render_widget(spin, area);
        return;
    }
    if app.news.is_empty() {
        let empty = Paragraph::new(Span::styled(
            EMPTY_FEED_TEXT,
            Style::default().fg(th.overlay2),
        ))
        .alignment(Alignment::Center)
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let lines: Vec<Line> = app.news.iter().flat_map(item_lines).collect();
    let total = wrapped_height(&lines, inner.width);
    let max_scroll = total.saturating_sub(usize::from(inner.height));
    app.news_scroll = app
        .news_scroll
        .min(u16::try_from(max_scroll).unwrap_or(u16::MAX));
    let feed = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.news_scroll, 0))
        .block(block);
    f.render_widget(feed, area);
}

/// What: Render the pagination bar and record each button's target page.
///
/// Inputs:
/// - `f`: Frame.
/// - `app`: Application state; `page_button_rects` is filled.
/// - `area`: One-row slot below the feed.
///
/// Details:
/// - Page numbers that do not fit are windowed around the current page.
/// - Disabled buttons are recorded with a `None` target so clicks on them do nothing.
pub fn render_pagination(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let page = app.pages.page();
    let total = app.pages.total_pages();

    // "< Prev " + " Next >" take 14 cells; each number takes at most 6.
    let room = u32::from(area.width.saturating_sub(14)) / 6;
    let buttons = app.pages.buttons(visible_page_window(total, page, room));

    let mut spans = Vec::new();
    let mut x = area.x;
    let mut push = |label: String, style: Style, target: Option<u32>| {
        let w = u16::try_from(label.width()).unwrap_or(u16::MAX);
        if x.saturating_add(w) > area.x + area.width {
            return;
        }
        app.page_button_rects.push((target, (x, area.y, w, 1)));
        x += w + 1;
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    };

    let disabled = Style::default().fg(th.surface2);
    for button in buttons {
        match button {
            PageButton::Prev { enabled } => push(
                "< Prev".to_string(),
                if enabled {
                    Style::default().fg(th.text)
                } else {
                    disabled
                },
                enabled.then_some(page.saturating_sub(1)),
            ),
            PageButton::Page { index, current } => push(
                format!("[{}]", index + 1),
                if current {
                    Style::default()
                        .fg(th.crust)
                        .bg(th.mauve)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(th.subtext1)
                },
                Some(index),
            ),
            PageButton::Next { enabled } => push(
                "Next >".to_string(),
                if enabled {
                    Style::default().fg(th.text)
                } else {
                    disabled
                },
                enabled.then_some(page.saturating_add(1)),
            ),
        }
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
