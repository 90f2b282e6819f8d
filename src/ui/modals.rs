//! Overlay dialogs: the news submission form and the key reference.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    prelude::Position,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use super::hit;
use crate::state::{AppState, FormField, Modal, NewsForm};
use crate::theme::{Theme, theme};
use crate::util::{spinner_glyph, text_end_position};

/// Smallest viewport that can host an overlay.
const MIN_VIEWPORT: (u16, u16) = (30, 10);

/// Key reference shown by the help modal.
const HELP_ROWS: &[(&str, &str)] = &[
    ("Tab / Shift+Tab", "Switch between search and news"),
    ("/", "Search for a city"),
    ("Up / Down", "Highlight city or scroll news"),
    ("Enter", "Select highlighted city"),
    ("Left / Right", "Previous / next page"),
    ("Home / End", "First / last page"),
    ("n", "Submit news"),
    ("Ctrl+S", "Send the form"),
    ("Esc", "Close dropdown or dialog"),
    ("F1 / ?", "This help"),
    ("q / Ctrl+C", "Quit"),
];

/// What: Center a box of the wanted size inside `area`.
///
/// Inputs:
/// - `area`: Whole viewport.
/// - `want_w`, `want_h`: Preferred box size; shrunk to leave a one-cell margin.
///
/// Output:
/// - `None` when the viewport is smaller than the minimum overlay size.
#[must_use]
pub fn modal_rect(area: Rect, want_w: u16, want_h: u16) -> Option<Rect> {
    if area.width < MIN_VIEWPORT.0 || area.height < MIN_VIEWPORT.1 {
        return None;
    }
    let w = want_w.min(area.width - 2);
    let h = want_h.min(area.height - 2);
    Some(Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    })
}

fn frame_block<'a>(th: &Theme, title: &'a str, accent: ratatui::style::Color) -> Block<'a> {
    Block::default()
        .title(Span::styled(
            title,
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(accent))
        .style(Style::default().bg(th.mantle))
}

/// Draw the `[x]` close control on the top border and record its rect.
fn render_close_control(f: &mut Frame, app: &mut AppState, rect: Rect) {
    let th = theme();
    let close = Rect {
        x: rect.x + rect.width.saturating_sub(4),
        y: rect.y,
        width: 3,
        height: 1,
    };
    f.render_widget(
        Paragraph::new(Span::styled(
            "[x]",
            Style::default().fg(th.red).add_modifier(Modifier::BOLD),
        )),
        close,
    );
    app.modal_close_rect = Some(hit(close));
}

/// What: Render whichever modal is open on top of the page.
///
/// Inputs:
/// - `f`: Frame.
/// - `app`: Application state; modal hit rects are recorded.
/// - `area`: Whole viewport.
///
/// Details:
/// - Nothing is drawn, and no rects are recorded, when the viewport is too small.
pub fn render_modal(f: &mut Frame, app: &mut AppState, area: Rect) {
    let (want_w, want_h) = match &app.modal {
        Modal::None => return,
        Modal::SubmitNews(_) => (64, 20),
        Modal::Help => (56, u16::try_from(HELP_ROWS.len()).unwrap_or(0) + 4),
    };
    let Some(rect) = modal_rect(area, want_w, want_h) else {
        return;
    };
    f.render_widget(Clear, rect);
    app.modal_rect = Some(hit(rect));

    // Cloned so hit rects can be written while drawing.
    match app.modal.clone() {
        Modal::SubmitNews(form) => render_submit_form(f, app, &form, rect),
        Modal::Help => render_help(f, rect),
        Modal::None => {}
    }
    render_close_control(f, app, rect);
}

fn render_submit_form(f: &mut Frame, app: &mut AppState, form: &NewsForm, rect: Rect) {
    let th = theme();
    let block = frame_block(&th, " Submit News ", th.mauve);
    let inner = block.inner(rect);
    f.render_widget(block, rect);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let field_style = |field: FormField| {
        if form.submitting {
            Style::default().fg(th.surface2)
        } else if form.focus == field {
            Style::default().fg(th.lavender)
        } else {
            Style::default().fg(th.surface1)
        }
    };
    let text_style = Style::default().fg(if form.submitting {
        th.overlay1
    } else {
        th.text
    });

    let title_block = Block::default()
        .title(" Title ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(field_style(FormField::Title));
    let title_inner = title_block.inner(rows[0]);
    f.render_widget(
        Paragraph::new(Span::styled(form.title.clone(), text_style)).block(title_block),
        rows[0],
    );
    app.form_title_rect = Some(hit(rows[0]));

    let content_block = Block::default()
        .title(" Content ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(field_style(FormField::Content));
    let content_inner = content_block.inner(rows[1]);
    let (last_row, last_col) = text_end_position(&form.content);
    let visible = usize::from(content_inner.height.max(1));
    let scroll = last_row.saturating_sub(visible - 1);
    let content_lines: Vec<Line> = form
        .content
        .split('\n')
        .map(|l| Line::from(Span::styled(l.to_string(), text_style)))
        .collect();
    f.render_widget(
        Paragraph::new(content_lines)
            .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0))
            .block(content_block),
        rows[1],
    );
    app.form_content_rect = Some(hit(rows[1]));

    if let Some(err) = &form.error {
        f.render_widget(
            Paragraph::new(Span::styled(err.clone(), Style::default().fg(th.red))),
            rows[2],
        );
    }

    let label = if form.submitting {
        format!("[ {} Submitting... ]", spinner_glyph(app.spinner_frame))
    } else {
        "[ Submit ]".to_string()
    };
    let btn_style = if form.submitting {
        Style::default().fg(th.overlay1)
    } else if form.focus == FormField::Submit {
        Style::default()
            .fg(th.crust)
            .bg(th.green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(th.green)
    };
    let btn_w = u16::try_from(unicode_width::UnicodeWidthStr::width(label.as_str()))
        .unwrap_or(u16::MAX)
        .min(rows[3].width);
    let btn = Rect {
        x: rows[3].x + (rows[3].width - btn_w) / 2,
        width: btn_w,
        ..rows[3]
    };
    f.render_widget(Paragraph::new(Span::styled(label, btn_style)), btn);
    app.form_submit_rect = Some(hit(btn));

    if form.submitting {
        return;
    }
    let cursor = match form.focus {
        FormField::Title => {
            let (_, col) = text_end_position(&form.title);
            Some((title_inner, 0, col))
        }
        FormField::Content => Some((content_inner, last_row - scroll, last_col)),
        FormField::Submit => None,
    };
    if let Some((field, row, col)) = cursor {
        let x = field.x + u16::try_from(col).unwrap_or(u16::MAX).min(field.width.saturating_sub(1));
        let y = field.y + u16::try_from(row).unwrap_or(0);
        f.set_cursor_position(Position::new(x, y));
    }
}

fn render_help(f: &mut Frame, rect: Rect) {
    let th = theme();
    let key_w = HELP_ROWS.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    let mut lines: Vec<Line> = HELP_ROWS
        .iter()
        .map(|(k, desc)| {
            Line::from(vec![
                Span::styled(
                    format!(" {k:<key_w$}  "),
                    Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD),
                ),
                Span::styled(*desc, Style::default().fg(th.text)),
            ])
        })
        .collect();
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        " Esc to close",
        Style::default().fg(th.overlay1),
    )));
    f.render_widget(
        Paragraph::new(lines).block(frame_block(&th, " Help ", th.sapphire)),
        rect,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(app: &mut AppState, w: u16, h: u16) -> String {
        let mut term = Terminal::new(TestBackend::new(w, h)).expect("terminal");
        term.draw(|f| render_modal(f, app, f.area())).expect("draw");
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

    #[test]
    /// What: Centering leaves a margin and refuses tiny viewports.
    fn modal_rect_centers_and_rejects_small_viewports() {
        let r = modal_rect(Rect::new(0, 0, 100, 40), 60, 20).expect("fits");
        assert_eq!((r.x, r.y, r.width, r.height), (20, 10, 60, 20));
        let r = modal_rect(Rect::new(0, 0, 40, 12), 60, 20).expect("shrinks");
        assert_eq!((r.width, r.height), (38, 10));
        assert!(modal_rect(Rect::new(0, 0, 29, 40), 20, 5).is_none());
        assert!(modal_rect(Rect::new(0, 0, 80, 9), 20, 5).is_none());
    }

    #[test]
    /// What: The form records every hit rect and shows its title and close control.
    ///
    /// Inputs:
    /// - An open, idle form in an 80x30 viewport.
    ///
    /// Output:
    /// - Title, content, submit, close and modal rects are all set.
    fn submit_form_records_hit_rects() {
        let mut app = AppState {
            modal: Modal::SubmitNews(NewsForm::default()),
            ..AppState::default()
        };
        let text = draw(&mut app, 80, 30);
        assert!(text.contains("Submit News"));
        assert!(text.contains("[x]"));
        assert!(text.contains("[ Submit ]"));
        assert!(app.modal_rect.is_some());
        assert!(app.modal_close_rect.is_some());
        assert!(app.form_title_rect.is_some());
        assert!(app.form_content_rect.is_some());
        assert!(app.form_submit_rect.is_some());
    }

    #[test]
    /// What: An in-flight submission swaps the button label and keeps the error line.
    fn submitting_form_shows_busy_label_and_error() {
        let form = NewsForm {
            title: "Flood".into(),
            submitting: true,
            error: Some("Failed to submit news".into()),
            ..NewsForm::default()
        };
        let mut app = AppState {
            modal: Modal::SubmitNews(form),
            ..AppState::default()
        };
        let text = draw(&mut app, 80, 30);
        assert!(text.contains("Submitting..."));
        assert!(text.contains("Failed to submit news"));
        assert!(text.contains("Flood"));
    }

    #[test]
    /// What: Nothing is rendered and no rects are recorded on a too-small viewport.
    fn small_viewport_renders_nothing() {
        let mut app = AppState {
            modal: Modal::Help,
            ..AppState::default()
        };
        let text = draw(&mut app, 20, 8);
        assert!(text.chars().all(|c| c == ' ' || c == '\n'));
        assert!(app.modal_rect.is_none());
        assert!(app.modal_close_rect.is_none());
    }

    #[test]
    /// What: The help modal lists the key reference and records its close control.
    fn help_renders_content() {
        let mut app = AppState {
            modal: Modal::Help,
            ..AppState::default()
        };
        let text = draw(&mut app, 80, 30);
        assert!(text.contains("Submit news"), "{text}");
        assert!(text.contains(" Help "));
        assert!(app.modal_close_rect.is_some());
    }
}
