//! Mouse handling: hit-testing against the rectangles recorded by the last render.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use tokio::sync::mpsc;

use crate::logic::{
    PageNav, close_dropdown, move_city_highlight, navigate_page, open_dropdown, open_submit_form,
    select_city, submit_form,
};
use crate::state::{AppState, CityQuery, FormField, HitRect, Modal, NewsRequest, SubmitRequest};

/// Whether `(mx, my)` falls inside `rect`.
const fn point_in_rect(mx: u16, my: u16, rect: Option<HitRect>) -> bool {
    match rect {
        Some((x, y, w, h)) => {
            mx >= x && mx < x.saturating_add(w) && my >= y && my < y.saturating_add(h)
        }
        None => false,
    }
}

/// What: Handle a single mouse event.
///
/// Inputs:
/// - `m`: Mouse event.
/// - `app`: Application state holding the last frame's hit rectangles.
/// - `query_tx`, `news_tx`, `submit_tx`: Request channels.
///
/// Output:
/// - Always `false`; the mouse never quits the application.
///
/// Details:
/// - Modal-first: an open modal consumes every mouse event.
/// - A click outside both the search box and the open dropdown closes the dropdown.
/// - The wheel scrolls the news list or moves the dropdown highlight.
pub fn handle_mouse_event(
    m: MouseEvent,
    app: &mut AppState,
    query_tx: &mpsc::UnboundedSender<CityQuery>,
    news_tx: &mpsc::UnboundedSender<NewsRequest>,
    submit_tx: &mpsc::UnboundedSender<SubmitRequest>,
) -> bool {
    let (mx, my) = (m.column, m.row);
    if app.modal.is_open() {
        if matches!(m.kind, MouseEventKind::Down(MouseButton::Left)) {
            handle_modal_click(mx, my, app, submit_tx);
        }
        return false;
    }
    match m.kind {
        MouseEventKind::Down(MouseButton::Left) => handle_click(mx, my, app, query_tx, news_tx),
        MouseEventKind::ScrollDown | MouseEventKind::ScrollUp => {
            let down = matches!(m.kind, MouseEventKind::ScrollDown);
            if app.dropdown_open && point_in_rect(mx, my, app.dropdown_rect) {
                move_city_highlight(app, if down { 1 } else { -1 });
            } else if point_in_rect(mx, my, app.news_rect) {
                app.news_scroll = if down {
                    app.news_scroll.saturating_add(1)
                } else {
                    app.news_scroll.saturating_sub(1)
                };
            }
        }
        _ => {}
    }
    false
}

fn handle_click(
    mx: u16,
    my: u16,
    app: &mut AppState,
    query_tx: &mpsc::UnboundedSender<CityQuery>,
    news_tx: &mpsc::UnboundedSender<NewsRequest>,
) {
    if app.dropdown_open {
        if let Some((_, y, _, _)) = app.dropdown_rows_rect
            && point_in_rect(mx, my, app.dropdown_rows_rect)
        {
            let idx = app.city_list_state.offset() + usize::from(my - y);
            if let Some(city) = app.cities.get(idx).map(crate::state::City::to_selection) {
                select_city(app, city, query_tx, news_tx);
                app.focus = crate::state::Focus::News;
            }
            return;
        }
        if !point_in_rect(mx, my, app.search_rect) && !point_in_rect(mx, my, app.dropdown_rect) {
            close_dropdown(app);
        }
    }
    if point_in_rect(mx, my, app.search_rect) {
        open_dropdown(app, query_tx);
        return;
    }
    if point_in_rect(mx, my, app.submit_button_rect) {
        open_submit_form(app);
        return;
    }
    let target = app
        .page_button_rects
        .iter()
        .find(|(_, rect)| point_in_rect(mx, my, Some(*rect)))
        .map(|(target, _)| *target);
    if let Some(target) = target {
        if let Some(page) = target {
            navigate_page(app, PageNav::Index(page), news_tx);
        }
        return;
    }
    if point_in_rect(mx, my, app.news_rect) {
        app.focus = crate::state::Focus::News;
    }
}

/// Clicks while a modal is shown: `[x]`, form fields and the submit button.
fn handle_modal_click(
    mx: u16,
    my: u16,
    app: &mut AppState,
    submit_tx: &mpsc::UnboundedSender<SubmitRequest>,
) {
    if point_in_rect(mx, my, app.modal_close_rect) {
        app.modal = Modal::None;
        return;
    }
    if matches!(app.modal, Modal::Help) {
        if !point_in_rect(mx, my, app.modal_rect) {
            app.modal = Modal::None;
        }
        return;
    }
    let Modal::SubmitNews(form) = &mut app.modal else {
        return;
    };
    if form.submitting {
        return;
    }
    if point_in_rect(mx, my, app.form_title_rect) {
        form.focus = FormField::Title;
    } else if point_in_rect(mx, my, app.form_content_rect) {
        form.focus = FormField::Content;
    } else if point_in_rect(mx, my, app.form_submit_rect) {
        form.focus = FormField::Submit;
        submit_form(app, submit_tx);
    }
}
