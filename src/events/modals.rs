//! Keys for the Help and Submit News modals.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use crate::logic::submit_form;
use crate::state::{AppState, FormField, Modal, SubmitRequest};

/// What: Route a key press to the open modal.
///
/// Inputs:
/// - `ke`: Key press.
/// - `app`: Application state with a modal open.
/// - `submit_tx`: Submission requests.
pub fn handle_modal_key(
    ke: KeyEvent,
    app: &mut AppState,
    submit_tx: &mpsc::UnboundedSender<SubmitRequest>,
) {
    match &app.modal {
        Modal::None => {}
        Modal::Help => {
            if matches!(
                ke.code,
                KeyCode::Enter | KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?' | 'q')
            ) {
                app.modal = Modal::None;
            }
        }
        Modal::SubmitNews(_) => handle_form_key(ke, app, submit_tx),
    }
}

/// What: Edit or submit the news form.
///
/// Details:
/// - Esc closes the modal at any time.
/// - While a submission is in flight every other key is ignored.
/// - Tab/Shift+Tab cycle Title, Content and Submit; Ctrl+S submits from anywhere.
/// - Enter advances from Title, inserts a newline in Content and submits on Submit.
fn handle_form_key(
    ke: KeyEvent,
    app: &mut AppState,
    submit_tx: &mpsc::UnboundedSender<SubmitRequest>,
) {
    if ke.code == KeyCode::Esc {
        tracing::debug!("submit form dismissed");
        app.modal = Modal::None;
        return;
    }
    let ctrl = ke.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && matches!(ke.code, KeyCode::Char('s' | 'S')) {
        submit_form(app, submit_tx);
        return;
    }
    let Modal::SubmitNews(form) = &mut app.modal else {
        return;
    };
    if form.submitting {
        return;
    }
    let focus = form.focus;
    match ke.code {
        KeyCode::Tab => form.focus = focus.next(),
        KeyCode::BackTab => form.focus = focus.prev(),
        KeyCode::Enter => match focus {
            FormField::Title => form.focus = FormField::Content,
            FormField::Content => form.content.push('\n'),
            FormField::Submit => {
                submit_form(app, submit_tx);
            }
        },
        KeyCode::Backspace => {
            if let Some(text) = form.focused_text_mut() {
                text.pop();
            }
        }
        KeyCode::Char(ch) if !ctrl => {
            if let Some(text) = form.focused_text_mut() {
                text.push(ch);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyModifiers};

    use super::super::test_support::{channels, ctrl, drain, key, send};
    use crate::state::{AppState, FormField, Modal, NewsForm};

    fn typed(app: &mut AppState, tx: &super::super::test_support::Tx, s: &str) {
        for ch in s.chars() {
            send(&key(KeyCode::Char(ch)), app, tx);
        }
    }

    fn form(app: &AppState) -> &NewsForm {
        match &app.modal {
            Modal::SubmitNews(f) => f,
            other => panic!("expected submit form, got {other:?}"),
        }
    }

    #[test]
    /// What: Typing fills Title, Enter moves to Content, Enter there adds a newline.
    fn form_editing_flow() {
        let (tx, _rx) = channels();
        let mut app = AppState {
            modal: Modal::SubmitNews(NewsForm::default()),
            ..AppState::default()
        };
        typed(&mut app, &tx, "Hi");
        send(&key(KeyCode::Enter), &mut app, &tx);
        typed(&mut app, &tx, "a");
        send(&key(KeyCode::Enter), &mut app, &tx);
        typed(&mut app, &tx, "bc");
        send(&key(KeyCode::Backspace), &mut app, &tx);
        assert_eq!(form(&app).title, "Hi");
        assert_eq!(form(&app).content, "a\nb");
        assert_eq!(form(&app).focus, FormField::Content);

        send(&key(KeyCode::Tab), &mut app, &tx);
        assert_eq!(form(&app).focus, FormField::Submit);
        send(
            &CEvent::Key(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)),
            &mut app,
            &tx,
        );
        assert_eq!(form(&app).focus, FormField::Content);
    }

    #[test]
    /// What: Submitting a blank form shows the validation message and sends nothing.
    fn blank_submit_shows_validation() {
        let (tx, mut rx) = channels();
        let mut app = AppState {
            modal: Modal::SubmitNews(NewsForm::default()),
            ..AppState::default()
        };
        send(&ctrl('s'), &mut app, &tx);
        assert_eq!(form(&app).error.as_deref(), Some("Title is required"));
        assert!(drain(&mut rx.submit).is_empty());
    }

    #[test]
    /// What: Once submitting, edits are ignored; Esc still closes the modal.
    ///
    /// Inputs:
    /// - Valid form submitted with Ctrl+S, then a typed character, then Esc.
    ///
    /// Output:
    /// - One request sent; text unchanged while busy; modal closed on Esc.
    fn submitting_blocks_edits() {
        let (tx, mut rx) = channels();
        let mut app = AppState {
            modal: Modal::SubmitNews(NewsForm {
                title: "T".into(),
                content: "C".into(),
                ..NewsForm::default()
            }),
            ..AppState::default()
        };
        send(&ctrl('s'), &mut app, &tx);
        assert!(form(&app).submitting);
        send(&key(KeyCode::Char('x')), &mut app, &tx);
        send(&ctrl('s'), &mut app, &tx);
        assert_eq!(form(&app).title, "T");
        let sent = drain(&mut rx.submit);
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].body.title, "T");

        send(&key(KeyCode::Esc), &mut app, &tx);
        assert_eq!(app.modal, Modal::None);
    }

    #[test]
    /// What: Help closes on Esc, Enter, F1, `?` or `q` and ignores other keys.
    fn help_closes_on_dismiss_keys() {
        let (tx, _rx) = channels();
        let mut app = AppState {
            modal: Modal::Help,
            ..AppState::default()
        };
        send(&key(KeyCode::Char('x')), &mut app, &tx);
        assert_eq!(app.modal, Modal::Help);
        for code in [
            KeyCode::Esc,
            KeyCode::Enter,
            KeyCode::F(1),
            KeyCode::Char('?'),
            KeyCode::Char('q'),
        ] {
            app.modal = Modal::Help;
            send(&key(code), &mut app, &tx);
            assert_eq!(app.modal, Modal::None, "{code:?}");
        }
    }
}
