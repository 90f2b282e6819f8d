use tokio::sync::mpsc;

use crate::state::{AppState, Modal, NewsForm, SubmitRequest};

/// Show the "Submit News" modal with an empty form.
pub fn open_submit_form(app: &mut AppState) {
    app.modal = Modal::SubmitNews(NewsForm::default());
}

/// What: Validate the open form and hand it to the submit worker.
///
/// Inputs:
/// - `app`: Application state; must have `Modal::SubmitNews` open
/// - `submit_tx`: Channel to the submit worker
///
/// Output:
/// - `true` when a request was sent. The form is then marked as submitting and
///   remembers the request id.
///
/// Details:
/// - Refused while a previous submission from the same form is still in flight.
/// - Validation failures only set the inline message; nothing is sent.
pub fn submit_form(app: &mut AppState, submit_tx: &mpsc::UnboundedSender<SubmitRequest>) -> bool {
    let Modal::SubmitNews(form) = &mut app.modal else {
        return false;
    };
    if form.submitting {
        return false;
    }
    match form.validate() {
        Err(msg) => {
            form.error = Some(msg.to_string());
            false
        }
        Ok(body) => {
            let id = app.next_submit_id;
            app.next_submit_id += 1;
            form.submitting = true;
            form.error = None;
            form.request_id = Some(id);
            tracing::info!(id, title_len = body.title.len(), "submitting news item");
            let _ = submit_tx.send(SubmitRequest { id, body });
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FormField;

    fn filled_form() -> NewsForm {
        NewsForm {
            title: "Bridge reopened".into(),
            content: "Traffic flows again.".into(),
            focus: FormField::Submit,
            ..Default::default()
        }
    }

    #[test]
    /// What: A valid form is sent once and locked while in flight.
    ///
    /// Inputs:
    /// - Open modal with both fields filled; submit twice.
    ///
    /// Output:
    /// - One request carrying the typed body; second attempt refused.
    fn submit_sends_once_and_locks_form() {
        let mut app = AppState {
            modal: Modal::SubmitNews(filled_form()),
            ..Default::default()
        };
        let (tx, mut rx) = mpsc::unbounded_channel();
        assert!(submit_form(&mut app, &tx));
        assert!(!submit_form(&mut app, &tx));
        let req = rx.try_recv().expect("submit request");
        assert_eq!(req.body.title, "Bridge reopened");
        assert!(rx.try_recv().is_err());
        let Modal::SubmitNews(form) = &app.modal else {
            panic!("modal closed unexpectedly");
        };
        assert!(form.submitting);
        assert_eq!(form.request_id, Some(req.id));
    }

    #[test]
    /// What: An invalid form shows the validation message and sends nothing.
    fn submit_with_empty_title_reports_error() {
        let mut app = AppState::default();
        open_submit_form(&mut app);
        let (tx, mut rx) = mpsc::unbounded_channel();
        assert!(!submit_form(&mut app, &tx));
        assert!(rx.try_recv().is_err());
        let Modal::SubmitNews(form) = &app.modal else {
            panic!("modal closed unexpectedly");
        };
        assert_eq!(form.error.as_deref(), Some("Title is required"));
        assert!(!form.submitting);
    }

    #[test]
    /// What: Submitting without the modal open is ignored.
    fn submit_without_modal_is_noop() {
        let mut app = AppState::default();
        let (tx, mut rx) = mpsc::unbounded_channel();
        assert!(!submit_form(&mut app, &tx));
        assert!(rx.try_recv().is_err());
    }
}
