//! Modal dialog state for the UI.

use crate::state::types::NewsSubmission;

/// Which control inside the submission form receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    /// Single-line headline input.
    #[default]
    Title,
    /// Multi-line body input.
    Content,
    /// Submit button.
    Submit,
}

impl FormField {
    /// Next control in Tab order (wraps).
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Title => Self::Content,
            Self::Content => Self::Submit,
            Self::Submit => Self::Title,
        }
    }

    /// Previous control in Tab order (wraps).
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Title => Self::Submit,
            Self::Content => Self::Title,
            Self::Submit => Self::Content,
        }
    }
}

/// What: Editable state of the "Submit News" form.
///
/// Details:
/// - `submitting` is set while a POST is in flight; editing is refused meanwhile.
/// - `error` holds either a validation message or the fixed failure message of the
///   last submission.
/// - `request_id` ties an in-flight submission to this form instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsForm {
    /// Headline text.
    pub title: String,
    /// Body text; may contain newlines.
    pub content: String,
    /// Focused control.
    pub focus: FormField,
    /// Whether a submission is outstanding.
    pub submitting: bool,
    /// Inline message shown under the form.
    pub error: Option<String>,
    /// Identifier of the outstanding submission, if any.
    pub request_id: Option<u64>,
}

impl NewsForm {
    /// What: Check both required fields and build the request body.
    ///
    /// Output:
    /// - `Ok(NewsSubmission)` with the fields as typed; `Err` naming the first empty field.
    ///
    /// Details:
    /// - A field consisting only of whitespace counts as empty.
    pub fn validate(&self) -> Result<NewsSubmission, &'static str> {
        if self.title.trim().is_empty() {
            return Err("Title is required");
        }
        if self.content.trim().is_empty() {
            return Err("Content is required");
        }
        Ok(NewsSubmission {
            title: self.title.clone(),
            content: self.content.clone(),
        })
    }

    /// Clear both fields and any message, keeping focus on the title.
    pub fn clear(&mut self) {
        self.title.clear();
        self.content.clear();
        self.error = None;
        self.focus = FormField::Title;
    }

    /// Mutable access to the focused text field; `None` when the button is focused.
    pub fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::Title => Some(&mut self.title),
            FormField::Content => Some(&mut self.content),
            FormField::Submit => None,
        }
    }
}

/// Active modal dialog, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Modal {
    /// No modal is shown.
    #[default]
    None,
    /// The "Submit News" overlay hosting the form.
    SubmitNews(NewsForm),
    /// Key reference.
    Help,
}

impl Modal {
    /// Whether any modal is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Validation rejects blank fields in title-then-content order.
    ///
    /// Inputs:
    /// - Forms with blank title, whitespace-only content, and both filled.
    ///
    /// Output:
    /// - Matching error messages, or a body echoing the typed text.
    fn validate_requires_both_fields() {
        let mut form = NewsForm::default();
        assert_eq!(form.validate(), Err("Title is required"));
        form.title = "Road works".into();
        form.content = "   ".into();
        assert_eq!(form.validate(), Err("Content is required"));
        form.content = "Main St closed\nuntil Friday".into();
        let body = form.validate().expect("valid form");
        assert_eq!(body.title, "Road works");
        assert_eq!(body.content, "Main St closed\nuntil Friday");
    }

    #[test]
    /// What: Tab order cycles through all three controls in both directions.
    fn field_cycle_wraps() {
        let mut f = FormField::Title;
        for _ in 0..3 {
            f = f.next();
        }
        assert_eq!(f, FormField::Title);
        assert_eq!(FormField::Title.prev(), FormField::Submit);
    }

    #[test]
    /// What: Clearing wipes text and error but leaves submission bookkeeping alone.
    fn clear_resets_fields() {
        let mut form = NewsForm {
            title: "t".into(),
            content: "c".into(),
            focus: FormField::Submit,
            submitting: true,
            error: Some("Failed to submit news".into()),
            request_id: Some(3),
        };
        form.clear();
        assert!(form.title.is_empty() && form.content.is_empty());
        assert_eq!(form.error, None);
        assert_eq!(form.focus, FormField::Title);
        assert!(form.submitting);
    }
}
