use crate::contact::models::{validate_submission, ContactSubmission, FieldErrors};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }
}

/// How a sent submission ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Accepted,
    Rejected { status: u16, message: Option<String> },
    Unreachable(String),
    TimedOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
}

impl Notice {
    fn for_outcome(outcome: &SubmitOutcome) -> Self {
        let failed = |description: String| Notice {
            kind: NoticeKind::Error,
            title: "Message not sent".to_string(),
            description,
        };

        match outcome {
            SubmitOutcome::Accepted => Notice {
                kind: NoticeKind::Success,
                title: "Message sent!".to_string(),
                description: "Thank you for your message. I will get back to you soon.".to_string(),
            },
            SubmitOutcome::Rejected { message: Some(message), .. } => failed(message.clone()),
            SubmitOutcome::Rejected { status, message: None } => failed(format!(
                "The server could not accept your message (status {}). Please try again.",
                status
            )),
            SubmitOutcome::Unreachable(_) => failed(
                "Could not reach the server. Check your connection and try again.".to_string(),
            ),
            SubmitOutcome::TimedOut => {
                failed("The server took too long to respond. Please try again.".to_string())
            }
        }
    }
}

/// State behind the contact form: field values, inline errors, and the
/// `Idle -> Submitting -> Idle` latch that keeps one request in flight.
#[derive(Debug, Default)]
pub struct ContactForm {
    values: ContactSubmission,
    errors: FieldErrors,
    phase: SubmitPhase,
    notice: Option<Notice>,
    notice_seq: u32,
}

impl ContactForm {
    pub fn values(&self) -> &ContactSubmission {
        &self.values
    }

    pub fn error_for(&self, field: Field) -> Option<&str> {
        self.errors.get(field.key()).map(String::as_str)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    /// Current toast, with a sequence number that changes every time a new
    /// one is raised.
    pub fn notice(&self) -> Option<(u32, &Notice)> {
        self.notice.as_ref().map(|notice| (self.notice_seq, notice))
    }

    pub fn dismiss_notice(&mut self, seq: u32) {
        if seq == self.notice_seq {
            self.notice = None;
        }
    }

    /// Updates one field. A field already flagged is re-checked so the inline
    /// message clears as soon as the input becomes valid.
    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.values.name,
            Field::Email => &mut self.values.email,
            Field::Subject => &mut self.values.subject,
            Field::Message => &mut self.values.message,
        };
        *slot = value;

        if self.errors.contains_key(field.key()) {
            match validate_submission(&self.values).remove(field.key()) {
                Some(message) => self.errors.insert(field.key().to_string(), message),
                None => self.errors.remove(field.key()),
            };
        }
    }

    /// Validates and, if the form is idle and valid, moves to `Submitting` and
    /// hands back the payload to send. `None` means no request may be made.
    pub fn begin_submit(&mut self) -> Option<ContactSubmission> {
        if self.is_submitting() {
            return None;
        }

        self.errors = validate_submission(&self.values);
        if !self.errors.is_empty() {
            return None;
        }

        self.phase = SubmitPhase::Submitting;
        Some(self.values.clone())
    }

    /// Settles an in-flight submission. Success clears the fields; any failure
    /// keeps them so the visitor can resend.
    pub fn finish(&mut self, outcome: SubmitOutcome) -> &Notice {
        self.phase = SubmitPhase::Idle;
        if outcome == SubmitOutcome::Accepted {
            self.values = ContactSubmission::default();
            self.errors.clear();
        }

        self.notice_seq = self.notice_seq.wrapping_add(1);
        self.notice.insert(Notice::for_outcome(&outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(name: &str, email: &str, subject: &str, message: &str) -> ContactForm {
        let mut form = ContactForm::default();
        form.set(Field::Name, name.to_string());
        form.set(Field::Email, email.to_string());
        form.set(Field::Subject, subject.to_string());
        form.set(Field::Message, message.to_string());
        form
    }

    fn jane() -> ContactForm {
        filled("Jane", "jane@example.com", "Hi", "This is a long enough message.")
    }

    #[test]
    fn successful_submission_resets_form_and_notifies_once() {
        let mut form = jane();

        let payload = form.begin_submit().expect("valid form should submit");
        assert_eq!(payload.name, "Jane");
        assert_eq!(payload.email, "jane@example.com");
        assert_eq!(payload.subject, "Hi");
        assert_eq!(form.phase(), SubmitPhase::Submitting);

        let notice = form.finish(SubmitOutcome::Accepted).clone();
        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(notice.title, "Message sent!");

        assert_eq!(form.phase(), SubmitPhase::Idle);
        assert_eq!(form.values(), &ContactSubmission::default());
        assert_eq!(form.notice().map(|(seq, _)| seq), Some(1));
    }

    #[test]
    fn invalid_form_never_produces_a_request() {
        let cases = [
            filled("", "jane@example.com", "Hi", "This is a long enough message."),
            filled("   ", "jane@example.com", "Hi", "This is a long enough message."),
            filled("Jane", "jane@example.com", " ", "This is a long enough message."),
            filled("Jane", "jane@example.com", "Hi", "too short"),
            filled("Jane", "not-an-email", "Hi", "This is a long enough message."),
        ];

        for mut form in cases {
            assert!(form.begin_submit().is_none());
            assert_eq!(form.phase(), SubmitPhase::Idle);
            assert!(!form.errors().is_empty());
            assert!(form.notice().is_none());
        }
    }

    #[test]
    fn invalid_email_is_reported_inline() {
        let mut form = filled("Jane", "not-an-email", "Hi", "This is a long enough message.");
        assert!(form.begin_submit().is_none());
        assert_eq!(form.error_for(Field::Email), Some("Invalid email address"));
        assert_eq!(form.error_for(Field::Name), None);
    }

    #[test]
    fn second_trigger_while_pending_sends_nothing() {
        let mut form = jane();

        let requests: Vec<_> = (0..2).filter_map(|_| form.begin_submit()).collect();
        assert_eq!(requests.len(), 1);

        form.finish(SubmitOutcome::Accepted);
        assert_eq!(form.phase(), SubmitPhase::Idle);
    }

    #[test]
    fn failures_keep_values_and_reenable() {
        let outcomes = [
            SubmitOutcome::Rejected { status: 400, message: Some("All fields are required".to_string()) },
            SubmitOutcome::Rejected { status: 502, message: None },
            SubmitOutcome::Unreachable("connection refused".to_string()),
            SubmitOutcome::TimedOut,
        ];

        for outcome in outcomes {
            let mut form = jane();
            let sent = form.begin_submit().unwrap();

            let notice = form.finish(outcome).clone();
            assert_eq!(notice.kind, NoticeKind::Error);
            assert_eq!(form.phase(), SubmitPhase::Idle);
            assert_eq!(form.values(), &sent);

            // The visitor can resend straight away.
            assert!(form.begin_submit().is_some());
        }
    }

    #[test]
    fn failure_notices_are_distinct() {
        let describe = |outcome| {
            let mut form = jane();
            form.begin_submit();
            form.finish(outcome).description.clone()
        };

        let rejected = describe(SubmitOutcome::Rejected { status: 400, message: Some("All fields are required".to_string()) });
        let unreachable = describe(SubmitOutcome::Unreachable("offline".to_string()));
        let timed_out = describe(SubmitOutcome::TimedOut);

        assert_eq!(rejected, "All fields are required");
        assert_ne!(unreachable, timed_out);
        assert!(describe(SubmitOutcome::Rejected { status: 500, message: None }).contains("500"));
    }

    #[test]
    fn fixing_a_flagged_field_clears_its_error() {
        let mut form = filled("Jane", "jane@", "Hi", "This is a long enough message.");
        assert!(form.begin_submit().is_none());
        assert!(form.error_for(Field::Email).is_some());

        form.set(Field::Email, "jane@example".to_string());
        assert_eq!(form.error_for(Field::Email), Some("Invalid email address"));

        form.set(Field::Email, "jane@example.com".to_string());
        assert_eq!(form.error_for(Field::Email), None);
    }

    #[test]
    fn unflagged_fields_are_not_checked_while_typing() {
        let mut form = ContactForm::default();
        form.set(Field::Message, "short".to_string());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn stale_dismiss_does_not_hide_newer_notice() {
        let mut form = jane();
        form.begin_submit();
        form.finish(SubmitOutcome::TimedOut);
        let (first, _) = form.notice().unwrap();

        form.begin_submit();
        form.finish(SubmitOutcome::Accepted);

        form.dismiss_notice(first);
        assert_eq!(form.notice().map(|(_, n)| n.kind), Some(NoticeKind::Success));

        let (current, _) = form.notice().unwrap();
        form.dismiss_notice(current);
        assert!(form.notice().is_none());
    }
}
