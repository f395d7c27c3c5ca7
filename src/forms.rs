//! Contact-form state machine and the pluggable submission collaborator.
//!
//! The machine itself is plain data so the transition rules are testable
//! off the page; the contact section holds one in a signal and drives it
//! from DOM events.

use std::future::Future;
use std::pin::Pin;

use thiserror::Error;

/// The four editable fields of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

/// What the visitor has typed so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl MessageDraft {
    /// True when every field has content. The inputs are `required` in the
    /// markup, so this only backstops programmatic submission.
    pub fn is_complete(&self) -> bool {
        !(self.name.is_empty()
            || self.email.is_empty()
            || self.subject.is_empty()
            || self.message.is_empty())
    }
}

/// Where a submission currently stands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    /// Shown briefly, then auto-reset to idle.
    Success,
    /// Reserved for real delivery backends; [`SimulatedBackend`] never
    /// produces it.
    Error,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// A submission is already in flight; the new one is dropped without
    /// scheduling anything.
    #[error("a submission is already in progress")]
    AlreadySubmitting,
    #[error("message is missing required fields")]
    IncompleteDraft,
    #[error("delivery failed: {0}")]
    Delivery(String),
}

/// The idle -> submitting -> (success | error) -> idle cycle, plus field
/// edits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    draft: MessageDraft,
    status: SubmitStatus,
}

impl ContactForm {
    pub fn draft(&self) -> &MessageDraft {
        &self.draft
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.draft.name,
            Field::Email => &self.draft.email,
            Field::Subject => &self.draft.subject,
            Field::Message => &self.draft.message,
        }
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.draft.name = value,
            Field::Email => self.draft.email = value,
            Field::Subject => self.draft.subject = value,
            Field::Message => self.draft.message = value,
        }
    }

    /// Move idle -> submitting and hand back the draft to deliver.
    ///
    /// Re-entrant calls while a submission is in flight are rejected, so a
    /// double click cannot start a second delivery or a second reset timer.
    pub fn begin_submit(&mut self) -> Result<MessageDraft, SubmitError> {
        if self.status == SubmitStatus::Submitting {
            return Err(SubmitError::AlreadySubmitting);
        }
        if !self.draft.is_complete() {
            return Err(SubmitError::IncompleteDraft);
        }
        self.status = SubmitStatus::Submitting;
        Ok(self.draft.clone())
    }

    /// Settle the in-flight submission. Success clears the draft; failure
    /// keeps it so the visitor can retry without retyping.
    pub fn finish_submit(&mut self, outcome: Result<(), SubmitError>) {
        debug_assert_eq!(self.status, SubmitStatus::Submitting);
        match outcome {
            Ok(()) => {
                self.draft = MessageDraft::default();
                self.status = SubmitStatus::Success;
            }
            Err(_) => self.status = SubmitStatus::Error,
        }
    }

    /// Return a settled submission to idle (the auto-reset step). A no-op
    /// in any other state.
    pub fn reset_status(&mut self) {
        if matches!(self.status, SubmitStatus::Success | SubmitStatus::Error) {
            self.status = SubmitStatus::Idle;
        }
    }
}

/// Boxed single-threaded future; the page runs on the browser event loop.
pub type SubmitFuture = Pin<Box<dyn Future<Output = Result<(), SubmitError>>>>;

/// Delivery collaborator behind the form.
///
/// A production implementation would post the draft somewhere and map
/// transport failures to [`SubmitError::Delivery`]; the site ships with
/// [`SimulatedBackend`]. Swapping one in never touches the state machine.
pub trait SubmitBackend {
    fn submit(&self, draft: &MessageDraft) -> SubmitFuture;
}

/// Fixed delay before the simulated backend reports success.
pub const SIMULATED_DELAY_MS: u32 = 2_000;

/// How long a settled status is shown before falling back to idle.
pub const STATUS_RESET_MS: f64 = 3_000.0;

/// Demo backend: no network involved, resolves to success after a fixed
/// delay.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedBackend;

impl SubmitBackend for SimulatedBackend {
    fn submit(&self, _draft: &MessageDraft) -> SubmitFuture {
        Box::pin(async {
            gloo_timers::future::TimeoutFuture::new(SIMULATED_DELAY_MS).await;
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::default();
        form.set_field(Field::Name, "Ada".into());
        form.set_field(Field::Email, "ada@example.com".into());
        form.set_field(Field::Subject, "Hello".into());
        form.set_field(Field::Message, "Nice site!".into());
        form
    }

    #[test]
    fn successful_submission_walks_the_full_cycle() {
        let mut form = filled_form();
        assert_eq!(form.status(), SubmitStatus::Idle);

        let draft = form.begin_submit().expect("complete draft should submit");
        assert_eq!(form.status(), SubmitStatus::Submitting);
        assert_eq!(draft.name, "Ada");

        form.finish_submit(Ok(()));
        assert_eq!(form.status(), SubmitStatus::Success);
        // fields clear at the success transition
        assert_eq!(form.draft(), &MessageDraft::default());

        form.reset_status();
        assert_eq!(form.status(), SubmitStatus::Idle);
    }

    #[test]
    fn resubmit_while_submitting_is_rejected() {
        let mut form = filled_form();
        form.begin_submit().unwrap();

        let second = form.begin_submit();
        assert_eq!(second, Err(SubmitError::AlreadySubmitting));
        // no state transition happened
        assert_eq!(form.status(), SubmitStatus::Submitting);
        assert!(form.draft().is_complete());
    }

    #[test]
    fn failed_delivery_keeps_the_draft_for_retry() {
        let mut form = filled_form();
        let draft_before = form.draft().clone();
        form.begin_submit().unwrap();

        form.finish_submit(Err(SubmitError::Delivery("503".into())));
        assert_eq!(form.status(), SubmitStatus::Error);
        assert_eq!(form.draft(), &draft_before);

        form.reset_status();
        assert_eq!(form.status(), SubmitStatus::Idle);
        // the retry goes straight back through
        assert!(form.begin_submit().is_ok());
    }

    #[test]
    fn incomplete_draft_never_enters_submitting() {
        let mut form = ContactForm::default();
        form.set_field(Field::Name, "Ada".into());

        assert_eq!(form.begin_submit(), Err(SubmitError::IncompleteDraft));
        assert_eq!(form.status(), SubmitStatus::Idle);
    }

    #[test]
    fn reset_is_a_noop_outside_settled_states() {
        let mut form = filled_form();
        form.reset_status();
        assert_eq!(form.status(), SubmitStatus::Idle);

        form.begin_submit().unwrap();
        form.reset_status();
        // the in-flight submission is not abandoned by a stray timer
        assert_eq!(form.status(), SubmitStatus::Submitting);
    }

    #[test]
    fn field_edits_land_on_the_right_field() {
        let mut form = ContactForm::default();
        form.set_field(Field::Subject, "Question".into());
        assert_eq!(form.field(Field::Subject), "Question");
        assert_eq!(form.field(Field::Name), "");

        form.set_field(Field::Subject, "Revised".into());
        assert_eq!(form.field(Field::Subject), "Revised");
    }
}
