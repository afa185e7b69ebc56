//! Contact form submission lifecycle.
//!
//! `Idle -> Submitting -> {Succeeded, Failed} -> Idle`. Leaving `Submitting`
//! is owned by [`SubmittingGuard`], so the form is re-enabled on every exit
//! path of [`submit_contact_form`], including an early drop of the future.

use super::form::{ContactField, ContactForm, ContactPayload, FieldErrors};
use super::sender::{EmailSender, SendError, SendReceipt};
use super::SendContactMessage;
use crate::usecases::common::UseCaseMetadata;
use thiserror::Error;

pub const SUCCESS_MESSAGE: &str = "Message sent successfully!";
pub const FAILURE_MESSAGE: &str = "Failed to send message. Please try again later.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionState {
    /// Inputs are disabled only while a send is in flight.
    pub fn is_interactive(&self) -> bool {
        *self != SubmissionState::Submitting
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

/// User-facing result of the last submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: &'static str,
}

impl Notice {
    pub fn from_outcome(outcome: &Result<SendReceipt, SendError>) -> Self {
        match outcome {
            Ok(_) => Notice {
                kind: NoticeKind::Success,
                message: SUCCESS_MESSAGE,
            },
            Err(_) => Notice {
                kind: NoticeKind::Failure,
                message: FAILURE_MESSAGE,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("{} field(s) need attention", .0.len())]
    Invalid(FieldErrors),

    #[error("a message is already being sent")]
    AlreadySubmitting,

    #[error("contact form is no longer mounted")]
    Detached,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormState {
    form: ContactForm,
    errors: FieldErrors,
    state: SubmissionState,
    notice: Option<Notice>,
}

impl ContactFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn value(&self, field: ContactField) -> &str {
        self.form.get(field)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: ContactField) -> Option<&'static str> {
        self.errors.get(field)
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Edits are ignored while a send is in flight (inputs are disabled).
    pub fn set_field(&mut self, field: ContactField, value: String) {
        if self.is_submitting() {
            return;
        }
        self.form.set(field, value);
    }

    /// Validates and enters `Submitting`.
    ///
    /// On validation failure the errors are stored, fields are left intact
    /// and the state stays `Idle`.
    pub fn begin_submit(&mut self) -> Result<ContactPayload, SubmitError> {
        if self.is_submitting() {
            return Err(SubmitError::AlreadySubmitting);
        }
        match self.form.to_payload() {
            Ok(payload) => {
                self.errors = FieldErrors::default();
                self.state = SubmissionState::Submitting;
                log::debug!("{}: Idle -> Submitting", SendContactMessage::full_name());
                Ok(payload)
            }
            Err(errors) => {
                self.errors = errors.clone();
                self.state = SubmissionState::Idle;
                Err(SubmitError::Invalid(errors))
            }
        }
    }

    /// Records the send outcome. Success clears the form, failure keeps it
    /// for a retry.
    pub fn complete(&mut self, outcome: &Result<SendReceipt, SendError>) -> Notice {
        let notice = Notice::from_outcome(outcome);
        match outcome {
            Ok(_) => {
                self.state = SubmissionState::Succeeded;
                self.form.clear();
                self.errors = FieldErrors::default();
            }
            Err(_) => self.state = SubmissionState::Failed,
        }
        self.notice = Some(notice);
        log::debug!(
            "{}: Submitting -> {:?}",
            SendContactMessage::full_name(),
            self.state
        );
        notice
    }

    /// Returns to the interactive state. No-op when already idle.
    pub fn settle(&mut self) {
        if self.state != SubmissionState::Idle {
            log::debug!("{}: {:?} -> Idle", SendContactMessage::full_name(), self.state);
            self.state = SubmissionState::Idle;
        }
    }
}

/// Owner of the form state, e.g. a reactive signal in the UI.
///
/// Returns `None` once the owner is gone.
pub trait FormStore {
    fn update_form<R>(&self, f: impl FnOnce(&mut ContactFormState) -> R) -> Option<R>;
}

/// Held for the duration of a send; settles the form when dropped.
pub struct SubmittingGuard<'a, F: FormStore> {
    store: &'a F,
}

impl<'a, F: FormStore> SubmittingGuard<'a, F> {
    fn acquire(store: &'a F) -> Self {
        Self { store }
    }
}

impl<F: FormStore> Drop for SubmittingGuard<'_, F> {
    fn drop(&mut self) {
        self.store.update_form(|s| s.settle());
    }
}

/// Runs one submission attempt against `sender`.
pub async fn submit_contact_form<F, S>(store: &F, sender: &S) -> Result<Notice, SubmitError>
where
    F: FormStore,
    S: EmailSender + ?Sized,
{
    let payload = store
        .update_form(|s| s.begin_submit())
        .ok_or(SubmitError::Detached)??;
    let _guard = SubmittingGuard::acquire(store);

    let outcome = sender.send(&payload).await;
    match &outcome {
        Ok(receipt) => log::info!(
            "Email sent successfully: {} {}",
            receipt.status,
            receipt.text
        ),
        Err(e) => log::error!("Failed to send email: {}", e),
    }

    let notice = store
        .update_form(|s| s.complete(&outcome))
        .unwrap_or_else(|| Notice::from_outcome(&outcome));
    Ok(notice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::u501_send_contact_message::form::{DEFAULT_SUBJECT, NAME_REQUIRED};
    use async_trait::async_trait;
    use std::cell::RefCell;

    /// Records the submission state after every update.
    #[derive(Default)]
    struct RecordingStore {
        state: RefCell<ContactFormState>,
        history: RefCell<Vec<SubmissionState>>,
    }

    impl RecordingStore {
        fn with_form(name: &str, email: &str, subject: &str, message: &str) -> Self {
            let store = RecordingStore::default();
            {
                let mut s = store.state.borrow_mut();
                s.set_field(ContactField::Name, name.to_string());
                s.set_field(ContactField::Email, email.to_string());
                s.set_field(ContactField::Subject, subject.to_string());
                s.set_field(ContactField::Message, message.to_string());
            }
            store.history.borrow_mut().push(store.state.borrow().state());
            store
        }
    }

    impl FormStore for RecordingStore {
        fn update_form<R>(&self, f: impl FnOnce(&mut ContactFormState) -> R) -> Option<R> {
            let result = f(&mut self.state.borrow_mut());
            let state = self.state.borrow().state();
            let mut history = self.history.borrow_mut();
            if history.last() != Some(&state) {
                history.push(state);
            }
            Some(result)
        }
    }

    struct FakeSender {
        result: Result<SendReceipt, SendError>,
        sent: RefCell<Vec<ContactPayload>>,
    }

    impl FakeSender {
        fn ok() -> Self {
            Self {
                result: Ok(SendReceipt {
                    status: 200,
                    text: "OK".to_string(),
                }),
                sent: RefCell::new(Vec::new()),
            }
        }

        fn failing(error: SendError) -> Self {
            Self {
                result: Err(error),
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl EmailSender for FakeSender {
        async fn send(&self, payload: &ContactPayload) -> Result<SendReceipt, SendError> {
            self.sent.borrow_mut().push(payload.clone());
            self.result.clone()
        }
    }

    /// A store whose owner has been dropped.
    struct DetachedStore;

    impl FormStore for DetachedStore {
        fn update_form<R>(&self, _f: impl FnOnce(&mut ContactFormState) -> R) -> Option<R> {
            None
        }
    }

    use SubmissionState::*;

    #[tokio::test]
    async fn test_successful_submission_clears_form() {
        let store = RecordingStore::with_form("Jane", "jane@x.com", "", "Hi");
        let sender = FakeSender::ok();

        let notice = submit_contact_form(&store, &sender).await.unwrap();

        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(notice.message, SUCCESS_MESSAGE);
        assert_eq!(*store.history.borrow(), vec![Idle, Submitting, Succeeded, Idle]);

        let sent = sender.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].subject, DEFAULT_SUBJECT);
        assert_eq!(sent[0].name, "Jane");

        let state = store.state.borrow();
        assert_eq!(state.form(), &ContactForm::default());
        assert!(state.errors().is_empty());
        assert_eq!(state.notice(), Some(notice));
    }

    #[tokio::test]
    async fn test_failed_submission_keeps_fields() {
        let store = RecordingStore::with_form("Jane", "jane@x.com", "", "Hi");
        let sender = FakeSender::failing(SendError::Transport("offline".to_string()));

        let notice = submit_contact_form(&store, &sender).await.unwrap();

        assert_eq!(notice.kind, NoticeKind::Failure);
        assert_eq!(notice.message, FAILURE_MESSAGE);
        assert_eq!(*store.history.borrow(), vec![Idle, Submitting, Failed, Idle]);

        let state = store.state.borrow();
        assert_eq!(state.value(ContactField::Name), "Jane");
        assert_eq!(state.value(ContactField::Email), "jane@x.com");
        assert_eq!(state.value(ContactField::Subject), "");
        assert_eq!(state.value(ContactField::Message), "Hi");
        assert!(state.state().is_interactive());
    }

    #[tokio::test]
    async fn test_timeout_is_a_failure() {
        let store = RecordingStore::with_form("Jane", "jane@x.com", "Hello", "Hi");
        let sender = FakeSender::failing(SendError::Timeout(15_000));

        let notice = submit_contact_form(&store, &sender).await.unwrap();
        assert_eq!(notice.kind, NoticeKind::Failure);
        assert_eq!(store.state.borrow().state(), Idle);
    }

    #[tokio::test]
    async fn test_invalid_form_never_reaches_sender() {
        let store = RecordingStore::with_form("", "a@b", "", "Hi");
        let sender = FakeSender::ok();

        let result = submit_contact_form(&store, &sender).await;

        let errors = match result {
            Err(SubmitError::Invalid(errors)) => errors,
            other => panic!("expected validation error, got {other:?}"),
        };
        assert_eq!(errors.get(ContactField::Name), Some("Name is required"));
        assert_eq!(errors.get(ContactField::Email), Some("Valid email is required"));
        assert!(sender.sent.borrow().is_empty());
        assert_eq!(*store.history.borrow(), vec![Idle]);

        let state = store.state.borrow();
        assert_eq!(state.errors(), &errors);
        assert_eq!(state.value(ContactField::Email), "a@b");
        assert_eq!(state.value(ContactField::Message), "Hi");
    }

    #[tokio::test]
    async fn test_detached_store() {
        let sender = FakeSender::ok();
        let result = submit_contact_form(&DetachedStore, &sender).await;
        assert_eq!(result, Err(SubmitError::Detached));
        assert!(sender.sent.borrow().is_empty());
    }

    #[test]
    fn test_second_submit_while_in_flight_is_rejected() {
        let mut state = ContactFormState::new();
        state.set_field(ContactField::Name, "Jane".to_string());
        state.set_field(ContactField::Email, "jane@x.com".to_string());
        state.set_field(ContactField::Message, "Hi".to_string());

        assert!(state.begin_submit().is_ok());
        assert!(!state.state().is_interactive());
        assert_eq!(state.begin_submit(), Err(SubmitError::AlreadySubmitting));

        // inputs are disabled while sending
        state.set_field(ContactField::Name, "Other".to_string());
        assert_eq!(state.value(ContactField::Name), "Jane");
    }

    #[test]
    fn test_guard_settles_on_drop() {
        let store = RecordingStore::with_form("Jane", "jane@x.com", "", "Hi");
        store.update_form(|s| s.begin_submit()).unwrap().unwrap();
        {
            let _guard = SubmittingGuard::acquire(&store);
            assert!(store.state.borrow().is_submitting());
        }
        assert_eq!(store.state.borrow().state(), Idle);
    }

    #[test]
    fn test_errors_cleared_after_valid_submit() {
        let mut state = ContactFormState::new();
        assert!(state.begin_submit().is_err());
        assert_eq!(state.errors().len(), 3);

        state.set_field(ContactField::Name, "Jane".to_string());
        state.set_field(ContactField::Email, "jane@x.com".to_string());
        state.set_field(ContactField::Message, "Hi".to_string());
        assert!(state.begin_submit().is_ok());
        assert!(state.errors().is_empty());
    }

    #[test]
    fn test_dismiss_notice() {
        let mut state = ContactFormState::new();
        state.complete(&Err(SendError::Timeout(1)));
        assert!(state.notice().is_some());
        state.dismiss_notice();
        assert!(state.notice().is_none());
    }

    #[test]
    fn test_editing_keeps_errors_until_next_submit() {
        let mut state = ContactFormState::new();
        assert!(matches!(state.begin_submit(), Err(SubmitError::Invalid(_))));
        let errors = state.errors().clone();

        state.set_field(ContactField::Name, "Jane".to_string());

        assert_eq!(state.value(ContactField::Name), "Jane");
        assert_eq!(state.errors(), &errors);
        assert_eq!(state.error(ContactField::Name), Some(NAME_REQUIRED));
        assert_eq!(state.state(), Idle);
    }

    #[tokio::test]
    async fn test_next_submission_replaces_notice() {
        let store = RecordingStore::with_form("Jane", "jane@x.com", "", "Hi");

        submit_contact_form(&store, &FakeSender::failing(SendError::Timeout(1)))
            .await
            .unwrap();
        assert_eq!(
            store.state.borrow().notice().map(|n| n.kind),
            Some(NoticeKind::Failure)
        );

        submit_contact_form(&store, &FakeSender::ok()).await.unwrap();
        let notice = store.state.borrow().notice();
        assert_eq!(notice.map(|n| n.kind), Some(NoticeKind::Success));
        assert_eq!(notice.map(|n| n.message), Some(SUCCESS_MESSAGE));
    }
}
