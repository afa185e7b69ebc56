pub mod form;
pub mod lifecycle;
pub mod sender;

pub use form::{ContactField, ContactForm, ContactPayload, FieldErrors};
pub use lifecycle::{
    submit_contact_form, ContactFormState, FormStore, Notice, NoticeKind, SubmissionState,
    SubmitError,
};
pub use sender::{EmailJsRequest, EmailSender, SendError, SendReceipt};

use crate::usecases::common::UseCaseMetadata;

pub struct SendContactMessage;

impl UseCaseMetadata for SendContactMessage {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "send_contact_message"
    }

    fn display_name() -> &'static str {
        "Get in Touch"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        assert_eq!(SendContactMessage::full_name(), "u501_send_contact_message");
    }
}
