use super::form::ContactPayload;
use crate::shared::config::EmailConfig;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors of the email-send collaborator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendError {
    #[error("Network error: {0}")]
    Transport(String),

    #[error("Email service rejected the request ({status}): {text}")]
    Rejected { status: u16, text: String },

    #[error("No response within {0} ms")]
    Timeout(u32),

    #[error("Could not encode request: {0}")]
    Encode(String),
}

impl SendError {
    /// A failed request is a timeout when the abort timer has fired,
    /// otherwise a transport error.
    pub fn from_transport(message: String, timed_out_after: Option<u32>) -> Self {
        match timed_out_after {
            Some(ms) => SendError::Timeout(ms),
            None => SendError::Transport(message),
        }
    }
}

/// What the provider answered on success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendReceipt {
    pub status: u16,
    pub text: String,
}

impl SendReceipt {
    /// Any 2xx status is a receipt; everything else is `Rejected`.
    pub fn from_response(status: u16, text: String) -> Result<Self, SendError> {
        if (200..300).contains(&status) {
            Ok(Self { status, text })
        } else {
            Err(SendError::Rejected { status, text })
        }
    }
}

/// Transactional-email service used by the contact form.
///
/// Browser futures are not `Send`, hence `?Send`.
#[async_trait(?Send)]
pub trait EmailSender {
    async fn send(&self, payload: &ContactPayload) -> Result<SendReceipt, SendError>;
}

/// JSON body of the EmailJS `email/send` endpoint.
#[derive(Debug, Serialize)]
pub struct EmailJsRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    /// EmailJS calls the public key `user_id`.
    pub user_id: &'a str,
    pub template_params: &'a ContactPayload,
}

impl<'a> EmailJsRequest<'a> {
    pub fn new(config: &'a EmailConfig, payload: &'a ContactPayload) -> Self {
        Self {
            service_id: &config.service_id,
            template_id: &config.template_id,
            user_id: &config.public_key,
            template_params: payload,
        }
    }

    pub fn to_json(&self) -> Result<String, SendError> {
        serde_json::to_string(self).map_err(|e| SendError::Encode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_body_shape() {
        let config = EmailConfig {
            service_id: "service_1".to_string(),
            template_id: "template_1".to_string(),
            public_key: "pk".to_string(),
            ..EmailConfig::default()
        };
        let payload = ContactPayload {
            name: "Jane".to_string(),
            email: "jane@x.com".to_string(),
            subject: "No Subject".to_string(),
            message: "Hi".to_string(),
        };
        let body = EmailJsRequest::new(&config, &payload).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(
            value,
            json!({
                "service_id": "service_1",
                "template_id": "template_1",
                "user_id": "pk",
                "template_params": {
                    "name": "Jane",
                    "email": "jane@x.com",
                    "subject": "No Subject",
                    "message": "Hi"
                }
            })
        );
    }

    #[test]
    fn test_response_status_mapping() {
        assert_eq!(
            SendReceipt::from_response(200, "OK".to_string()),
            Ok(SendReceipt {
                status: 200,
                text: "OK".to_string()
            })
        );
        assert!(SendReceipt::from_response(204, String::new()).is_ok());
        assert_eq!(
            SendReceipt::from_response(400, "The user ID is required".to_string()),
            Err(SendError::Rejected {
                status: 400,
                text: "The user ID is required".to_string()
            })
        );
        assert!(matches!(
            SendReceipt::from_response(199, String::new()),
            Err(SendError::Rejected { status: 199, .. })
        ));
        assert!(matches!(
            SendReceipt::from_response(300, String::new()),
            Err(SendError::Rejected { status: 300, .. })
        ));
        assert!(matches!(
            SendReceipt::from_response(503, "busy".to_string()),
            Err(SendError::Rejected { status: 503, .. })
        ));
    }

    #[test]
    fn test_aborted_request_is_timeout() {
        assert_eq!(
            SendError::from_transport("AbortError".to_string(), Some(15000)),
            SendError::Timeout(15000)
        );
        assert_eq!(
            SendError::from_transport("Failed to fetch".to_string(), None),
            SendError::Transport("Failed to fetch".to_string())
        );
    }

    #[test]
    fn test_error_messages() {
        let rejected = SendError::Rejected {
            status: 400,
            text: "The user ID is required".to_string(),
        };
        assert_eq!(
            rejected.to_string(),
            "Email service rejected the request (400): The user ID is required"
        );
        assert_eq!(SendError::Timeout(15000).to_string(), "No response within 15000 ms");
    }
}
