use contracts::shared::config::EmailConfig;
use contracts::usecases::u501_send_contact_message::{
    ContactPayload, EmailJsRequest, EmailSender, SendError, SendReceipt,
};
use async_trait::async_trait;
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use std::cell::Cell;
use std::rc::Rc;
use web_sys::AbortController;

/// Sends contact messages through the EmailJS REST API.
#[derive(Clone, Debug)]
pub struct EmailJsClient {
    config: EmailConfig,
}

impl EmailJsClient {
    pub fn new(config: EmailConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl EmailSender for EmailJsClient {
    async fn send(&self, payload: &ContactPayload) -> Result<SendReceipt, SendError> {
        let body = EmailJsRequest::new(&self.config, payload).to_json()?;

        let controller =
            AbortController::new().map_err(|e| SendError::Transport(format!("{:?}", e)))?;
        let timeout_ms = self.config.timeout_ms;
        let timed_out = Rc::new(Cell::new(false));
        // Armed until the body has been read; dropping it cancels the abort.
        let timer = {
            let controller = controller.clone();
            let timed_out = timed_out.clone();
            Timeout::new(timeout_ms, move || {
                timed_out.set(true);
                controller.abort();
            })
        };
        let failure = |e: gloo_net::Error| {
            SendError::from_transport(e.to_string(), timed_out.get().then_some(timeout_ms))
        };

        let signal = controller.signal();
        let response = Request::post(&self.config.endpoint)
            .header("Content-Type", "application/json")
            .abort_signal(Some(&signal))
            .body(body)
            .map_err(|e| SendError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(failure)?;

        let status = response.status();
        let text = response.text().await.map_err(failure)?;
        drop(timer);

        SendReceipt::from_response(status, text)
    }
}
