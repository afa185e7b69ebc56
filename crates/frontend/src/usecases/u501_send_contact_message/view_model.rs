use super::api::EmailJsClient;
use contracts::usecases::u501_send_contact_message::{
    submit_contact_form, ContactField, ContactFormState, FormStore, Notice, SubmitError,
};
use leptos::prelude::*;

/// Signal-backed store; updates stop once the owning component is gone.
struct SignalStore(RwSignal<ContactFormState>);

impl FormStore for SignalStore {
    fn update_form<R>(&self, f: impl FnOnce(&mut ContactFormState) -> R) -> Option<R> {
        self.0.try_update(f)
    }
}

/// ViewModel for the contact form
#[derive(Clone, Copy)]
pub struct ContactFormViewModel {
    pub state: RwSignal<ContactFormState>,
}

impl ContactFormViewModel {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(ContactFormState::new()),
        }
    }

    pub fn value(&self, field: ContactField) -> String {
        self.state.with(|s| s.value(field).to_string())
    }

    pub fn error(&self, field: ContactField) -> Option<&'static str> {
        self.state.with(|s| s.error(field))
    }

    pub fn is_submitting(&self) -> bool {
        self.state.with(|s| s.is_submitting())
    }

    pub fn notice(&self) -> Option<Notice> {
        self.state.with(|s| s.notice())
    }

    // Commands

    pub fn set_field(&self, field: ContactField, value: String) {
        self.state.update(|s| s.set_field(field, value));
    }

    pub fn dismiss_notice(&self) {
        self.state.update(|s| s.dismiss_notice());
    }

    pub fn submit_command(&self, client: EmailJsClient) {
        let store = SignalStore(self.state);
        wasm_bindgen_futures::spawn_local(async move {
            match submit_contact_form(&store, &client).await {
                Ok(notice) => log::debug!("Contact form settled: {:?}", notice.kind),
                Err(SubmitError::Invalid(errors)) => {
                    log::debug!("Contact form has {} invalid field(s)", errors.len())
                }
                Err(e) => log::warn!("Contact form not submitted: {}", e),
            }
        });
    }
}
