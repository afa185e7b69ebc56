//! Contact form: validation, EmailJS delivery and the result notice.
//!
//! - api.rs: EmailJS client with request timeout
//! - view_model.rs: form state signal and submit command
//! - view.rs: the contact section

mod api;
mod view;
mod view_model;

pub use api::EmailJsClient;
pub use view::ContactSection;
pub use view_model::ContactFormViewModel;
