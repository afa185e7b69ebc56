pub mod common;
pub mod u501_send_contact_message;
