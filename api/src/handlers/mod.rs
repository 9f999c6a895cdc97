pub mod error;

pub use error::{handle_domain_error, message_response, status_and_message};
