pub mod compose;
pub mod relay;

pub use crate::domain::model::{ContactResponse, ContactSubmission, OutgoingEmail};
pub use crate::domain::ports::{ConfigProvider, MailTransport};
pub use crate::utils::error::Result;
