// Adapters layer: concrete mail transports behind the MailTransport port.

pub mod log;
pub mod smtp;

pub use self::log::LogTransport;
pub use self::smtp::SmtpMailTransport;
