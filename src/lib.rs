pub mod adapters;
pub mod client;
pub mod config;
pub mod core;
pub mod domain;
pub mod http;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{LogTransport, SmtpMailTransport};
pub use client::ContactClient;
pub use config::RelayConfig;
pub use core::relay::ContactRelay;
pub use domain::model::{ContactResponse, ContactSubmission, OutgoingEmail};
pub use utils::error::{RelayError, Result};
