use crate::core::{MailTransport, OutgoingEmail};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Dry-run transport: records the composed email in the log and reports success.
#[derive(Debug, Clone, Default)]
pub struct LogTransport;

impl LogTransport {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MailTransport for LogTransport {
    async fn send(&self, email: &OutgoingEmail) -> Result<()> {
        tracing::info!(
            "📭 [dry-run] To: {} | Reply-To: {} | Subject: {}",
            email.to,
            email.reply_to,
            email.subject
        );
        tracing::debug!("📭 [dry-run] Body ({} chars):\n{}", email.text.chars().count(), email.text);
        Ok(())
    }

    fn name(&self) -> &str {
        "log"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::compose::compose_email;
    use crate::core::ContactSubmission;

    #[tokio::test]
    async fn test_log_transport_always_succeeds() {
        let transport = LogTransport::new();
        let email = compose_email(&ContactSubmission::default(), "");

        tokio_test::assert_ok!(transport.send(&email).await);
        assert_eq!(transport.name(), "log");
    }
}
