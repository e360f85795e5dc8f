use crate::core::compose::compose_email;
use crate::core::{ConfigProvider, ContactSubmission, MailTransport, OutgoingEmail};
use crate::utils::error::{RelayError, Result};
use crate::utils::validation::Validate;

pub struct ContactRelay<T: MailTransport, C: ConfigProvider> {
    transport: T,
    config: C,
}

impl<T: MailTransport, C: ConfigProvider> ContactRelay<T, C> {
    pub fn new(transport: T, config: C) -> Self {
        Self { transport, config }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    /// 驗證、組信、寄出。暫時性失敗依設定重試，最終錯誤交由呼叫端記錄
    pub async fn deliver(&self, submission: &ContactSubmission) -> Result<OutgoingEmail> {
        submission.validate()?;

        let email = compose_email(submission, self.config.recipient());
        let max_attempts = self.config.retry_attempts() + 1;
        let mut attempt = 1;

        loop {
            tracing::debug!(
                "📨 Sending via {} (attempt {}/{})",
                self.transport.name(),
                attempt,
                max_attempts
            );

            match self.send_once(&email).await {
                Ok(()) => {
                    tracing::info!(
                        "✅ Contact message from '{}' delivered on attempt {}",
                        email.sender_name,
                        attempt
                    );
                    return Ok(email);
                }
                Err(e) if e.is_transient() && attempt < max_attempts => {
                    tracing::warn!(
                        "⚠️ Transient delivery failure (attempt {}/{}): {}",
                        attempt,
                        max_attempts,
                        e
                    );
                    tokio::time::sleep(self.config.retry_delay()).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn send_once(&self, email: &OutgoingEmail) -> Result<()> {
        let timeout = self.config.delivery_timeout();
        match tokio::time::timeout(timeout, self.transport.send(email)).await {
            Ok(result) => result,
            Err(_) => Err(RelayError::TimeoutError {
                seconds: timeout.as_secs(),
            }),
        }
    }
}
