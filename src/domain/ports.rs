use crate::domain::model::OutgoingEmail;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, email: &OutgoingEmail) -> Result<()>;
    fn name(&self) -> &str;
}

#[async_trait]
impl MailTransport for Box<dyn MailTransport> {
    async fn send(&self, email: &OutgoingEmail) -> Result<()> {
        (**self).send(email).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

#[async_trait]
impl<T: MailTransport + ?Sized> MailTransport for Arc<T> {
    async fn send(&self, email: &OutgoingEmail) -> Result<()> {
        (**self).send(email).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

pub trait ConfigProvider: Send + Sync {
    fn recipient(&self) -> &str;
    fn delivery_timeout(&self) -> Duration;
    fn retry_attempts(&self) -> u32;
    fn retry_delay(&self) -> Duration;
}
