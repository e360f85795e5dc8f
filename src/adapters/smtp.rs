use crate::config::{MailConfig, SmtpSecurity};
use crate::core::{MailTransport, OutgoingEmail};
use crate::utils::error::{RelayError, Result};
use async_trait::async_trait;
use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::time::Duration;

/// SMTP transport built once at startup and shared by every request.
pub struct SmtpMailTransport {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    account: Address,
}

impl SmtpMailTransport {
    pub fn from_config(config: &MailConfig, timeout: Duration) -> Result<Self> {
        let account = parse_address(config.account_address())?;

        let mut builder = match config.security {
            SmtpSecurity::Tls => AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
                .map_err(|e| RelayError::ConfigError {
                    message: format!("Cannot configure TLS relay '{}': {}", config.smtp_host, e),
                })?,
            SmtpSecurity::StartTls => {
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host).map_err(
                    |e| RelayError::ConfigError {
                        message: format!(
                            "Cannot configure STARTTLS relay '{}': {}",
                            config.smtp_host, e
                        ),
                    },
                )?
            }
            SmtpSecurity::None => {
                tracing::warn!("⚠️ SMTP security disabled; use only for local development");
                AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.smtp_host)
            }
        };

        builder = builder.port(config.port()).timeout(Some(timeout));

        if config.has_credentials() {
            builder = builder.credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ));
        }

        tracing::info!(
            "📮 SMTP transport ready: {}:{} ({:?}) as {}",
            config.smtp_host,
            config.port(),
            config.security,
            account
        );

        Ok(Self {
            mailer: builder.build(),
            account,
        })
    }
}

#[async_trait]
impl MailTransport for SmtpMailTransport {
    async fn send(&self, email: &OutgoingEmail) -> Result<()> {
        let message = build_message(email, &self.account)?;

        let response = self
            .mailer
            .send(message)
            .await
            .map_err(classify_smtp_error)?;

        tracing::debug!("SMTP response code: {}", response.code());
        Ok(())
    }

    fn name(&self) -> &str {
        "smtp"
    }
}

/// 供應商不接受偽造寄件者，所以 From 使用登入帳號並以訪客名稱當顯示名稱，
/// 訪客信箱放在 Reply-To
pub fn build_message(email: &OutgoingEmail, account: &Address) -> Result<Message> {
    let display_name = Some(email.sender_name.clone()).filter(|name| !name.trim().is_empty());
    let from = Mailbox::new(display_name, account.clone());
    let to = Mailbox::new(None, parse_address(&email.to)?);

    let mut builder = Message::builder().from(from).to(to);
    let mut body = email.text.clone();

    // 訪客信箱格式不符時仍要寄出，改把原字串放進內文
    if !email.reply_to.is_empty() {
        match email.reply_to.parse::<Address>() {
            Ok(address) => builder = builder.reply_to(Mailbox::new(None, address)),
            Err(e) => {
                tracing::warn!(
                    "⚠️ Reply-To '{}' is not a valid address ({}); sending without it",
                    email.reply_to,
                    e
                );
                body = format!("Reply to: {}\n\n{}", email.reply_to, email.text);
            }
        }
    }

    builder
        .subject(email.subject.clone())
        .header(ContentType::TEXT_PLAIN)
        .body(body)
        .map_err(|e| RelayError::MessageBuildError {
            message: e.to_string(),
        })
}

fn parse_address(value: &str) -> Result<Address> {
    value
        .parse::<Address>()
        .map_err(|e| RelayError::AddressError {
            value: value.to_string(),
            reason: e.to_string(),
        })
}

/// 連線中斷、逾時與 4xx 可重試；認證失敗、5xx、用戶端錯誤不重試
fn classify_smtp_error(err: lettre::transport::smtp::Error) -> RelayError {
    let transient = err.is_transient()
        || err.is_timeout()
        || !(err.is_permanent() || err.is_client() || err.is_response());

    RelayError::DeliveryError {
        message: err.to_string(),
        transient,
    }
}
