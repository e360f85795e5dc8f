#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::{RelayError, Result};
use crate::utils::validation::{
    validate_email_address, validate_hostname, validate_range, validate_socket_addr, Validate,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SmtpSecurity {
    /// 465 implicit TLS
    #[default]
    Tls,
    /// 587 STARTTLS
    StartTls,
    /// 僅供本機開發 (例如 mailpit)
    None,
}

impl SmtpSecurity {
    pub fn default_port(&self) -> u16 {
        match self {
            SmtpSecurity::Tls => 465,
            SmtpSecurity::StartTls => 587,
            SmtpSecurity::None => 25,
        }
    }
}

impl FromStr for SmtpSecurity {
    type Err = RelayError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tls" | "smtps" => Ok(SmtpSecurity::Tls),
            "starttls" => Ok(SmtpSecurity::StartTls),
            "none" | "plain" => Ok(SmtpSecurity::None),
            other => Err(RelayError::InvalidConfigValueError {
                field: "mail.security".to_string(),
                value: other.to_string(),
                reason: "Expected one of: tls, starttls, none".to_string(),
            }),
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MailConfig {
    pub username: String,
    pub password: String,
    pub smtp_host: String,
    pub smtp_port: Option<u16>,
    pub security: SmtpSecurity,
    pub recipient: Option<String>,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            smtp_host: DEFAULT_SMTP_HOST.to_string(),
            smtp_port: None,
            security: SmtpSecurity::default(),
            recipient: None,
        }
    }
}

// 密碼不可出現在日誌
impl fmt::Debug for MailConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailConfig")
            .field("username", &self.username)
            .field("password", &if self.password.is_empty() { "" } else { "***" })
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.port())
            .field("security", &self.security)
            .field("recipient", &self.recipient())
            .finish()
    }
}

impl MailConfig {
    pub fn port(&self) -> u16 {
        self.smtp_port.unwrap_or_else(|| self.security.default_port())
    }

    /// 收件人未設定時寄給帳號本身
    pub fn recipient(&self) -> &str {
        self.recipient
            .as_deref()
            .filter(|r| !r.trim().is_empty())
            .unwrap_or(&self.username)
    }

    /// 實際用於 From 標頭的帳號位址
    pub fn account_address(&self) -> &str {
        if self.username.is_empty() {
            self.recipient()
        } else {
            &self.username
        }
    }

    pub fn has_credentials(&self) -> bool {
        !self.username.is_empty()
    }
}

impl Validate for MailConfig {
    fn validate(&self) -> Result<()> {
        validate_hostname("mail.smtp_host", &self.smtp_host)?;
        validate_range("mail.smtp_port", self.port(), 1, u16::MAX)?;

        if self.security != SmtpSecurity::None {
            if self.username.trim().is_empty() {
                return Err(RelayError::MissingConfigError {
                    field: "EMAIL_USER".to_string(),
                });
            }
            if self.password.is_empty() {
                return Err(RelayError::MissingConfigError {
                    field: "EMAIL_PASS".to_string(),
                });
            }
        }

        if self.account_address().is_empty() {
            return Err(RelayError::MissingConfigError {
                field: "CONTACT_RECIPIENT".to_string(),
            });
        }
        validate_email_address("mail.username", self.account_address())?;
        validate_email_address("mail.recipient", self.recipient())?;

        tracing::debug!("✅ Mail configuration validation passed");
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND_ADDR.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DeliveryConfig {
    pub timeout_seconds: u64,
    pub retry_attempts: u32,
    pub retry_delay_ms: u64,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 10,
            retry_attempts: 1,
            retry_delay_ms: 500,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    pub mail: MailConfig,
    pub server: ServerConfig,
    pub delivery: DeliveryConfig,
}

impl RelayConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// 以查詢函式取代全域環境變數，測試時可注入
    pub fn from_env_with<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let security = match lookup("SMTP_SECURITY") {
            Some(value) => value.parse()?,
            None => defaults.mail.security,
        };

        Ok(Self {
            mail: MailConfig {
                username: lookup("EMAIL_USER").unwrap_or_default(),
                password: lookup("EMAIL_PASS").unwrap_or_default(),
                smtp_host: lookup("SMTP_HOST").unwrap_or(defaults.mail.smtp_host),
                smtp_port: parse_optional(&lookup, "SMTP_PORT")?,
                security,
                recipient: lookup("CONTACT_RECIPIENT"),
            },
            server: ServerConfig {
                bind: lookup("BIND_ADDR").unwrap_or(defaults.server.bind),
            },
            delivery: DeliveryConfig {
                timeout_seconds: parse_optional(&lookup, "DELIVERY_TIMEOUT_SECONDS")?
                    .unwrap_or(defaults.delivery.timeout_seconds),
                retry_attempts: parse_optional(&lookup, "DELIVERY_RETRY_ATTEMPTS")?
                    .unwrap_or(defaults.delivery.retry_attempts),
                retry_delay_ms: parse_optional(&lookup, "DELIVERY_RETRY_DELAY_MS")?
                    .unwrap_or(defaults.delivery.retry_delay_ms),
            },
        })
    }
}

fn parse_optional<F, T>(lookup: &F, key: &str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| RelayError::InvalidConfigValueError {
                field: key.to_string(),
                value: raw.clone(),
                reason: e.to_string(),
            }),
        None => Ok(None),
    }
}

impl ConfigProvider for RelayConfig {
    fn recipient(&self) -> &str {
        self.mail.recipient()
    }

    fn delivery_timeout(&self) -> Duration {
        Duration::from_secs(self.delivery.timeout_seconds)
    }

    fn retry_attempts(&self) -> u32 {
        self.delivery.retry_attempts
    }

    fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.delivery.retry_delay_ms)
    }
}

impl Validate for RelayConfig {
    /// 不含寄信帳密檢查，dry run 時只驗證這部分
    fn validate(&self) -> Result<()> {
        validate_socket_addr("server.bind", &self.server.bind)?;
        validate_range("delivery.timeout_seconds", self.delivery.timeout_seconds, 1, 300)?;
        validate_range("delivery.retry_attempts", self.delivery.retry_attempts, 0, 5)?;
        validate_range("delivery.retry_delay_ms", self.delivery.retry_delay_ms, 0, 60_000)?;

        if let Some(recipient) = self.mail.recipient.as_deref() {
            if !recipient.trim().is_empty() {
                validate_email_address("mail.recipient", recipient)?;
            }
        }

        tracing::info!("✅ Relay configuration validation passed");
        Ok(())
    }
}
