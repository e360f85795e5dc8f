use crate::utils::error::{RelayError, Result};
use std::net::SocketAddr;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(RelayError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(RelayError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(RelayError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_socket_addr(field_name: &str, addr: &str) -> Result<SocketAddr> {
    addr.parse::<SocketAddr>()
        .map_err(|e| RelayError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: addr.to_string(),
            reason: format!("Invalid socket address: {}", e),
        })
}

pub fn validate_hostname(field_name: &str, host: &str) -> Result<()> {
    validate_non_empty_string(field_name, host)?;

    if host.chars().any(|c| c.is_whitespace() || c == '/' || c == ':') {
        return Err(RelayError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: host.to_string(),
            reason: "Hostname cannot contain whitespace, slashes, or a port".to_string(),
        });
    }

    Ok(())
}

pub fn validate_email_address(field_name: &str, value: &str) -> Result<()> {
    value
        .parse::<lettre::Address>()
        .map(|_| ())
        .map_err(|e| RelayError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Invalid email address: {}", e),
        })
}

/// 會寫進郵件標頭的欄位不可含控制字元 (CR/LF 可注入額外標頭)，tab 除外
pub fn validate_header_safe(field_name: &str, value: &str) -> Result<()> {
    if let Some(c) = value.chars().find(|&c| c.is_control() && c != '\t') {
        let reason = match c {
            '\r' | '\n' => "Value contains a line break".to_string(),
            '\0' => "Value contains a null byte".to_string(),
            other => format!("Value contains control character U+{:04X}", other as u32),
        };
        return Err(RelayError::ValidationError {
            field: field_name.to_string(),
            reason,
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RelayError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(RelayError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("endpoint", "https://example.com/api/contact").is_ok());
        assert!(validate_url("endpoint", "http://localhost:3000/api/contact").is_ok());
        assert!(validate_url("endpoint", "").is_err());
        assert!(validate_url("endpoint", "invalid-url").is_err());
        assert!(validate_url("endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_header_safe() {
        assert!(validate_header_safe("name", "Alex").is_ok());
        assert!(validate_header_safe("name", "").is_ok());
        assert!(validate_header_safe("name", "Zoë O'Brien").is_ok());
        assert!(validate_header_safe("name", "Alex\tSmith").is_ok());

        let err = validate_header_safe("name", "Alex\r\nBcc: victim@example.com").unwrap_err();
        assert!(matches!(err, RelayError::ValidationError { ref field, .. } if field == "name"));
        assert!(err.to_string().contains("line break"));

        assert!(validate_header_safe("email", "a@b.c\0").is_err());
        assert!(validate_header_safe("email", "a\u{7}@b.c").is_err());
        assert!(validate_header_safe("name", "Alex\nSmith").is_err());
        assert!(validate_header_safe("name", "Alex\u{85}").is_err());
    }

    #[test]
    fn test_validate_email_address() {
        assert!(validate_email_address("mail.recipient", "owner@example.com").is_ok());
        assert!(validate_email_address("mail.recipient", "owner").is_err());
        assert!(validate_email_address("mail.recipient", "").is_err());
    }

    #[test]
    fn test_validate_hostname_and_addr() {
        assert!(validate_hostname("mail.smtp_host", "smtp.gmail.com").is_ok());
        assert!(validate_hostname("mail.smtp_host", "smtp.gmail.com:465").is_err());
        assert!(validate_hostname("mail.smtp_host", " ").is_err());

        assert!(validate_socket_addr("server.bind", "0.0.0.0:3000").is_ok());
        assert!(validate_socket_addr("server.bind", "localhost").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("delivery.retry_attempts", 1u32, 0, 5).is_ok());
        assert!(validate_range("delivery.retry_attempts", 9u32, 0, 5).is_err());
    }
}
