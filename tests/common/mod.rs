#![allow(dead_code)]

use async_trait::async_trait;
use contact_relay::config::{DeliveryConfig, MailConfig};
use contact_relay::core::MailTransport;
use contact_relay::{ContactRelay, OutgoingEmail, RelayConfig, RelayError, Result};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behavior {
    Succeed,
    FailPermanent,
    FailTransient,
}

/// 記錄每次寄送內容的測試用傳輸
#[derive(Clone)]
pub struct RecordingTransport {
    behavior: Behavior,
    sent: Arc<Mutex<Vec<OutgoingEmail>>>,
}

impl RecordingTransport {
    pub fn new(behavior: Behavior) -> Self {
        Self {
            behavior,
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub async fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().await.clone()
    }

    pub async fn calls(&self) -> usize {
        self.sent.lock().await.len()
    }
}

#[async_trait]
impl MailTransport for RecordingTransport {
    async fn send(&self, email: &OutgoingEmail) -> Result<()> {
        self.sent.lock().await.push(email.clone());
        match self.behavior {
            Behavior::Succeed => Ok(()),
            Behavior::FailPermanent => Err(RelayError::DeliveryError {
                message: "535 5.7.8 Username and Password not accepted".to_string(),
                transient: false,
            }),
            Behavior::FailTransient => Err(RelayError::DeliveryError {
                message: "Connection reset by peer".to_string(),
                transient: true,
            }),
        }
    }

    fn name(&self) -> &str {
        "recording"
    }
}

pub fn test_config() -> RelayConfig {
    RelayConfig {
        mail: MailConfig {
            username: "owner@example.com".to_string(),
            password: "app-password".to_string(),
            ..MailConfig::default()
        },
        delivery: DeliveryConfig {
            timeout_seconds: 2,
            retry_attempts: 1,
            retry_delay_ms: 0,
        },
        ..RelayConfig::default()
    }
}

pub fn test_relay(transport: RecordingTransport) -> ContactRelay<RecordingTransport, RelayConfig> {
    ContactRelay::new(transport, test_config())
}

/// 在隨機埠啟動 relay，回傳 base URL
pub async fn spawn_relay(transport: RecordingTransport) -> String {
    let relay = Arc::new(test_relay(transport));
    let app = contact_relay::http::router(relay);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}
