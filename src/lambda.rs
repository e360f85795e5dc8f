#[cfg(feature = "lambda")]
use contact_relay::core::ConfigProvider;
#[cfg(feature = "lambda")]
use contact_relay::utils::{logger, validation::Validate};
#[cfg(feature = "lambda")]
use contact_relay::{ContactRelay, RelayConfig, SmtpMailTransport};
#[cfg(feature = "lambda")]
use lambda_http::{run, Error};
#[cfg(feature = "lambda")]
use std::sync::Arc;

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();
    tracing::info!("Starting contact-relay Lambda function");

    // Lambda 只從環境變數讀取配置
    let config = RelayConfig::from_env()?;
    config.validate()?;
    config.mail.validate()?;

    // 冷啟動時建立一次，之後的呼叫共用
    let transport = SmtpMailTransport::from_config(&config.mail, config.delivery_timeout())?;
    let relay = Arc::new(ContactRelay::new(transport, config));

    run(contact_relay::http::router(relay)).await
}
