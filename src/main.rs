use clap::Parser;
use contact_relay::core::MailTransport;
use contact_relay::utils::error::{ErrorSeverity, RelayError};
use contact_relay::utils::logger;
use contact_relay::utils::validation::{validate_socket_addr, Validate};
use contact_relay::{CliConfig, ContactRelay, LogTransport, RelayConfig, SmtpMailTransport};
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting contact-relay");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = run(&cli).await {
        // 記錄詳細錯誤信息
        tracing::error!(
            "❌ contact-relay failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

async fn run(cli: &CliConfig) -> Result<(), RelayError> {
    let config = cli.load_relay_config()?;
    config.validate()?;

    let addr = validate_socket_addr("server.bind", &config.server.bind)?;

    let transport = build_transport(&config, cli.dry_run)?;
    tracing::info!(
        "📬 Delivering to {} via {} transport (timeout {}s, {} retr{})",
        display_recipient(&config),
        transport.name(),
        config.delivery.timeout_seconds,
        config.delivery.retry_attempts,
        if config.delivery.retry_attempts == 1 { "y" } else { "ies" }
    );

    let relay = Arc::new(ContactRelay::new(transport, config));
    contact_relay::http::serve(relay, addr).await
}

fn build_transport(
    config: &RelayConfig,
    dry_run: bool,
) -> Result<Box<dyn MailTransport>, RelayError> {
    if dry_run {
        tracing::info!("🔍 DRY RUN MODE - emails are logged, not sent");
        return Ok(Box::new(LogTransport::new()));
    }

    config.mail.validate()?;
    let timeout = std::time::Duration::from_secs(config.delivery.timeout_seconds);
    Ok(Box::new(SmtpMailTransport::from_config(&config.mail, timeout)?))
}

fn display_recipient(config: &RelayConfig) -> &str {
    match config.mail.recipient() {
        "" => "<unset>",
        recipient => recipient,
    }
}
