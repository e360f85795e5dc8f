use crate::config::RelayConfig;
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "contact-relay")]
#[command(about = "Relay contact form submissions to an email inbox")]
pub struct CliConfig {
    /// Path to TOML configuration file (defaults to environment variables)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the listen address, e.g. 127.0.0.1:8080
    #[arg(long)]
    pub bind: Option<String>,

    /// Log composed emails instead of sending them
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 載入配置: 指定檔案優先，否則讀環境變數，最後套用命令列覆蓋
    pub fn load_relay_config(&self) -> Result<RelayConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                RelayConfig::from_file(path)?
            }
            None => {
                tracing::info!("📁 Loading configuration from environment");
                RelayConfig::from_env()?
            }
        };

        if let Some(bind) = &self.bind {
            tracing::info!("🔧 Listen address overridden to: {}", bind);
            config.server.bind = bind.clone();
        }

        Ok(config)
    }
}
