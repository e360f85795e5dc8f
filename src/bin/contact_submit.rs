use anyhow::{bail, Result};
use clap::Parser;
use contact_relay::utils::logger;
use contact_relay::{ContactClient, ContactSubmission};
use std::time::Duration;

#[derive(Parser)]
#[command(name = "contact-submit")]
#[command(about = "Send a contact form submission to a running relay")]
struct Args {
    /// Relay endpoint URL
    #[arg(long, default_value = "http://localhost:3000/api/contact")]
    endpoint: String,

    #[arg(long)]
    name: String,

    #[arg(long)]
    email: String,

    /// Message body; read from stdin when omitted
    #[arg(long)]
    message: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value = "30")]
    timeout: u64,

    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let message = match args.message {
        Some(message) => message,
        None => std::io::read_to_string(std::io::stdin())?,
    };

    let submission = ContactSubmission::new(args.name, args.email, message);
    let client = ContactClient::with_timeout(args.endpoint, Duration::from_secs(args.timeout))?;

    println!("🚀 Submitting contact form to {}", client.endpoint());
    let response = client.submit(&submission).await?;

    if !response.success {
        bail!("relay reported failure; check the relay logs for the cause");
    }

    println!("✅ Message accepted by the relay");
    Ok(())
}
