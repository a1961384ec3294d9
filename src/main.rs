use dino::cli::{Outcome, Session};
use dino::config::Config;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr, stdout belongs to the prompt
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let config = Config::from_env();
    let mut session = Session::new(config.clone());
    if let Some((username, token)) = config.credentials() {
        match session.login(username, token) {
            Ok(()) => info!(username, "logged in from environment"),
            Err(e) => error!("Failed to set provider from environment: {}", e),
        }
    }

    println!("Welcome to dino - type help for help screen");
    if let Some(provider) = session.provider() {
        println!("Using provider {}", provider.name());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("dino => ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            info!("End of input");
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match session.eval(line).await {
            Outcome::Reply(text) => println!("{text}"),
            Outcome::Exit => break,
        }
    }

    Ok(())
}
