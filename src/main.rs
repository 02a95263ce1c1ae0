//! DexPaprika - command-line entry point
//!
//! Prints JSON for a handful of read-only queries. Logs go to stderr so stdout
//! stays machine-readable.

use anyhow::{bail, Context, Result};
use dexpaprika::{AsyncDexPaprikaClient, AsyncDexPaprikaClientImpl, Config, DexPaprikaClient};
use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: dexpaprika <stats | networks | search <query> | pool <network> <address> | token <network> <address>>";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Using DexPaprika API at {}", config.api_url);

    let client = AsyncDexPaprikaClientImpl::new(DexPaprikaClient::new(&config));
    let args: Vec<String> = std::env::args().skip(1).collect();

    if let Err(e) = run(&client, &args).await {
        error!("{:#}", e);
        return Err(e);
    }

    info!(metrics = ?client.inner().metrics().summary(), "Done");
    Ok(())
}

async fn run(client: &dyn AsyncDexPaprikaClient, args: &[String]) -> Result<()> {
    let words: Vec<&str> = args.iter().map(String::as_str).collect();

    match words.as_slice() {
        ["stats"] => print_json(&client.stats().await?),
        ["networks"] => print_json(&client.networks().await?),
        ["search", terms @ ..] if !terms.is_empty() => {
            print_json(&client.search(&terms.join(" ")).await?)
        }
        ["pool", network, address] => {
            print_json(&client.pool_details(network, address, false).await?)
        }
        ["token", network, address] => print_json(&client.token_details(network, address).await?),
        _ => bail!(USAGE),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to encode response")?;
    println!("{}", text);
    Ok(())
}
