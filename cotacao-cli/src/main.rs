//! Cotacao CLI
//!
//! Asks the quote server for the current USD-BRL bid and writes it to a
//! file. Any failure ends the process with a non-zero exit code and leaves
//! the file untouched.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use cotacao_client::CotacaoClient;

#[derive(Parser)]
#[command(name = "cotacao")]
#[command(author, version, about = "Saves the current USD-BRL quote to a file", long_about = None)]
struct Cli {
    /// Base URL of the quote server
    #[arg(long, env = "COTACAO_API_URL", default_value = "http://localhost:8080")]
    api_url: String,

    /// File to overwrite with the quote
    #[arg(long, default_value = "cotacao.txt")]
    output: PathBuf,
}

/// Text written to the output file.
fn quote_line(bid: &str) -> String {
    format!("Dólar:{}", bid)
}

/// Overwrites `path` with the quote line, truncating prior content.
async fn save_quote(path: &Path, bid: &str) -> Result<()> {
    tokio::fs::write(path, quote_line(bid))
        .await
        .with_context(|| format!("Failed to write quote to {}", path.display()))
}

/// Fetches the bid and saves it. The file is only touched after a good response.
async fn run(client: &CotacaoClient, output: &Path) -> Result<String> {
    let quote = client
        .get_bid()
        .await
        .context("Failed to fetch quote from server")?;

    save_quote(output, &quote.bid).await?;
    Ok(quote.bid)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let client = CotacaoClient::new(&cli.api_url);

    let bid = run(&client, &cli.output).await?;
    println!("✓ Saved to {}: {}", cli.output.display(), quote_line(&bid));

    Ok(())
}
