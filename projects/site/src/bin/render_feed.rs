//! Prints the research page feed lists as HTML, read through a running proxy.

use anyhow::{Context, Result};
use clap::Parser;
use projects_site::feed::{render_feed, FeedClient, FeedPage, DEFAULT_REPO};
use utils_trace::{init as tracing_init, LogFormat};

#[derive(Parser, Debug)]
#[command(name = "render_feed", about = "Render GitHub activity lists through the gh-proxy endpoint")]
struct Args {
    /// Full URL of the proxy endpoint
    #[arg(
        long,
        env = "GH_PROXY_URL",
        default_value = "http://127.0.0.1:8000/.netlify/functions/gh-proxy"
    )]
    proxy_url: String,

    /// Repository as owner/name
    #[arg(long, env = "GH_FEED_REPO", default_value = DEFAULT_REPO)]
    repo: String,

    #[arg(long, default_value = "warn")]
    log: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_init(&args.log, LogFormat::Compact).context("Failed to initialise tracing")?;

    let client = FeedClient::new(reqwest::Client::new(), args.proxy_url, args.repo);
    let mut page = FeedPage::with_all_lists();

    render_feed(&client, &mut page).await;

    for list in page.lists() {
        println!("{list}");
    }

    Ok(())
}
