//! `mosaic-browse`: page through a Mosaic server's search results from the
//! terminal, using the same selection parsing and pagination machinery the
//! gallery views run on.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mosaic_client::{ApiClient, AuthToken, ClientConfig, GalleryFeed};
use mosaic_core::{FetchPhase, PageSizePolicy, selection_from_query_with_prefs};

#[derive(Parser)]
#[command(name = "mosaic-browse", about = "Browse a Mosaic media gallery")]
struct Cli {
    /// Selection as a URL query string, e.g. "q=sunset&tag=beach&s=title;asc"
    #[arg(default_value = "")]
    query: String,
    /// Server base URL (defaults to the configured one)
    #[arg(long)]
    server: Option<String>,
    /// Bearer token (defaults to the configured one)
    #[arg(long)]
    token: Option<String>,
    /// Grid columns per fetched batch
    #[arg(long, default_value_t = 4)]
    columns: usize,
    /// Maximum number of pages to fetch
    #[arg(long, default_value_t = 3)]
    pages: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,mosaic_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = ClientConfig::load();

    let server = cli.server.unwrap_or_else(|| config.server_url.clone());
    let api = ApiClient::new(&server)?;
    if let Some(access_token) = cli.token.or(config.access_token.clone()) {
        api.set_token(Some(AuthToken { access_token })).await;
    }

    let selection =
        selection_from_query_with_prefs(&cli.query, &config.prefs);
    let mut feed = GalleryFeed::new(
        Arc::new(api),
        PageSizePolicy::grid(cli.columns.max(1)),
    );
    feed.set_selection(selection).await?;

    for _ in 1..cli.pages {
        if feed.phase() == FetchPhase::EndReached {
            break;
        }
        feed.fetch_more().await?;
    }

    for item in feed.results() {
        println!("{}\t{}", item.resource_id, item.title());
    }
    println!("-- {} of {} results", feed.results().len(), feed.total());

    Ok(())
}
