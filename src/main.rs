use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

use roster::config::Config;
use roster::transport;
use roster::{Page, ViewMode};

#[derive(Parser)]
#[command(name = "roster")]
#[command(author, about = "Roster - people directory with a local preview shell", long_about = None)]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), env!("ROSTER_VERSION_SUFFIX")))]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (default: platform config dir)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the local preview shell
    Serve {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// People collection endpoint
        #[arg(long)]
        endpoint: Option<Url>,
    },

    /// Load people once and print the rendered page
    Snapshot {
        /// Page to show (home, people, form)
        #[arg(long)]
        page: Option<Page>,

        /// Layout for the people page (table, cards, list)
        #[arg(long)]
        view: Option<ViewMode>,

        /// People collection endpoint
        #[arg(long)]
        endpoint: Option<Url>,

        /// Write the page to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "roster=debug"
    } else {
        "roster=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Commands::Serve {
            port,
            host,
            endpoint,
        } => {
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(endpoint) = endpoint {
                config.source.endpoint = endpoint;
            }
            tracing::info!(
                "Starting preview shell on {}:{}, endpoint: {}",
                config.server.host,
                config.server.port,
                config.source.endpoint
            );
            transport::cli::run_serve(&config).await?;
        }
        Commands::Snapshot {
            page,
            view,
            endpoint,
            out,
        } => {
            if let Some(endpoint) = endpoint {
                config.source.endpoint = endpoint;
            }
            transport::cli::run_snapshot(&config, page, view, out.as_deref()).await?;
        }
    }

    Ok(())
}
