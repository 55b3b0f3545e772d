use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use hx_core::{Error, Result};
use hx_dataset::DatasetStore;
use hx_inference::models::create_explainer;
use hx_inference::models::groq::{GroqExplainer, API_KEY_ENV};
use hx_web::{create_app, AppState};
use tracing::info;

mod browser;

#[derive(Parser, Debug)]
#[command(author, version, about = "Daily headline explainer", long_about = None)]
struct Cli {
    /// Path to the news dataset CSV
    #[arg(long, default_value = "data/bbc_news.csv")]
    data: PathBuf,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API and serve the front-end
    Serve {
        #[arg(long, default_value = "127.0.0.1:5000")]
        addr: SocketAddr,
        /// Directory with the front-end assets
        #[arg(long, default_value = "static")]
        assets: PathBuf,
        #[arg(long, default_value = "groq", help = "Explainer to use. Available: groq (default), dummy")]
        model: String,
    },
    /// Browse the dataset interactively in the terminal
    Browse,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let store = Arc::new(DatasetStore::load(&cli.data)?);
    info!("📰 Loaded {} headlines from {}", store.len(), cli.data.display());

    match cli.command {
        Commands::Serve { addr, assets, model } => {
            // Server mode fails fast on a missing key; the interactive
            // fallback exists only in browse mode.
            let api_key = GroqExplainer::api_key_from_env();
            if model == "groq" && api_key.is_none() {
                return Err(Error::Config(format!(
                    "{} is not set; export it before starting the server",
                    API_KEY_ENV
                )));
            }
            let explainer = create_explainer(&model, api_key)?;
            info!("🧠 Explainer initialized successfully (using {})", explainer.name());

            let app = create_app(AppState {
                store,
                explainer,
                assets_dir: assets,
            });
            let listener = tokio::net::TcpListener::bind(addr).await?;
            info!("🌐 Serving at http://{}", addr);
            axum::serve(listener, app).await?;
        }
        Commands::Browse => browser::run(&store).await?,
    }

    Ok(())
}
