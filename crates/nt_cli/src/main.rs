use clap::Parser;
use nt_core::config::{API_KEY_VAR, COUNTRY_VAR, ENDPOINT_VAR};
use nt_core::logging::init_logging;
use nt_core::{ArticleBoard, BoardOptions, Category, NewsApiConfig, Result};
use nt_newsapi::{HeadlinesArgs, NewsApiClient, handle_command};
use nt_web::{AppState, WebConfig};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, Level};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[arg(long, help = "News API key. Falls back to $NEWS_API_KEY")]
    api_key: Option<String>,
    #[arg(long, help = "Top headlines endpoint. Falls back to $NEWS_API_ENDPOINT")]
    endpoint: Option<String>,
    #[arg(long, help = "Country code sent with every request. Falls back to $NEWS_API_COUNTRY, then us")]
    country: Option<String>,
    #[arg(long, default_value = "info")]
    log_level: Level,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Serve the headline board as a web page
    Serve {
        #[arg(long, default_value = "127.0.0.1:3000")]
        bind: SocketAddr,
        /// Category loaded when the board starts
        #[arg(long, default_value = "general")]
        category: Category,
        /// Go back to page 1 whenever the category changes
        #[arg(long)]
        reset_page_on_category_change: bool,
    },
    /// Fetch headlines in the terminal
    Headlines(HeadlinesArgs),
}

/// Command-line flags win over the variables returned by `env`.
fn news_api_config<F>(cli: &Cli, env: F) -> Result<NewsApiConfig>
where
    F: Fn(&str) -> Option<String>,
{
    NewsApiConfig::from_lookup(|key| {
        let flag = match key {
            API_KEY_VAR => cli.api_key.clone(),
            ENDPOINT_VAR => cli.endpoint.clone(),
            COUNTRY_VAR => cli.country.clone(),
            _ => None,
        };
        flag.or_else(|| env(key))
    })
}

fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    match &cli.command {
        Commands::Serve { bind, category, reset_page_on_category_change } => {
            let config = news_api_config(&cli, process_env)?;
            info!("🔑 Using {} ({})", config.endpoint, config.country);
            let client = NewsApiClient::new(config)?;
            let options = BoardOptions {
                reset_page_on_category_change: *reset_page_on_category_change,
            };
            let board = ArticleBoard::with_options(Arc::new(client), options);
            let state = AppState::mount(board, *category).await?;
            nt_web::serve(WebConfig { bind: *bind }, state).await?;
        }
        Commands::Headlines(args) => {
            handle_command(args.clone(), || news_api_config(&cli, process_env)).await?;
        }
    }

    Ok(())
}
