use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use feed_gateway::apis::Providers;
use feed_gateway::catalog::CatalogStore;
use feed_gateway::config::Config;
use feed_gateway::constants::{
    self, DEFAULT_CONFIG_PATH, EVENTS_PROVIDER, LANGUAGES_PROVIDER, RATES_PROVIDER,
};
use feed_gateway::{graphql, logging, observability, server};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "feed_gateway")]
#[command(about = "GraphQL gateway over XML rate, event and language feeds")]
#[command(version)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Directory for rotated JSON log files
    #[arg(long, default_value = "logs")]
    log_dir: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the GraphQL server
    Serve {
        /// Address to bind (overrides config)
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on; 0 picks a free port (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
        /// Do not install the Prometheus recorder
        #[arg(long)]
        no_metrics: bool,
    },
    /// Fetch one provider once and print its normalized records as JSON
    Fetch {
        /// Provider to fetch. Available: rates, events, languages
        provider: String,
    },
    /// Print the film catalog as JSON
    Films {
        /// Only films by this exact author
        #[arg(long)]
        author: Option<String>,
    },
}

async fn run_fetch(providers: &Providers, name: &str) -> Result<String> {
    let json = match constants::provider_from_name(name) {
        Some(RATES_PROVIDER) => serde_json::to_string_pretty(&providers.fetch_rates().await?)?,
        Some(EVENTS_PROVIDER) => serde_json::to_string_pretty(&providers.fetch_events().await?)?,
        Some(LANGUAGES_PROVIDER) => {
            serde_json::to_string_pretty(&providers.fetch_languages().await?)?
        }
        _ => bail!(
            "Unknown provider '{}'. Available: {}",
            name,
            constants::get_supported_providers().join(", ")
        ),
    };
    Ok(json)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    let _log_guard = logging::init_logging(&cli.log_dir)?;

    let mut config = Config::load(&cli.config)
        .with_context(|| format!("loading configuration from {}", cli.config))?;

    match cli.command {
        Commands::Serve {
            host,
            port,
            no_metrics,
        } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            if config.server.metrics && !no_metrics {
                if let Err(e) = observability::init() {
                    warn!("Metrics disabled: {}", e);
                }
            }

            let ip: IpAddr = config
                .server
                .host
                .parse()
                .with_context(|| format!("invalid server host '{}'", config.server.host))?;
            let addr = SocketAddr::new(ip, config.server.port);

            let catalog = CatalogStore::with_sample_data();
            let providers = Arc::new(Providers::from_config(&config.upstream)?);
            info!(
                films = catalog.len(),
                rates = providers.rates.url(),
                events = providers.events.url(),
                languages = providers.languages.url(),
                "Starting feed gateway"
            );

            let schema = graphql::create_schema(catalog, providers);
            server::start_server(schema, addr).await?;
        }
        Commands::Fetch { provider } => {
            let providers = Providers::from_config(&config.upstream)?;
            let json = run_fetch(&providers, &provider).await?;
            println!("{json}");
        }
        Commands::Films { author } => {
            let catalog = CatalogStore::with_sample_data();
            let films = match author.as_deref() {
                Some(name) => catalog.find_by_author(Some(name)),
                None => catalog.list_films(),
            };
            println!("{}", serde_json::to_string_pretty(&films)?);
        }
    }

    Ok(())
}
