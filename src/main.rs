use anyhow::bail;
use aromacraft_api::RestApi;
use aromacraft_sources::{AromaService, SourceMode, SourcesConfig};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Molecular food pairing over FlavorDB and RecipeDB
#[derive(Parser, Debug)]
#[command(name = "aromacraft")]
#[command(about = "Ingredient flavor profiles, pairings and recipes", long_about = None)]
struct Args {
    /// Data source mode: sample, fallback or strict
    #[arg(long, global = true, env = "AROMACRAFT_SOURCE_MODE")]
    mode: Option<SourceMode>,

    /// Timeout for each upstream request, in seconds
    #[arg(long, global = true, env = "AROMACRAFT_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    /// Log level
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the REST API
    Serve {
        /// HTTP API port
        #[arg(long, default_value_t = 7070)]
        http_port: u16,
    },
    /// Compound profile of an ingredient
    Profile { name: String },
    /// Look up one compound by id
    Compound { id: String },
    /// Tanimoto similarity between two ingredients
    Similarity { a: String, b: String },
    /// Rank candidate ingredients as pairings for a base ingredient
    Pairings {
        base: String,
        #[arg(required = true)]
        candidates: Vec<String>,
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
    /// Search recipes containing the given ingredients
    Recipes {
        #[arg(required = true)]
        ingredients: Vec<String>,
    },
    /// Full recipe by id
    Recipe { id: String },
    /// Cooking history of a user
    History { user: String },
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    // stdout carries command output
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = SourcesConfig::from_env_with(args.mode, args.timeout_secs)?;

    let service = Arc::new(AromaService::from_config(&config)?);

    match args.command {
        Command::Serve { http_port } => serve(service, http_port).await?,
        Command::Profile { name } => print_json(&service.profile(&name).await?)?,
        Command::Compound { id } => match service.compound(&id).await? {
            Some(compound) => print_json(&compound)?,
            None => bail!("compound '{}' not found", id),
        },
        Command::Similarity { a, b } => print_json(&service.similarity_between(&a, &b).await?)?,
        Command::Pairings { base, candidates, limit } => {
            print_json(&service.pairings(&base, &candidates, limit).await?)?
        }
        Command::Recipes { ingredients } => print_json(&service.search_recipes(&ingredients).await?)?,
        Command::Recipe { id } => match service.recipe(&id).await? {
            Some(recipe) => print_json(&recipe)?,
            None => bail!("recipe '{}' not found", id),
        },
        Command::History { user } => print_json(&service.cooking_history(&user).await?)?,
    }

    Ok(())
}

async fn serve(service: Arc<AromaService>, http_port: u16) -> anyhow::Result<()> {
    info!("Starting AromaCraft v{}", env!("CARGO_PKG_VERSION"));
    info!("Source mode: {}", service.mode());
    info!("HTTP API port: {}", http_port);

    let http_handle = std::thread::spawn(move || {
        info!("Starting HTTP server on port {}", http_port);
        let sys = actix_web::rt::System::new();
        sys.block_on(async {
            if let Err(e) = RestApi::start(service, http_port).await {
                tracing::error!("HTTP server error: {}", e);
            }
        })
    });

    info!("HTTP API: http://localhost:{}/", http_port);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        _ = tokio::task::spawn_blocking(move || {
            http_handle.join().ok();
        }) => {
            info!("HTTP server stopped");
        }
    }

    info!("Shutting down...");
    Ok(())
}
