use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{Level, info, warn};
use tracing_subscriber::EnvFilter;

use diccionari::{AppState, BuildOptions, Solver, build_from_file, load_dictionary, router};

const MAX_PAGE_SIZE: usize = 500;

#[derive(Parser)]
#[command(name = "diccionari")]
#[command(about = "Builds and serves a flat word list extracted from a printed dictionary")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract every word form from dictionary text and write it as JSON.
    Build {
        /// Plain text previously extracted from the dictionary document.
        source: PathBuf,
        /// Where to write the JSON word list.
        output: PathBuf,
        #[arg(long, env = "DICT_STRIP_DIACRITICS", default_value_t = false)]
        strip_diacritics: bool,
    },
    /// Serve the letter-set solver over a built word list.
    Serve {
        #[arg(long, env = "DICTIONARY_PATH", default_value = "dict.json")]
        dictionary: PathBuf,
        #[arg(long, env = "HOST", default_value = "0.0.0.0")]
        host: String,
        #[arg(long, env = "PORT", default_value_t = 8080)]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    match Cli::parse().command {
        Commands::Build {
            source,
            output,
            strip_diacritics,
        } => build(source, output, strip_diacritics),
        Commands::Serve {
            dictionary,
            host,
            port,
        } => serve(dictionary, host, port).await,
    }
}

fn build(source: PathBuf, output: PathBuf, strip_diacritics: bool) -> anyhow::Result<()> {
    info!("reading dictionary text from {}", source.display());
    if strip_diacritics {
        info!("diacritics will be stripped from stored words");
    }

    let start = Instant::now();
    let stats = build_from_file(&source, &output, &BuildOptions { strip_diacritics })
        .with_context(|| format!("building word list from {}", source.display()))?;
    info!(
        "finished {} words in {:.3}s",
        stats.words,
        start.elapsed().as_secs_f64()
    );
    Ok(())
}

async fn serve(dictionary: PathBuf, host: String, port: u16) -> anyhow::Result<()> {
    info!("binding to {}:{}", host, port);
    info!("using word list at {}", dictionary.display());

    let start = Instant::now();
    let words = load_dictionary(&dictionary)
        .with_context(|| format!("loading word list from {}", dictionary.display()))?;
    let solver = Solver::new(words);
    info!(
        "loaded {} words in {} ms",
        solver.len(),
        start.elapsed().as_millis()
    );
    if solver.is_empty() {
        warn!("word list {} is empty, every query will return nothing", dictionary.display());
    }

    let state = AppState {
        solver,
        max_page_size: MAX_PAGE_SIZE,
    };
    let app = router(state).layer(TraceLayer::new_for_http());
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .with_context(|| format!("invalid listen address {host}:{port}"))?;
    let listener = TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let max_level = env_filter
        .max_level_hint()
        .and_then(|hint| hint.into_level())
        .unwrap_or(Level::INFO);
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_level(true)
        .with_max_level(max_level)
        .init();
}
