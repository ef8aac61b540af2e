//! # Storefront Shell Library
//!
//! The interactive storefront: flags, configuration, logging and the
//! session loop around `storefront-core`.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront Shell                                 │
//! │                                                                         │
//! │  main.rs ────► calls run()                                              │
//! │                                                                         │
//! │  lib.rs ─────► tracing, flags, StoreConfig, Catalog, Session            │
//! │                                                                         │
//! │  session.rs ─► line → SessionCommand → command handler → response       │
//! │                                                                         │
//! │  commands/ ──► list_products, add_to_cart, apply_coupon, checkout       │
//! │                                                                         │
//! │  state/ ─────► CartSession, Catalog, StoreConfig                        │
//! │                                                                         │
//! │  render.rs ──► text output (JSON output is plain serde)                 │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                 storefront-core (pure pricing)                   │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging to stderr)
//! 2. Parse flags
//! 3. Load `StoreConfig` from the environment
//! 4. Load the catalog (file or built-in)
//! 5. Run the session on stdin/stdout

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub mod commands;
pub mod error;
pub mod render;
pub mod session;
pub mod state;

use session::{OutputFormat, Session};
use state::{Catalog, StoreConfig};

/// Command-line flags.
#[derive(Debug, Parser)]
#[command(name = "storefront")]
#[command(about = "Interactive storefront cart session")]
pub struct Cli {
    /// Response format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// JSON product catalog (built-in mock catalog when omitted)
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

/// Runs the storefront shell until `quit` or end of input.
pub fn run() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = StoreConfig::from_env().context("invalid store configuration")?;

    let catalog = match &cli.catalog {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("could not load catalog {}", path.display()))?,
        None => Catalog::builtin(),
    };

    info!(
        store = %config.store_name,
        currency = %config.currency_code,
        products = catalog.len(),
        format = ?cli.format,
        "Starting storefront session"
    );

    let mut session = Session::new(catalog, config, cli.format);
    let stdin = io::stdin();
    let stdout = io::stdout();
    session
        .run(stdin.lock(), stdout.lock())
        .context("session I/O failed")?;

    info!("Storefront session closed");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so stdout carries only command responses.
/// `RUST_LOG` overrides the default filter.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,storefront=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
