#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod app;
pub mod config;
pub mod data;
pub mod engine;
pub mod models;
mod ui;
pub mod utils;

pub use app::App;
pub use data::{QuoteStore, RefreshBatch, fetch_quotes};
pub use engine::{DashboardAction, DashboardState, QuoteEngine, RefreshIntent};
pub use models::{DisplayedQuote, QuoteRecord, Watchlist};

use crate::config::REFRESH;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Auto-refresh period in seconds
    #[arg(long, default_value_t = REFRESH.period_secs)]
    pub refresh_secs: u64,

    /// Simulated fetch latency in milliseconds
    #[arg(long, default_value_t = REFRESH.latency_ms)]
    pub latency_ms: u64,

    /// Comma-separated initial watchlist (defaults to the built-in symbols)
    #[arg(long)]
    pub watch: Option<String>,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
