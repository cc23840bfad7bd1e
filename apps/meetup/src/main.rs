//! # Meetup
//!
//! The main binary for the meetup engine.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │          apps/meetup (THE BINARY)        │
//! │                                          │
//! │   ┌─────────────┐    ┌───────────────┐   │
//! │   │    CLI      │    │    Config     │   │
//! │   │   (clap)    │    │    (toml)     │   │
//! │   └──────┬──────┘    └───────┬───────┘   │
//! │          └─────────┬─────────┘           │
//! │                    ▼                     │
//! │            ┌───────────────┐             │
//! │            │  meetup-core  │             │
//! │            │  (THE LOGIC)  │             │
//! │            └───────────────┘             │
//! └──────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! meetup table
//! meetup meet -f roster.json --rounds 3
//! meetup summary -f roster.txt -t text
//! meetup morse -i lorem.txt -o lorem_morse.txt
//! ```

use clap::Parser;
use meetup::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    // Parse CLI arguments first so --verbose can shape the log filter.
    let cli = cli::Cli::parse();

    // MEETUP_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("MEETUP_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let default_filter = if cli.verbose { "meetup=debug" } else { "meetup=info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    // Logs go to stderr; stdout carries command output.
    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    if !cli.quiet && !cli.json_mode {
        print_banner();
    }

    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the startup banner.
fn print_banner() {
    println!(
        r#"
  meetup v{}
  CURE · HEALTHY · SICK · DYING · DEAD
"#,
        env!("CARGO_PKG_VERSION")
    );
}
