//! Bankist - interactive ledger driver
//!
//! Reads actions from stdin, one per line, and prints the dashboard after
//! each applied action. Logs go to stderr.

use std::io;

use bankist::config::LogFormat;
use bankist::driver::Driver;
use bankist::{AccountStore, Config, Renderer, SessionController};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing/logging
fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "bankist=info".into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init(),
    }
}

fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    init_tracing(config.log_format);

    let store = AccountStore::demo();
    tracing::info!(
        accounts = store.len(),
        environment = %config.environment,
        "Starting Bankist"
    );

    let controller =
        SessionController::new(store).with_renderer(Renderer::new(config.currency_symbol.clone()));
    let mut driver = Driver::new(controller, config.output_format);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    driver.run(stdin.lock(), &mut stdout)?;

    tracing::info!("Input closed. Goodbye!");
    Ok(())
}
