use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use nkn_active_address::config::Config;
use nkn_active_address::error::Result;
use nkn_active_address::indexer::{run_scan, write_report, ActiveAddressCounter, ScanOptions};
use nkn_active_address::rpc::HttpFetcher;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let config = Config::load()?;

    tracing::info!(
        "Starting NKN active address scan v{}",
        env!("CARGO_PKG_VERSION")
    );
    tracing::info!("RPC: {}", config.rpc_url);
    if let Some(rps) = config.requests_per_second {
        tracing::info!("RPC rate limit: {} requests/s", rps);
    }

    let fetcher = HttpFetcher::new(
        config.rpc_url.clone(),
        config.request_timeout,
        config.requests_per_second,
    )?;

    let options = ScanOptions {
        verbose: config.verbose,
        nano_pay: config.nano_pay,
    };

    let mut counter = ActiveAddressCounter::new();
    run_scan(&fetcher, config.heights.clone(), options, &mut counter).await?;

    write_report(&counter, config.verbose, &mut std::io::stdout().lock())?;
    Ok(())
}
