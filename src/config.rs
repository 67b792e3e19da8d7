use std::ffi::OsString;
use std::num::NonZeroU32;
use std::ops::Range;
use std::time::Duration;

use clap::Parser;
use reqwest::Url;

use crate::error::{Result, ScanError};
use crate::indexer::NanoPayCounting;

pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:30003";

#[derive(Parser, Debug)]
#[command(
    name = "nkn-active-address",
    version,
    about = "Count distinct addresses active in a range of NKN blocks"
)]
pub struct Cli {
    /// Start block height (inclusive)
    #[arg(short = 's', long = "start", env = "START_HEIGHT", default_value_t = 0)]
    pub start_height: u64,

    /// End block height (exclusive)
    #[arg(short = 'e', long = "end", env = "END_HEIGHT", default_value_t = 0)]
    pub end_height: u64,

    /// RPC address (`-rpc` is accepted as well)
    #[arg(long = "rpc", env = "RPC_URL", default_value = DEFAULT_RPC_URL)]
    pub rpc_url: String,

    /// Verbose: log every height and print the count of each address
    #[arg(short, long)]
    pub verbose: bool,

    /// Pace getblock calls to at most this many per second
    #[arg(long, env = "RPC_REQUESTS_PER_SECOND")]
    pub requests_per_second: Option<u32>,

    /// HTTP timeout for a single getblock call
    #[arg(long, env = "RPC_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// Count a NanoPay sender twice, matching the legacy per-address output
    #[arg(long)]
    pub legacy_nanopay_count: bool,
}

#[derive(Debug)]
pub struct Config {
    pub rpc_url: Url,
    pub heights: Range<u64>,
    pub verbose: bool,
    pub requests_per_second: Option<NonZeroU32>,
    pub request_timeout: Duration,
    pub nano_pay: NanoPayCounting,
}

impl Config {
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_cli(Cli::parse_from(expand_single_dash_rpc(std::env::args_os())))
    }

    pub fn from_cli(cli: Cli) -> Result<Self> {
        let rpc_url = Url::parse(&cli.rpc_url)
            .map_err(|e| ScanError::Config(format!("Invalid RPC URL: {e}")))?;

        let requests_per_second = cli
            .requests_per_second
            .map(|rps| {
                NonZeroU32::new(rps).ok_or_else(|| {
                    ScanError::Config("RPC_REQUESTS_PER_SECOND must be greater than 0".into())
                })
            })
            .transpose()?;

        if cli.start_height > cli.end_height {
            tracing::warn!(
                "Start height {} is past end height {}, nothing to scan",
                cli.start_height,
                cli.end_height
            );
        }

        let nano_pay = if cli.legacy_nanopay_count {
            NanoPayCounting::Legacy
        } else {
            NanoPayCounting::Once
        };

        Ok(Self {
            rpc_url,
            heights: cli.start_height..cli.end_height,
            verbose: cli.verbose,
            requests_per_second,
            request_timeout: Duration::from_secs(cli.timeout_secs),
            nano_pay,
        })
    }
}

/// Rewrites the single-dash `-rpc` / `-rpc=<url>` form to `--rpc`, which is
/// the only long form clap understands.
pub fn expand_single_dash_rpc<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| match arg.to_str() {
            Some("-rpc") => OsString::from("--rpc"),
            Some(s) if s.starts_with("-rpc=") => OsString::from(format!("-{s}")),
            _ => arg,
        })
        .collect()
}
