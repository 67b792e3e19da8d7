use std::ops::Range;

use crate::error::Result;
use crate::rpc::BlockFetcher;

use super::address::{normalize_identity, ProgramHash};
use super::counter::ActiveAddressCounter;
use super::processor::{decode_block, decode_payload, BlockRecord, NanoPayCounting};

const PROGRESS_INTERVAL: u64 = 1000;

#[derive(Clone, Copy, Debug, Default)]
pub struct ScanOptions {
    pub verbose: bool,
    pub nano_pay: NanoPayCounting,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub blocks_processed: u64,
    pub transactions_processed: u64,
    pub transactions_skipped: u64,
    pub identities_skipped: u64,
}

/// Visits every height in `heights` in order, adding the block signer and all
/// transaction participants to `counter`. The first fatal error ends the scan.
pub async fn run_scan<F: BlockFetcher>(
    fetcher: &F,
    heights: Range<u64>,
    options: ScanOptions,
    counter: &mut ActiveAddressCounter,
) -> Result<ScanStats> {
    tracing::info!(
        "Scanning blocks {} to {} (exclusive)",
        heights.start,
        heights.end
    );

    let total = heights.end.saturating_sub(heights.start);
    let mut stats = ScanStats::default();

    for height in heights {
        if options.verbose {
            tracing::info!(height, "Processing block");
        } else {
            tracing::debug!(height, "Processing block");
        }

        let raw = fetcher.get_block(height).await?;
        let block = decode_block(height, &raw)?;
        count_block(&block, options.nano_pay, counter, &mut stats)?;

        stats.blocks_processed += 1;
        if stats.blocks_processed % PROGRESS_INTERVAL == 0 {
            tracing::info!(
                "Scan progress: {}/{} blocks, {} active addresses",
                stats.blocks_processed,
                total,
                counter.distinct_count()
            );
        }
    }

    tracing::info!(
        "Scan complete: {} blocks, {} transactions, {} unknown transactions skipped, {} identities skipped",
        stats.blocks_processed,
        stats.transactions_processed,
        stats.transactions_skipped,
        stats.identities_skipped
    );

    Ok(stats)
}

fn count_block(
    block: &BlockRecord,
    nano_pay: NanoPayCounting,
    counter: &mut ActiveAddressCounter,
    stats: &mut ScanStats,
) -> Result<()> {
    let _span = tracing::info_span!("block", height = block.height).entered();

    counter.increment(ProgramHash::from_public_key(&block.signer_public_key).to_address());

    let mut payloads = Vec::with_capacity(block.transactions.len());
    for tx in &block.transactions {
        match decode_payload(tx)? {
            Some(payload) => payloads.push(payload),
            None => stats.transactions_skipped += 1,
        }
    }
    stats.transactions_processed += payloads.len() as u64;

    for payload in &payloads {
        for raw in payload.identities(nano_pay) {
            match normalize_identity(raw)? {
                Some(address) => counter.increment(address),
                None => stats.identities_skipped += 1,
            }
        }
    }

    Ok(())
}
