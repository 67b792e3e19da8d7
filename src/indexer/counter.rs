use std::collections::BTreeMap;
use std::io::Write;

use super::address::Address;

/// Occurrences of every address seen during one scan. Entries are only ever
/// incremented.
#[derive(Debug, Default)]
pub struct ActiveAddressCounter {
    counts: BTreeMap<Address, u64>,
}

impl ActiveAddressCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, address: Address) {
        *self.counts.entry(address).or_insert(0) += 1;
    }

    pub fn distinct_count(&self) -> usize {
        self.counts.len()
    }

    pub fn count_of(&self, address: &Address) -> u64 {
        self.counts.get(address).copied().unwrap_or(0)
    }

    /// Per-address counts in address order.
    pub fn counts_by_address(&self) -> impl Iterator<Item = (&Address, u64)> {
        self.counts.iter().map(|(addr, n)| (addr, *n))
    }
}

/// Writes the final report: one `address\tcount` line per address when
/// `verbose`, then the `Active address: N` summary.
pub fn write_report<W: Write>(
    counter: &ActiveAddressCounter,
    verbose: bool,
    out: &mut W,
) -> std::io::Result<()> {
    if verbose {
        for (address, count) in counter.counts_by_address() {
            writeln!(out, "{address}\t{count}")?;
        }
    }

    writeln!(out, "Active address: {}", counter.distinct_count())?;
    out.flush()
}
