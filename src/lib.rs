//! Counts the distinct NKN addresses that were active over a range of block
//! heights: block signers plus every identity carried by a transaction
//! payload.

pub mod config;
pub mod error;
pub mod indexer;
pub mod rpc;

pub use error::{Result, ScanError};
