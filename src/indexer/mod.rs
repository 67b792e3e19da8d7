pub mod address;
pub mod counter;
pub mod payloads;
pub mod processor;
pub mod scan;

pub use address::{Address, ProgramHash};
pub use counter::{write_report, ActiveAddressCounter};
pub use processor::{BlockRecord, NanoPayCounting, PayloadVariant, TxRecord};
pub use scan::{run_scan, ScanOptions, ScanStats};
