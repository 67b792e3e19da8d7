use std::collections::HashMap;

use prost::Message;
use serde_json::json;

use nkn_active_address::indexer::payloads::{Coinbase, NanoPay, TransferAsset};
use nkn_active_address::indexer::{
    run_scan, write_report, ActiveAddressCounter, Address, NanoPayCounting, ProgramHash,
    ScanOptions,
};
use nkn_active_address::rpc::BlockFetcher;
use nkn_active_address::{Result, ScanError};

const PK1: [u8; 32] = [0xaa; 32];
const H1: [u8; 20] = [0x01; 20];
const H2: [u8; 20] = [0x02; 20];
const H3: [u8; 20] = [0x03; 20];

/// Serves canned getblock bodies keyed by height.
#[derive(Default)]
struct FakeNode {
    blocks: HashMap<u64, Vec<u8>>,
}

impl FakeNode {
    fn with_block(mut self, height: u64, signer: &[u8], txs: &[(&str, Vec<u8>)]) -> Self {
        let transactions: Vec<_> = txs
            .iter()
            .map(|(tx_type, payload)| {
                json!({
                    "payloadData": hex::encode(payload),
                    "programs": [{ "code": "", "parameter": "" }],
                    "txType": tx_type,
                })
            })
            .collect();

        let body = json!({
            "id": height,
            "jsonrpc": "2.0",
            "result": {
                "header": { "height": height, "signerPk": hex::encode(signer) },
                "transactions": transactions,
            }
        });

        self.blocks.insert(height, serde_json::to_vec(&body).unwrap());
        self
    }

    fn with_raw(mut self, height: u64, body: &str) -> Self {
        self.blocks.insert(height, body.as_bytes().to_vec());
        self
    }
}

impl BlockFetcher for FakeNode {
    async fn get_block(&self, height: u64) -> Result<Vec<u8>> {
        self.blocks.get(&height).cloned().ok_or(ScanError::Rpc {
            code: -1,
            message: format!("no block at {height}"),
        })
    }
}

fn hash_address(hash: &[u8]) -> Address {
    ProgramHash::try_from(hash).unwrap().to_address()
}

fn transfer(sender: &[u8], recipient: &[u8]) -> Vec<u8> {
    TransferAsset {
        sender: sender.to_vec(),
        recipient: recipient.to_vec(),
        amount: 1,
    }
    .encode_to_vec()
}

fn coinbase(sender: &[u8], recipient: &[u8]) -> Vec<u8> {
    Coinbase {
        sender: sender.to_vec(),
        recipient: recipient.to_vec(),
        amount: 1,
    }
    .encode_to_vec()
}

fn two_block_node() -> FakeNode {
    FakeNode::default()
        .with_block(100, &PK1, &[("TRANSFER_ASSET_TYPE", transfer(&H1, &H2))])
        .with_block(101, &PK1, &[("COINBASE_TYPE", coinbase(&H1, &H3))])
}

#[tokio::test]
async fn counts_signer_and_participants_across_range() {
    let node = two_block_node();
    let mut counter = ActiveAddressCounter::new();

    let stats = run_scan(&node, 100..102, ScanOptions::default(), &mut counter)
        .await
        .unwrap();

    assert_eq!(stats.blocks_processed, 2);
    assert_eq!(stats.transactions_processed, 2);
    assert_eq!(counter.distinct_count(), 4);

    let signer = ProgramHash::from_public_key(&PK1).to_address();
    assert_eq!(counter.count_of(&signer), 2);
    assert_eq!(counter.count_of(&hash_address(&H1)), 2);
    assert_eq!(counter.count_of(&hash_address(&H2)), 1);
    assert_eq!(counter.count_of(&hash_address(&H3)), 1);
}

#[tokio::test]
async fn report_prints_summary_line() {
    let node = two_block_node();
    let mut counter = ActiveAddressCounter::new();
    run_scan(&node, 100..102, ScanOptions::default(), &mut counter)
        .await
        .unwrap();

    let mut out = Vec::new();
    write_report(&counter, false, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "Active address: 4\n");
}

#[tokio::test]
async fn verbose_report_lists_every_address_before_summary() {
    let node = two_block_node();
    let mut counter = ActiveAddressCounter::new();
    run_scan(&node, 100..102, ScanOptions::default(), &mut counter)
        .await
        .unwrap();

    let mut rows = vec![
        (ProgramHash::from_public_key(&PK1).to_address(), 2),
        (hash_address(&H1), 2),
        (hash_address(&H2), 1),
        (hash_address(&H3), 1),
    ];
    rows.sort();
    let mut expected: String = rows
        .iter()
        .map(|(address, count)| format!("{address}\t{count}\n"))
        .collect();
    expected.push_str("Active address: 4\n");

    let mut out = Vec::new();
    write_report(&counter, true, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), expected);
}

#[tokio::test]
async fn end_height_is_exclusive() {
    let node = two_block_node();
    let mut counter = ActiveAddressCounter::new();

    let stats = run_scan(&node, 100..101, ScanOptions::default(), &mut counter)
        .await
        .unwrap();

    assert_eq!(stats.blocks_processed, 1);
    assert_eq!(counter.distinct_count(), 3);
    assert_eq!(counter.count_of(&hash_address(&H3)), 0);
}

#[tokio::test]
async fn empty_range_counts_nothing() {
    let node = FakeNode::default();
    let mut counter = ActiveAddressCounter::new();

    let stats = run_scan(&node, 5..5, ScanOptions::default(), &mut counter)
        .await
        .unwrap();

    assert_eq!(stats.blocks_processed, 0);
    assert_eq!(counter.distinct_count(), 0);
}

#[tokio::test]
async fn unknown_tx_type_does_not_abort() {
    let node = FakeNode::default().with_block(
        1,
        &PK1,
        &[
            ("ISSUE_ASSET_TYPE", vec![0x0a, 0x01, 0x41]),
            ("TRANSFER_ASSET_TYPE", transfer(&H1, &H2)),
        ],
    );
    let mut counter = ActiveAddressCounter::new();

    let stats = run_scan(&node, 1..2, ScanOptions::default(), &mut counter)
        .await
        .unwrap();

    assert_eq!(stats.transactions_skipped, 1);
    assert_eq!(stats.transactions_processed, 1);
    assert_eq!(counter.distinct_count(), 3);
}

#[tokio::test]
async fn odd_length_identity_is_skipped() {
    let node = FakeNode::default().with_block(
        1,
        &PK1,
        &[("TRANSFER_ASSET_TYPE", transfer(&[1, 2, 3, 4, 5], &H2))],
    );
    let mut counter = ActiveAddressCounter::new();

    let stats = run_scan(&node, 1..2, ScanOptions::default(), &mut counter)
        .await
        .unwrap();

    assert_eq!(stats.identities_skipped, 1);
    assert_eq!(counter.distinct_count(), 2);
    assert_eq!(counter.count_of(&hash_address(&H2)), 1);
}

#[tokio::test]
async fn public_key_identities_hash_like_the_signer() {
    // A 32-byte sender equal to the signer key lands on the signer's address.
    let node = FakeNode::default().with_block(
        1,
        &PK1,
        &[("TRANSFER_ASSET_TYPE", transfer(&PK1, &H1))],
    );
    let mut counter = ActiveAddressCounter::new();

    run_scan(&node, 1..2, ScanOptions::default(), &mut counter)
        .await
        .unwrap();

    let signer = ProgramHash::from_public_key(&PK1).to_address();
    assert_eq!(counter.distinct_count(), 2);
    assert_eq!(counter.count_of(&signer), 2);
}

#[tokio::test]
async fn nano_pay_legacy_counting_only_changes_frequencies() {
    let payment = NanoPay {
        sender: H1.to_vec(),
        recipient: H2.to_vec(),
        id: 7,
        amount: 10,
        txn_expiration: 100,
        nano_pay_expiration: 200,
    }
    .encode_to_vec();
    let node = FakeNode::default().with_block(1, &PK1, &[("NANO_PAY_TYPE", payment)]);

    let mut once = ActiveAddressCounter::new();
    run_scan(&node, 1..2, ScanOptions::default(), &mut once)
        .await
        .unwrap();

    let mut legacy = ActiveAddressCounter::new();
    let options = ScanOptions {
        verbose: true,
        nano_pay: NanoPayCounting::Legacy,
    };
    run_scan(&node, 1..2, options, &mut legacy).await.unwrap();

    assert_eq!(once.distinct_count(), legacy.distinct_count());
    assert_eq!(once.count_of(&hash_address(&H1)), 1);
    assert_eq!(legacy.count_of(&hash_address(&H1)), 2);
}

#[tokio::test]
async fn repeated_scans_are_identical() {
    let node = two_block_node();

    let mut first = ActiveAddressCounter::new();
    run_scan(&node, 100..102, ScanOptions::default(), &mut first)
        .await
        .unwrap();
    let mut second = ActiveAddressCounter::new();
    run_scan(&node, 100..102, ScanOptions::default(), &mut second)
        .await
        .unwrap();

    let a: Vec<_> = first.counts_by_address().collect();
    let b: Vec<_> = second.counts_by_address().collect();
    assert_eq!(a, b);
}

#[tokio::test]
async fn fatal_errors_abort_the_scan() {
    let node = two_block_node().with_raw(102, r#"{"result":{"header":{"signerPk":""}}}"#);
    let mut counter = ActiveAddressCounter::new();

    let err = run_scan(&node, 100..104, ScanOptions::default(), &mut counter)
        .await
        .unwrap_err();
    assert!(matches!(err, ScanError::MissingSigner(102)));

    let node = FakeNode::default().with_raw(
        1,
        r#"{"result":{"header":{"signerPk":"aa"},"transactions":[{"payloadData":"0a2001","txType":"COINBASE_TYPE"}]}}"#,
    );
    let err = run_scan(&node, 1..2, ScanOptions::default(), &mut ActiveAddressCounter::new())
        .await
        .unwrap_err();
    assert!(matches!(err, ScanError::PayloadDecode { .. }));
}

#[tokio::test]
async fn missing_block_is_fatal() {
    let node = two_block_node();
    let mut counter = ActiveAddressCounter::new();

    let err = run_scan(&node, 101..103, ScanOptions::default(), &mut counter)
        .await
        .unwrap_err();
    assert!(matches!(err, ScanError::Rpc { .. }));
}
