//! Protobuf schemas of the transaction payloads that carry participant
//! identities. Field numbers match the node's `transaction.proto`; fields the
//! counter never reads are still declared so they round-trip in tests.

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Coinbase {
    #[prost(bytes = "vec", tag = "1")]
    pub sender: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    pub recipient: Vec<u8>,
    #[prost(int64, tag = "3")]
    pub amount: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TransferAsset {
    #[prost(bytes = "vec", tag = "1")]
    pub sender: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    pub recipient: Vec<u8>,
    #[prost(int64, tag = "3")]
    pub amount: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SigChainTxn {
    #[prost(bytes = "vec", tag = "1")]
    pub sig_chain: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    pub submitter: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RegisterName {
    #[prost(bytes = "vec", tag = "1")]
    pub registrant: Vec<u8>,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(int64, tag = "3")]
    pub registration_fee: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TransferName {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(bytes = "vec", tag = "2")]
    pub registrant: Vec<u8>,
    #[prost(bytes = "vec", tag = "3")]
    pub recipient: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteName {
    #[prost(bytes = "vec", tag = "1")]
    pub registrant: Vec<u8>,
    #[prost(string, tag = "2")]
    pub name: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Subscribe {
    #[prost(bytes = "vec", tag = "1")]
    pub subscriber: Vec<u8>,
    #[prost(string, tag = "2")]
    pub identifier: String,
    #[prost(string, tag = "3")]
    pub topic: String,
    /// Deprecated on chain, still present in old blocks.
    #[prost(uint32, tag = "4")]
    pub bucket: u32,
    #[prost(uint32, tag = "5")]
    pub duration: u32,
    #[prost(string, tag = "6")]
    pub meta: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Unsubscribe {
    #[prost(bytes = "vec", tag = "1")]
    pub subscriber: Vec<u8>,
    #[prost(string, tag = "2")]
    pub identifier: String,
    #[prost(string, tag = "3")]
    pub topic: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GenerateId {
    #[prost(bytes = "vec", tag = "1")]
    pub public_key: Vec<u8>,
    #[prost(int64, tag = "2")]
    pub registration_fee: i64,
    #[prost(int32, tag = "3")]
    pub version: i32,
    /// Set from version 1 on; empty in older transactions.
    #[prost(bytes = "vec", tag = "4")]
    pub sender: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NanoPay {
    #[prost(bytes = "vec", tag = "1")]
    pub sender: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    pub recipient: Vec<u8>,
    #[prost(uint64, tag = "3")]
    pub id: u64,
    #[prost(int64, tag = "4")]
    pub amount: i64,
    #[prost(uint32, tag = "5")]
    pub txn_expiration: u32,
    #[prost(uint32, tag = "6")]
    pub nano_pay_expiration: u32,
}
