use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("malformed getblock response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("block {0} has no signer")]
    MissingSigner(u64),

    #[error("hex decode error: {0}")]
    HexDecode(#[from] hex::FromHexError),

    #[error("failed to decode {tx_type} payload: {source}")]
    PayloadDecode {
        tx_type: String,
        #[source]
        source: prost::DecodeError,
    },

    #[error("address encoding error: {0}")]
    AddressEncoding(String),

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ScanError>;
