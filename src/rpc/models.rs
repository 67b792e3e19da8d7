use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct JsonRpcRequest<'a, P> {
    pub jsonrpc: &'static str,
    pub method: &'a str,
    pub params: P,
    pub id: u64,
}

#[derive(Serialize)]
pub struct GetBlockParams {
    pub height: u64,
}

#[derive(Deserialize, Default)]
pub struct GetBlockResponse {
    #[serde(default)]
    pub result: Option<BlockResult>,
    #[serde(default)]
    pub error: Option<RpcErrorBody>,
}

#[derive(Deserialize, Default)]
pub struct BlockResult {
    #[serde(default)]
    pub header: BlockHeader,
    #[serde(default)]
    pub transactions: Vec<TransactionJson>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BlockHeader {
    #[serde(default)]
    pub signer_pk: String,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TransactionJson {
    #[serde(default)]
    pub payload_data: String,
    #[serde(default)]
    pub programs: Vec<ProgramJson>,
    #[serde(default)]
    pub tx_type: String,
}

#[derive(Deserialize, Default)]
pub struct ProgramJson {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub parameter: String,
}

#[derive(Deserialize, Default)]
pub struct RpcErrorBody {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
}
