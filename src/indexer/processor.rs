use prost::Message;

use crate::error::{Result, ScanError};
use crate::rpc::models::GetBlockResponse;

use super::payloads::{
    Coinbase, DeleteName, GenerateId, NanoPay, RegisterName, SigChainTxn, Subscribe,
    TransferAsset, TransferName, Unsubscribe,
};

pub struct BlockRecord {
    pub height: u64,
    pub signer_public_key: Vec<u8>,
    pub transactions: Vec<TxRecord>,
}

pub struct TxRecord {
    pub tx_type: String,
    pub payload_hex: String,
}

/// Parses a raw `getblock` response body.
pub fn decode_block(height: u64, raw: &[u8]) -> Result<BlockRecord> {
    let response: GetBlockResponse = serde_json::from_slice(raw)?;

    let block = match (response.result, response.error) {
        (Some(block), _) => block,
        (None, Some(err)) => {
            return Err(ScanError::Rpc {
                code: err.code,
                message: err.message,
            })
        }
        (None, None) => return Err(ScanError::MissingSigner(height)),
    };

    if block.header.signer_pk.is_empty() {
        return Err(ScanError::MissingSigner(height));
    }
    let signer_public_key = hex::decode(&block.header.signer_pk)?;

    let transactions = block
        .transactions
        .into_iter()
        .map(|tx| TxRecord {
            tx_type: tx.tx_type,
            payload_hex: tx.payload_data,
        })
        .collect();

    Ok(BlockRecord {
        height,
        signer_public_key,
        transactions,
    })
}

#[derive(Clone, Debug, PartialEq)]
pub enum PayloadVariant {
    SigChain(SigChainTxn),
    TransferAsset(TransferAsset),
    Coinbase(Coinbase),
    RegisterName(RegisterName),
    TransferName(TransferName),
    DeleteName(DeleteName),
    Subscribe(Subscribe),
    Unsubscribe(Unsubscribe),
    GenerateId(GenerateId),
    NanoPay(NanoPay),
}

/// How often a non-empty NanoPay sender is counted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NanoPayCounting {
    #[default]
    Once,
    /// Sender emitted twice, as older versions of this report did.
    Legacy,
}

impl PayloadVariant {
    /// Raw identities carried by the payload, in field order. Empty fields are
    /// omitted.
    pub fn identities(&self, nano_pay: NanoPayCounting) -> Vec<&[u8]> {
        let fields: Vec<&[u8]> = match self {
            Self::SigChain(p) => vec![p.submitter.as_slice()],
            Self::TransferAsset(p) => vec![p.sender.as_slice(), p.recipient.as_slice()],
            Self::Coinbase(p) => vec![p.sender.as_slice(), p.recipient.as_slice()],
            Self::RegisterName(p) => vec![p.registrant.as_slice()],
            Self::TransferName(p) => vec![p.registrant.as_slice()],
            Self::DeleteName(p) => vec![p.registrant.as_slice()],
            Self::Subscribe(p) => vec![p.subscriber.as_slice()],
            Self::Unsubscribe(p) => vec![p.subscriber.as_slice()],
            Self::GenerateId(p) => vec![p.sender.as_slice(), p.public_key.as_slice()],
            Self::NanoPay(p) => match nano_pay {
                NanoPayCounting::Once => vec![p.sender.as_slice(), p.recipient.as_slice()],
                NanoPayCounting::Legacy => vec![
                    p.sender.as_slice(),
                    p.sender.as_slice(),
                    p.recipient.as_slice(),
                ],
            },
        };

        fields.into_iter().filter(|f| !f.is_empty()).collect()
    }
}

type DecodeFn = fn(&[u8]) -> std::result::Result<PayloadVariant, prost::DecodeError>;

fn decode_as<M>(buf: &[u8]) -> std::result::Result<PayloadVariant, prost::DecodeError>
where
    M: Message + Default + Into<PayloadVariant>,
{
    M::decode(buf).map(Into::into)
}

/// Known payload type tags and the schema each one decodes with.
static PAYLOAD_SCHEMAS: [(&str, DecodeFn); 10] = [
    ("SIG_CHAIN_TXN_TYPE", decode_as::<SigChainTxn>),
    ("TRANSFER_ASSET_TYPE", decode_as::<TransferAsset>),
    ("COINBASE_TYPE", decode_as::<Coinbase>),
    ("REGISTER_NAME_TYPE", decode_as::<RegisterName>),
    ("TRANSFER_NAME_TYPE", decode_as::<TransferName>),
    ("DELETE_NAME_TYPE", decode_as::<DeleteName>),
    ("SUBSCRIBE_TYPE", decode_as::<Subscribe>),
    ("UNSUBSCRIBE_TYPE", decode_as::<Unsubscribe>),
    ("GENERATE_ID_TYPE", decode_as::<GenerateId>),
    ("NANO_PAY_TYPE", decode_as::<NanoPay>),
];

/// Decodes a transaction payload. Unknown tags are logged and yield `None`.
pub fn decode_payload(tx: &TxRecord) -> Result<Option<PayloadVariant>> {
    let buf = hex::decode(&tx.payload_hex)?;

    let Some((_, decode)) = PAYLOAD_SCHEMAS
        .iter()
        .find(|(tag, _)| *tag == tx.tx_type)
    else {
        tracing::warn!(tx_type = %tx.tx_type, "Unknown txn type, skipping");
        return Ok(None);
    };

    decode(&buf)
        .map(Some)
        .map_err(|source| ScanError::PayloadDecode {
            tx_type: tx.tx_type.clone(),
            source,
        })
}

macro_rules! impl_into_variant {
    ($($msg:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$msg> for PayloadVariant {
                fn from(payload: $msg) -> Self {
                    Self::$variant(payload)
                }
            }
        )*
    };
}

impl_into_variant! {
    SigChainTxn => SigChain,
    TransferAsset => TransferAsset,
    Coinbase => Coinbase,
    RegisterName => RegisterName,
    TransferName => TransferName,
    DeleteName => DeleteName,
    Subscribe => Subscribe,
    Unsubscribe => Unsubscribe,
    GenerateId => GenerateId,
    NanoPay => NanoPay,
}
