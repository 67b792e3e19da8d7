//! Program hashes and their checksummed base58 address form.

use std::fmt;

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

use crate::error::{Result, ScanError};

pub const PROGRAM_HASH_SIZE: usize = 20;
pub const PUBLIC_KEY_SIZE: usize = 32;

// Chosen so that every encoded address starts with "NKN".
const ADDRESS_PREFIX: [u8; 3] = [0x02, 0xb8, 0x25];
const CHECKSUM_SIZE: usize = 4;
const OP_CHECKSIG: u8 = 0xac;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProgramHash([u8; PROGRAM_HASH_SIZE]);

impl ProgramHash {
    /// Hash of the single-signature verification script for `public_key`.
    pub fn from_public_key(public_key: &[u8]) -> Self {
        Self::from_code(&signature_program_code(public_key))
    }

    /// RIPEMD160(SHA256(code)).
    pub fn from_code(code: &[u8]) -> Self {
        let sha = Sha256::digest(code);
        let digest = Ripemd160::digest(sha);

        let mut hash = [0u8; PROGRAM_HASH_SIZE];
        hash.copy_from_slice(&digest);
        Self(hash)
    }

    pub fn as_bytes(&self) -> &[u8; PROGRAM_HASH_SIZE] {
        &self.0
    }

    pub fn to_address(&self) -> Address {
        let mut data = Vec::with_capacity(ADDRESS_PREFIX.len() + PROGRAM_HASH_SIZE + CHECKSUM_SIZE);
        data.extend_from_slice(&ADDRESS_PREFIX);
        data.extend_from_slice(&self.0);

        let checksum = Sha256::digest(Sha256::digest(&data));
        data.extend_from_slice(&checksum[..CHECKSUM_SIZE]);

        Address(bs58::encode(data).into_string())
    }
}

impl TryFrom<&[u8]> for ProgramHash {
    type Error = ScanError;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        <[u8; PROGRAM_HASH_SIZE]>::try_from(bytes)
            .map(Self)
            .map_err(|_| {
                ScanError::AddressEncoding(format!(
                    "program hash must be {PROGRAM_HASH_SIZE} bytes, got {}",
                    bytes.len()
                ))
            })
    }
}

fn signature_program_code(public_key: &[u8]) -> Vec<u8> {
    let mut code = Vec::with_capacity(public_key.len() + 2);
    code.push(public_key.len() as u8);
    code.extend_from_slice(public_key);
    code.push(OP_CHECKSIG);
    code
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address(String);

impl Address {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Maps a raw identity to its address: 20 bytes are a program hash, 32 bytes
/// a public key. Any other length yields `None` and is logged.
pub fn normalize_identity(raw: &[u8]) -> Result<Option<Address>> {
    let program_hash = match raw.len() {
        PROGRAM_HASH_SIZE => ProgramHash::try_from(raw)?,
        PUBLIC_KEY_SIZE => ProgramHash::from_public_key(raw),
        len => {
            tracing::warn!(len, "Unknown identity size, skipping");
            return Ok(None);
        }
    };

    Ok(Some(program_hash.to_address()))
}
