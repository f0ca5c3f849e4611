//! Conversion of IPFS identifiers into the bytes32 form consumed on-chain.

use crate::utils::error::{AdapterError, Result};

/// Multihash header: hash function code + digest length.
const MULTIHASH_PREFIX_LEN: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedReference {
    pub raw_identifier: String,
    pub encoded_reference: String,
}

impl PublishedReference {
    pub fn from_native(raw_identifier: impl Into<String>) -> Result<Self> {
        let raw_identifier = raw_identifier.into();
        let encoded_reference = encode_bytes32(&raw_identifier)?;
        Ok(Self {
            raw_identifier,
            encoded_reference,
        })
    }
}

/// base58 decode, drop the multihash header, hex encode with a `0x` prefix.
pub fn encode_bytes32(identifier: &str) -> Result<String> {
    let decoded = bs58::decode(identifier)
        .into_vec()
        .map_err(|e| AdapterError::InvalidReference {
            identifier: identifier.to_string(),
            reason: format!("not valid base58: {}", e),
        })?;

    if decoded.len() < MULTIHASH_PREFIX_LEN {
        return Err(AdapterError::InvalidReference {
            identifier: identifier.to_string(),
            reason: format!(
                "decodes to {} bytes, shorter than the multihash header",
                decoded.len()
            ),
        });
    }

    Ok(format!("0x{}", hex::encode(&decoded[MULTIHASH_PREFIX_LEN..])))
}
