//! Base58Check encoding/decoding for legacy addresses (P2PKH, P2SH).

use super::payload::HASH160_LEN;
use super::{AddressCodec, AddressError, AddressPayload, Result};
use crate::bitcoin::base58;
use crate::networks::Network;

/// Length of a decoded legacy address without its 4-byte checksum.
const LEGACY_PAYLOAD_LEN: usize = 1 + HASH160_LEN;

/// Base58Check codec with network-specific version bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Base58CheckCodec {
    pub network: Network,
    /// Base58Check P2PKH version byte
    pub pub_key_hash: u8,
    /// Base58Check P2SH version byte
    pub script_hash: u8,
}

impl Base58CheckCodec {
    pub const fn new(network: Network) -> Self {
        Self {
            network,
            pub_key_hash: network.pub_key_hash_version(),
            script_hash: network.script_hash_version(),
        }
    }
}

/// Encode `version ‖ hash` with a trailing double-SHA256 checksum.
pub(crate) fn to_base58_check(hash: &[u8], version: u8) -> Result<String> {
    if hash.len() != HASH160_LEN {
        return Err(AddressError::invalid(format!(
            "Hash must be {} bytes",
            HASH160_LEN
        )));
    }

    let mut data = Vec::with_capacity(LEGACY_PAYLOAD_LEN);
    data.push(version);
    data.extend_from_slice(hash);

    Ok(base58::encode_check(&data))
}

/// Decode and verify any Base58Check string, returning the payload without checksum.
pub(crate) fn decode_check(address: &str) -> Result<Vec<u8>> {
    if address.is_empty() {
        return Err(AddressError::invalid("Empty address"));
    }
    base58::decode_check(address).map_err(|e| AddressError::invalid(format!("Base58 error: {}", e)))
}

/// Decode a legacy address to (version, hash)
pub(crate) fn from_base58_check(address: &str) -> Result<(u8, [u8; HASH160_LEN])> {
    let payload = decode_check(address)?;

    if payload.len() != LEGACY_PAYLOAD_LEN {
        return Err(AddressError::invalid(format!(
            "Invalid decoded length: expected {}, got {}",
            LEGACY_PAYLOAD_LEN,
            payload.len()
        )));
    }

    let mut hash = [0u8; HASH160_LEN];
    hash.copy_from_slice(&payload[1..]);

    Ok((payload[0], hash))
}

impl AddressCodec for Base58CheckCodec {
    fn encode(&self, payload: &AddressPayload) -> Result<String> {
        if payload.network().legacy_network() != self.network {
            return Err(AddressError::invalid(format!(
                "Network mismatch: codec is {}, payload is {}",
                self.network,
                payload.network()
            )));
        }
        to_base58_check(payload.hash(), payload.legacy_version())
    }

    fn decode(&self, address: &str) -> Result<AddressPayload> {
        let (version, hash) = from_base58_check(address)?;

        let payload = AddressPayload::from_legacy_version(version, hash)?;
        if payload.network() != self.network {
            return Err(AddressError::invalid(format!(
                "Version mismatch: expected {} or {}, got {}",
                self.pub_key_hash, self.script_hash, version
            )));
        }
        Ok(payload)
    }
}
