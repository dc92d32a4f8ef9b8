//! Hash160 digests and raw hash160 ↔ address conversions.

use super::base58check::to_base58_check;
use super::classify::{classify, classify_or_err, extended_key_network};
use super::payload::HASH160_LEN;
use super::{cashaddr_codec, AddressCodec, AddressError, AddressPayload, Result};
use crate::bitcoin::hashes::{hash160 as bitcoin_hash160, Hash};
use crate::networks::Network;

/// RIPEMD160(SHA256(data))
pub fn hash160(data: &[u8]) -> [u8; HASH160_LEN] {
    bitcoin_hash160::Hash::hash(data).to_byte_array()
}

/// The 20-byte hash embedded in a legacy or cashaddr address.
pub fn to_hash160(address: &str) -> Result<[u8; HASH160_LEN]> {
    let (_, payload) = classify_or_err(address)?;
    Ok(*payload.hash())
}

fn payload_from_version(hash: &[u8], version: u8) -> Result<AddressPayload> {
    let hash: [u8; HASH160_LEN] = hash.try_into().map_err(|_| {
        AddressError::invalid(format!(
            "Hash160 must be {} bytes, got {}",
            HASH160_LEN,
            hash.len()
        ))
    })?;
    AddressPayload::from_legacy_version(version, hash)
}

/// Legacy address for `hash` under a legacy version byte (e.g. `0x00` for mainnet P2PKH).
pub fn hash160_to_legacy(hash: &[u8], version: u8) -> Result<String> {
    let payload = payload_from_version(hash, version)?;
    to_base58_check(payload.hash(), payload.legacy_version())
}

/// Cashaddr address for `hash`.
///
/// `version` follows the legacy version-byte convention and selects the type and
/// the main/test network. `regtest` moves the result to the regtest prefix whatever
/// network `version` implies; only the type is kept.
pub fn hash160_to_cash(hash: &[u8], version: u8, regtest: bool) -> Result<String> {
    let mut payload = payload_from_version(hash, version)?;
    if regtest {
        payload = payload.with_network(Network::Regtest);
    }

    cashaddr_codec(payload.network()).encode(&payload)
}

/// Whether `text` is a hex-encoded hash160.
///
/// Addresses and extended keys answer `false`; empty or unrecognized text is an error.
pub fn is_hash160(text: &str) -> Result<bool> {
    if text.is_empty() {
        return Err(AddressError::invalid("Empty hash160"));
    }
    if text.len() == 2 * HASH160_LEN && text.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Ok(true);
    }
    if classify(text).is_valid() || extended_key_network(text).is_some() {
        return Ok(false);
    }
    Err(AddressError::invalid(format!(
        "Neither a hash160 nor an address: {}",
        text
    )))
}
