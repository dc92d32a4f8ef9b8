//! Cashaddr encoding/decoding for Bitcoin Cash.
//!
//! Implements the cashaddr checksum algorithm as defined in:
//! - Format: https://github.com/bitcoincashorg/bitcoincash.org/blob/master/spec/cashaddr.md
//! - Reference implementation: https://github.com/Bitcoin-ABC/bitcoin-abc/blob/master/src/cashaddr.cpp
//!
//! # Format
//!
//! `[prefix:]payload`, where payload is the base32 text of
//! `version ‖ hash ‖ checksum`:
//!
//! - **Version byte**: bit 7 reserved (zero), bits 3-6 type (0 = P2PKH, 1 = P2SH),
//!   bits 0-2 size class of the hash (0 = 20 bytes, 1 = 24 bytes, ... 7 = 64 bytes)
//! - **Checksum**: 40 bits (8 characters) computed over the prefix *and* the payload,
//!   so the same payload text only verifies under the prefix it was built for
//! - **Prefix**: optional in the text; when omitted the caller supplies the prefix
//!   to verify against
//!
//! Only `Fe32` is taken from the bech32 crate, for the character table. Its
//! checksum and packing helpers follow Bech32/Bech32m, which differs here:
//!
//! | Feature | Bech32/Bech32m | CashAddr |
//! |---------|----------------|----------|
//! | **Separator** | `1` | `:` (optional) |
//! | **Checksum Length** | 6 characters (30 bits) | 8 characters (40 bits) |
//! | **Prefix Expansion** | `[b>>5...] + [0] + [b&31...]` | `[b&31...] + [0]` |
//! | **Padding Validation** | Lenient | Strict (must be zero) |

use super::{AddressCodec, AddressError, AddressPayload, AddressType, Result};
use crate::networks::Network;
use bech32::Fe32;

/// Number of 5-bit checksum groups
const CHECKSUM_LEN: usize = 8;

/// Hash length for each size class (low 3 bits of the version byte)
const SIZE_CLASSES: [usize; 8] = [20, 24, 28, 32, 40, 48, 56, 64];

const RESERVED_BIT: u8 = 0x80;

/// CashAddr codec bound to one network prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CashAddrCodec {
    pub network: Network,
    /// Cashaddr prefix (e.g., "bitcoincash", "bchtest")
    pub prefix: &'static str,
}

impl CashAddrCodec {
    pub const fn new(network: Network) -> Self {
        Self {
            network,
            prefix: network.cashaddr_prefix(),
        }
    }
}

/// A cashaddr string taken apart, checksum already verified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedCashAddr {
    /// Lowercase prefix the checksum verified under
    pub prefix: String,
    /// Whether the text carried the prefix itself
    pub explicit_prefix: bool,
    /// Type bits (3-6) of the version byte
    pub type_bits: u8,
    pub hash: Vec<u8>,
}

fn size_class(hash_len: usize) -> Result<u8> {
    SIZE_CLASSES
        .iter()
        .position(|&len| len == hash_len)
        .map(|class| class as u8)
        .ok_or_else(|| AddressError::invalid(format!("Unsupported hash length: {}", hash_len)))
}

fn to_fe(value: u8) -> Result<Fe32> {
    Fe32::try_from(value).map_err(|_| AddressError::invalid("Invalid 5-bit value"))
}

/// Convert 8-bit bytes to 5-bit Fe32 field elements, MSB first.
///
/// Remaining bits (if any) are left-shifted into a final zero-padded group.
///
/// # Example
/// Input: `[0xFF, 0x01]` (16 bits)
/// - First 5 bits: 11111 = 31
/// - Next 5 bits: 11100 = 28
/// - Next 5 bits: 00000 = 0
/// - Remaining 1 bit (1) padded: 10000 = 16
fn bytes_to_fes(data: &[u8]) -> Result<Vec<Fe32>> {
    let mut acc: u32 = 0;
    let mut bits: u8 = 0;
    let mut result = Vec::with_capacity((data.len() * 8).div_ceil(5));

    for &byte in data {
        acc = (acc << 8) | (byte as u32);
        bits += 8;

        while bits >= 5 {
            bits -= 5;
            result.push(to_fe(((acc >> bits) & 0x1f) as u8)?);
        }
    }

    if bits > 0 {
        result.push(to_fe(((acc << (5 - bits)) & 0x1f) as u8)?);
    }

    Ok(result)
}

/// Convert 5-bit Fe32 field elements to 8-bit bytes.
///
/// Leftover bits must be fewer than 5 and all zero; anything else is a malleated
/// encoding and is rejected.
fn fes_to_bytes(fes: &[Fe32]) -> Result<Vec<u8>> {
    let mut acc: u32 = 0;
    let mut bits: u8 = 0;
    let mut result = Vec::with_capacity(fes.len() * 5 / 8);

    for &fe in fes {
        acc = (acc << 5) | (fe.to_u8() as u32);
        bits += 5;

        while bits >= 8 {
            bits -= 8;
            result.push(((acc >> bits) & 0xff) as u8);
        }
    }

    if bits >= 5 || (bits > 0 && ((acc << (8 - bits)) & 0xff) != 0) {
        return Err(AddressError::invalid("Invalid padding"));
    }

    Ok(result)
}

/// Expand the cashaddr prefix for checksum calculation: the lower 5 bits of each
/// character followed by a zero separator.
///
/// ```text
/// prefix = "bitcoincash"
/// expanded = [2, 9, 20, 3, 15, 9, 14, 3, 1, 19, 8] + [0]
/// ```
fn expand_prefix(prefix: &str) -> Vec<u8> {
    let mut result: Vec<u8> = prefix.bytes().map(|byte| byte & 0x1f).collect();
    result.push(0);
    result
}

/// Compute the cashaddr polymod checksum.
///
/// 40-bit BCH code over GF(32); the state starts at 1 and the result is XORed with 1,
/// so a valid `prefix ‖ payload ‖ checksum` sequence yields 0.
fn polymod(values: &[u8]) -> u64 {
    const GENERATORS: [u64; 5] = [
        0x98f2bc8e61,
        0x79b76d99e2,
        0xf33e5fb3c4,
        0xae2eabe2a8,
        0x1e4f43e470,
    ];

    let mut c: u64 = 1;
    for &d in values {
        let c0 = (c >> 35) as u8;
        c = ((c & 0x07ffffffff) << 5) ^ (d as u64);

        for (i, generator) in GENERATORS.iter().enumerate() {
            if (c0 & (1 << i)) != 0 {
                c ^= generator;
            }
        }
    }

    c ^ 1
}

fn validate_prefix(prefix: &str) -> Result<()> {
    if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Err(AddressError::invalid(format!("Invalid prefix: {:?}", prefix)));
    }
    Ok(())
}

/// Encode a hash with the given type bits to `prefix:payload`.
pub fn encode_cashaddr(hash: &[u8], type_bits: u8, prefix: &str) -> Result<String> {
    validate_prefix(prefix)?;
    if type_bits > 0x0f {
        return Err(AddressError::invalid(format!("Invalid type: {}", type_bits)));
    }
    let prefix = prefix.to_ascii_lowercase();

    let version_byte = (type_bits << 3) | size_class(hash.len())?;

    let mut payload = Vec::with_capacity(1 + hash.len());
    payload.push(version_byte);
    payload.extend_from_slice(hash);

    let payload_5bit = bytes_to_fes(&payload)?;

    // prefix + payload + 8 zeros for the checksum placeholder
    let mut data = expand_prefix(&prefix);
    data.extend(payload_5bit.iter().map(|fe| fe.to_u8()));
    data.extend_from_slice(&[0; CHECKSUM_LEN]);

    let checksum = polymod(&data);

    let mut result = String::with_capacity(prefix.len() + 1 + payload_5bit.len() + CHECKSUM_LEN);
    result.push_str(&prefix);
    result.push(':');
    for fe in payload_5bit {
        result.push(fe.to_char());
    }
    for i in 0..CHECKSUM_LEN {
        let value = ((checksum >> (5 * (CHECKSUM_LEN - 1 - i))) & 0x1f) as u8;
        result.push(to_fe(value)?.to_char());
    }

    Ok(result)
}

/// Decode a cashaddr string. `default_prefix` is used (and checksummed) when the
/// text has no `prefix:` part.
pub fn decode_cashaddr(address: &str, default_prefix: &str) -> Result<DecodedCashAddr> {
    if address.is_empty() {
        return Err(AddressError::invalid("Empty address"));
    }

    let has_lower = address.chars().any(|c| c.is_lowercase());
    let has_upper = address.chars().any(|c| c.is_uppercase());
    if has_lower && has_upper {
        return Err(AddressError::invalid("Mixed case address"));
    }

    let address = address.to_lowercase();

    let (prefix, payload_str, explicit_prefix) = match address.split_once(':') {
        Some((prefix, rest)) => (prefix.to_string(), rest, true),
        None => (default_prefix.to_ascii_lowercase(), address.as_str(), false),
    };
    validate_prefix(&prefix)?;

    let payload_fes = payload_str
        .chars()
        .map(|ch| {
            Fe32::from_char(ch)
                .map_err(|_| AddressError::invalid(format!("Invalid character: {}", ch)))
        })
        .collect::<Result<Vec<_>>>()?;

    if payload_fes.len() <= CHECKSUM_LEN {
        return Err(AddressError::invalid("Payload too short"));
    }

    let mut data = expand_prefix(&prefix);
    data.extend(payload_fes.iter().map(|fe| fe.to_u8()));
    if polymod(&data) != 0 {
        return Err(AddressError::invalid("Invalid checksum"));
    }

    let payload = fes_to_bytes(&payload_fes[..payload_fes.len() - CHECKSUM_LEN])?;

    let (&version_byte, hash) = payload
        .split_first()
        .ok_or_else(|| AddressError::invalid("Empty payload"))?;

    if version_byte & RESERVED_BIT != 0 {
        return Err(AddressError::invalid("Reserved version bit set"));
    }

    let expected_len = SIZE_CLASSES[(version_byte & 0x07) as usize];
    if hash.len() != expected_len {
        return Err(AddressError::invalid(format!(
            "Hash length {} does not match size class (expected {})",
            hash.len(),
            expected_len
        )));
    }

    Ok(DecodedCashAddr {
        prefix,
        explicit_prefix,
        type_bits: (version_byte >> 3) & 0x0f,
        hash: hash.to_vec(),
    })
}

/// The part after `prefix:`, or the whole text when there is no prefix.
pub fn strip_prefix(address: &str) -> &str {
    address
        .split_once(':')
        .map(|(_, payload)| payload)
        .unwrap_or(address)
}

impl AddressCodec for CashAddrCodec {
    fn encode(&self, payload: &AddressPayload) -> Result<String> {
        if payload.network() != self.network {
            return Err(AddressError::invalid(format!(
                "Network mismatch: codec is {}, payload is {}",
                self.network,
                payload.network()
            )));
        }
        encode_cashaddr(
            payload.hash(),
            payload.address_type().cashaddr_type(),
            self.prefix,
        )
    }

    fn decode(&self, address: &str) -> Result<AddressPayload> {
        let decoded = decode_cashaddr(address, self.prefix)?;

        if decoded.prefix != self.prefix {
            return Err(AddressError::invalid(format!(
                "Prefix mismatch: expected {}, got {}",
                self.prefix, decoded.prefix
            )));
        }

        let address_type = AddressType::from_cashaddr_type(decoded.type_bits).ok_or_else(|| {
            AddressError::invalid(format!("Unknown address type: {}", decoded.type_bits))
        })?;

        AddressPayload::from_slice(self.network, address_type, &decoded.hash)
    }
}
