//! Bitcoin Cash address encoding, decoding and classification.
//!
//! Two textual encodings describe the same [`AddressPayload`] (network, type and
//! a 20-byte hash160):
//!
//! - **Base58Check** ("legacy"): `version ‖ hash ‖ checksum`, shared with Bitcoin
//! - **Cashaddr**: `[prefix:]payload`, where the prefix takes part in the checksum
//!
//! # Examples
//!
//! ```rust,ignore
//! use wasm_cashaddr::{to_cash_address, to_legacy_address};
//!
//! let cash = to_cash_address("1BpEi6DfDAUFd7GtittLSdBeYJvcoaVggu", true, false)?;
//! assert_eq!(cash, "bitcoincash:qpm2qsznhks23z7629mms6s4cwef74vcwvy22gdx6a");
//!
//! let legacy = to_legacy_address(&cash)?;
//! assert_eq!(legacy, "1BpEi6DfDAUFd7GtittLSdBeYJvcoaVggu");
//! ```

mod base58check;
pub mod cashaddr;
pub mod classify;
mod convert;
mod hash160;
mod output_script;
mod payload;

pub use base58check::Base58CheckCodec;
pub use cashaddr::CashAddrCodec;
pub use classify::{AddressFormat, Classification};
pub use convert::{
    detect_address_format, detect_address_network, detect_address_type, is_cash_address,
    is_legacy_address, is_mainnet_address, is_p2pkh_address, is_p2sh_address, is_regtest_address,
    is_testnet_address, to_cash_address, to_legacy_address,
};
pub use hash160::{hash160, hash160_to_cash, hash160_to_legacy, is_hash160, to_hash160};
pub use output_script::{from_output_script, to_output_script};
pub use payload::{AddressPayload, AddressType};

use crate::networks::Network;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    InvalidAddress(String),
    UnsupportedScriptType(String),
}

impl AddressError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        AddressError::InvalidAddress(msg.into())
    }
}

impl fmt::Display for AddressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressError::InvalidAddress(msg) => write!(f, "Invalid address: {}", msg),
            AddressError::UnsupportedScriptType(msg) => {
                write!(f, "Unsupported script type: {}", msg)
            }
        }
    }
}

impl std::error::Error for AddressError {}

type Result<T> = std::result::Result<T, AddressError>;

/// Trait for address encoding and decoding
pub trait AddressCodec {
    fn encode(&self, payload: &AddressPayload) -> Result<String>;
    fn decode(&self, address: &str) -> Result<AddressPayload>;
}

// Base58CheckCodec::new(network)
//   - version bytes come from the network's base58Prefixes
//   - regtest has no codec of its own: it reuses the testnet version bytes
//
// CashAddrCodec::new(network)
//   - prefix is the network's default cashaddr prefix
//   - type bits: 0 for P2PKH, 1 for P2SH

pub const MAINNET: Base58CheckCodec = Base58CheckCodec::new(Network::Mainnet);
pub const TESTNET: Base58CheckCodec = Base58CheckCodec::new(Network::Testnet);

// https://github.com/bitcoincashorg/bitcoincash.org/blob/master/spec/cashaddr.md
pub const MAINNET_CASHADDR: CashAddrCodec = CashAddrCodec::new(Network::Mainnet);
pub const TESTNET_CASHADDR: CashAddrCodec = CashAddrCodec::new(Network::Testnet);
pub const REGTEST_CASHADDR: CashAddrCodec = CashAddrCodec::new(Network::Regtest);

/// Codec for the cashaddr serialization on a given network.
pub(crate) fn cashaddr_codec(network: Network) -> &'static CashAddrCodec {
    match network {
        Network::Mainnet => &MAINNET_CASHADDR,
        Network::Testnet => &TESTNET_CASHADDR,
        Network::Regtest => &REGTEST_CASHADDR,
    }
}

/// Codec for the legacy serialization on a given network.
pub(crate) fn base58check_codec(network: Network) -> &'static Base58CheckCodec {
    match network.legacy_network() {
        Network::Mainnet => &MAINNET,
        _ => &TESTNET,
    }
}

/// Try multiple codecs to decode an address
pub fn decode_try_codecs(address: &str, codecs: &[&dyn AddressCodec]) -> Result<AddressPayload> {
    for &codec in codecs {
        if let Ok(payload) = codec.decode(address) {
            return Ok(payload);
        }
    }

    Err(AddressError::InvalidAddress(format!(
        "Could not decode address with any provided codec: {}",
        address
    )))
}
