//! Address classification.
//!
//! [`classify`] is a total function: it walks a fixed, ordered list of codecs and
//! returns the first successful decoding as a [`Classification`], or
//! [`Classification::Invalid`]. Cashaddr codecs are tried in [`Network::ALL`] order,
//! so an address without a prefix is verified against `bitcoincash`, then `bchtest`,
//! then `bchreg`, and the first checksum that holds wins.

use super::base58check;
use super::{
    decode_try_codecs, AddressCodec, AddressError, AddressPayload, Result, MAINNET,
    MAINNET_CASHADDR, REGTEST_CASHADDR, TESTNET, TESTNET_CASHADDR,
};
use crate::networks::Network;
use std::fmt;
use std::str::FromStr;

/// Decoded length of a BIP32 extended key (without checksum)
const EXTENDED_KEY_LEN: usize = 78;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressFormat {
    /// Base58Check
    Legacy,
    Cashaddr,
}

impl AddressFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            AddressFormat::Legacy => "legacy",
            AddressFormat::Cashaddr => "cashaddr",
        }
    }
}

impl fmt::Display for AddressFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AddressFormat {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "legacy" => Ok(AddressFormat::Legacy),
            "cashaddr" => Ok(AddressFormat::Cashaddr),
            other => Err(AddressError::invalid(format!(
                "Unknown address format: {}. Valid formats are: 'legacy', 'cashaddr'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Legacy(AddressPayload),
    Cashaddr(AddressPayload),
    Invalid,
}

impl Classification {
    pub fn format(&self) -> Option<AddressFormat> {
        match self {
            Classification::Legacy(_) => Some(AddressFormat::Legacy),
            Classification::Cashaddr(_) => Some(AddressFormat::Cashaddr),
            Classification::Invalid => None,
        }
    }

    pub fn payload(&self) -> Option<&AddressPayload> {
        match self {
            Classification::Legacy(payload) | Classification::Cashaddr(payload) => Some(payload),
            Classification::Invalid => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        !matches!(self, Classification::Invalid)
    }
}

/// Legacy codecs; regtest has no version bytes of its own.
const LEGACY_CODECS: [&dyn AddressCodec; 2] = [&MAINNET, &TESTNET];

/// Cashaddr codecs in prefix inference order.
const CASHADDR_CODECS: [&dyn AddressCodec; 3] =
    [&MAINNET_CASHADDR, &TESTNET_CASHADDR, &REGTEST_CASHADDR];

/// Classify an address string. Never fails; unrecognized input is `Invalid`.
pub fn classify(address: &str) -> Classification {
    if address.is_empty() {
        return Classification::Invalid;
    }

    let attempts: [(&[&dyn AddressCodec], AddressFormat); 2] = [
        (&LEGACY_CODECS, AddressFormat::Legacy),
        (&CASHADDR_CODECS, AddressFormat::Cashaddr),
    ];

    for (codecs, format) in attempts {
        if let Ok(payload) = decode_try_codecs(address, codecs) {
            tracing::trace!(
                address,
                format = %format,
                network = %payload.network(),
                "classified address"
            );
            return match format {
                AddressFormat::Legacy => Classification::Legacy(payload),
                AddressFormat::Cashaddr => Classification::Cashaddr(payload),
            };
        }
    }

    tracing::trace!(address, "address matched no codec");
    Classification::Invalid
}

/// Classify, turning `Invalid` (and empty input) into an error.
pub(crate) fn classify_or_err(address: &str) -> Result<(AddressFormat, AddressPayload)> {
    if address.is_empty() {
        return Err(AddressError::invalid("Empty address"));
    }
    match classify(address) {
        Classification::Legacy(payload) => Ok((AddressFormat::Legacy, payload)),
        Classification::Cashaddr(payload) => Ok((AddressFormat::Cashaddr, payload)),
        Classification::Invalid => Err(AddressError::invalid(format!(
            "Unrecognized address: {}",
            address
        ))),
    }
}

/// Network of a BIP32 extended key (xpub/xprv/tpub/tprv), if `text` is one.
///
/// Testnet and regtest share version bytes, so regtest is never returned.
pub fn extended_key_network(text: &str) -> Option<Network> {
    let payload = base58check::decode_check(text).ok()?;
    if payload.len() != EXTENDED_KEY_LEN {
        return None;
    }
    let version = &payload[..4];

    [Network::Mainnet, Network::Testnet]
        .into_iter()
        .find(|network| {
            let (public, private) = network.extended_key_versions();
            version == public || version == private
        })
}
