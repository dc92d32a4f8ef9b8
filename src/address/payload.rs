use super::{AddressError, Result};
use crate::networks::Network;
use std::fmt;

/// Length of a hash160 digest, the only hash length an address payload carries.
pub const HASH160_LEN: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressType {
    P2pkh,
    P2sh,
}

impl AddressType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AddressType::P2pkh => "p2pkh",
            AddressType::P2sh => "p2sh",
        }
    }

    /// Type bits of a cashaddr version byte (bits 3-6).
    pub(crate) const fn cashaddr_type(self) -> u8 {
        match self {
            AddressType::P2pkh => 0,
            AddressType::P2sh => 1,
        }
    }

    pub(crate) fn from_cashaddr_type(type_bits: u8) -> Option<AddressType> {
        match type_bits {
            0 => Some(AddressType::P2pkh),
            1 => Some(AddressType::P2sh),
            _ => None,
        }
    }
}

impl fmt::Display for AddressType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The network, type and hash160 that both address encodings serialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AddressPayload {
    network: Network,
    address_type: AddressType,
    hash: [u8; HASH160_LEN],
}

impl AddressPayload {
    pub const fn new(network: Network, address_type: AddressType, hash: [u8; HASH160_LEN]) -> Self {
        Self {
            network,
            address_type,
            hash,
        }
    }

    pub fn from_slice(network: Network, address_type: AddressType, hash: &[u8]) -> Result<Self> {
        let hash: [u8; HASH160_LEN] = hash.try_into().map_err(|_| {
            AddressError::invalid(format!(
                "Hash must be {} bytes, got {}",
                HASH160_LEN,
                hash.len()
            ))
        })?;
        Ok(Self::new(network, address_type, hash))
    }

    /// Resolve a legacy version byte against the version table of every network.
    pub fn from_legacy_version(version: u8, hash: [u8; HASH160_LEN]) -> Result<Self> {
        for &network in Network::ALL {
            if network.legacy_network() != network {
                continue;
            }
            if version == network.pub_key_hash_version() {
                return Ok(Self::new(network, AddressType::P2pkh, hash));
            }
            if version == network.script_hash_version() {
                return Ok(Self::new(network, AddressType::P2sh, hash));
            }
        }
        Err(AddressError::invalid(format!(
            "Unknown version byte: 0x{:02x}",
            version
        )))
    }

    pub fn network(&self) -> Network {
        self.network
    }

    pub fn address_type(&self) -> AddressType {
        self.address_type
    }

    pub fn hash(&self) -> &[u8; HASH160_LEN] {
        &self.hash
    }

    /// Version byte of the legacy serialization.
    pub fn legacy_version(&self) -> u8 {
        match self.address_type {
            AddressType::P2pkh => self.network.pub_key_hash_version(),
            AddressType::P2sh => self.network.script_hash_version(),
        }
    }

    /// Same hash and type on another network.
    pub fn with_network(self, network: Network) -> Self {
        Self { network, ..self }
    }
}
