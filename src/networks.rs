//! Bitcoin Cash networks and their address parameters.
// Values from src/chainparams.cpp in bitcoin-cash-node:
// https://github.com/bitcoin-cash-node/bitcoin-cash-node/blob/master/src/chainparams.cpp
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    Mainnet,
    Testnet,
    Regtest,
}

impl Network {
    /// All networks, in the order used to infer a missing cashaddr prefix.
    pub const ALL: &'static [Network] = &[Network::Mainnet, Network::Testnet, Network::Regtest];

    /// Returns the canonical string name of this network
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::Regtest => "regtest",
        }
    }

    pub fn from_name_exact(name: &str) -> Option<Network> {
        match name {
            "mainnet" => Some(Network::Mainnet),
            "testnet" => Some(Network::Testnet),
            "regtest" => Some(Network::Regtest),
            _ => None,
        }
    }

    /// Default cashaddr prefix, used when an address omits `prefix:`.
    pub const fn cashaddr_prefix(self) -> &'static str {
        match self {
            Network::Mainnet => "bitcoincash",
            Network::Testnet => "bchtest",
            Network::Regtest => "bchreg",
        }
    }

    /// Reverse lookup of [`Network::cashaddr_prefix`]. Case-insensitive.
    pub fn from_cashaddr_prefix(prefix: &str) -> Option<Network> {
        Network::ALL
            .iter()
            .copied()
            .find(|network| network.cashaddr_prefix().eq_ignore_ascii_case(prefix))
    }

    /// base58Prefixes[PUBKEY_ADDRESS]
    pub const fn pub_key_hash_version(self) -> u8 {
        match self {
            Network::Mainnet => 0x00,
            Network::Testnet | Network::Regtest => 0x6f,
        }
    }

    /// base58Prefixes[SCRIPT_ADDRESS]
    pub const fn script_hash_version(self) -> u8 {
        match self {
            Network::Mainnet => 0x05,
            Network::Testnet | Network::Regtest => 0xc4,
        }
    }

    /// BIP32 (public, private) extended key versions.
    pub const fn extended_key_versions(self) -> ([u8; 4], [u8; 4]) {
        match self {
            Network::Mainnet => ([0x04, 0x88, 0xb2, 0x1e], [0x04, 0x88, 0xad, 0xe4]),
            Network::Testnet | Network::Regtest => {
                ([0x04, 0x35, 0x87, 0xcf], [0x04, 0x35, 0x83, 0x94])
            }
        }
    }

    /// The network whose version bytes a legacy address carries.
    ///
    /// Regtest shares the testnet version bytes, so a legacy address can never be
    /// told apart from a testnet one.
    pub fn legacy_network(self) -> Network {
        match self {
            Network::Mainnet => Network::Mainnet,
            Network::Testnet | Network::Regtest => Network::Testnet,
        }
    }

    pub fn is_mainnet(self) -> bool {
        self == Network::Mainnet
    }

    pub fn is_testnet(self) -> bool {
        self == Network::Testnet
    }

    pub fn is_regtest(self) -> bool {
        self == Network::Regtest
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Network::from_name_exact(s).ok_or_else(|| format!("Unknown network: {}", s))
    }
}
