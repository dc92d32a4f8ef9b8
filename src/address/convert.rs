//! Conversions between the legacy and cashaddr encodings, plus format, network and
//! type detection.
//!
//! Every function here fails with [`AddressError::InvalidAddress`] on empty input and
//! on input that no codec accepts; the `is_*` predicates only answer `false` for
//! addresses that are valid but of another kind.

use super::cashaddr::strip_prefix;
use super::classify::{classify_or_err, extended_key_network, AddressFormat};
use super::{base58check_codec, cashaddr_codec, AddressCodec, AddressError, AddressType, Result};
use crate::networks::Network;

pub fn detect_address_format(address: &str) -> Result<AddressFormat> {
    classify_or_err(address).map(|(format, _)| format)
}

/// Network of an address, or of a BIP32 extended key.
pub fn detect_address_network(address: &str) -> Result<Network> {
    if address.is_empty() {
        return Err(AddressError::invalid("Empty address"));
    }
    if let Some(network) = extended_key_network(address) {
        return Ok(network);
    }
    classify_or_err(address).map(|(_, payload)| payload.network())
}

pub fn detect_address_type(address: &str) -> Result<AddressType> {
    classify_or_err(address).map(|(_, payload)| payload.address_type())
}

pub fn is_legacy_address(address: &str) -> Result<bool> {
    Ok(detect_address_format(address)? == AddressFormat::Legacy)
}

pub fn is_cash_address(address: &str) -> Result<bool> {
    Ok(detect_address_format(address)? == AddressFormat::Cashaddr)
}

pub fn is_mainnet_address(address: &str) -> Result<bool> {
    Ok(detect_address_network(address)?.is_mainnet())
}

pub fn is_testnet_address(address: &str) -> Result<bool> {
    Ok(detect_address_network(address)?.is_testnet())
}

pub fn is_regtest_address(address: &str) -> Result<bool> {
    Ok(detect_address_network(address)?.is_regtest())
}

pub fn is_p2pkh_address(address: &str) -> Result<bool> {
    Ok(detect_address_type(address)? == AddressType::P2pkh)
}

pub fn is_p2sh_address(address: &str) -> Result<bool> {
    Ok(detect_address_type(address)? == AddressType::P2sh)
}

/// Legacy form of an address. Legacy input is returned unchanged.
pub fn to_legacy_address(address: &str) -> Result<String> {
    match classify_or_err(address)? {
        (AddressFormat::Legacy, _) => Ok(address.to_string()),
        (AddressFormat::Cashaddr, payload) => {
            base58check_codec(payload.network()).encode(&payload)
        }
    }
}

/// Cashaddr form of an address.
///
/// The result keeps the payload's network unless `regtest` is set, in which case a
/// testnet or regtest payload is moved to the regtest prefix. Mainnet payloads cannot
/// be moved to regtest. With `with_prefix == false` the `prefix:` part is dropped.
pub fn to_cash_address(address: &str, with_prefix: bool, regtest: bool) -> Result<String> {
    let (_, payload) = classify_or_err(address)?;

    let network = if regtest {
        if payload.network().is_mainnet() {
            tracing::debug!(address, "refusing mainnet to regtest conversion");
            return Err(AddressError::invalid(format!(
                "Mainnet address cannot be converted to regtest: {}",
                address
            )));
        }
        Network::Regtest
    } else {
        payload.network()
    };

    let encoded = cashaddr_codec(network).encode(&payload.with_network(network))?;

    if with_prefix {
        Ok(encoded)
    } else {
        Ok(strip_prefix(&encoded).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_all_networks;
    use crate::test_utils::fixtures::{load_fixture, vectors_for, MAINNET_XPUB, TESTNET_TPUB};

    const INVALID: &[&str] = &["", "some invalid address"];

    #[test]
    fn test_to_legacy_address() {
        for vector in load_fixture() {
            // identity on legacy input
            assert_eq!(to_legacy_address(&vector.legacy).unwrap(), vector.legacy);
            assert_eq!(to_legacy_address(&vector.cashaddr).unwrap(), vector.legacy);
            assert_eq!(
                to_legacy_address(vector.cashaddr_no_prefix()).unwrap(),
                vector.legacy
            );
        }
    }

    test_all_networks!(test_to_cash_address, network, {
        let regtest = network.is_regtest();
        for vector in vectors_for(network) {
            assert_eq!(
                to_cash_address(&vector.legacy, true, regtest).unwrap(),
                vector.cashaddr
            );
            // identity on cashaddr input, with and without prefix
            assert_eq!(
                to_cash_address(&vector.cashaddr, true, regtest).unwrap(),
                vector.cashaddr
            );
            assert_eq!(
                to_cash_address(vector.cashaddr_no_prefix(), true, regtest).unwrap(),
                vector.cashaddr
            );
            assert_eq!(
                to_cash_address(&vector.cashaddr, false, regtest).unwrap(),
                vector.cashaddr_no_prefix()
            );
        }
    });

    test_all_networks!(test_roundtrip_identity, network, {
        for vector in vectors_for(network) {
            let regtest = network.is_regtest();
            let cash = to_cash_address(&vector.legacy, true, regtest).unwrap();
            assert_eq!(to_legacy_address(&cash).unwrap(), vector.legacy);

            let legacy = to_legacy_address(&vector.cashaddr).unwrap();
            assert_eq!(to_cash_address(&legacy, true, regtest).unwrap(), vector.cashaddr);
            assert_eq!(
                to_cash_address(&legacy, false, regtest).unwrap(),
                vector.cashaddr_no_prefix()
            );
        }
    });

    #[test]
    fn test_regtest_cashaddr_keeps_network() {
        let regtest = "bchreg:qq4y6kaqc595jr7c3kt0yx5fspt4shp34ssv79gss2";
        assert_eq!(to_cash_address(regtest, true, false).unwrap(), regtest);
    }

    #[test]
    fn test_testnet_cashaddr_to_regtest() {
        assert_eq!(
            to_cash_address("bchtest:qq4y6kaqc595jr7c3kt0yx5fspt4shp34s2sgytrnv", true, true)
                .unwrap(),
            "bchreg:qq4y6kaqc595jr7c3kt0yx5fspt4shp34ssv79gss2"
        );
    }

    #[test]
    fn test_mainnet_to_regtest_rejected() {
        for vector in vectors_for(Network::Mainnet) {
            assert!(matches!(
                to_cash_address(&vector.legacy, true, true),
                Err(AddressError::InvalidAddress(_))
            ));
            assert!(to_cash_address(&vector.cashaddr, true, true).is_err());
        }
    }

    #[test]
    fn test_uppercase_input() {
        let upper = "BITCOINCASH:QPM2QSZNHKS23Z7629MMS6S4CWEF74VCWVY22GDX6A";
        assert_eq!(
            to_cash_address(upper, true, false).unwrap(),
            upper.to_lowercase()
        );
        assert_eq!(
            to_legacy_address(upper).unwrap(),
            "1BpEi6DfDAUFd7GtittLSdBeYJvcoaVggu"
        );
    }

    #[test]
    fn test_detect_address_format() {
        for vector in load_fixture() {
            assert_eq!(
                detect_address_format(&vector.legacy).unwrap(),
                AddressFormat::Legacy
            );
            assert_eq!(
                detect_address_format(&vector.cashaddr).unwrap(),
                AddressFormat::Cashaddr
            );
            assert!(is_legacy_address(&vector.legacy).unwrap());
            assert!(!is_cash_address(&vector.legacy).unwrap());
            assert!(is_cash_address(&vector.cashaddr).unwrap());
            assert!(!is_legacy_address(&vector.cashaddr).unwrap());
        }
        assert!(detect_address_format(MAINNET_XPUB).is_err());
    }

    #[test]
    fn test_detect_address_network() {
        for vector in load_fixture() {
            assert_eq!(
                detect_address_network(&vector.cashaddr).unwrap(),
                vector.network
            );
            assert_eq!(
                detect_address_network(&vector.legacy).unwrap(),
                vector.network.legacy_network()
            );
        }
        assert_eq!(
            detect_address_network(MAINNET_XPUB).unwrap(),
            Network::Mainnet
        );
        assert_eq!(
            detect_address_network(TESTNET_TPUB).unwrap(),
            Network::Testnet
        );
    }

    #[test]
    fn test_network_predicates_exclusive() {
        let mut addresses: Vec<String> = Vec::new();
        for vector in load_fixture() {
            addresses.push(vector.legacy.clone());
            addresses.push(vector.cashaddr.clone());
            addresses.push(vector.cashaddr_no_prefix().to_string());
        }
        addresses.push(MAINNET_XPUB.to_string());
        addresses.push(TESTNET_TPUB.to_string());

        for address in &addresses {
            let answers = [
                is_mainnet_address(address).unwrap(),
                is_testnet_address(address).unwrap(),
                is_regtest_address(address).unwrap(),
            ];
            assert_eq!(
                answers.iter().filter(|&&a| a).count(),
                1,
                "{}: {:?}",
                address,
                answers
            );
        }
    }

    #[test]
    fn test_type_predicates_exclusive() {
        for vector in load_fixture() {
            for address in [
                vector.legacy.as_str(),
                vector.cashaddr.as_str(),
                vector.cashaddr_no_prefix(),
            ] {
                assert_eq!(detect_address_type(address).unwrap(), vector.address_type);
                assert_ne!(
                    is_p2pkh_address(address).unwrap(),
                    is_p2sh_address(address).unwrap()
                );
                assert_eq!(
                    is_p2pkh_address(address).unwrap(),
                    vector.address_type == AddressType::P2pkh
                );
            }
        }
    }

    #[test]
    fn test_prefix_irrelevance() {
        for vector in load_fixture() {
            let full = vector.cashaddr.as_str();
            let bare = vector.cashaddr_no_prefix();
            assert_eq!(
                detect_address_format(full).unwrap(),
                detect_address_format(bare).unwrap()
            );
            assert_eq!(
                detect_address_network(full).unwrap(),
                detect_address_network(bare).unwrap()
            );
            assert_eq!(
                detect_address_type(full).unwrap(),
                detect_address_type(bare).unwrap()
            );
            assert_eq!(
                to_legacy_address(full).unwrap(),
                to_legacy_address(bare).unwrap()
            );
        }
    }

    #[test]
    fn test_errors_on_invalid_input() {
        for &address in INVALID {
            assert!(to_legacy_address(address).is_err());
            assert!(to_cash_address(address, true, false).is_err());
            assert!(to_cash_address(address, false, true).is_err());
            assert!(detect_address_format(address).is_err());
            assert!(detect_address_network(address).is_err());
            assert!(detect_address_type(address).is_err());
            assert!(is_legacy_address(address).is_err());
            assert!(is_cash_address(address).is_err());
            assert!(is_mainnet_address(address).is_err());
            assert!(is_testnet_address(address).is_err());
            assert!(is_regtest_address(address).is_err());
            assert!(is_p2pkh_address(address).is_err());
            assert!(is_p2sh_address(address).is_err());
        }
    }

    #[test]
    fn test_extended_key_not_convertible() {
        assert!(to_legacy_address(MAINNET_XPUB).is_err());
        assert!(to_cash_address(TESTNET_TPUB, true, false).is_err());
        assert!(detect_address_type(MAINNET_XPUB).is_err());
    }
}
