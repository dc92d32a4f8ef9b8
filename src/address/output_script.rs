//! Output script ↔ address conversion for P2PKH and P2SH scripts.

use super::classify::{classify_or_err, AddressFormat};
use super::{
    base58check_codec, cashaddr_codec, AddressCodec, AddressError, AddressPayload, AddressType,
    Result,
};
use crate::bitcoin::hashes::Hash;
use crate::bitcoin::{PubkeyHash, Script, ScriptBuf, ScriptHash};
use crate::networks::Network;

fn payload_from_script(script: &Script, network: Network) -> Result<AddressPayload> {
    if script.is_p2pkh() {
        AddressPayload::from_slice(network, AddressType::P2pkh, &script.as_bytes()[3..23])
    } else if script.is_p2sh() {
        AddressPayload::from_slice(network, AddressType::P2sh, &script.as_bytes()[2..22])
    } else {
        Err(AddressError::UnsupportedScriptType(format!(
            "Only P2PKH and P2SH scripts have addresses, got script of length {}",
            script.len()
        )))
    }
}

/// Convert an output script to an address string on `network`.
pub fn from_output_script(
    script: &Script,
    network: Network,
    format: AddressFormat,
) -> Result<String> {
    let payload = payload_from_script(script, network)?;
    match format {
        AddressFormat::Legacy => base58check_codec(network).encode(&payload),
        AddressFormat::Cashaddr => cashaddr_codec(network).encode(&payload),
    }
}

/// Convert any accepted address string to its output script.
pub fn to_output_script(address: &str) -> Result<ScriptBuf> {
    let (_, payload) = classify_or_err(address)?;
    let hash = *payload.hash();

    Ok(match payload.address_type() {
        AddressType::P2pkh => ScriptBuf::new_p2pkh(&PubkeyHash::from_byte_array(hash)),
        AddressType::P2sh => ScriptBuf::new_p2sh(&ScriptHash::from_byte_array(hash)),
    })
}
