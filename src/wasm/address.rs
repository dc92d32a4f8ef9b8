use crate::address::{self, AddressFormat};
use crate::bitcoin::Script;
use crate::error::WasmCashaddrError;
use crate::networks::Network;
use crate::wasm::try_from_js_value::{arg_or, required, Hash160Bytes};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;

type Result<T> = std::result::Result<T, WasmCashaddrError>;

/// Mainnet P2PKH, the version byte used when `hash160ToLegacy`/`hash160ToCash` get none.
const DEFAULT_VERSION: u8 = 0x00;

fn address_arg(value: &JsValue) -> Result<String> {
    required(value, "address")
}

#[wasm_bindgen]
pub struct AddressNamespace;

#[wasm_bindgen]
impl AddressNamespace {
    #[wasm_bindgen(js_name = toLegacyAddress)]
    pub fn to_legacy_address(address: JsValue) -> Result<String> {
        Ok(address::to_legacy_address(&address_arg(&address)?)?)
    }

    /// # Arguments
    /// * `address` - Legacy or cashaddr address, with or without prefix
    /// * `with_prefix` - Keep the `prefix:` part of the result (default `true`)
    /// * `regtest` - Encode for the regtest prefix (default `false`)
    #[wasm_bindgen(js_name = toCashAddress)]
    pub fn to_cash_address(address: JsValue, with_prefix: JsValue, regtest: JsValue) -> Result<String> {
        let address = address_arg(&address)?;
        let with_prefix = arg_or(&with_prefix, true)?;
        let regtest = arg_or(&regtest, false)?;
        Ok(address::to_cash_address(&address, with_prefix, regtest)?)
    }

    /// Hash160 of an address as lowercase hex
    #[wasm_bindgen(js_name = toHash160)]
    pub fn to_hash160(address: JsValue) -> Result<String> {
        Ok(hex::encode(address::to_hash160(&address_arg(&address)?)?))
    }

    /// # Arguments
    /// * `hash160` - 20-byte hash as hex string or `Uint8Array`
    /// * `version` - Legacy version byte (default `0x00`)
    #[wasm_bindgen(js_name = hash160ToLegacy)]
    pub fn hash160_to_legacy(hash160: JsValue, version: JsValue) -> Result<String> {
        let Hash160Bytes(hash) = required(&hash160, "hash160")?;
        let version = arg_or(&version, DEFAULT_VERSION)?;
        Ok(address::hash160_to_legacy(&hash, version)?)
    }

    #[wasm_bindgen(js_name = hash160ToCash)]
    pub fn hash160_to_cash(hash160: JsValue, version: JsValue, regtest: JsValue) -> Result<String> {
        let Hash160Bytes(hash) = required(&hash160, "hash160")?;
        let version = arg_or(&version, DEFAULT_VERSION)?;
        let regtest = arg_or(&regtest, false)?;
        Ok(address::hash160_to_cash(&hash, version, regtest)?)
    }

    /// RIPEMD160(SHA256(data))
    #[wasm_bindgen(js_name = hash160)]
    pub fn hash160(data: &[u8]) -> Vec<u8> {
        address::hash160(data).to_vec()
    }

    /// `"legacy"` or `"cashaddr"`
    #[wasm_bindgen(js_name = detectAddressFormat)]
    pub fn detect_address_format(address: JsValue) -> Result<String> {
        let format = address::detect_address_format(&address_arg(&address)?)?;
        Ok(format.as_str().to_string())
    }

    /// `"mainnet"`, `"testnet"` or `"regtest"`
    #[wasm_bindgen(js_name = detectAddressNetwork)]
    pub fn detect_address_network(address: JsValue) -> Result<String> {
        let network = address::detect_address_network(&address_arg(&address)?)?;
        Ok(network.as_str().to_string())
    }

    /// `"p2pkh"` or `"p2sh"`
    #[wasm_bindgen(js_name = detectAddressType)]
    pub fn detect_address_type(address: JsValue) -> Result<String> {
        let address_type = address::detect_address_type(&address_arg(&address)?)?;
        Ok(address_type.as_str().to_string())
    }

    #[wasm_bindgen(js_name = isLegacyAddress)]
    pub fn is_legacy_address(address: JsValue) -> Result<bool> {
        Ok(address::is_legacy_address(&address_arg(&address)?)?)
    }

    #[wasm_bindgen(js_name = isCashAddress)]
    pub fn is_cash_address(address: JsValue) -> Result<bool> {
        Ok(address::is_cash_address(&address_arg(&address)?)?)
    }

    #[wasm_bindgen(js_name = isMainnetAddress)]
    pub fn is_mainnet_address(address: JsValue) -> Result<bool> {
        Ok(address::is_mainnet_address(&address_arg(&address)?)?)
    }

    #[wasm_bindgen(js_name = isTestnetAddress)]
    pub fn is_testnet_address(address: JsValue) -> Result<bool> {
        Ok(address::is_testnet_address(&address_arg(&address)?)?)
    }

    #[wasm_bindgen(js_name = isRegTestAddress)]
    pub fn is_regtest_address(address: JsValue) -> Result<bool> {
        Ok(address::is_regtest_address(&address_arg(&address)?)?)
    }

    #[wasm_bindgen(js_name = isP2PKHAddress)]
    pub fn is_p2pkh_address(address: JsValue) -> Result<bool> {
        Ok(address::is_p2pkh_address(&address_arg(&address)?)?)
    }

    #[wasm_bindgen(js_name = isP2SHAddress)]
    pub fn is_p2sh_address(address: JsValue) -> Result<bool> {
        Ok(address::is_p2sh_address(&address_arg(&address)?)?)
    }

    #[wasm_bindgen(js_name = isHash160)]
    pub fn is_hash160(text: JsValue) -> Result<bool> {
        let text: String = required(&text, "hash160")?;
        Ok(address::is_hash160(&text)?)
    }

    /// Convert output script to address string
    ///
    /// # Arguments
    /// * `script` - The output script as a byte array
    /// * `network` - `"mainnet"`, `"testnet"` or `"regtest"` (default `"mainnet"`)
    /// * `format` - `"legacy"` or `"cashaddr"` (default `"cashaddr"`)
    #[wasm_bindgen(js_name = fromOutputScript)]
    pub fn from_output_script(script: &[u8], network: JsValue, format: JsValue) -> Result<String> {
        let network = arg_or(&network, Network::Mainnet)?;
        let format = arg_or(&format, AddressFormat::Cashaddr)?;
        Ok(address::from_output_script(
            Script::from_bytes(script),
            network,
            format,
        )?)
    }

    /// Convert address string to output script
    #[wasm_bindgen(js_name = toOutputScript)]
    pub fn to_output_script(address: JsValue) -> Result<Vec<u8>> {
        let script = address::to_output_script(&address_arg(&address)?)?;
        Ok(script.to_bytes())
    }
}
