mod address;
mod error;
mod networks;
#[cfg(test)]
mod test_utils;
pub mod wasm;

// re-export bitcoin from the miniscript crate
pub use ::miniscript::bitcoin;

pub use address::{
    decode_try_codecs, detect_address_format, detect_address_network, detect_address_type,
    from_output_script, hash160, hash160_to_cash, hash160_to_legacy, is_cash_address,
    is_hash160, is_legacy_address, is_mainnet_address, is_p2pkh_address, is_p2sh_address,
    is_regtest_address, is_testnet_address, to_cash_address, to_hash160, to_legacy_address,
    to_output_script, AddressCodec, AddressError, AddressFormat, AddressPayload, AddressType,
    Base58CheckCodec, CashAddrCodec, Classification, MAINNET, MAINNET_CASHADDR, REGTEST_CASHADDR,
    TESTNET, TESTNET_CASHADDR,
};
pub use address::{cashaddr, classify};

pub use error::WasmCashaddrError;
pub use networks::Network;
pub use wasm::AddressNamespace;
