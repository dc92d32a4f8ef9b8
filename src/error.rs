use core::fmt;

use wasm_bindgen::JsValue;

use crate::address::AddressError;

/// Name of the JavaScript error class raised for every address failure.
pub const INVALID_ADDRESS_ERROR: &str = "InvalidAddressError";

#[derive(Debug, Clone)]
pub enum WasmCashaddrError {
    StringError(String),
}

impl std::error::Error for WasmCashaddrError {}
impl fmt::Display for WasmCashaddrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WasmCashaddrError::StringError(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for WasmCashaddrError {
    fn from(s: &str) -> Self {
        WasmCashaddrError::StringError(s.to_string())
    }
}

impl From<String> for WasmCashaddrError {
    fn from(s: String) -> Self {
        WasmCashaddrError::StringError(s)
    }
}

impl From<AddressError> for WasmCashaddrError {
    fn from(err: AddressError) -> Self {
        WasmCashaddrError::StringError(err.to_string())
    }
}

impl From<hex::FromHexError> for WasmCashaddrError {
    fn from(err: hex::FromHexError) -> Self {
        WasmCashaddrError::StringError(format!("Invalid address: {}", err))
    }
}

impl From<WasmCashaddrError> for JsValue {
    fn from(err: WasmCashaddrError) -> Self {
        let js_error = js_sys::Error::new(&err.to_string());
        js_error.set_name(INVALID_ADDRESS_ERROR);
        js_error.into()
    }
}

impl WasmCashaddrError {
    pub fn new(s: &str) -> WasmCashaddrError {
        WasmCashaddrError::StringError(s.to_string())
    }
}
