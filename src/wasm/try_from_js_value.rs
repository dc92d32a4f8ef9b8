use crate::address::AddressFormat;
use crate::error::WasmCashaddrError;
use crate::networks::Network;
use wasm_bindgen::{JsCast, JsValue};

pub(crate) trait TryFromJsValue {
    fn try_from_js_value(value: &JsValue) -> Result<Self, WasmCashaddrError>
    where
        Self: Sized;
}

impl TryFromJsValue for String {
    fn try_from_js_value(value: &JsValue) -> Result<Self, WasmCashaddrError> {
        value
            .as_string()
            .ok_or_else(|| WasmCashaddrError::new("Invalid address: expected a string"))
    }
}

impl TryFromJsValue for bool {
    fn try_from_js_value(value: &JsValue) -> Result<Self, WasmCashaddrError> {
        value
            .as_bool()
            .ok_or_else(|| WasmCashaddrError::new("Expected a boolean"))
    }
}

impl TryFromJsValue for u8 {
    fn try_from_js_value(value: &JsValue) -> Result<Self, WasmCashaddrError> {
        let n = value
            .as_f64()
            .ok_or_else(|| WasmCashaddrError::new("Expected a number"))?;
        if n.fract() != 0.0 || !(0.0..=255.0).contains(&n) {
            return Err(WasmCashaddrError::from(format!(
                "Version byte out of range: {}",
                n
            )));
        }
        Ok(n as u8)
    }
}

impl TryFromJsValue for Network {
    fn try_from_js_value(value: &JsValue) -> Result<Self, WasmCashaddrError> {
        String::try_from_js_value(value)?
            .parse()
            .map_err(WasmCashaddrError::from)
    }
}

impl TryFromJsValue for AddressFormat {
    fn try_from_js_value(value: &JsValue) -> Result<Self, WasmCashaddrError> {
        String::try_from_js_value(value)?
            .parse()
            .map_err(WasmCashaddrError::from)
    }
}

impl<T: TryFromJsValue> TryFromJsValue for Option<T> {
    fn try_from_js_value(value: &JsValue) -> Result<Self, WasmCashaddrError> {
        if value.is_undefined() || value.is_null() {
            Ok(None)
        } else {
            T::try_from_js_value(value).map(Some)
        }
    }
}

/// Raw bytes of a hash160 argument, given either as hex text or as a `Uint8Array`.
pub(crate) struct Hash160Bytes(pub Vec<u8>);

impl TryFromJsValue for Hash160Bytes {
    fn try_from_js_value(value: &JsValue) -> Result<Self, WasmCashaddrError> {
        if let Some(array) = value.dyn_ref::<js_sys::Uint8Array>() {
            return Ok(Hash160Bytes(array.to_vec()));
        }
        let text = value
            .as_string()
            .ok_or_else(|| WasmCashaddrError::new("Invalid address: expected a hash160"))?;
        Ok(Hash160Bytes(hex::decode(text)?))
    }
}

/// Convert an optional argument, substituting `default` when it is `undefined` or `null`.
pub(crate) fn arg_or<T: TryFromJsValue>(value: &JsValue, default: T) -> Result<T, WasmCashaddrError> {
    Ok(Option::<T>::try_from_js_value(value)?.unwrap_or(default))
}

/// Convert a required argument; `undefined` and `null` are rejected.
pub(crate) fn required<T: TryFromJsValue>(value: &JsValue, name: &str) -> Result<T, WasmCashaddrError> {
    Option::<T>::try_from_js_value(value)?
        .ok_or_else(|| WasmCashaddrError::from(format!("Invalid address: missing {}", name)))
}
