mod address;
mod try_from_js_value;

pub use address::AddressNamespace;
