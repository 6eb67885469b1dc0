//! Transport layer: HTTP and wire-format details (serialization/deserialization).

mod account;
mod money;
mod sms;
mod ussd;
mod verify;

use serde::Serialize;

pub use account::{balance_url, decode_balance_response};
pub use sms::{SMS_PATH, decode_message_response, encode_sms_json};
pub use ussd::{encode_ussd_form, ussd_path};
pub use verify::{
    VERIFY_CHECK_PATH, VERIFY_PATH, VERIFY_SEARCH_PATH, decode_verify_check_response,
    decode_verify_response, decode_verify_search_response, encode_verify_check_json,
    encode_verify_json, encode_verify_search_json,
};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("base URL cannot carry path segments: {url}")]
    InvalidBaseUrl { url: String },
}

/// Plaintext credentials placed into a request payload.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct WireAuth<'a> {
    pub api_key: &'a str,
    pub api_secret: &'a str,
}
