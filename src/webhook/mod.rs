//! Webhook layer: decodes the delivery receipts and inbound messages Nexmo
//! pushes to your callback URLs.
//!
//! Decoding is pure and works with any HTTP server: collect the fields with
//! [`decode_request`] and hand them to [`decode_delivery_receipt`] or
//! [`decode_received_message`]. With the `webhook` feature (on by default)
//! ready-made axum handlers queue the decoded records onto a
//! `tokio::sync::mpsc` channel.

mod decode;
#[cfg(feature = "webhook")]
mod handler;
mod inbound;
mod receipt;

use crate::timestamp::TimestampFormatError;

pub use decode::{RawFields, decode_request, query_unescape};
#[cfg(feature = "webhook")]
pub use handler::{
    WebhookState, delivery_receipt_handler, delivery_receipt_router, inbound_message_handler,
    inbound_message_router,
};
pub use inbound::decode_received_message;
pub use receipt::decode_delivery_receipt;

#[derive(Debug, thiserror::Error)]
/// Reasons a callback request could not be decoded.
pub enum WebhookError {
    #[error("unsupported content type: {0}")]
    UnsupportedContentType(String),

    #[error("invalid JSON body: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("JSON body is not an object")]
    NotAnObject,

    #[error("malformed escape in {field}: {value:?}")]
    Unescape { field: &'static str, value: String },

    #[error("unrecognized message type: {0:?}")]
    UnrecognizedMessageType(String),

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("{field} is not an integer: {value:?}")]
    InvalidInteger { field: &'static str, value: String },

    #[error(transparent)]
    Timestamp(#[from] TimestampFormatError),
}
