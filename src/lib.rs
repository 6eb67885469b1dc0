//! Typed Rust client for the Nexmo SMS, USSD and Verify HTTP APIs, plus
//! decoders for the delivery receipts and inbound messages Nexmo pushes back.
//!
//! The crate is layered: a domain layer of strong types, a transport layer for
//! wire-format quirks, a small client layer orchestrating outbound requests and
//! a webhook layer decoding callbacks.
//!
//! ```rust,no_run
//! use nexmo::{Credentials, NexmoClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), nexmo::NexmoError> {
//!     let client = NexmoClient::builder(Credentials::new("key", "secret")?)
//!         .default_from("AcmeInc")
//!         .build()?;
//!     let resp = client.send_text("", "447700900000", "hello").await?;
//!     assert!(resp.is_success());
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
pub mod ip;
pub mod timestamp;
mod transport;
pub mod webhook;

pub use client::{AuthMode, Credentials, NexmoClient, NexmoClientBuilder, NexmoError};
pub use domain::{
    AccountBalance, ApiKey, ApiSecret, Concat, DeliveryReceipt, KnownResponseCode, MessageClass,
    MessageReport, MessageResponse, MessageType, RawDeliveryReceipt, ReceivedMessage,
    ResponseCode, SmsMessage, SmsType, UssdMessage, ValidationError, VerifyCheckRequest,
    VerifyCheckResponse, VerifyRequest, VerifyResponse, VerifySearchRequest, VerifySearchResponse,
};
pub use ip::is_trusted_ip;
pub use timestamp::TimestampFormatError;
pub use transport::TransportError;
pub use webhook::WebhookError;
