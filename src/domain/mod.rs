//! Domain layer: strong types with validation and invariants (no I/O).

mod inbound;
mod request;
mod response;
mod validation;
mod value;

pub use inbound::{Concat, DeliveryReceipt, MessageType, RawDeliveryReceipt, ReceivedMessage};
pub use request::{
    CLIENT_REF_MAX_CHARS, SmsMessage, UssdMessage, VerifyCheckRequest, VerifyRequest,
    VerifySearchRequest,
};
pub use response::{
    AccountBalance, MessageReport, MessageResponse, VerifyCheckAttempt, VerifyCheckResponse,
    VerifyResponse, VerifySearchResponse,
};
pub use validation::ValidationError;
pub use value::{ApiKey, ApiSecret, KnownResponseCode, MessageClass, ResponseCode, SmsType};
