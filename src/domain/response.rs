use crate::domain::value::ResponseCode;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Response to any outbound SMS or USSD message.
///
/// Holds one [`MessageReport`] per 160-character segment sent.
pub struct MessageResponse {
    pub message_count: u32,
    pub messages: Vec<MessageReport>,
}

impl MessageResponse {
    /// `true` when every segment was accepted.
    pub fn is_success(&self) -> bool {
        self.messages.iter().all(|report| report.status.is_success())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Status report for a single segment.
pub struct MessageReport {
    pub status: ResponseCode,
    pub message_id: Option<String>,
    pub to: Option<String>,
    pub client_ref: Option<String>,
    pub remaining_balance: Option<String>,
    pub message_price: Option<String>,
    pub network: Option<String>,
    pub error_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyResponse {
    pub status: ResponseCode,
    pub request_id: Option<String>,
    pub error_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyCheckResponse {
    pub status: ResponseCode,
    pub event_id: Option<String>,
    pub price: Option<String>,
    pub currency: Option<String>,
    pub error_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifySearchResponse {
    pub request_id: Option<String>,
    pub account_id: Option<String>,
    pub number: Option<String>,
    pub sender_id: Option<String>,
    pub date_submitted: Option<String>,
    pub date_finalized: Option<String>,
    pub first_event_date: Option<String>,
    pub last_event_date: Option<String>,
    /// Verification state, e.g. `IN PROGRESS`, `SUCCESS`, `FAILED`, `EXPIRED`.
    pub status: Option<String>,
    pub checks: Vec<VerifyCheckAttempt>,
    pub price: Option<String>,
    pub currency: Option<String>,
    pub error_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One PIN submission recorded against a verification.
pub struct VerifyCheckAttempt {
    pub date_received: Option<String>,
    pub code: Option<String>,
    pub status: Option<String>,
    pub ip_address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Account balance in euros.
///
/// The numeric token is kept exactly as returned to avoid float formatting drift.
pub struct AccountBalance {
    pub value: String,
}
