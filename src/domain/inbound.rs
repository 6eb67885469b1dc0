use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
/// Content type of an inbound (MO) message.
pub enum MessageType {
    Text,
    Unicode,
    Binary,
    /// Anything Nexmo sent that this crate does not know about.
    #[default]
    Undefined,
}

impl MessageType {
    /// Map the `type` field of an inbound message.
    pub fn from_wire(value: &str) -> Self {
        match value {
            "text" => Self::Text,
            "unicode" => Self::Unicode,
            "binary" => Self::Binary,
            _ => Self::Undefined,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Unicode => "unicode",
            Self::Binary => "binary",
            Self::Undefined => "undefined",
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// A message received on one of your virtual numbers.
pub struct ReceivedMessage {
    pub message_type: MessageType,
    /// Recipient number (your long virtual number).
    pub to: String,
    /// Sender ID.
    pub msisdn: String,
    /// MCCMNC of the sender's network, when known.
    pub network_code: String,
    /// Nexmo message ID.
    pub id: String,
    /// When Nexmo started pushing the message to you.
    pub timestamp: DateTime<Utc>,
    /// First word of the body, typically used with short codes.
    pub keyword: String,
    /// Set for [`MessageType::Text`] and [`MessageType::Unicode`].
    pub text: String,
    /// Set for [`MessageType::Binary`].
    pub data: Vec<u8>,
    /// User data header; set for [`MessageType::Binary`].
    pub udh: Vec<u8>,
    /// Present when the message is one part of a concatenated set.
    pub concat: Option<Concat>,
}

impl ReceivedMessage {
    pub fn is_concatenated(&self) -> bool {
        self.concat.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Position of a message part inside a concatenated set.
pub struct Concat {
    /// Transaction reference shared by every part of the set.
    pub reference: String,
    pub total: u32,
    /// 1-based.
    pub part: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Delivery receipt fields exactly as Nexmo sent them.
pub struct RawDeliveryReceipt {
    #[serde(default)]
    pub to: String,
    #[serde(default, rename = "network-code")]
    pub network_code: String,
    #[serde(default, rename = "messageId")]
    pub message_id: String,
    #[serde(default)]
    pub msisdn: String,
    #[serde(default)]
    pub status: String,
    #[serde(default, rename = "err-code")]
    pub error_code: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub scts: String,
    #[serde(default, rename = "message-timestamp")]
    pub timestamp: String,
    #[serde(default, rename = "client-ref")]
    pub client_ref: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Delivery receipt for a single sent SMS segment.
///
/// Timestamps are `None` when Nexmo left them empty.
pub struct DeliveryReceipt {
    pub to: String,
    #[serde(rename = "network-code")]
    pub network_code: String,
    #[serde(rename = "messageId")]
    pub message_id: String,
    pub msisdn: String,
    pub status: String,
    #[serde(rename = "err-code")]
    pub error_code: String,
    pub price: String,
    pub scts: Option<DateTime<Utc>>,
    #[serde(rename = "message-timestamp")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(rename = "client-ref")]
    pub client_ref: String,
}
