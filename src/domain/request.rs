use std::net::IpAddr;

use crate::domain::validation::ValidationError;
use crate::domain::value::{MessageClass, SmsType};

/// Maximum length of a client reference, in characters.
pub const CLIENT_REF_MAX_CHARS: usize = 40;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// A single outbound SMS (`sms/json`).
///
/// `from` may be left empty when the client is configured with a default sender.
pub struct SmsMessage {
    pub from: String,
    pub to: String,
    pub kind: SmsType,
    /// Message body for [`SmsType::Text`] and [`SmsType::Unicode`].
    pub text: String,
    pub status_report_required: bool,
    pub client_ref: Option<String>,
    pub network_code: Option<String>,
    pub vcard: Option<String>,
    pub vcal: Option<String>,
    /// Delivery TTL in milliseconds.
    pub ttl: Option<u32>,
    pub class: Option<MessageClass>,
    /// Per-message delivery receipt URL.
    pub callback: Option<String>,
    /// Binary payload; required for [`SmsType::Binary`].
    pub body: Vec<u8>,
    /// User data header; required for [`SmsType::Binary`].
    pub udh: Vec<u8>,
    /// WAP push title.
    pub title: Option<String>,
    /// WAP push URL.
    pub url: Option<String>,
    /// WAP push availability in milliseconds.
    pub validity: Option<u32>,
}

impl SmsMessage {
    /// A plain GSM text message.
    pub fn text(from: impl Into<String>, to: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            kind: SmsType::Text,
            text: text.into(),
            ..Default::default()
        }
    }

    /// A text message carrying characters outside the GSM alphabet.
    pub fn unicode(
        from: impl Into<String>,
        to: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            kind: SmsType::Unicode,
            ..Self::text(from, to, text)
        }
    }

    /// A class 0 text message, shown on screen without being stored.
    pub fn flash(from: impl Into<String>, to: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            class: Some(MessageClass::Flash),
            ..Self::text(from, to, text)
        }
    }

    /// A binary message with the given payload and user data header.
    pub fn binary(
        from: impl Into<String>,
        to: impl Into<String>,
        body: impl Into<Vec<u8>>,
        udh: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            kind: SmsType::Binary,
            body: body.into(),
            udh: udh.into(),
            ..Default::default()
        }
    }

    /// Check addressing, client reference length and the payload required by `kind`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.validate_with_sender(&self.from)
    }

    /// Same as [`SmsMessage::validate`], with `from` standing in for the message's sender.
    pub(crate) fn validate_with_sender(&self, from: &str) -> Result<(), ValidationError> {
        validate_addressing(from, &self.to, self.client_ref.as_deref())?;

        let kind = self.kind.as_str();
        match self.kind {
            SmsType::Text | SmsType::Unicode => require_text(kind, "text", &self.text),
            SmsType::Binary => {
                if self.body.is_empty() {
                    return Err(ValidationError::MissingContent { kind, field: "body" });
                }
                if self.udh.is_empty() {
                    return Err(ValidationError::MissingContent { kind, field: "udh" });
                }
                Ok(())
            }
            SmsType::WapPush => {
                require_text(kind, "url", self.url.as_deref().unwrap_or_default())?;
                require_text(kind, "title", self.title.as_deref().unwrap_or_default())
            }
            SmsType::VCal => require_text(kind, "vcal", self.vcal.as_deref().unwrap_or_default()),
            SmsType::VCard => {
                require_text(kind, "vcard", self.vcard.as_deref().unwrap_or_default())
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// A USSD push (`ussd/json`) or prompt (`ussd-prompt/json`) message.
pub struct UssdMessage {
    pub from: String,
    pub to: String,
    pub text: String,
    pub status_report_required: bool,
    pub client_ref: Option<String>,
    pub network_code: Option<String>,
    /// Send as a prompt instead of a push. Prompts need a callback URL on the
    /// account and a long virtual number as `from`.
    pub prompt: bool,
}

impl UssdMessage {
    pub fn push(from: impl Into<String>, to: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn prompt(from: impl Into<String>, to: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            prompt: true,
            ..Self::push(from, to, text)
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.validate_with_sender(&self.from)
    }

    pub(crate) fn validate_with_sender(&self, from: &str) -> Result<(), ValidationError> {
        validate_addressing(from, &self.to, self.client_ref.as_deref())?;
        require_text("ussd", "text", &self.text)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Starts a phone number verification (`verify/json`).
pub struct VerifyRequest {
    pub number: String,
    /// Name of the service shown to the user in the verification message.
    pub brand: String,
    pub sender_id: Option<String>,
    pub country: Option<String>,
    /// Language of the verification message (`lg`).
    pub language: Option<String>,
    pub code_length: Option<u8>,
    /// PIN validity in seconds.
    pub pin_expiry: Option<u32>,
    /// Seconds between delivery attempts.
    pub next_event_wait: Option<u32>,
}

impl VerifyRequest {
    pub fn new(number: impl Into<String>, brand: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            brand: brand.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_field("number", &self.number)?;
        require_field("brand", &self.brand)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Checks a PIN entered by the user (`verify/check/json`).
pub struct VerifyCheckRequest {
    pub request_id: String,
    pub code: String,
    /// End-user IP address, forwarded to Nexmo for fraud detection.
    pub ip_address: Option<IpAddr>,
}

impl VerifyCheckRequest {
    pub fn new(request_id: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            code: code.into(),
            ip_address: None,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_field("request_id", &self.request_id)?;
        require_field("code", &self.code)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Looks up the state of a verification (`verify/search/json`).
pub struct VerifySearchRequest {
    pub request_id: String,
}

impl VerifySearchRequest {
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_field("request_id", &self.request_id)
    }
}

fn validate_addressing(
    from: &str,
    to: &str,
    client_ref: Option<&str>,
) -> Result<(), ValidationError> {
    require_field("from", from)?;
    require_field("to", to)?;

    if let Some(client_ref) = client_ref {
        let actual = client_ref.chars().count();
        if actual > CLIENT_REF_MAX_CHARS {
            return Err(ValidationError::TooLong {
                field: "client-ref",
                max: CLIENT_REF_MAX_CHARS,
                actual,
            });
        }
    }
    Ok(())
}

fn require_field(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(())
}

fn require_text(kind: &'static str, field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::MissingContent { kind, field });
    }
    Ok(())
}
