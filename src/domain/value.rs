use std::fmt;

use crate::domain::validation::ValidationError;

#[derive(Clone, PartialEq, Eq, Hash)]
/// Nexmo account API key (`api_key`).
///
/// Invariant: non-empty after trimming.
pub struct ApiKey(String);

impl ApiKey {
    /// Wire field name used by Nexmo (`api_key`).
    pub const FIELD: &'static str = "api_key";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiKey").field(&self.0).finish()
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// Nexmo account API secret (`api_secret`).
///
/// Invariant: non-empty after trimming. The value is redacted from `Debug` output.
pub struct ApiSecret(String);

impl ApiSecret {
    /// Wire field name used by Nexmo (`api_secret`).
    pub const FIELD: &'static str = "api_secret";

    /// Create a validated [`ApiSecret`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the secret.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiSecret(***)")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// SMS payload type (`type`).
pub enum SmsType {
    #[default]
    Text,
    Binary,
    WapPush,
    Unicode,
    VCal,
    VCard,
}

impl SmsType {
    /// Wire field name used by Nexmo (`type`).
    pub const FIELD: &'static str = "type";

    /// Wire representation of the type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Binary => "binary",
            Self::WapPush => "wappush",
            Self::Unicode => "unicode",
            Self::VCal => "vcal",
            Self::VCard => "vcard",
        }
    }
}

impl fmt::Display for SmsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// GSM message class (`message-class`).
pub enum MessageClass {
    /// Displayed on the handset without being stored (class 0).
    Flash,
    /// Stored in device memory or on the SIM card.
    Standard,
    /// Carries SIM card data; must reach the SIM before acknowledgement.
    SimData,
    /// Forwarded by the receiving entity to an external device.
    Forward,
}

impl MessageClass {
    /// Wire field name used by Nexmo (`message-class`).
    pub const FIELD: &'static str = "message-class";

    /// Numeric class as sent on the wire.
    pub fn code(self) -> u8 {
        match self {
            Self::Flash => 0,
            Self::Standard => 1,
            Self::SimData => 2,
            Self::Forward => 3,
        }
    }

    /// Human-readable class name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Flash => "flash",
            Self::Standard => "standard",
            Self::SimData => "SIM data",
            Self::Forward => "forward",
        }
    }
}

impl fmt::Display for MessageClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Nexmo response status code (`status`).
///
/// This value is preserved as-is even when the code is unknown to this crate.
pub struct ResponseCode(u32);

impl ResponseCode {
    /// Construct a response code from its integer representation.
    pub fn new(code: u32) -> Self {
        Self(code)
    }

    /// Get the integer code as provided by Nexmo.
    pub fn as_u32(self) -> u32 {
        self.0
    }

    /// Map this code to a known response code variant, if one exists.
    pub fn known(self) -> Option<KnownResponseCode> {
        KnownResponseCode::from_code(self.0)
    }

    /// `true` for code `0`.
    pub fn is_success(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if this response code is considered retryable by the crate.
    pub fn is_retryable(self) -> bool {
        matches!(self.known(), Some(kind) if kind.is_retryable())
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.known() {
            Some(kind) => write!(f, "{} ({})", self.0, kind.description()),
            None => write!(f, "{} (unknown)", self.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Known Nexmo response codes.
///
/// Code `10` is reserved by Nexmo and has no variant.
pub enum KnownResponseCode {
    Success,
    Throttled,
    MissingParams,
    InvalidParams,
    InvalidCredentials,
    InternalError,
    InvalidMessage,
    NumberBarred,
    PartnerAccountBarred,
    PartnerQuotaExceeded,
    RestNotEnabled,
    MessageTooLong,
    CommunicationFailed,
    InvalidSignature,
    InvalidSenderAddress,
    InvalidTtl,
    FacilityNotAllowed,
    InvalidMessageClass,
}

impl KnownResponseCode {
    /// Convert a raw Nexmo integer code into a known variant.
    pub fn from_code(code: u32) -> Option<Self> {
        Some(match code {
            0 => Self::Success,
            1 => Self::Throttled,
            2 => Self::MissingParams,
            3 => Self::InvalidParams,
            4 => Self::InvalidCredentials,
            5 => Self::InternalError,
            6 => Self::InvalidMessage,
            7 => Self::NumberBarred,
            8 => Self::PartnerAccountBarred,
            9 => Self::PartnerQuotaExceeded,
            11 => Self::RestNotEnabled,
            12 => Self::MessageTooLong,
            13 => Self::CommunicationFailed,
            14 => Self::InvalidSignature,
            15 => Self::InvalidSenderAddress,
            16 => Self::InvalidTtl,
            17 => Self::FacilityNotAllowed,
            18 => Self::InvalidMessageClass,
            _ => return None,
        })
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Throttled => "Throttled",
            Self::MissingParams => "Missing params",
            Self::InvalidParams => "Invalid params",
            Self::InvalidCredentials => "Invalid credentials",
            Self::InternalError => "Internal error",
            Self::InvalidMessage => "Invalid message",
            Self::NumberBarred => "Number barred",
            Self::PartnerAccountBarred => "Partner account barred",
            Self::PartnerQuotaExceeded => "Partner quota exceeded",
            Self::RestNotEnabled => "Account not enabled for REST",
            Self::MessageTooLong => "Message too long",
            Self::CommunicationFailed => "Communication failed",
            Self::InvalidSignature => "Invalid signature",
            Self::InvalidSenderAddress => "Invalid sender address",
            Self::InvalidTtl => "Invalid TTL",
            Self::FacilityNotAllowed => "Facility not allowed",
            Self::InvalidMessageClass => "Invalid message class",
        }
    }

    /// Whether this status is likely transient and can be retried.
    pub fn is_retryable(self) -> bool {
        matches!(
            self,
            Self::Throttled | Self::InternalError | Self::CommunicationFailed
        )
    }
}
