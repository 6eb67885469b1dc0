//! Parsers for the timestamp formats Nexmo uses in webhook callbacks.
//!
//! Delivery receipts are not consistent about the `message-timestamp` zone
//! suffix, so [`parse_message_timestamp`] tries a fixed list of layouts from
//! the documented one down to no zone at all. Timestamps without a signed
//! offset are taken as UTC.
//!
//! An empty input is "not set" and maps to `Ok(None)`, never an error.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Documented layout, with a signed zone offset (`2022-05-05 16:05:13 +0000`).
const ZONED_LAYOUT: &str = "%Y-%m-%d %H:%M:%S %z";

/// Layouts without a usable offset, all read as UTC. Order matters.
const UTC_LAYOUTS: [&str; 3] = [
    "%Y-%m-%d %H:%M:%S 0000",
    "%Y-%m-%d %H:%M:%S  0000",
    "%Y-%m-%d %H:%M:%S",
];

/// Layout of inbound message timestamps (`2020-01-01 10:00:00`, UTC).
const MESSAGE_LAYOUT: &str = "%Y-%m-%d %H:%M:%S";

/// Compact `yymmddHHMM` layout of the receipt `scts` field (UTC).
const SCTS_LAYOUT: &str = "%y%m%d%H%M";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized {expected} timestamp: {input:?}")]
pub struct TimestampFormatError {
    pub input: String,
    pub expected: &'static str,
}

/// Parse a delivery receipt `message-timestamp`.
pub fn parse_message_timestamp(input: &str) -> Result<Option<DateTime<Utc>>, TimestampFormatError> {
    if input.trim().is_empty() {
        return Ok(None);
    }

    if let Ok(zoned) = DateTime::parse_from_str(input, ZONED_LAYOUT) {
        return Ok(Some(zoned.with_timezone(&Utc)));
    }

    UTC_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(input, layout).ok())
        .map(|naive| Some(naive.and_utc()))
        .ok_or_else(|| TimestampFormatError {
            input: input.to_owned(),
            expected: "message",
        })
}

/// Parse a delivery receipt `scts` (service centre timestamp) in `yymmddHHMM` form.
pub fn parse_scts(input: &str) -> Result<Option<DateTime<Utc>>, TimestampFormatError> {
    if input.trim().is_empty() {
        return Ok(None);
    }

    NaiveDateTime::parse_from_str(input, SCTS_LAYOUT)
        .map(|naive| Some(naive.and_utc()))
        .map_err(|_| TimestampFormatError {
            input: input.to_owned(),
            expected: "scts",
        })
}

/// Parse an inbound message `message-timestamp`, which only comes in one layout
/// and is required.
pub fn parse_inbound_timestamp(input: &str) -> Result<DateTime<Utc>, TimestampFormatError> {
    NaiveDateTime::parse_from_str(input, MESSAGE_LAYOUT)
        .map(|naive| naive.and_utc())
        .map_err(|_| TimestampFormatError {
            input: input.to_owned(),
            expected: "inbound message",
        })
}
