use super::WebhookError;
use super::decode::{RawFields, parse_escaped, query_unescape};
use crate::domain::{Concat, MessageType, ReceivedMessage};
use crate::timestamp::parse_inbound_timestamp;

/// Build a [`ReceivedMessage`] from the fields of an inbound message callback.
///
/// Any malformed field rejects the whole message.
pub fn decode_received_message(fields: &RawFields) -> Result<ReceivedMessage, WebhookError> {
    let field = |name: &str| fields.get(name).map(String::as_str).unwrap_or_default();

    let raw_type = field("type");
    let message_type = match MessageType::from_wire(raw_type) {
        MessageType::Undefined => {
            return Err(WebhookError::UnrecognizedMessageType(raw_type.to_owned()));
        }
        known => known,
    };

    let mut message = ReceivedMessage {
        message_type,
        to: field("to").to_owned(),
        msisdn: field("msisdn").to_owned(),
        network_code: field("network-code").to_owned(),
        id: field("messageId").to_owned(),
        timestamp: parse_escaped(
            "message-timestamp",
            field("message-timestamp"),
            parse_inbound_timestamp,
        )?,
        keyword: field("keyword").to_owned(),
        text: String::new(),
        data: Vec::new(),
        udh: Vec::new(),
        concat: None,
    };

    match message_type {
        MessageType::Text | MessageType::Unicode => {
            message.text = field("text").to_owned();
        }
        MessageType::Binary => {
            message.data = query_unescape("data", required(fields, "data")?)?;
            message.udh = query_unescape("udh", required(fields, "udh")?)?;
        }
        MessageType::Undefined => {}
    }

    if field("concat") == "true" {
        message.concat = Some(Concat {
            reference: field("concat-ref").to_owned(),
            total: parse_count(fields, "concat-total")?,
            part: parse_count(fields, "concat-part")?,
        });
    }

    Ok(message)
}

fn required<'a>(fields: &'a RawFields, name: &'static str) -> Result<&'a str, WebhookError> {
    match fields.get(name) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(WebhookError::MissingField(name)),
    }
}

fn parse_count(fields: &RawFields, name: &'static str) -> Result<u32, WebhookError> {
    let value = required(fields, name)?;
    value.parse().map_err(|_| WebhookError::InvalidInteger {
        field: name,
        value: value.to_owned(),
    })
}
