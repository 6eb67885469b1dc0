use super::WebhookError;
use super::decode::{RawFields, parse_escaped};
use crate::domain::{DeliveryReceipt, RawDeliveryReceipt};
use crate::timestamp::{parse_message_timestamp, parse_scts};

impl From<&RawFields> for RawDeliveryReceipt {
    fn from(fields: &RawFields) -> Self {
        let field = |name: &str| fields.get(name).cloned().unwrap_or_default();
        Self {
            to: field("to"),
            network_code: field("network-code"),
            message_id: field("messageId"),
            msisdn: field("msisdn"),
            status: field("status"),
            error_code: field("err-code"),
            price: field("price"),
            scts: field("scts"),
            timestamp: field("message-timestamp"),
            client_ref: field("client-ref"),
        }
    }
}

impl TryFrom<RawDeliveryReceipt> for DeliveryReceipt {
    type Error = WebhookError;

    fn try_from(raw: RawDeliveryReceipt) -> Result<Self, Self::Error> {
        let scts = parse_escaped("scts", &raw.scts, parse_scts)?;
        let timestamp =
            parse_escaped("message-timestamp", &raw.timestamp, parse_message_timestamp)?;

        Ok(Self {
            to: raw.to,
            network_code: raw.network_code,
            message_id: raw.message_id,
            msisdn: raw.msisdn,
            status: raw.status,
            error_code: raw.error_code,
            price: raw.price,
            scts,
            timestamp,
            client_ref: raw.client_ref,
        })
    }
}

/// Build a [`DeliveryReceipt`] from the fields of a receipt callback.
pub fn decode_delivery_receipt(fields: &RawFields) -> Result<DeliveryReceipt, WebhookError> {
    DeliveryReceipt::try_from(RawDeliveryReceipt::from(fields))
}
