use serde::{Deserialize, Serialize};

use super::money::{TransportCount, TransportMoney};
use super::{TransportError, WireAuth};
use crate::domain::{MessageReport, MessageResponse, ResponseCode, SmsMessage};

pub const SMS_PATH: &str = "/sms/json";

#[derive(Debug, Serialize)]
struct SmsJsonRequest<'a> {
    #[serde(flatten)]
    auth: Option<WireAuth<'a>>,
    from: &'a str,
    to: &'a str,
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    text: &'a str,
    #[serde(rename = "status-report-req", skip_serializing_if = "Option::is_none")]
    status_report_req: Option<u8>,
    #[serde(rename = "client-ref", skip_serializing_if = "Option::is_none")]
    client_ref: Option<&'a str>,
    #[serde(rename = "network-code", skip_serializing_if = "Option::is_none")]
    network_code: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    vcard: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    vcal: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ttl: Option<u32>,
    #[serde(rename = "message-class", skip_serializing_if = "Option::is_none")]
    message_class: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    callback: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    udh: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    validity: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
struct MessageJsonResponse {
    #[serde(rename = "message-count")]
    message_count: TransportCount,
    #[serde(default)]
    messages: Vec<MessageJsonReport>,
}

#[derive(Debug, Clone, Deserialize)]
struct MessageJsonReport {
    status: TransportCount,
    #[serde(default, rename = "message-id")]
    message_id: Option<String>,
    #[serde(default)]
    to: Option<String>,
    #[serde(default, rename = "client-ref")]
    client_ref: Option<String>,
    #[serde(default, rename = "remaining-balance")]
    remaining_balance: Option<TransportMoney>,
    #[serde(default, rename = "message-price")]
    message_price: Option<TransportMoney>,
    #[serde(default)]
    network: Option<String>,
    #[serde(default, rename = "error-text")]
    error_text: Option<String>,
}

/// Encode an SMS as the JSON body of `sms/json`. `from` overrides the message's
/// own sender so a client-wide default can be applied without cloning.
pub fn encode_sms_json(
    message: &SmsMessage,
    from: &str,
    auth: Option<WireAuth<'_>>,
) -> Result<Vec<u8>, TransportError> {
    let hex_or_none = |bytes: &[u8]| (!bytes.is_empty()).then(|| hex::encode(bytes));

    let request = SmsJsonRequest {
        auth,
        from,
        to: &message.to,
        kind: message.kind.as_str(),
        text: &message.text,
        status_report_req: message.status_report_required.then_some(1),
        client_ref: message.client_ref.as_deref(),
        network_code: message.network_code.as_deref(),
        vcard: message.vcard.as_deref(),
        vcal: message.vcal.as_deref(),
        ttl: message.ttl,
        message_class: message.class.map(|class| class.code()),
        callback: message.callback.as_deref(),
        body: hex_or_none(&message.body),
        udh: hex_or_none(&message.udh),
        title: message.title.as_deref(),
        url: message.url.as_deref(),
        validity: message.validity,
    };

    Ok(serde_json::to_vec(&request)?)
}

/// Decode the response shared by `sms/json`, `ussd/json` and `ussd-prompt/json`.
pub fn decode_message_response(body: &[u8]) -> Result<MessageResponse, TransportError> {
    let parsed: MessageJsonResponse = serde_json::from_slice(body)?;

    Ok(MessageResponse {
        message_count: parsed.message_count.value(),
        messages: parsed
            .messages
            .into_iter()
            .map(|report| MessageReport {
                status: ResponseCode::new(report.status.value()),
                message_id: report.message_id,
                to: report.to,
                client_ref: report.client_ref,
                remaining_balance: report.remaining_balance.map(TransportMoney::into_string),
                message_price: report.message_price.map(TransportMoney::into_string),
                network: report.network,
                error_text: report.error_text,
            })
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use crate::domain::{MessageClass, SmsType};

    use super::*;

    fn encode(message: &SmsMessage, auth: Option<WireAuth<'_>>) -> Value {
        let body = encode_sms_json(message, &message.from, auth).unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[test]
    fn encode_text_message_with_credentials() {
        let msg = SmsMessage::text("Acme", "447700900000", "hello");
        let auth = WireAuth {
            api_key: "key",
            api_secret: "secret",
        };

        assert_eq!(
            encode(&msg, Some(auth)),
            json!({
                "api_key": "key",
                "api_secret": "secret",
                "from": "Acme",
                "to": "447700900000",
                "type": "text",
                "text": "hello",
            })
        );
    }

    #[test]
    fn encode_omits_credentials_when_presigned() {
        let msg = SmsMessage::text("Acme", "447700900000", "hello");
        let value = encode(&msg, None);
        assert!(value.get("api_key").is_none());
        assert!(value.get("api_secret").is_none());
    }

    #[test]
    fn encode_optional_fields() {
        let mut msg = SmsMessage::flash("Acme", "447700900000", "hello");
        msg.status_report_required = true;
        msg.client_ref = Some("order-42".to_owned());
        msg.ttl = Some(60_000);
        msg.callback = Some("https://example.com/dlr".to_owned());

        let value = encode(&msg, None);
        assert_eq!(value["status-report-req"], 1);
        assert_eq!(value["client-ref"], "order-42");
        assert_eq!(value["ttl"], 60_000);
        assert_eq!(value["message-class"], 0);
        assert_eq!(value["callback"], "https://example.com/dlr");
        assert!(value.get("network-code").is_none());
    }

    #[test]
    fn encode_binary_payload_as_hex() {
        let msg = SmsMessage::binary("Acme", "447700900000", vec![0xde, 0xad], vec![0x05, 0x00]);
        let value = encode(&msg, None);
        assert_eq!(value["type"], "binary");
        assert_eq!(value["body"], "dead");
        assert_eq!(value["udh"], "0500");
        assert!(value.get("text").is_none());
    }

    #[test]
    fn encode_uses_explicit_sender() {
        let msg = SmsMessage {
            to: "447700900000".to_owned(),
            kind: SmsType::Text,
            text: "hi".to_owned(),
            class: Some(MessageClass::Standard),
            ..Default::default()
        };
        let body = encode_sms_json(&msg, "Default", None).unwrap();
        let value: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["from"], "Default");
        assert_eq!(value["message-class"], 1);
    }

    #[test]
    fn decode_message_response_maps_reports() {
        let json = br#"
        {
          "message-count": "2",
          "messages": [
            {
              "to": "447700900000",
              "message-id": "0A0000000123ABCD1",
              "status": "0",
              "remaining-balance": "3.14159265",
              "message-price": "0.03330000",
              "network": "12345",
              "client-ref": "my-personal-reference"
            },
            {
              "status": "1",
              "error-text": "Throttled"
            }
          ]
        }
        "#;

        let resp = decode_message_response(json).unwrap();
        assert_eq!(resp.message_count, 2);
        assert_eq!(resp.messages.len(), 2);

        let first = &resp.messages[0];
        assert!(first.status.is_success());
        assert_eq!(first.message_id.as_deref(), Some("0A0000000123ABCD1"));
        assert_eq!(first.remaining_balance.as_deref(), Some("3.14159265"));
        assert_eq!(first.message_price.as_deref(), Some("0.03330000"));
        assert_eq!(first.client_ref.as_deref(), Some("my-personal-reference"));

        let second = &resp.messages[1];
        assert_eq!(second.status, ResponseCode::new(1));
        assert_eq!(second.error_text.as_deref(), Some("Throttled"));
        assert!(!resp.is_success());
    }

    #[test]
    fn decode_message_response_rejects_non_json() {
        assert!(decode_message_response(b"<html>oops</html>").is_err());
    }
}
