use std::collections::HashMap;

use serde_json::Value;

use super::WebhookError;
use crate::timestamp::TimestampFormatError;

const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";
const APPLICATION_JSON: &str = "application/json";

/// Binary fields, kept percent-escaped so no byte is lost to UTF-8 decoding.
const ESCAPED_FIELDS: [&str; 2] = ["data", "udh"];

/// Callback fields keyed by their wire name.
///
/// Form values are percent-decoded, except `data` and `udh` which keep their
/// escapes until [`query_unescape`] turns them into bytes.
pub type RawFields = HashMap<String, String>;

/// Collect the fields of a webhook callback.
///
/// Returns `Ok(None)` when both the query string and the body are empty; Nexmo
/// sends such requests to check that the endpoint is alive.
pub fn decode_request(
    query: &str,
    content_type: Option<&str>,
    body: &[u8],
) -> Result<Option<RawFields>, WebhookError> {
    if query.is_empty() && body.is_empty() {
        return Ok(None);
    }

    let media_type = content_type
        .map(|value| value.split(';').next().unwrap_or_default().trim().to_ascii_lowercase())
        .unwrap_or_default();

    match media_type.as_str() {
        "" | FORM_URLENCODED => {
            let mut fields = RawFields::new();
            extend_form(&mut fields, query.as_bytes());
            extend_form(&mut fields, body);
            Ok(Some(fields))
        }
        APPLICATION_JSON => decode_json_object(body).map(Some),
        _ => Err(WebhookError::UnsupportedContentType(media_type)),
    }
}

fn extend_form(fields: &mut RawFields, input: &[u8]) {
    for pair in input.split(|&b| b == b'&').filter(|pair| !pair.is_empty()) {
        let (key, value) = match pair.iter().position(|&b| b == b'=') {
            Some(eq) => (&pair[..eq], &pair[eq + 1..]),
            None => (pair, &[][..]),
        };

        let key = form_decode(key);
        let value = if ESCAPED_FIELDS.contains(&key.as_str()) {
            String::from_utf8_lossy(value).into_owned()
        } else {
            form_decode(value)
        };
        fields.insert(key, value);
    }
}

fn form_decode(input: &[u8]) -> String {
    let spaced: Vec<u8> = input
        .iter()
        .map(|&b| if b == b'+' { b' ' } else { b })
        .collect();
    String::from_utf8_lossy(&urlencoding::decode_binary(&spaced)).into_owned()
}

fn decode_json_object(body: &[u8]) -> Result<RawFields, WebhookError> {
    let value: Value = serde_json::from_slice(body)?;
    let Value::Object(map) = value else {
        return Err(WebhookError::NotAnObject);
    };

    let mut fields = RawFields::with_capacity(map.len());
    for (key, value) in map {
        let value = match value {
            Value::Null => continue,
            Value::String(s) => s,
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            nested @ (Value::Array(_) | Value::Object(_)) => nested.to_string(),
        };
        fields.insert(key, value);
    }
    Ok(fields)
}

/// Percent-decode a query component: `%XX` becomes the byte `0xXX` and `+`
/// becomes a space. A `%` not followed by two hex digits is an error.
pub fn query_unescape(field: &'static str, value: &str) -> Result<Vec<u8>, WebhookError> {
    let bytes = value.as_bytes();
    let well_formed = bytes.iter().enumerate().all(|(i, &b)| {
        b != b'%'
            || bytes
                .get(i + 1..i + 3)
                .is_some_and(|pair| pair.iter().all(u8::is_ascii_hexdigit))
    });
    if !well_formed {
        return Err(WebhookError::Unescape {
            field,
            value: value.to_owned(),
        });
    }

    Ok(urlencoding::decode_binary(value.replace('+', " ").as_bytes()).into_owned())
}

/// Parse a timestamp field as received; only if that fails and the value still
/// carries `%` escapes, unescape it once and parse again.
pub(crate) fn parse_escaped<T>(
    field: &'static str,
    value: &str,
    parse: impl Fn(&str) -> Result<T, TimestampFormatError>,
) -> Result<T, WebhookError> {
    match parse(value) {
        Ok(parsed) => Ok(parsed),
        Err(err) if !value.contains('%') => Err(err.into()),
        Err(_) => {
            let unescaped = String::from_utf8(query_unescape(field, value)?).map_err(|_| {
                WebhookError::Unescape {
                    field,
                    value: value.to_owned(),
                }
            })?;
            Ok(parse(&unescaped)?)
        }
    }
}
