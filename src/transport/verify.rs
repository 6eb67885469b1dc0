use serde::{Deserialize, Serialize};

use super::money::{TransportCount, TransportMoney};
use super::{TransportError, WireAuth};
use crate::domain::{
    ResponseCode, VerifyCheckAttempt, VerifyCheckRequest, VerifyCheckResponse, VerifyRequest,
    VerifyResponse, VerifySearchRequest, VerifySearchResponse,
};

pub const VERIFY_PATH: &str = "/verify/json";
pub const VERIFY_CHECK_PATH: &str = "/verify/check/json";
pub const VERIFY_SEARCH_PATH: &str = "/verify/search/json";

#[derive(Debug, Serialize)]
struct VerifyJsonRequest<'a> {
    #[serde(flatten)]
    auth: Option<WireAuth<'a>>,
    number: &'a str,
    brand: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    sender_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    country: Option<&'a str>,
    #[serde(rename = "lg", skip_serializing_if = "Option::is_none")]
    language: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code_length: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pin_expiry: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_event_wait: Option<u32>,
}

#[derive(Debug, Serialize)]
struct VerifyCheckJsonRequest<'a> {
    #[serde(flatten)]
    auth: Option<WireAuth<'a>>,
    request_id: &'a str,
    code: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    ip_address: Option<String>,
}

#[derive(Debug, Serialize)]
struct VerifySearchJsonRequest<'a> {
    #[serde(flatten)]
    auth: Option<WireAuth<'a>>,
    request_id: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
struct VerifyJsonResponse {
    status: TransportCount,
    #[serde(default)]
    request_id: Option<String>,
    #[serde(default)]
    error_text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct VerifyCheckJsonResponse {
    status: TransportCount,
    #[serde(default)]
    event_id: Option<String>,
    #[serde(default)]
    price: Option<TransportMoney>,
    #[serde(default)]
    currency: Option<String>,
    #[serde(default)]
    error_text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct VerifySearchJsonResponse {
    #[serde(default)]
    request_id: Option<String>,
    #[serde(default)]
    account_id: Option<String>,
    #[serde(default)]
    number: Option<String>,
    #[serde(default)]
    sender_id: Option<String>,
    #[serde(default)]
    date_submitted: Option<String>,
    #[serde(default)]
    date_finalized: Option<String>,
    #[serde(default)]
    first_event_date: Option<String>,
    #[serde(default)]
    last_event_date: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    checks: Vec<VerifyCheckJson>,
    #[serde(default)]
    price: Option<TransportMoney>,
    #[serde(default)]
    currency: Option<String>,
    #[serde(default)]
    error_text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct VerifyCheckJson {
    #[serde(default)]
    date_received: Option<String>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    ip_address: Option<String>,
}

pub fn encode_verify_json(
    request: &VerifyRequest,
    auth: Option<WireAuth<'_>>,
) -> Result<Vec<u8>, TransportError> {
    let body = VerifyJsonRequest {
        auth,
        number: &request.number,
        brand: &request.brand,
        sender_id: request.sender_id.as_deref(),
        country: request.country.as_deref(),
        language: request.language.as_deref(),
        code_length: request.code_length,
        pin_expiry: request.pin_expiry,
        next_event_wait: request.next_event_wait,
    };
    Ok(serde_json::to_vec(&body)?)
}

pub fn encode_verify_check_json(
    request: &VerifyCheckRequest,
    auth: Option<WireAuth<'_>>,
) -> Result<Vec<u8>, TransportError> {
    let body = VerifyCheckJsonRequest {
        auth,
        request_id: &request.request_id,
        code: &request.code,
        ip_address: request.ip_address.map(|ip| ip.to_string()),
    };
    Ok(serde_json::to_vec(&body)?)
}

pub fn encode_verify_search_json(
    request: &VerifySearchRequest,
    auth: Option<WireAuth<'_>>,
) -> Result<Vec<u8>, TransportError> {
    let body = VerifySearchJsonRequest {
        auth,
        request_id: &request.request_id,
    };
    Ok(serde_json::to_vec(&body)?)
}

pub fn decode_verify_response(body: &[u8]) -> Result<VerifyResponse, TransportError> {
    let parsed: VerifyJsonResponse = serde_json::from_slice(body)?;
    Ok(VerifyResponse {
        status: ResponseCode::new(parsed.status.value()),
        request_id: parsed.request_id,
        error_text: parsed.error_text,
    })
}

pub fn decode_verify_check_response(body: &[u8]) -> Result<VerifyCheckResponse, TransportError> {
    let parsed: VerifyCheckJsonResponse = serde_json::from_slice(body)?;
    Ok(VerifyCheckResponse {
        status: ResponseCode::new(parsed.status.value()),
        event_id: parsed.event_id,
        price: parsed.price.map(TransportMoney::into_string),
        currency: parsed.currency,
        error_text: parsed.error_text,
    })
}

pub fn decode_verify_search_response(
    body: &[u8],
) -> Result<VerifySearchResponse, TransportError> {
    let parsed: VerifySearchJsonResponse = serde_json::from_slice(body)?;
    Ok(VerifySearchResponse {
        request_id: parsed.request_id,
        account_id: parsed.account_id,
        number: parsed.number,
        sender_id: parsed.sender_id,
        date_submitted: parsed.date_submitted,
        date_finalized: parsed.date_finalized,
        first_event_date: parsed.first_event_date,
        last_event_date: parsed.last_event_date,
        status: parsed.status,
        checks: parsed
            .checks
            .into_iter()
            .map(|check| VerifyCheckAttempt {
                date_received: check.date_received,
                code: check.code,
                status: check.status,
                ip_address: check.ip_address,
            })
            .collect(),
        price: parsed.price.map(TransportMoney::into_string),
        currency: parsed.currency,
        error_text: parsed.error_text,
    })
}
