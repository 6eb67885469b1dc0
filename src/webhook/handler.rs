use std::net::SocketAddr;

use axum::Router;
use axum::extract::{ConnectInfo, Request, State};
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::routing::any;
use tokio::sync::mpsc;

use super::decode::{RawFields, decode_request};
use super::{WebhookError, decode_delivery_receipt, decode_received_message};
use crate::domain::{DeliveryReceipt, ReceivedMessage};
use crate::ip::is_trusted_addr;

const MAX_BODY_BYTES: usize = 64 * 1024;

/// Shared state of a webhook handler.
///
/// With `verify_ips` set, the peer address is taken from axum's
/// [`ConnectInfo`], so the server must be started with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
pub struct WebhookState<T> {
    pub out: mpsc::Sender<T>,
    pub verify_ips: bool,
}

impl<T> WebhookState<T> {
    pub fn new(out: mpsc::Sender<T>, verify_ips: bool) -> Self {
        Self { out, verify_ips }
    }
}

impl<T> Clone for WebhookState<T> {
    fn clone(&self) -> Self {
        Self {
            out: self.out.clone(),
            verify_ips: self.verify_ips,
        }
    }
}

/// Decode a delivery receipt callback and queue it.
///
/// Replies 200 once the receipt is queued (or for an empty health check) and
/// 500 with an empty body on any failure.
pub async fn delivery_receipt_handler(
    State(state): State<WebhookState<DeliveryReceipt>>,
    request: Request,
) -> StatusCode {
    handle(state, request, "delivery receipt", decode_delivery_receipt).await
}

/// Decode an inbound message callback and queue it.
pub async fn inbound_message_handler(
    State(state): State<WebhookState<ReceivedMessage>>,
    request: Request,
) -> StatusCode {
    handle(state, request, "inbound message", decode_received_message).await
}

/// Router answering on `/` with [`delivery_receipt_handler`]. With `verify_ips`
/// set, serve it via `into_make_service_with_connect_info::<SocketAddr>()`.
pub fn delivery_receipt_router(out: mpsc::Sender<DeliveryReceipt>, verify_ips: bool) -> Router {
    Router::new()
        .route("/", any(delivery_receipt_handler))
        .with_state(WebhookState::new(out, verify_ips))
}

/// Router answering on `/` with [`inbound_message_handler`]. With `verify_ips`
/// set, serve it via `into_make_service_with_connect_info::<SocketAddr>()`.
pub fn inbound_message_router(out: mpsc::Sender<ReceivedMessage>, verify_ips: bool) -> Router {
    Router::new()
        .route("/", any(inbound_message_handler))
        .with_state(WebhookState::new(out, verify_ips))
}

async fn handle<T>(
    state: WebhookState<T>,
    request: Request,
    kind: &'static str,
    decode: fn(&RawFields) -> Result<T, WebhookError>,
) -> StatusCode {
    if state.verify_ips {
        let peer = request
            .extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip());
        if !peer.is_some_and(is_trusted_addr) {
            tracing::warn!(kind, ?peer, "rejected callback from untrusted address");
            return StatusCode::INTERNAL_SERVER_ERROR;
        }
    }

    let (parts, body) = request.into_parts();
    let query = parts.uri.query().unwrap_or_default();
    let content_type = parts
        .headers
        .get(CONTENT_TYPE)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned());

    let body = match axum::body::to_bytes(body, MAX_BODY_BYTES).await {
        Ok(body) => body,
        Err(err) => {
            tracing::warn!(kind, error = %err, "failed to read callback body");
            return StatusCode::INTERNAL_SERVER_ERROR;
        }
    };

    let fields = match decode_request(query, content_type.as_deref(), &body) {
        Ok(Some(fields)) => fields,
        Ok(None) => return StatusCode::OK,
        Err(err) => {
            tracing::warn!(kind, error = %err, "rejected callback");
            return StatusCode::INTERNAL_SERVER_ERROR;
        }
    };

    let record = match decode(&fields) {
        Ok(record) => record,
        Err(err) => {
            tracing::warn!(kind, error = %err, "rejected callback");
            return StatusCode::INTERNAL_SERVER_ERROR;
        }
    };

    if state.out.send(record).await.is_err() {
        tracing::error!(kind, "callback receiver dropped");
        return StatusCode::INTERNAL_SERVER_ERROR;
    }

    StatusCode::OK
}
