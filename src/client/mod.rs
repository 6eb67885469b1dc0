//! Client layer: orchestrates transport calls and maps transport ↔ domain.

mod http;

use std::sync::Arc;
use std::time::Duration;

use crate::domain::{
    AccountBalance, ApiKey, ApiSecret, MessageResponse, SmsMessage, UssdMessage,
    ValidationError, VerifyCheckRequest, VerifyCheckResponse, VerifyRequest, VerifyResponse,
    VerifySearchRequest, VerifySearchResponse,
};
use crate::transport::{self, TransportError, WireAuth};

use self::http::{BoxError, HttpResponse, HttpTransport, ReqwestTransport, diagnostic_trace};

const DEFAULT_REST_ENDPOINT: &str = "https://rest.nexmo.com";
const DEFAULT_API_ENDPOINT: &str = "https://api.nexmo.com";

#[derive(Debug, Clone)]
/// Account credentials for the Nexmo REST API.
pub struct Credentials {
    pub api_key: ApiKey,
    pub api_secret: ApiSecret,
}

impl Credentials {
    /// Validate both parts are non-empty after trimming.
    pub fn new(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            api_key: ApiKey::new(api_key)?,
            api_secret: ApiSecret::new(api_secret)?,
        })
    }

    fn wire(&self) -> WireAuth<'_> {
        WireAuth {
            api_key: self.api_key.as_str(),
            api_secret: self.api_secret.as_str(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Whether the client writes `api_key`/`api_secret` into request payloads.
pub enum AuthMode {
    #[default]
    InjectCredentials,
    /// Payloads are sent without credentials, e.g. when a proxy signs them.
    PreSigned,
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`NexmoClient`].
pub enum NexmoError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    ///
    /// `trace` lists the request phase and the chain of causes. It is meant
    /// for logs, not for matching.
    #[error("transport error: {source}")]
    Transport {
        #[source]
        source: BoxError,
        trace: Vec<String>,
    },

    /// Non-successful HTTP status code returned by the server.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// The response body could not be decoded; `body` holds the raw bytes.
    #[error("invalid response: {source}")]
    InvalidResponse {
        #[source]
        source: TransportError,
        body: Vec<u8>,
    },

    /// A request could not be encoded.
    #[error("encode error: {0}")]
    Encode(#[source] TransportError),

    /// The request was rejected before any I/O.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl NexmoError {
    fn transport(source: BoxError) -> Self {
        let trace = diagnostic_trace(source.as_ref());
        Self::Transport { source, trace }
    }
}

#[derive(Debug, Clone)]
/// Builder for [`NexmoClient`].
pub struct NexmoClientBuilder {
    credentials: Credentials,
    rest_endpoint: String,
    api_endpoint: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    auth_mode: AuthMode,
    default_from: Option<String>,
}

impl NexmoClientBuilder {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            rest_endpoint: DEFAULT_REST_ENDPOINT.to_owned(),
            api_endpoint: DEFAULT_API_ENDPOINT.to_owned(),
            timeout: None,
            user_agent: None,
            auth_mode: AuthMode::default(),
            default_from: None,
        }
    }

    /// Base URL for SMS, USSD and account calls.
    pub fn rest_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.rest_endpoint = endpoint.into();
        self
    }

    /// Base URL for Verify calls.
    pub fn api_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.api_endpoint = endpoint.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn auth_mode(mut self, auth_mode: AuthMode) -> Self {
        self.auth_mode = auth_mode;
        self
    }

    /// Sender used when an outbound message leaves `from` blank.
    pub fn default_from(mut self, from: impl Into<String>) -> Self {
        self.default_from = Some(from.into());
        self
    }

    pub fn build(self) -> Result<NexmoClient, NexmoError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| NexmoError::transport(Box::new(err)))?;

        Ok(NexmoClient {
            credentials: self.credentials,
            rest_endpoint: self.rest_endpoint,
            api_endpoint: self.api_endpoint,
            auth_mode: self.auth_mode,
            default_from: self.default_from,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

enum Outbound {
    Form(Vec<(String, String)>),
    Json(Vec<u8>),
    Get,
}

#[derive(Clone)]
/// High-level Nexmo client.
///
/// SMS, USSD and balance calls go to `https://rest.nexmo.com`, Verify calls to
/// `https://api.nexmo.com`. Every request is validated before it is sent and
/// every response is decoded from JSON.
pub struct NexmoClient {
    credentials: Credentials,
    rest_endpoint: String,
    api_endpoint: String,
    auth_mode: AuthMode,
    default_from: Option<String>,
    http: Arc<dyn HttpTransport>,
}

impl NexmoClient {
    /// Create a client using the default endpoints.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            rest_endpoint: DEFAULT_REST_ENDPOINT.to_owned(),
            api_endpoint: DEFAULT_API_ENDPOINT.to_owned(),
            auth_mode: AuthMode::default(),
            default_from: None,
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    pub fn builder(credentials: Credentials) -> NexmoClientBuilder {
        NexmoClientBuilder::new(credentials)
    }

    /// Send an SMS through `sms/json`.
    ///
    /// Errors:
    /// - [`NexmoError::Validation`] before any I/O for a malformed message,
    /// - [`NexmoError::HttpStatus`] for non-2xx HTTP responses,
    /// - [`NexmoError::InvalidResponse`] when the body is not the expected JSON.
    ///
    /// Per-segment rejections are reported through [`MessageResponse`], not as errors.
    pub async fn send_sms(&self, message: &SmsMessage) -> Result<MessageResponse, NexmoError> {
        let from = self.sender(&message.from);
        message.validate_with_sender(from)?;

        let body = transport::encode_sms_json(message, from, self.auth())
            .map_err(NexmoError::Encode)?;
        let url = join(&self.rest_endpoint, transport::SMS_PATH);

        let body = self.dispatch("sms", &url, Outbound::Json(body)).await?;
        decode(body, transport::decode_message_response)
    }

    /// Send a plain text SMS.
    pub async fn send_text(
        &self,
        from: impl Into<String>,
        to: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<MessageResponse, NexmoError> {
        self.send_sms(&SmsMessage::text(from, to, text)).await
    }

    /// Send a class 0 text SMS.
    pub async fn send_flash(
        &self,
        from: impl Into<String>,
        to: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<MessageResponse, NexmoError> {
        self.send_sms(&SmsMessage::flash(from, to, text)).await
    }

    /// Send a USSD push or prompt, depending on [`UssdMessage::prompt`].
    pub async fn send_ussd(&self, message: &UssdMessage) -> Result<MessageResponse, NexmoError> {
        let from = self.sender(&message.from);
        message.validate_with_sender(from)?;

        let params = transport::encode_ussd_form(message, from, self.auth());
        let url = join(&self.rest_endpoint, transport::ussd_path(message));

        let body = self.dispatch("ussd", &url, Outbound::Form(params)).await?;
        decode(body, transport::decode_message_response)
    }

    /// Start a verification for `request.number`.
    pub async fn verify(&self, request: &VerifyRequest) -> Result<VerifyResponse, NexmoError> {
        request.validate()?;

        let body =
            transport::encode_verify_json(request, self.auth()).map_err(NexmoError::Encode)?;
        let url = join(&self.api_endpoint, transport::VERIFY_PATH);

        let body = self.dispatch("verify", &url, Outbound::Json(body)).await?;
        decode(body, transport::decode_verify_response)
    }

    /// Check the code a user entered against a running verification.
    pub async fn verify_check(
        &self,
        request: &VerifyCheckRequest,
    ) -> Result<VerifyCheckResponse, NexmoError> {
        request.validate()?;

        let body = transport::encode_verify_check_json(request, self.auth())
            .map_err(NexmoError::Encode)?;
        let url = join(&self.api_endpoint, transport::VERIFY_CHECK_PATH);

        let body = self
            .dispatch("verify_check", &url, Outbound::Json(body))
            .await?;
        decode(body, transport::decode_verify_check_response)
    }

    pub async fn verify_search(
        &self,
        request: &VerifySearchRequest,
    ) -> Result<VerifySearchResponse, NexmoError> {
        request.validate()?;

        let body = transport::encode_verify_search_json(request, self.auth())
            .map_err(NexmoError::Encode)?;
        let url = join(&self.api_endpoint, transport::VERIFY_SEARCH_PATH);

        let body = self
            .dispatch("verify_search", &url, Outbound::Json(body))
            .await?;
        decode(body, transport::decode_verify_search_response)
    }

    /// Fetch the account balance.
    ///
    /// The credentials travel in the URL path, so they are sent regardless of
    /// [`AuthMode`].
    pub async fn get_balance(&self) -> Result<AccountBalance, NexmoError> {
        let url = transport::balance_url(
            &self.rest_endpoint,
            self.credentials.api_key.as_str(),
            self.credentials.api_secret.as_str(),
        )
        .map_err(NexmoError::Encode)?;

        let body = self
            .dispatch("balance", url.as_str(), Outbound::Get)
            .await?;
        decode(body, transport::decode_balance_response)
    }

    fn auth(&self) -> Option<WireAuth<'_>> {
        match self.auth_mode {
            AuthMode::InjectCredentials => Some(self.credentials.wire()),
            AuthMode::PreSigned => None,
        }
    }

    fn sender<'a>(&'a self, from: &'a str) -> &'a str {
        match self.default_from.as_deref() {
            Some(default_from) if from.trim().is_empty() => default_from,
            _ => from,
        }
    }

    async fn dispatch(
        &self,
        operation: &'static str,
        url: &str,
        outbound: Outbound,
    ) -> Result<Vec<u8>, NexmoError> {
        // The balance URL carries the secret; only the operation name is logged.
        tracing::debug!(operation, "sending request");

        let result = match outbound {
            Outbound::Form(params) => self.http.post_form(url, params).await,
            Outbound::Json(body) => self.http.post_json(url, body).await,
            Outbound::Get => self.http.get(url).await,
        };
        let HttpResponse { status, body } = match result {
            Ok(response) => response,
            Err(source) => {
                let trace = diagnostic_trace(source.as_ref());
                tracing::debug!(operation, ?trace, "request failed");
                return Err(NexmoError::Transport { source, trace });
            }
        };

        tracing::debug!(operation, status, bytes = body.len(), "received response");

        if !(200..=299).contains(&status) {
            let text = String::from_utf8_lossy(&body);
            let body = if text.trim().is_empty() {
                None
            } else {
                Some(text.into_owned())
            };
            return Err(NexmoError::HttpStatus { status, body });
        }

        Ok(body)
    }
}

fn join(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

fn decode<T>(
    body: Vec<u8>,
    decoder: impl FnOnce(&[u8]) -> Result<T, TransportError>,
) -> Result<T, NexmoError> {
    decoder(&body).map_err(|source| NexmoError::InvalidResponse { source, body })
}

#[cfg(test)]
mod tests {
    use std::net::IpAddr;
    use std::sync::Mutex;

    use serde_json::{Value, json};

    use super::http::BoxFuture;
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Recorded {
        Form(Vec<(String, String)>),
        Json(Value),
        Get,
    }

    #[derive(Debug, Clone)]
    struct FakeTransport {
        state: Arc<Mutex<FakeTransportState>>,
    }

    #[derive(Debug)]
    struct FakeTransportState {
        last_url: Option<String>,
        last_request: Option<Recorded>,
        response_status: u16,
        response_body: Vec<u8>,
    }

    impl FakeTransport {
        fn new(response_status: u16, response_body: impl Into<Vec<u8>>) -> Self {
            Self {
                state: Arc::new(Mutex::new(FakeTransportState {
                    last_url: None,
                    last_request: None,
                    response_status,
                    response_body: response_body.into(),
                })),
            }
        }

        fn last_request(&self) -> (Option<String>, Option<Recorded>) {
            let state = self.state.lock().unwrap();
            (state.last_url.clone(), state.last_request.clone())
        }

        fn respond(&self, url: &str, recorded: Recorded) -> Result<HttpResponse, BoxError> {
            let mut state = self.state.lock().unwrap();
            state.last_url = Some(url.to_owned());
            state.last_request = Some(recorded);
            Ok(HttpResponse {
                status: state.response_status,
                body: state.response_body.clone(),
            })
        }
    }

    impl HttpTransport for FakeTransport {
        fn post_form<'a>(
            &'a self,
            url: &'a str,
            params: Vec<(String, String)>,
        ) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
            Box::pin(async move { self.respond(url, Recorded::Form(params)) })
        }

        fn post_json<'a>(
            &'a self,
            url: &'a str,
            body: Vec<u8>,
        ) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
            Box::pin(async move {
                let value: Value = serde_json::from_slice(&body)?;
                self.respond(url, Recorded::Json(value))
            })
        }

        fn get<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
            Box::pin(async move { self.respond(url, Recorded::Get) })
        }
    }

    struct PanickingTransport;

    impl HttpTransport for PanickingTransport {
        fn post_form<'a>(
            &'a self,
            _url: &'a str,
            _params: Vec<(String, String)>,
        ) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
            panic!("transport must not be reached")
        }

        fn post_json<'a>(
            &'a self,
            _url: &'a str,
            _body: Vec<u8>,
        ) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
            panic!("transport must not be reached")
        }

        fn get<'a>(&'a self, _url: &'a str) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
            panic!("transport must not be reached")
        }
    }

    struct FailingTransport;

    fn refused() -> Result<HttpResponse, BoxError> {
        Err("connection refused".into())
    }

    impl HttpTransport for FailingTransport {
        fn post_form<'a>(
            &'a self,
            _url: &'a str,
            _params: Vec<(String, String)>,
        ) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
            Box::pin(async { refused() })
        }

        fn post_json<'a>(
            &'a self,
            _url: &'a str,
            _body: Vec<u8>,
        ) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
            Box::pin(async { refused() })
        }

        fn get<'a>(&'a self, _url: &'a str) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
            Box::pin(async { refused() })
        }
    }

    const SMS_OK: &str = r#"
    {
      "message-count": "1",
      "messages": [
        {
          "to": "447700900000",
          "message-id": "0A0000000123ABCD1",
          "status": "0",
          "remaining-balance": "3.14159265",
          "message-price": "0.03330000",
          "network": "12345",
          "client-ref": "my-personal-reference"
        }
      ]
    }
    "#;

    fn credentials() -> Credentials {
        Credentials::new("key", "secret").unwrap()
    }

    fn make_client(http: impl HttpTransport + 'static) -> NexmoClient {
        NexmoClient {
            credentials: credentials(),
            rest_endpoint: "https://rest.example.invalid".to_owned(),
            api_endpoint: "https://api.example.invalid/".to_owned(),
            auth_mode: AuthMode::InjectCredentials,
            default_from: None,
            http: Arc::new(http),
        }
    }

    #[tokio::test]
    async fn send_sms_posts_json_with_credentials() {
        let transport = FakeTransport::new(200, SMS_OK);
        let client = make_client(transport.clone());

        let mut msg = SmsMessage::text("Acme", "447700900000", "hello");
        msg.client_ref = Some("my-personal-reference".to_owned());

        let response = client.send_sms(&msg).await.unwrap();
        assert!(response.is_success());
        assert_eq!(response.message_count, 1);
        assert_eq!(
            response.messages[0].message_id.as_deref(),
            Some("0A0000000123ABCD1")
        );
        assert_eq!(
            response.messages[0].remaining_balance.as_deref(),
            Some("3.14159265")
        );

        let (url, request) = transport.last_request();
        assert_eq!(url.as_deref(), Some("https://rest.example.invalid/sms/json"));
        assert_eq!(
            request,
            Some(Recorded::Json(json!({
                "api_key": "key",
                "api_secret": "secret",
                "from": "Acme",
                "to": "447700900000",
                "type": "text",
                "text": "hello",
                "client-ref": "my-personal-reference",
            })))
        );
    }

    #[tokio::test]
    async fn send_sms_uses_default_from_for_blank_sender() {
        let transport = FakeTransport::new(200, SMS_OK);
        let mut client = make_client(transport.clone());
        client.default_from = Some("Default".to_owned());

        client.send_text("", "447700900000", "hi").await.unwrap();

        let (_, request) = transport.last_request();
        let Some(Recorded::Json(body)) = request else {
            panic!("expected JSON request, got {request:?}");
        };
        assert_eq!(body["from"], "Default");
    }

    #[tokio::test]
    async fn send_sms_without_sender_fails_validation() {
        let client = make_client(PanickingTransport);
        let err = client.send_text("", "447700900000", "hi").await.unwrap_err();
        assert!(matches!(
            err,
            NexmoError::Validation(ValidationError::Empty { field: "from" })
        ));
    }

    #[tokio::test]
    async fn send_sms_rejects_long_client_ref_before_io() {
        let client = make_client(PanickingTransport);

        let mut msg = SmsMessage::text("Acme", "447700900000", "hello");
        msg.client_ref = Some("x".repeat(41));

        let err = client.send_sms(&msg).await.unwrap_err();
        assert!(matches!(
            err,
            NexmoError::Validation(ValidationError::TooLong {
                max: 40,
                actual: 41,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn send_flash_sets_message_class() {
        let transport = FakeTransport::new(200, SMS_OK);
        let client = make_client(transport.clone());

        client.send_flash("Acme", "447700900000", "now").await.unwrap();

        let (_, request) = transport.last_request();
        let Some(Recorded::Json(body)) = request else {
            panic!("expected JSON request, got {request:?}");
        };
        assert_eq!(body["message-class"], 0);
    }

    #[tokio::test]
    async fn pre_signed_mode_omits_credentials() {
        let transport = FakeTransport::new(200, SMS_OK);
        let mut client = make_client(transport.clone());
        client.auth_mode = AuthMode::PreSigned;

        client.send_text("Acme", "447700900000", "hi").await.unwrap();

        let (_, request) = transport.last_request();
        let Some(Recorded::Json(body)) = request else {
            panic!("expected JSON request, got {request:?}");
        };
        assert!(body.get("api_key").is_none());
        assert!(body.get("api_secret").is_none());
    }

    #[tokio::test]
    async fn invalid_response_keeps_raw_body() {
        let transport = FakeTransport::new(200, "<html>maintenance</html>");
        let client = make_client(transport);

        let err = client
            .send_text("Acme", "447700900000", "hi")
            .await
            .unwrap_err();
        match err {
            NexmoError::InvalidResponse { body, .. } => {
                assert_eq!(body, b"<html>maintenance</html>");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn maps_non_success_http_status() {
        let client = make_client(FakeTransport::new(401, "unauthorized"));
        let err = client.send_text("Acme", "447700900000", "hi").await.unwrap_err();
        assert!(matches!(
            err,
            NexmoError::HttpStatus {
                status: 401,
                body: Some(_)
            }
        ));

        let client = make_client(FakeTransport::new(503, "  "));
        let err = client.send_text("Acme", "447700900000", "hi").await.unwrap_err();
        assert!(matches!(
            err,
            NexmoError::HttpStatus {
                status: 503,
                body: None
            }
        ));
    }

    #[tokio::test]
    async fn transport_failure_carries_trace() {
        let client = make_client(FailingTransport);
        let err = client.send_text("Acme", "447700900000", "hi").await.unwrap_err();
        match err {
            NexmoError::Transport { trace, .. } => {
                assert_eq!(trace, vec!["connection refused".to_owned()]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn send_ussd_prompt_posts_form() {
        let transport = FakeTransport::new(200, SMS_OK);
        let client = make_client(transport.clone());

        let msg = UssdMessage::prompt("447700900001", "447700900000", "Reply 1 or 2");
        client.send_ussd(&msg).await.unwrap();

        let (url, request) = transport.last_request();
        assert_eq!(
            url.as_deref(),
            Some("https://rest.example.invalid/ussd-prompt/json")
        );
        let Some(Recorded::Form(params)) = request else {
            panic!("expected form request, got {request:?}");
        };
        assert!(params.contains(&("api_key".to_owned(), "key".to_owned())));
        assert!(params.contains(&("text".to_owned(), "Reply 1 or 2".to_owned())));
    }

    #[tokio::test]
    async fn verify_calls_use_api_endpoint() {
        let transport = FakeTransport::new(200, r#"{"request_id": "abc", "status": "0"}"#);
        let client = make_client(transport.clone());

        let response = client
            .verify(&VerifyRequest::new("447700900000", "Acme"))
            .await
            .unwrap();
        assert_eq!(response.request_id.as_deref(), Some("abc"));
        let (url, _) = transport.last_request();
        assert_eq!(url.as_deref(), Some("https://api.example.invalid/verify/json"));

        let mut check = VerifyCheckRequest::new("abc", "1234");
        check.ip_address = Some(IpAddr::from([203, 0, 113, 7]));
        client.verify_check(&check).await.unwrap();
        let (url, request) = transport.last_request();
        assert_eq!(
            url.as_deref(),
            Some("https://api.example.invalid/verify/check/json")
        );
        let Some(Recorded::Json(body)) = request else {
            panic!("expected JSON request, got {request:?}");
        };
        assert_eq!(body["ip_address"], "203.0.113.7");

        client
            .verify_search(&VerifySearchRequest::new("abc"))
            .await
            .unwrap();
        let (url, _) = transport.last_request();
        assert_eq!(
            url.as_deref(),
            Some("https://api.example.invalid/verify/search/json")
        );
    }

    #[tokio::test]
    async fn verify_check_requires_code() {
        let client = make_client(PanickingTransport);
        let err = client
            .verify_check(&VerifyCheckRequest::new("abc", " "))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            NexmoError::Validation(ValidationError::Empty { field: "code" })
        ));
    }

    #[tokio::test]
    async fn get_balance_uses_path_credentials() {
        let transport = FakeTransport::new(200, r#"{"value": 3.14159265, "autoReload": false}"#);
        let client = make_client(transport.clone());

        let balance = client.get_balance().await.unwrap();
        assert_eq!(balance.value, "3.14159265");

        let (url, request) = transport.last_request();
        assert_eq!(
            url.as_deref(),
            Some("https://rest.example.invalid/account/get-balance/key/secret")
        );
        assert_eq!(request, Some(Recorded::Get));
    }

    #[test]
    fn credentials_validate_inputs() {
        assert!(Credentials::new("  ", "secret").is_err());
        assert!(Credentials::new("key", "").is_err());
    }

    #[test]
    fn builder_overrides_are_applied() {
        let client = NexmoClient::builder(credentials())
            .rest_endpoint("https://rest.example.invalid")
            .api_endpoint("https://api.example.invalid")
            .auth_mode(AuthMode::PreSigned)
            .default_from("Acme")
            .timeout(Duration::from_secs(5))
            .user_agent("nexmo-test")
            .build()
            .unwrap();
        assert_eq!(client.rest_endpoint, "https://rest.example.invalid");
        assert_eq!(client.api_endpoint, "https://api.example.invalid");
        assert_eq!(client.auth_mode, AuthMode::PreSigned);
        assert_eq!(client.default_from.as_deref(), Some("Acme"));
    }
}
