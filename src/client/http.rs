use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;

use reqwest::header::{ACCEPT, CONTENT_TYPE};

pub(crate) type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

pub(crate) type BoxError = Box<dyn StdError + Send + Sync>;

const APPLICATION_JSON: &str = "application/json";

#[derive(Debug, Clone)]
pub(crate) struct HttpResponse {
    pub(crate) status: u16,
    pub(crate) body: Vec<u8>,
}

/// Sends one request and returns the raw status and body.
///
/// Every request carries `Accept: application/json`.
pub(crate) trait HttpTransport: Send + Sync {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>>;

    fn post_json<'a>(
        &'a self,
        url: &'a str,
        body: Vec<u8>,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>>;

    fn get<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<HttpResponse, BoxError>>;
}

#[derive(Debug, Clone)]
pub(crate) struct ReqwestTransport {
    pub(crate) client: reqwest::Client,
}

impl ReqwestTransport {
    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<HttpResponse, BoxError> {
        let response = request.header(ACCEPT, APPLICATION_JSON).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        Ok(HttpResponse { status, body })
    }
}

impl HttpTransport for ReqwestTransport {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        Box::pin(async move { self.execute(self.client.post(url).form(&params)).await })
    }

    fn post_json<'a>(
        &'a self,
        url: &'a str,
        body: Vec<u8>,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        Box::pin(async move {
            let request = self
                .client
                .post(url)
                .header(CONTENT_TYPE, APPLICATION_JSON)
                .body(body);
            self.execute(request).await
        })
    }

    fn get<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        Box::pin(async move { self.execute(self.client.get(url)).await })
    }
}

/// Describe a failed request as a list of human readable steps: the phase
/// reqwest reports (if any) followed by every message in the source chain.
pub(crate) fn diagnostic_trace(err: &(dyn StdError + 'static)) -> Vec<String> {
    let mut trace = Vec::new();

    if let Some(reqwest_err) = err.downcast_ref::<reqwest::Error>() {
        let phase = if reqwest_err.is_builder() {
            "building request"
        } else if reqwest_err.is_connect() {
            "connecting"
        } else if reqwest_err.is_timeout() {
            "timed out"
        } else if reqwest_err.is_body() || reqwest_err.is_decode() {
            "reading response body"
        } else if reqwest_err.is_redirect() {
            "following redirect"
        } else {
            "sending request"
        };
        trace.push(phase.to_owned());
        if let Some(url) = reqwest_err.url() {
            trace.push(format!("host: {}", url.host_str().unwrap_or("<none>")));
        }
    }

    let mut current: Option<&(dyn StdError + 'static)> = Some(err);
    while let Some(cause) = current {
        trace.push(cause.to_string());
        current = cause.source();
    }
    trace
}
