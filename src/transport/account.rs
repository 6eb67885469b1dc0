use serde::Deserialize;

use super::TransportError;
use super::money::TransportMoney;
use crate::domain::AccountBalance;

#[derive(Debug, Clone, Deserialize)]
struct BalanceJsonResponse {
    value: TransportMoney,
}

/// Build `{base}/account/get-balance/{key}/{secret}` with both credentials
/// percent-encoded as path segments.
pub fn balance_url(base: &str, api_key: &str, api_secret: &str) -> Result<url::Url, TransportError> {
    let mut url = url::Url::parse(base)?;
    url.path_segments_mut()
        .map_err(|()| TransportError::InvalidBaseUrl {
            url: base.to_owned(),
        })?
        .pop_if_empty()
        .extend(["account", "get-balance", api_key, api_secret]);
    Ok(url)
}

pub fn decode_balance_response(body: &[u8]) -> Result<AccountBalance, TransportError> {
    let parsed: BalanceJsonResponse = serde_json::from_slice(body)?;
    Ok(AccountBalance {
        value: parsed.value.into_string(),
    })
}
