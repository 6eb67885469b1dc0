use super::WireAuth;
use crate::domain::{ApiKey, ApiSecret, UssdMessage};

pub const USSD_PUSH_PATH: &str = "/ussd/json";
pub const USSD_PROMPT_PATH: &str = "/ussd-prompt/json";

pub fn ussd_path(message: &UssdMessage) -> &'static str {
    if message.prompt {
        USSD_PROMPT_PATH
    } else {
        USSD_PUSH_PATH
    }
}

/// Encode a USSD message as `application/x-www-form-urlencoded` parameters.
pub fn encode_ussd_form(
    message: &UssdMessage,
    from: &str,
    auth: Option<WireAuth<'_>>,
) -> Vec<(String, String)> {
    let mut params = Vec::<(String, String)>::new();

    if let Some(auth) = auth {
        params.push((ApiKey::FIELD.to_owned(), auth.api_key.to_owned()));
        params.push((ApiSecret::FIELD.to_owned(), auth.api_secret.to_owned()));
    }
    params.push(("from".to_owned(), from.to_owned()));
    params.push(("to".to_owned(), message.to.clone()));
    params.push(("text".to_owned(), message.text.clone()));

    if message.status_report_required {
        params.push(("status_report_req".to_owned(), "1".to_owned()));
    }
    if let Some(client_ref) = message.client_ref.as_ref() {
        params.push(("client_ref".to_owned(), client_ref.clone()));
    }
    if let Some(network_code) = message.network_code.as_ref() {
        params.push(("network-code".to_owned(), network_code.clone()));
    }

    params
}
