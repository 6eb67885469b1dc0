use serde::Deserialize;
use serde::de::Error as DeError;

/// Money-like value returned by Nexmo as either JSON string or JSON number.
///
/// Message reports carry prices as strings while the balance endpoint returns a
/// bare number. For numbers, the raw JSON token is preserved to avoid formatting
/// drift (`10.50` remains `"10.50"` instead of becoming `"10.5"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportMoney(String);

impl TransportMoney {
    pub fn into_string(self) -> String {
        self.0
    }
}

impl<'de> Deserialize<'de> for TransportMoney {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw: Box<serde_json::value::RawValue> = Deserialize::deserialize(deserializer)?;
        let token = raw.get();

        match token.as_bytes().first().copied() {
            Some(b'"') => {
                let parsed = serde_json::from_str::<String>(token).map_err(D::Error::custom)?;
                Ok(Self(parsed))
            }
            Some(b'-' | b'0'..=b'9') => Ok(Self(token.to_owned())),
            _ => Err(D::Error::custom(
                "expected money field to be JSON string or number",
            )),
        }
    }
}

/// Non-negative integer returned by Nexmo either as a JSON number or as a
/// numeric string (`"status": "0"`, `"message-count": "1"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportCount(u32);

impl TransportCount {
    pub fn value(self) -> u32 {
        self.0
    }
}

impl<'de> Deserialize<'de> for TransportCount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Int(u32),
            String(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Int(value) => Ok(Self(value)),
            Repr::String(value) => value.trim().parse::<u32>().map(Self).map_err(|_| {
                D::Error::custom(format!("expected numeric string, got {value:?}"))
            }),
        }
    }
}
