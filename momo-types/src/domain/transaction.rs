//! Money-moving operation input.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::GatewayError;

use super::is_blank;

/// Amount as supplied by the caller.
///
/// The gateway accepts numbers or numeric strings; the value is echoed in
/// the body exactly as given and rendered with `Display` in free-text fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Integer(i64),
    Decimal(f64),
    Text(String),
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Integer(v) => write!(f, "{v}"),
            Amount::Decimal(v) => write!(f, "{v}"),
            Amount::Text(v) => write!(f, "{v}"),
        }
    }
}

impl std::str::FromStr for Amount {
    type Err = std::convert::Infallible;

    /// Text becomes a number only when the number prints back as the same
    /// text; otherwise it is kept as given.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(v) = s.parse::<i64>() {
            if v.to_string() == s {
                return Ok(Amount::Integer(v));
            }
        }
        if s.contains('.') {
            if let Ok(v) = s.parse::<f64>() {
                if v.is_finite() && v.to_string() == s {
                    return Ok(Amount::Decimal(v));
                }
            }
        }
        Ok(Amount::Text(s.to_string()))
    }
}

impl From<i64> for Amount {
    fn from(v: i64) -> Self {
        Amount::Integer(v)
    }
}

impl From<f64> for Amount {
    fn from(v: f64) -> Self {
        Amount::Decimal(v)
    }
}

impl From<&str> for Amount {
    fn from(v: &str) -> Self {
        Amount::Text(v.to_string())
    }
}

impl From<String> for Amount {
    fn from(v: String) -> Self {
        Amount::Text(v)
    }
}

/// Input shared by payment, transfer, cross transfer and auto debit.
///
/// Every field is optional so that callers can hand over a partially filled
/// map; `validate` reports which keys are missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    #[serde(rename = "request-id", default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
}

/// A `TransactionRequest` with every required key present.
#[derive(Debug, Clone, Copy)]
pub struct ValidTransaction<'a> {
    pub amount: &'a Amount,
    pub request_id: &'a str,
    pub destination: &'a str,
}

impl TransactionRequest {
    pub fn new(
        amount: impl Into<Amount>,
        request_id: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            amount: Some(amount.into()),
            request_id: Some(request_id.into()),
            destination: Some(destination.into()),
        }
    }

    /// Keys that are absent or blank, in `amount, request-id, destination` order.
    pub fn missing_keys(&self) -> Vec<String> {
        let amount_missing = match &self.amount {
            None => true,
            Some(Amount::Text(v)) => v.trim().is_empty(),
            Some(_) => false,
        };

        [
            ("amount", amount_missing),
            ("request-id", is_blank(self.request_id.as_deref())),
            ("destination", is_blank(self.destination.as_deref())),
        ]
        .into_iter()
        .filter(|(_, missing)| *missing)
        .map(|(key, _)| key.to_string())
        .collect()
    }

    pub fn validate(&self) -> Result<ValidTransaction<'_>, GatewayError> {
        match (&self.amount, &self.request_id, &self.destination) {
            (Some(amount), Some(request_id), Some(destination)) if self.missing_keys().is_empty() => {
                Ok(ValidTransaction {
                    amount,
                    request_id,
                    destination,
                })
            }
            _ => Err(GatewayError::Validation {
                missing: self.missing_keys(),
            }),
        }
    }
}

impl ValidTransaction<'_> {
    /// `destination|timestamp|amount`, as the gateway expects in `remarks`.
    pub fn remarks(&self, timestamp: i64) -> String {
        format!("{}|{}|{}", self.destination, timestamp, self.amount)
    }
}
