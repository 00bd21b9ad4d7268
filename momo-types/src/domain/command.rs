//! Command identifiers and the per-call request they label.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Header carrying the command identifier.
pub const COMMAND_ID_HEADER: &str = "command-id";

/// One remote operation exposed by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommandId {
    Payment,
    Transfer,
    CrossTransfer,
    AutoDebit,
    AccountStatus,
    TransactionStatus,
    SubscriberRegistration,
}

impl CommandId {
    /// Value sent in the `command-id` header.
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandId::Payment => "mror-transaction-ussd",
            CommandId::Transfer => "transfer-api-transaction",
            CommandId::CrossTransfer => "xcash-api-transaction",
            CommandId::AutoDebit => "auto-debit-async",
            CommandId::AccountStatus => "process-check-subscriber",
            CommandId::TransactionStatus => "process-check-transaction",
            CommandId::SubscriberRegistration => "subscriber-registration",
        }
    }

    /// Operation name used in log lines.
    pub fn operation_name(&self) -> &'static str {
        match self {
            CommandId::Payment => "Payment",
            CommandId::Transfer => "Transfert",
            CommandId::CrossTransfer => "Xtransfert",
            CommandId::AutoDebit => "AutoDebit",
            CommandId::AccountStatus => "AccountStatus",
            CommandId::TransactionStatus => "TransactionStatus",
            CommandId::SubscriberRegistration => "SubscriberRegistration",
        }
    }

    pub fn all() -> &'static [CommandId] {
        &[
            CommandId::Payment,
            CommandId::Transfer,
            CommandId::CrossTransfer,
            CommandId::AutoDebit,
            CommandId::AccountStatus,
            CommandId::TransactionStatus,
            CommandId::SubscriberRegistration,
        ]
    }
}

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CommandId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CommandId::all()
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("Unknown command id: {}", s))
    }
}

/// A fully built gateway call, constructed fresh for every operation.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationRequest {
    pub command_id: CommandId,
    pub headers: Vec<(String, String)>,
    pub body: Value,
}

impl OperationRequest {
    /// Looks up a header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}
