//! Wallet account and balance snapshots as reported by the providers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Connector id reported for sessions established through the
/// embedded-auth provider (in-app wallet).
pub const EMBEDDED_AUTH_CONNECTOR_ID: &str = "particleAuth";

/// Connection snapshot from the external connection provider.
///
/// `address` is absent while disconnected. This component only reads it;
/// connect/disconnect live in the provider.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub address: Option<String>,
    /// Identifier of the connector that established the session.
    pub connector_id: Option<String>,
}

impl Account {
    /// Whether the session came through the embedded-auth connector.
    pub fn is_embedded_auth(&self) -> bool {
        self.connector_id.as_deref() == Some(EMBEDDED_AUTH_CONNECTOR_ID)
    }
}

/// Native token balance in smallest units, with display metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeBalance {
    pub value: u128,
    pub decimals: u32,
    pub symbol: String,
}

/// Membership-token balance in smallest units.
///
/// Only its string form is inspected (non-zero test), matching the
/// provider contract.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenBalance(pub u128);

impl fmt::Display for TokenBalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Profile info for the signed-in user, owned by the host app.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileInfo {
    pub email: String,
}
