//! Shared wallet context provided via Dioxus context.
//!
//! The host app owns the providers; this struct is how their signals and
//! callbacks reach the status components.

use std::sync::Arc;

use dioxus::prelude::*;

use crate::analytics::AnalyticsSink;
use crate::state::{Account, NativeBalance, TokenBalance};

/// Everything `AccountStatusView` consumes from the host app.
#[derive(Clone)]
pub struct WalletContext {
    /// Connection snapshot from the connection provider.
    pub account: Signal<Account>,
    /// Membership-token balance for the connected address.
    pub token_balance: Signal<Option<TokenBalance>>,
    /// Native balance for the connected address (live-updating).
    pub native_balance: Signal<Option<NativeBalance>>,
    /// Sink for analytics events, fire-and-forget.
    pub analytics: Arc<dyn AnalyticsSink>,
    /// Disconnect action; the provider tears the session down.
    pub on_logout: EventHandler<()>,
}
