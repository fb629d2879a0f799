//! Wallet-connection status badge for Dioxus desktop apps.
//!
//! Shows the connected account's shortened address, native balance, and
//! avatar (a badge image for membership-token holders, otherwise a
//! procedural icon seeded by the address), with a popover carrying the
//! profile email, a disconnect action, and an embedded wallet frame for
//! embedded-auth sessions. Connection state, balances, and the analytics
//! sink are injected via [`WalletContext`]; the component renders nothing
//! while no account is connected.

pub mod analytics;
pub mod components;
pub mod context;
pub mod identity;
pub mod state;

pub use analytics::{AnalyticsEvent, AnalyticsSink, TracingSink};
pub use components::{AccountPopover, AccountStatusView, AddressIcon};
pub use context::WalletContext;
pub use identity::{address_seed, icon_colors, shorten_address};
pub use state::{
    Account, EMBEDDED_AUTH_CONNECTOR_ID, HolderStatusUpdate, IS_TOKEN_HOLDER, NativeBalance,
    PROFILE_INFO, ProfileInfo, TokenBalance, format_balance, holder_status_update,
    is_token_holder,
};

/// Component CSS (loaded from assets/style.css at compile time).
pub const STYLE_CSS: &str = include_str!("../assets/style.css");
