//! Shared app state using Dioxus signals, plus the derived display pipeline.

use dioxus::prelude::*;

pub mod account;
pub mod display;

pub use account::{Account, EMBEDDED_AUTH_CONNECTOR_ID, NativeBalance, ProfileInfo, TokenBalance};
pub use display::{HolderStatusUpdate, format_balance, holder_status_update, is_token_holder};

/// Whether the connected account holds the membership token.
/// Written by `AccountStatusView`, read by any interested component.
pub static IS_TOKEN_HOLDER: GlobalSignal<bool> = GlobalSignal::new(|| false);

/// Profile info for the signed-in user. Owned by the host app; this
/// component only reads the email for the popover.
pub static PROFILE_INFO: GlobalSignal<ProfileInfo> = GlobalSignal::new(ProfileInfo::default);
