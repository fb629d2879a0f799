//! Dioxus components for the wallet status badge.

pub mod account_popover;
pub mod account_status;
pub mod address_icon;

pub use account_popover::AccountPopover;
pub use account_status::AccountStatusView;
pub use address_icon::AddressIcon;
