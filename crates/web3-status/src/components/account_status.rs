//! Wallet-connection status badge.
//!
//! Shows the shortened address, native balance, and avatar for the
//! connected account, with a popover for the profile email, disconnect,
//! and the embedded wallet frame. Renders nothing while disconnected.

use dioxus::prelude::*;

use super::account_popover::AccountPopover;
use super::address_icon::AddressIcon;
use crate::context::WalletContext;
use crate::identity::shorten_address;
use crate::state::{IS_TOKEN_HOLDER, format_balance, holder_status_update, is_token_holder};

/// Status badge for the connected wallet account.
#[component]
pub fn AccountStatusView() -> Element {
    let ctx = use_context::<WalletContext>();
    let account = ctx.account;
    let token_balance = ctx.token_balance;
    let native_balance = ctx.native_balance;
    let analytics = ctx.analytics.clone();
    let on_logout = ctx.on_logout;

    let mut popover_open = use_signal(|| false);

    let holder = use_memo(move || is_token_holder(token_balance.read().as_ref()));
    let formatted_balance = use_memo(move || format_balance(native_balance.read().as_ref()));

    // Publish the holder flag and record the analytics event whenever
    // (holder, address) changes. Runs after render commit, once the
    // memoized values have stabilized. No dedup beyond the change trigger.
    use_effect(move || {
        let is_holder = holder();
        let address = account.read().address.clone();
        if let Some(update) = holder_status_update(is_holder, address.as_deref()) {
            if let Some(event) = update.event {
                analytics.record(event);
            }
            *IS_TOKEN_HOLDER.write() = update.publish;
        }
    });

    let snapshot = account.read().clone();
    let Some(ref address) = snapshot.address else {
        return rsx! {};
    };

    let is_holder = holder();
    let short = shorten_address(&address);
    let trigger_class = if is_holder {
        "account-status-trigger holder"
    } else {
        "account-status-trigger"
    };

    rsx! {
        div { class: "account-status",
            div {
                class: "{trigger_class}",
                onclick: move |_| {
                    let open = *popover_open.read();
                    popover_open.set(!open);
                },

                div { class: "account-status-lines",
                    p { class: "account-status-address", "{short}" }
                    if let Some(balance) = formatted_balance() {
                        p { class: "account-status-balance", "{balance}" }
                    }
                }
                AddressIcon {
                    address: address.clone(),
                    is_token_holder: is_holder,
                    diameter: 28,
                }
            }

            AccountPopover {
                is_open: popover_open,
                show_embedded_wallet: snapshot.is_embedded_auth(),
                on_logout: move |_| on_logout.call(()),
            }
        }
    }
}
