//! Account popover: profile email, disconnect, optional embedded wallet.
//!
//! Follows the usual overlay pattern: backdrop click closes, stop
//! propagation on the panel itself.

use dioxus::prelude::*;

use crate::state::PROFILE_INFO;

/// URL of the embedded-auth wallet frame.
const EMBEDDED_WALLET_URL: &str = "https://wallet.particle.network/";

/// Popover attached to the status trigger.
#[component]
pub fn AccountPopover(
    mut is_open: Signal<bool>,
    /// True only for embedded-auth sessions; gates the wallet frame.
    show_embedded_wallet: bool,
    on_logout: EventHandler<()>,
) -> Element {
    if !is_open() {
        return rsx! {};
    }

    let email = PROFILE_INFO.read().email.clone();

    rsx! {
        div {
            class: "account-popover-backdrop",
            onclick: move |_| is_open.set(false),

            div {
                class: "account-popover",
                onclick: move |e| e.stop_propagation(),

                div { class: "account-popover-panel",
                    p { class: "account-popover-email", "{email}" }
                    div {
                        class: "account-popover-disconnect",
                        onclick: move |_| {
                            is_open.set(false);
                            on_logout.call(());
                        },
                        "Disconnect"
                    }
                }

                if show_embedded_wallet {
                    div { class: "account-popover-wallet",
                        iframe {
                            class: "embedded-wallet-frame",
                            src: EMBEDDED_WALLET_URL,
                            allow: "camera",
                        }
                    }
                }
            }
        }
    }
}
