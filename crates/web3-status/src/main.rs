//! Demo desktop app hosting the wallet status badge.
//!
//! Simulates the external connection and balance providers: connects a
//! sample account shortly after startup and streams native-balance
//! updates into the context signals.

use std::sync::Arc;
use std::time::Duration;

use dioxus::prelude::*;
use web3_status::{
    Account, AccountStatusView, EMBEDDED_AUTH_CONNECTOR_ID, NativeBalance, PROFILE_INFO,
    ProfileInfo, STYLE_CSS, TokenBalance, TracingSink, WalletContext,
};

const DEMO_ADDRESS: &str = "0x7ae2F5B9e386cd1B50A4550696D957cB4900f03a";

fn main() {
    tracing_subscriber::fmt::init();

    LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title("Wallet Status Demo")
                        .with_inner_size(dioxus::desktop::LogicalSize::new(520.0, 720.0)),
                )
                .with_custom_head(format!("<style>{STYLE_CSS}</style>")),
        )
        .launch(App);
}

/// Demo host app wiring simulated providers into the wallet context.
#[component]
fn App() -> Element {
    let mut account = use_signal(Account::default);
    let token_balance = use_signal(|| None::<TokenBalance>);
    let native_balance = use_signal(|| None::<NativeBalance>);

    let ctx = use_context_provider(|| WalletContext {
        account,
        token_balance,
        native_balance,
        analytics: Arc::new(TracingSink),
        on_logout: EventHandler::new(move |_| {
            tracing::info!("disconnecting demo account");
            account.set(Account::default());
        }),
    });

    // Simulated providers: connect after startup, then drip balance updates
    // the way a live RPC subscription would.
    use_effect(move || {
        let mut account = ctx.account;
        let mut token_balance = ctx.token_balance;
        let mut native_balance = ctx.native_balance;
        spawn(async move {
            tokio::time::sleep(Duration::from_millis(500)).await;
            *PROFILE_INFO.write() = ProfileInfo {
                email: "player@example.com".to_string(),
            };
            account.set(Account {
                address: Some(DEMO_ADDRESS.to_string()),
                connector_id: Some(EMBEDDED_AUTH_CONNECTOR_ID.to_string()),
            });
            token_balance.set(Some(TokenBalance(1)));

            let mut value: u128 = 1_500_000_000_000_000_000;
            loop {
                native_balance.set(Some(NativeBalance {
                    value,
                    decimals: 18,
                    symbol: "BNB".to_string(),
                }));
                tokio::time::sleep(Duration::from_secs(5)).await;
                value += 25_000_000_000_000_000;
            }
        });
    });

    rsx! {
        div { class: "demo-root",
            header { class: "demo-header",
                h1 { "P12 Arcade" }
                AccountStatusView {}
            }
            p { class: "demo-hint",
                "The badge connects automatically; click it to open the popover."
            }
        }
    }
}
