//! Account avatar: holder badge image or procedural address icon.

use dioxus::prelude::*;

use crate::identity::icon_colors;

/// Badge image shown for membership-token holders.
const HOLDER_BADGE_URL: &str =
    "https://raw.githubusercontent.com/projecttwelve/icons/main/token/bab.jpg";

/// Round avatar for an address. Token holders get the badge image;
/// everyone else gets a gradient icon seeded by the address.
#[component]
pub fn AddressIcon(address: String, is_token_holder: bool, diameter: u32) -> Element {
    if is_token_holder {
        return rsx! {
            img {
                class: "address-icon",
                width: "{diameter}",
                height: "{diameter}",
                src: HOLDER_BADGE_URL,
                alt: "holder badge",
            }
        };
    }

    let (from, to, angle) = icon_colors(&address);
    rsx! {
        div {
            class: "address-icon",
            style: "width: {diameter}px; height: {diameter}px; background: linear-gradient({angle}deg, {from}, {to});",
        }
    }
}
