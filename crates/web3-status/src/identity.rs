//! Address display utilities: shortening and procedural icon colors.

/// Color palette for procedurally generated address icons.
const ICON_PALETTE: [&str; 8] = [
    "#01888c", "#fc7500", "#034f5d", "#f73f01", "#fc1960", "#c7144c", "#f3c100", "#1598f2",
];

/// Shorten a wallet address for display: `0x7ae2...f03a`.
pub fn shorten_address(address: &str) -> String {
    if address.len() <= 10 {
        return address.to_string();
    }
    format!("{}...{}", &address[..6], &address[address.len() - 4..])
}

/// Numeric seed derived from the address hex, used to pick icon colors.
/// Non-hex input falls back to a byte fold so the seed stays deterministic.
pub fn address_seed(address: &str) -> u32 {
    let hex_part = address.strip_prefix("0x").unwrap_or(address);
    let take = &hex_part[..hex_part.len().min(8)];
    match hex::decode(take) {
        Ok(bytes) => bytes.iter().fold(0u32, |acc, b| (acc << 8) | u32::from(*b)),
        Err(_) => address
            .bytes()
            .fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(u32::from(b))),
    }
}

/// Pick the two gradient colors and rotation angle for an address icon.
pub fn icon_colors(address: &str) -> (&'static str, &'static str, u32) {
    let seed = address_seed(address);
    let from = ICON_PALETTE[(seed as usize) % ICON_PALETTE.len()];
    let to = ICON_PALETTE[(seed as usize / ICON_PALETTE.len()) % ICON_PALETTE.len()];
    let angle = seed % 360;
    (from, to, angle)
}
