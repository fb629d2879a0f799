//! Derived display state: pure functions over provider snapshots.
//!
//! The component memoizes these and re-derives whenever a provider signal
//! changes. Nothing here touches signals or panics on bad input.

use thiserror::Error;

use super::account::{NativeBalance, TokenBalance};
use crate::analytics::AnalyticsEvent;

/// Failure modes of the balance formatter. Callers only ever see these
/// through the diagnostic log; the view gets `None`.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("decimals value {0} is out of range for display conversion")]
    DecimalsOutOfRange(u32),
    #[error("balance conversion produced a non-finite amount")]
    NonFinite,
}

/// True iff a token balance is present and its string form is not "0".
pub fn is_token_holder(balance: Option<&TokenBalance>) -> bool {
    balance.is_some_and(|b| b.to_string() != "0")
}

/// Render a native balance as `"<amount> <symbol>"` with exactly 4 digits
/// after the decimal point. Absent input or a conversion failure yields
/// `None`; failures are logged, never propagated.
pub fn format_balance(balance: Option<&NativeBalance>) -> Option<String> {
    let balance = balance?;
    match try_format(balance) {
        Ok(formatted) => Some(formatted),
        Err(e) => {
            tracing::warn!("failed to format native balance: {e}");
            None
        }
    }
}

fn try_format(balance: &NativeBalance) -> Result<String, FormatError> {
    let exponent = i32::try_from(balance.decimals)
        .map_err(|_| FormatError::DecimalsOutOfRange(balance.decimals))?;
    let scale = 10f64.powi(exponent);
    if !scale.is_finite() {
        return Err(FormatError::DecimalsOutOfRange(balance.decimals));
    }
    let amount = balance.value as f64 / scale;
    if !amount.is_finite() {
        return Err(FormatError::NonFinite);
    }
    Ok(format!("{amount:.4} {}", balance.symbol))
}

/// What the holder-status effect should do for the current
/// `(is_holder, address)` snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct HolderStatusUpdate {
    /// Flag value to publish into shared state.
    pub publish: bool,
    /// Analytics event to record; present only for holders.
    pub event: Option<AnalyticsEvent>,
}

/// Decide the holder-status side effect. `None` when no account is
/// connected: nothing is published and no event is recorded.
pub fn holder_status_update(is_holder: bool, address: Option<&str>) -> Option<HolderStatusUpdate> {
    let address = address?;
    Some(HolderStatusUpdate {
        publish: is_holder,
        event: is_holder.then(|| AnalyticsEvent::new("BABT", "Show", address)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn native(value: u128, decimals: u32, symbol: &str) -> NativeBalance {
        NativeBalance {
            value,
            decimals,
            symbol: symbol.to_string(),
        }
    }

    #[test]
    fn test_holder_flag_zero_positive_absent() {
        assert!(!is_token_holder(Some(&TokenBalance(0))));
        assert!(is_token_holder(Some(&TokenBalance(1))));
        assert!(is_token_holder(Some(&TokenBalance(u128::MAX))));
        assert!(!is_token_holder(None));
    }

    #[test]
    fn test_format_balance_scenario() {
        let balance = native(1_500_000_000_000_000_000, 18, "BNB");
        assert_eq!(format_balance(Some(&balance)).as_deref(), Some("1.5000 BNB"));
    }

    #[test]
    fn test_format_balance_absent() {
        assert_eq!(format_balance(None), None);
    }

    #[test]
    fn test_format_balance_four_decimal_digits() {
        let cases = [
            native(0, 18, "ETH"),
            native(1, 0, "WEI"),
            native(123_456, 4, "T"),
            native(999_999_999, 9, "GWEI"),
        ];
        for balance in &cases {
            let formatted = format_balance(Some(balance)).unwrap();
            let (amount, symbol) = formatted.rsplit_once(' ').unwrap();
            assert_eq!(symbol, balance.symbol);
            let (_, fraction) = amount.split_once('.').unwrap();
            assert_eq!(fraction.len(), 4, "expected 4 decimals in {formatted:?}");
        }
    }

    #[test]
    fn test_format_balance_rounds() {
        // 0.12346 rounds to 0.1235, not truncated to 0.1234
        let balance = native(12_346, 5, "T");
        assert_eq!(format_balance(Some(&balance)).as_deref(), Some("0.1235 T"));
    }

    #[test]
    fn test_format_balance_malformed_decimals() {
        // 10^400 overflows f64; degraded to None, never a panic
        let balance = native(1, 400, "X");
        assert_eq!(format_balance(Some(&balance)), None);
        let balance = native(1, u32::MAX, "X");
        assert_eq!(format_balance(Some(&balance)), None);
    }

    #[test]
    fn test_holder_update_disconnected() {
        assert_eq!(holder_status_update(true, None), None);
        assert_eq!(holder_status_update(false, None), None);
    }

    #[test]
    fn test_holder_update_holder_emits_event() {
        let update = holder_status_update(true, Some("0xabc")).unwrap();
        assert!(update.publish);
        let event = update.event.unwrap();
        assert_eq!(event.action, "BABT");
        assert_eq!(event.category, "Show");
        assert_eq!(event.label, "0xabc");
    }

    #[test]
    fn test_holder_update_non_holder_publishes_only() {
        let update = holder_status_update(false, Some("0xabc")).unwrap();
        assert!(!update.publish);
        assert_eq!(update.event, None);
    }
}
