//! Currency amounts.
//!
//! Amounts are carried as integer minor units (cents) so that totals and
//! split reconciliation compare exactly.

use std::num::NonZeroUsize;

use rusty_money::{Money, iso};

/// Format a minor-unit USD amount for display, e.g. `2000` as `$20.00`.
#[must_use]
pub fn format_minor(amount: u64) -> String {
    match i64::try_from(amount) {
        Ok(minor) => Money::from_minor(minor, iso::USD).to_string(),
        Err(_overflow) => format!("{amount} minor units"),
    }
}

/// Split `total` into `parts` amounts that differ by at most the remainder,
/// which the last part absorbs, so the parts always sum to `total`.
#[must_use]
pub fn split_evenly(total: u64, parts: NonZeroUsize) -> Vec<u64> {
    let count = u64::try_from(parts.get()).unwrap_or(u64::MAX);
    let share = total / count;
    let remainder = total - share * (count - 1);

    let mut amounts = vec![share; parts.get() - 1];
    amounts.push(remainder);

    amounts
}
