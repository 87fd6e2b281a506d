//! Matching predicates between two transactions.
//!
//! All functions are pure. Callers only compare transactions from the same
//! account; each predicate still checks `account_id` and returns `false`
//! across accounts.

use crate::amount::Amount;
use crate::transaction::Transaction;
use chrono::Weekday;

/// Maximum day-of-year distance for a weak match.
pub const DATE_TOLERANCE_DAYS: i64 = 1;

/// Day-of-year distance between a Friday and the following Monday.
pub const WEEKEND_GAP_DAYS: i64 = 3;

/// Maximum amount difference for a weak match, in minor units.
pub const AMOUNT_TOLERANCE_MINOR_UNITS: i64 = 1;

fn amount_tolerance() -> Amount {
    Amount::from_minor_units(AMOUNT_TOLERANCE_MINOR_UNITS)
}

/// Identical account, calendar date and amount. No tolerance.
pub fn exactly_equal(a: &Transaction, b: &Transaction) -> bool {
    a.account_id() == b.account_id() && a.date() == b.date() && a.amount() == b.amount()
}

/// Same account with date and amount both inside tolerance.
///
/// A 3-day gap counts as adjacent only when the earlier transaction is a
/// Friday and the later one a Monday.
pub fn weakly_equal(a: &Transaction, b: &Transaction) -> bool {
    a.account_id() == b.account_id()
        && dates_within_tolerance(a, b)
        && amounts_within_tolerance(a, b)
}

/// Whether `a`'s tolerance envelope reaches `b`.
///
/// Directional: `a.day_of_year + 1 >= b.day_of_year` and
/// `a.amount + 0.01 >= b.amount`. There is no weekend adjustment here.
/// An envelope that overflows the decimal range covers every amount.
pub fn within_upper_bound(a: &Transaction, b: &Transaction) -> bool {
    a.account_id() == b.account_id()
        && i64::from(a.day_of_year()) + DATE_TOLERANCE_DAYS >= i64::from(b.day_of_year())
        && a.amount()
            .checked_add(amount_tolerance())
            .map_or(true, |upper| upper >= b.amount())
}

fn dates_within_tolerance(a: &Transaction, b: &Transaction) -> bool {
    let diff = i64::from(a.day_of_year()) - i64::from(b.day_of_year());

    if diff.abs() == WEEKEND_GAP_DAYS {
        let (earlier, later) = if diff < 0 { (a, b) } else { (b, a) };
        return earlier.weekday() == Weekday::Fri && later.weekday() == Weekday::Mon;
    }

    diff.abs() <= DATE_TOLERANCE_DAYS
}

// A difference too large to represent is never within tolerance.
fn amounts_within_tolerance(a: &Transaction, b: &Transaction) -> bool {
    a.amount()
        .abs_diff(b.amount())
        .map_or(false, |diff| diff.round_to_match_scale() <= amount_tolerance())
}
