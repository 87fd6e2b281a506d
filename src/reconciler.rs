//! Single-pass merge of two ordered ledgers.
//!
//! Both inputs must be sorted by account id, and by date within an account.
//! The merge walks each side once with its own cursor and never looks ahead;
//! the comparator predicates decide which cursor moves.

use crate::comparator::{exactly_equal, weakly_equal, within_upper_bound};
use crate::error::{ReconError, Result};
use crate::result::ReconciliationResult;
use crate::transaction::{Side, Transaction};
use log::{debug, info, warn};
use std::cmp::Ordering;

/// The reconciliation engine.
///
/// Stateless; one instance can run any number of merges.
///
/// # Ordering precondition
///
/// [`Reconciler::reconcile`] does not verify input order. Misordered input
/// yields a wrong but complete classification. Use
/// [`Reconciler::reconcile_checked`] to validate first.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reconciler {
    strict: bool,
}

impl Reconciler {
    /// Creates a reconciler that only warns on unordered input.
    pub fn new() -> Self {
        Reconciler { strict: false }
    }

    /// Makes [`Reconciler::reconcile_checked`] fail on unordered input.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Validates ordering on both sides, then merges.
    ///
    /// In strict mode the first violation is returned as
    /// [`ReconError::UnorderedInput`]. Otherwise it is logged and the merge
    /// runs anyway.
    pub fn reconcile_checked(
        &self,
        left: &[Transaction],
        right: &[Transaction],
    ) -> Result<ReconciliationResult> {
        for (side, transactions) in [(Side::Left, left), (Side::Right, right)] {
            if let Err(e) = check_order(transactions, side) {
                if self.strict {
                    return Err(e);
                }
                warn!("{}; classification may be incorrect", e);
            }
        }

        Ok(self.reconcile(left, right))
    }

    /// Merges `left` and `right` into exact matches, weak matches and breaks.
    ///
    /// Every input transaction lands in exactly one category. Output order
    /// follows the order decisions are made in.
    pub fn reconcile(&self, left: &[Transaction], right: &[Transaction]) -> ReconciliationResult {
        let mut result = ReconciliationResult::new();
        let mut li = 0;
        let mut ri = 0;

        while li < left.len() && ri < right.len() {
            let l = &left[li];
            let r = &right[ri];

            if exactly_equal(l, r) {
                debug!("Exact match {} <-> {}", l.id(), r.id());
                result.push_exact(l.clone(), r.clone());
                li += 1;
                ri += 1;
                continue;
            }

            match l.account_id().cmp(r.account_id()) {
                Ordering::Equal => {
                    if weakly_equal(l, r) {
                        debug!("Weak match {} <-> {}", l.id(), r.id());
                        result.push_weak(l.clone(), r.clone());
                        li += 1;
                        ri += 1;
                    } else if within_upper_bound(l, r) {
                        debug!("Right break {}: passed by left {}", r.id(), l.id());
                        result.push_right_break(r.clone());
                        ri += 1;
                    } else {
                        debug!("Left break {}: right {} is out of reach", l.id(), r.id());
                        result.push_left_break(l.clone());
                        li += 1;
                    }
                }
                Ordering::Less => {
                    debug!(
                        "Left break {}: account {} absent on right",
                        l.id(),
                        l.account_id()
                    );
                    result.push_left_break(l.clone());
                    li += 1;
                }
                Ordering::Greater => {
                    debug!(
                        "Right break {}: account {} absent on left",
                        r.id(),
                        r.account_id()
                    );
                    result.push_right_break(r.clone());
                    ri += 1;
                }
            }
        }

        for tx in &left[li..] {
            debug!("Left break {}: right side exhausted", tx.id());
            result.push_left_break(tx.clone());
        }

        for tx in &right[ri..] {
            debug!("Right break {}: left side exhausted", tx.id());
            result.push_right_break(tx.clone());
        }

        let summary = result.summary();
        info!(
            "Reconciled {} left and {} right transactions: exact={} weak={} left_breaks={} right_breaks={}",
            left.len(),
            right.len(),
            summary.exact_matches,
            summary.weak_matches,
            summary.left_breaks,
            summary.right_breaks
        );

        result
    }
}

/// Verifies that `transactions` are sorted by account id, then by date.
///
/// Returns the first violation; `record` in the error is 1-based.
pub fn check_order(transactions: &[Transaction], side: Side) -> Result<()> {
    for (idx, pair) in transactions.windows(2).enumerate() {
        let (prev, next) = (&pair[0], &pair[1]);

        let message = match prev.account_id().cmp(next.account_id()) {
            Ordering::Greater => format!(
                "account {} follows account {}",
                next.account_id(),
                prev.account_id()
            ),
            Ordering::Equal if next.date() < prev.date() => format!(
                "date {} follows {} in account {}",
                next.date(),
                prev.date(),
                next.account_id()
            ),
            _ => continue,
        };

        return Err(ReconError::UnorderedInput {
            side,
            record: idx + 2,
            message,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amount::Amount;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn tx(id: &str, account: &str, day: u32, amount: &str) -> Transaction {
        let date = NaiveDate::from_ymd_opt(2023, 1, day).unwrap();
        Transaction::new(id, account, date, Amount::from_str(amount).unwrap())
    }

    fn ids(txs: &[Transaction]) -> Vec<&str> {
        txs.iter().map(|t| t.id()).collect()
    }

    #[test]
    fn test_exact_match_advances_both() {
        let left = vec![tx("L1", "A1", 2, "10.00"), tx("L2", "A1", 3, "20.00")];
        let right = vec![tx("R1", "A1", 2, "10.00"), tx("R2", "A1", 3, "20.00")];

        let result = Reconciler::new().reconcile(&left, &right);
        assert_eq!(result.exact_matches().len(), 2);
        assert!(result.is_fully_matched());
    }

    #[test]
    fn test_weak_match() {
        let left = vec![tx("L1", "A1", 2, "10.00")];
        let right = vec![tx("R1", "A1", 3, "10.01")];

        let result = Reconciler::new().reconcile(&left, &right);
        assert_eq!(result.weak_matches().len(), 1);
        assert_eq!(result.weak_matches()[0].left.id(), "L1");
        assert_eq!(result.weak_matches()[0].right.id(), "R1");
    }

    #[test]
    fn test_right_break_when_inside_left_envelope() {
        // R1 is dated before L1; the left envelope already covers it
        let left = vec![tx("L1", "A1", 10, "10.00")];
        let right = vec![tx("R1", "A1", 2, "10.00"), tx("R2", "A1", 10, "10.00")];

        let result = Reconciler::new().reconcile(&left, &right);
        assert_eq!(ids(result.right_breaks()), vec!["R1"]);
        assert_eq!(result.exact_matches().len(), 1);
        assert_eq!(result.exact_matches()[0].right.id(), "R2");
    }

    #[test]
    fn test_left_break_when_right_out_of_reach() {
        let left = vec![tx("L1", "A1", 2, "10.00"), tx("L2", "A1", 20, "10.00")];
        let right = vec![tx("R1", "A1", 20, "10.00")];

        let result = Reconciler::new().reconcile(&left, &right);
        assert_eq!(ids(result.left_breaks()), vec!["L1"]);
        assert_eq!(result.exact_matches()[0].left.id(), "L2");
    }

    #[test]
    fn test_higher_amount_on_right_breaks_left() {
        // same day but right amount exceeds left envelope
        let left = vec![tx("L1", "A1", 4, "10.00")];
        let right = vec![tx("R1", "A1", 4, "50.00")];

        let result = Reconciler::new().reconcile(&left, &right);
        assert_eq!(ids(result.left_breaks()), vec!["L1"]);
        assert_eq!(ids(result.right_breaks()), vec!["R1"]);
    }

    #[test]
    fn test_account_ordering_decides_side() {
        let left = vec![tx("L1", "A1", 1, "5.00"), tx("L2", "C3", 1, "5.00")];
        let right = vec![tx("R1", "B2", 1, "5.00"), tx("R2", "C3", 1, "5.00")];

        let result = Reconciler::new().reconcile(&left, &right);
        assert_eq!(ids(result.left_breaks()), vec!["L1"]);
        assert_eq!(ids(result.right_breaks()), vec!["R1"]);
        assert_eq!(result.exact_matches().len(), 1);
    }

    #[test]
    fn test_drain_both_sides() {
        let left = vec![tx("L1", "A1", 1, "1.00"), tx("L2", "A1", 1, "1.00")];
        let result = Reconciler::new().reconcile(&left, &[]);
        assert_eq!(ids(result.left_breaks()), vec!["L1", "L2"]);

        let right = vec![tx("R1", "A1", 1, "1.00")];
        let result = Reconciler::new().reconcile(&[], &right);
        assert_eq!(ids(result.right_breaks()), vec!["R1"]);
    }

    #[test]
    fn test_check_order_accepts_sorted_input() {
        let txs = vec![
            tx("1", "A1", 1, "1"),
            tx("2", "A1", 1, "1"),
            tx("3", "A1", 5, "1"),
            tx("4", "B1", 2, "1"),
        ];
        assert!(check_order(&txs, Side::Left).is_ok());
        assert!(check_order(&[], Side::Left).is_ok());
    }

    #[test]
    fn test_check_order_reports_account_violation() {
        let txs = vec![tx("1", "B1", 1, "1"), tx("2", "A1", 1, "1")];
        match check_order(&txs, Side::Right).unwrap_err() {
            ReconError::UnorderedInput { side, record, message } => {
                assert_eq!(side, Side::Right);
                assert_eq!(record, 2);
                assert!(message.contains("account A1 follows account B1"));
            }
            other => panic!("Expected UnorderedInput, got {:?}", other),
        }
    }

    #[test]
    fn test_check_order_reports_date_violation() {
        let txs = vec![
            tx("1", "A1", 1, "1"),
            tx("2", "A1", 9, "1"),
            tx("3", "A1", 3, "1"),
        ];
        let err = check_order(&txs, Side::Left).unwrap_err();
        assert!(matches!(err, ReconError::UnorderedInput { record: 3, .. }));
    }

    #[test]
    fn test_reconcile_checked_strict_fails() {
        let left = vec![tx("1", "B1", 1, "1"), tx("2", "A1", 1, "1")];
        let result = Reconciler::new().strict(true).reconcile_checked(&left, &[]);
        assert!(result.is_err());
    }

    #[test]
    fn test_reconcile_checked_lenient_still_merges() {
        let left = vec![tx("1", "B1", 1, "1"), tx("2", "A1", 1, "1")];
        let result = Reconciler::new().reconcile_checked(&left, &[]).unwrap();
        assert_eq!(result.left_breaks().len(), 2);
    }
}
