//! Classified output of one reconciliation run.

use crate::transaction::Transaction;

/// A left and a right transaction judged to be the same event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionPair {
    pub left: Transaction,
    pub right: Transaction,
}

impl TransactionPair {
    pub fn new(left: Transaction, right: Transaction) -> Self {
        TransactionPair { left, right }
    }
}

/// Per-category counts of a [`ReconciliationResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub exact_matches: usize,
    pub weak_matches: usize,
    pub left_breaks: usize,
    pub right_breaks: usize,
}

/// Exact matches, weak matches and breaks for each side.
///
/// Every sequence is in emission order. Only the reconciler builds one;
/// callers get read-only access.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReconciliationResult {
    exact_matches: Vec<TransactionPair>,
    weak_matches: Vec<TransactionPair>,
    left_breaks: Vec<Transaction>,
    right_breaks: Vec<Transaction>,
}

impl ReconciliationResult {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push_exact(&mut self, left: Transaction, right: Transaction) {
        self.exact_matches.push(TransactionPair::new(left, right));
    }

    pub(crate) fn push_weak(&mut self, left: Transaction, right: Transaction) {
        self.weak_matches.push(TransactionPair::new(left, right));
    }

    pub(crate) fn push_left_break(&mut self, tx: Transaction) {
        self.left_breaks.push(tx);
    }

    pub(crate) fn push_right_break(&mut self, tx: Transaction) {
        self.right_breaks.push(tx);
    }

    pub fn exact_matches(&self) -> &[TransactionPair] {
        &self.exact_matches
    }

    pub fn weak_matches(&self) -> &[TransactionPair] {
        &self.weak_matches
    }

    /// Left transactions with no counterpart on the right.
    pub fn left_breaks(&self) -> &[Transaction] {
        &self.left_breaks
    }

    /// Right transactions with no counterpart on the left.
    pub fn right_breaks(&self) -> &[Transaction] {
        &self.right_breaks
    }

    pub fn summary(&self) -> Summary {
        Summary {
            exact_matches: self.exact_matches.len(),
            weak_matches: self.weak_matches.len(),
            left_breaks: self.left_breaks.len(),
            right_breaks: self.right_breaks.len(),
        }
    }

    /// Number of input transactions accounted for, across both sides.
    pub fn total_transactions(&self) -> usize {
        2 * (self.exact_matches.len() + self.weak_matches.len())
            + self.left_breaks.len()
            + self.right_breaks.len()
    }

    /// Returns `true` if nothing broke on either side.
    pub fn is_fully_matched(&self) -> bool {
        self.left_breaks.is_empty() && self.right_breaks.is_empty()
    }
}
