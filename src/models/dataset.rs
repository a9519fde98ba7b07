use std::slice::Iter;

use crate::models::Transaction;
use crate::types::Zone;

/// Ordered, immutable collection of transactions.
///
/// Loaded once at startup; every filter produces a new `Dataset` rather than
/// editing this one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    rows: Vec<Transaction>
}

impl Dataset {
    pub fn new(rows: Vec<Transaction>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Transaction] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Transaction> {
        self.rows.iter()
    }

    /// Distinct locations in the order they first appear.
    pub fn zones(&self) -> Vec<Zone> {
        let mut zones: Vec<Zone> = Vec::new();

        for transaction in &self.rows {
            if !zones.contains(&transaction.location) {
                zones.push(transaction.location.clone());
            }
        }

        zones
    }
}

impl FromIterator<Transaction> for Dataset {
    fn from_iter<I: IntoIterator<Item = Transaction>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Transaction;
    type IntoIter = Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
