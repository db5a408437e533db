//! Deterministic ordering of a completed frequency table
//!
//! The table itself carries no iteration-order guarantee, so equal-frequency
//! ties would be nondeterministic across runs without this stage. Entries are
//! sorted by count descending, then token ascending by code point (UTF-8 byte
//! order, which coincides with code-point order). Locale-aware collation is
//! deliberately out of scope.

use crate::processor::FrequencyTable;

/// Immutable, restartable sequence of `(token, count)` pairs in the canonical
/// output order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedResult {
    entries: Vec<(String, u64)>,
}

impl OrderedResult {
    /// Project a completed frequency table into the canonical order. Consumes
    /// the table; no further mutation is possible once ordering begins.
    pub fn from_table(table: FrequencyTable) -> Self {
        let mut entries: Vec<(String, u64)> = table.into_counts().into_iter().collect();
        entries.sort_unstable_by(|(token_a, count_a), (token_b, count_b)| {
            count_b.cmp(count_a).then_with(|| token_a.cmp(token_b))
        });
        Self { entries }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (String, u64)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a OrderedResult {
    type Item = &'a (String, u64);
    type IntoIter = std::slice::Iter<'a, (String, u64)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for OrderedResult {
    type Item = (String, u64);
    type IntoIter = std::vec::IntoIter<(String, u64)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
