//! Accumulated feedback for one game session

use super::evaluation::Evaluation;

/// Ordered, append-only list of evaluations with single-step undo
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    records: Vec<Evaluation>,
}

impl History {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a record
    pub fn push(&mut self, record: Evaluation) {
        self.records.push(record);
    }

    /// Remove and return the most recent record
    pub fn undo(&mut self) -> Option<Evaluation> {
        self.records.pop()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    #[must_use]
    pub fn records(&self) -> &[Evaluation] {
        &self.records
    }

    #[must_use]
    pub fn last(&self) -> Option<&Evaluation> {
        self.records.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Evaluation> {
        self.records.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<Evaluation>> for History {
    fn from(records: Vec<Evaluation>) -> Self {
        Self { records }
    }
}

impl FromIterator<Evaluation> for History {
    fn from_iter<I: IntoIterator<Item = Evaluation>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Evaluation;
    type IntoIter = std::slice::Iter<'a, Evaluation>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
