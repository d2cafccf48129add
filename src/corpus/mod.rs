// src/corpus/mod.rs

/// Read-only, ordered access to the records of a run.
///
/// The live dataset client produces one of these; tests substitute a
/// fixture collection without touching the network.
pub trait TextCollection {
    fn len(&self) -> usize;

    /// Returns the record at `index` (0-based), or `None` past the end.
    fn get(&self, index: usize) -> Option<&str>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The in-memory collection materialized from the dataset server, in
/// fetch order (train rows ahead of test rows when both are requested).
#[derive(Debug, Default)]
pub struct NewsgroupCollection {
    records: Vec<String>,
}

impl NewsgroupCollection {
    pub fn new(records: Vec<String>) -> Self {
        Self { records }
    }
}

impl TextCollection for NewsgroupCollection {
    fn len(&self) -> usize {
        self.records.len()
    }

    fn get(&self, index: usize) -> Option<&str> {
        self.records.get(index).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexes_in_insertion_order() {
        let collection = NewsgroupCollection::new(vec!["a".into(), "b".into()]);
        assert_eq!(collection.len(), 2);
        assert!(!collection.is_empty());
        assert_eq!(collection.get(0), Some("a"));
        assert_eq!(collection.get(1), Some("b"));
        assert_eq!(collection.get(2), None);
    }

    #[test]
    fn empty_collection() {
        let collection = NewsgroupCollection::default();
        assert!(collection.is_empty());
        assert_eq!(collection.get(0), None);
    }
}
