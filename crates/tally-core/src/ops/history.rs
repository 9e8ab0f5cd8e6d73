use crate::model::Calculation;

/// In-memory, append-only log of Calculations
///
/// Insertion order is preserved and nothing is deduplicated. Not thread-safe
/// (no Arc/RwLock); the owner (usually a `Calculator`) is expected to be
/// driven from a single thread. Construct one per process, or one per test.
#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
    records: Vec<Calculation>,
}

impl HistoryStore {
    /// Create a new empty HistoryStore
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a Calculation at the end of the history
    pub fn append(&mut self, calculation: Calculation) {
        self.records.push(calculation);
    }

    /// All recorded Calculations in insertion order
    pub fn all(&self) -> &[Calculation] {
        &self.records
    }

    /// Remove every record
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Most recently appended Calculation, or `None` for an empty history
    pub fn latest(&self) -> Option<&Calculation> {
        self.records.last()
    }

    /// All records whose operation's stable name equals `name`
    ///
    /// Order follows insertion order. An unmatched name (including one that
    /// is not an operation at all) yields an empty Vec.
    pub fn find_by_operation_name(&self, name: &str) -> Vec<&Calculation> {
        self.records
            .iter()
            .filter(|calc| calc.operation.name() == name)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
