//! Function-name → function-index mapping for call-site resolution.

use std::collections::HashMap;

/// Assigns stable indices in the module's callable-function space, in
/// first-registration order.
///
/// The starting index follows the target format's import-section
/// convention (locally-defined functions come after the imports), so it is
/// supplied by the caller rather than assumed here.
#[derive(Debug)]
pub struct FunctionSymbolTable {
    /// name → absolute function index.
    indices: HashMap<String, u32>,
    /// Index handed to the next new registration.
    next_index: u32,
}

impl FunctionSymbolTable {
    /// `base` is the first locally-assignable function index.
    pub fn new(base: u32) -> Self {
        Self {
            indices: HashMap::new(),
            next_index: base,
        }
    }

    /// Register `name`, returning its index.
    ///
    /// Registering the same name again returns the index assigned the
    /// first time; indices are never re-used or re-ordered.
    pub fn register(&mut self, name: &str) -> u32 {
        if let Some(&idx) = self.indices.get(name) {
            return idx;
        }
        let idx = self.next_index;
        self.indices.insert(name.to_string(), idx);
        self.next_index += 1;
        idx
    }

    /// Index of `name`, or `None` if it was never registered.
    pub fn index_of(&self, name: &str) -> Option<u32> {
        self.indices.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_start_at_base_and_increase() {
        let mut table = FunctionSymbolTable::new(3);
        assert_eq!(table.register("min_i"), 3);
        assert_eq!(table.register("max_i"), 4);
        assert_eq!(table.register("compute"), 5);
    }

    #[test]
    fn registration_round_trips() {
        let mut table = FunctionSymbolTable::new(0);
        let idx = table.register("init");
        assert_eq!(table.index_of("init"), Some(idx));
        // Re-registration keeps the first index.
        assert_eq!(table.register("init"), idx);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn distinct_names_get_distinct_ordered_indices() {
        let mut table = FunctionSymbolTable::new(0);
        let names = ["a", "b", "c", "d", "e"];
        let indices: Vec<u32> = names.iter().map(|n| table.register(n)).collect();
        for (i, idx) in indices.iter().enumerate() {
            assert_eq!(*idx, i as u32);
        }
        assert_eq!(table.index_of("nope"), None);
    }
}
