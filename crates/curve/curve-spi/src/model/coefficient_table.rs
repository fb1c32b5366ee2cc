//! Build-once mapping from metric name to fitted coefficients

use std::collections::HashMap;

use serde::ser::{Serialize, Serializer};

use super::FitResult;

/// Normalize a metric name into its table key
pub fn metric_key(name: &str) -> String {
    name.to_lowercase()
}

/// Fitted coefficients keyed by lower-cased metric name
///
/// Entries keep the order in which they were inserted. There is no way to
/// remove an entry; a table is filled once and read afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoefficientTable {
    entries: Vec<(String, FitResult)>,
    index: HashMap<String, usize>,
}

impl CoefficientTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert coefficients for `name`
    ///
    /// The name is normalized first. Inserting an existing key replaces its
    /// coefficients in place.
    pub fn insert(&mut self, name: &str, fit: FitResult) {
        let key = metric_key(name);
        match self.index.get(&key) {
            Some(&pos) => self.entries[pos].1 = fit,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, fit));
            }
        }
    }

    /// Look up coefficients by metric name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&FitResult> {
        self.index
            .get(&metric_key(name))
            .map(|&pos| &self.entries[pos].1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(&metric_key(name))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FitResult)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl Serialize for CoefficientTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl FromIterator<(String, FitResult)> for CoefficientTable {
    fn from_iter<I: IntoIterator<Item = (String, FitResult)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (name, fit) in iter {
            table.insert(&name, fit);
        }
        table
    }
}
