//! Denomination model
//!
//! A session values its tokens with a price table (`DenominationTable`) and
//! restricts which token colours count towards totals with an ordered
//! `ActiveDenominations` set. Both are passed explicitly into every
//! calculation; the engine never owns them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::error::ValidationError;

/// Mapping from denomination identifier to a positive unit value
///
/// # Example
/// ```
/// use poker_settle_core::DenominationTable;
///
/// let table = DenominationTable::new([("white", 0.25), ("red", 0.5)]).unwrap();
/// assert_eq!(table.value("red"), Some(0.5));
/// assert_eq!(table.value("black"), None);
///
/// assert!(DenominationTable::new([("blue", 0.0)]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "HashMap<String, f64>", into = "HashMap<String, f64>")]
pub struct DenominationTable {
    values: HashMap<String, f64>,
}

impl DenominationTable {
    /// Build a table, rejecting any value that is not a finite positive number
    pub fn new<I, K>(entries: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        let mut values = HashMap::new();
        for (denomination, value) in entries {
            let denomination = denomination.into();
            if !value.is_finite() || value <= 0.0 {
                return Err(ValidationError::NonPositiveDenomination { denomination, value });
            }
            values.insert(denomination, value);
        }
        Ok(Self { values })
    }

    /// Unit value of a denomination, if the table knows it
    pub fn value(&self, denomination: &str) -> Option<f64> {
        self.values.get(denomination).copied()
    }

    pub fn contains(&self, denomination: &str) -> bool {
        self.values.contains_key(denomination)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Smallest unit value among the active denominations known to this table
    ///
    /// Returns `None` when no active denomination has a table entry.
    pub fn smallest_active_value(&self, active: &ActiveDenominations) -> Option<f64> {
        active
            .iter()
            .filter_map(|d| self.value(d))
            .fold(None, |min, v| match min {
                Some(m) if m <= v => Some(m),
                _ => Some(v),
            })
    }
}

impl TryFrom<HashMap<String, f64>> for DenominationTable {
    type Error = ValidationError;

    fn try_from(values: HashMap<String, f64>) -> Result<Self, Self::Error> {
        // Sorted so the reported offender does not depend on hash order
        let mut entries: Vec<(String, f64)> = values.into_iter().collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        Self::new(entries)
    }
}

impl From<DenominationTable> for HashMap<String, f64> {
    fn from(table: DenominationTable) -> Self {
        table.values
    }
}

/// Ordered set of denomination identifiers that count towards token totals
///
/// Duplicates are dropped (first occurrence wins). An empty set is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct ActiveDenominations {
    ids: Vec<String>,
}

impl ActiveDenominations {
    pub fn new<I, K>(ids: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let mut ordered: Vec<String> = Vec::new();
        for id in ids {
            let id = id.into();
            if !ordered.contains(&id) {
                ordered.push(id);
            }
        }

        if ordered.is_empty() {
            return Err(ValidationError::NoActiveDenominations);
        }

        Ok(Self { ids: ordered })
    }

    pub fn contains(&self, denomination: &str) -> bool {
        self.ids.iter().any(|id| id == denomination)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Always false for a constructed set; provided for API symmetry
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl TryFrom<Vec<String>> for ActiveDenominations {
    type Error = ValidationError;

    fn try_from(ids: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(ids)
    }
}

impl From<ActiveDenominations> for Vec<String> {
    fn from(active: ActiveDenominations) -> Self {
        active.ids
    }
}
