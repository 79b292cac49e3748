use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Assignment of run hours to flexible appliances.
///
/// Hours are kept sorted ascending. Only flexible appliances appear as
/// keys; an appliance absent from the map is unscheduled.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Schedule {
    entries: BTreeMap<String, Vec<u8>>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, mut hours: Vec<u8>) {
        hours.sort_unstable();
        self.entries.insert(name.into(), hours);
    }

    /// Run hours for the named appliance, empty if unscheduled.
    pub fn hours_for(&self, name: &str) -> &[u8] {
        self.entries.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Number of appliances active at the given hour.
    pub fn active_count_at(&self, hour: u8) -> usize {
        self.entries
            .values()
            .filter(|hours| hours.contains(&hour))
            .count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_sorts_hours() {
        let mut schedule = Schedule::new();
        schedule.insert("washer", vec![9, 6, 7]);
        assert_eq!(schedule.hours_for("washer"), &[6, 7, 9]);
    }

    #[test]
    fn unknown_appliance_has_no_hours() {
        let schedule = Schedule::new();
        assert!(schedule.hours_for("dryer").is_empty());
        assert!(!schedule.contains("dryer"));
    }

    #[test]
    fn active_count_counts_overlap() {
        let mut schedule = Schedule::new();
        schedule.insert("a", vec![3, 4]);
        schedule.insert("b", vec![4, 5]);
        assert_eq!(schedule.active_count_at(3), 1);
        assert_eq!(schedule.active_count_at(4), 2);
        assert_eq!(schedule.active_count_at(6), 0);
    }
}
