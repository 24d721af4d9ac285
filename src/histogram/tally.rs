// src/histogram/tally.rs

use crate::core::{CanonicalKey, RawOutcome};
use serde::de::{Error as _, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Occurrence counts per canonical key, built from one pass over the outcomes.
///
/// Keys remember the order in which they were first seen so that structured
/// exports list results in arrival order. Display ordering (by count) is a
/// separate concern handled by [`Tally::sorted`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    /// Keys in first-seen order.
    order: Vec<CanonicalKey>,
    /// Occurrences per key.
    counts: HashMap<CanonicalKey, usize>,
    /// Sum of all counts.
    total: usize,
}

impl Tally {
    /// Creates an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Canonicalizes and counts every outcome.
    pub fn from_outcomes(outcomes: &[RawOutcome]) -> Self {
        let mut tally = Self::new();
        for outcome in outcomes {
            tally.record(outcome.canonical_key());
        }
        tally
    }

    /// Counts one more occurrence of `key`.
    pub fn record(&mut self, key: CanonicalKey) {
        self.record_many(key, 1);
    }

    /// Counts `occurrences` more occurrences of `key`.
    pub fn record_many(&mut self, key: CanonicalKey, occurrences: usize) {
        match self.counts.get_mut(&key) {
            Some(count) => *count += occurrences,
            None => {
                self.order.push(key.clone());
                self.counts.insert(key, occurrences);
            }
        }
        self.total += occurrences;
    }

    /// Occurrences of `key`; zero if it was never seen.
    pub fn count(&self, key: &str) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Share of all outcomes that produced `key`, in percent.
    ///
    /// An empty tally yields `0.0` for every key.
    pub fn percentage(&self, key: &str) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        // Divide first, then scale: the one-decimal display depends on this order.
        self.count(key) as f64 / self.total as f64 * 100.0
    }

    /// Total number of outcomes counted.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct keys.
    pub fn distinct(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if nothing has been counted.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates `(key, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.order.iter().map(move |key| (key.as_str(), self.count(key)))
    }

    /// `(key, count)` pairs by descending count, ties broken by ascending key.
    pub fn sorted(&self) -> Vec<(&str, usize)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|(key_a, count_a), (key_b, count_b)| {
            count_b.cmp(count_a).then_with(|| key_a.cmp(key_b))
        });
        entries
    }
}

impl Serialize for Tally {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.order.len()))?;
        for (key, count) in self.iter() {
            map.serialize_entry(key, &count)?;
        }
        map.end()
    }
}

struct TallyVisitor;

impl<'de> Visitor<'de> for TallyVisitor {
    type Value = Tally;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a map of result keys to occurrence counts")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Tally, A::Error> {
        let mut tally = Tally::new();
        while let Some((key, count)) = access.next_entry::<CanonicalKey, usize>()? {
            // Every per-key count is bounded by the total, so checking the total suffices.
            if tally.total.checked_add(count).is_none() {
                return Err(A::Error::custom(format!(
                    "occurrence count for '{}' overflows the tally total",
                    key
                )));
            }
            tally.record_many(key, count);
        }
        Ok(tally)
    }
}

impl<'de> Deserialize<'de> for Tally {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(TallyVisitor)
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Tally ({} outcomes):", self.total)?;
        if self.is_empty() {
            writeln!(f, "  No outcomes recorded.")?;
        } else {
            for (key, count) in self.sorted() {
                writeln!(f, "  {}: {}", key, count)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_and_first_seen_order() {
        let outcomes: Vec<RawOutcome> = [true, false, true, true, true].into_iter().map(Into::into).collect();
        let tally = Tally::from_outcomes(&outcomes);

        assert_eq!(tally.total(), 5);
        assert_eq!(tally.distinct(), 2);
        assert_eq!(tally.count("1"), 4);
        assert_eq!(tally.count("0"), 1);
        assert_eq!(tally.count("11"), 0);
        assert_eq!(tally.iter().collect::<Vec<_>>(), vec![("1", 4), ("0", 1)]);
    }

    #[test]
    fn sorted_breaks_ties_by_key() {
        let mut tally = Tally::new();
        for key in ["11", "10", "01", "10"] {
            tally.record(key.to_string());
        }
        assert_eq!(tally.sorted(), vec![("10", 2), ("01", 1), ("11", 1)]);
    }

    #[test]
    fn empty_tally_has_zero_percentages() {
        let tally = Tally::from_outcomes(&[]);
        assert!(tally.is_empty());
        assert_eq!(tally.total(), 0);
        assert_eq!(tally.percentage("1"), 0.0);
    }

    #[test]
    fn serializes_in_first_seen_order() -> Result<(), serde_json::Error> {
        let mut tally = Tally::new();
        tally.record("1".to_string());
        tally.record("0".to_string());
        tally.record("1".to_string());

        assert_eq!(serde_json::to_string(&tally)?, r#"{"1":2,"0":1}"#);

        let back: Tally = serde_json::from_str(r#"{"1":2,"0":1}"#)?;
        assert_eq!(back, tally);
        Ok(())
    }

    #[test]
    fn deserializing_overflowing_counts_is_an_error() {
        let text = format!(r#"{{"a":{},"b":1}}"#, usize::MAX);
        let result: Result<Tally, serde_json::Error> = serde_json::from_str(&text);
        assert!(result.is_err());

        let text = format!(r#"{{"a":{}}}"#, usize::MAX);
        let tally: Tally = serde_json::from_str(&text).expect("a single maximal count fits");
        assert_eq!(tally.total(), usize::MAX);
    }

    #[test]
    fn percentage_divides_before_scaling() {
        let mut tally = Tally::new();
        tally.record_many("1".to_string(), 49);
        tally.record_many("0".to_string(), 31);
        assert_eq!(tally.percentage("1"), 49.0 / 80.0 * 100.0);
        assert_eq!(format!("{:.1}", tally.percentage("1")), "61.3");

        let mut tally = Tally::new();
        tally.record_many("1".to_string(), 23);
        tally.record_many("0".to_string(), 57);
        assert_eq!(format!("{:.1}", tally.percentage("1")), "28.7");
    }
}
