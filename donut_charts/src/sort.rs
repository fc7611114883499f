// Copyright 2026 the Donut Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Entry ordering policies.

use core::cmp::Ordering;

use crate::slice_model::Entry;

/// How entries are ordered around the chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortPolicy {
    /// Smallest value first.
    ByValueAsc,
    /// Largest value first.
    #[default]
    ByValueDesc,
    /// Names in ascending lexicographic order.
    ByNameAsc,
    /// Names in descending lexicographic order.
    ByNameDesc,
    /// Longest name first; equally long names in descending lexicographic order.
    ByNameLengthDesc,
}

impl SortPolicy {
    /// Compares two entries under this policy.
    ///
    /// Value policies only look at the value, so equal values compare as equal.
    pub fn compare(self, a: &Entry, b: &Entry) -> Ordering {
        match self {
            Self::ByValueAsc => by_value(a, b),
            Self::ByValueDesc => by_value(b, a),
            Self::ByNameAsc => by_name(a, b),
            Self::ByNameDesc => by_name(b, a),
            Self::ByNameLengthDesc => by_name_length(b, a),
        }
    }

    /// Sorts `entries` in place.
    ///
    /// The sort is stable: entries that compare equal (equal values under a value policy) keep
    /// their relative input order.
    pub fn sort(self, entries: &mut [Entry]) {
        entries.sort_by(|a, b| self.compare(a, b));
    }
}

fn by_value(a: &Entry, b: &Entry) -> Ordering {
    a.value.total_cmp(&b.value)
}

fn by_name(a: &Entry, b: &Entry) -> Ordering {
    a.name.cmp(&b.name)
}

fn by_name_length(a: &Entry, b: &Entry) -> Ordering {
    a.name
        .chars()
        .count()
        .cmp(&b.name.chars().count())
        .then_with(|| by_name(a, b))
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec::Vec;

    use super::*;

    const ALL: [SortPolicy; 5] = [
        SortPolicy::ByValueAsc,
        SortPolicy::ByValueDesc,
        SortPolicy::ByNameAsc,
        SortPolicy::ByNameDesc,
        SortPolicy::ByNameLengthDesc,
    ];

    fn entries(items: &[(&str, f64)]) -> Vec<Entry> {
        items.iter().map(|(n, v)| Entry::new(*n, *v)).collect()
    }

    fn names(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn value_policies_keep_ties_in_input_order() {
        let mut e = entries(&[("A", 1.0), ("B", 1.0), ("C", 2.0)]);
        SortPolicy::ByValueDesc.sort(&mut e);
        assert_eq!(names(&e), ["C", "A", "B"]);

        let mut e = entries(&[("B", 1.0), ("C", 2.0), ("A", 1.0)]);
        SortPolicy::ByValueAsc.sort(&mut e);
        assert_eq!(names(&e), ["B", "A", "C"]);
    }

    #[test]
    fn name_policies() {
        let items = [("Bob", 1.0), ("Charlie", 2.0), ("Al", 3.0), ("Sven", 4.0)];
        let mut e = entries(&items);
        SortPolicy::ByNameAsc.sort(&mut e);
        assert_eq!(names(&e), ["Al", "Bob", "Charlie", "Sven"]);

        SortPolicy::ByNameDesc.sort(&mut e);
        assert_eq!(names(&e), ["Sven", "Charlie", "Bob", "Al"]);
    }

    #[test]
    fn name_length_breaks_ties_by_name() {
        let mut e = entries(&[("Bob", 1.0), ("Clark", 1.0), ("Malte", 1.0), ("Al", 1.0)]);
        SortPolicy::ByNameLengthDesc.sort(&mut e);
        assert_eq!(names(&e), ["Malte", "Clark", "Bob", "Al"]);
    }

    #[test]
    fn every_policy_is_a_permutation() {
        let items = [
            ("Charlie", 1884.0),
            ("Bob", 1114.0),
            ("Clark", 1214.0),
            ("Sven", 3214.0),
            ("Malte", 314.0),
            ("Zoe", 314.0),
        ];
        let mut expected = names(&entries(&items))
            .into_iter()
            .map(alloc::string::String::from)
            .collect::<Vec<_>>();
        expected.sort();
        for policy in ALL {
            let mut e = entries(&items);
            policy.sort(&mut e);
            let mut got: Vec<_> = e.iter().map(|e| e.name.clone()).collect();
            got.sort();
            assert_eq!(got, expected, "{policy:?} dropped or duplicated entries");
        }
    }
}
