// Copyright 2026 the Donut Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A minimal in-memory table of string columns keyed by a generated id.

#[derive(Clone, Debug)]
pub(crate) struct Row {
    pub(crate) id: i64,
    pub(crate) values: Vec<String>,
}

#[derive(Clone, Debug)]
pub(crate) struct Table {
    columns: &'static [&'static str],
    rows: Vec<Row>,
    next_id: i64,
}

impl Table {
    pub(crate) fn new(columns: &'static [&'static str]) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            next_id: 1,
        }
    }

    /// Appends a row; missing trailing values are stored empty.
    pub(crate) fn insert(&mut self, mut values: Vec<String>) -> i64 {
        values.resize(self.columns.len(), String::new());
        let id = self.next_id;
        self.next_id += 1;
        self.rows.push(Row { id, values });
        id
    }

    pub(crate) fn column(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| *c == name)
    }

    pub(crate) fn contains_id(&self, id: i64) -> bool {
        self.rows.iter().any(|r| r.id == id)
    }

    pub(crate) fn value(&self, id: i64, column: usize) -> Option<&str> {
        self.rows
            .iter()
            .find(|r| r.id == id)
            .and_then(|r| r.values.get(column))
            .map(String::as_str)
    }

    /// Rows whose `column` equals `value`, in insertion order.
    pub(crate) fn select<'a>(
        &'a self,
        column: &str,
        value: &'a str,
    ) -> impl Iterator<Item = &'a Row> + 'a {
        let index = self.column(column);
        self.rows
            .iter()
            .filter(move |r| index.is_some_and(|i| r.values[i] == value))
    }

    /// Sorted, deduplicated values of `column`; `None` if the column does not exist.
    pub(crate) fn distinct(&self, column: &str) -> Option<Vec<String>> {
        let index = self.column(column)?;
        let mut values: Vec<String> = self.rows.iter().map(|r| r.values[index].clone()).collect();
        values.sort();
        values.dedup();
        Some(values)
    }
}
