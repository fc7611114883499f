// Copyright 2026 the Donut Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The store trait the fleet application talks to.

use crate::error::Result;
use crate::record::VehicleRecord;

/// Persistence boundary of the fleet application.
///
/// Reads degrade instead of failing: an unknown table or column yields an empty list, and a
/// value with no matching row yields `None`.
pub trait InventoryStore {
    /// Sorted distinct values of a model data column, used to fill choice lists.
    fn list_distinct(&self, column: &str) -> Vec<String>;

    /// Id of the first row of `table` whose `column` equals `value`.
    fn lookup_id(&self, table: &str, column: &str, value: &str) -> Option<i64>;

    /// Validates and stores a vehicle, returning its new id.
    fn insert_record(&mut self, record: VehicleRecord) -> Result<i64>;

    /// Sorted brand names.
    fn brands(&self) -> Vec<String>;

    /// Sorted model names of one brand.
    fn models(&self, brand: &str) -> Vec<String>;

    /// The model data row of `model`: its id followed by every column, or empty if unknown.
    fn base_data(&self, model: &str) -> Vec<String>;

    /// Number of vehicles per referenced name, sorted by name.
    ///
    /// `table` is one of the reference tables a vehicle points into.
    fn count_vehicles_by(&self, table: &str) -> Vec<(String, usize)>;
}
