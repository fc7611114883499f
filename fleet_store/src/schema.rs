// Copyright 2026 the Donut Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Table and column names understood by the stores.

/// Vehicle brands: `name`.
pub const BRAND: &str = "brand";
/// Vehicle models: `name`, `brand`.
pub const MODEL: &str = "model";
/// Vehicle states such as "available" or "in service": `name`.
pub const STATUS: &str = "status";
/// Vehicle categories: `name`.
pub const VEHICLE_TYPE: &str = "vehicle_type";
/// Per-model base data, see [`MODEL_DATA_COLUMNS`].
pub const MODEL_DATA: &str = "model_data";
/// Registered vehicles; only `plate` is searchable.
pub const VEHICLE: &str = "vehicle";

pub(crate) const NAME_COLUMNS: &[&str] = &["name"];
pub(crate) const MODEL_COLUMNS: &[&str] = &["name", "brand"];

/// Columns of [`MODEL_DATA`], in row order after the id.
pub const MODEL_DATA_COLUMNS: &[&str] = &[
    "model",
    "brand",
    "vehicle_type",
    "gearbox",
    "fuel",
    "seats",
    "power_kw",
];
