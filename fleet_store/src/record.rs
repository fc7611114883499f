// Copyright 2026 the Donut Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rows written by the application.

/// A vehicle to register.
///
/// The four ids reference rows of [`BRAND`](crate::schema::BRAND),
/// [`MODEL`](crate::schema::MODEL), [`STATUS`](crate::schema::STATUS) and
/// [`VEHICLE_TYPE`](crate::schema::VEHICLE_TYPE).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VehicleRecord {
    /// Gearbox, e.g. "manual".
    pub gearbox: String,
    /// Fuel, e.g. "diesel".
    pub fuel: String,
    /// License plate; unique per store.
    pub plate: String,
    /// Row id in the brand table.
    pub brand_id: i64,
    /// Row id in the model table.
    pub model_id: i64,
    /// Row id in the status table.
    pub status_id: i64,
    /// Row id in the vehicle type table.
    pub type_id: i64,
}

/// Base data shared by every vehicle of one model.
#[derive(Clone, Debug, PartialEq, Eq)]
#[expect(missing_docs, reason = "one field per column of the model data table")]
pub struct ModelData {
    pub model: String,
    pub brand: String,
    pub vehicle_type: String,
    pub gearbox: String,
    pub fuel: String,
    pub seats: u32,
    pub power_kw: u32,
}

impl ModelData {
    pub(crate) fn into_values(self) -> Vec<String> {
        vec![
            self.model,
            self.brand,
            self.vehicle_type,
            self.gearbox,
            self.fuel,
            self.seats.to_string(),
            self.power_kw.to_string(),
        ]
    }
}
