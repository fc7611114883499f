// Copyright 2026 the Donut Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory implementation of [`InventoryStore`].

use hashbrown::HashMap;

use crate::error::{Result, StoreError};
use crate::record::{ModelData, VehicleRecord};
use crate::schema::{
    BRAND, MODEL, MODEL_COLUMNS, MODEL_DATA, MODEL_DATA_COLUMNS, NAME_COLUMNS, STATUS, VEHICLE,
    VEHICLE_TYPE,
};
use crate::store::InventoryStore;
use crate::table::Table;

/// An [`InventoryStore`] kept entirely in memory.
#[derive(Clone, Debug)]
pub struct MemoryStore {
    tables: HashMap<&'static str, Table>,
    vehicles: Vec<(i64, VehicleRecord)>,
    plates: HashMap<String, i64>,
    next_vehicle_id: i64,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Creates a store with empty tables.
    pub fn new() -> Self {
        let tables = [
            (BRAND, Table::new(NAME_COLUMNS)),
            (MODEL, Table::new(MODEL_COLUMNS)),
            (STATUS, Table::new(NAME_COLUMNS)),
            (VEHICLE_TYPE, Table::new(NAME_COLUMNS)),
            (MODEL_DATA, Table::new(MODEL_DATA_COLUMNS)),
        ]
        .into_iter()
        .collect();
        Self {
            tables,
            vehicles: Vec::new(),
            plates: HashMap::new(),
            next_vehicle_id: 1,
        }
    }

    /// Adds a brand and returns its id.
    pub fn add_brand(&mut self, name: &str) -> i64 {
        self.insert_row(BRAND, vec![name.to_owned()])
    }

    /// Adds a model of `brand` and returns its id.
    pub fn add_model(&mut self, brand: &str, name: &str) -> i64 {
        self.insert_row(MODEL, vec![name.to_owned(), brand.to_owned()])
    }

    /// Adds a vehicle state and returns its id.
    pub fn add_status(&mut self, name: &str) -> i64 {
        self.insert_row(STATUS, vec![name.to_owned()])
    }

    /// Adds a vehicle category and returns its id.
    pub fn add_vehicle_type(&mut self, name: &str) -> i64 {
        self.insert_row(VEHICLE_TYPE, vec![name.to_owned()])
    }

    /// Adds a model data row and returns its id.
    pub fn add_model_data(&mut self, data: ModelData) -> i64 {
        self.insert_row(MODEL_DATA, data.into_values())
    }

    /// Registered vehicles in insertion order.
    pub fn vehicles(&self) -> impl Iterator<Item = (i64, &VehicleRecord)> + '_ {
        self.vehicles.iter().map(|(id, v)| (*id, v))
    }

    fn insert_row(&mut self, table: &'static str, values: Vec<String>) -> i64 {
        let id = self
            .tables
            .entry(table)
            .or_insert_with(|| Table::new(NAME_COLUMNS))
            .insert(values);
        log::trace!("{table}: inserted row {id}");
        id
    }

    fn check_reference(&self, table: &'static str, id: i64) -> Result<()> {
        let known = self.tables.get(table).is_some_and(|t| t.contains_id(id));
        if known {
            Ok(())
        } else {
            Err(StoreError::UnknownReference { table, id })
        }
    }

    fn sorted_names<'a>(rows: impl Iterator<Item = &'a str>) -> Vec<String> {
        let mut names: Vec<String> = rows.map(str::to_owned).collect();
        names.sort();
        names
    }
}

impl InventoryStore for MemoryStore {
    fn list_distinct(&self, column: &str) -> Vec<String> {
        self.tables
            .get(MODEL_DATA)
            .and_then(|t| t.distinct(column))
            .unwrap_or_else(|| {
                log::debug!("list_distinct: no column {column:?}");
                Vec::new()
            })
    }

    fn lookup_id(&self, table: &str, column: &str, value: &str) -> Option<i64> {
        if table == VEHICLE {
            return match column {
                "plate" => self.plates.get(value).copied(),
                _ => None,
            };
        }
        let id = self
            .tables
            .get(table)
            .and_then(|t| t.select(column, value).next())
            .map(|row| row.id);
        if id.is_none() {
            log::debug!("lookup_id: no {table}.{column} = {value:?}");
        }
        id
    }

    fn insert_record(&mut self, record: VehicleRecord) -> Result<i64> {
        let plate = record.plate.trim().to_owned();
        if plate.is_empty() {
            return Err(StoreError::EmptyPlate);
        }
        if self.plates.contains_key(&plate) {
            return Err(StoreError::DuplicatePlate(plate));
        }
        self.check_reference(BRAND, record.brand_id)?;
        self.check_reference(MODEL, record.model_id)?;
        self.check_reference(STATUS, record.status_id)?;
        self.check_reference(VEHICLE_TYPE, record.type_id)?;

        let id = self.next_vehicle_id;
        self.next_vehicle_id += 1;
        let record = VehicleRecord { plate, ..record };
        self.plates.insert(record.plate.clone(), id);
        log::debug!("registered vehicle {id} ({})", record.plate);
        self.vehicles.push((id, record));
        Ok(id)
    }

    fn brands(&self) -> Vec<String> {
        self.tables
            .get(BRAND)
            .and_then(|t| t.distinct("name"))
            .unwrap_or_default()
    }

    fn models(&self, brand: &str) -> Vec<String> {
        let Some(table) = self.tables.get(MODEL) else {
            return Vec::new();
        };
        Self::sorted_names(table.select("brand", brand).map(|r| r.values[0].as_str()))
    }

    fn base_data(&self, model: &str) -> Vec<String> {
        self.tables
            .get(MODEL_DATA)
            .and_then(|t| t.select("model", model).next())
            .map(|row| {
                let mut values = Vec::with_capacity(row.values.len() + 1);
                values.push(row.id.to_string());
                values.extend(row.values.iter().cloned());
                values
            })
            .unwrap_or_default()
    }

    fn count_vehicles_by(&self, table: &str) -> Vec<(String, usize)> {
        let key: fn(&VehicleRecord) -> i64 = match table {
            BRAND => |v| v.brand_id,
            MODEL => |v| v.model_id,
            STATUS => |v| v.status_id,
            VEHICLE_TYPE => |v| v.type_id,
            _ => return Vec::new(),
        };
        let Some(names) = self.tables.get(table) else {
            return Vec::new();
        };
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for (_, vehicle) in &self.vehicles {
            if let Some(name) = names.value(key(vehicle), 0) {
                *counts.entry(name).or_default() += 1;
            }
        }
        let mut counts: Vec<(String, usize)> = counts
            .into_iter()
            .map(|(name, n)| (name.to_owned(), n))
            .collect();
        counts.sort();
        counts
    }
}
