// Copyright 2026 the Donut Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fleet inventory persistence boundary.
//!
//! The fleet application only needs a handful of queries: the choice lists of its entry form,
//! id lookups for the selected names and one insert. [`InventoryStore`] captures exactly that;
//! [`MemoryStore`] implements it without any database.

mod error;
mod memory;
mod record;
pub mod schema;
mod store;
mod table;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use record::{ModelData, VehicleRecord};
pub use store::InventoryStore;
