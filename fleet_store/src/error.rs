// Copyright 2026 the Donut Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by store writes.

use thiserror::Error;

/// Reasons a vehicle record is refused.
///
/// Lookups never fail; only writes report errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A referenced row does not exist.
    #[error("unknown {table} id {id}")]
    UnknownReference {
        /// Referenced table.
        table: &'static str,
        /// Missing id.
        id: i64,
    },

    /// Another vehicle already carries this plate.
    #[error("license plate {0:?} is already registered")]
    DuplicatePlate(String),

    /// The plate is empty or only whitespace.
    #[error("license plate must not be empty")]
    EmptyPlate,
}

/// Result alias for store writes.
pub type Result<T> = std::result::Result<T, StoreError>;
