// Copyright 2026 the Donut Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by chart setters.

use core::fmt;

/// Why a chart input was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidInput {
    /// `set_entries` was called without any entries.
    NoEntries,
    /// An entry value was negative, `NaN` or infinite.
    BadValue,
    /// All entry values are zero, so no percentage can be computed.
    ZeroTotal,
    /// The title is shorter than [`crate::ChartConfig::MIN_TITLE_CHARS`].
    TitleTooShort {
        /// Length of the rejected title in chars.
        len: usize,
    },
}

/// Errors returned by chart operations.
///
/// These are caller errors; nothing in this crate retries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartError {
    /// The caller passed input the chart cannot represent.
    InvalidInput(InvalidInput),
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(InvalidInput::NoEntries) => {
                f.write_str("invalid input: at least one entry is required")
            }
            Self::InvalidInput(InvalidInput::BadValue) => {
                f.write_str("invalid input: entry values must be finite and >= 0")
            }
            Self::InvalidInput(InvalidInput::ZeroTotal) => {
                f.write_str("invalid input: entry values sum to zero")
            }
            Self::InvalidInput(InvalidInput::TitleTooShort { len }) => write!(
                f,
                "invalid input: title has {len} chars, at least {} are required",
                crate::ChartConfig::MIN_TITLE_CHARS
            ),
        }
    }
}

impl core::error::Error for ChartError {}

impl From<InvalidInput> for ChartError {
    fn from(reason: InvalidInput) -> Self {
        Self::InvalidInput(reason)
    }
}
