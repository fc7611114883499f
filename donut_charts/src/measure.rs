// Copyright 2026 the Donut Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hooks for chart layout.
//!
//! Titles, legends and value badges are sized from rendered text extents. Shaping stays with
//! the host, so chart code only depends on this small trait.

/// A minimal text measurement interface used by chart painters.
pub trait TextMeasurer {
    /// Returns `(width, height)` of a single line in the surface's coordinate system.
    fn measure_text(&self, text: &str, font_size: f64) -> (f64, f64);
}

/// A tiny heuristic text measurer suitable for demos, tests and early layout.
///
/// It assumes an average glyph width of ~0.6em and a line height of 1.2em.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure_text(&self, text: &str, font_size: f64) -> (f64, f64) {
        let width = 0.6 * font_size * text.chars().count() as f64;
        (width, 1.2 * font_size)
    }
}
