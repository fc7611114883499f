// Copyright 2026 the Donut Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Percentage legend for the pie chart.
//!
//! Rows are stacked upward from the lower-right corner of the view, longest name at the
//! bottom. Each row is a right-aligned label above a thin track whose filled part is the
//! entry's percentage of the label column width.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Rect, RoundedRect, Shape};
use peniko::{Brush, Color};

use crate::measure::TextMeasurer;
use crate::slice_model::Entry;
use crate::sort::SortPolicy;
use crate::surface::{Alignment, DrawSurface, StrokeStyle, TextStyle};

/// Placed geometry of one legend row.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendRow {
    /// Entry name.
    pub label: String,
    /// Entry percentage, `0..=100`.
    pub percentage: f64,
    /// Where the label is drawn.
    pub label_rect: Rect,
    /// Full-width background track under the label.
    pub track_rect: Rect,
    /// Filled part of the track, anchored at its right edge.
    pub bar_rect: Rect,
}

/// Legend layout and styling.
#[derive(Clone, Debug, PartialEq)]
pub struct PercentLegend {
    /// Label font size.
    pub font_size: f64,
    /// Distance from the right edge of the view.
    pub margin_right: f64,
    /// Distance of the first row from the bottom edge of the view.
    pub margin_bottom: f64,
    /// Vertical gap between rows.
    pub row_gap: f64,
    /// Label color.
    pub text_fill: Brush,
    /// Track outline.
    pub track_stroke: StrokeStyle,
    /// Filled bar paint.
    pub bar_fill: Brush,
}

impl PercentLegend {
    /// Legend styled for a view of the given height.
    pub fn for_view_height(height: f64) -> Self {
        Self {
            font_size: (height * 0.015).max(1.0),
            margin_right: 16.0,
            margin_bottom: 24.0,
            row_gap: 16.0,
            text_fill: Brush::Solid(Color::from_rgb8(30, 34, 39)),
            track_stroke: StrokeStyle::solid(Color::from_rgba8(0, 0, 0, 20), 1.0),
            bar_fill: Brush::Solid(Color::from_rgba8(0, 0, 0, 140)),
        }
    }

    /// Places one row per entry inside `view`.
    pub fn rows<'a>(
        &self,
        percentages: impl IntoIterator<Item = (&'a str, f64)>,
        view: Rect,
        measurer: &dyn TextMeasurer,
    ) -> Vec<LegendRow> {
        let mut entries: Vec<Entry> = percentages
            .into_iter()
            .map(|(name, pct)| Entry::new(name, pct))
            .collect();
        SortPolicy::ByNameLengthDesc.sort(&mut entries);

        let Some(longest) = entries.first() else {
            return Vec::new();
        };
        let (text_w, text_h) = measurer.measure_text(&longest.name, self.font_size);
        let track_h = self.font_size * 0.5;

        let mut y = view.y1 - self.margin_bottom - text_h;
        let x1 = view.x1 - self.margin_right;
        let x0 = x1 - text_w;
        entries
            .into_iter()
            .map(|entry| {
                let label_rect = Rect::new(x0, y, x1, y + text_h);
                let track_rect = Rect::new(x0, label_rect.y1, x1, label_rect.y1 + track_h);
                let fill_w = text_w * entry.value.clamp(0.0, 100.0) / 100.0;
                let bar_rect = Rect::new(x1 - fill_w, track_rect.y0, x1, track_rect.y1);
                y -= text_h + self.row_gap;
                LegendRow {
                    label: entry.name,
                    percentage: entry.value,
                    label_rect,
                    track_rect,
                    bar_rect,
                }
            })
            .collect()
    }

    /// Paints the rows.
    pub fn paint(&self, surface: &mut dyn DrawSurface, rows: &[LegendRow]) {
        let style = TextStyle::new(self.font_size, self.text_fill.clone());
        for row in rows {
            surface.draw_text(row.label_rect, Alignment::BOTTOM_END, &row.label, &style);
            let track = RoundedRect::from_rect(row.track_rect, 1.0).to_path(0.1);
            surface.draw_path(&track, None, Some(&self.track_stroke));
            surface.draw_path(&row.bar_rect.to_path(0.1), Some(&self.bar_fill), None);
        }
    }
}
