// Copyright 2026 the Donut Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Toolkit-independent donut and cube charts.
//!
//! This crate holds everything a custom-painted chart widget needs except the widget itself:
//! - **Data**: [`SliceModel`] turns named values into ordered, colored [`Slice`]s.
//! - **Geometry**: pure functions for wedge paths, hit-testing and cube faces.
//! - **Interaction**: a small hover/press state machine producing enter/leave/click effects.
//! - **Time**: an explicit [`Animations`] table the host steps with `advance(elapsed_ms)`.
//! - **Painting**: charts describe each frame as calls on a host-provided [`DrawSurface`].
//!
//! Hosts learn about changes by draining the chart's [`Notifier`]: a redraw flag plus an
//! ordered queue of [`ChartEvent`]s.
//!
//! ```
//! use donut_charts::{ChartEvent, PieChart, SortPolicy};
//! use kurbo::{Point, Rect};
//!
//! let mut chart = PieChart::new(Rect::new(0.0, 0.0, 400.0, 400.0));
//! chart
//!     .set_entries([("Bob", 25.0), ("Sven", 25.0), ("Charlie", 50.0)], SortPolicy::ByValueDesc)
//!     .unwrap();
//! assert_eq!(chart.percentage("Charlie"), Some(50.0));
//!
//! // Charlie covers the lower half of the donut.
//! chart.pointer_moved(Point::new(200.0, 300.0));
//! assert_eq!(
//!     chart.drain_events(),
//!     [ChartEvent::SliceEntered { name: "Charlie".into() }]
//! );
//! ```

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod animation;
mod color;
mod config;
mod cube_chart;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod geometry;
mod interaction;
mod legend;
mod measure;
mod notify;
mod pie_chart;
#[cfg(test)]
mod recording;
mod slice_model;
mod sort;
mod surface;

pub use animation::{AnimValue, Animations, Easing, PropertyAnimation, PropertyKey};
pub use color::{Palette, darker, lighter, mix};
pub use config::ChartConfig;
pub use cube_chart::{CubeChart, LEVEL_DURATION_MS};
pub use error::{ChartError, InvalidInput};
pub use geometry::{
    ARC_TOLERANCE, CubeFaces, Quad, Wedge, contains, cube_faces, normalize_degrees,
    point_on_circle, polygon_path, wedge_path,
};
pub use interaction::{Effect, Effects, Interaction, InteractionState};
pub use legend::{LegendRow, PercentLegend};
pub use measure::{HeuristicTextMeasurer, TextMeasurer};
pub use notify::{ChartEvent, Notifier, Observable};
pub use pie_chart::{HoverTiming, PieChart, hole_clip};
pub use slice_model::{DEGREES_PER_PERCENT, Entry, HOVER_LIGHTEN, Slice, SliceId, SliceModel};
pub use sort::SortPolicy;
pub use surface::{Alignment, DrawSurface, StrokeStyle, TextAnchor, TextBaseline, TextStyle};
