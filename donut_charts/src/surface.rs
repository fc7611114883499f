// Copyright 2026 the Donut Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing surface a host lends to a chart while painting.
//!
//! Charts never own a canvas. They describe each frame as a short sequence of calls on a
//! [`DrawSurface`], so the same chart can paint into a native widget, a GPU scene or an SVG
//! document.

use kurbo::{Affine, BezPath, Point, Rect};
use peniko::Brush;
use peniko::color::palette::css;

use crate::geometry::polygon_path;
use crate::measure::TextMeasurer;

/// Stroke paint and width.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in surface coordinates.
    pub stroke_width: f64,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 1.0)
    }
}

/// Horizontal placement of text inside its rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAnchor {
    /// Left edge.
    #[default]
    Start,
    /// Centered.
    Middle,
    /// Right edge.
    End,
}

/// Vertical placement of text inside its rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextBaseline {
    /// Top edge.
    Top,
    /// Centered.
    #[default]
    Middle,
    /// Bottom edge.
    Bottom,
}

/// Text placement inside a rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Alignment {
    /// Horizontal placement.
    pub anchor: TextAnchor,
    /// Vertical placement.
    pub baseline: TextBaseline,
}

impl Alignment {
    /// Centered both ways.
    pub const CENTER: Self = Self {
        anchor: TextAnchor::Middle,
        baseline: TextBaseline::Middle,
    };
    /// Left edge, vertically centered.
    pub const START: Self = Self {
        anchor: TextAnchor::Start,
        baseline: TextBaseline::Middle,
    };
    /// Bottom-right corner.
    pub const BOTTOM_END: Self = Self {
        anchor: TextAnchor::End,
        baseline: TextBaseline::Bottom,
    };

    /// The point text is anchored to inside `rect`.
    pub fn anchor_point(&self, rect: Rect) -> Point {
        let x = match self.anchor {
            TextAnchor::Start => rect.x0,
            TextAnchor::Middle => 0.5 * (rect.x0 + rect.x1),
            TextAnchor::End => rect.x1,
        };
        let y = match self.baseline {
            TextBaseline::Top => rect.y0,
            TextBaseline::Middle => 0.5 * (rect.y0 + rect.y1),
            TextBaseline::Bottom => rect.y1,
        };
        Point::new(x, y)
    }
}

/// Font and paint for a text run.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in surface coordinates.
    pub font_size: f64,
    /// CSS-style weight, `400` normal, `700` bold.
    pub font_weight: u16,
    /// Use a monospace family.
    pub monospace: bool,
    /// Text paint.
    pub fill: Brush,
}

impl TextStyle {
    /// A normal-weight proportional style.
    pub fn new(font_size: f64, fill: impl Into<Brush>) -> Self {
        Self {
            font_size,
            font_weight: 400,
            monospace: false,
            fill: fill.into(),
        }
    }

    /// Sets the weight.
    pub fn with_weight(mut self, font_weight: u16) -> Self {
        self.font_weight = font_weight;
        self
    }

    /// Switches to a monospace family.
    pub fn monospace(mut self) -> Self {
        self.monospace = true;
        self
    }
}

/// A host painting target.
///
/// All geometry is interpreted in the current transform. Clip paths use the even-odd rule, so
/// a rectangle plus an inner circle clips the circle out.
pub trait DrawSurface: TextMeasurer {
    /// Replaces the current transform.
    fn set_transform(&mut self, transform: Affine);

    /// Sets (`Some`) or clears (`None`) the clip path.
    fn set_clip(&mut self, clip: Option<&BezPath>);

    /// Fills and/or strokes a path.
    fn draw_path(&mut self, path: &BezPath, fill: Option<&Brush>, stroke: Option<&StrokeStyle>);

    /// Fills and/or strokes a closed polygon.
    fn draw_polygon(&mut self, points: &[Point], fill: Option<&Brush>, stroke: Option<&StrokeStyle>) {
        self.draw_path(&polygon_path(points), fill, stroke);
    }

    /// Draws a single line of text inside `rect`.
    fn draw_text(&mut self, rect: Rect, alignment: Alignment, text: &str, style: &TextStyle);
}
