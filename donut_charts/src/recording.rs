// Copyright 2026 the Donut Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A [`DrawSurface`] that records calls, for tests.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Affine, BezPath, Rect};
use peniko::Brush;

use crate::measure::{HeuristicTextMeasurer, TextMeasurer};
use crate::surface::{Alignment, DrawSurface, StrokeStyle, TextStyle};

#[derive(Clone, Debug)]
#[allow(dead_code, reason = "not every test inspects every field")]
pub(crate) enum Op {
    Transform(Affine),
    Clip(Option<BezPath>),
    Path {
        path: BezPath,
        fill: Option<Brush>,
        stroke: Option<StrokeStyle>,
        transform: Affine,
    },
    Text {
        rect: Rect,
        text: String,
        style: TextStyle,
        transform: Affine,
    },
}

#[derive(Debug, Default)]
pub(crate) struct RecordingSurface {
    pub(crate) ops: Vec<Op>,
    transform: Affine,
}

impl RecordingSurface {
    pub(crate) fn count(&self, pred: impl Fn(&Op) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }

    pub(crate) fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.ops.iter().filter_map(|op| match op {
            Op::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub(crate) fn has_text(&self, needle: &str) -> bool {
        self.texts().any(|t| t == needle)
    }

    pub(crate) fn fills(&self) -> impl Iterator<Item = &Brush> + '_ {
        self.ops.iter().filter_map(|op| match op {
            Op::Path { fill: Some(fill), .. } => Some(fill),
            _ => None,
        })
    }
}

impl TextMeasurer for RecordingSurface {
    fn measure_text(&self, text: &str, font_size: f64) -> (f64, f64) {
        HeuristicTextMeasurer.measure_text(text, font_size)
    }
}

impl DrawSurface for RecordingSurface {
    fn set_transform(&mut self, transform: Affine) {
        self.transform = transform;
        self.ops.push(Op::Transform(transform));
    }

    fn set_clip(&mut self, clip: Option<&BezPath>) {
        self.ops.push(Op::Clip(clip.cloned()));
    }

    fn draw_path(&mut self, path: &BezPath, fill: Option<&Brush>, stroke: Option<&StrokeStyle>) {
        self.ops.push(Op::Path {
            path: path.clone(),
            fill: fill.cloned(),
            stroke: stroke.cloned(),
            transform: self.transform,
        });
    }

    fn draw_text(&mut self, rect: Rect, _alignment: Alignment, text: &str, style: &TextStyle) {
        self.ops.push(Op::Text {
            rect,
            text: text.into(),
            style: style.clone(),
            transform: self.transform,
        });
    }
}
