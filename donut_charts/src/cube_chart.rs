// Copyright 2026 the Donut Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single pseudo-3-D bar that fills up to an animated level.

use kurbo::{Affine, Rect, Vec2};
use peniko::{Brush, Color};

use crate::animation::{AnimValue, Animations, Easing, PropertyAnimation, PropertyKey};
use crate::color;
use crate::geometry::{CubeFaces, cube_faces};
use crate::notify::{Notifier, Observable};
use crate::surface::{DrawSurface, StrokeStyle};

/// Duration of a level change.
pub const LEVEL_DURATION_MS: f64 = 300.0;

/// A bar with a front, a receding side and a top face.
///
/// The bar stands on the bottom edge of `bounds`. Its height is `level` times the usable height
/// (the bounds height minus the depth taken by the top face).
#[derive(Clone, Debug)]
pub struct CubeChart {
    bounds: Rect,
    depth: f64,
    color: Color,
    level: Observable<f64>,
    target: f64,
    animations: Animations,
    notifier: Notifier,
}

impl CubeChart {
    /// Creates an empty bar filling `bounds`.
    pub fn new(bounds: Rect) -> Self {
        let mut animations = Animations::new();
        animations.insert(
            PropertyKey::CubeLevel,
            PropertyAnimation::new(AnimValue::Scalar(0.0), LEVEL_DURATION_MS, Easing::InOutQuad),
        );
        Self {
            bounds,
            depth: 40.0,
            color: Color::from_rgb8(30, 32, 39),
            level: Observable::new(0.0),
            target: 0.0,
            animations,
            notifier: Notifier::new(),
        }
    }

    /// Sets how far the side and top faces recede.
    pub fn with_depth(mut self, depth: f64) -> Self {
        self.depth = depth.max(0.0);
        self
    }

    /// Sets the front face color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// The bar's bounds.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Moves or resizes the bar.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.notifier.request_redraw();
    }

    /// Receding depth.
    pub fn depth(&self) -> f64 {
        self.depth
    }

    /// Live (possibly mid-animation) level.
    pub fn level(&self) -> f64 {
        self.level.value()
    }

    /// The level the bar is heading to.
    pub fn target_level(&self) -> f64 {
        self.target
    }

    /// Animates the level towards `level`, clamped to `[0, 1]`.
    ///
    /// Non-finite levels are ignored.
    pub fn set_level(&mut self, level: f64) {
        if !level.is_finite() {
            return;
        }
        self.target = level.clamp(0.0, 1.0);
        log::debug!("cube level -> {}", self.target);
        self.animations.start(
            PropertyKey::CubeLevel,
            AnimValue::Scalar(self.level.value()),
            AnimValue::Scalar(self.target),
        );
    }

    /// Steps the level animation.
    pub fn advance(&mut self, elapsed_ms: f64) {
        for (key, value) in self.animations.advance(elapsed_ms) {
            if let (PropertyKey::CubeLevel, AnimValue::Scalar(level)) = (key, value) {
                self.level.set(level, &mut self.notifier);
            }
        }
    }

    /// Whether the level is still moving.
    pub fn is_animating(&self) -> bool {
        self.animations.is_animating()
    }

    /// Returns and clears the pending repaint request.
    pub fn take_redraw(&mut self) -> bool {
        self.notifier.take_redraw()
    }

    /// Faces of the bar at the live level, in view coordinates.
    pub fn faces(&self) -> CubeFaces {
        let (w, h, d) = (self.bounds.width(), self.bounds.height(), self.depth);
        let usable = (h - d).max(0.0);
        // The face formulas inset by `y` at both ends; shift down by `y` to stand on the baseline.
        let inset = (1.0 - self.level.value()) * usable * 0.5;
        cube_faces(0.0, inset, (w - d).max(0.0), h, d)
            .translate(self.bounds.origin().to_vec2() + Vec2::new(0.0, inset))
    }

    /// Paints side, front and top.
    pub fn paint(&self, surface: &mut dyn DrawSurface) {
        surface.set_transform(Affine::IDENTITY);
        let faces = self.faces();
        let edge = StrokeStyle::solid(color::darker(self.color, 300), 1.0);
        let fills = [
            color::darker(self.color, 150),
            self.color,
            color::lighter(self.color, 150),
        ];
        for (quad, fill) in faces.paint_order().into_iter().zip(fills) {
            surface.draw_polygon(quad, Some(&Brush::Solid(fill)), Some(&edge));
        }
    }
}

impl Default for CubeChart {
    fn default() -> Self {
        Self::new(Rect::new(0.0, 0.0, 300.0, 800.0))
    }
}
