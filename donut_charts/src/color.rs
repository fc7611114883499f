// Copyright 2026 the Donut Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Color shading helpers.
//!
//! Slice and cube colors are derived from a base color by scaling its HSV value, the same way
//! desktop toolkits implement "lighter"/"darker" so that palettes look familiar next to native
//! widgets.

use peniko::Color;

/// Returns a lighter (`factor > 100`) or darker (`factor < 100`) variant of `color`.
///
/// The HSV value is multiplied by `factor / 100`. When it overflows, the excess is taken out of
/// the saturation instead, which moves saturated colors toward white. Alpha is preserved.
pub fn lighter(color: Color, factor: u32) -> Color {
    if factor == 0 {
        return color;
    }
    if factor < 100 {
        return darker(color, 10_000 / factor);
    }
    let [r, g, b, a] = color.components;
    let (h, mut s, mut v) = rgb_to_hsv(r, g, b);
    v *= factor as f32 / 100.0;
    if v > 1.0 {
        s = (s - (v - 1.0)).max(0.0);
        v = 1.0;
    }
    let [r, g, b] = hsv_to_rgb(h, s, v);
    Color::new([r, g, b, a])
}

/// Returns a darker (`factor > 100`) or lighter (`factor < 100`) variant of `color`.
pub fn darker(color: Color, factor: u32) -> Color {
    if factor == 0 {
        return color;
    }
    if factor < 100 {
        return lighter(color, 10_000 / factor);
    }
    let [r, g, b, a] = color.components;
    let (h, s, v) = rgb_to_hsv(r, g, b);
    let [r, g, b] = hsv_to_rgb(h, s, v * 100.0 / factor as f32);
    Color::new([r, g, b, a])
}

/// HSV value of `color` in `0.0..=1.0`.
pub fn value(color: Color) -> f32 {
    let [r, g, b, _] = color.components;
    r.max(g).max(b)
}

/// Linear interpolation in sRGB component space, `t` clamped to `0.0..=1.0`.
pub fn mix(from: Color, to: Color, t: f64) -> Color {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "colors are stored as f32 components"
    )]
    let t = t.clamp(0.0, 1.0) as f32;
    let a = from.components;
    let b = to.components;
    Color::new([
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
        a[3] + (b[3] - a[3]) * t,
    ])
}

/// A palette that progressively lightens one base color.
///
/// Slice `i` gets `lighter(base, first_factor + i * step)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    /// Base color all entries are derived from.
    pub base: Color,
    /// Lightening factor of the first entry.
    pub first_factor: u32,
    /// Factor increment per subsequent entry.
    pub step: u32,
}

impl Palette {
    /// Returns the color for the entry at `index`.
    pub fn color_at(&self, index: usize) -> Color {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        let factor = self
            .first_factor
            .saturating_add(self.step.saturating_mul(index));
        lighter(self.base, factor)
    }

    /// Sets the base color.
    pub fn with_base(mut self, base: Color) -> Self {
        self.base = base;
        self
    }

    /// Sets the per-entry lightening step.
    pub fn with_step(mut self, step: u32) -> Self {
        self.step = step;
        self
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            base: Color::from_rgb8(30, 32, 39),
            first_factor: 75,
            step: 50,
        }
    }
}

fn rgb_to_hsv(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    if max <= 0.0 {
        return (0.0, 0.0, 0.0);
    }
    let s = delta / max;
    if delta <= 0.0 {
        return (0.0, s, max);
    }
    // Hue in sextants, `0.0..6.0`.
    let mut h = if max == r {
        (g - b) / delta
    } else if max == g {
        2.0 + (b - r) / delta
    } else {
        4.0 + (r - g) / delta
    };
    if h < 0.0 {
        h += 6.0;
    }
    (h, s, max)
}

fn hsv_to_rgb(h: f32, s: f32, v: f32) -> [f32; 3] {
    if s <= 0.0 {
        return [v, v, v];
    }
    #[expect(
        clippy::cast_possible_truncation,
        reason = "hue sextant is in 0..6 and non-negative"
    )]
    let sector = h as u32;
    let f = h - sector as f32;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match sector % 6 {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    }
}
