// Copyright 2026 the Donut Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property animations owned by a chart.
//!
//! Each chart keeps an explicit [`Animations`] table keyed by [`PropertyKey`]. The host drives
//! time by calling `advance(elapsed_ms)` on the chart at its own cadence (typically ~16 ms);
//! the table interpolates every running track and hands the new values back so the chart can
//! write them through its setters.

extern crate alloc;

use alloc::vec::Vec;

use hashbrown::HashMap;
use peniko::Color;

use crate::color;
use crate::slice_model::SliceId;

/// Interpolation curve between start and end values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Easing {
    /// Constant speed.
    #[default]
    Linear,
    /// Quadratic ease in and out.
    InOutQuad,
    /// Cubic ease out.
    OutCubic,
    /// Overshoots slightly at both ends.
    InOutBack,
}

impl Easing {
    /// Maps linear progress `t` in `0..=1` to eased progress.
    ///
    /// `InOutBack` leaves `0..=1` briefly; the endpoints are exact for every curve.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * 0.5
                }
            }
            Self::OutCubic => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
            Self::InOutBack => {
                const S: f64 = 1.70158 * 1.525;
                let t2 = t * 2.0;
                if t2 < 1.0 {
                    0.5 * (t2 * t2 * ((S + 1.0) * t2 - S))
                } else {
                    let u = t2 - 2.0;
                    0.5 * (u * u * ((S + 1.0) * u + S) + 2.0)
                }
            }
        }
    }
}

/// A value a property animation can interpolate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnimValue {
    /// A plain number (distances, angles, levels).
    Scalar(f64),
    /// A color, interpolated per sRGB component.
    Color(Color),
}

impl AnimValue {
    /// Interpolates between two values.
    ///
    /// Mismatched kinds snap to `to`.
    pub fn lerp(from: Self, to: Self, t: f64) -> Self {
        match (from, to) {
            (Self::Scalar(a), Self::Scalar(b)) => Self::Scalar(a + (b - a) * t),
            (Self::Color(a), Self::Color(b)) => Self::Color(color::mix(a, b, t)),
            (_, to) => to,
        }
    }

    /// The scalar payload, if this is a scalar.
    pub fn as_scalar(self) -> Option<f64> {
        match self {
            Self::Scalar(v) => Some(v),
            Self::Color(_) => None,
        }
    }

    /// The color payload, if this is a color.
    pub fn as_color(self) -> Option<Color> {
        match self {
            Self::Color(c) => Some(c),
            Self::Scalar(_) => None,
        }
    }
}

/// Identifies an animatable property of a chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    /// Displayed fill color of a slice.
    SliceColor(SliceId),
    /// Hover pop-out distance of a slice.
    SlicePopOut(SliceId),
    /// Chart rotation in degrees.
    Rotation,
    /// Fill level of a cube bar.
    CubeLevel,
}

/// One animation track: start/end binding, timing and easing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PropertyAnimation {
    start: AnimValue,
    end: AnimValue,
    /// Total duration in milliseconds.
    pub duration_ms: f64,
    /// Interpolation curve.
    pub easing: Easing,
    elapsed_ms: f64,
    running: bool,
}

impl PropertyAnimation {
    /// Creates an idle track resting at `initial`.
    pub fn new(initial: AnimValue, duration_ms: f64, easing: Easing) -> Self {
        Self {
            start: initial,
            end: initial,
            duration_ms,
            easing,
            elapsed_ms: 0.0,
            running: false,
        }
    }

    /// Stops any in-flight run, rebinds `from`/`to` and starts from the beginning.
    pub fn start(&mut self, from: AnimValue, to: AnimValue) {
        self.stop();
        self.start = from;
        self.end = to;
        self.elapsed_ms = 0.0;
        self.running = true;
    }

    /// Stops the track where it is.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Whether the track is currently running.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The value the current run is heading to.
    pub fn end_value(&self) -> AnimValue {
        self.end
    }

    /// Interpolated value at the current position.
    pub fn current(&self) -> AnimValue {
        if self.duration_ms <= 0.0 {
            return self.end;
        }
        let t = (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0);
        AnimValue::lerp(self.start, self.end, self.easing.apply(t))
    }

    /// Moves the track forward, returning the new value if it was running.
    ///
    /// The final step lands exactly on the end value and stops the track.
    pub fn step(&mut self, elapsed_ms: f64) -> Option<AnimValue> {
        if !self.running {
            return None;
        }
        self.elapsed_ms += elapsed_ms.max(0.0);
        if self.elapsed_ms >= self.duration_ms {
            self.elapsed_ms = self.duration_ms;
            self.running = false;
            return Some(self.end);
        }
        Some(self.current())
    }
}

/// The animation table of one chart.
#[derive(Clone, Debug, Default)]
pub struct Animations {
    tracks: HashMap<PropertyKey, PropertyAnimation>,
}

impl Animations {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) the track for `key`.
    pub fn insert(&mut self, key: PropertyKey, animation: PropertyAnimation) {
        self.tracks.insert(key, animation);
    }

    /// Returns the track for `key`.
    pub fn get(&self, key: PropertyKey) -> Option<&PropertyAnimation> {
        self.tracks.get(&key)
    }

    /// Drops every track for which `keep` returns `false`.
    pub fn retain(&mut self, mut keep: impl FnMut(PropertyKey) -> bool) {
        self.tracks.retain(|key, _| keep(*key));
    }

    /// Starts the registered track for `key` from the live value `from` towards `to`.
    ///
    /// Any run already in flight on that property is discarded first. Returns `false` when no
    /// track is registered for `key`.
    pub fn start(&mut self, key: PropertyKey, from: AnimValue, to: AnimValue) -> bool {
        let Some(track) = self.tracks.get_mut(&key) else {
            return false;
        };
        log::trace!("animate {key:?}: {from:?} -> {to:?} over {}ms", track.duration_ms);
        track.start(from, to);
        true
    }

    /// Configures and starts a track in one call, registering it if needed.
    pub fn animate(
        &mut self,
        key: PropertyKey,
        from: AnimValue,
        to: AnimValue,
        duration_ms: f64,
        easing: Easing,
    ) {
        let track = self
            .tracks
            .entry(key)
            .or_insert_with(|| PropertyAnimation::new(from, duration_ms, easing));
        track.duration_ms = duration_ms;
        track.easing = easing;
        track.start(from, to);
    }

    /// Stops the track for `key`, leaving the property at its current value.
    pub fn stop(&mut self, key: PropertyKey) {
        if let Some(track) = self.tracks.get_mut(&key) {
            track.stop();
        }
    }

    /// Whether any track is running.
    pub fn is_animating(&self) -> bool {
        self.tracks.values().any(PropertyAnimation::is_running)
    }

    /// Steps every running track, returning the values to write back.
    pub fn advance(&mut self, elapsed_ms: f64) -> Vec<(PropertyKey, AnimValue)> {
        self.tracks
            .iter_mut()
            .filter_map(|(key, track)| track.step(elapsed_ms).map(|v| (*key, v)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use peniko::color::palette::css;

    use super::*;

    fn scalar(v: AnimValue) -> f64 {
        v.as_scalar().expect("scalar track")
    }

    #[test]
    fn easing_endpoints_are_exact() {
        for easing in [
            Easing::Linear,
            Easing::InOutQuad,
            Easing::OutCubic,
            Easing::InOutBack,
        ] {
            assert!(easing.apply(0.0).abs() < 1e-12, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-12, "{easing:?} at 1");
        }
        assert!((Easing::InOutQuad.apply(0.5) - 0.5).abs() < 1e-12);
        assert!(Easing::InOutBack.apply(0.1) < 0.0, "InOutBack should undershoot");
    }

    #[test]
    fn track_interpolates_and_finishes_on_end() {
        let mut track = PropertyAnimation::new(AnimValue::Scalar(0.0), 100.0, Easing::Linear);
        assert_eq!(track.step(16.0), None, "idle tracks do not tick");

        track.start(AnimValue::Scalar(0.0), AnimValue::Scalar(40.0));
        assert!((scalar(track.step(25.0).unwrap()) - 10.0).abs() < 1e-9);
        assert!((scalar(track.step(25.0).unwrap()) - 20.0).abs() < 1e-9);
        assert_eq!(track.step(100.0), Some(AnimValue::Scalar(40.0)));
        assert!(!track.is_running());
    }

    #[test]
    fn restarting_discards_the_in_flight_run() {
        let mut table = Animations::new();
        let key = PropertyKey::Rotation;
        table.insert(
            key,
            PropertyAnimation::new(AnimValue::Scalar(0.0), 100.0, Easing::Linear),
        );
        assert!(table.start(key, AnimValue::Scalar(0.0), AnimValue::Scalar(100.0)));
        let ticks = table.advance(50.0);
        let [(_, v)] = ticks[..] else {
            panic!("expected one tick");
        };
        let live = scalar(v);

        // Reverse from the live value, not from the old end.
        assert!(table.start(key, AnimValue::Scalar(live), AnimValue::Scalar(0.0)));
        let ticks = table.advance(50.0);
        let [(_, v)] = ticks[..] else {
            panic!("expected one tick");
        };
        assert!((scalar(v) - 25.0).abs() < 1e-9, "got {v:?}");
        assert_eq!(
            table.get(key).map(PropertyAnimation::end_value),
            Some(AnimValue::Scalar(0.0))
        );
    }

    #[test]
    fn unknown_keys_are_ignored_and_animate_registers() {
        let mut table = Animations::new();
        assert!(!table.start(
            PropertyKey::CubeLevel,
            AnimValue::Scalar(0.0),
            AnimValue::Scalar(1.0)
        ));
        table.animate(
            PropertyKey::CubeLevel,
            AnimValue::Scalar(0.0),
            AnimValue::Scalar(1.0),
            10.0,
            Easing::InOutQuad,
        );
        assert!(table.is_animating());
        let ticks = table.advance(10.0);
        assert_eq!(ticks, [(PropertyKey::CubeLevel, AnimValue::Scalar(1.0))]);
        assert!(!table.is_animating());
    }

    #[test]
    fn colors_interpolate_and_mismatches_snap() {
        let a = AnimValue::Color(css::BLACK);
        let b = AnimValue::Color(css::WHITE);
        let mid = AnimValue::lerp(a, b, 0.5).as_color().unwrap();
        let rgba = mid.to_rgba8();
        assert!((127..=128).contains(&rgba.r), "got {rgba:?}");
        assert_eq!(AnimValue::lerp(AnimValue::Scalar(1.0), b, 0.2), b);
    }
}
