// Copyright 2026 the Donut Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Entries, percentages and slice layout.
//!
//! A [`SliceModel`] turns a `name -> value` mapping plus a [`SortPolicy`] into an ordered list of
//! [`Slice`]s. Slices are rebuilt wholesale on every [`SliceModel::set_entries`]; there is no
//! incremental diffing.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::{Point, Vec2};
use peniko::Color;

use crate::color::{self, Palette};
use crate::error::{ChartError, InvalidInput};
use crate::geometry::{Wedge, normalize_degrees};
use crate::notify::{Notifier, Observable};
use crate::sort::SortPolicy;

/// Degrees per percent.
pub const DEGREES_PER_PERCENT: f64 = 3.6;

/// Lightening factor from a slice's base color to its hover color.
pub const HOVER_LIGHTEN: u32 = 300;

/// One category of the chart.
#[derive(Clone, Debug, PartialEq)]
pub struct Entry {
    /// Category name; unique within one chart.
    pub name: String,
    /// Non-negative value.
    pub value: f64,
}

impl Entry {
    /// Creates an entry.
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Position of a slice in the current layout.
///
/// Ids are only meaningful until the next [`SliceModel::set_entries`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SliceId(pub usize);

/// A laid-out wedge for one entry, with its live hover state.
#[derive(Clone, Debug)]
pub struct Slice {
    id: SliceId,
    label: String,
    value: f64,
    percentage: f64,
    start_angle: f64,
    span_angle: f64,
    color: Color,
    hover_color: Color,
    display_color: Observable<Color>,
    pop_out: Observable<f64>,
}

impl Slice {
    fn new(
        id: SliceId,
        entry: &Entry,
        percentage: f64,
        start_angle: f64,
        base: Color,
    ) -> Self {
        Self {
            id,
            label: entry.name.clone(),
            value: entry.value,
            percentage,
            start_angle,
            span_angle: percentage * DEGREES_PER_PERCENT,
            color: base,
            hover_color: color::lighter(base, HOVER_LIGHTEN),
            display_color: Observable::new(base),
            pop_out: Observable::new(0.0),
        }
    }

    /// Layout id.
    pub fn id(&self) -> SliceId {
        self.id
    }

    /// Entry name.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Raw entry value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Share of the total, `0..=100`.
    pub fn percentage(&self) -> f64 {
        self.percentage
    }

    /// Start angle in degrees, relative to the chart rotation.
    ///
    /// Start angles accumulate across slices and are not re-normalized.
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    /// Angular width in degrees.
    pub fn span_angle(&self) -> f64 {
        self.span_angle
    }

    /// Middle of the wedge for a given chart rotation.
    pub fn mid_angle(&self, rotation: f64) -> f64 {
        rotation + self.start_angle + self.span_angle * 0.5
    }

    /// Base (resting) color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Color the slice animates towards while hovered.
    pub fn hover_color(&self) -> Color {
        self.hover_color
    }

    /// Currently displayed (possibly mid-animation) color.
    pub fn display_color(&self) -> Color {
        self.display_color.value()
    }

    /// Current pop-out distance.
    pub fn pop_out(&self) -> f64 {
        self.pop_out.value()
    }

    /// Pop-out displacement along the wedge's mid angle.
    pub fn offset(&self, rotation: f64) -> Vec2 {
        Vec2::from_angle(self.mid_angle(rotation).to_radians()) * self.pop_out()
    }

    /// Replaces the base color; the displayed color snaps to it and the hover color follows.
    pub fn set_color(&mut self, color: Color, notifier: &mut Notifier) {
        self.color = color;
        self.hover_color = color::lighter(color, HOVER_LIGHTEN);
        self.display_color.set(color, notifier);
        notifier.request_redraw();
    }

    /// Writes the displayed color (animation setter).
    pub fn set_display_color(&mut self, color: Color, notifier: &mut Notifier) {
        self.display_color.set(color, notifier);
    }

    /// Writes the pop-out distance (animation setter).
    pub fn set_pop_out(&mut self, distance: f64, notifier: &mut Notifier) {
        self.pop_out.set(distance, notifier);
    }

    /// The hit-testable wedge for this slice.
    ///
    /// The wedge is not displaced by the pop-out offset; hit-testing uses the resting layout.
    pub fn wedge(&self, center: Point, radius: f64, hole_radius: f64, rotation: f64) -> Wedge {
        Wedge::new(
            center,
            radius,
            rotation + self.start_angle,
            self.span_angle,
        )
        .with_hole(hole_radius)
    }
}

/// Ordered entries and the slices derived from them.
#[derive(Clone, Debug)]
pub struct SliceModel {
    entries: Vec<Entry>,
    slices: Vec<Slice>,
    policy: SortPolicy,
    palette: Palette,
    rotation: Observable<f64>,
}

impl Default for SliceModel {
    fn default() -> Self {
        Self::new()
    }
}

impl SliceModel {
    /// Creates an empty model with the default palette.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            slices: Vec::new(),
            policy: SortPolicy::default(),
            palette: Palette::default(),
            rotation: Observable::new(0.0),
        }
    }

    /// Sets the palette used by the next [`SliceModel::set_entries`].
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Replaces all entries and rebuilds every slice.
    ///
    /// A repeated name replaces the earlier value in place. Fails with
    /// [`ChartError::InvalidInput`] when there are no entries, when a value is negative or not
    /// finite, or when all values are zero. On failure the previous state is kept.
    pub fn set_entries<I, S>(
        &mut self,
        entries: I,
        policy: SortPolicy,
        notifier: &mut Notifier,
    ) -> Result<(), ChartError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut collected: Vec<Entry> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        for (name, value) in entries {
            if !value.is_finite() || value < 0.0 {
                return Err(InvalidInput::BadValue.into());
            }
            let name = name.into();
            if let Some(&i) = index.get(&name) {
                collected[i].value = value;
            } else {
                index.insert(name.clone(), collected.len());
                collected.push(Entry { name, value });
            }
        }
        if collected.is_empty() {
            return Err(InvalidInput::NoEntries.into());
        }
        let mut scale = 1.0;
        let mut total: f64 = collected.iter().map(|e| e.value).sum();
        if total <= 0.0 {
            return Err(InvalidInput::ZeroTotal.into());
        }
        if total.is_infinite() {
            // Finite values can still overflow the sum; rescale by the largest one.
            scale = collected.iter().map(|e| e.value).fold(0.0, f64::max);
            total = collected.iter().map(|e| e.value / scale).sum();
        }

        policy.sort(&mut collected);

        let mut start_angle = 0.0;
        let slices = collected
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let percentage = entry.value / scale / total * 100.0;
                let slice = Slice::new(
                    SliceId(i),
                    entry,
                    percentage,
                    start_angle,
                    self.palette.color_at(i),
                );
                start_angle += slice.span_angle;
                slice
            })
            .collect();

        log::debug!(
            "set {} entries ({policy:?}), total {total}",
            collected.len()
        );
        self.entries = collected;
        self.slices = slices;
        self.policy = policy;
        notifier.request_redraw();
        Ok(())
    }

    /// Entries in display order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.entries.iter().map(|e| (e.name.as_str(), e.value))
    }

    /// Percentages in display order.
    pub fn percentages(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.slices.iter().map(|s| (s.label(), s.percentage))
    }

    /// Percentage of one entry.
    pub fn percentage(&self, name: &str) -> Option<f64> {
        self.slices
            .iter()
            .find(|s| s.label == name)
            .map(|s| s.percentage)
    }

    /// The policy used by the last successful [`SliceModel::set_entries`].
    pub fn policy(&self) -> SortPolicy {
        self.policy
    }

    /// Whether no entries have been set yet.
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Slices in display order.
    pub fn slices(&self) -> &[Slice] {
        &self.slices
    }

    /// A single slice.
    pub fn slice(&self, id: SliceId) -> Option<&Slice> {
        self.slices.get(id.0)
    }

    /// A single slice, mutably.
    pub fn slice_mut(&mut self, id: SliceId) -> Option<&mut Slice> {
        self.slices.get_mut(id.0)
    }

    /// Rotation offset in degrees, `[0, 360)`.
    pub fn rotation(&self) -> f64 {
        self.rotation.value()
    }

    /// Stores `degrees mod 360` and returns the stored value.
    ///
    /// Slice angles are relative to the rotation and are not recomputed.
    ///
    /// Non-finite angles are ignored and the current rotation is kept.
    pub fn set_rotation(&mut self, degrees: f64, notifier: &mut Notifier) -> f64 {
        if !degrees.is_finite() {
            return self.rotation.value();
        }
        let normalized = normalize_degrees(degrees);
        self.rotation.set(normalized, notifier);
        normalized
    }

    /// Overrides slice base colors pairwise; extra colors are ignored.
    pub fn set_slice_colors(
        &mut self,
        colors: impl IntoIterator<Item = Color>,
        notifier: &mut Notifier,
    ) {
        for (slice, color) in self.slices.iter_mut().zip(colors) {
            slice.set_color(color, notifier);
        }
    }

    /// Base colors in display order.
    pub fn slice_colors(&self) -> impl Iterator<Item = Color> + '_ {
        self.slices.iter().map(Slice::color)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;
    use alloc::vec::Vec;

    use peniko::color::palette::css;

    use super::*;

    fn model(items: &[(&str, f64)], policy: SortPolicy) -> SliceModel {
        let mut m = SliceModel::new();
        let mut n = Notifier::new();
        m.set_entries(items.iter().copied(), policy, &mut n)
            .expect("valid entries");
        assert!(n.take_redraw(), "set_entries should request a redraw");
        m
    }

    #[test]
    fn example_by_value_desc() {
        let m = model(&[("A", 1.0), ("B", 1.0), ("C", 2.0)], SortPolicy::ByValueDesc);
        let order: Vec<_> = m.entries().map(|(n, _)| n).collect();
        assert_eq!(order[0], "C");
        assert!(order == ["C", "A", "B"] || order == ["C", "B", "A"]);

        assert_eq!(m.percentage("C"), Some(50.0));
        assert_eq!(m.percentage("A"), Some(25.0));
        assert_eq!(m.percentage("B"), Some(25.0));

        let spans: Vec<_> = m.slices().iter().map(Slice::span_angle).collect();
        assert_eq!(spans, [180.0, 90.0, 90.0]);
        assert_eq!(spans.iter().sum::<f64>(), 360.0);
    }

    #[test]
    fn percentages_sum_to_100_and_spans_to_360() {
        let m = model(
            &[
                ("Charlie", 1884.0),
                ("Bob", 1114.0),
                ("Clark", 1214.0),
                ("Sven", 3214.0),
                ("Malte", 314.0),
            ],
            SortPolicy::ByNameLengthDesc,
        );
        let pct: f64 = m.percentages().map(|(_, p)| p).sum();
        assert!((pct - 100.0).abs() < 1e-6 * 100.0, "sum was {pct}");
        let span: f64 = m.slices().iter().map(Slice::span_angle).sum();
        assert!((span - 360.0).abs() < 1e-6 * 360.0, "span was {span}");
    }

    #[test]
    fn start_angles_accumulate() {
        let m = model(&[("A", 1.0), ("B", 1.0), ("C", 2.0)], SortPolicy::ByValueAsc);
        let starts: Vec<_> = m.slices().iter().map(Slice::start_angle).collect();
        assert_eq!(starts, [0.0, 90.0, 180.0]);
    }

    #[test]
    fn empty_and_invalid_input_is_rejected() {
        let mut m = SliceModel::new();
        let mut n = Notifier::new();
        let none: Vec<(&str, f64)> = vec![];
        assert_eq!(
            m.set_entries(none, SortPolicy::ByValueDesc, &mut n),
            Err(ChartError::InvalidInput(InvalidInput::NoEntries))
        );
        assert_eq!(
            m.set_entries([("A", -1.0)], SortPolicy::ByValueDesc, &mut n),
            Err(ChartError::InvalidInput(InvalidInput::BadValue))
        );
        assert_eq!(
            m.set_entries([("A", f64::NAN)], SortPolicy::ByValueDesc, &mut n),
            Err(ChartError::InvalidInput(InvalidInput::BadValue))
        );
        assert_eq!(
            m.set_entries([("A", 0.0), ("B", 0.0)], SortPolicy::ByValueDesc, &mut n),
            Err(ChartError::InvalidInput(InvalidInput::ZeroTotal))
        );
        assert!(m.is_empty());
        assert!(!n.needs_redraw());
    }

    #[test]
    fn failed_reset_keeps_previous_slices() {
        let mut m = model(&[("A", 1.0)], SortPolicy::ByValueDesc);
        let mut n = Notifier::new();
        let none: [(&str, f64); 0] = [];
        assert!(m.set_entries(none, SortPolicy::ByNameAsc, &mut n).is_err());
        assert_eq!(m.slices().len(), 1);
        assert_eq!(m.policy(), SortPolicy::ByValueDesc);
    }

    #[test]
    fn repeated_names_replace_values() {
        let m = model(&[("A", 1.0), ("B", 1.0), ("A", 2.0)], SortPolicy::ByNameAsc);
        let entries: Vec<_> = m.entries().collect();
        assert_eq!(entries, [("A", 2.0), ("B", 1.0)]);
    }

    #[test]
    fn reset_replaces_all_slices() {
        let mut m = model(&[("A", 1.0), ("B", 1.0)], SortPolicy::ByNameAsc);
        let mut n = Notifier::new();
        m.set_entries([("X", 3.0)], SortPolicy::ByNameAsc, &mut n)
            .unwrap();
        assert_eq!(m.slices().len(), 1);
        assert_eq!(m.slices()[0].label(), "X");
        assert_eq!(m.slices()[0].span_angle(), 360.0);
        assert_eq!(m.percentage("A"), None);
    }

    #[test]
    fn palette_assigns_distinct_lightening_colors() {
        let m = model(&[("A", 1.0), ("B", 2.0), ("C", 3.0)], SortPolicy::ByValueAsc);
        let colors: Vec<_> = m.slice_colors().collect();
        let palette = Palette::default();
        for (i, c) in colors.iter().enumerate() {
            assert_eq!(*c, palette.color_at(i));
        }
        let s = &m.slices()[0];
        assert_eq!(s.display_color(), s.color());
        assert_eq!(s.hover_color(), color::lighter(s.color(), HOVER_LIGHTEN));
    }

    #[test]
    fn rotation_is_normalized_without_touching_angles() {
        let mut m = model(&[("A", 1.0), ("B", 3.0)], SortPolicy::ByValueAsc);
        let mut n = Notifier::new();
        assert_eq!(m.set_rotation(-90.0, &mut n), 270.0);
        assert_eq!(m.rotation(), 270.0);
        assert!(n.take_redraw());
        assert_eq!(m.set_rotation(450.0, &mut n), 90.0);
        assert_eq!(m.slices()[1].start_angle(), 90.0);
        assert_eq!(m.slices()[1].mid_angle(m.rotation()), 90.0 + 90.0 + 135.0);
    }

    #[test]
    fn slice_colors_override_pairwise() {
        let mut m = model(&[("A", 1.0), ("B", 3.0)], SortPolicy::ByValueAsc);
        let mut n = Notifier::new();
        m.set_slice_colors([css::RED, css::GREEN, css::BLUE], &mut n);
        let colors: Vec<_> = m.slice_colors().collect();
        assert_eq!(colors, [css::RED, css::GREEN]);
        assert_eq!(m.slices()[0].display_color(), css::RED);
        assert!(n.take_redraw());
    }

    #[test]
    fn offset_points_along_mid_angle() {
        let mut m = model(&[("A", 1.0), ("B", 1.0)], SortPolicy::ByNameAsc);
        let mut n = Notifier::new();
        let slice = m.slice_mut(SliceId(0)).unwrap();
        slice.set_pop_out(10.0, &mut n);
        // A spans 0..180, so its middle is due south in screen coordinates.
        let offset = slice.offset(0.0);
        assert!(offset.x.abs() < 1e-9 && (offset.y - 10.0).abs() < 1e-9, "{offset:?}");
    }

    #[test]
    fn huge_values_still_sum_to_a_full_circle() {
        let m = model(
            &[("A", f64::MAX), ("B", f64::MAX), ("C", f64::MAX / 2.0)],
            SortPolicy::ByNameAsc,
        );
        let pct: f64 = m.percentages().map(|(_, p)| p).sum();
        assert!((pct - 100.0).abs() < 1e-9, "percentages sum to {pct}");
        let spans: f64 = m.slices().iter().map(Slice::span_angle).sum();
        assert!((spans - 360.0).abs() < 1e-9, "spans sum to {spans}");
        assert_eq!(m.percentage("A"), Some(40.0));
        assert_eq!(m.percentage("C"), Some(20.0));
    }

    #[test]
    fn non_finite_rotation_is_ignored() {
        let mut m = model(&[("A", 1.0), ("B", 3.0)], SortPolicy::ByValueAsc);
        let mut n = Notifier::new();
        m.set_rotation(30.0, &mut n);
        n.take_redraw();
        for bad in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
            assert_eq!(m.set_rotation(bad, &mut n), 30.0, "{bad} should be ignored");
            assert_eq!(m.rotation(), 30.0);
        }
        assert!(!n.take_redraw(), "ignored rotations do not request a redraw");
    }
}
