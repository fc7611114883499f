// Copyright 2026 the Donut Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The interactive donut chart.
//!
//! [`PieChart`] ties together the [`SliceModel`], the hover/press [`Interaction`] machine, the
//! chart-owned [`Animations`] table and the [`Notifier`] the host drains. It is driven entirely
//! by synchronous calls: input events, `advance` ticks and `paint`.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Affine, BezPath, Circle, Point, Rect, RoundedRect, Shape};
use peniko::{Brush, Color};

use crate::animation::{AnimValue, Animations, Easing, PropertyAnimation, PropertyKey};
use crate::color::{self, Palette};
use crate::config::ChartConfig;
use crate::error::ChartError;
use crate::geometry::{ARC_TOLERANCE, point_on_circle};
use crate::interaction::{Effect, Interaction, InteractionState};
use crate::legend::PercentLegend;
use crate::notify::{ChartEvent, Notifier};
use crate::slice_model::{Slice, SliceId, SliceModel};
use crate::sort::SortPolicy;
use crate::surface::{Alignment, DrawSurface, StrokeStyle, TextStyle};

/// Hover and spin animation settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverTiming {
    /// Duration of the hover color transition.
    pub color_ms: f64,
    /// Duration of the pop-out transition.
    pub pop_out_ms: f64,
    /// How far a hovered slice moves out along its mid angle.
    pub pop_out_distance: f64,
    /// Easing of both hover transitions.
    pub easing: Easing,
    /// Duration of one [`PieChart::spin`].
    pub spin_ms: f64,
    /// Easing of [`PieChart::spin`].
    pub spin_easing: Easing,
}

impl Default for HoverTiming {
    fn default() -> Self {
        Self {
            color_ms: 300.0,
            pop_out_ms: 100.0,
            pop_out_distance: 40.0,
            easing: Easing::Linear,
            spin_ms: 11_300.0,
            spin_easing: Easing::InOutBack,
        }
    }
}

/// A donut chart with hover pop-out, click info overlay and rotation.
#[derive(Clone, Debug)]
pub struct PieChart {
    model: SliceModel,
    config: ChartConfig,
    timing: HoverTiming,
    interaction: Interaction,
    animations: Animations,
    notifier: Notifier,
    view: Rect,
    info: Option<(String, f64)>,
}

impl PieChart {
    /// Creates an empty chart covering `view`.
    pub fn new(view: Rect) -> Self {
        let timing = HoverTiming::default();
        let mut animations = Animations::new();
        animations.insert(
            PropertyKey::Rotation,
            PropertyAnimation::new(AnimValue::Scalar(0.0), timing.spin_ms, timing.spin_easing),
        );
        Self {
            model: SliceModel::new(),
            config: ChartConfig::default(),
            timing,
            interaction: Interaction::new(),
            animations,
            notifier: Notifier::new(),
            view,
            info: None,
        }
    }

    /// Replaces the presentation settings.
    pub fn with_config(mut self, config: ChartConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the animation settings.
    pub fn with_timing(mut self, timing: HoverTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Sets the palette used for the next [`PieChart::set_entries`].
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.model = self.model.with_palette(palette);
        self
    }

    // --- data ---

    /// Replaces all entries, see [`SliceModel::set_entries`].
    ///
    /// The hover state and the info overlay are reset along with the slices.
    pub fn set_entries<I, S>(&mut self, entries: I, policy: SortPolicy) -> Result<(), ChartError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        self.model.set_entries(entries, policy, &mut self.notifier)?;
        self.interaction.reset();
        self.info = None;

        self.animations
            .retain(|key| !matches!(key, PropertyKey::SliceColor(_) | PropertyKey::SlicePopOut(_)));
        for slice in self.model.slices() {
            self.animations.insert(
                PropertyKey::SliceColor(slice.id()),
                PropertyAnimation::new(
                    AnimValue::Color(slice.color()),
                    self.timing.color_ms,
                    self.timing.easing,
                ),
            );
            self.animations.insert(
                PropertyKey::SlicePopOut(slice.id()),
                PropertyAnimation::new(
                    AnimValue::Scalar(0.0),
                    self.timing.pop_out_ms,
                    self.timing.easing,
                ),
            );
        }
        Ok(())
    }

    /// Entries in display order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.model.entries()
    }

    /// Percentages in display order.
    pub fn percentages(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.model.percentages()
    }

    /// Percentage of one entry.
    pub fn percentage(&self, name: &str) -> Option<f64> {
        self.model.percentage(name)
    }

    /// Slices in display order.
    pub fn slices(&self) -> &[Slice] {
        self.model.slices()
    }

    /// The underlying model.
    pub fn model(&self) -> &SliceModel {
        &self.model
    }

    /// Overrides slice colors pairwise.
    pub fn set_slice_colors(&mut self, colors: impl IntoIterator<Item = Color>) {
        self.model.set_slice_colors(colors, &mut self.notifier);
        for slice in self.model.slices() {
            self.animations.stop(PropertyKey::SliceColor(slice.id()));
        }
    }

    // --- configuration ---

    /// Presentation settings.
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Current title.
    pub fn title(&self) -> &str {
        self.config.title()
    }

    /// Sets the title, see [`ChartConfig::set_title`].
    pub fn set_title(&mut self, title: &str) -> Result<(), ChartError> {
        self.config.set_title(title)?;
        self.notifier.request_redraw();
        Ok(())
    }

    /// Sets the title color.
    pub fn set_title_color(&mut self, color: Color) {
        self.config.title_color = color;
        self.notifier.request_redraw();
    }

    /// Toggles the info overlay shown after clicking a slice.
    pub fn show_info(&mut self, visible: bool) {
        self.config.show_info = visible;
        self.notifier.request_redraw();
    }

    /// The `(name, percentage)` of the last clicked slice.
    pub fn info(&self) -> Option<(&str, f64)> {
        self.info.as_ref().map(|(n, p)| (n.as_str(), *p))
    }

    /// Rotation offset in degrees, `[0, 360)`.
    pub fn rotation(&self) -> f64 {
        self.model.rotation()
    }

    /// Stores `degrees mod 360`.
    pub fn set_rotation(&mut self, degrees: f64) {
        let before = self.model.rotation();
        let after = self.model.set_rotation(degrees, &mut self.notifier);
        if after != before {
            self.notifier.emit(ChartEvent::RotationChanged(after));
        }
    }

    /// Starts one full backwards turn from the current rotation.
    pub fn spin(&mut self) {
        let from = self.model.rotation();
        self.animations.animate(
            PropertyKey::Rotation,
            AnimValue::Scalar(from),
            AnimValue::Scalar(from - 360.0),
            self.timing.spin_ms,
            self.timing.spin_easing,
        );
    }

    // --- layout ---

    /// The view rectangle.
    pub fn view(&self) -> Rect {
        self.view
    }

    /// Resizes the view.
    pub fn set_view(&mut self, view: Rect) {
        self.view = view;
        self.notifier.request_redraw();
    }

    /// Pie diameter.
    pub fn pie_size(&self) -> f64 {
        self.view.width().min(self.view.height()).max(0.0) * self.config.pie_scale
    }

    /// Square the pie is inscribed in, centered in the view.
    pub fn pie_rect(&self) -> Rect {
        Rect::from_center_size(self.view.center(), (self.pie_size(), self.pie_size()))
    }

    /// Radius of the center hole.
    pub fn hole_radius(&self) -> f64 {
        self.pie_size() * self.config.hole_scale * 0.5
    }

    // --- input ---

    /// The slice whose resting wedge contains `point`.
    pub fn hit_test(&self, point: Point) -> Option<SliceId> {
        let center = self.view.center();
        let radius = self.pie_size() * 0.5;
        let hole = self.hole_radius();
        let rotation = self.model.rotation();
        self.model
            .slices()
            .iter()
            .find(|s| s.wedge(center, radius, hole, rotation).contains(point))
            .map(Slice::id)
    }

    /// Current pointer state.
    pub fn interaction_state(&self) -> InteractionState {
        self.interaction.state()
    }

    /// Delivers a pointer move.
    pub fn pointer_moved(&mut self, point: Point) {
        let hit = self.hit_test(point);
        for effect in self.interaction.pointer_moved(hit) {
            self.apply(effect);
        }
    }

    /// Delivers a pointer press and returns the transient state it produced.
    pub fn pointer_pressed(&mut self, point: Point) -> InteractionState {
        let hit = self.hit_test(point);
        let (state, effects) = self.interaction.pointer_pressed(hit);
        for effect in effects {
            self.apply(effect);
        }
        state
    }

    fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::Enter(id) => {
                let Some(slice) = self.model.slice(id) else {
                    return;
                };
                let name = String::from(slice.label());
                let (color_to, pop_to) = (slice.hover_color(), self.timing.pop_out_distance);
                self.start_hover(id, color_to, pop_to);
                log::debug!("slice entered: {name}");
                self.notifier.emit(ChartEvent::SliceEntered { name });
            }
            Effect::Leave(id) => {
                let Some(slice) = self.model.slice(id) else {
                    return;
                };
                let name = String::from(slice.label());
                let color_to = slice.color();
                self.start_hover(id, color_to, 0.0);
                log::debug!("slice left: {name}");
                self.notifier.emit(ChartEvent::SliceLeft { name });
            }
            Effect::Click(id) => {
                let Some(slice) = self.model.slice(id) else {
                    return;
                };
                let name = String::from(slice.label());
                let percentage = slice.percentage();
                log::debug!("slice clicked: {name} ({percentage:.2}%)");
                self.info = Some((name.clone(), percentage));
                self.notifier.emit(ChartEvent::SliceClicked { name, percentage });
                self.notifier.request_redraw();
            }
        }
    }

    /// Starts both hover tracks of a slice from their live values.
    fn start_hover(&mut self, id: SliceId, color_to: Color, pop_to: f64) {
        let Some(slice) = self.model.slice(id) else {
            return;
        };
        let (color_from, pop_from) = (slice.display_color(), slice.pop_out());
        self.animations.start(
            PropertyKey::SliceColor(id),
            AnimValue::Color(color_from),
            AnimValue::Color(color_to),
        );
        self.animations.start(
            PropertyKey::SlicePopOut(id),
            AnimValue::Scalar(pop_from),
            AnimValue::Scalar(pop_to),
        );
    }

    // --- time ---

    /// Advances all running animations by `elapsed_ms` and writes the new values back.
    pub fn advance(&mut self, elapsed_ms: f64) {
        for (key, value) in self.animations.advance(elapsed_ms) {
            match (key, value) {
                (PropertyKey::SliceColor(id), AnimValue::Color(c)) => {
                    if let Some(slice) = self.model.slice_mut(id) {
                        slice.set_display_color(c, &mut self.notifier);
                    }
                }
                (PropertyKey::SlicePopOut(id), AnimValue::Scalar(d)) => {
                    if let Some(slice) = self.model.slice_mut(id) {
                        slice.set_pop_out(d, &mut self.notifier);
                    }
                }
                (PropertyKey::Rotation, AnimValue::Scalar(r)) => self.set_rotation(r),
                _ => {}
            }
        }
    }

    /// Whether any animation is still running.
    pub fn is_animating(&self) -> bool {
        self.animations.is_animating()
    }

    /// The animation table.
    pub fn animations(&self) -> &Animations {
        &self.animations
    }

    // --- host notifications ---

    /// Returns and clears the pending repaint request.
    pub fn take_redraw(&mut self) -> bool {
        self.notifier.take_redraw()
    }

    /// Removes and returns queued events, oldest first.
    pub fn drain_events(&mut self) -> Vec<ChartEvent> {
        self.notifier.drain_events()
    }

    // --- painting ---

    /// Paints the whole chart.
    pub fn paint(&self, surface: &mut dyn DrawSurface) {
        surface.set_transform(Affine::IDENTITY);
        self.paint_title(surface);
        if self.model.is_empty() {
            return;
        }

        let hole = Circle::new(self.view.center(), self.hole_radius());
        surface.set_clip(Some(&hole_clip(self.view, hole.center, hole.radius)));
        for slice in self.model.slices() {
            self.paint_slice(surface, slice);
        }
        surface.set_transform(Affine::IDENTITY);
        surface.set_clip(None);

        let outline = StrokeStyle::solid(Color::from_rgba8(0, 0, 0, 30), 1.0);
        surface.draw_path(&hole.to_path(ARC_TOLERANCE), None, Some(&outline));

        let legend = PercentLegend::for_view_height(self.view.height());
        let rows = legend.rows(self.model.percentages(), self.view, &*surface);
        legend.paint(surface, &rows);

        if self.config.show_info {
            if let Some((name, percentage)) = self.info() {
                self.paint_info(surface, name, percentage);
            }
        }
    }

    fn paint_title(&self, surface: &mut dyn DrawSurface) {
        let style = TextStyle::new(self.view.height() * 0.055, self.config.title_color)
            .with_weight(800);
        let title = self.config.title();
        let (w, h) = surface.measure_text(title, style.font_size);
        // Reads bottom-to-top along the left edge, ending 16 units below the top.
        let rotate = Affine::translate(self.view.origin().to_vec2())
            * Affine::rotate(-core::f64::consts::FRAC_PI_2);
        surface.set_transform(rotate);
        surface.draw_text(
            Rect::new(-w - 16.0, 8.0, -16.0, 8.0 + h),
            Alignment::START,
            title,
            &style,
        );
        surface.set_transform(Affine::IDENTITY);
    }

    fn paint_slice(&self, surface: &mut dyn DrawSurface, slice: &Slice) {
        let center = self.view.center();
        let size = self.pie_size();
        let rotation = self.model.rotation();
        let mid = slice.mid_angle(rotation);

        let wedge = slice.wedge(center, size * 0.5, self.hole_radius(), rotation);
        let outline = StrokeStyle::solid(Color::from_rgba8(0, 0, 0, 30), 1.0);
        surface.set_transform(Affine::translate(slice.offset(rotation)));
        surface.draw_path(
            &wedge.path(),
            Some(&Brush::Solid(slice.display_color())),
            Some(&outline),
        );

        if slice.span_angle() > 10.0 {
            let style = TextStyle::new(size * 0.025, label_color(slice.color()));
            let (w, h) = surface.measure_text(slice.label(), style.font_size);
            let anchor = point_on_circle(center, mid, size, 0.5);
            surface.set_transform(
                Affine::translate(anchor.to_vec2()) * Affine::rotate(mid.to_radians()),
            );
            surface.draw_text(
                Rect::new(0.0, -h * 0.5, w, h * 0.5),
                Alignment::START,
                slice.label(),
                &style,
            );
        }

        let value = format!("{:.2}", slice.value());
        let style = TextStyle::new(size * 0.02, Color::from_rgb8(208, 208, 208)).monospace();
        let (w, h) = surface.measure_text(&value, style.font_size);
        let anchor = point_on_circle(center, mid, size + slice.pop_out(), 1.15);
        surface.set_transform(Affine::translate(anchor.to_vec2()));
        let badge = Rect::new(-(w + 32.0) * 0.5, -h * 0.5, (w + 32.0) * 0.5, h * 0.5 + 8.0);
        surface.draw_path(
            &RoundedRect::from_rect(badge, 4.0).to_path(ARC_TOLERANCE),
            Some(&Brush::Solid(Color::from_rgb8(30, 34, 39))),
            Some(&StrokeStyle::solid(Color::from_rgb8(208, 208, 208), 1.0)),
        );
        surface.draw_text(badge, Alignment::CENTER, &value, &style);
        surface.set_transform(Affine::IDENTITY);
    }

    fn paint_info(&self, surface: &mut dyn DrawSurface, name: &str, percentage: f64) {
        let ink = Color::from_rgb8(30, 34, 39);
        let style = TextStyle::new(self.view.height() * 0.025, ink);
        let text = format!("{percentage:.2}% {name}");
        let (w, h) = surface.measure_text(&text, style.font_size);
        let rect = Rect::from_origin_size(
            (self.view.x1 - 32.0 - w, self.view.y0 + 16.0),
            (w + 16.0, h + 8.0),
        );
        surface.draw_path(
            &RoundedRect::from_rect(rect, 4.0).to_path(ARC_TOLERANCE),
            Some(&Brush::Solid(Color::WHITE)),
            Some(&StrokeStyle::solid(ink, 1.0)),
        );
        surface.draw_text(rect, Alignment::CENTER, &text, &style);
    }
}

impl Default for PieChart {
    fn default() -> Self {
        Self::new(Rect::new(0.0, 0.0, 400.0, 400.0))
    }
}

/// Text color that stays readable on top of `base`.
fn label_color(base: Color) -> Color {
    if color::value(base) * 255.0 > 105.0 {
        color::darker(base, 200)
    } else {
        color::lighter(base, 150)
    }
}

/// The even-odd clip path that cuts the hole out of `view`.
pub fn hole_clip(view: Rect, center: Point, hole_radius: f64) -> BezPath {
    let mut clip = view.to_path(ARC_TOLERANCE);
    clip.extend(Circle::new(center, hole_radius).path_elements(ARC_TOLERANCE));
    clip
}
