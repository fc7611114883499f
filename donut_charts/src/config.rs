// Copyright 2026 the Donut Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Presentation settings of a pie chart.

extern crate alloc;

use alloc::string::String;

use peniko::Color;

use crate::error::{ChartError, InvalidInput};

/// Title, colors and overlay settings.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
    title: String,
    /// Title fill color.
    pub title_color: Color,
    /// Whether clicking a slice shows the info overlay.
    pub show_info: bool,
    /// Diameter of the pie relative to the smaller side of the view.
    pub pie_scale: f64,
    /// Diameter of the center hole relative to the pie diameter.
    pub hole_scale: f64,
}

impl ChartConfig {
    /// Shortest accepted title, in chars.
    pub const MIN_TITLE_CHARS: usize = 4;
    /// Longer titles are truncated to this many chars.
    pub const MAX_TITLE_CHARS: usize = 28;

    /// Current title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Sets the title.
    ///
    /// Titles shorter than [`Self::MIN_TITLE_CHARS`] are rejected and leave the current title in
    /// place; titles longer than [`Self::MAX_TITLE_CHARS`] are silently truncated.
    pub fn set_title(&mut self, title: &str) -> Result<(), ChartError> {
        let len = title.chars().count();
        if len < Self::MIN_TITLE_CHARS {
            return Err(InvalidInput::TitleTooShort { len }.into());
        }
        self.title = title.chars().take(Self::MAX_TITLE_CHARS).collect();
        Ok(())
    }

    /// Sets the title, see [`Self::set_title`].
    pub fn with_title(mut self, title: &str) -> Result<Self, ChartError> {
        self.set_title(title)?;
        Ok(self)
    }

    /// Sets the title color.
    pub fn with_title_color(mut self, color: Color) -> Self {
        self.title_color = color;
        self
    }

    /// Sets whether the info overlay is shown.
    pub fn with_show_info(mut self, visible: bool) -> Self {
        self.show_info = visible;
        self
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: String::from("PieChart - Example"),
            title_color: Color::from_rgb8(30, 34, 39),
            show_info: true,
            pie_scale: 0.75,
            hole_scale: 0.1,
        }
    }
}
