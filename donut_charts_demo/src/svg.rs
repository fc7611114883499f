// Copyright 2026 the Donut Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A [`DrawSurface`] that writes SVG markup.

use donut_charts::{
    Alignment, DrawSurface, HeuristicTextMeasurer, StrokeStyle, TextAnchor, TextBaseline,
    TextMeasurer, TextStyle,
};
use kurbo::{Affine, BezPath, Rect};
use peniko::Brush;

#[derive(Debug)]
pub(crate) struct SvgSurface {
    view_box: Rect,
    defs: String,
    body: String,
    transform: Affine,
    clip_count: usize,
    clipped: bool,
}

impl SvgSurface {
    pub(crate) fn new(view_box: Rect) -> Self {
        Self {
            view_box,
            defs: String::new(),
            body: String::new(),
            transform: Affine::IDENTITY,
            clip_count: 0,
            clipped: false,
        }
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let v = self.view_box;
        let mut out = String::new();
        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        out.push_str(&format!(
            r#"viewBox="{} {} {} {}" width="{}" height="{}" preserveAspectRatio="xMinYMin meet">"#,
            v.x0,
            v.y0,
            v.width(),
            v.height(),
            v.width(),
            v.height()
        ));
        out.push('\n');
        if !self.defs.is_empty() {
            out.push_str("<defs>\n");
            out.push_str(&self.defs);
            out.push_str("</defs>\n");
        }
        out.push_str(&self.body);
        if self.clipped {
            out.push_str("</g>\n");
        }
        out.push_str("</svg>\n");
        out
    }

    fn write_transform(&mut self) {
        if self.transform != Affine::IDENTITY {
            let [a, b, c, d, e, f] = self.transform.as_coeffs();
            self.body
                .push_str(&format!(r#" transform="matrix({a} {b} {c} {d} {e} {f})""#));
        }
    }
}

impl TextMeasurer for SvgSurface {
    fn measure_text(&self, text: &str, font_size: f64) -> (f64, f64) {
        HeuristicTextMeasurer.measure_text(text, font_size)
    }
}

impl DrawSurface for SvgSurface {
    fn set_transform(&mut self, transform: Affine) {
        self.transform = transform;
    }

    fn set_clip(&mut self, clip: Option<&BezPath>) {
        if self.clipped {
            self.body.push_str("</g>\n");
            self.clipped = false;
        }
        if let Some(clip) = clip {
            self.clip_count += 1;
            let id = format!("clip{}", self.clip_count);
            self.defs.push_str(&format!(
                r#"<clipPath id="{id}"><path d="{}" clip-rule="evenodd"/></clipPath>"#,
                clip.to_svg()
            ));
            self.defs.push('\n');
            self.body
                .push_str(&format!(r#"<g clip-path="url(#{id})">"#));
            self.body.push('\n');
            self.clipped = true;
        }
    }

    fn draw_path(&mut self, path: &BezPath, fill: Option<&Brush>, stroke: Option<&StrokeStyle>) {
        self.body.push_str(&format!(r#"<path d="{}""#, path.to_svg()));
        match fill {
            Some(fill) => write_paint_attr(&mut self.body, "fill", fill),
            None => self.body.push_str(r#" fill="none""#),
        }
        if let Some(stroke) = stroke.filter(|s| s.stroke_width > 0.0) {
            write_paint_attr(&mut self.body, "stroke", &stroke.brush);
            self.body
                .push_str(&format!(r#" stroke-width="{}""#, stroke.stroke_width));
        }
        self.write_transform();
        self.body.push_str("/>\n");
    }

    fn draw_text(&mut self, rect: Rect, alignment: Alignment, text: &str, style: &TextStyle) {
        let pos = alignment.anchor_point(rect);
        let baseline = match alignment.baseline {
            TextBaseline::Top => "hanging",
            TextBaseline::Middle => "middle",
            TextBaseline::Bottom => "text-after-edge",
        };
        self.body.push_str(&format!(
            r#"<text x="{}" y="{}" font-size="{}" font-weight="{}" dominant-baseline="{}""#,
            pos.x, pos.y, style.font_size, style.font_weight, baseline
        ));
        self.body.push_str(match alignment.anchor {
            TextAnchor::Start => r#" text-anchor="start""#,
            TextAnchor::Middle => r#" text-anchor="middle""#,
            TextAnchor::End => r#" text-anchor="end""#,
        });
        if style.monospace {
            self.body.push_str(r#" font-family="monospace""#);
        }
        write_paint_attr(&mut self.body, "fill", &style.fill);
        self.write_transform();
        self.body.push('>');
        self.body.push_str(&escape_xml(text));
        self.body.push_str("</text>\n");
    }
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let fill = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let fill_opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (fill, fill_opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o:.3}""#));
    }
}

pub(crate) fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
