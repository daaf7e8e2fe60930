// Copyright 2025 the Tribuna Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump of a [`ChartFrame`].

use std::fmt::Write as _;

use kurbo::{Affine, Rect};
use peniko::Brush;
use tribuna_view::{ChartFrame, DrawItem};

/// One frame rendered through a fixed viewport.
#[derive(Debug)]
pub(crate) struct SvgScene<'a> {
    frame: &'a ChartFrame,
    view_box: Rect,
}

impl<'a> SvgScene<'a> {
    pub(crate) fn new(frame: &'a ChartFrame, view_box: Rect) -> Self {
        Self { frame, view_box }
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let view_box = self.view_box;
        let mut out = String::new();

        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        let _ = writeln!(
            out,
            r#"viewBox="{} {} {} {}" width="{}" height="{}">"#,
            view_box.x0,
            view_box.y0,
            view_box.width(),
            view_box.height(),
            view_box.width(),
            view_box.height()
        );
        let _ = writeln!(
            out,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            view_box.x0,
            view_box.y0,
            view_box.width(),
            view_box.height(),
            "#202020"
        );
        let _ = writeln!(out, r#"<g transform="{}">"#, svg_matrix(self.frame.transform));

        // Items arrive sorted by z-index.
        for item in &self.frame.items {
            write_item(&mut out, item);
        }

        out.push_str("</g>\n</svg>\n");
        out
    }
}

fn write_item(out: &mut String, item: &DrawItem) {
    if item.reveal <= 0.0 {
        return;
    }
    let d = item.path.to_svg();
    let _ = write!(out, r#"<path d="{d}""#);
    match &item.fill {
        Some(fill) => write_paint_attr(out, "fill", fill),
        None => out.push_str(r#" fill="none""#),
    }
    if let Some(stroke) = item.stroke.as_ref().filter(|s| s.stroke_width > 0.0) {
        write_paint_attr(out, "stroke", &stroke.brush);
        let _ = write!(out, r#" stroke-width="{}""#, stroke.stroke_width);
    }
    if item.reveal < 1.0 {
        let _ = write!(out, r#" opacity="{}""#, item.reveal);
    }
    out.push_str("/>\n");
}

fn svg_matrix(transform: Affine) -> String {
    let [a, b, c, d, e, f] = transform.as_coeffs();
    format!("matrix({a} {b} {c} {d} {e} {f})")
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
    let _ = write!(out, r#" {name}="{value}""#);
    if let Some(o) = opacity {
        let _ = write!(out, r#" {name}-opacity="{o}""#);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tribuna_view::{ChartConfig, SeatingChart};

    #[test]
    fn frame_renders_one_path_per_visible_item() {
        let mut chart = SeatingChart::new(ChartConfig::new(2, 200.0));
        chart.advance_to(0.0);
        chart.advance_to(5.0);
        let frame = chart.frame();
        let svg = SvgScene::new(&frame, Rect::new(0.0, 0.0, 200.0, 200.0)).to_svg_string();
        assert!(svg.starts_with("<svg"));
        assert_eq!(svg.matches("<path").count(), frame.items.len());
        assert!(svg.contains("matrix("));
    }
}
