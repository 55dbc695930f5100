use crate::foundation::core::{BezPath, Dimensions};
use crate::foundation::math::format_number;
use crate::render::options::RenderOptions;
use crate::scene::{AxisGeometry, MarkGeometry, Orientation, Primitive, Scene, Space};
use kurbo::PathEl;
use std::fmt::Write as _;

const AXIS_COLOR: &str = "#212121";
const LABEL_FONT_SIZE: f64 = 10.0;
const LABEL_GAP: f64 = 2.0;
const ARC_TOLERANCE: f64 = 0.1;

/// Serialize a scene. Output depends only on the scene and options.
pub(crate) fn scene_to_svg(scene: &Scene, opts: &RenderOptions) -> String {
    let w = SvgWriter { opts };
    let dims = scene.dimensions;
    let m = opts.margins(scene);
    let width = dims.width + m.left + m.right;
    let height = dims.height + m.top + m.bottom;

    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{0}" height="{1}" viewBox="0 0 {0} {1}">"#,
        w.num(width),
        w.num(height)
    );
    let _ = writeln!(
        out,
        r#"<g transform="translate({} {})">"#,
        w.num(m.left),
        w.num(m.top)
    );
    for mark in &scene.marks {
        w.write_mark(&mut out, mark, dims);
    }
    for axis in &scene.axes {
        w.write_axis(&mut out, axis, dims);
    }
    out.push_str("</g>\n</svg>\n");
    out
}

struct SvgWriter<'a> {
    opts: &'a RenderOptions,
}

impl SvgWriter<'_> {
    fn num(&self, v: f64) -> String {
        format_number(v, self.opts.decimals)
    }

    fn write_mark(&self, out: &mut String, mark: &MarkGeometry, dims: Dimensions) {
        let _ = write!(out, r#"<g class="mark mark-{}""#, mark.kind.as_str());
        if mark.space == Space::Chart {
            // Flip so path data stays in chart coordinates.
            let _ = write!(out, r#" transform="matrix(1 0 0 -1 0 {})""#, self.num(dims.height));
        }
        out.push_str(">\n");
        for p in &mark.primitives {
            self.write_primitive(out, p);
        }
        out.push_str("</g>\n");
    }

    fn write_primitive(&self, out: &mut String, p: &Primitive) {
        match p {
            Primitive::Path { path, stroke } => {
                let _ = writeln!(
                    out,
                    r#"<path d="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
                    self.path_data(path),
                    escape_xml(&stroke.color),
                    self.num(stroke.width)
                );
            }
            Primitive::Rect { rect, fill } => {
                let _ = writeln!(
                    out,
                    r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
                    self.num(rect.x0),
                    self.num(rect.y0),
                    self.num(rect.width()),
                    self.num(rect.height()),
                    escape_xml(fill)
                );
            }
            Primitive::Circle {
                center,
                radius,
                fill,
            } => {
                let _ = writeln!(
                    out,
                    r#"<circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
                    self.num(center.x),
                    self.num(center.y),
                    self.num(*radius),
                    escape_xml(fill)
                );
            }
            Primitive::Sector(s) => {
                let _ = writeln!(
                    out,
                    r#"<path d="{}" fill="{}"/>"#,
                    self.path_data(&s.to_path(ARC_TOLERANCE)),
                    escape_xml(&s.fill)
                );
            }
        }
    }

    /// Axes are written in screen space.
    fn write_axis(&self, out: &mut String, axis: &AxisGeometry, dims: Dimensions) {
        let tick = self.opts.tick_size;
        let label_at = tick + LABEL_GAP;
        let _ = writeln!(
            out,
            r#"<g class="axis axis-{}" stroke="{AXIS_COLOR}" font-size="{}" font-family="sans-serif">"#,
            axis.orientation.as_str(),
            self.num(LABEL_FONT_SIZE)
        );

        let [e0, e1] = axis.extent;
        if axis.orientation.is_horizontal() {
            let y = dims.flip_y(axis.offset);
            let dir = if axis.orientation == Orientation::Bottom { 1.0 } else { -1.0 };
            self.line(out, e0, y, e1, y);
            for t in &axis.ticks {
                self.line(out, t.position, y, t.position, y + dir * tick);
                let baseline = if dir > 0.0 { "hanging" } else { "alphabetic" };
                self.text(out, t.position, y + dir * label_at, "middle", baseline, &t.label);
            }
        } else {
            let x = axis.offset;
            let dir = if axis.orientation == Orientation::Right { 1.0 } else { -1.0 };
            self.line(out, x, dims.flip_y(e0), x, dims.flip_y(e1));
            for t in &axis.ticks {
                let y = dims.flip_y(t.position);
                self.line(out, x, y, x + dir * tick, y);
                let anchor = if dir > 0.0 { "start" } else { "end" };
                self.text(out, x + dir * label_at, y, anchor, "middle", &t.label);
            }
        }
        out.push_str("</g>\n");
    }

    fn line(&self, out: &mut String, x1: f64, y1: f64, x2: f64, y2: f64) {
        let _ = writeln!(
            out,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}"/>"#,
            self.num(x1),
            self.num(y1),
            self.num(x2),
            self.num(y2)
        );
    }

    fn text(&self, out: &mut String, x: f64, y: f64, anchor: &str, baseline: &str, label: &str) {
        let _ = writeln!(
            out,
            r#"<text x="{}" y="{}" text-anchor="{anchor}" dominant-baseline="{baseline}" fill="{AXIS_COLOR}" stroke="none">{}</text>"#,
            self.num(x),
            self.num(y),
            escape_xml(label)
        );
    }

    /// `M0 0 L100 200 ...` with rounded coordinates.
    fn path_data(&self, path: &BezPath) -> String {
        let mut d = String::new();
        for el in path.elements() {
            if !d.is_empty() {
                d.push(' ');
            }
            match *el {
                PathEl::MoveTo(p) => {
                    let _ = write!(d, "M{} {}", self.num(p.x), self.num(p.y));
                }
                PathEl::LineTo(p) => {
                    let _ = write!(d, "L{} {}", self.num(p.x), self.num(p.y));
                }
                PathEl::QuadTo(p1, p) => {
                    let _ = write!(
                        d,
                        "Q{} {} {} {}",
                        self.num(p1.x),
                        self.num(p1.y),
                        self.num(p.x),
                        self.num(p.y)
                    );
                }
                PathEl::CurveTo(p1, p2, p) => {
                    let _ = write!(
                        d,
                        "C{} {} {} {} {} {}",
                        self.num(p1.x),
                        self.num(p1.y),
                        self.num(p2.x),
                        self.num(p2.y),
                        self.num(p.x),
                        self.num(p.y)
                    );
                }
                PathEl::ClosePath => d.push('Z'),
            }
        }
        d
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

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
