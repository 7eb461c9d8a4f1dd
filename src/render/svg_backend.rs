use std::fmt::Write;

use indexmap::IndexMap;

use crate::error::{BarChartError, BarChartResult};
use crate::render::{Color, RenderFrame, Renderer, TextHAlign};

/// Render backend that serializes frames to SVG markup.
///
/// The renderer holds a set of named containers standing in for the
/// elements a selector can match in a hosting document. Rendering appends
/// one complete `<svg>` element to the resolved container, so repeated
/// renders accumulate markup rather than replacing it.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    containers: IndexMap<String, String>,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a renderer whose containers are exactly `selectors`.
    #[must_use]
    pub fn with_containers<I, S>(selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut renderer = Self::new();
        for selector in selectors {
            renderer.add_container(selector);
        }
        renderer
    }

    pub fn add_container(&mut self, selector: impl Into<String>) {
        self.containers.entry(selector.into()).or_default();
    }

    /// Accumulated markup for a container, if the selector matches one.
    #[must_use]
    pub fn container_markup(&self, selector: &str) -> Option<&str> {
        self.containers.get(selector).map(String::as_str)
    }
}

impl Renderer for SvgRenderer {
    fn resolve_container(&mut self, selector: &str) -> BarChartResult<()> {
        if self.containers.contains_key(selector) {
            Ok(())
        } else {
            Err(BarChartError::InvalidContainer(selector.to_owned()))
        }
    }

    fn render(&mut self, selector: &str, frame: &RenderFrame) -> BarChartResult<()> {
        frame.validate()?;
        let markup = frame_markup(frame);
        let container = self
            .containers
            .get_mut(selector)
            .ok_or_else(|| BarChartError::InvalidContainer(selector.to_owned()))?;
        container.push_str(&markup);
        Ok(())
    }
}

fn frame_markup(frame: &RenderFrame) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        r#"<svg width="{}" height="{}" xmlns="http://www.w3.org/2000/svg">"#,
        frame.viewport.width, frame.viewport.height
    );

    for rect in &frame.rects {
        let _ = writeln!(
            out,
            r#"    <rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            fmt_px(rect.x),
            fmt_px(rect.y),
            fmt_px(rect.width),
            fmt_px(rect.height),
            css_color(rect.fill),
        );
    }

    for line in &frame.lines {
        let _ = writeln!(
            out,
            r#"    <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
            fmt_px(line.x1),
            fmt_px(line.y1),
            fmt_px(line.x2),
            fmt_px(line.y2),
            css_color(line.color),
            fmt_px(line.stroke_width),
        );
    }

    for text in &frame.texts {
        let anchor = match text.h_align {
            TextHAlign::Left => "start",
            TextHAlign::Center => "middle",
            TextHAlign::Right => "end",
        };
        let _ = writeln!(
            out,
            r#"    <text x="{}" y="{}" font-size="{}" fill="{}" text-anchor="{anchor}">{}</text>"#,
            fmt_px(text.x),
            fmt_px(text.y),
            fmt_px(text.font_size_px),
            css_color(text.color),
            xml_escape(&text.text),
        );
    }

    out.push_str("</svg>\n");
    out
}

/// Pixel value with float noise trimmed for stable markup.
fn fmt_px(value: f64) -> String {
    let mut text = format!("{value:.3}");
    if text.contains('.') {
        while text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
    }
    text
}

fn css_color(color: Color) -> String {
    let channel = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    if color.alpha < 1.0 {
        format!(
            "rgba({},{},{},{})",
            channel(color.red),
            channel(color.green),
            channel(color.blue),
            fmt_px(color.alpha),
        )
    } else {
        format!(
            "rgb({},{},{})",
            channel(color.red),
            channel(color.green),
            channel(color.blue),
        )
    }
}

fn xml_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
