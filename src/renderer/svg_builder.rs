//! SVG builder — accumulates SVG elements and produces the final string.

// ═══════════════════════════════════════════════════════════════════════
// SvgBuilder
// ═══════════════════════════════════════════════════════════════════════

pub(super) struct SvgBuilder {
    elements: Vec<String>,
    width: f64,
    height: f64,
    display_width: Option<f64>,
}

impl SvgBuilder {
    pub(super) fn new(width: f64, height: f64) -> Self {
        Self {
            elements: Vec::new(),
            width,
            height,
            display_width: None,
        }
    }

    /// Scale the rendered size to `width`, keeping the aspect ratio.
    pub(super) fn with_display_width(mut self, width: Option<f64>) -> Self {
        self.display_width = width.filter(|w| w.is_finite() && *w > 0.0);
        self
    }

    pub(super) fn build(self) -> String {
        let (out_w, out_h) = match self.display_width {
            Some(w) => (w, self.height * w / self.width),
            None => (self.width, self.height),
        };
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" width="{:.1}" height="{:.1}" style="font-family: 'Helvetica Neue', Arial, sans-serif;">"#,
            self.width, self.height, out_w, out_h
        );
        svg.push('\n');
        for el in &self.elements {
            svg.push_str("  ");
            svg.push_str(el);
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }

    pub(super) fn open_group(&mut self, dx: f64, dy: f64) {
        self.elements
            .push(format!(r#"<g transform="translate({:.1},{:.1})">"#, dx, dy));
    }

    pub(super) fn close_group(&mut self) {
        self.elements.push("</g>".to_string());
    }

    pub(super) fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: &str, width: f64) {
        self.elements.push(format!(
            r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="{:.1}" stroke-linecap="round"/>"#,
            x1, y1, x2, y2, color, width
        ));
    }

    #[allow(clippy::too_many_arguments)]
    pub(super) fn rounded_rect(
        &mut self,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        radius: f64,
        fill: &str,
        opacity: f64,
    ) {
        if opacity < 1.0 {
            self.elements.push(format!(
                r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" rx="{:.1}" fill="{}" opacity="{:.2}"/>"#,
                x, y, w, h, radius, fill, opacity
            ));
        } else {
            self.elements.push(format!(
                r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" rx="{:.1}" fill="{}"/>"#,
                x, y, w, h, radius, fill
            ));
        }
    }

    pub(super) fn circle(&mut self, cx: f64, cy: f64, r: f64, fill: &str, stroke: &str, stroke_width: f64) {
        self.elements.push(format!(
            r#"<circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}" stroke="{}" stroke-width="{:.1}"/>"#,
            cx, cy, r, fill, stroke, stroke_width
        ));
    }

    #[allow(clippy::too_many_arguments)]
    pub(super) fn text(&mut self, x: f64, y: f64, content: &str, size: f64, weight: &str, fill: &str, anchor: &str) {
        self.elements.push(format!(
            r#"<text x="{:.1}" y="{:.1}" font-size="{:.0}" font-weight="{}" fill="{}" text-anchor="{}">{}</text>"#,
            x, y, size, weight, fill, anchor, escape(content)
        ));
    }
}

fn escape(content: &str) -> String {
    content
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

// ═══════════════════════════════════════════════════════════════════════
// Empty SVG fallback
// ═══════════════════════════════════════════════════════════════════════

pub(super) fn empty_svg(message: &str) -> String {
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 220 100\">\
         <text x=\"110\" y=\"50\" text-anchor=\"middle\" font-size=\"14\" fill=\"gray\">{}</text>\
         </svg>",
        escape(message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_escaped() {
        let mut svg = SvgBuilder::new(100.0, 100.0);
        svg.text(0.0, 0.0, "A<B & C>", 12.0, "bold", "#000", "middle");
        let out = svg.build();
        assert!(out.contains("A&lt;B &amp; C&gt;"));
    }

    #[test]
    fn display_width_scales_height() {
        let out = SvgBuilder::new(220.0, 280.0)
            .with_display_width(Some(110.0))
            .build();
        assert!(out.contains(r#"viewBox="0 0 220 280""#));
        assert!(out.contains(r#"width="110.0" height="140.0""#));
    }

    #[test]
    fn non_positive_display_width_is_ignored() {
        let out = SvgBuilder::new(220.0, 280.0)
            .with_display_width(Some(0.0))
            .build();
        assert!(out.contains(r#"width="220.0" height="280.0""#));
    }
}
