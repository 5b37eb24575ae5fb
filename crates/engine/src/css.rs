//! Stylesheet text for a resolved headline
//!
//! Rendered from the `StyleDescriptor` only, so the copied rule always
//! matches what the live surface paints: same stops, same overlay order,
//! same panel geometry.

use std::fmt::Write;

use crate::resolve::{Fill, GradientFill, Overlay, StyleDescriptor};

/// Selector used when the caller doesn't supply one.
pub const DEFAULT_SELECTOR: &str = ".headline";

impl StyleDescriptor {
    /// Render a single rule for `selector`, one declaration per line.
    pub fn to_css(&self, selector: &str) -> String {
        let mut decls: Vec<String> = Vec::new();
        let t = &self.typography;

        decls.push(format!("font-family: {};", t.font_family));
        decls.push(format!("font-size: {}px;", num(t.font_size)));
        decls.push(format!("font-weight: {};", t.font_weight));
        decls.push(format!("line-height: {};", num(t.line_height)));
        decls.push(format!("letter-spacing: {}px;", num(t.letter_spacing)));
        decls.push(format!("text-align: {};", t.text_align.as_str()));
        decls.push(format!("color: {};", self.glyph_color()));

        if let Fill::Gradient(g) = &self.fill {
            decls.push(format!("background: {};", linear_gradient(g)));
            decls.push("-webkit-background-clip: text;".to_string());
            decls.push("-webkit-text-fill-color: transparent;".to_string());
            decls.push("background-clip: text;".to_string());
        }

        for overlay in &self.overlays {
            decls.push(match overlay {
                Overlay::Shadow { offset_x, offset_y, blur, color } => format!(
                    "text-shadow: {}px {}px {}px {};",
                    num(*offset_x),
                    num(*offset_y),
                    num(*blur),
                    color
                ),
                Overlay::Glow { blur } => {
                    format!("filter: drop-shadow(0 0 {}px currentColor);", num(*blur))
                }
                Overlay::Outline { width, color } => {
                    format!("-webkit-text-stroke: {}px {};", num(*width), color)
                }
            });
        }

        if let Some(panel) = &self.panel {
            decls.push(format!("background-color: {};", panel.background_color));
            decls.push(format!("padding: {}px;", num(panel.padding)));
            decls.push(format!("border-radius: {}px;", num(panel.border_radius)));
        }

        let mut css = String::new();
        let _ = writeln!(css, "{} {{", selector);
        for decl in decls {
            let _ = writeln!(css, "  {}", decl);
        }
        css.push('}');
        css
    }
}

fn linear_gradient(g: &GradientFill) -> String {
    let stops: Vec<String> = g
        .stops
        .iter()
        .map(|s| format!("{} {}%", s.color, num(s.offset * 100.0)))
        .collect();
    format!("linear-gradient(to {}, {})", g.direction.side(), stops.join(", "))
}

/// Shortest decimal form, rounded to 4 places: 48.0 -> "48", 1.2 -> "1.2".
fn num(value: f64) -> String {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    // Avoid "-0"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{}", rounded)
}
