//! Style resolution (render-ready truth)
//!
//! `resolve` maps a `Settings` value to a `StyleDescriptor` in which every
//! conflict has been decided:
//!
//! - Fill: gradient (when enabled) > solid text color. Never both.
//! - Overlays: shadow, glow and outline are independent layers, always
//!   listed in that order.
//! - Panel: present only when the background is enabled.
//!
//! Colors are carried through as opaque strings; validating them is the
//! input layer's job.

use serde::Serialize;

use crate::model::{GradientDirection, Settings, TextAlign};

/// Glyph paint when a gradient shows through the glyph shapes.
pub const TRANSPARENT: &str = "transparent";

/// Fixed drop shadow geometry (not user-configurable).
pub const SHADOW_OFFSET_X: f64 = 2.0;
pub const SHADOW_OFFSET_Y: f64 = 2.0;
pub const SHADOW_BLUR: f64 = 4.0;

/// Blur radius of the symmetric glow.
pub const GLOW_BLUR: f64 = 10.0;

/// Width of the glyph outline stroke.
pub const OUTLINE_WIDTH: f64 = 1.0;

/// The fully resolved visual specification of a headline.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleDescriptor {
    pub typography: Typography,
    pub fill: Fill,
    pub overlays: Vec<Overlay>,
    pub panel: Option<Panel>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub font_family: String,
    pub font_weight: String,
    pub font_size: f64,
    pub line_height: f64,
    pub letter_spacing: f64,
    pub text_align: TextAlign,
}

/// How glyphs receive color
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Fill {
    /// Opaque solid color
    Solid { color: String },
    /// Linear gradient clipped to the glyph shapes
    Gradient(GradientFill),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientFill {
    pub direction: GradientDirection,
    pub angle_deg: f64,
    /// Evenly spaced, in settings order
    pub stops: Vec<GradientStop>,
    /// Renderer cycles the gradient position continuously
    pub animate: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradientStop {
    pub color: String,
    /// Position along the gradient line, 0.0..=1.0
    pub offset: f64,
}

/// An additive effect composited independently of the fill
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Overlay {
    Shadow {
        offset_x: f64,
        offset_y: f64,
        blur: f64,
        color: String,
    },
    /// Follows the resolved fill color at render time
    Glow { blur: f64 },
    Outline { width: f64, color: String },
}

/// Background rectangle behind the text block
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Panel {
    pub background_color: String,
    pub padding: f64,
    pub border_radius: f64,
}

impl StyleDescriptor {
    /// The color glyphs are painted with. Transparent under a gradient.
    pub fn glyph_color(&self) -> &str {
        match &self.fill {
            Fill::Solid { color } => color.as_str(),
            Fill::Gradient(_) => TRANSPARENT,
        }
    }

    pub fn gradient(&self) -> Option<&GradientFill> {
        match &self.fill {
            Fill::Gradient(g) => Some(g),
            Fill::Solid { .. } => None,
        }
    }

    pub fn shadow(&self) -> Option<&Overlay> {
        self.overlays.iter().find(|o| matches!(o, Overlay::Shadow { .. }))
    }

    pub fn glow(&self) -> Option<&Overlay> {
        self.overlays.iter().find(|o| matches!(o, Overlay::Glow { .. }))
    }

    pub fn outline(&self) -> Option<&Overlay> {
        self.overlays.iter().find(|o| matches!(o, Overlay::Outline { .. }))
    }
}

/// Resolve settings into a render-ready descriptor. Total and pure.
pub fn resolve(settings: &Settings) -> StyleDescriptor {
    StyleDescriptor {
        typography: Typography {
            font_family: settings.font_family.clone(),
            font_weight: settings.font_weight.clone(),
            font_size: settings.font_size,
            line_height: settings.line_height,
            letter_spacing: settings.letter_spacing,
            text_align: settings.text_align,
        },
        fill: resolve_fill(settings),
        overlays: resolve_overlays(settings),
        panel: resolve_panel(settings),
    }
}

fn resolve_fill(settings: &Settings) -> Fill {
    if !settings.use_gradient {
        return Fill::Solid {
            color: settings.text_color.clone(),
        };
    }
    Fill::Gradient(GradientFill {
        direction: settings.gradient_direction,
        angle_deg: settings.gradient_direction.angle_deg(),
        stops: even_stops(&settings.gradient_colors),
        animate: settings.gradient_animate,
    })
}

/// Stops at i/(n-1). A single color degenerates to one stop at 0.
fn even_stops(colors: &[String]) -> Vec<GradientStop> {
    let last = colors.len().saturating_sub(1);
    colors
        .iter()
        .enumerate()
        .map(|(i, color)| GradientStop {
            color: color.clone(),
            offset: if last == 0 { 0.0 } else { i as f64 / last as f64 },
        })
        .collect()
}

fn resolve_overlays(settings: &Settings) -> Vec<Overlay> {
    let mut overlays = Vec::with_capacity(3);
    if settings.text_shadow {
        overlays.push(Overlay::Shadow {
            offset_x: SHADOW_OFFSET_X,
            offset_y: SHADOW_OFFSET_Y,
            blur: SHADOW_BLUR,
            color: settings.shadow_color.clone(),
        });
    }
    if settings.text_glow {
        overlays.push(Overlay::Glow { blur: GLOW_BLUR });
    }
    if settings.text_outline {
        overlays.push(Overlay::Outline {
            width: OUTLINE_WIDTH,
            color: settings.outline_color.clone(),
        });
    }
    overlays
}

fn resolve_panel(settings: &Settings) -> Option<Panel> {
    settings.use_background.then(|| Panel {
        background_color: settings.background_color.clone(),
        padding: settings.padding,
        border_radius: settings.border_radius,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SettingUpdate;

    fn all_overlays() -> Settings {
        Settings::default()
            .with(SettingUpdate::TextShadow(true))
            .with(SettingUpdate::TextGlow(true))
            .with(SettingUpdate::TextOutline(true))
            .with(SettingUpdate::ShadowColor("#112233".into()))
            .with(SettingUpdate::OutlineColor("#445566".into()))
    }

    #[test]
    fn defaults_resolve_to_solid_black_without_extras() {
        let style = resolve(&Settings::default());
        assert_eq!(style.fill, Fill::Solid { color: "#000000".into() });
        assert!(style.overlays.is_empty());
        assert!(style.panel.is_none());
        assert_eq!(style.typography.font_size, 48.0);
        assert_eq!(style.typography.text_align, TextAlign::Center);
    }

    #[test]
    fn gradient_wins_over_text_color() {
        let s = Settings::default()
            .with(SettingUpdate::TextColor("#ff0000".into()))
            .with(SettingUpdate::UseGradient(true));
        let style = resolve(&s);

        assert!(style.gradient().is_some());
        assert_eq!(style.glyph_color(), TRANSPARENT);
    }

    #[test]
    fn two_stop_gradient_spans_ends() {
        let s = Settings::default().with(SettingUpdate::UseGradient(true));
        let g = resolve(&s).gradient().cloned().unwrap();
        let offsets: Vec<f64> = g.stops.iter().map(|s| s.offset).collect();
        assert_eq!(offsets, vec![0.0, 1.0]);
        assert_eq!(g.angle_deg, 90.0);
    }

    #[test]
    fn five_stop_gradient_is_evenly_spaced_in_order() {
        let s = Settings::default()
            .with(SettingUpdate::UseGradient(true))
            .with(SettingUpdate::GradientDirection(GradientDirection::ToBl))
            .with_gradient_preset(&["#1", "#2", "#3", "#4", "#5"]);
        let g = resolve(&s).gradient().cloned().unwrap();

        let colors: Vec<&str> = g.stops.iter().map(|s| s.color.as_str()).collect();
        assert_eq!(colors, vec!["#1", "#2", "#3", "#4", "#5"]);
        let offsets: Vec<f64> = g.stops.iter().map(|s| s.offset).collect();
        assert_eq!(offsets, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(g.angle_deg, 225.0);
    }

    #[test]
    fn gradient_animate_only_travels_with_gradient() {
        let s = Settings::default().with(SettingUpdate::GradientAnimate(true));
        assert!(resolve(&s).gradient().is_none());

        let s = s.with(SettingUpdate::UseGradient(true));
        assert!(resolve(&s).gradient().is_some_and(|g| g.animate));
    }

    #[test]
    fn all_overlays_coexist_with_own_colors() {
        let style = resolve(&all_overlays());
        assert_eq!(style.overlays.len(), 3);
        assert_eq!(
            style.overlays[0],
            Overlay::Shadow { offset_x: 2.0, offset_y: 2.0, blur: 4.0, color: "#112233".into() }
        );
        assert_eq!(style.overlays[1], Overlay::Glow { blur: GLOW_BLUR });
        assert_eq!(style.overlays[2], Overlay::Outline { width: 1.0, color: "#445566".into() });
    }

    #[test]
    fn toggling_one_overlay_leaves_others_alone() {
        let with_all = resolve(&all_overlays());
        let no_glow = resolve(&all_overlays().with(SettingUpdate::TextGlow(false)));

        assert!(no_glow.glow().is_none());
        assert_eq!(no_glow.shadow(), with_all.shadow());
        assert_eq!(no_glow.outline(), with_all.outline());
    }

    #[test]
    fn panel_follows_background_toggle() {
        let s = Settings::default()
            .with(SettingUpdate::UseBackground(true))
            .with(SettingUpdate::BackgroundColor("#fafafa".into()));
        assert_eq!(
            resolve(&s).panel,
            Some(Panel { background_color: "#fafafa".into(), padding: 24.0, border_radius: 12.0 })
        );
    }

    #[test]
    fn empty_text_still_resolves() {
        let s = Settings::default().with(SettingUpdate::Text(String::new()));
        assert_eq!(resolve(&s), resolve(&Settings::default()));
    }

    #[test]
    fn malformed_colors_pass_through() {
        let s = Settings::default().with(SettingUpdate::TextColor("not-a-color".into()));
        assert_eq!(resolve(&s).glyph_color(), "not-a-color");
    }
}
