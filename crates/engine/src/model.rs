//! Headline settings model
//!
//! `Settings` is the single persisted entity. It is immutable by convention:
//! every mutation goes through `Settings::with` (or one of the gradient list
//! helpers) and produces a new value, so callers can diff old against new.
//!
//! Wire names match the persisted encoding: camelCase fields, kebab-case
//! enum tokens (`to-br`, `per-letter`).

use serde::{Deserialize, Serialize};

/// Fewest gradient stops a headline may carry.
pub const MIN_GRADIENT_COLORS: usize = 2;

/// Most gradient stops a headline may carry.
pub const MAX_GRADIENT_COLORS: usize = 5;

/// Color appended by `with_gradient_color_added`.
pub const DEFAULT_GRADIENT_COLOR: &str = "#8b5cf6";

// ============================================================================
// Enumerated tokens
// ============================================================================

/// Horizontal alignment of the headline block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// Direction a linear gradient travels across the glyphs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum GradientDirection {
    /// Left to right
    #[default]
    ToR,
    /// Right to left
    ToL,
    /// Top to bottom
    ToB,
    /// Bottom to top
    ToT,
    /// Top-left to bottom-right
    ToBr,
    /// Top-right to bottom-left
    ToBl,
}

impl GradientDirection {
    /// Gradient line angle in degrees, clockwise from "up".
    pub fn angle_deg(&self) -> f64 {
        match self {
            GradientDirection::ToT => 0.0,
            GradientDirection::ToR => 90.0,
            GradientDirection::ToBr => 135.0,
            GradientDirection::ToB => 180.0,
            GradientDirection::ToBl => 225.0,
            GradientDirection::ToL => 270.0,
        }
    }

    /// Side keyword as written after `to` in a linear gradient.
    pub fn side(&self) -> &'static str {
        match self {
            GradientDirection::ToR => "right",
            GradientDirection::ToL => "left",
            GradientDirection::ToB => "bottom",
            GradientDirection::ToT => "top",
            GradientDirection::ToBr => "bottom right",
            GradientDirection::ToBl => "bottom left",
        }
    }
}

/// Entrance animation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum AnimationType {
    /// Content appears at its final state immediately
    None,
    /// Opacity only
    #[default]
    FadeIn,
    /// Opacity plus an upward slide
    SlideUp,
    /// Opacity plus a springy scale-up
    Bounce,
    /// Each character enters on its own, staggered left to right
    PerLetter,
}

// ============================================================================
// Settings
// ============================================================================

/// Complete configuration of one headline.
///
/// Missing fields in a persisted blob read as the default configuration's
/// value, so older blobs stay loadable when fields are added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub text: String,

    // Typography
    pub font_size: f64,
    pub font_family: String,
    /// Weight token, e.g. "700". Passed through to the renderer unchecked.
    pub font_weight: String,
    pub line_height: f64,
    /// May be negative.
    pub letter_spacing: f64,
    pub text_align: TextAlign,
    pub text_color: String,

    // Gradient
    pub use_gradient: bool,
    pub gradient_direction: GradientDirection,
    pub gradient_colors: Vec<String>,
    pub gradient_animate: bool,

    // Overlays
    pub text_shadow: bool,
    pub text_glow: bool,
    pub text_outline: bool,
    pub outline_color: String,
    pub shadow_color: String,

    // Panel
    pub background_color: String,
    pub use_background: bool,
    pub padding: f64,
    pub border_radius: f64,

    // Animation
    pub animation_type: AnimationType,
    pub hover_effect: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            text: "Your Amazing Headline".to_string(),
            font_size: 48.0,
            font_family: "Playfair Display, serif".to_string(),
            font_weight: "700".to_string(),
            line_height: 1.2,
            letter_spacing: 0.0,
            text_align: TextAlign::Center,
            text_color: "#000000".to_string(),

            use_gradient: false,
            gradient_direction: GradientDirection::ToR,
            gradient_colors: vec!["#000000".to_string(), "#333333".to_string()],
            gradient_animate: false,

            text_shadow: false,
            text_glow: false,
            text_outline: false,
            outline_color: "#000000".to_string(),
            shadow_color: "#000000".to_string(),

            background_color: "#ffffff".to_string(),
            use_background: false,
            padding: 24.0,
            border_radius: 12.0,

            animation_type: AnimationType::FadeIn,
            hover_effect: true,
        }
    }
}

impl Settings {
    /// Return a copy with exactly one field replaced.
    ///
    /// Geometry that must stay non-negative is clamped at zero; non-finite
    /// numbers and out-of-range gradient lists leave the value unchanged.
    pub fn with(&self, update: SettingUpdate) -> Settings {
        let mut next = self.clone();
        match update {
            SettingUpdate::Text(v) => next.text = v,
            SettingUpdate::FontSize(v) => set_non_negative(&mut next.font_size, v),
            SettingUpdate::FontFamily(v) => next.font_family = v,
            SettingUpdate::FontWeight(v) => next.font_weight = v,
            SettingUpdate::LineHeight(v) => set_non_negative(&mut next.line_height, v),
            SettingUpdate::LetterSpacing(v) => {
                if v.is_finite() {
                    next.letter_spacing = v;
                }
            }
            SettingUpdate::TextAlign(v) => next.text_align = v,
            SettingUpdate::TextColor(v) => next.text_color = v,
            SettingUpdate::UseGradient(v) => next.use_gradient = v,
            SettingUpdate::GradientDirection(v) => next.gradient_direction = v,
            SettingUpdate::GradientColors(v) => {
                if gradient_len_ok(v.len()) {
                    next.gradient_colors = v;
                }
            }
            SettingUpdate::GradientAnimate(v) => next.gradient_animate = v,
            SettingUpdate::TextShadow(v) => next.text_shadow = v,
            SettingUpdate::TextGlow(v) => next.text_glow = v,
            SettingUpdate::TextOutline(v) => next.text_outline = v,
            SettingUpdate::OutlineColor(v) => next.outline_color = v,
            SettingUpdate::ShadowColor(v) => next.shadow_color = v,
            SettingUpdate::BackgroundColor(v) => next.background_color = v,
            SettingUpdate::UseBackground(v) => next.use_background = v,
            SettingUpdate::Padding(v) => set_non_negative(&mut next.padding, v),
            SettingUpdate::BorderRadius(v) => set_non_negative(&mut next.border_radius, v),
            SettingUpdate::AnimationType(v) => next.animation_type = v,
            SettingUpdate::HoverEffect(v) => next.hover_effect = v,
        }
        next
    }

    /// Append `DEFAULT_GRADIENT_COLOR` unless the list is already full.
    pub fn with_gradient_color_added(&self) -> Settings {
        let mut colors = self.gradient_colors.clone();
        colors.push(DEFAULT_GRADIENT_COLOR.to_string());
        self.with(SettingUpdate::GradientColors(colors))
    }

    /// Remove the stop at `index` unless only the minimum remains.
    pub fn with_gradient_color_removed(&self, index: usize) -> Settings {
        if index >= self.gradient_colors.len() {
            return self.clone();
        }
        let mut colors = self.gradient_colors.clone();
        colors.remove(index);
        self.with(SettingUpdate::GradientColors(colors))
    }

    /// Replace the stop at `index`. Out-of-range indices change nothing.
    pub fn with_gradient_color(&self, index: usize, color: impl Into<String>) -> Settings {
        if index >= self.gradient_colors.len() {
            return self.clone();
        }
        let mut colors = self.gradient_colors.clone();
        colors[index] = color.into();
        self.with(SettingUpdate::GradientColors(colors))
    }

    /// Replace the whole gradient list (e.g. from a preset palette).
    pub fn with_gradient_preset(&self, colors: &[&str]) -> Settings {
        let colors = colors.iter().map(|c| c.to_string()).collect();
        self.with(SettingUpdate::GradientColors(colors))
    }

    /// Check the structural invariants a persisted blob must satisfy.
    pub fn validate(&self) -> Result<(), InvalidSettings> {
        if !gradient_len_ok(self.gradient_colors.len()) {
            return Err(InvalidSettings::GradientLength(self.gradient_colors.len()));
        }
        for (field, value) in [
            ("fontSize", self.font_size),
            ("lineHeight", self.line_height),
            ("padding", self.padding),
            ("borderRadius", self.border_radius),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(InvalidSettings::Geometry { field, value });
            }
        }
        if !self.letter_spacing.is_finite() {
            return Err(InvalidSettings::LetterSpacing(self.letter_spacing));
        }
        Ok(())
    }
}

fn gradient_len_ok(len: usize) -> bool {
    (MIN_GRADIENT_COLORS..=MAX_GRADIENT_COLORS).contains(&len)
}

fn set_non_negative(field: &mut f64, value: f64) {
    if value.is_finite() {
        *field = value.max(0.0);
    }
}

// ============================================================================
// Updates
// ============================================================================

/// A single-field replacement for `Settings::with`.
///
/// Serialized adjacently tagged with the wire field name as the key:
/// `{"key": "fontSize", "value": 90}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "key", content = "value", rename_all = "camelCase")]
pub enum SettingUpdate {
    Text(String),
    FontSize(f64),
    FontFamily(String),
    FontWeight(String),
    LineHeight(f64),
    LetterSpacing(f64),
    TextAlign(TextAlign),
    TextColor(String),
    UseGradient(bool),
    GradientDirection(GradientDirection),
    GradientColors(Vec<String>),
    GradientAnimate(bool),
    TextShadow(bool),
    TextGlow(bool),
    TextOutline(bool),
    OutlineColor(String),
    ShadowColor(String),
    BackgroundColor(String),
    UseBackground(bool),
    Padding(f64),
    BorderRadius(f64),
    AnimationType(AnimationType),
    HoverEffect(bool),
}

impl SettingUpdate {
    /// Build an update from a wire key and a JSON value.
    pub fn from_key(key: &str, value: serde_json::Value) -> Result<Self, UpdateError> {
        serde_json::from_value(serde_json::json!({ "key": key, "value": value })).map_err(|e| {
            UpdateError {
                key: key.to_string(),
                reason: e.to_string(),
            }
        })
    }
}

/// A keyed update named an unknown field or carried a mistyped value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateError {
    pub key: String,
    pub reason: String,
}

impl std::fmt::Display for UpdateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cannot update '{}': {}", self.key, self.reason)
    }
}

impl std::error::Error for UpdateError {}

/// A decoded `Settings` value that breaks a structural invariant.
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidSettings {
    /// Gradient list length outside `MIN_GRADIENT_COLORS..=MAX_GRADIENT_COLORS`.
    GradientLength(usize),
    /// Negative or non-finite size, spacing or radius.
    Geometry { field: &'static str, value: f64 },
    LetterSpacing(f64),
}

impl std::fmt::Display for InvalidSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GradientLength(len) => write!(
                f,
                "gradientColors has {} entries, expected {}..={}",
                len, MIN_GRADIENT_COLORS, MAX_GRADIENT_COLORS
            ),
            Self::Geometry { field, value } => {
                write!(f, "{field} must be a non-negative number, got {value}")
            }
            Self::LetterSpacing(value) => write!(f, "letterSpacing must be finite, got {value}"),
        }
    }
}

impl std::error::Error for InvalidSettings {}
