//! Entrance animation plans
//!
//! `plan` turns the animation fields of a settings snapshot into declarative
//! timing parameters. Nothing here drives a clock; the renderer plays the
//! plan. Times are in seconds.

use serde::Serialize;

use crate::model::AnimationType;

/// Duration of the whole-text entrance modes.
pub const ENTRANCE_DURATION: f64 = 0.8;

/// Vertical start offset of `slide-up`.
pub const SLIDE_UP_OFFSET: f64 = 50.0;

/// Start scale and spring bounce of `bounce`.
pub const BOUNCE_START_SCALE: f64 = 0.5;
pub const BOUNCE_FACTOR: f64 = 0.4;

/// Per-letter timing.
pub const LETTER_DURATION: f64 = 0.5;
pub const LETTER_STAGGER: f64 = 0.05;
pub const LETTER_OFFSET: f64 = 20.0;

/// Hover affordance.
pub const HOVER_SCALE: f64 = 1.05;
pub const HOVER_DURATION: f64 = 0.3;

/// Spaces are emitted as this glyph so they keep their layout width.
pub const NBSP: char = '\u{00A0}';

/// Visual properties an entrance interpolates between.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualState {
    pub opacity: f64,
    /// Vertical offset, positive is down
    pub offset_y: f64,
    pub scale: f64,
}

impl VisualState {
    /// Fully visible, in place, natural size.
    pub const RESTING: VisualState = VisualState {
        opacity: 1.0,
        offset_y: 0.0,
        scale: 1.0,
    };

    const fn hidden() -> Self {
        VisualState {
            opacity: 0.0,
            ..Self::RESTING
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Easing {
    /// Renderer's default tween curve
    Default,
    /// Spring with overshoot
    Spring { bounce: f64 },
}

/// One entrance: interpolate `from` -> `to` over `duration` after `delay`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transition {
    pub from: VisualState,
    pub to: VisualState,
    pub duration: f64,
    pub delay: f64,
    pub easing: Easing,
}

impl Transition {
    /// Time at which this transition reaches its final state.
    pub fn end(&self) -> f64 {
        self.delay + self.duration
    }
}

/// Entrance for one character of a per-letter plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LetterEntrance {
    pub index: usize,
    /// Displayed glyph (space replaced by NBSP)
    pub glyph: char,
    pub transition: Transition,
}

/// How the text node enters
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Entrance {
    /// Shown at its final state immediately
    None,
    /// One transition for the whole node
    Single(Transition),
    /// One transition per character, staggered
    PerCharacter { letters: Vec<LetterEntrance> },
}

/// Scale-up applied while the pointer hovers. Independent of the entrance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HoverEffect {
    pub scale: f64,
    pub duration: f64,
}

impl Default for HoverEffect {
    fn default() -> Self {
        Self {
            scale: HOVER_SCALE,
            duration: HOVER_DURATION,
        }
    }
}

/// Everything the renderer needs to animate one mount of the headline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnimationPlan {
    pub entrance: Entrance,
    /// Composes with any entrance; both may be active at once
    pub hover: Option<HoverEffect>,
}

impl AnimationPlan {
    /// Wall-clock span of the entrance, from mount to last final state.
    pub fn total_duration(&self) -> f64 {
        match &self.entrance {
            Entrance::None => 0.0,
            Entrance::Single(t) => t.end(),
            Entrance::PerCharacter { letters } => letters
                .iter()
                .map(|l| l.transition.end())
                .fold(0.0, f64::max),
        }
    }
}

/// Build the animation plan for one settings snapshot. Total and pure.
pub fn plan(animation: AnimationType, text: &str, hover_effect: bool) -> AnimationPlan {
    let entrance = match animation {
        AnimationType::None => Entrance::None,
        AnimationType::FadeIn => Entrance::Single(Transition {
            from: VisualState::hidden(),
            to: VisualState::RESTING,
            duration: ENTRANCE_DURATION,
            delay: 0.0,
            easing: Easing::Default,
        }),
        AnimationType::SlideUp => Entrance::Single(Transition {
            from: VisualState {
                offset_y: SLIDE_UP_OFFSET,
                ..VisualState::hidden()
            },
            to: VisualState::RESTING,
            duration: ENTRANCE_DURATION,
            delay: 0.0,
            easing: Easing::Default,
        }),
        AnimationType::Bounce => Entrance::Single(Transition {
            from: VisualState {
                scale: BOUNCE_START_SCALE,
                ..VisualState::hidden()
            },
            to: VisualState::RESTING,
            duration: ENTRANCE_DURATION,
            delay: 0.0,
            easing: Easing::Spring {
                bounce: BOUNCE_FACTOR,
            },
        }),
        AnimationType::PerLetter => Entrance::PerCharacter {
            letters: letters(text),
        },
    };

    AnimationPlan {
        entrance,
        hover: hover_effect.then(HoverEffect::default),
    }
}

fn letters(text: &str) -> Vec<LetterEntrance> {
    text.chars()
        .enumerate()
        .map(|(index, ch)| LetterEntrance {
            index,
            glyph: if ch == ' ' { NBSP } else { ch },
            transition: Transition {
                from: VisualState {
                    offset_y: LETTER_OFFSET,
                    ..VisualState::hidden()
                },
                to: VisualState::RESTING,
                duration: LETTER_DURATION,
                delay: index as f64 * LETTER_STAGGER,
                easing: Easing::Default,
            },
        })
        .collect()
}
