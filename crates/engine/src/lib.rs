//! Headline style resolution and animation planning.
//!
//! Pure engine crate: takes a `Settings` snapshot, returns render-ready
//! descriptors. No IO and no persistence; see `headline-config` for the
//! settings store.

pub mod animation;
pub mod css;
pub mod model;
pub mod presentation;
pub mod resolve;

pub use animation::{plan, AnimationPlan, Entrance, HoverEffect, Transition};
pub use model::{
    AnimationType, GradientDirection, InvalidSettings, SettingUpdate, Settings, TextAlign, UpdateError,
};
pub use presentation::{present, Presentation};
pub use resolve::{resolve, Fill, Overlay, Panel, StyleDescriptor};
