//! Recompute entry point
//!
//! Call `present` after every committed settings change. The result is
//! consumed by the renderer and discarded; nothing here is cached.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::animation::{plan, AnimationPlan};
use crate::model::Settings;
use crate::resolve::{resolve, StyleDescriptor};

/// Style, animation plan and content for one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Presentation {
    pub text: String,
    pub style: StyleDescriptor,
    pub plan: AnimationPlan,
    /// Changes whenever any setting changes; a new key means a fresh mount
    /// and the entrance plays again from its initial state.
    pub mount_key: u64,
}

pub fn present(settings: &Settings) -> Presentation {
    Presentation {
        text: settings.text.clone(),
        style: resolve(settings),
        plan: plan(settings.animation_type, &settings.text, settings.hover_effect),
        mount_key: mount_key(settings),
    }
}

/// Identity of a settings snapshot, derived from its encoded form.
pub fn mount_key(settings: &Settings) -> u64 {
    let encoded = serde_json::to_string(settings).unwrap_or_default();
    let mut hasher = DefaultHasher::new();
    encoded.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::Entrance;
    use crate::model::{AnimationType, SettingUpdate};

    #[test]
    fn present_is_deterministic() {
        let s = Settings::default().with(SettingUpdate::AnimationType(AnimationType::PerLetter));
        assert_eq!(present(&s), present(&s));
    }

    #[test]
    fn any_change_remounts() {
        let a = Settings::default();
        let b = a.with(SettingUpdate::LetterSpacing(1.0));
        let c = b.with(SettingUpdate::LetterSpacing(0.0));

        assert_ne!(mount_key(&a), mount_key(&b));
        assert_eq!(mount_key(&a), mount_key(&c));
    }

    #[test]
    fn plan_uses_current_text() {
        let s = Settings::default()
            .with(SettingUpdate::Text("Hi".into()))
            .with(SettingUpdate::AnimationType(AnimationType::PerLetter));
        let p = present(&s);
        assert_eq!(p.text, "Hi");
        assert!(matches!(p.plan.entrance, Entrance::PerCharacter { ref letters } if letters.len() == 2));
        assert!(p.plan.hover.is_some());
    }
}
