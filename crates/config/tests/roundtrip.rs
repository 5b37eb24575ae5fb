// Property-based tests for the settings codec and store write-through.
// CI: 256 cases (default). Soak: PROPTEST_CASES=10000 cargo test --release

use headline_config::*;
use headline_engine::model::{MAX_GRADIENT_COLORS, MIN_GRADIENT_COLORS};
use headline_engine::{AnimationType, GradientDirection, SettingUpdate, Settings, TextAlign};
use proptest::prelude::*;

fn config_256() -> ProptestConfig {
    ProptestConfig {
        cases: std::env::var("PROPTEST_CASES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(256),
        failure_persistence: None,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Generators
// ---------------------------------------------------------------------------

fn arb_color() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => "#[0-9a-f]{6}",
        1 => "\\PC{0,8}",
    ]
}

fn arb_settings() -> impl Strategy<Value = Settings> {
    let text = (
        "\\PC{0,30}",
        "[A-Za-z ,-]{1,30}",
        prop_oneof![Just("300"), Just("400"), Just("700"), Just("900")],
        0.0..500.0f64,
        0.0..4.0f64,
        -20.0..20.0f64,
        prop_oneof![Just(TextAlign::Left), Just(TextAlign::Center), Just(TextAlign::Right)],
        arb_color(),
    );
    let gradient = (
        any::<bool>(),
        prop_oneof![
            Just(GradientDirection::ToR),
            Just(GradientDirection::ToT),
            Just(GradientDirection::ToBr),
            Just(GradientDirection::ToBl),
        ],
        prop::collection::vec(arb_color(), MIN_GRADIENT_COLORS..=MAX_GRADIENT_COLORS),
        any::<bool>(),
    );
    let rest = (
        any::<[bool; 5]>(),
        arb_color(),
        arb_color(),
        arb_color(),
        0.0..120.0f64,
        0.0..64.0f64,
        prop_oneof![
            Just(AnimationType::None),
            Just(AnimationType::FadeIn),
            Just(AnimationType::SlideUp),
            Just(AnimationType::Bounce),
            Just(AnimationType::PerLetter),
        ],
    );

    (text, gradient, rest).prop_map(
        |(
            (text, font_family, weight, font_size, line_height, letter_spacing, text_align, text_color),
            (use_gradient, gradient_direction, gradient_colors, gradient_animate),
            (flags, shadow_color, outline_color, background_color, padding, border_radius, animation_type),
        )| Settings {
            text,
            font_size,
            font_family,
            font_weight: weight.to_string(),
            line_height,
            letter_spacing,
            text_align,
            text_color,
            use_gradient,
            gradient_direction,
            gradient_colors,
            gradient_animate,
            text_shadow: flags[0],
            text_glow: flags[1],
            text_outline: flags[2],
            outline_color,
            shadow_color,
            background_color,
            use_background: flags[3],
            padding,
            border_radius,
            animation_type,
            hover_effect: flags[4],
        },
    )
}

fn arb_update() -> impl Strategy<Value = SettingUpdate> {
    prop_oneof![
        (0.0..300.0f64).prop_map(SettingUpdate::FontSize),
        "[a-z ]{0,12}".prop_map(SettingUpdate::Text),
        any::<bool>().prop_map(SettingUpdate::UseGradient),
        any::<bool>().prop_map(SettingUpdate::TextGlow),
        arb_color().prop_map(SettingUpdate::TextColor),
    ]
}

/// One step of the editor/preview interleaving.
#[derive(Debug, Clone)]
enum Step {
    Edit(SettingUpdate),
    AddColor,
    RemoveColor(usize),
    Reset,
    /// A write from the other view on the same key
    Preview(SettingUpdate),
}

fn arb_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        3 => arb_update().prop_map(Step::Edit),
        1 => Just(Step::AddColor),
        1 => (0usize..6).prop_map(Step::RemoveColor),
        1 => Just(Step::Reset),
        3 => arb_update().prop_map(Step::Preview),
    ]
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(config_256())]

    #[test]
    fn codec_roundtrip(s in arb_settings()) {
        let json = serialize_settings(&s).unwrap();
        let parsed = deserialize_settings(&json).unwrap();
        prop_assert_eq!(parsed, s);
    }

    #[test]
    fn backend_always_holds_last_mutation(
        s in arb_settings(),
        steps in prop::collection::vec(arb_step(), 1..30),
    ) {
        let backend = MemoryStore::new();
        save_settings(&backend, &s).unwrap();
        let mut editor = SettingsStore::initialize(backend.clone());
        let mut preview = SettingsStore::initialize(backend.clone());
        prop_assert_eq!(editor.settings(), &s);

        for step in steps {
            let before = editor.settings().gradient_colors.len();
            let wrote = match step {
                Step::Edit(update) => {
                    editor.update(update);
                    true
                }
                Step::AddColor => editor.add_gradient_color().gradient_colors.len() != before,
                Step::RemoveColor(index) => editor.remove_gradient_color(index).gradient_colors.len() != before,
                Step::Reset => {
                    editor.reset();
                    true
                }
                Step::Preview(update) => {
                    preview.update(update);
                    prop_assert_eq!(&load_settings(&backend), preview.settings());
                    continue;
                }
            };
            if wrote {
                prop_assert_eq!(&load_settings(&backend), editor.settings());
            }
        }
    }
}

#[test]
fn file_backed_views_converge() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let mut editor = SettingsStore::initialize(FileStore::at(temp_dir.path()));
    let mut preview = SettingsStore::initialize(FileStore::at(temp_dir.path()));

    editor.update(SettingUpdate::Text("Shared".into()));
    editor.apply_gradient_preset(&["#059669", "#10b981", "#34d399"]);

    assert!(preview.reload());
    assert_eq!(preview.settings().text, "Shared");
    assert_eq!(preview.settings().gradient_colors.len(), 3);
}

#[test]
fn corrupted_file_falls_back_to_defaults() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let backend = FileStore::at(temp_dir.path());
    backend.set(SETTINGS_KEY, "\u{0}\u{1}garbage").unwrap();

    let store = SettingsStore::initialize(backend);
    assert_eq!(store.settings(), &Settings::default());
}
