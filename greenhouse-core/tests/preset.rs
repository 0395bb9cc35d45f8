use std::collections::HashSet;
use std::fs;

use greenhouse_core::export::{render_generation_log, write_preset};
use greenhouse_core::patterns::is_pool_level;
use greenhouse_core::{
    all_pattern_names, generate, generate_random, PatternCategory, PresetComposer, PresetError,
    PresetSettings,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::tempdir;

#[test]
fn per_level_patterns_match_level_count() {
    let mut composer = PresetComposer::from_seed(0x1234_5678);
    let preset = composer.generate_preset(5, true, 8, true).expect("valid parameters");
    assert_eq!(preset.levels().len(), 5);
    assert_eq!(preset.patterns().len(), 5);
    assert_eq!(preset.seed_slots().len(), 8);

    let catalog: HashSet<_> = all_pattern_names().into_iter().collect();
    for pattern in preset.patterns() {
        assert!(catalog.contains(pattern.as_str()), "{pattern}");
    }
}

#[test]
fn shared_pattern_is_replicated() {
    for seed in 0..50 {
        let mut composer = PresetComposer::from_seed(seed);
        let preset = composer.generate_preset(5, true, 8, false).expect("valid parameters");
        assert_eq!(preset.patterns().len(), 5);
        let first = &preset.patterns()[0];
        assert!(preset.patterns().iter().all(|p| p == first), "{:?}", preset.patterns());
    }
}

#[test]
fn endless_preset_has_only_seed_slots() {
    let mut composer = PresetComposer::from_seed(9);
    let preset = composer.generate_preset(0, false, 6, true).expect("valid parameters");
    assert!(preset.levels().is_empty());
    assert!(preset.patterns().is_empty());
    assert_eq!(preset.seed_slots().len(), 6);
}

#[test]
fn zero_levels_while_producing_levels_matches_endless() {
    let mut composer = PresetComposer::from_seed(10);
    for pattern_per_level in [true, false] {
        let preset = composer
            .generate_preset(0, true, 7, pattern_per_level)
            .expect("valid parameters");
        assert!(preset.levels().is_empty());
        assert!(preset.patterns().is_empty());
        assert_eq!(preset.seed_slots().len(), 7);
    }
}

#[test]
fn level_count_is_clamped() {
    let mut composer = PresetComposer::from_seed(11);
    let preset = composer.generate_preset(40, true, 10, true).expect("valid parameters");
    assert_eq!(preset.levels().len(), 12);
    assert_eq!(preset.patterns().len(), 12);
}

#[test]
fn slot_count_bounds_are_enforced() {
    let mut composer = PresetComposer::from_seed(12);
    for slots in [5, 11] {
        assert!(matches!(
            composer.generate_preset(3, true, slots, true),
            Err(PresetError::InvalidArgument(_))
        ));
    }
}

#[test]
fn same_seed_reproduces_the_preset() {
    let settings = PresetSettings {
        seed: 0xDEAD_BEEF,
        ..PresetSettings::default()
    };
    assert_eq!(
        generate(&settings).expect("valid settings"),
        generate(&settings).expect("valid settings")
    );
    assert_eq!(
        generate_random(3).expect("valid parameters"),
        generate_random(3).expect("valid parameters")
    );
}

#[test]
fn injected_sources_drive_each_selector() {
    let mut composer = PresetComposer::new(
        StdRng::seed_from_u64(1),
        StdRng::seed_from_u64(2),
        StdRng::seed_from_u64(3),
        StdRng::seed_from_u64(4),
    );
    let preset = composer.generate_preset(12, true, 10, true).expect("valid parameters");
    assert_eq!(preset.levels().len(), 12);
    assert_eq!(preset.seed_slots().len(), 10);
}

#[test]
fn settings_load_from_partial_json() {
    let settings = PresetSettings::from_json(r#"{ "seed": 7, "endless": true }"#)
        .expect("partial settings fill in defaults");
    assert_eq!(settings.seed, 7);
    assert!(settings.endless);
    assert_eq!(settings.slot_count, 8);
    assert_eq!(settings.level_count, 12);

    let bad = PresetSettings {
        slot_count: 4,
        ..settings
    };
    assert!(matches!(bad.validate(), Err(PresetError::InvalidArgument(_))));
    assert!(matches!(
        PresetSettings::from_json("{ not json"),
        Err(PresetError::Json(_))
    ));
}

#[test]
fn write_preset_lays_out_per_seed_folder() {
    let dir = tempdir().expect("temp dir");
    let settings = PresetSettings {
        seed: 31,
        debug: true,
        ..PresetSettings::default()
    };
    let preset = generate(&settings).expect("valid settings");

    let out = write_preset(dir.path(), &settings, &preset).expect("write succeeds");
    assert_eq!(out, dir.path().join("Preset_31"));

    let text = fs::read_to_string(out.join("preset.txt")).expect("text export");
    assert!(text.contains("SEED SLOTS:"));

    let json = fs::read_to_string(out.join("preset.json")).expect("json export");
    let parsed: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(parsed, serde_json::to_value(&preset).expect("preset serialises"));
    assert_eq!(parsed["levels"].as_array().map(Vec::len), Some(12));

    assert!(out.join("generation_log.txt").exists());
}

#[test]
fn generation_log_is_skipped_outside_debug() {
    let dir = tempdir().expect("temp dir");
    let settings = PresetSettings::default();
    let preset = generate(&settings).expect("valid settings");
    let out = write_preset(dir.path(), &settings, &preset).expect("write succeeds");
    assert!(out.join("preset.txt").exists());
    assert!(!out.join("generation_log.txt").exists());
}

fn is_water_pattern(pattern: &str) -> bool {
    matches!(
        PatternCategory::of(pattern),
        Some(PatternCategory::WaterSki | PatternCategory::InvertedWaterSki)
    )
}

#[test]
fn per_level_patterns_follow_their_own_level() {
    let mut water_on_pool = 0;
    for seed in 0..300 {
        let mut composer = PresetComposer::from_seed(seed);
        let preset = composer.generate_preset(12, true, 8, true).expect("valid parameters");
        for (level, pattern) in preset.levels().iter().zip(preset.patterns()) {
            if is_water_pattern(pattern) {
                assert!(is_pool_level(level), "seed {seed}: {pattern} drawn for {level}");
                water_on_pool += 1;
            }
        }
    }
    assert!(water_on_pool > 0, "pool levels never drew a water pattern");
}

#[test]
fn shared_pattern_takes_context_from_first_level() {
    let mut shared_water = 0;
    for seed in 0..500 {
        let mut composer = PresetComposer::from_seed(seed);
        let preset = composer.generate_preset(6, true, 8, false).expect("valid parameters");
        let first_level = &preset.levels()[0];
        let pattern = &preset.patterns()[0];
        if is_water_pattern(pattern) {
            assert!(is_pool_level(first_level), "seed {seed}: {pattern} shared from {first_level}");
            shared_water += 1;
        }
    }
    assert!(shared_water > 0, "a pool first level never shared a water pattern");
}

#[test]
fn random_run_reports_the_parameters_it_used() {
    for seed in 0..40 {
        let (settings, preset) = generate_random(seed).expect("valid parameters");
        assert_eq!(settings.seed, seed);
        assert_eq!(settings.endless, preset.is_endless());
        assert_eq!(settings.slot_count, preset.seed_slots().len());
        if !settings.endless {
            assert_eq!(settings.level_count, preset.levels().len());
        }
        if !settings.pattern_per_level {
            assert!(preset.patterns().windows(2).all(|w| w[0] == w[1]));
        }

        // The same settings regenerate the same preset.
        assert_eq!(generate(&settings).expect("valid settings"), preset);

        let log = render_generation_log(&settings, &preset);
        let expected = format!(
            "settings: level_count={}, endless={}, slot_count={}, pattern_per_level={}\n",
            preset.levels().len(),
            preset.is_endless(),
            preset.seed_slots().len(),
            settings.pattern_per_level,
        );
        assert!(log.contains(&expected), "seed {seed}: {log}");
    }
}

#[test]
fn settings_file_without_seed_draws_one() {
    let first = PresetSettings::from_json("{}").expect("empty settings");
    let second = PresetSettings::from_json("{}").expect("empty settings");
    assert_ne!(first.seed, second.seed);
    assert_eq!(first.level_count, 12);

    let pinned = PresetSettings::from_json(r#"{ "seed": 0 }"#).expect("seeded settings");
    assert_eq!(pinned.seed, 0);
}
