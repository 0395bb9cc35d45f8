use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::patterns::{describe, PatternCategory};
use crate::{Preset, PresetSettings, Result};

pub fn render_text(preset: &Preset) -> String {
    let mut text = preset.formatted_lines().join("\n");
    text.push('\n');
    text
}

/// Grid form of the preset: twelve level cells followed by ten slot cells,
/// each separated by a blank line.
pub fn render_board(preset: &Preset) -> String {
    let mut text = String::from("LEVELS:\n");
    for cell in preset.level_cells() {
        text.push_str(&cell);
        text.push_str("\n\n");
    }
    text.push_str("SEED SLOTS:\n");
    for cell in preset.slot_cells() {
        text.push_str(&cell);
        text.push_str("\n\n");
    }
    text
}

pub fn render_json(preset: &Preset) -> Result<String> {
    Ok(serde_json::to_string_pretty(preset)?)
}

/// Human readable account of a run, including the settings that produced
/// it and a description of every chosen pattern.
pub fn render_generation_log(settings: &PresetSettings, preset: &Preset) -> String {
    let mut log = format!("Preset seed: {}\n", settings.seed);
    log.push_str(&format!(
        "settings: level_count={}, endless={}, slot_count={}, pattern_per_level={}\n",
        settings.level_count, settings.endless, settings.slot_count, settings.pattern_per_level,
    ));

    if preset.is_endless() {
        log.push_str("levels: none (endless)\n");
    } else {
        log.push_str(&format!("levels: {}\n", preset.levels().len()));
    }

    for (i, level) in preset.levels().iter().enumerate() {
        log.push_str(&format!("  [{}] {}\n", i + 1, level));
        if let Some(pattern) = preset.patterns().get(i) {
            let category = PatternCategory::of(pattern)
                .map(PatternCategory::label)
                .unwrap_or("unknown");
            log.push_str(&format!("      pattern: {} ({})\n", pattern, category));
            log.push_str(&format!("      {}\n", describe(pattern)));
        }
    }

    log.push_str(&format!("seed slots: {}\n", preset.seed_slots().len()));
    for (i, plant) in preset.seed_slots().iter().enumerate() {
        log.push_str(&format!("  [{}] {}\n", i + 1, plant));
    }

    log
}

/// Writes the preset under `<output>/Preset_<seed>/`, creating directories as
/// needed. The generation log is only written in debug mode. Returns the
/// per-seed directory.
pub fn write_preset(output: &Path, settings: &PresetSettings, preset: &Preset) -> Result<PathBuf> {
    let out_root = output.join(format!("Preset_{}", settings.seed));
    if !out_root.exists() {
        fs::create_dir_all(&out_root)?;
    }

    fs::write(out_root.join("preset.txt"), render_text(preset))?;
    fs::write(out_root.join("preset.json"), render_json(preset)?)?;

    if settings.debug {
        fs::write(
            out_root.join("generation_log.txt"),
            render_generation_log(settings, preset),
        )?;
    }

    info!(path = %out_root.display(), "wrote preset");
    Ok(out_root)
}
