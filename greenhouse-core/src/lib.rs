use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod export;
pub mod levels;
pub mod patterns;
pub mod preset;
pub mod seed_slots;

pub use levels::{all_possible_levels, LevelId, LevelSelector, World};
pub use patterns::{all_pattern_names, describe, PatternCategory, PatternSelector};
pub use preset::{Preset, PresetComposer, PresetParams};
pub use seed_slots::{all_plants, SeedSlotSelector};

#[derive(Debug, Error)]
pub enum PresetError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PresetError>;

/// Caller-facing generation settings. Defaults match the desktop tool: a
/// full run of twelve levels, one pattern per level and eight seed slots.
/// A settings file without a `seed` gets a fresh random one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresetSettings {
    #[serde(default = "random_seed")]
    pub seed: u64,
    pub level_count: usize,
    pub endless: bool,
    pub slot_count: usize,
    pub pattern_per_level: bool,
    pub debug: bool,
}

impl Default for PresetSettings {
    fn default() -> Self {
        Self {
            seed: 0,
            level_count: levels::MAX_LEVELS,
            endless: false,
            slot_count: 8,
            pattern_per_level: true,
            debug: false,
        }
    }
}

pub fn random_seed() -> u64 {
    rand::thread_rng().gen::<u64>()
}

impl PresetSettings {
    /// Settings describing a run with the given parameters.
    pub fn from_params(seed: u64, params: PresetParams) -> Self {
        Self {
            seed,
            level_count: params.level_count,
            endless: !params.produce_levels,
            slot_count: params.slot_count,
            pattern_per_level: params.pattern_per_level,
            debug: false,
        }
    }

    pub fn from_json(data: &str) -> Result<Self> {
        Ok(serde_json::from_str(data)?)
    }

    pub fn validate(&self) -> Result<()> {
        seed_slots::validate_slot_count(self.slot_count)
    }
}

/// Generates the preset described by `settings`. The same settings always
/// yield the same preset.
pub fn generate(settings: &PresetSettings) -> Result<Preset> {
    settings.validate()?;
    let mut composer = PresetComposer::from_seed(settings.seed);
    composer.generate_preset(
        settings.level_count,
        !settings.endless,
        settings.slot_count,
        settings.pattern_per_level,
    )
}

/// Generates a preset whose parameters are themselves drawn from `seed`.
/// Returns the settings that were actually used alongside the preset.
pub fn generate_random(seed: u64) -> Result<(PresetSettings, Preset)> {
    let mut composer = PresetComposer::from_seed(seed);
    let params = composer.random_params();
    let preset = composer.generate_with(params)?;
    Ok((PresetSettings::from_params(seed, params), preset))
}
