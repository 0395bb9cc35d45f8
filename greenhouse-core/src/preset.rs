use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::info;

use crate::levels::{LevelSelector, MAX_LEVELS};
use crate::patterns::PatternSelector;
use crate::seed_slots::{SeedSlotSelector, MAX_SLOTS, MIN_SLOTS};
use crate::Result;

/// Header line that separates the levels from the loadout in the flat form.
pub const SEED_SLOTS_HEADER: &str = "SEED SLOTS:";

const LEVEL_SALT: u64 = 0x1E7E_1000_u64;
const PATTERN_SALT: u64 = 0x9A77_E2B5_u64;
const SEED_SLOT_SALT: u64 = 0x5EED_5107_u64;
const PARAMS_SALT: u64 = 0xC0FF_EE00_u64;

/// One generated preset. `patterns[i]` belongs to `levels[i]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Preset {
    levels: Vec<String>,
    patterns: Vec<String>,
    seed_slots: Vec<String>,
}

impl Preset {
    pub fn levels(&self) -> &[String] {
        &self.levels
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn seed_slots(&self) -> &[String] {
        &self.seed_slots
    }

    pub fn is_endless(&self) -> bool {
        self.levels.is_empty()
    }

    /// Flat display form: each level, its pattern and a blank spacer, then
    /// the seed slot header and one line per slot.
    pub fn formatted_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.levels.len() * 3 + self.seed_slots.len() + 1);

        for (i, level) in self.levels.iter().enumerate() {
            lines.push(level.clone());
            if let Some(pattern) = self.patterns.get(i) {
                lines.push(pattern.clone());
            }
            lines.push(String::new());
        }

        lines.push(SEED_SLOTS_HEADER.to_string());
        lines.extend(self.seed_slots.iter().cloned());
        lines
    }

    /// The twelve level cells of the board view. Unused cells are labelled
    /// as placeholders.
    pub fn level_cells(&self) -> Vec<String> {
        (0..MAX_LEVELS)
            .map(|i| match self.levels.get(i) {
                Some(level) => match self.patterns.get(i) {
                    Some(pattern) => format!("{level}\nPattern: {pattern}"),
                    None => level.clone(),
                },
                None => format!("Level {}\n[No level generated]", i + 1),
            })
            .collect()
    }

    /// The ten seed slot cells of the board view.
    pub fn slot_cells(&self) -> Vec<String> {
        (0..MAX_SLOTS)
            .map(|i| match self.seed_slots.get(i) {
                Some(plant) => format!("Seed Slot {}\n{plant}", i + 1),
                None => format!("Seed Slot {} (empty)", i + 1),
            })
            .collect()
    }
}

/// The four inputs of [`PresetComposer::generate_preset`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PresetParams {
    pub level_count: usize,
    pub produce_levels: bool,
    pub slot_count: usize,
    pub pattern_per_level: bool,
}

/// Wires the three selectors together. Every selector owns its own random
/// source, and a fourth source is used to pick parameters for
/// [`PresetComposer::generate_random_preset`].
pub struct PresetComposer<R: Rng = StdRng> {
    levels: LevelSelector<R>,
    patterns: PatternSelector<R>,
    seed_slots: SeedSlotSelector<R>,
    params_rng: R,
}

impl PresetComposer<StdRng> {
    /// Derives one independent stream per selector from `seed`, so the same
    /// seed always reproduces the same preset.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(
            StdRng::seed_from_u64(seed ^ LEVEL_SALT),
            StdRng::seed_from_u64(seed ^ PATTERN_SALT),
            StdRng::seed_from_u64(seed ^ SEED_SLOT_SALT),
            StdRng::seed_from_u64(seed ^ PARAMS_SALT),
        )
    }
}

impl<R: Rng> PresetComposer<R> {
    pub fn new(level_rng: R, pattern_rng: R, seed_slot_rng: R, params_rng: R) -> Self {
        Self {
            levels: LevelSelector::new(level_rng),
            patterns: PatternSelector::new(pattern_rng),
            seed_slots: SeedSlotSelector::new(seed_slot_rng),
            params_rng,
        }
    }

    /// Builds a preset. Fails only when `slot_count` is outside the allowed
    /// loadout range, in which case nothing is drawn.
    pub fn generate_preset(
        &mut self,
        level_count: usize,
        produce_levels: bool,
        slot_count: usize,
        pattern_per_level: bool,
    ) -> Result<Preset> {
        crate::seed_slots::validate_slot_count(slot_count)?;

        let (levels, patterns) = if produce_levels {
            let levels = self.levels.generate_levels(level_count, false);
            let patterns = if pattern_per_level {
                levels
                    .iter()
                    .map(|level| self.patterns.generate_pattern(level, false))
                    .collect()
            } else if let Some(first) = levels.first() {
                let shared = self.patterns.generate_pattern(first, true);
                vec![shared; levels.len()]
            } else {
                // No level to give the draw its pool context.
                Vec::new()
            };
            (levels, patterns)
        } else {
            (Vec::new(), Vec::new())
        };

        let seed_slots = self.seed_slots.generate_seed_slots(slot_count)?;

        info!(
            levels = levels.len(),
            pattern_per_level,
            seed_slots = seed_slots.len(),
            "composed preset"
        );

        Ok(Preset {
            levels,
            patterns,
            seed_slots,
        })
    }

    /// Draws the parameters used by
    /// [`PresetComposer::generate_random_preset`].
    pub fn random_params(&mut self) -> PresetParams {
        let produce_levels = self.params_rng.gen_bool(0.5);
        let level_count = if produce_levels {
            self.params_rng.gen_range(1..=MAX_LEVELS)
        } else {
            0
        };
        let slot_count = self.params_rng.gen_range(MIN_SLOTS..=MAX_SLOTS);
        let pattern_per_level = self.params_rng.gen_bool(0.5);

        PresetParams {
            level_count,
            produce_levels,
            slot_count,
            pattern_per_level,
        }
    }

    pub fn generate_with(&mut self, params: PresetParams) -> Result<Preset> {
        self.generate_preset(
            params.level_count,
            params.produce_levels,
            params.slot_count,
            params.pattern_per_level,
        )
    }

    /// Picks the four parameters at random and delegates to
    /// [`PresetComposer::generate_preset`].
    pub fn generate_random_preset(&mut self) -> Result<Preset> {
        let params = self.random_params();
        self.generate_with(params)
    }
}
