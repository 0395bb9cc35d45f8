use rand::Rng;
use tracing::debug;

use crate::{PresetError, Result};

pub const MIN_SLOTS: usize = 6;
pub const MAX_SLOTS: usize = 10;

pub const PLANT_LIST: &[&str] = &[
    "Peashooter",
    "Sunflower",
    "Cherry Bomb",
    "Wall-nut",
    "Potato Mine",
    "Snow Pea",
    "Chomper",
    "Repeater",
    "Puff-shroom",
    "Sun-shroom",
    "Fume-shroom",
    "Grave Buster",
    "Hypno-shroom",
    "Scaredy-shroom",
    "Ice-shroom",
    "Doom-shroom",
    "Lily Pad",
    "Squash",
    "Threepeater",
    "Tangle Kelp",
    "Jalapeno",
    "Spikeweed",
    "Torchwood",
    "Tall-nut",
    "Sea-shroom",
    "Plantern",
    "Cactus",
    "Blover",
    "Split Pea",
    "Starfruit",
    "Pumpkin",
    "Magnet-shroom",
    "Cabbage-pult",
    "Flower Pot",
    "Kernel-pult",
    "Coffee Bean",
    "Garlic",
    "Umbrella Leaf",
    "Marigold",
    "Melon-pult",
    "Gatling Pea",
    "Twin Sunflower",
    "Gloom-shroom",
    "Cattail",
    "Winter Melon",
    "Gold Magnet",
    "Spikerock",
    "Cob Cannon",
    "Imitater",
];

pub fn all_plants() -> Vec<&'static str> {
    PLANT_LIST.to_vec()
}

pub fn validate_slot_count(slot_count: usize) -> Result<()> {
    if !(MIN_SLOTS..=MAX_SLOTS).contains(&slot_count) {
        return Err(PresetError::InvalidArgument(format!(
            "Number of seed slots must be between {MIN_SLOTS} and {MAX_SLOTS}, got {slot_count}"
        )));
    }
    Ok(())
}

/// Draws `count` entries from `catalog` without replacement. When the working
/// pool runs dry it is refilled with the whole catalog, after which repeats
/// become possible again.
pub fn draw_with_replenish<R: Rng>(
    catalog: &[&'static str],
    count: usize,
    rng: &mut R,
) -> Vec<String> {
    let mut picked = Vec::with_capacity(count);
    if catalog.is_empty() {
        return picked;
    }

    let mut available: Vec<&'static str> = catalog.to_vec();
    for _ in 0..count {
        if available.is_empty() {
            debug!(catalog_size = catalog.len(), "seed pool exhausted, refilling");
            available.extend_from_slice(catalog);
        }
        let idx = rng.gen_range(0..available.len());
        picked.push(available.swap_remove(idx).to_string());
    }
    picked
}

pub struct SeedSlotSelector<R: Rng> {
    rng: R,
}

impl<R: Rng> SeedSlotSelector<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn generate_seed_slots(&mut self, slot_count: usize) -> Result<Vec<String>> {
        validate_slot_count(slot_count)?;
        let slots = draw_with_replenish(PLANT_LIST, slot_count, &mut self.rng);
        debug!(?slots, "drew seed slots");
        Ok(slots)
    }
}
