use rand::Rng;
use std::fmt;
use tracing::debug;

/// Hard ceiling on the number of playable level slots in one preset.
pub const MAX_LEVELS: usize = 12;

pub const STAGES_PER_WORLD: u8 = 10;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum World {
    Day,
    Night,
    Pool,
    Fog,
    Roof,
}

impl World {
    pub const ALL: [World; 5] = [World::Day, World::Night, World::Pool, World::Fog, World::Roof];

    /// 1-based world number as shown in level names.
    pub fn index(self) -> u8 {
        match self {
            World::Day => 1,
            World::Night => 2,
            World::Pool => 3,
            World::Fog => 4,
            World::Roof => 5,
        }
    }

    pub fn from_index(index: u8) -> Option<World> {
        match index {
            1 => Some(World::Day),
            2 => Some(World::Night),
            3 => Some(World::Pool),
            4 => Some(World::Fog),
            5 => Some(World::Roof),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            World::Day => "Day",
            World::Night => "Night",
            World::Pool => "Pool",
            World::Fog => "Fog",
            World::Roof => "Roof",
        }
    }
}

/// A world/stage pair. Renders as `"3-7 (Pool)"`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct LevelId {
    pub world: World,
    pub stage: u8,
}

impl LevelId {
    pub fn new(world: World, stage: u8) -> Self {
        Self { world, stage }
    }

    pub fn is_pool(&self) -> bool {
        self.world == World::Pool
    }
}

impl fmt::Display for LevelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} ({})", self.world.index(), self.stage, self.world.name())
    }
}

/// Every level in the game, world ascending then stage ascending.
pub fn all_possible_levels() -> Vec<String> {
    let mut levels = Vec::with_capacity(World::ALL.len() * STAGES_PER_WORLD as usize);
    for world in World::ALL {
        for stage in 1..=STAGES_PER_WORLD {
            levels.push(LevelId::new(world, stage).to_string());
        }
    }
    levels
}

/// Draws level lists. Each draw is independent, so a list may repeat levels.
pub struct LevelSelector<R: Rng> {
    rng: R,
}

impl<R: Rng> LevelSelector<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Returns `min(count, MAX_LEVELS)` random levels, or nothing at all for
    /// endless modes.
    pub fn generate_levels(&mut self, count: usize, endless: bool) -> Vec<String> {
        if endless {
            return Vec::new();
        }

        let to_generate = count.min(MAX_LEVELS);
        let mut levels = Vec::with_capacity(to_generate);
        for _ in 0..to_generate {
            let level = self.random_level();
            debug!(%level, "drew level");
            levels.push(level.to_string());
        }
        levels
    }

    fn random_level(&mut self) -> LevelId {
        let world = World::ALL[self.rng.gen_range(0..World::ALL.len())];
        let stage = self.rng.gen_range(1..=STAGES_PER_WORLD);
        LevelId::new(world, stage)
    }
}
