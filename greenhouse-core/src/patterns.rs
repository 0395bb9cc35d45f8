use rand::Rng;
use tracing::debug;

/// Chance that the inverted variants join the candidate pool.
pub const INVERTED_CHANCE: f64 = 0.20;
/// Chance that the inverted water ski variants join, for pool levels only.
pub const INVERTED_WATER_SKI_CHANCE: f64 = 0.20;
pub const ZOMBIE_CHEWER_CHANCE: f64 = 0.10;

pub const UNKNOWN_PATTERN_DESCRIPTION: &str = "Description not available for this pattern";

const POOL_MARKER: &str = "(Pool)";

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PatternCategory {
    Regular,
    Inverted,
    WaterSki,
    InvertedWaterSki,
    CornerSuns,
    ZombieChewer,
}

impl PatternCategory {
    pub const ALL: [PatternCategory; 6] = [
        PatternCategory::Regular,
        PatternCategory::Inverted,
        PatternCategory::WaterSki,
        PatternCategory::InvertedWaterSki,
        PatternCategory::CornerSuns,
        PatternCategory::ZombieChewer,
    ];

    pub fn names(self) -> &'static [&'static str] {
        match self {
            PatternCategory::Regular => &[
                "Classic",
                "SLS+DRS",
                "DSR",
                "DSR+3R",
                "CB",
                "Classic+LS",
                "Classic+ILS",
                "DSR+LS",
                "DSR+LS+3R",
                "DSR+ILS",
                "DSR+ILS+3R",
                "MR+Classic",
                "MR+DSR",
                "MR+DSR+3R",
            ],
            PatternCategory::Inverted => &["Inverted Classic", "Inverted DSR", "Inverted DSR+3R"],
            PatternCategory::WaterSki => &["Water Ski", "Water Ski DSR", "Water Ski DSR+3R"],
            PatternCategory::InvertedWaterSki => &[
                "Inverted Water Ski",
                "Inverted Water Ski DSR",
                "Inverted Water Ski DSR+3R",
            ],
            PatternCategory::CornerSuns => {
                &["Corner Suns S", "Corner Suns", "Corner Suns L", "Corner Suns XL"]
            }
            PatternCategory::ZombieChewer => &["Zombie Chewer", "Zombie Chewer Xtreme"],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PatternCategory::Regular => "Regular",
            PatternCategory::Inverted => "Inverted",
            PatternCategory::WaterSki => "Water Ski",
            PatternCategory::InvertedWaterSki => "Inverted Water Ski",
            PatternCategory::CornerSuns => "Corner Suns",
            PatternCategory::ZombieChewer => "Zombie Chewer",
        }
    }

    /// Category a pattern name belongs to, if it is in the catalog.
    pub fn of(name: &str) -> Option<PatternCategory> {
        PatternCategory::ALL
            .into_iter()
            .find(|category| category.names().contains(&name))
    }
}

/// All pattern names, category by category.
pub fn all_pattern_names() -> Vec<&'static str> {
    PatternCategory::ALL
        .iter()
        .flat_map(|category| category.names().iter().copied())
        .collect()
}

pub fn describe(name: &str) -> &'static str {
    match name {
        "Classic" => "One Row of sun producing plants (Sunflower, Sunshroom) and another in front of sun producing plants which are the defense. Classic also has five variants, Classic+LS is the landscape version of Classic, where sun producing plants are placed on the top sections only, defense goes in other sections below the sun producing plants, Classic+ILS is like Classic+LS, other than you place sun producing plants at the bottom section, instead of the top, other sections are defense, in Classic+LS and Classic+ILS, the last two rows are always for defense. Inverted Classic has you put Sunflowers at the end of the front yard/back yard instead of at the beginning of front yard/back yard, and MR+Classic have you put your sunflower in the middle row instead of the first row, it is preferrable to place the defense in front the sun producing plants",
        "SLS+DRS" => "Left side is just for sun producing plants, the other is for defense",
        "DSR" => "It is like Classic, other than we have two rows of sun producing plants, and we have other rows for defense, DSR+3R variant gives you the third row for defense, the MR+DSR and MR+DSR+3R variants have you put sunflowers in the middle row instead of the first row",
        "CB" => "Checkboard pattern where white squares are sun producing plants, black squares are defense",
        "Water Ski" => "Generated only when the level generated is a Pool Level, and we generate one pattern for every level, instead of one pattern for all, Water Ski has you put 3 Lily pads on water and sun producing plants on the first two lily pads and defense on the last lily pad, then you place more lily pads and defense on those lily pads, Water Ski also has a DSR variant and also a Inverted variant too",
        "Corner Suns" => "You place sun producing plants on a 2x2 corners at the start of front yard/back yard of top and bottom sections only, the defense is always on the middle section and on last two rows, it has 3 variants, Corner Suns S is 1x2 corners instead, Corner Suns L is 3x2 corners instead and Corner Suns XL is 4x2 corners instead",
        "Zombie Chewer" => "For every All-Star Zombie, you have 3 seconds to place a sun producing plant in front of a zombie, the Xtreme variant allows you to place any plant in front of a zombie",
        "Inverted Classic" | "Inverted DSR" | "Inverted DSR+3R" => {
            "Inverted pattern with lower chance to generate than regular patterns"
        }
        "Water Ski DSR" | "Water Ski DSR+3R" => "DSR variant of Water Ski pattern for Pool levels",
        "Inverted Water Ski" | "Inverted Water Ski DSR" | "Inverted Water Ski DSR+3R" => {
            "Inverted Water Ski patterns for Pool levels with lower chance to generate"
        }
        "Classic+LS" | "Classic+ILS" => "Landscape variants of Classic pattern",
        "DSR+3R" | "DSR+LS" | "DSR+LS+3R" | "DSR+ILS" | "DSR+ILS+3R" => {
            "DSR variants with additional rows or layouts"
        }
        "MR+Classic" | "MR+DSR" | "MR+DSR+3R" => "Middle Row variants of Classic and DSR patterns",
        "Corner Suns S" | "Corner Suns L" | "Corner Suns XL" => {
            "Corner Suns pattern variants with different corner sizes"
        }
        "Zombie Chewer Xtreme" => {
            "Extreme variant of Zombie Chewer that allows placing any plant in front of zombies"
        }
        _ => UNKNOWN_PATTERN_DESCRIPTION,
    }
}

pub fn is_pool_level(level: &str) -> bool {
    level.contains(POOL_MARKER)
}

/// Outcome of the optional-category rolls for one pattern draw.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct PoolGates {
    pub inverted: bool,
    pub inverted_water_ski: bool,
    pub zombie_chewer: bool,
}

impl PoolGates {
    /// Rolls each gate independently. The inverted water ski gate is only
    /// rolled for pool levels and stays closed otherwise.
    pub fn roll<R: Rng>(rng: &mut R, is_pool: bool) -> Self {
        let inverted = rng.gen_bool(INVERTED_CHANCE);
        let inverted_water_ski = is_pool && rng.gen_bool(INVERTED_WATER_SKI_CHANCE);
        let zombie_chewer = rng.gen_bool(ZOMBIE_CHEWER_CHANCE);
        Self {
            inverted,
            inverted_water_ski,
            zombie_chewer,
        }
    }
}

/// Builds the candidate list for one draw. Regular and corner suns patterns
/// are always present, so the result is never empty.
pub fn candidate_pool(is_pool: bool, gates: PoolGates) -> Vec<&'static str> {
    let mut pool = Vec::new();

    pool.extend_from_slice(PatternCategory::Regular.names());

    if gates.inverted {
        pool.extend_from_slice(PatternCategory::Inverted.names());
    }

    if is_pool {
        pool.extend_from_slice(PatternCategory::WaterSki.names());
        if gates.inverted_water_ski {
            pool.extend_from_slice(PatternCategory::InvertedWaterSki.names());
        }
    }

    pool.extend_from_slice(PatternCategory::CornerSuns.names());

    if gates.zombie_chewer {
        pool.extend_from_slice(PatternCategory::ZombieChewer.names());
    }

    pool
}

pub struct PatternSelector<R: Rng> {
    rng: R,
}

impl<R: Rng> PatternSelector<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draws one pattern for `level`. `shared_across_levels` only records the
    /// caller's intent; whether one draw is reused is the caller's decision.
    pub fn generate_pattern(&mut self, level: &str, shared_across_levels: bool) -> String {
        let is_pool = is_pool_level(level);
        let gates = PoolGates::roll(&mut self.rng, is_pool);
        let pool = candidate_pool(is_pool, gates);

        let idx = self.rng.gen_range(0..pool.len());
        let pattern = pool[idx];
        debug!(
            level,
            shared_across_levels,
            ?gates,
            pool_size = pool.len(),
            pattern,
            "drew pattern"
        );
        pattern.to_string()
    }
}
