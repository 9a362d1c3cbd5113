//! Biome catalog.
//!
//! A static table mapping biome names to environmental attributes. Named
//! biomes are identical for every seed; any other name falls back to a
//! generic biome whose palette is tinted by the seed.

use fastrand::Rng;
use serde::{Deserialize, Serialize};

/// RGB display color.
pub type Rgb = [u8; 3];

/// Named biomes in depth order. Worlds take a prefix of this list.
pub const KNOWN_BIOMES: [&str; 6] = ["forest", "cave", "ruins", "crystal", "abyss", "sky"];

/// Environmental attributes of one biome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Biome {
    /// Catalog name (`cave`, `ruins`, ...)
    pub name: String,
    /// Theme label for art and music selection
    pub theme: String,
    /// Temperature in degrees, -20..40
    pub temperature: i32,
    /// Moisture, 0..100
    pub moisture: u8,
    /// Danger level, loosely 1..10
    pub danger_level: u8,
    /// Ordered display palette
    pub colors: Vec<Rgb>,
    /// Enemy types that may spawn here
    pub enemy_types: Vec<String>,
    /// Hazard types that may appear here
    pub hazard_types: Vec<String>,
}

impl Biome {
    fn fixed(
        name: &str,
        theme: &str,
        climate: (i32, u8, u8),
        colors: &[Rgb],
        enemies: &[&str],
        hazards: &[&str],
    ) -> Self {
        let (temperature, moisture, danger_level) = climate;
        Self {
            name: name.to_string(),
            theme: theme.to_string(),
            temperature,
            moisture,
            danger_level,
            colors: colors.to_vec(),
            enemy_types: enemies.iter().map(|s| (*s).to_string()).collect(),
            hazard_types: hazards.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    /// Checks if this is one of the named catalog biomes.
    #[must_use]
    pub fn is_known(&self) -> bool {
        KNOWN_BIOMES.contains(&self.name.as_str())
    }
}

/// Looks up a biome by name.
///
/// Named biomes ignore `seed`. Unknown names produce the generic biome
/// (15°, moisture 50, danger 3) with a seed-dependent palette.
#[must_use]
pub fn generate(name: &str, seed: u64) -> Biome {
    match name {
        "forest" => Biome::fixed(
            name,
            "overgrown",
            (20, 70, 2),
            &[[34, 85, 34], [85, 130, 60], [140, 100, 60]],
            &["slime", "bat", "thornling"],
            &["spike", "thorns"],
        ),
        "cave" => Biome::fixed(
            name,
            "subterranean",
            (10, 80, 3),
            &[[60, 55, 50], [100, 90, 80], [30, 30, 40]],
            &["bat", "crawler", "mole"],
            &["spike", "falling_rock"],
        ),
        "ruins" => Biome::fixed(
            name,
            "ancient",
            (18, 40, 5),
            &[[150, 140, 110], [110, 100, 80], [70, 90, 70]],
            &["skeleton", "golem", "wraith"],
            &["spike", "electric"],
        ),
        "crystal" => Biome::fixed(
            name,
            "luminous",
            (5, 30, 6),
            &[[120, 200, 230], [180, 120, 220], [230, 230, 250]],
            &["shardling", "crystal_golem", "wisp"],
            &["electric", "spike"],
        ),
        "abyss" => Biome::fixed(
            name,
            "void",
            (-5, 60, 8),
            &[[20, 10, 30], [70, 20, 60], [200, 40, 40]],
            &["shade", "horror", "eel"],
            &["lava", "electric"],
        ),
        "sky" => Biome::fixed(
            name,
            "windswept",
            (0, 20, 4),
            &[[180, 210, 250], [250, 250, 255], [240, 200, 120]],
            &["harpy", "drone"],
            &["electric"],
        ),
        _ => generic(name, seed),
    }
}

fn generic(name: &str, seed: u64) -> Biome {
    let mut rng = Rng::with_seed(seed);
    let base: [Rgb; 3] = [[110, 110, 110], [90, 120, 90], [120, 90, 90]];
    let colors = base
        .iter()
        .map(|c| c.map(|channel| channel.saturating_add(rng.u8(..64))))
        .collect::<Vec<_>>();
    Biome::fixed(name, "neutral", (15, 50, 3), &colors, &["slime"], &["spike"])
}

/// Builds the ordered biome list for a world.
///
/// Takes the first `count` catalog names; past the catalog, extra generic
/// biomes named `biome_<n>` are appended.
#[must_use]
pub fn catalog(count: usize, seed: u64) -> Vec<Biome> {
    (0..count)
        .map(|i| match KNOWN_BIOMES.get(i) {
            Some(name) => generate(name, seed),
            None => generate(&format!("biome_{i}"), seed.wrapping_add(i as u64)),
        })
        .collect()
}

/// Maps a node depth onto the ordered biome list.
///
/// `depth * count / 20`, clamped to the last biome.
#[must_use]
pub fn index_for_depth(depth: u32, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    (depth as usize * count / 20).min(count - 1)
}
