//! Command-line argument parsing for `cavern-gen`.

use std::path::PathBuf;

use cavern_common::{Ability, AbilitySet};
use cavern_worldgen::{BossPolicy, WorldGenConfig};
use clap::{Parser, ValueEnum};

/// Boss classification rule as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BossPolicyArg {
    /// Only the end of the critical path
    Terminal,
    /// Every deep critical-path room
    DeepRequired,
}

impl From<BossPolicyArg> for BossPolicy {
    fn from(arg: BossPolicyArg) -> Self {
        match arg {
            BossPolicyArg::Terminal => Self::Terminal,
            BossPolicyArg::DeepRequired => Self::DeepRequired,
        }
    }
}

/// World generator command-line arguments.
///
/// CLI values override settings loaded from `cavern.toml`.
#[derive(Parser, Debug)]
#[command(name = "cavern-gen", version, about = "Generate a Metroidvania world from a seed")]
pub struct CliArgs {
    /// World seed.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Path to a TOML config file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Grid width in room cells.
    #[arg(long)]
    pub width: Option<i32>,

    /// Grid height in room cells.
    #[arg(long)]
    pub height: Option<i32>,

    /// Target room count.
    #[arg(long)]
    pub rooms: Option<i32>,

    /// Number of biomes.
    #[arg(long)]
    pub biomes: Option<i32>,

    /// Number of shortcut edges.
    #[arg(long)]
    pub shortcuts: Option<i32>,

    /// Boss classification rule.
    #[arg(long, value_enum)]
    pub boss_policy: Option<BossPolicyArg>,

    /// Abilities the player holds, comma separated (e.g. dash,glide).
    #[arg(long, value_delimiter = ',')]
    pub abilities: Vec<Ability>,

    /// Print per-room traversal analysis.
    #[arg(long)]
    pub traversal: bool,

    /// Emit the whole world as JSON instead of a summary.
    #[arg(long)]
    pub json: bool,

    /// Write output to a file instead of stdout.
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Write the effective config to this path.
    #[arg(long)]
    pub save_config: Option<PathBuf>,
}

impl CliArgs {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_overrides(&self, config: &mut WorldGenConfig) {
        if let Some(w) = self.width {
            config.width = w;
        }
        if let Some(h) = self.height {
            config.height = h;
        }
        if let Some(rooms) = self.rooms {
            config.room_count = rooms;
        }
        if let Some(biomes) = self.biomes {
            config.biome_count = biomes;
        }
        if let Some(shortcuts) = self.shortcuts {
            config.shortcut_count = shortcuts;
        }
        if let Some(policy) = self.boss_policy {
            config.boss_policy = policy.into();
        }
    }

    /// Abilities given with `--abilities`.
    pub fn ability_set(&self) -> AbilitySet {
        self.abilities.iter().copied().collect()
    }
}
