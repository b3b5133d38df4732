// In: src/lib.rs

//! Random Teams
//!
//! Procedural team assembly for random battle formats: rule-driven sets built
//! from curated move pools, curated factory sets with team-level quality
//! checks, and the older anything-legal cups. Every build is driven by a
//! caller-owned seeded stream, so the same seed and catalog give the same team.

// --- MODULE DECLARATIONS ---
// This declares the module hierarchy for the crate.
pub mod dex;
pub mod errors;
pub mod factory;
pub mod format;
pub mod generator;
pub mod prng;
pub mod random;
pub mod sets;
pub mod stats;

#[cfg(test)]
mod tests;

// --- PUBLIC API RE-EXPORTS ---
// This section defines the public-facing API of the `random-teams` crate,
// making it easy for users to import the most important types directly.

// --- From the `schema` crate ---
// Re-export the catalog records the generator reads.
pub use schema::{
    AbilityData, BaseStats, Gender, Id, ItemData, Learnset, MoveCategory, MoveData, NatureData,
    PokemonType, SpeciesData, StatTable, Tier,
};

// --- From this crate's modules (`src/`) ---

// Catalog and format configuration.
pub use dex::{Dex, DexData};
pub use format::{find_format, load_formats, Format, GameType, GeneratorOptions, Rule, TeamKind};

// Team generation.
pub use factory::FactoryPools;
pub use generator::Generator;
pub use prng::{RandomSource, SeededRng};
pub use sets::{CreatureSet, TeamDetails};

// Crate-specific error and result types.
pub use errors::{CatalogError, CatalogResult, TeamGenError, TeamGenResult};
