//! Curated factory sets and their loading.

use crate::dex::{read_ron, Dex};
use crate::errors::{CatalogError, CatalogResult};
use schema::{Gender, Id, StatTable};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// Minimum number of distinct base species a pool needs to always fill a team.
pub const MIN_POOL_SPECIES: usize = 6;

/// One curated set. List-valued fields are alternatives; a value is sampled per build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorySet {
    pub species: String,
    #[serde(default)]
    pub name: Option<String>,
    pub item: Vec<Id>,
    pub ability: Vec<Id>,
    #[serde(default)]
    pub nature: Vec<Id>,
    /// Move slots; each slot lists its interchangeable variants.
    pub moves: Vec<Vec<Id>>,
    #[serde(default)]
    pub evs: Option<StatTable>,
    #[serde(default)]
    pub ivs: Option<StatTable>,
    #[serde(default)]
    pub level: Option<u8>,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub shiny: bool,
    #[serde(default)]
    pub happiness: Option<u8>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeciesFlags {
    /// Every set of this species holds a mega stone.
    pub mega_only: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorySpecies {
    #[serde(default)]
    pub flags: SpeciesFlags,
    pub sets: Vec<FactorySet>,
}

/// Set pools keyed by tier name (`"OU"`, `"Uber"`, `"Mono"`, ...), then by species.
///
/// The doubles file uses the same shape with a single tier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FactoryPools {
    pub tiers: BTreeMap<String, BTreeMap<Id, FactorySpecies>>,
}

impl FactoryPools {
    /// Load a factory set file from the data directory and validate it against the catalog.
    pub fn load(data_path: &Path, file_name: &str, dex: &Dex) -> CatalogResult<Self> {
        let pools: FactoryPools = read_ron(&data_path.join(file_name))?;
        pools.validate(dex)?;
        tracing::debug!(tiers = pools.tiers.len(), "loaded factory sets from {}", file_name);
        Ok(pools)
    }

    /// Every species must exist and carry at least one set, every set must use
    /// known ids, and every tier must offer enough distinct base species for
    /// the species clause.
    pub fn validate(&self, dex: &Dex) -> CatalogResult<()> {
        if self.tiers.is_empty() {
            return Err(CatalogError::EmptyFactorySets);
        }
        for (tier, species_pool) in &self.tiers {
            let mut bases: BTreeSet<Id> = BTreeSet::new();
            for (id, entry) in species_pool {
                let species = dex.species(id).ok_or_else(|| CatalogError::DanglingReference {
                    owner: Id::from(tier.as_str()),
                    kind: "species",
                    id: id.clone(),
                })?;
                if entry.sets.is_empty() {
                    return Err(CatalogError::FactorySpeciesWithoutSets {
                        pool: tier.clone(),
                        species: id.clone(),
                    });
                }
                bases.insert(species.base_species_id());

                for set in &entry.sets {
                    for item in &set.item {
                        if dex.item(item).is_none() {
                            return Err(dangling(id, "item", item));
                        }
                    }
                    for ability in &set.ability {
                        if dex.ability(ability).is_none() {
                            return Err(dangling(id, "ability", ability));
                        }
                    }
                    for move_ in set.moves.iter().flatten() {
                        if dex.move_data(move_).is_none() {
                            return Err(dangling(id, "move", move_));
                        }
                    }
                }
            }
            if bases.len() < MIN_POOL_SPECIES {
                return Err(CatalogError::FactoryPoolTooSmall {
                    pool: tier.clone(),
                    found: bases.len(),
                });
            }
        }
        Ok(())
    }

    pub fn tier(&self, name: &str) -> Option<&BTreeMap<Id, FactorySpecies>> {
        self.tiers.get(name)
    }

    pub fn tier_names(&self) -> Vec<&str> {
        self.tiers.keys().map(|t| t.as_str()).collect()
    }
}

fn dangling(owner: &Id, kind: &'static str, id: &Id) -> CatalogError {
    CatalogError::DanglingReference {
        owner: owner.clone(),
        kind,
        id: id.clone(),
    }
}
