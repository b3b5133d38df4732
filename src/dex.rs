//! The read-only catalog the generator draws from.
//!
//! Every table is a `BTreeMap` keyed by [`Id`]; iteration order is part of the
//! determinism contract, since species and move pools are built by walking
//! these tables.

use crate::errors::{CatalogError, CatalogResult};
use schema::{
    AbilityData, Id, ItemData, Learnset, MoveData, NatureData, PokemonType, SpeciesData,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Serialized form of a catalog, as stored in `dex.ron`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DexData {
    pub species: Vec<SpeciesData>,
    pub moves: Vec<MoveData>,
    pub abilities: Vec<AbilityData>,
    pub items: Vec<ItemData>,
    pub natures: Vec<NatureData>,
    pub learnsets: BTreeMap<Id, Learnset>,
}

#[derive(Debug, Clone, Default)]
pub struct Dex {
    species: BTreeMap<Id, SpeciesData>,
    moves: BTreeMap<Id, MoveData>,
    abilities: BTreeMap<Id, AbilityData>,
    items: BTreeMap<Id, ItemData>,
    natures: BTreeMap<Id, NatureData>,
    learnsets: BTreeMap<Id, Learnset>,
}

/// Read and parse a single RON file.
pub(crate) fn read_ron<T: DeserializeOwned>(path: &Path) -> CatalogResult<T> {
    let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    ron::from_str(&content).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

impl Dex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `dex.ron` from the data directory and validate its cross references.
    pub fn load(data_path: &Path) -> CatalogResult<Self> {
        let data: DexData = read_ron(&data_path.join("dex.ron"))?;
        let dex = Self::from_data(data)?;
        tracing::debug!(
            species = dex.species.len(),
            moves = dex.moves.len(),
            "loaded catalog from {}",
            data_path.display()
        );
        Ok(dex)
    }

    pub fn from_data(data: DexData) -> CatalogResult<Self> {
        let mut dex = Self::new();
        for species in data.species {
            dex.insert_species(species);
        }
        for move_ in data.moves {
            dex.insert_move(move_);
        }
        for ability in data.abilities {
            dex.insert_ability(ability);
        }
        for item in data.items {
            dex.insert_item(item);
        }
        for nature in data.natures {
            dex.insert_nature(nature);
        }
        dex.learnsets = data.learnsets;
        dex.validate()?;
        Ok(dex)
    }

    /// Check that every id a record refers to resolves to another record.
    pub fn validate(&self) -> CatalogResult<()> {
        let dangling = |owner: &Id, kind: &'static str, id: &Id| CatalogError::DanglingReference {
            owner: owner.clone(),
            kind,
            id: id.clone(),
        };

        for species in self.species.values() {
            for ability in species.abilities.iter() {
                if !self.abilities.contains_key(ability) {
                    return Err(dangling(&species.id, "ability", ability));
                }
            }
            let pools = species
                .random_battle
                .moves
                .iter()
                .chain(species.random_battle.doubles_moves.iter());
            for move_ in pools {
                if !self.moves.contains_key(move_) {
                    return Err(dangling(&species.id, "move", move_));
                }
            }
            if let Some(base) = &species.battle_only {
                if !self.species.contains_key(base) {
                    return Err(dangling(&species.id, "species", base));
                }
            }
            for item in &species.required_items {
                if !self.items.contains_key(item) {
                    return Err(dangling(&species.id, "item", item));
                }
            }
        }

        for (owner, learnset) in &self.learnsets {
            for move_ in learnset.all_moves() {
                if !self.moves.contains_key(&move_) {
                    return Err(dangling(owner, "move", &move_));
                }
            }
        }

        Ok(())
    }

    pub fn insert_species(&mut self, species: SpeciesData) {
        self.species.insert(species.id.clone(), species);
    }

    pub fn insert_move(&mut self, move_: MoveData) {
        self.moves.insert(move_.id.clone(), move_);
    }

    pub fn insert_ability(&mut self, ability: AbilityData) {
        self.abilities.insert(ability.id.clone(), ability);
    }

    pub fn insert_item(&mut self, item: ItemData) {
        self.items.insert(item.id.clone(), item);
    }

    pub fn insert_nature(&mut self, nature: NatureData) {
        self.natures.insert(nature.id.clone(), nature);
    }

    pub fn insert_learnset(&mut self, species: Id, learnset: Learnset) {
        self.learnsets.insert(species, learnset);
    }

    pub fn species(&self, id: &str) -> Option<&SpeciesData> {
        self.species.get(id)
    }

    pub fn move_data(&self, id: &str) -> Option<&MoveData> {
        self.moves.get(id)
    }

    pub fn ability(&self, id: &str) -> Option<&AbilityData> {
        self.abilities.get(id)
    }

    pub fn item(&self, id: &str) -> Option<&ItemData> {
        self.items.get(id)
    }

    pub fn nature(&self, id: &str) -> Option<&NatureData> {
        self.natures.get(id)
    }

    pub fn learnset(&self, id: &str) -> Option<&Learnset> {
        self.learnsets.get(id)
    }

    pub fn all_species(&self) -> impl Iterator<Item = &SpeciesData> {
        self.species.values()
    }

    pub fn all_moves(&self) -> impl Iterator<Item = &MoveData> {
        self.moves.values()
    }

    pub fn all_abilities(&self) -> impl Iterator<Item = &AbilityData> {
        self.abilities.values()
    }

    pub fn all_items(&self) -> impl Iterator<Item = &ItemData> {
        self.items.values()
    }

    pub fn all_natures(&self) -> impl Iterator<Item = &NatureData> {
        self.natures.values()
    }

    /// Rating of an ability, treating unknown abilities as neutral.
    pub fn ability_rating(&self, id: &str) -> f32 {
        self.ability(id).map(|a| a.rating).unwrap_or(0.0)
    }

    /// Log2 effectiveness of an attacking type against a typing.
    pub fn type_effectiveness(&self, attacking: PokemonType, defending: &[PokemonType]) -> i8 {
        PokemonType::effectiveness(attacking, defending)
    }

    pub fn is_immune(&self, attacking: PokemonType, defending: &[PokemonType]) -> bool {
        PokemonType::is_immune_any(attacking, defending)
    }
}
