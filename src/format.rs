//! Format configuration: which generator runs and under which clauses.

use crate::dex::read_ron;
use crate::errors::{CatalogError, CatalogResult};
use schema::Id;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameType {
    Singles,
    Doubles,
}

/// The assembly strategy a format uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeamKind {
    /// Rule-driven construction from move pools.
    Random,
    /// Curated sets sampled from a tiered ladder pool.
    Factory,
    /// Curated sets sampled from the fixed-level doubles pool.
    DoublesFactory,
    /// Random learnset moves, balanced levels.
    ChallengeCup,
    /// Anything goes, balanced levels.
    HackmonsCup,
}

impl TeamKind {
    /// The set file a factory kind draws from, relative to the data directory.
    pub fn factory_file(self) -> Option<&'static str> {
        match self {
            TeamKind::Factory => Some("factory-sets.ron"),
            TeamKind::DoublesFactory => Some("doubles-factory-sets.ron"),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rule {
    /// Every team member shares one type.
    SameTypeClause,
    /// The configured species of the day joins the team.
    PokemonOfTheDay,
    DynamaxClause,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Format {
    pub id: Id,
    pub name: String,
    pub generation: u8,
    pub game_type: GameType,
    pub team: TeamKind,
    #[serde(default)]
    pub rules: BTreeSet<Rule>,
}

impl Format {
    pub fn new(name: &str, generation: u8, game_type: GameType, team: TeamKind) -> Self {
        Self {
            id: Id::from(name),
            name: name.to_string(),
            generation,
            game_type,
            team,
            rules: BTreeSet::new(),
        }
    }

    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.insert(rule);
        self
    }

    pub fn has_rule(&self, rule: Rule) -> bool {
        self.rules.contains(&rule)
    }

    pub fn is_doubles(&self) -> bool {
        self.game_type == GameType::Doubles
    }
}

/// Load every format from `formats.ron`.
pub fn load_formats(data_path: &Path) -> CatalogResult<Vec<Format>> {
    read_ron(&data_path.join("formats.ron"))
}

pub fn find_format<'a>(formats: &'a [Format], name: &str) -> CatalogResult<&'a Format> {
    let id = Id::from(name);
    formats
        .iter()
        .find(|f| f.id == id)
        .ok_or(CatalogError::UnknownFormat(id))
}

/// Options supplied by the server rather than the format itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Species forced into the second slot when the format runs a species of the day.
    pub species_of_the_day: Option<Id>,
}
