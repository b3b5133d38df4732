use crate::{default_gen, to_id, Id, PokemonType};
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumString)]
pub enum Tier {
    Uber,
    OU,
    UUBL,
    UU,
    RUBL,
    RU,
    NUBL,
    NU,
    PUBL,
    PU,
    ZU,
    LC,
    NFE,
    Unreleased,
    Illegal,
}

impl Tier {
    /// Relative strength of the tiers the battle factory draws from.
    pub fn factory_value(self) -> Option<f32> {
        match self {
            Tier::Uber => Some(5.0),
            Tier::OU => Some(4.0),
            Tier::UUBL => Some(3.5),
            Tier::UU => Some(3.0),
            Tier::RUBL => Some(2.5),
            Tier::RU => Some(2.0),
            Tier::NUBL => Some(1.5),
            Tier::NU => Some(1.0),
            Tier::PUBL => Some(0.5),
            Tier::PU => Some(0.0),
            _ => None,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    M,
    F,
    N,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Stat {
    Hp,
    Atk,
    Def,
    SpA,
    SpD,
    Spe,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub hp: u8,
    pub attack: u8,
    pub defense: u8,
    pub sp_attack: u8,
    pub sp_defense: u8,
    pub speed: u8,
}

impl BaseStats {
    pub fn get(&self, stat: Stat) -> u8 {
        match stat {
            Stat::Hp => self.hp,
            Stat::Atk => self.attack,
            Stat::Def => self.defense,
            Stat::SpA => self.sp_attack,
            Stat::SpD => self.sp_defense,
            Stat::Spe => self.speed,
        }
    }

    pub fn total(&self) -> u16 {
        [
            self.hp,
            self.attack,
            self.defense,
            self.sp_attack,
            self.sp_defense,
            self.speed,
        ]
        .iter()
        .map(|&s| s as u16)
        .sum()
    }
}

/// Per-stat investment table, used for both EVs and IVs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatTable {
    pub hp: u8,
    pub atk: u8,
    pub def: u8,
    pub spa: u8,
    pub spd: u8,
    pub spe: u8,
}

impl StatTable {
    pub fn uniform(value: u8) -> Self {
        Self {
            hp: value,
            atk: value,
            def: value,
            spa: value,
            spd: value,
            spe: value,
        }
    }

    pub fn get(&self, stat: Stat) -> u8 {
        match stat {
            Stat::Hp => self.hp,
            Stat::Atk => self.atk,
            Stat::Def => self.def,
            Stat::SpA => self.spa,
            Stat::SpD => self.spd,
            Stat::Spe => self.spe,
        }
    }

    pub fn set(&mut self, stat: Stat, value: u8) {
        match stat {
            Stat::Hp => self.hp = value,
            Stat::Atk => self.atk = value,
            Stat::Def => self.def = value,
            Stat::SpA => self.spa = value,
            Stat::SpD => self.spd = value,
            Stat::Spe => self.spe = value,
        }
    }

    pub fn total(&self) -> u16 {
        [self.hp, self.atk, self.def, self.spa, self.spd, self.spe]
            .iter()
            .map(|&s| s as u16)
            .sum()
    }
}

/// The two standard ability slots and the hidden one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilitySlots {
    pub primary: Id,
    #[serde(default)]
    pub secondary: Option<Id>,
    #[serde(default)]
    pub hidden: Option<Id>,
}

impl AbilitySlots {
    pub fn iter(&self) -> impl Iterator<Item = &Id> {
        std::iter::once(&self.primary)
            .chain(self.secondary.iter())
            .chain(self.hidden.iter())
    }

    pub fn contains(&self, ability: &str) -> bool {
        self.iter().any(|a| a == ability)
    }
}

/// Move pools and levels curated for random battles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomBattleData {
    pub moves: Vec<Id>,
    pub doubles_moves: Vec<Id>,
    pub level: Option<u8>,
    pub doubles_level: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesData {
    pub id: Id,
    pub num: u16,
    pub name: String,
    pub base_species: String,
    #[serde(default)]
    pub forme: Option<String>,
    pub types: Vec<PokemonType>,
    pub base_stats: BaseStats,
    pub abilities: AbilitySlots,
    #[serde(default)]
    pub prevo: Option<Id>,
    #[serde(default)]
    pub evos: Vec<Id>,
    /// Fixed gender, if the species has one.
    #[serde(default)]
    pub gender: Option<Gender>,
    pub tier: Tier,
    #[serde(default = "default_gen")]
    pub gen: u8,
    #[serde(default)]
    pub nonstandard: bool,
    /// The out-of-battle forme this battle-only forme reverts to.
    #[serde(default)]
    pub battle_only: Option<Id>,
    #[serde(default)]
    pub cosmetic_formes: Vec<String>,
    #[serde(default)]
    pub required_items: Vec<Id>,
    #[serde(default)]
    pub random_battle: RandomBattleData,
}

impl SpeciesData {
    pub fn base_species_id(&self) -> Id {
        to_id(&self.base_species)
    }

    /// Not fully evolved.
    pub fn is_nfe(&self) -> bool {
        !self.evos.is_empty()
    }

    pub fn has_type(&self, t: PokemonType) -> bool {
        self.types.contains(&t)
    }

    pub fn is_gigantamax(&self) -> bool {
        self.name.ends_with("-Gmax")
    }

    /// Types sorted and joined, so that Water/Ground and Ground/Water compare equal.
    pub fn type_combo(&self) -> String {
        let mut names: Vec<String> = self.types.iter().map(|t| t.to_string()).collect();
        names.sort();
        names.join("/")
    }
}
