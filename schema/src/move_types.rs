use crate::{default_gen, Id, PokemonType};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveCategory {
    Physical,
    Special,
    Status,
}

impl fmt::Display for MoveCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveCategory::Physical => write!(f, "Physical"),
            MoveCategory::Special => write!(f, "Special"),
            MoveCategory::Status => write!(f, "Status"),
        }
    }
}

/// Boolean move properties the team generator inspects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoveFlags {
    pub contact: bool,
    pub punch: bool,
    pub bite: bool,
    pub sound: bool,
    pub heal: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveData {
    pub id: Id,
    pub name: String,
    pub move_type: PokemonType,
    pub category: MoveCategory,
    #[serde(default)]
    pub base_power: u16,
    /// `None` means the move never misses.
    #[serde(default)]
    pub accuracy: Option<u8>,
    #[serde(default)]
    pub priority: i8,
    /// Trigger chance of the secondary effect, if the move has one.
    #[serde(default)]
    pub secondary_chance: Option<u8>,
    #[serde(default)]
    pub flags: MoveFlags,
    /// Hit count range for multi-hit moves, e.g. `(2, 5)`.
    #[serde(default)]
    pub multihit: Option<(u8, u8)>,
    /// Damage is fixed or computed without the damage formula (Seismic Toss, Super Fang).
    #[serde(default)]
    pub fixed_damage: bool,
    /// Base power is computed at use time (Gyro Ball, Low Kick).
    #[serde(default)]
    pub variable_power: bool,
    /// Recoil or crash damage to the user.
    #[serde(default)]
    pub recoil: bool,
    #[serde(default)]
    pub drain: bool,
    #[serde(default)]
    pub self_switch: bool,
    #[serde(default)]
    pub weather: bool,
    #[serde(default)]
    pub stalling: bool,
    #[serde(default = "default_gen")]
    pub gen: u8,
    #[serde(default)]
    pub nonstandard: bool,
}

impl MoveData {
    /// Moves that deal damage through the regular damage formula.
    pub fn is_attack(&self) -> bool {
        self.category != MoveCategory::Status && !self.fixed_damage
    }

    /// Whether the move counts toward a type's attacking presence.
    ///
    /// Very weak moves (base power 30 or less) only count when they hit
    /// several times or scale their power.
    pub fn has_real_power(&self) -> bool {
        self.base_power > 30 || self.multihit.is_some() || self.variable_power
    }
}
