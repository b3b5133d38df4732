use crate::{default_gen, Id, Stat};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilityData {
    pub id: Id,
    pub name: String,
    /// Desirability rating, roughly -1.0 (harmful) to 5.0 (format-defining).
    pub rating: f32,
    #[serde(default = "default_gen")]
    pub gen: u8,
    #[serde(default)]
    pub nonstandard: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemData {
    pub id: Id,
    pub name: String,
    #[serde(default = "default_gen")]
    pub gen: u8,
    #[serde(default)]
    pub nonstandard: bool,
    #[serde(default)]
    pub mega_stone: bool,
    #[serde(default)]
    pub z_move: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NatureData {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub plus: Option<Stat>,
    #[serde(default)]
    pub minus: Option<Stat>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Learnset {
    pub level_up: BTreeMap<u8, Vec<Id>>, // level -> moves learned at that level
    pub can_learn: Vec<Id>,              // Moves learnable through machines and tutors
}

impl Learnset {
    pub fn can_learn_move(&self, move_: &str) -> bool {
        // Check level-up moves
        for moves_at_level in self.level_up.values() {
            if moves_at_level.iter().any(|m| m == move_) {
                return true;
            }
        }

        // Check can_learn list
        self.can_learn.iter().any(|m| m == move_)
    }

    /// Every learnable move once, level-up moves first.
    pub fn all_moves(&self) -> Vec<Id> {
        let mut moves: Vec<Id> = Vec::new();
        for move_ in self
            .level_up
            .values()
            .flatten()
            .chain(self.can_learn.iter())
        {
            if !moves.contains(move_) {
                moves.push(move_.clone());
            }
        }
        moves
    }
}
