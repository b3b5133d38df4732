use schema::PokemonType;
use std::collections::BTreeMap;
use strum::IntoEnumIterator;

/// A type left unanswered by this many members makes the team fail its quality gate.
pub const MAJOR_WEAKNESS: u32 = 3;

/// Types an ability absorbs or shrugs off, assumed to cover any bad typing.
pub fn resisted_by_ability(ability: &str) -> &'static [PokemonType] {
    match ability {
        "dryskin" | "waterabsorb" | "stormdrain" => &[PokemonType::Water],
        "flashfire" | "heatproof" => &[PokemonType::Fire],
        "lightningrod" | "motordrive" | "voltabsorb" => &[PokemonType::Electric],
        "sapsipper" => &[PokemonType::Grass],
        "thickfat" => &[PokemonType::Ice, PokemonType::Fire],
        "levitate" => &[PokemonType::Ground],
        _ => &[],
    }
}

/// Per-type tally of team members that resist or are weak to each attacking type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scoreboard {
    resistances: BTreeMap<PokemonType, u32>,
    weaknesses: BTreeMap<PokemonType, u32>,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resistances(&self, t: PokemonType) -> u32 {
        self.resistances.get(&t).copied().unwrap_or(0)
    }

    pub fn weaknesses(&self, t: PokemonType) -> u32 {
        self.weaknesses.get(&t).copied().unwrap_or(0)
    }

    /// Fold in one accepted member.
    pub fn record(&mut self, types: &[PokemonType], ability: &str) {
        let absorbed = resisted_by_ability(ability);
        for attacking in PokemonType::iter() {
            // Once any member resists a type, it is answered for good.
            if self.resistances(attacking) >= 1 {
                continue;
            }
            if absorbed.contains(&attacking) || PokemonType::is_immune_any(attacking, types) {
                self.add_resistance(attacking);
                continue;
            }
            let modifier = PokemonType::effectiveness(attacking, types);
            if modifier < 0 {
                self.add_resistance(attacking);
            } else if modifier > 0 {
                *self.weaknesses.entry(attacking).or_insert(0) += 1;
            }
        }
    }

    fn add_resistance(&mut self, t: PokemonType) {
        *self.resistances.entry(t).or_insert(0) += 1;
        self.weaknesses.insert(t, 0);
    }

    /// Whether some type has [`MAJOR_WEAKNESS`] or more unanswered weaknesses.
    pub fn has_major_weakness(&self) -> bool {
        self.weaknesses.values().any(|&w| w >= MAJOR_WEAKNESS)
    }
}
