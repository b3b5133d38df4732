use crate::dex::Dex;
use schema::{Id, MoveCategory, PokemonType};
use std::collections::BTreeMap;

// --- Named move lists ---

pub const RECOVERY_MOVES: &[&str] = &[
    "healorder",
    "milkdrink",
    "moonlight",
    "morningsun",
    "recover",
    "roost",
    "shoreup",
    "slackoff",
    "softboiled",
    "strengthsap",
    "synthesis",
];

/// Moves that drop the user's own stats, which Contrary turns into boosts.
pub const CONTRARY_MOVES: &[&str] = &["closecombat", "leafstorm", "overheat", "superpower", "vcreate"];

pub const PHYSICAL_SETUP: &[&str] = &[
    "bellydrum",
    "bulkup",
    "coil",
    "curse",
    "dragondance",
    "honeclaws",
    "howl",
    "meditate",
    "poweruppunch",
    "screech",
    "swordsdance",
];

pub const SPECIAL_SETUP: &[&str] = &[
    "calmmind",
    "chargebeam",
    "geomancy",
    "nastyplot",
    "quiverdance",
    "tailglow",
];

pub const MIXED_SETUP: &[&str] = &[
    "clangoroussoul",
    "growth",
    "happyhour",
    "holdhands",
    "noretreat",
    "shellsmash",
    "workup",
];

pub const SPEED_SETUP: &[&str] = &["agility", "autotomize", "flamecharge", "rockpolish", "shiftgear"];

/// Same-type moves whose main value is not their damage.
pub const NO_STAB: &[&str] = &[
    "accelerock",
    "aquajet",
    "bounce",
    "breakingswipe",
    "explosion",
    "fakeout",
    "firstimpression",
    "flamecharge",
    "flipturn",
    "iceshard",
    "machpunch",
    "pluck",
    "pursuit",
    "quickattack",
    "selfdestruct",
    "skydrop",
    "suckerpunch",
    "watershuriken",
    "clearsmog",
    "eruption",
    "icywind",
    "incinerate",
    "meteorbeam",
    "snarl",
    "vacuumwave",
    "voltswitch",
    "waterspout",
];

pub const HAZARDS: &[&str] = &["spikes", "stealthrock", "stickyweb", "toxicspikes"];

const ATE_ABILITIES: &[&str] = &["aerilate", "galvanize", "pixilate", "refrigerate"];

pub fn is_setup_move(id: &str) -> bool {
    PHYSICAL_SETUP.contains(&id) || SPECIAL_SETUP.contains(&id) || MIXED_SETUP.contains(&id)
}

/// The stat family a set's boosting moves commit it to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupType {
    Physical,
    Special,
    Mixed,
}

/// Tallies describing a candidate moveset, rebuilt on every selection pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveCounter {
    pub physical: u8,
    pub special: u8,
    pub status: u8,
    /// Moves whose damage bypasses the damage formula; counted instead of their category.
    pub damage: u8,
    types: BTreeMap<PokemonType, u8>,

    pub stab: u8,
    pub ate_stab: u8,
    pub protean_stab: u8,
    pub adaptability: u8,

    pub recoil: u8,
    pub drain: u8,
    pub sound: u8,
    pub technician: u8,
    pub skilllink: u8,
    pub ironfist: u8,
    pub strongjaw: u8,
    pub sheerforce: u8,
    pub serenegrace: u8,
    pub inaccurate: u8,
    pub priority: u8,
    pub recovery: u8,
    pub contrary: u8,
    pub physical_setup: u8,
    pub special_setup: u8,
    pub mixed_setup: u8,
    pub speed_setup: u8,
    pub hazards: u8,

    /// Physical moves still waiting in the pool.
    pub physical_pool: u8,
    pub special_pool: u8,

    pub damaging_moves: Vec<Id>,
    pub setup_type: Option<SetupType>,
}

impl MoveCounter {
    /// Attacks of the given type with meaningful power.
    pub fn of_type(&self, t: PokemonType) -> u8 {
        self.types.get(&t).copied().unwrap_or(0)
    }

    /// Same-type attacks from any of the three STAB paths.
    pub fn stab_total(&self) -> u8 {
        self.stab + self.ate_stab + self.protean_stab
    }

    pub fn of_category(&self, category: MoveCategory) -> u8 {
        match category {
            MoveCategory::Physical => self.physical,
            MoveCategory::Special => self.special,
            MoveCategory::Status => self.status,
        }
    }
}

fn bump(n: &mut u8) {
    *n = n.saturating_add(1);
}

/// Tally the features of `moves` for a creature with the given types and abilities.
///
/// `pool` is the remaining primary pool, which only contributes to the
/// physical and special potential used to settle the setup type.
pub fn analyze(
    dex: &Dex,
    moves: &[Id],
    types: &[PokemonType],
    abilities: &[Id],
    pool: &[Id],
) -> MoveCounter {
    let mut counter = MoveCounter::default();
    let has_ability = |a: &str| abilities.iter().any(|x| x == a);
    let type_adopting = has_ability("libero") || has_ability("protean");
    let ate_ability = ATE_ABILITIES.iter().any(|a| has_ability(a));

    for id in moves {
        let Some(move_) = dex.move_data(id) else {
            continue;
        };
        let id = id.as_str();
        let own_type = types.contains(&move_.move_type);
        let no_stab = NO_STAB.contains(&id);

        // --- Category ---
        if move_.fixed_damage {
            bump(&mut counter.damage);
            counter.damaging_moves.push(move_.id.clone());
        } else {
            match move_.category {
                MoveCategory::Physical => bump(&mut counter.physical),
                MoveCategory::Special => bump(&mut counter.special),
                MoveCategory::Status => bump(&mut counter.status),
            }
            if move_.category != MoveCategory::Status
                && (move_.base_power > 0 || move_.variable_power || move_.multihit.is_some())
            {
                counter.damaging_moves.push(move_.id.clone());
            }
        }

        // --- Power tags ---
        if id == "lowkick" || (move_.base_power > 0 && move_.base_power <= 60 && id != "rapidspin") {
            bump(&mut counter.technician);
        }
        if matches!(move_.multihit, Some((_, 5))) {
            bump(&mut counter.skilllink);
        }
        if move_.recoil {
            bump(&mut counter.recoil);
        }
        if move_.drain {
            bump(&mut counter.drain);
        }

        // --- Types and STAB ---
        if move_.has_real_power() || id == "infestation" {
            bump(counter.types.entry(move_.move_type).or_insert(0));
            if own_type {
                bump(&mut counter.adaptability);
                if !no_stab {
                    bump(&mut counter.stab);
                }
            } else if type_adopting && move_.priority == 0 && !no_stab {
                bump(&mut counter.protean_stab);
            } else if move_.move_type == PokemonType::Normal && ate_ability {
                bump(&mut counter.ate_stab);
            }
        }

        // --- Flags ---
        if move_.flags.bite {
            bump(&mut counter.strongjaw);
        }
        if move_.flags.punch {
            bump(&mut counter.ironfist);
        }
        if move_.flags.sound {
            bump(&mut counter.sound);
        }
        if move_.priority > 0 {
            bump(&mut counter.priority);
        }
        if let Some(chance) = move_.secondary_chance {
            bump(&mut counter.sheerforce);
            if (20..100).contains(&chance) {
                bump(&mut counter.serenegrace);
            }
        }
        if move_.accuracy.is_some_and(|a| a < 90) {
            bump(&mut counter.inaccurate);
        }

        // --- Named lists ---
        if RECOVERY_MOVES.contains(&id) {
            bump(&mut counter.recovery);
        }
        if CONTRARY_MOVES.contains(&id) {
            bump(&mut counter.contrary);
        }
        if PHYSICAL_SETUP.contains(&id) {
            bump(&mut counter.physical_setup);
        }
        if SPECIAL_SETUP.contains(&id) {
            bump(&mut counter.special_setup);
        }
        if MIXED_SETUP.contains(&id) {
            bump(&mut counter.mixed_setup);
        }
        if SPEED_SETUP.contains(&id) {
            bump(&mut counter.speed_setup);
        }
        if HAZARDS.contains(&id) {
            bump(&mut counter.hazards);
        }
    }

    for id in pool {
        let Some(move_) = dex.move_data(id) else {
            continue;
        };
        if move_.fixed_damage {
            continue;
        }
        match move_.category {
            MoveCategory::Physical => bump(&mut counter.physical_pool),
            MoveCategory::Special => bump(&mut counter.special_pool),
            MoveCategory::Status => {}
        }
    }

    counter.setup_type = settle_setup_type(&counter);
    counter
}

fn settle_setup_type(counter: &MoveCounter) -> Option<SetupType> {
    let physical_potential = counter.physical as u16 + counter.physical_pool as u16;
    let special_potential = counter.special as u16 + counter.special_pool as u16;

    if counter.mixed_setup > 0 {
        return Some(SetupType::Mixed);
    }

    match (counter.physical_setup > 0, counter.special_setup > 0) {
        (true, true) => {
            if physical_potential == special_potential {
                // Tie on potential: whichever the set already leans toward.
                match counter.physical.cmp(&counter.special) {
                    std::cmp::Ordering::Greater => Some(SetupType::Physical),
                    std::cmp::Ordering::Less => Some(SetupType::Special),
                    std::cmp::Ordering::Equal => None,
                }
            } else if physical_potential > special_potential {
                Some(SetupType::Physical)
            } else {
                Some(SetupType::Special)
            }
        }
        (true, false) if physical_potential > 0 => Some(SetupType::Physical),
        (false, true) if special_potential > 0 => Some(SetupType::Special),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::common::fixture_dex;
    use pretty_assertions::assert_eq;

    fn ids(names: &[&str]) -> Vec<Id> {
        names.iter().map(|n| Id::from(*n)).collect()
    }

    #[test]
    fn test_category_and_stab_counts() {
        let dex = fixture_dex();
        let counter = analyze(
            &dex,
            &ids(&["earthquake", "stoneedge", "swordsdance", "seismictoss"]),
            &[PokemonType::Ground, PokemonType::Rock],
            &ids(&["sandstream"]),
            &[],
        );

        assert_eq!(counter.physical, 2);
        assert_eq!(counter.status, 1);
        assert_eq!(counter.damage, 1);
        assert_eq!(counter.stab, 2);
        assert_eq!(counter.of_type(PokemonType::Ground), 1);
        assert_eq!(counter.inaccurate, 1);
        assert_eq!(counter.physical_setup, 1);
        assert_eq!(counter.damaging_moves.len(), 3);
        assert_eq!(counter.setup_type, Some(SetupType::Physical));
    }

    #[test]
    fn test_no_stab_moves_only_count_for_adaptability() {
        let dex = fixture_dex();
        let counter = analyze(&dex, &ids(&["aquajet"]), &[PokemonType::Water], &[], &[]);
        assert_eq!(counter.stab, 0);
        assert_eq!(counter.adaptability, 1);
        assert_eq!(counter.priority, 1);
    }

    #[test]
    fn test_ate_ability_counts_normal_moves() {
        let dex = fixture_dex();
        let counter = analyze(
            &dex,
            &ids(&["hypervoice"]),
            &[PokemonType::Fairy],
            &ids(&["pixilate"]),
            &[],
        );
        assert_eq!(counter.ate_stab, 1);
        assert_eq!(counter.stab_total(), 1);
        assert_eq!(counter.sound, 1);
    }

    #[test]
    fn test_setup_without_potential_settles_nothing() {
        let dex = fixture_dex();
        let counter = analyze(&dex, &ids(&["calmmind", "recover"]), &[PokemonType::Psychic], &[], &[]);
        assert_eq!(counter.setup_type, None);
        assert_eq!(counter.recovery, 1);

        let with_pool = analyze(
            &dex,
            &ids(&["calmmind", "recover"]),
            &[PokemonType::Psychic],
            &[],
            &ids(&["psychic"]),
        );
        assert_eq!(with_pool.special_pool, 1);
        assert_eq!(with_pool.setup_type, Some(SetupType::Special));
    }

    #[test]
    fn test_mixed_setup_wins() {
        let dex = fixture_dex();
        let counter = analyze(
            &dex,
            &ids(&["shellsmash", "swordsdance"]),
            &[PokemonType::Water],
            &[],
            &[],
        );
        assert_eq!(counter.setup_type, Some(SetupType::Mixed));
    }
}
