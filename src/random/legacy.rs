//! The older "anything legal" formats: Challenge Cup and Hackmons Cup.
//!
//! Neither uses move pools or rules. Species are drawn by dex number, every
//! other field is uniform noise, and the level is balanced from base stats.

use super::team::TEAM_SIZE;
use crate::dex::Dex;
use crate::errors::{TeamGenError, TeamGenResult};
use crate::format::Format;
use crate::prng::RandomSource;
use crate::sets::CreatureSet;
use crate::stats::balance_level;
use schema::{Id, SpeciesData, Stat, StatTable};
use std::collections::BTreeMap;
use strum::IntoEnumIterator;

const EV_BUDGET: u32 = 510;
const MAX_MOVES: usize = 4;
/// Upper bound on EV draws; the budget is normally spent long before this.
const MAX_EV_DRAWS: usize = 1000;

/// Pick `n` species with distinct dex numbers, then a random forme of each.
pub fn random_n_species<'a, R: RandomSource>(
    rng: &mut R,
    dex: &'a Dex,
    format: &Format,
    n: usize,
) -> TeamGenResult<Vec<&'a SpeciesData>> {
    let mut by_number: BTreeMap<u16, Vec<&'a SpeciesData>> = BTreeMap::new();
    for species in dex.all_species() {
        if species.nonstandard || species.gen > format.generation || species.num < 1 {
            continue;
        }
        by_number.entry(species.num).or_default().push(species);
    }

    if by_number.len() < n {
        return Err(TeamGenError::RosterIncomplete {
            format: format.id.clone(),
            seed: rng.seed(),
            accepted: by_number.len(),
        });
    }

    let mut numbers: Vec<u16> = by_number.keys().copied().collect();
    let mut chosen = Vec::with_capacity(n);
    for _ in 0..n {
        let Some(number) = rng.sample_remove(&mut numbers) else {
            break;
        };
        if let Some(forme) = by_number.get(&number).and_then(|formes| rng.sample(formes)) {
            chosen.push(*forme);
        }
    }
    Ok(chosen)
}

/// Spend the EV budget in random chunks on random stats.
///
/// A single stat can reach 255 here, past the cap the rule-driven builder uses.
pub fn random_evs<R: RandomSource>(rng: &mut R) -> StatTable {
    let stats: Vec<Stat> = Stat::iter().collect();
    let mut evs = StatTable::default();
    let mut budget = EV_BUDGET;

    for _ in 0..MAX_EV_DRAWS {
        if budget == 0 {
            break;
        }
        let Some(&stat) = rng.sample(&stats) else {
            break;
        };
        let current = evs.get(stat) as u32;
        let spend = rng.next_below((256 - current).min(budget + 1));
        evs.set(stat, (current + spend) as u8);
        budget -= spend;
    }
    evs
}

pub fn random_ivs<R: RandomSource>(rng: &mut R) -> StatTable {
    let mut ivs = StatTable::default();
    for stat in Stat::iter() {
        ivs.set(stat, rng.next_below(32) as u8);
    }
    ivs
}

fn random_nature<R: RandomSource>(rng: &mut R, dex: &Dex) -> Option<Id> {
    let natures: Vec<&Id> = dex.all_natures().map(|n| &n.id).collect();
    rng.sample(&natures).map(|id| (*id).clone())
}

/// Level from base stats; Wishiwashi is balanced as its School forme.
fn legacy_level(dex: &Dex, species: &SpeciesData) -> u8 {
    let stats = if species.base_species_id() == "wishiwashi" {
        dex.species("wishiwashischool")
            .map(|school| &school.base_stats)
            .unwrap_or(&species.base_stats)
    } else {
        &species.base_stats
    };
    balance_level(stats)
}

fn legal_items<'a>(dex: &'a Dex, format: &Format) -> Vec<&'a Id> {
    dex.all_items()
        .filter(|i| i.gen <= format.generation && !i.nonstandard)
        .map(|i| &i.id)
        .collect()
}

/// Six species with random legal items, abilities, learnset moves and spreads.
pub fn challenge_cup_team<R: RandomSource>(
    rng: &mut R,
    dex: &Dex,
    format: &Format,
) -> TeamGenResult<Vec<CreatureSet>> {
    let items = legal_items(dex, format);
    let mut team = Vec::with_capacity(TEAM_SIZE);

    for drawn in random_n_species(rng, dex, format, TEAM_SIZE)? {
        let mut species = drawn;

        // --- Item ---
        let item = if format.generation >= 2 {
            rng.sample(&items).map(|id| (*id).clone())
        } else {
            None
        };

        // --- Forme legality ---
        if let Some(base) = species.battle_only.as_ref().and_then(|id| dex.species(id)) {
            species = base;
        } else if !species.required_items.is_empty()
            && !item.as_ref().is_some_and(|i| species.required_items.contains(i))
        {
            if let Some(base) = dex.species(&species.base_species_id()) {
                species = base;
            }
        }

        // --- Ability ---
        let ability = if format.generation <= 2 {
            Id::from("noability")
        } else {
            let abilities: Vec<&Id> = species
                .abilities
                .iter()
                .filter(|a| dex.ability(a).is_some_and(|data| data.gen <= format.generation))
                .collect();
            rng.sample(&abilities)
                .map(|a| (*a).clone())
                .unwrap_or_else(|| species.abilities.primary.clone())
        };

        // --- Moves ---
        let mut pool = dex
            .learnset(&species.id)
            .or_else(|| dex.learnset(&species.base_species_id()))
            .map(|learnset| learnset.all_moves())
            .unwrap_or_default();
        if pool.is_empty() {
            pool.push(Id::from("struggle"));
        }
        let mut moves = Vec::with_capacity(MAX_MOVES);
        while moves.len() < MAX_MOVES {
            let Some(move_) = rng.sample_remove(&mut pool) else {
                break;
            };
            moves.push(move_);
        }

        team.push(finish_legacy_set(rng, dex, species, item, ability, moves));
    }

    tracing::info!(format = %format.id, seed = rng.seed(), "built challenge cup team");
    Ok(team)
}

/// Six species with unique random items, abilities and moves from the whole catalog.
pub fn hackmons_cup_team<R: RandomSource>(
    rng: &mut R,
    dex: &Dex,
    format: &Format,
) -> TeamGenResult<Vec<CreatureSet>> {
    let gen = format.generation;
    let mut item_pool: Vec<Id> = legal_items(dex, format).into_iter().cloned().collect();
    let mut ability_pool: Vec<Id> = dex
        .all_abilities()
        .filter(|a| a.gen <= gen && !a.nonstandard)
        .map(|a| a.id.clone())
        .collect();
    let mut move_pool: Vec<Id> = dex
        .all_moves()
        .filter(|m| m.gen <= gen && !m.nonstandard)
        .map(|m| m.id.clone())
        .collect();

    let mut team = Vec::with_capacity(TEAM_SIZE);
    for species in random_n_species(rng, dex, format, TEAM_SIZE)? {
        let item = if gen >= 2 {
            rng.sample_remove(&mut item_pool)
        } else {
            None
        };
        let ability = if gen >= 3 {
            rng.sample_remove(&mut ability_pool)
        } else {
            None
        }
        .unwrap_or_else(|| Id::from("noability"));

        let mut moves = Vec::with_capacity(MAX_MOVES);
        while moves.len() < MAX_MOVES {
            let Some(move_) = rng.sample_remove(&mut move_pool) else {
                break;
            };
            moves.push(move_);
        }

        team.push(finish_legacy_set(rng, dex, species, item, ability, moves));
    }

    tracing::info!(format = %format.id, seed = rng.seed(), "built hackmons cup team");
    Ok(team)
}

fn finish_legacy_set<R: RandomSource>(
    rng: &mut R,
    dex: &Dex,
    species: &SpeciesData,
    item: Option<Id>,
    ability: Id,
    moves: Vec<Id>,
) -> CreatureSet {
    let evs = random_evs(rng);
    let ivs = random_ivs(rng);
    let nature = random_nature(rng, dex);
    let level = legacy_level(dex, species);
    let happiness = rng.next_below(256) as u8;
    let shiny = rng.chance(1, 1024);

    CreatureSet {
        name: species.base_species.clone(),
        species: species.name.clone(),
        gender: species.gender,
        moves,
        ability,
        item,
        evs,
        ivs,
        nature,
        level,
        happiness,
        shiny,
        gigantamax: false,
    }
}
