//! Factory teams: curated sets sampled from a tiered (or fixed-level doubles)
//! pool, with team-level quality checks and bounded retries.

pub mod pools;
pub mod scoreboard;

pub use pools::{FactoryPools, FactorySet, FactorySpecies, SpeciesFlags};
pub use scoreboard::Scoreboard;

use crate::dex::Dex;
use crate::errors::{TeamGenError, TeamGenResult};
use crate::format::{Format, Rule};
use crate::prng::RandomSource;
use crate::random::team::TEAM_SIZE;
use crate::sets::CreatureSet;
use schema::{Gender, Id, PokemonType, StatTable, Tier};
use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;

/// Moves a team should have at least one of, grouped by purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MoveFamily {
    HazardSet,
    HazardClear,
}

/// What distinguishes one factory flavor from another.
#[derive(Debug, Clone, Copy)]
pub struct FactoryRules {
    pub name: &'static str,
    /// Attempt at which the team is accepted regardless of quality.
    pub depth_ceiling: u32,
    pub level: u8,
    pub lc_level: u8,
    pub item_caps: &'static [(&'static str, u32)],
    /// No two members may hold the same item.
    pub item_clause: bool,
    pub move_caps: &'static [(&'static str, u32)],
    pub required_moves: &'static [(&'static str, MoveFamily)],
    pub required_families: &'static [MoveFamily],
    /// A third member of an already doubled type is usually turned away.
    pub throttle_third_of_type: bool,
    /// Drought and Drizzle users count as their own type combination.
    pub weather_combos: bool,
}

pub const TIERED: FactoryRules = FactoryRules {
    name: "factory",
    depth_ceiling: 12,
    level: 100,
    lc_level: 5,
    item_caps: &[("choicespecs", 1), ("choiceband", 1), ("choicescarf", 1)],
    item_clause: false,
    move_caps: &[
        ("rapidspin", 1),
        ("batonpass", 1),
        ("stealthrock", 1),
        ("defog", 1),
        ("spikes", 1),
        ("toxicspikes", 1),
    ],
    required_moves: &[
        ("stealthrock", MoveFamily::HazardSet),
        ("rapidspin", MoveFamily::HazardClear),
        ("defog", MoveFamily::HazardClear),
    ],
    required_families: &[MoveFamily::HazardSet, MoveFamily::HazardClear],
    throttle_third_of_type: false,
    weather_combos: false,
};

pub const DOUBLES: FactoryRules = FactoryRules {
    name: "doubles factory",
    depth_ceiling: 4,
    level: 50,
    lc_level: 50,
    item_caps: &[],
    item_clause: true,
    move_caps: &[
        ("batonpass", 1),
        ("stealthrock", 1),
        ("spikes", 1),
        ("toxicspikes", 1),
        ("doubleedge", 1),
        ("trickroom", 1),
    ],
    required_moves: &[],
    required_families: &[],
    throttle_third_of_type: true,
    weather_combos: true,
};

/// Weather a weather-dependent ability needs the team to set.
fn weather_required_by(ability: &str) -> Option<&'static str> {
    match ability {
        "hydration" | "swiftswim" => Some("raindance"),
        "leafguard" | "solarpower" | "chlorophyll" => Some("sunnyday"),
        "sandforce" | "sandrush" | "sandveil" => Some("sandstorm"),
        "slushrush" | "snowcloak" => Some("hail"),
        _ => None,
    }
}

fn weather_set_by(ability: &str) -> Option<&'static str> {
    match ability {
        "drizzle" => Some("raindance"),
        "drought" => Some("sunnyday"),
        "snowwarning" => Some("hail"),
        "sandstream" => Some("sandstorm"),
        _ => None,
    }
}

fn cap_of(caps: &[(&str, u32)], id: &str) -> Option<u32> {
    caps.iter().find(|(name, _)| *name == id).map(|(_, cap)| *cap)
}

/// Team-wide state consulted by the set filters and the team loop.
#[derive(Debug, Default)]
struct TeamData {
    base_formes: BTreeSet<Id>,
    type_count: BTreeMap<PokemonType, u32>,
    combos: BTreeSet<String>,
    mega_count: u32,
    z_count: u32,
    /// Held items and moves on the team, with multiplicity.
    has: BTreeMap<Id, u32>,
    families: BTreeSet<MoveFamily>,
    weather: Option<&'static str>,
    scoreboard: Scoreboard,
}

impl TeamData {
    fn count(&self, id: &str) -> u32 {
        self.has.get(id).copied().unwrap_or(0)
    }
}

/// A set that passed the filters, with its variants already rolled.
struct Candidate<'a> {
    set: &'a FactorySet,
    item: Id,
    ability: Id,
    moves: Vec<Id>,
}

fn roll_candidate<'a, R: RandomSource>(rng: &mut R, set: &'a FactorySet) -> Candidate<'a> {
    let item = rng.sample(&set.item).cloned().unwrap_or_else(|| Id::from("leftovers"));
    let ability = rng
        .sample(&set.ability)
        .cloned()
        .unwrap_or_else(|| Id::from("noability"));
    let moves = set
        .moves
        .iter()
        .filter_map(|slot| rng.sample(slot).cloned())
        .collect();
    Candidate {
        set,
        item,
        ability,
        moves,
    }
}

/// Choose one set for a species given what the team already holds.
///
/// Sets that fill a still-missing move family take priority. Returns `None`
/// when no set fits, unless `forced`, in which case any set goes.
fn factory_set<'a, R: RandomSource>(
    rng: &mut R,
    dex: &Dex,
    rules: &FactoryRules,
    entry: &'a FactorySpecies,
    team: &TeamData,
    forced: bool,
) -> Option<Candidate<'a>> {
    let mut effective: Vec<Candidate<'a>> = Vec::new();
    let mut priority: Vec<Candidate<'a>> = Vec::new();

    for set in &entry.sets {
        let candidate = roll_candidate(rng, set);
        if forced {
            effective.push(candidate);
            continue;
        }

        // --- Item filters ---
        let item = dex.item(&candidate.item);
        if team.mega_count > 0 && item.is_some_and(|i| i.mega_stone) {
            continue;
        }
        if team.z_count > 0 && item.is_some_and(|i| i.z_move) {
            continue;
        }
        if cap_of(rules.item_caps, &candidate.item).is_some_and(|cap| team.count(&candidate.item) >= cap) {
            continue;
        }
        if rules.item_clause && team.count(&candidate.item) > 0 {
            continue;
        }

        // --- Ability filters ---
        if let Some(needed) = weather_required_by(&candidate.ability) {
            if team.weather != Some(needed) {
                continue;
            }
        }
        if team.weather.is_some() && weather_set_by(&candidate.ability).is_some() {
            continue;
        }

        // --- Move filters ---
        if candidate
            .moves
            .iter()
            .any(|m| cap_of(rules.move_caps, m).is_some_and(|cap| team.count(m) >= cap))
        {
            continue;
        }
        let fills_family = candidate.moves.iter().any(|m| {
            rules
                .required_moves
                .iter()
                .any(|(id, family)| m == id && !team.families.contains(family))
        });

        if fills_family {
            priority.push(candidate);
        } else {
            effective.push(candidate);
        }
    }

    if priority.is_empty() {
        rng.sample_remove(&mut effective)
    } else {
        rng.sample_remove(&mut priority)
    }
}

fn to_creature_set<R: RandomSource>(
    rng: &mut R,
    dex: &Dex,
    rules: &FactoryRules,
    tier: &str,
    candidate: Candidate,
) -> CreatureSet {
    let set = candidate.set;
    let species = dex.species(&Id::from(set.species.as_str()));
    let base_name = species
        .map(|s| s.base_species.clone())
        .unwrap_or_else(|| set.species.clone());
    let gender = set
        .gender
        .or_else(|| species.and_then(|s| s.gender))
        .unwrap_or_else(|| if rng.chance(1, 2) { Gender::M } else { Gender::F });
    let nature = rng.sample(&set.nature).cloned();
    let default_level = if tier == "LC" { rules.lc_level } else { rules.level };

    CreatureSet {
        name: set.name.clone().unwrap_or(base_name),
        species: set.species.clone(),
        gender: Some(gender),
        moves: candidate.moves,
        ability: candidate.ability,
        item: Some(candidate.item),
        evs: set.evs.unwrap_or_default(),
        ivs: set.ivs.unwrap_or(StatTable::uniform(31)),
        nature,
        level: set.level.unwrap_or(default_level),
        happiness: set.happiness.unwrap_or(255),
        shiny: set.shiny || rng.chance(1, 1024),
        gigantamax: false,
    }
}

fn incomplete(format: &Format, seed: u64, accepted: usize) -> TeamGenError {
    TeamGenError::RosterIncomplete {
        format: format.id.clone(),
        seed,
        accepted,
    }
}

/// The tier to draw from: `Mono` under the same-type clause, otherwise any tier present.
fn choose_tier<R: RandomSource>(rng: &mut R, format: &Format, pools: &FactoryPools) -> Option<String> {
    let names = pools.tier_names();
    if format.has_rule(Rule::SameTypeClause) && names.contains(&"Mono") {
        return Some("Mono".to_string());
    }
    rng.sample(&names).map(|name| name.to_string())
}

/// Types held by at least one species of the tier that has a set.
fn tier_types(dex: &Dex, species_pool: &BTreeMap<Id, FactorySpecies>) -> BTreeSet<PokemonType> {
    species_pool
        .iter()
        .filter(|(_, entry)| !entry.sets.is_empty())
        .filter_map(|(id, _)| dex.species(id))
        .flat_map(|species| species.types.iter().copied())
        .collect()
}

/// Build a factory team under the given flavor rules.
///
/// Attempts that fail the quality gate are retried; the attempt at the depth
/// ceiling keeps only the species clause and is returned as it stands. With
/// pools that pass [`FactoryPools::validate`] that attempt always fills the team.
pub fn factory_team<R: RandomSource>(
    rng: &mut R,
    dex: &Dex,
    format: &Format,
    pools: &FactoryPools,
    rules: &FactoryRules,
) -> TeamGenResult<Vec<CreatureSet>> {
    let Some(tier) = choose_tier(rng, format, pools) else {
        return Err(incomplete(format, rng.seed(), 0));
    };
    let Some(species_pool) = pools.tier(&tier) else {
        return Err(incomplete(format, rng.seed(), 0));
    };
    let tier_value = Tier::from_str(&tier).ok().and_then(Tier::factory_value);
    let mono_type = if format.has_rule(Rule::SameTypeClause) {
        let present: Vec<PokemonType> = tier_types(dex, species_pool).into_iter().collect();
        rng.sample(&present).copied()
    } else {
        None
    };

    let mut best = 0;
    for depth in 0..=rules.depth_ceiling {
        let forced = depth == rules.depth_ceiling;
        let (team, data) = factory_attempt(rng, dex, rules, &tier, species_pool, tier_value, mono_type, forced);
        best = best.max(team.len());

        if team.len() < TEAM_SIZE {
            tracing::debug!(rules = rules.name, depth, accepted = team.len(), "factory attempt short");
            continue;
        }
        if forced {
            tracing::warn!(rules = rules.name, tier = %tier, "accepting factory team at depth ceiling");
            return Ok(team);
        }
        if let Some(missing) = rules.required_families.iter().find(|f| !data.families.contains(f)) {
            tracing::debug!(rules = rules.name, depth, ?missing, "factory team missing move family");
            continue;
        }
        if data.scoreboard.has_major_weakness() {
            tracing::debug!(rules = rules.name, depth, "factory team has a major weakness");
            continue;
        }

        tracing::info!(format = %format.id, tier = %tier, depth, "built factory team");
        return Ok(team);
    }

    tracing::warn!(format = %format.id, accepted = best, "factory team incomplete");
    Err(incomplete(format, rng.seed(), best))
}

#[allow(clippy::too_many_arguments)]
fn factory_attempt<R: RandomSource>(
    rng: &mut R,
    dex: &Dex,
    rules: &FactoryRules,
    tier: &str,
    species_pool: &BTreeMap<Id, FactorySpecies>,
    tier_value: Option<f32>,
    mono_type: Option<PokemonType>,
    forced: bool,
) -> (Vec<CreatureSet>, TeamData) {
    let mut team: Vec<CreatureSet> = Vec::with_capacity(TEAM_SIZE);
    let mut data = TeamData::default();
    let mut pool: Vec<(&Id, &FactorySpecies)> = species_pool
        .iter()
        .filter(|(_, entry)| !entry.sets.is_empty())
        .collect();

    while team.len() < TEAM_SIZE {
        let Some((id, entry)) = rng.sample_remove(&mut pool) else {
            break;
        };
        let Some(species) = dex.species(id) else {
            continue;
        };

        // --- Species clause ---
        let base = species.base_species_id();
        if data.base_formes.contains(&base) {
            continue;
        }

        if !forced {
            if let (Some(ceiling), Some(value)) = (tier_value, species.tier.factory_value()) {
                if value > ceiling {
                    continue;
                }
            }
            if data.mega_count >= 1 && entry.flags.mega_only {
                continue;
            }
        }

        let Some(candidate) = factory_set(rng, dex, rules, entry, &data, forced) else {
            continue;
        };
        let item = dex.item(&candidate.item);
        let is_mega = item.is_some_and(|i| i.mega_stone);
        let is_z = item.is_some_and(|i| i.z_move);
        let types = species.types.clone();

        let mut combo = species.type_combo();
        if rules.weather_combos && matches!(candidate.ability.as_str(), "drought" | "drizzle") {
            combo = candidate.ability.to_string();
        }

        if !forced {
            if data.mega_count >= 1 && is_mega {
                continue;
            }
            if data.z_count >= 1 && is_z {
                continue;
            }
            if candidate.ability == "illusion" && team.len() == TEAM_SIZE - 1 {
                continue;
            }
            if let Some(mono) = mono_type {
                if !types.contains(&mono) {
                    continue;
                }
            } else {
                if rules.throttle_third_of_type
                    && types
                        .iter()
                        .any(|t| data.type_count.get(t).copied().unwrap_or(0) > 1)
                    && rng.chance(4, 5)
                {
                    continue;
                }
                if data.combos.contains(&combo) {
                    continue;
                }
            }
        }

        // --- Accept ---
        for t in &types {
            *data.type_count.entry(*t).or_insert(0) += 1;
        }
        data.combos.insert(combo);
        data.base_formes.insert(base);
        if is_mega {
            data.mega_count += 1;
        }
        if is_z {
            data.z_count += 1;
        }
        *data.has.entry(candidate.item.clone()).or_insert(0) += 1;
        if let Some(weather) = weather_set_by(&candidate.ability) {
            data.weather = Some(weather);
        }
        for move_ in &candidate.moves {
            *data.has.entry(move_.clone()).or_insert(0) += 1;
            for (id, family) in rules.required_moves {
                if move_ == id {
                    data.families.insert(*family);
                }
            }
        }
        data.scoreboard.record(&types, &candidate.ability);

        team.push(to_creature_set(rng, dex, rules, tier, candidate));
    }

    (team, data)
}
