use super::mode_pool;
use super::set_builder::{build_set, SetContext};
use crate::dex::Dex;
use crate::errors::{TeamGenError, TeamGenResult};
use crate::format::{Format, GeneratorOptions, Rule};
use crate::prng::RandomSource;
use crate::sets::{sets_weather, CreatureSet, TeamDetails};
use schema::{Id, PokemonType, SpeciesData, Tier};
use std::collections::{BTreeMap, BTreeSet};
use strum::IntoEnumIterator;

pub const TEAM_SIZE: usize = 6;

/// Which pass of team assembly admitted a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    /// Tier, type, combination and weather limits all apply.
    Strict,
    /// Only the species clause and the throttles apply.
    Relaxed,
}

/// A finished roster together with the pass that admitted each member.
#[derive(Debug, Clone)]
pub struct AssembledTeam {
    pub sets: Vec<CreatureSet>,
    pub passes: Vec<Pass>,
    pub details: TeamDetails,
}

/// Per-team bookkeeping for the strict-pass caps.
#[derive(Debug, Default)]
struct TeamCounts {
    base_formes: BTreeSet<Id>,
    tiers: BTreeMap<Tier, u32>,
    types: BTreeMap<PokemonType, u32>,
    combos: BTreeMap<String, u32>,
}

impl TeamCounts {
    fn record(&mut self, species: &SpeciesData) {
        self.base_formes.insert(species.base_species_id());
        *self.tiers.entry(species.tier).or_insert(0) += 1;
        for t in &species.types {
            *self.types.entry(*t).or_insert(0) += 1;
        }
        *self.combos.entry(species.type_combo()).or_insert(0) += 1;
    }
}

/// Species that come in many interchangeable formes get thinned out so they
/// don't crowd the pool.
fn throttled<R: RandomSource>(rng: &mut R, species: &SpeciesData) -> bool {
    match species.base_species_id().as_str() {
        "arceus" | "silvally" => rng.chance(17, 18),
        "rotom" => rng.chance(5, 6),
        "zygarde" => rng.chance(2, 3),
        "gastrodon" | "lycanroc" | "magearna" | "necrozma" | "toxtricity" | "urshifu" => rng.chance(1, 2),
        _ => false,
    }
}

fn eligible_pool<'a>(
    dex: &'a Dex,
    format: &Format,
    mono_type: Option<PokemonType>,
    taken: &BTreeSet<Id>,
) -> Vec<&'a SpeciesData> {
    dex.all_species()
        .filter(|s| s.gen <= format.generation && !s.nonstandard)
        .filter(|s| !mode_pool(s, format.is_doubles()).is_empty())
        .filter(|s| !taken.contains(&s.base_species_id()))
        .filter(|s| match mono_type {
            None => true,
            Some(t) => {
                s.has_type(t)
                    || s.battle_only
                        .as_ref()
                        .and_then(|base| dex.species(base))
                        .is_some_and(|base| base.has_type(t))
            }
        })
        .collect()
}

/// Build a full random team for `format`.
pub fn random_team<R: RandomSource>(
    rng: &mut R,
    dex: &Dex,
    format: &Format,
    options: &GeneratorOptions,
) -> TeamGenResult<Vec<CreatureSet>> {
    assemble(rng, dex, format, options).map(|team| team.sets)
}

pub(crate) fn assemble<R: RandomSource>(
    rng: &mut R,
    dex: &Dex,
    format: &Format,
    options: &GeneratorOptions,
) -> TeamGenResult<AssembledTeam> {
    let is_monotype = format.has_rule(Rule::SameTypeClause);
    let mono_type = if is_monotype {
        let all_types: Vec<PokemonType> = PokemonType::iter().collect();
        rng.sample(&all_types).copied()
    } else {
        None
    };
    let potd = options
        .species_of_the_day
        .as_ref()
        .filter(|_| format.has_rule(Rule::PokemonOfTheDay))
        .and_then(|id| dex.species(id));

    let tier_limit = if is_monotype { 2 } else { 1 };
    let combo_limit = if is_monotype { 2 } else { 1 };

    let mut sets: Vec<CreatureSet> = Vec::with_capacity(TEAM_SIZE);
    let mut passes: Vec<Pass> = Vec::with_capacity(TEAM_SIZE);
    let mut details = TeamDetails::default();
    let mut counts = TeamCounts::default();

    for pass in [Pass::Strict, Pass::Relaxed] {
        if sets.len() >= TEAM_SIZE {
            break;
        }
        let strict = pass == Pass::Strict;
        let mut pool = eligible_pool(dex, format, mono_type, &counts.base_formes);

        while sets.len() < TEAM_SIZE {
            let Some(mut species) = rng.sample_remove(&mut pool) else {
                break;
            };
            // The species of the day takes the second slot unless its line is already in.
            let featured = match potd {
                Some(potd) if sets.len() == 1 && !counts.base_formes.contains(&potd.base_species_id()) => {
                    species = potd;
                    true
                }
                _ => false,
            };

            // --- Species clause and throttles ---
            let base = species.base_species_id();
            if counts.base_formes.contains(&base) {
                continue;
            }
            if !featured && throttled(rng, species) {
                continue;
            }
            if base == "zoroark" && sets.len() > 4 {
                continue;
            }

            // --- Strict caps ---
            if strict && !featured {
                let tier_count = counts.tiers.get(&species.tier).copied().unwrap_or(0);
                if tier_count >= tier_limit && !rng.chance(1, 5u32.pow(tier_count)) {
                    tracing::debug!(species = %species.id, tier = %species.tier, "tier cap");
                    continue;
                }
                if !is_monotype
                    && species
                        .types
                        .iter()
                        .any(|t| counts.types.get(t).copied().unwrap_or(0) > 1)
                {
                    tracing::debug!(species = %species.id, "type cap");
                    continue;
                }
                if counts.combos.get(&species.type_combo()).copied().unwrap_or(0) >= combo_limit {
                    tracing::debug!(species = %species.id, combo = %species.type_combo(), "type combination cap");
                    continue;
                }
            }

            let set = build_set(
                rng,
                &SetContext {
                    dex,
                    team_details: &details,
                    is_doubles: format.is_doubles(),
                    is_lead: sets.is_empty(),
                },
                species,
            );

            if strict && !featured && details.has_weather() && sets_weather(&set) {
                tracing::debug!(species = %species.id, "second weather setter");
                continue;
            }

            // --- Accept ---
            details.record(&set, sets.len() + 1);
            counts.record(species);
            sets.push(set);
            passes.push(pass);
        }
    }

    if sets.len() < TEAM_SIZE {
        tracing::warn!(format = %format.id, seed = rng.seed(), accepted = sets.len(), "random team incomplete");
        return Err(TeamGenError::RosterIncomplete {
            format: format.id.clone(),
            seed: rng.seed(),
            accepted: sets.len(),
        });
    }

    // The illusion user takes on the level of the last slot it will usually disguise as.
    if let Some(slot) = details.illusion {
        let last_level = sets[TEAM_SIZE - 1].level;
        if let Some(illusion) = sets.get_mut(slot - 1) {
            illusion.level = last_level;
        }
    }

    tracing::info!(format = %format.id, seed = rng.seed(), "built random team");
    Ok(AssembledTeam { sets, passes, details })
}
