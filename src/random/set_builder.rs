use super::abilities::{select_ability, AbilityContext};
use super::items::{select_item, ItemEnv};
use super::moves::select_moves;
use super::mode_pool;
use crate::dex::Dex;
use crate::prng::RandomSource;
use crate::sets::{CreatureSet, TeamDetails};
use crate::stats::hp_stat;
use schema::{Id, PokemonType, SpeciesData, StatTable};

pub const DEFAULT_LEVEL: u8 = 80;
const EV_PER_STAT: u8 = 84;
const MAX_IV: u8 = 31;

/// What a single set build needs to know about its surroundings.
pub struct SetContext<'a> {
    pub dex: &'a Dex,
    pub team_details: &'a TeamDetails,
    pub is_doubles: bool,
    /// Whether this set will lead the team.
    pub is_lead: bool,
}

/// The species name a set should display, and whether it is a Gigantamax set.
fn resolve_forme<R: RandomSource>(rng: &mut R, dex: &Dex, species: &SpeciesData) -> (String, bool) {
    if let Some(base) = species.battle_only.as_ref().and_then(|id| dex.species(id)) {
        return (base.name.clone(), false);
    }
    if species.is_gigantamax() {
        let name = species.name.trim_end_matches("-Gmax").to_string();
        return (name, true);
    }
    if !species.cosmetic_formes.is_empty() {
        let mut formes = vec![species.name.clone()];
        formes.extend(species.cosmetic_formes.iter().cloned());
        if let Some(forme) = rng.sample(&formes) {
            return (forme.clone(), false);
        }
    }
    (species.name.clone(), false)
}

/// Build one random set for `species`.
pub fn build_set<R: RandomSource>(rng: &mut R, ctx: &SetContext, species: &SpeciesData) -> CreatureSet {
    let dex = ctx.dex;

    // --- Step 0: Forme ---
    let (forme, gigantamax) = resolve_forme(rng, dex, species);

    // --- Step 1: Moves ---
    let mut candidates: Vec<Id> = mode_pool(species, ctx.is_doubles).to_vec();
    if candidates.is_empty() {
        candidates = dex
            .learnset(&species.id)
            .or_else(|| dex.learnset(&species.base_species_id()))
            .map(|learnset| learnset.all_moves())
            .unwrap_or_default();
    }
    let abilities: Vec<Id> = species.abilities.iter().cloned().collect();
    let selection = select_moves(
        rng,
        dex,
        species,
        &abilities,
        &candidates,
        ctx.team_details,
        ctx.is_doubles,
    );
    let moves = selection.moves;
    let counter = selection.counter;
    let has = |id: &str| moves.iter().any(|m| m == id);

    // --- Step 2: Ability ---
    let ability = select_ability(
        rng,
        &AbilityContext {
            dex,
            species,
            moves: &moves,
            abilities: &abilities,
            counter: &counter,
            team_details: ctx.team_details,
            is_doubles: ctx.is_doubles,
        },
    );

    // --- Step 3: Item ---
    let item = select_item(
        rng,
        &ItemEnv {
            dex,
            species,
            moves: &moves,
            ability: &ability,
            counter: &counter,
            team_details: ctx.team_details,
            is_doubles: ctx.is_doubles,
            is_lead: ctx.is_lead,
        },
    );

    // --- Step 4: Level and stat spread ---
    let level = if ctx.is_doubles {
        species.random_battle.doubles_level.or(species.random_battle.level)
    } else {
        species.random_battle.level
    }
    .unwrap_or(DEFAULT_LEVEL);

    let mut evs = StatTable::uniform(EV_PER_STAT);
    let mut ivs = StatTable::uniform(MAX_IV);

    let rock_weakness = dex.type_effectiveness(PokemonType::Rock, &species.types);
    let sitrus = item == "sitrusberry";
    while evs.hp > 1 {
        let hp = hp_stat(species.base_stats.hp, ivs.hp, evs.hp, level);
        if has("substitute") && has("reversal") {
            if hp % 4 > 0 {
                break;
            }
        } else if has("substitute") && (sitrus || (has("bellydrum") && item == "salacberry")) {
            // Four Substitutes land exactly on the berry threshold.
            if hp % 4 == 0 {
                break;
            }
        } else if has("bellydrum") && (sitrus || ability == "gluttony") {
            if hp % 2 == 0 {
                break;
            }
        } else if rock_weakness <= 0 || hp % (4 / rock_weakness as u16) > 0 {
            // One more switch-in through Stealth Rock.
            break;
        }
        evs.hp -= 4;
    }

    let physical_free = counter.physical == 0 && !has("copycat") && !has("transform");
    if physical_free {
        evs.atk = 0;
        ivs.atk = 0;
    }
    if has("gyroball") || has("trickroom") {
        evs.spe = 0;
        ivs.spe = 0;
    }

    // --- Step 5: Finishing ---
    let happiness = if has("frustration") { 0 } else { 255 };
    let shiny = rng.chance(1, 1024);

    CreatureSet {
        name: species.base_species.clone(),
        species: forme,
        gender: species.gender,
        moves,
        ability,
        item: Some(item),
        evs,
        ivs,
        nature: None,
        level,
        happiness,
        shiny,
        gigantamax,
    }
}
