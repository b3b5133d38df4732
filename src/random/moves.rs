use super::counter::{analyze, MoveCounter};
use super::move_rules::{should_reject, MoveContext};
use crate::dex::Dex;
use crate::prng::RandomSource;
use crate::sets::TeamDetails;
use schema::{Id, SpeciesData};

pub const MAX_MOVES: usize = 4;

/// Result of move selection: the chosen moves and the final tallies over them.
#[derive(Debug, Clone)]
pub struct MoveSelection {
    pub moves: Vec<Id>,
    pub counter: MoveCounter,
}

/// Draw up to four moves from `candidates`, dropping at most one rejected move per pass.
///
/// Rejected attacks are parked in a secondary pool that refills the moveset
/// once the primary pool runs dry, so a set prefers rule-approved moves but
/// still reaches four moves where it can.
pub fn select_moves<R: RandomSource>(
    rng: &mut R,
    dex: &Dex,
    species: &SpeciesData,
    abilities: &[Id],
    candidates: &[Id],
    team_details: &TeamDetails,
    is_doubles: bool,
) -> MoveSelection {
    let mut pool: Vec<Id> = Vec::with_capacity(candidates.len());
    for id in candidates {
        if !pool.contains(id) {
            pool.push(id.clone());
        }
    }
    let mut rejected: Vec<Id> = Vec::new();
    let mut moves: Vec<Id> = Vec::with_capacity(MAX_MOVES);

    loop {
        // --- Step 1: Top up the moveset ---
        while moves.len() < MAX_MOVES && (!pool.is_empty() || !rejected.is_empty()) {
            let drawn = if pool.is_empty() {
                rng.sample_remove(&mut rejected)
            } else {
                rng.sample_remove(&mut pool)
            };
            if let Some(id) = drawn {
                if !moves.contains(&id) {
                    moves.push(id);
                }
            }
        }

        // --- Step 2: Judge every held move, dropping the first rejection ---
        let counter = analyze(dex, &moves, &species.types, abilities, &pool);
        let mut dropped = None;

        for (index, id) in moves.iter().enumerate() {
            let Some(move_) = dex.move_data(id) else {
                continue;
            };
            let ctx = MoveContext {
                dex,
                species,
                moves: &moves,
                pool: &pool,
                abilities,
                counter: &counter,
                team_details,
                is_doubles,
            };
            let mut reject = should_reject(move_, &ctx);

            // Rest without Sleep Talk is fine, but Sleep Talk without Rest is not.
            if reject && id == "rest" {
                if let Some(position) = pool.iter().position(|m| m == "sleeptalk") {
                    if pool.len() < 2 {
                        reject = false;
                    } else {
                        pool.swap_remove(position);
                    }
                }
            }

            if reject && (!pool.is_empty() || !rejected.is_empty()) {
                tracing::trace!(species = %species.id, move_id = %id, "rejected move");
                dropped = Some((index, move_.is_attack()));
                break;
            }
        }

        if let Some((index, park)) = dropped {
            let id = moves.remove(index);
            if !pool.is_empty() && park {
                rejected.push(id);
            }
        }

        if !(moves.len() < MAX_MOVES && (!pool.is_empty() || !rejected.is_empty())) {
            let counter = analyze(dex, &moves, &species.types, abilities, &pool);
            return MoveSelection { moves, counter };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prng::SeededRng;
    use crate::tests::common::fixture_dex;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeSet;

    fn ids(names: &[&str]) -> Vec<Id> {
        names.iter().map(|n| Id::from(*n)).collect()
    }

    #[test]
    fn test_small_pool_keeps_every_move() {
        let dex = fixture_dex();
        let species = dex.species("golem").unwrap();
        let pool = ids(&["earthquake", "stoneedge"]);
        let mut rng = SeededRng::new(1);

        let selection = select_moves(&mut rng, &dex, species, &ids(&["sturdy"]), &pool, &TeamDetails::default(), false);

        let chosen: BTreeSet<&str> = selection.moves.iter().map(|m| m.as_str()).collect();
        assert_eq!(chosen, BTreeSet::from(["earthquake", "stoneedge"]));
    }

    #[test]
    fn test_moves_are_unique_and_from_pool() {
        let dex = fixture_dex();
        let species = dex.species("golem").unwrap();
        let pool = ids(&[
            "earthquake",
            "stoneedge",
            "stealthrock",
            "explosion",
            "suckerpunch",
            "firepunch",
            "earthquake",
        ]);

        for seed in 0..32 {
            let mut rng = SeededRng::new(seed);
            let selection =
                select_moves(&mut rng, &dex, species, &ids(&["sturdy"]), &pool, &TeamDetails::default(), false);
            assert!(selection.moves.len() <= MAX_MOVES);
            let unique: BTreeSet<&Id> = selection.moves.iter().collect();
            assert_eq!(unique.len(), selection.moves.len(), "seed {seed}: duplicate move");
            assert!(selection.moves.iter().all(|m| pool.contains(m)));
        }
    }

    #[test]
    fn test_sleep_talk_never_without_rest() {
        let dex = fixture_dex();
        let species = dex.species("snorlax").unwrap();
        let pool = ids(&["bodyslam", "curse", "rest", "sleeptalk", "earthquake", "crunch"]);

        for seed in 0..32 {
            let mut rng = SeededRng::new(seed);
            let selection = select_moves(
                &mut rng,
                &dex,
                species,
                &ids(&["thickfat"]),
                &pool,
                &TeamDetails::default(),
                false,
            );
            if selection.moves.iter().any(|m| m == "sleeptalk") {
                assert!(
                    selection.moves.iter().any(|m| m == "rest"),
                    "seed {seed}: {:?}",
                    selection.moves
                );
            }
        }
    }
}
