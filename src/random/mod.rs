//! Rule-driven random sets and teams.

pub mod abilities;
pub mod counter;
pub mod items;
pub mod legacy;
pub mod move_rules;
pub mod moves;
pub mod set_builder;
pub mod team;

use schema::{Id, SpeciesData};

/// The curated move pool for the game mode; doubles falls back to the singles pool.
pub fn mode_pool(species: &SpeciesData, is_doubles: bool) -> &[Id] {
    let data = &species.random_battle;
    if is_doubles && !data.doubles_moves.is_empty() {
        &data.doubles_moves
    } else {
        &data.moves
    }
}
