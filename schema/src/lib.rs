// Random Teams Schema - Shared catalog definitions
// This crate contains the identifiers, enums and catalog records shared
// between the team generator and anything that produces or consumes its
// data files.

// Re-export the main types
pub use catalog_data::*;
pub use ids::*;
pub use move_types::*;
pub use pokemon_types::*;
pub use species_data::*;

pub mod catalog_data;
pub mod ids;
pub mod move_types;
pub mod pokemon_types;
pub mod species_data;

/// Generation assumed for catalog records that do not declare one.
pub(crate) fn default_gen() -> u8 {
    1
}
