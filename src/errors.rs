use schema::Id;
use std::path::PathBuf;

/// The one failure a team build can surface to its caller.
///
/// Carries everything needed to reproduce the build: the format and the seed
/// of the random stream that was consumed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TeamGenError {
    #[error("could not build a random team for {format} (seed={seed}, accepted {accepted} of 6)")]
    RosterIncomplete {
        format: Id,
        seed: u64,
        accepted: usize,
    },
}

/// Errors raised while loading or validating catalog and configuration data.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    #[error("{owner} references unknown {kind} '{id}'")]
    DanglingReference {
        owner: Id,
        kind: &'static str,
        id: Id,
    },

    #[error("factory pool '{pool}' needs at least 6 distinct base species, found {found}")]
    FactoryPoolTooSmall { pool: String, found: usize },

    #[error("factory pool '{pool}' lists {species} without any sets")]
    FactorySpeciesWithoutSets { pool: String, species: Id },

    #[error("factory set data has no tiers")]
    EmptyFactorySets,

    #[error("format '{format}' needs factory set data but none was loaded")]
    MissingFactorySets { format: Id },

    #[error("unknown format '{0}'")]
    UnknownFormat(Id),
}

/// Type alias for Results using TeamGenError
pub type TeamGenResult<T> = Result<T, TeamGenError>;

/// Type alias for Results using CatalogError
pub type CatalogResult<T> = Result<T, CatalogError>;
