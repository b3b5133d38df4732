//! Entry point that routes a format to the strategy that builds its teams.

use crate::dex::Dex;
use crate::errors::{CatalogError, CatalogResult, TeamGenResult};
use crate::factory::{self, FactoryPools, FactoryRules};
use crate::format::{Format, GeneratorOptions, TeamKind};
use crate::prng::RandomSource;
use crate::random::legacy::{challenge_cup_team, hackmons_cup_team};
use crate::random::team::random_team;
use crate::sets::CreatureSet;

/// The assembly strategy resolved for a format, with whatever data it needs.
#[derive(Debug, Clone, Copy)]
enum Strategy<'a> {
    Random,
    ChallengeCup,
    HackmonsCup,
    Factory(&'a FactoryPools, &'static FactoryRules),
}

/// A configured generator for one format.
///
/// Borrows the catalog and any factory data; keep one around and call
/// [`Generator::generate`] with a fresh stream per team.
#[derive(Debug, Clone)]
pub struct Generator<'a> {
    dex: &'a Dex,
    format: &'a Format,
    options: GeneratorOptions,
    strategy: Strategy<'a>,
}

impl<'a> Generator<'a> {
    /// Factory formats need their set file, validated against `dex` here;
    /// every other kind ignores `factory`.
    pub fn for_format(
        dex: &'a Dex,
        format: &'a Format,
        options: GeneratorOptions,
        factory: Option<&'a FactoryPools>,
    ) -> CatalogResult<Self> {
        let validated = || -> CatalogResult<&'a FactoryPools> {
            let pools = factory.ok_or_else(|| CatalogError::MissingFactorySets {
                format: format.id.clone(),
            })?;
            pools.validate(dex)?;
            Ok(pools)
        };
        let strategy = match format.team {
            TeamKind::Random => Strategy::Random,
            TeamKind::ChallengeCup => Strategy::ChallengeCup,
            TeamKind::HackmonsCup => Strategy::HackmonsCup,
            TeamKind::Factory => Strategy::Factory(validated()?, &factory::TIERED),
            TeamKind::DoublesFactory => Strategy::Factory(validated()?, &factory::DOUBLES),
        };
        Ok(Self {
            dex,
            format,
            options,
            strategy,
        })
    }

    pub fn format(&self) -> &Format {
        self.format
    }

    /// Build one team, consuming draws from `rng`.
    pub fn generate<R: RandomSource>(&self, rng: &mut R) -> TeamGenResult<Vec<CreatureSet>> {
        tracing::debug!(format = %self.format.id, seed = rng.seed(), kind = ?self.format.team, "generating team");
        match self.strategy {
            Strategy::Random => random_team(rng, self.dex, self.format, &self.options),
            Strategy::ChallengeCup => challenge_cup_team(rng, self.dex, self.format),
            Strategy::HackmonsCup => hackmons_cup_team(rng, self.dex, self.format),
            Strategy::Factory(pools, rules) => {
                factory::factory_team(rng, self.dex, self.format, pools, rules)
            }
        }
    }
}
