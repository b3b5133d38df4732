use super::counter::MoveCounter;
use crate::dex::Dex;
use crate::prng::RandomSource;
use crate::sets::TeamDetails;
use ordered_float::OrderedFloat;
use schema::{Id, PokemonType, SpeciesData};
use std::cmp::Reverse;
use std::str::FromStr;
use strum::EnumString;

/// Everything an ability veto may look at.
pub struct AbilityContext<'a> {
    pub dex: &'a Dex,
    pub species: &'a SpeciesData,
    pub moves: &'a [Id],
    pub abilities: &'a [Id],
    pub counter: &'a MoveCounter,
    pub team_details: &'a TeamDetails,
    pub is_doubles: bool,
}

impl AbilityContext<'_> {
    fn has(&self, id: &str) -> bool {
        self.moves.iter().any(|m| m == id)
    }

    fn has_ability(&self, id: &str) -> bool {
        self.abilities.iter().any(|a| a == id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum AbilityVeto {
    Adaptability,
    Analytic,
    Blaze,
    Chlorophyll,
    Competitive,
    #[strum(serialize = "compoundeyes", serialize = "noguard")]
    AccuracyBoost,
    Contrary,
    Defiant,
    Download,
    FlashFire,
    Gluttony,
    Guts,
    Hustle,
    Hydration,
    Intimidate,
    IronFist,
    LiquidVoice,
    Moxie,
    Overgrow,
    Prankster,
    Pressure,
    #[strum(serialize = "reckless", serialize = "rockhead")]
    RecoilBoost,
    #[strum(serialize = "sandforce", serialize = "sandrush", serialize = "sandveil")]
    SandBoost,
    SereneGrace,
    SheerForce,
    Simple,
    SkillLink,
    #[strum(serialize = "slushrush", serialize = "snowcloak")]
    HailBoost,
    Sniper,
    SolarPower,
    StrongJaw,
    Sturdy,
    Swarm,
    SwiftSwim,
    Technician,
    TintedLens,
    Torrent,
    Unaware,
    Unburden,
    WaterAbsorb,
    WeakArmor,
}

impl AbilityVeto {
    pub fn lookup(id: &str) -> Option<Self> {
        Self::from_str(id).ok()
    }

    /// Whether the ability would be wasted on this set.
    pub fn vetoes(self, ctx: &AbilityContext) -> bool {
        let counter = ctx.counter;
        let details = ctx.team_details;
        match self {
            AbilityVeto::Adaptability => counter.adaptability < 2,
            AbilityVeto::Analytic => ctx.has("rapidspin") || ctx.species.is_nfe() || ctx.is_doubles,
            AbilityVeto::Blaze => counter.of_type(PokemonType::Fire) == 0,
            AbilityVeto::Chlorophyll => {
                ctx.species.base_stats.speed > 100 || (!ctx.has("sunnyday") && !details.sun)
            }
            AbilityVeto::Competitive => counter.special < 2,
            AbilityVeto::AccuracyBoost => counter.inaccurate == 0,
            AbilityVeto::Contrary => counter.contrary == 0,
            AbilityVeto::Defiant => counter.physical == 0,
            AbilityVeto::Download => counter.damaging_moves.len() < 3 || ctx.has("trick"),
            AbilityVeto::FlashFire => {
                ctx.dex.type_effectiveness(PokemonType::Fire, &ctx.species.types) < 0
                    || ctx.has_ability("drought")
            }
            AbilityVeto::Gluttony => !ctx.has("bellydrum"),
            AbilityVeto::Guts => !ctx.has("facade") && !ctx.has("sleeptalk") && !ctx.species.is_nfe(),
            AbilityVeto::Hustle => counter.physical < 2,
            AbilityVeto::Hydration | AbilityVeto::SwiftSwim => !ctx.has("raindance") && !details.rain,
            AbilityVeto::Intimidate => ctx.has("bodyslam") || ctx.has("rest"),
            AbilityVeto::IronFist => counter.ironfist < 2,
            AbilityVeto::LiquidVoice => counter.sound == 0,
            AbilityVeto::Moxie => counter.physical < 2 || ctx.has("stealthrock"),
            AbilityVeto::Overgrow => counter.of_type(PokemonType::Grass) == 0,
            AbilityVeto::Prankster => counter.status == 0,
            AbilityVeto::Pressure => counter.setup_type.is_some() || counter.status < 2,
            AbilityVeto::RecoilBoost => counter.recoil == 0,
            AbilityVeto::SandBoost => !details.sand && !ctx.has("sandstorm"),
            AbilityVeto::SereneGrace => counter.serenegrace == 0,
            AbilityVeto::SheerForce => counter.sheerforce == 0,
            AbilityVeto::Simple => counter.setup_type.is_none() && !ctx.has("flamecharge"),
            AbilityVeto::SkillLink => counter.skilllink == 0,
            AbilityVeto::HailBoost => !details.hail && !ctx.has("hail"),
            AbilityVeto::Sniper => !ctx.has("focusenergy"),
            AbilityVeto::SolarPower => !details.sun && !ctx.has("sunnyday"),
            AbilityVeto::StrongJaw => counter.strongjaw == 0,
            AbilityVeto::Sturdy => counter.recoil > 0 && counter.recovery == 0,
            AbilityVeto::Swarm => counter.of_type(PokemonType::Bug) == 0 || counter.recovery > 0,
            AbilityVeto::Technician => counter.technician == 0 || ctx.has("tailslap"),
            AbilityVeto::TintedLens => {
                counter.damage as usize >= counter.damaging_moves.len() || counter.status > 2
            }
            AbilityVeto::Torrent => counter.of_type(PokemonType::Water) == 0,
            AbilityVeto::Unaware => counter.setup_type.is_some() || ctx.has("stealthrock"),
            AbilityVeto::Unburden => counter.setup_type.is_none(),
            AbilityVeto::WaterAbsorb => {
                ctx.has("raindance")
                    || ["drizzle", "strongjaw", "unaware", "voltabsorb"]
                        .iter()
                        .any(|a| ctx.has_ability(a))
            }
            AbilityVeto::WeakArmor => ctx.has("shellsmash") || ctx.has("rapidspin"),
        }
    }
}

fn is_vetoed(ability: &str, ctx: &AbilityContext) -> bool {
    let vetoed = AbilityVeto::lookup(ability).is_some_and(|veto| veto.vetoes(ctx));
    if vetoed {
        tracing::trace!(species = %ctx.species.id, ability, "vetoed ability");
    }
    vetoed
}

/// A condition that pins one ability regardless of the ranking.
struct AbilityOverride {
    when: fn(&AbilityContext) -> bool,
    ability: &'static str,
}

const OVERRIDES: &[AbilityOverride] = &[
    AbilityOverride {
        when: |ctx| ctx.species.id == "copperajahgmax",
        ability: "heavymetal",
    },
    AbilityOverride {
        when: |ctx| {
            ctx.has_ability("guts") && (ctx.has("facade") || (ctx.has("rest") && ctx.has("sleeptalk")))
        },
        ability: "guts",
    },
    AbilityOverride {
        when: |ctx| ctx.has_ability("swiftswim") && ctx.has("raindance"),
        ability: "swiftswim",
    },
];

/// Team-support abilities preferred whenever a doubles set may have them.
const DOUBLES_PROMOTIONS: &[&str] = &["intimidate", "friendguard", "healer", "telepathy"];

/// Pick the ability for a finished moveset.
pub fn select_ability<R: RandomSource>(rng: &mut R, ctx: &AbilityContext) -> Id {
    let mut ranked: Vec<(Id, f32)> = Vec::new();
    for ability in ctx.abilities {
        if !ranked.iter().any(|(a, _)| a == ability) {
            ranked.push((ability.clone(), ctx.dex.ability_rating(ability)));
        }
    }
    // Stable: equal ratings keep their declared order.
    ranked.sort_by_key(|(_, rating)| Reverse(OrderedFloat(*rating)));

    let Some((top, _)) = ranked.first().cloned() else {
        return Id::from("noability");
    };

    let mut ability = top.clone();
    if ranked.len() >= 2 {
        if ranked.len() >= 3 && ranked[1].1 <= ranked[2].1 && rng.chance(1, 2) {
            ranked.swap(1, 2);
        }
        if ranked[0].1 <= ranked[1].1 {
            if rng.chance(1, 2) {
                ranked.swap(0, 1);
            }
        } else if ranked[0].1 - 0.6 <= ranked[1].1 && rng.chance(2, 3) {
            ranked.swap(0, 1);
        }

        // --- Walk the vetoes down the ranking ---
        ability = ranked[0].0.clone();
        let mut index = 0;
        while is_vetoed(&ability, ctx) {
            match ranked.get(index + 1) {
                Some((next, rating)) if *rating >= 1.0 => {
                    index += 1;
                    ability = next.clone();
                }
                _ => {
                    // All vetoed: keep the best rating from before the swaps, not ranked[0].
                    ability = top.clone();
                    break;
                }
            }
        }
    }

    for rule in OVERRIDES {
        if ctx.abilities.iter().any(|a| a == rule.ability) && (rule.when)(ctx) {
            ability = Id::from(rule.ability);
            break;
        }
    }

    if ctx.is_doubles {
        if let Some(promoted) = DOUBLES_PROMOTIONS.iter().find(|a| ctx.has_ability(a)) {
            ability = Id::from(*promoted);
        }
    }

    ability
}
