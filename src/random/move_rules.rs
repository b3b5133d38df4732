//! Rejection rules applied to each held move during move selection.
//!
//! Moves with a named rule are looked up through [`MoveRule`]; every move is
//! also checked against the blanket rules in [`should_reject`].

use super::counter::{is_setup_move, MoveCounter, SetupType, NO_STAB};
use crate::dex::Dex;
use crate::sets::TeamDetails;
use schema::{Id, MoveCategory, MoveData, PokemonType, SpeciesData};
use std::str::FromStr;
use strum::EnumString;

/// Moves that stay through a category conflict with the set's setup.
const SETUP_EXCEPTIONS: &[&str] = &[
    "closecombat",
    "diamondstorm",
    "dracometeor",
    "extremespeed",
    "overheat",
    "suckerpunch",
    "superpower",
];

/// Utility moves never dropped to make room for same-type attacks.
const ALWAYS_KEPT: &[&str] = &[
    "facade",
    "lightscreen",
    "reflect",
    "sleeptalk",
    "spore",
    "substitute",
    "toxic",
    "whirlpool",
];

const STATUS_INFLICTORS: &[&str] = &["hypnosis", "spore", "thunderwave", "toxic", "willowisp", "yawn"];

/// Everything a rule may look at while judging one held move.
pub struct MoveContext<'a> {
    pub dex: &'a Dex,
    pub species: &'a SpeciesData,
    pub moves: &'a [Id],
    pub pool: &'a [Id],
    pub abilities: &'a [Id],
    pub counter: &'a MoveCounter,
    pub team_details: &'a TeamDetails,
    pub is_doubles: bool,
}

impl MoveContext<'_> {
    fn has(&self, id: &str) -> bool {
        self.moves.iter().any(|m| m == id)
    }

    fn has_any(&self, ids: &[&str]) -> bool {
        ids.iter().any(|id| self.has(id))
    }

    fn pool_has(&self, id: &str) -> bool {
        self.pool.iter().any(|m| m == id)
    }

    fn has_ability(&self, id: &str) -> bool {
        self.abilities.iter().any(|a| a == id)
    }

    fn has_type(&self, t: PokemonType) -> bool {
        self.species.has_type(t)
    }

    fn setup(&self) -> bool {
        self.counter.setup_type.is_some()
    }

    /// Whether the pool still offers a real attack of type `t`.
    fn pool_has_attack_of(&self, t: PokemonType) -> bool {
        self.pool.iter().filter_map(|id| self.dex.move_data(id)).any(|m| {
            m.move_type == t
                && m.is_attack()
                && m.has_real_power()
                && !NO_STAB.contains(&m.id.as_str())
        })
    }

    fn pool_has_stab(&self) -> bool {
        self.species.types.iter().any(|&t| self.pool_has_attack_of(t))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum MoveRule {
    Acrobatics,
    BatonPass,
    BulkUp,
    #[strum(serialize = "calmmind", serialize = "nastyplot")]
    SpecialBoost,
    CloseCombat,
    Defog,
    DragonTail,
    Earthquake,
    Explosion,
    FakeOut,
    FireBlast,
    FirePunch,
    FlameCharge,
    Flamethrower,
    Fly,
    GigaDrain,
    Haze,
    HealBell,
    #[strum(serialize = "healingwish", serialize = "memento")]
    Sacrifice,
    HydroPump,
    HyperVoice,
    IceBeam,
    LeechSeed,
    #[strum(serialize = "lightscreen", serialize = "reflect")]
    Screen,
    #[strum(serialize = "nightshade", serialize = "seismictoss")]
    FixedDamage,
    Payback,
    Protect,
    RapidSpin,
    Rest,
    #[strum(serialize = "roar", serialize = "whirlwind")]
    Phazing,
    SleepTalk,
    Spikes,
    StealthRock,
    StickyWeb,
    StoredPower,
    Substitute,
    SuckerPunch,
    Surf,
    SwordsDance,
    #[strum(serialize = "switcheroo", serialize = "trick")]
    ItemSwap,
    Teleport,
    Thunderbolt,
    #[strum(serialize = "thunderwave", serialize = "toxic", serialize = "willowisp")]
    StatusInflict,
    ToxicSpikes,
    TrickRoom,
    #[strum(serialize = "uturn")]
    UTurn,
    VoltSwitch,
}

impl MoveRule {
    pub fn lookup(id: &str) -> Option<Self> {
        Self::from_str(id).ok()
    }

    /// Whether this rule drops the move from the current moveset.
    pub fn rejects(self, ctx: &MoveContext) -> bool {
        let counter = ctx.counter;
        match self {
            MoveRule::Acrobatics => !ctx.setup() && !ctx.has_ability("unburden"),
            MoveRule::BatonPass => !ctx.setup() && !ctx.has("substitute"),
            MoveRule::BulkUp => {
                counter.physical + counter.physical_pool < 2 || ctx.has("swordsdance")
            }
            MoveRule::SpecialBoost => {
                counter.special + counter.special_pool < 2
                    || ctx.has_any(&["switcheroo", "trick", "trickroom"])
            }
            MoveRule::CloseCombat => {
                (ctx.has("bulkup") && ctx.has("drainpunch")) || ctx.has("superpower")
            }
            MoveRule::Defog => {
                ctx.setup() || ctx.has_any(&["spikes", "stealthrock"]) || ctx.team_details.defog
            }
            MoveRule::DragonTail => ctx.setup() || counter.speed_setup > 0 || ctx.has_any(&["roar", "whirlwind"]),
            MoveRule::Earthquake => ctx.has("highhorsepower"),
            MoveRule::Explosion => ctx.setup() || counter.recovery > 0 || ctx.has("wish"),
            MoveRule::FakeOut => ctx.setup() || ctx.has_any(&["substitute", "switcheroo", "trick"]),
            MoveRule::FireBlast => ctx.has("overheat") && !ctx.setup(),
            MoveRule::FirePunch => ctx.has("flareblitz"),
            MoveRule::FlameCharge => ctx.pool_has("swordsdance"),
            MoveRule::Flamethrower => ctx.has_any(&["fireblast", "overheat"]),
            MoveRule::Fly => !ctx.setup(),
            MoveRule::GigaDrain => ctx.has_any(&["energyball", "leafstorm"]),
            MoveRule::Haze => ctx.setup() || ctx.has("raindance"),
            MoveRule::HealBell => ctx.pool_has("protect") || ctx.pool_has("wish"),
            MoveRule::Sacrifice => ctx.setup() || counter.recovery > 0 || ctx.has("substitute"),
            MoveRule::HydroPump => ctx.has("scald") && counter.special < 4,
            MoveRule::HyperVoice => ctx.has_type(PokemonType::Electric) && ctx.pool_has("thunderbolt"),
            MoveRule::IceBeam => ctx.has("freezedry"),
            MoveRule::LeechSeed => ctx.setup(),
            MoveRule::Screen => ctx.setup() || ctx.team_details.screens,
            MoveRule::FixedDamage => counter.damaging_moves.len() > 1 || ctx.setup(),
            MoveRule::Payback => counter.status > 0,
            MoveRule::Protect => {
                (ctx.setup() && !ctx.has("wish"))
                    || ctx.has("rest")
                    || (ctx.has("lightscreen") && ctx.has("reflect"))
            }
            MoveRule::RapidSpin => ctx.setup() || ctx.team_details.rapid_spin,
            MoveRule::Rest => {
                let bulky_setup = !ctx.has("sleeptalk")
                    && ["bulkup", "calmmind", "coil", "curse"].iter().any(|m| ctx.pool_has(m));
                (ctx.setup() && !ctx.has("sleeptalk"))
                    || bulky_setup
                    || counter.recovery > 0
                    || ctx.has("healingwish")
            }
            MoveRule::Phazing => ctx.setup() || ctx.has("dragontail"),
            MoveRule::SleepTalk => !ctx.has("rest"),
            MoveRule::Spikes => ctx.setup() || ctx.team_details.spikes >= 2,
            MoveRule::StealthRock => {
                ctx.setup()
                    || counter.speed_setup > 0
                    || ctx.team_details.stealth_rock
                    || ctx.has_any(&["rest", "substitute", "trickroom", "teleport"])
            }
            MoveRule::StickyWeb => ctx.setup() || ctx.team_details.sticky_web,
            MoveRule::StoredPower => !ctx.setup(),
            MoveRule::Substitute => {
                ctx.has_any(&["rest", "uturn", "voltswitch"]) || ctx.pool_has("shiftgear")
            }
            MoveRule::SuckerPunch => {
                ctx.has("rest")
                    || counter.damaging_moves.len() < 2
                    || counter.setup_type == Some(SetupType::Special)
            }
            MoveRule::Surf => ctx.has_any(&["hydropump", "scald"]),
            MoveRule::SwordsDance => {
                counter.physical + counter.physical_pool < 2 || ctx.has("bulkup")
            }
            MoveRule::ItemSwap => {
                counter.physical + counter.special < 3
                    || ctx.setup()
                    || ctx.has_any(&["acrobatics", "lightscreen", "reflect", "suckerpunch", "trickroom"])
            }
            MoveRule::Teleport => ctx.setup(),
            MoveRule::Thunderbolt => ctx.has_any(&["discharge", "thunder"]),
            MoveRule::StatusInflict => {
                ctx.setup()
                    || counter.speed_setup > 0
                    || STATUS_INFLICTORS.iter().filter(|m| ctx.has(m)).count() > 1
            }
            MoveRule::ToxicSpikes => ctx.setup() || ctx.team_details.toxic_spikes,
            MoveRule::TrickRoom => {
                ctx.setup() || counter.speed_setup > 0 || ctx.has_any(&["lightscreen", "reflect"])
            }
            MoveRule::UTurn => {
                ctx.setup() || counter.speed_setup > 0 || ctx.has_any(&["batonpass", "substitute"])
            }
            MoveRule::VoltSwitch => {
                ctx.setup() || counter.speed_setup > 0 || ctx.has_any(&["batonpass", "magnetrise", "uturn"])
            }
        }
    }
}

/// Whether `t` still lacks a same-type attack the pool could provide.
///
/// Each type has its own notion of when coverage of it is missing; a gap only
/// counts while the pool actually holds an attack of that type.
fn coverage_gap(t: PokemonType, ctx: &MoveContext) -> bool {
    let counter = ctx.counter;
    let base = &ctx.species.base_stats;
    let missing = counter.of_type(t) == 0;

    let gap = match t {
        PokemonType::Bug => missing && ctx.pool_has("megahorn"),
        PokemonType::Dark => missing,
        PokemonType::Dragon => missing && !ctx.has_ability("aerilate") && !ctx.has_ability("pixilate"),
        PokemonType::Electric => missing || ctx.pool_has("thunder"),
        PokemonType::Fairy => missing,
        PokemonType::Fighting => missing,
        PokemonType::Fire => missing,
        PokemonType::Flying => missing && !ctx.has_type(PokemonType::Dragon),
        PokemonType::Ghost => missing && !ctx.has_type(PokemonType::Steel),
        PokemonType::Grass => missing && (base.attack >= 100 || ctx.pool_has("leafstorm")),
        PokemonType::Ground => missing,
        PokemonType::Ice => missing || (ctx.has("icebeam") && ctx.pool_has("freezedry")),
        PokemonType::Normal => {
            (ctx.has_ability("guts") && ctx.pool_has("facade"))
                || (ctx.has_ability("pixilate") && missing)
        }
        PokemonType::Poison => {
            missing
                && (ctx.setup()
                    || ctx.has_ability("adaptability")
                    || ctx.has_ability("sheerforce")
                    || ctx.pool_has("gunkshot"))
        }
        PokemonType::Psychic => {
            missing && (ctx.has_type(PokemonType::Fighting) || ctx.pool_has("calmmind"))
        }
        PokemonType::Rock => missing && base.attack >= 80,
        PokemonType::Steel => missing && base.attack >= 100,
        PokemonType::Water => missing,
    };

    gap && ctx.pool_has_attack_of(t)
}

/// Whether a move is the kind that yields its slot to a same-type attack.
fn yields_to_stab(move_: &MoveData, ctx: &MoveContext) -> bool {
    let id = move_.id.as_str();
    if is_setup_move(id) || move_.weather || move_.stalling || move_.fixed_damage {
        return false;
    }
    if ALWAYS_KEPT.contains(&id) {
        return false;
    }
    if !ctx.is_doubles && move_.category == MoveCategory::Status && move_.flags.heal {
        return false;
    }
    move_.category == MoveCategory::Status
        || !ctx.has_type(move_.move_type)
        || move_.self_switch
        || (move_.base_power > 0 && move_.base_power < 40 && move_.multihit.is_none())
}

/// Full rejection check for one held move: its named rule, then the blanket rules.
pub fn should_reject(move_: &MoveData, ctx: &MoveContext) -> bool {
    let id = move_.id.as_str();
    let counter = ctx.counter;

    if MoveRule::lookup(id).is_some_and(|rule| rule.rejects(ctx)) {
        return true;
    }

    // Priority is wasted once the set boosts its own speed.
    if move_.priority != 0 && counter.speed_setup > 0 {
        return true;
    }

    // --- Category conflicts with the setup ---
    let conflicting = matches!(
        (move_.category, counter.setup_type),
        (MoveCategory::Physical, Some(SetupType::Special)) | (MoveCategory::Special, Some(SetupType::Physical))
    );
    if conflicting && !SETUP_EXCEPTIONS.contains(&id) {
        let stabs: u8 = ctx.species.types.iter().map(|&t| counter.of_type(t)).sum();
        let headroom = stabs <= 1 || counter.of_category(move_.category) < 2;
        if !(ctx.has_type(move_.move_type) && headroom) {
            return true;
        }
    }

    // --- Coverage gaps ---
    if yields_to_stab(move_, ctx) {
        if counter.stab_total() == 0
            && counter.physical_pool + counter.special_pool > 0
            && id != "stickyweb"
            && ctx.pool_has_stab()
        {
            return true;
        }
        if ctx.species.types.iter().any(|&t| coverage_gap(t, ctx)) {
            return true;
        }
    }

    false
}
