//! Held item selection: required items, then an ordered cascade where the first
//! matching row decides.

use super::counter::MoveCounter;
use crate::dex::Dex;
use crate::prng::RandomSource;
use crate::sets::TeamDetails;
use schema::{Id, PokemonType, SpeciesData};

/// Everything an item row may look at.
pub struct ItemEnv<'a> {
    pub dex: &'a Dex,
    pub species: &'a SpeciesData,
    pub moves: &'a [Id],
    pub ability: &'a str,
    pub counter: &'a MoveCounter,
    pub team_details: &'a TeamDetails,
    pub is_doubles: bool,
    pub is_lead: bool,
}

impl ItemEnv<'_> {
    fn has(&self, id: &str) -> bool {
        self.moves.iter().any(|m| m == id)
    }

    fn base_is(&self, base: &str) -> bool {
        self.species.base_species_id() == base
    }

    fn weakness_to(&self, attacking: PokemonType) -> i8 {
        self.dex.type_effectiveness(attacking, &self.species.types)
    }

    fn speed(&self) -> u8 {
        self.species.base_stats.speed
    }

    fn has_any_pivot_or_fakeout(&self) -> bool {
        ["fakeout", "rapidspin", "uturn", "voltswitch"].iter().any(|m| self.has(m))
    }
}

pub enum ItemChoice {
    Fixed(&'static str),
    OneOf(&'static [&'static str]),
    Computed(fn(&ItemEnv) -> &'static str),
    /// `hit` with probability `numerator / denominator`, else `miss`.
    Gamble {
        numerator: u32,
        denominator: u32,
        hit: &'static str,
        miss: &'static str,
    },
}

pub struct ItemRule {
    pub name: &'static str,
    pub when: fn(&ItemEnv) -> bool,
    pub choice: ItemChoice,
}

const GLUTTONY_BERRIES: &[&str] = &["aguavberry", "figyberry", "iapapaberry", "magoberry", "wikiberry"];

pub const ITEM_RULES: &[ItemRule] = &[
    // --- Species-specific ---
    ItemRule {
        name: "eternatus",
        when: |env| env.species.id == "eternatus" && env.counter.status < 2,
        choice: ItemChoice::Fixed("metronome"),
    },
    ItemRule {
        name: "farfetchd",
        when: |env| env.base_is("farfetchd"),
        choice: ItemChoice::Fixed("leek"),
    },
    ItemRule {
        name: "froslass",
        when: |env| env.species.id == "froslass" && !env.is_doubles,
        choice: ItemChoice::Fixed("widelens"),
    },
    ItemRule {
        name: "latios",
        when: |env| {
            (env.base_is("latios") || env.base_is("latias")) && env.counter.special == 2 && !env.is_doubles
        },
        choice: ItemChoice::Fixed("souldew"),
    },
    ItemRule {
        name: "lopunny",
        when: |env| env.species.id == "lopunny",
        choice: ItemChoice::Computed(|env| if env.is_doubles { "ironball" } else { "toxicorb" }),
    },
    ItemRule {
        name: "marowak",
        when: |env| env.base_is("marowak"),
        choice: ItemChoice::Fixed("thickclub"),
    },
    ItemRule {
        name: "pikachu",
        when: |env| env.base_is("pikachu"),
        choice: ItemChoice::Fixed("lightball"),
    },
    ItemRule {
        name: "regieleki",
        when: |env| env.species.id == "regieleki" && !env.is_doubles,
        choice: ItemChoice::Fixed("magnet"),
    },
    ItemRule {
        name: "shedinja",
        when: |env| env.species.id == "shedinja",
        choice: ItemChoice::Computed(|env| {
            if !env.team_details.defog && !env.team_details.rapid_spin && !env.is_doubles {
                "heavydutyboots"
            } else {
                "focussash"
            }
        }),
    },
    ItemRule {
        name: "shuckle",
        when: |env| env.species.id == "shuckle" && env.has("stickyweb"),
        choice: ItemChoice::Fixed("mentalherb"),
    },
    ItemRule {
        name: "scope",
        when: |env| env.species.id == "unfezant" || env.has("focusenergy"),
        choice: ItemChoice::Fixed("scopelens"),
    },
    ItemRule {
        name: "berry_users",
        when: |env| {
            env.species.id == "wobbuffet" || matches!(env.ability, "cheekpouch" | "harvest" | "ripen")
        },
        choice: ItemChoice::Fixed("sitrusberry"),
    },
    // --- Ability-triggered ---
    ItemRule {
        name: "gluttony",
        when: |env| env.ability == "gluttony",
        choice: ItemChoice::OneOf(GLUTTONY_BERRIES),
    },
    ItemRule {
        name: "imposter",
        when: |env| env.ability == "imposter",
        choice: ItemChoice::Fixed("choicescarf"),
    },
    // --- Move-triggered ---
    ItemRule {
        name: "bellydrum",
        when: |env| env.has("bellydrum"),
        choice: ItemChoice::Computed(|env| {
            if env.counter.priority > 0 || !env.has("substitute") {
                "sitrusberry"
            } else {
                "salacberry"
            }
        }),
    },
    ItemRule {
        name: "trick",
        when: |env| env.has("trick") || env.has("switcheroo"),
        choice: ItemChoice::Computed(|env| {
            if (60..=108).contains(&env.speed()) {
                "choicescarf"
            } else if env.counter.physical > env.counter.special {
                "choiceband"
            } else {
                "choicespecs"
            }
        }),
    },
    ItemRule {
        name: "screens",
        when: |env| env.has("auroraveil") || (env.has("lightscreen") && env.has("reflect")),
        choice: ItemChoice::Fixed("lightclay"),
    },
    ItemRule {
        name: "rest",
        when: |env| {
            env.has("rest") && !env.has("sleeptalk") && !matches!(env.ability, "shedskin" | "naturalcure")
        },
        choice: ItemChoice::Fixed("chestoberry"),
    },
    ItemRule {
        name: "hypnosis",
        when: |env| env.has("hypnosis") && env.ability == "beastboost",
        choice: ItemChoice::Fixed("blunderpolicy"),
    },
    ItemRule {
        name: "guts",
        when: |env| env.ability == "guts" && env.counter.physical > 2,
        choice: ItemChoice::Computed(|env| {
            if env.species.has_type(PokemonType::Fire) {
                "toxicorb"
            } else {
                "flameorb"
            }
        }),
    },
    ItemRule {
        name: "poisonheal",
        when: |env| env.ability == "poisonheal",
        choice: ItemChoice::Fixed("toxicorb"),
    },
    ItemRule {
        name: "lifeorb_abilities",
        when: |env| matches!(env.ability, "magicguard" | "sheerforce"),
        choice: ItemChoice::Fixed("lifeorb"),
    },
    // --- Typing and mode ---
    ItemRule {
        name: "boots",
        when: |env| env.weakness_to(PokemonType::Rock) >= 2 && !env.is_doubles,
        choice: ItemChoice::Fixed("heavydutyboots"),
    },
    ItemRule {
        name: "eviolite",
        when: |env| env.species.is_nfe(),
        choice: ItemChoice::Fixed("eviolite"),
    },
    ItemRule {
        name: "airballoon",
        when: |env| env.weakness_to(PokemonType::Ground) >= 2 && env.ability != "levitate",
        choice: ItemChoice::Fixed("airballoon"),
    },
    // --- Generic ---
    ItemRule {
        name: "choice_physical_fast",
        when: |env| {
            env.counter.physical >= 4
                && !["bodyslam", "dragontail", "fakeout", "flamecharge", "rapidspin", "suckerpunch"]
                    .iter()
                    .any(|m| env.has(m))
                && env.species.base_stats.attack >= 100
                && (60..=108).contains(&env.speed())
                && env.counter.priority == 0
        },
        choice: ItemChoice::Gamble {
            numerator: 2,
            denominator: 3,
            hit: "choicescarf",
            miss: "choiceband",
        },
    },
    ItemRule {
        name: "choice_physical",
        when: |env| {
            env.counter.physical >= 4
                && !["bodyslam", "dragontail", "fakeout", "flamecharge", "rapidspin", "suckerpunch"]
                    .iter()
                    .any(|m| env.has(m))
        },
        choice: ItemChoice::Fixed("choiceband"),
    },
    ItemRule {
        name: "choice_special_fast",
        when: |env| {
            env.counter.special >= 4
                && !env.has("uturn")
                && env.species.base_stats.sp_attack >= 100
                && (60..=108).contains(&env.speed())
        },
        choice: ItemChoice::Gamble {
            numerator: 2,
            denominator: 3,
            hit: "choicescarf",
            miss: "choicespecs",
        },
    },
    ItemRule {
        name: "choice_special",
        when: |env| env.counter.special >= 4 && !env.has("uturn"),
        choice: ItemChoice::Fixed("choicespecs"),
    },
    ItemRule {
        name: "lead_sash",
        when: |env| {
            let base = &env.species.base_stats;
            let bulk = u16::from(base.hp) + u16::from(base.defense) + u16::from(base.sp_defense);
            env.is_lead
                && !env.is_doubles
                && env.ability != "sturdy"
                && bulk < 255
                && env.counter.recovery == 0
        },
        choice: ItemChoice::Fixed("focussash"),
    },
    ItemRule {
        name: "assaultvest",
        when: |env| {
            let base = &env.species.base_stats;
            env.counter.status == 0
                && env.counter.damaging_moves.len() >= 3
                && !env.has_any_pivot_or_fakeout()
                && u16::from(base.hp) + u16::from(base.sp_defense) >= 150
        },
        choice: ItemChoice::Fixed("assaultvest"),
    },
    ItemRule {
        name: "shellsmash",
        when: |env| env.has("shellsmash"),
        choice: ItemChoice::Fixed("whiteherb"),
    },
    ItemRule {
        name: "lifeorb",
        when: |env| {
            env.counter.setup_type.is_some()
                && env.counter.recovery == 0
                && env.counter.damaging_moves.len() >= 2
        },
        choice: ItemChoice::Fixed("lifeorb"),
    },
    ItemRule {
        name: "expertbelt",
        when: |env| env.counter.damaging_moves.len() >= 4 && env.counter.status == 0,
        choice: ItemChoice::Fixed("expertbelt"),
    },
    ItemRule {
        name: "rockyhelmet",
        when: |env| env.species.base_stats.defense >= 100 && env.counter.physical <= 1,
        choice: ItemChoice::Fixed("rockyhelmet"),
    },
];

/// Pick the held item for a set whose moves and ability are final.
pub fn select_item<R: RandomSource>(rng: &mut R, env: &ItemEnv) -> Id {
    if let Some(required) = rng.sample(&env.species.required_items) {
        return required.clone();
    }

    let item = ITEM_RULES
        .iter()
        .find(|rule| (rule.when)(env))
        .map(|rule| {
            tracing::trace!(species = %env.species.id, rule = rule.name, "item rule matched");
            match &rule.choice {
                ItemChoice::Fixed(item) => *item,
                ItemChoice::OneOf(items) => rng.sample(items).copied().unwrap_or("leftovers"),
                ItemChoice::Computed(pick) => pick(env),
                ItemChoice::Gamble {
                    numerator,
                    denominator,
                    hit,
                    miss,
                } => {
                    if rng.chance(*numerator, *denominator) {
                        *hit
                    } else {
                        *miss
                    }
                }
            }
        })
        .unwrap_or("leftovers");

    if item == "leftovers" && env.species.has_type(PokemonType::Poison) {
        return Id::from("blacksludge");
    }
    Id::from(item)
}
