use crate::dex::{Dex, DexData};
use crate::factory::{FactoryPools, FactorySet, FactorySpecies, SpeciesFlags};
use schema::{
    to_id, AbilityData, AbilitySlots, BaseStats, Id, ItemData, Learnset, MoveCategory, MoveData,
    MoveFlags, NatureData, PokemonType, RandomBattleData, SpeciesData, Stat, Tier,
};
use std::collections::BTreeMap;

use MoveCategory::{Physical, Special, Status};
use PokemonType::*;

pub fn ids(names: &[&str]) -> Vec<Id> {
    names.iter().map(|n| Id::from(*n)).collect()
}

/// A builder for test species records with common defaults.
///
/// # Example
/// ```
/// let golem = TestSpeciesBuilder::new("Golem", 76, &[Rock, Ground], [80, 120, 130, 55, 65, 45])
///     .abilities(&["sturdy"])
///     .moves(&["stealthrock", "earthquake"])
///     .build();
/// ```
pub struct TestSpeciesBuilder {
    data: SpeciesData,
}

impl TestSpeciesBuilder {
    /// Stats are given in the order HP, Atk, Def, SpA, SpD, Spe.
    pub fn new(name: &str, num: u16, types: &[PokemonType], stats: [u8; 6]) -> Self {
        Self {
            data: SpeciesData {
                id: to_id(name),
                num,
                name: name.to_string(),
                base_species: name.to_string(),
                forme: None,
                types: types.to_vec(),
                base_stats: BaseStats {
                    hp: stats[0],
                    attack: stats[1],
                    defense: stats[2],
                    sp_attack: stats[3],
                    sp_defense: stats[4],
                    speed: stats[5],
                },
                abilities: AbilitySlots {
                    primary: Id::from("pressure"),
                    secondary: None,
                    hidden: None,
                },
                prevo: None,
                evos: Vec::new(),
                gender: None,
                tier: Tier::OU,
                gen: 1,
                nonstandard: false,
                battle_only: None,
                cosmetic_formes: Vec::new(),
                required_items: Vec::new(),
                random_battle: RandomBattleData::default(),
            },
        }
    }

    /// Sets the primary, secondary and hidden abilities, in that order.
    pub fn abilities(mut self, abilities: &[&str]) -> Self {
        let mut slots = abilities.iter().map(|a| Id::from(*a));
        if let Some(primary) = slots.next() {
            self.data.abilities.primary = primary;
        }
        self.data.abilities.secondary = slots.next();
        self.data.abilities.hidden = slots.next();
        self
    }

    pub fn tier(mut self, tier: Tier) -> Self {
        self.data.tier = tier;
        self
    }

    pub fn moves(mut self, moves: &[&str]) -> Self {
        self.data.random_battle.moves = ids(moves);
        self
    }

    pub fn level(mut self, level: u8) -> Self {
        self.data.random_battle.level = Some(level);
        self
    }

    /// Marks the species as a forme of `base`.
    pub fn forme_of(mut self, base: &str, forme: &str) -> Self {
        self.data.base_species = base.to_string();
        self.data.forme = Some(forme.to_string());
        self
    }

    pub fn battle_only(mut self, base: &str) -> Self {
        self.data.battle_only = Some(Id::from(base));
        self
    }

    pub fn required_item(mut self, item: &str) -> Self {
        self.data.required_items.push(Id::from(item));
        self
    }

    pub fn build(self) -> SpeciesData {
        self.data
    }
}

fn move_data(
    name: &str,
    move_type: PokemonType,
    category: MoveCategory,
    base_power: u16,
    accuracy: Option<u8>,
) -> MoveData {
    MoveData {
        id: to_id(name),
        name: name.to_string(),
        move_type,
        category,
        base_power,
        accuracy,
        priority: 0,
        secondary_chance: None,
        flags: MoveFlags::default(),
        multihit: None,
        fixed_damage: false,
        variable_power: false,
        recoil: false,
        drain: false,
        self_switch: false,
        weather: false,
        stalling: false,
        gen: 1,
        nonstandard: false,
    }
}

/// Applies an adjustment to a move record.
fn with(mut move_: MoveData, adjust: impl FnOnce(&mut MoveData)) -> MoveData {
    adjust(&mut move_);
    move_
}

fn status(name: &str, move_type: PokemonType) -> MoveData {
    move_data(name, move_type, Status, 0, None)
}

fn fixture_moves() -> Vec<MoveData> {
    vec![
        // --- Physical ---
        with(move_data("Aqua Jet", Water, Physical, 40, Some(100)), |m| m.priority = 1),
        move_data("Aqua Tail", Water, Physical, 90, Some(90)),
        move_data("Behemoth Blade", Steel, Physical, 100, Some(100)),
        with(move_data("Body Slam", Normal, Physical, 85, Some(100)), |m| {
            m.secondary_chance = Some(30);
            m.flags.contact = true;
        }),
        with(move_data("Brave Bird", Flying, Physical, 120, Some(100)), |m| m.recoil = true),
        with(move_data("Crabhammer", Water, Physical, 100, Some(90)), |m| m.flags.contact = true),
        with(move_data("Crunch", Dark, Physical, 80, Some(100)), |m| {
            m.secondary_chance = Some(20);
            m.flags.bite = true;
        }),
        move_data("Earthquake", Ground, Physical, 100, Some(100)),
        move_data("Explosion", Normal, Physical, 250, Some(100)),
        with(move_data("Fire Punch", Fire, Physical, 75, Some(100)), |m| {
            m.secondary_chance = Some(10);
            m.flags.punch = true;
        }),
        with(move_data("Flare Blitz", Fire, Physical, 120, Some(100)), |m| m.recoil = true),
        with(move_data("Gunk Shot", Poison, Physical, 120, Some(80)), |m| m.secondary_chance = Some(30)),
        with(move_data("Gyro Ball", Steel, Physical, 0, Some(100)), |m| m.variable_power = true),
        with(move_data("Ice Punch", Ice, Physical, 75, Some(100)), |m| {
            m.secondary_chance = Some(10);
            m.flags.punch = true;
        }),
        with(move_data("Ice Shard", Ice, Physical, 40, Some(100)), |m| m.priority = 1),
        with(move_data("Iron Head", Steel, Physical, 80, Some(100)), |m| m.secondary_chance = Some(30)),
        move_data("Knock Off", Dark, Physical, 65, Some(100)),
        with(move_data("Liquidation", Water, Physical, 85, Some(100)), |m| m.secondary_chance = Some(20)),
        with(move_data("Play Rough", Fairy, Physical, 90, Some(90)), |m| m.secondary_chance = Some(10)),
        move_data("Power Whip", Grass, Physical, 120, Some(85)),
        move_data("Rapid Spin", Normal, Physical, 50, Some(100)),
        with(move_data("Razor Shell", Water, Physical, 75, Some(95)), |m| m.secondary_chance = Some(50)),
        with(move_data("Seismic Toss", Fighting, Physical, 0, Some(100)), |m| m.fixed_damage = true),
        with(move_data("Shadow Sneak", Ghost, Physical, 40, Some(100)), |m| m.priority = 1),
        move_data("Stone Edge", Rock, Physical, 100, Some(80)),
        with(move_data("Sucker Punch", Dark, Physical, 70, Some(100)), |m| m.priority = 1),
        with(move_data("U-turn", Bug, Physical, 70, Some(100)), |m| m.self_switch = true),
        with(move_data("Waterfall", Water, Physical, 80, Some(100)), |m| {
            m.secondary_chance = Some(20);
            m.flags.contact = true;
        }),
        // --- Special ---
        with(move_data("Air Slash", Flying, Special, 75, Some(95)), |m| m.secondary_chance = Some(30)),
        with(move_data("Blizzard", Ice, Special, 110, Some(70)), |m| m.secondary_chance = Some(10)),
        with(move_data("Dark Pulse", Dark, Special, 80, Some(100)), |m| m.secondary_chance = Some(20)),
        move_data("Draco Meteor", Dragon, Special, 130, Some(90)),
        with(move_data("Fire Blast", Fire, Special, 110, Some(85)), |m| m.secondary_chance = Some(10)),
        with(move_data("Flamethrower", Fire, Special, 90, Some(100)), |m| m.secondary_chance = Some(10)),
        with(move_data("Focus Blast", Fighting, Special, 120, Some(70)), |m| m.secondary_chance = Some(10)),
        with(move_data("Giga Drain", Grass, Special, 75, Some(100)), |m| m.drain = true),
        move_data("Hydro Pump", Water, Special, 110, Some(80)),
        with(move_data("Hyper Voice", Normal, Special, 90, Some(100)), |m| m.flags.sound = true),
        with(move_data("Ice Beam", Ice, Special, 90, Some(100)), |m| m.secondary_chance = Some(10)),
        with(move_data("Moonblast", Fairy, Special, 95, Some(100)), |m| m.secondary_chance = Some(30)),
        with(move_data("Night Shade", Ghost, Special, 0, Some(100)), |m| m.fixed_damage = true),
        with(move_data("Psychic", Psychic, Special, 90, Some(100)), |m| m.secondary_chance = Some(10)),
        move_data("Psyshock", Psychic, Special, 80, Some(100)),
        with(move_data("Scald", Water, Special, 80, Some(100)), |m| m.secondary_chance = Some(30)),
        with(move_data("Shadow Ball", Ghost, Special, 80, Some(100)), |m| m.secondary_chance = Some(20)),
        with(move_data("Sludge Bomb", Poison, Special, 90, Some(100)), |m| m.secondary_chance = Some(30)),
        move_data("Surf", Water, Special, 90, Some(100)),
        // --- Status ---
        status("Belly Drum", Normal),
        status("Bulk Up", Fighting),
        status("Calm Mind", Psychic),
        status("Curse", Ghost),
        status("Defog", Flying),
        status("Dragon Dance", Dragon),
        status("Haze", Ice),
        status("Leech Seed", Grass),
        status("Nasty Plot", Dark),
        with(status("Protect", Normal), |m| {
            m.priority = 4;
            m.stalling = true;
        }),
        with(status("Rain Dance", Water), |m| m.weather = true),
        with(status("Recover", Normal), |m| m.flags.heal = true),
        with(status("Rest", Psychic), |m| m.flags.heal = true),
        with(status("Roost", Flying), |m| m.flags.heal = true),
        status("Shell Smash", Normal),
        status("Sleep Talk", Normal),
        with(status("Soft-Boiled", Normal), |m| m.flags.heal = true),
        status("Spikes", Ground),
        status("Stealth Rock", Rock),
        status("Swords Dance", Normal),
        with(status("Toxic", Poison), |m| m.accuracy = Some(90)),
    ]
}

fn fixture_species() -> Vec<SpeciesData> {
    vec![
        TestSpeciesBuilder::new("Golem", 76, &[Rock, Ground], [80, 120, 130, 55, 65, 45])
            .abilities(&["sturdy"])
            .tier(Tier::NU)
            .moves(&["stealthrock", "earthquake", "stoneedge", "explosion", "suckerpunch", "firepunch"])
            .build(),
        TestSpeciesBuilder::new("Gyarados", 130, &[Water, Flying], [95, 125, 79, 60, 100, 81])
            .abilities(&["intimidate", "moxie"])
            .tier(Tier::UU)
            .moves(&["dragondance", "waterfall", "earthquake", "crunch"])
            .level(82)
            .build(),
        TestSpeciesBuilder::new("Kingdra", 230, &[Water, Dragon], [75, 95, 95, 95, 95, 85])
            .abilities(&["swiftswim", "sniper", "damp"])
            .tier(Tier::RU)
            .moves(&["dracometeor", "surf", "hydropump", "icebeam", "raindance"])
            .level(86)
            .build(),
        TestSpeciesBuilder::new("Snorlax", 143, &[Normal], [160, 110, 65, 65, 110, 30])
            .abilities(&["thickfat"])
            .tier(Tier::NU)
            .moves(&["bodyslam", "curse", "rest", "sleeptalk", "earthquake", "crunch"])
            .level(88)
            .build(),
        TestSpeciesBuilder::new("Snorlax-Gmax", 143, &[Normal], [160, 110, 65, 65, 110, 30])
            .forme_of("Snorlax", "Gmax")
            .abilities(&["thickfat"])
            .tier(Tier::NU)
            .moves(&["bodyslam", "curse", "rest", "sleeptalk", "earthquake", "crunch"])
            .level(88)
            .build(),
        TestSpeciesBuilder::new("Charizard", 6, &[Fire, Flying], [78, 84, 78, 109, 85, 100])
            .abilities(&["blaze"])
            .tier(Tier::UU)
            .moves(&["fireblast", "airslash", "earthquake", "roost"])
            .level(84)
            .build(),
        TestSpeciesBuilder::new("Muk", 89, &[Poison], [105, 105, 75, 65, 100, 50])
            .abilities(&["poisontouch"])
            .tier(Tier::RU)
            .moves(&["gunkshot", "icepunch", "shadowsneak", "haze", "knockoff"])
            .build(),
        TestSpeciesBuilder::new("Zacian-Crowned", 888, &[Fairy, Steel], [92, 170, 115, 80, 115, 148])
            .forme_of("Zacian", "Crowned")
            .abilities(&["intrepidsword"])
            .tier(Tier::Uber)
            .required_item("rustedsword")
            .moves(&["behemothblade", "playrough", "swordsdance", "crunch"])
            .level(70)
            .build(),
        TestSpeciesBuilder::new("Swampert", 260, &[Water, Ground], [100, 110, 90, 85, 90, 60])
            .abilities(&["torrent"])
            .tier(Tier::RU)
            .moves(&["waterfall", "aquatail", "liquidation", "crabhammer", "razorshell", "earthquake"])
            .level(84)
            .build(),
        TestSpeciesBuilder::new("Alakazam", 65, &[Psychic], [55, 50, 45, 135, 95, 120])
            .abilities(&["magicguard"])
            .tier(Tier::UU)
            .moves(&["psychic", "psyshock", "shadowball", "focusblast", "calmmind", "recover"])
            .build(),
        TestSpeciesBuilder::new("Darmanitan", 555, &[Fire], [105, 140, 55, 30, 55, 95])
            .abilities(&["sheerforce", "zenmode"])
            .tier(Tier::RU)
            .moves(&["flareblitz", "uturn", "earthquake", "firepunch"])
            .build(),
        TestSpeciesBuilder::new("Darmanitan-Zen", 555, &[Fire, Psychic], [105, 30, 105, 140, 105, 55])
            .forme_of("Darmanitan", "Zen")
            .battle_only("darmanitan")
            .abilities(&["zenmode"])
            .tier(Tier::Illegal)
            .moves(&["fireblast", "psychic", "focusblast", "calmmind"])
            .build(),
        TestSpeciesBuilder::new("Ninetales", 38, &[Fire], [73, 76, 75, 81, 100, 100])
            .abilities(&["drought"])
            .tier(Tier::PU)
            .moves(&["fireblast", "flamethrower", "nastyplot", "psyshock"])
            .build(),
        TestSpeciesBuilder::new("Pelipper", 279, &[Water, Flying], [60, 50, 100, 95, 70, 65])
            .abilities(&["drizzle"])
            .tier(Tier::OU)
            .moves(&["scald", "airslash", "uturn", "roost"])
            .build(),
        TestSpeciesBuilder::new("Tyranitar", 248, &[Rock, Dark], [100, 134, 110, 95, 100, 61])
            .abilities(&["sandstream"])
            .tier(Tier::OU)
            .moves(&["stealthrock", "stoneedge", "crunch", "earthquake", "dragondance"])
            .level(80)
            .build(),
        TestSpeciesBuilder::new("Excadrill", 530, &[Ground, Steel], [110, 135, 60, 50, 65, 88])
            .abilities(&["sandrush", "moldbreaker"])
            .tier(Tier::OU)
            .moves(&["earthquake", "ironhead", "rapidspin", "swordsdance"])
            .build(),
        TestSpeciesBuilder::new("Abomasnow", 460, &[Grass, Ice], [90, 92, 75, 92, 85, 60])
            .abilities(&["snowwarning"])
            .tier(Tier::NU)
            .moves(&["blizzard", "gigadrain", "earthquake", "iceshard"])
            .build(),
        TestSpeciesBuilder::new("Ferrothorn", 598, &[Grass, Steel], [74, 94, 131, 54, 116, 20])
            .abilities(&["ironbarbs"])
            .tier(Tier::OU)
            .moves(&["spikes", "leechseed", "gyroball", "powerwhip", "protect"])
            .build(),
        TestSpeciesBuilder::new("Clefable", 36, &[Fairy], [95, 70, 73, 95, 90, 60])
            .abilities(&["magicguard", "unaware"])
            .tier(Tier::RUBL)
            .moves(&["moonblast", "calmmind", "softboiled", "flamethrower"])
            .build(),
        TestSpeciesBuilder::new("Corviknight", 823, &[Flying, Steel], [98, 87, 105, 53, 85, 67])
            .abilities(&["pressure"])
            .tier(Tier::OU)
            .moves(&["bravebird", "defog", "roost", "bulkup"])
            .build(),
        TestSpeciesBuilder::new("Zoroark", 571, &[Dark], [60, 105, 60, 120, 60, 105])
            .abilities(&["illusion"])
            .tier(Tier::PUBL)
            .moves(&["nastyplot", "darkpulse", "flamethrower", "sludgebomb"])
            .level(86)
            .build(),
    ]
}

fn ability(name: &str, rating: f32) -> AbilityData {
    AbilityData {
        id: to_id(name),
        name: name.to_string(),
        rating,
        gen: 3,
        nonstandard: false,
    }
}

fn fixture_abilities() -> Vec<AbilityData> {
    vec![
        ability("Blaze", 2.0),
        ability("Damp", 1.0),
        ability("Drizzle", 4.0),
        ability("Drought", 4.0),
        ability("Illusion", 4.5),
        ability("Intimidate", 3.5),
        ability("Intrepid Sword", 4.0),
        ability("Iron Barbs", 2.5),
        ability("Levitate", 3.5),
        ability("Magic Guard", 4.0),
        ability("Mold Breaker", 3.0),
        ability("Moxie", 3.0),
        ability("Overgrow", 2.0),
        ability("Pixilate", 4.0),
        ability("Poison Touch", 2.0),
        ability("Pressure", 2.0),
        ability("Sand Rush", 3.0),
        ability("Sand Stream", 4.0),
        ability("Sheer Force", 3.5),
        ability("Sniper", 2.0),
        ability("Snow Cloak", 1.5),
        ability("Snow Warning", 4.0),
        ability("Sturdy", 3.0),
        ability("Swarm", 2.0),
        ability("Swift Swim", 3.0),
        ability("Thick Fat", 3.5),
        ability("Torrent", 2.0),
        ability("Unaware", 3.0),
        ability("Zen Mode", -1.0),
    ]
}

fn item(name: &str) -> ItemData {
    ItemData {
        id: to_id(name),
        name: name.to_string(),
        gen: 2,
        nonstandard: false,
        mega_stone: false,
        z_move: false,
    }
}

fn fixture_items() -> Vec<ItemData> {
    vec![
        item("Air Balloon"),
        item("Assault Vest"),
        item("Black Sludge"),
        item("Chesto Berry"),
        item("Choice Band"),
        item("Choice Scarf"),
        item("Choice Specs"),
        item("Damp Rock"),
        item("Eviolite"),
        item("Expert Belt"),
        item("Focus Sash"),
        item("Heavy-Duty Boots"),
        item("Leftovers"),
        item("Life Orb"),
        item("Light Clay"),
        item("Rocky Helmet"),
        item("Rusted Sword"),
        item("Salac Berry"),
        item("Sitrus Berry"),
        item("White Herb"),
        ItemData {
            gen: 6,
            mega_stone: true,
            ..item("Tyranitarite")
        },
        ItemData {
            gen: 7,
            z_move: true,
            ..item("Firium Z")
        },
    ]
}

fn nature(name: &str, plus: Option<Stat>, minus: Option<Stat>) -> NatureData {
    NatureData {
        id: to_id(name),
        name: name.to_string(),
        plus,
        minus,
    }
}

fn fixture_natures() -> Vec<NatureData> {
    vec![
        nature("Adamant", Some(Stat::Atk), Some(Stat::SpA)),
        nature("Bold", Some(Stat::Def), Some(Stat::Atk)),
        nature("Careful", Some(Stat::SpD), Some(Stat::SpA)),
        nature("Hardy", None, None),
        nature("Impish", Some(Stat::Def), Some(Stat::SpA)),
        nature("Jolly", Some(Stat::Spe), Some(Stat::SpA)),
        nature("Modest", Some(Stat::SpA), Some(Stat::Atk)),
        nature("Timid", Some(Stat::Spe), Some(Stat::Atk)),
    ]
}

fn fixture_learnsets() -> BTreeMap<Id, Learnset> {
    let learnset = |level_up: &[(u8, &[&str])], can_learn: &[&str]| Learnset {
        level_up: level_up.iter().map(|(level, moves)| (*level, ids(moves))).collect(),
        can_learn: ids(can_learn),
    };
    BTreeMap::from([
        (
            Id::from("golem"),
            learnset(&[(1, &["bodyslam"]), (36, &["earthquake", "stoneedge"])], &["stealthrock", "explosion", "firepunch"]),
        ),
        (
            Id::from("charizard"),
            learnset(&[(1, &["flamethrower"]), (46, &["fireblast"])], &["airslash", "roost", "earthquake", "dragondance"]),
        ),
        (
            Id::from("darmanitan"),
            learnset(&[(1, &["firepunch"]), (47, &["flareblitz"])], &["uturn", "earthquake", "psychic", "bellydrum"]),
        ),
        (
            Id::from("snorlax"),
            learnset(&[(1, &["bodyslam"]), (33, &["rest", "sleeptalk"])], &["curse", "earthquake", "crunch", "bellydrum"]),
        ),
    ])
}

pub fn fixture_data() -> DexData {
    DexData {
        species: fixture_species(),
        moves: fixture_moves(),
        abilities: fixture_abilities(),
        items: fixture_items(),
        natures: fixture_natures(),
        learnsets: fixture_learnsets(),
    }
}

/// The full test catalog.
pub fn fixture_dex() -> Dex {
    match Dex::from_data(fixture_data()) {
        Ok(dex) => dex,
        Err(err) => panic!("fixture catalog failed validation: {}", err),
    }
}

/// The test catalog restricted to the named species.
pub fn dex_with(species: &[&str]) -> Dex {
    let mut data = fixture_data();
    data.species.retain(|s| species.contains(&s.id.as_str()));
    match Dex::from_data(data) {
        Ok(dex) => dex,
        Err(err) => panic!("restricted catalog failed validation: {}", err),
    }
}

fn factory_set(species: &str, items: &[&str], abilities: &[&str], natures: &[&str], moves: &[&[&str]]) -> FactorySet {
    FactorySet {
        species: species.to_string(),
        name: None,
        item: ids(items),
        ability: ids(abilities),
        nature: ids(natures),
        moves: moves.iter().map(|slot| ids(slot)).collect(),
        evs: None,
        ivs: None,
        level: None,
        gender: None,
        shiny: false,
        happiness: None,
    }
}

fn factory_species(sets: Vec<FactorySet>) -> FactorySpecies {
    FactorySpecies {
        flags: SpeciesFlags::default(),
        sets,
    }
}

/// A single "OU" tier with eight distinct base species.
pub fn factory_pools() -> FactoryPools {
    let ou = BTreeMap::from([
        (
            Id::from("tyranitar"),
            FactorySpecies {
                flags: SpeciesFlags { mega_only: false },
                sets: vec![
                    factory_set(
                        "Tyranitar",
                        &["leftovers"],
                        &["sandstream"],
                        &["careful"],
                        &[&["stealthrock"], &["stoneedge"], &["crunch", "knockoff"], &["earthquake"]],
                    ),
                    factory_set(
                        "Tyranitar",
                        &["tyranitarite"],
                        &["sandstream"],
                        &["jolly", "adamant"],
                        &[&["dragondance"], &["stoneedge"], &["crunch"], &["earthquake"]],
                    ),
                ],
            },
        ),
        (
            Id::from("excadrill"),
            factory_species(vec![factory_set(
                "Excadrill",
                &["leftovers", "focussash"],
                &["sandrush", "moldbreaker"],
                &["jolly"],
                &[&["earthquake"], &["ironhead"], &["rapidspin"], &["swordsdance"]],
            )]),
        ),
        (
            Id::from("ferrothorn"),
            factory_species(vec![factory_set(
                "Ferrothorn",
                &["leftovers", "rockyhelmet"],
                &["ironbarbs"],
                &["impish", "careful"],
                &[&["spikes"], &["leechseed"], &["gyroball", "powerwhip"], &["protect", "stealthrock"]],
            )]),
        ),
        (
            Id::from("corviknight"),
            factory_species(vec![factory_set(
                "Corviknight",
                &["leftovers"],
                &["pressure"],
                &["impish"],
                &[&["bravebird"], &["defog"], &["roost"], &["bulkup"]],
            )]),
        ),
        (
            Id::from("pelipper"),
            factory_species(vec![factory_set(
                "Pelipper",
                &["damprock"],
                &["drizzle"],
                &["bold"],
                &[&["scald"], &["airslash"], &["uturn"], &["roost"]],
            )]),
        ),
        (
            Id::from("clefable"),
            factory_species(vec![factory_set(
                "Clefable",
                &["leftovers", "lifeorb"],
                &["magicguard", "unaware"],
                &["bold", "modest"],
                &[&["moonblast"], &["calmmind"], &["softboiled"], &["flamethrower"]],
            )]),
        ),
        (
            Id::from("gyarados"),
            factory_species(vec![factory_set(
                "Gyarados",
                &["heavydutyboots"],
                &["moxie", "intimidate"],
                &["jolly", "adamant"],
                &[&["dragondance"], &["waterfall"], &["earthquake"], &["crunch"]],
            )]),
        ),
        (
            Id::from("charizard"),
            factory_species(vec![factory_set(
                "Charizard",
                &["heavydutyboots", "choicespecs"],
                &["blaze"],
                &["timid"],
                &[&["fireblast"], &["airslash"], &["focusblast"], &["roost", "earthquake"]],
            )]),
        ),
    ]);

    FactoryPools {
        tiers: BTreeMap::from([("OU".to_string(), ou)]),
    }
}
