use schema::{Gender, Id, StatTable};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One fully specified team member, as handed to the battle engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureSet {
    /// Display name; the base species unless a factory set names it otherwise.
    pub name: String,
    /// Species or forme the member battles as.
    pub species: String,
    pub gender: Option<Gender>,
    pub moves: Vec<Id>,
    pub ability: Id,
    pub item: Option<Id>,
    pub evs: StatTable,
    pub ivs: StatTable,
    pub nature: Option<Id>,
    pub level: u8,
    pub happiness: u8,
    pub shiny: bool,
    pub gigantamax: bool,
}

impl CreatureSet {
    pub fn has_move(&self, id: &str) -> bool {
        self.moves.iter().any(|m| m == id)
    }

    pub fn has_item(&self, id: &str) -> bool {
        self.item.as_ref().is_some_and(|i| i == id)
    }
}

impl fmt::Display for CreatureSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name == self.species {
            write!(f, "{}", self.species)?;
        } else {
            write!(f, "{} ({})", self.name, self.species)?;
        }
        if let Some(item) = &self.item {
            write!(f, " @ {}", item)?;
        }
        writeln!(f)?;
        writeln!(f, "Ability: {}", self.ability)?;
        writeln!(f, "Level: {}", self.level)?;
        if self.shiny {
            writeln!(f, "Shiny: Yes")?;
        }
        if self.gigantamax {
            writeln!(f, "Gigantamax: Yes")?;
        }
        let e = &self.evs;
        writeln!(
            f,
            "EVs: {} HP / {} Atk / {} Def / {} SpA / {} SpD / {} Spe",
            e.hp, e.atk, e.def, e.spa, e.spd, e.spe
        )?;
        if let Some(nature) = &self.nature {
            writeln!(f, "{} Nature", nature)?;
        }
        for move_ in &self.moves {
            writeln!(f, "- {}", move_)?;
        }
        Ok(())
    }
}

/// Team-wide facts gathered from every accepted member.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TeamDetails {
    pub rain: bool,
    pub sun: bool,
    pub sand: bool,
    pub hail: bool,
    pub spikes: u8,
    pub stealth_rock: bool,
    pub sticky_web: bool,
    pub toxic_spikes: bool,
    pub defog: bool,
    pub rapid_spin: bool,
    pub screens: bool,
    /// 1-based slot of the illusion user, if any.
    pub illusion: Option<usize>,
}

impl TeamDetails {
    pub fn has_weather(&self) -> bool {
        self.rain || self.sun || self.sand || self.hail
    }

    /// Fold a newly accepted member into the team facts.
    pub fn record(&mut self, set: &CreatureSet, slot: usize) {
        match set.ability.as_str() {
            "drizzle" => self.rain = true,
            "drought" => self.sun = true,
            "sandstream" => self.sand = true,
            "snowwarning" => self.hail = true,
            "illusion" => self.illusion = Some(slot),
            _ => {}
        }
        if set.has_move("raindance") {
            self.rain = true;
        }
        if set.has_move("sunnyday") {
            self.sun = true;
        }
        if set.has_move("sandstorm") {
            self.sand = true;
        }
        if set.has_move("hail") {
            self.hail = true;
        }
        if set.has_move("spikes") {
            self.spikes = self.spikes.saturating_add(1);
        }
        self.stealth_rock |= set.has_move("stealthrock");
        self.sticky_web |= set.has_move("stickyweb");
        self.toxic_spikes |= set.has_move("toxicspikes");
        self.defog |= set.has_move("defog");
        self.rapid_spin |= set.has_move("rapidspin");
        self.screens |= set.has_move("reflect") && set.has_move("lightscreen");
    }
}

/// Whether a set would start weather on its own.
pub fn sets_weather(set: &CreatureSet) -> bool {
    matches!(
        set.ability.as_str(),
        "drizzle" | "drought" | "sandstream" | "snowwarning"
    ) || ["raindance", "sunnyday", "sandstorm", "hail"]
        .iter()
        .any(|m| set.has_move(m))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn bare(ability: &str, moves: &[&str]) -> CreatureSet {
        CreatureSet {
            name: "Ninetales".to_string(),
            species: "Ninetales".to_string(),
            gender: None,
            moves: moves.iter().map(|m| Id::from(*m)).collect(),
            ability: Id::from(ability),
            item: None,
            evs: StatTable::uniform(84),
            ivs: StatTable::uniform(31),
            nature: None,
            level: 84,
            happiness: 255,
            shiny: false,
            gigantamax: false,
        }
    }

    #[test]
    fn test_record_weather_and_hazards() {
        let mut details = TeamDetails::default();
        details.record(&bare("drought", &["spikes", "rapidspin"]), 1);
        details.record(&bare("flashfire", &["spikes", "reflect", "lightscreen"]), 2);

        assert!(details.sun);
        assert!(details.has_weather());
        assert_eq!(details.spikes, 2);
        assert!(details.rapid_spin);
        assert!(details.screens);
        assert_eq!(details.illusion, None);
    }

    #[test]
    fn test_illusion_slot_is_recorded() {
        let mut details = TeamDetails::default();
        details.record(&bare("illusion", &["nastyplot"]), 3);
        assert_eq!(details.illusion, Some(3));
    }

    #[test]
    fn test_weather_setter_by_move_or_ability() {
        assert!(sets_weather(&bare("drought", &[])));
        assert!(sets_weather(&bare("flashfire", &["sunnyday"])));
        assert!(!sets_weather(&bare("flashfire", &["solarbeam"])));
    }

    #[test]
    fn test_display_export() {
        let mut set = bare("drought", &["fireblast"]);
        set.item = Some(Id::from("heatrock"));
        let text = set.to_string();
        assert!(text.starts_with("Ninetales @ heatrock\n"));
        assert!(text.contains("Ability: drought"));
        assert!(text.contains("- fireblast"));
    }
}
