//! Stat formulas and the level balancing used by the legacy formats.

use schema::{BaseStats, StatTable};

/// Modified stat total of the weakest fully evolved reference species:
/// base 30 everywhere, 31 IVs, and the EV equivalent of 84 in every stat.
pub const MIN_MODIFIED_STAT_TOTAL: u32 = 1307;

/// `2 * base + 31 IVs + 21 (84 EVs / 4) + 100`.
fn modified_stat(base: u8) -> u32 {
    base as u32 * 2 + 31 + 21 + 100
}

/// HP at a given level.
///
/// `floor(floor(2 * base + iv + floor(ev / 4) + 100) * level / 100 + 10)`
pub fn hp_stat(base: u8, iv: u8, ev: u8, level: u8) -> u16 {
    let inner = 2 * base as u32 + iv as u32 + ev as u32 / 4 + 100;
    (inner * level as u32 / 100 + 10) as u16
}

/// Any stat other than HP at a given level, without nature.
pub fn other_stat(base: u8, iv: u8, ev: u8, level: u8) -> u16 {
    let inner = 2 * base as u32 + iv as u32 + ev as u32 / 4;
    (inner * level as u32 / 100 + 5) as u16
}

/// Calculate all six stats from base stats, level, IVs and EVs.
/// Order: HP, Atk, Def, SpA, SpD, Spe.
pub fn calculate_stats(base: &BaseStats, level: u8, ivs: &StatTable, evs: &StatTable) -> [u16; 6] {
    [
        hp_stat(base.hp, ivs.hp, evs.hp, level),
        other_stat(base.attack, ivs.atk, evs.atk, level),
        other_stat(base.defense, ivs.def, evs.def, level),
        other_stat(base.sp_attack, ivs.spa, evs.spa, level),
        other_stat(base.sp_defense, ivs.spd, evs.spd, level),
        other_stat(base.speed, ivs.spe, evs.spe, level),
    ]
}

/// The level-independent modified stat total, used for the initial level guess.
pub fn modified_stat_total(base: &BaseStats) -> u32 {
    modified_stat(base.hp)
        + 10
        + modified_stat(base.attack)
        + 5
        + modified_stat(base.defense)
        + 5
        + modified_stat(base.sp_attack)
        + 5
        + modified_stat(base.sp_defense)
        + 5
        + modified_stat(base.speed)
        + 5
}

/// Modified stat total at `level`.
///
/// The two attacking stats are scaled by the level a second time, since damage
/// output grows roughly in proportion to level on top of the stat itself.
pub fn scaled_stat_total(base: &BaseStats, level: u8) -> u32 {
    let level = level as u32;
    let plain = |b: u8| modified_stat(b) * level / 100 + 5;
    let offensive = |b: u8| (modified_stat(b) * level + 500) * level / 10_000;

    (modified_stat(base.hp) * level / 100 + 10)
        + offensive(base.attack)
        + plain(base.defense)
        + offensive(base.sp_attack)
        + plain(base.sp_defense)
        + plain(base.speed)
}

/// The lowest level at which the species reaches [`MIN_MODIFIED_STAT_TOTAL`], capped at 100.
///
/// Starts from the closed-form estimate, which never overshoots, and counts up.
pub fn balance_level(base: &BaseStats) -> u8 {
    let estimate = 100 * MIN_MODIFIED_STAT_TOTAL / modified_stat_total(base);
    let mut level = estimate.clamp(1, 100) as u8;

    while level < 100 {
        if scaled_stat_total(base, level) >= MIN_MODIFIED_STAT_TOTAL {
            break;
        }
        level += 1;
    }

    level
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn flat(stat: u8) -> BaseStats {
        BaseStats {
            hp: stat,
            attack: stat,
            defense: stat,
            sp_attack: stat,
            sp_defense: stat,
            speed: stat,
        }
    }

    #[test]
    fn test_hp_formula() {
        // Blissey: base 255 HP, 31 IV, 84 EV, level 100 -> 2*255 + 31 + 21 + 100 = 662, + 10
        assert_eq!(hp_stat(255, 31, 84, 100), 672);
        assert_eq!(hp_stat(100, 31, 84, 80), 291);
        assert_eq!(hp_stat(1, 0, 0, 1), 11);
    }

    #[test]
    fn test_calculate_stats_order() {
        let stats = calculate_stats(&flat(100), 100, &StatTable::uniform(31), &StatTable::uniform(0));
        assert_eq!(stats, [341, 236, 236, 236, 236, 236]);
    }

    #[test]
    fn test_reference_species_is_level_100() {
        assert_eq!(modified_stat_total(&flat(30)), MIN_MODIFIED_STAT_TOTAL);
        assert_eq!(balance_level(&flat(30)), 100);
    }

    #[rstest]
    #[case("weak", 45)]
    #[case("average", 80)]
    #[case("strong", 100)]
    #[case("legendary", 150)]
    fn test_balanced_level_is_first_level_meeting_floor(#[case] desc: &str, #[case] base: u8) {
        let stats = flat(base);
        let level = balance_level(&stats);
        assert!(level <= 100, "{desc}: level capped at 100");
        if level < 100 {
            assert!(
                scaled_stat_total(&stats, level) >= MIN_MODIFIED_STAT_TOTAL,
                "{desc}: level {level} should meet the floor"
            );
        }
        assert!(
            level == 1 || scaled_stat_total(&stats, level - 1) < MIN_MODIFIED_STAT_TOTAL,
            "{desc}: level {} should fall short of the floor",
            level - 1
        );
    }

    #[test]
    fn test_stronger_species_get_lower_levels() {
        assert!(balance_level(&flat(150)) < balance_level(&flat(80)));
        assert!(balance_level(&flat(80)) < balance_level(&flat(45)));
    }
}
