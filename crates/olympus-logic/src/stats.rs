//! Stat generation from a zodiac profile.
//!
//! Every character starts from the same base block. The element adds a fixed
//! set of deltas, then numerology adds health, mana and charisma in proportion
//! to its value plus a +3 bonus to one of strength, agility or wisdom chosen by
//! `numerology % 3`. All arithmetic is integer and nothing is clamped.
//!
//! ```
//! use olympus_logic::signs::Element;
//! use olympus_logic::stats::generate_stats_for;
//!
//! let stats = generate_stats_for(Element::Water, 7);
//! assert_eq!(stats.health, 119);
//! assert_eq!(stats.agility, 13);
//! ```
//!
//! The display ceilings (150 for health/mana, 20 for attributes) only scale
//! progress bars; generated values may exceed them.

use serde::{Deserialize, Serialize};

use crate::profile::ZodiacProfile;
use crate::signs::Element;

pub const BASE_HEALTH: i32 = 100;
pub const BASE_MANA: i32 = 100;
pub const BASE_ATTRIBUTE: i32 = 10;

/// Bar ceiling for health and mana.
pub const POOL_DISPLAY_CEILING: i32 = 150;

/// Bar ceiling for strength, agility, wisdom, charisma.
pub const ATTRIBUTE_DISPLAY_CEILING: i32 = 20;

/// Bonus granted to the attribute picked by `numerology % 3`.
const NUMEROLOGY_ATTRIBUTE_BONUS: i32 = 3;

/// The six gameplay attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatKind {
    Health,
    Mana,
    Strength,
    Agility,
    Wisdom,
    Charisma,
}

impl StatKind {
    /// All attributes in display order.
    pub const ALL: [StatKind; 6] = [
        StatKind::Health,
        StatKind::Mana,
        StatKind::Strength,
        StatKind::Agility,
        StatKind::Wisdom,
        StatKind::Charisma,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StatKind::Health => "Health",
            StatKind::Mana => "Mana",
            StatKind::Strength => "Strength",
            StatKind::Agility => "Agility",
            StatKind::Wisdom => "Wisdom",
            StatKind::Charisma => "Charisma",
        }
    }

    /// Soft ceiling used to scale this attribute's bar.
    pub fn display_ceiling(self) -> i32 {
        match self {
            StatKind::Health | StatKind::Mana => POOL_DISPLAY_CEILING,
            _ => ATTRIBUTE_DISPLAY_CEILING,
        }
    }
}

/// Derived attribute block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock {
    pub health: i32,
    pub mana: i32,
    pub strength: i32,
    pub agility: i32,
    pub wisdom: i32,
    pub charisma: i32,
}

impl Default for StatBlock {
    fn default() -> Self {
        Self {
            health: BASE_HEALTH,
            mana: BASE_MANA,
            strength: BASE_ATTRIBUTE,
            agility: BASE_ATTRIBUTE,
            wisdom: BASE_ATTRIBUTE,
            charisma: BASE_ATTRIBUTE,
        }
    }
}

impl StatBlock {
    pub fn get(&self, kind: StatKind) -> i32 {
        match kind {
            StatKind::Health => self.health,
            StatKind::Mana => self.mana,
            StatKind::Strength => self.strength,
            StatKind::Agility => self.agility,
            StatKind::Wisdom => self.wisdom,
            StatKind::Charisma => self.charisma,
        }
    }

    /// Fraction of the display ceiling filled, clamped to [0.0, 1.0].
    pub fn bar_fraction(&self, kind: StatKind) -> f32 {
        let ratio = self.get(kind) as f32 / kind.display_ceiling() as f32;
        ratio.clamp(0.0, 1.0)
    }

    fn apply(&mut self, m: &ElementModifiers) {
        self.health += m.health;
        self.mana += m.mana;
        self.strength += m.strength;
        self.agility += m.agility;
        self.wisdom += m.wisdom;
    }
}

/// Additive deltas an element applies to the base block. Charisma is never
/// touched by element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementModifiers {
    pub health: i32,
    pub mana: i32,
    pub strength: i32,
    pub agility: i32,
    pub wisdom: i32,
}

/// Modifier row for an element.
pub fn element_modifiers(element: Element) -> ElementModifiers {
    match element {
        Element::Fire => ElementModifiers {
            health: -10,
            mana: 15,
            strength: 5,
            agility: 3,
            wisdom: 0,
        },
        Element::Earth => ElementModifiers {
            health: 20,
            mana: 0,
            strength: 3,
            agility: -2,
            wisdom: 2,
        },
        Element::Air => ElementModifiers {
            health: -5,
            mana: 10,
            strength: 0,
            agility: 5,
            wisdom: 3,
        },
        Element::Water => ElementModifiers {
            health: 5,
            mana: 20,
            strength: -2,
            agility: 0,
            wisdom: 5,
        },
    }
}

/// Stat block for a profile.
pub fn generate_stats(profile: &ZodiacProfile) -> StatBlock {
    generate_stats_for(profile.element(), profile.numerology())
}

/// Stat block for an element and numerology value: base, then element
/// deltas, then numerology deltas.
pub fn generate_stats_for(element: Element, numerology: u8) -> StatBlock {
    let n = i32::from(numerology);
    let mut stats = StatBlock::default();

    stats.apply(&element_modifiers(element));

    stats.health += 2 * n;
    stats.mana += 2 * n;
    stats.charisma += n;
    match n % 3 {
        0 => stats.strength += NUMEROLOGY_ATTRIBUTE_BONUS,
        1 => stats.agility += NUMEROLOGY_ATTRIBUTE_BONUS,
        _ => stats.wisdom += NUMEROLOGY_ATTRIBUTE_BONUS,
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_water_seven() {
        let s = generate_stats_for(Element::Water, 7);
        assert_eq!(
            s,
            StatBlock {
                health: 119,
                mana: 134,
                strength: 8,
                agility: 13,
                wisdom: 15,
                charisma: 17,
            }
        );
    }

    #[test]
    fn test_fire_eleven() {
        // 11 % 3 == 2 -> wisdom bonus
        let s = generate_stats_for(Element::Fire, 11);
        assert_eq!(s.health, 100 - 10 + 22);
        assert_eq!(s.mana, 100 + 15 + 22);
        assert_eq!(s.strength, 15);
        assert_eq!(s.agility, 13);
        assert_eq!(s.wisdom, 13);
        assert_eq!(s.charisma, 21);
    }

    #[test]
    fn test_earth_nine_strength_bonus() {
        let s = generate_stats_for(Element::Earth, 9);
        assert_eq!(s.health, 138);
        assert_eq!(s.mana, 118);
        assert_eq!(s.strength, 16);
        assert_eq!(s.agility, 8);
        assert_eq!(s.wisdom, 12);
        assert_eq!(s.charisma, 19);
    }

    #[test]
    fn test_exactly_one_mod_bonus() {
        for element in Element::ALL {
            for n in 1..=18u8 {
                let s = generate_stats_for(element, n);
                let m = element_modifiers(element);
                let bonuses = [
                    s.strength - BASE_ATTRIBUTE - m.strength,
                    s.agility - BASE_ATTRIBUTE - m.agility,
                    s.wisdom - BASE_ATTRIBUTE - m.wisdom,
                ];
                assert_eq!(bonuses.iter().sum::<i32>(), NUMEROLOGY_ATTRIBUTE_BONUS);
                assert_eq!(bonuses.iter().filter(|b| **b != 0).count(), 1);
            }
        }
    }

    #[test]
    fn test_charisma_ignores_element() {
        for element in Element::ALL {
            assert_eq!(generate_stats_for(element, 4).charisma, 14);
        }
    }

    #[test]
    fn test_values_may_exceed_display_ceiling() {
        let s = generate_stats_for(Element::Water, 18);
        assert!(s.mana > POOL_DISPLAY_CEILING);
        assert!((s.bar_fraction(StatKind::Mana) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_bar_fraction() {
        let s = StatBlock::default();
        assert!((s.bar_fraction(StatKind::Strength) - 0.5).abs() < 0.001);
        assert!((s.bar_fraction(StatKind::Health) - 100.0 / 150.0).abs() < 0.001);
    }

    #[test]
    fn test_get_matches_fields() {
        let s = generate_stats_for(Element::Air, 5);
        let values: Vec<i32> = StatKind::ALL.iter().map(|k| s.get(*k)).collect();
        assert_eq!(
            values,
            vec![s.health, s.mana, s.strength, s.agility, s.wisdom, s.charisma]
        );
    }
}
