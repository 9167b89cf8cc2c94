//! Trait lexicon: fixed player-facing names keyed by sign and numerology.
//!
//! Tables are arrays in sign cycle order, indexed by `index()`, so every sign
//! has exactly one entry.

use crate::signs::{ChineseSign, WesternSign};

const PRIMARY_ABILITIES: [&str; 12] = [
    "Flame Strike",      // Aries
    "Earth Shield",      // Taurus
    "Wind Clone",        // Gemini
    "Healing Tide",      // Cancer
    "Solar Flare",       // Leo
    "Nature's Blessing", // Virgo
    "Balance Beam",      // Libra
    "Venom Sting",       // Scorpio
    "Celestial Arrow",   // Sagittarius
    "Mountain Strength", // Capricorn
    "Lightning Storm",   // Aquarius
    "Ocean Surge",       // Pisces
];

const SECONDARY_ABILITIES: [&str; 12] = [
    "Shadow Stealth",     // Rat
    "Endurance Aura",     // Ox
    "Ferocious Leap",     // Tiger
    "Swift Dodge",        // Rabbit
    "Ancient Breath",     // Dragon
    "Hypnotic Gaze",      // Snake
    "Thundering Gallop",  // Horse
    "Mountain Climb",     // Goat
    "Clever Trick",       // Monkey
    "Dawn's Call",        // Rooster
    "Loyal Guard",        // Dog
    "Abundance Blessing", // Pig
];

const COMPANIONS: [&str; 12] = [
    "Shadow Familiar",  // Rat
    "Stone Guardian",   // Ox
    "Striped Warrior",  // Tiger
    "Jade Hopper",      // Rabbit
    "Miniature Drake",  // Dragon
    "Coiled Whisperer", // Snake
    "Swift Steed",      // Horse
    "Mountain Guide",   // Goat
    "Trickster Spirit", // Monkey
    "Sun Herald",       // Rooster
    "Loyal Hound",      // Dog
    "Fortune Piglet",   // Pig
];

const NUMEROLOGY_MEANINGS: [&str; 9] = [
    "leadership and independence",
    "harmony and cooperation",
    "creativity and expression",
    "stability and practicality",
    "freedom and adventure",
    "responsibility and nurturing",
    "analysis and understanding",
    "ambition and achievement",
    "compassion and idealism",
];

/// Meaning returned for numerology values outside 1..=9.
pub const FALLBACK_MEANING: &str = "mystical balance";

pub fn primary_ability(sign: WesternSign) -> &'static str {
    PRIMARY_ABILITIES[sign.index()]
}

pub fn secondary_ability(sign: ChineseSign) -> &'static str {
    SECONDARY_ABILITIES[sign.index()]
}

pub fn companion_type(sign: ChineseSign) -> &'static str {
    COMPANIONS[sign.index()]
}

/// Narrative meaning of a numerology value. Values 10 and up (reachable from
/// the single-pass reduction) fall back to "mystical balance".
pub fn numerology_meaning(n: u8) -> &'static str {
    match n {
        1..=9 => NUMEROLOGY_MEANINGS[usize::from(n) - 1],
        _ => FALLBACK_MEANING,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_abilities() {
        assert_eq!(primary_ability(WesternSign::Aries), "Flame Strike");
        assert_eq!(primary_ability(WesternSign::Virgo), "Nature's Blessing");
        assert_eq!(primary_ability(WesternSign::Aquarius), "Lightning Storm");
        assert_eq!(primary_ability(WesternSign::Pisces), "Ocean Surge");
    }

    #[test]
    fn test_secondary_abilities() {
        assert_eq!(secondary_ability(ChineseSign::Rat), "Shadow Stealth");
        assert_eq!(secondary_ability(ChineseSign::Horse), "Thundering Gallop");
        assert_eq!(secondary_ability(ChineseSign::Rooster), "Dawn's Call");
        assert_eq!(secondary_ability(ChineseSign::Pig), "Abundance Blessing");
    }

    #[test]
    fn test_companions() {
        assert_eq!(companion_type(ChineseSign::Dragon), "Miniature Drake");
        assert_eq!(companion_type(ChineseSign::Horse), "Swift Steed");
        assert_eq!(companion_type(ChineseSign::Pig), "Fortune Piglet");
    }

    #[test]
    fn test_tables_have_no_duplicates() {
        for table in [&PRIMARY_ABILITIES, &SECONDARY_ABILITIES, &COMPANIONS] {
            let mut sorted = table.to_vec();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), 12);
        }
    }

    #[test]
    fn test_numerology_meanings() {
        assert_eq!(numerology_meaning(1), "leadership and independence");
        assert_eq!(numerology_meaning(7), "analysis and understanding");
        assert_eq!(numerology_meaning(9), "compassion and idealism");
    }

    #[test]
    fn test_numerology_fallback() {
        assert_eq!(numerology_meaning(0), FALLBACK_MEANING);
        assert_eq!(numerology_meaning(10), FALLBACK_MEANING);
        assert_eq!(numerology_meaning(11), "mystical balance");
    }
}
