//! Closed categorical domains: Western signs, Chinese signs, and elements.
//!
//! Each enum carries an `ALL` table in cycle order. The sign enums also have a
//! zero-based `index()` so that lookup tables elsewhere can be plain
//! fixed-size arrays. Display names are the serde labels.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Western (tropical) zodiac sign, in cycle order starting at Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WesternSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl WesternSign {
    /// All twelve signs in cycle order (index 0 = Aries).
    pub const ALL: [WesternSign; 12] = [
        WesternSign::Aries,
        WesternSign::Taurus,
        WesternSign::Gemini,
        WesternSign::Cancer,
        WesternSign::Leo,
        WesternSign::Virgo,
        WesternSign::Libra,
        WesternSign::Scorpio,
        WesternSign::Sagittarius,
        WesternSign::Capricorn,
        WesternSign::Aquarius,
        WesternSign::Pisces,
    ];

    /// 0-based position in the cycle (Aries=0 .. Pisces=11).
    pub const fn index(self) -> usize {
        match self {
            Self::Aries => 0,
            Self::Taurus => 1,
            Self::Gemini => 2,
            Self::Cancer => 3,
            Self::Leo => 4,
            Self::Virgo => 5,
            Self::Libra => 6,
            Self::Scorpio => 7,
            Self::Sagittarius => 8,
            Self::Capricorn => 9,
            Self::Aquarius => 10,
            Self::Pisces => 11,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }
}

/// Chinese zodiac animal, in cycle order starting at Rat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChineseSign {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

impl ChineseSign {
    /// All twelve animals in cycle order (index 0 = Rat).
    pub const ALL: [ChineseSign; 12] = [
        ChineseSign::Rat,
        ChineseSign::Ox,
        ChineseSign::Tiger,
        ChineseSign::Rabbit,
        ChineseSign::Dragon,
        ChineseSign::Snake,
        ChineseSign::Horse,
        ChineseSign::Goat,
        ChineseSign::Monkey,
        ChineseSign::Rooster,
        ChineseSign::Dog,
        ChineseSign::Pig,
    ];

    /// 0-based position in the cycle (Rat=0 .. Pig=11).
    pub const fn index(self) -> usize {
        match self {
            Self::Rat => 0,
            Self::Ox => 1,
            Self::Tiger => 2,
            Self::Rabbit => 3,
            Self::Dragon => 4,
            Self::Snake => 5,
            Self::Horse => 6,
            Self::Goat => 7,
            Self::Monkey => 8,
            Self::Rooster => 9,
            Self::Dog => 10,
            Self::Pig => 11,
        }
    }

    /// Animal at a cycle position. Positions wrap, so any index is valid.
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % 12]
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Rat => "Rat",
            Self::Ox => "Ox",
            Self::Tiger => "Tiger",
            Self::Rabbit => "Rabbit",
            Self::Dragon => "Dragon",
            Self::Snake => "Snake",
            Self::Horse => "Horse",
            Self::Goat => "Goat",
            Self::Monkey => "Monkey",
            Self::Rooster => "Rooster",
            Self::Dog => "Dog",
            Self::Pig => "Pig",
        }
    }
}

/// Classical element. Each covers exactly three Western signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    pub const ALL: [Element; 4] = [Element::Fire, Element::Earth, Element::Air, Element::Water];

    pub fn name(self) -> &'static str {
        match self {
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Air => "Air",
            Self::Water => "Water",
        }
    }
}

impl fmt::Display for WesternSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl fmt::Display for ChineseSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}
