//! Game character: profile, stats and abilities resolved once at creation.
//!
//! ```
//! use chrono::NaiveDate;
//! use olympus_logic::character::assemble_character;
//! use olympus_logic::profile::assemble_profile;
//!
//! let profile = assemble_profile(NaiveDate::from_ymd_opt(1990, 4, 15).unwrap());
//! let hero = assemble_character(profile, "Ariadne");
//! assert_eq!(hero.level, 1);
//! assert_eq!(hero.primary_ability, "Flame Strike");
//! assert_eq!(hero.companion_type, "Swift Steed");
//! ```

use serde::{Deserialize, Serialize};

use crate::error::RecordError;
use crate::lexicon::{companion_type, primary_ability, secondary_ability};
use crate::profile::{ProfileRecord, ZodiacProfile};
use crate::stats::{generate_stats, StatBlock};

/// Level every new character starts at.
pub const STARTING_LEVEL: u32 = 1;

/// A created character. Stats are stored flat, the way they are saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameCharacter {
    pub profile: ZodiacProfile,
    pub name: String,
    pub level: u32,
    pub health: i32,
    pub mana: i32,
    pub strength: i32,
    pub agility: i32,
    pub wisdom: i32,
    pub charisma: i32,
    pub primary_ability: String,
    pub secondary_ability: String,
    pub companion_type: String,
}

impl GameCharacter {
    /// The six attributes regrouped as a block.
    pub fn stats(&self) -> StatBlock {
        StatBlock {
            health: self.health,
            mana: self.mana,
            strength: self.strength,
            agility: self.agility,
            wisdom: self.wisdom,
            charisma: self.charisma,
        }
    }

    pub fn creation_announcement(&self) -> String {
        format!(
            "{}, the {} hero has begun their mythical journey!",
            self.name,
            self.profile.western_sign()
        )
    }

    pub fn to_json(&self) -> Result<String, RecordError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Restore a character saved with [`GameCharacter::to_json`]. A profile
    /// whose element disagrees with its sign comes back as
    /// [`RecordError::ElementMismatch`].
    pub fn from_json(text: &str) -> Result<Self, RecordError> {
        let restored = serde_json::from_str::<CharacterRecord>(text)
            .map_err(RecordError::from)
            .and_then(GameCharacter::try_from);
        if let Err(e) = &restored {
            log::warn!("Character record rejected: {}", e);
        }
        restored
    }
}

/// Saved shape of a character, with the profile not yet checked.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CharacterRecord {
    profile: ProfileRecord,
    name: String,
    level: u32,
    health: i32,
    mana: i32,
    strength: i32,
    agility: i32,
    wisdom: i32,
    charisma: i32,
    primary_ability: String,
    secondary_ability: String,
    companion_type: String,
}

impl TryFrom<CharacterRecord> for GameCharacter {
    type Error = RecordError;

    fn try_from(r: CharacterRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            profile: ZodiacProfile::try_from(r.profile)?,
            name: r.name,
            level: r.level,
            health: r.health,
            mana: r.mana,
            strength: r.strength,
            agility: r.agility,
            wisdom: r.wisdom,
            charisma: r.charisma,
            primary_ability: r.primary_ability,
            secondary_ability: r.secondary_ability,
            companion_type: r.companion_type,
        })
    }
}

/// Build a level-1 character from a profile and a display name.
pub fn assemble_character(profile: ZodiacProfile, name: &str) -> GameCharacter {
    let stats = generate_stats(&profile);
    let character = GameCharacter {
        name: name.to_string(),
        level: STARTING_LEVEL,
        health: stats.health,
        mana: stats.mana,
        strength: stats.strength,
        agility: stats.agility,
        wisdom: stats.wisdom,
        charisma: stats.charisma,
        primary_ability: primary_ability(profile.western_sign()).to_string(),
        secondary_ability: secondary_ability(profile.chinese_sign()).to_string(),
        companion_type: companion_type(profile.chinese_sign()).to_string(),
        profile,
    };
    log::debug!(
        "Character {:?} created: {} / {} with {}",
        character.name,
        character.primary_ability,
        character.secondary_ability,
        character.companion_type
    );
    character
}
