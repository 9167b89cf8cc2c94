//! Session state: the active character, location, quests and world clock.
//!
//! The clock advances one unit per [`GameState::tick`]; every
//! [`TICKS_PER_PHASE`] units the day phase rotates
//! Dawn → Day → Dusk → Night → Dawn. Scheduling ticks is the caller's job.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::character::GameCharacter;

/// Clock units between day phase changes.
pub const TICKS_PER_PHASE: u64 = 60;

/// Where a new session begins.
pub const STARTING_LOCATION: &str = "Mount Olympus";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayPhase {
    Dawn,
    Day,
    Dusk,
    Night,
}

impl DayPhase {
    pub fn next(self) -> Self {
        match self {
            DayPhase::Dawn => DayPhase::Day,
            DayPhase::Day => DayPhase::Dusk,
            DayPhase::Dusk => DayPhase::Night,
            DayPhase::Night => DayPhase::Dawn,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DayPhase::Dawn => "Dawn",
            DayPhase::Day => "Day",
            DayPhase::Dusk => "Dusk",
            DayPhase::Night => "Night",
        }
    }

    /// Announcement title, e.g. "Dusk has arrived".
    pub fn arrival_title(self) -> String {
        format!("{} has arrived", self.label())
    }

    pub fn description(self) -> &'static str {
        match self {
            DayPhase::Dawn => "The first light of Apollo's chariot appears on the horizon.",
            DayPhase::Day => "The sun shines brightly over the celestial realms.",
            DayPhase::Dusk => "Apollo's journey nears its end as shadows lengthen.",
            DayPhase::Night => "Nyx's cloak covers the heavens as stars illuminate the sky.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character: Option<GameCharacter>,
    pub current_location: String,
    pub quest_progress: BTreeMap<String, u32>,
    pub day_night_cycle: DayPhase,
    pub game_time: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            character: None,
            current_location: STARTING_LOCATION.to_string(),
            quest_progress: BTreeMap::new(),
            day_night_cycle: DayPhase::Day,
            game_time: 0,
        }
    }
}

impl GameState {
    pub fn with_character(character: GameCharacter) -> Self {
        Self {
            character: Some(character),
            ..Self::default()
        }
    }

    /// Advance the clock by one unit. Returns the new phase when it changed.
    pub fn tick(&mut self) -> Option<DayPhase> {
        self.game_time += 1;
        if self.game_time % TICKS_PER_PHASE != 0 {
            return None;
        }
        self.day_night_cycle = self.day_night_cycle.next();
        log::debug!(
            "t={} {}",
            self.game_time,
            self.day_night_cycle.arrival_title()
        );
        Some(self.day_night_cycle)
    }

    /// Add progress to a quest, starting it if unseen. Returns the new total.
    pub fn record_quest_progress(&mut self, quest: &str, amount: u32) -> u32 {
        let entry = self.quest_progress.entry(quest.to_string()).or_insert(0);
        *entry = entry.saturating_add(amount);
        *entry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_session() {
        let s = GameState::default();
        assert!(s.character.is_none());
        assert_eq!(s.current_location, "Mount Olympus");
        assert_eq!(s.day_night_cycle, DayPhase::Day);
        assert_eq!(s.game_time, 0);
    }

    #[test]
    fn test_phase_cycle() {
        let mut phase = DayPhase::Dawn;
        for expected in [DayPhase::Day, DayPhase::Dusk, DayPhase::Night, DayPhase::Dawn] {
            phase = phase.next();
            assert_eq!(phase, expected);
        }
    }

    #[test]
    fn test_tick_changes_phase_every_sixty() {
        let mut s = GameState::default();
        for _ in 0..59 {
            assert_eq!(s.tick(), None);
        }
        assert_eq!(s.tick(), Some(DayPhase::Dusk));
        assert_eq!(s.game_time, 60);

        for _ in 0..TICKS_PER_PHASE * 3 {
            s.tick();
        }
        // Dusk -> Night -> Dawn -> Day
        assert_eq!(s.day_night_cycle, DayPhase::Day);
        assert_eq!(s.game_time, 240);
    }

    #[test]
    fn test_arrival_copy() {
        assert_eq!(DayPhase::Night.arrival_title(), "Night has arrived");
        assert_eq!(
            DayPhase::Dawn.description(),
            "The first light of Apollo's chariot appears on the horizon."
        );
    }

    #[test]
    fn test_quest_progress_accumulates() {
        let mut s = GameState::default();
        assert_eq!(s.record_quest_progress("labours", 1), 1);
        assert_eq!(s.record_quest_progress("labours", 2), 3);
        assert_eq!(s.record_quest_progress("oracle", 1), 1);
        assert_eq!(s.quest_progress.len(), 2);
    }

    #[test]
    fn test_phase_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&DayPhase::Dusk).unwrap(), "\"dusk\"");
    }

    #[test]
    fn test_session_round_trip() {
        let mut s = GameState::default();
        s.record_quest_progress("labours", 4);
        for _ in 0..61 {
            s.tick();
        }
        let text = serde_json::to_string(&s).unwrap();
        assert!(text.contains("\"dayNightCycle\":\"dusk\""));
        let restored: GameState = serde_json::from_str(&text).unwrap();
        assert_eq!(restored, s);
    }
}
