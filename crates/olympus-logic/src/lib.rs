//! Pure character derivation for Olympus.
//!
//! This crate turns a birth date into a character sheet: zodiac signs,
//! element, numerology, stats and abilities. It is independent of any
//! renderer, UI or storage. Functions take plain data and return plain data,
//! so they are unit-testable and can sit under any front end.
//!
//! # Pipeline
//!
//! ```text
//! NaiveDate ─┬─ calendar ──── WesternSign ── element ── Element ─┐
//!            ├─ calendar ──── ChineseSign ───────────────────────┤
//!            └─ numerology ── u8 ────────────────────────────────┴─ profile
//! profile ─┬─ stats ─── StatBlock ─┐
//!          └─ lexicon ─ abilities ─┴─ character
//! ```
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`calendar`] | Birth date to Western and Chinese sign |
//! | [`character`] | `GameCharacter` assembly and save/restore |
//! | [`creation`] | Creation form validation (name + birth date) |
//! | [`element`] | Western sign to element partition |
//! | [`error`] | Record restore errors |
//! | [`lexicon`] | Ability, companion and numerology name tables |
//! | [`numerology`] | Digit-sum reduction of a date |
//! | [`profile`] | `ZodiacProfile` assembly, description, save/restore |
//! | [`session`] | Session state and day/night clock |
//! | [`signs`] | Sign and element enums |
//! | [`stats`] | Base + element + numerology stat generation |

pub mod calendar;
pub mod character;
pub mod creation;
pub mod element;
pub mod error;
pub mod lexicon;
pub mod numerology;
pub mod profile;
pub mod session;
pub mod signs;
pub mod stats;
