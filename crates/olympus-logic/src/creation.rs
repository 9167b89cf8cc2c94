//! Character creation form: the two fields a player fills in before play.
//!
//! Validation is independent of any UI framework. It reports every problem
//! at once so a form can flag all fields together.
//!
//! ```
//! use olympus_logic::creation::{submit_form, CreationForm};
//!
//! let form = CreationForm {
//!     name: "Ariadne".into(),
//!     birth_date: "1990-04-15".into(),
//! };
//! let hero = submit_form(&form).unwrap();
//! assert_eq!(hero.primary_ability, "Flame Strike");
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::character::{assemble_character, GameCharacter};
use crate::profile::{assemble_profile, BIRTH_DATE_FORMAT};

/// Raw form input, as typed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreationForm {
    pub name: String,
    /// Birth date as `YYYY-MM-DD`.
    pub birth_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Birth date required")]
    MissingBirthDate,
    #[error("Birth date {0:?} is not a valid YYYY-MM-DD date")]
    InvalidBirthDate(String),
    #[error("Name required")]
    EmptyName,
}

impl FormError {
    /// Longer prompt shown under the error title.
    pub fn hint(&self) -> &'static str {
        match self {
            FormError::MissingBirthDate => "Please enter your birth date to continue",
            FormError::InvalidBirthDate(_) => "Please enter a real calendar date",
            FormError::EmptyName => "Please enter your hero's name to continue",
        }
    }
}

fn parse_form_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), BIRTH_DATE_FORMAT).ok()
}

/// Validate a creation form, returning all errors found.
pub fn validate_form(form: &CreationForm) -> Vec<FormError> {
    let mut errors = Vec::new();

    if form.birth_date.trim().is_empty() {
        errors.push(FormError::MissingBirthDate);
    } else if parse_form_date(&form.birth_date).is_none() {
        errors.push(FormError::InvalidBirthDate(form.birth_date.clone()));
    }

    if form.name.trim().is_empty() {
        errors.push(FormError::EmptyName);
    }

    errors
}

/// Validate the form, then derive the character with the trimmed name.
pub fn submit_form(form: &CreationForm) -> Result<GameCharacter, Vec<FormError>> {
    let errors = validate_form(form);
    let birth_date = match parse_form_date(&form.birth_date) {
        Some(date) if errors.is_empty() => date,
        _ => return Err(errors),
    };

    let profile = assemble_profile(birth_date);
    Ok(assemble_character(profile, form.name.trim()))
}
