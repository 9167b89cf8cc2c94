//! Zodiac profile: the immutable result of classifying a birth date.
//!
//! A profile is built once per session by [`assemble_profile`] and never
//! edited. Its element always agrees with its Western sign; records that break
//! this are rejected on restore.
//!
//! ```
//! use chrono::NaiveDate;
//! use olympus_logic::profile::assemble_profile;
//! use olympus_logic::signs::{ChineseSign, Element, WesternSign};
//!
//! let profile = assemble_profile(NaiveDate::from_ymd_opt(1990, 4, 15).unwrap());
//! assert_eq!(profile.western_sign(), WesternSign::Aries);
//! assert_eq!(profile.chinese_sign(), ChineseSign::Horse);
//! assert_eq!(profile.element(), Element::Fire);
//! assert_eq!(profile.numerology(), 11);
//! ```

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calendar::{classify_chinese, classify_western};
use crate::element::resolve_element;
use crate::error::RecordError;
use crate::lexicon::numerology_meaning;
use crate::numerology::reduce_numerology;
use crate::signs::{ChineseSign, Element, WesternSign};

/// Textual form of a stored birth date.
pub const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProfileRecord", into = "ProfileRecord")]
pub struct ZodiacProfile {
    western_sign: WesternSign,
    chinese_sign: ChineseSign,
    element: Element,
    birth_date: NaiveDate,
    numerology: u8,
}

impl ZodiacProfile {
    pub fn western_sign(&self) -> WesternSign {
        self.western_sign
    }

    pub fn chinese_sign(&self) -> ChineseSign {
        self.chinese_sign
    }

    pub fn element(&self) -> Element {
        self.element
    }

    /// Date the profile was derived from. Kept for display, never re-derived.
    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn numerology(&self) -> u8 {
        self.numerology
    }

    pub fn to_json(&self) -> Result<String, RecordError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Restore a profile saved with [`ZodiacProfile::to_json`].
    pub fn from_json(text: &str) -> Result<Self, RecordError> {
        let restored = serde_json::from_str::<ProfileRecord>(text)
            .map_err(RecordError::from)
            .and_then(ZodiacProfile::try_from);
        if let Err(e) = &restored {
            log::warn!("Profile record rejected: {}", e);
        }
        restored
    }
}

/// Classify a birth date into a full profile.
pub fn assemble_profile(birth_date: NaiveDate) -> ZodiacProfile {
    let western_sign = classify_western(birth_date);
    let profile = ZodiacProfile {
        western_sign,
        chinese_sign: classify_chinese(birth_date),
        element: resolve_element(western_sign),
        birth_date,
        numerology: reduce_numerology(birth_date),
    };
    log::debug!(
        "Profile for {}: {} / {} / {} / {}",
        birth_date,
        profile.western_sign,
        profile.chinese_sign,
        profile.element,
        profile.numerology
    );
    profile
}

/// One-paragraph reading of a profile.
pub fn describe_profile(profile: &ZodiacProfile) -> String {
    format!(
        "As a {} with the Chinese zodiac sign of {}, you are aligned with the element of {}. \
         Your numerology value of {} indicates {}.",
        profile.western_sign,
        profile.chinese_sign,
        profile.element,
        profile.numerology,
        numerology_meaning(profile.numerology)
    )
}

/// Greeting shown once a profile has been created.
pub fn welcome_message(name: &str, profile: &ZodiacProfile) -> String {
    format!("Welcome, {}. {}", name, describe_profile(profile))
}

/// Parse a stored birth date.
///
/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp such as
/// `1990-04-15T00:00:00.000Z`; for timestamps the calendar date in the
/// timestamp's own offset is used.
pub fn parse_birth_date(text: &str) -> Result<NaiveDate, chrono::ParseError> {
    let text = text.trim();
    NaiveDate::parse_from_str(text, BIRTH_DATE_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(text).map(|dt| dt.date_naive()))
}

/// Flat on-disk shape of a profile, before the element check.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProfileRecord {
    western_sign: WesternSign,
    chinese_sign: ChineseSign,
    element: Element,
    #[serde(with = "birth_date_text")]
    birth_date: NaiveDate,
    numerology: u8,
}

impl From<ZodiacProfile> for ProfileRecord {
    fn from(p: ZodiacProfile) -> Self {
        Self {
            western_sign: p.western_sign,
            chinese_sign: p.chinese_sign,
            element: p.element,
            birth_date: p.birth_date,
            numerology: p.numerology,
        }
    }
}

impl TryFrom<ProfileRecord> for ZodiacProfile {
    type Error = RecordError;

    fn try_from(r: ProfileRecord) -> Result<Self, Self::Error> {
        let expected = resolve_element(r.western_sign);
        if r.element != expected {
            return Err(RecordError::ElementMismatch {
                sign: r.western_sign,
                stored: r.element,
                expected,
            });
        }
        Ok(Self {
            western_sign: r.western_sign,
            chinese_sign: r.chinese_sign,
            element: r.element,
            birth_date: r.birth_date,
            numerology: r.numerology,
        })
    }
}

mod birth_date_text {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::{parse_birth_date, BIRTH_DATE_FORMAT};

    pub fn serialize<S: Serializer>(date: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(&date.format(BIRTH_DATE_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDate, D::Error> {
        let text = String::deserialize(d)?;
        parse_birth_date(&text)
            .map_err(|e| de::Error::custom(format!("invalid birth date {:?}: {}", text, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_assemble_is_idempotent() {
        let a = assemble_profile(date(1985, 11, 2));
        let b = assemble_profile(date(1985, 11, 2));
        assert_eq!(a, b);
    }

    #[test]
    fn test_element_follows_western_sign() {
        let p = assemble_profile(date(1992, 7, 30));
        assert_eq!(p.western_sign(), WesternSign::Leo);
        assert_eq!(p.element(), Element::Fire);
    }

    #[test]
    fn test_describe_profile() {
        let p = assemble_profile(date(2000, 1, 6));
        // 6 + 1 + 2000 -> 9
        assert_eq!(
            describe_profile(&p),
            "As a Capricorn with the Chinese zodiac sign of Dragon, you are aligned with the \
             element of Earth. Your numerology value of 9 indicates compassion and idealism."
        );
    }

    #[test]
    fn test_describe_profile_two_digit_numerology() {
        let p = assemble_profile(date(1990, 4, 15));
        assert!(describe_profile(&p).ends_with("value of 11 indicates mystical balance."));
    }

    #[test]
    fn test_welcome_message() {
        let p = assemble_profile(date(1990, 4, 15));
        assert!(welcome_message("Ariadne", &p).starts_with("Welcome, Ariadne. As a Aries"));
    }

    #[test]
    fn test_json_shape() {
        let p = assemble_profile(date(1990, 4, 15));
        let value: serde_json::Value = serde_json::from_str(&p.to_json().unwrap()).unwrap();
        assert_eq!(value["westernSign"], "Aries");
        assert_eq!(value["chineseSign"], "Horse");
        assert_eq!(value["element"], "Fire");
        assert_eq!(value["birthDate"], "1990-04-15");
        assert_eq!(value["numerology"], 11);
    }

    #[test]
    fn test_restore_round_trip() {
        let p = assemble_profile(date(1977, 2, 19));
        let restored = ZodiacProfile::from_json(&p.to_json().unwrap()).unwrap();
        assert_eq!(restored, p);
    }

    #[test]
    fn test_restore_accepts_timestamp() {
        let text = r#"{"westernSign":"Aries","chineseSign":"Horse","element":"Fire",
            "birthDate":"1990-04-15T00:00:00.000Z","numerology":11}"#;
        let p = ZodiacProfile::from_json(text).unwrap();
        assert_eq!(p.birth_date(), date(1990, 4, 15));
        assert_eq!(p, assemble_profile(date(1990, 4, 15)));
    }

    #[test]
    fn test_restore_rejects_element_mismatch() {
        let text = r#"{"westernSign":"Aries","chineseSign":"Horse","element":"Water",
            "birthDate":"1990-04-15","numerology":11}"#;
        let err = ZodiacProfile::from_json(text).unwrap_err();
        assert!(
            matches!(
                err,
                RecordError::ElementMismatch {
                    sign: WesternSign::Aries,
                    stored: Element::Water,
                    expected: Element::Fire,
                }
            ),
            "{:?}",
            err
        );
    }

    #[test]
    fn test_restore_reports_malformed_text_as_json() {
        let err = ZodiacProfile::from_json("{\"westernSign\":").unwrap_err();
        assert!(matches!(err, RecordError::Json(_)), "{:?}", err);
    }

    #[test]
    fn test_restore_rejects_bad_date() {
        let text = r#"{"westernSign":"Aries","chineseSign":"Horse","element":"Fire",
            "birthDate":"April 15","numerology":11}"#;
        assert!(ZodiacProfile::from_json(text).is_err());
    }

    #[test]
    fn test_restore_keeps_stored_fields() {
        // Stored values are trusted apart from the element check.
        let text = r#"{"westernSign":"Aries","chineseSign":"Pig","element":"Fire",
            "birthDate":"1990-04-15","numerology":3}"#;
        let p = ZodiacProfile::from_json(text).unwrap();
        assert_eq!(p.chinese_sign(), ChineseSign::Pig);
        assert_eq!(p.numerology(), 3);
    }

    #[test]
    fn test_parse_birth_date_forms() {
        assert_eq!(parse_birth_date("2001-09-30").unwrap(), date(2001, 9, 30));
        assert_eq!(
            parse_birth_date("2001-09-30T23:00:00+02:00").unwrap(),
            date(2001, 9, 30)
        );
        assert!(parse_birth_date("2001-02-30").is_err());
        assert!(parse_birth_date("").is_err());
    }
}
