//! Calendar classification: birth date to Western and Chinese sign.
//!
//! Western signs use fixed month/day ranges, inclusive at both ends, with the
//! cycle anchored at March 21 (start of Aries). Chinese signs use the Gregorian
//! year only; the lunar new year boundary is deliberately not modelled, so a
//! birthday in January belongs to the animal of its calendar year.
//!
//! ```
//! use chrono::NaiveDate;
//! use olympus_logic::calendar::{classify_chinese, classify_western};
//! use olympus_logic::signs::{ChineseSign, WesternSign};
//!
//! let date = NaiveDate::from_ymd_opt(1990, 4, 15).unwrap();
//! assert_eq!(classify_western(date), WesternSign::Aries);
//! assert_eq!(classify_chinese(date), ChineseSign::Horse);
//! ```

use chrono::{Datelike, NaiveDate};

use crate::signs::{ChineseSign, WesternSign};

/// Year offset that puts the Rat at index 0 (4 CE was a Rat year).
const CHINESE_CYCLE_EPOCH: i32 = 4;

/// Western sign for a birth date. Total over all (month, day) pairs.
pub fn classify_western(date: NaiveDate) -> WesternSign {
    classify_month_day(date.month(), date.day())
}

/// Western sign for a raw (month, day) pair, month 1-indexed.
///
/// Anything not matched by the first eleven ranges is Pisces, which covers
/// Feb 19 - Mar 20.
pub fn classify_month_day(month: u32, day: u32) -> WesternSign {
    match (month, day) {
        (3, 21..) | (4, ..=19) => WesternSign::Aries,
        (4, 20..) | (5, ..=20) => WesternSign::Taurus,
        (5, 21..) | (6, ..=20) => WesternSign::Gemini,
        (6, 21..) | (7, ..=22) => WesternSign::Cancer,
        (7, 23..) | (8, ..=22) => WesternSign::Leo,
        (8, 23..) | (9, ..=22) => WesternSign::Virgo,
        (9, 23..) | (10, ..=22) => WesternSign::Libra,
        (10, 23..) | (11, ..=21) => WesternSign::Scorpio,
        (11, 22..) | (12, ..=21) => WesternSign::Sagittarius,
        (12, 22..) | (1, ..=19) => WesternSign::Capricorn,
        (1, 20..) | (2, ..=18) => WesternSign::Aquarius,
        _ => WesternSign::Pisces,
    }
}

/// Chinese sign for a birth date, from `(year - 4) mod 12`.
pub fn classify_chinese(date: NaiveDate) -> ChineseSign {
    classify_year(date.year())
}

/// Chinese sign for a Gregorian year. Euclidean remainder keeps the index in
/// [0, 11] for years before the epoch.
pub fn classify_year(year: i32) -> ChineseSign {
    let index = (i64::from(year) - i64::from(CHINESE_CYCLE_EPOCH)).rem_euclid(12);
    ChineseSign::from_index(index as usize)
}
