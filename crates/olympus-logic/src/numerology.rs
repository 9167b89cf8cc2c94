//! Numerology: digit-sum reduction of a birth date.
//!
//! Day, month and full year are written out in plain decimal (no zero
//! padding) and every digit is summed. A sum above 9 gets exactly one more
//! digit-sum pass. That pass is not repeated, so dates whose first sum lands
//! on 19, 28, 29, 37 and so on come out at 10 or more:
//!
//! ```
//! use chrono::NaiveDate;
//! use olympus_logic::numerology::reduce_numerology;
//!
//! // 15 + 4 + 1990 -> 1+5+4+1+9+9+0 = 29 -> 2+9 = 11
//! let date = NaiveDate::from_ymd_opt(1990, 4, 15).unwrap();
//! assert_eq!(reduce_numerology(date), 11);
//! ```

use chrono::{Datelike, NaiveDate};

/// Largest value a single reduction pass can produce (first sum of 99).
pub const MAX_NUMEROLOGY: u8 = 18;

/// Sum of the decimal digits of `n`.
pub fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Numerology value for a birth date, in [1, 18].
pub fn reduce_numerology(date: NaiveDate) -> u8 {
    let sum =
        digit_sum(date.day()) + digit_sum(date.month()) + digit_sum(date.year().unsigned_abs());
    let reduced = if sum > 9 { digit_sum(sum) } else { sum };
    reduced as u8
}
