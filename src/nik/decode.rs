//! NIK decoding.
//!
//! Layout of the 16 digits:
//!
//! | digits | meaning                                   |
//! |--------|-------------------------------------------|
//! | 1-2    | province                                  |
//! | 3-4    | regency or city                           |
//! | 5-6    | district                                  |
//! | 7-8    | day of birth, plus 40 for female holders  |
//! | 9-10   | month of birth                            |
//! | 11-12  | two-digit year of birth                   |
//! | 13-16  | registration serial                       |

use chrono::NaiveDate;

use super::calendar::{elapsed, market_day, until_next_birthday, zodiac};
use super::types::{ParsedIdentity, Sex};
use crate::config::{FEMALE_DAY_OFFSET, NIK_LENGTH, YEAR_PIVOT};
use crate::error_handling::DecodeError;
use crate::region::RegionTable;

/// Removes every character that is not an ASCII digit.
pub fn normalize(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Expands a two-digit year: below [`YEAR_PIVOT`] is 20xx, otherwise 19xx.
pub fn expand_year(two_digit: u32) -> i32 {
    if two_digit < YEAR_PIVOT {
        2000 + two_digit as i32
    } else {
        1900 + two_digit as i32
    }
}

/// Decodes a NIK against `regions`, deriving age and countdown relative to
/// `today`.
///
/// Non-digit characters are ignored, so `3201-0115-0990-0001` and
/// `3201011509900001` decode identically. Checks run in order and the first
/// failure is returned:
///
/// 1. exactly 16 digits
/// 2. known province (digits 1-2)
/// 3. known regency or city (digits 1-4)
/// 4. known district (digits 1-6)
/// 5. a valid calendar birth date (digits 7-12)
///
/// The function is pure: `today` is supplied by the caller and nothing is
/// read from the system clock.
pub fn decode(
    input: &str,
    regions: &RegionTable,
    today: NaiveDate,
) -> Result<ParsedIdentity, DecodeError> {
    let nik = normalize(input);
    if nik.len() != NIK_LENGTH {
        return Err(DecodeError::InvalidLength { digits: nik.len() });
    }

    let province_code = &nik[0..2];
    if regions.province(province_code).is_none() {
        return Err(DecodeError::UnknownProvince {
            code: province_code.to_string(),
        });
    }

    let regency_code = &nik[0..4];
    if regions.regency(regency_code).is_none() {
        return Err(DecodeError::UnknownRegency {
            code: regency_code.to_string(),
        });
    }

    let district_code = &nik[0..6];
    let region = regions
        .district(district_code)
        .ok_or_else(|| DecodeError::UnknownDistrict {
            code: district_code.to_string(),
        })?
        .clone();

    let day_field = two_digits(&nik, 6);
    let month = two_digits(&nik, 8);
    let year = expand_year(two_digits(&nik, 10));

    let (sex, day) = if day_field > FEMALE_DAY_OFFSET {
        (Sex::Female, day_field - FEMALE_DAY_OFFSET)
    } else {
        (Sex::Male, day_field)
    };

    let birth_date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(DecodeError::InvalidBirthDate { day, month, year })?;

    let serial = nik[12..16].to_string();

    Ok(ParsedIdentity {
        sex,
        birth_date,
        region,
        serial,
        age: elapsed(birth_date, today),
        next_birthday: until_next_birthday(birth_date, today),
        zodiac: zodiac(birth_date),
        market_day: market_day(birth_date),
        nik,
    })
}

/// Reads the two-digit number starting at byte `at`. `digits` must be ASCII
/// digits, which `normalize` guarantees.
fn two_digits(digits: &str, at: usize) -> u32 {
    let bytes = digits.as_bytes();
    u32::from(bytes[at] - b'0') * 10 + u32::from(bytes[at + 1] - b'0')
}
