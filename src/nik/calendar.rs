//! Date arithmetic for derived facts: age, birthday countdown, zodiac sign
//! and market day.

use chrono::{Datelike, Months, NaiveDate};

use super::types::{Age, Countdown, MarketDay, Pasaran, Zodiac};
use crate::config::pasaran_reference_date;

/// First day of each sign after Capricorn, in calendar order.
const ZODIAC_STARTS: [(u32, u32, Zodiac); 11] = [
    (1, 20, Zodiac::Aquarius),
    (2, 19, Zodiac::Pisces),
    (3, 21, Zodiac::Aries),
    (4, 20, Zodiac::Taurus),
    (5, 21, Zodiac::Gemini),
    (6, 21, Zodiac::Cancer),
    (7, 23, Zodiac::Leo),
    (8, 23, Zodiac::Virgo),
    (9, 23, Zodiac::Libra),
    (10, 23, Zodiac::Scorpio),
    (11, 22, Zodiac::Sagittarius),
];

/// Capricorn wraps the year end and starts on 22 December.
const CAPRICORN_START: (u32, u32) = (12, 22);

const PASARAN_CYCLE: [Pasaran; 5] = [
    Pasaran::Legi,
    Pasaran::Pahing,
    Pasaran::Pon,
    Pasaran::Wage,
    Pasaran::Kliwon,
];

/// Whole years, months and days from `from` to `to`.
///
/// Steps forward by whole months (clamping to the end of shorter months),
/// then counts the remaining days. Returns zero when `to` is not after `from`.
pub fn elapsed(from: NaiveDate, to: NaiveDate) -> Age {
    if to <= from {
        return Age::default();
    }

    let mut months = (to.year() - from.year()) * 12 + to.month() as i32 - from.month() as i32;
    let mut anchor = add_months(from, months);
    while months > 0 && anchor.map_or(true, |a| a > to) {
        months -= 1;
        anchor = add_months(from, months);
    }

    let days = anchor.map(|a| (to - a).num_days()).unwrap_or(0);
    let months = months.max(0) as u32;

    Age {
        years: months / 12,
        months: months % 12,
        days: days.max(0) as u32,
    }
}

fn add_months(date: NaiveDate, months: i32) -> Option<NaiveDate> {
    let months = u32::try_from(months).ok()?;
    date.checked_add_months(Months::new(months))
}

/// The birthday falling in `year`; 29 February becomes 28 February in
/// common years.
pub fn birthday_in_year(birth: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birth.month(), birth.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
}

/// Months and days from `today` until the next birthday.
///
/// A birthday that already passed this year rolls over to next year; a
/// birthday today counts down to zero.
pub fn until_next_birthday(birth: NaiveDate, today: NaiveDate) -> Countdown {
    let this_year = birthday_in_year(birth, today.year());
    let next = match this_year {
        Some(date) if date >= today => Some(date),
        _ => birthday_in_year(birth, today.year() + 1),
    };

    match next {
        Some(next) => {
            let left = elapsed(today, next);
            Countdown {
                months: left.years * 12 + left.months,
                days: left.days,
            }
        }
        None => Countdown::default(),
    }
}

/// Tropical zodiac sign for a birth date. Leap years do not shift ranges.
pub fn zodiac(date: NaiveDate) -> Zodiac {
    let key = (date.month(), date.day());
    if key >= CAPRICORN_START {
        return Zodiac::Capricorn;
    }

    ZODIAC_STARTS
        .iter()
        .rev()
        .find(|(month, day, _)| key >= (*month, *day))
        .map(|(_, _, sign)| *sign)
        .unwrap_or(Zodiac::Capricorn)
}

/// Weekday and market day of `date`.
pub fn market_day(date: NaiveDate) -> MarketDay {
    let offset = (date - pasaran_reference_date()).num_days();
    let index = offset.rem_euclid(PASARAN_CYCLE.len() as i64) as usize;

    MarketDay {
        weekday: date.weekday(),
        pasaran: PASARAN_CYCLE[index],
    }
}
