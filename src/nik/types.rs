//! Decoded identity types.

use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};
use strum_macros::{Display, EnumIter};

use crate::region::RegionEntry;

/// Sex encoded in the day-of-birth field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Label used in API responses.
    pub fn label(&self) -> &'static str {
        match self {
            Sex::Male => "LAKI-LAKI",
            Sex::Female => "PEREMPUAN",
        }
    }
}

/// Whole years, months and days between two dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Age {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Tahun {} Bulan {} Hari",
            self.years, self.months, self.days
        )
    }
}

/// Time left until the next birthday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Countdown {
    pub months: u32,
    pub days: u32,
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bulan {} hari lagi", self.months, self.days)
    }
}

/// Tropical zodiac signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Zodiac {
    Capricorn,
    Aquarius,
    Pisces,
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
}

/// The five days of the Javanese market week, in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Pasaran {
    Legi,
    Pahing,
    Pon,
    Wage,
    Kliwon,
}

/// A seven-day weekday paired with its five-day market day, e.g. `Jumat Legi`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarketDay {
    pub weekday: Weekday,
    pub pasaran: Pasaran,
}

impl fmt::Display for MarketDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", weekday_name(self.weekday), self.pasaran)
    }
}

/// Indonesian weekday name.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Senin",
        Weekday::Tue => "Selasa",
        Weekday::Wed => "Rabu",
        Weekday::Thu => "Kamis",
        Weekday::Fri => "Jumat",
        Weekday::Sat => "Sabtu",
        Weekday::Sun => "Minggu",
    }
}

/// Everything a NIK reveals, plus facts derived from the birth date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedIdentity {
    /// The 16 digits, separators removed
    pub nik: String,
    pub sex: Sex,
    pub birth_date: NaiveDate,
    pub region: RegionEntry,
    /// Last four digits; a registration serial, not unique in practice
    pub serial: String,
    pub age: Age,
    pub next_birthday: Countdown,
    pub zodiac: Zodiac,
    pub market_day: MarketDay,
}

impl ParsedIdentity {
    /// Birth date as `DD/MM/YYYY`.
    pub fn formatted_birth_date(&self) -> String {
        self.birth_date.format("%d/%m/%Y").to_string()
    }

    pub fn birth_year(&self) -> i32 {
        self.birth_date.year()
    }

    pub fn postal_code(&self) -> &str {
        &self.region.postal_code
    }
}
