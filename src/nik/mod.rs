//! Indonesian national identity number (NIK) decoding.
//!
//! A NIK is a 16-digit number encoding where it was issued, the holder's
//! birth date (with 40 added to the day for women) and a registration serial.
//! [`decode`] validates the number against a [`RegionTable`](crate::region::RegionTable)
//! and derives the facts shown to users: sex, age, next birthday, zodiac sign
//! and the Javanese market day of birth.

mod calendar;
mod decode;
mod types;

pub use calendar::{elapsed, market_day, until_next_birthday, zodiac};
pub use decode::{decode, expand_year, normalize};
pub use types::{weekday_name, Age, Countdown, MarketDay, ParsedIdentity, Pasaran, Sex, Zodiac};
