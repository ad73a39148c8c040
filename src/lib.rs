//! nik_parse library: Indonesian national identity number (NIK) decoding
//!
//! This library decodes a 16-digit NIK into the facts it encodes (region of
//! issue, sex, birth date, serial) and the facts derived from them (age, next
//! birthday, zodiac sign, Javanese market day). It also serves the decoder
//! over HTTP next to a small in-memory visitor counter.
//!
//! # Example
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use nik_parse::{decode, RegionTable};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let regions = RegionTable::builtin()?;
//! let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
//!
//! let parsed = decode("3201011509900001", &regions, today)?;
//! println!("{} born {}", parsed.sex.label(), parsed.formatted_birth_date());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! The decoder is synchronous. The server functions require a Tokio runtime.

mod app;
pub mod config;
mod error_handling;
pub mod initialization;
pub mod nik;
pub mod region;
mod run;
pub mod server;
pub mod visitors;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{
    DecodeError, DecodeErrorKind, DecodeStats, InitializationError, RegionTableError,
};
pub use nik::{decode, ParsedIdentity, Sex};
pub use region::{RegionEntry, RegionTable};
pub use run::{run_server, start};
pub use server::{spawn_server, AppState, ServerHandle};
pub use visitors::{InMemoryVisitorStore, VisitorRecord, VisitorStats, VisitorStore, VisitorTally};
