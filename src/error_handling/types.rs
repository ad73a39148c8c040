//! Error type definitions.
//!
//! This module defines the decode failures reported to API callers and the
//! infrastructure errors raised while starting the service.

use std::path::PathBuf;

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error binding the HTTP listener.
    #[error("Failed to bind server to {address}: {source}")]
    BindError {
        address: String,
        #[source]
        source: std::io::Error,
    },
}

/// Error types for loading a region table.
#[derive(Error, Debug)]
pub enum RegionTableError {
    /// The region file could not be read.
    #[error("Failed to read region table {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The region file is not a JSON array of region entries.
    #[error("Failed to parse region table: {0}")]
    Parse(#[from] serde_json::Error),

    /// A province, regency or district code is not exactly two ASCII digits.
    #[error("Invalid {field} '{value}' in region entry {index} (expected two digits)")]
    InvalidCode {
        index: usize,
        field: &'static str,
        value: String,
    },

    /// The same code was given two different names.
    #[error("Code {code} is named both '{first}' and '{second}'")]
    ConflictingName {
        code: String,
        first: String,
        second: String,
    },

    /// The same six-digit district key appears twice.
    #[error("Duplicate district code {0}")]
    DuplicateDistrict(String),

    /// The table has no entries at all.
    #[error("Region table is empty")]
    Empty,
}

/// Reasons a NIK fails to decode.
///
/// Checks run in a fixed order (length, province, regency, district, birth
/// date) and the first failure is reported. The `Display` text is the
/// user-facing message returned by the API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Fewer or more than 16 digits remain after stripping non-digits.
    #[error("NIK harus 16 digit")]
    InvalidLength { digits: usize },

    /// Digits 1-2 are not a known province.
    #[error("Kode provinsi tidak ditemukan")]
    UnknownProvince { code: String },

    /// Digits 1-4 are not a known regency or city.
    #[error("Kode kabupaten/kota tidak ditemukan")]
    UnknownRegency { code: String },

    /// Digits 1-6 are not a known district.
    #[error("Kode kecamatan tidak ditemukan")]
    UnknownDistrict { code: String },

    /// Digits 7-12 do not form a calendar date.
    #[error("Tanggal lahir tidak valid")]
    InvalidBirthDate { day: u32, month: u32, year: i32 },
}

impl DecodeError {
    /// Returns the fieldless category of this error.
    pub fn kind(&self) -> DecodeErrorKind {
        match self {
            DecodeError::InvalidLength { .. } => DecodeErrorKind::InvalidLength,
            DecodeError::UnknownProvince { .. } => DecodeErrorKind::UnknownProvince,
            DecodeError::UnknownRegency { .. } => DecodeErrorKind::UnknownRegency,
            DecodeError::UnknownDistrict { .. } => DecodeErrorKind::UnknownDistrict,
            DecodeError::InvalidBirthDate { .. } => DecodeErrorKind::InvalidBirthDate,
        }
    }
}

/// Categories of decode failures, used as counter keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum DecodeErrorKind {
    InvalidLength,
    UnknownProvince,
    UnknownRegency,
    UnknownDistrict,
    InvalidBirthDate,
    /// The request body or query could not be read at all
    MalformedPayload,
}

impl DecodeErrorKind {
    /// Snake-case label used in `/status` and `/metrics`.
    pub fn as_label(&self) -> &'static str {
        match self {
            DecodeErrorKind::InvalidLength => "invalid_length",
            DecodeErrorKind::UnknownProvince => "unknown_province",
            DecodeErrorKind::UnknownRegency => "unknown_regency",
            DecodeErrorKind::UnknownDistrict => "unknown_district",
            DecodeErrorKind::InvalidBirthDate => "invalid_birth_date",
            DecodeErrorKind::MalformedPayload => "malformed_payload",
        }
    }
}
