//! Region lookup table.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::Path;

use log::debug;

use super::types::RegionEntry;
use crate::error_handling::RegionTableError;

/// Sample table compiled into the binary.
const BUILTIN_REGIONS: &str = include_str!("../../data/regions.json");

/// Immutable province / regency / district lookup.
///
/// Built once at startup and shared read-only, so lookups need no locking.
#[derive(Debug, Clone)]
pub struct RegionTable {
    provinces: HashMap<String, String>,
    regencies: HashMap<String, String>,
    districts: HashMap<String, RegionEntry>,
}

impl RegionTable {
    /// Builds a table from entries, rejecting malformed codes, conflicting
    /// names and duplicate districts.
    pub fn from_entries(entries: Vec<RegionEntry>) -> Result<Self, RegionTableError> {
        if entries.is_empty() {
            return Err(RegionTableError::Empty);
        }

        let mut provinces = HashMap::new();
        let mut regencies = HashMap::new();
        let mut districts = HashMap::with_capacity(entries.len());

        for (index, entry) in entries.into_iter().enumerate() {
            check_code(index, "province_code", &entry.province_code)?;
            check_code(index, "regency_code", &entry.regency_code)?;
            check_code(index, "district_code", &entry.district_code)?;

            insert_name(&mut provinces, entry.province_key(), &entry.province)?;
            insert_name(&mut regencies, entry.regency_key(), &entry.regency)?;

            let key = entry.district_key();
            match districts.entry(key) {
                Entry::Occupied(slot) => {
                    return Err(RegionTableError::DuplicateDistrict(slot.key().clone()))
                }
                Entry::Vacant(slot) => {
                    slot.insert(entry);
                }
            }
        }

        debug!("Built region table with {} districts", districts.len());

        Ok(Self {
            provinces,
            regencies,
            districts,
        })
    }

    /// Parses a JSON array of region entries.
    pub fn from_json_str(json: &str) -> Result<Self, RegionTableError> {
        let entries: Vec<RegionEntry> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    /// Reads and parses a JSON region file.
    pub fn from_path(path: &Path) -> Result<Self, RegionTableError> {
        let json = std::fs::read_to_string(path).map_err(|source| RegionTableError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// The sample table shipped with the binary.
    pub fn builtin() -> Result<Self, RegionTableError> {
        Self::from_json_str(BUILTIN_REGIONS)
    }

    /// Province name for a two-digit code.
    pub fn province(&self, code: &str) -> Option<&str> {
        self.provinces.get(code).map(String::as_str)
    }

    /// Regency/city name for a four-digit code.
    pub fn regency(&self, code: &str) -> Option<&str> {
        self.regencies.get(code).map(String::as_str)
    }

    /// District entry for a six-digit code.
    pub fn district(&self, code: &str) -> Option<&RegionEntry> {
        self.districts.get(code)
    }

    /// Number of districts.
    pub fn len(&self) -> usize {
        self.districts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.districts.is_empty()
    }

    pub fn province_count(&self) -> usize {
        self.provinces.len()
    }

    pub fn regency_count(&self) -> usize {
        self.regencies.len()
    }
}

fn check_code(index: usize, field: &'static str, value: &str) -> Result<(), RegionTableError> {
    if value.len() == 2 && value.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(RegionTableError::InvalidCode {
            index,
            field,
            value: value.to_string(),
        })
    }
}

fn insert_name(
    names: &mut HashMap<String, String>,
    code: String,
    name: &str,
) -> Result<(), RegionTableError> {
    match names.entry(code) {
        Entry::Occupied(slot) if slot.get() != name => Err(RegionTableError::ConflictingName {
            code: slot.key().clone(),
            first: slot.get().clone(),
            second: name.to_string(),
        }),
        Entry::Occupied(_) => Ok(()),
        Entry::Vacant(slot) => {
            slot.insert(name.to_string());
            Ok(())
        }
    }
}
