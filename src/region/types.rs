//! Region reference types.

use serde::{Deserialize, Serialize};

/// One district of the administrative region table.
///
/// The three two-digit codes concatenate to the first six digits of a NIK
/// issued in that district.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionEntry {
    pub province_code: String,
    pub regency_code: String,
    pub district_code: String,
    pub province: String,
    pub regency: String,
    pub district: String,
    pub postal_code: String,
}

impl RegionEntry {
    /// Two-digit province key, e.g. `32`.
    pub fn province_key(&self) -> String {
        self.province_code.clone()
    }

    /// Four-digit regency/city key, e.g. `3201`.
    pub fn regency_key(&self) -> String {
        format!("{}{}", self.province_code, self.regency_code)
    }

    /// Six-digit district key, e.g. `320101`.
    pub fn district_key(&self) -> String {
        format!(
            "{}{}{}",
            self.province_code, self.regency_code, self.district_code
        )
    }
}
