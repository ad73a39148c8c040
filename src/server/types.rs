//! Server state and response bodies.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::config::MESSAGE_VALID;
use crate::error_handling::DecodeStats;
use crate::nik::ParsedIdentity;
use crate::region::RegionTable;
use crate::visitors::VisitorTally;

/// Shared state for all handlers
#[derive(Clone)]
pub struct AppState {
    pub regions: Arc<RegionTable>,
    pub visitors: Arc<VisitorTally>,
    pub decode_stats: Arc<DecodeStats>,
    pub start_time: Arc<Instant>,
}

impl AppState {
    pub fn new(regions: Arc<RegionTable>, visitors: Arc<VisitorTally>) -> Self {
        Self {
            regions,
            visitors,
            decode_stats: Arc::new(DecodeStats::new()),
            start_time: Arc::new(Instant::now()),
        }
    }
}

/// Body of `POST /api/nik/parse`
#[derive(Debug, Deserialize)]
pub struct NikRequest {
    pub nik: String,
}

/// Query of `GET /api/nik/parse`
#[derive(Debug, Deserialize)]
pub struct NikQuery {
    pub nik: Option<String>,
}

/// Body of `POST /api/visitors`
#[derive(Debug, Default, Deserialize)]
pub struct VisitRequest {
    #[serde(default)]
    pub page: Option<String>,
}

/// Response of the decode endpoint.
///
/// Serialized with a `status` tag of `success` or `error`; only the success
/// variant carries `data`.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum NikResponse {
    Success { pesan: String, data: NikData },
    Error { pesan: String },
}

impl NikResponse {
    pub fn success(parsed: &ParsedIdentity) -> Self {
        NikResponse::Success {
            pesan: MESSAGE_VALID.to_string(),
            data: NikData::from(parsed),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        NikResponse::Error {
            pesan: message.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct NikData {
    pub nik: String,
    pub kelamin: String,
    pub lahir: String,
    pub provinsi: String,
    pub kotakab: String,
    pub kecamatan: String,
    pub uniqcode: String,
    pub tambahan: NikExtras,
}

/// Derived facts nested under `tambahan`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NikExtras {
    pub kodepos: String,
    pub pasaran: String,
    pub usia: String,
    pub ultah: String,
    pub zodiak: String,
    pub tahun_lahir: String,
    pub tempat_lahir: String,
}

impl From<&ParsedIdentity> for NikData {
    fn from(parsed: &ParsedIdentity) -> Self {
        NikData {
            nik: parsed.nik.clone(),
            kelamin: parsed.sex.label().to_string(),
            lahir: parsed.formatted_birth_date(),
            provinsi: parsed.region.province.clone(),
            kotakab: parsed.region.regency.clone(),
            kecamatan: parsed.region.district.clone(),
            uniqcode: parsed.serial.clone(),
            tambahan: NikExtras {
                kodepos: parsed.postal_code().to_string(),
                pasaran: parsed.market_day.to_string(),
                usia: parsed.age.to_string(),
                ultah: parsed.next_birthday.to_string(),
                zodiak: parsed.zodiac.to_string(),
                tahun_lahir: parsed.birth_year().to_string(),
                tempat_lahir: parsed.region.province.clone(),
            },
        }
    }
}

/// JSON response for `/status` endpoint
#[derive(Serialize)]
pub struct StatusResponse {
    pub uptime_seconds: f64,
    pub regions: RegionCounts,
    pub decodes: DecodeCounts,
    pub visitors: VisitorCounts,
}

#[derive(Serialize)]
pub struct RegionCounts {
    pub provinces: usize,
    pub regencies: usize,
    pub districts: usize,
}

#[derive(Serialize)]
pub struct DecodeCounts {
    pub total: usize,
    pub success: usize,
    pub failed: usize,
    pub failures: BTreeMap<&'static str, usize>,
}

#[derive(Serialize)]
pub struct VisitorCounts {
    pub total: usize,
}
