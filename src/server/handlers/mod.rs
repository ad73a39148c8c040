//! HTTP handlers.

mod metrics;
mod nik;
mod status;
mod visitors;

pub use metrics::metrics_handler;
pub use nik::{parse_nik_get, parse_nik_post};
pub use status::status_handler;
pub use visitors::{origin_address, record_visit, visitor_stats};
