//! Administrative region reference data.
//!
//! A NIK starts with three two-digit codes naming the province, the regency or
//! city, and the district where it was issued. This module loads the table
//! that maps those codes to names and postal codes.
//!
//! The built-in table is a small sample; pass `--regions <FILE>` with a JSON
//! array of [`RegionEntry`] objects to serve a complete one.

mod table;
mod types;

pub use table::RegionTable;
pub use types::RegionEntry;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::RegionTableError;

    fn entry(p: &str, r: &str, d: &str, province: &str, regency: &str) -> RegionEntry {
        RegionEntry {
            province_code: p.into(),
            regency_code: r.into(),
            district_code: d.into(),
            province: province.into(),
            regency: regency.into(),
            district: format!("DISTRICT {d}"),
            postal_code: "12345".into(),
        }
    }

    #[test]
    fn test_builtin_table_loads() {
        let table = RegionTable::builtin().expect("built-in table should parse");
        assert!(!table.is_empty());
        assert_eq!(table.province("32"), Some("JAWA BARAT"));
        assert_eq!(table.regency("3201"), Some("KAB. BOGOR"));
        let cibinong = table.district("320101").expect("320101 should be present");
        assert_eq!(cibinong.district, "CIBINONG");
        assert_eq!(cibinong.postal_code, "16911");
    }

    #[test]
    fn test_lookup_is_exact_match() {
        let table = RegionTable::builtin().unwrap();
        assert!(table.district("32010").is_none());
        assert!(table.district("3201010").is_none());
        assert!(table.province("3").is_none());
    }

    #[test]
    fn test_counts() {
        let table = RegionTable::from_entries(vec![
            entry("32", "01", "01", "JAWA BARAT", "KAB. BOGOR"),
            entry("32", "01", "02", "JAWA BARAT", "KAB. BOGOR"),
            entry("32", "73", "01", "JAWA BARAT", "KOTA BANDUNG"),
            entry("31", "71", "01", "DKI JAKARTA", "JAKARTA SELATAN"),
        ])
        .unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(table.regency_count(), 3);
        assert_eq!(table.province_count(), 2);
    }

    #[test]
    fn test_rejects_empty_table() {
        assert!(matches!(
            RegionTable::from_entries(Vec::new()),
            Err(RegionTableError::Empty)
        ));
    }

    #[test]
    fn test_rejects_bad_code() {
        let err = RegionTable::from_entries(vec![entry("3", "01", "01", "X", "Y")]).unwrap_err();
        match err {
            RegionTableError::InvalidCode { index, field, value } => {
                assert_eq!(index, 0);
                assert_eq!(field, "province_code");
                assert_eq!(value, "3");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rejects_conflicting_names() {
        let err = RegionTable::from_entries(vec![
            entry("32", "01", "01", "JAWA BARAT", "KAB. BOGOR"),
            entry("32", "01", "02", "JAWA BARAT", "KAB. BEKASI"),
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            RegionTableError::ConflictingName { ref code, .. } if code == "3201"
        ));
    }

    #[test]
    fn test_rejects_duplicate_district() {
        let err = RegionTable::from_entries(vec![
            entry("32", "01", "01", "JAWA BARAT", "KAB. BOGOR"),
            entry("32", "01", "01", "JAWA BARAT", "KAB. BOGOR"),
        ])
        .unwrap_err();
        assert!(matches!(err, RegionTableError::DuplicateDistrict(ref code) if code == "320101"));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            RegionTable::from_json_str("{\"not\": \"an array\"}"),
            Err(RegionTableError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = RegionTable::from_path(std::path::Path::new("/no/such/regions.json"))
            .unwrap_err();
        assert!(err.to_string().contains("/no/such/regions.json"));
    }
}
