//! Property-style checks of the decoder through the public library API.

use chrono::{Datelike, NaiveDate};
use nik_parse::{decode, DecodeError, DecodeErrorKind, RegionTable, Sex};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
}

#[test]
fn test_any_length_other_than_sixteen_fails() {
    let regions = RegionTable::builtin().unwrap();
    let base = "32010115099000012345";

    for len in 0..=base.len() {
        let input = &base[..len];
        let result = decode(input, &regions, today());
        if len == 16 {
            assert!(result.is_ok(), "16 digits should decode");
        } else {
            assert_eq!(
                result.unwrap_err(),
                DecodeError::InvalidLength { digits: len },
                "length {len}"
            );
        }
    }
}

#[test]
fn test_every_region_and_day_round_trips() {
    let regions = RegionTable::builtin().unwrap();
    let json = include_str!("../data/regions.json");
    let entries: Vec<nik_parse::RegionEntry> = serde_json::from_str(json).unwrap();

    for entry in entries {
        let code = entry.district_key();
        for (day_field, month, yy) in [(1u32, 1u32, 0u32), (31, 12, 24), (45, 6, 25), (68, 2, 99)] {
            let input = format!("{code}{day_field:02}{month:02}{yy:02}0042");
            let parsed = decode(&input, &regions, today()).unwrap();

            assert_eq!(parsed.region, entry);
            assert_eq!(parsed.birth_date.month(), month);
            assert_eq!(parsed.birth_date.year() % 100, yy as i32);
            let expected_sex = if day_field > 40 { Sex::Female } else { Sex::Male };
            assert_eq!(parsed.sex, expected_sex);
            assert_eq!(parsed.birth_date.day() + if day_field > 40 { 40 } else { 0 }, day_field);
            assert_eq!(parsed.serial, "0042");
            assert_eq!(parsed.nik, input);
        }
    }
}

#[test]
fn test_day_field_partition() {
    let regions = RegionTable::builtin().unwrap();

    for day_field in 0..=99u32 {
        // January has 31 days, so only the offset rule decides validity
        let input = format!("320101{day_field:02}01900001");
        let result = decode(&input, &regions, today());
        match day_field {
            1..=31 => assert_eq!(result.unwrap().sex, Sex::Male, "day {day_field}"),
            41..=71 => assert_eq!(result.unwrap().sex, Sex::Female, "day {day_field}"),
            _ => assert_eq!(
                result.unwrap_err().kind(),
                DecodeErrorKind::InvalidBirthDate,
                "day {day_field}"
            ),
        }
    }
}

#[test]
fn test_pivot_boundary() {
    let regions = RegionTable::builtin().unwrap();
    let y24 = decode("3201010101240001", &regions, today()).unwrap();
    let y25 = decode("3201010101250001", &regions, today()).unwrap();
    assert_eq!(y24.birth_year(), 2024);
    assert_eq!(y25.birth_year(), 1925);
}

#[test]
fn test_decode_is_deterministic() {
    let regions = RegionTable::builtin().unwrap();
    let first = decode("3201011509900001", &regions, today()).unwrap();
    let second = decode("3201011509900001", &regions, today()).unwrap();
    assert_eq!(first, second);
}
