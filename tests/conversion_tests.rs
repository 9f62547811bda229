use std::path::PathBuf;

use tankbook::{
    default_tables, load_tables, parse_value, CalibrationStore, ConversionEngine, ConversionNote,
    ConversionRequest, Direction, TankCatalog, TankbookError, Unit,
};

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn engine_from_fixture() -> ConversionEngine {
    let tables = load_tables(&fixture_path("tank_tables.toml")).expect("Failed to load fixture");
    ConversionEngine::new(CalibrationStore::new(tables))
}

#[test]
fn test_fixture_loads_all_tanks() {
    let engine = engine_from_fixture();
    let nos: Vec<u32> = engine.store().tank_nos().collect();
    assert_eq!(nos, vec![1, 2, 41, 42, 43]);
}

#[test]
fn test_reading_conversion_end_to_end() {
    let engine = engine_from_fixture();

    // Raw text from a form field, through the parse boundary and a request.
    let value = parse_value(" 3 ").expect("Whole-number text should parse");
    let result = engine
        .convert(&ConversionRequest {
            tank_no: 1,
            direction: Direction::ReadingToVolume,
            value,
        })
        .expect("3 mm is within the calibrated range");

    assert_eq!(result.display_value, 4961, "3 mm snaps to the 4 mm entry");
    assert_eq!(result.unit, Unit::Liters);
    let note = result.note.expect("Rounding should be surfaced");
    assert_eq!(note.to_string(), "3 mm rounded to 4 mm");
}

#[test]
fn test_volume_conversion_nearest_end_to_end() {
    let engine = engine_from_fixture();

    let result = engine
        .convert(&ConversionRequest {
            tank_no: 1,
            direction: Direction::VolumeToReading,
            value: 4979,
        })
        .expect("Nearest-match resolution should succeed");

    assert_eq!(result.display_value, 2, "4980 L at 2 mm is the closest entry");
    assert!(!result.exact);
    assert_eq!(result.note, Some(ConversionNote::Nearest { volume_l: 4980 }));

    // The gauge percentage comes from the requested volume.
    let bounds = engine.store().bounds(1).unwrap();
    let percent = result.fill_percent(bounds.max_volume_l);
    assert!(
        (percent - 99.58).abs() < 0.01,
        "4979 of 5000 L should be ~99.58%, got {percent}"
    );
}

#[test]
fn test_bounds_reported_for_selector() {
    let engine = engine_from_fixture();

    let bounds = engine.store().bounds(41).unwrap();
    assert_eq!(bounds.max_volume_l, 2000, "Full-tank capacity for display");
    assert_eq!(bounds.max_reading_mm, 20, "Largest calibrated reading");
}

#[test]
fn test_out_of_range_surfaces_max_reading() {
    let engine = engine_from_fixture();
    let bounds = engine.store().bounds(2).unwrap();

    assert!(engine
        .reading_to_volume(2, i64::from(bounds.max_reading_mm))
        .is_ok());

    let err = engine
        .reading_to_volume(2, i64::from(bounds.max_reading_mm) + 2)
        .unwrap_err();
    assert_eq!(
        err,
        TankbookError::OutOfRange {
            max_reading_mm: bounds.max_reading_mm
        }
    );
    assert!(
        err.to_string().contains("20 mm"),
        "User feedback should name the maximum reading: {err}"
    );
}

#[test]
fn test_shared_design_collapses_in_selector() {
    let engine = engine_from_fixture();
    let catalog = TankCatalog::new(engine.store());

    let labels: Vec<String> = catalog
        .display_options()
        .into_iter()
        .map(|o| o.label)
        .collect();
    assert_eq!(labels, vec!["1", "2", "41 ～ 43"]);

    assert_eq!(catalog.label_for(42), "41 ～ 43");
    assert_eq!(catalog.label_for(2), "2");
}

#[test]
fn test_round_trip_over_every_fixture_pair() {
    let engine = engine_from_fixture();
    let tank_nos: Vec<u32> = engine.store().tank_nos().collect();

    for tank_no in tank_nos {
        let pairs: Vec<(u32, u32)> = engine.store().entries(tank_no).unwrap().collect();
        for (reading_mm, volume_l) in pairs {
            let forward = engine
                .reading_to_volume(tank_no, i64::from(reading_mm))
                .unwrap();
            assert_eq!(forward.display_value, volume_l);
            assert!(forward.note.is_none(), "Stored keys never round");

            let inverse = engine
                .volume_to_reading(tank_no, i64::from(volume_l))
                .unwrap();
            assert!(inverse.exact, "Stored volumes resolve exactly");
            let back = engine
                .reading_to_volume(tank_no, i64::from(inverse.display_value))
                .unwrap();
            assert_eq!(
                back.display_value, volume_l,
                "Tank {tank_no}: {reading_mm} mm / {volume_l} L does not round-trip"
            );
        }
    }
}

#[test]
fn test_default_tables_convert() {
    let engine = ConversionEngine::new(CalibrationStore::new(default_tables()));

    let tank_nos: Vec<u32> = engine.store().tank_nos().collect();
    assert!(!tank_nos.is_empty(), "Embedded dataset should have tanks");

    for tank_no in tank_nos {
        let bounds = engine.store().bounds(tank_no).unwrap();
        let full = engine.reading_to_volume(tank_no, 0).unwrap();
        assert_eq!(
            full.display_value, bounds.max_volume_l,
            "Tank {tank_no}: a zero reading means a full tank"
        );
    }
}

#[test]
fn test_load_tables_from_written_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("survey.toml");
    std::fs::write(&path, "[tanks.5]\n0 = 1200\n2 = 1188\n4 = 1170\n").unwrap();

    let tables = load_tables(&path).expect("Written dataset should load");
    let engine = ConversionEngine::new(CalibrationStore::new(tables));

    let result = engine.reading_to_volume(5, 2).unwrap();
    assert_eq!(result.display_value, 1188);
}

#[test]
fn test_load_tables_missing_file_fails() {
    let err = load_tables(&fixture_path("does_not_exist.toml")).unwrap_err();
    assert!(
        err.to_string().contains("does_not_exist.toml"),
        "Error should name the path: {err}"
    );
}

#[test]
fn test_load_tables_malformed_document_fails() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "[tanks.oops]\n0 = 1200\n").unwrap();

    let err = load_tables(&path).unwrap_err();
    assert!(
        format!("{err:#}").contains("oops"),
        "Error should name the offending key: {err:#}"
    );
}

#[test]
fn test_parse_boundary_rejects_bad_text() {
    for text in ["", "12.5", "abc", "1,200"] {
        let err = parse_value(text).unwrap_err();
        assert_eq!(err.kind(), "invalid_input", "{text:?} should be rejected");
        let message: String = err.into();
        assert!(!message.is_empty());
    }
}
