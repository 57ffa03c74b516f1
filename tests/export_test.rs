//! Integration tests for the exporter

#[path = "common/mod.rs"]
mod common;

use common::*;
use dfrp_export::errors::AppError;
use dfrp_export::exporter::run_export;
use dfrp_export::models::Table;
use std::collections::HashSet;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_minimal_property_exports_one_row() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_for(temp_dir.path(), MINIMAL_PROPERTY_XML);

    let stats = run_export(&config).unwrap();
    assert_eq!(stats.rows(Table::Property), 1);
    assert_eq!(stats.rows(Table::Custodian), 1);

    let (header, rows) = read_table(&temp_dir.path().join("property.csv"));
    assert_eq!(header, Table::Property.headers());
    assert_eq!(rows.len(), 1);
    assert_eq!(
        rows[0],
        [
            "2017-11-02",
            "2003-05-14",
            "P1",
            "DND",
            "",
            "",
            "Military",
            "Crown owned",
            "None",
            ""
        ]
    );

    for table in [
        Table::Parcel,
        Table::Structure,
        Table::Tenant,
        Table::StructurePhoto,
        Table::PropertyPhoto,
        Table::FederalContaminatedSite,
    ] {
        let (header, rows) = read_table(&temp_dir.path().join(table.file_name()));
        assert_eq!(header, table.headers(), "{table:?}");
        assert!(rows.is_empty(), "{table:?} should be header-only");
    }
}

#[test]
fn test_sample_registry_row_counts() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_for(temp_dir.path(), SAMPLE_REGISTRY_XML);

    let stats = run_export(&config).unwrap();
    assert_eq!(stats.rows(Table::Custodian), 2);
    assert_eq!(stats.rows(Table::Property), 2);
    assert_eq!(stats.rows(Table::Parcel), 3);
    assert_eq!(stats.rows(Table::Structure), 2);
    assert_eq!(stats.rows(Table::Tenant), 1);
    assert_eq!(stats.rows(Table::StructurePhoto), 1);
    assert_eq!(stats.rows(Table::FederalContaminatedSite), 2);
    assert_eq!(stats.rows(Table::PropertyPhoto), 1);
    assert_eq!(stats.total_rows(), 14);
}

#[test]
fn test_custodians_unique_complete_and_first_wins() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_for(temp_dir.path(), SAMPLE_REGISTRY_XML);
    run_export(&config).unwrap();

    let (_, custodians) = read_table(&temp_dir.path().join("custodian.csv"));
    let codes: Vec<_> = custodians.iter().map(|r| r[0].as_str()).collect();
    assert_eq!(codes, vec!["DND", "PWGSC"]);

    let dnd = &custodians[0];
    assert_eq!(dnd[1], "true");
    assert_eq!(dnd[4], "2017-03-31");
    assert_eq!(dnd[5], "National Defence");
    assert_eq!(dnd[6], "J. Tremblay");
    assert_eq!(dnd[7], "613-555-0100");

    // Every custodian referenced by a property or structure has a row
    let (_, properties) = read_table(&temp_dir.path().join("property.csv"));
    let (_, structures) = read_table(&temp_dir.path().join("structure.csv"));
    let referenced: HashSet<_> = properties
        .iter()
        .map(|r| r[3].as_str())
        .chain(structures.iter().map(|r| r[6].as_str()))
        .collect();
    let written: HashSet<_> = codes.into_iter().collect();
    assert_eq!(referenced, written);
}

#[test]
fn test_child_rows_join_back_to_parents() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_for(temp_dir.path(), SAMPLE_REGISTRY_XML);
    run_export(&config).unwrap();

    let dir = temp_dir.path();
    let (_, properties) = read_table(&dir.join("property.csv"));
    let (_, parcels) = read_table(&dir.join("parcel.csv"));
    let (_, structures) = read_table(&dir.join("structure.csv"));
    let (_, tenants) = read_table(&dir.join("tenant.csv"));
    let (_, sites) = read_table(&dir.join("federal_contaminated_site.csv"));

    let property_numbers: HashSet<_> = properties.iter().map(|r| r[2].clone()).collect();
    let parcel_keys: HashSet<_> = parcels
        .iter()
        .map(|r| (r[0].clone(), r[1].clone()))
        .collect();
    let structure_keys: HashSet<_> = structures
        .iter()
        .map(|r| (r[0].clone(), r[1].clone(), r[2].clone()))
        .collect();

    assert!(parcels.iter().all(|r| property_numbers.contains(&r[0])));
    assert!(sites.iter().all(|r| property_numbers.contains(&r[0])));
    assert!(structures
        .iter()
        .all(|r| parcel_keys.contains(&(r[0].clone(), r[1].clone()))));
    assert!(tenants
        .iter()
        .all(|r| structure_keys.contains(&(r[0].clone(), r[1].clone(), r[2].clone()))));

    // Parcel numbers repeat across properties; the property number disambiguates
    assert_eq!(parcels[0][..2], ["01234", "1"]);
    assert_eq!(parcels[1][..2], ["05678", "1"]);
    assert_eq!(parcels[2][..2], ["05678", "2"]);
}

#[test]
fn test_parcel_and_structure_fields() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_for(temp_dir.path(), SAMPLE_REGISTRY_XML);
    run_export(&config).unwrap();

    let (_, parcels) = read_table(&temp_dir.path().join("parcel.csv"));
    let first = &parcels[0];
    assert_eq!(first[2..10], ["120.5", "ha", "2", "5400", "ha", "80", "12", "false"]);
    assert_eq!(first[10..13], ["Canada", "3506008", "35075"]);
    assert_eq!(first[21..25], ["45.4215", "-75.6972", "5", "m"]);
    assert_eq!(parcels[1][16], "Québec");
    assert_eq!(parcels[2][23..25], ["", ""]);

    let (_, structures) = read_table(&temp_dir.path().join("structure.csv"));
    assert_eq!(structures[0][16], "Office | Storage");
    assert_eq!(structures[0][9..11], ["45.4216", "-75.6971"]);
    assert_eq!(structures[1][16], "");
    assert_eq!(structures[1][3], "");
}

#[test]
fn test_rows_follow_document_order() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_for(temp_dir.path(), SAMPLE_REGISTRY_XML);
    run_export(&config).unwrap();

    let (_, sites) = read_table(&temp_dir.path().join("federal_contaminated_site.csv"));
    assert_eq!(
        sites,
        vec![vec!["01234", "00012345"], vec!["01234", "00012346"]]
    );

    let (_, photos) = read_table(&temp_dir.path().join("property_photo.csv"));
    assert_eq!(photos, vec![vec!["01234", "p-aerial.jpg"]]);

    let (_, structure_photos) = read_table(&temp_dir.path().join("structure_photo.csv"));
    assert_eq!(
        structure_photos,
        vec![vec!["01234", "1", "S-01", "s01-front.jpg"]]
    );
}

#[test]
fn test_export_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_for(temp_dir.path(), SAMPLE_REGISTRY_XML);

    run_export(&config).unwrap();
    let first: Vec<Vec<u8>> = Table::ALL
        .iter()
        .map(|t| fs::read(temp_dir.path().join(t.file_name())).unwrap())
        .collect();

    run_export(&config).unwrap();
    let second: Vec<Vec<u8>> = Table::ALL
        .iter()
        .map(|t| fs::read(temp_dir.path().join(t.file_name())).unwrap())
        .collect();

    assert_eq!(first, second);
}

#[test]
fn test_quoted_fields_survive_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_for(temp_dir.path(), SAMPLE_REGISTRY_XML);
    run_export(&config).unwrap();

    let raw = fs::read_to_string(temp_dir.path().join("property.csv")).unwrap();
    assert!(raw.contains("\"CFB Example, Main Site\""));
    assert!(raw.contains("\r\n"));

    let (_, properties) = read_table(&temp_dir.path().join("property.csv"));
    assert_eq!(properties[0][4], "CFB Example, Main Site");
}

#[test]
fn test_windows_line_breaks_are_normalized() {
    let temp_dir = TempDir::new().unwrap();
    let xml = MINIMAL_PROPERTY_XML.replace('\n', "\r\n").replace(
        "<Primary_Use_E>",
        "<Address_E>100 Base Rd\r\nOttawa</Address_E>\r\n    <Primary_Use_E>",
    );
    let config = config_for(temp_dir.path(), &xml);
    run_export(&config).unwrap();

    let (_, properties) = read_table(&temp_dir.path().join("property.csv"));
    assert_eq!(properties[0][5], "100 Base Rd\nOttawa");
}

#[test]
fn test_separate_output_dir_is_created() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = config_for(&temp_dir.path().join("input"), MINIMAL_PROPERTY_XML);
    let output_dir = temp_dir.path().join("out/tables");
    config.output_dir = Some(output_dir.clone());

    run_export(&config).unwrap();
    for table in Table::ALL {
        assert!(output_dir.join(table.file_name()).exists());
        assert!(!temp_dir.path().join("input").join(table.file_name()).exists());
    }
}

#[test]
fn test_missing_mandatory_field_aborts_but_keeps_written_rows() {
    let temp_dir = TempDir::new().unwrap();
    let broken = SAMPLE_REGISTRY_XML.replace("<Property_Number>05678</Property_Number>", "");
    let config = config_for(temp_dir.path(), &broken);

    let err = run_export(&config).unwrap_err();
    match err {
        AppError::MissingField { element, field } => {
            assert_eq!(element, "Property");
            assert_eq!(field, "Property_Number");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    // The first property was fully written and the files were closed with it
    let (_, properties) = read_table(&temp_dir.path().join("property.csv"));
    assert_eq!(properties.len(), 1);
    assert_eq!(properties[0][2], "01234");
    let (header, _) = read_table(&temp_dir.path().join("tenant.csv"));
    assert_eq!(header, Table::Tenant.headers());
}

#[test]
fn test_malformed_xml_fails_before_writing() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_for(temp_dir.path(), "<Properties><Property></Properties>");

    let err = run_export(&config).unwrap_err();
    assert!(matches!(err, AppError::ParseError(_)));
    assert!(!temp_dir.path().join("property.csv").exists());
}

#[test]
fn test_missing_input_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = config_for(temp_dir.path(), MINIMAL_PROPERTY_XML);
    config.input_file = "absent.xml".to_string();

    let err = run_export(&config).unwrap_err();
    assert!(matches!(err, AppError::IoError(_)));
}
