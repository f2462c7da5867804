use cabinet::api::CabinetApi;
use cabinet::config::CabinetConfig;
use cabinet::error::CabinetError;
use cabinet::export::ExportFormat;
use cabinet::model::RecordData;
use cabinet::store::{RecordService, RecordStore};
use cabinet::validation::RuleSet;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;
use tempfile::TempDir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn data(first: &str, last: &str, born: NaiveDate) -> RecordData {
    RecordData::new(first, last, born, 212, Decimal::from_str("1500.00").unwrap(), 'M')
}

fn api_in(dir: &TempDir, rules: RuleSet) -> CabinetApi<RecordStore<RuleSet>> {
    let config = CabinetConfig {
        export_dir: dir.path().to_path_buf(),
        ..CabinetConfig::default()
    };
    CabinetApi::new(RecordStore::new(rules), config)
}

#[test]
fn renamed_record_moves_between_name_buckets() {
    let temp = TempDir::new().unwrap();
    let mut api = api_in(&temp, RuleSet::default_rules());

    api.create_record(data("Jon", "Smith", date(1990, 3, 5))).unwrap();
    api.create_record(data("Ann", "Smith", date(1985, 7, 1))).unwrap();

    api.edit_record(1, data("Jonathan", "Smith", date(1990, 3, 5)))
        .unwrap();

    assert!(api.find_records("firstname", "Jon").unwrap().listed_records.is_empty());

    let found = api.find_records("FirstName", "jonathan").unwrap();
    assert_eq!(found.listed_records.len(), 1);
    assert_eq!(found.listed_records[0].id, 1);

    let smiths = api.find_records("lastname", "SMITH").unwrap();
    let ids: Vec<u32> = smiths.listed_records.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2]);

    let born = api.find_records("dateofbirth", "03/05/1990").unwrap();
    assert_eq!(born.listed_records.len(), 1);
}

#[test]
fn rejected_edit_leaves_record_untouched() {
    let temp = TempDir::new().unwrap();
    let mut api = api_in(&temp, RuleSet::default_rules());
    api.create_record(data("Jon", "Smith", date(1990, 3, 5))).unwrap();

    let err = api
        .edit_record(1, data("J", "Smith", date(1990, 3, 5)))
        .unwrap_err();
    assert!(matches!(err, CabinetError::Validation { .. }));

    let record = api.store().get_record(1).unwrap();
    assert_eq!(record.first_name, "Jon");
    assert_eq!(api.find_records("firstname", "jon").unwrap().listed_records.len(), 1);
}

#[test]
fn edit_of_missing_record_is_not_found() {
    let temp = TempDir::new().unwrap();
    let mut api = api_in(&temp, RuleSet::default_rules());

    let err = api
        .edit_record(7, data("Jon", "Smith", date(1990, 3, 5)))
        .unwrap_err();
    assert!(matches!(err, CabinetError::RecordNotFound(7)));
}

#[test]
fn custom_rules_are_stricter_on_gender() {
    let temp = TempDir::new().unwrap();
    let mut default_api = api_in(&temp, RuleSet::default_rules());
    let mut custom_api = api_in(&temp, RuleSet::custom_rules());

    let mut neutral = data("Jon", "Smith", date(1990, 3, 5));
    neutral.gender = 'N';

    assert!(default_api.create_record(neutral.clone()).is_ok());
    assert!(custom_api.create_record(neutral).is_err());
}

#[test]
fn csv_export_reads_back() {
    let temp = TempDir::new().unwrap();
    let mut api = api_in(&temp, RuleSet::default_rules());
    api.create_record(data("Jon", "Smith", date(1990, 3, 5))).unwrap();
    api.create_record(data("Ann", "Lee", date(1985, 7, 1))).unwrap();

    let res = api.export_records(ExportFormat::Csv, "people.csv").unwrap();
    assert_eq!(res.export_path, Some(temp.path().join("people.csv")));

    let content = std::fs::read_to_string(temp.path().join("people.csv")).unwrap();
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("Id,First Name,Last Name,Date of Birth,Area code,Savings,Gender")
    );

    let rows: Vec<Vec<&str>> = lines.map(|l| l.split(',').collect()).collect();
    assert_eq!(rows.len(), 2);
    for (row, record) in rows.iter().zip(api.store().get_records()) {
        assert_eq!(row[0].parse::<u32>().unwrap(), record.id);
        assert_eq!(row[1], record.first_name);
        assert_eq!(row[2], record.last_name);
        assert_eq!(
            NaiveDate::parse_from_str(row[3], "%m/%d/%Y").unwrap(),
            record.date_of_birth
        );
        assert_eq!(row[4].parse::<i16>().unwrap(), record.area_code);
        assert_eq!(Decimal::from_str(row[5]).unwrap(), record.savings);
        assert_eq!(row[6], record.gender.to_string());
    }
}

#[test]
fn snapshot_ignores_later_edits() {
    let temp = TempDir::new().unwrap();
    let mut api = api_in(&temp, RuleSet::default_rules());
    api.create_record(data("Jon", "Smith", date(1990, 3, 5))).unwrap();

    let snapshot = api.store().make_snapshot();
    api.edit_record(1, data("Jonathan", "Smith", date(1990, 3, 5)))
        .unwrap();
    api.create_record(data("Ann", "Lee", date(1985, 7, 1))).unwrap();

    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot.records()[0].first_name, "Jon");
}

#[test]
fn xml_export_lists_every_record() {
    let temp = TempDir::new().unwrap();
    let mut api = api_in(&temp, RuleSet::default_rules());
    api.create_record(data("Jon", "Smith", date(1990, 3, 5))).unwrap();
    api.create_record(data("Ann", "O'Neil", date(1985, 7, 1))).unwrap();

    api.export_records(ExportFormat::Xml, "people.xml").unwrap();
    let xml = std::fs::read_to_string(temp.path().join("people.xml")).unwrap();

    assert!(xml.starts_with("<?xml"));
    assert_eq!(xml.matches("<record id=").count(), 2);
    assert!(xml.contains("<name first=\"Ann\" last=\"O&apos;Neil\" />"));
    assert!(xml.contains("<dateofBirth>03/05/1990</dateofBirth>"));
    assert!(xml.trim_end().ends_with("</records>"));
}
