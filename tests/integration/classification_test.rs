use std::path::PathBuf;

use smartlog::application::services::Reporter;
use smartlog::domain::rules::{ClassTier, ClassificationTables};
use smartlog::domain::value_objects::severity::Severity;

use crate::support::{
    Entry, FixedSource, FixtureTool, RecordingSink, capture_with_rows, msg, row,
};

fn report_rows(rows: &[String]) -> RecordingSink {
    let sink = RecordingSink::new();
    let source = FixedSource(vec![PathBuf::from("/dev/sda")]);
    let tool = FixtureTool::new().with("/dev/sda", &capture_with_rows("PASSED", rows), 0);
    let tables = ClassificationTables::standard();
    let scratch = tempfile::tempdir().expect("tempdir");

    Reporter::new(&source, &tool, &tables, &sink)
        .run_in(scratch.path())
        .expect("run");
    sink
}

/// Messages the reporter emits for a PASSED /dev/sda with `attributes`.
fn device_block(attributes: Vec<Entry>) -> Vec<Entry> {
    let mut expected = vec![
        msg(Severity::Trace, "querying /dev/sda"),
        msg(Severity::Notice, "/dev/sda"),
        msg(Severity::Notice, "Health:\tPASSED"),
    ];
    expected.extend(attributes);
    expected.push(Entry::Separator);
    expected
}

#[test]
fn every_error_class_entry_round_trips_to_error() {
    let tables = ClassificationTables::standard();
    let first = &tables.error_class()[0];
    let warn = &tables.warn_class()[0];

    let mut rows: Vec<String> = tables
        .error_class()
        .iter()
        .map(|entry| row(entry.id, entry.name, 0, "Pre-fail", "1"))
        .collect();
    rows.push(row(first.id, first.name, 10, "Pre-fail", "0"));
    rows.push(row(warn.id, warn.name, 100, "Old_age", "100"));

    let mut attributes: Vec<Entry> = tables
        .error_class()
        .iter()
        .map(|entry| {
            assert_eq!(entry.tier, ClassTier::Error);
            msg(Severity::Error, &format!("{}:\t1", entry.name))
        })
        .collect();
    attributes.push(msg(Severity::Info, &format!("{}:\t0", first.name)));
    attributes.push(msg(Severity::Info, &format!("{}:\t100", warn.name)));

    let sink = report_rows(&rows);

    assert_eq!(sink.entries(), device_block(attributes));
}

#[test]
fn every_warn_class_entry_round_trips_to_notice() {
    let tables = ClassificationTables::standard();
    let first = &tables.warn_class()[0];
    let error = &tables.error_class()[0];

    let mut rows: Vec<String> = tables
        .warn_class()
        .iter()
        .map(|entry| row(entry.id, entry.name, 0, "Old_age", "1"))
        .collect();
    rows.push(row(first.id, first.name, 50, "Old_age", "49"));
    rows.push(row(error.id, error.name, 10, "Pre-fail", "0"));

    let mut attributes: Vec<Entry> = tables
        .warn_class()
        .iter()
        .map(|entry| {
            assert_eq!(entry.tier, ClassTier::Warn);
            msg(Severity::Notice, &format!("{}:\t1", entry.name))
        })
        .collect();
    attributes.push(msg(Severity::Info, &format!("{}:\t49", first.name)));
    attributes.push(msg(Severity::Info, &format!("{}:\t0", error.name)));

    let sink = report_rows(&rows);

    assert_eq!(sink.entries(), device_block(attributes));
}

#[test]
fn matching_id_with_other_name_is_only_a_warning() {
    let sink = report_rows(&[row(5, "Retired_Block_Count", 0, "Pre-fail", "7")]);
    assert_eq!(
        sink.severity_of("Retired_Block_Count:\t7"),
        Some(Severity::Warn)
    );
}

#[test]
fn matching_name_with_other_id_is_only_a_warning() {
    let sink = report_rows(&[row(6, "Reallocated_Sector_Ct", 0, "Pre-fail", "7")]);
    assert_eq!(
        sink.severity_of("Reallocated_Sector_Ct:\t7"),
        Some(Severity::Warn)
    );
}

#[test]
fn old_age_at_threshold_is_not_triggered() {
    let sink = report_rows(&[row(194, "Temperature_Celsius", 40, "Old_age", "40")]);
    assert_eq!(
        sink.severity_of("Temperature_Celsius:\t40"),
        Some(Severity::Info)
    );
}

#[test]
fn thresholds_compare_numerically() {
    // Lexically "9" > "10"; numerically it is not.
    let sink = report_rows(&[row(9, "Power_On_Hours", 10, "Old_age", "9")]);
    assert_eq!(sink.severity_of("Power_On_Hours:\t9"), Some(Severity::Info));
}
