use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use smartlog::application::services::{Reporter, Session};
use smartlog::domain::entities::DeviceStatus;
use smartlog::domain::ports::diagnostics::DeviceSource;
use smartlog::domain::ports::sink::LogSink;
use smartlog::domain::rules::ClassificationTables;
use smartlog::infrastructure::collectors::{DeviceScanner, SmartctlTool};
use smartlog::infrastructure::sinks::{CompositeSink, LogFileSink};

use crate::support::{RecordingSink, fixture_path};

/// A `/dev` stand-in holding plain files named like block devices.
fn fake_dev(names: &[&str]) -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    for name in names {
        std::fs::write(dir.path().join(name), "").expect("create device node");
    }
    dir
}

/// A `smartctl` stand-in that prints a captured report chosen by device name.
fn fake_smartctl(dir: &Path) -> PathBuf {
    let script = format!(
        "#!/bin/sh\n\
         case \"$2\" in\n\
           */sda) cat '{healthy}' ;;\n\
           */sdb) cat '{failing}'; exit 8 ;;\n\
           *) cat '{unavailable}'; exit 2 ;;\n\
         esac\n",
        healthy = fixture_path("smartctl_healthy.txt").display(),
        failing = fixture_path("smartctl_failing.txt").display(),
        unavailable = fixture_path("smartctl_unavailable.txt").display(),
    );
    let path = dir.join("smartctl");
    std::fs::write(&path, script).expect("write script");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).expect("chmod");
    path
}

#[test]
fn scanner_selects_whole_disks_in_kernel_order() {
    let dev = fake_dev(&["sdb", "sdaa", "sda", "sda1", "nvme0n1", "sdz", "sr0"]);
    let scanner = DeviceScanner::new(dev.path(), "sd").expect("scanner");

    let names: Vec<String> = scanner
        .devices()
        .expect("devices")
        .iter()
        .map(|p| p.file_name().expect("name").to_string_lossy().into_owned())
        .collect();

    assert_eq!(names, vec!["sda", "sdb", "sdz", "sdaa"]);
}

#[test]
fn nonexistent_explicit_device_is_skipped() {
    let dev = fake_dev(&["sda"]);
    let scanner = DeviceScanner::new(dev.path(), "sd")
        .expect("scanner")
        .with_devices(vec![dev.path().join("sdq"), dev.path().join("sda")]);

    let devices = scanner.devices().expect("devices");

    assert_eq!(devices, vec![dev.path().join("sda")]);
}

#[test]
fn full_run_appends_every_level_to_the_log_file() {
    let dev = fake_dev(&["sda", "sdb", "sdc"]);
    let bin = tempfile::tempdir().expect("tempdir");
    let logs = tempfile::tempdir().expect("tempdir");
    let scratch_root = tempfile::tempdir().expect("tempdir");
    let log_path = logs.path().join("smartlog.log");

    let scanner = DeviceScanner::new(dev.path(), "sd").expect("scanner");
    let tool = SmartctlTool::new(fake_smartctl(bin.path()));
    let tables = ClassificationTables::standard();
    let file_sink = LogFileSink::open(&log_path.to_string_lossy()).expect("open log");
    let sink = CompositeSink::new(vec![Box::new(file_sink)]);
    let session = Session::new(&sink);

    let result = Reporter::new(&scanner, &tool, &tables, &sink)
        .with_scratch_root(scratch_root.path())
        .run();
    let assessments = result.as_ref().expect("run");
    let statuses: Vec<DeviceStatus> = assessments.iter().map(|a| a.status).collect();
    assert_eq!(
        statuses,
        vec![
            DeviceStatus::Assessed,
            DeviceStatus::Assessed,
            DeviceStatus::SmartUnavailable
        ]
    );
    assert_eq!(session.finish(&result), 0);

    let content = std::fs::read_to_string(&log_path).expect("read log");
    assert!(content.contains("[TRACE] querying "));
    assert!(content.contains("[INFO] Reallocated_Sector_Ct:\t0"));
    assert!(content.contains("[NOTICE] Health:\tPASSED"));
    assert!(content.contains("[ERROR] Health:\tFAILED!"));
    assert!(content.contains("smartctl exited with status 8"));
    assert!(content.contains("sdc: S.M.A.R.T. support unavailable"));
    assert_eq!(content.matches("\n\n").count(), 3, "one separator per device");

    let leftovers = std::fs::read_dir(scratch_root.path()).expect("read").count();
    assert_eq!(leftovers, 0, "scratch directory is removed");
}

#[test]
fn failed_run_is_recorded_and_flushed() {
    let logs = tempfile::tempdir().expect("tempdir");
    let log_path = logs.path().join("smartlog.log");
    let missing_root = logs.path().join("no-dev");

    let scanner = DeviceScanner::new(&missing_root, "sd").expect("scanner");
    let tool = SmartctlTool::default();
    let tables = ClassificationTables::standard();
    let sink = LogFileSink::open(&log_path.to_string_lossy()).expect("open log");
    let session = Session::new(&sink);

    let result = Reporter::new(&scanner, &tool, &tables, &sink).run();
    let code = session.finish(&result);

    assert_eq!(code, 1);
    let content = std::fs::read_to_string(&log_path).expect("read log");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("[FATAL] failed to enumerate devices"));
    assert!(lines[1].ends_with("[ERROR] smartlog did not complete successfully"));
}

#[test]
fn device_block_ends_with_separator() {
    let dev = fake_dev(&["sda"]);
    let bin = tempfile::tempdir().expect("tempdir");
    let scanner = DeviceScanner::new(dev.path(), "sd").expect("scanner");
    let tool = SmartctlTool::new(fake_smartctl(bin.path()));
    let tables = ClassificationTables::standard();
    let sink = RecordingSink::new();

    Reporter::new(&scanner, &tool, &tables, &sink)
        .run()
        .expect("run");
    sink.flush().expect("flush");

    let entries = sink.entries();
    assert!(!matches!(entries.first(), Some(crate::support::Entry::Separator)));
    assert!(matches!(entries.last(), Some(crate::support::Entry::Separator)));
}
