use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use smartlog::domain::ports::diagnostics::{
    DeviceSource, DiagnosticOutput, DiagnosticTool, ScanError,
};
use smartlog::domain::ports::sink::{LogSink, SinkError};
use smartlog::domain::value_objects::severity::Severity;

// ---------------------------------------------------------------------------
// Fixture loader
// ---------------------------------------------------------------------------

pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

pub fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name)).expect("Failed to read fixture")
}

// ---------------------------------------------------------------------------
// RecordingSink
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Message(Severity, String),
    Separator,
}

pub fn msg(severity: Severity, text: &str) -> Entry {
    Entry::Message(severity, text.to_string())
}

pub struct RecordingSink {
    entries: Mutex<Vec<Entry>>,
}

impl RecordingSink {
    pub const fn new() -> Self {
        Self {
            entries: Mutex::new(vec![]),
        }
    }

    pub fn entries(&self) -> Vec<Entry> {
        self.entries.lock().expect("lock").clone()
    }

    /// Severity of the single message with exactly this text.
    pub fn severity_of(&self, text: &str) -> Option<Severity> {
        let matching: Vec<Severity> = self
            .entries()
            .into_iter()
            .filter_map(|e| match e {
                Entry::Message(s, m) if m == text => Some(s),
                _ => None,
            })
            .collect();
        assert!(matching.len() <= 1, "{text:?} emitted {} times", matching.len());
        matching.first().copied()
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.entries()
            .iter()
            .filter(|e| matches!(e, Entry::Message(s, _) if *s == severity))
            .count()
    }
}

impl LogSink for RecordingSink {
    fn emit(&self, severity: Severity, message: &str) -> Result<(), SinkError> {
        self.entries
            .lock()
            .expect("lock")
            .push(Entry::Message(severity, message.to_string()));
        Ok(())
    }

    fn separator(&self) -> Result<(), SinkError> {
        self.entries.lock().expect("lock").push(Entry::Separator);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Mock source and tool
// ---------------------------------------------------------------------------

pub struct FixedSource(pub Vec<PathBuf>);

impl DeviceSource for FixedSource {
    fn devices(&self) -> Result<Vec<PathBuf>, ScanError> {
        Ok(self.0.clone())
    }
}

/// Answers each device with canned `smartctl -a` text; unknown devices fail to spawn.
pub struct FixtureTool {
    outputs: HashMap<PathBuf, DiagnosticOutput>,
}

impl FixtureTool {
    pub fn new() -> Self {
        Self {
            outputs: HashMap::new(),
        }
    }

    pub fn with(mut self, device: &str, text: &str, exit_code: i32) -> Self {
        self.outputs.insert(
            PathBuf::from(device),
            DiagnosticOutput {
                text: text.to_string(),
                exit_code: Some(exit_code),
            },
        );
        self
    }
}

impl DiagnosticTool for FixtureTool {
    fn query(&self, device: &Path, _scratch: &Path) -> Result<DiagnosticOutput, ScanError> {
        self.outputs
            .get(device)
            .cloned()
            .ok_or_else(|| ScanError::ToolUnavailable {
                tool: "smartctl".to_string(),
                reason: format!("no fixture for {}", device.display()),
            })
    }
}

/// A minimal capable report with the given attribute rows.
pub fn capture_with_rows(health: &str, rows: &[String]) -> String {
    let mut text = String::from(
        "smartctl 7.3 2022-02-28 r5338 [x86_64-linux-6.1.0] (local build)\n\
         SMART support is: Available - device has SMART capability.\n\
         SMART support is: Enabled\n\n",
    );
    text.push_str(&format!(
        "SMART overall-health self-assessment test result: {health}\n\n"
    ));
    text.push_str(
        "ID# ATTRIBUTE_NAME          FLAG     VALUE WORST THRESH TYPE      UPDATED  WHEN_FAILED RAW_VALUE\n",
    );
    for row in rows {
        text.push_str(row);
        text.push('\n');
    }
    text
}

pub fn row(id: u8, name: &str, threshold: u32, attr_type: &str, raw: &str) -> String {
    format!("{id:>3} {name:<23} 0x0033   100   100   {threshold:03}    {attr_type:<9} Always       -       {raw}")
}
