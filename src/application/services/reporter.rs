use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use crate::application::error::RunError;
use crate::domain::entities::{
    ClassifiedAttribute, DeviceAssessment, DeviceReport, DeviceStatus,
};
use crate::domain::ports::diagnostics::{DeviceSource, DiagnosticTool};
use crate::domain::ports::sink::LogSink;
use crate::domain::report_parser::parse_report;
use crate::domain::rules::{ClassificationTables, classify};
use crate::domain::value_objects::severity::Severity;

/// Orchestrates a reporting pass: enumerate → query → parse → classify → emit.
pub struct Reporter<'a> {
    source: &'a dyn DeviceSource,
    tool: &'a dyn DiagnosticTool,
    tables: &'a ClassificationTables,
    sink: &'a dyn LogSink,
    cancel: Option<&'a AtomicBool>,
    scratch_root: Option<PathBuf>,
}

impl<'a> Reporter<'a> {
    #[must_use]
    pub const fn new(
        source: &'a dyn DeviceSource,
        tool: &'a dyn DiagnosticTool,
        tables: &'a ClassificationTables,
        sink: &'a dyn LogSink,
    ) -> Self {
        Self {
            source,
            tool,
            tables,
            sink,
            cancel: None,
            scratch_root: None,
        }
    }

    /// Stop between devices once `flag` is set.
    #[must_use]
    pub const fn with_cancel(mut self, flag: &'a AtomicBool) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Create the run's scratch directory under `root` instead of the system temp dir.
    #[must_use]
    pub fn with_scratch_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.scratch_root = Some(root.into());
        self
    }

    /// Report on every device, creating a scratch directory for the run.
    ///
    /// The scratch directory and everything captured into it is removed
    /// when this returns, on every path.
    ///
    /// # Errors
    ///
    /// Returns `RunError::Scratch` if the scratch directory cannot be created,
    /// `RunError::Enumeration` if the devices cannot be listed and
    /// `RunError::Interrupted` if the cancel flag was raised mid-run.
    pub fn run(&self) -> Result<Vec<DeviceAssessment>, RunError> {
        let scratch = self.create_scratch().map_err(|e| {
            self.log(
                Severity::Fatal,
                &format!("cannot create scratch directory: {e}"),
            );
            RunError::Scratch(e)
        })?;
        tracing::debug!("scratch directory: {}", scratch.path().display());
        self.run_in(scratch.path())
    }

    /// Report on every device using an existing scratch directory.
    ///
    /// # Errors
    ///
    /// Same as [`Reporter::run`], minus scratch creation.
    pub fn run_in(&self, scratch: &Path) -> Result<Vec<DeviceAssessment>, RunError> {
        let devices = self.source.devices().map_err(|e| {
            self.log(Severity::Fatal, &e.to_string());
            RunError::from(e)
        })?;

        if devices.is_empty() {
            self.log(Severity::Warn, "no devices found");
        }

        let mut assessments = Vec::with_capacity(devices.len());
        for device in &devices {
            if self.cancelled() {
                self.log(
                    Severity::Warn,
                    &format!("interrupted before {}", device.display()),
                );
                return Err(RunError::Interrupted);
            }
            assessments.push(self.report_path(device, scratch));
        }
        Ok(assessments)
    }

    /// Query, parse and report a single device.
    pub fn report_path(&self, device: &Path, scratch: &Path) -> DeviceAssessment {
        let path = device.display().to_string();
        self.log(Severity::Trace, &format!("querying {path}"));

        let output = match self.tool.query(device, scratch) {
            Ok(output) => output,
            Err(e) => {
                self.log(Severity::Error, &format!("{path}: {e}"));
                self.separator();
                return DeviceAssessment::failed(&path, DeviceStatus::QueryFailed);
            }
        };

        if !output.succeeded() {
            let status = output
                .exit_code
                .map_or_else(|| "signal".to_string(), |code| code.to_string());
            self.log(
                Severity::Debug,
                &format!("{path}: smartctl exited with status {status}"),
            );
        }

        self.report_device(&parse_report(&path, &output.text))
    }

    /// Emit the block for an already parsed report.
    pub fn report_device(&self, report: &DeviceReport) -> DeviceAssessment {
        let path = report.device_path.as_str();

        if !report.smart_capable {
            self.log(
                Severity::Error,
                &format!("{path}: S.M.A.R.T. support unavailable"),
            );
            self.separator();
            return DeviceAssessment::failed(path, DeviceStatus::SmartUnavailable);
        }

        self.log(Severity::Notice, path);

        let health_severity = if report.health_passed() {
            Severity::Notice
        } else {
            Severity::Error
        };
        self.log(
            health_severity,
            &format!("Health:\t{}", report.overall_health),
        );

        let mut attributes = Vec::new();
        for observation in report.observations.iter().filter(|o| o.is_live()) {
            let Some(severity) = classify(observation, self.tables) else {
                continue;
            };
            self.log(
                severity,
                &format!("{}:\t{}", observation.name, observation.raw_value),
            );
            attributes.push(ClassifiedAttribute {
                id: observation.id,
                name: observation.name.clone(),
                raw_value: observation.raw_value,
                raw_text: observation.raw_text.clone(),
                severity,
            });
        }

        self.separator();

        DeviceAssessment {
            device_path: path.to_string(),
            status: DeviceStatus::Assessed,
            health: Some(report.overall_health.clone()),
            attributes,
        }
    }

    fn create_scratch(&self) -> std::io::Result<tempfile::TempDir> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("smartlog-");
        match &self.scratch_root {
            Some(root) => builder.tempdir_in(root),
            None => builder.tempdir(),
        }
    }

    fn cancelled(&self) -> bool {
        self.cancel.is_some_and(|flag| flag.load(Ordering::SeqCst))
    }

    fn log(&self, severity: Severity, message: &str) {
        if let Err(e) = self.sink.emit(severity, message) {
            tracing::warn!("Failed to emit {severity} message: {e}");
        }
    }

    fn separator(&self) {
        if let Err(e) = self.sink.separator() {
            tracing::warn!("Failed to emit separator: {e}");
        }
    }
}
