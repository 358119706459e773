use std::io::Write;

use crate::application::error::RunError;
use crate::application::services::{Reporter, Session};
use crate::domain::entities::DeviceAssessment;

/// Runs a reporting pass and closes the session with its outcome.
///
/// The leveled report itself goes through the session's sink; in JSON mode
/// the assessments are additionally written to `out`. A failed write fails
/// the run like any other run error.
pub fn run_scan(
    reporter: &Reporter<'_>,
    session: Session<'_>,
    json: bool,
    out: &mut dyn Write,
) -> u8 {
    let result = reporter.run().and_then(|assessments| {
        if json {
            write_assessments_json(out, &assessments).map_err(RunError::Output)?;
        }
        Ok(assessments)
    });

    session.finish(&result)
}

fn write_assessments_json(
    out: &mut dyn Write,
    assessments: &[DeviceAssessment],
) -> std::io::Result<()> {
    let output = serde_json::to_string_pretty(assessments)?;
    writeln!(out, "{output}")?;
    out.flush()
}
