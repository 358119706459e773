use std::sync::LazyLock;

use regex::Regex;

use crate::domain::entities::attribute::{AttributeObservation, AttributeType, UpdateFrequency};
use crate::domain::entities::device_report::DeviceReport;

/// Printed by `smartctl -i` / `-a` when the device implements S.M.A.R.T.
pub const CAPABILITY_MARKER: &str = "SMART support is: Available";

const HEALTH_LABEL: &str = "SMART overall-health self-assessment test result:";
const UNKNOWN_HEALTH: &str = "UNKNOWN";
const FIELD_COUNT: usize = 10;

/// Selects attribute-table rows whose TYPE is Pre-fail/Old_age and whose
/// UPDATED column is Always/Offline (columns 7 and 8).
#[allow(clippy::expect_used)]
static ATTRIBUTE_ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^\s*\d+",
        r"\s+\S+\s+\S+\s+\S+\s+\S+\s+\S+",
        r"\s+(?:Pre-fail|Old_age)",
        r"\s+(?:Always|Offline)(?:\s|$)",
    ))
    .expect("attribute row pattern is valid")
});

/// Parses the textual output of `smartctl -a` for one device.
///
/// Never fails: a missing capability marker yields an unavailable report and
/// malformed attribute rows are skipped.
#[must_use]
pub fn parse_report(device_path: &str, text: &str) -> DeviceReport {
    if !text.contains(CAPABILITY_MARKER) {
        return DeviceReport::unavailable(device_path);
    }

    let observations = text
        .lines()
        .filter(|line| ATTRIBUTE_ROW.is_match(line))
        .filter_map(|line| {
            let parsed = parse_attribute_row(line);
            if parsed.is_none() {
                tracing::debug!("{device_path}: skipping malformed attribute row: {line:?}");
            }
            parsed
        })
        .collect();

    DeviceReport {
        device_path: device_path.to_string(),
        smart_capable: true,
        overall_health: parse_health(text).unwrap_or_else(|| UNKNOWN_HEALTH.to_string()),
        observations,
    }
}

fn parse_health(text: &str) -> Option<String> {
    text.lines().find_map(|line| {
        line.split_once(HEALTH_LABEL)
            .map(|(_, verdict)| verdict.trim().to_string())
    })
}

/// Splits one attribute row into its ten columns and validates them.
#[must_use]
pub fn parse_attribute_row(line: &str) -> Option<AttributeObservation> {
    let [id, name, flag, value, worst, threshold, attr_type, updated, when_failed, raw] =
        split_fields(line)?;

    Some(AttributeObservation {
        id: id.parse().ok()?,
        name: name.to_string(),
        flag: flag.to_string(),
        value: value.parse().ok()?,
        worst: worst.parse().ok()?,
        threshold: parse_threshold(threshold)?,
        attr_type: AttributeType::from_column(attr_type),
        update_frequency: UpdateFrequency::from_column(updated),
        when_failed: (when_failed != "-").then(|| when_failed.to_string()),
        raw_value: leading_integer(raw)?,
        raw_text: raw.to_string(),
    })
}

/// Nine whitespace-delimited columns followed by the raw value, which may
/// itself contain spaces (e.g. `34 (Min/Max 20/45)`).
fn split_fields(line: &str) -> Option<[&str; FIELD_COUNT]> {
    let mut fields = [""; FIELD_COUNT];
    let mut rest = line.trim();
    for slot in fields.iter_mut().take(FIELD_COUNT - 1) {
        let end = rest.find(char::is_whitespace)?;
        *slot = &rest[..end];
        rest = rest[end..].trim_start();
    }
    if rest.is_empty() {
        return None;
    }
    fields[FIELD_COUNT - 1] = rest;
    Some(fields)
}

fn parse_threshold(column: &str) -> Option<u32> {
    if column == "---" {
        return Some(0);
    }
    column.parse().ok()
}

/// Numeric prefix of a raw column: `0x`-prefixed hex (as printed under
/// `-v N,hex48`) or decimal digits. `None` when neither is present.
fn leading_integer(raw: &str) -> Option<u64> {
    if let Some(hex) = raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        let end = hex
            .find(|c: char| !c.is_ascii_hexdigit())
            .unwrap_or(hex.len());
        return u64::from_str_radix(&hex[..end], 16).ok();
    }
    let end = raw
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(raw.len());
    raw[..end].parse().ok()
}
