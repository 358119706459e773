use crate::domain::entities::attribute::{AttributeObservation, AttributeType};
use crate::domain::value_objects::severity::Severity;

/// Which escalation an attribute is eligible for once triggered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassTier {
    /// Known failure predictors: a triggered Pre-fail attribute is an ERROR
    Error,
    /// Aging indicators: a triggered Old_age attribute is a NOTICE
    Warn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeClassSpec {
    pub id: u8,
    pub name: &'static str,
    pub tier: ClassTier,
}

const fn entry(id: u8, name: &'static str, tier: ClassTier) -> AttributeClassSpec {
    AttributeClassSpec { id, name, tier }
}

static ERROR_CLASS: [AttributeClassSpec; 8] = [
    entry(5, "Reallocated_Sector_Ct", ClassTier::Error),
    entry(10, "Spin_Retry_Count", ClassTier::Error),
    entry(184, "End-to-End_Error", ClassTier::Error),
    entry(187, "Reported_Uncorrect", ClassTier::Error),
    entry(188, "Command_Timeout", ClassTier::Error),
    entry(196, "Reallocated_Event_Count", ClassTier::Error),
    entry(197, "Current_Pending_Sector", ClassTier::Error),
    entry(198, "Offline_Uncorrectable", ClassTier::Error),
];

static WARN_CLASS: [AttributeClassSpec; 2] = [
    entry(9, "Power_On_Hours", ClassTier::Warn),
    entry(194, "Temperature_Celsius", ClassTier::Warn),
];

/// The error-class and warn-class attribute tables.
///
/// Built once at startup and shared by reference; nothing mutates them
/// after construction.
#[derive(Debug, Clone, Copy)]
pub struct ClassificationTables {
    error_class: &'static [AttributeClassSpec],
    warn_class: &'static [AttributeClassSpec],
}

impl ClassificationTables {
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            error_class: &ERROR_CLASS,
            warn_class: &WARN_CLASS,
        }
    }

    #[must_use]
    pub const fn error_class(&self) -> &'static [AttributeClassSpec] {
        self.error_class
    }

    #[must_use]
    pub const fn warn_class(&self) -> &'static [AttributeClassSpec] {
        self.warn_class
    }

    /// Both id and name must match; a renamed attribute under a known id is not a match.
    #[must_use]
    pub fn is_error_class(&self, id: u8, name: &str) -> bool {
        matches_entry(self.error_class, id, name)
    }

    #[must_use]
    pub fn is_warn_class(&self, id: u8, name: &str) -> bool {
        matches_entry(self.warn_class, id, name)
    }
}

impl Default for ClassificationTables {
    fn default() -> Self {
        Self::standard()
    }
}

fn matches_entry(table: &[AttributeClassSpec], id: u8, name: &str) -> bool {
    table.iter().any(|e| e.id == id && e.name == name)
}

/// Maps an attribute observation to the severity it should be reported at.
///
/// Returns `None` for attribute types other than Pre-fail and Old_age, which
/// are not reported at all. Callers are expected to drop observations that
/// are not [`AttributeObservation::is_live`] before classifying.
#[must_use]
pub fn classify(
    observation: &AttributeObservation,
    tables: &ClassificationTables,
) -> Option<Severity> {
    let raw = observation.raw_value;
    let threshold = u64::from(observation.threshold);

    match observation.attr_type {
        AttributeType::PreFail => {
            // Any nonzero raw count triggers a Pre-fail attribute, whatever the
            // threshold. Old_age below only triggers strictly above threshold.
            let triggered = raw > 0 || raw > threshold;
            let severity = if !triggered {
                Severity::Info
            } else if tables.is_error_class(observation.id, &observation.name) {
                Severity::Error
            } else {
                Severity::Warn
            };
            Some(severity)
        }
        AttributeType::OldAge => {
            let severity = if raw > threshold
                && tables.is_warn_class(observation.id, &observation.name)
            {
                Severity::Notice
            } else {
                Severity::Info
            };
            Some(severity)
        }
        AttributeType::Other(_) => None,
    }
}
