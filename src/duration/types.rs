use crate::discovery::ContainerKind;
use serde::Serialize;

/// Result of asking for the duration of one video
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Extraction {
    /// Duration read from the container, in whole seconds
    Measured(u64),
    /// Recognised container without a decoder yet; counts as zero seconds.
    /// Kept apart from `Measured(0)` so reports can tell the two cases apart.
    Unsupported(ContainerKind),
}

impl Extraction {
    pub fn seconds(&self) -> u64 {
        match self {
            Extraction::Measured(seconds) => *seconds,
            Extraction::Unsupported(_) => 0,
        }
    }

    pub fn is_measured(&self) -> bool {
        matches!(self, Extraction::Measured(_))
    }
}

/// What aggregation does when a single file fails to parse
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum FailurePolicy {
    /// Stop at the first failing file and return its error
    #[default]
    Abort,
    /// Log the failure, record it in the report and carry on
    Skip,
}

/// Rendering of a number of seconds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum DurationFormat {
    /// `1h2m3s`, `2m0s`, `45s`, `0s`
    #[default]
    Compact,
    /// `1:02:03`
    Clock,
}
