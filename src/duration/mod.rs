mod format;
mod probe;
mod report;
mod types;

pub use format::format_duration;
pub use probe::{extract_duration, probe_video};
pub use report::{aggregate, DurationReport, FileFailure, KindTotal};
pub use types::*;
