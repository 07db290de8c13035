use super::format::format_duration;
use super::probe::probe_video;
use super::types::{DurationFormat, Extraction, FailurePolicy};
use crate::discovery::{ContainerKind, Video};
use crate::errors::{MediaDurationError, MediaDurationResult, ParseError};
use crate::mp4::extractor::MovieHeaderExtractor;
use log::{debug, info, warn};
use serde::Serialize;
use std::path::PathBuf;

/// Totals for one container kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct KindTotal {
    /// Files that produced a result, measured or not
    pub files: usize,
    /// Files counted as zero because no decoder exists for them
    pub unsupported: usize,
    pub seconds: u64,
}

impl KindTotal {
    fn add(&mut self, extraction: &Extraction) {
        self.files += 1;
        if !extraction.is_measured() {
            self.unsupported += 1;
        }
        self.seconds = self.seconds.saturating_add(extraction.seconds());
    }

    fn merge(&mut self, other: &KindTotal) {
        self.files += other.files;
        self.unsupported += other.unsupported;
        self.seconds = self.seconds.saturating_add(other.seconds);
    }
}

/// A file skipped under `FailurePolicy::Skip`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileFailure {
    pub path: PathBuf,
    pub kind: ContainerKind,
    pub error: String,
}

/// Summed durations per container kind.
///
/// Recording is order independent: any permutation or grouping of the same
/// results (via `merge`) produces an equal report, apart from the order of
/// `failures`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DurationReport {
    pub mp4: KindTotal,
    pub mkv: KindTotal,
    pub other: KindTotal,
    pub failures: Vec<FileFailure>,
}

impl DurationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, kind: &ContainerKind, extraction: &Extraction) {
        self.total_for_mut(kind).add(extraction);
    }

    pub fn record_failure(&mut self, video: &Video, err: &ParseError) {
        self.failures.push(FileFailure {
            path: video.path.clone(),
            kind: video.kind.clone(),
            error: err.to_string(),
        });
    }

    pub fn merge(&mut self, other: DurationReport) {
        self.mp4.merge(&other.mp4);
        self.mkv.merge(&other.mkv);
        self.other.merge(&other.other);
        self.failures.extend(other.failures);
    }

    pub fn total_for(&self, kind: &ContainerKind) -> &KindTotal {
        match kind {
            ContainerKind::MP4 => &self.mp4,
            ContainerKind::MKV => &self.mkv,
            ContainerKind::Other(_) => &self.other,
        }
    }

    fn total_for_mut(&mut self, kind: &ContainerKind) -> &mut KindTotal {
        match kind {
            ContainerKind::MP4 => &mut self.mp4,
            ContainerKind::MKV => &mut self.mkv,
            ContainerKind::Other(_) => &mut self.other,
        }
    }

    pub fn total_seconds(&self) -> u64 {
        self.mp4
            .seconds
            .saturating_add(self.mkv.seconds)
            .saturating_add(self.other.seconds)
    }

    pub fn total_files(&self) -> usize {
        self.mp4.files + self.mkv.files + self.other.files
    }

    /// Human readable totals, one per line.
    pub fn render(&self, format: DurationFormat) -> String {
        let mut lines = vec![
            format!(
                "MP4 files total time: {}",
                format_duration(self.mp4.seconds, format)
            ),
            format!(
                "MKV files total time: {}",
                format_duration(self.mkv.seconds, format)
            ),
        ];
        if self.other.files > 0 {
            lines.push(format!(
                "Other files total time: {}",
                format_duration(self.other.seconds, format)
            ));
        }
        lines.push(format!(
            "Total time: {}",
            format_duration(self.total_seconds(), format)
        ));

        let unsupported = self.mp4.unsupported + self.mkv.unsupported + self.other.unsupported;
        if unsupported > 0 {
            lines.push(format!(
                "{} file(s) counted as 0s, duration not supported for their format",
                unsupported
            ));
        }
        if !self.failures.is_empty() {
            lines.push(format!("{} file(s) skipped:", self.failures.len()));
            for failure in &self.failures {
                lines.push(format!("  {}: {}", failure.path.display(), failure.error));
            }
        }
        lines.join("\n")
    }

    /// JSON document with per-kind totals, the overall total and failures.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let value = serde_json::json!({
            "mp4": self.mp4,
            "mkv": self.mkv,
            "other": self.other,
            "total_seconds": self.total_seconds(),
            "total_files": self.total_files(),
            "failures": self.failures,
        });
        serde_json::to_string_pretty(&value)
    }
}

/// Probe every video and sum the results.
///
/// Under `FailurePolicy::Abort` the first failure is returned with the path
/// of the offending file; under `Skip` it is logged and recorded.
pub fn aggregate(
    videos: &[Video],
    extractor: &MovieHeaderExtractor,
    policy: FailurePolicy,
) -> MediaDurationResult<DurationReport> {
    let mut report = DurationReport::new();

    for video in videos {
        match probe_video(video, extractor) {
            Ok(extraction) => {
                debug!("{}: {:?}", video.path.display(), extraction);
                report.record(&video.kind, &extraction);
            }
            Err(err) => match policy {
                FailurePolicy::Abort => {
                    return Err(MediaDurationError::File {
                        path: video.path.clone(),
                        source: err,
                    })
                }
                FailurePolicy::Skip => {
                    warn!("Skipping {}: {}", video.path.display(), err);
                    report.record_failure(video, &err);
                }
            },
        }
    }

    info!(
        "Aggregated {} files ({} skipped): {}s total",
        report.total_files(),
        report.failures.len(),
        report.total_seconds()
    );
    Ok(report)
}
