use super::types::DurationFormat;

/// Format whole seconds for display. Zero is rendered, never treated as missing.
pub fn format_duration(seconds: u64, format: DurationFormat) -> String {
    let secs = seconds % 60;
    let total_minutes = seconds / 60;
    let minutes = total_minutes % 60;
    let hours = total_minutes / 60;

    match format {
        DurationFormat::Compact => {
            if hours > 0 {
                format!("{}h{}m{}s", hours, minutes, secs)
            } else if minutes > 0 {
                format!("{}m{}s", minutes, secs)
            } else {
                format!("{}s", secs)
            }
        }
        DurationFormat::Clock => format!("{}:{:02}:{:02}", hours, minutes, secs),
    }
}
