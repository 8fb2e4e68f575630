use crate::types::TranscriptSegment;

/// Number of characters shown for a collapsed transcript segment.
pub const PREVIEW_CHARS: usize = 100;

/// Format seconds as MM:SS timestamp
pub fn format_timestamp(seconds: f64) -> String {
    let seconds = seconds.max(0.0);
    let mins = (seconds / 60.0) as u32;
    let secs = (seconds % 60.0) as u32;
    format!("{:02}:{:02}", mins, secs)
}

/// Label for a segment row: the service's own label, or the formatted start/end times.
pub fn segment_label(segment: &TranscriptSegment) -> String {
    let label = segment.time_range.trim();
    if label.is_empty() {
        format!(
            "{} - {}",
            format_timestamp(segment.start_time),
            format_timestamp(segment.end_time)
        )
    } else {
        label.to_string()
    }
}

/// First [`PREVIEW_CHARS`] characters of `text`, with an ellipsis when cut.
pub fn preview(text: &str) -> String {
    match text.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(time_range: &str, start: f64, end: f64) -> TranscriptSegment {
        TranscriptSegment {
            id: "seg".to_string(),
            text: String::new(),
            start_time: start,
            end_time: end,
            time_range: time_range.to_string(),
        }
    }

    #[test]
    fn formats_timestamps() {
        assert_eq!(format_timestamp(0.0), "00:00");
        assert_eq!(format_timestamp(65.9), "01:05");
        assert_eq!(format_timestamp(3600.0), "60:00");
        assert_eq!(format_timestamp(-3.0), "00:00");
    }

    #[test]
    fn label_prefers_service_range() {
        assert_eq!(segment_label(&segment("0:00 - 5:00", 0.0, 300.0)), "0:00 - 5:00");
        assert_eq!(segment_label(&segment("  ", 300.0, 600.0)), "05:00 - 10:00");
    }

    #[test]
    fn preview_truncates_at_char_boundary() {
        let short = "A short segment.";
        assert_eq!(preview(short), short);

        let exact = "x".repeat(PREVIEW_CHARS);
        assert_eq!(preview(&exact), exact);

        let long = "é".repeat(PREVIEW_CHARS + 20);
        let cut = preview(&long);
        assert!(cut.ends_with("..."));
        assert_eq!(cut.trim_end_matches("...").chars().count(), PREVIEW_CHARS);
    }
}
