use std::collections::HashSet;

use crate::{
    format::{preview, segment_label},
    resource::{Phase, Query, Ticket},
    types::{ContentId, TranscriptSegment},
};

pub const LOADING_TEXT: &str = "Loading transcripts...";
pub const FAILED_TEXT: &str = "Failed to load transcripts";
pub const EMPTY_TEXT: &str = "No transcripts available";

/// One rendered row of the transcript list.
#[derive(Debug, PartialEq)]
pub struct SegmentRow<'a> {
    pub segment: &'a TranscriptSegment,
    pub label: String,
    pub open: bool,
    /// Full text when open, otherwise the preview.
    pub body: String,
}

/// Transcript panel: the fetched segments plus which of them are expanded.
#[derive(Debug)]
pub struct TranscriptPanel {
    query: Query<ContentId, Vec<TranscriptSegment>>,
    open: HashSet<String>,
}

impl Default for TranscriptPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl TranscriptPanel {
    pub fn new() -> Self {
        Self {
            query: Query::new("transcripts"),
            open: HashSet::new(),
        }
    }

    pub fn content_id(&self) -> Option<&ContentId> {
        self.query.key()
    }

    /// Show transcripts for `id`. The expanded set does not carry over to a different id.
    pub fn load(&mut self, id: Option<ContentId>) -> Option<Ticket<ContentId>> {
        if self.query.key() != id.as_ref() {
            self.open.clear();
        }
        self.query.load(id)
    }

    pub fn retry(&mut self) -> Option<Ticket<ContentId>> {
        self.query.refetch()
    }

    pub fn reset(&mut self) {
        self.query.clear();
        self.open.clear();
    }

    pub fn resolve<E: std::fmt::Display>(
        &mut self,
        ticket: Ticket<ContentId>,
        result: Result<Vec<TranscriptSegment>, E>,
    ) -> bool {
        self.query.resolve(ticket, result)
    }

    pub fn toggle(&mut self, segment_id: &str) {
        if !self.open.remove(segment_id) {
            self.open.insert(segment_id.to_string());
        }
    }

    pub fn is_open(&self, segment_id: &str) -> bool {
        self.open.contains(segment_id)
    }

    pub fn phase(&self) -> Phase<'_, Vec<TranscriptSegment>> {
        self.query.phase(Vec::is_empty)
    }

    pub fn rows(&self) -> Vec<SegmentRow<'_>> {
        let Phase::Ready(segments) = self.phase() else {
            return Vec::new();
        };

        segments
            .iter()
            .map(|segment| {
                let open = self.is_open(&segment.id);
                SegmentRow {
                    segment,
                    label: segment_label(segment),
                    open,
                    body: if open {
                        segment.text.clone()
                    } else {
                        preview(&segment.text)
                    },
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(id: &str, text: &str) -> TranscriptSegment {
        TranscriptSegment {
            id: id.to_string(),
            text: text.to_string(),
            start_time: 0.0,
            end_time: 300.0,
            time_range: "00:00 - 05:00".to_string(),
        }
    }

    fn loaded(segments: Vec<TranscriptSegment>) -> TranscriptPanel {
        let mut panel = TranscriptPanel::new();
        let ticket = panel.load(Some(ContentId::new("abc123"))).unwrap();
        assert!(panel.resolve(ticket, Ok::<_, String>(segments)));
        panel
    }

    #[test]
    fn no_id_means_no_fetch() {
        let mut panel = TranscriptPanel::new();
        assert!(panel.load(None).is_none());
        assert_eq!(panel.phase(), Phase::Idle);
    }

    #[test]
    fn empty_transcript_is_not_an_error() {
        let panel = loaded(Vec::new());
        assert_eq!(panel.phase(), Phase::Empty);
        assert!(panel.rows().is_empty());
    }

    #[test]
    fn failed_fetch_shows_failed_phase() {
        let mut panel = TranscriptPanel::new();
        let ticket = panel.load(Some(ContentId::new("abc123"))).unwrap();
        panel.resolve(ticket, Err::<Vec<TranscriptSegment>, _>("timed out"));
        assert_eq!(panel.phase(), Phase::Failed);
        assert!(panel.retry().is_some());
        assert_eq!(panel.phase(), Phase::Loading);
    }

    #[test]
    fn toggle_twice_restores_collapsed_row_without_touching_others() {
        let long = "word ".repeat(40);
        let mut panel = loaded(vec![segment("seg1", &long), segment("seg2", &long)]);
        panel.toggle("seg2");
        let before = panel.rows();
        let before_seg1 = before[0].body.clone();
        assert!(before[1].open);
        drop(before);

        panel.toggle("seg1");
        let rows = panel.rows();
        assert!(rows[0].open);
        assert_eq!(rows[0].body, long);
        drop(rows);

        panel.toggle("seg1");
        let rows = panel.rows();
        assert!(!rows[0].open);
        assert_eq!(rows[0].body, before_seg1);
        assert!(rows[1].open, "seg2 must stay open");
    }

    #[test]
    fn open_set_is_cleared_for_a_new_id() {
        let mut panel = loaded(vec![segment("seg1", "text")]);
        panel.toggle("seg1");

        assert!(panel.load(Some(ContentId::new("abc123"))).is_none());
        assert!(panel.is_open("seg1"));

        assert!(panel.load(Some(ContentId::new("def456"))).is_some());
        assert!(!panel.is_open("seg1"));
    }
}
