use std::fmt;

use crate::{
    resource::{Phase, Query, Ticket},
    types::{ContentId, Mcq, McqOption},
};

pub const LOADING_TEXT: &str = "Loading questions...";
pub const FAILED_TEXT: &str = "Failed to load questions";
pub const EMPTY_TEXT: &str = "No questions available";
pub const ANSWER_HINT: &str = "Correct answer highlighted above";

/// Questions whose `segment_id` equals `segment`, in their original order. `None` keeps all.
pub fn filter_by_segment<'a>(questions: &'a [Mcq], segment: Option<&str>) -> Vec<&'a Mcq> {
    questions
        .iter()
        .filter(|mcq| segment.is_none_or(|id| mcq.segment_id == id))
        .collect()
}

#[derive(Debug, PartialEq)]
pub struct QuestionGroup<'a> {
    pub segment_id: &'a str,
    pub questions: Vec<&'a Mcq>,
}

/// Group questions by owning segment. Groups appear in first-seen order and
/// questions keep their relative order inside a group. Segment ids are not
/// checked against the transcript.
pub fn group_by_segment<'a>(questions: impl IntoIterator<Item = &'a Mcq>) -> Vec<QuestionGroup<'a>> {
    let mut groups: Vec<QuestionGroup<'a>> = Vec::new();
    for mcq in questions {
        match groups.iter_mut().find(|g| g.segment_id == mcq.segment_id) {
            Some(group) => group.questions.push(mcq),
            None => groups.push(QuestionGroup {
                segment_id: &mcq.segment_id,
                questions: vec![mcq],
            }),
        }
    }
    groups
}

/// A read-only option as rendered in the answer key.
#[derive(Debug, PartialEq, Eq)]
pub struct OptionView<'a> {
    pub option: &'a McqOption,
    pub correct: bool,
}

pub fn option_views(mcq: &Mcq) -> Vec<OptionView<'_>> {
    mcq.options
        .iter()
        .map(|option| OptionView {
            option,
            correct: mcq.is_correct(&option.id),
        })
        .collect()
}

/// Which questions the panel shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SegmentFilter {
    #[default]
    All,
    Segment(String),
}

impl SegmentFilter {
    pub fn segment(&self) -> Option<&str> {
        match self {
            SegmentFilter::All => None,
            SegmentFilter::Segment(id) => Some(id),
        }
    }
}

impl From<Option<String>> for SegmentFilter {
    fn from(segment: Option<String>) -> Self {
        segment.map_or(SegmentFilter::All, SegmentFilter::Segment)
    }
}

impl fmt::Display for SegmentFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentFilter::All => f.write_str("All segments"),
            SegmentFilter::Segment(id) => write!(f, "Segment {id}"),
        }
    }
}

/// Answer-key panel: the fetched question set and the segment filter applied to it.
#[derive(Debug)]
pub struct QuizPanel {
    query: Query<ContentId, Vec<Mcq>>,
    filter: SegmentFilter,
    initial_filter: SegmentFilter,
}

impl Default for QuizPanel {
    fn default() -> Self {
        Self::new(None)
    }
}

impl QuizPanel {
    pub fn new(segment: Option<String>) -> Self {
        let filter = SegmentFilter::from(segment);
        Self {
            query: Query::new("questions"),
            initial_filter: filter.clone(),
            filter,
        }
    }

    pub fn content_id(&self) -> Option<&ContentId> {
        self.query.key()
    }

    pub fn filter(&self) -> &SegmentFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: SegmentFilter) {
        self.filter = filter;
    }

    /// A different id starts over from the constructor's filter.
    pub fn load(&mut self, id: Option<ContentId>) -> Option<Ticket<ContentId>> {
        if self.query.key() != id.as_ref() {
            self.filter = self.initial_filter.clone();
        }
        self.query.load(id)
    }

    pub fn retry(&mut self) -> Option<Ticket<ContentId>> {
        self.query.refetch()
    }

    pub fn reset(&mut self) {
        self.query.clear();
        self.filter = self.initial_filter.clone();
    }

    pub fn resolve<E: fmt::Display>(
        &mut self,
        ticket: Ticket<ContentId>,
        result: Result<Vec<Mcq>, E>,
    ) -> bool {
        self.query.resolve(ticket, result)
    }

    /// Questions remaining after the filter. Empty until loaded.
    pub fn visible(&self) -> Vec<&Mcq> {
        match self.query.phase(Vec::is_empty) {
            Phase::Ready(questions) => filter_by_segment(questions, self.filter.segment()),
            _ => Vec::new(),
        }
    }

    /// Render phase after filtering: a filter that matches nothing shows the empty state.
    pub fn phase(&self) -> Phase<'_, Vec<Mcq>> {
        let segment = self.filter.segment();
        self.query.phase(|questions| {
            filter_by_segment(questions, segment).is_empty()
        })
    }

    pub fn groups(&self) -> Vec<QuestionGroup<'_>> {
        group_by_segment(self.visible())
    }

    /// Filter choices: all segments plus every segment id present in the loaded questions.
    pub fn filter_options(&self) -> Vec<SegmentFilter> {
        let mut options = vec![SegmentFilter::All];
        if let Phase::Ready(questions) = self.query.phase(Vec::is_empty) {
            for group in group_by_segment(questions) {
                options.push(SegmentFilter::Segment(group.segment_id.to_string()));
            }
        }
        options
    }
}
