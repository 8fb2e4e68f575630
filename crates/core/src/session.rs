use tracing::info;

use crate::{
    quiz::QuizPanel,
    resource::Ticket,
    transcript::TranscriptPanel,
    types::ContentId,
    upload::Uploader,
};

/// Fetches the shell has to run after a navigation.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Fetches {
    pub transcripts: Option<Ticket<ContentId>>,
    pub questions: Option<Ticket<ContentId>>,
}

/// Page composer. The active content id is the only state shared between views;
/// without one the upload form is shown, with one the transcript and quiz panels.
#[derive(Debug, Default)]
pub struct Session {
    content_id: Option<ContentId>,
    pub uploader: Uploader,
    pub transcripts: TranscriptPanel,
    pub quiz: QuizPanel,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content_id(&self) -> Option<&ContentId> {
        self.content_id.as_ref()
    }

    pub fn is_viewing(&self) -> bool {
        self.content_id.is_some()
    }

    /// Switch to the display views for `id` and start both fetches.
    pub fn open(&mut self, id: ContentId) -> Fetches {
        info!(content_id = %id, "Showing content");
        self.content_id = Some(id.clone());
        Fetches {
            transcripts: self.transcripts.load(Some(id.clone())),
            questions: self.quiz.load(Some(id)),
        }
    }

    /// Back to the upload form. In-flight fetches for the old id are discarded when they land.
    pub fn reset(&mut self) {
        if let Some(id) = self.content_id.take() {
            info!(content_id = %id, "Returning to upload");
        }
        self.transcripts.reset();
        self.quiz.reset();
    }
}
