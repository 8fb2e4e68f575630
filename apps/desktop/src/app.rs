use std::{path::PathBuf, sync::Arc};

use iced::widget::{button, column, row, scrollable, text};
use iced::{Alignment, Element, Event, Length, Subscription, Task, event, window};
use lecturelearn_core::{
    ApiClient, ApiError, ContentId, Fetches, Mcq, SegmentFilter, Session, Ticket,
    TranscriptSegment, UploadResponse,
};
use tracing::{debug, info};

use crate::views::{self, MUTED};

type Fetched<T> = Result<T, Arc<ApiError>>;

#[derive(Debug, Clone)]
pub enum Message {
    PathChanged(String),
    SelectPath,
    FileHovered,
    FilesHoveredLeft,
    FileDropped(PathBuf),
    ClearFile,
    DismissAlert,
    Upload,
    Uploaded(Fetched<UploadResponse>),
    TranscriptsLoaded(Ticket<ContentId>, Fetched<Vec<TranscriptSegment>>),
    QuestionsLoaded(Ticket<ContentId>, Fetched<Vec<Mcq>>),
    ToggleSegment(String),
    RetryTranscripts,
    RetryQuestions,
    FilterSelected(SegmentFilter),
    Reset,
}

pub struct App {
    client: ApiClient,
    session: Session,
    path_input: String,
}

impl App {
    pub fn new(client: ApiClient) -> (Self, Task<Message>) {
        (
            Self {
                client,
                session: Session::new(),
                path_input: String::new(),
            },
            Task::none(),
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PathChanged(path) => self.path_input = path,
            Message::SelectPath => {
                let path = PathBuf::from(self.path_input.trim());
                if self.session.uploader.select(path).is_ok() {
                    self.path_input.clear();
                }
            }
            Message::FileHovered => self.session.uploader.set_drag_over(true),
            Message::FilesHoveredLeft => self.session.uploader.set_drag_over(false),
            Message::FileDropped(path) => {
                // Rejections surface through the uploader's alert.
                let _ = self.session.uploader.select(path);
            }
            Message::ClearFile => self.session.uploader.clear(),
            Message::DismissAlert => self.session.uploader.dismiss_alert(),
            Message::Upload => {
                let Some(file) = self.session.uploader.begin() else {
                    return Task::none();
                };
                let client = self.client.clone();
                return Task::perform(
                    async move { client.upload(&file).await.map_err(Arc::new) },
                    Message::Uploaded,
                );
            }
            Message::Uploaded(result) => {
                let id = match &result {
                    Ok(response) => self.session.uploader.finish(Ok(response.clone())),
                    Err(e) => self.session.uploader.finish(Err(&**e)),
                };
                if let Some(id) = id {
                    let fetches = self.session.open(id);
                    return self.fetch(fetches);
                }
            }
            Message::TranscriptsLoaded(ticket, result) => {
                self.session.transcripts.resolve(ticket, result);
            }
            Message::QuestionsLoaded(ticket, result) => {
                self.session.quiz.resolve(ticket, result);
            }
            Message::ToggleSegment(segment_id) => self.session.transcripts.toggle(&segment_id),
            Message::RetryTranscripts => {
                if let Some(ticket) = self.session.transcripts.retry() {
                    return self.fetch_transcripts(ticket);
                }
            }
            Message::RetryQuestions => {
                if let Some(ticket) = self.session.quiz.retry() {
                    return self.fetch_questions(ticket);
                }
            }
            Message::FilterSelected(filter) => {
                debug!(%filter, "Question filter changed");
                self.session.quiz.set_filter(filter);
            }
            Message::Reset => {
                self.session.reset();
                self.path_input.clear();
            }
        }
        Task::none()
    }

    fn fetch(&self, fetches: Fetches) -> Task<Message> {
        let transcripts = fetches.transcripts.map(|t| self.fetch_transcripts(t));
        let questions = fetches.questions.map(|t| self.fetch_questions(t));
        Task::batch(transcripts.into_iter().chain(questions))
    }

    fn fetch_transcripts(&self, ticket: Ticket<ContentId>) -> Task<Message> {
        let client = self.client.clone();
        let id = ticket.key().clone();
        info!(content_id = %id, "Fetching transcripts");
        Task::perform(
            async move { client.fetch_transcripts(&id).await.map_err(Arc::new) },
            move |result| Message::TranscriptsLoaded(ticket, result),
        )
    }

    fn fetch_questions(&self, ticket: Ticket<ContentId>) -> Task<Message> {
        let client = self.client.clone();
        let id = ticket.key().clone();
        info!(content_id = %id, "Fetching questions");
        Task::perform(
            async move { client.fetch_questions(&id).await.map_err(Arc::new) },
            move |result| Message::QuestionsLoaded(ticket, result),
        )
    }

    /// Window drag-and-drop only matters while the upload form is showing.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.session.is_viewing() {
            return Subscription::none();
        }

        event::listen_with(|event, _status, _window| match event {
            Event::Window(window::Event::FileHovered(_)) => Some(Message::FileHovered),
            Event::Window(window::Event::FilesHoveredLeft) => Some(Message::FilesHoveredLeft),
            Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
            _ => None,
        })
    }

    pub fn view(&self) -> Element<'_, Message> {
        let header = row![
            text("LectureLearn AI").size(24),
            text("|").color(MUTED),
            text("AI-Powered Video Learning Platform").color(MUTED),
        ]
        .spacing(12)
        .align_y(Alignment::Center);

        let page = if self.session.is_viewing() {
            self.content()
        } else {
            views::upload::view(&self.session.uploader, &self.path_input)
        };

        column![header, scrollable(page).height(Length::Fill)]
            .padding(24)
            .spacing(24)
            .into()
    }

    fn content(&self) -> Element<'_, Message> {
        let heading = column![
            text("Your Learning Content").size(28),
            text("Review the transcripts and test your understanding with auto-generated questions")
                .color(MUTED),
            button("← Upload another video")
                .on_press(Message::Reset)
                .style(button::text),
        ]
        .spacing(8)
        .align_x(Alignment::Center);

        let panels = row![
            views::transcript::view(&self.session.transcripts),
            views::quiz::view(&self.session.quiz),
        ]
        .spacing(24);

        column![heading, panels]
            .spacing(24)
            .width(Length::Fill)
            .align_x(Alignment::Center)
            .into()
    }
}
