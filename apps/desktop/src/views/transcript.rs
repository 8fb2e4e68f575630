use iced::widget::{Column, button, column, container, row, text};
use iced::{Alignment, Element, Length};
use lecturelearn_core::{
    Phase, TranscriptPanel,
    transcript::{EMPTY_TEXT, FAILED_TEXT, LOADING_TEXT, SegmentRow},
};

use crate::app::Message;
use crate::views::{ACCENT, MUTED, card, failed, status};

pub fn view(panel: &TranscriptPanel) -> Element<'_, Message> {
    let body = match panel.phase() {
        Phase::Idle | Phase::Loading => status(LOADING_TEXT),
        Phase::Failed => failed(FAILED_TEXT, Message::RetryTranscripts),
        Phase::Empty => status(EMPTY_TEXT),
        Phase::Ready(_) => Column::with_children(panel.rows().into_iter().map(segment))
            .spacing(12)
            .into(),
    };

    card("Video Transcripts", body)
}

fn segment(item: SegmentRow<'_>) -> Element<'_, Message> {
    let marker = if item.open { "▾" } else { "▸" };
    let header = button(
        row![text(marker), text(item.label).color(ACCENT)]
            .spacing(10)
            .align_y(Alignment::Center),
    )
    .on_press(Message::ToggleSegment(item.segment.id.clone()))
    .width(Length::Fill)
    .style(button::secondary);

    let body = if item.open {
        text(item.body)
    } else {
        text(item.body).color(MUTED)
    };

    column![header, container(body).padding([4, 12])]
        .spacing(6)
        .into()
}
