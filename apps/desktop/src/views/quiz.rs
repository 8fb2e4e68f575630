use iced::widget::{Column, column, container, pick_list, row, text};
use iced::{Alignment, Element, Length};
use lecturelearn_core::{
    Mcq, Phase, QuizPanel,
    quiz::{ANSWER_HINT, EMPTY_TEXT, FAILED_TEXT, LOADING_TEXT, QuestionGroup, option_views},
};

use crate::app::Message;
use crate::views::{ACCENT, CORRECT, MUTED, card, failed, status};

pub fn view(panel: &QuizPanel) -> Element<'_, Message> {
    let body = match panel.phase() {
        Phase::Idle | Phase::Loading => status(LOADING_TEXT),
        Phase::Failed => failed(FAILED_TEXT, Message::RetryQuestions),
        Phase::Empty => status(EMPTY_TEXT),
        Phase::Ready(_) => Column::with_children(panel.groups().into_iter().map(group))
            .spacing(24)
            .into(),
    };

    let filter = row![
        text("Show").color(MUTED),
        pick_list(
            panel.filter_options(),
            Some(panel.filter().clone()),
            Message::FilterSelected,
        ),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    card("Multiple Choice Questions", column![filter, body].spacing(16))
}

fn group(group: QuestionGroup<'_>) -> Element<'_, Message> {
    let heading: Element<'_, Message> =
        text(format!("Segment {} questions", group.segment_id))
            .color(ACCENT)
            .into();
    let questions = group
        .questions
        .into_iter()
        .enumerate()
        .map(|(index, mcq)| question(index + 1, mcq));

    Column::with_children(std::iter::once(heading).chain(questions))
        .spacing(12)
        .into()
}

/// Answer-key rendering: every option is listed, none can be picked, the stored answer is marked.
fn question<'a>(number: usize, mcq: &'a Mcq) -> Element<'a, Message> {
    let options = option_views(mcq).into_iter().map(|view| -> Element<'a, Message> {
        if view.correct {
            text(format!("(•) {}  ✓", view.option.text))
                .color(CORRECT)
                .into()
        } else {
            text(format!("( ) {}", view.option.text)).into()
        }
    });

    let hint = text(format!("✓ {ANSWER_HINT}")).size(13).color(CORRECT);

    container(
        column![
            text(format!("{number}. {}", mcq.question)).size(16),
            Column::with_children(options).spacing(6),
            hint,
        ]
        .spacing(10),
    )
    .padding(14)
    .width(Length::Fill)
    .style(container::bordered_box)
    .into()
}
