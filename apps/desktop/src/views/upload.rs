use iced::widget::{button, column, container, row, text, text_input};
use iced::{Alignment, Element, Length};
use lecturelearn_core::{UploadState, Uploader};

use crate::app::Message;
use crate::views::{ACCENT, CORRECT, ERROR, MUTED, card, drop_zone};

const FEATURES: [(&str, &str); 3] = [
    (
        "Video Upload",
        "Upload MP4 lecture videos up to 60 minutes long with automatic processing",
    ),
    (
        "Smart Transcription",
        "Get accurate transcripts segmented into 5-minute intervals for easy navigation",
    ),
    (
        "Auto-Generated MCQs",
        "AI-powered multiple choice questions for each segment to test comprehension",
    ),
];

pub fn view<'a>(uploader: &'a Uploader, path_input: &'a str) -> Element<'a, Message> {
    let hero = column![
        text("Transform Your Lectures into Interactive Learning").size(32),
        text(
            "Upload your lecture videos and get instant transcriptions with automatically \
             generated multiple-choice questions for each segment."
        )
        .color(MUTED),
    ]
    .spacing(12)
    .align_x(Alignment::Center);

    let features = row(
        FEATURES
            .iter()
            .map(|&(title, blurb)| card(title, text(blurb).size(14).color(MUTED))),
    )
    .spacing(20);

    column![hero, form(uploader, path_input), features]
        .spacing(32)
        .align_x(Alignment::Center)
        .into()
}

fn form<'a>(uploader: &'a Uploader, path_input: &'a str) -> Element<'a, Message> {
    let intro = text(
        "Upload your MP4 lecture video to get started with transcription and MCQ generation",
    )
    .color(MUTED);

    let zone = container(drop_zone_content(uploader, path_input))
        .padding(32)
        .center_x(Length::Fill)
        .style(drop_zone(uploader.drag_over()));

    let mut body = column![intro, zone].spacing(16);

    if let Some(alert) = uploader.alert() {
        body = body.push(
            row![
                text(alert).color(ERROR),
                button("Dismiss")
                    .on_press(Message::DismissAlert)
                    .style(button::text),
            ]
            .spacing(12)
            .align_y(Alignment::Center),
        );
    }

    if let Some(banner) = banner(uploader.state()) {
        body = body.push(banner);
    }

    container(card("Upload Lecture Video", body))
        .max_width(720.0)
        .into()
}

fn drop_zone_content<'a>(uploader: &'a Uploader, path_input: &'a str) -> Element<'a, Message> {
    if uploader.drag_over() {
        return text("Drop the video to select it").color(ACCENT).into();
    }

    let Some(file) = uploader.selected() else {
        let picker = row![
            text_input("/path/to/lecture.mp4", path_input)
                .on_input(Message::PathChanged)
                .on_submit(Message::SelectPath),
            button("Select").on_press(Message::SelectPath),
        ]
        .spacing(10);

        return column![
            text("Drag and drop your MP4 video here, or enter its path").color(MUTED),
            picker,
        ]
        .spacing(16)
        .align_x(Alignment::Center)
        .into();
    };

    let uploading = uploader.is_uploading();
    let upload_label = if uploading { "Uploading..." } else { "Upload Video" };
    let actions = row![
        button(upload_label).on_press_maybe(uploader.can_upload().then_some(Message::Upload)),
        button("Clear")
            .on_press_maybe((!uploading).then_some(Message::ClearFile))
            .style(button::secondary),
    ]
    .spacing(12);

    column![
        text(format!("File selected: {}", file.name())).color(CORRECT),
        actions,
    ]
    .spacing(16)
    .align_x(Alignment::Center)
    .into()
}

fn banner(state: &UploadState) -> Option<Element<'_, Message>> {
    let banner = match state {
        UploadState::Uploading(_) => {
            text("Processing video... This may take a few minutes.").color(ACCENT)
        }
        UploadState::Failed(_) => text("Upload failed. Please try again.").color(ERROR),
        UploadState::Succeeded { message, .. } => {
            text(format!("Upload successful! {message}")).color(CORRECT)
        }
        UploadState::Idle | UploadState::FileSelected(_) => return None,
    };
    Some(banner.into())
}
