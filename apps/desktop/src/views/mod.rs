pub mod quiz;
pub mod transcript;
pub mod upload;

use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Border, Color, Element, Length, Theme};

use crate::app::Message;

pub const ACCENT: Color = Color::from_rgb(0.38, 0.65, 0.98);
pub const CORRECT: Color = Color::from_rgb(0.29, 0.87, 0.5);
pub const ERROR: Color = Color::from_rgb(0.99, 0.65, 0.65);
pub const MUTED: Color = Color::from_rgb(0.7, 0.72, 0.76);

/// Titled panel used by every view.
pub fn card<'a>(title: &'a str, body: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(column![text(title).size(20), body.into()].spacing(16))
        .padding(20)
        .width(Length::Fill)
        .style(container::rounded_box)
        .into()
}

pub fn status(message: &str) -> Element<'_, Message> {
    text(message).color(MUTED).into()
}

pub fn failed(message: &str, retry: Message) -> Element<'_, Message> {
    row![text(message).color(ERROR), button("Retry").on_press(retry)]
        .spacing(12)
        .align_y(Alignment::Center)
        .into()
}

/// Dashed-box look of the drop zone; highlighted while a file hovers over the window.
pub fn drop_zone(active: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme| {
        let palette = theme.extended_palette();
        let color = if active {
            palette.primary.strong.color
        } else {
            palette.background.strong.color
        };

        container::Style {
            border: Border {
                color,
                width: 2.0,
                radius: 8.0.into(),
            },
            ..container::Style::default()
        }
    }
}
