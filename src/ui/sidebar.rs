use iced::widget::{column, container, pick_list, text};
use iced::{Element, Length};

use crate::state::data::Page;
use crate::Message;

/// Width of the navigation sidebar in logical pixels
const SIDEBAR_WIDTH: f32 = 260.0;

/// Navigation sidebar: app title and the page picker
pub fn sidebar<'a>(title: &'a str, page: Page) -> Element<'a, Message> {
    let content = column![
        text(title).size(24),
        text("Navigation Pages").size(18),
        text("Select Page").size(14),
        pick_list(Page::ALL, Some(page), Message::PageSelected).width(Length::Fill),
    ]
    .spacing(12)
    .padding(20);

    container(content)
        .width(Length::Fixed(SIDEBAR_WIDTH))
        .height(Length::Fill)
        .style(container::rounded_box)
        .into()
}
