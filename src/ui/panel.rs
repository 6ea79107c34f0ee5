/// Bulk selection entry panel
///
/// A transient, non-modal panel that collects a row count and hands it
/// to the bulk resolver. Validation is local and inline; invalid input
/// never reaches the resolver.

use iced::widget::{button, column, container, horizontal_space, row, text, text_input};
use iced::{Element, Length};

use crate::Message;

/// Inline message shown for any invalid count input
const INVALID_COUNT_MESSAGE: &str = "Please enter a valid positive number";

/// Parse and validate the requested row count
///
/// Rejects empty, non-numeric, zero and negative input.
pub fn parse_selection_count(input: &str) -> Result<usize, String> {
    match input.trim().parse::<i64>() {
        Ok(count) if count > 0 => Ok(count as usize),
        _ => Err(String::from(INVALID_COUNT_MESSAGE)),
    }
}

/// Build the panel widget
///
/// The submit button stays disabled while the input is empty; pressing
/// Enter in the input submits as well.
pub fn selection_panel<'a>(
    input_value: &'a str,
    error: Option<&str>,
    page_size: usize,
) -> Element<'a, Message> {
    let input = text_input("Enter any number", input_value)
        .on_input(Message::BulkInputChanged)
        .on_submit(Message::BulkSubmitted)
        .width(Length::Fixed(180.0));

    let mut submit = button(text("Select").size(14));
    if !input_value.is_empty() {
        submit = submit.on_press(Message::BulkSubmitted);
    }

    let mut content = column![
        text("Select Multiple Rows").size(18),
        text("Rows will continue selecting across pages automatically").size(13),
        row![input, submit].spacing(8),
    ]
    .spacing(10);

    if let Some(message) = error {
        content = content.push(text(format!("⚠️  {}", message)).size(13));
    }

    let info_box = column![
        row![
            text("Rows per page:").size(13),
            horizontal_space(),
            text(page_size.to_string()).size(13),
        ],
        row![
            text("Selection:").size(13),
            horizontal_space(),
            text("Cross-page enabled").size(13),
        ],
    ]
    .spacing(4);

    content = content.push(info_box);

    container(content)
        .padding(16)
        .max_width(320.0)
        .style(container::rounded_box)
        .into()
}
