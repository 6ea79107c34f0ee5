/// Artwork table with per-row selection
///
/// Renders the currently loaded page as rows with a fixed column set.
/// Null, absent or empty field values display a literal placeholder.
/// Checkbox toggles are routed back to the selection store through
/// application messages.

use iced::widget::{checkbox, column, container, horizontal_rule, row, scrollable, text, Column};
use iced::{Alignment, Element, Length};

use crate::state::data::Artwork;
use crate::state::selection::SelectionState;
use crate::Message;

/// Placeholder for null/absent/empty cell values
const PLACEHOLDER: &str = "N/A";

/// Width of the checkbox column
const CHECKBOX_WIDTH: f32 = 36.0;

/// Format an optional text field for display
///
/// Empty strings count as absent, but a present numeric zero elsewhere
/// must not (see `display_year`).
fn display_text(value: Option<&str>) -> String {
    match value {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Format an optional year field for display
fn display_year(value: Option<i32>) -> String {
    match value {
        Some(year) => year.to_string(),
        None => PLACEHOLDER.to_string(),
    }
}

/// Relative column widths: Title, Place of Origin, Artist,
/// Inscriptions, Start Date, End Date
const COLUMN_PORTIONS: [u16; 6] = [4, 3, 4, 3, 2, 2];

/// Build the full table for the current page
pub fn artwork_table<'a>(
    artworks: &'a [Artwork],
    selection: &SelectionState,
) -> Element<'a, Message> {
    if artworks.is_empty() {
        return container(text("No artworks found").size(16))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into();
    }

    let mut rows: Column<Message> = column![header_row(artworks, selection), horizontal_rule(1)];

    for artwork in artworks {
        rows = rows.push(artwork_row(artwork, selection.is_selected(artwork.id)));
        rows = rows.push(horizontal_rule(1));
    }

    scrollable(rows.spacing(4).width(Length::Fill))
        .height(Length::Fill)
        .into()
}

/// Header row: select-all-on-page checkbox plus column titles
fn header_row<'a>(artworks: &[Artwork], selection: &SelectionState) -> Element<'a, Message> {
    let all_selected = artworks
        .iter()
        .all(|artwork| selection.is_selected(artwork.id));

    let select_all = checkbox("", all_selected)
        .on_toggle(Message::PageToggled)
        .width(Length::Fixed(CHECKBOX_WIDTH));

    let titles = [
        "Title",
        "Place of Origin",
        "Artist",
        "Inscriptions",
        "Start Date",
        "End Date",
    ];

    let mut cells = row![select_all].spacing(8).align_y(Alignment::Center);
    for (title, portion) in titles.iter().zip(COLUMN_PORTIONS) {
        cells = cells.push(
            text(*title)
                .size(14)
                .width(Length::FillPortion(portion)),
        );
    }

    cells.into()
}

/// One artwork as a table row
fn artwork_row(artwork: &Artwork, selected: bool) -> Element<'_, Message> {
    let id = artwork.id;
    let toggle = checkbox("", selected)
        .on_toggle(move |checked| Message::RowToggled(id, checked))
        .width(Length::Fixed(CHECKBOX_WIDTH));

    let cells = [
        display_text(artwork.title.as_deref()),
        display_text(artwork.place_of_origin.as_deref()),
        display_text(artwork.artist_display.as_deref()),
        display_text(artwork.inscriptions.as_deref()),
        display_year(artwork.date_start),
        display_year(artwork.date_end),
    ];

    let mut content = row![toggle].spacing(8).align_y(Alignment::Center);
    for (cell, portion) in cells.into_iter().zip(COLUMN_PORTIONS) {
        content = content.push(text(cell).size(14).width(Length::FillPortion(portion)));
    }

    content.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_field_renders_placeholder() {
        assert_eq!(display_text(None), "N/A");
        assert_eq!(display_year(None), "N/A");
    }

    #[test]
    fn test_empty_string_renders_placeholder() {
        assert_eq!(display_text(Some("")), "N/A");
    }

    #[test]
    fn test_zero_year_renders_zero() {
        // 0 is a real value, not an absent one
        assert_eq!(display_year(Some(0)), "0");
    }

    #[test]
    fn test_present_values_render_verbatim() {
        assert_eq!(display_text(Some("Okimono")), "Okimono");
        assert_eq!(display_year(Some(1886)), "1886");
        assert_eq!(display_year(Some(-500)), "-500");
    }
}
