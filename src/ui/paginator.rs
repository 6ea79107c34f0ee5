/// Pagination controls
///
/// A "Showing X to Y of Z entries" report, a Prev link, a window of
/// page-number links centered on the current page, and a Next link.
/// Page numbers are 1-based everywhere.

use iced::widget::{button, horizontal_space, row, text, Row};
use iced::{Alignment, Element};

use crate::Message;

/// Maximum number of page-number links shown at once
const PAGE_LINK_WINDOW: u32 = 5;

/// Total pages needed for `total` records at `page_size` rows per page
pub fn total_pages(total: u64, page_size: usize) -> u32 {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size as u64) as u32
}

/// The "Showing X to Y of Z entries" report for the current page
pub fn page_report(current_page: u32, page_size: usize, total: u64) -> String {
    if total == 0 {
        return String::from("Showing 0 to 0 of 0 entries");
    }

    let first = (u64::from(current_page) - 1) * page_size as u64 + 1;
    let last = (u64::from(current_page) * page_size as u64).min(total);

    format!("Showing {} to {} of {} entries", first, last, total)
}

/// The window of page numbers to link, centered on the current page
/// and clamped to [1, total_pages]
pub fn page_window(current_page: u32, total_pages: u32, width: u32) -> Vec<u32> {
    if total_pages == 0 || width == 0 {
        return Vec::new();
    }

    let width = width.min(total_pages);
    let start = current_page
        .saturating_sub(width / 2)
        .max(1)
        .min(total_pages - width + 1);

    (start..start + width).collect()
}

/// Build the pagination control row
pub fn paginator<'a>(current_page: u32, page_size: usize, total: u64) -> Element<'a, Message> {
    let pages = total_pages(total, page_size);

    let mut controls: Row<Message> = row![
        text(page_report(current_page, page_size, total)).size(14),
        horizontal_space(),
    ]
    .spacing(6)
    .align_y(Alignment::Center);

    let mut prev = button(text("Prev").size(14)).style(button::text);
    if current_page > 1 {
        prev = prev.on_press(Message::PageRequested(current_page - 1));
    }
    controls = controls.push(prev);

    for page in page_window(current_page, pages, PAGE_LINK_WINDOW) {
        let label = text(page.to_string()).size(14);
        let link = if page == current_page {
            // The current page is highlighted and not clickable
            button(label).style(button::primary)
        } else {
            button(label)
                .style(button::text)
                .on_press(Message::PageRequested(page))
        };
        controls = controls.push(link);
    }

    let mut next = button(text("Next").size(14)).style(button::text);
    if current_page < pages {
        next = next.on_press(Message::PageRequested(current_page + 1));
    }
    controls = controls.push(next);

    controls.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_first_page() {
        assert_eq!(page_report(1, 12, 100), "Showing 1 to 12 of 100 entries");
    }

    #[test]
    fn test_report_partial_last_page() {
        assert_eq!(page_report(9, 12, 100), "Showing 97 to 100 of 100 entries");
    }

    #[test]
    fn test_report_empty_dataset() {
        assert_eq!(page_report(1, 12, 0), "Showing 0 to 0 of 0 entries");
    }

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(100, 12), 9);
        assert_eq!(total_pages(96, 12), 8);
        assert_eq!(total_pages(0, 12), 0);
        assert_eq!(total_pages(1, 12), 1);
    }

    #[test]
    fn test_window_clamps_at_start() {
        assert_eq!(page_window(1, 10, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(2, 10, 5), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_window_clamps_at_end() {
        assert_eq!(page_window(10, 10, 5), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_window(9, 10, 5), vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_window_centers_on_current() {
        assert_eq!(page_window(5, 10, 5), vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_window_never_exceeds_total_pages() {
        assert_eq!(page_window(1, 3, 5), vec![1, 2, 3]);
        assert_eq!(page_window(1, 0, 5), Vec::<u32>::new());
    }

    #[test]
    fn test_window_always_contains_current_page() {
        for total in 1..=12u32 {
            for current in 1..=total {
                let window = page_window(current, total, 5);
                assert!(window.contains(&current), "page {} missing from window over {} pages", current, total);
                assert!(window.len() <= 5);
                assert!(window.iter().all(|&p| p >= 1 && p <= total));
            }
        }
    }
}
