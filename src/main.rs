use iced::widget::{button, column, container, row, text, Column};
use iced::{Alignment, Element, Length, Task, Theme};
use std::collections::HashSet;

mod api;
mod state;
mod ui;

use api::client::{self, FetchError};
use state::data::{Artwork, ArtworkPage};
use state::resolver::resolve_bulk_selection;
use state::selection::SelectionState;

/// Rows per page the artworks endpoint serves
const ROWS_PER_PAGE: usize = 12;

/// Generic failure message for any kind of fetch error
const LOAD_ERROR_MESSAGE: &str = "Failed to load artworks. Please try again.";

/// Main application state
struct ArtworkBrowser {
    /// Records of the currently rendered page
    artworks: Vec<Artwork>,
    /// Total number of records in the dataset
    total_records: u64,
    /// The page currently shown or being fetched (1-based)
    current_page: u32,
    /// A page fetch is in flight
    loading: bool,
    /// Set when the last page fetch failed
    error: Option<String>,
    /// Cross-page selection store
    selection: SelectionState,
    /// Whether the bulk selection panel is open
    panel_open: bool,
    /// Raw text in the bulk selection input
    bulk_input: String,
    /// Inline validation message for the bulk selection input
    bulk_error: Option<String>,
    /// A bulk resolution is in flight
    resolving: bool,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User navigated to a page (1-based)
    PageRequested(u32),
    /// A page fetch finished
    PageLoaded(Result<ArtworkPage, FetchError>),
    /// User clicked Retry on the error view
    RetryPressed,
    /// A row checkbox was toggled
    RowToggled(i64, bool),
    /// The select-all-on-page checkbox was toggled
    PageToggled(bool),
    /// The bulk selection panel was opened or closed
    PanelToggled,
    /// The bulk selection input changed
    BulkInputChanged(String),
    /// The bulk selection input was submitted
    BulkSubmitted,
    /// Bulk resolution finished
    BulkResolved(Result<HashSet<i64>, FetchError>),
}

impl ArtworkBrowser {
    /// Create a new instance of the application and load the first page
    fn new() -> (Self, Task<Message>) {
        let browser = ArtworkBrowser {
            artworks: Vec::new(),
            total_records: 0,
            current_page: 1,
            loading: true,
            error: None,
            selection: SelectionState::new(),
            panel_open: false,
            bulk_input: String::new(),
            bulk_error: None,
            resolving: false,
            status: String::from("Ready."),
        };

        println!("🎨 Artwork browser starting, fetching page 1");

        (
            browser,
            Task::perform(client::fetch_artworks(1), Message::PageLoaded),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PageRequested(page) => {
                self.current_page = page;
                self.load_current_page()
            }
            Message::RetryPressed => self.load_current_page(),
            Message::PageLoaded(Ok(page)) => {
                println!(
                    "🖼️  Loaded page {}: {} records of {}",
                    page.pagination.current_page,
                    page.data.len(),
                    page.pagination.total
                );

                // A stale completion simply overwrites; last write wins
                self.artworks = page.data;
                self.total_records = page.pagination.total;
                self.loading = false;

                Task::none()
            }
            Message::PageLoaded(Err(e)) => {
                eprintln!("⚠️  Error loading artworks: {}", e);
                self.loading = false;
                self.error = Some(String::from(LOAD_ERROR_MESSAGE));

                Task::none()
            }
            Message::RowToggled(id, checked) => {
                let mut newly_selected = self.selection.effective_ids(&self.artworks);
                if checked {
                    newly_selected.insert(id);
                } else {
                    newly_selected.remove(&id);
                }
                self.selection
                    .apply_page_change(&self.artworks, &newly_selected);

                Task::none()
            }
            Message::PageToggled(checked) => {
                let newly_selected: HashSet<i64> = if checked {
                    self.artworks.iter().map(|artwork| artwork.id).collect()
                } else {
                    HashSet::new()
                };
                self.selection
                    .apply_page_change(&self.artworks, &newly_selected);

                Task::none()
            }
            Message::PanelToggled => {
                self.panel_open = !self.panel_open;
                self.bulk_error = None;

                Task::none()
            }
            Message::BulkInputChanged(value) => {
                self.bulk_input = value;
                self.bulk_error = None;

                Task::none()
            }
            Message::BulkSubmitted => {
                let count = match ui::panel::parse_selection_count(&self.bulk_input) {
                    Ok(count) => count,
                    Err(message) => {
                        self.bulk_error = Some(message);
                        return Task::none();
                    }
                };

                self.bulk_input.clear();
                self.bulk_error = None;
                self.panel_open = false;
                self.resolving = true;
                self.status = format!("Selecting the first {} rows...", count);

                let current_page = self.current_page;
                let current_records = self.artworks.clone();

                Task::perform(
                    async move {
                        resolve_bulk_selection(
                            count,
                            current_page,
                            &current_records,
                            ROWS_PER_PAGE,
                            client::fetch_artworks,
                        )
                        .await
                    },
                    Message::BulkResolved,
                )
            }
            Message::BulkResolved(Ok(selected_ids)) => {
                self.resolving = false;

                let count = selected_ids.len();
                self.selection.replace_all(selected_ids);
                self.status = format!("✅ Selected {} rows across pages.", count);

                println!("✅ Bulk selection complete: {} rows", count);

                Task::none()
            }
            Message::BulkResolved(Err(e)) => {
                // Prior selection stays exactly as it was
                self.resolving = false;

                eprintln!("⚠️  Error during bulk selection: {}", e);
                self.status = String::from("Bulk selection failed. Selection unchanged.");

                Task::none()
            }
        }
    }

    /// Re-issue the fetch for the current page
    fn load_current_page(&mut self) -> Task<Message> {
        self.loading = true;
        self.error = None;

        Task::perform(
            client::fetch_artworks(self.current_page),
            Message::PageLoaded,
        )
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        if let Some(error) = &self.error {
            let content: Column<Message> = column![
                text("❌").size(48),
                text(error).size(16),
                button("Retry").on_press(Message::RetryPressed).padding(10),
            ]
            .spacing(20)
            .align_x(Alignment::Center);

            return container(content)
                .width(Length::Fill)
                .height(Length::Fill)
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .into();
        }

        let mut panel_toggle = button(
            text(if self.panel_open {
                "Hide panel"
            } else {
                "Select rows..."
            })
            .size(14),
        );
        if !self.resolving {
            panel_toggle = panel_toggle.on_press(Message::PanelToggled);
        }

        let selection_header = row![
            text(format!("Selected : {}", self.selection.selected_count())).size(14),
            panel_toggle,
        ]
        .spacing(8)
        .align_y(Alignment::Center);

        let mut content: Column<Message> = column![
            text("Artworks").size(32),
            selection_header,
        ]
        .spacing(12)
        .padding(20);

        if self.panel_open {
            content = content.push(ui::panel::selection_panel(
                &self.bulk_input,
                self.bulk_error.as_deref(),
                ROWS_PER_PAGE,
            ));
        }

        if self.loading {
            content = content.push(
                container(text("Loading artworks...").size(16))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .center_x(Length::Fill)
                    .center_y(Length::Fill),
            );
        } else {
            content = content.push(ui::table::artwork_table(&self.artworks, &self.selection));
            content = content.push(ui::paginator::paginator(
                self.current_page,
                ROWS_PER_PAGE,
                self.total_records,
            ));
        }

        content = content.push(text(&self.status).size(13));

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    iced::application(
        "Artwork Browser",
        ArtworkBrowser::update,
        ArtworkBrowser::view,
    )
    .theme(ArtworkBrowser::theme)
    .centered()
    .run_with(ArtworkBrowser::new)
}
