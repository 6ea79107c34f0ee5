/// UI widget module
///
/// This module builds the visual surface of the application:
/// - The artwork table with per-row selection (table.rs)
/// - Pagination controls and the page report (paginator.rs)
/// - The bulk selection entry panel (panel.rs)

pub mod paginator;
pub mod panel;
pub mod table;
