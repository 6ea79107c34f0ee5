/// Remote API module
///
/// This module handles all communication with the artworks endpoint:
/// - Single-shot page fetches (client.rs)
/// - The fetch error taxonomy (client.rs)

pub mod client;
