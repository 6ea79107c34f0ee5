/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the API layer and the UI layer. They mirror the JSON envelope
/// returned by the artworks endpoint.

use serde::Deserialize;

/// Represents a single artwork record from the API
///
/// Every field besides `id` may be null in the API response,
/// so they are all optional here. Records are immutable once
/// fetched and are discarded when a new page is loaded.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Artwork {
    /// Unique, stable identifier
    pub id: i64,
    /// Artwork title
    pub title: Option<String>,
    /// Where the artwork was made (e.g., "Japan")
    pub place_of_origin: Option<String>,
    /// Free-form artist attribution line
    pub artist_display: Option<String>,
    /// Inscriptions found on the artwork
    pub inscriptions: Option<String>,
    /// Earliest year associated with the artwork
    pub date_start: Option<i32>,
    /// Latest year associated with the artwork
    pub date_end: Option<i32>,
}

/// Pagination metadata returned alongside each page of records
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PaginationInfo {
    /// Total number of records in the dataset
    pub total: u64,
    /// Records per page the server used for this response
    pub limit: u32,
    /// Offset of the first record on this page
    pub offset: u64,
    /// Total number of pages
    pub total_pages: u32,
    /// The page this response holds (1-based)
    pub current_page: u32,
}

/// One fetched page of artworks plus its pagination metadata
///
/// Created per fetch; replaces the previous page on the next
/// navigation. Pages are never cached.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ArtworkPage {
    pub pagination: PaginationInfo,
    pub data: Vec<Artwork>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_envelope() {
        let body = r#"{
            "pagination": {
                "total": 126335,
                "limit": 12,
                "offset": 0,
                "total_pages": 10528,
                "current_page": 1
            },
            "data": [
                {
                    "id": 27992,
                    "title": "A Sunday on La Grande Jatte",
                    "place_of_origin": "Paris",
                    "artist_display": "Georges Seurat",
                    "inscriptions": null,
                    "date_start": 1884,
                    "date_end": 1886
                },
                {
                    "id": 28560,
                    "title": null,
                    "place_of_origin": null,
                    "artist_display": null,
                    "inscriptions": null,
                    "date_start": null,
                    "date_end": null
                }
            ]
        }"#;

        let page: ArtworkPage = serde_json::from_str(body).unwrap();

        assert_eq!(page.pagination.total, 126335);
        assert_eq!(page.pagination.current_page, 1);
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.data[0].id, 27992);
        assert_eq!(page.data[0].date_start, Some(1884));
        assert_eq!(page.data[1].id, 28560);
        assert!(page.data[1].title.is_none());
    }

    #[test]
    fn test_decode_preserves_data_order() {
        let body = r#"{
            "pagination": { "total": 3, "limit": 12, "offset": 0, "total_pages": 1, "current_page": 1 },
            "data": [
                { "id": 3, "title": "c", "place_of_origin": null, "artist_display": null, "inscriptions": null, "date_start": null, "date_end": null },
                { "id": 1, "title": "a", "place_of_origin": null, "artist_display": null, "inscriptions": null, "date_start": null, "date_end": null },
                { "id": 2, "title": "b", "place_of_origin": null, "artist_display": null, "inscriptions": null, "date_start": null, "date_end": null }
            ]
        }"#;

        let page: ArtworkPage = serde_json::from_str(body).unwrap();
        let ids: Vec<i64> = page.data.iter().map(|a| a.id).collect();

        assert_eq!(ids, vec![3, 1, 2]);
    }
}
