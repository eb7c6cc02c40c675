//! Case-insensitive substring search and the tracking page's search state.

use dioxus_logger::tracing;

use crate::model::tracking::TrackingRecord;

/// Normalizes a user query for matching.
///
/// # Returns
/// - `Some(String)` - The trimmed, lower-cased query
/// - `None` - The query is empty or only whitespace, so no search applies
pub fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Returns whether any field contains `needle`, ignoring case.
///
/// `needle` must already be normalized with [`normalize_query`].
pub fn matches_any(fields: &[&str], needle: &str) -> bool {
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Search box state of the tracking page.
///
/// A search only filters the list after it has been performed with a non-blank query. Editing
/// the query down to blank switches the search off again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackingSearch {
    query: String,
    active: bool,
}

impl TrackingSearch {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Updates the query text as the user types.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        if self.query.trim().is_empty() {
            self.active = false;
        }
    }

    /// Activates the search if the query is not blank.
    pub fn perform(&mut self) {
        if !self.query.trim().is_empty() {
            tracing::info!("Searching tracking records for {:?}", self.query.trim());
            self.active = true;
        }
    }

    /// Clears the query and shows the full list again.
    pub fn reset(&mut self) {
        self.query.clear();
        self.active = false;
    }
}

/// Filters tracking records by DO number or student id.
///
/// Returns every record, in input order, while the search is inactive or blank.
pub fn search_tracking<'a>(
    records: &'a [TrackingRecord],
    search: &TrackingSearch,
) -> Vec<&'a TrackingRecord> {
    let needle = match normalize_query(&search.query).filter(|_| search.active) {
        Some(needle) => needle,
        None => return records.iter().collect(),
    };

    records
        .iter()
        .filter(|record| {
            matches_any(
                &[record.do_number.as_str(), record.student_id.as_str()],
                &needle,
            )
        })
        .collect()
}
