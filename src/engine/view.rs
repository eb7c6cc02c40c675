//! Derived stock views: filtering, dependent category options, sorting and summary counts.
//!
//! The stock page keeps a [`StockQuery`] in its state and recomputes the table from the session
//! collection with [`compute_stock_view`] whenever the query or the collection changes.

use std::{cmp::Ordering, collections::HashSet, fmt, str::FromStr};

use dioxus_logger::tracing;
use thiserror::Error;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

use crate::{
    engine::{
        search::{matches_any, normalize_query},
        status::{classify, StatusKind},
    },
    model::stock::StockItem,
};

/// Region, category and low-stock filters of the stock table.
///
/// Fields are only reachable through setters so that changing the region always clears the
/// category, which may not exist in the new region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StockFilters {
    region: String,
    category: String,
    low_stock_only: bool,
}

impl StockFilters {
    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn low_stock_only(&self) -> bool {
        self.low_stock_only
    }

    /// Selects a region; any change of region resets the category filter.
    pub fn set_region(&mut self, region: impl Into<String>) {
        let region = region.into();
        if region != self.region {
            tracing::info!("UPBJJ filter changed: {:?} -> {:?}", self.region, region);
            self.region = region;
            self.category.clear();
        }
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    pub fn set_low_stock_only(&mut self, low_stock_only: bool) {
        self.low_stock_only = low_stock_only;
    }

    /// Returns whether the item satisfies every active filter.
    pub fn matches(&self, item: &StockItem) -> bool {
        (self.region.is_empty() || item.region == self.region)
            && (self.category.is_empty() || item.category == self.category)
            && (!self.low_stock_only
                || item.quantity < item.safety_threshold
                || item.quantity == 0)
    }
}

/// Column a stock view can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Code,
    Title,
    Category,
    Region,
    Price,
    Quantity,
    Safety,
}

impl SortField {
    /// Token used in sort specifications, matching the dataset key of the column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Code => "kode",
            Self::Title => "judul",
            Self::Category => "kategori",
            Self::Region => "upbjj",
            Self::Price => "harga",
            Self::Quantity => "qty",
            Self::Safety => "safety",
        }
    }

    fn compare(&self, a: &StockItem, b: &StockItem) -> Ordering {
        match self {
            Self::Code => locale_cmp(&a.code, &b.code),
            Self::Title => locale_cmp(&a.title, &b.title),
            Self::Category => locale_cmp(&a.category, &b.category),
            Self::Region => locale_cmp(&a.region, &b.region),
            Self::Price => a.unit_price.cmp(&b.unit_price),
            Self::Quantity => a.quantity.cmp(&b.quantity),
            Self::Safety => a.safety_threshold.cmp(&b.safety_threshold),
        }
    }
}

impl FromStr for SortField {
    type Err = ParseSortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "kode" => Ok(Self::Code),
            "judul" => Ok(Self::Title),
            "kategori" => Ok(Self::Category),
            "upbjj" => Ok(Self::Region),
            "harga" => Ok(Self::Price),
            "qty" => Ok(Self::Quantity),
            "safety" => Ok(Self::Safety),
            other => Err(ParseSortError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Error returned for a sort token that does not name a known field and direction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown sort token: {0:?}")]
pub struct ParseSortError(String);

/// A sort field and direction, written as a single `<field>-<asc|desc>` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn ascending(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Descending,
        }
    }

    /// Next sort state after a column header is clicked.
    ///
    /// Ascending on the same field flips to descending; anything else sorts the field ascending.
    pub fn toggle(current: Option<SortSpec>, field: SortField) -> SortSpec {
        match current {
            Some(spec) if spec == Self::ascending(field) => Self::descending(field),
            _ => Self::ascending(field),
        }
    }

    /// Header indicator for `field` given the current sort state.
    pub fn indicator(current: Option<SortSpec>, field: SortField) -> &'static str {
        match current {
            Some(spec) if spec.field == field => match spec.direction {
                SortDirection::Ascending => "▲",
                SortDirection::Descending => "▼",
            },
            _ => "⇅",
        }
    }

    fn compare(&self, a: &StockItem, b: &StockItem) -> Ordering {
        let ordering = self.field.compare(a, b);
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

impl FromStr for SortSpec {
    type Err = ParseSortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, direction) = s
            .rsplit_once('-')
            .ok_or_else(|| ParseSortError(s.to_string()))?;
        let field = field.parse::<SortField>()?;
        match direction {
            "asc" => Ok(Self::ascending(field)),
            "desc" => Ok(Self::descending(field)),
            _ => Err(ParseSortError(s.to_string())),
        }
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let direction = match self.direction {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        };
        write!(f, "{}-{}", self.field.as_str(), direction)
    }
}

/// Everything the stock table's controls select.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StockQuery {
    pub filters: StockFilters,
    pub sort: Option<SortSpec>,
    /// Free-text search over code and title.
    pub search: String,
}

impl StockQuery {
    /// Clears every filter, the sort and the search.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Compares two strings the way a collating sort would for Indonesian titles.
///
/// Letters compare ignoring accents and case first, so `Ékonomi` sorts with the other `E` titles.
/// Ties are broken by accent, unaccented first, and then by case, lower case first.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| b.cmp(a))
}

/// Lower-cased text with combining marks removed after canonical decomposition.
fn collation_key(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Computes the rows of the stock table.
///
/// Items are filtered conjunctively, then sorted with a stable sort when the query has a sort
/// specification. Without one the rows keep their order in `items`.
///
/// # Arguments
/// - `items` - The session's stock collection
/// - `query` - Filters, sort and search selected on the page
///
/// # Returns
/// References to the matching items in display order. `items` is left untouched.
pub fn compute_stock_view<'a>(items: &'a [StockItem], query: &StockQuery) -> Vec<&'a StockItem> {
    let needle = normalize_query(&query.search);

    let mut view: Vec<&StockItem> = items
        .iter()
        .filter(|item| query.filters.matches(item))
        .filter(|item| match &needle {
            Some(needle) => matches_any(&[item.code.as_str(), item.title.as_str()], needle),
            None => true,
        })
        .collect();

    if let Some(sort) = &query.sort {
        view.sort_by(|a, b| sort.compare(a, b));
    }

    view
}

/// Categories selectable in the category filter for the chosen region.
///
/// With no region selected this is the full reference list. Otherwise it is the distinct
/// categories of the items stocked in that region, in the order they first appear.
pub fn available_categories(items: &[StockItem], categories: &[String], region: &str) -> Vec<String> {
    if region.is_empty() {
        return categories.to_vec();
    }

    let mut seen = HashSet::new();
    items
        .iter()
        .filter(|item| item.region == region)
        .filter(|item| seen.insert(item.category.as_str()))
        .map(|item| item.category.clone())
        .collect()
}

/// Item counts shown in the stock page's summary cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StockSummary {
    pub total: usize,
    pub safe: usize,
    pub low: usize,
    pub empty: usize,
}

impl StockSummary {
    /// Counts items per status using [`classify`], so the cards always agree with the badges.
    pub fn from_items(items: &[StockItem]) -> Self {
        items.iter().fold(
            Self {
                total: items.len(),
                ..Default::default()
            },
            |mut summary, item| {
                match classify(item.quantity, item.safety_threshold).kind {
                    StatusKind::Safe => summary.safe += 1,
                    StatusKind::Low => summary.low += 1,
                    StatusKind::Empty => summary.empty += 1,
                }
                summary
            },
        )
    }
}
