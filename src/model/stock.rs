use serde::{Deserialize, Serialize};

/// One instructional-material title held at a regional unit (UPBJJ).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockItem {
    #[serde(rename = "kode")]
    pub code: String,
    #[serde(rename = "judul")]
    pub title: String,
    #[serde(rename = "kategori")]
    pub category: String,
    #[serde(rename = "upbjj")]
    pub region: String,
    #[serde(rename = "lokasiRak")]
    pub shelf_location: String,
    #[serde(rename = "harga")]
    pub unit_price: u64,
    #[serde(rename = "qty")]
    pub quantity: u32,
    #[serde(rename = "safety")]
    pub safety_threshold: u32,
    /// Free-form HTML note shown in the status badge tooltip.
    #[serde(rename = "catatanHTML", default)]
    pub note_html: String,
}

/// Raw values collected by the add/edit stock form.
///
/// Numeric fields hold the text as typed so that blank, malformed and negative input all survive
/// until validation reports them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StockForm {
    pub code: String,
    pub title: String,
    pub category: String,
    pub region: String,
    pub shelf_location: String,
    pub unit_price: String,
    pub quantity: String,
    pub safety_threshold: String,
    pub note_html: String,
}

/// Reads a whole-number form input, ignoring surrounding whitespace.
pub fn parse_whole_number(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

impl StockForm {
    /// Converts a validated form into a stock record.
    ///
    /// Text fields are trimmed. Numeric fields are parsed and clamped into the record's unsigned
    /// ranges, with unreadable input stored as zero, so this should only be called once
    /// validation has passed.
    pub fn into_item(self) -> StockItem {
        let whole = |raw: &str| parse_whole_number(raw).unwrap_or(0).max(0);

        StockItem {
            code: self.code.trim().to_string(),
            title: self.title.trim().to_string(),
            category: self.category.trim().to_string(),
            region: self.region.trim().to_string(),
            shelf_location: self.shelf_location.trim().to_string(),
            unit_price: whole(&self.unit_price) as u64,
            quantity: whole(&self.quantity).min(u32::MAX as i64) as u32,
            safety_threshold: whole(&self.safety_threshold).min(u32::MAX as i64) as u32,
            note_html: self.note_html,
        }
    }
}

impl From<&StockItem> for StockForm {
    fn from(item: &StockItem) -> Self {
        Self {
            code: item.code.clone(),
            title: item.title.clone(),
            category: item.category.clone(),
            region: item.region.clone(),
            shelf_location: item.shelf_location.clone(),
            unit_price: item.unit_price.to_string(),
            quantity: item.quantity.to_string(),
            safety_threshold: item.safety_threshold.to_string(),
            note_html: item.note_html.clone(),
        }
    }
}
