use serde::{Deserialize, Serialize};

use crate::{
    error::DataLoadError,
    model::{
        reference::{Package, ShippingOption},
        stock::StockItem,
        tracking::TrackingRecord,
    },
};

/// The whole JSON document the dashboard is driven by.
///
/// Every collection is optional in the document and defaults to empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(rename = "stok", default)]
    pub stock: Vec<StockItem>,
    /// Regional units (UPBJJ).
    #[serde(rename = "upbjjList", default)]
    pub regions: Vec<String>,
    #[serde(rename = "kategoriList", default)]
    pub categories: Vec<String>,
    #[serde(rename = "pengirimanList", default)]
    pub shipping_options: Vec<ShippingOption>,
    #[serde(rename = "paket", default)]
    pub packages: Vec<Package>,
    #[serde(default)]
    pub tracking: Vec<TrackingRecord>,
}

impl Dataset {
    /// Parses a dataset document.
    ///
    /// # Returns
    /// - `Ok(Dataset)` - The parsed document with absent collections left empty
    /// - `Err(DataLoadError::Parse)` - The body is not a valid dataset document
    pub fn from_json(body: &str) -> Result<Self, DataLoadError> {
        Ok(serde_json::from_str(body)?)
    }
}
