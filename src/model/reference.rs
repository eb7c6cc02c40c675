use serde::{Deserialize, Serialize};

/// A priced bundle of instructional materials that an order ships.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    #[serde(rename = "kode")]
    pub code: String,
    #[serde(rename = "nama")]
    pub name: String,
    /// Stock codes of the materials included in the package.
    #[serde(rename = "isi", default)]
    pub contents: Vec<String>,
    #[serde(rename = "harga")]
    pub price: u64,
}

/// A courier service level an order can be shipped with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingOption {
    #[serde(rename = "kode")]
    pub code: String,
    #[serde(rename = "nama")]
    pub name: String,
}

impl ShippingOption {
    /// Name shown in the order and tracking pages, prefixed with the courier.
    pub fn display_name(&self) -> String {
        format!("JNE {}", self.name)
    }
}
