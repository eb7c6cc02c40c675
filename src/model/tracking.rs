use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Delivery progress of an order.
///
/// Known statuses are matched case-insensitively; anything else is kept verbatim so records with
/// statuses this dashboard does not know about still round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DeliveryStatus {
    Pending,
    InTransit,
    Delivered,
    Other(String),
}

impl DeliveryStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "Pending",
            Self::InTransit => "Dalam Perjalanan",
            Self::Delivered => "Terkirim",
            Self::Other(status) => status,
        }
    }
}

impl From<String> for DeliveryStatus {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "pending" => Self::Pending,
            "dalam perjalanan" => Self::InTransit,
            "terkirim" => Self::Delivered,
            _ => Self::Other(value),
        }
    }
}

impl From<DeliveryStatus> for String {
    fn from(status: DeliveryStatus) -> Self {
        match status {
            DeliveryStatus::Other(status) => status,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A timestamped step in an order's delivery journey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JourneyEntry {
    /// Local time formatted as `YYYY-MM-DD HH:MM:SS`.
    #[serde(rename = "waktu")]
    pub timestamp: String,
    #[serde(rename = "keterangan")]
    pub note: String,
}

/// A delivery order (DO) shipping a package to a student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackingRecord {
    #[serde(rename = "noDO")]
    pub do_number: String,
    #[serde(rename = "nim")]
    pub student_id: String,
    #[serde(rename = "nama")]
    pub student_name: String,
    pub status: DeliveryStatus,
    #[serde(rename = "ekspedisi")]
    pub shipping_code: String,
    #[serde(rename = "paket")]
    pub package_code: String,
    #[serde(rename = "tanggalKirim")]
    pub ship_date: NaiveDate,
    #[serde(default)]
    pub total: u64,
    /// Append-only, oldest first.
    #[serde(rename = "perjalanan", default)]
    pub journey: Vec<JourneyEntry>,
}

/// Raw values collected by the new delivery order form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderForm {
    pub student_id: String,
    pub student_name: String,
    pub shipping_code: String,
    pub package_code: String,
    pub ship_date: Option<NaiveDate>,
}

impl OrderForm {
    /// Creates an empty form with the ship date preset to `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            ship_date: Some(today),
            ..Default::default()
        }
    }
}
