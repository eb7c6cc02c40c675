//! Stock and delivery status classification.
//!
//! Both the stock table and the tracking page colour their badges from the same [`StatusTone`]
//! scale, so a stock item and an order that are "in trouble" look the same.

use crate::model::tracking::DeliveryStatus;

/// Stock level relative to the item's safety threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    Empty,
    Low,
    Safe,
}

/// Colour scale shared by stock and delivery badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusTone {
    Safe,
    Warning,
    Danger,
    Info,
}

impl StatusTone {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Safe => "status-safe",
            Self::Warning => "status-warning",
            Self::Danger => "status-danger",
            Self::Info => "status-info",
        }
    }
}

/// Classified stock status with its display label and icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockStatus {
    pub kind: StatusKind,
    pub label: &'static str,
    pub icon: &'static str,
}

impl StockStatus {
    pub fn tone(&self) -> StatusTone {
        match self.kind {
            StatusKind::Empty => StatusTone::Danger,
            StatusKind::Low => StatusTone::Warning,
            StatusKind::Safe => StatusTone::Safe,
        }
    }
}

/// Classifies a stock quantity against its safety threshold.
///
/// An empty shelf is always [`StatusKind::Empty`], even when the threshold is zero. A quantity
/// equal to the threshold is [`StatusKind::Safe`].
///
/// # Arguments
/// - `quantity` - Units currently in stock
/// - `safety_threshold` - Minimum units before the item is flagged low
pub fn classify(quantity: u32, safety_threshold: u32) -> StockStatus {
    if quantity == 0 {
        StockStatus {
            kind: StatusKind::Empty,
            label: "Kosong",
            icon: "❌",
        }
    } else if quantity < safety_threshold {
        StockStatus {
            kind: StatusKind::Low,
            label: "Menipis",
            icon: "⚠️",
        }
    } else {
        StockStatus {
            kind: StatusKind::Safe,
            label: "Aman",
            icon: "✅",
        }
    }
}

/// Maps a delivery status onto the badge colour scale.
pub fn delivery_tone(status: &DeliveryStatus) -> StatusTone {
    match status {
        DeliveryStatus::Delivered => StatusTone::Safe,
        DeliveryStatus::InTransit => StatusTone::Warning,
        DeliveryStatus::Pending => StatusTone::Danger,
        DeliveryStatus::Other(_) => StatusTone::Info,
    }
}
