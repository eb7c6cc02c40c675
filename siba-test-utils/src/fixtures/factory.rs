//! Factory functions for generating mock records.
//!
//! Pure functions returning model instances with standard test values. Tests override the
//! fields they care about with struct update syntax.

use chrono::NaiveDate;
use siba::model::{
    reference::{Package, ShippingOption},
    stock::{StockForm, StockItem},
    tracking::{DeliveryStatus, JourneyEntry, OrderForm, TrackingRecord},
};

/// Create a mock stock item.
///
/// The item sits in region `Jakarta`, category `MK Wajib`, with 10 units against a safety
/// threshold of 5.
///
/// # Arguments
/// - `code` - Stock code of the item
pub fn mock_stock_item(code: &str) -> StockItem {
    StockItem {
        code: code.to_string(),
        title: format!("Bahan Ajar {}", code),
        category: "MK Wajib".to_string(),
        region: "Jakarta".to_string(),
        shelf_location: "R1-A1".to_string(),
        unit_price: 50_000,
        quantity: 10,
        safety_threshold: 5,
        note_html: String::new(),
    }
}

/// Create a valid add-stock form for `code`.
pub fn mock_stock_form(code: &str) -> StockForm {
    StockForm::from(&mock_stock_item(code))
}

/// Create a mock package priced at 120000 containing `contents`.
pub fn mock_package(code: &str, contents: &[&str]) -> Package {
    Package {
        code: code.to_string(),
        name: format!("Paket {}", code),
        contents: contents.iter().map(|code| code.to_string()).collect(),
        price: 120_000,
    }
}

pub fn mock_shipping_option(code: &str) -> ShippingOption {
    ShippingOption {
        code: code.to_string(),
        name: format!("Layanan {}", code),
    }
}

/// Create a mock tracking record with status Pending and one journey entry.
///
/// # Arguments
/// - `do_number` - Delivery order number, e.g. `DO2025-0001`
/// - `student_id` - Student id (NIM) of the recipient
pub fn mock_tracking_record(do_number: &str, student_id: &str) -> TrackingRecord {
    TrackingRecord {
        do_number: do_number.to_string(),
        student_id: student_id.to_string(),
        student_name: "Mahasiswa Uji".to_string(),
        status: DeliveryStatus::Pending,
        shipping_code: "REG".to_string(),
        package_code: "PAKET-UT-001".to_string(),
        ship_date: mock_date(),
        total: 120_000,
        journey: vec![JourneyEntry {
            timestamp: "2025-08-25 10:00:00".to_string(),
            note: "Penerimaan di Loket".to_string(),
        }],
    }
}

/// Create an order form that passes validation against [`mock_package`] `PAKET-UT-001` and
/// [`mock_shipping_option`] `REG`.
pub fn mock_order_form(student_id: &str) -> OrderForm {
    OrderForm {
        student_id: student_id.to_string(),
        student_name: "Mahasiswa Uji".to_string(),
        shipping_code: "REG".to_string(),
        package_code: "PAKET-UT-001".to_string(),
        ship_date: Some(mock_date()),
    }
}

/// 2025-08-25, the ship date used by every factory.
pub fn mock_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 8, 25).unwrap_or_default()
}
