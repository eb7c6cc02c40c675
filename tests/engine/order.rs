//! Tests for creating and tracking delivery orders through a session.
//!
//! Verifies DO numbering across the loaded records and orders created in the same session,
//! the validation errors returned for incomplete forms, and journey updates on new orders.

use chrono::{NaiveDate, NaiveDateTime};
use siba::{
    engine::{
        search::{search_tracking, TrackingSearch},
        session::{Session, ORDER_CREATED_NOTE},
        validation::OrderField,
    },
    error::{Error, ValidationError},
    model::tracking::{DeliveryStatus, OrderForm},
};

use super::*;

fn at(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(8, 15, 0)
        .unwrap()
}

/// Tests numbering consecutive orders after the loaded records.
///
/// Expected: DO2025-0003 then DO2025-0004, newest first in recent orders
#[test]
fn numbers_consecutive_orders_after_loaded_records() -> Result<(), TestError> {
    let mut session = Session::new(sample_dataset()?);

    let first = session
        .submit_order(&factory::mock_order_form("111222333"), at(2025, 9, 1))
        .unwrap()
        .do_number
        .clone();
    let second = session
        .submit_order(&factory::mock_order_form("444555666"), at(2025, 9, 1))
        .unwrap()
        .do_number
        .clone();

    assert_eq!(first, "DO2025-0003");
    assert_eq!(second, "DO2025-0004");
    assert_eq!(session.tracking().len(), 4);
    assert_eq!(
        session
            .recent_orders()
            .iter()
            .map(|order| order.do_number.as_str())
            .collect::<Vec<_>>(),
        vec!["DO2025-0004", "DO2025-0003"]
    );
    assert_eq!(session.next_do_number(2025), "DO2025-0005");

    Ok(())
}

/// Tests numbering the first order of a new year.
///
/// Expected: DO2026-0001 regardless of the 2025 records
#[test]
fn restarts_numbering_in_new_year() -> Result<(), TestError> {
    let mut session = Session::new(sample_dataset()?);

    let order = session
        .submit_order(&factory::mock_order_form("111222333"), at(2026, 1, 2))
        .unwrap();

    assert_eq!(order.do_number, "DO2026-0001");

    Ok(())
}

/// Tests the stored fields of a new order.
///
/// Expected: trimmed student fields, Pending status, package price as total and the
/// creation journey entry
#[test]
fn stores_new_order_details() {
    let mut session = DatasetBuilder::new().with_reference_data().build_session();
    let form = OrderForm {
        student_id: " 111222333 ".to_string(),
        student_name: "  Dewi Lestari ".to_string(),
        ..factory::mock_order_form("111222333")
    };

    let order = session.submit_order(&form, at(2025, 9, 1)).unwrap();

    assert_eq!(order.do_number, "DO2025-0001");
    assert_eq!(order.student_id, "111222333");
    assert_eq!(order.student_name, "Dewi Lestari");
    assert_eq!(order.status, DeliveryStatus::Pending);
    assert_eq!(order.total, 120_000);
    assert_eq!(order.journey.len(), 1);
    assert_eq!(order.journey[0].timestamp, "2025-09-01 08:15:00");
    assert_eq!(order.journey[0].note, ORDER_CREATED_NOTE);
}

/// Tests submitting an empty form.
///
/// Expected: Err with an error for every field and nothing recorded
#[test]
fn rejects_empty_form_with_all_errors() -> Result<(), TestError> {
    let mut session = Session::new(sample_dataset()?);
    let form = OrderForm::default();

    let result = session.submit_order(&form, at(2025, 9, 1));

    match result {
        Err(Error::ValidationError(ValidationError::Order(errors))) => {
            assert_eq!(errors.len(), 5);
            assert_eq!(errors.get(&OrderField::StudentId), Some("NIM wajib diisi"));
            assert_eq!(
                errors.get(&OrderField::ShipDate),
                Some("Tanggal kirim wajib diisi")
            );
        }
        other => panic!("expected order validation error, got {:?}", other),
    }
    assert_eq!(session.tracking().len(), 2);
    assert!(session.recent_orders().is_empty());

    Ok(())
}

/// Tests finding a new order with the tracking search and appending progress to it.
///
/// Expected: the order is found by student id and both copies receive the journey entry
#[test]
fn tracks_new_order_progress() -> Result<(), TestError> {
    let mut session = Session::new(sample_dataset()?);
    let do_number = session
        .submit_order(&factory::mock_order_form("555000111"), at(2025, 9, 1))
        .unwrap()
        .do_number
        .clone();

    let mut search = TrackingSearch::default();
    search.set_query("555000");
    search.perform();
    let found = search_tracking(session.tracking(), &search);

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].do_number, do_number);

    session
        .append_journey(&do_number, "Diproses di gudang UPBJJ", at(2025, 9, 2))
        .unwrap();

    let record = session.find_order(&do_number).unwrap();
    assert_eq!(record.journey.len(), 2);
    assert_eq!(record.journey[1].note, "Diproses di gudang UPBJJ");
    assert_eq!(session.recent_orders()[0].journey.len(), 2);

    Ok(())
}

/// Tests appending progress to a DO number nobody issued.
///
/// Expected: Err(Error::NotFound)
#[test]
fn rejects_progress_for_unknown_order() -> Result<(), TestError> {
    let mut session = Session::new(sample_dataset()?);

    let result = session.append_journey("DO2025-9999", "Tiba di Hub", at(2025, 9, 2));

    assert!(matches!(result, Err(Error::NotFound { kind: "tracking", .. })));

    Ok(())
}
