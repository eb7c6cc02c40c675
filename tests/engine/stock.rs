//! Tests for the stock table views over a session.
//!
//! Verifies that stock edits made through the session are reflected by `compute_stock_view`,
//! that filtering only ever narrows the collection without reordering it, and that the
//! summary cards agree with the classifier.

use siba::{
    engine::{
        session::Session,
        validation::StockField,
        view::{available_categories, compute_stock_view, SortField, SortSpec, StockQuery},
    },
    error::{Error, ValidationError},
    model::stock::StockForm,
};

use super::*;

/// Tests that a newly added item appears in the unfiltered view.
///
/// Expected: the new code appears exactly once, after the existing items
#[test]
fn added_item_appears_once_in_unfiltered_view() -> Result<(), TestError> {
    let mut session = Session::new(sample_dataset()?);

    session
        .add_stock(factory::mock_stock_form("MKDU4111"))
        .unwrap();

    let view = compute_stock_view(session.stock(), &StockQuery::default());
    let matches = view.iter().filter(|item| item.code == "MKDU4111").count();

    assert_eq!(matches, 1);
    assert_eq!(view.len(), 6);
    assert_eq!(view.last().map(|item| item.code.as_str()), Some("MKDU4111"));

    Ok(())
}

/// Tests adding an item whose code is already stocked.
///
/// Expected: Err with a `Kode sudah ada` error on the code field and no item added
#[test]
fn rejects_duplicate_code_on_add() -> Result<(), TestError> {
    let mut session = Session::new(sample_dataset()?);

    let result = session.add_stock(factory::mock_stock_form("EKMA4116"));

    match result {
        Err(Error::ValidationError(ValidationError::Stock(errors))) => {
            assert_eq!(
                errors.get(&StockField::Code),
                Some("Kode sudah ada")
            );
        }
        other => panic!("expected duplicate code error, got {:?}", other),
    }
    assert_eq!(session.stock().len(), 5);

    Ok(())
}

/// Tests that every filtered view is an order-preserving subset of the collection.
///
/// Expected: each row satisfies every active filter and rows keep their collection order
#[test]
fn filtered_view_is_ordered_subset() -> Result<(), TestError> {
    let session = Session::new(sample_dataset()?);
    let stock = session.stock();

    let mut query = StockQuery::default();
    query.filters.set_region("Jakarta");
    query.filters.set_low_stock_only(true);

    let view = compute_stock_view(stock, &query);

    assert_eq!(
        view.iter().map(|item| item.code.as_str()).collect::<Vec<_>>(),
        vec!["EKMA4115"]
    );
    for item in &view {
        assert_eq!(item.region, "Jakarta");
        assert!(item.quantity < item.safety_threshold || item.quantity == 0);
    }

    let mut low_only = StockQuery::default();
    low_only.filters.set_low_stock_only(true);
    let codes: Vec<&str> = compute_stock_view(stock, &low_only)
        .iter()
        .map(|item| item.code.as_str())
        .collect();

    assert_eq!(codes, vec!["EKMA4115", "FISIP4001", "PAUD4401"]);

    Ok(())
}

/// Tests sorting the sample stock by title and by descending price.
///
/// Expected: rows ordered by the selected column; input collection unchanged
#[test]
fn sorts_by_selected_column() -> Result<(), TestError> {
    let session = Session::new(sample_dataset()?);
    let before = session.stock().to_vec();

    let by_title = StockQuery {
        sort: Some(SortSpec::ascending(SortField::Title)),
        ..Default::default()
    };
    let codes: Vec<&str> = compute_stock_view(session.stock(), &by_title)
        .iter()
        .map(|item| item.code.as_str())
        .collect();
    assert_eq!(
        codes,
        vec!["BIOL4201", "FISIP4001", "EKMA4115", "EKMA4116", "PAUD4401"]
    );

    let by_price = StockQuery {
        sort: Some(SortSpec::toggle(
            Some(SortSpec::ascending(SortField::Price)),
            SortField::Price,
        )),
        ..Default::default()
    };
    let codes: Vec<&str> = compute_stock_view(session.stock(), &by_price)
        .iter()
        .map(|item| item.code.as_str())
        .collect();
    assert_eq!(
        codes,
        vec!["BIOL4201", "PAUD4401", "EKMA4116", "EKMA4115", "FISIP4001"]
    );

    assert_eq!(session.stock(), before.as_slice());

    Ok(())
}

/// Tests the category options offered for a selected region.
///
/// Expected: full reference list without a region, the region's categories with one
#[test]
fn category_options_follow_region() -> Result<(), TestError> {
    let session = Session::new(sample_dataset()?);

    assert_eq!(
        available_categories(session.stock(), session.categories(), ""),
        session.categories().to_vec()
    );
    assert_eq!(
        available_categories(session.stock(), session.categories(), "Jakarta"),
        vec!["MK Wajib".to_string()]
    );

    let mut query = StockQuery::default();
    query.filters.set_category("MK Wajib");
    query.filters.set_region("Jakarta");
    query.filters.set_region("");

    assert_eq!(query.filters.category(), "");

    Ok(())
}

/// Tests editing and then deleting an item through the session.
///
/// Expected: the edit replaces the item in place and the delete removes it from every view
#[test]
fn edit_then_delete_updates_views() {
    let mut session = DatasetBuilder::new()
        .with_reference_data()
        .with_stock_item("EKMA4116")
        .with_stock_item("EKMA4115")
        .build_session();

    let form = StockForm {
        quantity: "0".to_string(),
        ..factory::mock_stock_form("EKMA4116")
    };
    session.update_stock(form).unwrap();

    assert_eq!(session.stock()[0].quantity, 0);
    assert_eq!(session.summary().empty, 1);

    let removed = session.delete_stock("EKMA4116");

    assert_eq!(removed.map(|item| item.code), Some("EKMA4116".to_string()));
    let view = compute_stock_view(session.stock(), &StockQuery::default());
    assert_eq!(
        view.iter().map(|item| item.code.as_str()).collect::<Vec<_>>(),
        vec!["EKMA4115"]
    );
}

/// Tests the summary counts of the bundled sample.
///
/// Expected: 5 items, 2 safe, 2 low and 1 empty
#[test]
fn summary_counts_sample_dataset() -> Result<(), TestError> {
    let session = Session::new(sample_dataset()?);

    let summary = session.summary();

    assert_eq!(summary.total, 5);
    assert_eq!(summary.safe, 2);
    assert_eq!(summary.low, 2);
    assert_eq!(summary.empty, 1);

    Ok(())
}
