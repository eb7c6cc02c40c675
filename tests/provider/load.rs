//! Tests for loading dataset documents through `DataProvider`.
//!
//! Verifies that the bundled sample and builder-generated documents load into the expected
//! collections, and that a broken document surfaces as a parse error.

use siba::{
    error::DataLoadError,
    provider::{DataProvider, FileSource, StaticSource},
};

use super::*;

/// Tests loading a document generated by the builder.
///
/// Expected: Ok with the same dataset the builder produced
#[tokio::test]
async fn loads_builder_document() -> Result<(), TestError> {
    let expected = DatasetBuilder::new()
        .with_reference_data()
        .with_stock_item("EKMA4116")
        .with_tracking_record("DO2025-0001", "123456789")
        .build();
    let document = DatasetBuilder::new()
        .with_reference_data()
        .with_stock_item("EKMA4116")
        .with_tracking_record("DO2025-0001", "123456789")
        .to_document()?;

    let mut provider = DataProvider::new(StaticSource::new(document));
    let dataset = provider.fetch_all().await?;

    assert_eq!(dataset, &expected);

    Ok(())
}

/// Tests loading the bundled sample through the per-collection accessors.
///
/// Expected: Ok with every collection of the sample populated
#[tokio::test]
async fn loads_sample_collections() -> Result<(), TestError> {
    let mut provider = DataProvider::new(StaticSource::new(
        siba_test_utils::fixtures::SAMPLE_DOCUMENT,
    ));

    assert_eq!(provider.stock().await?.len(), 5);
    assert_eq!(provider.regions().await?.len(), 5);
    assert_eq!(provider.categories().await?.len(), 4);
    assert_eq!(provider.shipping_options().await?.len(), 2);
    assert_eq!(provider.packages().await?.len(), 2);
    assert_eq!(provider.tracking().await?.len(), 2);
    assert!(provider.is_loaded());

    Ok(())
}

/// Tests loading the sample from disk with the native source.
///
/// Expected: Ok with the same dataset as the bundled copy
#[tokio::test]
async fn loads_sample_from_file() -> Result<(), TestError> {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/public/data/dataBahanAjar.json");
    let mut provider = DataProvider::new(FileSource::new(path));

    let dataset = provider.fetch_all().await?;

    assert_eq!(dataset, &sample_dataset()?);

    Ok(())
}

/// Tests loading a document that is not valid JSON.
///
/// Expected: Err(DataLoadError::Parse) and nothing cached
#[tokio::test]
async fn fails_on_invalid_document() {
    let mut provider = DataProvider::new(StaticSource::new("{ \"stok\": ["));

    let result = provider.fetch_all().await;

    assert!(matches!(result, Err(DataLoadError::Parse(_))));
    assert!(!provider.is_loaded());
}
