//! Dataset loading and caching.
//!
//! The dashboard reads one JSON document per page session. [`DataProvider`] fetches it through
//! a [`DatasetSource`] the first time any collection is requested and answers every later
//! request from the cached copy. A failed fetch is logged and returned to the caller; it is not
//! cached and not retried automatically.

pub mod file;
#[cfg(feature = "web")]
pub mod http;
pub mod memory;

use std::future::Future;

use dioxus_logger::tracing;

use crate::{
    error::DataLoadError,
    model::{
        dataset::Dataset,
        reference::{Package, ShippingOption},
        stock::StockItem,
        tracking::TrackingRecord,
    },
};

pub use file::FileSource;
#[cfg(feature = "web")]
pub use http::HttpSource;
pub use memory::StaticSource;

/// Somewhere the raw dataset document can be read from.
pub trait DatasetSource {
    /// Human readable location, used in log lines.
    fn location(&self) -> &str;

    /// Reads the whole document body.
    fn fetch(&self) -> impl Future<Output = Result<String, DataLoadError>>;
}

/// Session-wide cache in front of a [`DatasetSource`].
pub struct DataProvider<S> {
    source: S,
    cached: Option<Dataset>,
}

impl<S: DatasetSource> DataProvider<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cached: None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.cached.is_some()
    }

    /// Returns the dataset, fetching it on first use.
    ///
    /// # Returns
    /// - `Ok(&Dataset)` - The cached dataset
    /// - `Err(DataLoadError)` - The source failed or returned an invalid document
    pub async fn fetch_all(&mut self) -> Result<&Dataset, DataLoadError> {
        let dataset = match self.cached.take() {
            Some(dataset) => dataset,
            None => self.load().await?,
        };
        Ok(&*self.cached.insert(dataset))
    }

    async fn load(&self) -> Result<Dataset, DataLoadError> {
        tracing::info!("Fetching dataset from {}", self.source.location());

        let dataset = match self.source.fetch().await {
            Ok(body) => Dataset::from_json(&body),
            Err(e) => Err(e),
        }
        .inspect_err(|e| tracing::error!("Error fetching data: {}", e))?;

        tracing::info!(
            "Dataset loaded: {} stock items, {} packages, {} tracking records",
            dataset.stock.len(),
            dataset.packages.len(),
            dataset.tracking.len()
        );
        Ok(dataset)
    }

    pub async fn stock(&mut self) -> Result<&[StockItem], DataLoadError> {
        Ok(&self.fetch_all().await?.stock)
    }

    pub async fn regions(&mut self) -> Result<&[String], DataLoadError> {
        Ok(&self.fetch_all().await?.regions)
    }

    pub async fn categories(&mut self) -> Result<&[String], DataLoadError> {
        Ok(&self.fetch_all().await?.categories)
    }

    pub async fn shipping_options(&mut self) -> Result<&[ShippingOption], DataLoadError> {
        Ok(&self.fetch_all().await?.shipping_options)
    }

    pub async fn packages(&mut self) -> Result<&[Package], DataLoadError> {
        Ok(&self.fetch_all().await?.packages)
    }

    pub async fn tracking(&mut self) -> Result<&[TrackingRecord], DataLoadError> {
        Ok(&self.fetch_all().await?.tracking)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    const DOCUMENT: &str = r#"{
        "upbjjList": ["Jakarta"],
        "kategoriList": ["MK Wajib"],
        "pengirimanList": [{ "kode": "REG", "nama": "Reguler" }]
    }"#;

    /// Source that counts fetches and can be told to fail.
    struct CountingSource {
        body: Option<&'static str>,
        fetches: Cell<usize>,
    }

    impl CountingSource {
        fn new(body: Option<&'static str>) -> Self {
            Self {
                body,
                fetches: Cell::new(0),
            }
        }
    }

    impl DatasetSource for CountingSource {
        fn location(&self) -> &str {
            "memory://counting"
        }

        async fn fetch(&self) -> Result<String, DataLoadError> {
            self.fetches.set(self.fetches.get() + 1);
            self.body
                .map(str::to_string)
                .ok_or(DataLoadError::Status(404))
        }
    }

    /// Tests that the document is fetched once per session.
    ///
    /// Expected: one fetch across several accessor calls
    #[tokio::test]
    async fn fetches_once_and_caches() {
        let mut provider = DataProvider::new(CountingSource::new(Some(DOCUMENT)));

        assert_eq!(provider.regions().await.unwrap(), ["Jakarta".to_string()]);
        assert_eq!(provider.categories().await.unwrap(), ["MK Wajib".to_string()]);
        assert_eq!(provider.shipping_options().await.unwrap().len(), 1);

        assert!(provider.is_loaded());
        assert_eq!(provider.source.fetches.get(), 1);
    }

    /// Tests that collections missing from the document are empty.
    ///
    /// Expected: empty stock, packages and tracking
    #[tokio::test]
    async fn missing_collections_are_empty() {
        let mut provider = DataProvider::new(CountingSource::new(Some(DOCUMENT)));

        assert!(provider.stock().await.unwrap().is_empty());
        assert!(provider.packages().await.unwrap().is_empty());
        assert!(provider.tracking().await.unwrap().is_empty());
    }

    /// Tests that a failed fetch is reported and not cached.
    ///
    /// Expected: Err(Status(404)) each call, a fetch per call
    #[tokio::test]
    async fn failure_is_not_cached() {
        let mut provider = DataProvider::new(CountingSource::new(None));

        assert!(matches!(
            provider.fetch_all().await,
            Err(DataLoadError::Status(404))
        ));
        assert!(!provider.is_loaded());

        assert!(provider.stock().await.is_err());
        assert_eq!(provider.source.fetches.get(), 2);
    }

    /// Tests that an invalid document surfaces as a parse error.
    ///
    /// Expected: Err(DataLoadError::Parse)
    #[tokio::test]
    async fn invalid_document_is_parse_error() {
        let mut provider = DataProvider::new(StaticSource::new("not json"));
        assert!(matches!(
            provider.fetch_all().await,
            Err(DataLoadError::Parse(_))
        ));
    }
}
