//! Declarative dataset builder for tests.
//!
//! Chain `with_*` calls to describe the collections a test needs, then call `build()` for a
//! [`Dataset`], `build_session()` for a [`Session`] or `to_document()` for the JSON text a
//! [`siba::provider::DatasetSource`] would serve.

use siba::{
    engine::session::Session,
    model::{dataset::Dataset, reference::Package, stock::StockItem},
};

use crate::{fixtures::factory, TestError};

/// Builder for test datasets.
#[derive(Debug, Default)]
pub struct DatasetBuilder {
    dataset: Dataset,
}

impl DatasetBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the standard reference data.
    ///
    /// Regions `Jakarta` and `Surabaya`, categories `MK Wajib` and `MK Pilihan`, shipping option
    /// `REG` and package `PAKET-UT-001`.
    pub fn with_reference_data(mut self) -> Self {
        self.dataset.regions = vec!["Jakarta".to_string(), "Surabaya".to_string()];
        self.dataset.categories = vec!["MK Wajib".to_string(), "MK Pilihan".to_string()];
        self.dataset.shipping_options = vec![factory::mock_shipping_option("REG")];
        self.dataset.packages = vec![factory::mock_package("PAKET-UT-001", &[])];
        self
    }

    /// Add a mock stock item for `code`.
    pub fn with_stock_item(self, code: &str) -> Self {
        self.with_stock(factory::mock_stock_item(code))
    }

    /// Add a stock item.
    ///
    /// # Arguments
    /// - `item` - Item to append; build one with [`factory::mock_stock_item`] and override fields
    pub fn with_stock(mut self, item: StockItem) -> Self {
        self.dataset.stock.push(item);
        self
    }

    /// Add a mock tracking record for `do_number`.
    pub fn with_tracking_record(mut self, do_number: &str, student_id: &str) -> Self {
        self.dataset
            .tracking
            .push(factory::mock_tracking_record(do_number, student_id));
        self
    }

    pub fn with_package(mut self, package: Package) -> Self {
        self.dataset.packages.push(package);
        self
    }

    /// Finish building the dataset.
    pub fn build(self) -> Dataset {
        self.dataset
    }

    /// Finish building and open a session over the dataset.
    pub fn build_session(self) -> Session {
        Session::new(self.dataset)
    }

    /// Finish building and serialize the dataset into its JSON document.
    ///
    /// # Returns
    /// - `Ok(String)` - The document, using the same keys as `dataBahanAjar.json`
    /// - `Err(TestError::Json)` - Serialization failed
    pub fn to_document(self) -> Result<String, TestError> {
        Ok(serde_json::to_string(&self.dataset)?)
    }
}
