//! Test fixtures for the dashboard's data model.
//!
//! - `factory` - In-memory records with standard test values
//! - [`sample_dataset`] - The dataset document bundled with the web client

pub mod factory;

use siba::model::dataset::Dataset;

use crate::TestError;

/// Raw text of the bundled `public/data/dataBahanAjar.json` document.
pub const SAMPLE_DOCUMENT: &str = include_str!("../../../public/data/dataBahanAjar.json");

/// Parse the bundled dataset document.
///
/// # Returns
/// - `Ok(Dataset)` - The sample dataset: 5 stock items, 2 packages, 2 tracking records
/// - `Err(TestError::DataLoad)` - The bundled document no longer parses
pub fn sample_dataset() -> Result<Dataset, TestError> {
    Ok(Dataset::from_json(SAMPLE_DOCUMENT)?)
}
