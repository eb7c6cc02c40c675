use std::path::PathBuf;

use crate::{error::DataLoadError, provider::DatasetSource};

/// Source reading the dataset from the local filesystem, used by desktop builds.
///
/// `fetch` reads with a blocking `std::fs` call and stalls the executor until the file is read.
/// Only use it for the one-time load of a local document.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    location: String,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let location = path.display().to_string();
        Self { path, location }
    }
}

impl DatasetSource for FileSource {
    fn location(&self) -> &str {
        &self.location
    }

    /// Reads the whole file, blocking the calling task until it is read.
    async fn fetch(&self) -> Result<String, DataLoadError> {
        Ok(std::fs::read_to_string(&self.path)?)
    }
}
