use reqwasm::http::Request;

use crate::{error::DataLoadError, provider::DatasetSource};

/// Source fetching the dataset over HTTP from the page's origin.
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl DatasetSource for HttpSource {
    fn location(&self) -> &str {
        &self.url
    }

    async fn fetch(&self) -> Result<String, DataLoadError> {
        let response = Request::get(&self.url)
            .send()
            .await
            .map_err(|e| DataLoadError::Request(e.to_string()))?;

        match response.status() {
            200..=299 => response
                .text()
                .await
                .map_err(|e| DataLoadError::Request(e.to_string())),
            status => Err(DataLoadError::Status(status)),
        }
    }
}
