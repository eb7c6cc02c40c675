use crate::{error::DataLoadError, provider::DatasetSource};

/// Source serving a document held in memory, such as one bundled with `include_str!`.
#[derive(Debug, Clone)]
pub struct StaticSource {
    body: String,
}

impl StaticSource {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}

impl DatasetSource for StaticSource {
    fn location(&self) -> &str {
        "memory"
    }

    async fn fetch(&self) -> Result<String, DataLoadError> {
        Ok(self.body.clone())
    }
}
