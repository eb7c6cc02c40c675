use siba::error::DataLoadError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    DataLoad(#[from] DataLoadError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
