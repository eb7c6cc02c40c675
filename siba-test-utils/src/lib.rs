pub mod builder;
pub mod error;
pub mod fixtures;

pub use builder::DatasetBuilder;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        fixtures::{factory, sample_dataset},
        DatasetBuilder, TestError,
    };
}
