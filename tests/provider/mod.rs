//! Tests for loading the dataset document through a `DataProvider`.

mod load;

use siba_test_utils::prelude::*;
