//! Tests for the session store and the views derived from it.
//!
//! These run the engine over whole datasets, either the bundled sample document or one built
//! with `DatasetBuilder`, and check that edits made through the session show up in the views.

mod order;
mod stock;

use siba_test_utils::prelude::*;
