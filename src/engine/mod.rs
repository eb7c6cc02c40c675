//! Pure computations behind the dashboard pages.
//!
//! Every function here takes the session's collections by reference and returns a new value;
//! nothing in this module mutates its inputs except the [`session::Session`] store, which owns
//! the collections and is the only place add/edit/delete/submit operations happen.

pub mod numbering;
pub mod search;
pub mod session;
pub mod status;
pub mod validation;
pub mod view;
