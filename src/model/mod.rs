//! Dataset records shared by the engine and the client.

pub mod dataset;
pub mod reference;
pub mod stock;
pub mod tracking;
