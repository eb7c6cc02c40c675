pub mod not_found;
pub mod order;
pub mod stock;
pub mod tracking;

pub use not_found::NotFound;
pub use order::OrderPage;
pub use stock::StockPage;
pub use tracking::TrackingPage;
