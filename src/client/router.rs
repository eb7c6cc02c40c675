use dioxus::prelude::*;

use crate::client::{
    components::Navbar,
    routes::{NotFound, OrderPage, StockPage, TrackingPage},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    StockPage {},

    #[route("/tracking")]
    TrackingPage {},

    #[route("/order")]
    OrderPage {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
