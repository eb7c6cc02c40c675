use dioxus::prelude::*;

use crate::client::{components::Page, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(
        Page { title: "Halaman tidak ditemukan",
            p { "Tidak ada halaman di /{path}." }
            Link { to: Route::StockPage {}, class: "btn btn-primary w-48",
                "Kembali ke Stok"
            }
        }
    )
}
