use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaBook, FaMagnifyingGlass, FaPenToSquare};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::store::session::{LoadState, SessionState};

pub use crate::client::router::Route;

#[component]
pub fn Navbar() -> Element {
    let state = use_context::<Signal<SessionState>>();
    let load = state.read().load;
    let route = use_route::<Route>();

    use_effect(use_reactive((&route,), |(route,)| {
        tracing::info!("Tab changed: {}", route);
    }));

    rsx! {
        div {
            class: "navbar bg-base-200",
            div {
                class: "navbar-start",
                div { class: "flex flex-col",
                    p { class: "text-xl",
                        "Sistem Pemesanan Bahan Ajar"
                    }
                    p { class: "text-xs",
                        "Universitas Terbuka"
                    }
                }
            }
            div {
                class: "navbar-end",
                div { role: "tablist", class: "tabs tabs-boxed",
                    Link {
                        to: Route::StockPage {},
                        class: "tab flex gap-2",
                        active_class: "tab-active",
                        Icon { width: 16, height: 16, icon: FaBook }
                        "Stok Bahan Ajar"
                    }
                    Link {
                        to: Route::TrackingPage {},
                        class: "tab flex gap-2",
                        active_class: "tab-active",
                        Icon { width: 16, height: 16, icon: FaMagnifyingGlass }
                        "Tracking DO"
                    }
                    Link {
                        to: Route::OrderPage {},
                        class: "tab flex gap-2",
                        active_class: "tab-active",
                        Icon { width: 16, height: 16, icon: FaPenToSquare }
                        "Input DO Baru"
                    }
                }
            }
        }

        {match load {
            LoadState::Loading => rsx! {
                div { class: "alert alert-info rounded-none", "Memuat data..." }
            },
            LoadState::Failed => rsx! {
                div { class: "alert alert-error rounded-none", "Data bahan ajar gagal dimuat." }
            },
            LoadState::Ready => rsx! {},
        }}

        Outlet::<Route> {}
    }
}
