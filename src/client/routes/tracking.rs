use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaMagnifyingGlass, FaPlus, FaRotateLeft};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;
use siba::{
    engine::search::{search_tracking, TrackingSearch},
    error::{Error, ValidationError},
    model::tracking::TrackingRecord,
    util::{
        format::{format_date, format_rupiah},
        time::now,
    },
};

use crate::client::{
    components::{DeliveryBadge, FieldError, Page},
    store::session::SessionState,
};

#[component]
pub fn TrackingPage() -> Element {
    let state = use_context::<Signal<SessionState>>();
    let mut search = use_signal(TrackingSearch::default);

    let records: Vec<TrackingRecord> = {
        let current = state.read();
        search_tracking(current.session.tracking(), &search.read())
            .into_iter()
            .cloned()
            .collect()
    };
    let query = search.read().query().to_string();
    let active = search.read().is_active();

    rsx!(
        Title { "Tracking DO | SIBA" }
        Meta {
            name: "description",
            content: "Lacak status pengiriman bahan ajar berdasarkan nomor DO atau NIM."
        }
        Page { title: "Tracking Delivery Order", subtitle: "Cari berdasarkan nomor DO atau NIM",
            div { class: "flex flex-wrap gap-2",
                input {
                    class: "input input-bordered w-80",
                    r#type: "search",
                    placeholder: "DO2025-0001 atau 123456789",
                    value: "{query}",
                    oninput: move |evt| search.write().set_query(evt.value()),
                    onkeydown: move |evt| match evt.key() {
                        Key::Enter => search.write().perform(),
                        Key::Escape => search.write().reset(),
                        _ => {}
                    },
                }
                button {
                    class: "btn btn-primary flex gap-2",
                    onclick: move |_| search.write().perform(),
                    Icon { width: 16, height: 16, icon: FaMagnifyingGlass }
                    "Cari"
                }
                button {
                    class: "btn btn-outline flex gap-2",
                    onclick: move |_| search.write().reset(),
                    Icon { width: 16, height: 16, icon: FaRotateLeft }
                    "Reset"
                }
            }

            if records.is_empty() {
                div { class: "alert",
                    if active {
                        "Tidak ada DO yang cocok dengan \"{query}\"."
                    } else {
                        "Belum ada data tracking."
                    }
                }
            }

            div { class: "flex flex-col gap-4",
                for record in records {
                    TrackingCard { key: "{record.do_number}", record }
                }
            }
        }
    )
}

/// One delivery order with its journey and a form to append progress.
#[component]
fn TrackingCard(record: TrackingRecord) -> Element {
    let mut state = use_context::<Signal<SessionState>>();
    let mut note = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let (shipping, package_name, contents) = {
        let current = state.read();
        let session = &current.session;

        let shipping = session.shipping_name(&record.shipping_code);
        let (package_name, contents) = match session.find_package(&record.package_code) {
            Some(package) => (
                package.name.clone(),
                package
                    .contents
                    .iter()
                    .map(|code| session.stock_title(code).to_string())
                    .collect::<Vec<_>>(),
            ),
            None => (record.package_code.clone(), Vec::new()),
        };

        (shipping, package_name, contents)
    };

    let do_number = record.do_number.clone();
    let add_progress = move |_: MouseEvent| {
        let result = state
            .write()
            .session
            .append_journey(&do_number, &note(), now())
            .map(|_| ());

        match result {
            Ok(()) => {
                note.set(String::new());
                error.set(None);
            }
            Err(Error::ValidationError(ValidationError::Journey(message))) => {
                error.set(Some(message))
            }
            Err(err) => tracing::error!("Failed to update tracking {}: {}", do_number, err),
        }
    };

    rsx!(
        div { class: "card bg-base-200 shadow",
            div { class: "card-body gap-3",
                div { class: "flex justify-between items-center",
                    h2 { class: "card-title", "{record.do_number}" }
                    DeliveryBadge { status: record.status.clone() }
                }
                div { class: "grid grid-cols-2 gap-x-4 gap-y-1 text-sm",
                    span { class: "opacity-70", "NIM" }
                    span { "{record.student_id}" }
                    span { class: "opacity-70", "Nama" }
                    span { "{record.student_name}" }
                    span { class: "opacity-70", "Ekspedisi" }
                    span { "{shipping}" }
                    span { class: "opacity-70", "Tanggal Kirim" }
                    span { {format_date(record.ship_date)} }
                    span { class: "opacity-70", "Paket" }
                    span { "{record.package_code} - {package_name}" }
                    span { class: "opacity-70", "Total" }
                    span { {format_rupiah(record.total)} }
                }
                if !contents.is_empty() {
                    div { class: "text-sm",
                        span { class: "opacity-70", "Isi paket" }
                        ul { class: "list-disc list-inside",
                            for title in contents {
                                li { "{title}" }
                            }
                        }
                    }
                }

                ul { class: "timeline timeline-vertical timeline-compact",
                    for entry in record.journey.iter() {
                        li {
                            div { class: "timeline-start text-xs opacity-70", "{entry.timestamp}" }
                            div { class: "timeline-middle", "●" }
                            div { class: "timeline-end timeline-box", "{entry.note}" }
                            hr {}
                        }
                    }
                }

                div { class: "flex gap-2",
                    input {
                        class: "input input-bordered input-sm flex-1",
                        placeholder: "Keterangan progress",
                        value: "{note}",
                        oninput: move |evt| {
                            note.set(evt.value());
                            error.set(None);
                        },
                    }
                    button {
                        class: "btn btn-sm btn-primary flex gap-2",
                        onclick: add_progress,
                        Icon { width: 12, height: 12, icon: FaPlus }
                        "Tambah Progress"
                    }
                }
                FieldError { message: error() }
            }
        }
    )
}
