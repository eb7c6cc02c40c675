use chrono::NaiveDate;
use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaPaperPlane;
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;
use siba::{
    engine::validation::{FieldErrors, OrderField},
    error::{Error, ValidationError},
    model::tracking::OrderForm,
    util::{
        format::{format_date, format_rupiah},
        time::{current_year, now, today},
    },
};

use crate::client::{
    components::{AppModal, DeliveryBadge, FieldError, Page},
    store::session::SessionState,
};

#[component]
pub fn OrderPage() -> Element {
    let mut state = use_context::<Signal<SessionState>>();
    let mut form = use_signal(|| OrderForm::new(today()));
    let mut errors = use_signal(FieldErrors::<OrderField>::new);
    let mut created = use_signal(|| None::<String>);

    let current_form = form.read().clone();
    let (next_number, packages, shipping_options, recent_orders, selected_package) = {
        let current = state.read();
        let session = &current.session;

        let selected_package = session
            .find_package(&current_form.package_code)
            .map(|package| {
                let titles = package
                    .contents
                    .iter()
                    .map(|code| session.stock_title(code).to_string())
                    .collect::<Vec<_>>();
                (package.name.clone(), titles, package.price)
            });

        (
            session.next_do_number(current_year()),
            session.packages().to_vec(),
            session.shipping_options().to_vec(),
            session.recent_orders().to_vec(),
            selected_package,
        )
    };
    let ship_date = current_form
        .ship_date
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_default();

    let submit = move |evt: FormEvent| {
        evt.prevent_default();

        let result = state
            .write()
            .session
            .submit_order(&form(), now())
            .map(|order| order.do_number.clone());

        match result {
            Ok(do_number) => {
                created.set(Some(do_number));
                form.set(OrderForm::new(today()));
                errors.set(FieldErrors::new());
            }
            Err(Error::ValidationError(ValidationError::Order(found))) => errors.set(found),
            Err(err) => tracing::error!("Failed to create order: {}", err),
        }
    };

    rsx!(
        Title { "Buat DO | SIBA" }
        Meta {
            name: "description",
            content: "Buat delivery order bahan ajar untuk mahasiswa."
        }
        Page { title: "Buat Delivery Order", subtitle: "Nomor DO dibuat otomatis per tahun",
            div { class: "grid md:grid-cols-2 gap-6",
                form { class: "flex flex-col gap-2", onsubmit: submit,
                    div { class: "alert",
                        span { "Nomor DO berikutnya: " }
                        span { class: "font-mono font-semibold", "{next_number}" }
                    }
                    label { class: "form-control",
                        span { class: "label-text", "NIM" }
                        input {
                            class: "input input-bordered",
                            inputmode: "numeric",
                            value: "{current_form.student_id}",
                            oninput: move |evt| {
                                form.write().student_id = evt.value();
                                errors.set(FieldErrors::new());
                            },
                        }
                        FieldError { message: errors.read().get(&OrderField::StudentId).map(str::to_string) }
                    }
                    label { class: "form-control",
                        span { class: "label-text", "Nama" }
                        input {
                            class: "input input-bordered",
                            value: "{current_form.student_name}",
                            oninput: move |evt| {
                                form.write().student_name = evt.value();
                                errors.set(FieldErrors::new());
                            },
                        }
                        FieldError { message: errors.read().get(&OrderField::StudentName).map(str::to_string) }
                    }
                    label { class: "form-control",
                        span { class: "label-text", "Ekspedisi" }
                        select {
                            class: "select select-bordered",
                            value: "{current_form.shipping_code}",
                            onchange: move |evt| {
                                form.write().shipping_code = evt.value();
                                errors.set(FieldErrors::new());
                            },
                            option { value: "", "Pilih ekspedisi" }
                            for shipping in shipping_options.iter() {
                                option { key: "{shipping.code}", value: "{shipping.code}",
                                    {shipping.display_name()}
                                }
                            }
                        }
                        FieldError { message: errors.read().get(&OrderField::Shipping).map(str::to_string) }
                    }
                    label { class: "form-control",
                        span { class: "label-text", "Paket" }
                        select {
                            class: "select select-bordered",
                            value: "{current_form.package_code}",
                            onchange: move |evt| {
                                form.write().package_code = evt.value();
                                errors.set(FieldErrors::new());
                            },
                            option { value: "", "Pilih paket" }
                            for package in packages.iter() {
                                option { key: "{package.code}", value: "{package.code}",
                                    "{package.code} - {package.name}"
                                }
                            }
                        }
                        FieldError { message: errors.read().get(&OrderField::Package).map(str::to_string) }
                    }
                    label { class: "form-control",
                        span { class: "label-text", "Tanggal Kirim" }
                        input {
                            class: "input input-bordered",
                            r#type: "date",
                            value: "{ship_date}",
                            oninput: move |evt| {
                                form.write().ship_date = NaiveDate::parse_from_str(&evt.value(), "%Y-%m-%d").ok();
                                errors.set(FieldErrors::new());
                            },
                        }
                        FieldError { message: errors.read().get(&OrderField::ShipDate).map(str::to_string) }
                    }
                    button { class: "btn btn-primary flex gap-2 mt-2", r#type: "submit",
                        Icon { width: 16, height: 16, icon: FaPaperPlane }
                        "Buat DO"
                    }
                }

                div { class: "card bg-base-200",
                    div { class: "card-body",
                        h2 { class: "card-title", "Detail Paket" }
                        {match selected_package {
                            Some((name, titles, price)) => rsx! {
                                p { class: "font-semibold", "{name}" }
                                ul { class: "list-disc list-inside text-sm",
                                    for title in titles {
                                        li { "{title}" }
                                    }
                                }
                                p { "Total: " {format_rupiah(price)} }
                            },
                            None => rsx! {
                                p { class: "opacity-70", "Pilih paket untuk melihat isi dan harga." }
                            },
                        }}
                    }
                }
            }

            if !recent_orders.is_empty() {
                div { class: "overflow-x-auto",
                    h2 { class: "text-lg font-semibold", "DO dibuat pada sesi ini" }
                    table { class: "table table-sm",
                        thead {
                            tr {
                                th { "Nomor DO" }
                                th { "NIM" }
                                th { "Nama" }
                                th { "Paket" }
                                th { "Tanggal Kirim" }
                                th { "Total" }
                                th { "Status" }
                            }
                        }
                        tbody {
                            for order in recent_orders {
                                tr { key: "{order.do_number}",
                                    td { class: "font-mono", "{order.do_number}" }
                                    td { "{order.student_id}" }
                                    td { "{order.student_name}" }
                                    td { "{order.package_code}" }
                                    td { {format_date(order.ship_date)} }
                                    td { {format_rupiah(order.total)} }
                                    td { DeliveryBadge { status: order.status.clone() } }
                                }
                            }
                        }
                    }
                }
            }
        }

        AppModal {
            show: created.read().is_some(),
            title: "DO berhasil dibuat".to_string(),
            on_close: move |_| created.set(None),
            if let Some(do_number) = created() {
                p { "Delivery order " span { class: "font-mono font-semibold", "{do_number}" } " telah dicatat." }
            }
        }
    )
}
