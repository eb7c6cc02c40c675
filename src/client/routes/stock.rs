use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaPen, FaPlus, FaRotateLeft, FaTrash};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;
use siba::{
    engine::{
        validation::{FieldErrors, FormMode, StockField},
        view::{available_categories, compute_stock_view, SortField, SortSpec, StockQuery},
    },
    error::{Error, ValidationError},
    model::stock::{StockForm, StockItem},
    util::format::{format_qty, format_rupiah},
};

use crate::client::{
    components::{AppModal, FieldError, Page, StatusBadge},
    store::session::SessionState,
};

#[component]
pub fn StockPage() -> Element {
    let mut state = use_context::<Signal<SessionState>>();
    let mut query = use_signal(StockQuery::default);
    let mut form = use_signal(StockForm::default);
    let mut form_mode = use_signal(|| None::<FormMode>);
    let mut form_errors = use_signal(FieldErrors::<StockField>::new);
    let mut pending_delete = use_signal(|| None::<StockItem>);

    let (rows, regions, categories, filter_categories, summary) = {
        let current = state.read();
        let session = &current.session;
        let selected = query.read();

        let rows: Vec<StockItem> = compute_stock_view(session.stock(), &selected)
            .into_iter()
            .cloned()
            .collect();
        let filter_categories = available_categories(
            session.stock(),
            session.categories(),
            selected.filters.region(),
        );

        (
            rows,
            session.regions().to_vec(),
            session.categories().to_vec(),
            filter_categories,
            session.summary(),
        )
    };

    let selected = query.read().clone();
    let current_form = form.read().clone();
    let mode = form_mode();
    let delete_target = pending_delete.read().clone();

    let save = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(mode) = form_mode() else {
            return;
        };

        let submitted = form();
        let result = match mode {
            FormMode::Create => state.write().session.add_stock(submitted).map(|_| ()),
            FormMode::Edit => state.write().session.update_stock(submitted).map(|_| ()),
        };

        match result {
            Ok(()) => {
                form_mode.set(None);
                form.set(StockForm::default());
                form_errors.set(FieldErrors::new());
            }
            Err(Error::ValidationError(ValidationError::Stock(errors))) => form_errors.set(errors),
            Err(err) => tracing::error!("Failed to save stock item: {}", err),
        }
    };

    rsx!(
        Title { "Stok Bahan Ajar | SIBA" }
        Meta {
            name: "description",
            content: "Stok bahan ajar per UPBJJ, Universitas Terbuka."
        }
        Page { title: "Stok Bahan Ajar", subtitle: "Pantau stok bahan ajar di setiap UPBJJ",
            div { class: "stats shadow",
                div { class: "stat",
                    div { class: "stat-title", "Total Item" }
                    div { class: "stat-value", "{summary.total}" }
                }
                div { class: "stat",
                    div { class: "stat-title", "Aman" }
                    div { class: "stat-value text-success", "{summary.safe}" }
                }
                div { class: "stat",
                    div { class: "stat-title", "Menipis" }
                    div { class: "stat-value text-warning", "{summary.low}" }
                }
                div { class: "stat",
                    div { class: "stat-title", "Kosong" }
                    div { class: "stat-value text-error", "{summary.empty}" }
                }
            }

            div { class: "flex flex-wrap gap-2 items-end",
                label { class: "form-control",
                    span { class: "label-text", "UPBJJ" }
                    select {
                        class: "select select-bordered",
                        value: "{selected.filters.region()}",
                        onchange: move |evt| query.write().filters.set_region(evt.value()),
                        option { value: "", "Semua UPBJJ" }
                        for region in regions.iter() {
                            option { key: "{region}", value: "{region}", "{region}" }
                        }
                    }
                }
                label { class: "form-control",
                    span { class: "label-text", "Kategori" }
                    select {
                        class: "select select-bordered",
                        value: "{selected.filters.category()}",
                        onchange: move |evt| query.write().filters.set_category(evt.value()),
                        option { value: "", "Semua Kategori" }
                        for category in filter_categories.iter() {
                            option { key: "{category}", value: "{category}", "{category}" }
                        }
                    }
                }
                label { class: "label cursor-pointer gap-2",
                    input {
                        r#type: "checkbox",
                        class: "checkbox",
                        checked: selected.filters.low_stock_only(),
                        onchange: move |evt| query.write().filters.set_low_stock_only(evt.checked()),
                    }
                    span { class: "label-text", "Hanya stok menipis/kosong" }
                }
                input {
                    class: "input input-bordered",
                    r#type: "search",
                    placeholder: "Cari kode atau judul",
                    value: "{selected.search}",
                    oninput: move |evt| query.write().search = evt.value(),
                }
                button {
                    class: "btn btn-outline flex gap-2",
                    onclick: move |_| query.write().reset(),
                    Icon { width: 16, height: 16, icon: FaRotateLeft }
                    "Reset Filter"
                }
                button {
                    class: "btn btn-primary flex gap-2",
                    onclick: move |_| {
                        form.set(StockForm::default());
                        form_errors.set(FieldErrors::new());
                        form_mode.set(Some(FormMode::Create));
                    },
                    Icon { width: 16, height: 16, icon: FaPlus }
                    "Tambah Bahan Ajar"
                }
            }

            div { class: "overflow-x-auto",
                table { class: "table table-md",
                    thead {
                        tr {
                            SortHeader { label: "Kode", field: SortField::Code, query }
                            SortHeader { label: "Judul", field: SortField::Title, query }
                            th { "Kategori" }
                            th { "UPBJJ" }
                            th { "Lokasi Rak" }
                            SortHeader { label: "Harga", field: SortField::Price, query }
                            SortHeader { label: "Stok", field: SortField::Quantity, query }
                            th { "Safety" }
                            th { "Status" }
                            th { "Aksi" }
                        }
                    }
                    tbody {
                        if rows.is_empty() {
                            tr {
                                td { colspan: "10", class: "text-center opacity-70",
                                    "Tidak ada bahan ajar yang sesuai filter."
                                }
                            }
                        }
                        for item in rows {
                            StockRow {
                                key: "{item.code}",
                                item: item.clone(),
                                on_edit: move |item: StockItem| {
                                    form.set(StockForm::from(&item));
                                    form_errors.set(FieldErrors::new());
                                    form_mode.set(Some(FormMode::Edit));
                                },
                                on_delete: move |item: StockItem| pending_delete.set(Some(item)),
                            }
                        }
                    }
                }
            }
        }

        AppModal {
            show: mode.is_some(),
            title: if mode == Some(FormMode::Edit) { "Edit Bahan Ajar".to_string() } else { "Tambah Bahan Ajar".to_string() },
            on_close: move |_| {
                form_mode.set(None);
                form.set(StockForm::default());
                form_errors.set(FieldErrors::new());
            },
            form { class: "flex flex-col gap-2", onsubmit: save,
                label { class: "form-control",
                    span { class: "label-text", "Kode" }
                    input {
                        class: "input input-bordered",
                        value: "{current_form.code}",
                        disabled: mode == Some(FormMode::Edit),
                        oninput: move |evt| form.write().code = evt.value(),
                    }
                    FieldError { message: form_errors.read().get(&StockField::Code).map(str::to_string) }
                }
                label { class: "form-control",
                    span { class: "label-text", "Judul" }
                    input {
                        class: "input input-bordered",
                        value: "{current_form.title}",
                        oninput: move |evt| form.write().title = evt.value(),
                    }
                    FieldError { message: form_errors.read().get(&StockField::Title).map(str::to_string) }
                }
                div { class: "grid grid-cols-2 gap-2",
                    label { class: "form-control",
                        span { class: "label-text", "Kategori" }
                        select {
                            class: "select select-bordered",
                            value: "{current_form.category}",
                            onchange: move |evt| form.write().category = evt.value(),
                            option { value: "", "Pilih kategori" }
                            for category in categories.iter() {
                                option { key: "{category}", value: "{category}", "{category}" }
                            }
                        }
                        FieldError { message: form_errors.read().get(&StockField::Category).map(str::to_string) }
                    }
                    label { class: "form-control",
                        span { class: "label-text", "UPBJJ" }
                        select {
                            class: "select select-bordered",
                            value: "{current_form.region}",
                            onchange: move |evt| form.write().region = evt.value(),
                            option { value: "", "Pilih UPBJJ" }
                            for region in regions.iter() {
                                option { key: "{region}", value: "{region}", "{region}" }
                            }
                        }
                        FieldError { message: form_errors.read().get(&StockField::Region).map(str::to_string) }
                    }
                }
                label { class: "form-control",
                    span { class: "label-text", "Lokasi Rak" }
                    input {
                        class: "input input-bordered",
                        value: "{current_form.shelf_location}",
                        oninput: move |evt| form.write().shelf_location = evt.value(),
                    }
                    FieldError { message: form_errors.read().get(&StockField::ShelfLocation).map(str::to_string) }
                }
                div { class: "grid grid-cols-3 gap-2",
                    label { class: "form-control",
                        span { class: "label-text", "Harga" }
                        input {
                            class: "input input-bordered",
                            r#type: "number",
                            value: "{current_form.unit_price}",
                            oninput: move |evt| form.write().unit_price = evt.value(),
                        }
                        FieldError { message: form_errors.read().get(&StockField::Price).map(str::to_string) }
                    }
                    label { class: "form-control",
                        span { class: "label-text", "Stok" }
                        input {
                            class: "input input-bordered",
                            r#type: "number",
                            value: "{current_form.quantity}",
                            oninput: move |evt| form.write().quantity = evt.value(),
                        }
                        FieldError { message: form_errors.read().get(&StockField::Quantity).map(str::to_string) }
                    }
                    label { class: "form-control",
                        span { class: "label-text", "Safety Stock" }
                        input {
                            class: "input input-bordered",
                            r#type: "number",
                            value: "{current_form.safety_threshold}",
                            oninput: move |evt| form.write().safety_threshold = evt.value(),
                        }
                        FieldError { message: form_errors.read().get(&StockField::SafetyThreshold).map(str::to_string) }
                    }
                }
                label { class: "form-control",
                    span { class: "label-text", "Catatan (HTML)" }
                    textarea {
                        class: "textarea textarea-bordered",
                        value: "{current_form.note_html}",
                        oninput: move |evt| form.write().note_html = evt.value(),
                    }
                }
                div { class: "modal-action",
                    button { class: "btn btn-primary", r#type: "submit", "Simpan" }
                }
            }
        }

        AppModal {
            show: delete_target.is_some(),
            title: "Hapus Bahan Ajar".to_string(),
            confirm_label: "Hapus".to_string(),
            on_close: move |_| pending_delete.set(None),
            on_confirm: move |_| {
                let target = pending_delete.write().take();
                if let Some(item) = target {
                    state.write().session.delete_stock(&item.code);
                }
            },
            if let Some(item) = delete_target {
                p { "Hapus \"{item.title}\" ({item.code}) dari daftar stok?" }
            }
        }
    )
}

/// Column header that toggles the sort on click.
#[component]
fn SortHeader(label: &'static str, field: SortField, mut query: Signal<StockQuery>) -> Element {
    let indicator = SortSpec::indicator(query.read().sort, field);

    rsx!(
        th {
            class: "cursor-pointer select-none",
            onclick: move |_| {
                let current = query.read().sort;
                query.write().sort = Some(SortSpec::toggle(current, field));
            },
            "{label} {indicator}"
        }
    )
}

#[component]
fn StockRow(
    item: StockItem,
    on_edit: EventHandler<StockItem>,
    on_delete: EventHandler<StockItem>,
) -> Element {
    let edit_item = item.clone();
    let delete_item = item.clone();

    rsx!(
        tr {
            td { "{item.code}" }
            td { "{item.title}" }
            td { "{item.category}" }
            td { "{item.region}" }
            td { "{item.shelf_location}" }
            td { {format_rupiah(item.unit_price)} }
            td { {format_qty(item.quantity)} }
            td { {format_qty(item.safety_threshold)} }
            td {
                StatusBadge {
                    quantity: item.quantity,
                    safety: item.safety_threshold,
                    note: item.note_html.clone(),
                }
            }
            td {
                div { class: "flex gap-1",
                    button {
                        class: "btn btn-xs btn-outline",
                        onclick: move |_| on_edit.call(edit_item.clone()),
                        Icon { width: 12, height: 12, icon: FaPen }
                    }
                    button {
                        class: "btn btn-xs btn-error btn-outline",
                        onclick: move |_| on_delete.call(delete_item.clone()),
                        Icon { width: 12, height: 12, icon: FaTrash }
                    }
                }
            }
        }
    )
}
