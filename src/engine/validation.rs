//! Stock and order form validation.
//!
//! Validators never stop at the first problem: every field is checked and every message is
//! returned in a [`FieldErrors`] map that the form renders beside the matching input.

use std::{collections::BTreeMap, fmt};

use crate::model::{
    stock::{parse_whole_number, StockForm},
    tracking::OrderForm,
};

/// Validation messages keyed by form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldErrors<F: Ord> {
    errors: BTreeMap<F, String>,
}

impl<F: Ord> FieldErrors<F> {
    pub fn new() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, field: F, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn get(&self, field: &F) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &F) -> bool {
        self.errors.contains_key(field)
    }

    /// True when no field has an error.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&F, &str)> {
        self.errors.iter().map(|(field, message)| (field, message.as_str()))
    }
}

impl<F: Ord> Default for FieldErrors<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Ord + fmt::Display> fmt::Display for FieldErrors<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (field, message)) in self.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, message)?;
        }
        Ok(())
    }
}

/// Inputs of the add/edit stock form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StockField {
    Code,
    Title,
    Category,
    Region,
    ShelfLocation,
    Price,
    Quantity,
    SafetyThreshold,
}

impl fmt::Display for StockField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Code => "kode",
            Self::Title => "judul",
            Self::Category => "kategori",
            Self::Region => "upbjj",
            Self::ShelfLocation => "lokasiRak",
            Self::Price => "harga",
            Self::Quantity => "qty",
            Self::SafetyThreshold => "safety",
        })
    }
}

/// Inputs of the new delivery order form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OrderField {
    StudentId,
    StudentName,
    Shipping,
    Package,
    ShipDate,
}

impl fmt::Display for OrderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::StudentId => "nim",
            Self::StudentName => "nama",
            Self::Shipping => "ekspedisi",
            Self::Package => "paket",
            Self::ShipDate => "tanggalKirim",
        })
    }
}

/// Whether the stock form creates a new item or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    /// The code is the item's identity and cannot change, so it is not checked for duplicates.
    Edit,
}

/// Validates the add/edit stock form.
///
/// # Arguments
/// - `form` - Values entered in the form
/// - `existing_codes` - Codes already in the session's stock collection
/// - `mode` - Duplicate codes are only rejected in [`FormMode::Create`]
///
/// # Returns
/// The errors found; [`FieldErrors::is_valid`] is true when the form can be saved.
pub fn validate_stock_form<'a, I>(
    form: &StockForm,
    existing_codes: I,
    mode: FormMode,
) -> FieldErrors<StockField>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut errors = FieldErrors::new();

    let code = form.code.trim();
    if code.is_empty() {
        errors.insert(StockField::Code, "Kode wajib diisi");
    } else if mode == FormMode::Create && existing_codes.into_iter().any(|c| c == code) {
        errors.insert(StockField::Code, "Kode sudah ada");
    }

    if form.title.trim().is_empty() {
        errors.insert(StockField::Title, "Judul wajib diisi");
    }
    if form.category.trim().is_empty() {
        errors.insert(StockField::Category, "Kategori wajib dipilih");
    }
    if form.region.trim().is_empty() {
        errors.insert(StockField::Region, "Region wajib dipilih");
    }
    if form.shelf_location.trim().is_empty() {
        errors.insert(StockField::ShelfLocation, "Lokasi rak wajib diisi");
    }

    check_whole_number(&mut errors, StockField::Price, &form.unit_price, "Harga");
    check_whole_number(&mut errors, StockField::Quantity, &form.quantity, "Stok");
    check_whole_number(
        &mut errors,
        StockField::SafetyThreshold,
        &form.safety_threshold,
        "Safety stock",
    );

    errors
}

/// Requires `raw` to be a non-negative whole number, naming the input `label` in messages.
fn check_whole_number(
    errors: &mut FieldErrors<StockField>,
    field: StockField,
    raw: &str,
    label: &str,
) {
    if raw.trim().is_empty() {
        errors.insert(field, format!("{} wajib diisi", label));
        return;
    }

    match parse_whole_number(raw) {
        None => errors.insert(field, format!("{} harus berupa bilangan bulat", label)),
        Some(value) if value < 0 => errors.insert(field, format!("{} tidak boleh negatif", label)),
        Some(_) => {}
    }
}

/// Validates the new delivery order form.
///
/// Student id and name are checked after trimming, which is also how they are stored.
pub fn validate_order_form(form: &OrderForm) -> FieldErrors<OrderField> {
    let mut errors = FieldErrors::new();

    let student_id = form.student_id.trim();
    if student_id.is_empty() {
        errors.insert(OrderField::StudentId, "NIM wajib diisi");
    } else if !student_id.chars().all(|c| c.is_ascii_digit()) {
        errors.insert(OrderField::StudentId, "NIM harus berupa angka");
    }

    let student_name = form.student_name.trim();
    if student_name.is_empty() {
        errors.insert(OrderField::StudentName, "Nama wajib diisi");
    } else if student_name.chars().count() < 3 {
        errors.insert(OrderField::StudentName, "Nama minimal 3 karakter");
    }

    if form.shipping_code.is_empty() {
        errors.insert(OrderField::Shipping, "Ekspedisi wajib dipilih");
    }
    if form.package_code.is_empty() {
        errors.insert(OrderField::Package, "Paket wajib dipilih");
    }
    if form.ship_date.is_none() {
        errors.insert(OrderField::ShipDate, "Tanggal kirim wajib diisi");
    }

    errors
}
