//! In-memory session store.
//!
//! The dataset is loaded once and then owned here for the rest of the page session. Stock items
//! are keyed by code and orders by DO number; edits replace by key and deletes remove by key.
//! Every derived view is recomputed from these collections, nothing is cached alongside them.

use chrono::{Datelike, NaiveDateTime};
use dioxus_logger::tracing;

use crate::{
    engine::{
        numbering::next_do_number,
        validation::{validate_order_form, validate_stock_form, FormMode},
        view::StockSummary,
    },
    error::{Error, ValidationError},
    model::{
        dataset::Dataset,
        reference::{Package, ShippingOption},
        stock::{StockForm, StockItem},
        tracking::{DeliveryStatus, JourneyEntry, OrderForm, TrackingRecord},
    },
    util::format::format_datetime,
};

/// Journey note recorded when an order is created.
pub const ORDER_CREATED_NOTE: &str = "Order dibuat - Menunggu proses pengiriman";

/// Owned collections of the current page session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    dataset: Dataset,
    /// Orders submitted in this session, newest first.
    recent_orders: Vec<TrackingRecord>,
}

impl Session {
    pub fn new(dataset: Dataset) -> Self {
        tracing::info!(
            "Session loaded: {} stock items, {} tracking records",
            dataset.stock.len(),
            dataset.tracking.len()
        );
        Self {
            dataset,
            recent_orders: Vec::new(),
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn stock(&self) -> &[StockItem] {
        &self.dataset.stock
    }

    pub fn tracking(&self) -> &[TrackingRecord] {
        &self.dataset.tracking
    }

    pub fn recent_orders(&self) -> &[TrackingRecord] {
        &self.recent_orders
    }

    pub fn regions(&self) -> &[String] {
        &self.dataset.regions
    }

    pub fn categories(&self) -> &[String] {
        &self.dataset.categories
    }

    pub fn packages(&self) -> &[Package] {
        &self.dataset.packages
    }

    pub fn shipping_options(&self) -> &[ShippingOption] {
        &self.dataset.shipping_options
    }

    pub fn summary(&self) -> StockSummary {
        StockSummary::from_items(&self.dataset.stock)
    }

    pub fn find_stock(&self, code: &str) -> Option<&StockItem> {
        self.dataset.stock.iter().find(|item| item.code == code)
    }

    pub fn find_package(&self, code: &str) -> Option<&Package> {
        self.dataset.packages.iter().find(|package| package.code == code)
    }

    pub fn find_order(&self, do_number: &str) -> Option<&TrackingRecord> {
        self.dataset
            .tracking
            .iter()
            .find(|record| record.do_number == do_number)
    }

    /// Title of the stock item with `code`, or the code itself when it is unknown.
    pub fn stock_title<'a>(&'a self, code: &'a str) -> &'a str {
        self.find_stock(code)
            .map(|item| item.title.as_str())
            .unwrap_or(code)
    }

    /// Display name of a shipping option, or the raw code when it is unknown.
    pub fn shipping_name(&self, code: &str) -> String {
        self.dataset
            .shipping_options
            .iter()
            .find(|option| option.code == code)
            .map(ShippingOption::display_name)
            .unwrap_or_else(|| code.to_string())
    }

    /// Validates a new stock item and appends it to the collection.
    ///
    /// # Returns
    /// - `Ok(&StockItem)` - The stored item
    /// - `Err(Error::ValidationError)` - The form has errors, including a duplicate code
    pub fn add_stock(&mut self, form: StockForm) -> Result<&StockItem, Error> {
        let errors = validate_stock_form(
            &form,
            self.dataset.stock.iter().map(|item| item.code.as_str()),
            FormMode::Create,
        );
        if !errors.is_valid() {
            return Err(ValidationError::Stock(errors).into());
        }

        self.dataset.stock.push(form.into_item());
        tracing::info!("Stock list updated. Total items: {}", self.dataset.stock.len());

        Ok(&self.dataset.stock[self.dataset.stock.len() - 1])
    }

    /// Validates an edited stock item and replaces the item with the same code.
    ///
    /// # Returns
    /// - `Ok(&StockItem)` - The replaced item
    /// - `Err(Error::ValidationError)` - The form has errors
    /// - `Err(Error::NotFound)` - No item has the form's code
    pub fn update_stock(&mut self, form: StockForm) -> Result<&StockItem, Error> {
        let errors = validate_stock_form(&form, [], FormMode::Edit);
        if !errors.is_valid() {
            return Err(ValidationError::Stock(errors).into());
        }

        let item = form.into_item();
        let index = self
            .dataset
            .stock
            .iter()
            .position(|existing| existing.code == item.code)
            .ok_or_else(|| Error::NotFound {
                kind: "stock",
                key: item.code.clone(),
            })?;

        self.dataset.stock[index] = item;
        tracing::info!(
            "Stock item {} updated. Total items: {}",
            self.dataset.stock[index].code,
            self.dataset.stock.len()
        );

        Ok(&self.dataset.stock[index])
    }

    /// Removes the stock item with `code`, returning it if it existed.
    pub fn delete_stock(&mut self, code: &str) -> Option<StockItem> {
        let index = self.dataset.stock.iter().position(|item| item.code == code)?;
        let removed = self.dataset.stock.remove(index);
        tracing::info!("Stock list updated. Total items: {}", self.dataset.stock.len());
        Some(removed)
    }

    /// DO number the next order created in `year` will receive.
    ///
    /// Considers the loaded records and the orders submitted in this session.
    pub fn next_do_number(&self, year: i32) -> String {
        let existing = self
            .dataset
            .tracking
            .iter()
            .chain(self.recent_orders.iter())
            .map(|record| record.do_number.as_str());
        next_do_number(existing, year)
    }

    /// Validates and records a new delivery order.
    ///
    /// The order gets the next DO number for the year of `now`, status Pending, the selected
    /// package's price as its total and a creation entry in its journey.
    ///
    /// # Returns
    /// - `Ok(&TrackingRecord)` - The stored order
    /// - `Err(Error::ValidationError)` - The form has errors
    pub fn submit_order(
        &mut self,
        form: &OrderForm,
        now: NaiveDateTime,
    ) -> Result<&TrackingRecord, Error> {
        let errors = validate_order_form(form);
        let ship_date = match form.ship_date {
            Some(ship_date) if errors.is_valid() => ship_date,
            _ => return Err(ValidationError::Order(errors).into()),
        };

        let total = self
            .find_package(&form.package_code)
            .map(|package| package.price)
            .unwrap_or(0);

        let order = TrackingRecord {
            do_number: self.next_do_number(now.year()),
            student_id: form.student_id.trim().to_string(),
            student_name: form.student_name.trim().to_string(),
            status: DeliveryStatus::Pending,
            shipping_code: form.shipping_code.clone(),
            package_code: form.package_code.clone(),
            ship_date,
            total,
            journey: vec![JourneyEntry {
                timestamp: format_datetime(now),
                note: ORDER_CREATED_NOTE.to_string(),
            }],
        };

        tracing::info!(
            "New order added: {}. Total tracking records: {}",
            order.do_number,
            self.dataset.tracking.len() + 1
        );
        self.recent_orders.insert(0, order.clone());
        self.dataset.tracking.push(order);

        Ok(&self.dataset.tracking[self.dataset.tracking.len() - 1])
    }

    /// Appends a progress note to an order's journey.
    ///
    /// # Returns
    /// - `Ok(&TrackingRecord)` - The updated order
    /// - `Err(Error::ValidationError)` - The note is blank
    /// - `Err(Error::NotFound)` - No order has `do_number`
    pub fn append_journey(
        &mut self,
        do_number: &str,
        note: &str,
        now: NaiveDateTime,
    ) -> Result<&TrackingRecord, Error> {
        let note = note.trim();
        if note.is_empty() {
            return Err(ValidationError::Journey(
                "Silakan masukkan keterangan progress".to_string(),
            )
            .into());
        }

        let entry = JourneyEntry {
            timestamp: format_datetime(now),
            note: note.to_string(),
        };

        if let Some(recent) = self
            .recent_orders
            .iter_mut()
            .find(|record| record.do_number == do_number)
        {
            recent.journey.push(entry.clone());
        }

        let record = self
            .dataset
            .tracking
            .iter_mut()
            .find(|record| record.do_number == do_number)
            .ok_or_else(|| Error::NotFound {
                kind: "tracking",
                key: do_number.to_string(),
            })?;
        record.journey.push(entry);
        tracing::info!(
            "Tracking {} updated: {} journey entries",
            record.do_number,
            record.journey.len()
        );

        Ok(&*record)
    }
}
