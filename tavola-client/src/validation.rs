//! Input validation helpers
//!
//! Required-field and limit checks run before anything is sent to the
//! backend. Limits:
//! - Names: 200 chars
//! - Notes and descriptions: 500 chars
//! - Quantity per line: 9999

use shared::models::{DiningTableCreate, DiningTableUpdate, MenuItemCreate, MenuItemUpdate};
use shared::Decimal;

use crate::{ClientError, ClientResult};

// ── Limits ──────────────────────────────────────────────────────────

/// Menu item names and categories
pub const MAX_NAME_LEN: usize = 200;

/// Line notes and item descriptions
pub const MAX_NOTE_LEN: usize = 500;

/// Maximum allowed quantity per order line
pub const MAX_QUANTITY: i32 = 9999;

// ── Field helpers ───────────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> ClientResult<()> {
    if value.trim().is_empty() {
        return Err(ClientError::validation(format!("{field} must not be empty")));
    }
    validate_text_len(value, field, max_len)
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(value: Option<&str>, field: &str, max_len: usize) -> ClientResult<()> {
    match value {
        Some(v) => validate_text_len(v, field, max_len),
        None => Ok(()),
    }
}

fn validate_text_len(value: &str, field: &str, max_len: usize) -> ClientResult<()> {
    let len = value.chars().count();
    if len > max_len {
        return Err(ClientError::validation(format!(
            "{field} is too long ({len} chars, max {max_len})"
        )));
    }
    Ok(())
}

pub fn validate_price(price: Decimal) -> ClientResult<()> {
    if price < Decimal::ZERO {
        return Err(ClientError::validation(format!(
            "price must be non-negative, got {price}"
        )));
    }
    Ok(())
}

pub fn validate_positive(value: i32, field: &str) -> ClientResult<()> {
    if value < 1 {
        return Err(ClientError::validation(format!(
            "{field} must be at least 1, got {value}"
        )));
    }
    Ok(())
}

pub fn validate_quantity(quantity: i32) -> ClientResult<()> {
    validate_positive(quantity, "quantity")?;
    if quantity > MAX_QUANTITY {
        return Err(ClientError::validation(format!(
            "quantity exceeds maximum allowed ({MAX_QUANTITY}), got {quantity}"
        )));
    }
    Ok(())
}

// ── Payloads ────────────────────────────────────────────────────────

fn validate_menu_fields(
    name: &str,
    description: Option<&str>,
    price: Decimal,
    category: &str,
) -> ClientResult<()> {
    validate_required_text(name, "name", MAX_NAME_LEN)?;
    validate_optional_text(description, "description", MAX_NOTE_LEN)?;
    validate_price(price)?;
    validate_required_text(category, "category", MAX_NAME_LEN)
}

pub fn validate_menu_item_create(payload: &MenuItemCreate) -> ClientResult<()> {
    validate_menu_fields(
        &payload.name,
        payload.description.as_deref(),
        payload.price,
        &payload.category,
    )
}

pub fn validate_menu_item_update(payload: &MenuItemUpdate) -> ClientResult<()> {
    validate_menu_fields(
        &payload.name,
        payload.description.as_deref(),
        payload.price,
        &payload.category,
    )
}

pub fn validate_table_create(payload: &DiningTableCreate) -> ClientResult<()> {
    validate_positive(payload.table_number, "table number")?;
    validate_positive(payload.capacity, "capacity")
}

pub fn validate_table_update(payload: &DiningTableUpdate) -> ClientResult<()> {
    validate_positive(payload.table_number, "table number")?;
    validate_positive(payload.capacity, "capacity")
}
