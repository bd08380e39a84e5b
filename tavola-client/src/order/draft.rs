//! Order draft builder
//!
//! An [`OrderDraft`] collects the selections for one table before submission.
//! It lives only on the client and is discarded once the order is created.
//!
//! Rules:
//! - at most one line per menu item; adding a present item bumps its quantity
//! - quantities never drop below 1 (lower requests are ignored, the line stays)
//! - the total is recomputed from the lines on every call

use shared::models::{MenuItem, OrderLineInput};
use shared::{Decimal, money};

use crate::ClientResult;
use crate::validation::{MAX_NOTE_LEN, validate_optional_text, validate_quantity};

/// One selection in a draft
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLineDraft {
    pub menu_item: MenuItem,
    pub quantity: i32,
    pub note: String,
}

impl OrderLineDraft {
    fn new(menu_item: MenuItem) -> Self {
        Self {
            menu_item,
            quantity: 1,
            note: String::new(),
        }
    }

    pub fn menu_item_id(&self) -> i64 {
        self.menu_item.id
    }

    pub fn line_total(&self) -> Decimal {
        money::line_total(self.menu_item.price, self.quantity)
    }

    fn to_input(&self) -> OrderLineInput {
        OrderLineInput {
            menu_item: self.menu_item.clone(),
            quantity: self.quantity,
            special_instructions: self.note.clone(),
        }
    }
}

/// In-progress order for one table
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    table_id: i64,
    lines: Vec<OrderLineDraft>,
}

impl OrderDraft {
    pub fn new(table_id: i64) -> Self {
        Self {
            table_id,
            lines: Vec::new(),
        }
    }

    pub fn table_id(&self) -> i64 {
        self.table_id
    }

    pub fn lines(&self) -> &[OrderLineDraft] {
        &self.lines
    }

    pub fn line(&self, menu_item_id: i64) -> Option<&OrderLineDraft> {
        self.lines.iter().find(|l| l.menu_item_id() == menu_item_id)
    }

    fn line_mut(&mut self, menu_item_id: i64) -> Option<&mut OrderLineDraft> {
        self.lines
            .iter_mut()
            .find(|l| l.menu_item_id() == menu_item_id)
    }

    /// Add one portion of `menu_item`
    pub fn add_item(&mut self, menu_item: &MenuItem) {
        match self.line_mut(menu_item.id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(OrderLineDraft::new(menu_item.clone())),
        }
    }

    /// Drop the line for `menu_item_id`, if any
    pub fn remove_item(&mut self, menu_item_id: i64) {
        self.lines.retain(|l| l.menu_item_id() != menu_item_id);
    }

    /// Replace a line's quantity; values below 1 are ignored
    pub fn set_quantity(&mut self, menu_item_id: i64, quantity: i32) {
        if quantity < 1 {
            return;
        }
        if let Some(line) = self.line_mut(menu_item_id) {
            line.quantity = quantity;
        }
    }

    /// Replace a line's note
    pub fn set_note(&mut self, menu_item_id: i64, text: impl Into<String>) {
        if let Some(line) = self.line_mut(menu_item_id) {
            line.note = text.into();
        }
    }

    /// Σ price × quantity over the current lines
    pub fn total(&self) -> Decimal {
        money::sum(self.lines.iter().map(OrderLineDraft::line_total))
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of portions across all lines
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|l| i64::from(l.quantity)).sum()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Check line limits before the draft is sent
    pub fn validate(&self) -> ClientResult<()> {
        for line in &self.lines {
            validate_quantity(line.quantity)?;
            validate_optional_text(Some(line.note.as_str()), "note", MAX_NOTE_LEN)?;
        }
        Ok(())
    }

    /// Request body for `POST /orders/table/{tableId}`
    pub fn to_payload(&self) -> Vec<OrderLineInput> {
        self.lines.iter().map(OrderLineDraft::to_input).collect()
    }
}
