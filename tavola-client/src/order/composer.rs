//! Order composer
//!
//! Controller for one table's order-creation flow. It owns the table, the menu
//! snapshot, the category selection and the draft; the view reads them by
//! reference and forwards user actions.

use shared::models::{DiningTable, MenuItem, Order};

use super::catalog::{CategoryFilter, MenuCatalog};
use super::draft::OrderDraft;
use crate::ClientResult;
use crate::api::RestaurantApi;

/// Why a submission did not reach the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitBlock {
    /// No items were added
    EmptyDraft,
}

impl SubmitBlock {
    /// Notice shown to the user
    pub fn message(&self) -> &'static str {
        match self {
            Self::EmptyDraft => "Please add items to the order",
        }
    }
}

/// Result of a submission attempt
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Created(Order),
    Blocked(SubmitBlock),
}

pub struct OrderComposer {
    table: DiningTable,
    catalog: MenuCatalog,
    filter: CategoryFilter,
    draft: OrderDraft,
}

impl OrderComposer {
    pub fn new(table: DiningTable, menu: Vec<MenuItem>) -> Self {
        let draft = OrderDraft::new(table.id);
        Self {
            table,
            catalog: MenuCatalog::new(menu),
            filter: CategoryFilter::All,
            draft,
        }
    }

    /// Fetch the table and the menu and start an empty draft
    #[tracing::instrument(skip(api))]
    pub async fn load<A>(api: &A, table_id: i64) -> ClientResult<Self>
    where
        A: RestaurantApi + ?Sized,
    {
        let table = api.get_table(table_id).await?;
        let menu = api.list_menu_items().await?;
        tracing::debug!(items = menu.len(), "Menu loaded");
        Ok(Self::new(table, menu))
    }

    pub fn table(&self) -> &DiningTable {
        &self.table
    }

    pub fn catalog(&self) -> &MenuCatalog {
        &self.catalog
    }

    pub fn draft(&self) -> &OrderDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut OrderDraft {
        &mut self.draft
    }

    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: impl Into<CategoryFilter>) {
        self.filter = filter.into();
    }

    /// Menu items under the current category selection
    pub fn visible_items(&self) -> Vec<&MenuItem> {
        self.catalog.filter_by_category(&self.filter)
    }

    /// Add one portion of a catalog item; returns `false` for an unknown id
    pub fn add_menu_item(&mut self, menu_item_id: i64) -> bool {
        match self.catalog.get(menu_item_id) {
            Some(item) => {
                self.draft.add_item(item);
                true
            }
            None => false,
        }
    }

    /// Send the draft to the backend
    ///
    /// An empty draft is blocked without a request. On success the draft is
    /// discarded; on failure it is kept so the user can try again.
    #[tracing::instrument(skip(self, api), fields(table_id = self.table.id))]
    pub async fn submit<A>(&mut self, api: &A) -> ClientResult<SubmitOutcome>
    where
        A: RestaurantApi + ?Sized,
    {
        if self.draft.is_empty() {
            tracing::debug!("Submission blocked: empty draft");
            return Ok(SubmitOutcome::Blocked(SubmitBlock::EmptyDraft));
        }
        self.draft.validate()?;

        match api
            .create_order(self.draft.table_id(), &self.draft.to_payload())
            .await
        {
            Ok(order) => {
                if order.total_amount != self.draft.total() {
                    tracing::warn!(
                        order_id = order.id,
                        draft_total = %self.draft.total(),
                        order_total = %order.total_amount,
                        "Backend total differs from draft"
                    );
                }
                self.draft.clear();
                Ok(SubmitOutcome::Created(order))
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to create order");
                Err(e)
            }
        }
    }
}
