//! Order board
//!
//! Controller behind the order list view: the list of orders, the order whose
//! detail panel is open, and the status actions on them.
//!
//! The list is refreshed explicitly or by the poller ([`OrderBoard::apply_poll`]).
//! The detail panel is only ever refreshed explicitly: after a status change
//! on that same order, or by selecting it again.

use shared::models::Order;

use super::status::{self, AdvanceOutcome};
use crate::ClientResult;
use crate::api::RestaurantApi;

#[derive(Debug, Clone, Default)]
pub struct OrderBoard {
    orders: Vec<Order>,
    selected: Option<Order>,
}

impl OrderBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn selected(&self) -> Option<&Order> {
        self.selected.as_ref()
    }

    pub fn find(&self, order_id: i64) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == order_id)
    }

    /// Re-read the order list; on failure the current list is kept
    #[tracing::instrument(skip_all)]
    pub async fn refresh<A>(&mut self, api: &A) -> ClientResult<()>
    where
        A: RestaurantApi + ?Sized,
    {
        match api.list_orders().await {
            Ok(orders) => {
                tracing::debug!(count = orders.len(), "Order list refreshed");
                self.orders = orders;
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch orders");
                Err(e)
            }
        }
    }

    /// Replace the list with a poll result; the detail panel is left alone
    pub fn apply_poll(&mut self, orders: Vec<Order>) {
        self.orders = orders;
    }

    /// Open the detail panel for an order, fetching it fresh
    #[tracing::instrument(skip(self, api))]
    pub async fn select<A>(&mut self, api: &A, order_id: i64) -> ClientResult<&Order>
    where
        A: RestaurantApi + ?Sized,
    {
        match api.get_order(order_id).await {
            Ok(order) => Ok(&*self.selected.insert(order)),
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch order details");
                Err(e)
            }
        }
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
    }

    /// Advance an order shown on the board by one status
    ///
    /// Orders that are neither listed nor selected, `PAID` orders and orders in
    /// an unknown status yield [`AdvanceOutcome::NoActionAvailable`] without
    /// contacting the backend. After a successful update the list is re-read
    /// and, if the order's detail panel is open, the detail as well. A failed
    /// update leaves the board untouched.
    #[tracing::instrument(skip(self, api))]
    pub async fn advance<A>(&mut self, api: &A, order_id: i64) -> ClientResult<AdvanceOutcome>
    where
        A: RestaurantApi + ?Sized,
    {
        let Some(order) = self
            .find(order_id)
            .or(self.selected.as_ref().filter(|o| o.id == order_id))
            .cloned()
        else {
            tracing::warn!("Order is not on the board");
            return Ok(AdvanceOutcome::NoActionAvailable);
        };

        let outcome = match status::advance(api, &order).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!(error = %e, "Failed to update order status");
                return Err(e);
            }
        };

        if let AdvanceOutcome::Advanced(updated) = &outcome {
            self.reread_after_update(api, updated).await;
        }
        Ok(outcome)
    }

    /// Canonical re-read after a successful status change
    async fn reread_after_update<A>(&mut self, api: &A, updated: &Order)
    where
        A: RestaurantApi + ?Sized,
    {
        if let Some(slot) = self.orders.iter_mut().find(|o| o.id == updated.id) {
            *slot = updated.clone();
        }
        if let Err(e) = self.refresh(api).await {
            tracing::warn!(error = %e, "Order list not re-read after status change");
        }

        if self.selected.as_ref().is_some_and(|o| o.id == updated.id) {
            self.selected = Some(updated.clone());
            if let Err(e) = self.select(api, updated.id).await {
                tracing::warn!(error = %e, "Order detail not re-read after status change");
            }
        }
    }
}
