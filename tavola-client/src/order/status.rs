//! Order status machine
//!
//! The lifecycle itself lives on [`OrderStatus`]; this module drives one step
//! of it through the backend.

use shared::models::{Order, OrderStatus};

use crate::ClientResult;
use crate::api::RestaurantApi;

/// Result of asking to advance an order
#[derive(Debug, Clone, PartialEq)]
pub enum AdvanceOutcome {
    /// The backend applied the next status; carries the updated order
    Advanced(Order),
    /// The order is `PAID` or in an unrecognized status; nothing was sent
    NoActionAvailable,
}

/// The status that follows `current`, if any
pub fn next_status(current: &OrderStatus) -> Option<OrderStatus> {
    current.next()
}

/// Move `order` one step forward
///
/// A failed call is returned as-is; nothing is retried.
pub async fn advance<A>(api: &A, order: &Order) -> ClientResult<AdvanceOutcome>
where
    A: RestaurantApi + ?Sized,
{
    let Some(next) = next_status(&order.status) else {
        tracing::debug!(order_id = order.id, status = %order.status, "No further status");
        return Ok(AdvanceOutcome::NoActionAvailable);
    };

    let updated = api.update_order_status(order.id, &next).await?;
    tracing::info!(
        order_id = order.id,
        from = %order.status,
        to = %updated.status,
        "Order status advanced"
    );
    Ok(AdvanceOutcome::Advanced(updated))
}
