use crate::models::{
    error::AppError,
    order::{CustomerId, Order},
    view_state::OrderAction,
};
use crate::services::api::OrderApi;

/// Result of a delete followed by a refetch.
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    /// The delete returned 200 and the list was fetched again
    Reloaded(Vec<Order>),
    /// Either step failed; the view keeps its current orders
    Failed(AppError),
}

/// Fetches the order list and turns the result into a view action.
pub async fn load_orders<A: OrderApi>(api: &A) -> OrderAction {
    match api.fetch_orders().await {
        Ok(orders) => OrderAction::LoadSucceeded(orders),
        Err(e) => OrderAction::LoadFailed(e.to_string()),
    }
}

/// Deletes one order and, only if that succeeded, refetches the full list.
///
/// Nothing is removed locally: the table is only ever replaced by what the
/// server returns afterwards.
pub async fn delete_then_reload<A: OrderApi>(api: &A, customer_id: &CustomerId) -> DeleteOutcome {
    match reload_after_delete(api, customer_id).await {
        Ok(orders) => DeleteOutcome::Reloaded(orders),
        Err(e) => DeleteOutcome::Failed(e),
    }
}

async fn reload_after_delete<A: OrderApi>(
    api: &A,
    customer_id: &CustomerId,
) -> Result<Vec<Order>, AppError> {
    api.delete_order(customer_id).await?;
    api.fetch_orders().await
}
