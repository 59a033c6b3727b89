use std::rc::Rc;

use super::order::Order;
use super::revenue::{RevenuePoint, compute_revenue};
use crate::config::Config;

/// Progress of the order list fetch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    /// Rendered exactly like `Loaded` with whatever orders were there before
    LoadFailed,
}

/// Visibility of the order detail modal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Hidden,
    Visible,
}

/// Events that move the view from one state to the next.
#[derive(Clone, Debug, PartialEq)]
pub enum OrderAction {
    LoadStarted,
    LoadSucceeded(Vec<Order>),
    LoadFailed(String),
    /// Fresh list fetched after a successful delete
    Reloaded(Vec<Order>),
    Select(Order),
    CloseModal,
    /// Opens the delete confirmation for a row, by position in `orders`
    RequestDelete(usize),
    CancelDelete,
    ConfirmDelete,
    ChangePage(usize),
}

/// Everything the order list view needs to render.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewState {
    pub phase: LoadPhase,
    pub orders: Rc<Vec<Order>>,
    /// Last record opened for viewing; survives closing the modal
    pub selected: Option<Order>,
    pub modal: ModalState,
    /// Zero-based table page
    pub page: usize,
    /// Position in `orders` of the row whose delete confirmation is open
    pub pending_delete: Option<usize>,
}

impl ViewState {
    /// Returns the state that follows `action`.
    pub fn apply(&self, action: OrderAction) -> Self {
        let mut next = self.clone();

        match action {
            OrderAction::LoadStarted => next.phase = LoadPhase::Loading,
            OrderAction::LoadSucceeded(orders) | OrderAction::Reloaded(orders) => {
                next.phase = LoadPhase::Loaded;
                next.replace_orders(orders);
            }
            OrderAction::LoadFailed(_) => next.phase = LoadPhase::LoadFailed,
            OrderAction::Select(order) => {
                next.selected = Some(order);
                next.modal = ModalState::Visible;
            }
            OrderAction::CloseModal => next.modal = ModalState::Hidden,
            OrderAction::RequestDelete(row) => next.pending_delete = Some(row),
            OrderAction::CancelDelete | OrderAction::ConfirmDelete => next.pending_delete = None,
            OrderAction::ChangePage(page) => next.page = page.min(next.last_page()),
        }

        next
    }

    /// True only while the list fetch is in flight
    pub fn loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    pub fn modal_visible(&self) -> bool {
        self.modal == ModalState::Visible
    }

    /// Table rows before pagination.
    pub fn row_count(&self) -> usize {
        self.orders.len()
    }

    /// Number of table pages; an empty table still has one page.
    pub fn total_pages(&self) -> usize {
        self.row_count().div_ceil(Config::PAGE_SIZE).max(1)
    }

    /// Position in `orders` of the first row on the current page.
    pub fn first_row(&self) -> usize {
        (self.page * Config::PAGE_SIZE).min(self.orders.len())
    }

    /// Rows visible on the current page.
    pub fn page_orders(&self) -> &[Order] {
        let start = self.first_row();
        let end = (start + Config::PAGE_SIZE).min(self.orders.len());
        &self.orders[start..end]
    }

    pub fn revenue(&self) -> Vec<RevenuePoint> {
        compute_revenue(&self.orders)
    }

    fn last_page(&self) -> usize {
        self.total_pages() - 1
    }

    fn replace_orders(&mut self, orders: Vec<Order>) {
        self.orders = Rc::new(orders);
        self.page = self.page.min(self.last_page());
        // Row positions no longer refer to the same records
        self.pending_delete = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::order::CustomerId;

    fn orders(n: i64) -> Vec<Order> {
        (1..=n)
            .map(|i| Order::new(i, format!("Item {i}"), 1.0, i as f64, i as f64))
            .collect()
    }

    #[test]
    fn test_initial_state() {
        let state = ViewState::default();
        assert_eq!(state.phase, LoadPhase::Idle);
        assert_eq!(state.modal, ModalState::Hidden);
        assert!(!state.loading());
        assert_eq!(state.row_count(), 0);
        assert_eq!(state.total_pages(), 1);
        assert!(state.page_orders().is_empty());
    }

    #[test]
    fn test_pages_of_two() {
        let state = ViewState::default().apply(OrderAction::LoadSucceeded(orders(5)));
        assert_eq!(state.total_pages(), 3);
        assert_eq!(state.page_orders().len(), 2);

        let last = state.apply(OrderAction::ChangePage(2));
        assert_eq!(last.page_orders().len(), 1);
        assert_eq!(last.page_orders()[0].customer_id, CustomerId::from(5));
    }

    #[test]
    fn test_change_page_is_clamped() {
        let state = ViewState::default()
            .apply(OrderAction::LoadSucceeded(orders(3)))
            .apply(OrderAction::ChangePage(10));
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_shrinking_list_moves_to_last_page() {
        let state = ViewState::default()
            .apply(OrderAction::LoadSucceeded(orders(5)))
            .apply(OrderAction::ChangePage(2))
            .apply(OrderAction::Reloaded(orders(2)));
        assert_eq!(state.page, 0);
        assert_eq!(state.page_orders().len(), 2);
    }

    #[test]
    fn test_delete_confirmation_lifecycle() {
        let state = ViewState::default()
            .apply(OrderAction::LoadSucceeded(orders(2)))
            .apply(OrderAction::RequestDelete(1));
        assert_eq!(state.pending_delete, Some(1));

        assert_eq!(state.apply(OrderAction::CancelDelete).pending_delete, None);
        assert_eq!(state.apply(OrderAction::ConfirmDelete).pending_delete, None);
    }

    #[test]
    fn test_delete_confirmation_follows_row_not_id() {
        let shared = vec![
            Order::new(1, "Ball", 10.0, 3.0, 30.0),
            Order::new(1, "Bone", 2.5, 2.0, 5.0),
        ];
        let state = ViewState::default()
            .apply(OrderAction::LoadSucceeded(shared))
            .apply(OrderAction::RequestDelete(1));

        assert_eq!(state.pending_delete, Some(1));
        assert_eq!(state.page_orders()[1].product, "Bone");
    }

    #[test]
    fn test_dismissing_confirmation_keeps_rows() {
        let state = ViewState::default()
            .apply(OrderAction::LoadSucceeded(orders(3)))
            .apply(OrderAction::RequestDelete(0))
            .apply(OrderAction::CancelDelete);

        assert_eq!(state.pending_delete, None);
        assert_eq!(state.row_count(), 3);
    }

    #[test]
    fn test_first_row_tracks_page() {
        let state = ViewState::default()
            .apply(OrderAction::LoadSucceeded(orders(5)))
            .apply(OrderAction::ChangePage(2));
        assert_eq!(state.first_row(), 4);
    }

    #[test]
    fn test_reload_closes_delete_confirmation() {
        let state = ViewState::default()
            .apply(OrderAction::LoadSucceeded(orders(3)))
            .apply(OrderAction::RequestDelete(2))
            .apply(OrderAction::Reloaded(orders(3)));
        assert_eq!(state.pending_delete, None);
    }
}
