use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::{
    error::AppError,
    order::{CustomerId, Order},
    view_state::{OrderAction, ViewState},
};
use crate::services::{
    api::OrdersClient,
    orders::{DeleteOutcome, delete_then_reload, load_orders},
};

impl Reducible for ViewState {
    type Action = OrderAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

/// Handle returned by `use_orders` hook
#[derive(Clone, PartialEq)]
pub struct OrdersHandle {
    pub state: UseReducerHandle<ViewState>,
    pub on_view: Callback<Order>,
    pub on_close: Callback<()>,
    pub on_delete_request: Callback<usize>,
    pub on_delete_cancel: Callback<()>,
    pub on_delete_confirm: Callback<CustomerId>,
    pub on_page_change: Callback<usize>,
}

/// Owns the order view-state: loads the list on mount and runs deletes.
#[hook]
pub fn use_orders() -> OrdersHandle {
    let state = use_reducer(ViewState::default);

    // Effect: fetch the full list once on mount
    {
        let dispatcher = state.dispatcher();
        use_effect_with((), move |_| {
            let aborted = Rc::new(Cell::new(false));
            let aborted_check = aborted.clone();

            dispatcher.dispatch(OrderAction::LoadStarted);

            spawn_local(async move {
                let action = match OrdersClient::new() {
                    Ok(client) => load_orders(&client).await,
                    Err(e) => OrderAction::LoadFailed(e.to_string()),
                };

                match &action {
                    OrderAction::LoadSucceeded(orders) => {
                        gloo::console::log!(format!("Fetched {} orders", orders.len()));
                    }
                    OrderAction::LoadFailed(msg) => {
                        gloo::console::error!(format!("Error fetching orders: {msg}"));
                    }
                    _ => {}
                }

                if !aborted_check.get() {
                    dispatcher.dispatch(action);
                }
            });

            move || {
                aborted.set(true);
            }
        });
    }

    let on_view = {
        let dispatcher = state.dispatcher();
        Callback::from(move |order: Order| dispatcher.dispatch(OrderAction::Select(order)))
    };

    let on_close = {
        let dispatcher = state.dispatcher();
        Callback::from(move |()| dispatcher.dispatch(OrderAction::CloseModal))
    };

    let on_delete_request = {
        let dispatcher = state.dispatcher();
        Callback::from(move |row: usize| dispatcher.dispatch(OrderAction::RequestDelete(row)))
    };

    let on_delete_cancel = {
        let dispatcher = state.dispatcher();
        Callback::from(move |()| dispatcher.dispatch(OrderAction::CancelDelete))
    };

    // Confirmed deletes are fire-and-forget; overlapping ones are not serialized
    let on_delete_confirm = {
        let dispatcher = state.dispatcher();
        Callback::from(move |id: CustomerId| {
            dispatcher.dispatch(OrderAction::ConfirmDelete);

            let dispatcher = dispatcher.clone();
            spawn_local(async move {
                let outcome = match OrdersClient::new() {
                    Ok(client) => delete_then_reload(&client, &id).await,
                    Err(e) => DeleteOutcome::Failed(e),
                };

                match outcome {
                    DeleteOutcome::Reloaded(orders) => {
                        dispatcher.dispatch(OrderAction::Reloaded(orders));
                    }
                    DeleteOutcome::Failed(e @ AppError::DeleteRejected { .. }) => {
                        gloo::console::error!(e.to_string());
                    }
                    DeleteOutcome::Failed(e) => {
                        gloo::console::error!(format!("Error deleting record: {e}"));
                    }
                }
            });
        })
    };

    let on_page_change = {
        let dispatcher = state.dispatcher();
        Callback::from(move |page: usize| dispatcher.dispatch(OrderAction::ChangePage(page)))
    };

    OrdersHandle {
        state,
        on_view,
        on_close,
        on_delete_request,
        on_delete_cancel,
        on_delete_confirm,
        on_page_change,
    }
}
