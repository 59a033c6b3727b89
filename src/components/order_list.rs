use std::rc::Rc;
use yew::prelude::*;

use crate::components::{
    order_modal::OrderModal, order_table::OrderTable, pagination::Pagination,
    revenue_chart::RevenueChart,
};
use crate::hooks::use_orders::use_orders;

/// Orders table, detail modal and revenue chart.
#[function_component(OrderListView)]
pub fn order_list_view() -> Html {
    let handle = use_orders();
    let state = &*handle.state;

    // Derived on every render, never stored
    let revenue = Rc::new(state.revenue());

    html! {
        <div class="order-list">
            <h4 class="section-title">{"Orders"}</h4>
            <OrderTable
                rows={state.page_orders().to_vec()}
                loading={state.loading()}
                first_row={state.first_row()}
                pending_delete={state.pending_delete}
                on_view={handle.on_view.clone()}
                on_delete_request={handle.on_delete_request.clone()}
                on_delete_confirm={handle.on_delete_confirm.clone()}
                on_delete_cancel={handle.on_delete_cancel.clone()}
            />
            <Pagination
                current_page={state.page}
                total_pages={state.total_pages()}
                on_page_change={handle.on_page_change.clone()}
            />
            <OrderModal
                visible={state.modal_visible()}
                order={state.selected.clone()}
                on_close={handle.on_close.clone()}
            />
            <h4 class="section-title">{"Revenue Graph"}</h4>
            <RevenueChart points={revenue} />
        </div>
    }
}
