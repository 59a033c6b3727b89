use yew::prelude::*;

use crate::components::delete_confirm::DeleteConfirm;
use crate::models::order::{CustomerId, Order, format_money};

const COLUMNS: [&str; 6] = ["customerId", "product", "price", "quantity", "total", "Action"];

#[derive(Properties, PartialEq)]
pub struct OrderTableProps {
    /// Rows of the current page
    pub rows: Vec<Order>,
    pub loading: bool,
    /// Position in the full list of the first row shown
    pub first_row: usize,
    /// Position in the full list of the row awaiting delete confirmation
    pub pending_delete: Option<usize>,
    pub on_view: Callback<Order>,
    pub on_delete_request: Callback<usize>,
    pub on_delete_confirm: Callback<CustomerId>,
    pub on_delete_cancel: Callback<()>,
}

#[function_component(OrderTable)]
pub fn order_table(props: &OrderTableProps) -> Html {
    let body = if props.rows.is_empty() {
        html! {
            <tr class="table-empty">
                <td colspan={COLUMNS.len().to_string()}>{"No data"}</td>
            </tr>
        }
    } else {
        props
            .rows
            .iter()
            .enumerate()
            .map(|(index, order)| render_row(props, props.first_row + index, order))
            .collect::<Html>()
    };

    html! {
        <div class={classes!("table-wrapper", props.loading.then_some("loading"))}>
            if props.loading {
                <div class="table-spinner"><div class="spinner"></div></div>
            }
            <table class="orders-table">
                <thead>
                    <tr>
                        { for COLUMNS.iter().map(|title| html! { <th>{*title}</th> }) }
                    </tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
        </div>
    }
}

fn render_row(props: &OrderTableProps, row: usize, order: &Order) -> Html {
    let on_view = {
        let callback = props.on_view.clone();
        let order = order.clone();
        Callback::from(move |_: MouseEvent| callback.emit(order.clone()))
    };

    // Ids are not guaranteed unique, so the row key also carries its position
    let key = format!("{row}-{}", order.customer_id);
    let open = props.pending_delete == Some(row);

    html! {
        <tr {key}>
            <td>{order.customer_id.to_string()}</td>
            <td>{&order.product}</td>
            <td><span>{format_money(order.price)}</span></td>
            <td>{order.quantity.to_string()}</td>
            <td>{order.total.to_string()}</td>
            <td class="table-actions">
                <button class="btn btn-primary" onclick={on_view}>{"View"}</button>
                <DeleteConfirm
                    customer_id={order.customer_id.clone()}
                    {row}
                    {open}
                    on_request={props.on_delete_request.clone()}
                    on_confirm={props.on_delete_confirm.clone()}
                    on_cancel={props.on_delete_cancel.clone()}
                />
            </td>
        </tr>
    }
}
