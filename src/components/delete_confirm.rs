use gloo::events::EventListener;
use yew::prelude::*;

use crate::models::order::CustomerId;

#[derive(Properties, PartialEq)]
pub struct DeleteConfirmProps {
    pub customer_id: CustomerId,
    /// Position of this row in the full order list
    pub row: usize,
    /// Whether this row's confirmation bubble is open
    pub open: bool,
    pub on_request: Callback<usize>,
    pub on_confirm: Callback<CustomerId>,
    pub on_cancel: Callback<()>,
}

/// Delete button guarded by a yes/no confirmation
#[function_component(DeleteConfirm)]
pub fn delete_confirm(props: &DeleteConfirmProps) -> Html {
    // A click anywhere outside the bubble dismisses it
    {
        let on_cancel = props.on_cancel.clone();
        use_effect_with(props.open, move |open| {
            let listener = (*open)
                .then(|| web_sys::window().and_then(|window| window.document()))
                .flatten()
                .map(|document| {
                    EventListener::new(&document, "click", move |_| on_cancel.emit(()))
                });

            move || drop(listener)
        });
    }

    // Clicks handled here must not reach the document listener above
    let on_request = {
        let callback = props.on_request.clone();
        let row = props.row;
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            callback.emit(row);
        })
    };

    let on_confirm = {
        let callback = props.on_confirm.clone();
        let id = props.customer_id.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            callback.emit(id.clone());
        })
    };

    let on_cancel = {
        let callback = props.on_cancel.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            callback.emit(());
        })
    };

    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <span class="popconfirm-anchor">
            <button class="btn btn-danger" onclick={on_request}>{"Delete"}</button>
            if props.open {
                <div class="popconfirm" role="dialog" onclick={keep_open}>
                    <p class="popconfirm-title">{"Are you sure to delete this record?"}</p>
                    <div class="popconfirm-buttons">
                        <button class="btn btn-small" onclick={on_cancel}>{"No"}</button>
                        <button class="btn btn-small btn-primary" onclick={on_confirm}>{"Yes"}</button>
                    </div>
                </div>
            }
        </span>
    }
}
