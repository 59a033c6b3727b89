use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::models::order::{Order, format_money};

#[derive(Properties, PartialEq)]
pub struct OrderModalProps {
    pub visible: bool,
    /// Selected record, possibly left over from an earlier view
    pub order: Option<Order>,
    pub on_close: Callback<()>,
}

/// "Order Details" dialog without a footer
#[function_component(OrderModal)]
pub fn order_modal(props: &OrderModalProps) -> Html {
    // Escape closes the dialog while it is open
    {
        let on_close = props.on_close.clone();
        use_effect_with(props.visible, move |visible| {
            let listener = (*visible)
                .then(web_sys::window)
                .flatten()
                .map(|window| {
                    EventListener::new(&window, "keydown", move |event| {
                        let escape = event
                            .dyn_ref::<KeyboardEvent>()
                            .is_some_and(|key_event| key_event.key() == "Escape");
                        if escape {
                            on_close.emit(());
                        }
                    })
                });

            move || drop(listener)
        });
    }

    if !props.visible {
        return html! {};
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let stop_propagation = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-overlay" onclick={close.clone()}>
            <div class="modal" role="dialog" onclick={stop_propagation}>
                <div class="modal-header">
                    <h2 class="modal-title">{"Order Details"}</h2>
                    <button class="modal-close" onclick={close} aria-label="Close">{"×"}</button>
                </div>
                <div class="modal-body">
                    if let Some(order) = &props.order {
                        <div>
                            <p>{format!("Customer ID: {}", order.customer_id)}</p>
                            <p>{format!("Product: {}", order.product)}</p>
                            <p>{format!("Price: {}", format_money(order.price))}</p>
                            <p>{format!("Quantity: {}", order.quantity)}</p>
                            <p>{format!("Total: {}", format_money(order.total))}</p>
                        </div>
                    }
                </div>
            </div>
        </div>
    }
}
