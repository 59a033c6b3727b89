use petex_orders::components::OrderListView;
use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <div class="app-container">
            <main class="app-main">
                <OrderListView />
            </main>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
