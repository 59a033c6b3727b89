use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Legend},
    element::{AxisPointer, AxisPointerType, AxisType, ItemStyle, Tooltip, Trigger},
    renderer::WasmRenderer,
    series::Bar,
};
use gloo::events::EventListener;
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::Config;
use crate::models::revenue::{RevenuePoint, series_data};

const CHART_ID: &str = "revenue-chart";
const BAR_COLOR: &str = "#888846";

#[derive(Properties, PartialEq)]
pub struct RevenueChartProps {
    pub points: Rc<Vec<RevenuePoint>>,
}

/// Bar chart of revenue per order, keyed by customer id.
#[function_component(RevenueChart)]
pub fn revenue_chart(props: &RevenueChartProps) -> Html {
    let container_ref = use_node_ref();

    {
        let container_ref = container_ref.clone();

        use_effect_with(
            (props.points.clone(), container_ref),
            |(points, container_ref)| {
                let listener = container_ref.cast::<HtmlElement>().map(|container| {
                    let series = series_data(points);
                    render_chart(&container, &series);

                    web_sys::window().map(|window| {
                        EventListener::new(&window, "resize", move |_| {
                            render_chart(&container, &series);
                        })
                    })
                });

                move || drop(listener)
            },
        );
    }

    let style = format!(
        "width: {}; height: {}px;",
        Config::CHART_WIDTH,
        Config::CHART_HEIGHT_PX
    );

    html! {
        <div class="chart-container" ref={container_ref} {style}>
            <div id={CHART_ID} />
        </div>
    }
}

fn render_chart(container: &HtmlElement, series: &(Vec<String>, Vec<f64>)) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 {
        return;
    }

    let chart = build_chart(series);
    if let Err(e) = WasmRenderer::new(width, height).render(CHART_ID, &chart) {
        web_sys::console::error_1(&format!("Render error: {e:?}").into());
    }
}

fn build_chart(series: &(Vec<String>, Vec<f64>)) -> CharmingChart {
    let (categories, revenue) = series;

    CharmingChart::new()
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)),
        )
        .legend(Legend::new().bottom("0%"))
        .grid(Grid::new().left("4%").right("4%").bottom("16%").contain_label(true))
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(categories.clone()),
        )
        .y_axis(Axis::new().type_(AxisType::Value))
        .series(
            Bar::new()
                .name("revenue")
                .data(revenue.clone())
                .item_style(ItemStyle::new().color(BAR_COLOR)),
        )
}
