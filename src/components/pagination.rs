use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    /// Current page (0-indexed)
    pub current_page: usize,
    /// Total number of pages
    pub total_pages: usize,
    pub on_page_change: Callback<usize>,
}

/// Previous / numbered / next page buttons under the table
#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let page = props.current_page;
    let total = props.total_pages.max(1);

    let go_to = |target: usize| {
        let callback = props.on_page_change.clone();
        Callback::from(move |_: MouseEvent| callback.emit(target))
    };

    html! {
        <ul class="pagination">
            <li>
                <button
                    class="pagination-btn"
                    disabled={page == 0}
                    onclick={go_to(page.saturating_sub(1))}
                    title="Previous Page"
                >
                    {"‹"}
                </button>
            </li>
            {
                (0..total).map(|p| {
                    let class = classes!("pagination-btn", (p == page).then_some("active"));
                    html! {
                        <li key={p}>
                            <button {class} onclick={go_to(p)}>{(p + 1).to_string()}</button>
                        </li>
                    }
                }).collect::<Html>()
            }
            <li>
                <button
                    class="pagination-btn"
                    disabled={page + 1 >= total}
                    onclick={go_to(page + 1)}
                    title="Next Page"
                >
                    {"›"}
                </button>
            </li>
        </ul>
    }
}
