use yew::prelude::*;

use crate::utils::paging::page_numbers;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub total: u32,
    pub limit: u32,
    pub page: u32,
    pub on_page: Callback<u32>,
}

/// Clickable page numbers, current page excluded.
#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let numbers = page_numbers(props.total, props.limit, props.page);

    html! {
        <div class="pagination">
            { for numbers.into_iter().map(|number| {
                let on_page = props.on_page.clone();
                html! {
                    <button
                        key={number.to_string()}
                        class="page-button"
                        onclick={Callback::from(move |_: MouseEvent| on_page.emit(number))}
                    >
                        { number }
                    </button>
                }
            }) }
        </div>
    }
}
