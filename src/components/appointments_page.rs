use web_sys::HtmlSelectElement;
use yew::prelude::*;

use super::{Pagination, Toast};
use crate::hooks::use_appointments;
use crate::models::{MediumFilter, SortDir};
use crate::utils::clock::{display_date, slot_range};
use crate::utils::constants::PAGE_LIMIT;
use crate::utils::navigation::push_page_param;
use crate::utils::paging::showing_range;

#[function_component(AppointmentsPage)]
pub fn appointments_page() -> Html {
    let appointments = use_appointments();

    let on_filter_change = {
        let filter = appointments.filter.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                filter.set(select.value().parse().unwrap_or_default());
            }
        })
    };

    let on_sort_change = {
        let sort = appointments.sort.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                sort.set(select.value().parse().unwrap_or_default());
            }
        })
    };

    let on_page = {
        let page = appointments.page.clone();
        Callback::from(move |number: u32| {
            push_page_param(number);
            page.set(number);
        })
    };

    let on_refresh = appointments.refresh.reform(|_: MouseEvent| ());

    let on_toast_dismiss = {
        let error = appointments.error.clone();
        Callback::from(move |_| error.set(None))
    };

    let page = *appointments.page;
    let total = *appointments.total;
    let filter = *appointments.filter;
    let sort = *appointments.sort;

    html! {
        <div class="admin-page">
            <header class="page-header">
                <h1>{"Appointment Management"}</h1>
                <div class="header-actions">
                    <button class="btn-refresh" onclick={on_refresh}>
                        {"Refresh"}
                    </button>
                    <select class="filter-select" onchange={on_filter_change}>
                        <option value="all" selected={filter == MediumFilter::All}>{"No Filter"}</option>
                        <option value="online" selected={filter == MediumFilter::Online}>{"Online"}</option>
                        <option value="offline" selected={filter == MediumFilter::Offline}>{"Offline"}</option>
                    </select>
                    <select class="sort-select" onchange={on_sort_change}>
                        <option value="asc" selected={sort == SortDir::Asc}>{"Ascending"}</option>
                        <option value="desc" selected={sort == SortDir::Desc}>{"Descending"}</option>
                    </select>
                </div>
            </header>

            <div class="table-wrapper">
                <table class="appointments-table">
                    <thead>
                        <tr>
                            <th>{"No"}</th>
                            <th>{"Patient Name"}</th>
                            <th>{"Email"}</th>
                            <th>{"Schedule"}</th>
                            <th>{"Slot"}</th>
                            <th>{"Therapist"}</th>
                            <th>{"Action"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for appointments.data.iter().enumerate().map(|(index, record)| {
                            let row_number = (page - 1) * PAGE_LIMIT + index as u32 + 1;
                            let slot_cell = record
                                .slot
                                .as_ref()
                                .map(slot_range)
                                .unwrap_or_else(|| "-".to_string());
                            let therapist = record
                                .slot
                                .as_ref()
                                .map(|slot| slot.therapist_name.clone())
                                .unwrap_or_else(|| "-".to_string());

                            html! {
                                <tr key={record.id.clone()}>
                                    <td>{ row_number }</td>
                                    <td>{ record.fullname.clone() }</td>
                                    <td>{ record.email.clone() }</td>
                                    <td>{ display_date(&record.date) }</td>
                                    <td>{ slot_cell }</td>
                                    <td>{ therapist }</td>
                                    <td>
                                        <a class="details-link" href={format!("/admin/appointments/{}", record.id)}>
                                            {"Details"}
                                        </a>
                                    </td>
                                </tr>
                            }
                        }) }
                    </tbody>
                </table>
            </div>

            <footer class="table-footer">
                <p class="results-summary">
                    { format!(
                        "Showing {} of {} results",
                        showing_range(page, PAGE_LIMIT, total),
                        total
                    ) }
                </p>
                <Pagination total={total} limit={PAGE_LIMIT} page={page} on_page={on_page} />
            </footer>

            <Toast message={(*appointments.error).clone()} on_dismiss={on_toast_dismiss} />
        </div>
    }
}
