use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::models::{AppointmentRecord, AuthSession, FilterRequest, MediumFilter, SortDir};
use crate::services::ApiClient;
use crate::utils::constants::{PAGE_LIMIT, STORAGE_KEY_FILTER, STORAGE_KEY_SORT};
use crate::utils::navigation::page_query_param;
use crate::utils::storage::{load_from_session, save_to_session};

pub struct UseAppointmentsHandle {
    pub data: UseStateHandle<Vec<AppointmentRecord>>,
    pub total: UseStateHandle<u32>,
    pub page: UseStateHandle<u32>,
    pub filter: UseStateHandle<MediumFilter>,
    pub sort: UseStateHandle<SortDir>,
    pub error: UseStateHandle<Option<String>>,
    pub refresh: Callback<()>,
}

/// Appointments table state: one fetch per trigger (mount, filter, sort,
/// page, session change, manual refresh), no retry.
#[hook]
pub fn use_appointments() -> UseAppointmentsHandle {
    let session = use_context::<AuthSession>().unwrap_or_default();

    let data = use_state(Vec::<AppointmentRecord>::new);
    let total = use_state(|| 0u32);
    let error = use_state(|| None::<String>);
    let page = use_state(page_query_param);
    let reload = use_state(|| 0u64);

    // Filter and sort survive reloads through sessionStorage; the page
    // number is owned by the URL instead.
    let filter = use_state(|| {
        load_from_session(STORAGE_KEY_FILTER)
            .and_then(|raw| raw.parse::<MediumFilter>().ok())
            .unwrap_or_default()
    });
    let sort = use_state(|| {
        load_from_session(STORAGE_KEY_SORT)
            .and_then(|raw| raw.parse::<SortDir>().ok())
            .unwrap_or_default()
    });

    // Sequence number of the newest request; any response carrying an older
    // number lost the race and is discarded.
    let latest_seq = use_mut_ref(|| 0u64);

    // Back/forward navigation changes the visible page via the URL.
    {
        let page = page.clone();
        use_effect_with((), move |_| {
            let on_popstate = Closure::wrap(Box::new(move |_: web_sys::Event| {
                page.set(page_query_param());
            }) as Box<dyn FnMut(web_sys::Event)>);

            if let Some(win) = web_sys::window() {
                let _ = win.add_event_listener_with_callback(
                    "popstate",
                    on_popstate.as_ref().unchecked_ref(),
                );
            }

            move || {
                on_popstate.forget();
            }
        });
    }

    // Fetch on mount and on every filter/sort/page/session change.
    {
        let data = data.clone();
        let total = total.clone();
        let error = error.clone();
        let latest_seq = latest_seq.clone();

        use_effect_with(
            (*filter, *sort, *page, session, *reload),
            move |(filter, sort, page, session, _)| {
                // Persist the current choices so a reload keeps them.
                let _ = save_to_session(STORAGE_KEY_FILTER, filter.as_str());
                let _ = save_to_session(STORAGE_KEY_SORT, sort.as_str());

                if let Some(token) = session.token.clone() {
                    let request = FilterRequest {
                        page: *page,
                        limit: PAGE_LIMIT,
                        medium: filter.as_medium(),
                        sort: *sort,
                    };

                    *latest_seq.borrow_mut() += 1;
                    let seq = *latest_seq.borrow();

                    wasm_bindgen_futures::spawn_local(async move {
                        let result = ApiClient::new().filter_appointments(&token, &request).await;

                        if *latest_seq.borrow() != seq {
                            log::warn!("⚠️ Discarding stale appointments response (seq {})", seq);
                            return;
                        }

                        match result {
                            Ok(response) => {
                                log::info!(
                                    "✅ Appointments loaded: {} of {}",
                                    response.data.len(),
                                    response.total
                                );
                                total.set(response.total);
                                data.set(response.data);
                            }
                            Err(message) => {
                                // Keep the last successful table contents.
                                log::error!("❌ Appointments fetch failed: {}", message);
                                error.set(Some(message));
                            }
                        }
                    });
                } else {
                    log::info!("🔒 No auth token in session, skipping appointments fetch");
                }

                || ()
            },
        );
    }

    let refresh = {
        let reload = reload.clone();
        Callback::from(move |_| reload.set(*reload + 1))
    };

    UseAppointmentsHandle {
        data,
        total,
        page,
        filter,
        sort,
        error,
        refresh,
    }
}
