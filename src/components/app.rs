use yew::prelude::*;

use super::{AppointmentsPage, RegisterPage};
use crate::models::AuthSession;
use crate::utils::constants::STORAGE_KEY_AUTH_TOKEN;
use crate::utils::navigation::current_path;
use crate::utils::storage::load_from_session;

#[function_component(App)]
pub fn app() -> Html {
    // The login flow (outside this app) parks the bearer token in
    // sessionStorage; pages read it through this context instead of a
    // global header.
    let session = use_memo((), |_| AuthSession {
        token: load_from_session(STORAGE_KEY_AUTH_TOKEN),
    });

    let view = match current_path().as_str() {
        "/auth/register-with-phone" => html! { <RegisterPage /> },
        _ => html! { <AppointmentsPage /> },
    };

    html! {
        <ContextProvider<AuthSession> context={(*session).clone()}>
            { view }
        </ContextProvider<AuthSession>>
    }
}
