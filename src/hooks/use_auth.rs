use yew::prelude::*;

use crate::models::RegisterRequest;
use crate::services::ApiClient;

#[derive(Clone, PartialEq, Default)]
pub struct RegisterState {
    pub loading: bool,
    pub error: Option<String>,
    pub completed: bool,
}

pub struct UseAuthHandle {
    pub state: UseStateHandle<RegisterState>,
    pub register: Callback<RegisterRequest>,
}

/// Registration delegation. Validation stays in the form; this only owns the
/// network call and its in-flight/error/success state.
#[hook]
pub fn use_auth() -> UseAuthHandle {
    let state = use_state(RegisterState::default);

    let register = {
        let state = state.clone();
        Callback::from(move |form: RegisterRequest| {
            let state = state.clone();
            state.set(RegisterState {
                loading: true,
                error: None,
                completed: false,
            });

            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::new().register(&form).await {
                    Ok(()) => {
                        log::info!("✅ Registration successful for {}", form.name);
                        state.set(RegisterState {
                            loading: false,
                            error: None,
                            completed: true,
                        });
                    }
                    Err(message) => {
                        log::error!("❌ Registration failed: {}", message);
                        state.set(RegisterState {
                            loading: false,
                            error: Some(message),
                            completed: false,
                        });
                    }
                }
            });
        })
    };

    UseAuthHandle { state, register }
}
