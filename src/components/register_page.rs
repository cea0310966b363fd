use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::Toast;
use crate::hooks::{use_auth, RegisterState};
use crate::models::RegisterRequest;
use crate::utils::validate::{validate_name, validate_password, validate_phone};

const REGISTER_SUCCESS_MESSAGE: &str = "Account created! Taking you to sign in...";

#[derive(Clone, PartialEq, Default)]
struct FieldErrors {
    name: Option<String>,
    phone: Option<String>,
    password: Option<String>,
}

impl FieldErrors {
    fn is_clear(&self) -> bool {
        self.name.is_none() && self.phone.is_none() && self.password.is_none()
    }
}

fn field_error(error: &Option<String>) -> Html {
    match error {
        Some(message) => html! { <p class="field-error">{ message }</p> },
        None => html! {},
    }
}

/// Toast text and kind for the current registration state: success once the
/// account exists, otherwise whatever the backend complained about.
fn toast_content(state: &RegisterState) -> Option<(String, bool)> {
    if state.completed {
        return Some((REGISTER_SUCCESS_MESSAGE.to_string(), true));
    }
    state.error.clone().map(|message| (message, false))
}

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let auth = use_auth();

    let name_ref = use_node_ref();
    let phone_ref = use_node_ref();
    let password_ref = use_node_ref();
    let remember_ref = use_node_ref();

    let errors = use_state(FieldErrors::default);
    let show_password = use_state(|| false);

    let on_submit = {
        let name_ref = name_ref.clone();
        let phone_ref = phone_ref.clone();
        let password_ref = password_ref.clone();
        let remember_ref = remember_ref.clone();
        let errors = errors.clone();
        let register = auth.register.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let (Some(name_input), Some(phone_input), Some(password_input)) = (
                name_ref.cast::<HtmlInputElement>(),
                phone_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) {
                let name = name_input.value();
                let phone = phone_input.value();
                let password = password_input.value();
                let remember = remember_ref
                    .cast::<HtmlInputElement>()
                    .map(|checkbox| checkbox.checked())
                    .unwrap_or(false);

                let next = FieldErrors {
                    name: validate_name(&name).err(),
                    phone: validate_phone(&phone).err(),
                    password: validate_password(&password).err(),
                };
                let clear = next.is_clear();
                errors.set(next);

                // Client-side violations never reach the network
                if !clear {
                    return;
                }

                register.emit(RegisterRequest {
                    name,
                    phone,
                    password,
                    remember,
                });
            }
        })
    };

    let toggle_password = {
        let show_password = show_password.clone();
        Callback::from(move |_: MouseEvent| show_password.set(!*show_password))
    };

    // The success toast gets read, then its dismissal hands off to the
    // sign-in page. Error toasts just clear.
    let on_toast_dismiss = {
        let state = auth.state.clone();
        Callback::from(move |_| {
            if state.completed {
                log::info!("👋 Redirecting to sign-in");
                if let Some(win) = web_sys::window() {
                    let _ = win.location().set_href("/auth/login");
                }
                return;
            }
            let mut next = (*state).clone();
            next.error = None;
            state.set(next);
        })
    };

    let loading = auth.state.loading;
    let (toast_message, toast_success) = match toast_content(&auth.state) {
        Some((message, success)) => (Some(message), success),
        None => (None, false),
    };

    html! {
        <div class="auth-page">
            <div class="auth-card">
                <h2>{"Sign Up"}</h2>
                <p class="auth-subtitle">{"Create a new account"}</p>

                <form class="register-form" onsubmit={on_submit} novalidate=true>
                    <div class="form-group">
                        <label for="name">{"Name*"}</label>
                        <input
                            type="text"
                            id="name"
                            name="name"
                            ref={name_ref}
                            class={classes!("form-input", errors.name.is_some().then_some("input-invalid"))}
                        />
                        { field_error(&errors.name) }
                    </div>

                    <div class="form-group">
                        <div class="label-row">
                            <label for="phone">{"Phone*"}</label>
                            <a href="/auth/register" class="alt-link">{"Use email Instead"}</a>
                        </div>
                        <input
                            type="tel"
                            id="phone"
                            name="phone"
                            placeholder="+971 50 000 0000"
                            ref={phone_ref}
                            class={classes!("form-input", errors.phone.is_some().then_some("input-invalid"))}
                        />
                        { field_error(&errors.phone) }
                    </div>

                    <div class="form-group">
                        <label for="password">{"Password*"}</label>
                        <div class="password-field">
                            <input
                                type={if *show_password { "text" } else { "password" }}
                                id="password"
                                name="password"
                                ref={password_ref}
                                class={classes!("form-input", errors.password.is_some().then_some("input-invalid"))}
                            />
                            <button type="button" class="btn-toggle-password" onclick={toggle_password}>
                                { if *show_password { "Hide" } else { "Show" } }
                            </button>
                        </div>
                        { field_error(&errors.password) }
                    </div>

                    <label class="remember-row">
                        <input type="checkbox" name="remember" ref={remember_ref} />
                        <span>{"Remember Me"}</span>
                    </label>

                    <button type="submit" class="btn-submit" disabled={loading}>
                        { if loading { "Signing up..." } else { "Sign Up" } }
                    </button>
                </form>

                <p class="auth-footer">
                    {"Already have an account? "}
                    <a href="/auth/login" class="alt-link">{"Sign In"}</a>
                </p>
            </div>

            <Toast message={toast_message} success={toast_success} on_dismiss={on_toast_dismiss} />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completed_registration_shows_success_toast() {
        let state = RegisterState {
            loading: false,
            error: None,
            completed: true,
        };
        assert_eq!(
            toast_content(&state),
            Some((REGISTER_SUCCESS_MESSAGE.to_string(), true))
        );
    }

    #[test]
    fn failed_registration_shows_error_toast() {
        let state = RegisterState {
            loading: false,
            error: Some("Phone already registered".to_string()),
            completed: false,
        };
        assert_eq!(
            toast_content(&state),
            Some(("Phone already registered".to_string(), false))
        );
    }

    #[test]
    fn idle_and_loading_states_show_nothing() {
        assert_eq!(toast_content(&RegisterState::default()), None);

        let loading = RegisterState {
            loading: true,
            error: None,
            completed: false,
        };
        assert_eq!(toast_content(&loading), None);
    }
}

