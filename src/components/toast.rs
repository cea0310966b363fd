use gloo_timers::callback::Timeout;
use yew::prelude::*;

const TOAST_DISMISS_MS: u32 = 4_000;

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub message: Option<String>,
    pub on_dismiss: Callback<()>,
    #[prop_or_default]
    pub success: bool,
}

/// Transient notification. Auto-dismisses after a few seconds; a new message
/// restarts the timer.
#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    {
        let message = props.message.clone();
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(message, move |message| {
            let timeout = message
                .as_ref()
                .map(|_| Timeout::new(TOAST_DISMISS_MS, move || on_dismiss.emit(())));
            // Dropping the Timeout cancels it when the message changes
            move || drop(timeout)
        });
    }

    match &props.message {
        Some(text) => {
            let class = if props.success {
                "toast toast-success"
            } else {
                "toast toast-error"
            };
            html! {
                <div class={class} role="alert">{ text }</div>
            }
        }
        None => html! {},
    }
}
