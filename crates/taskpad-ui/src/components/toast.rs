use crate::models::Toast;
use gloo::timers::callback::Timeout;
use yew::prelude::*;

const TOAST_TTL_MS: u32 = 4000;

#[derive(Properties, PartialEq)]
pub(crate) struct ToastHostProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u64>,
}

/// Stack of transient notices; each one dismisses itself after a few seconds.
#[function_component(ToastHost)]
pub(crate) fn toast_host(props: &ToastHostProps) -> Html {
    let on_dismiss = props.on_dismiss.clone();
    use_effect_with_deps(
        move |toasts: &Vec<Toast>| {
            let timers: Vec<Timeout> = toasts
                .iter()
                .map(|toast| {
                    let on_dismiss = on_dismiss.clone();
                    let id = toast.id;
                    Timeout::new(TOAST_TTL_MS, move || on_dismiss.emit(id))
                })
                .collect();
            move || drop(timers)
        },
        props.toasts.clone(),
    );

    html! {
        <div class="toast-host" aria-live="polite">
            {for props.toasts.iter().map(|toast| {
                let id = toast.id;
                let close = props.on_dismiss.reform(move |_: MouseEvent| id);
                html! {
                    <div
                        key={id.to_string()}
                        class={classes!("toast", toast.kind.class())}
                        role="status"
                    >
                        <span>{toast.message.clone()}</span>
                        <button class="ghost" aria-label="Dismiss" onclick={close}>{"×"}</button>
                    </div>
                }
            })}
        </div>
    }
}
