use crate::features::auth::logic::{AuthMode, validate_credentials};
use taskpad_api_models::Credentials;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct AuthFormProps {
    pub mode: AuthMode,
    pub on_submit: Callback<Credentials>,
}

#[function_component(AuthForm)]
pub(crate) fn auth_form(props: &AuthFormProps) -> Html {
    let username = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None as Option<String>);

    let on_submit = {
        let username = username.clone();
        let password = password.clone();
        let error = error.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match validate_credentials(&username, &password) {
                Ok(credentials) => {
                    error.set(None);
                    on_submit.emit(credentials);
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        })
    };

    html! {
        <form class="auth-form" onsubmit={on_submit}>
            <div class="stack">
                <label for="username">{"Username:"}</label>
                <input
                    type="text"
                    id="username"
                    required=true
                    value={(*username).clone()}
                    oninput={bind_input(&username)}
                />
            </div>
            <div class="stack">
                <label for="password">{"Password:"}</label>
                <input
                    type="password"
                    id="password"
                    required=true
                    value={(*password).clone()}
                    oninput={bind_input(&password)}
                />
            </div>
            {if let Some(err) = &*error {
                html! { <p class="error-text">{err}</p> }
            } else { html! {} }}
            <button type="submit">{props.mode.submit_label()}</button>
        </form>
    }
}

fn bind_input(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
            state.set(input.value());
        }
    })
}
