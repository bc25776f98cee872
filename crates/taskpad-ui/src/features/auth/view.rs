//! Signup and login pages.

use gloo::dialogs::alert;
use taskpad_api_models::Credentials;
use taskpad_client::TaskApi;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::app::api::ApiCtx;
use crate::components::auth_form::AuthForm;
use crate::features::auth::logic::{AuthMode, SIGNUP_SUCCESS};

#[derive(Properties, PartialEq)]
pub(crate) struct SignupPageProps {
    pub on_notice: Callback<String>,
}

#[function_component(SignupPage)]
pub(crate) fn signup_page(props: &SignupPageProps) -> Html {
    let api = use_context::<ApiCtx>();
    let navigator = use_navigator();

    let on_submit = {
        let on_notice = props.on_notice.clone();
        Callback::from(move |credentials: Credentials| {
            let Some(api) = api.clone() else {
                return;
            };
            let navigator = navigator.clone();
            let on_notice = on_notice.clone();
            yew::platform::spawn_local(async move {
                match api.signup(&credentials).await {
                    Ok(()) => {
                        on_notice.emit(SIGNUP_SUCCESS.to_string());
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Login);
                        }
                    }
                    Err(err) => alert(&AuthMode::Signup.failure_message(&err)),
                }
            });
        })
    };

    html! {
        <section class="page">
            <h1>{AuthMode::Signup.heading()}</h1>
            <AuthForm mode={AuthMode::Signup} on_submit={on_submit} />
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct LoginPageProps {
    pub on_login: Callback<String>,
}

#[function_component(LoginPage)]
pub(crate) fn login_page(props: &LoginPageProps) -> Html {
    let api = use_context::<ApiCtx>();
    let navigator = use_navigator();

    let on_submit = {
        let on_login = props.on_login.clone();
        Callback::from(move |credentials: Credentials| {
            let Some(api) = api.clone() else {
                return;
            };
            let navigator = navigator.clone();
            let on_login = on_login.clone();
            yew::platform::spawn_local(async move {
                match api.login(&credentials).await {
                    Ok(response) => {
                        on_login.emit(response.token);
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Home);
                        }
                    }
                    Err(err) => alert(&AuthMode::Login.failure_message(&err)),
                }
            });
        })
    };

    html! {
        <section class="page">
            <h1>{AuthMode::Login.heading()}</h1>
            <AuthForm mode={AuthMode::Login} on_submit={on_submit} />
        </section>
    }
}
