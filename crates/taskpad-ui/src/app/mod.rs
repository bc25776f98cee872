use crate::app::api::ApiCtx;
use crate::components::navbar::Navbar;
use crate::components::toast::ToastHost;
use crate::core::auth::{GuardOutcome, guard};
use crate::core::store::{AppStore, sign_in, sign_out};
use crate::features::auth::view::{LoginPage, SignupPage};
use crate::features::tasks::view::TasksPage;
use crate::models::{ToastCommand, ToastKind, ToastStack};
use preferences::{api_base_url, load_token, persist_token};
pub(crate) use routes::Route;
use taskpad_client::Session;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

pub(crate) mod api;
mod preferences;
mod routes;

#[function_component(TaskpadApp)]
pub(crate) fn taskpad_app() -> Html {
    let dispatch = Dispatch::<AppStore>::new();
    let api_ctx = use_memo(|_| ApiCtx::for_base_url(api_base_url()), ());
    let toasts = use_reducer(ToastStack::default);
    let session = use_selector(|store: &AppStore| store.auth.session.clone());

    let notify = {
        let toasts = toasts.dispatcher();
        Callback::from(move |(kind, message): (ToastKind, String)| {
            toasts.dispatch(ToastCommand::Push(kind, message));
        })
    };
    let dismiss = {
        let toasts = toasts.dispatcher();
        Callback::from(move |id: u64| toasts.dispatch(ToastCommand::Dismiss(id)))
    };
    let on_login = {
        let dispatch = dispatch.clone();
        Callback::from(move |token: String| {
            persist_token(Some(&token));
            dispatch.reduce_mut(|store| sign_in(store, token.as_str()));
        })
    };
    let on_logout = {
        let notify = notify.clone();
        Callback::from(move |()| {
            persist_token(None);
            dispatch.reduce_mut(sign_out);
            notify.emit((ToastKind::Info, "Logged out".to_string()));
        })
    };
    let on_notice = notify.reform(|message: String| (ToastKind::Success, message));

    let authenticated = session.is_authenticated();
    let session_value: Session = (*session).clone();

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <BrowserRouter>
                <Navbar authenticated={authenticated} on_logout={on_logout} />
                <main>
                    <Switch<Route> render={move |route: Route| {
                        if guard(route.access(), &session_value) == GuardOutcome::RedirectToLogin {
                            return html! { <Redirect<Route> to={Route::Login} /> };
                        }
                        match route {
                            Route::Home => html! { <TasksPage /> },
                            Route::Signup => html! { <SignupPage on_notice={on_notice.clone()} /> },
                            Route::Login => html! { <LoginPage on_login={on_login.clone()} /> },
                            Route::NotFound => html! {
                                <section class="page">
                                    <h1>{"Not found"}</h1>
                                    <Link<Route> to={Route::Home}>
                                        {"Back to your todos"}
                                    </Link<Route>>
                                </section>
                            },
                        }
                    }} />
                </main>
                <ToastHost toasts={toasts.toasts().to_vec()} on_dismiss={dismiss} />
            </BrowserRouter>
        </ContextProvider<ApiCtx>>
    }
}

/// Restore the saved session, then mount the app on `#root` (or `<body>`).
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(token) = load_token() {
        Dispatch::<AppStore>::new().reduce_mut(|store| sign_in(store, token.as_str()));
    }
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<TaskpadApp>::with_root(root).render();
    } else {
        yew::Renderer::<TaskpadApp>::new().render();
    }
}
