use crate::app::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct NavbarProps {
    pub authenticated: bool,
    pub on_logout: Callback<()>,
}

#[function_component(Navbar)]
pub(crate) fn navbar(props: &NavbarProps) -> Html {
    let on_logout = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_| on_logout.emit(()))
    };

    html! {
        <nav class="navbar">
            <Link<Route> to={Route::Home}>{"Home"}</Link<Route>>
            {if props.authenticated {
                html! { <button class="ghost" onclick={on_logout}>{"Logout"}</button> }
            } else {
                html! {
                    <>
                        <Link<Route> to={Route::Signup}>{"Signup"}</Link<Route>>
                        <Link<Route> to={Route::Login}>{"Login"}</Link<Route>>
                    </>
                }
            }}
        </nav>
    }
}
