//! Routing definitions for the Taskpad UI.
use crate::core::auth::Access;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Home,
    #[at("/signup")]
    Signup,
    #[at("/login")]
    Login,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub(crate) const fn access(&self) -> Access {
        match self {
            Self::Home => Access::Protected,
            Self::Signup | Self::Login | Self::NotFound => Access::Public,
        }
    }
}
