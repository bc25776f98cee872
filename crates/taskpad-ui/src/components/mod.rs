//! Presentational Yew components.

pub(crate) mod add_task_form;
pub(crate) mod auth_form;
pub(crate) mod filter_buttons;
pub(crate) mod navbar;
pub(crate) mod task_list;
pub(crate) mod toast;
