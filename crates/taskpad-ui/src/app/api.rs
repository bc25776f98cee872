//! Browser API client shared through context.

use std::ops::Deref;
use std::rc::Rc;

use crate::services::api::ApiClient;

/// Handle to the [`ApiClient`] created in `run_app`; clones share it.
#[derive(Clone)]
pub(crate) struct ApiCtx(Rc<ApiClient>);

impl ApiCtx {
    pub(crate) fn for_base_url(base_url: String) -> Self {
        Self(Rc::new(ApiClient::new(base_url)))
    }
}

impl Deref for ApiCtx {
    type Target = ApiClient;

    fn deref(&self) -> &ApiClient {
        &self.0
    }
}

// Same client means same context.
impl PartialEq for ApiCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
