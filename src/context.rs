//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::HttpApi;
use crate::config::ApiConfig;
use crate::controller::Storefront;
use crate::store::AppStore;

/// Controller wired to the real content API and the reactive store
pub type AppController = Storefront<HttpApi>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Reactive view state
    pub store: AppStore,
    /// One HTTP client for the app's lifetime; clones share its connection pool
    api: StoredValue<HttpApi, LocalStorage>,
}

impl AppContext {
    pub fn new(store: AppStore, config: ApiConfig) -> Self {
        Self {
            store,
            api: StoredValue::new_local(HttpApi::new(config)),
        }
    }

    /// Controller for one user interaction
    pub fn controller(&self) -> AppController {
        Storefront::new(self.api.get_value(), self.store)
    }

    /// Absolute URL for an image path returned by the API
    pub fn asset_url(&self, url: &str) -> String {
        self.api.with_value(|api| api.config().asset_url(url))
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
