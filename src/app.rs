//! Car Rental App
//!
//! Root component: owns the store and lays out the storefront.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{CarDetailCard, CarList, MediaGallery, NewsletterForm, NoticeBanner, SearchBar};
use crate::config::ApiConfig;
use crate::context::AppContext;
use crate::store::StorefrontState;

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(StorefrontState::default());
    let config = ApiConfig::from_build_env();
    log::info!("Content API at {}", config.base_url());

    // Provide context to all children
    let ctx = AppContext::new(store, config);
    provide_context(store);
    provide_context(ctx);

    // Load cars on mount
    Effect::new(move |_| {
        let controller = ctx.controller();
        spawn_local(async move {
            let _ = controller.load_cars().await;
        });
    });

    view! {
        <div class="container mt-4">
            <h1 class="text-center mb-4">"Car Rental App"</h1>

            <NoticeBanner />

            <SearchBar />

            <CarList />

            <CarDetailCard />

            <NewsletterForm />

            <MediaGallery />
        </div>
    }
}
