//! Car List Component
//!
//! Filtered car list; clicking an entry starts a detail fetch.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::models::Car;
use crate::store::StorefrontStateStoreFields;

/// One row of the list
#[component]
fn CarListItem(car: Car) -> impl IntoView {
    let ctx = use_app_context();
    let id = car.id;
    let image_url = car.image.as_ref().map(|image| ctx.asset_url(&image.url));
    let name = car.name.clone();

    let select = move |_| {
        let controller = ctx.controller();
        spawn_local(async move {
            let _ = controller.load_car_details(id).await;
        });
    };

    let is_selected = move || ctx.store.selected_car().with(|c| c.as_ref().map(|c| c.id) == Some(id));

    view! {
        <li
            class=move || if is_selected() { "list-group-item car-item active" } else { "list-group-item car-item" }
            on:click=select
        >
            <span class="car-name">{car.name}</span>
            {match image_url {
                Some(url) => view! { <img src=url alt=name class="car-thumb" /> }.into_any(),
                None => view! { <p class="no-image">"No image available"</p> }.into_any(),
            }}
            <span class="text-info">"Click to view details"</span>
        </li>
    }
}

/// List of cars matching the current search
#[component]
pub fn CarList() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    view! {
        <section class="car-list mb-4">
            <Show when=move || store.list_phase().with(|p| p.is_loading())>
                <p class="loading">"Loading cars..."</p>
            </Show>
            {move || store.list_phase().with(|p| p.error().map(|msg| view! {
                <p class="error">{format!("Could not load cars: {}", msg)}</p>
            }))}
            <ul class="list-group">
                <For
                    each=move || store.filtered_cars().get()
                    key=|car| car.id
                    children=move |car| view! { <CarListItem car=car /> }
                />
            </ul>
            <Show when=move || {
                store.filtered_cars().with(|cars| cars.is_empty()) && !store.cars().with(|cars| cars.is_empty())
            }>
                <p class="empty">"No cars match your search"</p>
            </Show>
        </section>
    }
}
