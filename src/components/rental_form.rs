//! Rental Form Component
//!
//! Reservation inputs bound to the rental draft in the store.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::store::StorefrontStateStoreFields;

/// Reservation form for the selected car
#[component]
pub fn RentalForm(car_id: u32) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let submitting = move || store.rental_phase().with(|p| p.is_loading());

    let book = move |_| {
        let controller = ctx.controller();
        spawn_local(async move {
            let _ = controller.submit_rental(car_id).await;
        });
    };

    view! {
        <div class="rental-form mt-4">
            <h3>"Make a Rental Reservation"</h3>
            <input
                type="datetime-local"
                class="form-control mb-2"
                prop:value=move || store.rental_draft().with(|d| d.rental_time.clone())
                on:input=move |ev| store.rental_draft().write().rental_time = event_target_value(&ev)
            />
            <input
                type="number"
                class="form-control mb-2"
                min="1"
                prop:value=move || store.rental_draft().with(|d| d.rental_days.to_string())
                on:input=move |ev| store.rental_draft().write().set_days_input(&event_target_value(&ev))
            />
            <button class="btn btn-success" disabled=submitting on:click=book>
                {move || if submitting() { "Booking..." } else { "Book Rental" }}
            </button>
            {move || store.rental_phase().with(|p| p.error().map(|msg| view! {
                <p class="error">{msg.to_string()}</p>
            }))}
        </div>
    }
}
