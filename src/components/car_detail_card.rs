//! Car Detail Card Component
//!
//! Selected car's description, reviews and the rental form.

use leptos::prelude::*;

use crate::components::RentalForm;
use crate::context::use_app_context;
use crate::models::Review;
use crate::store::StorefrontStateStoreFields;

#[component]
fn ReviewList(reviews: Vec<Review>) -> impl IntoView {
    if reviews.is_empty() {
        return view! { <p>"No reviews yet"</p> }.into_any();
    }
    view! {
        <ul class="list-group">
            {reviews.into_iter().map(|review| view! {
                <li class="list-group-item">
                    <strong>{review.rating_label()}</strong>
                    " - "
                    {review.comment}
                </li>
            }).collect_view()}
        </ul>
    }
    .into_any()
}

/// Detail card, shown once a car has been selected
#[component]
pub fn CarDetailCard() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    view! {
        <Show when=move || store.detail_phase().with(|p| p.is_loading())>
            <p class="loading">"Loading details..."</p>
        </Show>
        {move || store.detail_phase().with(|p| p.error().map(|msg| view! {
            <p class="error">{format!("Could not load car details: {}", msg)}</p>
        }))}
        {move || store.selected_car().get().map(|car| {
            let paragraphs = car.description_paragraphs();
            view! {
                <div class="card mb-4">
                    <div class="card-body">
                        <h2 class="card-title">{car.name.clone()}</h2>
                        {if paragraphs.is_empty() {
                            view! { <p class="card-text">"No description"</p> }.into_any()
                        } else {
                            paragraphs.into_iter()
                                .map(|text| view! { <p class="card-text">{text}</p> })
                                .collect_view()
                                .into_any()
                        }}

                        <h3>"Reviews"</h3>
                        {move || view! { <ReviewList reviews=store.reviews().get() /> }}

                        <RentalForm car_id=car.id />
                    </div>
                </div>
            }
        })}
    }
}
