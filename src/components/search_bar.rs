//! Search Bar Component
//!
//! Filters the car list by name when the form is submitted.

use leptos::prelude::*;

use crate::context::use_app_context;

/// Search form above the car list
#[component]
pub fn SearchBar() -> impl IntoView {
    let ctx = use_app_context();
    let (term, set_term) = signal(String::new());

    let on_search = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.controller().apply_search(&term.get());
    };

    view! {
        <form class="search-form d-flex mb-4" on:submit=on_search>
            <input
                class="form-control mr-2"
                type="search"
                name="search"
                placeholder="Search cars..."
                aria-label="Search"
                prop:value=move || term.get()
                on:input=move |ev| set_term.set(event_target_value(&ev))
            />
            <button class="btn btn-primary" type="submit">"Search"</button>
        </form>
    }
}
