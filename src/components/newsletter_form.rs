//! Newsletter Form Component

use leptos::prelude::*;

use crate::context::use_app_context;

/// Newsletter signup. There is no endpoint behind it yet, so submitting only
/// keeps the page from reloading.
#[component]
pub fn NewsletterForm() -> impl IntoView {
    let ctx = use_app_context();
    let (email, set_email) = signal(String::new());

    let on_subscribe = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.controller().subscribe_newsletter(&email.get());
    };

    view! {
        <div class="newsletter mt-4">
            <h3>"Subscribe to our Newsletter"</h3>
            <form on:submit=on_subscribe>
                <div class="input-group mb-3">
                    <input
                        type="email"
                        class="form-control"
                        placeholder="Your email"
                        aria-label="Your email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                    <div class="input-group-append">
                        <button class="btn btn-primary" type="submit">"Subscribe"</button>
                    </div>
                </div>
            </form>
        </div>
    }
}
