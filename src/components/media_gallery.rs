//! Media Gallery Component
//!
//! Carousel over the selected car's media with previous/next controls and
//! autoplay.

use std::time::Duration;

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::StorefrontStateStoreFields;

/// Autoplay interval between slides
const AUTOPLAY_INTERVAL: Duration = Duration::from_millis(5_000);

/// Move `delta` slides from `index`, wrapping around both ends
pub fn step(index: usize, len: usize, delta: isize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as isize;
    ((index as isize + delta).rem_euclid(len)) as usize
}

/// Media carousel for the selected car
#[component]
pub fn MediaGallery() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let (current, set_current) = signal(0usize);

    // Back to the first slide whenever another car's media arrives
    Effect::new(move |_| {
        let _ = store.media().with(|media| media.len());
        set_current.set(0);
    });

    let advance = move |delta: isize| {
        let len = store.media().with_untracked(|media| media.len());
        set_current.update(|i| *i = step(*i, len, delta));
    };

    match set_interval_with_handle(move || advance(1), AUTOPLAY_INTERVAL) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(err) => log::warn!("Carousel autoplay unavailable: {:?}", err),
    }

    view! {
        <h3>"Media Gallery"</h3>
        <Show
            when=move || store.media().with(|media| !media.is_empty())
            fallback=|| view! { <p>"No media available"</p> }
        >
            <div class="carousel slide mb-5">
                <div class="carousel-inner">
                    {move || store.media().get().into_iter().enumerate().map(|(index, item)| {
                        let alt = item.alternative_text.clone().unwrap_or_else(|| format!("Media {}", index + 1));
                        view! {
                            <div class=move || if current.get() == index { "carousel-item active" } else { "carousel-item" }>
                                <img src=ctx.asset_url(&item.url) alt=alt class="d-block w-100 carousel-image" />
                            </div>
                        }
                    }).collect_view()}
                </div>
                <button class="carousel-control-prev" type="button" on:click=move |_| advance(-1)>
                    <span class="carousel-control-prev-icon" aria-hidden="true"></span>
                    <span class="visually-hidden">"Previous"</span>
                </button>
                <button class="carousel-control-next" type="button" on:click=move |_| advance(1)>
                    <span class="carousel-control-next-icon" aria-hidden="true"></span>
                    <span class="visually-hidden">"Next"</span>
                </button>
            </div>
        </Show>
    }
}
