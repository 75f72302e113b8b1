//! Notice Banner Component
//!
//! Shows the current success/error notice and dismisses it after a delay.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::store::{store_dismiss_notice, use_app_store, NoticeKind, StorefrontStateStoreFields};

/// How long a notice stays up (ms)
const NOTICE_TIMEOUT_MS: u32 = 4_000;

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let store = use_app_store();

    // Schedule dismissal for each new notice
    Effect::new(move |_| {
        if let Some(id) = store.notice().with(|n| n.as_ref().map(|n| n.id)) {
            spawn_local(async move {
                TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
                store_dismiss_notice(&store, id);
            });
        }
    });

    view! {
        {move || store.notice().get().map(|notice| {
            let class = match notice.kind {
                NoticeKind::Success => "alert alert-success",
                NoticeKind::Error => "alert alert-danger",
            };
            let id = notice.id;
            view! {
                <div class=class role="alert">
                    {notice.message}
                    <button
                        type="button"
                        class="btn-close"
                        aria-label="Close"
                        on:click=move |_| store_dismiss_notice(&store, id)
                    ></button>
                </div>
            }
        })}
    }
}
