//! Notice Banner Component
//!
//! One-line success or warning message above the active screen. Clears
//! itself after a few seconds unless a newer notice replaced it.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::store::{store_dismiss_notice, AppStateStoreFields, NoticeKind};

const AUTO_DISMISS_MS: u32 = 5_000;

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let store = use_app_context().store;

    Effect::new(move |_| {
        let Some(shown) = store.notice().get() else {
            return;
        };
        spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            if store.notice().get_untracked().as_ref() == Some(&shown) {
                store_dismiss_notice(&store);
            }
        });
    });

    view! {
        {move || store.notice().get().map(|notice| {
            let class = match notice.kind {
                NoticeKind::Success => "notice notice-success",
                NoticeKind::Warning => "notice notice-warning",
            };
            view! {
                <div class=class>
                    <span class="notice-text">{notice.text}</span>
                    <button class="notice-close" on:click=move |_| store_dismiss_notice(&store)>"×"</button>
                </div>
            }
        })}
    }
}
