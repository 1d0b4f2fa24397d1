//! Navigation Bar Component
//!
//! Role-dependent entries plus logout.

use leptos::prelude::*;
use sis_core::{view, Session};

use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

#[component]
pub fn NavBar(session: Session) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let items = view::navigation(&session);

    view! {
        <nav class="nav-bar">
            <span class="nav-title">"SIS"</span>
            <div class="nav-items">
                {items.into_iter().map(|item| {
                    let target = item.view;
                    let is_active = move || store.view().get() == target;
                    view! {
                        <button
                            class=move || if is_active() { "nav-btn active" } else { "nav-btn" }
                            on:click=move |_| ctx.navigate(target)
                        >
                            {item.label}
                        </button>
                    }
                }).collect_view()}
            </div>
            <span class="nav-user">
                {format!("{} #{}", session.role.label(), session.id)}
            </span>
            <button class="logout-btn" on:click=move |_| ctx.sign_out()>"Logout"</button>
        </nav>
    }
}
