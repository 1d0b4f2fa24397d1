//! Login Form Component
//!
//! Id, password and role. A failed attempt keeps the user here with the
//! server's reason.

use leptos::prelude::*;
use leptos::task::spawn_local;
use sis_core::domain::{LoginRequest, Role};

use crate::context::use_app_context;

#[component]
pub fn LoginForm() -> impl IntoView {
    let ctx = use_app_context();

    let (user_id, set_user_id) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (role, set_role) = signal(Role::Student);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        let request = LoginRequest {
            // 0 fails validation with the same message as garbage input
            id: user_id.get_untracked().trim().parse().unwrap_or(0),
            password: password.get_untracked(),
            role: role.get_untracked(),
        };
        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            match ctx.api().login(&request).await {
                Ok(session) => ctx.sign_in(session),
                Err(e) => {
                    log::warn!("[LOGIN] Failed for id {}: {}", request.id, e);
                    set_error.set(Some(e.user_message("Login failed")));
                    set_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <form class="login-form" on:submit=submit>
                <h2>"Student Information System"</h2>
                {move || error.get().map(|msg| view! { <div class="form-error">{msg}</div> })}
                <label>
                    "ID"
                    <input
                        type="number"
                        min="1"
                        prop:value=move || user_id.get()
                        on:input=move |ev| set_user_id.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Password"
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Role"
                    <select
                        prop:value=move || role.get().as_str()
                        on:change=move |ev| {
                            if let Some(r) = Role::parse(&event_target_value(&ev)) {
                                set_role.set(r);
                            }
                        }
                    >
                        {[Role::Student, Role::Faculty].into_iter().map(|r| view! {
                            <option value=r.as_str()>{r.label()}</option>
                        }).collect_view()}
                    </select>
                </label>
                <button type="submit" class="primary-btn" disabled=move || loading.get()>
                    {move || if loading.get() { "Signing in..." } else { "Login" }}
                </button>
            </form>
        </div>
    }
}
