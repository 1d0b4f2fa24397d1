//! Delete Confirm Button Component
//!
//! Two-step delete: the first click only arms the button, nothing is sent
//! until the user confirms.

use leptos::prelude::*;

fn button_class(extra: Option<&str>) -> String {
    match extra.map(str::trim).filter(|c| !c.is_empty()) {
        Some(extra) => format!("delete-btn {}", extra),
        None => "delete-btn".to_string(),
    }
}

/// Inline delete confirmation
///
/// # Arguments
/// * `label` - Text of the initial button, e.g. "Delete Grade"
/// * `prompt` - Question shown while armed, defaults to "Delete?"
/// * `class` - Extra CSS class for the initial button
/// * `on_confirm` - Runs once per confirmation
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] label: String,
    #[prop(optional, into)] prompt: Option<String>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let armed = RwSignal::new(false);
    let prompt = prompt.unwrap_or_else(|| "Delete?".to_string());
    let button_class = button_class(class.as_deref());

    move || {
        if armed.get() {
            view! {
                <span class="delete-confirm" role="alertdialog">
                    <span class="delete-confirm-text">{prompt.clone()}</span>
                    <button
                        class="confirm-btn"
                        title="Confirm"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            armed.set(false);
                            on_confirm.run(());
                        }
                    >
                        "✓"
                    </button>
                    <button
                        class="cancel-btn"
                        title="Cancel"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            armed.set(false);
                        }
                    >
                        "✗"
                    </button>
                </span>
            }
            .into_any()
        } else {
            view! {
                <button
                    class=button_class.clone()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        armed.set(true);
                    }
                >
                    {label.clone()}
                </button>
            }
            .into_any()
        }
    }
}
