//! Grade Editor Component
//!
//! Modal for adding or editing the grade of one enrollment. An existing
//! grade is reloaded from the server so the form never edits a stale copy.

use leptos::prelude::*;
use leptos::task::spawn_local;
use sis_core::domain::wire::{self, optional_semester};
use sis_core::domain::Grade;
use sis_core::Action;

use crate::context::use_app_context;

/// Grade being edited, prefilled from its transcript row
#[derive(Clone, Debug, PartialEq)]
pub struct GradeTarget {
    pub draft: Grade,
    pub course_label: String,
}

#[component]
pub fn GradeEditor(
    target: GradeTarget,
    #[prop(into)] on_saved: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let GradeTarget { draft, course_label } = target;
    let enrollment_id = draft.enrollment_id;
    let grade_id = draft.id;
    let is_new = draft.is_new();

    let (grade, set_grade) = signal(draft.grade.map(|g| g.to_string()).unwrap_or_default());
    let (semester, set_semester) = signal(draft.semester.unwrap_or_default());
    let (enrolled_on, set_enrolled_on) = signal(None::<String>);
    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal(None::<String>);

    spawn_local(async move {
        let api = ctx.api();
        match api.get_enrollment(enrollment_id).await {
            Ok(enrollment) => set_enrolled_on.set(Some(wire::date_label(enrollment.enrollment_date))),
            Err(e) => log::warn!("[GRADES] Enrollment {} lookup failed: {}", enrollment_id, e),
        }
        if let Some(id) = grade_id {
            match api.get_grade(id).await {
                Ok(current) => {
                    set_grade.set(current.grade.map(|g| g.to_string()).unwrap_or_default());
                    set_semester.set(current.semester.unwrap_or_default());
                }
                Err(e) => set_error.set(Some(e.user_message("Failed to fetch grade"))),
            }
        }
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let record = Grade {
            id: grade_id,
            enrollment_id,
            grade: grade
                .get_untracked()
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|g| g.is_finite()),
            semester: optional_semester::normalize(&semester.get_untracked()),
        };
        let api = match ctx.api_for(Action::ManageGrades) {
            Ok(api) => api,
            Err(e) => return set_error.set(Some(e.user_message("Failed to save grade"))),
        };
        set_saving.set(true);
        set_error.set(None);

        spawn_local(async move {
            let result = match grade_id {
                Some(id) => api.update_grade(id, &record).await,
                None => api.add_grade(&record).await.map(|_| ()),
            };
            match result {
                Ok(()) => {
                    log::info!("[GRADES] Saved grade for enrollment {}", enrollment_id);
                    ctx.notify_success(if is_new {
                        "Grade added successfully!"
                    } else {
                        "Grade updated successfully!"
                    });
                    on_saved.run(());
                }
                Err(e) => {
                    set_error.set(Some(e.user_message("Failed to save grade")));
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_cancel.run(())>
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <h3>{if is_new { "Add Grade" } else { "Edit Grade" }}</h3>
                <p class="modal-subtitle">
                    {course_label}
                    {move || enrolled_on.get().map(|d| format!(" (enrolled {})", d))}
                </p>
                {move || error.get().map(|msg| view! { <div class="form-error">{msg}</div> })}
                <form on:submit=submit>
                    <label>
                        "Grade"
                        <input
                            type="number"
                            step="0.01"
                            prop:value=move || grade.get()
                            on:input=move |ev| set_grade.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Semester"
                        <input
                            type="text"
                            placeholder="e.g. Fall 2024"
                            prop:value=move || semester.get()
                            on:input=move |ev| set_semester.set(event_target_value(&ev))
                        />
                    </label>
                    <div class="form-actions">
                        <button type="submit" class="primary-btn" disabled=move || saving.get()>
                            "Save"
                        </button>
                        <button type="button" on:click=move |_| on_cancel.run(())>"Cancel"</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
