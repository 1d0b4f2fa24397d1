//! Course Form Component
//!
//! Add or edit a course. Credits arrive as text and must parse to a
//! positive whole number.

use leptos::prelude::*;
use leptos::task::spawn_local;
use sis_core::domain::Course;
use sis_core::{Action, View};

use crate::context::use_app_context;

#[component]
pub fn CourseForm(course_id: Option<u32>) -> impl IntoView {
    let ctx = use_app_context();

    let (code, set_code) = signal(String::new());
    let (title, set_title) = signal(String::new());
    let (credits, set_credits) = signal(String::new());
    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal(None::<String>);

    if let Some(id) = course_id {
        spawn_local(async move {
            match ctx.api().get_course(id).await {
                Ok(course) => {
                    set_code.set(course.code);
                    set_title.set(course.title);
                    set_credits.set(course.credits.to_string());
                }
                Err(e) => set_error.set(Some(e.user_message("Failed to fetch course"))),
            }
        });
    }

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let course = Course {
            id: course_id,
            code: code.get_untracked().trim().to_string(),
            title: title.get_untracked().trim().to_string(),
            // Unparseable credits become 0, which validation rejects
            credits: credits.get_untracked().trim().parse().unwrap_or(0),
        };
        let action = if course_id.is_some() { Action::EditCourse } else { Action::AddCourse };
        let api = match ctx.api_for(action) {
            Ok(api) => api,
            Err(e) => return set_error.set(Some(e.user_message("Failed to save course"))),
        };
        set_saving.set(true);
        set_error.set(None);

        spawn_local(async move {
            let result = match course_id {
                Some(id) => api.update_course(id, &course).await,
                None => api.create_course(&course).await.map(|_| ()),
            };
            match result {
                Ok(()) => {
                    log::info!("[COURSES] Saved course {}", course.code);
                    ctx.notify_success(if course_id.is_some() {
                        "Course updated successfully!"
                    } else {
                        "Course created successfully!"
                    });
                    ctx.navigate(View::Courses);
                }
                Err(e) => {
                    let context = if course_id.is_some() {
                        "Failed to update course"
                    } else {
                        "Failed to create course"
                    };
                    set_error.set(Some(e.user_message(context)));
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <section class="screen course-form">
            <h2>{if course_id.is_some() { "Edit Course" } else { "Add Course" }}</h2>
            {move || error.get().map(|msg| view! { <div class="form-error">{msg}</div> })}
            <form on:submit=submit>
                <label>
                    "Course Code"
                    <input
                        type="text"
                        prop:value=move || code.get()
                        on:input=move |ev| set_code.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Title"
                    <input
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Credits"
                    <input
                        type="number"
                        min="1"
                        prop:value=move || credits.get()
                        on:input=move |ev| set_credits.set(event_target_value(&ev))
                    />
                </label>
                <div class="form-actions">
                    <button type="submit" class="primary-btn" disabled=move || saving.get()>
                        {if course_id.is_some() { "Save Changes" } else { "Add Course" }}
                    </button>
                    <button type="button" on:click=move |_| ctx.navigate(View::Courses)>"Cancel"</button>
                </div>
            </form>
        </section>
    }
}
