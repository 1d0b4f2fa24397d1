//! Enrollment Form Component
//!
//! Pick a student and a course. Both pickers are filled from one joint
//! fetch.

use leptos::prelude::*;
use leptos::task::spawn_local;
use sis_core::domain::{wire, Course, Enrollment, Student};
use sis_core::{Action, View};

use crate::context::use_app_context;

#[component]
pub fn EnrollmentForm() -> impl IntoView {
    let ctx = use_app_context();

    let (students, set_students) = signal(Vec::<Student>::new());
    let (courses, set_courses) = signal(Vec::<Course>::new());
    let (student_id, set_student_id) = signal(0u32);
    let (course_id, set_course_id) = signal(0u32);
    let (enrollment_date, set_enrollment_date) = signal(String::new());
    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal(None::<String>);

    spawn_local(async move {
        let api = ctx.api();
        match futures::try_join!(api.list_students(), api.list_courses()) {
            Ok((s, c)) => {
                set_students.set(s);
                set_courses.set(c);
            }
            Err(e) => set_error.set(Some(e.user_message("Failed to fetch students and courses"))),
        }
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let enrollment = Enrollment {
            enrollment_date: wire::parse_date(&enrollment_date.get_untracked()),
            ..Enrollment::new(student_id.get_untracked(), course_id.get_untracked())
        };
        let api = match ctx.api_for(Action::AddEnrollment) {
            Ok(api) => api,
            Err(e) => return set_error.set(Some(e.user_message("Failed to create enrollment"))),
        };
        set_saving.set(true);
        set_error.set(None);

        spawn_local(async move {
            match api.create_enrollment(&enrollment).await {
                Ok(created) => {
                    log::info!(
                        "[ENROLLMENTS] Enrolled student {} in course {} as {:?}",
                        enrollment.student_id,
                        enrollment.course_id,
                        created.id
                    );
                    ctx.notify_success("Enrollment created successfully!");
                    ctx.navigate(View::Enrollments);
                }
                Err(e) => {
                    set_error.set(Some(e.user_message("Failed to create enrollment")));
                    set_saving.set(false);
                }
            }
        });
    };

    let parse_id = |ev: &web_sys::Event| event_target_value(ev).parse::<u32>().unwrap_or(0);

    view! {
        <section class="screen enrollment-form">
            <h2>"Add Enrollment"</h2>
            {move || error.get().map(|msg| view! { <div class="form-error">{msg}</div> })}
            <form on:submit=submit>
                <label>
                    "Student"
                    <select on:change=move |ev| set_student_id.set(parse_id(&ev))>
                        <option value="0">"Select a student"</option>
                        {move || students.get().into_iter().filter_map(|s| {
                            let id = s.id?;
                            Some(view! { <option value=id.to_string()>{format!("{} (ID: {})", s.name, id)}</option> })
                        }).collect_view()}
                    </select>
                </label>
                <label>
                    "Course"
                    <select on:change=move |ev| set_course_id.set(parse_id(&ev))>
                        <option value="0">"Select a course"</option>
                        {move || courses.get().into_iter().filter_map(|c| {
                            let id = c.id?;
                            Some(view! { <option value=id.to_string()>{c.picker_label()}</option> })
                        }).collect_view()}
                    </select>
                </label>
                <label>
                    "Enrollment Date"
                    <input
                        type="date"
                        prop:value=move || enrollment_date.get()
                        on:input=move |ev| set_enrollment_date.set(event_target_value(&ev))
                    />
                </label>
                <div class="form-actions">
                    <button type="submit" class="primary-btn" disabled=move || saving.get()>
                        "Enroll"
                    </button>
                    <button type="button" on:click=move |_| ctx.navigate(View::Enrollments)>"Cancel"</button>
                </div>
            </form>
        </section>
    }
}
