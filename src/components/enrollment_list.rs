//! Enrollment List Component
//!
//! Enrollments joined with student names and course titles. All three
//! collections are fetched together and joined once every one resolved.

use leptos::prelude::*;
use leptos::task::spawn_local;
use sis_core::domain::{wire, Course, Enrollment, Student};
use sis_core::transcript::{course_title, student_name};
use sis_core::{Action, View};

use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;

/// Enrollment with its lookups resolved for display
#[derive(Clone, Debug, PartialEq)]
struct EnrollmentRow {
    id: u32,
    student: String,
    course: String,
    enrolled_on: String,
}

fn build_rows(enrollments: &[Enrollment], students: &[Student], courses: &[Course]) -> Vec<EnrollmentRow> {
    enrollments
        .iter()
        .filter_map(|e| {
            Some(EnrollmentRow {
                id: e.id?,
                student: student_name(students, e.student_id).to_string(),
                course: course_title(courses, e.course_id).to_string(),
                enrolled_on: wire::date_label(e.enrollment_date),
            })
        })
        .collect()
}

#[component]
pub fn EnrollmentList() -> impl IntoView {
    let ctx = use_app_context();

    let (rows, set_rows) = signal(Vec::<EnrollmentRow>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let (reload, set_reload) = signal(0u32);

    let can_add = ctx.permits(Action::AddEnrollment);
    let can_delete = ctx.permits(Action::DeleteEnrollment);

    Effect::new(move |_| {
        reload.track();
        set_loading.set(true);
        spawn_local(async move {
            let api = ctx.api();
            let fetched = futures::try_join!(
                api.list_enrollments(None),
                api.list_students(),
                api.list_courses(),
            );
            match fetched {
                Ok((enrollments, students, courses)) => {
                    log::info!("[ENROLLMENTS] Loaded {} enrollments", enrollments.len());
                    set_rows.set(build_rows(&enrollments, &students, &courses));
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("[ENROLLMENTS] Load failed: {}", e);
                    set_error.set(Some(e.user_message("Failed to fetch data")));
                }
            }
            set_loading.set(false);
        });
    });

    let delete_enrollment = move |id: u32| {
        let api = match ctx.api_for(Action::DeleteEnrollment) {
            Ok(api) => api,
            Err(e) => return set_error.set(Some(e.user_message("Failed to delete enrollment"))),
        };
        spawn_local(async move {
            match api.delete_enrollment(id).await {
                Ok(()) => {
                    log::info!("[ENROLLMENTS] Deleted enrollment {}", id);
                    ctx.notify_success("Enrollment deleted successfully!");
                    set_reload.update(|n| *n += 1);
                }
                Err(e) => set_error.set(Some(e.user_message("Failed to delete enrollment"))),
            }
        });
    };

    view! {
        <section class="screen enrollment-list">
            <div class="screen-header">
                <h2>"Enrollments"</h2>
                <Show when=move || can_add>
                    <button class="primary-btn" on:click=move |_| ctx.navigate(View::AddEnrollment)>
                        "Add Enrollment"
                    </button>
                </Show>
            </div>
            {move || error.get().map(|msg| view! { <div class="form-error">{msg}</div> })}
            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="loading">"Loading enrollments..."</div> }
            >
                <Show
                    when=move || !rows.with(Vec::is_empty)
                    fallback=|| view! { <div class="empty">"No enrollments found."</div> }
                >
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"ID"</th>
                                <th>"Student"</th>
                                <th>"Course"</th>
                                <th>"Enrollment Date"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || rows.get()
                                key=|row| row.id
                                children=move |row| {
                                    let id = row.id;
                                    view! {
                                        <tr>
                                            <td>{id}</td>
                                            <td>{row.student}</td>
                                            <td>{row.course}</td>
                                            <td>{row.enrolled_on}</td>
                                            <td class="actions">
                                                <Show when=move || can_delete>
                                                    <DeleteConfirmButton
                                                        label="Delete"
                                                        prompt="Remove this enrollment?"
                                                        on_confirm=move |_| delete_enrollment(id)
                                                    />
                                                </Show>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </Show>
            </Show>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_build_rows_uses_placeholders() {
        let students = vec![Student { id: Some(1), ..Student::new("Ada") }];
        let courses = vec![Course { id: Some(10), ..Course::new("CS101", "Intro", 3) }];
        let enrollments = vec![
            Enrollment {
                id: Some(100),
                enrollment_date: NaiveDate::from_ymd_opt(2024, 9, 2),
                ..Enrollment::new(1, 10)
            },
            Enrollment { id: Some(101), ..Enrollment::new(2, 11) },
            Enrollment::new(1, 10),
        ];

        let rows = build_rows(&enrollments, &students, &courses);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].student, "Ada");
        assert_eq!(rows[0].course, "Intro");
        assert_eq!(rows[0].enrolled_on, "2024-09-02");
        assert_eq!(rows[1].student, "Unknown Student");
        assert_eq!(rows[1].course, "Unknown Course");
        assert_eq!(rows[1].enrolled_on, "N/A");
    }
}
