//! Student Details Component
//!
//! Personal information, GPA and transcript of one student. Faculty also
//! manage grades here, one enrollment row at a time.

use leptos::prelude::*;
use leptos::task::spawn_local;
use sis_core::domain::{wire, Student};
use sis_core::transcript::{self, UNKNOWN_STUDENT};
use sis_core::{
    gpa, Action, ClientError, ClientResult, GpaReport, StudentTranscript, TranscriptCourse, View,
};

use super::grade_editor::{GradeEditor, GradeTarget};
use crate::api::ApiClient;
use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;

/// Transcript joined in the client from the raw collections
async fn joined_transcript(
    api: &ApiClient,
    student_id: u32,
    student: Option<&Student>,
) -> ClientResult<StudentTranscript> {
    let (enrollments, courses, grades) = futures::try_join!(
        api.list_enrollments(Some(student_id)),
        api.list_courses(),
        api.list_grades(),
    )?;
    Ok(transcript::assemble(student_id, student, &enrollments, &courses, &grades))
}

/// Error line after a reload finished; `None` clears what an earlier
/// action left on screen
fn reload_error(student: Option<&ClientError>, transcript: Option<&ClientError>) -> Option<String> {
    student
        .map(|e| e.user_message("Failed to fetch student details"))
        .or_else(|| transcript.map(|e| e.user_message("Failed to fetch student transcript")))
}

#[component]
pub fn StudentDetails(student_id: u32) -> impl IntoView {
    let ctx = use_app_context();

    let (student, set_student) = signal(None::<Student>);
    let (transcript, set_transcript) = signal(None::<StudentTranscript>);
    let (gpa_report, set_gpa_report) = signal(None::<GpaReport>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let (reload, set_reload) = signal(0u32);
    let editing = RwSignal::new(None::<GradeTarget>);

    let can_manage = ctx.permits(Action::ManageGrades);
    let can_list = ctx.permits(Action::ListStudents);

    Effect::new(move |_| {
        reload.track();
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            let api = ctx.api();
            let (student_res, transcript_res, gpa_res) = futures::join!(
                api.get_student(student_id),
                api.get_transcript(student_id),
                api.get_gpa(student_id),
            );

            if let Err(e) = &student_res {
                log::error!("[DETAILS] Student {} load failed: {}", student_id, e);
            }
            let loaded = student_res.as_ref().ok().cloned();

            // Grade management needs enrollment and grade ids, which only
            // the client-side join carries
            let transcript_res = if can_manage {
                match joined_transcript(&api, student_id, loaded.as_ref()).await {
                    Ok(t) => Ok(t),
                    Err(e) => {
                        log::warn!("[DETAILS] Client-side join failed, using server transcript: {}", e);
                        transcript_res
                    }
                }
            } else {
                match transcript_res {
                    Ok(t) => Ok(t),
                    Err(e) => {
                        log::warn!("[DETAILS] Server transcript failed, joining locally: {}", e);
                        joined_transcript(&api, student_id, loaded.as_ref()).await
                    }
                }
            };
            set_error.set(reload_error(student_res.err().as_ref(), transcript_res.as_ref().err()));
            match transcript_res {
                Ok(t) => {
                    log::info!("[DETAILS] Student {} has {} transcript rows", student_id, t.courses.len());
                    set_transcript.set(Some(t));
                }
                Err(e) => {
                    log::error!("[DETAILS] Transcript for {} failed: {}", student_id, e);
                    set_transcript.set(None);
                }
            }

            match gpa_res {
                Ok(report) => set_gpa_report.set(Some(report)),
                Err(e) => {
                    log::warn!("[DETAILS] GPA endpoint failed, computing locally: {}", e);
                    set_gpa_report.set(None);
                }
            }

            set_student.set(loaded);
            set_loading.set(false);
        });
    });

    let delete_grade = move |grade_id: u32| {
        let api = match ctx.api_for(Action::ManageGrades) {
            Ok(api) => api,
            Err(e) => return set_error.set(Some(e.user_message("Failed to delete grade"))),
        };
        spawn_local(async move {
            match api.delete_grade(grade_id).await {
                Ok(()) => {
                    log::info!("[GRADES] Deleted grade {}", grade_id);
                    ctx.notify_success("Grade deleted successfully!");
                    set_reload.update(|n| *n += 1);
                }
                Err(e) => set_error.set(Some(e.user_message("Failed to delete grade"))),
            }
        });
    };

    let rows = move || transcript.with(|t| t.as_ref().map(|t| t.courses.clone()).unwrap_or_default());

    let gpa_text = move || {
        let rows = rows();
        gpa_report.with(|report| gpa::format_gpa(gpa::resolve(report.as_ref(), &rows)))
    };

    let heading = move || {
        student
            .with(|s| s.as_ref().map(|s| s.name.clone()))
            .or_else(|| transcript.with(|t| t.as_ref().map(|t| t.student_name.clone())))
            .unwrap_or_else(|| UNKNOWN_STUDENT.to_string())
    };

    let render_row = move |row: TranscriptCourse| {
        let course_label = format!("{} ({})", row.course_title, row.course_code);
        let actions = row.grade_draft().filter(|_| can_manage).map(|draft| {
            let grade_id = draft.id;
            let target = GradeTarget { draft, course_label };
            view! {
                <button on:click=move |_| editing.set(Some(target.clone()))>
                    {if grade_id.is_some() { "Edit Grade" } else { "Add Grade" }}
                </button>
                {grade_id.map(|id| view! {
                    <DeleteConfirmButton
                        label="Delete Grade"
                        class="small"
                        prompt="Delete this grade?"
                        on_confirm=move |_| delete_grade(id)
                    />
                })}
            }
        });
        view! {
            <tr>
                <td>{row.course_code.clone()}</td>
                <td>{row.course_title.clone()}</td>
                <td>{row.credits}</td>
                <td>{row.grade_label()}</td>
                <td>{row.semester_label().to_string()}</td>
                {can_manage.then(|| view! { <td class="actions">{actions}</td> })}
            </tr>
        }
    };

    view! {
        <section class="screen student-details">
            <div class="screen-header">
                <h2>{heading}</h2>
                <Show when=move || can_list>
                    <button on:click=move |_| ctx.navigate(View::Students)>"Back to Students"</button>
                </Show>
            </div>
            {move || error.get().map(|msg| view! { <div class="form-error">{msg}</div> })}
            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="loading">"Loading student details..."</div> }
            >
                {move || student.get().map(|s| view! {
                    <dl class="student-info">
                        <dt>"Student ID"</dt><dd>{student_id}</dd>
                        <dt>"Date of Birth"</dt><dd>{wire::date_label(s.date_of_birth)}</dd>
                        <dt>"Address"</dt><dd>{wire::text_label(&s.address).to_string()}</dd>
                        <dt>"Contact"</dt><dd>{wire::text_label(&s.contact).to_string()}</dd>
                        <dt>"Program"</dt><dd>{wire::text_label(&s.program).to_string()}</dd>
                    </dl>
                })}
                <div class="gpa-summary">
                    <span class="gpa-label">"GPA: "</span>
                    <span class="gpa-value">{gpa_text}</span>
                </div>
                <h3>"Transcript"</h3>
                <Show
                    when=move || !rows().is_empty()
                    fallback=|| view! { <div class="empty">"No enrollments yet."</div> }
                >
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Code"</th>
                                <th>"Course"</th>
                                <th>"Credits"</th>
                                <th>"Grade"</th>
                                <th>"Semester"</th>
                                <Show when=move || can_manage>
                                    <th>"Actions"</th>
                                </Show>
                            </tr>
                        </thead>
                        <tbody>
                            {move || rows().into_iter().map(render_row).collect_view()}
                        </tbody>
                    </table>
                </Show>
            </Show>
            {move || editing.get().map(|target| view! {
                <GradeEditor
                    target=target
                    on_saved=move |_| {
                        editing.set(None);
                        set_reload.update(|n| *n += 1);
                    }
                    on_cancel=move |_| editing.set(None)
                />
            })}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_successful_reload_clears_error() {
        assert_eq!(reload_error(None, None), None);
    }

    #[test]
    fn test_reload_error_prefers_student_failure() {
        let student = ClientError::server(404, r#"{"error": "Student not found"}"#);
        let transcript = ClientError::Transport("Failed to fetch".to_string());

        assert_eq!(
            reload_error(Some(&student), Some(&transcript)).as_deref(),
            Some("Failed to fetch student details: Student not found")
        );
        assert_eq!(
            reload_error(None, Some(&transcript)).as_deref(),
            Some("Failed to fetch student transcript: network error: Failed to fetch")
        );
    }
}
