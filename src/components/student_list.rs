//! Student List Component
//!
//! Faculty overview of all students with view, edit and delete actions.

use leptos::prelude::*;
use leptos::task::spawn_local;
use sis_core::domain::{wire, Student};
use sis_core::{Action, View};

use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;

#[component]
pub fn StudentList() -> impl IntoView {
    let ctx = use_app_context();

    let (students, set_students) = signal(Vec::<Student>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    // Bumped to refetch after a mutation
    let (reload, set_reload) = signal(0u32);

    let can_add = ctx.permits(Action::AddStudent);
    let can_edit = ctx.permits(Action::EditStudent);
    let can_delete = ctx.permits(Action::DeleteStudent);

    Effect::new(move |_| {
        reload.track();
        set_loading.set(true);
        spawn_local(async move {
            match ctx.api().list_students().await {
                Ok(list) => {
                    log::info!("[STUDENTS] Loaded {} students", list.len());
                    set_students.set(list);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("[STUDENTS] Load failed: {}", e);
                    set_error.set(Some(e.user_message("Failed to fetch students")));
                }
            }
            set_loading.set(false);
        });
    });

    let delete_student = move |id: u32| {
        let api = match ctx.api_for(Action::DeleteStudent) {
            Ok(api) => api,
            Err(e) => return set_error.set(Some(e.user_message("Failed to delete student"))),
        };
        spawn_local(async move {
            match api.delete_student(id).await {
                Ok(()) => {
                    log::info!("[STUDENTS] Deleted student {}", id);
                    ctx.notify_success("Student deleted successfully!");
                    set_reload.update(|n| *n += 1);
                }
                Err(e) => set_error.set(Some(e.user_message("Failed to delete student"))),
            }
        });
    };

    view! {
        <section class="screen student-list">
            <div class="screen-header">
                <h2>"Students"</h2>
                <Show when=move || can_add>
                    <button class="primary-btn" on:click=move |_| ctx.navigate(View::AddStudent)>
                        "Add Student"
                    </button>
                </Show>
            </div>
            {move || error.get().map(|msg| view! { <div class="form-error">{msg}</div> })}
            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="loading">"Loading students..."</div> }
            >
                <Show
                    when=move || !students.with(Vec::is_empty)
                    fallback=|| view! { <div class="empty">"No students found."</div> }
                >
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"ID"</th>
                                <th>"Name"</th>
                                <th>"Date of Birth"</th>
                                <th>"Program"</th>
                                <th>"Contact"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || students.get().into_iter().filter_map(|s| s.id.map(|id| (id, s)))
                                key=|(id, _)| *id
                                children=move |(id, student)| {
                                    view! {
                                        <tr>
                                            <td>{id}</td>
                                            <td>{student.name.clone()}</td>
                                            <td>{wire::date_label(student.date_of_birth)}</td>
                                            <td>{wire::text_label(&student.program).to_string()}</td>
                                            <td>{wire::text_label(&student.contact).to_string()}</td>
                                            <td class="actions">
                                                <button on:click=move |_| ctx.navigate(View::StudentDetails(id))>
                                                    "View"
                                                </button>
                                                <Show when=move || can_edit>
                                                    <button on:click=move |_| ctx.navigate(View::EditStudent(id))>
                                                        "Edit"
                                                    </button>
                                                </Show>
                                                <Show when=move || can_delete>
                                                    <DeleteConfirmButton
                                                        label="Delete"
                                                        prompt="Delete this student?"
                                                        on_confirm=move |_| delete_student(id)
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
