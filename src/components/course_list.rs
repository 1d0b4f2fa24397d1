//! Course List Component

use leptos::prelude::*;
use leptos::task::spawn_local;
use sis_core::domain::Course;
use sis_core::{Action, View};

use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;

#[component]
pub fn CourseList() -> impl IntoView {
    let ctx = use_app_context();

    let (courses, set_courses) = signal(Vec::<Course>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let (reload, set_reload) = signal(0u32);

    let can_add = ctx.permits(Action::AddCourse);
    let can_edit = ctx.permits(Action::EditCourse);
    let can_delete = ctx.permits(Action::DeleteCourse);

    Effect::new(move |_| {
        reload.track();
        set_loading.set(true);
        spawn_local(async move {
            match ctx.api().list_courses().await {
                Ok(list) => {
                    log::info!("[COURSES] Loaded {} courses", list.len());
                    set_courses.set(list);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("[COURSES] Load failed: {}", e);
                    set_error.set(Some(e.user_message("Failed to fetch courses")));
                }
            }
            set_loading.set(false);
        });
    });

    let delete_course = move |id: u32| {
        let api = match ctx.api_for(Action::DeleteCourse) {
            Ok(api) => api,
            Err(e) => return set_error.set(Some(e.user_message("Failed to delete course"))),
        };
        spawn_local(async move {
            match api.delete_course(id).await {
                Ok(()) => {
                    log::info!("[COURSES] Deleted course {}", id);
                    ctx.notify_success("Course deleted successfully!");
                    set_reload.update(|n| *n += 1);
                }
                Err(e) => set_error.set(Some(e.user_message("Failed to delete course"))),
            }
        });
    };

    view! {
        <section class="screen course-list">
            <div class="screen-header">
                <h2>"Courses"</h2>
                <Show when=move || can_add>
                    <button class="primary-btn" on:click=move |_| ctx.navigate(View::AddCourse)>
                        "Add Course"
                    </button>
                </Show>
            </div>
            {move || error.get().map(|msg| view! { <div class="form-error">{msg}</div> })}
            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="loading">"Loading courses..."</div> }
            >
                <Show
                    when=move || !courses.with(Vec::is_empty)
                    fallback=|| view! { <div class="empty">"No courses found."</div> }
                >
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"ID"</th>
                                <th>"Code"</th>
                                <th>"Title"</th>
                                <th>"Credits"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || courses.get().into_iter().filter_map(|c| c.id.map(|id| (id, c)))
                                key=|(id, _)| *id
                                children=move |(id, course)| {
                                    view! {
                                        <tr>
                                            <td>{id}</td>
                                            <td>{course.code}</td>
                                            <td>{course.title}</td>
                                            <td>{course.credits}</td>
                                            <td class="actions">
                                                <Show when=move || can_edit>
                                                    <button on:click=move |_| ctx.navigate(View::EditCourse(id))>
                                                        "Edit"
                                                    </button>
                                                </Show>
                                                <Show when=move || can_delete>
                                                    <DeleteConfirmButton
                                                        label="Delete"
                                                        prompt="Delete this course?"
                                                        on_confirm=move |_| delete_course(id)
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
