//! Student Form Component
//!
//! Add (`student_id = None`) or edit an existing student.

use leptos::prelude::*;
use leptos::task::spawn_local;
use sis_core::domain::{wire, Student};
use sis_core::{Action, View};

use crate::context::use_app_context;

#[component]
pub fn StudentForm(student_id: Option<u32>) -> impl IntoView {
    let ctx = use_app_context();

    let (name, set_name) = signal(String::new());
    let (date_of_birth, set_date_of_birth) = signal(String::new());
    let (address, set_address) = signal(String::new());
    let (contact, set_contact) = signal(String::new());
    let (program, set_program) = signal(String::new());
    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal(None::<String>);

    if let Some(id) = student_id {
        spawn_local(async move {
            match ctx.api().get_student(id).await {
                Ok(student) => {
                    set_name.set(student.name);
                    set_date_of_birth.set(wire::date_input_value(student.date_of_birth));
                    set_address.set(student.address);
                    set_contact.set(student.contact);
                    set_program.set(student.program);
                }
                Err(e) => set_error.set(Some(e.user_message("Failed to fetch student details"))),
            }
        });
    }

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let student = Student {
            id: student_id,
            name: name.get_untracked().trim().to_string(),
            date_of_birth: wire::parse_date(&date_of_birth.get_untracked()),
            address: address.get_untracked(),
            contact: contact.get_untracked(),
            program: program.get_untracked(),
        };
        let action = if student_id.is_some() { Action::EditStudent } else { Action::AddStudent };
        let api = match ctx.api_for(action) {
            Ok(api) => api,
            Err(e) => return set_error.set(Some(e.user_message("Failed to save student"))),
        };
        set_saving.set(true);
        set_error.set(None);

        spawn_local(async move {
            let result = match student_id {
                Some(id) => api.update_student(id, &student).await,
                None => api.create_student(&student).await.map(|_| ()),
            };
            match result {
                Ok(()) => {
                    log::info!("[STUDENTS] Saved student {:?}", student_id);
                    ctx.notify_success(if student_id.is_some() {
                        "Student updated successfully!"
                    } else {
                        "Student created successfully!"
                    });
                    ctx.navigate(View::Students);
                }
                Err(e) => {
                    let context = if student_id.is_some() {
                        "Failed to update student"
                    } else {
                        "Failed to create student"
                    };
                    set_error.set(Some(e.user_message(context)));
                    set_saving.set(false);
                }
            }
        });
    };

    let text_field = move |label: &'static str, kind: &'static str, value: ReadSignal<String>, set: WriteSignal<String>| {
        view! {
            <label>
                {label}
                <input
                    type=kind
                    prop:value=move || value.get()
                    on:input=move |ev| set.set(event_target_value(&ev))
                />
            </label>
        }
    };

    view! {
        <section class="screen student-form">
            <h2>{if student_id.is_some() { "Edit Student" } else { "Add Student" }}</h2>
            {move || error.get().map(|msg| view! { <div class="form-error">{msg}</div> })}
            <form on:submit=submit>
                {text_field("Name", "text", name, set_name)}
                {text_field("Date of Birth", "date", date_of_birth, set_date_of_birth)}
                {text_field("Address", "text", address, set_address)}
                {text_field("Contact", "text", contact, set_contact)}
                {text_field("Program", "text", program, set_program)}
                <div class="form-actions">
                    <button type="submit" class="primary-btn" disabled=move || saving.get()>
                        {if student_id.is_some() { "Save Changes" } else { "Add Student" }}
                    </button>
                    <button type="button" on:click=move |_| ctx.navigate(View::Students)>"Cancel"</button>
                </div>
            </form>
        </section>
    }
}
