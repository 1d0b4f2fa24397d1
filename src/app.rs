//! Student Information System App
//!
//! Top-level shell: login gate, navigation bar, notice banner and the
//! router rendering exactly one screen.

use leptos::prelude::*;
use reactive_stores::Store;
use sis_core::{session, Config, View};

use crate::components::{
    CourseForm, CourseList, EnrollmentForm, EnrollmentList, LoginForm, NavBar, NoticeBanner,
    StudentDetails, StudentForm, StudentList,
};
use crate::context::AppContext;
use crate::storage::BrowserStorage;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App(config: Config) -> impl IntoView {
    // Restore once; afterwards the store is the source of truth
    let restored = session::load(&BrowserStorage::open());
    if let Some(s) = &restored {
        log::info!("[APP] Restored session for {} ({})", s.id, s.role.as_str());
    }
    let store = Store::new(AppState::restore(restored));
    provide_context(AppContext::new(store, config));

    view! {
        <div class="app-layout">
            {move || match store.session().get() {
                None => view! { <LoginForm /> }.into_any(),
                Some(session) => view! {
                    <NavBar session=session />
                    <main class="main-content">
                        <NoticeBanner />
                        {move || render_view(store.view().get())}
                    </main>
                }.into_any(),
            }}
        </div>
    }
}

fn render_view(current: View) -> AnyView {
    match current {
        View::Students => view! { <StudentList /> }.into_any(),
        View::AddStudent => view! { <StudentForm student_id=None /> }.into_any(),
        View::EditStudent(id) => view! { <StudentForm student_id=Some(id) /> }.into_any(),
        View::StudentDetails(id) => view! { <StudentDetails student_id=id /> }.into_any(),
        View::Courses => view! { <CourseList /> }.into_any(),
        View::AddCourse => view! { <CourseForm course_id=None /> }.into_any(),
        View::EditCourse(id) => view! { <CourseForm course_id=Some(id) /> }.into_any(),
        View::Enrollments => view! { <EnrollmentList /> }.into_any(),
        View::AddEnrollment => view! { <EnrollmentForm /> }.into_any(),
    }
}
