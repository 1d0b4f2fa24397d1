//! UI Components
//!
//! One component per screen plus the shared pieces they are built from.

mod course_form;
mod course_list;
mod delete_confirm_button;
mod enrollment_form;
mod enrollment_list;
mod grade_editor;
mod login_form;
mod nav_bar;
mod notice_banner;
mod student_details;
mod student_form;
mod student_list;

pub use course_form::CourseForm;
pub use course_list::CourseList;
pub use delete_confirm_button::DeleteConfirmButton;
pub use enrollment_form::EnrollmentForm;
pub use enrollment_list::EnrollmentList;
pub use login_form::LoginForm;
pub use nav_bar::NavBar;
pub use notice_banner::NoticeBanner;
pub use student_details::StudentDetails;
pub use student_form::StudentForm;
pub use student_list::StudentList;
