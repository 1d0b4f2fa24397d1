//! View Router
//!
//! One screen is active at a time. Each variant carries exactly the data
//! its screen needs; there is no history stack and no URL sync.

use crate::access::{permits, Action};
use crate::domain::{Role, Session};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    #[default]
    Students,
    AddStudent,
    EditStudent(u32),
    StudentDetails(u32),
    Courses,
    AddCourse,
    EditCourse(u32),
    Enrollments,
    AddEnrollment,
}

impl View {
    /// Landing screen right after login
    pub fn home(session: &Session) -> View {
        match session.role {
            Role::Faculty => View::Students,
            Role::Student => View::StudentDetails(session.id),
        }
    }

    /// Action the gate checks before showing this screen
    pub fn required_action(&self) -> Action {
        match *self {
            View::Students => Action::ListStudents,
            View::AddStudent => Action::AddStudent,
            View::EditStudent(_) => Action::EditStudent,
            View::StudentDetails(id) => Action::ViewStudent(id),
            View::Courses => Action::ListCourses,
            View::AddCourse => Action::AddCourse,
            View::EditCourse(_) => Action::EditCourse,
            View::Enrollments => Action::ListEnrollments,
            View::AddEnrollment => Action::AddEnrollment,
        }
    }
}

/// Outcome of a navigation request
#[derive(Debug, Clone, PartialEq)]
pub struct Routed {
    pub view: View,
    /// Set when the request was redirected for targeting another student
    pub warning: Option<String>,
}

/// Apply the role gate to a navigation request.
///
/// Screens the session may not see fall back to its home screen. A student
/// pointed at someone else's details lands on their own, with a warning.
/// The result always passes the gate, so routing it again changes nothing.
pub fn route(requested: View, session: &Session) -> Routed {
    if permits(session, requested.required_action()) {
        return Routed {
            view: requested,
            warning: None,
        };
    }
    let home = View::home(session);
    let warning = match requested {
        View::StudentDetails(other) => {
            log::warn!(
                "[ROUTER] Session {} asked for student {}, redirecting to own details",
                session.id,
                other
            );
            Some(format!(
                "You can only view your own records. Showing student #{} instead.",
                session.id
            ))
        }
        _ => {
            log::debug!("[ROUTER] {:?} not available to {:?}, showing {:?}", requested, session.role, home);
            None
        }
    };
    Routed {
        view: home,
        warning,
    }
}

/// Navigation bar entry
#[derive(Debug, Clone, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
    pub view: View,
}

/// Navigation offered to a session
pub fn navigation(session: &Session) -> Vec<NavItem> {
    match session.role {
        Role::Faculty => vec![
            NavItem { label: "Students", view: View::Students },
            NavItem { label: "Courses", view: View::Courses },
            NavItem { label: "Enrollments", view: View::Enrollments },
        ],
        Role::Student => vec![NavItem {
            label: "My Details",
            view: View::StudentDetails(session.id),
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(id: u32, role: Role) -> Session {
        Session {
            id,
            role,
            token: "t".to_string(),
        }
    }

    #[test]
    fn test_home_by_role() {
        assert_eq!(View::home(&session(1, Role::Faculty)), View::Students);
        assert_eq!(View::home(&session(4, Role::Student)), View::StudentDetails(4));
    }

    #[test]
    fn test_faculty_routes_unchanged() {
        let faculty = session(1, Role::Faculty);
        for view in [View::Courses, View::EditCourse(3), View::StudentDetails(8), View::AddEnrollment] {
            assert_eq!(route(view, &faculty), Routed { view, warning: None });
        }
    }

    #[test]
    fn test_student_redirected_from_other_student_once() {
        let student = session(4, Role::Student);
        let first = route(View::StudentDetails(9), &student);
        assert_eq!(first.view, View::StudentDetails(4));
        assert!(first.warning.is_some());

        let second = route(first.view, &student);
        assert_eq!(second.view, View::StudentDetails(4));
        assert_eq!(second.warning, None);
    }

    #[test]
    fn test_student_list_screens_fall_back_silently() {
        let student = session(4, Role::Student);
        for view in [View::Students, View::Courses, View::Enrollments, View::AddStudent] {
            assert_eq!(route(view, &student), Routed { view: View::StudentDetails(4), warning: None });
        }
    }

    #[test]
    fn test_navigation_by_role() {
        let labels = |s: &Session| navigation(s).into_iter().map(|n| n.label).collect::<Vec<_>>();
        assert_eq!(labels(&session(1, Role::Faculty)), ["Students", "Courses", "Enrollments"]);
        assert_eq!(labels(&session(2, Role::Student)), ["My Details"]);
        assert_eq!(navigation(&session(2, Role::Student))[0].view, View::StudentDetails(2));
    }
}
