//! Role Gate
//!
//! Client-side authorization policy. It only decides which screens and
//! controls are shown; the API re-checks every request.

use crate::domain::Session;
use crate::error::{ClientError, ClientResult};

/// Everything a screen may offer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    ListStudents,
    AddStudent,
    EditStudent,
    DeleteStudent,
    ListCourses,
    AddCourse,
    EditCourse,
    DeleteCourse,
    ListEnrollments,
    AddEnrollment,
    DeleteEnrollment,
    /// Add, edit or delete any grade
    ManageGrades,
    /// Details, transcript and GPA of one student
    ViewStudent(u32),
}

/// Faculty may do everything; students may only look at themselves
pub fn permits(session: &Session, action: Action) -> bool {
    if session.is_faculty() {
        return true;
    }
    match action {
        Action::ViewStudent(student_id) => student_id == session.id,
        _ => false,
    }
}

/// `permits` as a result, for mutations issued from a screen.
///
/// An anonymous caller is refused like any other mismatch.
pub fn authorize(session: Option<&Session>, action: Action) -> ClientResult<()> {
    match session {
        Some(s) if permits(s, action) => Ok(()),
        _ => Err(ClientError::Forbidden(match action {
            Action::ViewStudent(_) => "You can only view your own records.".to_string(),
            _ => "Faculty access required.".to_string(),
        })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Role;

    fn session(id: u32, role: Role) -> Session {
        Session {
            id,
            role,
            token: "t".to_string(),
        }
    }

    const MANAGEMENT: [Action; 12] = [
        Action::ListStudents,
        Action::AddStudent,
        Action::EditStudent,
        Action::DeleteStudent,
        Action::ListCourses,
        Action::AddCourse,
        Action::EditCourse,
        Action::DeleteCourse,
        Action::ListEnrollments,
        Action::AddEnrollment,
        Action::DeleteEnrollment,
        Action::ManageGrades,
    ];

    #[test]
    fn test_faculty_may_do_everything() {
        let faculty = session(1, Role::Faculty);
        assert!(MANAGEMENT.iter().all(|a| permits(&faculty, *a)));
        assert!(permits(&faculty, Action::ViewStudent(99)));
    }

    #[test]
    fn test_student_sees_only_self() {
        let student = session(5, Role::Student);
        assert!(MANAGEMENT.iter().all(|a| !permits(&student, *a)));
        assert!(permits(&student, Action::ViewStudent(5)));
        assert!(!permits(&student, Action::ViewStudent(6)));
    }

    #[test]
    fn test_authorize_refuses_locally() {
        let student = session(5, Role::Student);
        assert_eq!(authorize(Some(&student), Action::ViewStudent(5)), Ok(()));

        let err = authorize(Some(&student), Action::DeleteCourse).unwrap_err();
        assert!(matches!(err, ClientError::Forbidden(_)));
        assert_eq!(err.user_message("Failed to delete course"), "Faculty access required.");

        assert!(authorize(None, Action::ViewStudent(5)).is_err());
    }
}
