//! Transcript Assembly
//!
//! Joins Enrollment × Course × Grade for one student. The API can do the
//! join itself (`/students/{id}/transcript`); `assemble` produces the same
//! shape from the raw collections when it cannot.

use serde::{Deserialize, Serialize};

use crate::domain::wire::{self, MISSING_LABEL};
use crate::domain::{find_by_id, Course, Enrollment, Grade, Student};

pub const UNKNOWN_COURSE: &str = "Unknown Course";
pub const UNKNOWN_STUDENT: &str = "Unknown Student";

/// One transcript line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptCourse {
    pub course_code: String,
    pub course_title: String,
    #[serde(default)]
    pub credits: u32,
    #[serde(default, with = "wire::optional_grade")]
    pub grade: Option<f64>,
    #[serde(default, with = "wire::optional_semester")]
    pub semester: Option<String>,
    /// Only known when assembled client-side
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enrollment_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade_id: Option<u32>,
}

impl TranscriptCourse {
    pub fn is_graded(&self) -> bool {
        self.grade.is_some_and(|g| !wire::is_sentinel(g))
    }

    pub fn grade_label(&self) -> String {
        wire::grade_label(self.grade)
    }

    pub fn semester_label(&self) -> &str {
        self.semester.as_deref().unwrap_or(MISSING_LABEL)
    }

    /// The grade record this row was built from, or a blank draft
    pub fn grade_draft(&self) -> Option<Grade> {
        let enrollment_id = self.enrollment_id?;
        Some(Grade {
            id: self.grade_id,
            grade: self.grade,
            semester: self.semester.clone(),
            ..Grade::draft(enrollment_id)
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentTranscript {
    pub student_id: u32,
    pub student_name: String,
    #[serde(default)]
    pub courses: Vec<TranscriptCourse>,
}

pub fn student_name(students: &[Student], id: u32) -> &str {
    find_by_id(students, id)
        .map(|s| s.name.as_str())
        .unwrap_or(UNKNOWN_STUDENT)
}

pub fn course_title(courses: &[Course], id: u32) -> &str {
    find_by_id(courses, id)
        .map(|c| c.title.as_str())
        .unwrap_or(UNKNOWN_COURSE)
}

/// Zero or one grade per enrollment; the first one wins
pub fn grade_for(grades: &[Grade], enrollment_id: u32) -> Option<&Grade> {
    grades.iter().find(|g| g.enrollment_id == enrollment_id)
}

/// Build one row per enrollment of `student_id`, in source order.
///
/// Missing courses and students become placeholders instead of errors.
pub fn assemble(
    student_id: u32,
    student: Option<&Student>,
    enrollments: &[Enrollment],
    courses: &[Course],
    grades: &[Grade],
) -> StudentTranscript {
    let rows = enrollments
        .iter()
        .filter(|e| e.student_id == student_id)
        .map(|enrollment| {
            let course = find_by_id(courses, enrollment.course_id);
            if course.is_none() {
                log::warn!(
                    "[TRANSCRIPT] Enrollment {:?} references missing course {}",
                    enrollment.id,
                    enrollment.course_id
                );
            }
            let grade = enrollment.id.and_then(|id| grade_for(grades, id));
            TranscriptCourse {
                course_code: course
                    .map(|c| c.code.clone())
                    .unwrap_or_else(|| MISSING_LABEL.to_string()),
                course_title: course
                    .map(|c| c.title.clone())
                    .unwrap_or_else(|| UNKNOWN_COURSE.to_string()),
                credits: course.map(|c| c.credits).unwrap_or(0),
                grade: grade.and_then(|g| g.grade).filter(|g| !wire::is_sentinel(*g)),
                semester: grade.and_then(|g| g.semester.clone()),
                enrollment_id: enrollment.id,
                grade_id: grade.and_then(|g| g.id),
            }
        })
        .collect();

    StudentTranscript {
        student_id,
        student_name: student
            .filter(|s| s.id == Some(student_id))
            .map(|s| s.name.clone())
            .unwrap_or_else(|| UNKNOWN_STUDENT.to_string()),
        courses: rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(id: u32, code: &str, credits: u32) -> Course {
        Course {
            id: Some(id),
            ..Course::new(code, format!("{} title", code), credits)
        }
    }

    fn enrollment(id: u32, student_id: u32, course_id: u32) -> Enrollment {
        Enrollment {
            id: Some(id),
            ..Enrollment::new(student_id, course_id)
        }
    }

    fn grade(id: u32, enrollment_id: u32, value: f64) -> Grade {
        Grade {
            id: Some(id),
            enrollment_id,
            grade: Some(value),
            semester: Some("Fall 2024".to_string()),
        }
    }

    fn student(id: u32) -> Student {
        Student {
            id: Some(id),
            ..Student::new("Ada")
        }
    }

    #[test]
    fn test_assemble_joins_in_source_order() {
        let courses = vec![course(1, "CS101", 3), course(2, "MA201", 4)];
        let enrollments = vec![enrollment(20, 7, 2), enrollment(10, 7, 1), enrollment(30, 8, 1)];
        let grades = vec![grade(100, 10, 3.5)];

        let transcript = assemble(7, Some(&student(7)), &enrollments, &courses, &grades);

        assert_eq!(transcript.student_name, "Ada");
        let codes: Vec<_> = transcript.courses.iter().map(|r| r.course_code.as_str()).collect();
        assert_eq!(codes, ["MA201", "CS101"]);

        let ungraded = &transcript.courses[0];
        assert_eq!(ungraded.grade, None);
        assert_eq!(ungraded.semester_label(), "N/A");
        assert_eq!(ungraded.grade_id, None);

        let graded = &transcript.courses[1];
        assert_eq!(graded.grade, Some(3.5));
        assert_eq!(graded.grade_id, Some(100));
        assert_eq!(graded.enrollment_id, Some(10));
    }

    #[test]
    fn test_missing_course_gets_placeholder() {
        let transcript = assemble(7, None, &[enrollment(1, 7, 99)], &[], &[]);
        let row = &transcript.courses[0];
        assert_eq!(row.course_title, UNKNOWN_COURSE);
        assert_eq!(row.course_code, "N/A");
        assert_eq!(row.credits, 0);
        assert_eq!(transcript.student_name, UNKNOWN_STUDENT);
    }

    #[test]
    fn test_student_for_another_id_is_not_used() {
        let transcript = assemble(7, Some(&student(8)), &[], &[], &[]);
        assert_eq!(transcript.student_name, UNKNOWN_STUDENT);
        assert!(transcript.courses.is_empty());
    }

    #[test]
    fn test_first_grade_wins() {
        let grades = vec![grade(1, 5, 2.0), grade(2, 5, 4.0)];
        assert_eq!(grade_for(&grades, 5).and_then(|g| g.id), Some(1));
        assert!(grade_for(&grades, 6).is_none());
    }

    #[test]
    fn test_lookups_fall_back() {
        let students = vec![student(1)];
        let courses = vec![course(3, "CS101", 3)];
        assert_eq!(student_name(&students, 1), "Ada");
        assert_eq!(student_name(&students, 2), UNKNOWN_STUDENT);
        assert_eq!(course_title(&courses, 3), "CS101 title");
        assert_eq!(course_title(&courses, 4), UNKNOWN_COURSE);
    }

    #[test]
    fn test_server_transcript_normalized() {
        let json = r#"{
            "student_id": 7,
            "student_name": "Ada",
            "courses": [
                {"course_code": "CS101", "course_title": "Intro", "credits": 3, "grade": 4.0, "semester": "Fall"},
                {"course_code": "MA201", "course_title": "Calculus", "credits": 4, "grade": -1, "semester": "N/A"}
            ]
        }"#;
        let transcript: StudentTranscript = serde_json::from_str(json).unwrap();
        assert!(transcript.courses[0].is_graded());
        assert!(!transcript.courses[1].is_graded());
        assert_eq!(transcript.courses[1].semester, None);
        assert_eq!(transcript.courses[1].grade_label(), "N/A");
        assert!(transcript.courses[1].grade_draft().is_none());
    }

    #[test]
    fn test_grade_draft_from_assembled_row() {
        let transcript = assemble(7, None, &[enrollment(10, 7, 1)], &[course(1, "CS101", 3)], &[]);
        let draft = transcript.courses[0].grade_draft().unwrap();
        assert!(draft.is_new());
        assert_eq!(draft.enrollment_id, 10);
    }

    #[test]
    fn test_grade_draft_keeps_existing_grade() {
        let grades = [Grade {
            id: Some(30),
            grade: Some(3.7),
            semester: Some("Fall 2024".to_string()),
            ..Grade::draft(10)
        }];
        let transcript = assemble(7, None, &[enrollment(10, 7, 1)], &[course(1, "CS101", 3)], &grades);
        let draft = transcript.courses[0].grade_draft().unwrap();
        assert!(!draft.is_new());
        assert_eq!(draft, grades[0]);
    }
}
