//! Grade Entity
//!
//! At most one grade is expected per enrollment.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::entity::Entity;
use super::wire;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
#[validate(schema(function = "grade_is_finite"))]
pub struct Grade {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    #[validate(range(min = 1, message = "Select an enrollment to grade."))]
    pub enrollment_id: u32,
    /// Numeric grade, any scale the server accepts
    #[serde(default, with = "wire::optional_grade")]
    #[validate(required(message = "Grade is required."))]
    pub grade: Option<f64>,
    #[serde(default, with = "wire::optional_semester")]
    #[validate(
        required(message = "Semester is required."),
        length(min = 1, message = "Semester is required.")
    )]
    pub semester: Option<String>,
}

impl Grade {
    /// Blank draft for an enrollment that has no grade yet
    pub fn draft(enrollment_id: u32) -> Self {
        Self {
            enrollment_id,
            ..Default::default()
        }
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }
}

fn grade_is_finite(grade: &Grade) -> Result<(), ValidationError> {
    crate::validation::finite(grade.grade, "Grade must be a number.")
}

impl Entity for Grade {
    fn id(&self) -> Option<u32> {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_draft_is_incomplete() {
        let draft = Grade::draft(3);
        assert!(draft.is_new());
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_grade_complete() {
        let grade = Grade {
            grade: Some(3.5),
            semester: Some("Spring 2025".to_string()),
            ..Grade::draft(3)
        };
        assert!(grade.validate().is_ok());
    }

    #[test]
    fn test_non_finite_grade_rejected() {
        for bad in [f64::NAN, f64::INFINITY] {
            let grade = Grade {
                grade: Some(bad),
                semester: Some("Fall 2024".to_string()),
                ..Grade::draft(3)
            };
            let err = crate::validation::check(&grade).unwrap_err();
            assert_eq!(err.to_string(), "Grade must be a number.");
        }
    }

    #[test]
    fn test_grade_payload() {
        let grade = Grade {
            grade: Some(4.0),
            semester: Some("Fall".to_string()),
            ..Grade::draft(8)
        };
        let json = serde_json::to_value(&grade).unwrap();
        assert_eq!(json, serde_json::json!({"enrollment_id": 8, "grade": 4.0, "semester": "Fall"}));
    }

    #[test]
    fn test_grade_from_server_with_numeric_semester() {
        let grade: Grade = serde_json::from_str(r#"{"id": 2, "enrollment_id": 5, "grade": 3.3, "semester": 20241}"#).unwrap();
        assert_eq!(grade.id(), Some(2));
        assert_eq!(grade.semester.as_deref(), Some("20241"));
    }
}
