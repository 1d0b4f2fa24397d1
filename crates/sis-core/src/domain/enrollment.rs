//! Enrollment Entity
//!
//! Join record linking one student to one course. Uniqueness of
//! (student_id, course_id) is left to the server.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::entity::Entity;
use super::wire;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
pub struct Enrollment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    #[validate(range(min = 1, message = "Please select a student and a course."))]
    pub student_id: u32,
    #[validate(range(min = 1, message = "Please select a student and a course."))]
    pub course_id: u32,
    #[serde(default, with = "wire::optional_date", skip_serializing_if = "Option::is_none")]
    pub enrollment_date: Option<NaiveDate>,
}

impl Enrollment {
    pub fn new(student_id: u32, course_id: u32) -> Self {
        Self {
            id: None,
            student_id,
            course_id,
            enrollment_date: None,
        }
    }
}

impl Entity for Enrollment {
    fn id(&self) -> Option<u32> {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enrollment_requires_both_ids() {
        assert!(Enrollment::new(1, 2).validate().is_ok());
        assert!(Enrollment::new(0, 2).validate().is_err());
        assert!(Enrollment::new(1, 0).validate().is_err());
    }

    #[test]
    fn test_enrollment_payload() {
        let json = serde_json::to_value(Enrollment::new(4, 9)).unwrap();
        assert_eq!(json, serde_json::json!({"student_id": 4, "course_id": 9}));
    }
}
