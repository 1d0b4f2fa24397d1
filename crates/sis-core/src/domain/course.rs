//! Course Entity

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::entity::Entity;

/// A course offered
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
pub struct Course {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    #[validate(custom(function = "crate::validation::non_blank", message = "Course code, title, and positive credits are required."))]
    pub code: String,
    #[validate(custom(function = "crate::validation::non_blank", message = "Course code, title, and positive credits are required."))]
    pub title: String,
    /// Credit weight used by the GPA
    #[validate(range(min = 1, message = "Course code, title, and positive credits are required."))]
    pub credits: u32,
}

impl Course {
    pub fn new(code: impl Into<String>, title: impl Into<String>, credits: u32) -> Self {
        Self {
            id: None,
            code: code.into(),
            title: title.into(),
            credits,
        }
    }

    /// Label used in pickers, e.g. "Intro to CS (Code: CS101)"
    pub fn picker_label(&self) -> String {
        format!("{} (Code: {})", self.title, self.code)
    }
}

impl Entity for Course {
    fn id(&self) -> Option<u32> {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation;

    const COURSE_REQUIRED: &str = "Course code, title, and positive credits are required.";

    #[test]
    fn test_course_validation() {
        assert!(Course::new("CS101", "Intro", 3).validate().is_ok());
        assert!(Course::new("", "Intro", 3).validate().is_err());
        assert!(Course::new("CS101", " ", 3).validate().is_err());
        assert!(Course::new("CS101", "Intro", 0).validate().is_err());
    }

    #[test]
    fn test_course_validation_message_is_single() {
        let err = validation::check(&Course::new("", "", 0)).unwrap_err();
        assert_eq!(err.to_string(), COURSE_REQUIRED);
    }

    #[test]
    fn test_picker_label() {
        assert_eq!(Course::new("CS101", "Intro", 3).picker_label(), "Intro (Code: CS101)");
    }
}
