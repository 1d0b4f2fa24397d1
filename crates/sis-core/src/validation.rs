//! Pre-submit Validation
//!
//! Forms are checked locally before any network call. The server stays
//! authoritative; these rules only catch the obvious cases early.

use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::{ClientError, ClientResult};

/// Rejects empty and whitespace-only strings
pub fn non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Rejects NaN and infinities; an absent value is left to `required`
pub fn finite(value: Option<f64>, message: &'static str) -> Result<(), ValidationError> {
    match value {
        Some(v) if !v.is_finite() => {
            let mut error = ValidationError::new("finite");
            error.message = Some(message.into());
            Err(error)
        }
        _ => Ok(()),
    }
}

/// One line per distinct message, stable across runs
pub fn format_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    let mut messages: Vec<String> = Vec::new();
    for (field, errors) in fields {
        for error in errors.iter() {
            let message = error
                .message
                .as_ref()
                .map(|msg| msg.to_string())
                .unwrap_or_else(|| format!("{} is invalid", field));
            if !messages.contains(&message) {
                messages.push(message);
            }
        }
    }
    messages.join(" ")
}

/// Validate a payload, mapping failures into the client error taxonomy
pub fn check<T: Validate>(value: &T) -> ClientResult<()> {
    value
        .validate()
        .map_err(|errors| ClientError::Validation(format_errors(&errors)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Enrollment, Grade, Student};

    #[test]
    fn test_non_blank() {
        assert!(non_blank("x").is_ok());
        assert!(non_blank("").is_err());
        assert!(non_blank(" \t").is_err());
    }

    #[test]
    fn test_finite() {
        assert!(finite(Some(3.5), "bad").is_ok());
        assert!(finite(None, "bad").is_ok());
        assert!(finite(Some(f64::NAN), "bad").is_err());
        assert!(finite(Some(f64::NEG_INFINITY), "bad").is_err());
    }

    #[test]
    fn test_check_reports_validation_error() {
        let err = check(&Student::new("")).unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
        assert_eq!(err.to_string(), "Student name is required.");
    }

    #[test]
    fn test_repeated_messages_collapse() {
        let err = check(&Enrollment::new(0, 0)).unwrap_err();
        assert_eq!(err.to_string(), "Please select a student and a course.");
    }

    #[test]
    fn test_messages_sorted_by_field() {
        let err = check(&Grade::draft(0)).unwrap_err().to_string();
        let enrollment = err.find("Select an enrollment").unwrap();
        let grade = err.find("Grade is required").unwrap();
        let semester = err.find("Semester is required").unwrap();
        assert!(enrollment < grade && grade < semester);
    }
}
