//! GPA Aggregator
//!
//! GPA = Σ(grade × credits) / Σ(credits) over graded rows only. Ungraded
//! rows are left out of both sums, and a student with no graded rows has
//! no GPA at all (never 0). Grades are taken as given, without clamping.

use serde::{Deserialize, Serialize};

use crate::domain::wire::MISSING_LABEL;
use crate::transcript::TranscriptCourse;

/// Answer of `GET /students/{id}/gpa`.
///
/// When no grades exist the server still sends `gpa: 0` but adds a
/// `message`; that combination means "no GPA".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GpaReport {
    pub student_id: u32,
    #[serde(default)]
    pub gpa: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl GpaReport {
    /// The server figure, if it actually computed one
    pub fn value(&self) -> Option<f64> {
        if self.message.is_some() {
            return None;
        }
        self.gpa.filter(|g| g.is_finite())
    }
}

/// Credit-weighted mean of the graded rows
pub fn weighted_gpa(rows: &[TranscriptCourse]) -> Option<f64> {
    let (points, credits) = rows
        .iter()
        .filter(|row| row.is_graded())
        .filter_map(|row| row.grade.map(|g| (g, f64::from(row.credits))))
        .fold((0.0, 0.0), |(points, credits), (grade, weight)| {
            (points + grade * weight, credits + weight)
        });
    if credits > 0.0 {
        Some(points / credits)
    } else {
        None
    }
}

/// Server value when it provided one, local computation otherwise
pub fn resolve(report: Option<&GpaReport>, rows: &[TranscriptCourse]) -> Option<f64> {
    report
        .and_then(GpaReport::value)
        .or_else(|| weighted_gpa(rows))
}

/// Two decimals for display; the value itself is never rounded
pub fn format_gpa(gpa: Option<f64>) -> String {
    gpa.map(|g| format!("{:.2}", g))
        .unwrap_or_else(|| MISSING_LABEL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(grade: Option<f64>, credits: u32) -> TranscriptCourse {
        TranscriptCourse {
            course_code: "C".to_string(),
            course_title: "Course".to_string(),
            credits,
            grade,
            semester: None,
            enrollment_id: None,
            grade_id: None,
        }
    }

    #[test]
    fn test_weighted_example() {
        let rows = vec![row(Some(4.0), 3), row(Some(3.0), 4), row(None, 3)];
        let gpa = weighted_gpa(&rows).unwrap();
        assert!((gpa - 24.0 / 7.0).abs() < 1e-12);
        assert_eq!(format_gpa(Some(gpa)), "3.43");
    }

    #[test]
    fn test_ungraded_rows_do_not_dilute() {
        let graded = vec![row(Some(2.0), 3)];
        let mut with_ungraded = graded.clone();
        with_ungraded.push(row(None, 5));
        with_ungraded.push(row(Some(-1.0), 4));
        assert_eq!(weighted_gpa(&graded), weighted_gpa(&with_ungraded));
    }

    #[test]
    fn test_no_graded_rows_is_absent() {
        assert_eq!(weighted_gpa(&[]), None);
        assert_eq!(weighted_gpa(&[row(None, 3)]), None);
        assert_eq!(format_gpa(None), "N/A");
    }

    #[test]
    fn test_zero_credit_rows_are_absent() {
        assert_eq!(weighted_gpa(&[row(Some(4.0), 0)]), None);
    }

    #[test]
    fn test_values_outside_scale_accepted() {
        let gpa = weighted_gpa(&[row(Some(95.0), 2), row(Some(85.0), 2)]);
        assert_eq!(gpa, Some(90.0));
    }

    #[test]
    fn test_server_value_is_ground_truth() {
        let report = GpaReport { student_id: 1, gpa: Some(3.9), message: None };
        let rows = vec![row(Some(2.0), 3)];
        assert_eq!(resolve(Some(&report), &rows), Some(3.9));
    }

    #[test]
    fn test_server_no_grades_message_means_absent() {
        let report: GpaReport = serde_json::from_str(
            r#"{"student_id": 1, "gpa": 0, "message": "No grades available to calculate GPA"}"#,
        )
        .unwrap();
        assert_eq!(report.value(), None);
        assert_eq!(resolve(Some(&report), &[]), None);
    }

    #[test]
    fn test_recompute_without_report() {
        let rows = vec![row(Some(3.0), 3)];
        assert_eq!(resolve(None, &rows), Some(3.0));
    }

    #[test]
    fn test_display_does_not_round_value() {
        let gpa = Some(10.0 / 3.0);
        assert_eq!(format_gpa(gpa), "3.33");
        assert!((gpa.unwrap() - 3.333_333).abs() < 1e-6);
    }
}
