//! Wire Conventions
//!
//! Serde adapters converting the API's encodings into canonical Rust types:
//! - grades: `-1` marks "not graded yet" and becomes `None`
//! - semesters: free-text labels or numeric term codes, `"N/A"` meaning none
//! - dates: RFC 3339 timestamps or bare `YYYY-MM-DD`, the zero time meaning none

use chrono::{DateTime, Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serializer};

/// Grade value the server reports for an enrollment without a grade
pub const GRADE_SENTINEL: f64 = -1.0;

/// Label rendered for any absent value
pub const MISSING_LABEL: &str = "N/A";

const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn is_sentinel(grade: f64) -> bool {
    grade == GRADE_SENTINEL
}

/// Parse a date as typed in a form or sent by the server
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDate::parse_from_str(raw, DATE_FORMAT))
        .ok()?;
    // Go's zero time stands in for NULL columns
    if date.year() == 1 && date.ordinal() == 1 {
        return None;
    }
    Some(date)
}

/// `YYYY-MM-DD` for form inputs, empty when absent
pub fn date_input_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string()).unwrap_or_default()
}

pub fn date_label(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_else(|| MISSING_LABEL.to_string())
}

pub fn text_label(value: &str) -> &str {
    if value.trim().is_empty() {
        MISSING_LABEL
    } else {
        value
    }
}

pub fn grade_label(grade: Option<f64>) -> String {
    grade
        .filter(|g| !is_sentinel(*g))
        .map(|g| format!("{:.2}", g))
        .unwrap_or_else(|| MISSING_LABEL.to_string())
}

/// `Option<f64>` grade with the `-1` sentinel
pub mod optional_grade {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<f64>::deserialize(deserializer)?;
        Ok(raw.filter(|g| !is_sentinel(*g)))
    }

    pub fn serialize<S>(grade: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match grade {
            Some(g) => serializer.serialize_f64(*g),
            None => serializer.serialize_none(),
        }
    }
}

/// `Option<String>` semester accepting labels and numeric term codes
pub mod optional_semester {
    use super::*;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawSemester {
        Label(String),
        Code(i64),
        Fractional(f64),
    }

    pub fn normalize(raw: &str) -> Option<String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == MISSING_LABEL {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<RawSemester>::deserialize(deserializer)?;
        Ok(match raw {
            Some(RawSemester::Label(label)) => normalize(&label),
            Some(RawSemester::Code(code)) => Some(code.to_string()),
            Some(RawSemester::Fractional(code)) => Some(code.to_string()),
            None => None,
        })
    }

    pub fn serialize<S>(semester: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(semester.as_deref().unwrap_or_default())
    }
}

/// `Option<NaiveDate>` sent as RFC 3339 at UTC midnight
pub mod optional_date {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(|value| {
            let parsed = parse_date(value);
            if parsed.is_none() && !value.trim().is_empty() && !value.starts_with("0001-01-01") {
                log::warn!("[WIRE] Ignoring unparseable date {:?}", value);
            }
            parsed
        }))
    }

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(d) => serializer.serialize_str(&format!("{}T00:00:00Z", d.format(DATE_FORMAT))),
            None => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Debug, Serialize, Deserialize)]
    struct Probe {
        #[serde(default, with = "optional_grade")]
        grade: Option<f64>,
        #[serde(default, with = "optional_semester")]
        semester: Option<String>,
        #[serde(default, with = "optional_date", skip_serializing_if = "Option::is_none")]
        date: Option<NaiveDate>,
    }

    fn probe(json: &str) -> Probe {
        serde_json::from_str(json).expect("probe should parse")
    }

    #[test]
    fn test_grade_sentinel_becomes_none() {
        assert_eq!(probe(r#"{"grade": -1}"#).grade, None);
        assert_eq!(probe(r#"{"grade": -1.0}"#).grade, None);
        assert_eq!(probe(r#"{"grade": 3.7}"#).grade, Some(3.7));
        assert_eq!(probe(r#"{"grade": null}"#).grade, None);
        assert_eq!(probe("{}").grade, None);
    }

    #[test]
    fn test_grade_range_is_not_clamped() {
        assert_eq!(probe(r#"{"grade": 97.5}"#).grade, Some(97.5));
        assert_eq!(probe(r#"{"grade": -2}"#).grade, Some(-2.0));
    }

    #[test]
    fn test_semester_accepts_label_and_code() {
        assert_eq!(probe(r#"{"semester": "Fall 2024"}"#).semester.as_deref(), Some("Fall 2024"));
        assert_eq!(probe(r#"{"semester": 202401}"#).semester.as_deref(), Some("202401"));
        assert_eq!(probe(r#"{"semester": "N/A"}"#).semester, None);
        assert_eq!(probe(r#"{"semester": "  "}"#).semester, None);
    }

    #[test]
    fn test_dates_accept_both_forms() {
        let expected = NaiveDate::from_ymd_opt(2001, 4, 5);
        assert_eq!(probe(r#"{"date": "2001-04-05T00:00:00Z"}"#).date, expected);
        assert_eq!(probe(r#"{"date": "2001-04-05"}"#).date, expected);
        assert_eq!(probe(r#"{"date": "0001-01-01T00:00:00Z"}"#).date, None);
        assert_eq!(probe(r#"{"date": "yesterday"}"#).date, None);
    }

    #[test]
    fn test_date_serializes_as_rfc3339() {
        let value = Probe {
            grade: None,
            semester: None,
            date: NaiveDate::from_ymd_opt(1999, 12, 31),
        };
        let json = serde_json::to_value(&value).unwrap();
        assert_eq!(json["date"], "1999-12-31T00:00:00Z");
        assert_eq!(json["semester"], "");
        assert!(json["grade"].is_null());
    }

    #[test]
    fn test_labels() {
        assert_eq!(grade_label(Some(3.0)), "3.00");
        assert_eq!(grade_label(Some(GRADE_SENTINEL)), "N/A");
        assert_eq!(grade_label(None), "N/A");
        assert_eq!(text_label(""), "N/A");
        assert_eq!(date_label(None), "N/A");
        assert_eq!(date_input_value(NaiveDate::from_ymd_opt(2020, 2, 29)), "2020-02-29");
    }
}
