//! Student Entity

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::entity::Entity;
use super::wire;

/// A student record
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
pub struct Student {
    /// Server-assigned identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    #[validate(custom(function = "crate::validation::non_blank", message = "Student name is required."))]
    pub name: String,
    #[serde(default, with = "wire::optional_date", skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub program: String,
}

impl Student {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

impl Entity for Student {
    fn id(&self) -> Option<u32> {
        self.id
    }
}
