//! Enrollment Endpoints

use reqwest::Method;
use sis_core::domain::Enrollment;
use sis_core::{validation, ClientResult};

use super::ApiClient;

impl ApiClient {
    /// `GET /enrollments`, optionally `?student_id=`
    pub async fn list_enrollments(&self, student_id: Option<u32>) -> ClientResult<Vec<Enrollment>> {
        match student_id {
            Some(id) => self.get_json(&format!("/enrollments?student_id={}", id)).await,
            None => self.get_json("/enrollments").await,
        }
    }

    pub async fn get_enrollment(&self, id: u32) -> ClientResult<Enrollment> {
        self.get_json(&format!("/enrollments/{}", id)).await
    }

    pub async fn create_enrollment(&self, enrollment: &Enrollment) -> ClientResult<Enrollment> {
        validation::check(enrollment)?;
        self.send_json(Method::POST, "/enrollments", enrollment).await
    }

    pub async fn delete_enrollment(&self, id: u32) -> ClientResult<()> {
        self.send_unit::<()>(Method::DELETE, &format!("/enrollments/{}", id), None).await
    }
}
