//! Student Endpoints

use reqwest::Method;
use sis_core::domain::Student;
use sis_core::{validation, ClientResult, GpaReport, StudentTranscript};

use super::ApiClient;

impl ApiClient {
    pub async fn list_students(&self) -> ClientResult<Vec<Student>> {
        self.get_json("/students").await
    }

    pub async fn get_student(&self, id: u32) -> ClientResult<Student> {
        self.get_json(&format!("/students/{}", id)).await
    }

    pub async fn create_student(&self, student: &Student) -> ClientResult<Student> {
        validation::check(student)?;
        self.send_json(Method::POST, "/students", student).await
    }

    pub async fn update_student(&self, id: u32, student: &Student) -> ClientResult<()> {
        validation::check(student)?;
        self.send_unit(Method::PUT, &format!("/students/{}", id), Some(student)).await
    }

    pub async fn delete_student(&self, id: u32) -> ClientResult<()> {
        self.send_unit::<()>(Method::DELETE, &format!("/students/{}", id), None).await
    }

    pub async fn get_transcript(&self, id: u32) -> ClientResult<StudentTranscript> {
        self.get_json(&format!("/students/{}/transcript", id)).await
    }

    pub async fn get_gpa(&self, id: u32) -> ClientResult<GpaReport> {
        self.get_json(&format!("/students/{}/gpa", id)).await
    }
}
