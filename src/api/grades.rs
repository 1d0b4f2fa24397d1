//! Grade Endpoints

use reqwest::Method;
use sis_core::domain::Grade;
use sis_core::{validation, ClientResult};

use super::ApiClient;

impl ApiClient {
    pub async fn list_grades(&self) -> ClientResult<Vec<Grade>> {
        self.get_json("/grades").await
    }

    pub async fn get_grade(&self, id: u32) -> ClientResult<Grade> {
        self.get_json(&format!("/grades/{}", id)).await
    }

    pub async fn add_grade(&self, grade: &Grade) -> ClientResult<Grade> {
        validation::check(grade)?;
        self.send_json(Method::POST, "/grades", grade).await
    }

    pub async fn update_grade(&self, id: u32, grade: &Grade) -> ClientResult<()> {
        validation::check(grade)?;
        self.send_unit(Method::PUT, &format!("/grades/{}", id), Some(grade)).await
    }

    pub async fn delete_grade(&self, id: u32) -> ClientResult<()> {
        self.send_unit::<()>(Method::DELETE, &format!("/grades/{}", id), None).await
    }
}
