//! Course Endpoints

use reqwest::Method;
use sis_core::domain::Course;
use sis_core::{validation, ClientResult};

use super::ApiClient;

impl ApiClient {
    pub async fn list_courses(&self) -> ClientResult<Vec<Course>> {
        self.get_json("/courses").await
    }

    pub async fn get_course(&self, id: u32) -> ClientResult<Course> {
        self.get_json(&format!("/courses/{}", id)).await
    }

    pub async fn create_course(&self, course: &Course) -> ClientResult<Course> {
        validation::check(course)?;
        self.send_json(Method::POST, "/courses", course).await
    }

    pub async fn update_course(&self, id: u32, course: &Course) -> ClientResult<()> {
        validation::check(course)?;
        self.send_unit(Method::PUT, &format!("/courses/{}", id), Some(course)).await
    }

    pub async fn delete_course(&self, id: u32) -> ClientResult<()> {
        self.send_unit::<()>(Method::DELETE, &format!("/courses/{}", id), None).await
    }
}
