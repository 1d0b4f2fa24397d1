//! Login

use reqwest::Method;
use sis_core::domain::{AuthResponse, LoginRequest, Session};
use sis_core::{validation, ClientResult};

use super::ApiClient;

impl ApiClient {
    /// `POST /login`, sent without any bearer token
    pub async fn login(&self, request: &LoginRequest) -> ClientResult<Session> {
        validation::check(request)?;
        let anonymous = self.for_session(None);
        let response: AuthResponse = anonymous.send_json(Method::POST, "/login", request).await?;
        log::info!("[API] Signed in as {} ({})", response.id, response.role.as_str());
        Ok(response.into())
    }
}
