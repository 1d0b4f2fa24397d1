//! REST API Client
//!
//! Typed bindings to the student information system API, organized by
//! resource. One `ApiClient` carries the base URL and, after login, the
//! bearer token attached to every request.

mod auth;
mod courses;
mod enrollments;
mod grades;
mod students;

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use sis_core::{ClientError, ClientResult, Session};

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Same client acting on behalf of `session`
    pub fn for_session(&self, session: Option<&Session>) -> Self {
        Self {
            token: session.map(|s| s.token.clone()),
            ..self.clone()
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        log::debug!("[API] {} {}", method, path);
        let builder = self.http.request(method, self.url(path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = execute(self.request(Method::GET, path)).await?;
        decode(response).await
    }

    async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = execute(self.request(method, path).json(body)).await?;
        decode(response).await
    }

    /// For endpoints whose success body carries nothing the UI needs
    async fn send_unit<B>(&self, method: Method, path: &str, body: Option<&B>) -> ClientResult<()>
    where
        B: Serialize + ?Sized,
    {
        let builder = self.request(method, path);
        let builder = match body {
            Some(body) => builder.json(body),
            None => builder,
        };
        execute(builder).await.map(|_| ())
    }
}

async fn execute(builder: RequestBuilder) -> ClientResult<Response> {
    let response = builder
        .send()
        .await
        .map_err(|e| ClientError::Transport(e.to_string()))?;
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    log::warn!("[API] Request failed with {}: {}", status, body);
    Err(status_error(status, &body))
}

/// Error for a non-2xx answer, carrying the server's text when the body has one
fn status_error(status: StatusCode, body: &str) -> ClientError {
    ClientError::server(status.as_u16(), body)
}

async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    response
        .json::<T>()
        .await
        .map_err(|e| ClientError::Decode(e.to_string()))
}
