//! Accounts and Sessions
//!
//! Login credentials, the server's answer, and the session kept afterwards.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Who is signed in; drives the client-side role gate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    Faculty,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Faculty => "faculty",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "student" => Some(Role::Student),
            "faculty" => Some(Role::Faculty),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Faculty => "Faculty",
        }
    }
}

/// Body of `POST /login`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Validate)]
pub struct LoginRequest {
    #[validate(range(min = 1, message = "Please enter a valid ID."))]
    pub id: u32,
    #[validate(length(min = 1, message = "Password is required."))]
    pub password: String,
    pub role: Role,
}

/// Answer of `POST /login`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub id: u32,
    pub role: Role,
}

/// Authenticated identity attached to every request after login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub id: u32,
    pub role: Role,
    pub token: String,
}

impl Session {
    pub fn is_faculty(&self) -> bool {
        self.role == Role::Faculty
    }
}

impl From<AuthResponse> for Session {
    fn from(response: AuthResponse) -> Self {
        Self {
            id: response.id,
            role: response.role,
            token: response.token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip_names() {
        assert_eq!(Role::parse("faculty"), Some(Role::Faculty));
        assert_eq!(Role::parse(Role::Student.as_str()), Some(Role::Student));
        assert_eq!(Role::parse("admin"), None);
    }

    #[test]
    fn test_login_request_payload() {
        let request = LoginRequest {
            id: 42,
            password: "secret".to_string(),
            role: Role::Faculty,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({"id": 42, "password": "secret", "role": "faculty"}));
    }

    #[test]
    fn test_login_request_requires_id_and_password() {
        assert!(LoginRequest::default().validate().is_err());
        let request = LoginRequest {
            id: 1,
            password: String::new(),
            role: Role::Student,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_session_from_auth_response() {
        let response: AuthResponse =
            serde_json::from_str(r#"{"token": "abc", "id": 7, "role": "student"}"#).unwrap();
        let session = Session::from(response);
        assert_eq!(session.id, 7);
        assert!(!session.is_faculty());
        assert_eq!(session.token, "abc");
    }
}
