//! Domain Layer
//!
//! Entities owned by the external API, as the client sees them.
//! Wire quirks are normalized in `wire` so every other module works with
//! one canonical representation per field.

mod entity;
mod student;
mod course;
mod enrollment;
mod grade;
mod account;
pub mod wire;

pub use entity::{find_by_id, Entity};
pub use student::Student;
pub use course::Course;
pub use enrollment::Enrollment;
pub use grade::Grade;
pub use account::{AuthResponse, LoginRequest, Role, Session};
