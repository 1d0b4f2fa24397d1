//! Student Information System Core
//!
//! Target-independent rules shared by the browser front end:
//! - domain: entities and wire conventions of the REST API
//! - access / view: role gate and the screen router
//! - gpa / transcript: academic aggregation
//! - session: persisted login state behind a storage trait

pub mod access;
pub mod config;
pub mod domain;
pub mod error;
pub mod gpa;
pub mod session;
pub mod transcript;
pub mod validation;
pub mod view;

pub use access::{authorize, permits, Action};
pub use config::Config;
pub use domain::{Role, Session};
pub use error::{ClientError, ClientResult, StorageError};
pub use gpa::GpaReport;
pub use transcript::{StudentTranscript, TranscriptCourse};
pub use view::{NavItem, Routed, View};
