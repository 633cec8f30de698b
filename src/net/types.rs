//! Wire DTOs for the resume REST API and the client error taxonomy.
//!
//! DESIGN
//! ======
//! Field names mirror the server's camelCase JSON so serde round-trips stay
//! lossless. Optional server fields are `Option` and collections default to
//! empty when omitted.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::time::Duration;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// AUTH
// =============================================================================

/// Credentials posted to `/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login body.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

// =============================================================================
// PERSONS
// =============================================================================

/// A person and their CV, as returned by `/persons/{id}`.
///
/// List endpoints return the same shape with `activities` left empty.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub website: Option<String>,
    /// ISO 8601 date (`YYYY-MM-DD`), if known.
    pub birth_date: Option<String>,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

impl Person {
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_owned()
    }
}

/// Body for `POST /persons`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonCreateRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub website: Option<String>,
    pub birth_date: Option<String>,
    pub raw_password: String,
}

/// Body for `PUT /persons/{id}`; `None` fields are left unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonUpdateRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub website: Option<String>,
    pub birth_date: Option<String>,
}

// =============================================================================
// ACTIVITIES
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityType {
    Project,
    Education,
    /// Any kind this client does not know about yet.
    #[serde(other)]
    Other,
}

impl ActivityType {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Project => "Project",
            Self::Education => "Education",
            Self::Other => "Other",
        }
    }
}

/// A dated CV entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: Uuid,
    pub year: i32,
    #[serde(rename = "type")]
    pub kind: ActivityType,
    pub title: String,
    pub description: Option<String>,
    pub url: Option<String>,
}

/// Body for creating or replacing an activity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ActivityRequest {
    pub year: i32,
    #[serde(rename = "type")]
    pub kind: ActivityType,
    pub title: String,
    pub description: Option<String>,
    pub url: Option<String>,
}

// =============================================================================
// PAGING
// =============================================================================

/// Paged list envelope used by list and search endpoints.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub total_pages: u32,
    /// Zero-based page index.
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub size: u32,
}

impl<T> Page<T> {
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.number + 1 < self.total_pages
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.number > 0
    }
}

// =============================================================================
// ERRORS
// =============================================================================

/// Failure of a single API call.
///
/// `Transport` and `Timeout` mean no response arrived. Everything else carries
/// the server's status. Bodies are kept verbatim for display.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(String),

    #[error("request timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    #[error("unauthorized")]
    Unauthorized { body: String },

    #[error("forbidden: {body}")]
    Forbidden { body: String },

    #[error("request failed: status {status}")]
    Status { status: u16, body: String },

    #[error("request body encode failed: {0}")]
    Encode(String),

    #[error("response body decode failed: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status when a response was received.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { .. } => Some(401),
            Self::Forbidden { .. } => Some(403),
            Self::Status { status, .. } => Some(*status),
            Self::Transport(_) | Self::Timeout(_) | Self::Encode(_) | Self::Decode(_) => None,
        }
    }
}
