//! Typed endpoints of the resume REST API.
//!
//! Paths are API-relative; [`ApiClient`] adds the base path, the bearer token
//! and the error mapping.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use uuid::Uuid;

use super::client::ApiClient;
use super::types::{
    Activity, ActivityRequest, ApiError, LoginRequest, LoginResponse, Page, Person, PersonCreateRequest,
    PersonUpdateRequest,
};
use crate::util::query::{encode_path_segment, with_query};

pub const LOGIN_ENDPOINT: &str = "/auth/login";
pub const DEFAULT_PAGE_SIZE: u32 = 10;

fn person_endpoint(id: &str) -> Result<String, ApiError> {
    encode_path_segment(id)
        .map(|segment| format!("/persons/{segment}"))
        .ok_or_else(|| ApiError::Encode(format!("person id {id:?} is not a path segment")))
}

fn person_activities_endpoint(person_id: Uuid) -> String {
    format!("/persons/{person_id}/activities")
}

fn activity_endpoint(activity_id: Uuid) -> String {
    format!("/activities/{activity_id}")
}

fn paged(path: &str, q: Option<&str>, page: u32, size: u32) -> String {
    let mut pairs = Vec::with_capacity(3);
    if let Some(q) = q {
        pairs.push(("q", q.to_owned()));
    }
    pairs.push(("page", page.to_string()));
    pairs.push(("size", size.to_string()));
    with_query(path, &pairs)
}

impl ApiClient {
    // =========================================================================
    // AUTH
    // =========================================================================

    /// Exchange credentials for a bearer token.
    ///
    /// # Errors
    ///
    /// Bad credentials come back as `Forbidden` or `Unauthorized`.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.post(LOGIN_ENDPOINT, request).await
    }

    // =========================================================================
    // PERSONS
    // =========================================================================

    /// Fetch one person with activities. `id` is the raw identity claim.
    ///
    /// # Errors
    ///
    /// `Encode` when `id` cannot be a single path segment; otherwise
    /// propagates any [`ApiError`].
    pub async fn fetch_person(&self, id: &str) -> Result<Person, ApiError> {
        self.get(&person_endpoint(id)?).await
    }

    /// # Errors
    ///
    /// Propagates any [`ApiError`].
    pub async fn list_persons(&self, page: u32, size: u32) -> Result<Page<Person>, ApiError> {
        self.get(&paged("/persons", None, page, size)).await
    }

    /// Search persons by name.
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`].
    pub async fn search_persons(&self, q: &str, page: u32, size: u32) -> Result<Page<Person>, ApiError> {
        self.get(&paged("/persons/search", Some(q), page, size)).await
    }

    /// # Errors
    ///
    /// Propagates any [`ApiError`].
    pub async fn create_person(&self, request: &PersonCreateRequest) -> Result<Person, ApiError> {
        self.post("/persons", request).await
    }

    /// # Errors
    ///
    /// `Forbidden` when editing someone else's CV.
    pub async fn update_person(&self, id: Uuid, request: &PersonUpdateRequest) -> Result<Person, ApiError> {
        self.put(&format!("/persons/{id}"), request).await
    }

    /// # Errors
    ///
    /// `Forbidden` when deleting someone else's CV.
    pub async fn delete_person(&self, id: Uuid) -> Result<(), ApiError> {
        self.delete(&format!("/persons/{id}")).await
    }

    // =========================================================================
    // ACTIVITIES
    // =========================================================================

    /// # Errors
    ///
    /// Propagates any [`ApiError`].
    pub async fn list_activities(&self, person_id: Uuid, page: u32, size: u32) -> Result<Page<Activity>, ApiError> {
        self.get(&paged(&person_activities_endpoint(person_id), None, page, size))
            .await
    }

    /// # Errors
    ///
    /// `Forbidden` when the person is not the caller.
    pub async fn add_activity(&self, person_id: Uuid, request: &ActivityRequest) -> Result<Activity, ApiError> {
        self.post(&person_activities_endpoint(person_id), request)
            .await
    }

    /// # Errors
    ///
    /// `Forbidden` when the activity belongs to someone else.
    pub async fn update_activity(&self, activity_id: Uuid, request: &ActivityRequest) -> Result<Activity, ApiError> {
        self.put(&activity_endpoint(activity_id), request).await
    }

    /// # Errors
    ///
    /// `Forbidden` when the activity belongs to someone else.
    pub async fn delete_activity(&self, activity_id: Uuid) -> Result<(), ApiError> {
        self.delete(&activity_endpoint(activity_id)).await
    }

    /// Search activities by title.
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`].
    pub async fn search_activities(&self, q: &str, page: u32, size: u32) -> Result<Page<Activity>, ApiError> {
        self.get(&paged("/activities/search", Some(q), page, size))
            .await
    }
}
