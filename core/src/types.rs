//! Request and response DTOs for the board API.
//!
//! # Design
//! These types mirror the backend's JSON shapes (camelCase on the wire) but
//! are defined independently of the mock-server crate; integration tests
//! catch schema drift. Request types used as form state derive `Default` so
//! page controllers can reset them after a successful submission.

use serde::{Deserialize, Serialize};

/// Body of `POST /users`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub name: String,
    pub password: String,
    pub address: String,
    pub email: String,
    pub age: u32,
}

/// Payload of a successful `POST /users`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserResponse {
    pub name: String,
}

/// Body of `PUT /users/{userId}`. The server echoes these fields back in the
/// success envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub name: String,
    pub password: String,
    pub address: String,
    pub email: String,
    pub age: u32,
}

impl From<CreateUserRequest> for UpdateUserRequest {
    fn from(form: CreateUserRequest) -> Self {
        UpdateUserRequest {
            name: form.name,
            password: form.password,
            address: form.address,
            email: form.email,
            age: form.age,
        }
    }
}

/// Body of `POST /post`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub user_id: u64,
    pub title: String,
    pub category: String,
    pub content: String,
}

/// Payload of a successful `POST /post`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostResponse {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub category: String,
}

/// Body of `PUT /post/{postId}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    pub title: String,
    pub category: String,
    pub content: String,
}

/// One row of the post list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSummary {
    pub post_id: u64,
    pub title: String,
    pub username: String,
    pub category: String,
    /// Backend `LocalDateTime` string, e.g. `2024-01-01T00:00:00`.
    pub created_date: String,
}

/// Payload of `GET /post`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostListResponse {
    pub post_list: Vec<PostSummary>,
}

/// Body of `POST /post/{postId}/comment`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    pub content: String,
}

/// Payload of a successful comment creation. The backend may omit either
/// field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentResponse {
    pub id: Option<u64>,
    pub content: Option<String>,
}
