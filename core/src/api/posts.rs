//! Post and comment operations.
//!
//! Mutations on an existing post carry the acting user's id in the
//! `X-USER-ID` header as a decimal string; the backend uses it to check
//! authorship.

use crate::client::ApiClient;
use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::types::{
    CreateCommentRequest, CreateCommentResponse, CreatePostRequest, CreatePostResponse,
    PostListResponse, UpdatePostRequest,
};

pub const ACTOR_HEADER: &str = "X-USER-ID";

fn actor_header(user_id: u64) -> Vec<(String, String)> {
    vec![(ACTOR_HEADER.to_string(), user_id.to_string())]
}

/// Typed calls under `/post`.
pub struct PostApi<'a> {
    client: &'a ApiClient,
}

impl<'a> PostApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub fn create(
        &self,
        input: &CreatePostRequest,
    ) -> Result<Envelope<CreatePostResponse>, ApiError> {
        self.client.post("/post", input, Vec::new())
    }

    pub fn list(&self) -> Result<Envelope<PostListResponse>, ApiError> {
        self.client.get("/post")
    }

    pub fn update(
        &self,
        post_id: u64,
        input: &UpdatePostRequest,
        user_id: u64,
    ) -> Result<Envelope<()>, ApiError> {
        self.client
            .put(&format!("/post/{post_id}"), input, actor_header(user_id))
    }

    pub fn delete(&self, post_id: u64, user_id: u64) -> Result<Envelope<()>, ApiError> {
        self.client
            .delete(&format!("/post/{post_id}"), actor_header(user_id))
    }

    pub fn create_comment(
        &self,
        post_id: u64,
        input: &CreateCommentRequest,
        user_id: u64,
    ) -> Result<Envelope<CreateCommentResponse>, ApiError> {
        self.client.post(
            &format!("/post/{post_id}/comment"),
            input,
            actor_header(user_id),
        )
    }
}
