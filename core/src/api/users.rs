//! User operations: create, update, delete.

use crate::client::ApiClient;
use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::types::{CreateUserRequest, CreateUserResponse, UpdateUserRequest};

/// Typed calls under `/users`.
pub struct UserApi<'a> {
    client: &'a ApiClient,
}

impl<'a> UserApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub fn create(
        &self,
        input: &CreateUserRequest,
    ) -> Result<Envelope<CreateUserResponse>, ApiError> {
        self.client.post("/users", input, Vec::new())
    }

    pub fn update(
        &self,
        user_id: u64,
        input: &UpdateUserRequest,
    ) -> Result<Envelope<UpdateUserRequest>, ApiError> {
        self.client.put(&format!("/users/{user_id}"), input, Vec::new())
    }

    pub fn delete(&self, user_id: u64) -> Result<Envelope<()>, ApiError> {
        self.client.delete(&format!("/users/{user_id}"), Vec::new())
    }
}
