//! User management page: create, update, and delete forms.

use crate::api::UserApi;
use crate::client::ApiClient;
use crate::pages::{rejection_banner, Banner};
use crate::types::{CreateUserRequest, UpdateUserRequest};

const MISSING_USER_ID: &str = "사용자 ID를 입력해주세요.";

pub struct UserPage<'a> {
    api: UserApi<'a>,
    /// Shared by the create and update forms, as in the original view.
    pub form: CreateUserRequest,
    pub update_user_id: Option<u64>,
    pub delete_user_id: Option<u64>,
    pub banner: Option<Banner>,
}

impl<'a> UserPage<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self {
            api: UserApi::new(client),
            form: CreateUserRequest::default(),
            update_user_id: None,
            delete_user_id: None,
            banner: None,
        }
    }

    pub fn submit_create(&mut self) {
        match self.api.create(&self.form) {
            Ok(envelope) if envelope.is_success => {
                let name = envelope.result.map(|r| r.name).unwrap_or_default();
                self.banner = Some(Banner::success(format!(
                    "사용자 \"{name}\"가 생성되었습니다!"
                )));
                self.form = CreateUserRequest::default();
            }
            Ok(envelope) => self.banner = Some(Banner::error(envelope.message)),
            Err(error) => {
                self.banner = Some(rejection_banner(&error, "사용자 생성에 실패했습니다."));
            }
        }
    }

    pub fn submit_update(&mut self) {
        let Some(user_id) = self.update_user_id else {
            self.banner = Some(Banner::error(MISSING_USER_ID));
            return;
        };
        let input = UpdateUserRequest::from(self.form.clone());
        match self.api.update(user_id, &input) {
            Ok(envelope) if envelope.is_success => {
                self.banner = Some(Banner::success("사용자 정보가 수정되었습니다!"));
                self.form = CreateUserRequest::default();
                self.update_user_id = None;
            }
            Ok(envelope) => self.banner = Some(Banner::error(envelope.message)),
            Err(error) => {
                self.banner = Some(rejection_banner(&error, "사용자 수정에 실패했습니다."));
            }
        }
    }

    pub fn submit_delete(&mut self) {
        let Some(user_id) = self.delete_user_id else {
            self.banner = Some(Banner::error(MISSING_USER_ID));
            return;
        };
        match self.api.delete(user_id) {
            Ok(envelope) if envelope.is_success => {
                self.banner = Some(Banner::success("사용자가 삭제되었습니다!"));
                self.delete_user_id = None;
            }
            Ok(envelope) => self.banner = Some(Banner::error(envelope.message)),
            Err(error) => {
                self.banner = Some(rejection_banner(&error, "사용자 삭제에 실패했습니다."));
            }
        }
    }
}
