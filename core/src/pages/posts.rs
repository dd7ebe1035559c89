//! Post management page: list, create, update, delete, and comments.

use crate::api::PostApi;
use crate::client::ApiClient;
use crate::pages::{rejection_banner, Banner};
use crate::types::{CreateCommentRequest, CreatePostRequest, PostSummary, UpdatePostRequest};

const MISSING_IDS: &str = "게시물 ID와 사용자 ID를 입력해주세요.";

pub struct PostPage<'a> {
    api: PostApi<'a>,
    pub posts: Vec<PostSummary>,
    pub create_form: CreatePostRequest,
    pub update_form: UpdatePostRequest,
    pub update_post_id: Option<u64>,
    pub update_user_id: Option<u64>,
    pub delete_post_id: Option<u64>,
    pub delete_user_id: Option<u64>,
    pub comment_form: CreateCommentRequest,
    pub comment_post_id: Option<u64>,
    pub comment_user_id: Option<u64>,
    pub banner: Option<Banner>,
}

impl<'a> PostPage<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self {
            api: PostApi::new(client),
            posts: Vec::new(),
            create_form: CreatePostRequest::default(),
            update_form: UpdatePostRequest::default(),
            update_post_id: None,
            update_user_id: None,
            delete_post_id: None,
            delete_user_id: None,
            comment_form: CreateCommentRequest::default(),
            comment_post_id: None,
            comment_user_id: None,
            banner: None,
        }
    }

    /// Re-fetch the post list. A successful fetch replaces the rows without
    /// touching the banner, so a preceding action's success message survives
    /// the follow-up refresh.
    pub fn refresh(&mut self) {
        match self.api.list() {
            Ok(envelope) => {
                if envelope.is_success {
                    if let Some(result) = envelope.result {
                        self.posts = result.post_list;
                        return;
                    }
                }
                self.banner = Some(Banner::error(envelope.message));
            }
            Err(error) => {
                self.banner = Some(rejection_banner(
                    &error,
                    "게시물 목록을 불러오는데 실패했습니다.",
                ));
            }
        }
    }

    pub fn submit_create(&mut self) {
        match self.api.create(&self.create_form) {
            Ok(envelope) if envelope.is_success => {
                self.banner = Some(Banner::success("게시물이 생성되었습니다!"));
                self.create_form = CreatePostRequest::default();
                self.refresh();
            }
            Ok(envelope) => self.banner = Some(Banner::error(envelope.message)),
            Err(error) => {
                self.banner = Some(rejection_banner(&error, "게시물 생성에 실패했습니다."));
            }
        }
    }

    pub fn submit_update(&mut self) {
        let (Some(post_id), Some(user_id)) = (self.update_post_id, self.update_user_id) else {
            self.banner = Some(Banner::error(MISSING_IDS));
            return;
        };
        match self.api.update(post_id, &self.update_form, user_id) {
            Ok(envelope) if envelope.is_success => {
                self.banner = Some(Banner::success("게시물이 수정되었습니다!"));
                self.update_form = UpdatePostRequest::default();
                self.update_post_id = None;
                self.update_user_id = None;
                self.refresh();
            }
            Ok(envelope) => self.banner = Some(Banner::error(envelope.message)),
            Err(error) => {
                self.banner = Some(rejection_banner(&error, "게시물 수정에 실패했습니다."));
            }
        }
    }

    pub fn submit_delete(&mut self) {
        let (Some(post_id), Some(user_id)) = (self.delete_post_id, self.delete_user_id) else {
            self.banner = Some(Banner::error(MISSING_IDS));
            return;
        };
        match self.api.delete(post_id, user_id) {
            Ok(envelope) if envelope.is_success => {
                self.banner = Some(Banner::success("게시물이 삭제되었습니다!"));
                self.delete_post_id = None;
                self.delete_user_id = None;
                self.refresh();
            }
            Ok(envelope) => self.banner = Some(Banner::error(envelope.message)),
            Err(error) => {
                self.banner = Some(rejection_banner(&error, "게시물 삭제에 실패했습니다."));
            }
        }
    }

    pub fn submit_comment(&mut self) {
        let (Some(post_id), Some(user_id)) = (self.comment_post_id, self.comment_user_id) else {
            self.banner = Some(Banner::error(MISSING_IDS));
            return;
        };
        match self.api.create_comment(post_id, &self.comment_form, user_id) {
            Ok(envelope) if envelope.is_success => {
                self.banner = Some(Banner::success("댓글이 생성되었습니다!"));
                self.comment_form = CreateCommentRequest::default();
                self.comment_post_id = None;
                self.comment_user_id = None;
            }
            Ok(envelope) => self.banner = Some(Banner::error(envelope.message)),
            Err(error) => {
                self.banner = Some(rejection_banner(&error, "댓글 생성에 실패했습니다."));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::mock::MockTransport;
    use crate::http::{HttpMethod, TransportError};
    use crate::pages::BannerKind;

    const OK_NULL: &str = r#"{"isSuccess":true,"code":"COMMON200","message":"ok","result":null}"#;
    const EMPTY_LIST: &str =
        r#"{"isSuccess":true,"code":"COMMON200","message":"ok","result":{"postList":[]}}"#;

    fn rig() -> (MockTransport, ApiClient) {
        let transport = MockTransport::new();
        let client = ApiClient::new("http://localhost:3000/api", transport.clone());
        (transport, client)
    }

    #[test]
    fn refresh_replaces_the_post_list() {
        let (transport, client) = rig();
        transport.push_response(
            200,
            r#"{"isSuccess":true,"code":"COMMON200","message":"ok","result":{"postList":[
                {"postId":1,"title":"T","username":"U","category":"C","createdDate":"2024-01-01T00:00:00"}
            ]}}"#,
        );

        let mut page = PostPage::new(&client);
        page.refresh();

        assert_eq!(page.posts.len(), 1);
        assert_eq!(page.posts[0].post_id, 1);
        assert_eq!(page.posts[0].username, "U");
        assert!(page.banner.is_none());
    }

    #[test]
    fn refresh_failure_sets_fallback_banner() {
        let (transport, client) = rig();
        transport.push_error(TransportError::NoResponse("down".to_string()));

        let mut page = PostPage::new(&client);
        page.refresh();

        assert!(page.posts.is_empty());
        assert_eq!(
            page.banner.unwrap().text,
            "네트워크 오류가 발생했습니다."
        );
    }

    #[test]
    fn create_success_resets_form_and_refreshes() {
        let (transport, client) = rig();
        transport.push_response(
            200,
            r#"{"isSuccess":true,"code":"COMMON200","message":"ok","result":{"id":1,"title":"T","content":"b","category":"C"}}"#,
        );
        transport.push_response(200, EMPTY_LIST);

        let mut page = PostPage::new(&client);
        page.create_form = CreatePostRequest {
            user_id: 1,
            title: "T".to_string(),
            category: "C".to_string(),
            content: "b".to_string(),
        };
        page.submit_create();

        let requests = transport.requests();
        assert_eq!(requests.len(), 2, "mutation then list refresh");
        assert_eq!(requests[0].method, HttpMethod::Post);
        assert_eq!(requests[1].method, HttpMethod::Get);
        assert_eq!(page.create_form, CreatePostRequest::default());
        // The refresh does not overwrite the success banner.
        assert_eq!(page.banner.unwrap().text, "게시물이 생성되었습니다!");
    }

    #[test]
    fn update_without_both_ids_issues_no_request() {
        let (transport, client) = rig();

        let mut page = PostPage::new(&client);
        page.update_post_id = Some(1);
        page.submit_update();

        assert!(transport.requests().is_empty());
        assert_eq!(
            page.banner.unwrap().text,
            "게시물 ID와 사용자 ID를 입력해주세요."
        );
    }

    #[test]
    fn update_success_resets_ids_and_refreshes() {
        let (transport, client) = rig();
        transport.push_response(200, OK_NULL);
        transport.push_response(200, EMPTY_LIST);

        let mut page = PostPage::new(&client);
        page.update_post_id = Some(5);
        page.update_user_id = Some(12);
        page.submit_update();

        assert_eq!(page.banner.unwrap().text, "게시물이 수정되었습니다!");
        assert!(page.update_post_id.is_none());
        assert!(page.update_user_id.is_none());
        assert_eq!(transport.requests().len(), 2);
    }

    #[test]
    fn delete_twice_issues_two_independent_requests() {
        let (transport, client) = rig();
        // First delete succeeds (plus its refresh); the second surfaces the
        // backend's missing-resource failure untouched.
        transport.push_response(200, OK_NULL);
        transport.push_response(200, EMPTY_LIST);
        transport.push_response(
            404,
            r#"{"isSuccess":false,"code":"POST4004","message":"게시물을 찾을 수 없습니다.","result":null}"#,
        );

        let mut page = PostPage::new(&client);
        page.delete_post_id = Some(5);
        page.delete_user_id = Some(12);
        page.submit_delete();
        assert_eq!(page.banner.as_ref().unwrap().text, "게시물이 삭제되었습니다!");

        page.delete_post_id = Some(5);
        page.delete_user_id = Some(12);
        page.submit_delete();

        let banner = page.banner.unwrap();
        assert_eq!(banner.kind, BannerKind::Error);
        assert_eq!(banner.text, "게시물을 찾을 수 없습니다.");
        let deletes = transport
            .requests()
            .iter()
            .filter(|r| r.method == HttpMethod::Delete)
            .count();
        assert_eq!(deletes, 2);
    }

    #[test]
    fn comment_success_resets_form_without_refreshing() {
        let (transport, client) = rig();
        transport.push_response(
            200,
            r#"{"isSuccess":true,"code":"COMMON200","message":"ok","result":{"id":1,"content":"hi"}}"#,
        );

        let mut page = PostPage::new(&client);
        page.comment_form.content = "hi".to_string();
        page.comment_post_id = Some(1);
        page.comment_user_id = Some(2);
        page.submit_comment();

        assert_eq!(page.banner.unwrap().text, "댓글이 생성되었습니다!");
        assert!(page.comment_form.content.is_empty());
        assert_eq!(transport.requests().len(), 1, "no list refresh for comments");
    }

    #[test]
    fn business_failure_message_is_shown_verbatim() {
        let (transport, client) = rig();
        transport.push_response(
            200,
            r#"{"isSuccess":false,"code":"POST4001","message":"존재하지 않는 사용자입니다.","result":null}"#,
        );

        let mut page = PostPage::new(&client);
        page.submit_create();

        assert_eq!(page.banner.unwrap().text, "존재하지 않는 사용자입니다.");
        assert_eq!(transport.requests().len(), 1, "no refresh after failure");
    }
}
