use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

pub const SUCCESS_CODE: &str = "COMMON200";
pub const SUCCESS_MESSAGE: &str = "요청에 성공하였습니다.";

/// The envelope every route answers with, success or failure.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalResponse<T> {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: Option<T>,
}

impl<T> GlobalResponse<T> {
    pub fn success(result: Option<T>) -> Self {
        GlobalResponse {
            is_success: true,
            code: SUCCESS_CODE.to_string(),
            message: SUCCESS_MESSAGE.to_string(),
            result,
        }
    }

    pub fn failure(code: &str, message: &str) -> Self {
        GlobalResponse {
            is_success: false,
            code: code.to_string(),
            message: message.to_string(),
            result: None,
        }
    }
}

#[derive(Deserialize)]
pub struct CreateUser {
    pub name: String,
    pub password: String,
    pub address: String,
    pub email: String,
    pub age: u32,
}

#[derive(Deserialize)]
pub struct UpdateUser {
    pub name: String,
    pub password: String,
    pub address: String,
    pub email: String,
    pub age: u32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePost {
    pub user_id: u64,
    pub title: String,
    pub category: String,
    pub content: String,
}

#[derive(Deserialize)]
pub struct UpdatePost {
    pub title: String,
    pub category: String,
    pub content: String,
}

#[derive(Deserialize)]
pub struct CreateComment {
    pub content: String,
}

#[derive(Clone)]
struct UserRecord {
    name: String,
    password: String,
    address: String,
    email: String,
    age: u32,
}

#[derive(Clone)]
struct CommentRecord {
    id: u64,
    user_id: u64,
    content: String,
}

#[derive(Clone)]
struct PostRecord {
    user_id: u64,
    title: String,
    category: String,
    content: String,
    created_date: String,
    comments: Vec<CommentRecord>,
}

#[derive(Default)]
pub struct Store {
    next_user_id: u64,
    next_post_id: u64,
    next_comment_id: u64,
    users: HashMap<u64, UserRecord>,
    posts: HashMap<u64, PostRecord>,
}

pub type Db = Arc<RwLock<Store>>;

type Reply = (StatusCode, Json<GlobalResponse<serde_json::Value>>);

fn ok(result: serde_json::Value) -> Reply {
    (StatusCode::OK, Json(GlobalResponse::success(Some(result))))
}

fn ok_empty() -> Reply {
    (StatusCode::OK, Json(GlobalResponse::success(None)))
}

fn fail(status: StatusCode, code: &str, message: &str) -> Reply {
    (status, Json(GlobalResponse::failure(code, message)))
}

fn user_not_found() -> Reply {
    fail(StatusCode::NOT_FOUND, "USER4004", "사용자를 찾을 수 없습니다.")
}

fn post_not_found() -> Reply {
    fail(StatusCode::NOT_FOUND, "POST4004", "게시물을 찾을 수 없습니다.")
}

/// Parse the acting user's id from the `X-USER-ID` header.
pub fn actor_id(headers: &HeaderMap) -> Option<u64> {
    headers.get("X-USER-ID")?.to_str().ok()?.parse().ok()
}

fn require_actor(headers: &HeaderMap) -> Result<u64, Reply> {
    actor_id(headers).ok_or_else(|| {
        fail(
            StatusCode::BAD_REQUEST,
            "HEADER4000",
            "X-USER-ID 헤더가 필요합니다.",
        )
    })
}

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    let api = Router::new()
        .route("/users", post(create_user))
        .route("/users/{id}", put(update_user).delete(delete_user))
        .route("/post", get(list_posts).post(create_post))
        .route("/post/{id}", put(update_post).delete(delete_post))
        .route("/post/{id}/comment", post(create_comment))
        .with_state(db);
    Router::new().nest("/api", api)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn now() -> String {
    chrono::Local::now().format("%Y-%m-%dT%H:%M:%S").to_string()
}

async fn create_user(State(db): State<Db>, Json(input): Json<CreateUser>) -> Reply {
    let mut store = db.write().await;
    store.next_user_id += 1;
    let id = store.next_user_id;
    let name = input.name.clone();
    store.users.insert(
        id,
        UserRecord {
            name: input.name,
            password: input.password,
            address: input.address,
            email: input.email,
            age: input.age,
        },
    );
    ok(serde_json::json!({ "name": name }))
}

async fn update_user(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<UpdateUser>,
) -> Reply {
    let mut store = db.write().await;
    let Some(user) = store.users.get_mut(&id) else {
        return user_not_found();
    };
    user.name = input.name;
    user.password = input.password;
    user.address = input.address;
    user.email = input.email;
    user.age = input.age;
    ok(serde_json::json!({
        "name": user.name,
        "password": user.password,
        "address": user.address,
        "email": user.email,
        "age": user.age,
    }))
}

async fn delete_user(State(db): State<Db>, Path(id): Path<u64>) -> Reply {
    let mut store = db.write().await;
    if store.users.remove(&id).is_none() {
        return user_not_found();
    }
    ok_empty()
}

async fn create_post(State(db): State<Db>, Json(input): Json<CreatePost>) -> Reply {
    let mut store = db.write().await;
    if !store.users.contains_key(&input.user_id) {
        // Business failure: the request was processed and declined, so the
        // envelope reports it with a 200 status.
        return (
            StatusCode::OK,
            Json(GlobalResponse::failure(
                "POST4001",
                "존재하지 않는 사용자입니다.",
            )),
        );
    }
    store.next_post_id += 1;
    let id = store.next_post_id;
    store.posts.insert(
        id,
        PostRecord {
            user_id: input.user_id,
            title: input.title.clone(),
            category: input.category.clone(),
            content: input.content.clone(),
            created_date: now(),
            comments: Vec::new(),
        },
    );
    ok(serde_json::json!({
        "id": id,
        "title": input.title,
        "content": input.content,
        "category": input.category,
    }))
}

async fn list_posts(State(db): State<Db>) -> Reply {
    let store = db.read().await;
    let mut rows: Vec<serde_json::Value> = store
        .posts
        .iter()
        .map(|(id, post)| {
            let username = store
                .users
                .get(&post.user_id)
                .map(|user| user.name.clone())
                .unwrap_or_default();
            serde_json::json!({
                "postId": id,
                "title": post.title,
                "username": username,
                "category": post.category,
                "createdDate": post.created_date,
            })
        })
        .collect();
    rows.sort_by_key(|row| row["postId"].as_u64());
    ok(serde_json::json!({ "postList": rows }))
}

async fn update_post(
    State(db): State<Db>,
    Path(id): Path<u64>,
    headers: HeaderMap,
    Json(input): Json<UpdatePost>,
) -> Reply {
    let actor = match require_actor(&headers) {
        Ok(actor) => actor,
        Err(reply) => return reply,
    };
    let mut store = db.write().await;
    let Some(post) = store.posts.get_mut(&id) else {
        return post_not_found();
    };
    if post.user_id != actor {
        return fail(
            StatusCode::FORBIDDEN,
            "AUTH4003",
            "게시물에 대한 권한이 없습니다.",
        );
    }
    post.title = input.title;
    post.category = input.category;
    post.content = input.content;
    ok_empty()
}

async fn delete_post(State(db): State<Db>, Path(id): Path<u64>, headers: HeaderMap) -> Reply {
    let actor = match require_actor(&headers) {
        Ok(actor) => actor,
        Err(reply) => return reply,
    };
    let mut store = db.write().await;
    let Some(post) = store.posts.get(&id) else {
        return post_not_found();
    };
    if post.user_id != actor {
        return fail(
            StatusCode::FORBIDDEN,
            "AUTH4003",
            "게시물에 대한 권한이 없습니다.",
        );
    }
    store.posts.remove(&id);
    ok_empty()
}

async fn create_comment(
    State(db): State<Db>,
    Path(id): Path<u64>,
    headers: HeaderMap,
    Json(input): Json<CreateComment>,
) -> Reply {
    let actor = match require_actor(&headers) {
        Ok(actor) => actor,
        Err(reply) => return reply,
    };
    let mut store = db.write().await;
    store.next_comment_id += 1;
    let comment_id = store.next_comment_id;
    let Some(post) = store.posts.get_mut(&id) else {
        return post_not_found();
    };
    post.comments.push(CommentRecord {
        id: comment_id,
        user_id: actor,
        content: input.content.clone(),
    });
    ok(serde_json::json!({ "id": comment_id, "content": input.content }))
}
