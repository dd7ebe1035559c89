//! Terminal frontend for the board admin backend.
//!
//! One `ApiClient` is constructed at startup over the ureq transport and
//! shared by both management pages. The menus fill the page controllers'
//! form state from prompts; all outcome handling (banners, form resets,
//! list refreshes) lives in the controllers themselves.

mod render;
mod transport;

use std::io::{self, Write};

use board_core::pages::{Banner, BannerKind, PostPage, UserPage};
use board_core::ApiClient;

use render::post_table;
use transport::UreqTransport;

fn main() -> io::Result<()> {
    let base_url = std::env::var("BOARD_API_URL")
        .unwrap_or_else(|_| "http://127.0.0.1:3000/api".to_string());
    let client = ApiClient::new(&base_url, UreqTransport::new());
    println!("board admin ({base_url})");

    loop {
        println!();
        println!("1. 사용자 관리 — 사용자 생성, 수정, 삭제 기능을 제공합니다.");
        println!("2. 게시물 관리 — 게시물 생성, 조회, 수정, 삭제 및 댓글 기능을 제공합니다.");
        println!("q. 종료");
        match prompt("> ")?.as_str() {
            "1" => user_menu(&client)?,
            "2" => post_menu(&client)?,
            "q" | "" => return Ok(()),
            other => println!("알 수 없는 선택: {other}"),
        }
    }
}

fn user_menu(client: &ApiClient) -> io::Result<()> {
    let mut page = UserPage::new(client);
    loop {
        println!();
        println!("[사용자 관리] c. 생성  u. 수정  d. 삭제  b. 뒤로");
        match prompt("> ")?.as_str() {
            "c" => {
                page.form = read_user_form()?;
                page.submit_create();
            }
            "u" => {
                page.update_user_id = prompt_id("사용자 ID")?;
                page.form = read_user_form()?;
                page.submit_update();
            }
            "d" => {
                page.delete_user_id = prompt_id("사용자 ID")?;
                page.submit_delete();
            }
            "b" | "" => return Ok(()),
            other => println!("알 수 없는 선택: {other}"),
        }
        print_banner(&page.banner);
    }
}

fn post_menu(client: &ApiClient) -> io::Result<()> {
    let mut page = PostPage::new(client);
    page.refresh();
    print!("{}", post_table(&page.posts));
    print_banner(&page.banner);

    loop {
        println!();
        println!("[게시물 관리] l. 목록  c. 생성  u. 수정  d. 삭제  m. 댓글  b. 뒤로");
        match prompt("> ")?.as_str() {
            "l" => {
                page.refresh();
                print!("{}", post_table(&page.posts));
            }
            "c" => {
                page.create_form.user_id = prompt_id("사용자 ID")?.unwrap_or(0);
                page.create_form.title = prompt("제목: ")?;
                page.create_form.category = prompt("카테고리: ")?;
                page.create_form.content = prompt("내용: ")?;
                page.submit_create();
            }
            "u" => {
                page.update_post_id = prompt_id("게시물 ID")?;
                page.update_user_id = prompt_id("사용자 ID")?;
                page.update_form.title = prompt("제목: ")?;
                page.update_form.category = prompt("카테고리: ")?;
                page.update_form.content = prompt("내용: ")?;
                page.submit_update();
            }
            "d" => {
                page.delete_post_id = prompt_id("게시물 ID")?;
                page.delete_user_id = prompt_id("사용자 ID")?;
                page.submit_delete();
            }
            "m" => {
                page.comment_post_id = prompt_id("게시물 ID")?;
                page.comment_user_id = prompt_id("사용자 ID")?;
                page.comment_form.content = prompt("내용: ")?;
                page.submit_comment();
            }
            "b" | "" => return Ok(()),
            other => println!("알 수 없는 선택: {other}"),
        }
        print_banner(&page.banner);
    }
}

fn read_user_form() -> io::Result<board_core::types::CreateUserRequest> {
    Ok(board_core::types::CreateUserRequest {
        name: prompt("이름: ")?,
        password: prompt("비밀번호: ")?,
        address: prompt("주소: ")?,
        email: prompt("이메일: ")?,
        age: prompt("나이: ")?.parse().unwrap_or(0),
    })
}

fn prompt(label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf.trim().to_string())
}

fn prompt_id(label: &str) -> io::Result<Option<u64>> {
    Ok(prompt(&format!("{label}: "))?.parse().ok())
}

fn print_banner(banner: &Option<Banner>) {
    if let Some(banner) = banner {
        match banner.kind {
            BannerKind::Success => println!("[성공] {}", banner.text),
            BannerKind::Error => println!("[오류] {}", banner.text),
        }
    }
}
