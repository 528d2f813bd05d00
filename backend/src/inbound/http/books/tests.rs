//! Handler tests for the book endpoints against a mocked repository.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::AccountService;
use crate::domain::ports::{MockBookRepository, MockCredentialVerifier, MockUserRepository};
use crate::inbound::http::error::json_config;
use crate::inbound::http::validation::INVALID_ID_MESSAGE;

fn idle_accounts() -> AccountService {
    AccountService::new(
        Arc::new(MockUserRepository::new()),
        Arc::new(MockCredentialVerifier::new()),
    )
}

async fn call(
    repo: MockBookRepository,
    request: actix_test::TestRequest,
) -> (StatusCode, Value) {
    let state = HttpState::new(Arc::new(repo), idle_accounts());
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .app_data(json_config())
            .service(
                web::scope("/api")
                    .service(list_books)
                    .service(get_book)
                    .service(create_book)
                    .service(update_book)
                    .service(delete_book),
            ),
    )
    .await;
    let response = actix_test::call_service(&app, request.to_request()).await;
    let status = response.status();
    let body = actix_test::read_body(response).await;
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).expect("json body")
    };
    (status, value)
}

#[rstest]
#[actix_web::test]
async fn get_book_parses_the_leading_integer() {
    let mut repo = MockBookRepository::new();
    repo.expect_find_by_id()
        .withf(|id| *id == 3)
        .returning(|id| Ok(Book::new(id, "The Two Towers", "J.R.R. Tolkien")));

    let (status, body) = call(repo, actix_test::TestRequest::get().uri("/api/books/3abc")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 3, "title": "The Two Towers", "author": "J.R.R. Tolkien"}));
}

#[rstest]
#[actix_web::test]
async fn get_book_rejects_ids_before_touching_the_store() {
    let mut repo = MockBookRepository::new();
    repo.expect_find_by_id().never();

    let (status, body) = call(repo, actix_test::TestRequest::get().uri("/api/books/foo")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], INVALID_ID_MESSAGE);
}

#[rstest]
#[actix_web::test]
async fn get_book_propagates_the_store_miss() {
    let mut repo = MockBookRepository::new();
    repo.expect_find_by_id()
        .returning(|_| Err(RepositoryError::NoMatch));

    let (status, body) = call(repo, actix_test::TestRequest::get().uri("/api/books/99")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "No matching item found");
}

#[rstest]
#[actix_web::test]
async fn store_outage_is_redacted_outside_development() {
    let mut repo = MockBookRepository::new();
    repo.expect_list()
        .returning(|| Err(RepositoryError::unavailable("lock poisoned")));

    let (status, body) = call(repo, actix_test::TestRequest::get().uri("/api/books")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({"type": "error", "status": 500, "message": "Internal server error"})
    );
}

#[rstest]
#[case(json!({"title": "Test Book"}))]
#[case(json!({"id": 1, "title": "t", "author": "a", "extraKey": "x"}))]
#[case(json!({"id": "6", "title": "t", "author": "a"}))]
#[case(json!([6, "t", "a"]))]
#[actix_web::test]
async fn create_rejects_invalid_payloads_without_inserting(#[case] payload: Value) {
    let mut repo = MockBookRepository::new();
    repo.expect_insert().never();

    let (status, body) = call(
        repo,
        actix_test::TestRequest::post().uri("/api/books").set_json(payload),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Bad Request");
}

#[rstest]
#[actix_web::test]
async fn create_returns_the_caller_id() {
    let mut repo = MockBookRepository::new();
    repo.expect_insert().times(1).returning(Ok);

    let (status, body) = call(
        repo,
        actix_test::TestRequest::post()
            .uri("/api/books")
            .set_json(json!({"id": 99, "title": "Test Book", "author": "Test Author"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"id": 99}));
}

#[rstest]
#[actix_web::test]
async fn update_checks_the_id_before_the_body() {
    let mut repo = MockBookRepository::new();
    repo.expect_update().never();

    let (status, body) = call(
        repo,
        actix_test::TestRequest::put()
            .uri("/api/books/foo")
            .set_json(json!({"title": "only"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], INVALID_ID_MESSAGE);
}

#[rstest]
#[actix_web::test]
async fn update_of_absent_book_is_not_found() {
    let mut repo = MockBookRepository::new();
    repo.expect_update()
        .returning(|_, _| Err(RepositoryError::NoMatch));

    let (status, body) = call(
        repo,
        actix_test::TestRequest::put()
            .uri("/api/books/42")
            .set_json(json!({"id": 42, "title": "t", "author": "a"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], BOOK_NOT_FOUND_MESSAGE);
}

#[rstest]
#[case("/api/books/42")]
#[case("/api/books/foo")]
#[actix_web::test]
async fn delete_of_absent_book_is_gone(#[case] uri: &str) {
    let mut repo = MockBookRepository::new();
    repo.expect_delete()
        .returning(|_| Err(RepositoryError::NoMatch));

    let (status, body) = call(repo, actix_test::TestRequest::delete().uri(uri)).await;
    assert_eq!(status, StatusCode::GONE);
    assert_eq!(body["status"], 410);
    assert_eq!(body["message"], BOOK_NOT_FOUND_MESSAGE);
}

#[rstest]
#[actix_web::test]
async fn delete_returns_no_content() {
    let mut repo = MockBookRepository::new();
    repo.expect_delete()
        .withf(|id| *id == 2)
        .times(1)
        .returning(|_| Ok(()));

    let (status, body) = call(repo, actix_test::TestRequest::delete().uri("/api/books/2")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);
}
