//! Book catalogue endpoints.
//!
//! ```text
//! GET    /api/books
//! GET    /api/books/{id}
//! POST   /api/books {"id":6,"title":"The Hobbit","author":"J. R. R. Tolkien"}
//! PUT    /api/books/{id}
//! DELETE /api/books/{id}
//! ```
//!
//! Payloads arrive as raw JSON so the exact key set can be checked before
//! typed deserialisation.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde_json::Value;
use tracing::info;

use crate::domain::ports::RepositoryError;
use crate::domain::{BOOK_FIELDS, Book, CreatedBook, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::schemas::{BookSchema, CreatedBookSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{parse_book_id, parse_exact};

/// Message for update and delete of an absent book.
pub const BOOK_NOT_FOUND_MESSAGE: &str = "Book not found";

/// List every book in the catalogue.
#[utoipa::path(
    get,
    path = "/api/books",
    responses(
        (status = 200, description = "All books", body = [BookSchema]),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["books"],
    operation_id = "listBooks"
)]
#[get("/books")]
pub async fn list_books(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Book>>> {
    let books = state.books.list().await?;
    Ok(web::Json(books))
}

/// Fetch one book by id.
#[utoipa::path(
    get,
    path = "/api/books/{id}",
    params(("id" = String, Path, description = "Book identifier; the leading integer is used")),
    responses(
        (status = 200, description = "The book", body = BookSchema),
        (status = 400, description = "Id is not a number", body = ErrorEnvelope),
        (status = 404, description = "No book with this id", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["books"],
    operation_id = "getBook"
)]
#[get("/books/{id}")]
pub async fn get_book(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Book>> {
    let id = parse_book_id(&path.into_inner())?;
    let book = state.books.find_by_id(id).await?;
    Ok(web::Json(book))
}

/// Add a book with a caller-supplied id.
#[utoipa::path(
    post,
    path = "/api/books",
    request_body = BookSchema,
    responses(
        (status = 201, description = "Book created", body = CreatedBookSchema),
        (status = 400, description = "Payload is not exactly {id,title,author}", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["books"],
    operation_id = "createBook"
)]
#[post("/books")]
pub async fn create_book(
    state: web::Data<HttpState>,
    payload: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    let book: Book = parse_exact(payload.into_inner(), &BOOK_FIELDS)?;
    let created = state.books.insert(book).await?;
    info!(id = created.id, "book created");
    Ok(HttpResponse::Created().json(CreatedBook { id: created.id }))
}

/// Replace the book stored under the path id.
///
/// The stored record becomes the payload verbatim, including its `id`.
#[utoipa::path(
    put,
    path = "/api/books/{id}",
    params(("id" = String, Path, description = "Book identifier; the leading integer is used")),
    request_body = BookSchema,
    responses(
        (status = 204, description = "Book replaced"),
        (status = 400, description = "Id is not a number or payload is invalid", body = ErrorEnvelope),
        (status = 404, description = "Book not found", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["books"],
    operation_id = "updateBook"
)]
#[put("/books/{id}")]
pub async fn update_book(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    let id = parse_book_id(&path.into_inner())?;
    let book: Book = parse_exact(payload.into_inner(), &BOOK_FIELDS)?;
    state
        .books
        .update(id, book)
        .await
        .map_err(|err| absent_as(err, Error::not_found))?;
    info!(id, "book updated");
    Ok(HttpResponse::NoContent().finish())
}

/// Remove the book stored under the path id.
///
/// An id that does not parse can never match, so it reports the same 410.
#[utoipa::path(
    delete,
    path = "/api/books/{id}",
    params(("id" = String, Path, description = "Book identifier; the leading integer is used")),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 410, description = "Book not found", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["books"],
    operation_id = "deleteBook"
)]
#[delete("/books/{id}")]
pub async fn delete_book(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let Ok(id) = parse_book_id(&path.into_inner()) else {
        return Err(Error::gone(BOOK_NOT_FOUND_MESSAGE));
    };
    state
        .books
        .delete(id)
        .await
        .map_err(|err| absent_as(err, Error::gone))?;
    info!(id, "book deleted");
    Ok(HttpResponse::NoContent().finish())
}

fn absent_as(err: RepositoryError, make: fn(&'static str) -> Error) -> Error {
    if err.is_no_match() {
        make(BOOK_NOT_FOUND_MESSAGE)
    } else {
        Error::from(err)
    }
}

#[cfg(test)]
mod tests;
