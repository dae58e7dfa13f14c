//! Book catalog endpoints

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    error::AppResult,
    models::{
        book::{BookActionOutcome, BooksPage, CreateBook, CreatedBook, DeleteBooks, UpdateBook},
        pager::{Pager, SortColumn, SortDirection, Sorter},
    },
};

/// Pager state carried in the list query string.
#[derive(Debug, Deserialize, IntoParams)]
pub struct PagerQuery {
    /// Page number (1-based, default: 1)
    pub page_number: Option<i32>,
    /// Page size (default: configured default page size)
    pub page_size: Option<i32>,
    /// Sort column (default: title)
    pub sort_column: Option<SortColumn>,
    /// Sort direction (default: asc)
    pub sort_direction: Option<SortDirection>,
}

impl PagerQuery {
    fn into_pager(self, default_page_size: i32) -> Pager {
        Pager {
            page_number: self.page_number.unwrap_or(1),
            page_size: self.page_size.unwrap_or(default_page_size),
            pages_count: 0,
            sorter: Sorter {
                column: self.sort_column.unwrap_or_default(),
                direction: self.sort_direction.unwrap_or_default(),
            },
        }
    }
}

/// List one page of books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(PagerQuery),
    responses(
        (status = 200, description = "One page of books with refreshed pager state", body = BooksPage)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    Query(query): Query<PagerQuery>,
) -> AppResult<Json<BooksPage>> {
    let pager = query.into_pager(state.config.view.default_page_size);
    let page = state.services.books.list(pager).await?;
    Ok(Json(page))
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 200, description = "Create outcome with messages; id is set on success", body = CreatedBook)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateBook>,
) -> AppResult<Json<CreatedBook>> {
    let created = state.services.books.create(request).await?;
    Ok(Json(created))
}

/// Update a book's title under optimistic concurrency
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Update outcome: info on success, warning on version conflict", body = BookActionOutcome)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateBook>,
) -> AppResult<Json<BookActionOutcome>> {
    let outcome = state.services.books.update(id, request).await?;
    Ok(Json(outcome))
}

/// Delete a set of books
#[utoipa::path(
    post,
    path = "/books/delete",
    tag = "books",
    request_body = DeleteBooks,
    responses(
        (status = 200, description = "One message per id: info when deleted, warning when already gone", body = BookActionOutcome)
    )
)]
pub async fn delete_books(
    State(state): State<crate::AppState>,
    Json(request): Json<DeleteBooks>,
) -> AppResult<Json<BookActionOutcome>> {
    let outcome = state.services.books.delete(&request.ids).await?;
    Ok(Json(outcome))
}

/// Download a book's file content
///
/// The id is taken as a raw string; a non-numeric value produces the same
/// not-found response as a missing book.
#[utoipa::path(
    get,
    path = "/books/{id}/download",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book ID (raw string)")
    ),
    responses(
        (status = 200, description = "File bytes with content type and attachment disposition"),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn download_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let content = state.services.books.download(&id).await?;

    let headers = [
        (header::CONTENT_TYPE, content.content_type.clone()),
        (
            header::CONTENT_DISPOSITION,
            attachment_disposition(&content.title),
        ),
    ];

    Ok((headers, content.content).into_response())
}

/// Build a Content-Disposition value with the title as the filename.
/// Quotes, backslashes, and control characters would malform the header
/// value, so they are replaced.
fn attachment_disposition(title: &str) -> String {
    let safe: String = title
        .chars()
        .map(|c| match c {
            '"' | '\\' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    format!("attachment; filename=\"{}\"", safe)
}
