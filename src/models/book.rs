//! Book model and request/response types.
//!
//! A book row always has exactly one associated file row; metadata updates
//! never touch the file. The `version` column is the optimistic-concurrency
//! token, incremented by the store on each successful update.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use super::{messages::Messages, pager::Pager};

/// Catalog entry as listed and edited by the client. The file content is
/// fetched separately for download.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i32,
    pub version: i32,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Content blob attached to a book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookFile {
    pub file_type: String,
    pub content_type: String,
    pub content: Vec<u8>,
}

impl BookFile {
    /// Placeholder file attached to newly created books. Uploading real
    /// content is out of scope; every book still carries exactly one file.
    pub fn placeholder() -> Self {
        Self {
            file_type: "txt".to_string(),
            content_type: "text/plain; charset=utf-8".to_string(),
            content: b"a Book Content".to_vec(),
        }
    }
}

/// Title plus file content as needed for a download response.
#[derive(Debug, Clone, FromRow)]
pub struct BookContent {
    pub title: String,
    pub content_type: String,
    pub content: Vec<u8>,
}

fn title_not_blank(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        Err(ValidationError::new("title.blank"))
    } else {
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[validate(custom(
        function = "title_not_blank",
        message = "Book title must not be empty."
    ))]
    pub title: String,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateBook {
    /// Version the client read before editing; a mismatch means the row was
    /// changed or removed concurrently.
    pub version: i32,
    #[validate(custom(
        function = "title_not_blank",
        message = "Book title must not be empty."
    ))]
    pub title: String,
}

/// Set of book ids marked for deletion in a single request. Duplicates are
/// irrelevant; each id is handled independently.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct DeleteBooks {
    pub ids: Vec<i32>,
}

/// One page of the catalog plus the refreshed pager state.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BooksPage {
    pub books: Vec<Book>,
    pub pager: Pager,
    pub messages: Messages,
}

/// Outcome of a create request. `id` is present only when a book was stored.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CreatedBook {
    pub id: Option<i32>,
    pub messages: Messages,
}

/// Outcome of an update or delete request.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BookActionOutcome {
    pub messages: Messages,
}
