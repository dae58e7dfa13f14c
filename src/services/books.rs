//! Book catalog service.
//!
//! Orchestrates validation, repository calls, and message accumulation.
//! Recoverable outcomes (validation failures, update conflicts, deletes of
//! already-removed books) complete normally with messages; only unclassified
//! failures propagate as errors.

use validator::{Validate, ValidationErrors};

use crate::{
    error::{AppError, AppResult},
    models::{
        book::{
            Book, BookActionOutcome, BookContent, BookFile, BooksPage, CreateBook, CreatedBook,
            UpdateBook,
        },
        messages::Messages,
        pager::Pager,
    },
    repository::Repository,
};

pub const OBJECT_CREATED: &str = "Object created.";
pub const OBJECT_UPDATED: &str = "Object updated.";
pub const OBJECT_DELETED: &str = "Object deleted.";
pub const OBJECT_ALREADY_DELETED: &str = "Object already deleted.";
pub const UPDATE_CONFLICT: &str =
    "Object updated or deleted by another user. Please try again with actual data.";

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Create a book with a placeholder file. Validation failures produce
    /// error messages and no store mutation.
    pub async fn create(&self, request: CreateBook) -> AppResult<CreatedBook> {
        let mut messages = Messages::new();

        if let Err(errors) = request.validate() {
            collect_validation_errors(&mut messages, &errors);
            return Ok(CreatedBook { id: None, messages });
        }

        let id = self
            .repository
            .books
            .create(&request.title, &BookFile::placeholder())
            .await?;

        tracing::info!("Created book id={}", id);
        messages.add_info(OBJECT_CREATED);
        Ok(CreatedBook {
            id: Some(id),
            messages,
        })
    }

    /// Read one page of books and refresh the pager's pages count.
    pub async fn list(&self, pager: Pager) -> AppResult<BooksPage> {
        let total = self.repository.books.total_count().await?;
        let pager = pager.with_pages_count(total);

        let books: Vec<Book> = self
            .repository
            .books
            .read(pager.window(), pager.sorter)
            .await?;

        Ok(BooksPage {
            books,
            pager,
            messages: Messages::new(),
        })
    }

    /// Update a book's title under optimistic concurrency. A version conflict
    /// (or a concurrent delete) becomes a warning, not a failure. The file
    /// attached to the book is never replaced.
    pub async fn update(&self, id: i32, request: UpdateBook) -> AppResult<BookActionOutcome> {
        let mut messages = Messages::new();

        if let Err(errors) = request.validate() {
            collect_validation_errors(&mut messages, &errors);
            return Ok(BookActionOutcome { messages });
        }

        match self
            .repository
            .books
            .update(id, request.version, &request.title)
            .await
        {
            Ok(()) => messages.add_info(OBJECT_UPDATED),
            Err(AppError::Conflict(reason)) => {
                tracing::warn!("Update conflict on book id={}: {}", id, reason);
                messages.add_warn(UPDATE_CONFLICT);
            }
            Err(e) => return Err(e),
        }

        Ok(BookActionOutcome { messages })
    }

    /// Delete a set of books, one message per id. Partial success is normal:
    /// ids already gone warn and the loop continues.
    pub async fn delete(&self, ids: &[i32]) -> AppResult<BookActionOutcome> {
        let mut messages = Messages::new();

        for &id in ids {
            match self.repository.books.delete(id).await {
                Ok(()) => messages.add_info(OBJECT_DELETED),
                Err(AppError::NotFound(_)) => {
                    tracing::warn!("Delete of missing book id={}", id);
                    messages.add_warn(OBJECT_ALREADY_DELETED);
                }
                Err(e) => return Err(e),
            }
        }

        Ok(BookActionOutcome { messages })
    }

    /// Fetch a book's file for download. The id arrives as a raw string; a
    /// non-numeric or unknown id yields the same not-found error with the
    /// literal id echoed in the message.
    pub async fn download(&self, raw_id: &str) -> AppResult<BookContent> {
        let not_found =
            || AppError::NotFound(format!("Content of book with id '{}' not found.", raw_id));

        let id: i32 = raw_id.parse().map_err(|_| not_found())?;

        self.repository
            .books
            .find_content(id)
            .await?
            .ok_or_else(not_found)
    }
}

/// Flatten validator output into one error message per failed check.
fn collect_validation_errors(messages: &mut Messages, errors: &ValidationErrors) {
    for field in errors.field_errors().values() {
        for error in field.iter() {
            let text = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| "Invalid value.".to_string());
            messages.add_error(text);
        }
    }
}
