//! Books repository for database operations.
//!
//! Optimistic concurrency: `update` guards on the submitted version and
//! reports zero affected rows as [`AppError::Conflict`], covering both a
//! stale version and a concurrently deleted row.

use sqlx::{Pool, Postgres, Row};

use crate::{
    error::{AppError, AppResult},
    models::{
        book::{Book, BookContent, BookFile},
        pager::{PageWindow, Sorter},
    },
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Insert a new book together with its file, returning the new id.
    pub async fn create(&self, title: &str, file: &BookFile) -> AppResult<i32> {
        let mut tx = self.pool.begin().await?;

        let id: i32 = sqlx::query(
            "INSERT INTO books (title) VALUES ($1) RETURNING id",
        )
        .bind(title)
        .fetch_one(&mut *tx)
        .await?
        .get("id");

        sqlx::query(
            "INSERT INTO book_files (book_id, file_type, content_type, content) \
             VALUES ($1, $2, $3, $4)",
        )
        .bind(id)
        .bind(&file.file_type)
        .bind(&file.content_type)
        .bind(&file.content)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(id)
    }

    /// Read one page of books ordered per the sorter.
    ///
    /// A zero-row window returns an empty list without touching the database.
    pub async fn read(&self, window: PageWindow, sorter: Sorter) -> AppResult<Vec<Book>> {
        if window.size <= 0 {
            return Ok(Vec::new());
        }

        let query = format!(
            "SELECT id, version, title, created_at, updated_at \
             FROM books ORDER BY {} OFFSET $1 LIMIT $2",
            order_clause(&sorter),
        );

        let books = sqlx::query_as::<_, Book>(&query)
            .bind(window.offset)
            .bind(window.size)
            .fetch_all(&self.pool)
            .await?;

        Ok(books)
    }

    pub async fn total_count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query("SELECT COUNT(*) AS count FROM books")
            .fetch_one(&self.pool)
            .await?
            .get("count");

        Ok(count)
    }

    /// Update a book's title, guarded by the submitted version. The file row
    /// is left untouched.
    pub async fn update(&self, id: i32, version: i32, title: &str) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE books SET title = $1, version = version + 1, updated_at = now() \
             WHERE id = $2 AND version = $3",
        )
        .bind(title)
        .bind(id)
        .bind(version)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::Conflict(format!(
                "Book id {} not updatable at version {}",
                id, version
            )));
        }

        Ok(())
    }

    /// Delete a book and its file (cascade).
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book with id {} not found", id)));
        }

        Ok(())
    }

    /// Fetch the title and file content for a download.
    pub async fn find_content(&self, id: i32) -> AppResult<Option<BookContent>> {
        let content = sqlx::query_as::<_, BookContent>(
            "SELECT b.title, f.content_type, f.content \
             FROM books b JOIN book_files f ON f.book_id = b.id \
             WHERE b.id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(content)
    }
}

fn order_clause(sorter: &Sorter) -> String {
    let column = sorter.column.column_name();
    let expr = if sorter.column.ignore_case() {
        format!("LOWER({})", column)
    } else {
        column.to_string()
    };
    format!("{} {}", expr, sorter.direction.sql())
}
