//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health, pager};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookstore API",
        version = "0.1.0",
        description = "Book Catalog REST API",
        license(name = "GPL-3.0", url = "https://www.gnu.org/licenses/gpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Books
        books::list_books,
        books::create_book,
        books::update_book,
        books::delete_books,
        books::download_book,
        // Pager
        pager::sort,
        pager::go_to_page,
        pager::set_page_size,
    ),
    components(
        schemas(
            // Books
            crate::models::book::Book,
            crate::models::book::CreateBook,
            crate::models::book::UpdateBook,
            crate::models::book::DeleteBooks,
            crate::models::book::BooksPage,
            crate::models::book::CreatedBook,
            crate::models::book::BookActionOutcome,
            // Pager
            crate::models::pager::Pager,
            crate::models::pager::Sorter,
            crate::models::pager::SortColumn,
            crate::models::pager::SortDirection,
            crate::models::messages::Messages,
            pager::SortRequest,
            pager::GoToPageRequest,
            pager::SetPageSizeRequest,
            pager::PagerOutcome,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Book catalog management"),
        (name = "pager", description = "Catalog pagination and sorting actions")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
