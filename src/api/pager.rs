//! Pager action endpoints
//!
//! Each action takes the incoming pager state in the request body and returns
//! the outgoing pager plus flash messages, mirroring the redirect-and-flash
//! flow of a form-driven catalog view.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{
    messages::Messages,
    pager::{Pager, SortColumn, SortDirection},
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct SortRequest {
    #[serde(default)]
    pub pager: Pager,
    pub column: SortColumn,
    pub direction: SortDirection,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct GoToPageRequest {
    #[serde(default)]
    pub pager: Pager,
    pub page_number: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SetPageSizeRequest {
    #[serde(default)]
    pub pager: Pager,
    pub page_size: i32,
}

/// Outgoing pager state plus messages for the next rendered view.
#[derive(Debug, Serialize, ToSchema)]
pub struct PagerOutcome {
    pub pager: Pager,
    pub messages: Messages,
}

/// Change the sort column and direction
#[utoipa::path(
    post,
    path = "/books/pager/sort",
    tag = "pager",
    request_body = SortRequest,
    responses(
        (status = 200, description = "Pager with sorter replaced; never any messages", body = PagerOutcome)
    )
)]
pub async fn sort(
    State(state): State<crate::AppState>,
    Json(request): Json<SortRequest>,
) -> Json<PagerOutcome> {
    let (pager, messages) = state
        .services
        .pager
        .sort(request.pager, request.column, request.direction);
    Json(PagerOutcome { pager, messages })
}

/// Go to a page
#[utoipa::path(
    post,
    path = "/books/pager/page",
    tag = "pager",
    request_body = GoToPageRequest,
    responses(
        (status = 200, description = "Pager with page number replaced; never any messages", body = PagerOutcome)
    )
)]
pub async fn go_to_page(
    State(state): State<crate::AppState>,
    Json(request): Json<GoToPageRequest>,
) -> Json<PagerOutcome> {
    let (pager, messages) = state
        .services
        .pager
        .go_to_page(request.pager, request.page_number);
    Json(PagerOutcome { pager, messages })
}

/// Set the page size
#[utoipa::path(
    post,
    path = "/books/pager/page-size",
    tag = "pager",
    request_body = SetPageSizeRequest,
    responses(
        (status = 200, description = "Pager with page size applied or reset to default, with one message", body = PagerOutcome)
    )
)]
pub async fn set_page_size(
    State(state): State<crate::AppState>,
    Json(request): Json<SetPageSizeRequest>,
) -> Json<PagerOutcome> {
    let (pager, messages) = state
        .services
        .pager
        .set_page_size(request.pager, request.page_size);
    Json(PagerOutcome { pager, messages })
}
