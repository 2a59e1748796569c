use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};

use crate::{
    dto::comments::{CommentList, NewComment},
    error::AppResult,
    models::Comment,
    response::ApiResponse,
    services::comment_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/comments/", get(list_comments))
        .route("/comment/create/", post(create_comment))
}

#[utoipa::path(
    get,
    path = "/api/comments/",
    responses(
        (status = 200, description = "List approved comments", body = ApiResponse<CommentList>)
    ),
    tag = "Comments"
)]
pub async fn list_comments(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<CommentList>>> {
    let resp = comment_service::list_visible_comments(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/comment/create/",
    request_body = NewComment,
    responses(
        (status = 201, description = "Comment created", body = ApiResponse<Comment>),
        (status = 400, description = "Invalid comment"),
    ),
    tag = "Comments"
)]
pub async fn create_comment(
    State(state): State<AppState>,
    Json(payload): Json<NewComment>,
) -> AppResult<(StatusCode, Json<ApiResponse<Comment>>)> {
    let resp = comment_service::create_comment(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}
