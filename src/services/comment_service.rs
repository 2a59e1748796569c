use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::{
    dto::comments::{CommentList, NewComment},
    entity::comments::{ActiveModel as CommentActive, Column as CommentCol, Entity as Comments},
    error::AppResult,
    models::Comment,
    response::{ApiResponse, Meta},
    state::AppState,
    validation::validate,
};

/// Approved comments only; moderation flips `visible` out of band.
pub async fn list_visible_comments(state: &AppState) -> AppResult<ApiResponse<CommentList>> {
    let items: Vec<Comment> = Comments::find()
        .filter(CommentCol::Visible.eq(true))
        .order_by_asc(CommentCol::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    let meta = Meta::with_total(items.len() as i64);
    Ok(ApiResponse::success("Comments", CommentList { items }, Some(meta)))
}

pub async fn create_comment(
    state: &AppState,
    payload: NewComment,
) -> AppResult<ApiResponse<Comment>> {
    validate(&payload)?;
    let comment = CommentActive {
        id: NotSet,
        user_email: Set(payload.user_email),
        image: Set(payload.image),
        text: Set(payload.text),
        visible: Set(payload.visible),
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(comment_id = comment.id, visible = comment.visible, "comment created");
    Ok(ApiResponse::success(
        "Comment created",
        comment.into(),
        Some(Meta::empty()),
    ))
}
