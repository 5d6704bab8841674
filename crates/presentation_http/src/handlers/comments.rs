//! Comment handlers
//!
//! Direct passthrough to the comments collection: no duplicate guard and
//! no not-found mapping. A single-comment lookup miss answers 200 with a
//! null body, exactly what the store reported.

use application::ports::{DeleteReport, UpdateReport};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use domain::Comment;
use serde::Deserialize;
use tracing::debug;

use crate::{error::ApiError, state::AppState};

use super::common::parse_object_id;

const MISSING_FIELDS: &str = "Please provide a name, comment and date";

/// Create/replace request body
#[derive(Debug, Deserialize)]
pub struct CommentPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

impl CommentPayload {
    /// Validate presence and truthiness of all three fields
    fn into_comment(self) -> Result<Comment, ApiError> {
        let missing = || ApiError::BadRequest(MISSING_FIELDS.to_string());

        let name = self.name.filter(|v| !v.is_empty()).ok_or_else(missing)?;
        let comment = self.comment.filter(|v| !v.is_empty()).ok_or_else(missing)?;
        let date = self.date.filter(|v| !v.is_empty()).ok_or_else(missing)?;

        Ok(Comment::new(name, comment, date))
    }
}

/// `GET /comments`
pub async fn list_comments(State(state): State<AppState>) -> Result<Json<Vec<Comment>>, ApiError> {
    let comments = state.comments.list().await?;
    Ok(Json(comments))
}

/// `GET /comments/{id}`
pub async fn get_comment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Option<Comment>>, ApiError> {
    let oid = parse_object_id(&id)?;
    let comment = state.comments.get(oid).await?;
    Ok(Json(comment))
}

/// `POST /comments`
pub async fn create_comment(
    State(state): State<AppState>,
    Json(payload): Json<CommentPayload>,
) -> Result<(StatusCode, Json<Comment>), ApiError> {
    let mut comment = payload.into_comment()?;

    let report = state.comments.insert(&comment).await?;
    comment.id = Some(report.inserted_id);

    debug!(id = %report.inserted_id, "Created comment");
    Ok((StatusCode::CREATED, Json(comment)))
}

/// `PUT /comments/{id}`
pub async fn replace_comment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<CommentPayload>,
) -> Result<Json<UpdateReport>, ApiError> {
    let comment = payload.into_comment()?;
    let oid = parse_object_id(&id)?;

    let report = state.comments.replace(oid, &comment).await?;
    Ok(Json(report))
}

/// `DELETE /comments/{id}`
pub async fn delete_comment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteReport>, ApiError> {
    let oid = parse_object_id(&id)?;
    let report = state.comments.delete(oid).await?;
    Ok(Json(report))
}
