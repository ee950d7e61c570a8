use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::AppError,
    models::{ApiResponse, UserProfile},
    AppState,
};

/// `GET /api/users/{id}`. The id is echoed into the mocked profile.
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<UserProfile>>, AppError> {
    let profile = state.profiles.fetch(&id).await?;
    Ok(Json(ApiResponse::new(profile)))
}
