use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    app::models::{api_error::ApiError, json_from_request::JsonFromRequest},
    AppState,
};

use super::{
    dtos::generate_image_dto::GenerateImageDto,
    models::{generate_image_response::GenerateImageResponse, image_file::ImageFile},
    service,
};

pub async fn generate_image(
    State(state): State<AppState>,
    JsonFromRequest(dto): JsonFromRequest<GenerateImageDto>,
) -> Result<Json<GenerateImageResponse>, ApiError> {
    match service::generate_image(&dto, &state).await {
        Ok(res) => Ok(Json(res)),
        Err(e) => Err(e),
    }
}

pub async fn get_image_by_filename(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<ImageFile, ApiError> {
    service::get_image_by_filename(&filename, &state).await
}
