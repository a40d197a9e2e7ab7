use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum ImagesApiError {
    GenerationFailed,
    /// Carries the stored filenames when the listing is exposed.
    ImageNotFound(Option<Vec<String>>),
    ServeFailed(String),
}

impl ImagesApiError {
    pub fn value(&self) -> ApiError {
        match self {
            Self::GenerationFailed => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Image generation failed.".to_string(),
            },
            Self::ImageNotFound(Some(files)) => ApiError {
                code: StatusCode::NOT_FOUND,
                message: format!("Image not found. Available files: {:?}", files),
            },
            Self::ImageNotFound(None) => ApiError {
                code: StatusCode::NOT_FOUND,
                message: "Image not found.".to_string(),
            },
            Self::ServeFailed(e) => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: format!("Error serving file: {}", e),
            },
        }
    }
}
