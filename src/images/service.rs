use std::io::ErrorKind;

use futures::{stream, StreamExt};
use tokio::fs::File;
use tokio_util::io::ReaderStream;

use crate::{app::models::api_error::ApiError, AppState};

use super::{
    apis::pollinations,
    dtos::generate_image_dto::GenerateImageDto,
    errors::ImagesApiError,
    models::{generate_image_response::GenerateImageResponse, image_file::ImageFile},
    util::storage::{ImageStore, CHUNK_SIZE},
};

pub async fn generate_image(
    dto: &GenerateImageDto,
    state: &AppState,
) -> Result<GenerateImageResponse, ApiError> {
    match pollinations::service::fetch_image(dto, state).await {
        Ok(image) => Ok(GenerateImageResponse::from_stored_image(&image)),
        Err(e) => {
            tracing::error!("generate_image failed fetch_image: {}", e);
            Err(ImagesApiError::GenerationFailed.value())
        }
    }
}

pub async fn get_image_by_filename(filename: &str, state: &AppState) -> Result<ImageFile, ApiError> {
    let filename = ImageStore::normalize(filename);
    tracing::debug!("request for file: {}", filename);

    let Some(path) = state.store.resolve(&filename) else {
        return Err(image_not_found(state).await);
    };

    let absolute = std::path::absolute(&path).unwrap_or_else(|_| path.clone());
    tracing::debug!("looking for file at: {}", absolute.display());

    let file = match File::open(&path).await {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Err(image_not_found(state).await),
        Err(e) => {
            tracing::error!("get_image_by_filename failed open: {}", e);
            return Err(ImagesApiError::ServeFailed(e.to_string()).value());
        }
    };

    // read the first chunk up front so read errors still map to a status code
    let mut chunks = ReaderStream::with_capacity(file, CHUNK_SIZE);
    let first = match chunks.next().await {
        Some(Err(e)) => {
            tracing::error!("get_image_by_filename failed read: {}", e);
            return Err(ImagesApiError::ServeFailed(e.to_string()).value());
        }
        first => first,
    };

    Ok(ImageFile {
        filename,
        data: stream::iter(first).chain(chunks).boxed(),
    })
}

async fn image_not_found(state: &AppState) -> ApiError {
    if !state.envy.expose_file_listing() {
        return ImagesApiError::ImageNotFound(None).value();
    }

    match state.store.list().await {
        Ok(files) => ImagesApiError::ImageNotFound(Some(files)).value(),
        Err(e) => {
            tracing::error!("image_not_found failed list: {}", e);
            ImagesApiError::ImageNotFound(None).value()
        }
    }
}
