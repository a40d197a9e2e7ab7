use serde::{Deserialize, Serialize};

use super::stored_image::StoredImage;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateImageResponse {
    pub file_path: String,
}

impl GenerateImageResponse {
    pub fn from_stored_image(image: &StoredImage) -> Self {
        Self {
            file_path: ["/image/", &image.filename()].concat(),
        }
    }
}
