use std::path::{Path, PathBuf};

use uuid::Uuid;

pub static IMAGE_EXTENSION: &str = "jpg";

/// An image persisted in the generated directory, named `<id>.jpg`.
#[derive(Debug, Clone)]
pub struct StoredImage {
    pub id: Uuid,
    pub path: PathBuf,
}

impl StoredImage {
    pub fn new(id: Uuid, dir: &Path) -> Self {
        Self {
            id,
            path: dir.join(filename_for(&id)),
        }
    }

    pub fn filename(&self) -> String {
        filename_for(&self.id)
    }
}

fn filename_for(id: &Uuid) -> String {
    format!("{}.{}", id, IMAGE_EXTENSION)
}
