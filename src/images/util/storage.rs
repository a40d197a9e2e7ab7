use std::{
    error::Error,
    io::{self, ErrorKind},
    path::{Path, PathBuf},
};

use bytes::Bytes;
use futures::{pin_mut, Stream, StreamExt};
use tokio::{
    fs::{self, File},
    io::{AsyncWriteExt, BufWriter},
};
use uuid::Uuid;

use crate::images::models::stored_image::{StoredImage, IMAGE_EXTENSION};

pub static CHUNK_SIZE: usize = 8192;

/// The directory generated images are written to and served from.
#[derive(Debug, Clone)]
pub struct ImageStore {
    dir: PathBuf,
}

impl ImageStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub async fn ensure_dir(&self) -> io::Result<()> {
        fs::create_dir_all(&self.dir).await
    }

    /// Appends the image extension when the name lacks it.
    pub fn normalize(name: &str) -> String {
        let suffix = [".", IMAGE_EXTENSION].concat();

        if name.ends_with(&suffix) {
            name.to_string()
        } else {
            [name, &suffix].concat()
        }
    }

    /// Resolves a requested name inside the store. Names that could escape the
    /// directory or point at hidden partial files resolve to nothing.
    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        let name = Self::normalize(name);

        if name.starts_with('.') || name.contains('/') || name.contains('\\') {
            return None;
        }

        Some(self.dir.join(name))
    }

    /// Finished images currently in the store, sorted by name.
    pub async fn list(&self) -> io::Result<Vec<String>> {
        let suffix = [".", IMAGE_EXTENSION].concat();
        let mut entries = fs::read_dir(&self.dir).await?;
        let mut names = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };

            if !name.starts_with('.') && name.ends_with(&suffix) {
                names.push(name);
            }
        }

        names.sort();
        Ok(names)
    }

    /// Drains `stream` into a new uniquely named image. The body lands in a
    /// hidden partial file first and is renamed into place once fully synced,
    /// so a returned image is always complete.
    pub async fn persist<S, E>(&self, stream: S) -> io::Result<StoredImage>
    where
        S: Stream<Item = Result<Bytes, E>>,
        E: Into<Box<dyn Error + Send + Sync>>,
    {
        let image = StoredImage::new(Uuid::new_v4(), &self.dir);
        let partial = self.dir.join(format!(".{}.part", image.filename()));

        if let Err(e) = write_stream(&partial, stream).await {
            let _ = fs::remove_file(&partial).await;
            return Err(e);
        }

        if let Err(e) = fs::rename(&partial, &image.path).await {
            let _ = fs::remove_file(&partial).await;
            return Err(e);
        }

        Ok(image)
    }
}

async fn write_stream<S, E>(path: &Path, stream: S) -> io::Result<()>
where
    S: Stream<Item = Result<Bytes, E>>,
    E: Into<Box<dyn Error + Send + Sync>>,
{
    pin_mut!(stream);

    let file = File::create(path).await?;
    let mut writer = BufWriter::with_capacity(CHUNK_SIZE, file);

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| io::Error::new(ErrorKind::Other, e))?;
        writer.write_all(&chunk).await?;
    }

    writer.flush().await?;
    writer.get_ref().sync_all().await
}
