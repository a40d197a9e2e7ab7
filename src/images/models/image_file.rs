use std::io;

use axum::{
    body::StreamBody,
    http::header,
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use futures::stream::BoxStream;

pub struct ImageFile {
    pub filename: String,
    pub data: BoxStream<'static, io::Result<Bytes>>,
}

impl IntoResponse for ImageFile {
    fn into_response(self) -> Response {
        let disposition = format!("attachment; filename=\"{}\"", self.filename);

        (
            [
                (header::CONTENT_TYPE, mime::IMAGE_JPEG.to_string()),
                (header::CONTENT_DISPOSITION, disposition),
            ],
            StreamBody::new(self.data),
        )
            .into_response()
    }
}
