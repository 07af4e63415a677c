use axum::{
    body::Bytes,
    extract::{FromRequest, Multipart, Request},
};
use std::collections::HashMap;

use crate::errors::AppError;

/// A file part of a multipart form.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub field_name: String,
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

/// Multipart form buffered into text fields and file parts.
///
/// Parts with a file name become [`UploadedFile`]s, all others are read as
/// UTF-8 text. When a name repeats, the last part wins. A file input left
/// empty by the browser (no file name, no bytes) is dropped.
///
/// Rejects with `AppError::InvalidMultipart` (400) when the body is not
/// multipart or a part cannot be read.
///
/// ```ignore
/// async fn create(mut form: MultipartForm) -> Result<impl IntoResponse, AppError> {
///     let name = form.text("name").map(str::to_owned);
///     let image = form.take_file("image");
///     // ...
/// }
/// ```
#[derive(Debug, Default, Clone)]
pub struct MultipartForm {
    pub fields: HashMap<String, String>,
    pub files: HashMap<String, UploadedFile>,
}

impl MultipartForm {
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn take_file(&mut self, name: &str) -> Option<UploadedFile> {
        self.files.remove(name)
    }

    /// Reads every part of an already-extracted [`Multipart`] body.
    pub async fn read(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = Self::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::InvalidMultipart(e.body_text()))?
        {
            let Some(name) = field.name().map(str::to_owned) else {
                continue;
            };

            match field.file_name().map(str::to_owned) {
                Some(file_name) => {
                    let content_type = field.content_type().map(str::to_owned);
                    let bytes = field
                        .bytes()
                        .await
                        .map_err(|e| AppError::InvalidMultipart(e.body_text()))?;

                    if file_name.is_empty() && bytes.is_empty() {
                        continue;
                    }

                    form.files.insert(
                        name.clone(),
                        UploadedFile {
                            field_name: name,
                            file_name,
                            content_type,
                            bytes,
                        },
                    );
                }
                None => {
                    let value = field
                        .text()
                        .await
                        .map_err(|e| AppError::InvalidMultipart(e.body_text()))?;
                    form.fields.insert(name, value);
                }
            }
        }

        Ok(form)
    }
}

impl<S> FromRequest<S> for MultipartForm
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| AppError::InvalidMultipart(e.body_text()))?;

        Self::read(multipart).await
    }
}
