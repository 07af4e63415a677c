//! Request bodies for create and update.
//!
//! Both endpoints take `multipart/form-data` with text fields `name`,
//! `description`, `price` and an optional file field `image`. A JSON body with
//! the same text fields is accepted too.

use axum::{
    Json,
    extract::{FromRequest, Request},
    http::header,
};
use axum_helpers::{AppError, MultipartForm};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::{ItemError, ItemResult};
use crate::models::{CreateItem, UpdateItem};
use crate::storage::ImageUpload;

/// Form field carrying the image file
pub const IMAGE_FIELD: &str = "image";

/// Loosely typed item fields as they arrive from the client
#[derive(Debug, Default)]
pub struct ItemForm {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image: Option<ImageUpload>,
}

/// OpenAPI shape of the multipart body
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct ItemMultipart {
    /// Required on create
    name: Option<String>,
    description: Option<String>,
    /// Decimal number; an empty value means unset
    price: Option<String>,
    #[schema(value_type = Option<String>, format = Binary)]
    image: Option<Vec<u8>>,
}

#[derive(Debug, Deserialize)]
struct ItemJson {
    name: Option<String>,
    description: Option<String>,
    price: Option<f64>,
}

impl ItemForm {
    pub fn from_multipart(mut form: MultipartForm) -> ItemResult<Self> {
        let image = form.take_file(IMAGE_FIELD).map(ImageUpload::from);
        if let Some(unexpected) = form.files.keys().next() {
            return Err(ItemError::Validation(format!(
                "unexpected file field '{unexpected}', only '{IMAGE_FIELD}' is accepted"
            )));
        }

        let price = parse_price(form.text("price"))?;

        Ok(Self {
            name: form.fields.remove("name"),
            description: form.fields.remove("description"),
            price,
            image,
        })
    }

    pub fn into_create(self) -> ItemResult<(CreateItem, Option<ImageUpload>)> {
        let name = self
            .name
            .ok_or_else(|| ItemError::Validation("name: name is required".to_string()))?;

        let input = CreateItem {
            name,
            description: self.description,
            price: self.price,
        };
        Ok((input, self.image))
    }

    pub fn into_update(self) -> (UpdateItem, Option<ImageUpload>) {
        let input = UpdateItem {
            name: self.name,
            description: self.description,
            price: self.price,
        };
        (input, self.image)
    }
}

impl From<ItemJson> for ItemForm {
    fn from(json: ItemJson) -> Self {
        Self {
            name: json.name,
            description: json.description,
            price: json.price,
            image: None,
        }
    }
}

/// Parses a form price; blank means unset
pub fn parse_price(raw: Option<&str>) -> ItemResult<Option<f64>> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    match raw.parse::<f64>() {
        Ok(price) if price.is_finite() => Ok(Some(price)),
        _ => Err(ItemError::Validation(format!(
            "price: '{raw}' is not a valid number"
        ))),
    }
}

fn is_json(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/json"))
}

impl<S> FromRequest<S> for ItemForm
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_json(&req) {
            let Json(body) = Json::<ItemJson>::from_request(req, state)
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()))?;
            return Ok(body.into());
        }

        let form = MultipartForm::from_request(req, state).await?;
        Ok(Self::from_multipart(form)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_helpers::UploadedFile;
    use bytes::Bytes;

    fn multipart(fields: &[(&str, &str)], files: &[(&str, &str)]) -> MultipartForm {
        let mut form = MultipartForm::default();
        for (name, value) in fields {
            form.fields.insert(name.to_string(), value.to_string());
        }
        for (field, file_name) in files {
            form.files.insert(
                field.to_string(),
                UploadedFile {
                    field_name: field.to_string(),
                    file_name: file_name.to_string(),
                    content_type: Some("image/png".to_string()),
                    bytes: Bytes::from_static(b"PNG"),
                },
            );
        }
        form
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price(None).unwrap(), None);
        assert_eq!(parse_price(Some("")).unwrap(), None);
        assert_eq!(parse_price(Some("  ")).unwrap(), None);
        assert_eq!(parse_price(Some("10")).unwrap(), Some(10.0));
        assert_eq!(parse_price(Some(" 2.5 ")).unwrap(), Some(2.5));
        assert!(matches!(
            parse_price(Some("ten")),
            Err(ItemError::Validation(_))
        ));
        assert!(parse_price(Some("NaN")).is_err());
        assert!(parse_price(Some("inf")).is_err());
    }

    #[test]
    fn test_from_multipart_collects_fields_and_image() {
        let form = ItemForm::from_multipart(multipart(
            &[("name", "Pen"), ("description", "Blue ink"), ("price", "10")],
            &[("image", "photo.png")],
        ))
        .unwrap();

        assert_eq!(form.name.as_deref(), Some("Pen"));
        assert_eq!(form.description.as_deref(), Some("Blue ink"));
        assert_eq!(form.price, Some(10.0));

        let image = form.image.unwrap();
        assert_eq!(image.field_name, "image");
        assert_eq!(image.file_name, "photo.png");
    }

    #[test]
    fn test_from_multipart_rejects_other_file_fields() {
        let result = ItemForm::from_multipart(multipart(
            &[("name", "Pen")],
            &[("avatar", "me.png")],
        ));
        assert!(matches!(result, Err(ItemError::Validation(_))));
    }

    #[test]
    fn test_into_create_requires_name() {
        let result = ItemForm::default().into_create();
        assert!(matches!(result, Err(ItemError::Validation(_))));
    }

    #[test]
    fn test_into_update_keeps_omitted_fields_unset() {
        let form = ItemForm {
            price: Some(3.0),
            ..Default::default()
        };
        let (input, image) = form.into_update();
        assert_eq!(
            input,
            UpdateItem {
                price: Some(3.0),
                ..Default::default()
            }
        );
        assert!(image.is_none());
    }
}
