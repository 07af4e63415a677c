//! OpenAPI documentation configuration

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Inventory API",
        version = "0.1.0",
        description = "Item management with images stored in S3",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    tags(
        (name = "Items", description = "Inventory items with optional images")
    )
)]
struct ServiceInfo;

/// Combined OpenAPI documentation; item routes live at the root, so the
/// domain document is merged rather than nested
pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        let mut doc = ServiceInfo::openapi();
        doc.merge(domain_items::ApiDoc::openapi());
        doc
    }
}
