use utoipa::OpenApi;

/// Root OpenAPI document; the domain docs are nested under their mount
/// points.
#[derive(OpenApi)]
#[openapi(info(
    title = "lendit API",
    description = "Peer-to-peer item lending: users, items, and the booking lifecycle"
))]
struct RootDoc;

pub fn build() -> utoipa::openapi::OpenApi {
    RootDoc::openapi()
        .nest("/users", domain_users::ApiDoc::openapi())
        .nest("/items", domain_items::ApiDoc::openapi())
        .nest("/bookings", domain_bookings::ApiDoc::openapi())
}
