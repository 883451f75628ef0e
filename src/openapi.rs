use utoipa::OpenApi;
use utoipauto::utoipauto;

#[utoipauto]
#[derive(OpenApi)]
#[openapi(
    tags(
        (name = "Storefront Checkout REST API", description = "Storefront Checkout API Endpoints")
    ),
)]

pub struct ApiDoc {}
