//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the catalog API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catalog API",
        version = "0.1.0",
        description = "Products, vehicles and ticket statistics. Every route requires the `Token` header.",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/products", api = domain_products::ApiDoc),
        (path = "/vehicles", api = domain_vehicles::ApiDoc),
        (path = "/tickets", api = domain_tickets::ApiDoc)
    ),
    tags(
        (name = "Products", description = "Product catalog endpoints"),
        (name = "Vehicles", description = "Vehicle catalog endpoints"),
        (name = "Tickets", description = "Ticket statistics")
    )
)]
pub struct ApiDoc;
