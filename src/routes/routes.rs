use crate::openapi::ApiDoc;
use crate::routes::{checkout_route, order_route, payment_route, util_route};
use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub fn main_route(cfg: &mut web::ServiceConfig) {
    let openapi = ApiDoc::openapi();
    cfg.configure(util_route)
        .service(web::scope("/checkout").configure(checkout_route))
        .service(web::scope("/payment").configure(payment_route))
        .service(web::scope("/order").configure(order_route))
        .service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", openapi.clone()));
}
