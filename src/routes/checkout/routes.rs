use actix_web::web;

use super::handlers::place_order;

pub fn checkout_route(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/place").route(web::post().to(place_order)));
}
