use actix_web::web;

use super::handlers::{cancel_order, fetch_order, list_orders};

pub fn order_route(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/fetch/{order_id}").route(web::get().to(fetch_order)));
    cfg.service(web::resource("/list/{user_id}").route(web::get().to(list_orders)));
    cfg.service(web::resource("/cancel").route(web::post().to(cancel_order)));
}
