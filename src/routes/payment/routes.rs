use actix_web::web;

use super::handlers::payment_return;

pub fn payment_route(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/return").route(web::get().to(payment_return)));
}
