use crate::pairing::index::pairing_routes;
use actix_web::web;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(pairing_routes);
}
