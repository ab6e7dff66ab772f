use actix_web::web;

pub mod assets;
pub mod health;
pub mod messages;
pub mod params;

pub fn init(cfg: &mut web::ServiceConfig) {
    messages::init(cfg);
    health::init(cfg);
}
