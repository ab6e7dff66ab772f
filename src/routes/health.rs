use actix_web::{get, web, HttpResponse, Responder};
use log::error;
use serde_json::json;

use crate::databases::messages::MessageStore;

#[get("/health")]
async fn health(store: web::Data<dyn MessageStore>) -> impl Responder {
    match store.count().await {
        Ok(count) => HttpResponse::Ok().json(json!({
            "status": "ok",
            "messages": count
        })),
        Err(e) => {
            error!("Health check failed: {:?}", e);
            HttpResponse::ServiceUnavailable().json(json!({
                "status": "unavailable"
            }))
        }
    }
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(health);
}
