use actix_web::http::header::ContentType;
use actix_web::{web, HttpRequest, HttpResponse};
use log::info;
use serde_json::Value;

use crate::config::AssetConfig;
use crate::databases::messages::{MessageStore, SortOrder};
use crate::error::ApiError;
use crate::negotiate::{negotiate, ResponseFormat};
use crate::routes::params::{message_params, WRAPPER_KEY};
use crate::views;

const CREATE_FORMATS: [ResponseFormat; 1] = [ResponseFormat::Json];

const INDEX_FORMATS: [ResponseFormat; 2] = [ResponseFormat::Html, ResponseFormat::Json];

const INDEX_ORDER: SortOrder = SortOrder::CreatedAtDesc;

pub async fn create(
    req: HttpRequest,
    body: web::Bytes,
    store: web::Data<dyn MessageStore>,
) -> Result<HttpResponse, ApiError> {
    negotiate(&req, &CREATE_FORMATS)?;

    let body: Value = serde_json::from_slice(&body)
        .map_err(|_| ApiError::MissingParameter(WRAPPER_KEY.to_string()))?;
    let new_message = message_params(&body)?;

    let saved = store.create(new_message).await?;
    info!("Created message {} from {}", saved.id, saved.name);

    Ok(HttpResponse::Created().json(saved))
}

pub async fn index(
    req: HttpRequest,
    store: web::Data<dyn MessageStore>,
    assets: web::Data<AssetConfig>,
) -> Result<HttpResponse, ApiError> {
    let format = negotiate(&req, &INDEX_FORMATS)?;

    let messages = store.list(INDEX_ORDER).await?;

    let response = match format {
        ResponseFormat::Json => HttpResponse::Ok().json(messages),
        ResponseFormat::Html => HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(views::messages::index_page(&messages, &assets)),
    };

    Ok(response)
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(["/messages", "/messages.{format}"])
            .route(web::get().to(index))
            .route(web::post().to(create)),
    );
}
