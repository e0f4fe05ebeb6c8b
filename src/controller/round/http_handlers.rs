use actix_web::web::{self, Data};
use actix_web::HttpResponse;
use serde_json::Value;

use super::data_service;
use crate::controller::validation::{parse_hole_payload, parse_new_round};
use crate::error::CoreError;
use crate::storage::SqliteStorage;

pub async fn list_rounds(storage: Data<SqliteStorage>) -> Result<HttpResponse, CoreError> {
    let rounds = data_service::list_rounds(storage.get_ref()).await?;
    Ok(HttpResponse::Ok().json(rounds))
}

pub async fn create_round(
    storage: Data<SqliteStorage>,
    body: web::Json<Value>,
) -> Result<HttpResponse, CoreError> {
    let new_round = parse_new_round(&body)?;
    let round = data_service::create_round(storage.get_ref(), &new_round).await?;
    Ok(HttpResponse::Created().json(round))
}

pub async fn get_round(
    storage: Data<SqliteStorage>,
    path: web::Path<i64>,
) -> Result<HttpResponse, CoreError> {
    let round = data_service::get_round(storage.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(round))
}

pub async fn update_hole(
    storage: Data<SqliteStorage>,
    path: web::Path<(i64, i64)>,
    body: web::Json<Value>,
) -> Result<HttpResponse, CoreError> {
    let (round_id, hole_number) = path.into_inner();
    let payload = parse_hole_payload(&body)?;
    let round =
        data_service::update_hole(storage.get_ref(), round_id, hole_number, &payload).await?;
    Ok(HttpResponse::Ok().json(round))
}

pub async fn round_summary(
    storage: Data<SqliteStorage>,
    path: web::Path<i64>,
) -> Result<HttpResponse, CoreError> {
    let summary = data_service::summarize_round(storage.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(summary))
}
