use actix_web::web::{self, Data};
use actix_web::HttpResponse;
use serde_json::{Value, json};

use super::data_service;
use crate::controller::validation::parse_new_club;
use crate::error::CoreError;
use crate::storage::SqliteStorage;

pub async fn list_clubs(storage: Data<SqliteStorage>) -> Result<HttpResponse, CoreError> {
    let clubs = data_service::list_clubs(storage.get_ref()).await?;
    Ok(HttpResponse::Ok().json(clubs))
}

pub async fn create_club(
    storage: Data<SqliteStorage>,
    body: web::Json<Value>,
) -> Result<HttpResponse, CoreError> {
    let new_club = parse_new_club(&body)?;
    let club = data_service::create_club(storage.get_ref(), &new_club).await?;
    Ok(HttpResponse::Created().json(club))
}

pub async fn update_club(
    storage: Data<SqliteStorage>,
    path: web::Path<i64>,
    body: web::Json<Value>,
) -> Result<HttpResponse, CoreError> {
    let club = parse_new_club(&body)?;
    let club = data_service::update_club(storage.get_ref(), path.into_inner(), &club).await?;
    Ok(HttpResponse::Ok().json(club))
}

pub async fn delete_club(
    storage: Data<SqliteStorage>,
    path: web::Path<i64>,
) -> Result<HttpResponse, CoreError> {
    data_service::delete_club(storage.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({ "success": true })))
}
