use actix_web::{HttpResponse, Responder, web};
use serde_json::json;

use crate::error::{CoreError, Issue};

pub mod club;
pub mod db_prefill;
pub mod round;
pub mod validation;

/// Registers `/health` and the `/api` routes. Expects a
/// `Data<SqliteStorage>` on the app.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/health", web::get().to(health))
        .service(
            web::scope("/api/rounds")
                .service(
                    web::resource("")
                        .route(web::get().to(round::http_handlers::list_rounds))
                        .route(web::post().to(round::http_handlers::create_round)),
                )
                .route("/{id}", web::get().to(round::http_handlers::get_round))
                .route(
                    "/{id}/hole/{hole_number}",
                    web::put().to(round::http_handlers::update_hole),
                )
                .route(
                    "/{id}/summary",
                    web::get().to(round::http_handlers::round_summary),
                ),
        )
        .service(
            web::scope("/api/clubs")
                .service(
                    web::resource("")
                        .route(web::get().to(club::http_handlers::list_clubs))
                        .route(web::post().to(club::http_handlers::create_club)),
                )
                .service(
                    web::resource("/{id}")
                        .route(web::put().to(club::http_handlers::update_club))
                        .route(web::delete().to(club::http_handlers::delete_club)),
                ),
        );
}

/// Malformed JSON bodies get the same 400 shape as failed field checks.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        CoreError::InvalidInput(vec![Issue::new("", err.to_string())]).into()
    })
}

async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}
